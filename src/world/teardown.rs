use super::model::Room;

/// Releases every room of the tree and returns how many were released.
pub fn release(root: Box<Room>) -> usize {
    let mut released = 0usize;
    release_with(root, &mut |_| released += 1);
    tracing::debug!(released, "room tree released");
    released
}

/// Post-order release: left subtree, right subtree, then the room itself.
/// `visit` sees each room's name right before the room is freed.
pub fn release_with<F: FnMut(&str)>(room: Box<Room>, visit: &mut F) {
    let Room {
        name, left, right, ..
    } = *room;

    if let Some(left) = left {
        release_with(left, visit);
    }
    if let Some(right) = right {
        release_with(right, visit);
    }

    visit(&name);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{build_mansion, create_room};

    fn released_order(root: Box<Room>) -> Vec<String> {
        let mut order = Vec::new();
        release_with(root, &mut |name| order.push(name.to_string()));
        order
    }

    #[test]
    fn single_room() {
        assert_eq!(released_order(create_room("Sótão")), vec!["Sótão"]);
        assert_eq!(release(create_room("Sótão")), 1);
    }

    #[test]
    fn mansion_is_released_post_order_exactly_once() {
        let mansion = build_mansion();
        let total = mansion.root.count();
        let order = released_order(mansion.root);

        assert_eq!(order.len(), total);
        assert_eq!(
            order,
            vec![
                "Cozinha",
                "Jardim",
                "Sala de Estar",
                "Quarto de Hóspedes",
                "Despensa",
                "Escritório",
                "Biblioteca",
                "Corredor Principal",
                "Hall de Entrada",
            ]
        );
    }

    fn chain(len: usize, leftward: bool) -> Box<Room> {
        let mut room = create_room(&format!("room {}", len - 1));
        for i in (0..len - 1).rev() {
            let mut parent = create_room(&format!("room {i}"));
            if leftward {
                parent.left = Some(room);
            } else {
                parent.right = Some(room);
            }
            room = parent;
        }
        room
    }

    #[test]
    fn lopsided_chains_release_deepest_first() {
        for leftward in [true, false] {
            let order = released_order(chain(6, leftward));
            let expected: Vec<String> = (0..6).rev().map(|i| format!("room {i}")).collect();
            assert_eq!(order, expected);
        }
        assert_eq!(release(chain(50, true)), 50);
    }
}
