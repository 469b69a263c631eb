use std::collections::{HashMap, HashSet};

use super::loader::{MapFile, single_key};
use super::model::MAX_DEPTH;

#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub(super) fn new(msg: impl Into<String>) -> Self {
        ValidationError {
            message: msg.into(),
        }
    }
}

/// Checks that a parsed map describes a single strict tree and that its
/// controls and suspects are usable. Every problem found is returned.
pub(super) fn validate_map(map: &MapFile) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    if map.room.is_empty() {
        errors.push(ValidationError::new("map has no rooms"));
    }

    // Ids and names
    let mut ids: HashSet<&str> = HashSet::new();
    for room in &map.room {
        if room.id.trim().is_empty() {
            errors.push(ValidationError::new("a room has an empty id"));
        } else if !ids.insert(room.id.as_str()) {
            errors.push(ValidationError::new(format!(
                "duplicate room id '{}'",
                room.id
            )));
        }

        if room.name.trim().is_empty() {
            errors.push(ValidationError::new(format!(
                "room '{}' has an empty name",
                room.id
            )));
        }
    }

    let root = map.mansion.root.as_str();
    if root.trim().is_empty() {
        errors.push(ValidationError::new("mansion.root may not be empty"));
    } else if !ids.contains(root) {
        errors.push(ValidationError::new(format!(
            "root '{}' not found among rooms",
            root
        )));
    }

    // Links: every target exists and has exactly one parent.
    let mut parents: HashMap<&str, Vec<&str>> = HashMap::new();
    for room in &map.room {
        let links = [("left", room.left.as_deref()), ("right", room.right.as_deref())];
        for (side, target) in links {
            let Some(target) = target else { continue };

            if !ids.contains(target) {
                errors.push(ValidationError::new(format!(
                    "room '{}' {} link targets missing room '{}'",
                    room.id, side, target
                )));
                continue;
            }
            if target == room.id {
                errors.push(ValidationError::new(format!(
                    "room '{}' links to itself",
                    room.id
                )));
                continue;
            }
            if target == root {
                errors.push(ValidationError::new(format!(
                    "room '{}' links back to the root '{}'",
                    room.id, root
                )));
                continue;
            }
            parents.entry(target).or_default().push(room.id.as_str());
        }
    }

    let mut shared: Vec<(&str, &Vec<&str>)> = parents
        .iter()
        .filter(|(_, owners)| owners.len() > 1)
        .map(|(id, owners)| (*id, owners))
        .collect();
    shared.sort();
    for (id, owners) in shared {
        errors.push(ValidationError::new(format!(
            "room '{}' is linked from more than one room ({})",
            id,
            owners.join(", ")
        )));
    }

    // Reachability from the root. With single parents and no link back to the
    // root, any cycle is cut off from the root and shows up here.
    if ids.contains(root) {
        let links: HashMap<&str, [Option<&str>; 2]> = map
            .room
            .iter()
            .map(|r| (r.id.as_str(), [r.left.as_deref(), r.right.as_deref()]))
            .collect();

        let mut seen: HashSet<&str> = HashSet::new();
        let mut too_deep: Option<&str> = None;
        let mut stack = vec![(root, 1usize)];
        while let Some((id, depth)) = stack.pop() {
            if !seen.insert(id) {
                continue;
            }
            if depth > MAX_DEPTH && too_deep.is_none() {
                too_deep = Some(id);
            }
            if let Some(children) = links.get(id) {
                stack.extend(children.iter().flatten().map(|&child| (child, depth + 1)));
            }
        }

        // Building, counting and releasing the tree all recurse per level.
        if let Some(id) = too_deep {
            errors.push(ValidationError::new(format!(
                "room '{}' is deeper than the {} levels a map may have",
                id, MAX_DEPTH
            )));
        }

        let mut unreachable: Vec<&str> = ids.difference(&seen).copied().collect();
        unreachable.sort();
        for id in unreachable {
            errors.push(ValidationError::new(format!(
                "room '{}' is not reachable from the root",
                id
            )));
        }
    }

    if let Some(controls) = &map.controls {
        let left = single_key(&controls.left);
        let right = single_key(&controls.right);
        if left.is_none() {
            errors.push(ValidationError::new(format!(
                "controls.left '{}' must be a single non-whitespace character",
                controls.left
            )));
        }
        if right.is_none() {
            errors.push(ValidationError::new(format!(
                "controls.right '{}' must be a single non-whitespace character",
                controls.right
            )));
        }
        if left.is_some() && left == right {
            errors.push(ValidationError::new(
                "controls.left and controls.right must differ",
            ));
        }
    }

    validate_suspects(map, &mut errors);

    errors
}

fn validate_suspects(map: &MapFile, errors: &mut Vec<ValidationError>) {
    let room_clues: HashSet<String> = map
        .room
        .iter()
        .filter_map(|r| r.clue.as_deref())
        .map(super::loader::normalize_text)
        .collect();

    let mut owner_of: HashMap<String, &str> = HashMap::new();

    for suspect in &map.suspect {
        let name = suspect.name.trim();
        if name.is_empty() {
            errors.push(ValidationError::new("a suspect has an empty name"));
            continue;
        }

        for raw in &suspect.clues {
            let clue = super::loader::normalize_text(raw);
            if clue.is_empty() {
                errors.push(ValidationError::new(format!(
                    "suspect '{}' has an empty clue entry",
                    name
                )));
                continue;
            }
            if !room_clues.contains(&clue) {
                errors.push(ValidationError::new(format!(
                    "suspect '{}' clue '{}' is not found in any room",
                    name, clue
                )));
            }
            if let Some(previous) = owner_of.insert(clue.clone(), name) {
                if previous != name {
                    errors.push(ValidationError::new(format!(
                        "clue '{}' points to both '{}' and '{}'",
                        clue, previous, name
                    )));
                }
            }
        }
    }
}
