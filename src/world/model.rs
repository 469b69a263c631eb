/// Longest room name kept by [`create_room`], in characters.
pub const MAX_NAME_LEN: usize = 49;

/// Deepest root-to-leaf path, in rooms, a loaded map may have.
pub const MAX_DEPTH: usize = 256;

/// Which link of a room to follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn label(self) -> &'static str {
        match self {
            Direction::Left => "Left",
            Direction::Right => "Right",
        }
    }
}

/// A node of the mansion. Children are owned exclusively by their parent,
/// so the links always form a strict tree.
#[derive(Debug)]
pub struct Room {
    pub name: String,
    pub left: Option<Box<Room>>,
    pub right: Option<Box<Room>>,
    pub clue: Option<String>,
}

/// Allocates a room with no links. Names longer than [`MAX_NAME_LEN`]
/// characters are truncated.
pub fn create_room(name: &str) -> Box<Room> {
    Box::new(Room {
        name: name.chars().take(MAX_NAME_LEN).collect(),
        left: None,
        right: None,
        clue: None,
    })
}

impl Room {
    /// A room with neither link ends the walk.
    pub fn is_terminal(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub fn child(&self, direction: Direction) -> Option<&Room> {
        match direction {
            Direction::Left => self.left.as_deref(),
            Direction::Right => self.right.as_deref(),
        }
    }

    /// Follows `path` link by link from this room.
    pub fn follow(&self, path: &[Direction]) -> Option<&Room> {
        path.iter().try_fold(self, |room, &direction| room.child(direction))
    }

    /// Number of rooms in this subtree, this one included.
    pub fn count(&self) -> usize {
        1 + self.left.as_ref().map_or(0, |r| r.count())
            + self.right.as_ref().map_or(0, |r| r.count())
    }

    /// Pre-order listing of every room in this subtree.
    pub fn rooms(&self) -> Vec<&Room> {
        let mut found = Vec::new();
        let mut stack = vec![self];
        while let Some(room) = stack.pop() {
            found.push(room);
            if let Some(right) = room.right.as_deref() {
                stack.push(right);
            }
            if let Some(left) = room.left.as_deref() {
                stack.push(left);
            }
        }
        found
    }
}

/// The single-character commands accepted at the direction prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub left: char,
    pub right: char,
}

impl Default for Controls {
    fn default() -> Self {
        Controls {
            left: 'e',
            right: 'd',
        }
    }
}

impl Controls {
    pub fn key(&self, direction: Direction) -> char {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    /// Case-sensitive lookup of a command character.
    pub fn direction_of(&self, key: char) -> Option<Direction> {
        if key == self.left {
            Some(Direction::Left)
        } else if key == self.right {
            Some(Direction::Right)
        } else {
            None
        }
    }
}

pub struct Suspect {
    pub name: String,
    pub clues: Vec<String>,
}

/// A complete map: the room tree plus everything the session needs around it.
pub struct Mansion {
    pub name: String,
    pub root: Box<Room>,
    pub controls: Controls,
    pub suspects: Vec<Suspect>,
}
