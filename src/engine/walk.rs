use crate::engine::output::Output;
use crate::world::{Controls, Direction, Room};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkState {
    Active,
    Ended,
}

/// A link the player may take from the current room.
#[derive(Debug, Clone, Copy)]
pub struct Choice<'a> {
    pub direction: Direction,
    pub room: &'a Room,
}

#[derive(Debug, Clone, Copy)]
pub enum Step<'a> {
    Entered(&'a Room),
    NoPath,
}

/// The traversal state machine. Holds a non-owning cursor into a tree it
/// never modifies.
pub struct Walk<'a> {
    cursor: &'a Room,
    state: WalkState,
    path: Vec<Direction>,
}

impl<'a> Walk<'a> {
    pub fn new(root: &'a Room) -> Self {
        Walk {
            cursor: root,
            state: WalkState::Active,
            path: Vec::new(),
        }
    }

    pub fn current(&self) -> &'a Room {
        self.cursor
    }

    pub fn state(&self) -> WalkState {
        self.state
    }

    /// Directions taken so far, from the root.
    pub fn path(&self) -> &[Direction] {
        &self.path
    }

    /// Looks at the room under the cursor. A terminal room ends the walk
    /// with a dead-end notice and yields no choices.
    pub fn evaluate(&mut self, out: &mut Output) -> Vec<Choice<'a>> {
        if self.state == WalkState::Ended {
            return Vec::new();
        }

        let choices = choices_from(self.cursor);
        if choices.is_empty() {
            out.event(format!("You reached a dead end: {}!", self.cursor.name));
            out.say("The exploration is over.");
            self.state = WalkState::Ended;
            tracing::info!(room = %self.cursor.name, steps = self.path.len(), "walk ended");
        }
        choices
    }

    /// Moves the cursor along `direction`. An absent link leaves every bit of
    /// state untouched.
    pub fn advance(&mut self, direction: Direction, out: &mut Output) -> Step<'a> {
        if self.state == WalkState::Ended {
            return Step::NoPath;
        }

        match self.cursor.child(direction) {
            Some(next) => {
                self.cursor = next;
                self.path.push(direction);
                out.event(format!("-> You entered the {}.", next.name));
                tracing::debug!(?direction, room = %next.name, "cursor advanced");
                Step::Entered(next)
            }
            None => {
                out.say("There is no path that way. Try again.");
                tracing::warn!(?direction, room = %self.cursor.name, "direction has no link");
                Step::NoPath
            }
        }
    }
}

/// Present links of `room`, left first.
pub fn choices_from(room: &Room) -> Vec<Choice<'_>> {
    [Direction::Left, Direction::Right]
        .into_iter()
        .filter_map(|direction| room.child(direction).map(|room| Choice { direction, room }))
        .collect()
}

/// Lists the available paths and asks for one.
pub fn present_choices(out: &mut Output, choices: &[Choice<'_>], controls: &Controls) {
    out.event("Available paths:");
    for choice in choices {
        out.choice(format!(
            "({}) {} -> Next: {}",
            controls.key(choice.direction),
            choice.direction.label(),
            choice.room.name
        ));
    }

    let keys = choices
        .iter()
        .map(|c| format!("'{}'", controls.key(c.direction)))
        .collect::<Vec<String>>()
        .join(" or ");
    out.prompt(format!("Where do you want to go ({})? ", keys));
}

pub fn invalid_choice_message(controls: &Controls) -> String {
    format!(
        "Invalid choice. Type '{}' for Left or '{}' for Right: ",
        controls.left, controls.right
    )
}
