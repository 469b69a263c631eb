use crate::clues::{ClueTree, SuspectTable};
use crate::engine::Output;
use crate::world::{Room, Suspect};

/// What the detective has gathered so far during a walk.
#[derive(Default)]
pub struct Journal {
    clues: ClueTree,
    suspects: SuspectTable,
}

impl Journal {
    pub fn new(suspects: &[Suspect]) -> Self {
        let mut table = SuspectTable::new();
        for suspect in suspects {
            for clue in &suspect.clues {
                table.link(clue, &suspect.name);
            }
        }
        Journal {
            clues: ClueTree::new(),
            suspects: table,
        }
    }

    pub fn clues(&self) -> &ClueTree {
        &self.clues
    }

    pub fn suspects(&self) -> &SuspectTable {
        &self.suspects
    }

    /// Picks up the room's clue, announcing it only the first time.
    pub fn record(&mut self, room: &Room, out: &mut Output) {
        let Some(clue) = room.clue.as_deref() else {
            return;
        };

        if self.clues.contains(clue) {
            return;
        }

        self.clues.insert(clue);
        out.say(format!("Clue found: {}", clue));
        tracing::debug!(room = %room.name, clue, "clue collected");
    }

    /// End-of-walk review; silent when nothing was collected.
    pub fn summarize(&self, out: &mut Output) {
        if self.clues.is_empty() {
            return;
        }

        tracing::debug!(
            clues = self.clues.len(),
            depth = self.clues.depth(),
            "reviewing collected clues"
        );

        out.event("Collected clues:");
        for clue in self.clues.in_order() {
            match self.suspects.suspect_for(clue) {
                Some(suspect) => out.choice(format!("- {} (points to {})", clue, suspect)),
                None => out.choice(format!("- {}", clue)),
            }
        }

        let associations = self.suspects.associations();
        if !associations.is_empty() {
            out.event("Associations:");
            for (suspect, clues) in associations {
                out.choice(format!("- {}: {}", suspect, clues.join(", ")));
            }
        }

        match self.suspects.most_likely(self.clues.in_order()) {
            Some((name, 1)) => out.say(format!("Most likely suspect: {} (1 clue).", name)),
            Some((name, count)) => {
                out.say(format!("Most likely suspect: {} ({} clues).", name, count))
            }
            None => out.say("No suspect stands out yet."),
        }
    }
}
