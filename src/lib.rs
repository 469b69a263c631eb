pub mod clues;
pub mod engine;
pub mod world;

use std::io::{self, BufRead, Write};

use clues::Journal;
use engine::{Output, WalkOutcome, WalkSummary, explore, flush_output};
use world::Mansion;

pub use world::{MapError, build_mansion, load_mansion_from_file, load_mansion_from_str};

/// One session over a mansion: the map, plus the clues gathered while walking it.
pub struct Expedition {
    pub mansion: Mansion,
    pub journal: Journal,
}

impl Expedition {
    pub fn new(mansion: Mansion) -> Self {
        let journal = Journal::new(&mansion.suspects);
        Expedition { mansion, journal }
    }

    /// Prints the banner, runs the walk over `input`/`output`, then the clue review.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> io::Result<WalkSummary> {
        let Expedition { mansion, journal } = self;

        let mut out = Output::new();
        out.title(format!("--- Detective Quest: exploring the {} ---", mansion.name));
        flush_output(output, &mut out)?;

        let summary = explore(
            &mansion.root,
            &mansion.controls,
            input,
            output,
            |room, out| journal.record(room, out),
        )?;

        // the review only follows a walk that reached a dead end
        if summary.outcome == WalkOutcome::DeadEnd {
            journal.summarize(&mut out);
            flush_output(output, &mut out)?;
        }

        Ok(summary)
    }

    /// Consumes the session and frees every room. Returns how many were freed.
    pub fn teardown(self) -> usize {
        world::release(self.mansion.root)
    }
}
