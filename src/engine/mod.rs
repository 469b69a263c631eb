mod explore;
mod input;
mod output;
mod render;
mod walk;

pub use explore::{WalkOutcome, WalkSummary, explore};
pub use input::{Token, parse_token, read_token};
pub use output::{Output, OutputBlock};
pub use render::flush_output;
pub use walk::{Choice, Step, Walk, WalkState, choices_from, present_choices};
