mod journal;
mod suspects;
mod tree;

pub use journal::Journal;
pub use suspects::{DEFAULT_BUCKETS, SuspectTable};
pub use tree::ClueTree;
