mod builder;
mod loader;
mod model;
mod teardown;
mod validator;

pub use builder::build_mansion;
pub use loader::{MapError, load_mansion_from_file, load_mansion_from_str};

// Minimal, intentional surface area: re-export only what the session/engine uses.
pub use model::{
    Controls, Direction, MAX_DEPTH, MAX_NAME_LEN, Mansion, Room, Suspect, create_room,
};
pub use teardown::{release, release_with};
pub use validator::ValidationError;
