use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use super::model::{Controls, Mansion, Room, Suspect, create_room};
use super::validator::{ValidationError, validate_map};

////////////////////
/// TOML STRUCTS ///
////////////////////

#[derive(Deserialize)]
pub(super) struct MapFile {
    pub(super) mansion: MansionHeader,
    #[serde(default)]
    pub(super) controls: Option<ControlsConfig>,
    #[serde(default)]
    pub(super) room: Vec<RoomConfig>, // [[room]] blocks
    #[serde(default)]
    pub(super) suspect: Vec<SuspectConfig>, // [[suspect]] blocks
}

#[derive(Deserialize)]
pub(super) struct MansionHeader {
    #[serde(default = "default_mansion_name")]
    pub(super) name: String,
    pub(super) root: String,
}

#[derive(Deserialize)]
pub(super) struct ControlsConfig {
    #[serde(default = "default_left_key")]
    pub(super) left: String,
    #[serde(default = "default_right_key")]
    pub(super) right: String,
}

#[derive(Deserialize)]
pub(super) struct RoomConfig {
    pub(super) id: String,
    pub(super) name: String,

    #[serde(default)]
    pub(super) left: Option<String>,

    #[serde(default)]
    pub(super) right: Option<String>,

    #[serde(default)]
    pub(super) clue: Option<String>,
}

#[derive(Deserialize)]
pub(super) struct SuspectConfig {
    pub(super) name: String,
    #[serde(default)]
    pub(super) clues: Vec<String>,
}

fn default_mansion_name() -> String {
    "Mansão".to_string()
}

fn default_left_key() -> String {
    "e".to_string()
}

fn default_right_key() -> String {
    "d".to_string()
}

#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("could not read map file: {0}")]
    Io(#[from] io::Error),

    #[error("could not parse map file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid map: {}", join_problems(.0))]
    Invalid(Vec<ValidationError>),
}

fn join_problems(problems: &[ValidationError]) -> String {
    problems
        .iter()
        .map(|p| p.message.as_str())
        .collect::<Vec<&str>>()
        .join("; ")
}

////////////////////////////
/// TOML LOADER FUNCTIONS ///
////////////////////////////

/// Public API: load a mansion from a .toml file on disk.
pub fn load_mansion_from_file(path: &Path) -> Result<Mansion, MapError> {
    let contents = fs::read_to_string(path)?;
    let mansion = load_mansion_from_str(&contents)?;
    tracing::info!(path = %path.display(), rooms = mansion.root.count(), "map file loaded");
    Ok(mansion)
}

/// Public API: load a mansion from TOML text.
pub fn load_mansion_from_str(contents: &str) -> Result<Mansion, MapError> {
    let map_file: MapFile = toml::from_str(contents)?;

    let problems = validate_map(&map_file);
    if !problems.is_empty() {
        return Err(MapError::Invalid(problems));
    }

    let by_id: HashMap<&str, &RoomConfig> =
        map_file.room.iter().map(|r| (r.id.as_str(), r)).collect();

    // Validation guarantees the root exists and the links form a tree.
    let root_cfg = by_id
        .get(map_file.mansion.root.as_str())
        .copied()
        .ok_or_else(|| {
            MapError::Invalid(vec![ValidationError::new(format!(
                "root '{}' not found among rooms",
                map_file.mansion.root
            ))])
        })?;
    let root = assemble(root_cfg, &by_id);

    let controls = match &map_file.controls {
        Some(c) => Controls {
            left: single_key(&c.left).unwrap_or('e'),
            right: single_key(&c.right).unwrap_or('d'),
        },
        None => Controls::default(),
    };

    let suspects = map_file
        .suspect
        .into_iter()
        .map(|s| Suspect {
            name: s.name.trim().to_string(),
            clues: s.clues.iter().map(|c| normalize_text(c)).collect(),
        })
        .collect();

    Ok(Mansion {
        name: map_file.mansion.name.trim().to_string(),
        root,
        controls,
        suspects,
    })
}

/// Builds the owned subtree under `cfg`. Child ids must already be known to
/// exist and never repeat.
fn assemble(cfg: &RoomConfig, by_id: &HashMap<&str, &RoomConfig>) -> Box<Room> {
    let mut room = create_room(cfg.name.trim());
    room.clue = cfg
        .clue
        .as_deref()
        .map(normalize_text)
        .filter(|c| !c.is_empty());

    room.left = cfg
        .left
        .as_deref()
        .and_then(|id| by_id.get(id))
        .map(|child| assemble(child, by_id));
    room.right = cfg
        .right
        .as_deref()
        .and_then(|id| by_id.get(id))
        .map(|child| assemble(child, by_id));

    room
}

/// A command key is exactly one non-whitespace character.
pub(super) fn single_key(raw: &str) -> Option<char> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if !c.is_whitespace() => Some(c),
        _ => None,
    }
}

/// Folds wrapped TOML lines into single spaces and trims the result.
pub(super) fn normalize_text(raw: &str) -> String {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<&str>>()
        .join(" ")
}
