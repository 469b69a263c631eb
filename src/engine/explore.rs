use std::io::{self, BufRead, Write};

use crate::engine::input::{Token, read_token};
use crate::engine::output::Output;
use crate::engine::render::flush_output;
use crate::engine::walk::{Step, Walk, WalkState, invalid_choice_message, present_choices};
use crate::world::{Controls, Direction, Room};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkOutcome {
    /// Reached a terminal room.
    DeadEnd,
    /// Input ran out before a terminal room was reached.
    InputClosed,
}

#[derive(Debug, Clone)]
pub struct WalkSummary {
    pub outcome: WalkOutcome,
    /// Names of the rooms entered, root first.
    pub visited: Vec<String>,
    pub path: Vec<Direction>,
    /// Lines rejected at the prompt.
    pub rejected_inputs: usize,
    /// Valid keys that named a missing link.
    pub missed_paths: usize,
}

/// Drives an interactive walk from `root` until a terminal room is reached
/// or `input` runs dry. `on_enter` runs for the root and every room entered.
pub fn explore<'a, R, W, F>(
    root: &'a Room,
    controls: &Controls,
    input: &mut R,
    output: &mut W,
    mut on_enter: F,
) -> io::Result<WalkSummary>
where
    R: BufRead,
    W: Write,
    F: FnMut(&'a Room, &mut Output),
{
    let mut walk = Walk::new(root);
    let mut out = Output::new();
    let mut visited = vec![root.name.clone()];
    let mut rejected_inputs = 0usize;
    let mut missed_paths = 0usize;

    tracing::info!(root = %root.name, "walk started");
    out.say(format!("You are in the {}.", root.name));
    on_enter(root, &mut out);

    let outcome = loop {
        let choices = walk.evaluate(&mut out);
        if walk.state() == WalkState::Ended {
            break WalkOutcome::DeadEnd;
        }

        present_choices(&mut out, &choices, controls);
        flush_output(output, &mut out)?;

        let direction = loop {
            match read_token(input, controls)? {
                Token::Direction(direction) => break Some(direction),
                Token::Invalid => {
                    rejected_inputs += 1;
                    out.prompt(invalid_choice_message(controls));
                    flush_output(output, &mut out)?;
                }
                Token::Closed => break None,
            }
        };

        let Some(direction) = direction else {
            out.event("Input closed; the exploration stops here.");
            tracing::info!(room = %walk.current().name, "input closed during walk");
            break WalkOutcome::InputClosed;
        };

        match walk.advance(direction, &mut out) {
            Step::Entered(room) => {
                visited.push(room.name.clone());
                on_enter(room, &mut out);
            }
            Step::NoPath => missed_paths += 1,
        }
    };

    flush_output(output, &mut out)?;

    Ok(WalkSummary {
        outcome,
        visited,
        path: walk.path().to_vec(),
        rejected_inputs,
        missed_paths,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{build_mansion, create_room};
    use std::io::Cursor;

    fn run(root: &Room, script: &str) -> (WalkSummary, String) {
        let mut input = Cursor::new(script.as_bytes());
        let mut output: Vec<u8> = Vec::new();
        let summary = explore(root, &Controls::default(), &mut input, &mut output, |_, _| {})
            .unwrap();
        (summary, String::from_utf8(output).unwrap())
    }

    #[test]
    fn invalid_tokens_reprompt_then_go_left() {
        let mansion = build_mansion();
        let (summary, text) = run(&mansion.root, "z\n3\n \ne\ne\n");

        assert_eq!(summary.rejected_inputs, 3);
        assert_eq!(
            text.matches("Invalid choice. Type 'e' for Left or 'd' for Right: ")
                .count(),
            3
        );
        assert_eq!(summary.visited, vec!["Hall de Entrada", "Sala de Estar", "Cozinha"]);
        assert_eq!(summary.outcome, WalkOutcome::DeadEnd);
    }

    #[test]
    fn terminal_root_reads_nothing() {
        let root = create_room("Despensa");
        let mut input = Cursor::new(&b"e\n"[..]);
        let mut output: Vec<u8> = Vec::new();

        let summary =
            explore(&root, &Controls::default(), &mut input, &mut output, |_, _| {}).unwrap();

        assert_eq!(summary.outcome, WalkOutcome::DeadEnd);
        assert_eq!(input.position(), 0);
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("You reached a dead end: Despensa!"));
        assert!(!text.contains("Where do you want to go"));
    }

    #[test]
    fn missing_link_is_survivable() {
        let mut hall = create_room("Hall");
        hall.left = Some(create_room("Sala"));

        let (summary, text) = run(&hall, "d\ne\n");
        assert_eq!(summary.missed_paths, 1);
        assert_eq!(summary.rejected_inputs, 0);
        assert!(text.contains("There is no path that way. Try again."));
        assert_eq!(text.matches("Where do you want to go ('e')? ").count(), 2);
        assert_eq!(summary.visited, vec!["Hall", "Sala"]);
    }

    #[test]
    fn running_out_of_input_ends_the_walk() {
        let mansion = build_mansion();
        let (summary, text) = run(&mansion.root, "d\n");
        assert_eq!(summary.outcome, WalkOutcome::InputClosed);
        assert_eq!(summary.path, vec![Direction::Right]);
        assert!(text.contains("Input closed; the exploration stops here."));
    }

    #[test]
    fn on_enter_sees_every_room_entered() {
        let mansion = build_mansion();
        let mut input = Cursor::new(&b"d\ne\nd\n"[..]);
        let mut output: Vec<u8> = Vec::new();
        let mut seen: Vec<String> = Vec::new();

        explore(
            &mansion.root,
            &mansion.controls,
            &mut input,
            &mut output,
            |room, _| seen.push(room.name.clone()),
        )
        .unwrap();

        assert_eq!(
            seen,
            vec!["Hall de Entrada", "Corredor Principal", "Escritório", "Despensa"]
        );
    }
}
