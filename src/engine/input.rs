use std::io::{self, BufRead};

use crate::world::{Controls, Direction};

/// One attempt at the direction prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Direction(Direction),
    Invalid,
    Closed,
}

/// A line is a valid command only if, once surrounding whitespace is
/// dropped, it is exactly one accepted character.
pub fn parse_token(line: &str, controls: &Controls) -> Option<Direction> {
    let mut chars = line.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(key), None) => controls.direction_of(key),
        _ => None,
    }
}

/// Reads one whole line, so offending input is consumed and never re-read.
pub fn read_token<R: BufRead>(input: &mut R, controls: &Controls) -> io::Result<Token> {
    let mut raw: Vec<u8> = Vec::new();
    if input.read_until(b'\n', &mut raw)? == 0 {
        return Ok(Token::Closed);
    }

    let line = String::from_utf8_lossy(&raw);
    Ok(match parse_token(&line, controls) {
        Some(direction) => Token::Direction(direction),
        None => {
            tracing::debug!(input = %line.trim_end(), "rejected direction token");
            Token::Invalid
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn accepts_single_keys_with_surrounding_whitespace() {
        let controls = Controls::default();
        assert_eq!(parse_token("e", &controls), Some(Direction::Left));
        assert_eq!(parse_token("  d \r\n", &controls), Some(Direction::Right));
        assert_eq!(parse_token("\te\n", &controls), Some(Direction::Left));
    }

    #[test]
    fn rejects_everything_else() {
        let controls = Controls::default();
        for line in ["", " ", "\n", "z", "3", "E", "ed", "e d", "left"] {
            assert_eq!(parse_token(line, &controls), None, "{line:?}");
        }
    }

    #[test]
    fn custom_controls() {
        let controls = Controls {
            left: 'l',
            right: 'r',
        };
        assert_eq!(parse_token("r", &controls), Some(Direction::Right));
        assert_eq!(parse_token("e", &controls), None);
    }

    #[test]
    fn reads_one_line_per_attempt() {
        let controls = Controls::default();
        let mut input = Cursor::new(&b"zzz e\n\xff\nd\n"[..]);
        assert_eq!(read_token(&mut input, &controls).unwrap(), Token::Invalid);
        assert_eq!(read_token(&mut input, &controls).unwrap(), Token::Invalid);
        assert_eq!(
            read_token(&mut input, &controls).unwrap(),
            Token::Direction(Direction::Right)
        );
        assert_eq!(read_token(&mut input, &controls).unwrap(), Token::Closed);
    }

    #[test]
    fn last_line_without_newline_still_counts() {
        let controls = Controls::default();
        let mut input = Cursor::new(&b"e"[..]);
        assert_eq!(
            read_token(&mut input, &controls).unwrap(),
            Token::Direction(Direction::Left)
        );
        assert_eq!(read_token(&mut input, &controls).unwrap(), Token::Closed);
    }
}
