use std::io::{self, Write};

use crate::engine::output::{Output, OutputBlock};

/// Writes and drains `out`. Prompts are left on the current line.
pub fn flush_output<W: Write>(w: &mut W, out: &mut Output) -> io::Result<()> {
    for block in out.blocks.drain(..) {
        match block {
            OutputBlock::Title(t) => writeln!(w, "\n{}", t)?,
            OutputBlock::Text(line) => writeln!(w, "{}", line)?,
            OutputBlock::Event(ev) => writeln!(w, "\n{}", ev)?, // visual separation before events
            OutputBlock::Choice(c) => writeln!(w, "  {}", c)?,
            OutputBlock::Prompt(p) => write!(w, "{}", p)?,
        }
    }
    w.flush()
}
