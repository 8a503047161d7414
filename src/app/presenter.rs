use crate::ladder::LadderPath;
use std::io::{self, Write};

/// Renders the result of one search.
///
/// By default the ladder is shown from `target` back to `start`; `forward`
/// shows it in search order instead.
pub fn present_ladder<W: Write>(
    output: &mut W,
    start: &str,
    target: &str,
    ladder: Option<&LadderPath>,
    forward: bool,
) -> io::Result<()> {
    match ladder {
        Some(path) if forward => {
            writeln!(output, "A ladder from {} to {}:", start, target)?;
            writeln!(output, "{}", path)
        }
        Some(path) => {
            writeln!(output, "A ladder from {} back to {}:", target, start)?;
            writeln!(output, "{}", path.reversed())
        }
        None => writeln!(output, "No word ladder found from {} to {}.", start, target),
    }
}
