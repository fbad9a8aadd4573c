//! Minimized gate-list parser.
//!
//! The external minimizer (ABC's `&exorcism`) writes its result as plain
//! text: a fixed preamble, one line per MPMCT gate, and a trailing line.
//! Each gate line starts with a ternary control string over `{0,1,-}`,
//! one character per address bit; `-` marks a bit the gate does not
//! control. The implicit target bit is not part of the string.

use std::fs;
use std::path::Path;

use crate::error::PlaError;
use crate::tally::ControlTally;

/// Number of leading non-gate lines in a minimizer artifact.
///
/// Fixed offset agreed with the external tool, not discovered structure;
/// format drift shows up as a token-shape error below, not a silent
/// misparse.
pub const HEADER_LINES: usize = 11;

/// Number of trailing non-gate lines in a minimizer artifact.
pub const TRAILER_LINES: usize = 1;

/// Read a minimizer-produced gate list and tally it by control count.
pub fn read_exorcised(path: &Path) -> Result<ControlTally, PlaError> {
    let content = fs::read_to_string(path)?;
    parse_exorcised(&content)
}

/// Tally a minimizer-produced gate list by control count.
///
/// Skips [`HEADER_LINES`] leading and [`TRAILER_LINES`] trailing lines,
/// then classifies each remaining line by the number of non-`-` characters
/// in its leading whitespace-delimited token. All tokens must share one
/// length (the circuit's address-bit width); a mismatch, a stray
/// character, or a blank gate line is a [`PlaError::Format`].
///
/// An artifact whose body is empty parses to an empty [`ControlTally`];
/// rejecting it is the resource accountant's job, since only it knows
/// that no estimate is definable.
pub fn parse_exorcised(content: &str) -> Result<ControlTally, PlaError> {
    let lines: Vec<&str> = content.lines().collect();
    let framing = HEADER_LINES + TRAILER_LINES;
    if lines.len() < framing {
        return Err(PlaError::Format(format!(
            "expected at least {framing} lines of header and trailer, got {}",
            lines.len()
        )));
    }

    let body = &lines[HEADER_LINES..lines.len() - TRAILER_LINES];
    let mut tally = ControlTally::default();
    let mut width: Option<usize> = None;

    for (offset, line) in body.iter().enumerate() {
        let line_no = HEADER_LINES + offset + 1;
        let token = line
            .split_whitespace()
            .next()
            .ok_or_else(|| PlaError::Format(format!("line {line_no}: blank gate line")))?;

        let expected = *width.get_or_insert(token.len());
        if token.len() != expected {
            return Err(PlaError::Format(format!(
                "line {line_no}: control string has length {}, expected {expected}",
                token.len()
            )));
        }

        let mut controls = 0u32;
        for ch in token.chars() {
            match ch {
                '0' | '1' => controls += 1,
                '-' => {}
                other => {
                    return Err(PlaError::Format(format!(
                        "line {line_no}: unexpected character {other:?} in control string"
                    )));
                }
            }
        }

        tally.record(controls, expected as u32);
    }

    Ok(tally)
}
