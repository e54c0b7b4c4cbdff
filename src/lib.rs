#![allow(clippy::module_inception)]

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod repl;

/// Byte offset into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    /// Offsets past `u32::MAX` (sources over 4 GiB) are clamped to `u32::MAX`.
    pub fn new(start: usize, end: usize) -> Self {
        Span {
            start: Position(u32::try_from(start).unwrap_or(u32::MAX)),
            end: Position(u32::try_from(end).unwrap_or(u32::MAX)),
        }
    }

    /// Span covering both `self` and `other`.
    pub fn to(&self, other: &Span) -> Span {
        Span {
            start: self.start,
            end: other.end,
        }
    }
}

/// Finds the line containing `position`.
///
/// Returns the 1-based line number, the line text (without its line terminator) and the
/// column of `position` within that line. Offsets at the very end of the source map to the
/// last line.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let text = line.trim_end_matches(['\n', '\r']);
            return Some((line_number, text.to_string(), pos - start));
        }

        start = end;
        line_number += 1;
    }

    // End of input: point just past the last line
    let last = source.rsplit('\n').next().unwrap_or("");
    if source.is_empty() || source.ends_with('\n') {
        Some((line_number, String::new(), 0))
    } else {
        Some((line_number - 1, last.to_string(), last.len()))
    }
}
