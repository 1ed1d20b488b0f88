use super::digits::decimal_value;
use super::types::{InputLine, LineKind, OrderHeader};
use crate::error::TranscodeError;

pub const END_OF_ORDER: &str = "endOfOrder";

/// Split file contents into numbered lines with trailing whitespace removed.
/// `\n`, `\r\n` and a lone `\r` all end a line.
pub fn split_lines(contents: &str) -> Vec<InputLine<'_>> {
    let mut lines = Vec::new();
    let mut rest = contents;

    while !rest.is_empty() {
        let (line, tail) = match rest.find(['\r', '\n']) {
            Some(i) => {
                let skip = if rest[i..].starts_with("\r\n") { 2 } else { 1 };
                (&rest[..i], &rest[i + skip..])
            }
            None => (rest, ""),
        };
        lines.push(InputLine {
            number: lines.len() + 1,
            text: line.trim_end(),
        });
        rest = tail;
    }

    lines
}

/// Check if the trimmed line is the order terminator
pub fn is_terminator(text: &str) -> bool {
    text.trim() == END_OF_ORDER
}

/// Classify one line. Empty lines and malformed headers are fatal.
pub fn classify_line<'a>(line: &InputLine<'a>) -> Result<LineKind<'a>, TranscodeError> {
    let mut rev = line.text.chars().rev();

    let last = rev
        .next()
        .ok_or(TranscodeError::EmptyLine { line: line.number })?;

    if last == ':' {
        let found = rev
            .next()
            .ok_or(TranscodeError::MissingOrderDigit { line: line.number })?;
        let order = decimal_value(found).ok_or(TranscodeError::InvalidOrderDigit {
            line: line.number,
            found,
        })?;
        return Ok(LineKind::Header(OrderHeader { order }));
    }

    Ok(LineKind::Item {
        text: line.text,
        terminates: is_terminator(line.text),
    })
}
