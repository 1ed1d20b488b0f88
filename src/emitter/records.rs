use std::fmt;

pub const CONTAINER_PREFIX: &str = "order_";
pub const ELEMENT_TYPE: &str = "const char*";
const INDENT: &str = "    ";

/// One piece of generated source. Rendered and written immediately.
#[derive(Debug, Clone, PartialEq)]
pub enum OutputRecord<'a> {
    /// `const char* order_N[] = {`
    ArrayOpen { order: u8 },
    /// `    "text",` with the text copied verbatim, no escaping.
    QuotedItem { text: &'a str },
    /// `    };` followed by a blank line
    ArrayClose,
}

impl fmt::Display for OutputRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputRecord::ArrayOpen { order } => writeln!(
                f,
                "{} {}{}[] = {{",
                ELEMENT_TYPE, CONTAINER_PREFIX, order
            ),
            OutputRecord::QuotedItem { text } => writeln!(f, "{}\"{}\",", INDENT, text),
            OutputRecord::ArrayClose => writeln!(f, "{}}};\n", INDENT),
        }
    }
}
