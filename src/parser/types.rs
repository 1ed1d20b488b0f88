/// One physical line of the order file, trailing whitespace already stripped.
#[derive(Debug, Clone, PartialEq)]
pub struct InputLine<'a> {
    /// 1-based position in the file.
    pub number: usize,
    pub text: &'a str,
}

/// Header that opens an order, e.g. `Order 3:`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderHeader {
    pub order: u8,
}

/// Classification of a single line.
#[derive(Debug, Clone, PartialEq)]
pub enum LineKind<'a> {
    Header(OrderHeader),
    /// A plain item. `terminates` is set when the trimmed text is the
    /// `endOfOrder` marker; the marker is still emitted as an item.
    Item { text: &'a str, terminates: bool },
}
