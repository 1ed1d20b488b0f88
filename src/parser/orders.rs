use super::types::LineKind;
use std::collections::HashMap;
use std::fmt;

/// Structural problem in an order file. These never change the generated
/// output, they are only reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructureWarning {
    UnclosedOrder { order: u8, opened_at: usize },
    ItemOutsideOrder { line: usize },
    DuplicateOrder { order: u8, first: usize, again: usize },
}

impl fmt::Display for StructureWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureWarning::UnclosedOrder { order, opened_at } => write!(
                f,
                "order_{} opened at line {} is never closed by endOfOrder",
                order, opened_at
            ),
            StructureWarning::ItemOutsideOrder { line } => {
                write!(f, "line {} is not inside any order", line)
            }
            StructureWarning::DuplicateOrder {
                order,
                first,
                again,
            } => write!(
                f,
                "order_{} declared again at line {} (first at line {})",
                order, again, first
            ),
        }
    }
}

/// Incremental structure check, fed one classified line at a time.
#[derive(Debug, Default)]
pub struct StructureScanner {
    open: Option<(u8, usize)>,
    seen: HashMap<u8, usize>,
}

impl StructureScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the warnings raised by this line, if any.
    pub fn observe(&mut self, number: usize, kind: &LineKind<'_>) -> Vec<StructureWarning> {
        let mut warnings = Vec::new();

        match kind {
            LineKind::Header(header) => {
                if let Some((order, opened_at)) = self.open.take() {
                    warnings.push(StructureWarning::UnclosedOrder { order, opened_at });
                }
                if let Some(&first) = self.seen.get(&header.order) {
                    warnings.push(StructureWarning::DuplicateOrder {
                        order: header.order,
                        first,
                        again: number,
                    });
                } else {
                    self.seen.insert(header.order, number);
                }
                self.open = Some((header.order, number));
            }
            LineKind::Item { terminates, .. } => {
                if self.open.is_none() {
                    warnings.push(StructureWarning::ItemOutsideOrder { line: number });
                }
                if *terminates {
                    self.open = None;
                }
            }
        }

        warnings
    }

    /// End of input: an order still open was never terminated.
    pub fn finish(&mut self) -> Option<StructureWarning> {
        self.open
            .take()
            .map(|(order, opened_at)| StructureWarning::UnclosedOrder { order, opened_at })
    }
}

/// Walk classified lines (paired with their 1-based line numbers) and
/// report anything that would produce malformed or clashing declarations.
pub fn scan_structure(lines: &[(usize, LineKind<'_>)]) -> Vec<StructureWarning> {
    let mut scanner = StructureScanner::new();
    let mut warnings: Vec<_> = lines
        .iter()
        .flat_map(|(number, kind)| scanner.observe(*number, kind))
        .collect();
    warnings.extend(scanner.finish());
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::OrderHeader;

    fn header(order: u8) -> LineKind<'static> {
        LineKind::Header(OrderHeader { order })
    }

    fn item(text: &'static str) -> LineKind<'static> {
        LineKind::Item {
            text,
            terminates: text.trim() == "endOfOrder",
        }
    }

    #[test]
    fn well_formed_file_has_no_warnings() {
        let lines = vec![
            (1, header(1)),
            (2, item("foo")),
            (3, item("endOfOrder")),
            (4, header(2)),
            (5, item("endOfOrder")),
        ];
        assert!(scan_structure(&lines).is_empty());
    }

    #[test]
    fn missing_terminator_is_reported_at_next_header_and_eof() {
        let lines = vec![
            (1, header(1)),
            (2, item("foo")),
            (3, header(2)),
            (4, item("bar")),
        ];
        assert_eq!(
            scan_structure(&lines),
            vec![
                StructureWarning::UnclosedOrder {
                    order: 1,
                    opened_at: 1
                },
                StructureWarning::UnclosedOrder {
                    order: 2,
                    opened_at: 3
                },
            ]
        );
    }

    #[test]
    fn stray_items_and_duplicates() {
        let lines = vec![
            (1, item("stray")),
            (2, header(4)),
            (3, item("endOfOrder")),
            (4, item("after")),
            (5, header(4)),
            (6, item("endOfOrder")),
        ];
        let warnings = scan_structure(&lines);
        assert_eq!(warnings.len(), 3);
        assert_eq!(warnings[0], StructureWarning::ItemOutsideOrder { line: 1 });
        assert_eq!(warnings[1], StructureWarning::ItemOutsideOrder { line: 4 });
        assert_eq!(
            warnings[2],
            StructureWarning::DuplicateOrder {
                order: 4,
                first: 2,
                again: 5
            }
        );
        assert_eq!(
            warnings[2].to_string(),
            "order_4 declared again at line 5 (first at line 2)"
        );
    }
}
