//! Parser error collection.
//!
//! Wraps `quick-xml` event parsing so that syntax problems are captured as
//! data instead of escaping as control flow. A malformed document therefore
//! never aborts the scan of other documents: the caller receives whatever
//! problems the parser reported and moves on to the next file.

use quick_xml::events::Event;
use quick_xml::Reader;

/// One parser-reported syntax problem inside a single document.
///
/// Line and column are 1-based. Problems are scoped to one parse attempt and
/// kept in parser emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxProblem {
    pub line: u64,
    pub column: u64,
    pub message: String,
}

/// Collects syntax problems from one document at a time.
///
/// The underlying parser treats well-formedness violations as fatal and its
/// state after an error is unspecified, so one parse attempt yields at most
/// one parser-reported problem. The collector additionally guards the case
/// where a parse completes without reporting anything yet also produced no
/// document root: an empty problem list must only ever mean "well-formed".
#[derive(Debug, Default)]
pub struct SyntaxErrorCollector;

impl SyntaxErrorCollector {
    pub fn new() -> Self {
        Self
    }

    /// Parse `text` and return every collected syntax problem.
    ///
    /// An empty result means the document is well-formed.
    pub fn collect(&self, text: &str) -> Vec<SyntaxProblem> {
        let mut reader = Reader::from_str(text);
        let mut problems = Vec::new();
        let mut saw_root = false;

        loop {
            match reader.read_event() {
                Ok(Event::Start(_)) | Ok(Event::Empty(_)) => saw_root = true,
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => {
                    let (line, column) = line_column_at(text, reader.error_position() as usize);
                    problems.push(SyntaxProblem {
                        line,
                        column,
                        message: e.to_string(),
                    });
                    break;
                }
            }
        }

        // A parse that reported nothing but never saw a root element did not
        // produce a valid document and must not count as success.
        if problems.is_empty() && !saw_root {
            problems.push(SyntaxProblem {
                line: 1,
                column: 1,
                message: "no root element found in document".to_string(),
            });
        }

        problems
    }
}

/// Convert a byte offset into 1-based line and column numbers.
///
/// Columns count characters, not bytes. Offsets past the end of the text
/// resolve to the position after the last character.
fn line_column_at(text: &str, byte_offset: usize) -> (u64, u64) {
    let mut line = 1;
    let mut column = 1;
    for (idx, ch) in text.char_indices() {
        if idx >= byte_offset {
            break;
        }
        if ch == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }
    (line, column)
}
