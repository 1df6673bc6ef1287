//! Structural formatter
//!
//! Re-derives typed blocks from assembled (or raw) letter text so renderers
//! never work from raw strings. Classification follows this order (important
//! for correctness):
//! 1. Blank lines (explicit line-break blocks, preserved for fidelity)
//! 2. The action-point table caption, then checkbox rows while in table mode
//! 3. Numbered headings (`4.1 Our charges`) and the standalone heading strings
//! 4. Em-dash bullets, with `(see section ...)` cross-reference spans
//! 5. Paragraphs, one block per source line so edits round-trip stably
//!
//! Table boundaries are tracked with an explicit three-state machine rather
//! than flags re-derived per line. The "Provide the following documents" row
//! is a named special case: the next blank-line-delimited group of non-blank
//! lines continues that row's left column instead of starting new blocks.
//! End of input always closes an open table.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Numbered heading: `1 Contact details`, `4.1 Our charges`, ...
static HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+(\.\d+)*\s+\S").expect("heading pattern is valid"));

/// Cross-reference parenthetical inside a bullet.
static CROSS_REF_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\((see section [^)]*)\)").expect("cross-ref pattern is valid"));

/// Headings that carry no section number.
const STANDALONE_HEADINGS: &[&str] = &["Next steps", "Electronic signatures"];

/// The exact two-column caption that starts table mode.
pub const TABLE_CAPTION: &str = "Action required by you | Additional information";

/// Left-column prefix of the row whose description lines follow below the
/// table body. Keyed off this specific phrasing on purpose; the general
/// continuation case is ambiguous.
const CONTINUATION_TRIGGER: &str = "Provide the following documents";

/// A classified unit of rendered text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Block {
    Heading {
        text: String,
    },
    BulletItem {
        text: String,
        /// De-emphasized `see section ...` span, when the bullet has one.
        /// The span is also present in `text`; renderers locate it there.
        cross_ref: Option<String>,
    },
    TableHeader,
    TableRow {
        left: String,
        right: String,
    },
    Paragraph {
        text: String,
    },
    LineBreak,
}

/// What a single line looks like, before table-state context is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineClass {
    Blank,
    TableCaption,
    Checkbox,
    Heading,
    Bullet,
    Text,
}

fn classify(trimmed: &str) -> LineClass {
    if trimmed.is_empty() {
        LineClass::Blank
    } else if trimmed == TABLE_CAPTION {
        LineClass::TableCaption
    } else if trimmed.starts_with('☐') {
        LineClass::Checkbox
    } else if HEADING_RE.is_match(trimmed) || STANDALONE_HEADINGS.contains(&trimmed) {
        LineClass::Heading
    } else if trimmed.starts_with('—') {
        LineClass::Bullet
    } else {
        LineClass::Text
    }
}

/// Table boundary state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TableState {
    OutsideTable,
    InTable,
    /// The continuation row has been seen; `consumed` flips once at least one
    /// description line has been appended to it.
    ClosingRow { consumed: bool },
}

/// Derive the ordered block sequence for a text span.
pub fn to_blocks(text: &str) -> Vec<Block> {
    let mut blocks: Vec<Block> = Vec::new();
    let mut state = TableState::OutsideTable;
    // Index of the most recent TableRow, for row continuation.
    let mut last_row: Option<usize> = None;

    for line in text.lines() {
        let trimmed = line.trim();
        let class = classify(trimmed);

        match state {
            TableState::OutsideTable => match class {
                LineClass::Blank => blocks.push(Block::LineBreak),
                LineClass::TableCaption => {
                    blocks.push(Block::TableHeader);
                    state = TableState::InTable;
                }
                _ => blocks.push(plain_block(trimmed, class)),
            },
            TableState::InTable => match class {
                LineClass::Checkbox => {
                    let (row, continues) = checkbox_row(trimmed);
                    last_row = Some(blocks.len());
                    blocks.push(row);
                    if continues {
                        state = TableState::ClosingRow { consumed: false };
                    }
                }
                // Blank lines do not terminate the table by themselves.
                LineClass::Blank => blocks.push(Block::LineBreak),
                LineClass::TableCaption => blocks.push(Block::TableHeader),
                _ => {
                    state = TableState::OutsideTable;
                    blocks.push(plain_block(trimmed, class));
                }
            },
            TableState::ClosingRow { consumed } => match class {
                LineClass::Blank => {
                    blocks.push(Block::LineBreak);
                    if consumed {
                        state = TableState::OutsideTable;
                    }
                }
                LineClass::Checkbox => {
                    let (row, continues) = checkbox_row(trimmed);
                    last_row = Some(blocks.len());
                    blocks.push(row);
                    state = if continues {
                        TableState::ClosingRow { consumed: false }
                    } else {
                        TableState::InTable
                    };
                }
                LineClass::Text => {
                    // Continuation: the line describes a document/information
                    // item and belongs to the trigger row's left column.
                    if let Some(idx) = last_row {
                        if let Block::TableRow { left, .. } = &mut blocks[idx] {
                            left.push('\n');
                            left.push_str(trimmed);
                        }
                    }
                    state = TableState::ClosingRow { consumed: true };
                }
                LineClass::TableCaption => {
                    blocks.push(Block::TableHeader);
                    state = TableState::InTable;
                }
                _ => {
                    state = TableState::OutsideTable;
                    blocks.push(plain_block(trimmed, class));
                }
            },
        }
    }

    // End of input closes any open table implicitly: rows are emitted
    // eagerly, so nothing dangles.
    blocks
}

fn plain_block(trimmed: &str, class: LineClass) -> Block {
    match class {
        LineClass::Heading => Block::Heading {
            text: trimmed.to_string(),
        },
        LineClass::Bullet => bullet_block(trimmed),
        // A checkbox line outside table mode has no table to belong to; it
        // stays a paragraph.
        _ => Block::Paragraph {
            text: trimmed.to_string(),
        },
    }
}

fn bullet_block(trimmed: &str) -> Block {
    let body = trimmed.trim_start_matches('—').trim_start().to_string();
    let cross_ref = CROSS_REF_RE
        .captures(&body)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string());
    Block::BulletItem {
        text: body,
        cross_ref,
    }
}

/// Parse a checkbox line into a row; reports whether it is the continuation
/// trigger row.
fn checkbox_row(trimmed: &str) -> (Block, bool) {
    let body = trimmed.trim_start_matches('☐').trim_start();
    let (left, right) = match body.split_once('|') {
        Some((l, r)) => (l.trim().to_string(), r.trim().to_string()),
        None => (body.trim().to_string(), String::new()),
    };
    let continues = left.starts_with(CONTINUATION_TRIGGER);
    (Block::TableRow { left, right }, continues)
}

/// Derive the index ranges of contiguous table groups (header plus following
/// rows). Grouping is a rendering concern computed from the sequence, never
/// stored on blocks.
pub fn group_tables(blocks: &[Block]) -> Vec<std::ops::Range<usize>> {
    let mut groups = Vec::new();
    let mut start: Option<usize> = None;
    for (i, block) in blocks.iter().enumerate() {
        let is_table = matches!(block, Block::TableHeader | Block::TableRow { .. });
        match (is_table, start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                groups.push(s..i);
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        groups.push(s..blocks.len());
    }
    groups
}
