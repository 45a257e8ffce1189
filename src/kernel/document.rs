//! Read-only block view over a document.
//!
//! - `Block`: one line without its terminator, plus its absolute char offset.
//! - `Document`: block provider; the kernel only reads from it.
//! - `TextDocument`: default rope-backed implementation.

use ropey::{Rope, RopeSlice};
use std::borrow::Cow;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block<'a> {
    pub index: usize,
    /// Absolute char offset of the first char of the block.
    pub position: usize,
    pub text: Cow<'a, str>,
}

pub trait Document {
    fn block_count(&self) -> usize;

    fn block(&self, index: usize) -> Option<Block<'_>>;

    fn len_chars(&self) -> usize;

    /// Blocks in document order.
    fn blocks(&self) -> Blocks<'_, Self> {
        Blocks {
            doc: self,
            next: 0,
        }
    }
}

pub struct Blocks<'a, D: ?Sized> {
    doc: &'a D,
    next: usize,
}

impl<'a, D: Document + ?Sized> Iterator for Blocks<'a, D> {
    type Item = Block<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let block = self.doc.block(self.next)?;
        self.next += 1;
        Some(block)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.doc.block_count().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl Document for Rope {
    fn block_count(&self) -> usize {
        self.len_lines()
    }

    fn block(&self, index: usize) -> Option<Block<'_>> {
        if index >= self.len_lines() {
            return None;
        }
        Some(Block {
            index,
            position: self.line_to_char(index),
            text: line_text(self.line(index)),
        })
    }

    fn len_chars(&self) -> usize {
        Rope::len_chars(self)
    }
}

fn line_text(line: RopeSlice<'_>) -> Cow<'_, str> {
    match line.as_str() {
        Some(text) => Cow::Borrowed(trim_line_break(text)),
        None => {
            let owned = line.to_string();
            let trimmed = trim_line_break(&owned).len();
            let mut owned = owned;
            owned.truncate(trimmed);
            Cow::Owned(owned)
        }
    }
}

fn trim_line_break(text: &str) -> &str {
    if let Some(stripped) = text.strip_suffix("\r\n") {
        return stripped;
    }
    match text.chars().last() {
        Some('\n' | '\r' | '\u{000B}' | '\u{000C}' | '\u{0085}' | '\u{2028}' | '\u{2029}') => {
            let mut chars = text.chars();
            chars.next_back();
            chars.as_str()
        }
        _ => text,
    }
}

/// Rope-backed document owned by a single search controller.
#[derive(Debug, Clone, Default)]
pub struct TextDocument {
    rope: Rope,
}

impl TextDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    pub fn set_text(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
    }

    /// Block index containing `char_idx`; clamps past-the-end offsets.
    pub fn line_of_char(&self, char_idx: usize) -> usize {
        self.rope.char_to_line(char_idx.min(self.rope.len_chars()))
    }
}

impl From<&str> for TextDocument {
    fn from(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }
}

impl Document for TextDocument {
    fn block_count(&self) -> usize {
        self.rope.block_count()
    }

    fn block(&self, index: usize) -> Option<Block<'_>> {
        self.rope.block(index)
    }

    fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }
}
