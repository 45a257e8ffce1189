//! 模式匹配器
//!
//! - Literal 模式（区分大小写）：memchr memmem Finder
//! - Regex 模式：regex::Regex；不区分大小写的 Literal 也走这里（regex::escape）
//!
//! 所有结果都是 block 内的 char 偏移，匹配互不重叠，按起点升序。

use crate::kernel::services::ports::search::{Result, SearchOptions};
use memchr::memmem::Finder;

/// 编译好的搜索引擎
#[derive(Clone, Debug)]
pub enum Matcher {
    Literal { finder: Finder<'static> },
    Regex { regex: regex::Regex },
}

impl Matcher {
    /// 空 pattern 编译为 `None`（无需搜索）
    pub fn compile(pattern: &str, options: SearchOptions) -> Result<Option<Self>> {
        if pattern.is_empty() {
            return Ok(None);
        }

        if !options.use_regex && options.case_sensitive {
            let finder = Finder::new(pattern.as_bytes()).into_owned();
            return Ok(Some(Self::Literal { finder }));
        }

        let source = if options.use_regex {
            pattern.to_string()
        } else {
            regex::escape(pattern)
        };
        let regex = regex::RegexBuilder::new(&source)
            .case_insensitive(!options.case_sensitive)
            .build()?;
        Ok(Some(Self::Regex { regex }))
    }

    pub fn is_regex(&self) -> bool {
        matches!(self, Self::Regex { .. })
    }

    /// `text` 中所有匹配的 byte 区间
    pub fn find_byte_spans(&self, text: &str) -> Vec<(usize, usize)> {
        match self {
            Self::Literal { finder } => {
                let len = finder.needle().len();
                finder
                    .find_iter(text.as_bytes())
                    .map(|start| (start, start + len))
                    .collect()
            }
            Self::Regex { regex } => regex.find_iter(text).map(|m| (m.start(), m.end())).collect(),
        }
    }

    /// `text` 中所有匹配的 char 区间
    pub fn find_spans(&self, text: &str) -> Vec<(usize, usize)> {
        let mut cursor = CharCursor::new(text);
        self.find_byte_spans(text)
            .into_iter()
            .map(|(start, end)| {
                let start = cursor.advance_to(start);
                let end = cursor.advance_to(end);
                (start, end)
            })
            .collect()
    }
}

/// 增量地把升序的 byte 偏移换算成 char 偏移
struct CharCursor<'a> {
    text: &'a str,
    byte: usize,
    chars: usize,
}

impl<'a> CharCursor<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            byte: 0,
            chars: 0,
        }
    }

    fn advance_to(&mut self, byte: usize) -> usize {
        debug_assert!(byte >= self.byte);
        self.chars += self.text[self.byte..byte].chars().count();
        self.byte = byte;
        self.chars
    }
}
