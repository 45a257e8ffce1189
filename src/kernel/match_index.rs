//! Ordered match list + active-match pointer.
//!
//! Every rebuild discards the previous matches and rescans the whole
//! document. The active match is a plain index into the fresh list.

use crate::kernel::document::Document;
use crate::kernel::highlight::{Highlight, HighlightKind};
use crate::kernel::services::adapters::search::Matcher;
use crate::kernel::services::ports::{Match, SearchOptions};

#[derive(Debug, Clone, Default)]
pub struct MatchIndex {
    pattern: String,
    options: SearchOptions,
    matcher: Option<Matcher>,
    last_error: Option<String>,
    matches: Vec<Match>,
    active: usize,
}

impl MatchIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: SearchOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn options(&self) -> SearchOptions {
        self.options
    }

    /// Message of the last rejected pattern, if the current one failed to compile.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Replaces the pattern. A different pattern resets the active index; the
    /// match list is stale until the next [`MatchIndex::rebuild`].
    pub fn set_pattern(&mut self, pattern: &str) -> bool {
        if self.pattern == pattern {
            return false;
        }
        self.pattern = pattern.to_string();
        self.active = 0;
        self.compile();
        true
    }

    pub fn set_options(&mut self, options: SearchOptions) -> bool {
        if self.options == options {
            return false;
        }
        self.options = options;
        self.active = 0;
        self.compile();
        true
    }

    fn compile(&mut self) {
        match Matcher::compile(&self.pattern, self.options) {
            Ok(matcher) => {
                self.matcher = matcher;
                self.last_error = None;
            }
            Err(e) => {
                tracing::warn!(pattern = %self.pattern, error = %e, "search pattern rejected");
                self.matcher = None;
                self.last_error = Some(e.to_string());
            }
        }
    }

    pub fn rebuild<D: Document + ?Sized>(&mut self, doc: &D) {
        self.matches.clear();

        let Some(matcher) = self.matcher.as_ref() else {
            self.active = 0;
            return;
        };

        for block in doc.blocks() {
            for (start, end) in matcher.find_spans(&block.text) {
                self.matches
                    .push(Match::new(block.index, block.position, start, end));
            }
        }

        if self.active >= self.matches.len() {
            self.active = self.matches.len().saturating_sub(1);
        }

        tracing::debug!(
            pattern = %self.pattern,
            blocks = doc.block_count(),
            matches = self.matches.len(),
            active = self.active,
            "match index rebuilt"
        );
    }

    /// Drops all matches but keeps the compiled pattern.
    pub fn clear(&mut self) {
        self.matches.clear();
        self.active = 0;
    }

    pub fn total_matches(&self) -> usize {
        self.matches.len()
    }

    /// Meaningless while [`MatchIndex::total_matches`] is zero.
    pub fn active_match_index(&self) -> usize {
        self.active
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn active_match(&self) -> Option<&Match> {
        self.matches.get(self.active)
    }

    /// Absolute char offset of the active match's end.
    pub fn active_match_end(&self) -> Option<usize> {
        self.active_match().map(Match::absolute_end)
    }

    /// Moves the active pointer, wrapping past either end.
    ///
    /// Returns the absolute end offset of the newly active match, or `None`
    /// when `index` is already active or there is nothing to navigate to.
    pub fn set_active_match_index(&mut self, index: isize) -> Option<usize> {
        if index == self.active as isize {
            return None;
        }
        let count = self.matches.len();
        if count == 0 {
            return None;
        }

        self.active = if index < 0 {
            count - 1
        } else if index as usize >= count {
            0
        } else {
            index as usize
        };

        tracing::debug!(requested = index, active = self.active, "active match moved");
        self.active_match_end()
    }

    pub fn next_match(&mut self) -> Option<usize> {
        self.set_active_match_index(self.active as isize + 1)
    }

    pub fn prev_match(&mut self) -> Option<usize> {
        self.set_active_match_index(self.active as isize - 1)
    }

    pub fn highlights(&self) -> impl Iterator<Item = Highlight> + '_ {
        self.matches.iter().enumerate().map(move |(i, m)| {
            let kind = if i == self.active {
                HighlightKind::Active
            } else {
                HighlightKind::Match
            };
            Highlight::from_match(m, kind)
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/match_index.rs"]
mod tests;
