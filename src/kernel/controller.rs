//! Search controller: observable search state on top of [`MatchIndex`].
//!
//! Each input (pattern, content, options, navigation) runs a full synchronous
//! cascade before returning. Derived values are published on the
//! [`SearchBus`] in order: input, size, highlight index, cursor, line.

use crate::kernel::document::{Document, TextDocument};
use crate::kernel::highlight::{HighlightSettings, HighlightSink};
use crate::kernel::match_index::MatchIndex;
use crate::kernel::services::bus::{SearchBus, SearchBusReceiver, SearchEvent};
use crate::kernel::services::ports::{SearchOptions, SearchSettings};

pub struct SearchController<D: Document = TextDocument> {
    index: MatchIndex,
    document: Option<D>,
    pattern: String,
    size: usize,
    highlight_index: usize,
    cursor_position: usize,
    line_position: usize,
    last_error: Option<String>,
    highlight: HighlightSettings,
    bus: SearchBus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSnapshot<'a> {
    pub pattern: &'a str,
    pub size: usize,
    pub highlight_index: usize,
    pub cursor_position: usize,
    pub line_position: usize,
    pub last_error: Option<&'a str>,
}

impl<D: Document> Default for SearchController<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Document> SearchController<D> {
    pub fn new() -> Self {
        Self::with_settings(&SearchSettings::default())
    }

    pub fn with_settings(settings: &SearchSettings) -> Self {
        Self {
            index: MatchIndex::with_options(settings.options()),
            document: None,
            pattern: String::new(),
            size: 0,
            highlight_index: 0,
            cursor_position: 0,
            line_position: 0,
            last_error: None,
            highlight: settings.highlight.clone(),
            bus: SearchBus::default(),
        }
    }

    pub fn subscribe(&mut self) -> SearchBusReceiver {
        self.bus.subscribe()
    }

    // ==================== observable state ====================

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn options(&self) -> SearchOptions {
        self.index.options()
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// 1-based index of the active match; 0 when nothing matched.
    pub fn highlight_index(&self) -> usize {
        if self.size > 0 {
            self.highlight_index
        } else {
            0
        }
    }

    /// Absolute char offset just past the active match.
    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    /// Block (line) index of the active match.
    pub fn line_position(&self) -> usize {
        self.line_position
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn match_index(&self) -> &MatchIndex {
        &self.index
    }

    pub fn snapshot(&self) -> SearchSnapshot<'_> {
        SearchSnapshot {
            pattern: &self.pattern,
            size: self.size,
            highlight_index: self.highlight_index(),
            cursor_position: self.cursor_position,
            line_position: self.line_position,
            last_error: self.last_error(),
        }
    }

    // ==================== document ====================

    pub fn document(&self) -> Option<&D> {
        self.document.as_ref()
    }

    /// Edits made through this handle take effect on
    /// [`SearchController::notify_content_changed`].
    pub fn document_mut(&mut self) -> Option<&mut D> {
        self.document.as_mut()
    }

    pub fn attach_document(&mut self, document: D) {
        self.document = Some(document);
        self.emit(SearchEvent::DocumentAttached);
        self.refresh();
    }

    pub fn detach_document(&mut self) -> Option<D> {
        let document = self.document.take()?;
        self.emit(SearchEvent::DocumentDetached);
        self.index.clear();
        self.set_size(0);
        Some(document)
    }

    pub fn notify_content_changed(&mut self) {
        self.emit(SearchEvent::ContentChanged);
        self.refresh();
    }

    // ==================== inputs ====================

    pub fn set_pattern(&mut self, pattern: &str) {
        if self.pattern == pattern {
            return;
        }
        self.pattern = pattern.to_string();
        self.emit(SearchEvent::PatternChanged);
        self.index.set_pattern(pattern);
        self.refresh();
    }

    pub fn set_options(&mut self, options: SearchOptions) {
        if !self.index.set_options(options) {
            return;
        }
        self.emit(SearchEvent::OptionsChanged);
        self.refresh();
    }

    pub fn set_case_sensitive(&mut self, case_sensitive: bool) {
        self.set_options(SearchOptions {
            case_sensitive,
            ..self.options()
        });
    }

    pub fn set_use_regex(&mut self, use_regex: bool) {
        self.set_options(SearchOptions {
            use_regex,
            ..self.options()
        });
    }

    pub fn highlight_settings(&self) -> &HighlightSettings {
        &self.highlight
    }

    pub fn set_highlight_settings(&mut self, settings: HighlightSettings) {
        self.highlight = settings;
    }

    // ==================== navigation ====================

    /// Returns the new cursor position, or `None` if the active match did not move.
    pub fn go_to_next(&mut self) -> Option<usize> {
        let moved = self.index.next_match();
        self.update_cursor_position(self.index.active_match_end());
        moved
    }

    pub fn go_to_prev(&mut self) -> Option<usize> {
        let moved = self.index.prev_match();
        self.update_cursor_position(self.index.active_match_end());
        moved
    }

    /// Jumps to the `n`-th match (1-based). Out-of-range values wrap.
    pub fn go_to_highlight_index(&mut self, n: usize) -> Option<usize> {
        let index = isize::try_from(n).unwrap_or(isize::MAX) - 1;
        let moved = self.index.set_active_match_index(index);
        self.update_cursor_position(self.index.active_match_end());
        moved
    }

    /// Clears `sink` and re-applies one highlight per match.
    pub fn paint<S: HighlightSink + ?Sized>(&self, sink: &mut S) {
        sink.clear();
        for highlight in self.index.highlights() {
            sink.apply(&highlight, highlight.style(&self.highlight));
        }
    }

    // ==================== internals ====================

    /// Rebuild, publish size, then the cursor of the active match. The
    /// active index is already clamped by [`MatchIndex::rebuild`].
    fn refresh(&mut self) {
        self.set_last_error(self.index.last_error().map(str::to_string));

        let Some(document) = self.document.as_ref() else {
            return;
        };
        self.index.rebuild(document);
        self.set_size(self.index.total_matches());
        self.update_cursor_position(self.index.active_match_end());
    }

    fn update_cursor_position(&mut self, offset: Option<usize>) {
        let Some(offset) = offset.filter(|&offset| offset > 0) else {
            return;
        };
        self.set_highlight_index(self.index.active_match_index() + 1);
        self.set_cursor_position(offset);
        if let Some(line) = self.index.active_match().map(|m| m.block_index) {
            self.set_line_position(line);
        }
    }

    fn set_size(&mut self, size: usize) {
        if self.size != size {
            self.size = size;
            self.emit(SearchEvent::SizeChanged(size));
        }
    }

    fn set_highlight_index(&mut self, highlight_index: usize) {
        if self.highlight_index != highlight_index {
            self.highlight_index = highlight_index;
            self.emit(SearchEvent::HighlightIndexChanged(highlight_index));
        }
    }

    fn set_cursor_position(&mut self, cursor_position: usize) {
        if self.cursor_position != cursor_position {
            self.cursor_position = cursor_position;
            self.emit(SearchEvent::CursorPositionChanged(cursor_position));
        }
    }

    fn set_line_position(&mut self, line_position: usize) {
        if self.line_position != line_position {
            self.line_position = line_position;
            self.emit(SearchEvent::LinePositionChanged(line_position));
        }
    }

    fn set_last_error(&mut self, last_error: Option<String>) {
        if self.last_error != last_error {
            self.last_error = last_error.clone();
            self.emit(SearchEvent::ErrorChanged(last_error));
        }
    }

    fn emit(&mut self, event: SearchEvent) {
        self.bus.publish(event);
    }
}

impl SearchController<TextDocument> {
    /// Current text of the attached document, empty when none is attached.
    pub fn content(&self) -> String {
        self.document
            .as_ref()
            .map(TextDocument::text)
            .unwrap_or_default()
    }

    /// Replaces the searched text, creating the document on first use.
    /// Compared against the document itself, so host edits are never masked.
    pub fn set_content(&mut self, content: &str) {
        match self.document.as_mut() {
            Some(document) if *document.rope() == content => return,
            Some(document) => document.set_text(content),
            None => self.document = Some(TextDocument::from(content)),
        }
        self.notify_content_changed();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/controller.rs"]
mod tests;
