//! Highlight write-back.
//!
//! The kernel never formats text itself. Hosts implement [`HighlightSink`]
//! and receive one [`Highlight`] per match, keyed by block-relative offsets.

pub use crate::kernel::services::ports::settings::{HighlightSettings, HighlightStyle};
use crate::kernel::services::ports::Match;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightKind {
    Match,
    Active,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub block_index: usize,
    pub block_position: usize,
    pub start: usize,
    pub end: usize,
    pub kind: HighlightKind,
}

impl Highlight {
    pub fn from_match(m: &Match, kind: HighlightKind) -> Self {
        Self {
            block_index: m.block_index,
            block_position: m.block_position,
            start: m.start,
            end: m.end,
            kind,
        }
    }

    pub fn is_active(&self) -> bool {
        self.kind == HighlightKind::Active
    }

    pub fn style<'a>(&self, settings: &'a HighlightSettings) -> &'a HighlightStyle {
        match self.kind {
            HighlightKind::Match => &settings.match_style,
            HighlightKind::Active => &settings.active_style,
        }
    }
}

pub trait HighlightSink {
    /// Drop every highlight applied by a previous paint.
    fn clear(&mut self);

    fn apply(&mut self, highlight: &Highlight, style: &HighlightStyle);
}

impl HighlightSink for Vec<Highlight> {
    fn clear(&mut self) {
        Vec::clear(self);
    }

    fn apply(&mut self, highlight: &Highlight, _style: &HighlightStyle) {
        self.push(*highlight);
    }
}
