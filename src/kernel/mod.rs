//! Headless search core (document, match index, controller).

pub mod controller;
pub mod document;
pub mod highlight;
pub mod match_index;
pub mod services;

pub use controller::{SearchController, SearchSnapshot};
pub use document::{Block, Blocks, Document, TextDocument};
pub use highlight::{Highlight, HighlightKind, HighlightSink};
pub use match_index::MatchIndex;
pub use services::ports::{
    HighlightSettings, HighlightStyle, Match, Rgba, SearchError, SearchOptions, SearchSettings,
};
pub use services::{SearchBusReceiver, SearchEvent};
