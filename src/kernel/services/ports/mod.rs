//! Service ports: data contracts shared by the kernel and adapters.

pub mod search;
pub mod settings;

pub use search::{Match, Result as SearchResult, SearchError, SearchOptions};
pub use settings::{HighlightSettings, HighlightStyle, Rgba, SearchSettings};
