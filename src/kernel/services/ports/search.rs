pub type Result<T> = std::result::Result<T, SearchError>;

#[derive(Debug)]
pub enum SearchError {
    InvalidPattern(regex::Error),
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchError::InvalidPattern(e) => write!(f, "Invalid pattern: {}", e),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SearchError::InvalidPattern(e) => Some(e),
        }
    }
}

impl From<regex::Error> for SearchError {
    fn from(e: regex::Error) -> Self {
        SearchError::InvalidPattern(e)
    }
}

/// One occurrence of the pattern inside a block.
///
/// `start`/`end` are char offsets relative to the block; `block_position` is
/// the block's absolute char offset captured when the block was scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub block_index: usize,
    pub block_position: usize,
    pub start: usize,
    pub end: usize,
}

impl Match {
    pub fn new(block_index: usize, block_position: usize, start: usize, end: usize) -> Self {
        Self {
            block_index,
            block_position,
            start,
            end,
        }
    }

    pub fn absolute_start(&self) -> usize {
        self.block_position + self.start
    }

    pub fn absolute_end(&self) -> usize {
        self.block_position + self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    pub case_sensitive: bool,
    pub use_regex: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            use_regex: true,
        }
    }
}
