//! 搜索适配器
//!
//! - Matcher: 把 pattern + SearchOptions 编译成具体的匹配引擎

mod searcher;

pub use searcher::Matcher;
