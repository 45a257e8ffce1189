//! zfind - 文档内增量搜索与高亮引擎
//!
//! 模块结构：
//! - kernel::document: 只读的 block 视图（Rope）
//! - kernel::match_index: 匹配列表 + 当前激活匹配
//! - kernel::controller: 可观察的搜索状态（size / highlight / cursor）
//! - kernel::services: ports（数据契约）、adapters（匹配引擎、配置）、bus（变更通知）

pub mod kernel;

pub use kernel::{
    Document, Match, MatchIndex, SearchController, SearchEvent, SearchOptions, SearchSettings,
    TextDocument,
};
