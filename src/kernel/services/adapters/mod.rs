//! 服务适配器：匹配引擎与基于文件的配置

pub mod search;
pub mod settings;

pub use search::Matcher;
pub use settings::{
    ensure_log_dir, ensure_settings_file, get_log_dir, get_settings_path, load_settings,
    load_settings_from, write_default_settings, SettingsError,
};
