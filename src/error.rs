//! 应用程序错误类型
//!
//! 解析本身永不报错（无法识别的块整块丢弃），这里只覆盖外围的
//! 文件、配置、序列化错误。

use thiserror::Error;

/// 应用程序错误
#[derive(Debug, Error)]
pub enum AppError {
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// 写入文件失败
    #[error("写入文件失败 ({path}): {source}")]
    FileWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// 目录不存在
    #[error("目录不存在: {path}")]
    DirectoryNotFound { path: String },

    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// JSON 序列化失败
    #[error("JSON序列化失败: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    /// 配置错误
    #[error("配置错误: {message}")]
    Config { message: String },
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
