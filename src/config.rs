//! 程序配置
//!
//! 默认值 → config.toml（如存在）→ 环境变量，后者覆盖前者。

use crate::error::{AppError, AppResult};
use serde::Deserialize;
use std::path::Path;

/// 程序配置
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 原始题目文本存放目录
    pub input_folder: String,
    /// 分类 JSON 输出目录
    pub output_folder: String,
    /// 每题限时（秒），写入分类元数据
    pub time_per_question: u32,
    /// 低于此字符数跳过解析（视为"还在输入"）
    pub min_parse_length: usize,
    /// 超过此字符数仍解析不出题目时报错
    pub error_report_length: usize,
    /// 预览条数
    pub preview_count: usize,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_folder: "input_text".to_string(),
            output_folder: "output_json".to_string(),
            time_per_question: 30,
            min_parse_length: 20,
            error_report_length: 50,
            preview_count: 5,
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 从环境变量加载，缺省回落到默认值
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            input_folder: std::env::var("INPUT_FOLDER").unwrap_or(default.input_folder),
            output_folder: std::env::var("OUTPUT_FOLDER").unwrap_or(default.output_folder),
            time_per_question: std::env::var("TIME_PER_QUESTION").ok().and_then(|v| v.parse().ok()).unwrap_or(default.time_per_question),
            min_parse_length: std::env::var("MIN_PARSE_LENGTH").ok().and_then(|v| v.parse().ok()).unwrap_or(default.min_parse_length),
            error_report_length: std::env::var("ERROR_REPORT_LENGTH").ok().and_then(|v| v.parse().ok()).unwrap_or(default.error_report_length),
            preview_count: std::env::var("PREVIEW_COUNT").ok().and_then(|v| v.parse().ok()).unwrap_or(default.preview_count),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }

    /// 从 TOML 文件加载
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| AppError::FileRead {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| AppError::TomlParse {
            path: path.display().to_string(),
            source,
        })
    }

    /// 标准加载顺序：config.toml 存在则用之，否则用环境变量
    pub fn load() -> AppResult<Self> {
        let path = Path::new("config.toml");
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::from_env())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let config = Config::default();
        assert_eq!(config.min_parse_length, 20);
        assert_eq!(config.error_report_length, 50);
        assert_eq!(config.preview_count, 5);
        assert_eq!(config.time_per_question, 30);
    }

    #[test]
    fn test_from_toml() {
        let config: Config = toml::from_str(
            r#"
            input_folder = "dumps"
            time_per_question = 45
            "#,
        )
        .unwrap();
        assert_eq!(config.input_folder, "dumps");
        assert_eq!(config.time_per_question, 45);
        // 未给出的字段回落默认值
        assert_eq!(config.min_parse_length, 20);
    }
}
