//! 批量导入服务 - 业务能力层
//!
//! 只负责"把一段原始文本变成题目列表"这一能力，不关心流程：
//! - 最短长度门槛：太短视为"还在输入"，跳过解析且不报错
//! - 全局空结果：足够长的输入一个块都解析不出来时，给出一条用户可见的提示
//! - 预览：展示前几条记录和剩余数量
//!
//! 解析器本身永不失败，这里也没有 Result——错误只以提示字符串的形式出现。

use crate::config::Config;
use crate::models::question::QuizQuestion;
use crate::parser::parse_questions;
use tracing::{debug, info, warn};

/// 解析无结果时的用户提示
const PARSE_ERROR_NOTICE: &str = "Could not parse any questions. Please check the format.";

/// 一次导入的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportOutcome {
    /// 按出现顺序排列的题目记录
    pub questions: Vec<QuizQuestion>,
    /// 用户可见的解析失败提示；None 表示无需提示
    pub parse_error: Option<String>,
}

impl ImportOutcome {
    fn empty() -> Self {
        Self {
            questions: Vec::new(),
            parse_error: None,
        }
    }
}

/// 批量导入服务
pub struct ImportService {
    /// 低于此字符数跳过解析（"还在输入"）
    min_parse_length: usize,
    /// 超过此字符数仍解析不出任何题目时报错
    error_report_length: usize,
    /// 预览条数
    preview_count: usize,
}

impl ImportService {
    pub fn new(config: &Config) -> Self {
        Self {
            min_parse_length: config.min_parse_length,
            error_report_length: config.error_report_length,
            preview_count: config.preview_count,
        }
    }

    /// 导入一段原始文本
    ///
    /// # 参数
    /// - `raw`: 原始粘贴文本
    ///
    /// # 返回
    /// 返回题目列表和可选的解析失败提示。永不返回错误。
    pub fn import(&self, raw: &str) -> ImportOutcome {
        let trimmed_len = raw.trim().chars().count();

        if trimmed_len <= self.min_parse_length {
            debug!(
                "输入长度 {} 未达门槛 {}, 跳过解析",
                trimmed_len, self.min_parse_length
            );
            return ImportOutcome::empty();
        }

        let questions = parse_questions(raw);

        let parse_error = if questions.is_empty() && trimmed_len > self.error_report_length {
            warn!("输入长度 {} 但未解析出任何题目", trimmed_len);
            Some(PARSE_ERROR_NOTICE.to_string())
        } else {
            None
        };

        ImportOutcome {
            questions,
            parse_error,
        }
    }

    /// 打印解析结果预览
    ///
    /// 展示前 `preview_count` 条记录的题干与答案，以及剩余条数。
    pub fn log_preview(&self, questions: &[QuizQuestion]) {
        for q in questions.iter().take(self.preview_count) {
            info!("  {}. [{}] {}", q.id, q.correct_answer, q.question);
        }
        if questions.len() > self.preview_count {
            info!("  ... 以及另外 {} 道题", questions.len() - self.preview_count);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> ImportService {
        ImportService::new(&Config::default())
    }

    #[test]
    fn test_short_input_skipped_without_error() {
        let outcome = service().import("1. 短");
        assert!(outcome.questions.is_empty());
        assert!(outcome.parse_error.is_none());
    }

    #[test]
    fn test_short_inputs_never_error() {
        let svc = service();
        for raw in ["", "a", "1. 什么?", "            "] {
            let outcome = svc.import(raw);
            assert!(outcome.questions.is_empty());
            assert!(outcome.parse_error.is_none(), "输入 {:?} 不应报错", raw);
        }
    }

    #[test]
    fn test_long_unparseable_input_reports_error() {
        // 超过报错门槛(50 字符)但不含任何可解析结构
        let raw = "Just a question with no options, padded with filler text to get past fifty characters.";
        let outcome = service().import(raw);
        assert!(outcome.questions.is_empty());
        assert_eq!(outcome.parse_error.as_deref(), Some(PARSE_ERROR_NOTICE));
    }

    #[test]
    fn test_medium_unparseable_input_stays_silent() {
        // 超过解析门槛但未到报错门槛：视为"还在输入"
        let raw = "1. half-formed question, no options here yet";
        let outcome = service().import(raw);
        assert!(outcome.questions.is_empty());
        assert!(outcome.parse_error.is_none());
    }

    #[test]
    fn test_successful_import_has_no_error() {
        let raw = "1. What is the capital of India?\nA) Mumbai\nB) Delhi ✓\nC) Kolkata\nD) Chennai";
        let outcome = service().import(raw);
        assert_eq!(outcome.questions.len(), 1);
        assert!(outcome.parse_error.is_none());
    }

    #[test]
    fn test_import_is_idempotent() {
        let raw = "1. What is 2+2?\nA. 3\nB. 4 (correct)\nC. 5\nD. 6\nAnswer: B";
        let svc = service();
        assert_eq!(svc.import(raw), svc.import(raw));
    }
}
