//! 测验分类数据模型
//!
//! 一个分类 = 一份题目列表 + 展示用的元数据，与浏览器端测验应用的分类结构一致。

use crate::models::question::QuizQuestion;
use serde::{Deserialize, Serialize};

/// 自建分类的默认图标
const DEFAULT_ICON: &str = "BookOpen";
/// 自建分类的默认渐变色
const DEFAULT_COLOR: &str = "from-indigo-500 to-purple-400";

/// 测验分类
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizCategory {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Lucide 图标名
    pub icon: String,
    /// 渐变色 class
    pub color: String,
    /// 每题限时（秒）
    pub time_per_question: u32,
    pub questions: Vec<QuizQuestion>,
}

impl QuizCategory {
    /// 由解析出的题目列表组装分类
    ///
    /// # 参数
    /// - `name`: 分类名称
    /// - `description`: 描述，为空时兜底为 "Custom quiz with N questions"
    /// - `time_per_question`: 每题限时（秒）
    /// - `questions`: 题目列表
    pub fn from_questions(
        name: &str,
        description: &str,
        time_per_question: u32,
        questions: Vec<QuizQuestion>,
    ) -> Self {
        let description = if description.trim().is_empty() {
            format!("Custom quiz with {} questions", questions.len())
        } else {
            description.trim().to_string()
        };

        Self {
            id: format!("custom-{}", chrono::Utc::now().timestamp_millis()),
            name: name.trim().to_string(),
            description,
            icon: DEFAULT_ICON.to_string(),
            color: DEFAULT_COLOR.to_string(),
            time_per_question,
            questions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_questions;

    #[test]
    fn test_default_description_counts_questions() {
        let questions = parse_questions("1. 题？\nA) 甲 ✓\nB) 乙");
        let category = QuizCategory::from_questions("测试", "", 30, questions);
        assert_eq!(category.description, "Custom quiz with 1 questions");
        assert!(category.id.starts_with("custom-"));
        assert_eq!(category.time_per_question, 30);
    }

    #[test]
    fn test_explicit_description_kept() {
        let category = QuizCategory::from_questions("测试", "  自定义描述  ", 20, Vec::new());
        assert_eq!(category.description, "自定义描述");
    }
}
