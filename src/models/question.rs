//! 题目数据模型
//!
//! 字段名序列化为 camelCase，与浏览器端测验应用读取的 JSON 形状保持一致。

use serde::{Deserialize, Serialize};

/// 单个选项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    /// 选项字母，"A" 到 "D"，统一大写
    pub id: String,
    /// 选项正文；占位选项为 "-"
    pub text: String,
}

impl QuizOption {
    pub fn new(id: char, text: String) -> Self {
        Self {
            id: id.to_string(),
            text,
        }
    }

    /// 选项字母的字符形式，便于比较
    pub fn id_char(&self) -> char {
        self.id.chars().next().unwrap_or('\0')
    }
}

/// 一道经过校验的题目
///
/// 不变量：恰好 4 个选项；`correct_answer` 必须对应解析出的真实选项
/// （而非补齐的占位选项）；`question` 非空。无法满足的块在解析阶段
/// 即被整块丢弃，这里不出现残缺记录。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    /// 每次解析调用内从 1 开始的顺序编号
    pub id: usize,
    pub question: String,
    pub options: Vec<QuizOption>,
    /// "A" 到 "D" 之一
    pub correct_answer: String,
    pub explanation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_camel_case() {
        let question = QuizQuestion {
            id: 1,
            question: "2+2?".to_string(),
            options: vec![
                QuizOption::new('A', "3".to_string()),
                QuizOption::new('B', "4".to_string()),
                QuizOption::new('C', "-".to_string()),
                QuizOption::new('D', "-".to_string()),
            ],
            correct_answer: "B".to_string(),
            explanation: "No explanation provided.".to_string(),
        };

        let json = serde_json::to_value(&question).unwrap();
        assert_eq!(json["correctAnswer"], "B");
        assert_eq!(json["options"][1]["id"], "B");
        assert_eq!(json["options"][1]["text"], "4");
    }
}
