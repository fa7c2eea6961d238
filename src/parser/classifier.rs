//! 行分类器
//!
//! 把题目块内的单行文本识别为：选项行 / 独立答案行 / 解析起始行 / 其他。
//! 按固定优先级依次尝试，首个命中者生效，优先级集中在这里，便于单独测试。

use crate::parser::patterns::{ANSWER_LINE, CORRECT_MARKER, EXPLANATION_LINE, OPTION_LINE};
use crate::parser::sanitizer;

/// 单行分类结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// 选项行（字母已大写，正文已清理标记）
    Option {
        id: char,
        text: String,
        /// 正文中带有"正确"标记（对勾或 correct 字样）
        marked_correct: bool,
    },
    /// 独立答案行，如 `Answer: B`
    Answer { id: char },
    /// 解析起始行，携带解析正文首段
    Explanation { body: String },
    /// 未识别的行
    Other,
}

/// 对单行进行分类
///
/// 优先级：选项行 > 答案行 > 解析行。未命中任何模式返回 [`LineKind::Other`]。
pub fn classify_line(line: &str) -> LineKind {
    if let Some(caps) = OPTION_LINE.captures(line) {
        let id = caps[1]
            .chars()
            .next()
            .unwrap_or('A')
            .to_ascii_uppercase();
        let body = caps[2].trim();

        let marked_correct = CORRECT_MARKER.is_match(body);
        let text = if marked_correct {
            sanitizer::strip_correct_markers(body)
        } else {
            body.to_string()
        };
        let text = sanitizer::strip_wrapping_bold(&text);

        return LineKind::Option {
            id,
            text,
            marked_correct,
        };
    }

    if let Some(caps) = ANSWER_LINE.captures(line) {
        let id = caps[1]
            .chars()
            .next()
            .unwrap_or('A')
            .to_ascii_uppercase();
        return LineKind::Answer { id };
    }

    if let Some(caps) = EXPLANATION_LINE.captures(line) {
        return LineKind::Explanation {
            body: caps[1].trim().to_string(),
        };
    }

    LineKind::Other
}
