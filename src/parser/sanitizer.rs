//! 选项正文清理
//!
//! 从选项正文中剥离"正确"标记（对勾符号、correct 字样）和包裹整个文本的
//! markdown 加粗标记。只在选项正文上使用。

use crate::parser::patterns::{CHECK_GLYPHS, CORRECT_PHRASE, WRAPPING_BOLD};

/// 剥离正确标记
///
/// 移除对勾符号和 `(correct)` / `[correct]` 字样。仅在该行确实带标记时调用，
/// 避免误删题目内容里正常出现的单词 correct。
pub fn strip_correct_markers(text: &str) -> String {
    let text = CHECK_GLYPHS.replace_all(text, "");
    let text = CORRECT_PHRASE.replace_all(&text, " ");
    text.trim().to_string()
}

/// 剥离包裹文本的 markdown 加粗标记
///
/// 只处理首尾的 `*` / `**`，正文中间的 `*`（如乘号）保持原样。
pub fn strip_wrapping_bold(text: &str) -> String {
    WRAPPING_BOLD.replace_all(text.trim(), "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_checkmark() {
        assert_eq!(strip_correct_markers("Delhi ✓"), "Delhi");
        assert_eq!(strip_correct_markers("✔ Delhi"), "Delhi");
        assert_eq!(strip_correct_markers("√Delhi"), "Delhi");
    }

    #[test]
    fn test_strip_correct_phrase() {
        assert_eq!(strip_correct_markers("4 (correct)"), "4");
        assert_eq!(strip_correct_markers("Paris [correct]"), "Paris");
        assert_eq!(strip_correct_markers("Paris (CORRECT)"), "Paris");
    }

    #[test]
    fn test_strip_phrase_keeps_surrounding_words() {
        assert_eq!(strip_correct_markers("前半 (correct) 后半"), "前半 后半");
    }

    #[test]
    fn test_strip_wrapping_bold() {
        assert_eq!(strip_wrapping_bold("**加粗**"), "加粗");
        assert_eq!(strip_wrapping_bold("*斜体*"), "斜体");
        assert_eq!(strip_wrapping_bold("平文"), "平文");
    }

    #[test]
    fn test_bold_strip_keeps_inner_asterisk() {
        // 数学题里的乘号不能被当成加粗剥掉
        assert_eq!(strip_wrapping_bold("2*3"), "2*3");
        assert_eq!(strip_wrapping_bold("**2*3**"), "2*3");
    }
}
