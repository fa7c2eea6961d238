//! 题目块切分
//!
//! 把原始文本按题目起始行切成若干块，每块对应一道题。
//! 切分是非破坏性的：编号行保留在块内，由后续的题干提取负责剥离。

use crate::parser::patterns::QUESTION_HEADER;

/// 按题目起始行切分原始文本
///
/// # 参数
/// - `text`: 原始粘贴文本
///
/// # 返回
/// 返回按出现顺序排列的题目块（已去除首尾空白，空块被丢弃）。
/// 整个文本找不到任何起始行时，全文作为单独一块返回。
pub fn split_blocks(text: &str) -> Vec<&str> {
    // 收集所有起始行的偏移，作为切分点
    let mut starts: Vec<usize> = QUESTION_HEADER.find_iter(text).map(|m| m.start()).collect();

    // 第一个起始行之前的内容（序言）也作为一块，留给下游分类去拒绝
    if starts.first() != Some(&0) {
        starts.insert(0, 0);
    }
    starts.push(text.len());

    starts
        .windows(2)
        .map(|w| text[w[0]..w[1]].trim())
        .filter(|block| !block.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_multiple_headers() {
        let text = "1. 第一题\nA) x\n\nQ2. 第二题\nA) y\n\nQuestion 3: 第三题\nA) z";
        let blocks = split_blocks(text);
        assert_eq!(blocks.len(), 3);
        assert!(blocks[0].starts_with("1. 第一题"));
        assert!(blocks[1].starts_with("Q2. 第二题"));
        assert!(blocks[2].starts_with("Question 3: 第三题"));
    }

    #[test]
    fn test_split_no_header_single_block() {
        let text = "没有任何编号的自由文本\n第二行";
        let blocks = split_blocks(text);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0], text);
    }

    #[test]
    fn test_split_empty_input() {
        assert!(split_blocks("").is_empty());
        assert!(split_blocks("   \n\n  ").is_empty());
    }

    #[test]
    fn test_split_preamble_kept_as_block() {
        let text = "以下是本周的练习题：\n\n1. 正式的第一题\nA) x\nB) y";
        let blocks = split_blocks(text);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], "以下是本周的练习题：");
    }

    #[test]
    fn test_split_indented_header() {
        let text = "1. 第一题\nA) x\n  2) 缩进的第二题\nA) y";
        let blocks = split_blocks(text);
        assert_eq!(blocks.len(), 2);
        assert!(blocks[1].starts_with("2) 缩进的第二题"));
    }

    #[test]
    fn test_split_paren_and_colon_delimiters() {
        let text = "1) 括号编号\nA) x\n2: 冒号编号\nA) y";
        let blocks = split_blocks(text);
        assert_eq!(blocks.len(), 2);
    }
}
