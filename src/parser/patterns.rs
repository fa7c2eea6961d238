//! 解析模式表
//!
//! 所有正则模式集中在这里，按固定优先级排列：
//! 选项行 → 独立答案行 → 解析行。分类时按此顺序首个命中者生效，
//! 避免把优先级逻辑分散在各个分支里。

use once_cell::sync::Lazy;
use regex::Regex;

/// 题目起始行模式
///
/// 匹配: `Q1.` `Q12:` `1.` `2)` `Question 1:` 等，锚定行首（允许前导空白）。
/// rust 的 regex 不支持 lookahead，切分时取匹配起点做切片，
/// 效果与按行首模式切分一致。
pub static QUESTION_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)^[ \t]*(?:Q?\d+[.:)]|Question\s*\d+[.:\s])").expect("题目起始行模式非法")
});

/// 题目编号前缀
///
/// 用于从第一行剥离 `Q1.` / `1)` / `Question 1:` 前缀，容忍包裹的 `**` 加粗标记。
pub static QUESTION_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:\*{0,2})(?:Q?\d+[.:)]\s*|Question\s*\d+[.:\s])(?:\*{0,2})\s*")
        .expect("题目编号前缀模式非法")
});

/// 选项行
///
/// 匹配: `A) 文本` `A. 文本` `A: 文本` `(A) 文本` `[A] 文本` `**A)** 文本` `A- 文本`
/// 捕获组 1 = 选项字母，捕获组 2 = 选项正文。
pub static OPTION_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\*{0,2})[(\[]?([A-Da-d])[)\].:\-](?:\*{0,2})\s*(.+)")
        .expect("选项行模式非法")
});

/// 选项正文中的"正确"标记
///
/// 独立出现的对勾符号（✓ ✔ √），或 `(correct)` / `[correct]` 字样（忽略大小写）。
/// 不匹配裸 `*`（markdown 加粗），也不匹配题干正文里的单词 correct。
pub static CORRECT_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:^|\s)[✓✔√]|(?:^|\s)\(correct\)|\[correct\]").expect("正确标记模式非法")
});

/// 对勾符号（用于清理）
pub static CHECK_GLYPHS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[✓✔√]").expect("对勾符号模式非法"));

/// `(correct)` / `[correct]` 字样（用于清理，括号可缺省）
pub static CORRECT_PHRASE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\s*[(\[]?correct[)\]]?\s*").expect("correct 字样模式非法"));

/// 包裹整个文本的 markdown 加粗标记
///
/// 只剥离首尾的 `*` / `**`，不得触碰正文中间的 `*`（例如数学题里的乘号）。
pub static WRAPPING_BOLD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\*{1,2}|\*{1,2}$").expect("加粗标记模式非法"));

/// 独立答案行
///
/// 匹配: `Answer: B` `Ans. B` `Correct Answer - B` `**Answer: B**` `ans:b`
/// 以及印地语变体 `सही उत्तर: B` / `उत्तर: C`。捕获组 1 = 答案字母。
/// 注意 `Correct\s*Answer` 必须排在 `Correct` 之前，否则 `Correct Answer: B`
/// 会被误判为答案 A。
pub static ANSWER_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^[\s*]*(?:Answer|Correct\s*Answer|Correct|Ans|सही\s*उत्तर|उत्तर)[\s.\-:]+[(\[]?([A-Da-d])[)\]]?",
    )
    .expect("答案行模式非法")
});

/// 解析行
///
/// 匹配: `Explanation: ...` `Reason - ...` `व्याख्या: ...` 等。
/// 捕获组 1 = 解析正文首段。
pub static EXPLANATION_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:\*{0,2})(?:Explanation|Explain|Reason|Why|Note|व्याख्या)[\s.\-:]+(.+)")
        .expect("解析行模式非法")
});

/// 解析收集的终止判定
///
/// 收集解析后续行时，遇到"形似选项"的行立即终止（视为排版错乱的元数据，
/// 不并入解析正文）。答案行用 [`ANSWER_LINE`] 另行判定。
pub static EXPLANATION_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[(\[]?[A-Da-d][)\].:\-]\s").expect("解析终止模式非法"));
