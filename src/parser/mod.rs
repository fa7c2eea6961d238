//! 批量题目解析器 - 核心能力层
//!
//! 把松散格式的选择题文本（人工或 AI 生成的题目堆，编号风格混杂、
//! 答案标记或行内或独立成行、关键词中英/印地语混用、夹带 markdown 痕迹）
//! 转换为经过校验的结构化题目记录。
//!
//! 纯同步、无状态：一次调用消费一个字符串，返回一个有序题目列表，
//! 没有 I/O，没有跨调用的共享状态。每次调用相互独立、可重入。
//!
//! 处理管线：
//! 1. `splitter` - 按题目起始行把原始文本切成块，一块一题
//! 2. `classifier` - 逐行识别：选项 / 答案行 / 解析行 / 题干
//! 3. 本模块 - 组装与校验：补齐选项、兜底解析、编号
//! 4. `sanitizer` - 清理标记与 markdown 痕迹（由分类器调用）

pub mod classifier;
pub mod patterns;
pub mod sanitizer;
pub mod splitter;

use crate::models::question::{QuizOption, QuizQuestion};
use crate::parser::classifier::{classify_line, LineKind};
use crate::parser::patterns::{ANSWER_LINE, EXPLANATION_BREAK, QUESTION_PREFIX};
use tracing::debug;

/// 选项不足 4 个时的占位正文
pub const PLACEHOLDER_OPTION_TEXT: &str = "-";

/// 块内没有解析行时的兜底解析
pub const FALLBACK_EXPLANATION: &str = "No explanation provided.";

/// 每道题保留的选项数量
const OPTION_COUNT: usize = 4;

/// 解析整段原始文本
///
/// # 参数
/// - `text`: 原始粘贴文本，可能包含多道题
///
/// # 返回
/// 返回按出现顺序排列的题目记录，`id` 从 1 开始按接受顺序编号。
/// 解析永不失败：无法识别的块被整块丢弃，不产生残缺记录；
/// 空列表是合法结果（表示"没有可解析的内容"）。
pub fn parse_questions(text: &str) -> Vec<QuizQuestion> {
    splitter::split_blocks(text)
        .into_iter()
        .filter_map(parse_block)
        .enumerate()
        .map(|(idx, mut question)| {
            question.id = idx + 1;
            question
        })
        .collect()
}

/// 解析单个题目块
///
/// 块能产出记录的条件：题干非空、解析出至少 2 个真实选项、
/// 确定了正确答案、且该答案落在保留的前 4 个选项之内。
/// 任一条件不满足即整块丢弃，绝不输出部分记录。
fn parse_block(block: &str) -> Option<QuizQuestion> {
    let lines: Vec<&str> = block
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    if lines.len() < 2 {
        debug!("块被拒绝: 行数不足 2");
        return None;
    }

    // ── 题干：第一行剥离编号前缀 ──
    let question_text = QUESTION_PREFIX.replace(lines[0], "").trim().to_string();
    if question_text.is_empty() {
        debug!("块被拒绝: 剥离编号后题干为空");
        return None;
    }

    let mut options: Vec<QuizOption> = Vec::new();
    let mut correct_answer: Option<char> = None;
    let mut explanation: Option<String> = None;

    let mut idx = 1;
    while idx < lines.len() {
        match classify_line(lines[idx]) {
            LineKind::Option {
                id,
                text,
                marked_correct,
            } => {
                // 重复字母只保留首次出现的正文，但后出现的正确标记仍然生效
                if !options.iter().any(|o| o.id_char() == id) {
                    options.push(QuizOption::new(id, text));
                }
                if marked_correct {
                    correct_answer = Some(id);
                }
            }
            LineKind::Answer { id } => {
                // 独立答案行覆盖选项内嵌标记（后写者胜）
                correct_answer = Some(id);
            }
            LineKind::Explanation { body } => {
                // 解析一旦开始就吞掉块内剩余所有行；遇到形似选项或答案的行
                // 立即终止收集（视为排版错乱的元数据），且块处理到此结束
                let mut collected = body;
                for rest in &lines[idx + 1..] {
                    if EXPLANATION_BREAK.is_match(rest) || ANSWER_LINE.is_match(rest) {
                        break;
                    }
                    collected.push(' ');
                    collected.push_str(rest);
                }
                explanation = Some(collected);
                break;
            }
            LineKind::Other => {}
        }
        idx += 1;
    }

    // ── 校验 ──
    if options.len() < 2 {
        debug!("块被拒绝: 真实选项不足 2 个 (题干: {})", question_text);
        return None;
    }
    let correct = match correct_answer {
        Some(c) => c,
        None => {
            debug!("块被拒绝: 未确定正确答案 (题干: {})", question_text);
            return None;
        }
    };
    // 答案必须落在保留的前 4 个真实选项内；落在被截断的第 5 个之后时整块丢弃，
    // 不能输出一个答案指向不存在选项的记录
    if !options
        .iter()
        .take(OPTION_COUNT)
        .any(|o| o.id_char() == correct)
    {
        debug!(
            "块被拒绝: 答案 {} 不在保留的选项中 (题干: {})",
            correct, question_text
        );
        return None;
    }

    // ── 截断与补齐到恰好 4 个选项 ──
    options.truncate(OPTION_COUNT);
    while options.len() < OPTION_COUNT {
        let next_id = (b'A' + options.len() as u8) as char;
        options.push(QuizOption::new(next_id, PLACEHOLDER_OPTION_TEXT.to_string()));
    }

    Some(QuizQuestion {
        // 实际编号由 parse_questions 在接受后统一回填
        id: 0,
        question: question_text,
        options,
        correct_answer: correct.to_string(),
        explanation: explanation.unwrap_or_else(|| FALLBACK_EXPLANATION.to_string()),
    })
}
