//! 导入流程 - 流程层
//!
//! 核心职责：定义"一份题目文本"的完整导入流程
//!
//! 流程顺序：
//! 1. 解析原始文本 → 题目列表
//! 2. 预览
//! 3. 组装分类 → 写出 JSON

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{info, warn};

use crate::config::Config;
use crate::models::loaders::RawDump;
use crate::models::QuizCategory;
use crate::services::ImportService;
use crate::workflow::import_ctx::ImportCtx;

/// 单个文件的处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessResult {
    /// 处理成功
    Success,
    /// 跳过（未解析出任何题目）
    Skipped,
}

/// 导入流程
///
/// - 编排单个文件的完整导入流程
/// - 决定何时解析、何时预览、何时落盘
/// - 只依赖业务能力（services）
pub struct ImportFlow {
    import_service: ImportService,
    output_folder: PathBuf,
    time_per_question: u32,
}

impl ImportFlow {
    /// 创建新的导入流程
    pub fn new(config: &Config) -> Self {
        Self {
            import_service: ImportService::new(config),
            output_folder: PathBuf::from(&config.output_folder),
            time_per_question: config.time_per_question,
        }
    }

    /// 处理单份原始文本
    ///
    /// # 参数
    /// - `dump`: 原始文本
    /// - `ctx`: 导入上下文
    ///
    /// # 返回
    /// 返回处理结果（成功/跳过）。只有文件写出失败才返回错误。
    pub async fn run(&self, dump: &RawDump, ctx: &ImportCtx) -> Result<ProcessResult> {
        info!("{} 🔍 正在解析...", ctx);

        let outcome = self.import_service.import(&dump.text);

        if let Some(notice) = &outcome.parse_error {
            warn!("{} ⚠️ {}", ctx, notice);
            return Ok(ProcessResult::Skipped);
        }
        if outcome.questions.is_empty() {
            warn!("{} ⚠️ 文本过短或无内容，跳过", ctx);
            return Ok(ProcessResult::Skipped);
        }

        info!("{} ✓ 解析完成，共 {} 道题", ctx, outcome.questions.len());
        self.import_service.log_preview(&outcome.questions);

        // 组装分类并写出
        let category = QuizCategory::from_questions(
            &ctx.name,
            "",
            self.time_per_question,
            outcome.questions,
        );
        let output_path = self.output_folder.join(format!("{}.json", ctx.name));
        let json = serde_json::to_string_pretty(&category)?;
        tokio::fs::write(&output_path, json)
            .await
            .with_context(|| format!("无法写出分类文件: {}", output_path.display()))?;

        info!(
            "{} ✓ 分类已保存: {} ({} 道题)",
            ctx,
            output_path.display(),
            category.questions.len()
        );

        Ok(ProcessResult::Success)
    }
}
