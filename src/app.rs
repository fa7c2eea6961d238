//! 应用编排层
//!
//! 扫描输入目录，逐个文件跑导入流程，汇总统计。
//! 单个文件失败只计入统计，不中断整批。

use crate::config::Config;
use crate::models::loaders::{load_all_text_files, RawDump};
use crate::workflow::{ImportCtx, ImportFlow, ProcessResult};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{error, info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    flow: ImportFlow,
}

/// 处理统计
#[derive(Debug, Default)]
struct ProcessingStats {
    success: usize,
    skipped: usize,
    failed: usize,
    total: usize,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        // 确保输出目录存在
        std::fs::create_dir_all(&config.output_folder)
            .with_context(|| format!("无法创建输出目录: {}", config.output_folder))?;

        let flow = ImportFlow::new(&config);
        Ok(Self { config, flow })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<()> {
        info!("\n📁 正在扫描待导入的题目文本...");
        let dumps = load_all_text_files(&self.config.input_folder).await?;

        if dumps.is_empty() {
            warn!("⚠️ 没有找到待导入的 .txt 文件，程序结束");
            return Ok(());
        }

        info!("✓ 找到 {} 个待导入的文件\n", dumps.len());

        let stats = self.process_all(&dumps).await;
        print_final_stats(&stats);

        Ok(())
    }

    /// 逐个处理所有文件
    ///
    /// 解析是同步纯函数且单个文件开销极小，串行即可，无需并发。
    async fn process_all(&self, dumps: &[RawDump]) -> ProcessingStats {
        let mut stats = ProcessingStats {
            total: dumps.len(),
            ..Default::default()
        };

        for (idx, dump) in dumps.iter().enumerate() {
            let ctx = ImportCtx::new(dump.name.clone(), idx + 1, dumps.len());
            info!("{}", "─".repeat(40));

            match self.flow.run(dump, &ctx).await {
                Ok(ProcessResult::Success) => stats.success += 1,
                Ok(ProcessResult::Skipped) => stats.skipped += 1,
                Err(e) => {
                    error!("{} ❌ 处理过程中发生错误: {}", ctx, e);
                    stats.failed += 1;
                }
            }
        }

        stats
    }

    /// 导入单个文件（供测试与命令行单文件模式使用）
    pub async fn import_single_file(&self, path: &Path) -> Result<ProcessResult> {
        let dump = crate::models::loaders::load_text_file(path).await?;
        let ctx = ImportCtx::new(dump.name.clone(), 1, 1);
        self.flow.run(&dump, &ctx).await
    }
}

// ========== 日志辅助函数 ==========

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 批量题目导入模式");
    info!("📂 输入目录: {}", config.input_folder);
    info!("📂 输出目录: {}", config.output_folder);
    info!("{}", "=".repeat(60));
}

fn print_final_stats(stats: &ProcessingStats) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部导入完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 成功: {}/{}", stats.success, stats.total);
    info!("⏭️ 跳过: {}", stats.skipped);
    info!("❌ 失败: {}", stats.failed);
    info!("{}", "=".repeat(60));
}
