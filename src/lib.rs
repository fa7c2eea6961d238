//! # Quiz Bulk Import
//!
//! 批量测验题目导入工具：把松散格式的选择题文本堆解析成
//! 经过校验的题目记录，组装为测验分类后落盘为 JSON。
//!
//! ## 架构设计
//!
//! ### ① 核心能力层（Parser）
//! - `parser/` - 纯同步无状态的文本→结构化数据转换
//! - `splitter` - 按题目起始行切块
//! - `classifier` - 逐行识别选项/答案/解析
//! - `sanitizer` - 清理标记与 markdown 痕迹
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单段文本
//! - `ImportService` - 长度门槛、解析调用、空结果提示、预览
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一份文本"的完整导入流程
//! - `ImportCtx` - 上下文封装（文件名 + 序号）
//! - `ImportFlow` - 流程编排（解析 → 预览 → 组装分类 → 落盘）
//!
//! ### ④ 编排层（App）
//! - `app` - 扫描输入目录，逐文件执行流程，汇总统计

pub mod app;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod parser;
pub mod services;
pub mod workflow;

// 重新导出常用类型
pub use app::App;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{QuizCategory, QuizOption, QuizQuestion};
pub use parser::parse_questions;
pub use services::{ImportOutcome, ImportService};
pub use workflow::{ImportCtx, ImportFlow, ProcessResult};
