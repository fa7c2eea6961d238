//! 导入上下文
//!
//! 封装"我正在处理第几个文件"这一信息

use std::fmt::Display;

/// 单个文件的导入上下文
#[derive(Debug, Clone)]
pub struct ImportCtx {
    /// 不含扩展名的文件名，同时用作分类名称
    pub name: String,

    /// 文件在本批中的序号（从1开始，仅用于日志显示）
    pub file_index: usize,

    /// 本批文件总数
    pub total: usize,
}

impl ImportCtx {
    /// 创建新的导入上下文
    pub fn new(name: String, file_index: usize, total: usize) -> Self {
        Self {
            name,
            file_index,
            total,
        }
    }
}

impl Display for ImportCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[文件 {}/{} {}]", self.file_index, self.total, self.name)
    }
}
