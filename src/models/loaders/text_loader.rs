//! 原始题目文本加载
//!
//! 从指定文件夹加载待导入的 `.txt` 题目堆文件。

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// 一份待导入的原始题目文本
#[derive(Debug, Clone)]
pub struct RawDump {
    /// 不含扩展名的文件名，用作分类名称和输出文件名
    pub name: String,
    /// 原始文本内容
    pub text: String,
    pub file_path: PathBuf,
}

/// 读取单个文本文件
pub async fn load_text_file(path: &Path) -> Result<RawDump> {
    let text = fs::read_to_string(path)
        .await
        .with_context(|| format!("无法读取文本文件: {}", path.display()))?;

    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "untitled".to_string());

    Ok(RawDump {
        name,
        text,
        file_path: path.to_path_buf(),
    })
}

/// 从文件夹中加载所有 `.txt` 文件
///
/// # 返回
/// 返回按文件名排序的原始文本列表。单个文件读取失败只记 warn，不中断整批。
pub async fn load_all_text_files(folder_path: &str) -> Result<Vec<RawDump>> {
    let folder = PathBuf::from(folder_path);

    if !folder.exists() {
        anyhow::bail!("文件夹不存在: {}", folder_path);
    }

    let mut paths = Vec::new();
    let mut entries = fs::read_dir(&folder)
        .await
        .with_context(|| format!("无法读取文件夹: {}", folder_path))?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("txt") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut dumps = Vec::new();
    for path in paths {
        tracing::info!(
            "正在加载: {}",
            path.file_name().unwrap_or_default().to_string_lossy()
        );
        match load_text_file(&path).await {
            Ok(dump) => dumps.push(dump),
            Err(e) => {
                tracing::warn!("加载文件失败 {}: {}", path.display(), e);
            }
        }
    }

    Ok(dumps)
}
