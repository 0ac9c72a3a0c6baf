//! 结果写入服务 - 业务能力层
//!
//! 只负责"保存结果文件"和"打印摘要"，不关心检索流程

use crate::error::{AppError, AppResult};
use crate::models::ResultBundle;
use std::fmt::Write as _;
use std::path::PathBuf;
use tracing::debug;

/// 结果写入服务
///
/// 职责：
/// - 将整批结果以 2 空格缩进的 JSON 覆盖写入文件
/// - 生成每个分类一行的摘要
pub struct ResultWriter {
    output_path: PathBuf,
}

impl ResultWriter {
    /// 使用指定文件路径创建
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: path.into(),
        }
    }

    /// 写入结果文件，已存在则覆盖
    ///
    /// 父目录不存在或无权限时直接返回错误，不做恢复
    pub async fn write(&self, bundle: &ResultBundle) -> AppResult<()> {
        let path = self.output_path.display().to_string();
        let json = serde_json::to_string_pretty(bundle)
            .map(|text| escape_non_ascii(&text))
            .map_err(|e| AppError::file_write_failed(&path, e))?;

        debug!("写入结果文件: {} ({} 字节)", path, json.len());

        tokio::fs::write(&self.output_path, json)
            .await
            .map_err(|e| AppError::file_write_failed(path, e))
    }
}

/// 非 ASCII 字符写成 `\uXXXX`（超出 BMP 的字符拆成代理对）
///
/// JSON 的结构字符都是 ASCII，非 ASCII 字符只会出现在字符串里，逐字符替换即可
fn escape_non_ascii(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    let mut units = [0u16; 2];
    for ch in json.chars() {
        if ch.is_ascii() {
            out.push(ch);
        } else {
            for unit in ch.encode_utf16(&mut units) {
                let _ = write!(out, "\\u{:04x}", unit);
            }
        }
    }
    out
}

/// 生成摘要，每个分类一行，顺序与结果一致
pub fn summary_lines(bundle: &ResultBundle) -> Vec<String> {
    bundle
        .iter()
        .map(|(topic, result)| {
            if result.is_success() {
                format!("{}: Found {} papers", topic, result.paper_count())
            } else {
                format!("{}: Search failed - {}", topic, result.error_message())
            }
        })
        .collect()
}

/// 打印摘要到 stdout
pub fn print_summary(bundle: &ResultBundle) {
    for line in summary_lines(bundle) {
        println!("{}", line);
    }
}
