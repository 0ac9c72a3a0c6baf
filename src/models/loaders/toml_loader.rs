use crate::error::{AppError, AppResult};
use crate::models::query::QueryTable;
use std::path::Path;
use tokio::fs;

/// 编译进程序的默认检索任务表
const DEFAULT_QUERIES: &str = include_str!("../../../queries.toml");

/// 解析内置任务表
pub fn default_query_table() -> AppResult<QueryTable> {
    let table: QueryTable = toml::from_str(DEFAULT_QUERIES)?;
    table.validate()?;
    Ok(table)
}

/// 从 TOML 文件加载检索任务表
pub async fn load_query_table(toml_file_path: &Path) -> AppResult<QueryTable> {
    let path_str = toml_file_path.display().to_string();

    let content = fs::read_to_string(toml_file_path)
        .await
        .map_err(|e| AppError::file_read_failed(&path_str, e))?;

    let table: QueryTable =
        toml::from_str(&content).map_err(|e| AppError::toml_parse_failed(&path_str, e))?;

    table.validate()?;
    tracing::info!("成功加载 {} 个检索任务: {}", table.len(), path_str);

    Ok(table)
}

/// 有外部文件时加载外部文件，否则使用内置任务表
pub async fn resolve_query_table(queries_file: Option<&str>) -> AppResult<QueryTable> {
    match queries_file {
        Some(path) => load_query_table(Path::new(path)).await,
        None => default_query_table(),
    }
}
