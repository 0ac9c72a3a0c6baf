//! 批量检索运行器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责一次完整运行的生命周期。
//!
//! ## 核心流程
//!
//! 1. **应用初始化**：创建检索客户端、结果写入服务
//! 2. **加载任务**：内置任务表或 `SCHOLAR_QUERIES_FILE` 指定的 TOML
//! 3. **并发检索**：委托 `fan_out::run_all`，全部完成后才继续
//! 4. **保存结果**：整批写入 JSON 文件
//! 5. **输出摘要**：每个分类一行，写到 stdout
//!
//! 任一请求失败时整批中止，不写结果文件。

use crate::clients::{HttpScholarClient, ScholarClient};
use crate::config::Config;
use crate::models::{resolve_query_table, QueryTable, ResultBundle};
use crate::orchestrator::fan_out;
use crate::services::{print_summary, ResultWriter};
use crate::utils::logging::{log_queries_loaded, log_startup, print_final_stats};
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

/// 应用主结构
pub struct App {
    config: Config,
    client: Arc<dyn ScholarClient>,
    writer: ResultWriter,
}

impl App {
    /// 使用 HTTP 检索客户端初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        let client = Arc::new(HttpScholarClient::new(&config));
        Ok(Self::with_client(config, client))
    }

    /// 使用指定的检索客户端初始化应用
    pub fn with_client(config: Config, client: Arc<dyn ScholarClient>) -> Self {
        log_startup(&config.scholar_api_base_url, &config.output_file);

        let writer = ResultWriter::with_path(&config.output_file);
        Self {
            config,
            client,
            writer,
        }
    }

    /// 运行应用主逻辑，返回本次的检索结果
    pub async fn run(&self) -> Result<ResultBundle> {
        let table = self.load_queries().await?;

        let bundle = fan_out::run_all(self.client.as_ref(), &table)
            .await
            .context("并发检索中止，未写入结果文件")?;

        self.writer
            .write(&bundle)
            .await
            .with_context(|| format!("无法保存检索结果: {}", self.config.output_file))?;

        print_summary(&bundle);

        print_final_stats(
            bundle.success_count(),
            bundle.len(),
            bundle.total_papers(),
            &self.config.output_file,
        );

        Ok(bundle)
    }

    /// 加载检索任务
    async fn load_queries(&self) -> Result<QueryTable> {
        info!("\n📁 正在加载检索任务...");
        let source = self.config.queries_file.as_deref().unwrap_or("内置任务表");

        let table = resolve_query_table(self.config.queries_file.as_deref())
            .await
            .with_context(|| format!("无法加载检索任务: {}", source))?;

        log_queries_loaded(table.len(), source);
        Ok(table)
    }
}
