//! 并发检索 - 编排层
//!
//! 所有检索任务先全部发起，再在同一个汇合点统一等待。
//! 结果按提交顺序与分类名对应，和完成先后无关。
//! 任一请求本身失败（返回 `Err`）时整批中止，其余请求被丢弃；
//! 服务端返回的错误结果（`success: false`）不影响其他分类。

use crate::clients::ScholarClient;
use crate::error::AppResult;
use crate::models::{QuerySpec, QueryTable, ResultBundle, SearchResult};
use futures::future::try_join_all;
use std::time::Instant;
use tracing::{debug, warn};

/// 并发执行全部检索任务
pub async fn run_all<C>(client: &C, table: &QueryTable) -> AppResult<ResultBundle>
where
    C: ScholarClient + ?Sized,
{
    let searches = table
        .queries
        .iter()
        .enumerate()
        .map(|(idx, spec)| run_one(client, idx + 1, spec));

    let results = try_join_all(searches).await?;

    Ok(table
        .queries
        .iter()
        .map(|spec| spec.topic.clone())
        .zip(results)
        .collect())
}

async fn run_one<C>(client: &C, index: usize, spec: &QuerySpec) -> AppResult<SearchResult>
where
    C: ScholarClient + ?Sized,
{
    let started = Instant::now();
    debug!(
        "[检索 {}] 发起: {} ({} 条, {}-{})",
        index, spec.topic, spec.max_results, spec.start_year, spec.end_year
    );

    let outcome = client
        .search_scholar(
            &spec.query_text,
            spec.max_results,
            &spec.start_year,
            &spec.end_year,
        )
        .await;

    match &outcome {
        Ok(result) => debug!(
            "[检索 {}] 完成: {} success={} 耗时 {:?}",
            index,
            spec.topic,
            result.is_success(),
            started.elapsed()
        ),
        Err(e) => warn!("[检索 {}] ❌ {} 请求失败: {}", index, spec.topic, e),
    }

    outcome
}
