/// 学术检索 API 客户端
///
/// 封装所有与学术检索服务相关的调用逻辑
use crate::config::Config;
use crate::error::{ApiError, AppError, AppResult};
use crate::models::SearchResult;
use crate::utils::logging::truncate_text;
use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;

/// 学术检索能力
///
/// 实现必须可以被多个并发调用共享
#[async_trait]
pub trait ScholarClient: Send + Sync {
    /// 检索论文
    ///
    /// 服务端返回的错误结果（`success: false`）原样返回；
    /// 只有请求本身失败时才返回 `Err`
    async fn search_scholar(
        &self,
        query: &str,
        num_results: u32,
        start_year: &str,
        end_year: &str,
    ) -> AppResult<SearchResult>;
}

/// 基于 HTTP 的学术检索客户端
pub struct HttpScholarClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpScholarClient {
    /// 创建新的检索客户端
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.scholar_api_base_url.trim_end_matches('/').to_string(),
            api_key: config.scholar_api_key.clone(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/scholar/search", self.base_url)
    }
}

#[async_trait]
impl ScholarClient for HttpScholarClient {
    async fn search_scholar(
        &self,
        query: &str,
        num_results: u32,
        start_year: &str,
        end_year: &str,
    ) -> AppResult<SearchResult> {
        let endpoint = self.endpoint();
        let payload = json!({
            "query": query,
            "num_results": num_results,
            "start_year": start_year,
            "end_year": end_year
        });

        debug!("检索请求 Payload: {}", payload);

        let mut request = self.http.post(&endpoint).json(&payload);
        if !self.api_key.is_empty() {
            request = request.bearer_auth(&self.api_key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(&endpoint, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::api_request_failed(&endpoint, e))?;

        // 只要响应体是 JSON 就原样交给调用方，包括非 2xx 的错误结果
        match serde_json::from_str::<Value>(&body) {
            Ok(value) => {
                debug!("检索结果: status={} 长度={}", status, body.len());
                Ok(SearchResult::new(value))
            }
            Err(_) => Err(ApiError::BadResponse {
                endpoint,
                status: status.as_u16(),
                body: truncate_text(&body, 200),
            }
            .into()),
        }
    }
}
