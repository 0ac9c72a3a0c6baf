use scholar_search::{AppError, Config, HttpScholarClient, ScholarClient};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer, api_key: &str) -> HttpScholarClient {
    let config = Config {
        scholar_api_base_url: server.uri(),
        scholar_api_key: api_key.to_string(),
        ..Config::default()
    };
    HttpScholarClient::new(&config)
}

#[tokio::test]
async fn posts_query_and_returns_body_verbatim() {
    let server = MockServer::start().await;
    let body = json!({
        "success": true,
        "data": {"papers": [{"title": "A"}, {"title": "B"}], "total": 2}
    });

    Mock::given(method("POST"))
        .and(path("/scholar/search"))
        .and(header("authorization", "Bearer secret-key"))
        .and(body_json(json!({
            "query": "automated report generation machine learning",
            "num_results": 20,
            "start_year": "2020",
            "end_year": "2025"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, "secret-key");
    let result = client
        .search_scholar("automated report generation machine learning", 20, "2020", "2025")
        .await
        .unwrap_or_else(|e| panic!("Expected Ok, got Err: {e}"));

    assert!(result.is_success());
    assert_eq!(result.paper_count(), 2);
    assert_eq!(result.as_value(), &body);
}

#[tokio::test]
async fn error_json_on_non_success_status_is_passed_through() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/scholar/search"))
        .respond_with(
            ResponseTemplate::new(429).set_body_json(json!({"success": false, "error": "rate limited"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server, "");
    let result = client
        .search_scholar("content aggregation news summarization NLP", 20, "2020", "2025")
        .await
        .unwrap_or_else(|e| panic!("Expected Ok, got Err: {e}"));

    assert!(!result.is_success());
    assert_eq!(result.error_message(), "rate limited");
}

#[tokio::test]
async fn non_json_body_is_a_fault() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/scholar/search"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let client = client_for(&server, "");
    let err = client
        .search_scholar("q", 5, "2020", "2025")
        .await
        .expect_err("非 JSON 响应应返回错误");

    match err {
        AppError::Api(api) => {
            let msg = api.to_string();
            assert!(msg.contains("502"));
            assert!(msg.contains("Bad Gateway"));
        }
        other => panic!("Expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_service_is_a_fault() {
    let config = Config {
        // 端口 9 (discard) 通常无人监听
        scholar_api_base_url: "http://127.0.0.1:9".to_string(),
        ..Config::default()
    };
    let client = HttpScholarClient::new(&config);

    let err = client
        .search_scholar("q", 5, "2020", "2025")
        .await
        .expect_err("连接失败应返回错误");

    assert!(err.to_string().contains("API请求失败"));
}
