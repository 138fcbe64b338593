use async_trait::async_trait;
use page_fetch::{BoxError, FetchRequest, PageFetch, ResponseType, ScriptEvaluator};
use serde_json::{json, Value};

/// 模拟页面：返回固定值或固定错误
enum StubPage {
    Reply(Value),
    Throw(&'static str),
}

#[async_trait]
impl ScriptEvaluator for StubPage {
    async fn eval_function(&self, _function: &str) -> Result<Value, BoxError> {
        match self {
            StubPage::Reply(value) => Ok(value.clone()),
            StubPage::Throw(message) => Err((*message).into()),
        }
    }
}

#[tokio::test]
async fn test_fetch_decodes_response() {
    let fetcher = PageFetch::new(StubPage::Reply(json!({
        "type": "basic",
        "url": "http://x/y",
        "status": 200,
        "headers": {"content-type": ["text/plain"]},
        "body": "hello"
    })));

    let resp = fetcher.fetch("http://x/y", &FetchRequest::new()).await.unwrap();

    assert_eq!(resp.response_type, ResponseType::Basic);
    assert_eq!(resp.status, 200);
    assert_eq!(resp.url, "http://x/y");
    assert_eq!(resp.body, "hello");
    assert_eq!(resp.headers["content-type"], vec!["text/plain".to_string()]);
}

#[tokio::test]
async fn test_fetch_keeps_repeated_headers() {
    let fetcher = PageFetch::new(StubPage::Reply(json!({
        "type": "cors",
        "url": "https://example.com/login",
        "status": 302,
        "headers": {"set-cookie": ["a=1", "b=2"]},
        "body": ""
    })));

    let resp = fetcher.get("https://example.com/login").await.unwrap();
    assert_eq!(resp.header_values("set-cookie").unwrap().len(), 2);
    assert!(!resp.is_success());
}

#[tokio::test]
async fn test_evaluation_failure_is_reported() {
    let fetcher = PageFetch::new(StubPage::Throw("TypeError: Failed to fetch"));

    let err = fetcher
        .fetch("http://unreachable/", &FetchRequest::post("x"))
        .await
        .unwrap_err();

    assert!(err.is_evaluation());
    assert!(err.to_string().contains("Failed to fetch"));
}

#[tokio::test]
async fn test_non_numeric_status_is_decode_error() {
    let fetcher = PageFetch::new(StubPage::Reply(json!({
        "type": "basic",
        "url": "http://x/y",
        "status": "OK",
        "headers": {},
        "body": "hello"
    })));

    let err = fetcher.get("http://x/y").await.unwrap_err();
    assert!(err.is_decode());
}

#[tokio::test]
async fn test_missing_field_is_decode_error() {
    let fetcher = PageFetch::new(StubPage::Reply(json!({
        "type": "basic",
        "url": "http://x/y",
        "status": 200
    })));

    let err = fetcher.get("http://x/y").await.unwrap_err();
    assert!(err.is_decode());
}

#[tokio::test]
async fn test_null_result_is_decode_error() {
    let fetcher = PageFetch::new(StubPage::Reply(Value::Null));

    let err = fetcher.get("http://x/y").await.unwrap_err();
    assert!(err.is_decode());
}
