use super::*;

#[test]
fn parse_success_response() {
    let body = serde_json::json!({
        "response": "{\"title\":\"x\"}",
        "usage": { "prompt_tokens": 10, "completion_tokens": 20 }
    })
    .to_string();
    let text = parse_response(200, &body).unwrap();
    assert_eq!(text, "{\"title\":\"x\"}");
}

#[test]
fn parse_error_status_with_payload() {
    let body = serde_json::json!({ "error": "Failed to get response from Claude API", "details": "Rate limit exceeded" })
        .to_string();
    let err = parse_response(429, &body).unwrap_err();
    match err {
        CompletionError::Backend { message, details } => {
            assert!(message.contains("Failed to get response"));
            assert_eq!(details.as_deref(), Some("Rate limit exceeded"));
        }
        other => panic!("expected Backend error, got {other:?}"),
    }
}

#[test]
fn parse_error_status_without_payload() {
    let err = parse_response(502, "<html>bad gateway</html>").unwrap_err();
    assert!(matches!(err, CompletionError::ApiResponse { status: 502, .. }));
}

#[test]
fn parse_ok_status_with_error_field() {
    let body = serde_json::json!({ "error": "Internal server error", "message": "boom" }).to_string();
    let err = parse_response(200, &body).unwrap_err();
    assert!(matches!(err, CompletionError::Backend { ref details, .. } if details.as_deref() == Some("boom")));
}

#[test]
fn parse_missing_response_field() {
    let err = parse_response(200, "{}").unwrap_err();
    assert!(matches!(err, CompletionError::ApiParse(_)));
}

#[test]
fn parse_invalid_json() {
    let err = parse_response(200, "not json").unwrap_err();
    assert!(matches!(err, CompletionError::ApiParse(_)));
}

#[test]
fn url_joins_function_path() {
    let timeouts = Timeouts { request_secs: 1, connect_secs: 1 };
    let client = ProxyClient::new("https://project.supabase.test/", "key".into(), timeouts).unwrap();
    assert_eq!(client.url, "https://project.supabase.test/functions/v1/claude-chat");
}
