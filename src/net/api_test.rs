use super::*;

// =============================================================
// parse_reply
// =============================================================

#[test]
fn parse_reply_extracts_reply_field() {
    let body = r#"{"reply":"The rover uses LiDAR and stereo cameras."}"#;
    assert_eq!(
        parse_reply(body).expect("reply"),
        "The rover uses LiDAR and stereo cameras."
    );
}

#[test]
fn parse_reply_ignores_extra_fields() {
    let body = r#"{"reply":"ok","model":"llama-3.1-8b-instant"}"#;
    assert_eq!(parse_reply(body).expect("reply"), "ok");
}

#[test]
fn parse_reply_rejects_missing_reply_field() {
    assert_eq!(
        parse_reply(r#"{"detail":"Groq model error. Try again."}"#),
        Err(SendError::Malformed)
    );
}

#[test]
fn parse_reply_rejects_invalid_json() {
    assert_eq!(parse_reply("<html>502 Bad Gateway</html>"), Err(SendError::Malformed));
}

#[test]
fn parse_reply_rejects_non_string_reply() {
    assert_eq!(parse_reply(r#"{"reply":42}"#), Err(SendError::Malformed));
}

// =============================================================
// SendError display
// =============================================================

#[test]
fn send_error_display_includes_status_code() {
    assert_eq!(SendError::Status(500).to_string(), "server error: 500");
}

#[test]
fn send_error_display_includes_network_detail() {
    assert_eq!(
        SendError::Network("connection refused".to_owned()).to_string(),
        "network error: connection refused"
    );
}

#[test]
fn chat_request_serializes_to_wire_shape() {
    let body = serde_json::to_string(&ChatRequest { message: "hello" }).expect("json");
    assert_eq!(body, r#"{"message":"hello"}"#);
}
