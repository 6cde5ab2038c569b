use super::*;

// =============================================================
// ChatResponse decoding
// =============================================================

#[test]
fn response_field_becomes_ok() {
    let body: ChatResponse = serde_json::from_str(r#"{"response":"Hello"}"#).expect("valid json");
    assert_eq!(body.into_result(), Ok("Hello".to_owned()));
}

#[test]
fn error_field_becomes_application_error() {
    let body: ChatResponse = serde_json::from_str(r#"{"error":"Message cannot be empty"}"#).expect("valid json");
    assert_eq!(body.into_result(), Err(ChatError::Application("Message cannot be empty".to_owned())));
}

#[test]
fn error_field_wins_over_response_field() {
    let body: ChatResponse = serde_json::from_str(r#"{"response":"hi","error":"boom"}"#).expect("valid json");
    assert_eq!(body.into_result(), Err(ChatError::Application("boom".to_owned())));
}

#[test]
fn empty_object_is_decode_error() {
    let body: ChatResponse = serde_json::from_str("{}").expect("valid json");
    assert!(matches!(body.into_result(), Err(ChatError::Decode(_))));
}

#[test]
fn unknown_fields_are_ignored() {
    let body: ChatResponse =
        serde_json::from_str(r#"{"response":"ok","session":"abc"}"#).expect("valid json");
    assert_eq!(body.response.as_deref(), Some("ok"));
}

// =============================================================
// Fallback mapping
// =============================================================

#[test]
fn quota_error_maps_to_busy_text() {
    let fallbacks = FallbackMessages::default();
    let err = ChatError::Application("API quota exceeded. Please try again later.".to_owned());
    assert_eq!(err.fallback_text(&fallbacks), fallbacks.busy);
}

#[test]
fn other_application_error_maps_to_generic_text() {
    let fallbacks = FallbackMessages::default();
    let err = ChatError::Application("Session error. Please refresh the page.".to_owned());
    assert_eq!(err.fallback_text(&fallbacks), fallbacks.generic);
}

#[test]
fn transport_and_status_errors_map_to_generic_text() {
    let fallbacks = FallbackMessages::default();
    for err in [
        ChatError::Transport("offline".to_owned()),
        ChatError::Status(502),
        ChatError::Decode("eof".to_owned()),
        ChatError::Unavailable,
    ] {
        assert_eq!(err.fallback_text(&fallbacks), fallbacks.generic);
    }
}

#[test]
fn quota_text_outside_application_error_is_generic() {
    let fallbacks = FallbackMessages::default();
    let err = ChatError::Transport("API quota exceeded. Please try again later.".to_owned());
    assert_eq!(err.fallback_text(&fallbacks), fallbacks.generic);
}

#[test]
fn chat_error_display_includes_detail() {
    assert_eq!(ChatError::Status(500).to_string(), "chat request failed: 500");
    assert_eq!(ChatError::Application("x".to_owned()).to_string(), "chat endpoint error: x");
}

// =============================================================
// EmojiSelection
// =============================================================

#[test]
fn emoji_selection_reads_native_and_ignores_the_rest() {
    let sel: EmojiSelection = serde_json::from_str(
        r#"{"id":"slightly_smiling_face","name":"Slightly Smiling Face","native":"🙂","unified":"1f642"}"#,
    )
    .expect("valid json");
    assert_eq!(sel.native, "🙂");
}
