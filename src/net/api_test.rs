use super::*;

#[test]
fn ok_status_with_response_yields_text() {
    assert_eq!(interpret_response(200, r#"{"response":"Hello"}"#), Ok("Hello".to_owned()));
}

#[test]
fn ok_status_with_error_field_is_application_error() {
    assert_eq!(
        interpret_response(200, r#"{"error":"API quota exceeded. Please try again later."}"#),
        Err(ChatError::Application("API quota exceeded. Please try again later.".to_owned()))
    );
}

#[test]
fn server_error_with_error_field_keeps_application_error() {
    assert_eq!(
        interpret_response(500, r#"{"error":"API quota exceeded. Please try again later."}"#),
        Err(ChatError::Application("API quota exceeded. Please try again later.".to_owned()))
    );
}

#[test]
fn non_2xx_with_response_field_is_status_error() {
    assert_eq!(interpret_response(404, r#"{"response":"nope"}"#), Err(ChatError::Status(404)));
}

#[test]
fn non_2xx_with_html_body_is_status_error() {
    assert_eq!(interpret_response(403, "<h1>CSRF verification failed</h1>"), Err(ChatError::Status(403)));
}

#[test]
fn ok_status_with_malformed_body_is_decode_error() {
    assert!(matches!(interpret_response(200, "not json"), Err(ChatError::Decode(_))));
}

#[test]
fn ok_status_with_empty_object_is_decode_error() {
    assert!(matches!(interpret_response(200, "{}"), Err(ChatError::Decode(_))));
}

#[test]
fn other_2xx_statuses_count_as_success() {
    assert_eq!(interpret_response(201, r#"{"response":"made"}"#), Ok("made".to_owned()));
}

#[test]
fn multipart_field_names_match_endpoint_contract() {
    assert_eq!(MESSAGE_FIELD, "message");
    assert_eq!(FILE_FIELD, "file");
}
