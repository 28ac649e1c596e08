use super::*;

/// Tests a body satisfying every rule binds to its content.
///
/// Expected: Ok(CreateMessageDto) with the submitted values
#[test]
fn binds_valid_body() {
    let dto: CreateMessageDto =
        bind_body(br#"{"type":"feedback","msg":"Great articles!"}"#).unwrap();

    assert_eq!(dto.msg_type, "feedback");
    assert_eq!(dto.msg, "Great articles!");
}

/// Tests binding the same body twice yields equal payloads.
///
/// Expected: Both payloads are field-wise equal
#[test]
fn binding_is_idempotent() {
    let body = br#"{"name":"Ada","age":36}"#;

    let first: ProfileDto = bind_body(body).unwrap();
    let second: ProfileDto = bind_body(body).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        first,
        ProfileDto {
            name: "Ada".to_string(),
            age: 36
        }
    );
}

/// Tests a single failing field yields exactly its message.
///
/// Expected: Err(InvalidInput("msg is required")) with no separator
#[test]
fn single_failure_yields_its_message() {
    let message = invalid_message(bind_body::<CreateMessageDto>(
        br#"{"type":"feedback","msg":"   "}"#,
    ));

    assert_eq!(message, "msg is required");
}

/// Tests two failing fields are joined in declaration order.
///
/// Expected: Err(InvalidInput("name is required, age must be between 1 and 150"))
#[test]
fn two_failures_join_in_declaration_order() {
    let message = invalid_message(bind_body::<ProfileDto>(br#"{"name":"","age":0}"#));

    assert_eq!(message, "name is required, age must be between 1 and 150");
}

/// Tests missing required fields are reported as invalid rather than malformed.
///
/// Expected: Err(InvalidInput) naming both fields without double separators
#[test]
fn missing_fields_are_invalid_input() {
    let message = invalid_message(bind_body::<CreateMessageDto>(b"{}"));

    assert_eq!(message, "type is required, msg is required");
    assert!(!message.contains(", , "));
    assert!(!message.ends_with(", "));
}

/// Tests a length rule uses the DTO's own wording.
///
/// Expected: Err(InvalidInput("type must be between 2 and 50 characters"))
#[test]
fn length_failure_uses_custom_message() {
    let message = invalid_message(bind_body::<CreateMessageDto>(
        br#"{"type":"x","msg":"hello"}"#,
    ));

    assert_eq!(message, "type must be between 2 and 50 characters");
}

/// Tests invalid JSON syntax is reported as malformed input.
///
/// Expected: Err(MalformedInput(DecodeError::Json))
#[test]
fn rejects_invalid_json() {
    let result = bind_body::<CreateMessageDto>(b"{not json");

    assert!(matches!(
        result,
        Err(RequestError::MalformedInput(DecodeError::Json(_)))
    ));
}

/// Tests a value of the wrong type is reported as malformed input.
///
/// Expected: Err(MalformedInput(DecodeError::Json))
#[test]
fn rejects_wrong_field_type() {
    let result = bind_body::<ProfileDto>(br#"{"name":"Ada","age":"old"}"#);

    assert!(matches!(
        result,
        Err(RequestError::MalformedInput(DecodeError::Json(_)))
    ));
}

/// Tests an empty blog draft reports every failing field in declaration order.
///
/// Expected: Err(InvalidInput) listing title, description, draftText, slug and tags
#[test]
fn empty_blog_reports_fields_in_order() {
    let message = invalid_message(bind_body::<CreateBlogDto>(b"{}"));

    assert_eq!(
        message,
        "title is required, description is required, draftText is required, \
         slug is required, tags must contain at least one tag"
    );
}

/// Tests blog specific rules are worded by the DTO.
///
/// Expected: Err(InvalidInput) with the slug, image URL and tag messages
#[test]
fn blog_format_rules_use_custom_messages() {
    let body = br#"{
        "title": "Writing extractors",
        "description": "How request binding works",
        "draftText": "Draft body",
        "slug": "Writing--Extractors",
        "imgUrl": "not a url",
        "tags": ["RUST", "axum"]
    }"#;

    let message = invalid_message(bind_body::<CreateBlogDto>(body));

    assert_eq!(
        message,
        "slug must contain only lowercase letters, digits and single hyphens, \
         imgUrl must be a valid url, every tag must be uppercase"
    );
}

/// Tests surrounding whitespace is removed before the length rules run.
///
/// Expected: Err(InvalidInput("type must be between 2 and 50 characters")) for " a "
#[test]
fn padded_type_is_judged_trimmed() {
    let message = invalid_message(bind_body::<CreateMessageDto>(
        br#"{"type":" a ","msg":"hello"}"#,
    ));

    assert_eq!(message, "type must be between 2 and 50 characters");
}

/// Tests a padded message binds to its trimmed text.
///
/// Expected: Ok(CreateMessageDto) without surrounding whitespace
#[test]
fn binds_trimmed_message() {
    let dto: CreateMessageDto =
        bind_body(br#"{"type":" feedback ","msg":"  Great articles!\n"}"#).unwrap();

    assert_eq!(dto.msg_type, "feedback");
    assert_eq!(dto.msg, "Great articles!");
}

/// Tests padded blog title, description and tags are trimmed before validation.
///
/// Expected: Err(InvalidInput) with the title and description length messages
#[test]
fn padded_blog_fields_are_judged_trimmed() {
    let body = br#"{
        "title": "  ab  ",
        "description": " xy ",
        "draftText": "Draft body",
        "slug": "writing-extractors",
        "tags": [" RUST "]
    }"#;

    let message = invalid_message(bind_body::<CreateBlogDto>(body));

    assert_eq!(
        message,
        "title must be between 3 and 500 characters, \
         description must be between 3 and 2000 characters"
    );
}

/// Tests a valid blog draft binds with camelCase fields.
///
/// Expected: Ok(CreateBlogDto) with draft text, image URL and tags populated
#[test]
fn binds_valid_blog() {
    let body = br#"{
        "title": "Writing extractors",
        "description": "How request binding works",
        "draftText": "Draft body",
        "slug": "writing-extractors",
        "imgUrl": "https://example.com/cover.png",
        "tags": ["RUST", "AXUM"]
    }"#;

    let dto: CreateBlogDto = bind_body(body).unwrap();

    assert_eq!(dto.draft_text, "Draft body");
    assert_eq!(dto.img_url.as_deref(), Some("https://example.com/cover.png"));
    assert_eq!(dto.tags, vec!["RUST".to_string(), "AXUM".to_string()]);
}

/// Tests the body extractor hands back the validated payload.
///
/// Expected: Ok(ReqBody(CreateMessageDto))
#[tokio::test]
async fn extractor_binds_request_body() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/contact")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"type":"feedback","msg":"hello"}"#))
        .unwrap();

    let ReqBody(dto) = ReqBody::<CreateMessageDto>::from_request(request, &())
        .await
        .unwrap();

    assert_eq!(dto.msg_type, "feedback");
    assert_eq!(dto.msg, "hello");
}

/// Tests the body extractor rejects invalid input with 400 Bad Request.
///
/// Expected: Err(AppError::RequestErr(InvalidInput)) rendering as 400
#[tokio::test]
async fn extractor_rejects_invalid_body() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/contact")
        .body(Body::from(r#"{"type":"feedback"}"#))
        .unwrap();

    let rejection = match ReqBody::<CreateMessageDto>::from_request(request, &()).await {
        Err(rejection) => rejection,
        Ok(_) => panic!("expected rejection"),
    };

    assert!(matches!(
        &rejection,
        AppError::RequestErr(RequestError::InvalidInput(message)) if message == "msg is required"
    ));
    assert_eq!(rejection.into_response().status(), StatusCode::BAD_REQUEST);
}
