//! Integration tests for single round-trip generation

use crate::integration::mock_server::MockServerFixture;
use flexudy_gateway::client::error_classification::{
    HTTP_FORBIDDEN_MESSAGE, HTTP_UNAUTHORIZED_MESSAGE,
};
use flexudy_gateway::client::payload::NO_CONTENT_MESSAGE;
use flexudy_gateway::{ContentFile, ContentRequest, ContentType, ErrorKind};

const CLOZE_PATH: &str = "/api/v1/cloze-quiz/generate";
const WH_PATH: &str = "/api/v1/wh-quiz/generate";
const SUMMARY_PATH: &str = "/api/v1/summary/generate";

#[tokio::test]
async fn test_generate_cloze_quiz() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_post_containing(
            CLOZE_PATH,
            "The capital of France is Paris",
            200,
            r#"[{"questionAnswer":"The capital of France is @_Paris_@"}]"#,
        )
        .await;
    let client = fixture.create_test_client().unwrap();

    let request = ContentRequest::new().with_text("The capital of France is Paris");
    let questions = client.generate_cloze_quiz(&request).await.unwrap();

    mock.assert_async().await;
    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].question(), "The capital of France is ______");
    assert_eq!(questions[0].answer(), "Paris");
}

#[tokio::test]
async fn test_generate_wh_quiz_from_url() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_post_containing(
            WH_PATH,
            "https://flexudy.com",
            200,
            r#"[{"question":"What is the capital of the UAE?","answer":"Abu Dhabi"}]"#,
        )
        .await;
    let client = fixture.create_test_client().unwrap();

    let request = ContentRequest::new().with_url("https://flexudy.com");
    let questions = client.generate_wh_quiz(&request).await.unwrap();

    mock.assert_async().await;
    assert_eq!(questions[0].question(), "What is the capital of the UAE?");
    assert_eq!(questions[0].answer(), "Abu Dhabi");
}

#[tokio::test]
async fn test_generate_summary_from_file() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_post_containing(
            SUMMARY_PATH,
            "lecture-notes.txt",
            200,
            r#"{"summary":["This is a summary","Second fact"]}"#,
        )
        .await;
    let client = fixture.create_test_client().unwrap();

    let request = ContentRequest::new()
        .with_file(ContentFile::from_bytes("notes about photosynthesis").with_name("lecture-notes.txt"))
        .with_content_type(ContentType::Document);
    let summary = client.generate_summary(&request).await.unwrap();

    mock.assert_async().await;
    assert_eq!(summary.len(), 2);
    assert_eq!(summary.facts()[0], "This is a summary");
}

#[tokio::test]
async fn test_unauthorized_and_forbidden_messages() {
    for (status, expected) in [(401u16, HTTP_UNAUTHORIZED_MESSAGE), (403, HTTP_FORBIDDEN_MESSAGE)] {
        let fixture = MockServerFixture::new().await;
        let _mock = fixture.mock_post(SUMMARY_PATH, status, "").await;
        let client = fixture.create_test_client().unwrap();

        let err = client
            .generate_summary(&ContentRequest::new().with_text("x"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Remote);
        assert_eq!(err.status(), Some(status));
        assert_eq!(err.message(), expected);
    }
}

#[tokio::test]
async fn test_server_error_carries_body() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_post(CLOZE_PATH, 500, "model overloaded").await;
    let client = fixture.create_test_client().unwrap();

    let err = client
        .generate_cloze_quiz(&ContentRequest::new().with_text("x"))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert_eq!(
        err.message(),
        "An error occurred during processing, Status Code: 500, message: model overloaded"
    );
    assert!(!err.kind().is_local());
}

#[tokio::test]
async fn test_empty_success_body_is_decode_error() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_post(WH_PATH, 200, "").await;
    let client = fixture.create_test_client().unwrap();

    let err = client
        .generate_wh_quiz(&ContentRequest::new().with_text("x"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
    assert!(err.kind().is_local());
}

#[tokio::test]
async fn test_validation_failures_send_nothing() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture.mock_post_never(CLOZE_PATH).await;
    let client = fixture.create_test_client().unwrap();

    let err = client
        .generate_cloze_quiz(&ContentRequest::new())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(err.message(), NO_CONTENT_MESSAGE);

    let err = client
        .generate_cloze_quiz(&ContentRequest::new().with_url("http"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(err.message(), "http is not a valid URL");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_unreadable_file_sends_nothing() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture.mock_post_never(SUMMARY_PATH).await;
    let client = fixture.create_test_client().unwrap();

    let request =
        ContentRequest::new().with_file(ContentFile::from_path("/definitely/not/here.pdf"));
    let err = client.generate_summary(&request).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);

    mock.assert_async().await;
}
