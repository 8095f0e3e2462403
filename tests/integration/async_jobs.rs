//! Integration tests for queued jobs: submit, poll, cancel, time out

use crate::integration::mock_server::MockServerFixture;
use flexudy_gateway::{AsyncJobRequest, ContentRequest, ErrorKind};
use std::time::Duration;

const CLOZE_QUEUE: &str = "/api/v1/cloze-quiz/queue";
const CLOZE_RESULTS: &str = "/api/v1/cloze-quiz/queue/results";
const WH_QUEUE: &str = "/api/v1/wh-quiz/queue";
const WH_RESULTS: &str = "/api/v1/wh-quiz/queue/results";
const SUMMARY_QUEUE: &str = "/api/v1/summary/queue";
const SUMMARY_RESULTS: &str = "/api/v1/summary/queue/results";

fn job(text: &str) -> AsyncJobRequest {
    AsyncJobRequest::new(ContentRequest::new().with_text(text)).with_poll_interval_secs(0)
}

#[tokio::test]
async fn test_cloze_job_completes() {
    let fixture = MockServerFixture::new().await;
    let submit = fixture.mock_post(CLOZE_QUEUE, 200, r#"{"jobId":7}"#).await;
    let results = fixture
        .mock_results(
            CLOZE_RESULTS,
            "7",
            200,
            r#"[{"questionAnswer":"The capital of France is @_Paris_@"}]"#,
        )
        .await;
    let client = fixture.create_test_client().unwrap();

    let mut handle = client
        .submit_cloze_quiz_job(&job("The capital of France is Paris"))
        .await
        .unwrap();
    assert_eq!(handle.job_id().as_str(), "7");

    let questions = handle.wait().await.unwrap();
    assert_eq!(questions[0].answer(), "Paris");

    submit.assert_async().await;
    results.assert_async().await;
}

#[tokio::test]
async fn test_summary_job_sends_webhook() {
    let fixture = MockServerFixture::new().await;
    let submit = fixture
        .mock_post_containing(
            SUMMARY_QUEUE,
            "https://your-server/path",
            200,
            r#"{"jobId":"abc-1"}"#,
        )
        .await;
    let _results = fixture
        .mock_results(SUMMARY_RESULTS, "abc-1", 200, r#"{"summary":["fact"]}"#)
        .await;
    let client = fixture.create_test_client().unwrap();

    let request = job("Photosynthesis").with_webhook_url("https://your-server/path");
    let summary = client.submit_summary_job(&request).await.unwrap().await.unwrap();

    submit.assert_async().await;
    assert_eq!(summary.facts(), ["fact".to_string()]);
}

#[tokio::test]
async fn test_results_server_error_fails_job() {
    let fixture = MockServerFixture::new().await;
    let _submit = fixture.mock_post(WH_QUEUE, 200, r#"{"jobId":3}"#).await;
    let _results = fixture.mock_results(WH_RESULTS, "3", 500, "boom").await;
    let client = fixture.create_test_client().unwrap();

    let mut handle = client.submit_wh_quiz_job(&job("x")).await.unwrap();
    let err = handle.wait().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Remote);
    assert_eq!(err.status(), Some(500));

    // The handle keeps its outcome.
    let again = handle.wait().await.unwrap_err();
    assert_eq!(again.status(), Some(500));
}

#[tokio::test]
async fn test_rejected_submission_never_polls() {
    let fixture = MockServerFixture::new().await;
    let _submit = fixture.mock_post(CLOZE_QUEUE, 403, "").await;
    let results = fixture.mock_results_never(CLOZE_RESULTS).await;
    let client = fixture.create_test_client().unwrap();

    let err = client.submit_cloze_quiz_job(&job("x")).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Remote);
    assert_eq!(err.status(), Some(403));

    tokio::time::sleep(Duration::from_millis(50)).await;
    results.assert_async().await;
}

#[tokio::test]
async fn test_invalid_request_never_submits() {
    let fixture = MockServerFixture::new().await;
    let submit = fixture.mock_post_never(SUMMARY_QUEUE).await;
    let client = fixture.create_test_client().unwrap();

    let request = AsyncJobRequest::new(ContentRequest::new());
    let err = client.submit_summary_job(&request).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    submit.assert_async().await;
}

#[tokio::test]
async fn test_wait_timeout_while_pending() {
    let fixture = MockServerFixture::new().await;
    let _submit = fixture.mock_post(WH_QUEUE, 200, r#"{"jobId":11}"#).await;
    let _results = fixture.mock_results(WH_RESULTS, "11", 404, "").await;
    let client = fixture.create_test_client().unwrap();

    let mut handle = client.submit_wh_quiz_job(&job("x")).await.unwrap();
    let err = handle
        .wait_timeout(Duration::from_millis(200))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Timeout);
    assert!(handle.is_cancelled());
}

#[tokio::test]
async fn test_cancel_before_first_poll() {
    let fixture = MockServerFixture::new().await;
    let _submit = fixture.mock_post(SUMMARY_QUEUE, 200, r#"{"jobId":5}"#).await;
    let results = fixture.mock_results_never(SUMMARY_RESULTS).await;
    let client = fixture.create_test_client().unwrap();

    let request = job("x").with_poll_interval_secs(3600);
    let mut handle = client.submit_summary_job(&request).await.unwrap();
    handle.cancel();

    let err = handle.wait().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Cancelled);
    results.assert_async().await;
}
