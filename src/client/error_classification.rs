//! Status code classification

pub const HTTP_UNAUTHORIZED_MESSAGE: &str = "Please check your license key is valid";
pub const HTTP_FORBIDDEN_MESSAGE: &str =
    "Please check your license key is authorized to make this request (wallet balance or active subscription)";

/// Human-readable message for a non-success response.
///
/// 401 and 403 are almost always licensing problems, so they get a hint
/// instead of the (usually empty) body.
pub fn user_friendly_message(status: u16, body: &str) -> String {
    match status {
        401 => HTTP_UNAUTHORIZED_MESSAGE.to_string(),
        403 => HTTP_FORBIDDEN_MESSAGE.to_string(),
        _ => format!(
            "An error occurred during processing, Status Code: {}, message: {}",
            status, body
        ),
    }
}

/// What a job-results response means for the polling loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollStatus {
    /// 2xx: decode the body, the job is done.
    Ready,
    /// 404: results are not available yet.
    Pending,
    /// Anything else ends the loop with a remote error.
    Failed,
}

impl PollStatus {
    pub fn from_http_status(status: u16) -> Self {
        match status {
            200..=299 => PollStatus::Ready,
            404 => PollStatus::Pending,
            _ => PollStatus::Failed,
        }
    }
}
