//! 响应解码：按预期的响应形状把 JSON 字节解析为强类型结果。
//!
//! Result decoding.
//!
//! Decoding is dispatched on an explicit [`ResponseShape`]. An empty body, a
//! non-JSON body or a body of the wrong shape is always a [`crate::Error::Decode`],
//! never a default value.

use serde::Deserialize;
use std::fmt;

use crate::types::{ClozeQuestion, JobId, Summary, WhQuestion};
use crate::{Error, Result};

/// Expected shape of a response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseShape {
    /// `[{"questionAnswer": "..."}]`
    ClozeQuestions,
    /// `[{"question": "...", "answer": "..."}]`
    WhQuestions,
    /// `{"summary": ["..."]}`
    Summary,
    /// `{"jobId": "..." | 123}`
    JobId,
}

impl ResponseShape {
    pub fn name(&self) -> &'static str {
        match self {
            ResponseShape::ClozeQuestions => "cloze_questions",
            ResponseShape::WhQuestions => "wh_questions",
            ResponseShape::Summary => "summary",
            ResponseShape::JobId => "job_id",
        }
    }
}

impl fmt::Display for ResponseShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A decoded body, tagged by shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    ClozeQuestions(Vec<ClozeQuestion>),
    WhQuestions(Vec<WhQuestion>),
    Summary(Summary),
    JobId(JobId),
}

#[derive(Deserialize)]
struct JobIdBody {
    #[serde(rename = "jobId")]
    job_id: serde_json::Value,
}

/// Decode `body` as `shape`.
pub fn decode(body: &[u8], shape: ResponseShape) -> Result<Decoded> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(Error::decode(shape, "empty response body"));
    }

    let map_err = |e: serde_json::Error| Error::decode(shape, e.to_string());
    match shape {
        ResponseShape::ClozeQuestions => serde_json::from_slice(body)
            .map(Decoded::ClozeQuestions)
            .map_err(map_err),
        ResponseShape::WhQuestions => serde_json::from_slice(body)
            .map(Decoded::WhQuestions)
            .map_err(map_err),
        ResponseShape::Summary => serde_json::from_slice(body)
            .map(Decoded::Summary)
            .map_err(map_err),
        ResponseShape::JobId => {
            let parsed: JobIdBody = serde_json::from_slice(body).map_err(map_err)?;
            // Numbers keep their JSON text, so large or fractional ids survive.
            let id = match parsed.job_id {
                serde_json::Value::String(s) => s,
                serde_json::Value::Number(n) => n.to_string(),
                other => {
                    return Err(Error::decode(
                        shape,
                        format!("jobId must be a string or a number, got {}", other),
                    ))
                }
            };
            if id.trim().is_empty() {
                return Err(Error::decode(shape, "jobId is empty"));
            }
            Ok(Decoded::JobId(JobId::new(id)))
        }
    }
}

/// Types a response body can decode into.
pub trait GatewayResponse: Sized {
    const SHAPE: ResponseShape;

    fn from_decoded(decoded: Decoded) -> Option<Self>;
}

impl GatewayResponse for Vec<ClozeQuestion> {
    const SHAPE: ResponseShape = ResponseShape::ClozeQuestions;

    fn from_decoded(decoded: Decoded) -> Option<Self> {
        match decoded {
            Decoded::ClozeQuestions(v) => Some(v),
            _ => None,
        }
    }
}

impl GatewayResponse for Vec<WhQuestion> {
    const SHAPE: ResponseShape = ResponseShape::WhQuestions;

    fn from_decoded(decoded: Decoded) -> Option<Self> {
        match decoded {
            Decoded::WhQuestions(v) => Some(v),
            _ => None,
        }
    }
}

impl GatewayResponse for Summary {
    const SHAPE: ResponseShape = ResponseShape::Summary;

    fn from_decoded(decoded: Decoded) -> Option<Self> {
        match decoded {
            Decoded::Summary(v) => Some(v),
            _ => None,
        }
    }
}

impl GatewayResponse for JobId {
    const SHAPE: ResponseShape = ResponseShape::JobId;

    fn from_decoded(decoded: Decoded) -> Option<Self> {
        match decoded {
            Decoded::JobId(v) => Some(v),
            _ => None,
        }
    }
}

/// Decode `body` straight into `T`.
pub fn decode_as<T: GatewayResponse>(body: &[u8]) -> Result<T> {
    let decoded = decode(body, T::SHAPE)?;
    T::from_decoded(decoded)
        .ok_or_else(|| Error::decode(T::SHAPE, "decoded value does not match the requested type"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_code::ErrorKind;

    const ALL_SHAPES: [ResponseShape; 4] = [
        ResponseShape::ClozeQuestions,
        ResponseShape::WhQuestions,
        ResponseShape::Summary,
        ResponseShape::JobId,
    ];

    #[test]
    fn test_empty_and_garbage_bodies_fail() {
        let bodies: [&[u8]; 4] = [b"", b"   \n", b"not json", b"<html></html>"];
        for shape in ALL_SHAPES {
            for body in bodies {
                let err = decode(body, shape).unwrap_err();
                assert_eq!(err.kind(), ErrorKind::Decode, "shape {shape} body {body:?}");
            }
        }
    }

    #[test]
    fn test_decode_cloze() {
        let questions: Vec<ClozeQuestion> =
            decode_as(br#"[{"questionAnswer":"The capital of France is @_Paris_@"}]"#).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].answer(), "Paris");
    }

    #[test]
    fn test_decode_wh() {
        let questions: Vec<WhQuestion> = decode_as(
            br#"[{"question":"What is the capital of the UAE?","answer":"Abu Dhabi"}]"#,
        )
        .unwrap();
        assert_eq!(questions[0].answer(), "Abu Dhabi");
    }

    #[test]
    fn test_decode_summary() {
        let summary: Summary = decode_as(br#"{"summary":["This is a summary"]}"#).unwrap();
        assert_eq!(summary.facts(), ["This is a summary".to_string()]);
    }

    #[test]
    fn test_job_id_string_or_number() {
        let from_int: JobId = decode_as(br#"{"jobId":1}"#).unwrap();
        assert_eq!(from_int.as_str(), "1");
        let from_str: JobId = decode_as(br#"{"jobId":"a1b2"}"#).unwrap();
        assert_eq!(from_str.as_str(), "a1b2");
        assert!(decode_as::<JobId>(br#"{"jobId":""}"#).is_err());
    }

    #[test]
    fn test_job_id_beyond_i64_and_fractional() {
        let big: JobId = decode_as(br#"{"jobId":18446744073709551615}"#).unwrap();
        assert_eq!(big.as_str(), "18446744073709551615");
        let fractional: JobId = decode_as(br#"{"jobId":7.0}"#).unwrap();
        assert_eq!(fractional.as_str(), "7.0");
        let bodies: [&[u8]; 3] = [br#"{"jobId":true}"#, br#"{"jobId":null}"#, br#"{"jobId":[1]}"#];
        for body in bodies {
            let err = decode_as::<JobId>(body).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Decode);
        }
    }

    #[test]
    fn test_wrong_shape_fails() {
        assert!(decode(br#"{"summary":["x"]}"#, ResponseShape::ClozeQuestions).is_err());
        assert!(decode(br#"[{"question":"q"}]"#, ResponseShape::WhQuestions).is_err());
        assert!(decode(br#"{"facts":[]}"#, ResponseShape::Summary).is_err());
        assert!(decode(br#"{"id":3}"#, ResponseShape::JobId).is_err());
        assert!(decode(b"null", ResponseShape::ClozeQuestions).is_err());
    }
}
