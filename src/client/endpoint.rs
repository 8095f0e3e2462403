//! Host and endpoint resolution

use std::fmt;
use std::str::FromStr;

use crate::{Error, ErrorContext, Result};

pub const PRODUCTION_URL: &str = "https://gateway.flexudy.com";
pub const SANDBOX_URL: &str = "https://gateway-sandbox.flexudy.com";

/// Gateway deployment to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Environment {
    #[default]
    Production,
    Sandbox,
}

impl Environment {
    pub fn base_url(self) -> &'static str {
        match self {
            Environment::Production => PRODUCTION_URL,
            Environment::Sandbox => SANDBOX_URL,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Production => "production",
            Environment::Sandbox => "sandbox",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(Environment::Production),
            "sandbox" => Ok(Environment::Sandbox),
            _ => Err(Error::configuration_with_context(
                format!("The environment {} is not supported", s),
                ErrorContext::new()
                    .with_field_path("environment")
                    .with_source("host_resolver"),
            )),
        }
    }
}

/// Resolve the base URL of an environment. An absent environment is an error.
pub fn resolve_host(environment: Option<Environment>) -> Result<&'static str> {
    environment.map(Environment::base_url).ok_or_else(|| {
        Error::configuration_with_context(
            "An environment is required to resolve the gateway host",
            ErrorContext::new()
                .with_field_path("environment")
                .with_source("host_resolver"),
        )
    })
}

/// Generation operation offered by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ClozeQuiz,
    WhQuiz,
    Summary,
}

impl Operation {
    /// Path prefix shared by the generate, queue and results endpoints.
    pub fn path(self) -> &'static str {
        match self {
            Operation::ClozeQuiz => "/api/v1/cloze-quiz",
            Operation::WhQuiz => "/api/v1/wh-quiz",
            Operation::Summary => "/api/v1/summary",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Operation::ClozeQuiz => "cloze_quiz",
            Operation::WhQuiz => "wh_quiz",
            Operation::Summary => "summary",
        }
    }
}

/// Which endpoint of an operation to call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointKind {
    /// `POST <op>/generate`: synchronous generation.
    Generate,
    /// `POST <op>/queue`: job submission.
    Queue,
    /// `GET <op>/queue/results?jobId=<id>`: job polling.
    QueueResults,
}

impl EndpointKind {
    pub fn name(self) -> &'static str {
        match self {
            EndpointKind::Generate => "generate",
            EndpointKind::Queue => "queue",
            EndpointKind::QueueResults => "queue_results",
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            EndpointKind::Generate => "/generate",
            EndpointKind::Queue => "/queue",
            EndpointKind::QueueResults => "/queue/results",
        }
    }
}

/// Builds full endpoint URLs on top of a resolved base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
}

impl Endpoints {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, operation: Operation, kind: EndpointKind) -> String {
        format!("{}{}{}", self.base_url, operation.path(), kind.suffix())
    }
}
