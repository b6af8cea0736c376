//! Smocker mock definitions
//!
//! The serialized form of these types is the mock server's contract:
//!
//! ```json
//! {
//!   "request": {
//!     "method": {"matcher": "ShouldEqual", "value": "GET"},
//!     "path": {"matcher": "ShouldEqual", "value": "/api/v3/ticker/price"},
//!     "query_params": {"symbol": [{"matcher": "ShouldEqual", "value": "ETHBTC"}]}
//!   },
//!   "response": {
//!     "status": 200,
//!     "headers": {"Content-Type": ["application/json"]},
//!     "body": "{\"symbol\": \"ETHBTC\",\"price\": \"1.00000000\"}"
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SmockerError};

/// First status code treated as a failure; mocks at or above it carry no body
pub const ERROR_STATUS_THRESHOLD: u16 = 400;

/// Comparison the mock server applies to a request field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatcherKind {
    ShouldEqual,
    ShouldNotEqual,
    ShouldMatch,
    ShouldNotMatch,
    ShouldContainSubstring,
    ShouldNotContainSubstring,
    ShouldStartWith,
    ShouldNotStartWith,
    ShouldEndWith,
    ShouldNotEndWith,
    ShouldEqualJSON,
    ShouldNotEqualJSON,
    ShouldBeEmpty,
    ShouldNotBeEmpty,
}

/// `{matcher, value}` pair interpreted by the mock server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringMatcher {
    pub matcher: MatcherKind,
    #[serde(default)]
    pub value: String,
}

impl StringMatcher {
    pub fn new(matcher: MatcherKind, value: impl Into<String>) -> Self {
        Self {
            matcher,
            value: value.into(),
        }
    }

    pub fn should_equal(value: impl Into<String>) -> Self {
        Self::new(MatcherKind::ShouldEqual, value)
    }

    pub fn should_not_equal(value: impl Into<String>) -> Self {
        Self::new(MatcherKind::ShouldNotEqual, value)
    }

    /// Regular expression match
    pub fn should_match(pattern: impl Into<String>) -> Self {
        Self::new(MatcherKind::ShouldMatch, pattern)
    }

    pub fn should_contain_substring(value: impl Into<String>) -> Self {
        Self::new(MatcherKind::ShouldContainSubstring, value)
    }

    pub fn should_start_with(value: impl Into<String>) -> Self {
        Self::new(MatcherKind::ShouldStartWith, value)
    }

    pub fn should_end_with(value: impl Into<String>) -> Self {
        Self::new(MatcherKind::ShouldEndWith, value)
    }

    pub fn should_equal_json(value: impl Into<String>) -> Self {
        Self::new(MatcherKind::ShouldEqualJSON, value)
    }

    pub fn should_be_empty() -> Self {
        Self::new(MatcherKind::ShouldBeEmpty, "")
    }
}

/// Request body matcher: either the whole body as a string, or individual
/// JSON fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BodyMatcher {
    String(StringMatcher),
    Json(BTreeMap<String, StringMatcher>),
}

/// Query parameters or headers, each name mapping to one or more matchers
pub type MultiMapMatcher = BTreeMap<String, Vec<StringMatcher>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockRequest {
    pub method: StringMatcher,
    pub path: StringMatcher,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<BodyMatcher>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub query_params: MultiMapMatcher,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: MultiMapMatcher,
}

/// Response latency range, serialized as duration strings such as `10ms`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delay {
    #[serde(with = "duration_string")]
    pub min: Duration,
    #[serde(with = "duration_string")]
    pub max: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockResponse {
    pub status: u16,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, Vec<String>>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<Delay>,
}

impl MockResponse {
    /// Response with status 200 and no headers or body
    pub fn ok() -> Self {
        Self {
            status: 200,
            headers: BTreeMap::new(),
            body: String::new(),
            delay: None,
        }
    }
}

/// Replay limits for a mock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockContext {
    pub times: u32,
}

/// One request matcher plus the canned response the server replays for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mock {
    pub request: MockRequest,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<MockResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<MockContext>,
}

impl Mock {
    /// Enforce the structural rules every mock must satisfy before deployment
    ///
    /// A response with a failure status never carries a body, so the body is
    /// dropped for statuses of 400 and above.
    ///
    /// Two further structural rules apply on top of that: a mock without a
    /// response is rejected, and so is a status outside 100..=599, which no
    /// HTTP server could send. Any other mock passes unchanged.
    pub fn validate(&mut self) -> Result<()> {
        let response = self.response.as_mut().ok_or_else(|| SmockerError::Validation {
            reason: "mock has no response".to_string(),
        })?;

        if !(100..=599).contains(&response.status) {
            return Err(SmockerError::Validation {
                reason: format!("status {} is not a valid HTTP status", response.status),
            });
        }

        if response.status >= ERROR_STATUS_THRESHOLD {
            response.body.clear();
        }
        Ok(())
    }
}

mod duration_string {
    use std::time::Duration;

    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(*duration))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid duration '{}'", raw)))
    }

    pub(super) fn format(duration: Duration) -> String {
        let nanos = duration.as_nanos();
        if nanos == 0 {
            "0s".to_string()
        } else if nanos % 1_000_000_000 == 0 {
            format!("{}s", nanos / 1_000_000_000)
        } else if nanos % 1_000_000 == 0 {
            format!("{}ms", nanos / 1_000_000)
        } else if nanos % 1_000 == 0 {
            format!("{}us", nanos / 1_000)
        } else {
            format!("{}ns", nanos)
        }
    }

    pub(super) fn parse(raw: &str) -> Option<Duration> {
        let split = raw.find(|c: char| !c.is_ascii_digit())?;
        let (digits, unit) = raw.split_at(split);
        let value: u64 = digits.parse().ok()?;
        match unit {
            "ns" => Some(Duration::from_nanos(value)),
            "us" | "µs" => Some(Duration::from_micros(value)),
            "ms" => Some(Duration::from_millis(value)),
            "s" => Some(Duration::from_secs(value)),
            "m" => Some(Duration::from_secs(value.checked_mul(60)?)),
            _ => None,
        }
    }
}
