//! Fluent construction of [`Mock`] definitions
//!
//! Defaults match any method on any path and answer 200 with an empty body,
//! so builders only state what they care about.

use std::collections::BTreeMap;
use std::time::Duration;

use crate::mock::{
    BodyMatcher, Delay, Mock, MockContext, MockRequest, MockResponse, MultiMapMatcher,
    StringMatcher,
};

const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Clone)]
pub struct MockBuilder {
    mock: Mock,
}

impl Default for MockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBuilder {
    pub fn new() -> Self {
        Self {
            mock: Mock {
                request: MockRequest {
                    method: StringMatcher::should_match(".*"),
                    path: StringMatcher::should_match(".*"),
                    body: None,
                    query_params: MultiMapMatcher::new(),
                    headers: MultiMapMatcher::new(),
                },
                response: Some(MockResponse::ok()),
                context: None,
            },
        }
    }

    /// `GET` with an exact path
    pub fn get(path: impl Into<String>) -> Self {
        Self::new()
            .with_method(StringMatcher::should_equal("GET"))
            .with_path(StringMatcher::should_equal(path))
    }

    /// `POST` with an exact path
    pub fn post(path: impl Into<String>) -> Self {
        Self::new()
            .with_method(StringMatcher::should_equal("POST"))
            .with_path(StringMatcher::should_equal(path))
    }

    pub fn with_path(mut self, path: StringMatcher) -> Self {
        self.mock.request.path = path;
        self
    }

    pub fn with_method(mut self, method: StringMatcher) -> Self {
        self.mock.request.method = method;
        self
    }

    pub fn with_body(mut self, body: BodyMatcher) -> Self {
        self.mock.request.body = Some(body);
        self
    }

    /// Match requests whose body contains `value`
    pub fn with_body_containing(self, value: impl Into<String>) -> Self {
        self.with_body(BodyMatcher::String(StringMatcher::should_contain_substring(
            value,
        )))
    }

    pub fn with_query_params(mut self, query_params: MultiMapMatcher) -> Self {
        self.mock.request.query_params = query_params;
        self
    }

    pub fn with_query_param(mut self, name: impl Into<String>, value: StringMatcher) -> Self {
        self.mock
            .request
            .query_params
            .entry(name.into())
            .or_default()
            .push(value);
        self
    }

    /// Exact-match shorthand for [`MockBuilder::with_query_param`]
    pub fn with_query(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.with_query_param(name, StringMatcher::should_equal(value))
    }

    pub fn with_headers(mut self, headers: MultiMapMatcher) -> Self {
        self.mock.request.headers = headers;
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: StringMatcher) -> Self {
        self.mock
            .request
            .headers
            .entry(name.into())
            .or_default()
            .push(value);
        self
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.response().status = status;
        self
    }

    pub fn with_response_headers(mut self, headers: BTreeMap<String, Vec<String>>) -> Self {
        self.response().headers = headers;
        self
    }

    pub fn with_response_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.response()
            .headers
            .entry(name.into())
            .or_default()
            .push(value.into());
        self
    }

    /// Body plus a JSON content type
    pub fn with_json_body(self, body: impl Into<String>) -> Self {
        self.with_response_header("Content-Type", JSON_CONTENT_TYPE)
            .with_response_body(body)
    }

    pub fn with_response_body(mut self, body: impl Into<String>) -> Self {
        self.response().body = body.into();
        self
    }

    pub fn with_delay(mut self, min: Duration, max: Duration) -> Self {
        self.response().delay = Some(Delay { min, max });
        self
    }

    /// Limit how many times the server replays this mock
    pub fn with_times(mut self, times: u32) -> Self {
        self.mock.context = Some(MockContext { times });
        self
    }

    pub fn build(self) -> Mock {
        self.mock
    }

    fn response(&mut self) -> &mut MockResponse {
        self.mock.response.get_or_insert_with(MockResponse::ok)
    }
}
