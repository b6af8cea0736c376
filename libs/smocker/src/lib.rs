//! # Smocker Client
//!
//! Mock definitions in the wire format of the [Smocker](https://smocker.dev)
//! HTTP mock server, a fluent [`MockBuilder`], the validation gate every mock
//! passes before deployment, and a small async client for the admin API.
//!
//! ```rust
//! use smocker::MockBuilder;
//!
//! let mut mock = MockBuilder::get("/api/v3/ticker/price")
//!     .with_query("symbol", "ETHBTC")
//!     .with_status(404)
//!     .with_json_body(r#"{"price": "1.00000000"}"#)
//!     .build();
//! mock.validate().unwrap();
//! assert!(mock.response.unwrap().body.is_empty());
//! ```

pub mod api;
pub mod builder;
pub mod error;
pub mod mock;

pub use api::{MockServerClient, SmockerApi, DEFAULT_SMOCKER_URL};
pub use builder::MockBuilder;
pub use error::{Result, SmockerError};
pub use mock::{
    BodyMatcher, Delay, MatcherKind, Mock, MockContext, MockRequest, MockResponse,
    MultiMapMatcher, StringMatcher, ERROR_STATUS_THRESHOLD,
};
