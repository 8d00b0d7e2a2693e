//! HTTP transport: interception middleware and the buffered response sink.

pub mod http;
pub mod sink;

pub use http::intercept;
pub use sink::BufferedSink;
