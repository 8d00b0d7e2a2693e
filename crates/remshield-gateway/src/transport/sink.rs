//! Buffered [`ResponseSink`] backing the HTTP middleware.
//!
//! The engine writes status/header/body into the buffer; only a terminated
//! buffer converts into an HTTP response. The conversion consumes the sink,
//! so a denial response is committed exactly once and nothing can append to
//! it afterwards.

use axum::body::Body;
use axum::http::StatusCode;
use axum::response::Response;

use remshield_core::engine::ResponseSink;

#[derive(Debug, Default)]
pub struct BufferedSink {
    status: Option<u16>,
    headers: Vec<(String, String)>,
    body: String,
    terminated: bool,
}

impl BufferedSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Convert a terminated buffer into the terminal HTTP response.
    /// Returns `None` when nothing was emitted.
    pub fn into_response(self) -> Option<Response> {
        if !self.terminated {
            return None;
        }

        let status = StatusCode::from_u16(self.status.unwrap_or(403))
            .unwrap_or(StatusCode::FORBIDDEN);
        let mut builder = axum::http::Response::builder().status(status);
        for (name, value) in &self.headers {
            builder = builder.header(name, value);
        }
        builder.body(Body::from(self.body)).ok()
    }
}

impl ResponseSink for BufferedSink {
    fn set_status(&mut self, status: u16) {
        self.status = Some(status);
    }

    fn set_header(&mut self, name: &str, value: &str) {
        self.headers.push((name.to_string(), value.to_string()));
    }

    fn write_body(&mut self, body: &str) {
        self.body.push_str(body);
    }

    fn terminate(&mut self) {
        self.terminated = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unterminated_sink_yields_no_response() {
        let mut sink = BufferedSink::new();
        sink.set_status(403);
        sink.write_body("half-written");
        assert!(sink.into_response().is_none());
    }

    #[test]
    fn terminated_sink_converts_to_response() {
        let mut sink = BufferedSink::new();
        sink.set_status(403);
        sink.set_header("Content-Type", "application/json; charset=UTF-8");
        sink.write_body("{}");
        sink.terminate();

        let resp = sink.into_response().unwrap();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        assert_eq!(
            resp.headers().get("content-type").unwrap(),
            "application/json; charset=UTF-8"
        );
    }
}
