//! Per-request access logging.

use axum::{extract::Request, middleware::Next, response::Response};
use chrono::Utc;
use std::time::Instant;

use crate::utils::timestamp::format_rfc3339;

/// Logs method, path and arrival time of every request.
///
/// Status and latency are added once the inner service has answered. The
/// middleware never changes the request or the response.
///
/// # Example Logs
///
/// ```text
/// INFO request method=POST path=/shorturls time=2024-01-01T00:00:00Z status=201 latency_ms=0
/// ```
pub async fn access_log(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let time = format_rfc3339(&Utc::now());
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    tracing::info!(
        %method,
        %path,
        %time,
        status = response.status().as_u16(),
        latency_ms = start.elapsed().as_millis() as u64,
        "request"
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        middleware,
        routing::get,
    };
    use parking_lot::Mutex;
    use serde_json::Value;
    use std::io;
    use std::sync::Arc;
    use tower::ServiceExt;
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn events(&self) -> Vec<Value> {
            String::from_utf8_lossy(&self.0.lock())
                .lines()
                .map(|line| serde_json::from_str(line).unwrap())
                .collect()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = CapturedLogs;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[tokio::test]
    async fn test_access_log_records_request_fields() {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .json()
            .with_writer(logs.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let app = Router::new()
            .route("/ping", get(|| async { StatusCode::CREATED }))
            .layer(middleware::from_fn(access_log));

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/ping?x=1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let events = logs.events();
        let requests: Vec<&Value> = events
            .iter()
            .filter(|e| e["fields"]["message"] == "request")
            .collect();
        assert_eq!(requests.len(), 1);

        let fields = &requests[0]["fields"];
        assert_eq!(fields["method"], "GET");
        assert_eq!(fields["path"], "/ping");
        assert_eq!(fields["status"], 201);
        let time = fields["time"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(time).is_ok());
    }
}
