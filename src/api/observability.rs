use axum::{
    extract::{MatchedPath, Request, State},
    http::{Method, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{Instrument, info, info_span};
use uuid::Uuid;

use crate::api::AppState;

/// `GET /metrics` - Prometheus text exposition.
pub async fn get_metrics(State(state): State<Arc<AppState>>) -> Response {
    match &state.prometheus_handle {
        Some(handle) => handle.render().into_response(),
        None => (StatusCode::NOT_FOUND, "Metrics are disabled").into_response(),
    }
}

/// Per-request span, access log line and request metrics.
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let started = Instant::now();
    let request = RequestInfo::from_request(&req);

    let span = info_span!(
        "request",
        request_id = %Uuid::new_v4(),
        method = %request.method,
        path = %request.path,
        route = request.route.as_deref(),
    );

    async move {
        let response = next.run(req).await;
        let status = response.status();
        let elapsed = started.elapsed();

        let labels = [
            ("method", request.method.to_string()),
            ("path", request.metrics_path().to_string()),
            ("status", status.as_u16().to_string()),
        ];
        metrics::counter!("http_requests_total", &labels).increment(1);
        metrics::histogram!("http_request_duration_seconds", &labels)
            .record(elapsed.as_secs_f64());

        info!(
            event = "http_request_finished",
            duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
            status_code = status.as_u16(),
            user_agent = %request.user_agent,
            outcome = outcome(status),
            "Request finished"
        );

        response
    }
    .instrument(span)
    .await
}

struct RequestInfo {
    method: Method,
    path: String,
    route: Option<String>,
    user_agent: String,
}

impl RequestInfo {
    fn from_request(req: &Request) -> Self {
        Self {
            method: req.method().clone(),
            path: req.uri().path().to_string(),
            route: req
                .extensions()
                .get::<MatchedPath>()
                .map(|mp| mp.as_str().to_string()),
            user_agent: req
                .headers()
                .get(header::USER_AGENT)
                .and_then(|h| h.to_str().ok())
                .unwrap_or("unknown")
                .to_string(),
        }
    }

    /// Route template when matched, so `/api/episode/{identifier}` is one series.
    fn metrics_path(&self) -> &str {
        self.route.as_deref().unwrap_or(&self.path)
    }
}

fn outcome(status: StatusCode) -> &'static str {
    if status.is_server_error() {
        "error"
    } else if status.is_client_error() {
        "client_error"
    } else {
        "success"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    #[test]
    fn test_outcome_by_status_class() {
        assert_eq!(outcome(StatusCode::OK), "success");
        assert_eq!(outcome(StatusCode::FOUND), "success");
        assert_eq!(outcome(StatusCode::BAD_REQUEST), "client_error");
        assert_eq!(outcome(StatusCode::INTERNAL_SERVER_ERROR), "error");
    }

    #[test]
    fn test_metrics_path_falls_back_to_uri() {
        let req = Request::builder()
            .uri("/api/episode/42?x=1")
            .body(Body::empty())
            .unwrap();

        let info = RequestInfo::from_request(&req);
        assert_eq!(info.metrics_path(), "/api/episode/42");
        assert_eq!(info.user_agent, "unknown");
    }
}
