use actix_web::get;
use chrono::{SecondsFormat, Utc};
use rand::Rng;

use crate::api::success;
use crate::constants::SERVICE_NAME;
use crate::modules::monitor::schema::HealthResponse;

#[get("/health")]
pub async fn health() -> success::Success<HealthResponse> {
    success::Success::json(HealthResponse {
        status: "OK",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        service: SERVICE_NAME,
    })
}

/// Prometheus exposition stub. The counters are random placeholders; nothing
/// is recorded between requests.
#[get("/metrics")]
pub async fn metrics() -> success::Success {
    success::Success::text(render_metrics(&mut rand::thread_rng()))
}

pub fn render_metrics<R: Rng>(rng: &mut R) -> String {
    [
        "# HELP http_requests_total Total HTTP requests".to_string(),
        "# TYPE http_requests_total counter".to_string(),
        format!(r#"http_requests_total{{method="get",handler="/"}} {}"#, rng.gen_range(0..1000)),
        format!(r#"http_requests_total{{method="get",handler="/videos"}} {}"#, rng.gen_range(0..500)),
        format!(r#"http_requests_total{{method="post",handler="/upload"}} {}"#, rng.gen_range(0..100)),
    ]
    .join("\n")
}
