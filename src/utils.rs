use axum::http::Extensions;
use tower_http::request_id::RequestId;

/// Read the x-request-id set by `SetRequestIdLayer` out of request or
/// response extensions.
pub fn get_request_id(ext: &Extensions) -> String {
    ext.get::<RequestId>()
        .and_then(|id| id.header_value().to_str().ok())
        .unwrap_or_default()
        .to_string()
}
