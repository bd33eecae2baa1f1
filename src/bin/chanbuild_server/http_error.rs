use super::*;

pub(super) fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(serde_json::json!({"error": "unauthorized"})),
    )
        .into_response()
}

pub(super) fn json_text(text: String) -> Response {
    ([(header::CONTENT_TYPE, "application/json")], text).into_response()
}

pub(super) fn xml_text(text: String) -> Response {
    ([(header::CONTENT_TYPE, "application/xml")], text).into_response()
}

pub(super) fn internal_error(err: anyhow::Error) -> Response {
    warn!(error = %format!("{:#}", err), "internal error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({"error": format!("{:#}", err)})),
    )
        .into_response()
}

pub(super) fn bad_request(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({"error": message.into()})),
    )
        .into_response()
}

pub(super) fn not_found(message: impl Into<String>) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({"error": message.into()})),
    )
        .into_response()
}

pub(super) fn conflict(message: impl Into<String>) -> Response {
    (
        StatusCode::CONFLICT,
        Json(serde_json::json!({"error": message.into()})),
    )
        .into_response()
}
