use super::*;

pub(super) const API_PREFIX: &str = "/api/v1/";
pub(super) const SESSION_COOKIE_NAME: &str = "session";

pub(super) fn transport_error(label: &str, err: reqwest::Error) -> SyncError {
    SyncError::Network {
        status: err.status().map(|s| s.as_u16()),
        message: format!("{}: {}", label, err),
    }
}

impl RemoteClient {
    pub(super) fn ensure_ok(
        &self,
        resp: reqwest::blocking::Response,
        label: &str,
    ) -> Result<reqwest::blocking::Response, SyncError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let message = if status == reqwest::StatusCode::UNAUTHORIZED {
            format!(
                "{}: unauthorized (session invalid/expired; run `chanbuild login --url ... --session ...`)",
                label
            )
        } else {
            // Backends answer errors with {"error": "..."}; fall back to the
            // status text for anything else.
            let body = resp.text().unwrap_or_default();
            let detail = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("request failed")
                        .to_string()
                });
            format!("{}: {}", label, detail)
        };

        Err(SyncError::Network {
            status: Some(status.as_u16()),
            message,
        })
    }

    pub(super) fn session_cookie(&self) -> String {
        format!("{}={}", SESSION_COOKIE_NAME, self.session)
    }

    pub(super) fn url(&self, endpoint: &str) -> String {
        format!(
            "{}{}{}",
            self.remote.base_url.trim_end_matches('/'),
            API_PREFIX,
            endpoint
        )
    }
}
