//! Authenticated HTTP route registration. Every endpoint is also reachable
//! under its `_fe` name, which older frontends call.

use super::*;

const API_PREFIX: &str = "/api/v1";

fn api(endpoint: &str) -> String {
    format!("{}/{}", API_PREFIX, endpoint)
}

fn with_alias(
    router: Router<Arc<AppState>>,
    endpoint: &str,
    route: axum::routing::MethodRouter<Arc<AppState>>,
) -> Router<Arc<AppState>> {
    router
        .route(&api(endpoint), route.clone())
        .route(&api(&format!("{}_fe", endpoint)), route)
}

pub(super) fn authed_router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    let router = Router::new();
    let router = with_alias(router, "get_channel_lists", get(get_channel_lists));
    let router = with_alias(router, "get_channel_list", get(get_channel_list));
    let router = with_alias(router, "set_channel_list", post(set_channel_list));
    let router = with_alias(router, "create_channel_list", post(create_channel_list));
    let router = with_alias(router, "set_active_channel", post(set_active_channel));
    let router = with_alias(router, "get_active_channel", get(get_active_channel));
    let router = with_alias(router, "get_active_channel_name", get(get_active_channel_name));
    router
        .route(&api("get_channel_xml"), get(get_channel_xml))
        .route(&api("get_channel_xml_ro"), get(get_channel_xml))
        .layer(middleware::from_fn_with_state(state, require_session))
}
