use super::*;

fn validate_channel_name(name: &str) -> Result<(), Response> {
    if name.trim().is_empty() {
        return Err(bad_request("listname must not be empty"));
    }
    Ok(())
}

fn persist(state: &AppState, channels: &ChannelStore) -> Result<(), Response> {
    persist_channels(&state.data_dir, channels).map_err(internal_error)
}

pub(super) async fn get_channel_lists(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(state.channels.read().await.names())
}

pub(super) async fn get_channel_list(
    State(state): State<Arc<AppState>>,
    Query(query): Query<GetChannelListQuery>,
) -> Result<Response, Response> {
    let channels = state.channels.read().await;
    let stored = channels
        .get(&query.list_name)
        .ok_or_else(|| not_found(format!("unknown channel '{}'", query.list_name)))?;
    Ok(json_text(stored.data.clone()))
}

pub(super) async fn set_channel_list(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SetChannelListForm>,
) -> Result<StatusCode, Response> {
    if let Err(err) = serde_json::from_str::<serde_json::Value>(&form.listdata) {
        return Err(bad_request(format!("listdata is not valid JSON: {}", err)));
    }

    let mut channels = state.channels.write().await;
    let stored = channels
        .get_mut(&form.listname)
        .ok_or_else(|| not_found(format!("unknown channel '{}'", form.listname)))?;
    stored.data = form.listdata;
    persist(&state, &channels)?;

    debug!(channel = %form.listname, "channel saved");
    Ok(StatusCode::OK)
}

pub(super) async fn create_channel_list(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ChannelNameForm>,
) -> Result<StatusCode, Response> {
    validate_channel_name(&form.listname)?;

    let mut channels = state.channels.write().await;
    if channels.get(&form.listname).is_some() {
        return Err(conflict(format!("channel '{}' already exists", form.listname)));
    }
    channels.channels.push(StoredChannel {
        name: form.listname.clone(),
        data: EMPTY_CHANNEL_DOC.to_string(),
    });
    persist(&state, &channels)?;

    info!(channel = %form.listname, "channel created");
    Ok(StatusCode::OK)
}

pub(super) async fn set_active_channel(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ChannelNameForm>,
) -> Result<StatusCode, Response> {
    let mut channels = state.channels.write().await;
    if channels.get(&form.listname).is_none() {
        return Err(not_found(format!("unknown channel '{}'", form.listname)));
    }
    channels.active = Some(form.listname.clone());
    persist(&state, &channels)?;

    info!(channel = %form.listname, "active channel set");
    Ok(StatusCode::OK)
}

pub(super) async fn get_active_channel_name(
    State(state): State<Arc<AppState>>,
) -> Json<Option<String>> {
    Json(state.channels.read().await.active.clone())
}

pub(super) async fn get_active_channel(
    State(state): State<Arc<AppState>>,
) -> Result<Response, Response> {
    let channels = state.channels.read().await;
    let stored = channels
        .active_channel()
        .ok_or_else(|| not_found("no active channel"))?;
    Ok(json_text(stored.data.clone()))
}

pub(super) async fn get_channel_xml(
    State(state): State<Arc<AppState>>,
) -> Result<Response, Response> {
    let channels = state.channels.read().await;
    let stored = channels
        .active_channel()
        .ok_or_else(|| not_found("no active channel"))?;
    let doc: serde_json::Value = serde_json::from_str(&stored.data).map_err(|e| {
        internal_error(anyhow::anyhow!("stored channel '{}' is not JSON: {}", stored.name, e))
    })?;
    Ok(xml_text(chanbuild::xml::render(&doc)))
}
