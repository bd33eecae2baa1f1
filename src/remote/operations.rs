use tracing::debug;

use super::*;

impl RemoteClient {
    fn get_text(&self, endpoint: &str, query: Option<&GetChannelListQuery>) -> Result<String, SyncError> {
        debug!(endpoint, "GET");
        let mut req = self
            .client
            .get(self.url(endpoint))
            .header(reqwest::header::COOKIE, self.session_cookie());
        if let Some(q) = query {
            req = req.query(q);
        }
        let resp = req.send().map_err(|e| transport_error(endpoint, e))?;
        self.ensure_ok(resp, endpoint)?
            .text()
            .map_err(|e| transport_error(endpoint, e))
    }

    fn post_form<T: serde::Serialize>(&self, endpoint: &str, form: &T) -> Result<(), SyncError> {
        debug!(endpoint, "POST");
        let resp = self
            .client
            .post(self.url(endpoint))
            .header(reqwest::header::COOKIE, self.session_cookie())
            .form(form)
            .send()
            .map_err(|e| transport_error(endpoint, e))?;
        self.ensure_ok(resp, endpoint)?;
        Ok(())
    }

    /// Fetches the stored document of the active channel rendered as XML.
    pub fn get_channel_xml(&self) -> Result<String, SyncError> {
        self.get_text("get_channel_xml", None)
    }
}

impl ChannelBackend for RemoteClient {
    fn list_channels(&self) -> Result<Vec<String>, SyncError> {
        let body = self.get_text("get_channel_lists", None)?;
        serde_json::from_str(&body)
            .map_err(|e| SyncError::malformed(format!("channel list is not a string array: {}", e)))
    }

    fn get_channel(&self, name: &str) -> Result<String, SyncError> {
        self.get_text(
            "get_channel_list",
            Some(&GetChannelListQuery {
                list_name: name.to_string(),
            }),
        )
    }

    fn set_channel(&self, name: &str, data: &str) -> Result<(), SyncError> {
        self.post_form(
            "set_channel_list",
            &SetChannelListForm {
                listname: name.to_string(),
                listdata: data.to_string(),
            },
        )
    }

    fn create_channel(&self, name: &str) -> Result<(), SyncError> {
        self.post_form(
            "create_channel_list",
            &ChannelNameForm {
                listname: name.to_string(),
            },
        )
    }

    fn set_active_channel(&self, name: &str) -> Result<(), SyncError> {
        self.post_form(
            "set_active_channel",
            &ChannelNameForm {
                listname: name.to_string(),
            },
        )
    }

    fn get_active_channel_name(&self) -> Result<Option<String>, SyncError> {
        let body = self.get_text("get_active_channel_name_fe", None)?;
        serde_json::from_str(&body)
            .map_err(|e| SyncError::malformed(format!("active channel name: {}", e)))
    }
}
