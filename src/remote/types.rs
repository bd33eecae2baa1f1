//! Form payloads for the channel endpoints. The backend reads
//! `application/x-www-form-urlencoded` bodies, so these serialize flat.

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct SetChannelListForm {
    pub listname: String,
    pub listdata: String,
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ChannelNameForm {
    pub listname: String,
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct GetChannelListQuery {
    pub list_name: String,
}
