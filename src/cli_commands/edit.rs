use clap::Args;

use chanbuild::model::{MediaType, NodePath};

#[derive(Args)]
pub(crate) struct AddSublistArgs {
    pub(crate) channel: String,
    /// Path of the parent sublist (`/` is the root, `/0/2` its third grandchild)
    pub(crate) parent: NodePath,
    pub(crate) name: String,
    #[arg(long, default_value = "")]
    pub(crate) image_url: String,
}

#[derive(Args)]
pub(crate) struct AddMediaArgs {
    pub(crate) channel: String,
    /// Path of the parent sublist
    pub(crate) parent: NodePath,
    pub(crate) name: String,
    #[arg(long)]
    pub(crate) media_url: String,
    /// mp4 or audio
    #[arg(long, default_value = "mp4")]
    pub(crate) media_type: MediaType,
    #[arg(long, default_value = "")]
    pub(crate) image_url: String,
}

#[derive(Args)]
pub(crate) struct ModifyArgs {
    pub(crate) channel: String,
    pub(crate) path: NodePath,
    #[arg(long)]
    pub(crate) name: Option<String>,
    #[arg(long)]
    pub(crate) image_url: Option<String>,
    #[arg(long)]
    pub(crate) media_url: Option<String>,
    #[arg(long)]
    pub(crate) media_type: Option<MediaType>,
    /// true or false
    #[arg(long = "loop")]
    pub(crate) looping: Option<bool>,
}

#[derive(Args)]
pub(crate) struct DeleteArgs {
    pub(crate) channel: String,
    /// Path of the sublist holding the node
    pub(crate) parent: NodePath,
    /// Index of the node within that sublist
    pub(crate) index: usize,
}
