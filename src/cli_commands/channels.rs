use clap::Args;

#[derive(Args)]
pub(crate) struct ListsArgs {
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct ChannelNameArgs {
    pub(crate) channel: String,
}

#[derive(Args)]
pub(crate) struct ShowArgs {
    /// Channel to print (defaults to the active channel)
    pub(crate) channel: Option<String>,
    /// Print the stored document instead of the tree
    #[arg(long)]
    pub(crate) json: bool,
}
