use clap::Subcommand;

pub(crate) mod channels;
pub(crate) mod edit;
pub(crate) mod identity;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Point the client at a backend and store its session cookie
    Login(identity::LoginArgs),

    /// Forget the stored session for the configured backend
    Logout,

    /// Show the configured backend
    Config(identity::ConfigArgs),

    /// List the account's channels (active one marked)
    Lists(channels::ListsArgs),

    /// Create an empty channel
    Create(channels::ChannelNameArgs),

    /// Make a channel the one devices play
    Activate(channels::ChannelNameArgs),

    /// Print a channel's tree
    Show(channels::ShowArgs),

    /// Print a channel as XML
    Xml(channels::ChannelNameArgs),

    /// Append a sublist under a sublist
    AddSublist(edit::AddSublistArgs),

    /// Append a media item under a sublist
    AddMedia(edit::AddMediaArgs),

    /// Change fields of a node
    Modify(edit::ModifyArgs),

    /// Remove a child of a sublist (and everything under it)
    Delete(edit::DeleteArgs),
}
