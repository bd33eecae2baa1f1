use clap::Args;

#[derive(Args)]
pub(crate) struct LoginArgs {
    /// Backend root URL (endpoints live under /api/v1/)
    #[arg(long)]
    pub(crate) url: String,
    /// Value of the `session` cookie issued by the backend
    #[arg(long)]
    pub(crate) session: String,
}

#[derive(Args)]
pub(crate) struct ConfigArgs {
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}
