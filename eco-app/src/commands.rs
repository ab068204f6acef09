use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// User directory operations (development aids)
    Users {
        #[command(subcommand)]
        action: UserCommands,
    },
}

#[derive(Subcommand)]
pub(crate) enum UserCommands {
    /// List every registered profile as JSON
    List,

    /// Print the number of registered profiles
    Count,

    /// Remove every registered profile
    Clear,
}
