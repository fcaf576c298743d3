use clap::{Args, Subcommand};

/// Event membership commands.
#[derive(Clone, Debug, Subcommand)]
pub enum MemberCommands {
    /// Grant or change a user's role in an event.
    Set(MemberSetArgs),
    /// Remove a user from an event.
    Remove(MemberRemoveArgs),
    /// List an event's members.
    List(MemberEventArgs),
}

#[derive(Clone, Debug, Args)]
pub struct MemberSetArgs {
    pub event_id: String,
    pub user_id: String,
    /// owner, manager, viewer, or any other role name.
    pub role: String,
}

#[derive(Clone, Debug, Args)]
pub struct MemberRemoveArgs {
    pub event_id: String,
    pub user_id: String,
}

#[derive(Clone, Debug, Args)]
pub struct MemberEventArgs {
    pub event_id: String,
}
