//! Initial list load: command + compute cache.
//!
//! `LoadUsersCommand` fetches the whole collection and replaces
//! [`UserTableState`] with it. `LoadUsersCompute` only records the status of
//! the last load, so the UI can show a spinner or an empty placeholder.
//!
//! Register once, then dispatch at startup:
//! - `ctx.record_compute(LoadUsersCompute::default());`
//! - `ctx.record_command(LoadUsersCommand);`
//! - `ctx.dispatch::<LoadUsersCommand>();`

use log::{error, info};
use tokio_util::sync::CancellationToken;
use usertable_states::{Command, CommandFuture, CommandSnapshot, Compute, State, Updater};

use crate::notification::{FETCH_FAILED, Notification, notify};
use crate::{BusinessConfig, UserTableState, api};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadUsersStatus {
    #[default]
    Idle,
    Loading,
    /// Number of records the server returned.
    Loaded(usize),
    Failed(String),
}

/// Status of the last list load. Written by [`LoadUsersCommand`].
#[derive(Debug, Clone, Default)]
pub struct LoadUsersCompute {
    pub status: LoadUsersStatus,
}

impl State for LoadUsersCompute {}
impl Compute for LoadUsersCompute {}

impl LoadUsersCompute {
    pub fn is_loading(&self) -> bool {
        matches!(self.status, LoadUsersStatus::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            LoadUsersStatus::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
pub struct LoadUsersCommand;

impl Command for LoadUsersCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: Updater,
        _cancel: CancellationToken,
    ) -> CommandFuture {
        let users_url = snap.state::<BusinessConfig>().users_url();

        Box::pin(async move {
            info!("LoadUsersCommand: Fetching users from {users_url}");
            updater.set(LoadUsersCompute {
                status: LoadUsersStatus::Loading,
            });

            match api::list_users(&users_url).await {
                Ok(users) => {
                    let count = users.len();
                    info!("LoadUsersCommand: Fetched {count} users");
                    updater.mutate::<UserTableState>(move |table| table.replace_all(users));
                    updater.set(LoadUsersCompute {
                        status: LoadUsersStatus::Loaded(count),
                    });
                }
                Err(err) => {
                    error!("LoadUsersCommand: {err}");
                    updater.set(LoadUsersCompute {
                        status: LoadUsersStatus::Failed(err.to_string()),
                    });
                    notify(&updater, Notification::danger(FETCH_FAILED));
                }
            }
        })
    }
}
