//! Row actions: committing a staged edit and deleting a record.
//!
//! Both commands act on the id in [`RecordActionInput`] as it was when the
//! command was enqueued. Set the input and enqueue in the same step, as
//! `UserTableController` does, so each command keeps its own target.

use log::{error, info, warn};
use tokio_util::sync::CancellationToken;
use usertable_states::{Command, CommandFuture, CommandSnapshot, State, Updater};

use crate::notification::{
    DELETE_FAILED, Notification, UPDATE_FAILED, USER_DELETED, USER_UPDATED, notify,
};
use crate::{BusinessConfig, UserId, UserTableState, api};

/// Target of the next row action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordActionInput {
    pub id: Option<UserId>,
}

impl State for RecordActionInput {}

/// Sends the locally staged record as a full update.
///
/// The table is neither reverted nor reconciled with the response.
#[derive(Debug, Default)]
pub struct UpdateUserCommand;

impl Command for UpdateUserCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: Updater,
        _cancel: CancellationToken,
    ) -> CommandFuture {
        let id = snap.state::<RecordActionInput>().id;
        let record = id.and_then(|id| snap.state::<UserTableState>().get(id).cloned());
        let config = snap.state::<BusinessConfig>().clone();

        Box::pin(async move {
            let Some(record) = record else {
                warn!("UpdateUserCommand: No record for id {id:?}, skipping");
                return;
            };

            info!("UpdateUserCommand: Updating user {}", record.id);

            match api::update_user(&config.user_url(record.id), &record).await {
                Ok(()) => {
                    info!("UpdateUserCommand: Updated user {}", record.id);
                    notify(&updater, Notification::primary(USER_UPDATED));
                }
                Err(err) => {
                    error!("UpdateUserCommand: user {}: {err}", record.id);
                    notify(&updater, Notification::danger(UPDATE_FAILED));
                }
            }
        })
    }
}

/// Deletes a record remotely, then locally on success.
#[derive(Debug, Default)]
pub struct DeleteUserCommand;

impl Command for DeleteUserCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: Updater,
        _cancel: CancellationToken,
    ) -> CommandFuture {
        let id = snap.state::<RecordActionInput>().id;
        let config = snap.state::<BusinessConfig>().clone();

        Box::pin(async move {
            let Some(id) = id else {
                warn!("DeleteUserCommand: No target id, skipping");
                return;
            };

            info!("DeleteUserCommand: Deleting user {id}");

            match api::delete_user(&config.user_url(id)).await {
                Ok(()) => {
                    info!("DeleteUserCommand: Deleted user {id}");
                    updater.mutate::<UserTableState>(move |table| {
                        if table.remove(id).is_none() {
                            warn!("DeleteUserCommand: user {id} was already gone");
                        }
                    });
                    notify(&updater, Notification::danger(USER_DELETED));
                }
                Err(err) => {
                    error!("DeleteUserCommand: user {id}: {err}");
                    notify(&updater, Notification::danger(DELETE_FAILED));
                }
            }
        })
    }
}
