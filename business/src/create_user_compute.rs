//! Submitting the "add new" row.
//!
//! `CreateUserCommand` reads the [`DraftRecord`] captured when it was enqueued.
//! A draft with any blank field is skipped without a request. On success the
//! created record is added to the table and the draft is cleared; on failure
//! the draft is left as it is.

use log::{error, info};
use tokio_util::sync::CancellationToken;
use usertable_states::{Command, CommandFuture, CommandSnapshot, Updater};

use crate::notification::{ADD_FAILED, Notification, USER_ADDED, notify};
use crate::{BusinessConfig, DraftRecord, UserTableState, api};

#[derive(Debug, Default)]
pub struct CreateUserCommand;

impl Command for CreateUserCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: Updater,
        _cancel: CancellationToken,
    ) -> CommandFuture {
        let request = snap.state::<DraftRecord>().trimmed();
        let users_url = snap.state::<BusinessConfig>().users_url();

        Box::pin(async move {
            let Some(request) = request else {
                info!("CreateUserCommand: Draft has a blank field, skipping");
                return;
            };

            info!("CreateUserCommand: Creating user '{}'", request.name);

            match api::create_user(&users_url, &request).await {
                Ok(created) => {
                    info!("CreateUserCommand: Created user with id {}", created.id);
                    updater.mutate::<UserTableState>(move |table| table.upsert(created));
                    updater.mutate::<DraftRecord>(DraftRecord::clear);
                    notify(&updater, Notification::success(USER_ADDED));
                }
                Err(err) => {
                    error!("CreateUserCommand: {err}");
                    notify(&updater, Notification::danger(ADD_FAILED));
                }
            }
        })
    }
}
