use log::{debug, warn};
use usertable_states::{StateCtx, Time};

use crate::{
    BusinessConfig, CreateUserCommand, DeleteUserCommand, DraftRecord, LoadUsersCommand,
    LoadUsersCompute, Notification, NotificationCompute, RecordActionInput, UpdateUserCommand,
    UserField, UserId, UserRecord, UserTableState,
};

/// The six table operations over a borrowed [`StateCtx`].
///
/// Local edits apply immediately. Remote operations are only enqueued; they
/// start on the next `flush_commands` and report back through `sync_computes`.
#[derive(Debug)]
pub struct UserTableController<'a> {
    ctx: &'a mut StateCtx,
}

impl<'a> UserTableController<'a> {
    pub fn new(ctx: &'a mut StateCtx) -> Self {
        Self { ctx }
    }

    /// Register every state, compute and command the table needs.
    pub fn register(ctx: &mut StateCtx, config: BusinessConfig) {
        ctx.add_state(Time::default());
        ctx.add_state(config);
        ctx.add_state(UserTableState::default());
        ctx.add_state(DraftRecord::default());
        ctx.add_state(RecordActionInput::default());

        ctx.record_compute(LoadUsersCompute::default());
        ctx.record_compute(NotificationCompute::default());

        ctx.record_command(LoadUsersCommand);
        ctx.record_command(CreateUserCommand);
        ctx.record_command(UpdateUserCommand);
        ctx.record_command(DeleteUserCommand);
    }

    /// Fetch the whole collection and replace the table with it.
    pub fn load(&mut self) {
        self.ctx.enqueue_command::<LoadUsersCommand>();
    }

    pub fn stage_new_record(&mut self, field: UserField, value: impl Into<String>) {
        self.ctx.state_mut::<DraftRecord>().set_field(field, value);
    }

    /// Create a record from the draft. Silently does nothing if a field is blank.
    pub fn submit_new_record(&mut self) {
        if self.ctx.state::<DraftRecord>().trimmed().is_none() {
            debug!("submit_new_record: draft incomplete, nothing sent");
            return;
        }
        self.ctx.enqueue_command::<CreateUserCommand>();
    }

    /// Change a field locally. No request is sent.
    pub fn edit_field(&mut self, id: UserId, field: UserField, value: impl Into<String>) {
        if !self
            .ctx
            .state_mut::<UserTableState>()
            .edit_field(id, field, value)
        {
            debug!("edit_field: no user with id {id}");
        }
    }

    /// Send the current local record for `id` as a full update.
    pub fn commit_edit(&mut self, id: UserId) {
        if self.ctx.state::<UserTableState>().get(id).is_none() {
            warn!("commit_edit: no user with id {id}");
            return;
        }
        self.enqueue_for::<UpdateUserCommand>(id);
    }

    /// Delete `id` remotely; the row is removed once the server confirms.
    pub fn remove_record(&mut self, id: UserId) {
        self.enqueue_for::<DeleteUserCommand>(id);
    }

    fn enqueue_for<C: usertable_states::Command>(&mut self, id: UserId) {
        self.ctx.state_mut::<RecordActionInput>().id = Some(id);
        self.ctx.enqueue_command::<C>();
    }

    pub fn users(&self) -> &[UserRecord] {
        self.ctx.state::<UserTableState>().users()
    }

    pub fn draft(&self) -> &DraftRecord {
        self.ctx.state::<DraftRecord>()
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.ctx
            .cached::<NotificationCompute>()
            .and_then(NotificationCompute::current)
    }

    pub fn load_status(&self) -> Option<&LoadUsersCompute> {
        self.ctx.cached::<LoadUsersCompute>()
    }
}
