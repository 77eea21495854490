use log::warn;
use usertable_states::State;

use crate::{UserField, UserId, UserRecord};

/// The records shown in the table, in server list order.
///
/// Ids are unique within the table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserTableState {
    users: Vec<UserRecord>,
}

impl State for UserTableState {}

impl UserTableState {
    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn get(&self, id: UserId) -> Option<&UserRecord> {
        self.users.iter().find(|user| user.id == id)
    }

    /// Replace every record. Later duplicates of an id are dropped.
    pub fn replace_all(&mut self, users: Vec<UserRecord>) {
        let mut unique: Vec<UserRecord> = Vec::with_capacity(users.len());
        for user in users {
            if unique.iter().any(|kept| kept.id == user.id) {
                warn!("UserTableState: duplicate id {} in list, dropping", user.id);
                continue;
            }
            unique.push(user);
        }
        self.users = unique;
    }

    /// Append `user`, or replace the record that already has its id.
    pub fn upsert(&mut self, user: UserRecord) {
        match self.users.iter_mut().find(|existing| existing.id == user.id) {
            Some(existing) => {
                warn!(
                    "UserTableState: id {} already present, replacing in place",
                    user.id
                );
                *existing = user;
            }
            None => self.users.push(user),
        }
    }

    /// Returns `false` when no record has `id`.
    pub fn edit_field(&mut self, id: UserId, field: UserField, value: impl Into<String>) -> bool {
        match self.users.iter_mut().find(|user| user.id == id) {
            Some(user) => {
                *user.field_mut(field) = value.into();
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: UserId) -> Option<UserRecord> {
        let index = self.users.iter().position(|user| user.id == id)?;
        Some(self.users.remove(index))
    }
}
