use usertable_states::State;

use crate::{NewUserRequest, UserField};

/// Unsaved input of the "add new" row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftRecord {
    pub name: String,
    pub email: String,
    pub website: String,
}

impl State for DraftRecord {}

impl DraftRecord {
    pub fn field(&self, field: UserField) -> &str {
        match field {
            UserField::Name => &self.name,
            UserField::Email => &self.email,
            UserField::Website => &self.website,
        }
    }

    pub fn field_mut(&mut self, field: UserField) -> &mut String {
        match field {
            UserField::Name => &mut self.name,
            UserField::Email => &mut self.email,
            UserField::Website => &mut self.website,
        }
    }

    pub fn set_field(&mut self, field: UserField, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }

    /// The create request body, or `None` if any field is blank after trimming.
    pub fn trimmed(&self) -> Option<NewUserRequest> {
        let name = self.name.trim();
        let email = self.email.trim();
        let website = self.website.trim();
        if name.is_empty() || email.is_empty() || website.is_empty() {
            return None;
        }

        Some(NewUserRequest {
            name: name.to_owned(),
            email: email.to_owned(),
            website: website.to_owned(),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.website.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
