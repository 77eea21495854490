use serde::{Deserialize, Serialize};

/// Server-assigned user id.
pub type UserId = u64;

/// A user row as the remote collection returns it.
///
/// The demo API returns more fields (username, address, company, ...). They are
/// not shown in the table but are kept in `extra` and sent back on update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub website: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl UserRecord {
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
}

/// The editable columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserField {
    Name,
    Email,
    Website,
}

impl UserField {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Website];

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Website => "Website",
        }
    }

    /// Hint text for the "add new" row.
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Enter Name...",
            Self::Email => "Enter Email...",
            Self::Website => "Enter Website...",
        }
    }
}

/// Body of `POST /users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUserRequest {
    pub name: String,
    pub email: String,
    pub website: String,
}
