/// Pure user model for inter-module communication (no serde)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Opaque identifier minted on creation, immutable afterwards.
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Caller-controlled attributes of a user, used for both create and update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFields {
    pub name: String,
    pub email: String,
}

impl User {
    pub fn with_fields(id: impl Into<String>, fields: UserFields) -> Self {
        Self {
            id: id.into(),
            name: fields.name,
            email: fields.email,
        }
    }

    pub fn fields(&self) -> UserFields {
        UserFields {
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}
