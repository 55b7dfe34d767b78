//! Contact DTOs.
//!
//! # Design
//! `ContactDraft` is exactly the JSON body of `POST /contact`. A
//! `ContactRecord` is a fixed 5-position tuple and serializes as a JSON
//! array, matching the shape the rest of the client expects.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unvalidated user input for a new contact.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl ContactDraft {
    pub fn new(name: impl Into<String>, phone: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }
}

/// Server-assigned identifier. Whatever JSON the server sends is kept.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ContactId {
    Int(i64),
    Text(String),
    Other(serde_json::Value),
}

impl From<i64> for ContactId {
    fn from(id: i64) -> Self {
        ContactId::Int(id)
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactId::Int(id) => write!(f, "{id}"),
            ContactId::Text(id) => write!(f, "{id}"),
            ContactId::Other(value) => write!(f, "{value}"),
        }
    }
}

/// `(id, name, phone, email, flag)` for a contact the server accepted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactRecord(pub ContactId, pub String, pub String, pub String, pub bool);

impl ContactRecord {
    /// Attach the server id to a draft. The flag always starts cleared.
    pub fn from_draft(id: ContactId, draft: &ContactDraft) -> Self {
        Self(
            id,
            draft.name.clone(),
            draft.phone.clone(),
            draft.email.clone(),
            false,
        )
    }

    pub fn id(&self) -> &ContactId {
        &self.0
    }

    pub fn name(&self) -> &str {
        &self.1
    }

    pub fn phone(&self) -> &str {
        &self.2
    }

    pub fn email(&self) -> &str {
        &self.3
    }

    pub fn flagged(&self) -> bool {
        self.4
    }
}
