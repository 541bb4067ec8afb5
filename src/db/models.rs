//! Domain models for the contacts store.
//!
//! These models are storage-agnostic and represent the core entities
//! used throughout the application.

use serde::{Deserialize, Serialize};

/// A persisted contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Unique identifier, assigned at creation and never changed.
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// The client-editable part of a contact.
///
/// Only produced by [`crate::validation::validate_contact`], so a value of
/// this type always satisfies the contact schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Contact {
    /// Build a contact from validated fields under the given id.
    pub fn new(id: impl Into<String>, fields: ContactFields) -> Self {
        Self {
            id: id.into(),
            name: fields.name,
            email: fields.email,
            phone: fields.phone,
        }
    }

    /// Split off the editable fields.
    pub fn fields(&self) -> ContactFields {
        ContactFields {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }
}
