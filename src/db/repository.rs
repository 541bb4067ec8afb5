//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing the handlers.
//!
//! Methods return `impl Future + Send` so that handlers generic over
//! [`Database`] still produce `Send` futures for axum.

use std::future::Future;

use crate::db::{
    DbResult,
    models::{Contact, ContactFields},
};

/// Repository for Contact operations.
pub trait ContactRepository {
    /// Get all contacts in insertion order.
    fn list_all(&self) -> impl Future<Output = DbResult<Vec<Contact>>> + Send;

    /// Get a contact by ID, `None` when absent.
    fn get_by_id(&self, id: &str) -> impl Future<Output = DbResult<Option<Contact>>> + Send;

    /// Store a new contact and return it as persisted.
    fn insert(&self, contact: &Contact) -> impl Future<Output = DbResult<Contact>> + Send;

    /// Remove a contact by ID, returning the removed record.
    fn delete_by_id(&self, id: &str) -> impl Future<Output = DbResult<Option<Contact>>> + Send;

    /// Replace every editable field of a contact, returning the updated record.
    fn replace_by_id(
        &self,
        id: &str,
        fields: &ContactFields,
    ) -> impl Future<Output = DbResult<Option<Contact>>> + Send;
}

/// Combined database interface.
///
/// Provides access to repositories via associated types, avoiding dynamic dispatch.
pub trait Database: Send + Sync {
    type Contacts<'a>: ContactRepository + Send + Sync
    where
        Self: 'a;

    /// Run pending migrations.
    fn migrate(&self) -> impl Future<Output = DbResult<()>> + Send;

    /// Get the contact repository.
    fn contacts(&self) -> Self::Contacts<'_>;
}
