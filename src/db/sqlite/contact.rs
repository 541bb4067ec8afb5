//! SQLite ContactRepository implementation.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::db::{Contact, ContactFields, ContactRepository, DbError, DbResult};

/// SQLx-backed contact repository.
pub struct SqliteContactRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

fn contact_from_row(row: &SqliteRow) -> Contact {
    Contact {
        id: row.get("id"),
        name: row.get("name"),
        email: row.get("email"),
        phone: row.get("phone"),
    }
}

impl<'a> ContactRepository for SqliteContactRepository<'a> {
    async fn list_all(&self) -> DbResult<Vec<Contact>> {
        let rows = sqlx::query("SELECT id, name, email, phone FROM contact ORDER BY rowid ASC")
            .fetch_all(self.pool)
            .await?;

        Ok(rows.iter().map(contact_from_row).collect())
    }

    async fn get_by_id(&self, id: &str) -> DbResult<Option<Contact>> {
        let row = sqlx::query("SELECT id, name, email, phone FROM contact WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        Ok(row.as_ref().map(contact_from_row))
    }

    async fn insert(&self, contact: &Contact) -> DbResult<Contact> {
        sqlx::query("INSERT INTO contact (id, name, email, phone) VALUES (?, ?, ?, ?)")
            .bind(&contact.id)
            .bind(&contact.name)
            .bind(&contact.email)
            .bind(&contact.phone)
            .execute(self.pool)
            .await
            .map_err(|e| {
                let duplicate = e
                    .as_database_error()
                    .is_some_and(|db_err| db_err.is_unique_violation());
                if duplicate {
                    DbError::AlreadyExists {
                        entity_type: "Contact".to_string(),
                        id: contact.id.clone(),
                    }
                } else {
                    DbError::from(e)
                }
            })?;

        Ok(contact.clone())
    }

    async fn delete_by_id(&self, id: &str) -> DbResult<Option<Contact>> {
        let row = sqlx::query("DELETE FROM contact WHERE id = ? RETURNING id, name, email, phone")
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        Ok(row.as_ref().map(contact_from_row))
    }

    async fn replace_by_id(&self, id: &str, fields: &ContactFields) -> DbResult<Option<Contact>> {
        let row = sqlx::query(
            "UPDATE contact SET name = ?, email = ?, phone = ? WHERE id = ? \
             RETURNING id, name, email, phone",
        )
        .bind(&fields.name)
        .bind(&fields.email)
        .bind(&fields.phone)
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.as_ref().map(contact_from_row))
    }
}
