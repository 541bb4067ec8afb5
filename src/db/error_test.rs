//! Tests for database error types.

use crate::db::{DbError, DbResult};

#[test]
fn already_exists_error_displays_correctly() {
    let err = DbError::AlreadyExists {
        entity_type: "Contact".to_string(),
        id: "5f0c6a4e-6c1b-4a53-9d0e-2b5b1c1f7a10".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Entity already exists: Contact with id '5f0c6a4e-6c1b-4a53-9d0e-2b5b1c1f7a10'"
    );
}

#[test]
fn database_error_displays_correctly() {
    let err = DbError::Database {
        message: "disk I/O error".to_string(),
    };
    assert_eq!(err.to_string(), "Database error: disk I/O error");
}

#[test]
fn migration_error_displays_correctly() {
    let err = DbError::Migration {
        message: "failed to apply migration 20250101000000".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Migration error: failed to apply migration 20250101000000"
    );
}

#[test]
fn connection_error_displays_correctly() {
    let err = DbError::Connection {
        message: "unable to open database".to_string(),
    };
    assert_eq!(err.to_string(), "Connection error: unable to open database");
}

#[test]
fn pool_timeout_maps_to_connection_error() {
    let err = DbError::from(sqlx::Error::PoolTimedOut);
    assert!(matches!(err, DbError::Connection { .. }));
}

#[test]
fn row_not_found_maps_to_database_error() {
    let err = DbError::from(sqlx::Error::RowNotFound);
    assert!(matches!(err, DbError::Database { .. }));
}

#[test]
fn db_result_err_returns_error() {
    let result: DbResult<i32> = Err(DbError::Database {
        message: "boom".to_string(),
    });
    assert!(result.is_err());
}
