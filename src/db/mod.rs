//! Database module
//!
//! This module handles database connections, migrations, repositories and the
//! read-only data source the eligibility engine evaluates against.

pub mod connection;
pub mod repositories;
pub mod source;

#[cfg(test)]
pub mod test_support;

use sqlx::PgPool;

pub use connection::*;
pub use source::{BookingDataSource, PgBookingDataSource};

#[cfg(test)]
pub use source::MockBookingDataSource;

/// Run database migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
