use std::str::FromStr;

use sqlx::{
    migrate::Migrator,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

use crate::{error::StoreError, DB};

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Opens the pool and brings the schema up to date.
///
/// An in-memory database lives only as long as its connection, so such a
/// pool is pinned to one connection that is never recycled.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<DB, StoreError> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let in_memory = database_url.contains(":memory:") || database_url.contains("mode=memory");
    let pool_options = if in_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(max_connections)
    };

    let pool = pool_options.connect_with(options).await?;
    MIGRATOR.run(&pool).await?;
    log::info!("Connected to {database_url}, migrations applied");
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_uri_is_pinned_to_one_connection() {
        let pool = connect("sqlite:file:pinned?mode=memory", 5).await.unwrap();
        assert_eq!(pool.options().get_max_connections(), 1);

        let seeded: i64 = sqlx::query_scalar(r#"SELECT count(*) FROM "MemberType""#)
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(seeded, 2);
    }
}
