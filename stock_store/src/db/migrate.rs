//! Embedded schema migrations.

use anyhow::anyhow;
use diesel::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

/// Embedded Diesel migrations bundled with this crate.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Applies every pending migration on an open connection.
pub fn run_pending(conn: &mut SqliteConnection) -> anyhow::Result<()> {
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| anyhow!(e))?;
    for version in applied {
        info!(%version, "applied migration");
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use diesel::{Connection, connection::SimpleConnection};

    use super::*;

    #[test]
    fn migrations_apply_on_temp_file() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        let path = temp.path().to_string_lossy().to_string();

        let mut conn = SqliteConnection::establish(&path).unwrap();
        run_pending(&mut conn).expect("migration run");
        // Second run is a no-op.
        run_pending(&mut conn).expect("migration rerun");

        conn.batch_execute(
            "INSERT INTO stock_data (date, open, low, high, close, adj_close, volume, symbol)
             VALUES ('2023-01-03', 1.0, 1.0, 1.0, 1.0, 1.0, 1, 'AAPL')",
        )
        .unwrap();
    }
}
