//! The `SQLite3` database driver.
use std::panic::Location;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use api_hub_primitives::{DatabaseDriver, DurationSinceUnixEpoch};
use r2d2::Pool;
use r2d2_sqlite::rusqlite::{params, OptionalExtension};
use r2d2_sqlite::SqliteConnectionManager;

use super::{Database, Error};
use crate::core::api::{ApiEntity, ApiId, PlaygroundStats, Stats};
use crate::core::settings::Setting;
use crate::core::telemetry::PlaygroundUsage;

const DRIVER: DatabaseDriver = DatabaseDriver::Sqlite3;

const API_COLUMNS: &str = "id, name, playground_enabled, calls, playground_total_requests, playground_total_errors, playground_avg_response_time, playground_last_used";

type ApiRow = (String, String, bool, i64, i64, i64, i64, Option<i64>);

pub struct Sqlite {
    pool: Pool<SqliteConnectionManager>,
}

impl Sqlite {
    /// It instantiates a new `SQLite3` database driver. The parent directory
    /// of the database file is created when missing.
    ///
    /// # Errors
    ///
    /// Will return `r2d2::Error` if `db_path` is not able to create `SqLite` database.
    pub fn new(db_path: &str) -> Result<Sqlite, Error> {
        if let Some(parent) = Path::new(db_path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|err| Error::ConnectionError {
                    source: Arc::new(err),
                    driver: DRIVER,
                    location: Location::caller(),
                })?;
            }
        }

        let cm = SqliteConnectionManager::file(db_path);
        Pool::new(cm).map_or_else(|err| Err((err, DRIVER).into()), |pool| Ok(Sqlite { pool }))
    }
}

fn to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn millis_since_unix_epoch(time: DurationSinceUnixEpoch) -> i64 {
    i64::try_from(time.as_millis()).unwrap_or(i64::MAX)
}

fn api_from_row(row: ApiRow) -> Result<ApiEntity, Error> {
    let (id, name, playground_enabled, calls, total_requests, total_errors, avg_response_time, last_used) = row;

    Ok(ApiEntity {
        id: ApiId::from_str(&id).map_err(|err| Error::malformed(err, DRIVER))?,
        name,
        playground_enabled,
        stats: Stats {
            calls: calls.unsigned_abs(),
        },
        playground_stats: PlaygroundStats {
            total_requests: total_requests.unsigned_abs(),
            total_errors: total_errors.unsigned_abs(),
            avg_response_time: avg_response_time.unsigned_abs(),
            last_used: last_used.map(|millis| Duration::from_millis(millis.unsigned_abs())),
        },
    })
}

fn read_api_row(row: &r2d2_sqlite::rusqlite::Row<'_>) -> r2d2_sqlite::rusqlite::Result<ApiRow> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
        row.get(5)?,
        row.get(6)?,
        row.get(7)?,
    ))
}

impl Database for Sqlite {
    /// Refer to [`databases::Database::create_database_tables`](crate::core::databases::Database::create_database_tables).
    fn create_database_tables(&self) -> Result<(), Error> {
        let create_apis_table = "
        CREATE TABLE IF NOT EXISTS apis (
            id TEXT PRIMARY KEY NOT NULL,
            name TEXT NOT NULL,
            playground_enabled INTEGER DEFAULT 1 NOT NULL,
            calls INTEGER DEFAULT 0 NOT NULL,
            playground_total_requests INTEGER DEFAULT 0 NOT NULL,
            playground_total_errors INTEGER DEFAULT 0 NOT NULL,
            playground_avg_response_time INTEGER DEFAULT 0 NOT NULL,
            playground_last_used INTEGER
        );"
        .to_string();

        let create_settings_table = "
        CREATE TABLE IF NOT EXISTS settings (
            key TEXT PRIMARY KEY NOT NULL,
            value TEXT NOT NULL
        );"
        .to_string();

        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.execute(&create_apis_table, [])?;
        conn.execute(&create_settings_table, [])?;

        Ok(())
    }

    /// Refer to [`databases::Database::drop_database_tables`](crate::core::databases::Database::drop_database_tables).
    fn drop_database_tables(&self) -> Result<(), Error> {
        let drop_apis_table = "
        DROP TABLE apis;"
            .to_string();

        let drop_settings_table = "
        DROP TABLE settings;"
            .to_string();

        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.execute(&drop_apis_table, [])
            .and_then(|_| conn.execute(&drop_settings_table, []))?;

        Ok(())
    }

    /// Refer to [`databases::Database::load_apis`](crate::core::databases::Database::load_apis).
    fn load_apis(&self) -> Result<Vec<ApiEntity>, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let mut stmt = conn.prepare(&format!("SELECT {API_COLUMNS} FROM apis ORDER BY id"))?;

        let rows = stmt
            .query_map([], read_api_row)?
            .collect::<Result<Vec<ApiRow>, _>>()?;

        rows.into_iter().map(api_from_row).collect()
    }

    /// Refer to [`databases::Database::get_api`](crate::core::databases::Database::get_api).
    fn get_api(&self, api_id: &ApiId) -> Result<Option<ApiEntity>, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let mut stmt = conn.prepare(&format!("SELECT {API_COLUMNS} FROM apis WHERE id = ?"))?;

        let row = stmt.query_row([api_id.as_str()], read_api_row).optional()?;

        row.map(api_from_row).transpose()
    }

    /// Refer to [`databases::Database::add_api`](crate::core::databases::Database::add_api).
    fn add_api(&self, api: &ApiEntity) -> Result<usize, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let insert = conn.execute(
            &format!("INSERT INTO apis ({API_COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)"),
            params![
                api.id.as_str(),
                api.name,
                api.playground_enabled,
                to_i64(api.stats.calls),
                to_i64(api.playground_stats.total_requests),
                to_i64(api.playground_stats.total_errors),
                to_i64(api.playground_stats.avg_response_time),
                api.playground_stats.last_used.map(millis_since_unix_epoch),
            ],
        )?;

        if insert == 0 {
            Err(Error::InsertFailed {
                location: Location::caller(),
                driver: DRIVER,
            })
        } else {
            Ok(insert)
        }
    }

    /// Refer to [`databases::Database::set_api_playground_enabled`](crate::core::databases::Database::set_api_playground_enabled).
    fn set_api_playground_enabled(&self, api_id: &ApiId, enabled: bool) -> Result<usize, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let updated = conn.execute(
            "UPDATE apis SET playground_enabled = ?1 WHERE id = ?2",
            params![enabled, api_id.as_str()],
        )?;

        Ok(updated)
    }

    /// Refer to [`databases::Database::record_playground_usage`](crate::core::databases::Database::record_playground_usage).
    fn record_playground_usage(&self, api_id: &ApiId, usage: &PlaygroundUsage) -> Result<usize, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let updated = conn.execute(
            "UPDATE apis SET
                calls = calls + 1,
                playground_total_requests = playground_total_requests + 1,
                playground_total_errors = playground_total_errors + ?1,
                playground_avg_response_time = ?2,
                playground_last_used = ?3
            WHERE id = ?4",
            params![
                i64::from(usage.is_error),
                to_i64(usage.avg_response_time),
                millis_since_unix_epoch(usage.last_used),
                api_id.as_str(),
            ],
        )?;

        Ok(updated)
    }

    /// Refer to [`databases::Database::get_setting`](crate::core::databases::Database::get_setting).
    fn get_setting(&self, key: &str) -> Result<Option<Setting>, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let mut stmt = conn.prepare("SELECT value FROM settings WHERE key = ?")?;

        let value: Option<String> = stmt.query_row([key], |row| row.get(0)).optional()?;

        value
            .map(|value| {
                serde_json::from_str(&value)
                    .map(|value| Setting::new(key, value))
                    .map_err(|err| Error::malformed(err, DRIVER))
            })
            .transpose()
    }

    /// Refer to [`databases::Database::set_setting`](crate::core::databases::Database::set_setting).
    fn set_setting(&self, setting: &Setting) -> Result<usize, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let value = setting.value.to_string();

        let upsert = conn.execute(
            "INSERT INTO settings (key, value) VALUES (?1, ?2) ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![setting.key, value],
        )?;

        if upsert == 0 {
            Err(Error::InsertFailed {
                location: Location::caller(),
                driver: DRIVER,
            })
        } else {
            Ok(upsert)
        }
    }

    /// Refer to [`databases::Database::remove_setting`](crate::core::databases::Database::remove_setting).
    fn remove_setting(&self, key: &str) -> Result<usize, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let deleted = conn.execute("DELETE FROM settings WHERE key = ?", [key])?;

        Ok(deleted)
    }
}
