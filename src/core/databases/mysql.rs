//! The `MySQL` database driver.
use std::panic::Location;
use std::str::FromStr;
use std::time::Duration;

use api_hub_primitives::{DatabaseDriver, DurationSinceUnixEpoch};
use r2d2::Pool;
use r2d2_mysql::mysql::prelude::Queryable;
use r2d2_mysql::mysql::{params, Opts, OptsBuilder};
use r2d2_mysql::MySqlConnectionManager;

use super::{Database, Error};
use crate::core::api::{ApiEntity, ApiId, PlaygroundStats, Stats, MAX_API_ID_LENGTH};
use crate::core::settings::Setting;
use crate::core::telemetry::PlaygroundUsage;

const DRIVER: DatabaseDriver = DatabaseDriver::MySQL;

const API_COLUMNS: &str = "id, name, playground_enabled, calls, playground_total_requests, playground_total_errors, playground_avg_response_time, playground_last_used";

type ApiRow = (String, String, bool, u64, u64, u64, u64, Option<u64>);

pub struct Mysql {
    pool: Pool<MySqlConnectionManager>,
}

impl Mysql {
    /// It instantiates a new `MySQL` database driver.
    ///
    /// # Errors
    ///
    /// Will return `r2d2::Error` if `db_path` is not able to create `MySQL` database.
    pub fn new(db_path: &str) -> Result<Self, Error> {
        let opts = Opts::from_url(db_path)?;
        let builder = OptsBuilder::from_opts(opts);
        let manager = MySqlConnectionManager::new(builder);
        let pool = r2d2::Pool::builder().build(manager).map_err(|e| (e, DRIVER))?;

        Ok(Self { pool })
    }
}

fn millis_since_unix_epoch(time: DurationSinceUnixEpoch) -> u64 {
    u64::try_from(time.as_millis()).unwrap_or(u64::MAX)
}

fn api_from_row(row: ApiRow) -> Result<ApiEntity, Error> {
    let (id, name, playground_enabled, calls, total_requests, total_errors, avg_response_time, last_used) = row;

    Ok(ApiEntity {
        id: ApiId::from_str(&id).map_err(|err| Error::malformed(err, DRIVER))?,
        name,
        playground_enabled,
        stats: Stats { calls },
        playground_stats: PlaygroundStats {
            total_requests,
            total_errors,
            avg_response_time,
            last_used: last_used.map(Duration::from_millis),
        },
    })
}

impl Database for Mysql {
    /// Refer to [`databases::Database::create_database_tables`](crate::core::databases::Database::create_database_tables).
    fn create_database_tables(&self) -> Result<(), Error> {
        let create_apis_table = format!(
            "
        CREATE TABLE IF NOT EXISTS apis (
            id VARCHAR({MAX_API_ID_LENGTH}) NOT NULL,
            name VARCHAR(255) NOT NULL,
            playground_enabled BOOLEAN DEFAULT TRUE NOT NULL,
            calls BIGINT UNSIGNED DEFAULT 0 NOT NULL,
            playground_total_requests BIGINT UNSIGNED DEFAULT 0 NOT NULL,
            playground_total_errors BIGINT UNSIGNED DEFAULT 0 NOT NULL,
            playground_avg_response_time BIGINT UNSIGNED DEFAULT 0 NOT NULL,
            playground_last_used BIGINT UNSIGNED,
            PRIMARY KEY (id)
        );"
        );

        let create_settings_table = "
        CREATE TABLE IF NOT EXISTS settings (
            `key` VARCHAR(255) NOT NULL,
            `value` TEXT NOT NULL,
            PRIMARY KEY (`key`)
        );"
        .to_string();

        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.query_drop(&create_apis_table)?;
        conn.query_drop(&create_settings_table)?;

        Ok(())
    }

    /// Refer to [`databases::Database::drop_database_tables`](crate::core::databases::Database::drop_database_tables).
    fn drop_database_tables(&self) -> Result<(), Error> {
        let drop_apis_table = "
        DROP TABLE `apis`;"
            .to_string();

        let drop_settings_table = "
        DROP TABLE `settings`;"
            .to_string();

        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.query_drop(&drop_apis_table)?;
        conn.query_drop(&drop_settings_table)?;

        Ok(())
    }

    /// Refer to [`databases::Database::load_apis`](crate::core::databases::Database::load_apis).
    fn load_apis(&self) -> Result<Vec<ApiEntity>, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let rows: Vec<ApiRow> = conn.query(format!("SELECT {API_COLUMNS} FROM apis ORDER BY id"))?;

        rows.into_iter().map(api_from_row).collect()
    }

    /// Refer to [`databases::Database::get_api`](crate::core::databases::Database::get_api).
    fn get_api(&self, api_id: &ApiId) -> Result<Option<ApiEntity>, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let row = conn.exec_first::<ApiRow, _, _>(
            format!("SELECT {API_COLUMNS} FROM apis WHERE id = :id"),
            params! { "id" => api_id.as_str() },
        )?;

        row.map(api_from_row).transpose()
    }

    /// Refer to [`databases::Database::add_api`](crate::core::databases::Database::add_api).
    fn add_api(&self, api: &ApiEntity) -> Result<usize, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.exec_drop(
            format!(
                "INSERT INTO apis ({API_COLUMNS}) VALUES (:id, :name, :playground_enabled, :calls, :total_requests, :total_errors, :avg_response_time, :last_used)"
            ),
            params! {
                "id" => api.id.as_str(),
                "name" => &api.name,
                "playground_enabled" => api.playground_enabled,
                "calls" => api.stats.calls,
                "total_requests" => api.playground_stats.total_requests,
                "total_errors" => api.playground_stats.total_errors,
                "avg_response_time" => api.playground_stats.avg_response_time,
                "last_used" => api.playground_stats.last_used.map(millis_since_unix_epoch),
            },
        )?;

        match usize::try_from(conn.affected_rows()) {
            Ok(0) | Err(_) => Err(Error::InsertFailed {
                location: Location::caller(),
                driver: DRIVER,
            }),
            Ok(inserted) => Ok(inserted),
        }
    }

    /// Refer to [`databases::Database::set_api_playground_enabled`](crate::core::databases::Database::set_api_playground_enabled).
    fn set_api_playground_enabled(&self, api_id: &ApiId, enabled: bool) -> Result<usize, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        // The `id` is checked in the select so that setting the current value
        // still counts as a match.
        let exists = conn.exec_first::<String, _, _>("SELECT id FROM apis WHERE id = :id", params! { "id" => api_id.as_str() })?;

        if exists.is_none() {
            return Ok(0);
        }

        conn.exec_drop(
            "UPDATE apis SET playground_enabled = :enabled WHERE id = :id",
            params! { "enabled" => enabled, "id" => api_id.as_str() },
        )?;

        Ok(1)
    }

    /// Refer to [`databases::Database::record_playground_usage`](crate::core::databases::Database::record_playground_usage).
    fn record_playground_usage(&self, api_id: &ApiId, usage: &PlaygroundUsage) -> Result<usize, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.exec_drop(
            "UPDATE apis SET
                calls = calls + 1,
                playground_total_requests = playground_total_requests + 1,
                playground_total_errors = playground_total_errors + :errors,
                playground_avg_response_time = :avg_response_time,
                playground_last_used = :last_used
            WHERE id = :id",
            params! {
                "errors" => u64::from(usage.is_error),
                "avg_response_time" => usage.avg_response_time,
                "last_used" => millis_since_unix_epoch(usage.last_used),
                "id" => api_id.as_str(),
            },
        )?;

        Ok(usize::try_from(conn.affected_rows()).unwrap_or(usize::MAX))
    }

    /// Refer to [`databases::Database::get_setting`](crate::core::databases::Database::get_setting).
    fn get_setting(&self, key: &str) -> Result<Option<Setting>, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let value = conn.exec_first::<String, _, _>("SELECT `value` FROM settings WHERE `key` = :key", params! { key })?;

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
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let key = setting.key.clone();
        let value = setting.value.to_string();

        conn.exec_drop(
            "INSERT INTO settings (`key`, `value`) VALUES (:key, :value) ON DUPLICATE KEY UPDATE `value` = VALUES(`value`)",
            params! { key, value },
        )?;

        Ok(1)
    }

    /// Refer to [`databases::Database::remove_setting`](crate::core::databases::Database::remove_setting).
    fn remove_setting(&self, key: &str) -> Result<usize, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.exec_drop("DELETE FROM settings WHERE `key` = :key", params! { key })?;

        Ok(usize::try_from(conn.affected_rows()).unwrap_or(usize::MAX))
    }
}
