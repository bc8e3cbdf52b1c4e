//! Process settings from environment variables (`.env` is loaded first when present).

use crate::config::validate_table_name;
use crate::error::ConfigError;
use sqlx::postgres::{PgConnectOptions, PgSslMode};
use std::str::FromStr;

/// Which storage gateway the server runs against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreKind {
    Postgres,
    /// Rows live in process memory and vanish on restart.
    Memory,
}

impl FromStr for StoreKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "postgres" => Ok(StoreKind::Postgres),
            "memory" => Ok(StoreKind::Memory),
            _ => Err(ConfigError::InvalidValue {
                key: "BIOSKOP_STORE",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Clone, Debug)]
pub struct DatabaseSettings {
    pub connect: PgConnectOptions,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub bind_addr: String,
    pub table: String,
    pub store: StoreKind,
    pub database: DatabaseSettings,
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `get`. `DATABASE_URL` wins over the individual `DB_*` parts.
    pub fn from_lookup<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| get(key).filter(|v| !v.is_empty()).unwrap_or_else(|| default.to_string());

        let table = var("BIOSKOP_TABLE", "bioskop");
        validate_table_name(&table)?;

        let connect = match get("DATABASE_URL").filter(|v| !v.is_empty()) {
            Some(url) => PgConnectOptions::from_str(&url).map_err(|e| ConfigError::InvalidDatabaseUrl(e.to_string()))?,
            None => {
                let ssl_raw = var("DB_SSLMODE", "disable");
                let ssl_mode = PgSslMode::from_str(&ssl_raw).map_err(|_| ConfigError::InvalidValue {
                    key: "DB_SSLMODE",
                    value: ssl_raw.clone(),
                })?;
                PgConnectOptions::new()
                    .host(&var("DB_HOST", "localhost"))
                    .port(parse_number("DB_PORT", &var("DB_PORT", "5432"))?)
                    .username(&var("DB_USER", "postgres"))
                    .password(&get("DB_PASSWORD").unwrap_or_default())
                    .database(&var("DB_NAME", "bioskopdb"))
                    .ssl_mode(ssl_mode)
            }
        };

        Ok(Settings {
            bind_addr: var("BIND_ADDR", "0.0.0.0:8080"),
            table,
            store: var("BIOSKOP_STORE", "postgres").parse()?,
            database: DatabaseSettings {
                connect,
                max_connections: parse_number("DB_MAX_CONNECTIONS", &var("DB_MAX_CONNECTIONS", "5"))?,
                acquire_timeout_secs: parse_number("DB_ACQUIRE_TIMEOUT_SECS", &var("DB_ACQUIRE_TIMEOUT_SECS", "5"))?,
            },
        })
    }
}

fn parse_number<T: FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(pairs: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let env: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Settings::from_lookup(|k| env.get(k).cloned())
    }

    #[test]
    fn defaults_match_local_development() {
        let s = settings(&[]).unwrap();
        assert_eq!(s.bind_addr, "0.0.0.0:8080");
        assert_eq!(s.table, "bioskop");
        assert_eq!(s.store, StoreKind::Postgres);
        assert_eq!(s.database.max_connections, 5);
        assert_eq!(s.database.acquire_timeout_secs, 5);
        assert_eq!(s.database.connect.get_host(), "localhost");
        assert_eq!(s.database.connect.get_port(), 5432);
        assert_eq!(s.database.connect.get_database(), Some("bioskopdb"));
    }

    #[test]
    fn parts_assemble_connect_options() {
        let s = settings(&[
            ("DB_HOST", "db.internal"),
            ("DB_PORT", "6543"),
            ("DB_USER", "sabar"),
            ("DB_NAME", "cinemas"),
        ])
        .unwrap();
        assert_eq!(s.database.connect.get_host(), "db.internal");
        assert_eq!(s.database.connect.get_port(), 6543);
        assert_eq!(s.database.connect.get_username(), "sabar");
        assert_eq!(s.database.connect.get_database(), Some("cinemas"));
    }

    #[test]
    fn database_url_takes_precedence() {
        let s = settings(&[("DATABASE_URL", "postgres://u:p@remote:5000/other"), ("DB_HOST", "ignored")]).unwrap();
        assert_eq!(s.database.connect.get_host(), "remote");
        assert_eq!(s.database.connect.get_port(), 5000);
    }

    #[test]
    fn bad_values_are_reported_by_key() {
        assert!(matches!(
            settings(&[("DB_PORT", "five")]),
            Err(ConfigError::InvalidValue { key: "DB_PORT", .. })
        ));
        assert!(matches!(
            settings(&[("DB_SSLMODE", "sometimes")]),
            Err(ConfigError::InvalidValue { key: "DB_SSLMODE", .. })
        ));
        assert!(matches!(
            settings(&[("BIOSKOP_STORE", "redis")]),
            Err(ConfigError::InvalidValue { key: "BIOSKOP_STORE", .. })
        ));
        assert!(matches!(
            settings(&[("BIOSKOP_TABLE", "x; drop")]),
            Err(ConfigError::InvalidTableName(_))
        ));
    }

    #[test]
    fn memory_store_is_selectable() {
        assert_eq!(settings(&[("BIOSKOP_STORE", "Memory")]).unwrap().store, StoreKind::Memory);
    }
}
