//! Process configuration from environment variables, read once at startup.

use crate::error::ConfigError;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://complaints.db";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    /// Auth token for hosted databases. The SQLite driver does not use it.
    pub auth_token: Option<String>,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
}

impl Config {
    /// Load from the process environment. Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let database_url = get("DATABASE_URL")
            .or_else(|| get("TURSO_DATABASE_URL"))
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        let auth_token = get("DATABASE_AUTH_TOKEN").or_else(|| get("TURSO_AUTH_TOKEN"));
        let host = get("HOST").unwrap_or_else(|| DEFAULT_HOST.into());
        let port = match get("PORT") {
            Some(v) => v
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { var: "PORT", value: v })?,
            None => DEFAULT_PORT,
        };
        let max_connections = match get("DATABASE_MAX_CONNECTIONS") {
            Some(v) => match v.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::Invalid {
                        var: "DATABASE_MAX_CONNECTIONS",
                        value: v,
                    })
                }
            },
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Config {
            database_url,
            auth_token,
            host,
            port,
            max_connections,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|k| env.get(k).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let c = load(&[]).unwrap();
        assert_eq!(c.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(c.auth_token, None);
        assert_eq!(c.port, 3000);
        assert_eq!(c.bind_addr(), "0.0.0.0:3000");
        assert_eq!(c.max_connections, DEFAULT_MAX_CONNECTIONS);
    }

    #[test]
    fn turso_names_are_fallbacks() {
        let c = load(&[
            ("TURSO_DATABASE_URL", "sqlite://turso.db"),
            ("TURSO_AUTH_TOKEN", "secret"),
        ])
        .unwrap();
        assert_eq!(c.database_url, "sqlite://turso.db");
        assert_eq!(c.auth_token.as_deref(), Some("secret"));

        let c = load(&[
            ("DATABASE_URL", "sqlite://primary.db"),
            ("TURSO_DATABASE_URL", "sqlite://turso.db"),
        ])
        .unwrap();
        assert_eq!(c.database_url, "sqlite://primary.db");
    }

    #[test]
    fn empty_port_uses_default() {
        let c = load(&[("PORT", "")]).unwrap();
        assert_eq!(c.port, DEFAULT_PORT);
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = load(&[("PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "PORT", .. }));
        assert!(load(&[("PORT", "70000")]).is_err());
    }

    #[test]
    fn zero_connections_is_rejected() {
        assert!(load(&[("DATABASE_MAX_CONNECTIONS", "0")]).is_err());
        assert_eq!(load(&[("DATABASE_MAX_CONNECTIONS", "2")]).unwrap().max_connections, 2);
    }
}
