use anyhow::{Context, Result};
use chrono::NaiveTime;
use chrono_tz::Tz;
use storage::LeagueSettings;
use storage::settings::{DEFAULT_NO_SHOW_WIN_POINTS, DEFAULT_TIMEZONE, default_kickoff_time};

/// Credentials of the single administrator account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub admin: AdminCredentials,
    pub league: LeagueSettings,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup. Unset keys take their
    /// defaults; set keys must parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let port = var("PORT", "5000")
            .parse::<u16>()
            .context("PORT must be a number")?;

        let timezone: Tz = match lookup("TIMEZONE") {
            Some(name) => name
                .parse::<Tz>()
                .map_err(|e| anyhow::anyhow!("{e}"))
                .with_context(|| format!("TIMEZONE {name:?} is not a known timezone"))?,
            None => DEFAULT_TIMEZONE,
        };

        let no_show_win_points = match lookup("NO_SHOW_WIN_POINTS") {
            Some(points) => points
                .parse::<i64>()
                .context("NO_SHOW_WIN_POINTS must be an integer")?,
            None => DEFAULT_NO_SHOW_WIN_POINTS,
        };

        let kickoff_time = match lookup("KICKOFF_TIME") {
            Some(time) => NaiveTime::parse_from_str(&time, "%H:%M:%S")
                .context("KICKOFF_TIME must look like HH:MM:SS")?,
            None => default_kickoff_time(),
        };

        Ok(Self {
            host: var("HOST", "0.0.0.0"),
            port,
            database_url: var("DATABASE_URL", "sqlite://league.db"),
            admin: AdminCredentials {
                username: var("ADMIN_USERNAME", "admin"),
                password: var("ADMIN_PASSWORD", "admin"),
            },
            league: LeagueSettings {
                no_show_win_points,
                timezone,
                kickoff_time,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
        assert_eq!(config.database_url, "sqlite://league.db");
        assert_eq!(config.admin.username, "admin");
        assert_eq!(config.league.no_show_win_points, 3);
        assert_eq!(config.league.timezone, chrono_tz::Europe::Madrid);
        assert_eq!(
            config.league.kickoff_time,
            NaiveTime::from_hms_opt(22, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("PORT", "8080"),
            ("TIMEZONE", "America/Mexico_City"),
            ("NO_SHOW_WIN_POINTS", "2"),
            ("KICKOFF_TIME", "20:00:00"),
            ("ADMIN_PASSWORD", "s3cret"),
        ])
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.league.timezone, chrono_tz::America::Mexico_City);
        assert_eq!(config.league.no_show_win_points, 2);
        assert_eq!(config.admin.password, "s3cret");
    }

    #[test]
    fn test_invalid_values_are_errors() {
        assert!(config_from(&[("PORT", "http")]).is_err());
        assert!(config_from(&[("TIMEZONE", "Mars/Olympus")]).is_err());
        assert!(config_from(&[("NO_SHOW_WIN_POINTS", "three")]).is_err());
        assert!(config_from(&[("KICKOFF_TIME", "late")]).is_err());
    }
}
