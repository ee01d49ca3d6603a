//! File-based configuration.
//!
//! Settings are read from a TOML file, either an explicit path or
//! `$XDG_CONFIG_HOME/waypoint/config.toml`, and every field falls back to a
//! default when absent. The loaded [`Settings`] value is handed to
//! constructors explicitly; nothing is stored in process-wide state.
//!
//! ```toml
//! [database]
//! path = "/var/lib/waypoint/waypoint.db"
//!
//! [schedule]
//! day_start = "08:00"
//! day_end = "18:00"
//! slot_minutes = 90
//! rotation = "truncate"
//! max_trip_days = 90
//!
//! [calendar]
//! calendar_id = "primary"
//! time_zone = "Europe/Lisbon"
//!
//! [http]
//! bind = "127.0.0.1:5000"
//! ```

use std::{
    env,
    path::{Path, PathBuf},
};

use jiff::{SignedDuration, civil::Time};
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, TripError},
    scheduler::{DEFAULT_MAX_TRIP_DAYS, RotationPolicy, SchedulerConfig},
};

/// Environment variable consulted for the calendar access token.
pub const CALENDAR_TOKEN_ENV: &str = "WAYPOINT_CALENDAR_TOKEN";

/// Top-level application settings.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub schedule: ScheduleSettings,
    pub calendar: CalendarSettings,
    pub http: HttpSettings,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatabaseSettings {
    /// SQLite file; defaults to `$XDG_DATA_HOME/waypoint/waypoint.db`
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScheduleSettings {
    /// First slot start, `HH:MM`
    pub day_start: String,
    /// Slots starting at or after this time are not scheduled, `HH:MM`
    pub day_end: String,
    pub slot_minutes: u32,
    pub rotation: RotationPolicy,
    /// Longer trips are rejected as invalid input
    pub max_trip_days: u32,
}

impl Default for ScheduleSettings {
    fn default() -> Self {
        Self {
            day_start: "09:00".to_string(),
            day_end: "17:00".to_string(),
            slot_minutes: 120,
            rotation: RotationPolicy::Cycle,
            max_trip_days: DEFAULT_MAX_TRIP_DAYS as u32,
        }
    }
}

impl ScheduleSettings {
    /// Validates the settings into a scheduler configuration.
    pub fn to_scheduler_config(&self) -> Result<SchedulerConfig> {
        SchedulerConfig::new(
            parse_time("schedule.day_start", &self.day_start)?,
            parse_time("schedule.day_end", &self.day_end)?,
            SignedDuration::from_mins(i64::from(self.slot_minutes)),
            self.rotation,
        )?
        .with_max_trip_days(self.max_trip_days as usize)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalendarSettings {
    pub calendar_id: String,
    /// IANA zone name sent along with every exported event
    pub time_zone: String,
    /// Bearer token obtained out of band; see [`CALENDAR_TOKEN_ENV`]
    pub access_token: Option<String>,
    pub base_url: String,
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self {
            calendar_id: "primary".to_string(),
            time_zone: "UTC".to_string(),
            access_token: None,
            base_url: "https://www.googleapis.com/calendar/v3".to_string(),
        }
    }
}

impl CalendarSettings {
    /// Access token from the settings file, else from the environment.
    pub fn resolve_access_token(&self) -> Option<String> {
        let non_blank = |token: &String| !token.trim().is_empty();
        self.access_token
            .clone()
            .filter(non_blank)
            .or_else(|| env::var(CALENDAR_TOKEN_ENV).ok().filter(non_blank))
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct HttpSettings {
    pub bind: String,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:5000".to_string(),
        }
    }
}

impl Settings {
    /// Parses settings from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| TripError::Configuration {
            message: format!("Invalid configuration: {e}"),
        })
    }

    /// Loads settings from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| TripError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Loads the explicit file when given, else the XDG config file when it
    /// exists, else defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_toml_file(path);
        }

        match xdg::BaseDirectories::with_prefix("waypoint").find_config_file("config.toml") {
            Some(path) => {
                log::debug!("Loading configuration from {}", path.display());
                Self::from_toml_file(path)
            }
            None => Ok(Self::default()),
        }
    }
}

fn parse_time(field: &str, value: &str) -> Result<Time> {
    let trimmed = value.trim();
    trimmed
        .parse::<Time>()
        .or_else(|_| Time::strptime("%H:%M", trimmed))
        .map_err(|e| {
            TripError::invalid_input(field)
                .with_reason(format!("'{value}' is not a valid time: {e}"))
        })
}

#[cfg(test)]
mod tests {
    use jiff::civil::time;

    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let settings = Settings::from_toml_str("").unwrap();
        let config = settings.schedule.to_scheduler_config().unwrap();

        assert_eq!(config, SchedulerConfig::default());
        assert_eq!(settings.calendar.calendar_id, "primary");
        assert_eq!(settings.http.bind, "0.0.0.0:5000");
        assert!(settings.database.path.is_none());
    }

    #[test]
    fn test_schedule_section_overrides() {
        let settings = Settings::from_toml_str(
            r#"
            [schedule]
            day_start = "08:30"
            day_end = "12:00"
            slot_minutes = 90
            rotation = "truncate"
            max_trip_days = 14
            "#,
        )
        .unwrap();
        let config = settings.schedule.to_scheduler_config().unwrap();

        assert_eq!(config.rotation(), RotationPolicy::Truncate);
        assert_eq!(config.max_trip_days(), 14);
        let starts: Vec<_> = config.slot_windows().iter().map(|w| w.start).collect();
        assert_eq!(starts, [time(8, 30, 0, 0), time(10, 0, 0, 0), time(11, 30, 0, 0)]);
    }

    #[test]
    fn test_invalid_schedule_values() {
        let settings = Settings::from_toml_str(
            r#"
            [schedule]
            day_start = "nine"
            "#,
        )
        .unwrap();
        assert!(settings.schedule.to_scheduler_config().unwrap_err().is_invalid_input());

        let zero = Settings::from_toml_str("[schedule]\nslot_minutes = 0").unwrap();
        assert!(zero.schedule.to_scheduler_config().is_err());

        let no_days = Settings::from_toml_str("[schedule]\nmax_trip_days = 0").unwrap();
        assert!(no_days.schedule.to_scheduler_config().unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let err = Settings::from_toml_str("[schedule]\nslot_hours = 2").unwrap_err();
        assert!(matches!(err, TripError::Configuration { .. }));
    }

    #[test]
    fn test_explicit_file_is_loaded() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[http]\nbind = \"127.0.0.1:8080\"\n").unwrap();

        let settings = Settings::load(Some(&path)).unwrap();
        assert_eq!(settings.http.bind, "127.0.0.1:8080");

        let missing = Settings::load(Some(&dir.path().join("missing.toml")));
        assert!(matches!(missing, Err(TripError::FileSystem { .. })));
    }

    #[test]
    fn test_configured_token_wins() {
        let settings = CalendarSettings {
            access_token: Some("from-file".to_string()),
            ..Default::default()
        };
        assert_eq!(settings.resolve_access_token().as_deref(), Some("from-file"));
    }
}
