//! Builder for creating and configuring TripPlanner instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::TripPlanner;
use crate::{
    db::Database,
    error::{Result, TripError, join_error},
    scheduler::{Scheduler, SchedulerConfig},
};

/// Builder for creating and configuring TripPlanner instances.
#[derive(Debug, Clone, Default)]
pub struct TripPlannerBuilder {
    database_path: Option<PathBuf>,
    scheduler_config: Option<SchedulerConfig>,
}

impl TripPlannerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses the XDG Base Directory specification:
    /// `$XDG_DATA_HOME/waypoint/waypoint.db` or
    /// `~/.local/share/waypoint/waypoint.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the daily slot layout and rotation policy. Defaults to
    /// [`SchedulerConfig::default`].
    pub fn with_scheduler_config(mut self, config: SchedulerConfig) -> Self {
        self.scheduler_config = Some(config);
        self
    }

    /// Builds the planner, creating the database file and schema if needed.
    ///
    /// # Errors
    ///
    /// Returns `TripError::FileSystem` if the database directory cannot be
    /// created, `TripError::XdgDirectory` if no default location is
    /// available, and `TripError::Database` if initialization fails.
    pub async fn build(self) -> Result<TripPlanner> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| TripError::FileSystem {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let init_path = db_path.clone();
        task::spawn_blocking(move || Database::new(&init_path).map(drop))
            .await
            .map_err(join_error)??;

        log::debug!("Using itinerary database at {}", db_path.display());
        let scheduler = Scheduler::new(self.scheduler_config.unwrap_or_default());
        Ok(TripPlanner::new(db_path, scheduler))
    }

    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("waypoint")
            .place_data_file("waypoint.db")
            .map_err(|e| TripError::XdgDirectory(e.to_string()))
    }
}
