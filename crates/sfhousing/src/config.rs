//! Dashboard configuration.

use crate::error::{DashboardError, Result};
use serde::{Deserialize, Serialize};
use sfhousing_analysis::PipelineConfig;
use std::path::{Path, PathBuf};

/// Default location of the census housing table.
pub const DEFAULT_HOUSING_PATH: &str = "Data/sfo_neighborhoods_census_data.csv";

/// Default location of the neighborhood coordinate table.
pub const DEFAULT_LOCATIONS_PATH: &str = "Data/neighborhoods_coordinates.csv";

/// Neighborhood preselected for the neighborhood analyses.
pub const DEFAULT_NEIGHBORHOOD: &str = "North Beach";

/// Where the dashboard reads its data and how it ranks neighborhoods.
///
/// Every field has a default, so a config file only lists overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Housing CSV path.
    pub housing_path: PathBuf,

    /// Coordinate CSV path, if any.
    pub locations_path: Option<PathBuf>,

    /// Fail when `locations_path` is missing instead of skipping it.
    pub require_locations: bool,

    /// Preferred neighborhood when none is chosen.
    pub default_neighborhood: String,

    /// Ranking limits.
    pub pipeline: PipelineConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            housing_path: PathBuf::from(DEFAULT_HOUSING_PATH),
            locations_path: Some(PathBuf::from(DEFAULT_LOCATIONS_PATH)),
            require_locations: false,
            default_neighborhood: DEFAULT_NEIGHBORHOOD.to_string(),
            pipeline: PipelineConfig::default(),
        }
    }
}

impl DashboardConfig {
    /// Read a JSON config file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| DashboardError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| DashboardError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The coordinate table to load, if it should be loaded.
    ///
    /// An optional table that does not exist on disk is skipped.
    pub fn locations_to_load(&self) -> Option<&Path> {
        let path = self.locations_path.as_deref()?;
        (self.require_locations || path.exists()).then_some(path)
    }
}
