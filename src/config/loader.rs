//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading planner
//! configurations from YAML files.

use chrono::Datelike;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{PlannerError, PlannerResult};
use crate::holidays::HolidaySource;
use crate::models::{Holiday, Proposal, ProposalCatalog};

use super::types::{HolidayFile, PlannerConfig, PlannerSettings, ProposalFile};

/// Loads and provides access to planner configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides methods to query settings, holiday tables, and proposals.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/ro/
/// ├── planner.yaml        # Country, locale, years, PTO bounds
/// ├── holidays/
/// │   └── 2026.yaml       # Statutory holidays for the year
/// └── proposals/
///     └── 2026.yaml       # Bridge-vacation catalog for the year
/// ```
///
/// # Example
///
/// ```no_run
/// use vacation_planner::config::ConfigLoader;
/// use vacation_planner::holidays::HolidaySource;
///
/// let loader = ConfigLoader::load("./config/ro").unwrap();
///
/// match loader.holidays_for(2026) {
///     Some(holidays) => println!("{} holidays", holidays.len()),
///     None => println!("no table for 2026"),
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PlannerConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/ro")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - planner.yaml or the holidays directory is missing
    /// - Any file contains invalid YAML
    /// - A holiday date does not belong to its file's year
    /// - Two files declare the same year
    ///
    /// # Example
    ///
    /// ```no_run
    /// use vacation_planner::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/ro")?;
    /// # Ok::<(), vacation_planner::error::PlannerError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> PlannerResult<Self> {
        let path = path.as_ref();

        let settings = Self::load_yaml::<PlannerSettings>(&path.join("planner.yaml"))?;

        let holidays = Self::load_holidays(&path.join("holidays"))?;

        // A missing proposals directory just means no catalog.
        let proposals_dir = path.join("proposals");
        let proposals = if proposals_dir.exists() {
            Self::load_proposals(&proposals_dir)?
        } else {
            BTreeMap::new()
        };

        debug!(
            country = %settings.country,
            holiday_years = ?holidays.keys().collect::<Vec<_>>(),
            proposal_years = ?proposals.keys().collect::<Vec<_>>(),
            "Loaded planner configuration"
        );

        Ok(Self {
            config: PlannerConfig::new(settings, holidays, proposals),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> PlannerResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PlannerError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| PlannerError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Collects every .yaml file in a directory.
    fn yaml_files(dir: &Path) -> PlannerResult<Vec<std::path::PathBuf>> {
        let dir_str = dir.display().to_string();

        if !dir.exists() {
            return Err(PlannerError::ConfigNotFound { path: dir_str });
        }

        let entries = fs::read_dir(dir).map_err(|_| PlannerError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|_| PlannerError::ConfigNotFound {
                path: dir_str.clone(),
            })?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    /// Loads all holiday files from the holidays directory.
    fn load_holidays(dir: &Path) -> PlannerResult<BTreeMap<i32, Vec<Holiday>>> {
        let mut tables = BTreeMap::new();

        for path in Self::yaml_files(dir)? {
            let file = Self::load_yaml::<HolidayFile>(&path)?;
            let path_str = path.display().to_string();

            if let Some(stray) = file.holidays.iter().find(|h| h.date.year() != file.year) {
                return Err(PlannerError::ConfigParseError {
                    path: path_str,
                    message: format!(
                        "holiday '{}' on {} is outside year {}",
                        stray.name, stray.date, file.year
                    ),
                });
            }

            if tables.insert(file.year, file.holidays).is_some() {
                return Err(PlannerError::ConfigParseError {
                    path: path_str,
                    message: format!("duplicate holiday table for year {}", file.year),
                });
            }
        }

        Ok(tables)
    }

    /// Loads all proposal catalogs from the proposals directory.
    fn load_proposals(dir: &Path) -> PlannerResult<BTreeMap<i32, Vec<Proposal>>> {
        let mut catalogs = BTreeMap::new();

        for path in Self::yaml_files(dir)? {
            let file = Self::load_yaml::<ProposalFile>(&path)?;
            if catalogs.insert(file.year, file.proposals).is_some() {
                return Err(PlannerError::ConfigParseError {
                    path: path.display().to_string(),
                    message: format!("duplicate proposal catalog for year {}", file.year),
                });
            }
        }

        Ok(catalogs)
    }

    /// Returns the underlying planner configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Returns the planner settings.
    pub fn settings(&self) -> &PlannerSettings {
        self.config.settings()
    }

    /// Builds a fresh proposal catalog for a year.
    ///
    /// Years without an authored catalog get an empty one; bridges are tied to
    /// one year's calendar and are never borrowed from another year.
    pub fn proposal_catalog(&self, year: i32) -> ProposalCatalog {
        ProposalCatalog::new(
            self.config
                .proposals()
                .get(&year)
                .cloned()
                .unwrap_or_default(),
        )
    }
}

impl HolidaySource for ConfigLoader {
    fn holidays_for(&self, year: i32) -> Option<Vec<Holiday>> {
        self.config.holidays().get(&year).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::{chargeable_breakdown, compute_chargeable_days};
    use chrono::NaiveDate;
    use std::collections::BTreeSet;

    fn config_path() -> &'static str {
        "./config/ro"
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.settings().country, "RO");
        assert_eq!(loader.settings().default_year, 2026);
        assert_eq!(loader.settings().fallback_year, 2026);
    }

    #[test]
    fn test_pto_bounds_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let pto = loader.settings().pto;
        assert_eq!(pto.default_total, 22);
        assert_eq!(pto.min_total, 0);
        assert_eq!(pto.max_total, 60);
        assert!(pto.contains(60));
        assert!(!pto.contains(61));
    }

    #[test]
    fn test_year_range_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let years = loader.settings().years;
        assert!(years.contains(2026));
        assert!(years.contains(2030));
        assert!(!years.contains(2025));
    }

    #[test]
    fn test_holidays_2026_table() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let holidays = loader.holidays_for(2026).unwrap();
        assert_eq!(holidays.len(), 17);

        let first = &holidays[0];
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());

        let june_first: Vec<_> = holidays
            .iter()
            .filter(|h| h.date == NaiveDate::from_ymd_opt(2026, 6, 1).unwrap())
            .collect();
        assert_eq!(june_first.len(), 2);
    }

    #[test]
    fn test_holidays_for_unknown_year_is_none() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert!(loader.holidays_for(2027).is_none());
    }

    #[test]
    fn test_proposal_catalog_2026() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let catalog = loader.proposal_catalog(2026);
        assert_eq!(catalog.len(), 7);
        assert_eq!(catalog.included_cost(), 9);
        assert!(catalog.get("easter").is_some());
    }

    #[test]
    fn test_shipped_proposal_costs_match_holiday_tables() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let no_personal_days = BTreeSet::new();

        for (year, proposals) in loader.config().proposals() {
            let holidays: BTreeSet<NaiveDate> = loader
                .holidays_for(*year)
                .unwrap_or_else(|| panic!("no holiday table for catalog year {}", year))
                .iter()
                .map(|h| h.date)
                .collect();

            for proposal in proposals {
                let breakdown = chargeable_breakdown(
                    proposal.start,
                    proposal.end,
                    &holidays,
                    &no_personal_days,
                );
                assert_eq!(
                    proposal.pto_cost,
                    compute_chargeable_days(proposal.start, proposal.end, &holidays, &no_personal_days),
                    "pto_cost of {}",
                    proposal.id
                );
                assert_eq!(
                    proposal.pto_dates, breakdown.chargeable_dates,
                    "pto_dates of {}",
                    proposal.id
                );
            }
        }
    }

    #[test]
    fn test_proposal_catalog_unknown_year_is_empty() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert!(loader.proposal_catalog(2028).is_empty());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");
        assert!(result.is_err());

        match result {
            Err(PlannerError::ConfigNotFound { path }) => {
                assert!(path.contains("planner.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }
}
