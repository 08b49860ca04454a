use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// The six parameters of a validated run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SimConfig {
    pub landing_service_time: u64,
    pub takeoff_service_time: u64,
    pub avg_between_landings: f64,
    pub avg_between_takeoffs: f64,
    pub max_landing_wait: u64,
    pub total_sim_time: u64,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is missing")]
    Missing(&'static str),
    #[error("landing service time must be positive, got {0}")]
    LandingServiceTime(i64),
    #[error("takeoff service time must be positive, got {0}")]
    TakeoffServiceTime(i64),
    #[error("average time between landings must be positive, got {0}")]
    AvgBetweenLandings(f64),
    #[error("average time between takeoffs must be positive, got {0}")]
    AvgBetweenTakeoffs(f64),
    #[error("maximum landing wait must not be negative, got {0}")]
    MaxLandingWait(i64),
    #[error("total simulated time must be positive, got {0}")]
    TotalSimTime(i64),
    #[error("failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse scenario file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parameters as entered, from flags, a scenario file or prompts. Integers are signed
/// so that a negative entry reaches `validate` instead of failing to parse.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct PartialConfig {
    pub landing_service_time: Option<i64>,
    pub takeoff_service_time: Option<i64>,
    pub avg_between_landings: Option<f64>,
    pub avg_between_takeoffs: Option<f64>,
    pub max_landing_wait: Option<i64>,
    pub total_sim_time: Option<i64>,
}

fn positive(value: i64, err: fn(i64) -> ConfigError) -> Result<u64, ConfigError> {
    if value > 0 { Ok(value as u64) } else { Err(err(value)) }
}

fn required<T>(value: Option<T>, name: &'static str) -> Result<T, ConfigError> {
    value.ok_or(ConfigError::Missing(name))
}

impl PartialConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Fields set in `self` win over those in `fallback`.
    pub fn or(self, fallback: PartialConfig) -> PartialConfig {
        PartialConfig {
            landing_service_time: self.landing_service_time.or(fallback.landing_service_time),
            takeoff_service_time: self.takeoff_service_time.or(fallback.takeoff_service_time),
            avg_between_landings: self.avg_between_landings.or(fallback.avg_between_landings),
            avg_between_takeoffs: self.avg_between_takeoffs.or(fallback.avg_between_takeoffs),
            max_landing_wait: self.max_landing_wait.or(fallback.max_landing_wait),
            total_sim_time: self.total_sim_time.or(fallback.total_sim_time),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.landing_service_time.is_some()
            && self.takeoff_service_time.is_some()
            && self.avg_between_landings.is_some()
            && self.avg_between_takeoffs.is_some()
            && self.max_landing_wait.is_some()
            && self.total_sim_time.is_some()
    }

    /// Checks every constraint, in parameter order, and returns the first one violated.
    pub fn validate(&self) -> Result<SimConfig, ConfigError> {
        let landing_service_time = positive(
            required(self.landing_service_time, "landing service time")?,
            ConfigError::LandingServiceTime,
        )?;
        let takeoff_service_time = positive(
            required(self.takeoff_service_time, "takeoff service time")?,
            ConfigError::TakeoffServiceTime,
        )?;

        let avg_between_landings = required(self.avg_between_landings, "average time between landings")?;
        // also rejects NaN
        if !(avg_between_landings > 0.0) {
            return Err(ConfigError::AvgBetweenLandings(avg_between_landings));
        }
        let avg_between_takeoffs = required(self.avg_between_takeoffs, "average time between takeoffs")?;
        if !(avg_between_takeoffs > 0.0) {
            return Err(ConfigError::AvgBetweenTakeoffs(avg_between_takeoffs));
        }

        let max_landing_wait = required(self.max_landing_wait, "maximum landing wait")?;
        if max_landing_wait < 0 {
            return Err(ConfigError::MaxLandingWait(max_landing_wait));
        }
        let total_sim_time = positive(
            required(self.total_sim_time, "total simulated time")?,
            ConfigError::TotalSimTime,
        )?;

        Ok(SimConfig {
            landing_service_time,
            takeoff_service_time,
            avg_between_landings,
            avg_between_takeoffs,
            max_landing_wait: max_landing_wait as u64,
            total_sim_time,
        })
    }
}
