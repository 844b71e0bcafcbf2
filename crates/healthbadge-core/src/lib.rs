pub mod app_config;
pub mod config;
pub mod inspection;
pub mod score;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use inspection::{HealthBadgeState, InspectionRecord, RestaurantIdentity, RiskCategory};
pub use score::{classify, BadgeColor, OperatingCondition, ScoreClass};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
