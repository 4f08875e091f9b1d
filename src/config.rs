use anyhow::Result;
use config::{builder::DefaultState, Config, ConfigBuilder, Environment, File};
use moka::future::Cache;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use crate::dataset::Dataset;
use crate::predictor::LinearModel;
use crate::schemas::AppState;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5000";
pub const DEFAULT_DATASET_PATH: &str = "logistics_dataset_with_maintenance_required.csv";
pub const DEFAULT_MODEL_PATH: &str = "models/maintenance_model.json";
pub const DEFAULT_STATIC_DIR: &str = "workspace/frontend/dist";

/// Server settings, layered: built-in defaults, then an optional config
/// file, then `CARHEALTH_*` environment variables.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServerConfig {
    pub bind_address: String,
    pub dataset_path: PathBuf,
    pub model_path: PathBuf,
    pub static_dir: PathBuf,
}

fn defaults() -> Result<ConfigBuilder<DefaultState>> {
    Ok(Config::builder()
        .set_default("bind_address", DEFAULT_BIND_ADDRESS)?
        .set_default("dataset_path", DEFAULT_DATASET_PATH)?
        .set_default("model_path", DEFAULT_MODEL_PATH)?
        .set_default("static_dir", DEFAULT_STATIC_DIR)?)
}

/// Load configuration from `config_file` (if any) and the environment
pub fn load_config(config_file: Option<&Path>) -> Result<ServerConfig> {
    dotenvy::dotenv().ok();

    let mut builder = defaults()?;
    if let Some(path) = config_file {
        debug!("Reading configuration file {}", path.display());
        builder = builder.add_source(File::from(path));
    }
    let config = builder
        .add_source(Environment::with_prefix("CARHEALTH"))
        .build()?
        .try_deserialize::<ServerConfig>()?;

    debug!("Resolved configuration: {:?}", config);
    Ok(config)
}

/// Initialize application state from the resolved configuration
pub fn initialize_app_state(config: &ServerConfig) -> Result<AppState> {
    let model = LinearModel::load(&config.model_path)?;
    let dataset = Dataset::load(&config.dataset_path)?;

    // Dataset is immutable while the server runs, the TTL only bounds memory
    let cache = Cache::builder()
        .max_capacity(100)
        .time_to_live(Duration::from_secs(300))
        .build();

    info!(
        "Application state ready: {} model features, {} dataset rows",
        model.feature_columns.len(),
        dataset.rows()
    );

    Ok(AppState {
        model: Arc::new(model),
        dataset: Arc::new(dataset),
        cache,
    })
}
