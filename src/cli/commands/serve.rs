use anyhow::Result;
use std::path::{Path, PathBuf};
use tokio::net::TcpListener;
use tracing::{debug, error, info, trace};

use crate::config::{initialize_app_state, load_config, ServerConfig};
use crate::router::create_router;

/// Command-line values that win over file and environment configuration
#[derive(Debug, Default)]
pub struct ServeOverrides {
    pub bind_address: Option<String>,
    pub dataset_path: Option<PathBuf>,
    pub model_path: Option<PathBuf>,
    pub static_dir: Option<PathBuf>,
}

impl ServeOverrides {
    pub fn apply(self, mut config: ServerConfig) -> ServerConfig {
        if let Some(bind_address) = self.bind_address {
            config.bind_address = bind_address;
        }
        if let Some(dataset_path) = self.dataset_path {
            config.dataset_path = dataset_path;
        }
        if let Some(model_path) = self.model_path {
            config.model_path = model_path;
        }
        if let Some(static_dir) = self.static_dir {
            config.static_dir = static_dir;
        }
        config
    }
}

pub async fn serve(config_file: Option<&Path>, overrides: ServeOverrides) -> Result<()> {
    trace!("Entering serve function");
    info!("Car health service starting up");

    let config = overrides.apply(load_config(config_file)?);
    debug!("Bind address: {}", config.bind_address);
    debug!("Dataset path: {}", config.dataset_path.display());
    debug!("Model path: {}", config.model_path.display());

    trace!("Initializing application state");
    let state = match initialize_app_state(&config) {
        Ok(state) => {
            debug!("Application state initialized successfully");
            state
        }
        Err(e) => {
            error!("Failed to initialize application state: {}", e);
            return Err(e);
        }
    };

    trace!("Creating application router");
    let app = create_router(state, &config.static_dir);
    debug!("Serving static files from {}", config.static_dir.display());

    info!("Starting server on {}", config.bind_address);
    let listener = match TcpListener::bind(&config.bind_address).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to address {}: {}", config.bind_address, e);
            return Err(e.into());
        }
    };

    info!("Car health API running on http://{}", config.bind_address);
    info!("Swagger UI available at http://{}/swagger-ui", config.bind_address);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> ServerConfig {
        ServerConfig {
            bind_address: "0.0.0.0:5000".to_string(),
            dataset_path: PathBuf::from("data.csv"),
            model_path: PathBuf::from("model.json"),
            static_dir: PathBuf::from("dist"),
        }
    }

    #[test]
    fn test_overrides_replace_only_given_values() {
        let overrides = ServeOverrides {
            bind_address: Some("127.0.0.1:9000".to_string()),
            model_path: Some(PathBuf::from("other.json")),
            ..Default::default()
        };

        let config = overrides.apply(base());

        assert_eq!(config.bind_address, "127.0.0.1:9000");
        assert_eq!(config.model_path, PathBuf::from("other.json"));
        assert_eq!(config.dataset_path, PathBuf::from("data.csv"));
        assert_eq!(config.static_dir, PathBuf::from("dist"));
    }

    #[test]
    fn test_no_overrides_keeps_config() {
        assert_eq!(ServeOverrides::default().apply(base()), base());
    }
}
