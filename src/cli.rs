use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

use commands::{predict, serve, ServeOverrides};

#[derive(Parser)]
#[command(name = "carhealth")]
#[command(about = "Car health prediction service with CLI tools")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Optional configuration file (TOML, YAML or JSON)
        #[arg(short, long, env = "CARHEALTH_CONFIG")]
        config: Option<PathBuf>,

        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:5000, 127.0.0.1:8080)
        #[arg(short, long)]
        bind_address: Option<String>,

        /// CSV file with fleet telemetry
        #[arg(short, long)]
        dataset_path: Option<PathBuf>,

        /// JSON file with the maintenance model
        #[arg(short, long)]
        model_path: Option<PathBuf>,

        /// Directory with the built dashboard served at `/`
        #[arg(short, long)]
        static_dir: Option<PathBuf>,
    },
    /// Predict days until maintenance without starting the server
    ///
    /// Example:
    ///   carhealth predict -- 65 80 90 1
    Predict {
        /// JSON file with the maintenance model
        #[arg(short, long, default_value = crate::config::DEFAULT_MODEL_PATH)]
        model_path: PathBuf,

        /// Feature values in model order
        #[arg(required = true, allow_negative_numbers = true)]
        features: Vec<f64>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve {
                config,
                bind_address,
                dataset_path,
                model_path,
                static_dir,
            } => {
                let overrides = ServeOverrides {
                    bind_address,
                    dataset_path,
                    model_path,
                    static_dir,
                };
                serve(config.as_deref(), overrides).await?;
            }
            Commands::Predict { model_path, features } => {
                predict(&model_path, &features)?;
            }
        }
        Ok(())
    }
}
