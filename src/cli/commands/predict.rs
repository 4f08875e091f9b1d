use anyhow::Result;
use std::path::Path;
use tracing::{debug, info};

use crate::predictor::{predict_days, LinearModel};

/// Run the model once and print the predicted days to stdout
pub fn predict(model_path: &Path, features: &[f64]) -> Result<()> {
    info!("Loading model from {}", model_path.display());
    let model = LinearModel::load(model_path)?;
    debug!("Predicting for features {:?}", features);

    let days = predict_days(&model, features)?;
    println!("{}", days);
    Ok(())
}
