//! Fleet telemetry dataset behind the summary endpoints.

use chrono::{NaiveDate, NaiveDateTime};
use polars::prelude::*;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::schemas::{ComponentMetrics, FailureCounts, HealthMetrics};

/// Error types for dataset summaries
#[derive(Error, Debug)]
pub enum DatasetError {
    /// One or more columns an endpoint depends on are absent
    #[error("Required columns missing in dataset: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// A column holds no numeric values to average
    #[error("Column '{0}' has no numeric values")]
    NoValues(String),

    /// A `Date` cell could not be understood
    #[error("Unrecognized date '{0}'")]
    InvalidDate(String),

    /// Error from Polars DataFrame operations
    #[error("DataFrame error: {0}")]
    DataFrame(#[from] PolarsError),
}

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%d.%m.%Y"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

#[derive(Debug, Clone)]
pub struct Dataset {
    frame: DataFrame,
}

impl Default for Dataset {
    fn default() -> Self {
        Self::from_frame(DataFrame::empty())
    }
}

impl Dataset {
    pub fn from_frame(frame: DataFrame) -> Self {
        Self { frame }
    }

    /// Read the CSV at `path`. A missing file is not fatal: the service runs
    /// with an empty dataset and the summaries report missing columns.
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        if !path.exists() {
            warn!("The dataset file is missing: {}", path.display());
            return Ok(Self::default());
        }

        debug!("Reading dataset from {}", path.display());
        let frame = CsvReadOptions::default()
            .with_has_header(true)
            .try_into_reader_with_file_path(Some(path.to_path_buf()))?
            .finish()
            .map_err(|e| {
                error!("Failed to parse dataset {}: {}", path.display(), e);
                e
            })?;
        info!("Loaded dataset with {} rows and {} columns", frame.height(), frame.width());

        Ok(Self { frame })
    }

    pub fn is_loaded(&self) -> bool {
        self.frame.width() > 0
    }

    pub fn rows(&self) -> usize {
        self.frame.height()
    }

    fn has_column(&self, name: &str) -> bool {
        self.frame.get_column_index(name).is_some()
    }

    fn require(&self, names: &[&str]) -> Result<(), DatasetError> {
        let missing: Vec<String> = names
            .iter()
            .filter(|name| !self.has_column(name))
            .map(|name| name.to_string())
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(DatasetError::MissingColumns(missing))
        }
    }

    fn mean(&self, name: &str) -> Result<f64, DatasetError> {
        let values = self
            .frame
            .column(name)?
            .as_materialized_series()
            .cast(&DataType::Float64)?;
        values.mean().ok_or_else(|| DatasetError::NoValues(name.to_string()))
    }

    /// Mean of `name`, or zero when the column is absent.
    fn mean_or_zero(&self, name: &str) -> Result<f64, DatasetError> {
        if self.has_column(name) {
            self.mean(name)
        } else {
            Ok(0.0)
        }
    }

    pub fn component_metrics(&self) -> Result<ComponentMetrics, DatasetError> {
        self.require(&["Oil Pressure", "Tire Pressure", "Battery Health"])?;
        Ok(ComponentMetrics {
            oil_pressure: self.mean("Oil Pressure")?,
            tire_pressure: self.mean("Tire Pressure")?,
            battery_health: self.mean("Battery Health")?,
        })
    }

    /// Rows that required maintenance, counted per month abbreviation.
    pub fn failure_counts(&self) -> Result<FailureCounts, DatasetError> {
        self.require(&["Date", "Maintenance Required"])?;

        let flags = self
            .frame
            .column("Maintenance Required")?
            .as_materialized_series()
            .cast(&DataType::Int64)?;
        let dates = self
            .frame
            .column("Date")?
            .as_materialized_series()
            .cast(&DataType::String)?;

        let mut counts = BTreeMap::new();
        for (flag, date) in flags.i64()?.into_iter().zip(dates.str()?.into_iter()) {
            if flag != Some(1) {
                continue;
            }
            let date = date.ok_or_else(|| DatasetError::InvalidDate(String::new()))?;
            *counts.entry(month_abbreviation(date)?).or_insert(0) += 1;
        }

        Ok(FailureCounts(counts))
    }

    pub fn health_metrics(&self) -> Result<HealthMetrics, DatasetError> {
        Ok(HealthMetrics {
            average_oil_pressure: self.mean_or_zero("oil_pressure")?,
            average_tire_pressure: self.mean_or_zero("tire_pressure")?,
            battery_health: self.mean_or_zero("battery_health")?,
            engine_temperature: self.mean_or_zero("engine_temp")?,
        })
    }
}

fn month_abbreviation(raw: &str) -> Result<String, DatasetError> {
    let raw = raw.trim();
    let date = DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
                .map(|datetime| datetime.date())
        })
        .ok_or_else(|| DatasetError::InvalidDate(raw.to_string()))?;
    Ok(date.format("%b").to_string())
}
