//! Dashboard state store.
//!
//! Holds the prediction inputs, the last received prediction and the
//! weather label for the lifetime of the dashboard component. All changes
//! go through [`DashboardAction`] so the component can drive it with
//! `use_reducer` and re-render from the new value.

use std::fmt;
use std::rc::Rc;

use common::{PredictionRequest, FEATURE_COUNT};
use thiserror::Error;
use yew::Reducible;

/// Inputs the dashboard starts with before the user edits anything.
pub const DEFAULT_FEATURES: [f64; FEATURE_COUNT] = [65.0, 80.0, 90.0, 1.0];

/// Weather label shown until the user picks another one.
pub const DEFAULT_WEATHER: &str = "Sunny";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StateError {
    #[error("feature index {index} out of range, expected less than {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// One slot of the input vector as the user left it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeatureValue {
    /// The input box was cleared. Kept distinct from zero so the box stays empty.
    Empty,
    /// Parsed value. Unparseable text is stored as NaN.
    Number(f64),
}

impl FeatureValue {
    /// Parse raw input text without rejecting anything.
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::Empty;
        }
        Self::Number(raw.trim().parse::<f64>().unwrap_or(f64::NAN))
    }

    /// Value sent to the prediction service. Anything that is not a finite
    /// number becomes zero.
    pub fn coerce(self) -> f64 {
        match self {
            Self::Number(value) if value.is_finite() => value,
            _ => 0.0,
        }
    }
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Number(value) => write!(f, "{}", value),
        }
    }
}

/// The four model inputs in wire order.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector([FeatureValue; FEATURE_COUNT]);

impl Default for FeatureVector {
    fn default() -> Self {
        Self(DEFAULT_FEATURES.map(FeatureValue::Number))
    }
}

impl FeatureVector {
    pub fn get(&self, index: usize) -> Option<FeatureValue> {
        self.0.get(index).copied()
    }

    pub fn values(&self) -> &[FeatureValue; FEATURE_COUNT] {
        &self.0
    }

    /// Store the raw text of input `index`.
    pub fn set(&mut self, index: usize, raw: &str) -> Result<(), StateError> {
        let slot = self.0.get_mut(index).ok_or(StateError::IndexOutOfRange {
            index,
            len: FEATURE_COUNT,
        })?;
        *slot = FeatureValue::parse(raw);
        Ok(())
    }

    pub fn coerced(&self) -> [f64; FEATURE_COUNT] {
        self.0.map(FeatureValue::coerce)
    }

    pub fn to_request(&self) -> PredictionRequest {
        PredictionRequest::from(self.coerced())
    }
}

/// Outcome of prediction requests as far as the dashboard can tell.
///
/// Stays `Requesting` while any request is in flight; a request that
/// resolves early does not clear the busy state of a later one.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestStatus {
    #[default]
    Idle,
    Requesting,
    Fulfilled,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardAction {
    SetFeature { index: usize, raw: String },
    SetWeather(String),
    PredictionRequested,
    PredictionFulfilled(f64),
    PredictionFailed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub features: FeatureVector,
    pub prediction: Option<f64>,
    pub weather: String,
    pub status: RequestStatus,
    /// Requests issued but not yet resolved
    pub in_flight: usize,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            features: FeatureVector::default(),
            prediction: None,
            weather: DEFAULT_WEATHER.to_string(),
            status: RequestStatus::Idle,
            in_flight: 0,
        }
    }
}

impl DashboardState {
    /// Apply one action in place.
    ///
    /// A failed request only records the failure: the previous prediction is
    /// kept on screen.
    pub fn apply(&mut self, action: DashboardAction) -> Result<(), StateError> {
        match action {
            DashboardAction::SetFeature { index, raw } => self.features.set(index, &raw)?,
            DashboardAction::SetWeather(label) => self.weather = label,
            DashboardAction::PredictionRequested => {
                self.in_flight += 1;
                self.status = RequestStatus::Requesting;
            }
            DashboardAction::PredictionFulfilled(days) => {
                self.prediction = Some(days);
                self.settle(RequestStatus::Fulfilled);
            }
            DashboardAction::PredictionFailed(error) => self.settle(RequestStatus::Failed(error)),
        }
        Ok(())
    }

    fn settle(&mut self, outcome: RequestStatus) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.status = if self.in_flight > 0 {
            RequestStatus::Requesting
        } else {
            outcome
        };
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }

    /// Text of the "time till maintenance" card.
    pub fn prediction_text(&self) -> String {
        self.prediction
            .map(format_days)
            .unwrap_or_else(|| "Loading...".to_string())
    }
}

pub fn format_days(days: f64) -> String {
    format!("{} days", days)
}

impl Reducible for DashboardState {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        log::trace!("Reducing dashboard action: {:?}", action);
        let mut next = (*self).clone();
        match next.apply(action) {
            Ok(()) => Rc::new(next),
            Err(e) => {
                log::warn!("Ignoring dashboard action: {}", e);
                self
            }
        }
    }
}
