//! Prediction client.
//!
//! One invocation goes `Requesting -> Fulfilled | Failed`. Failures never
//! escape: they are logged and turned into a [`DashboardAction`] that leaves
//! the previous prediction in place. Nothing here retries, times out or
//! cancels; overlapping invocations all complete and the last one to resolve
//! wins.

use common::{PredictionRequest, PredictionResponse};
use crate::api_client;
use crate::state::{DashboardAction, FeatureVector};

pub const PREDICT_ENDPOINT: &str = "/predict";

/// Something that can answer a prediction request.
#[allow(async_fn_in_trait)]
pub trait PredictionService {
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResponse, String>;
}

/// The configured HTTP prediction endpoint.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpPredictionService;

impl PredictionService for HttpPredictionService {
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResponse, String> {
        api_client::post::<PredictionResponse, _>(PREDICT_ENDPOINT, request).await
    }
}

/// Send the coerced features and turn the outcome into a state action.
pub async fn request_prediction<S>(service: &S, features: &FeatureVector) -> DashboardAction
where
    S: PredictionService,
{
    let request = features.to_request();
    log::debug!("Requesting prediction for features {:?}", request.features);

    match service.predict(&request).await {
        Ok(response) => {
            log::info!("Prediction received: {} days", response.prediction);
            DashboardAction::PredictionFulfilled(response.prediction)
        }
        Err(err) => {
            log::error!("Prediction request failed: {}", err);
            DashboardAction::PredictionFailed(err)
        }
    }
}

/// Run one full invocation, reporting both transitions through `dispatch`.
///
/// `features` is a snapshot taken by the caller when the request is issued.
pub async fn run_prediction<S, D>(service: &S, features: FeatureVector, dispatch: D)
where
    S: PredictionService,
    D: Fn(DashboardAction),
{
    dispatch(DashboardAction::PredictionRequested);
    let outcome = request_prediction(service, &features).await;
    dispatch(outcome);
}
