//! Dashboard event wiring.
//!
//! The dashboard sends a prediction request in exactly two situations: once
//! when it first mounts and whenever Predict is clicked. Input edits only
//! update the state store.

use futures::future::LocalBoxFuture;
use std::cell::Cell;
use std::rc::Rc;

use crate::api_client::prediction::{run_prediction, PredictionService};
use crate::state::{DashboardAction, FeatureVector};

pub type Dispatch = Rc<dyn Fn(DashboardAction)>;

type Spawner = Box<dyn Fn(LocalBoxFuture<'static, ()>)>;

pub struct PredictionController<S> {
    service: Rc<S>,
    spawner: Spawner,
    mounted: Cell<bool>,
}

impl<S: PredictionService + 'static> PredictionController<S> {
    /// `spawner` runs request tasks; `spawn_local` in the browser.
    pub fn new(service: Rc<S>, spawner: impl Fn(LocalBoxFuture<'static, ()>) + 'static) -> Self {
        Self {
            service,
            spawner: Box::new(spawner),
            mounted: Cell::new(false),
        }
    }

    /// Initial prediction for the starting inputs. Only the first call sends.
    pub fn mount(&self, features: FeatureVector, dispatch: Dispatch) {
        if self.mounted.replace(true) {
            log::trace!("Dashboard already mounted, skipping initial prediction");
            return;
        }
        log::debug!("Dashboard mounted, requesting initial prediction");
        self.predict(features, dispatch);
    }

    pub fn edit(&self, index: usize, raw: String, dispatch: &Dispatch) {
        dispatch(DashboardAction::SetFeature { index, raw });
    }

    /// Send one request built from `features`, the inputs as of the click.
    pub fn predict(&self, features: FeatureVector, dispatch: Dispatch) {
        let service = self.service.clone();
        (self.spawner)(Box::pin(async move {
            run_prediction(&*service, features, move |action| dispatch(action)).await;
        }));
    }
}
