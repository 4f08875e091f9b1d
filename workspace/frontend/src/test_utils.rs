use common::{PredictionRequest, PredictionResponse};
use futures::channel::oneshot;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::api_client::prediction::PredictionService;
use crate::state::{DashboardAction, DashboardState};

pub type Reply = Result<PredictionResponse, String>;

/// Answers requests in arrival order from replies the test resolves by hand.
#[derive(Default)]
pub struct ScriptedService {
    replies: RefCell<VecDeque<oneshot::Receiver<Reply>>>,
    pub requests: RefCell<Vec<PredictionRequest>>,
}

impl ScriptedService {
    pub fn expect_request(&self) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.replies.borrow_mut().push_back(rx);
        tx
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl PredictionService for ScriptedService {
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResponse, String> {
        self.requests.borrow_mut().push(request.clone());
        let reply = self.replies.borrow_mut().pop_front();
        match reply {
            Some(rx) => rx.await.unwrap_or_else(|_| Err("reply dropped".to_string())),
            None => Err("no reply scripted".to_string()),
        }
    }
}

/// Reducer stand-in that applies actions to a shared state.
pub fn dispatcher(state: &Rc<RefCell<DashboardState>>) -> impl Fn(DashboardAction) {
    let state = state.clone();
    move |action| state.borrow_mut().apply(action).expect("valid action")
}
