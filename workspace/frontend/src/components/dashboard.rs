use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::alerts::AlertsCard;
use super::card::Card;
use super::chart::ChartWidget;
use super::prediction::{PredictionForm, PredictionSummary};
use super::toast::ToastContext;
use super::weather::WeatherCard;
use crate::api_client::prediction::HttpPredictionService;
use crate::controller::{Dispatch, PredictionController};
use crate::chart_data;
use crate::state::{DashboardAction, DashboardState};

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let state = use_reducer(DashboardState::default);
    let toast_ctx = use_context::<ToastContext>();
    let controller = use_memo((), |_| {
        PredictionController::new(Rc::new(HttpPredictionService), |task| spawn_local(task))
    });

    let dispatch: Dispatch = {
        let dispatcher = state.dispatcher();
        Rc::new(move |action: DashboardAction| {
            if let Some(toast_ctx) = &toast_ctx {
                toast_ctx.notify_outcome(&action);
            }
            dispatcher.dispatch(action);
        })
    };

    // Snapshot the inputs now; edits made while the request is in flight
    // belong to the next one.
    let predict = {
        let controller = controller.clone();
        let features = state.features.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |_: ()| controller.predict(features.clone(), dispatch.clone()))
    };

    {
        let controller = controller.clone();
        let features = state.features.clone();
        let dispatch = dispatch.clone();
        use_effect_with((), move |_| {
            controller.mount(features, dispatch);
            || ()
        });
    }

    let on_edit = {
        let controller = controller.clone();
        Callback::from(move |(index, raw): (usize, String)| controller.edit(index, raw, &dispatch))
    };

    let on_weather = {
        let dispatcher = state.dispatcher();
        Callback::from(move |label: String| dispatcher.dispatch(DashboardAction::SetWeather(label)))
    };

    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-4 gap-6">
            <Card title="Overall Car Health">
                <ChartWidget dataset={chart_data::car_health_status()} />
            </Card>
            <Card title="Component Metrics">
                <ChartWidget dataset={chart_data::component_metrics()} />
            </Card>
            <Card title="Maintenance Prediction">
                <ChartWidget dataset={chart_data::maintenance_trend()} />
            </Card>
            <PredictionSummary text={state.prediction_text()} />
            <AlertsCard />
            <WeatherCard weather={state.weather.clone()} on_change={on_weather} />
            <Card title="Failure History">
                <ChartWidget dataset={chart_data::failure_history()} />
            </Card>
            <PredictionForm
                features={state.features.clone()}
                prediction={state.prediction}
                status={state.status.clone()}
                {on_edit}
                on_predict={predict}
            />
            { for chart_data::sensor_history().into_iter().map(|(title, dataset)| html! {
                <Card {title}>
                    <ChartWidget {dataset} />
                </Card>
            }) }
        </div>
    }
}
