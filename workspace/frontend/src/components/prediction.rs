use common::FEATURE_LABELS;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::card::Card;
use crate::state::{format_days, FeatureVector, RequestStatus};

#[derive(Properties, PartialEq)]
pub struct SummaryProps {
    pub text: AttrValue,
}

#[function_component(PredictionSummary)]
pub fn prediction_summary(props: &SummaryProps) -> Html {
    html! {
        <Card title="Estimated Time Till Maintenance">
            <p class="text-4xl font-bold text-error">{ &props.text }</p>
        </Card>
    }
}

#[derive(Properties, PartialEq)]
pub struct FormProps {
    pub features: FeatureVector,
    pub prediction: Option<f64>,
    pub status: RequestStatus,
    /// Fired on every keystroke with `(index, raw text)`
    pub on_edit: Callback<(usize, String)>,
    pub on_predict: Callback<()>,
}

/// The four model inputs plus the Predict button.
#[function_component(PredictionForm)]
pub fn prediction_form(props: &FormProps) -> Html {
    let inputs = props.features.values().iter().zip(FEATURE_LABELS).enumerate().map(|(index, (value, label))| {
        let on_edit = props.on_edit.clone();
        let oninput = Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_edit.emit((index, input.value()));
        });

        html! {
            <div class="form-control mb-3">
                <label class="label font-bold text-gray-700">{ label }</label>
                <input
                    type="number"
                    class="input input-bordered w-full"
                    placeholder={label}
                    value={value.to_string()}
                    {oninput}
                />
            </div>
        }
    });

    let onclick = {
        let on_predict = props.on_predict.clone();
        Callback::from(move |_: MouseEvent| {
            log::debug!("Predict button clicked");
            on_predict.emit(());
        })
    };

    html! {
        <Card title="Custom Prediction Input">
            { for inputs }
            <button class="btn btn-primary mt-2" {onclick}>
                if props.status == RequestStatus::Requesting {
                    <span class="loading loading-spinner loading-sm"></span>
                }
                {"Predict"}
            </button>
            if let Some(days) = props.prediction {
                <p class="text-2xl font-bold mt-4">{ format!("Prediction: {}", format_days(days)) }</p>
            }
            if let RequestStatus::Failed(error) = &props.status {
                <p class="text-sm text-error mt-2">{ error }</p>
            }
        </Card>
    }
}
