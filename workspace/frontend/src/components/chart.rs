use serde_json::{json, Value};
use wasm_bindgen::prelude::*;
use web_sys::Element;
use yew::prelude::*;

use crate::chart_data::ChartDataset;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub dataset: ChartDataset,
}

/// Hands one static dataset to plotly once its container is mounted.
#[function_component(ChartWidget)]
pub fn chart_widget(props: &Props) -> Html {
    let chart_ref = use_node_ref();

    use_effect_with(
        (chart_ref.clone(), props.dataset.clone()),
        move |(chart_ref, dataset)| {
            if chart_ref.cast::<Element>().is_some() {
                render_plot(dataset);
            }
            || ()
        },
    );

    html! {
        <div ref={chart_ref} id={props.dataset.id} class="chart-container" style="height: 260px;"></div>
    }
}

fn render_plot(dataset: &ChartDataset) {
    log::trace!("Rendering chart {}", dataset.id);
    let config = json!({"responsive": true, "displayModeBar": false});

    match (to_js(&dataset.traces()), to_js(&dataset.layout()), to_js(&config)) {
        (Ok(data), Ok(layout), Ok(config)) => newPlot(dataset.id, data, layout, config),
        _ => log::error!("Failed to convert chart {} for plotly", dataset.id),
    }
}

fn to_js(value: &Value) -> Result<JsValue, JsValue> {
    js_sys::JSON::parse(&value.to_string())
}
