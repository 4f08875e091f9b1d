use yew::prelude::*;

mod components;
pub mod api_client;
pub mod chart_data;
pub mod controller;
pub mod settings;
pub mod state;

#[cfg(test)]
mod test_utils;

use components::toast::ToastProvider;
use components::{Dashboard, Layout};

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ToastProvider>
            <Layout title="Predictive Maintenance Dashboard">
                <Dashboard />
            </Layout>
        </ToastProvider>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Car Health Dashboard Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("Prediction endpoint: {}", settings.api_url(api_client::prediction::PREDICT_ENDPOINT));
    log::debug!("Debug mode: {}", settings.debug_mode);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
