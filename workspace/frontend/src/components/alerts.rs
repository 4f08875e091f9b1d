use yew::prelude::*;

use super::card::Card;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Critical,
}

impl Severity {
    fn background(self) -> &'static str {
        match self {
            Severity::Warning => "#FBBF24",
            Severity::Critical => "#F87171",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VehicleAlert {
    pub severity: Severity,
    pub message: &'static str,
}

pub fn current_alerts() -> Vec<VehicleAlert> {
    vec![
        VehicleAlert { severity: Severity::Warning, message: "Low Tire Pressure" },
        VehicleAlert { severity: Severity::Critical, message: "Battery Voltage Low" },
        VehicleAlert { severity: Severity::Warning, message: "Oil Change Due" },
    ]
}

/// Static alert list. Acknowledging only hides the alerts in this view.
#[function_component(AlertsCard)]
pub fn alerts_card() -> Html {
    let acknowledged = use_state(|| false);

    let on_acknowledge = {
        let acknowledged = acknowledged.clone();
        Callback::from(move |_| {
            log::debug!("Alerts acknowledged");
            acknowledged.set(true);
        })
    };

    let alerts = if *acknowledged { Vec::new() } else { current_alerts() };

    html! {
        <Card title="Current Alerts">
            if alerts.is_empty() {
                <p class="text-sm text-gray-500">{"No active alerts."}</p>
            }
            { for alerts.iter().map(|alert| html! {
                <div
                    class="rounded-lg px-4 py-2 mb-2 font-bold text-gray-800 shadow"
                    style={format!("background-color: {};", alert.severity.background())}
                >
                    { alert.message }
                </div>
            }) }
            <button class="btn btn-primary btn-sm mt-2" onclick={on_acknowledge} disabled={*acknowledged}>
                {"Acknowledge All"}
            </button>
        </Card>
    }
}
