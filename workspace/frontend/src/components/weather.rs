use web_sys::HtmlSelectElement;
use yew::prelude::*;

use super::card::Card;

/// Display mapping for the weather label. Purely cosmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherCondition {
    Sunny,
    Cloudy,
    Rainy,
    Snowy,
    Other,
}

impl WeatherCondition {
    pub const CHOICES: [WeatherCondition; 4] = [Self::Sunny, Self::Cloudy, Self::Rainy, Self::Snowy];

    pub fn from_label(label: &str) -> Self {
        match label {
            "Sunny" => Self::Sunny,
            "Cloudy" => Self::Cloudy,
            "Rainy" => Self::Rainy,
            "Snowy" => Self::Snowy,
            _ => Self::Other,
        }
    }

    pub fn label(self) -> Option<&'static str> {
        match self {
            Self::Sunny => Some("Sunny"),
            Self::Cloudy => Some("Cloudy"),
            Self::Rainy => Some("Rainy"),
            Self::Snowy => Some("Snowy"),
            Self::Other => None,
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            Self::Sunny => "#FFD700",
            Self::Cloudy => "#B3B3B3",
            Self::Rainy => "#4B8FB3",
            Self::Snowy => "#D6E9F1",
            Self::Other => "#6B7280",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Sunny => "☀️",
            Self::Cloudy => "☁️",
            Self::Rainy => "🌧️",
            Self::Snowy => "❄️",
            Self::Other => "🌤️",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub weather: AttrValue,
    pub on_change: Callback<String>,
}

#[function_component(WeatherCard)]
pub fn weather_card(props: &Props) -> Html {
    let condition = WeatherCondition::from_label(&props.weather);
    let style = format!(
        "background-color: {}; color: white; text-align: center;",
        condition.background()
    );

    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            log::debug!("Weather changed to {}", select.value());
            on_change.emit(select.value());
        })
    };

    html! {
        <Card title="Weather" style={Some(AttrValue::from(style))}>
            <p class="text-3xl font-bold">{ &props.weather }</p>
            <p class="text-5xl">{ condition.icon() }</p>
            <select class="select select-sm select-bordered text-gray-800 mt-2" {onchange}>
                { for WeatherCondition::CHOICES.iter().filter_map(|choice| choice.label()).map(|label| html! {
                    <option value={label} selected={label == props.weather.as_str()}>{ label }</option>
                }) }
            </select>
        </Card>
    }
}
