//! Static chart datasets shown on the dashboard and their plotly mapping.

use plotly::common::{Fill, Line, LineShape, Marker, Mode};
use plotly::{Bar, Scatter};
use serde_json::{json, Value};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChartKind {
    Line,
    Bar,
    Doughnut,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesStyle {
    /// One color for the whole series, or one per label.
    pub colors: Vec<&'static str>,
    pub border_radius: u32,
    /// Curve smoothing for line charts; zero draws straight segments.
    pub tension: f64,
    pub fill: bool,
}

impl SeriesStyle {
    fn solid(color: &'static str) -> Self {
        Self {
            colors: vec![color],
            border_radius: 0,
            tension: 0.0,
            fill: false,
        }
    }

    fn rounded(mut self, radius: u32) -> Self {
        self.border_radius = radius;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: &'static str,
    pub values: Vec<f64>,
    pub style: SeriesStyle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartDataset {
    /// DOM id of the plot container
    pub id: &'static str,
    pub kind: ChartKind,
    pub labels: Vec<&'static str>,
    pub series: Vec<Series>,
}

impl ChartDataset {
    /// plotly traces, one per series.
    pub fn traces(&self) -> Value {
        let labels: Vec<String> = self.labels.iter().map(|l| l.to_string()).collect();
        let traces = self
            .series
            .iter()
            .map(|series| match self.kind {
                ChartKind::Line => line_trace(&labels, series),
                ChartKind::Bar => bar_trace(&labels, series),
                ChartKind::Doughnut => doughnut_trace(&labels, series),
            })
            .collect();
        Value::Array(traces)
    }

    pub fn layout(&self) -> Value {
        let mut layout = json!({
            "margin": {"t": 10, "r": 10, "l": 40, "b": 30},
            "paper_bgcolor": "rgba(0,0,0,0)",
            "plot_bgcolor": "rgba(0,0,0,0)",
            "showlegend": true,
            "legend": {"orientation": "h", "y": -0.2},
        });
        if self.kind == ChartKind::Bar {
            let radius = self.series.iter().map(|s| s.style.border_radius).max().unwrap_or(0);
            layout["barcornerradius"] = json!(radius);
        }
        layout
    }
}

fn line_trace(labels: &[String], series: &Series) -> Value {
    let shape = if series.style.tension > 0.0 { LineShape::Spline } else { LineShape::Linear };
    let mut line = Line::new().shape(shape);
    if let Some(color) = series.style.colors.first() {
        line = line.color(*color);
    }
    let mut trace = Scatter::new(labels.to_vec(), series.values.clone())
        .name(series.label)
        .mode(Mode::Lines)
        .line(line);
    if series.style.fill {
        trace = trace.fill(Fill::ToZeroY);
    }
    serde_json::to_value(&trace).unwrap_or(Value::Null)
}

fn bar_trace(labels: &[String], series: &Series) -> Value {
    let marker = match series.style.colors.as_slice() {
        [single] => Marker::new().color(*single),
        many => Marker::new().color_array(many.to_vec()),
    };
    let trace = Bar::new(labels.to_vec(), series.values.clone())
        .name(series.label)
        .marker(marker);
    serde_json::to_value(&trace).unwrap_or(Value::Null)
}

// The plotly builders have no pie trace, so the doughnut is written by hand.
fn doughnut_trace(labels: &[String], series: &Series) -> Value {
    json!({
        "type": "pie",
        "name": series.label,
        "labels": labels,
        "values": series.values,
        "hole": 0.5,
        "sort": false,
        "marker": {"colors": series.style.colors},
    })
}

pub fn car_health_status() -> ChartDataset {
    ChartDataset {
        id: "chart-car-health",
        kind: ChartKind::Doughnut,
        labels: vec!["Healthy", "Needs Attention", "Critical"],
        series: vec![Series {
            label: "Car Health Status",
            values: vec![65.0, 25.0, 10.0],
            style: SeriesStyle {
                colors: vec!["#10B981", "#FBBF24", "#EF4444"],
                ..SeriesStyle::solid("#10B981")
            },
        }],
    }
}

pub fn component_metrics() -> ChartDataset {
    ChartDataset {
        id: "chart-component-metrics",
        kind: ChartKind::Bar,
        labels: vec!["Oil Pressure", "Tire Pressure", "Battery Health"],
        series: vec![Series {
            label: "Health Metrics",
            values: vec![70.0, 80.0, 90.0],
            style: SeriesStyle {
                colors: vec!["#3B82F6", "#60A5FA", "#1E40AF"],
                ..SeriesStyle::solid("#3B82F6")
            }
            .rounded(10),
        }],
    }
}

pub fn maintenance_trend() -> ChartDataset {
    ChartDataset {
        id: "chart-maintenance-trend",
        kind: ChartKind::Line,
        labels: vec!["Jan", "Feb", "Mar", "Apr", "May"],
        series: vec![Series {
            label: "Maintenance Prediction",
            values: vec![85.0, 75.0, 60.0, 50.0, 30.0],
            style: SeriesStyle {
                tension: 0.4,
                ..SeriesStyle::solid("#9333EA")
            },
        }],
    }
}

pub fn failure_history() -> ChartDataset {
    ChartDataset {
        id: "chart-failure-history",
        kind: ChartKind::Bar,
        labels: vec!["Jan", "Feb", "Mar", "Apr", "May"],
        series: vec![Series {
            label: "Failure Events",
            values: vec![2.0, 3.0, 1.0, 4.0, 2.0],
            style: SeriesStyle::solid("#EF4444").rounded(10),
        }],
    }
}

fn monthly_sensor(
    id: &'static str,
    label: &'static str,
    values: [f64; 4],
    color: &'static str,
) -> ChartDataset {
    ChartDataset {
        id,
        kind: ChartKind::Bar,
        labels: vec!["Jan", "Feb", "Mar", "Apr"],
        series: vec![Series {
            label,
            values: values.to_vec(),
            style: SeriesStyle::solid(color).rounded(10),
        }],
    }
}

/// Per-sensor history, in the same order as the prediction inputs.
pub fn sensor_history() -> Vec<(&'static str, ChartDataset)> {
    vec![
        (
            "Mileage Since Last Maintenance",
            monthly_sensor(
                "chart-mileage",
                "Mileage Since Last Maintenance (km)",
                [1000.0, 2000.0, 1500.0, 2500.0],
                "#34D399",
            ),
        ),
        (
            "Engine Hours",
            monthly_sensor("chart-engine-hours", "Engine Hours", [50.0, 60.0, 55.0, 65.0], "#60A5FA"),
        ),
        (
            "Average Speed",
            monthly_sensor(
                "chart-average-speed",
                "Average Speed (km/h)",
                [60.0, 65.0, 62.0, 70.0],
                "#FBBF24",
            ),
        ),
        (
            "Oil Quality Sensor",
            monthly_sensor("chart-oil-quality", "Oil Quality Sensor", [90.0, 85.0, 80.0, 75.0], "#F87171"),
        ),
    ]
}
