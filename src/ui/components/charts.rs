// src/ui/components/charts.rs - Dependency-free bar, share and trend charts

use dioxus::prelude::*;

/// Scales `values` to percentages of the largest one. All-zero or empty
/// input scales to zeros.
pub fn scale_to_percent(values: &[f64]) -> Vec<f64> {
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    if max <= 0.0 {
        return vec![0.0; values.len()];
    }
    values.iter().map(|v| (v.max(0.0) / max) * 100.0).collect()
}

/// SVG `points` attribute for a line through `values` in a `width`x`height`
/// box, y inverted so larger values sit higher.
pub fn polyline_points(values: &[f64], width: f64, height: f64) -> String {
    if values.is_empty() {
        return String::new();
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = if (max - min).abs() < f64::EPSILON { 1.0 } else { max - min };
    let step = if values.len() > 1 {
        width / (values.len() - 1) as f64
    } else {
        0.0
    };

    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = i as f64 * step;
            let y = height - (v - min) / span * height;
            format!("{:.1},{:.1}", x, y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Paired bars per label, e.g. revenue against ad spend
#[component]
pub fn BarChart(
    labels: Vec<String>,
    primary: Vec<f64>,
    secondary: Vec<f64>,
    #[props(default = "Revenue".to_string())] primary_label: String,
    #[props(default = "Spend".to_string())] secondary_label: String,
) -> Element {
    let mut all = primary.clone();
    all.extend_from_slice(&secondary);
    let scaled = scale_to_percent(&all);
    let (primary_pct, secondary_pct) = scaled.split_at(primary.len());

    let bars: Vec<(String, f64, f64)> = labels
        .into_iter()
        .enumerate()
        .map(|(i, label)| {
            (
                label,
                primary_pct.get(i).copied().unwrap_or(0.0),
                secondary_pct.get(i).copied().unwrap_or(0.0),
            )
        })
        .collect();

    rsx! {
        div {
            div {
                class: "flex items-end h-48 gap-3",
                for (label, p, s) in bars {
                    div {
                        key: "{label}",
                        class: "flex-1 flex flex-col items-center",
                        div {
                            class: "flex items-end gap-1 h-40 w-full justify-center",
                            div { class: "w-3 bg-indigo-500 rounded-t", style: "height: {p}%" }
                            div { class: "w-3 bg-pink-400 rounded-t", style: "height: {s}%" }
                        }
                        span { class: "mt-2 text-xs text-gray-500", "{label}" }
                    }
                }
            }
            div {
                class: "mt-4 flex gap-4 text-xs text-gray-600",
                span { span { class: "inline-block w-3 h-3 bg-indigo-500 rounded mr-1" } "{primary_label}" }
                span { span { class: "inline-block w-3 h-3 bg-pink-400 rounded mr-1" } "{secondary_label}" }
            }
        }
    }
}

/// Labelled horizontal bars with a value suffix, e.g. traffic share
#[component]
pub fn HorizontalBars(
    rows: Vec<(String, f64, String)>,
    #[props(default = "%".to_string())] suffix: String,
) -> Element {
    let values: Vec<f64> = rows.iter().map(|(_, v, _)| *v).collect();
    let widths = scale_to_percent(&values);

    rsx! {
        div {
            class: "space-y-3",
            for ((name, value, color), width) in rows.into_iter().zip(widths) {
                div {
                    key: "{name}",
                    div {
                        class: "flex justify-between text-sm mb-1",
                        span { class: "text-gray-700", "{name}" }
                        span { class: "text-gray-500", "{value}{suffix}" }
                    }
                    div {
                        class: "w-full bg-gray-100 rounded-full h-2",
                        div {
                            class: "h-2 rounded-full",
                            style: "width: {width}%; background-color: {color}"
                        }
                    }
                }
            }
        }
    }
}

/// Single-series sparkline
#[component]
pub fn TrendLine(
    values: Vec<f64>,
    #[props(default = "#6366f1".to_string())] color: String,
) -> Element {
    let points = polyline_points(&values, 300.0, 80.0);

    rsx! {
        svg {
            class: "w-full h-20",
            view_box: "0 0 300 80",
            preserve_aspect_ratio: "none",
            polyline {
                fill: "none",
                stroke: "{color}",
                stroke_width: "2",
                points: "{points}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_to_percent() {
        assert_eq!(scale_to_percent(&[50.0, 100.0, 0.0]), vec![50.0, 100.0, 0.0]);
        assert_eq!(scale_to_percent(&[0.0, 0.0]), vec![0.0, 0.0]);
        assert!(scale_to_percent(&[]).is_empty());
    }

    #[test]
    fn test_polyline_points() {
        assert_eq!(polyline_points(&[1.0, 3.0, 2.0], 100.0, 10.0), "0.0,10.0 50.0,0.0 100.0,5.0");
        // flat series stays on the baseline
        assert_eq!(polyline_points(&[2.0, 2.0], 10.0, 10.0), "0.0,10.0 10.0,10.0");
        assert_eq!(polyline_points(&[], 10.0, 10.0), "");
    }

    #[test]
    fn test_chart_components() {
        let _chart = rsx! {
            BarChart {
                labels: vec!["Mon".to_string(), "Tue".to_string()],
                primary: vec![4200.0, 3800.0],
                secondary: vec![1200.0, 1100.0]
            }
        };
        let _trend = rsx! {
            TrendLine { values: vec![3.2, 3.5, 3.9] }
        };
    }
}
