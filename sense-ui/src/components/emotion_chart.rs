//! Emotion Chart Component
//!
//! Aggregate emotion chart using HTML5 Canvas: one bar per sense
//! category showing the average emotion score across the full record
//! array.

use leptos::*;
use std::collections::BTreeMap;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::global::{GlobalState, Record};

/// Bar colors per sense category slot
const BAR_COLORS: [&str; 6] = [
    "#FF9800", // Orange
    "#4CAF50", // Green
    "#2196F3", // Blue
    "#9C27B0", // Purple
    "#F44336", // Red
    "#00BCD4", // Cyan
];

/// Aggregate emotion chart component
#[component]
pub fn EmotionChart() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw whenever the record set changes
    create_effect(move |_| {
        let records = state.records.get();

        if let Some(canvas) = canvas_ref.get() {
            draw_chart(&canvas, &records);
        }
    });

    view! {
        <div class="relative">
            <h2 class="text-2xl font-bold text-gray-900 mb-6">"Emotion by sense"</h2>
            <canvas
                node_ref=canvas_ref
                width="800"
                height="400"
                class="w-full h-64 md:h-96 rounded-lg"
            />

            // Legend
            <div class="flex justify-center flex-wrap gap-4 mt-4">
                {move || {
                    average_scores(&state.records.get())
                        .into_iter()
                        .enumerate()
                        .map(|(idx, bar)| {
                            let color = BAR_COLORS[idx % BAR_COLORS.len()];
                            view! {
                                <div class="flex items-center space-x-2">
                                    <div
                                        class="w-3 h-3 rounded-full"
                                        style=format!("background-color: {}", color)
                                    />
                                    <span class="text-sm text-gray-600 capitalize">
                                        {format!("{} ({})", bar.sense_type, bar.count)}
                                    </span>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

/// One aggregated bar of the chart
#[derive(Debug, Clone, PartialEq)]
pub struct SenseAverage {
    pub sense_type: String,
    pub average: f64,
    pub count: usize,
}

/// Average emotion score per sense category, in stable category order
pub fn average_scores(records: &[Record]) -> Vec<SenseAverage> {
    let mut sums: BTreeMap<&str, (f64, usize)> = BTreeMap::new();

    for record in records {
        let entry = sums.entry(record.sense_type.as_str()).or_insert((0.0, 0));
        entry.0 += record.emotion_score;
        entry.1 += 1;
    }

    sums.into_iter()
        .map(|(sense_type, (sum, count))| SenseAverage {
            sense_type: sense_type.to_string(),
            average: sum / count as f64,
            count,
        })
        .collect()
}

/// Draw the bar chart on canvas
fn draw_chart(canvas: &HtmlCanvasElement, records: &[Record]) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 60.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style(&"#f9fafb".into()); // gray-50
    ctx.fill_rect(0.0, 0.0, width, height);

    let bars = average_scores(records);

    if bars.is_empty() {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No records to chart", width / 2.0 - 70.0, height / 2.0);
        return;
    }

    // Y axis spans 0 to the highest average, padded
    let max_avg = bars.iter().map(|b| b.average).fold(0.0_f64, f64::max);
    let y_max = if max_avg > 0.0 { max_avg * 1.1 } else { 1.0 };

    // Draw grid lines and y-axis labels
    ctx.set_stroke_style(&"#e5e7eb".into()); // gray-200
    ctx.set_line_width(1.0);

    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = y_max - (i as f64 / 5.0) * y_max;
        ctx.set_fill_style(&"#9ca3af".into()); // gray-400
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format!("{:.1}", value), 5.0, y + 4.0);
    }

    // Draw the bars with category labels underneath
    let slot_width = chart_width / bars.len() as f64;
    let bar_width = slot_width * 0.6;

    for (idx, bar) in bars.iter().enumerate() {
        let color = BAR_COLORS[idx % BAR_COLORS.len()];

        let bar_height = (bar.average / y_max) * chart_height;
        let x = margin_left + idx as f64 * slot_width + (slot_width - bar_width) / 2.0;
        let y = margin_top + chart_height - bar_height;

        ctx.set_fill_style(&color.into());
        ctx.fill_rect(x, y, bar_width, bar_height);

        // Average above the bar
        ctx.set_fill_style(&"#374151".into()); // gray-700
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(
            &format!("{:.1}", bar.average),
            x + bar_width / 2.0 - 10.0,
            (y - 6.0).max(12.0),
        );

        // Category label
        ctx.set_fill_style(&"#9ca3af".into());
        let _ = ctx.fill_text(
            &bar.sense_type,
            x + bar_width / 2.0 - 15.0,
            height - 10.0,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(sense_type: &str, score: f64) -> Record {
        Record {
            id: 0,
            date: "2025-06-01".parse().unwrap(),
            location: String::new(),
            sense_type: sense_type.to_string(),
            keyword: String::new(),
            emotion_score: score,
            description: String::new(),
        }
    }

    #[test]
    fn test_averages_group_by_sense_type() {
        let records = vec![
            record("smell", 8.0),
            record("sound", 4.0),
            record("smell", 6.0),
        ];

        let bars = average_scores(&records);
        assert_eq!(bars.len(), 2);

        // BTreeMap keeps category order stable
        assert_eq!(bars[0].sense_type, "smell");
        assert_eq!(bars[0].average, 7.0);
        assert_eq!(bars[0].count, 2);
        assert_eq!(bars[1].sense_type, "sound");
        assert_eq!(bars[1].average, 4.0);
    }

    #[test]
    fn test_averages_empty_input() {
        assert!(average_scores(&[]).is_empty());
    }
}
