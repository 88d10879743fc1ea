//! Record Card Component
//!
//! Displays a single record inside the latest/top grids.

use leptos::*;

use crate::state::global::Record;

/// Record card component
#[component]
pub fn RecordCard(record: Record) -> impl IntoView {
    let date_line = format!("{} – {}", record.date.format("%Y-%m-%d"), record.sense_type);

    view! {
        <div class="bg-gray-100 rounded-lg p-6">
            <p class="text-sm text-gray-600">{date_line}</p>
            <p class="font-semibold text-lg mt-2">{record.location}</p>
            <p class="mt-1">{format!("Emotion score: {:.1}", record.emotion_score)}</p>
            <p class="text-gray-700 mt-2">{record.description}</p>
        </div>
    }
}
