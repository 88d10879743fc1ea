//! Upload Form Component
//!
//! Form for uploading a new record. On success it fires the
//! `on_uploaded` callback so the page can refetch the record set.

use chrono::NaiveDate;
use leptos::*;

use crate::api;
use crate::state::global::{GlobalState, NewRecord};

/// Sense categories offered by the select
const SENSE_TYPES: [&str; 5] = ["sight", "sound", "smell", "taste", "touch"];

/// Upload form component
#[component]
pub fn UploadForm(#[prop(into)] on_uploaded: Callback<()>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let today = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();

    let (date, set_date) = create_signal(today);
    let (location, set_location) = create_signal(String::new());
    let (sense_type, set_sense_type) = create_signal("sight".to_string());
    let (keyword, set_keyword) = create_signal(String::new());
    let (emotion_score, set_emotion_score) = create_signal(5.0);
    let (description, set_description) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let parsed_date = match NaiveDate::parse_from_str(&date.get(), "%Y-%m-%d") {
            Ok(d) => d,
            Err(_) => {
                state.show_error("Enter the date as YYYY-MM-DD");
                return;
            }
        };

        if location.get().trim().is_empty() {
            state.show_error("Location is required");
            return;
        }

        let record = NewRecord {
            date: parsed_date,
            location: location.get().trim().to_string(),
            sense_type: sense_type.get(),
            keyword: keyword.get().trim().to_string(),
            emotion_score: emotion_score.get(),
            description: description.get(),
        };

        set_submitting.set(true);

        let state_clone = state.clone();
        spawn_local(async move {
            match api::submit_record(&record).await {
                Ok(created) => {
                    state_clone.show_success(&format!("Uploaded record for {}", created.location));

                    // Keep the date, clear the rest for the next entry
                    set_location.set(String::new());
                    set_keyword.set(String::new());
                    set_description.set(String::new());
                    set_emotion_score.set(5.0);

                    on_uploaded.call(());
                }
                Err(e) => {
                    state_clone.show_error(&e);
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="space-y-4">
            <h2 class="text-2xl font-bold text-gray-900">"Upload your sense data"</h2>

            <form on:submit=on_submit class="space-y-4">
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    // Date
                    <div>
                        <label class="block text-sm text-gray-600 mb-2">"Date"</label>
                        <input
                            type="date"
                            prop:value=move || date.get()
                            on:input=move |ev| set_date.set(event_target_value(&ev))
                            class="w-full bg-gray-50 rounded-lg px-4 py-3
                                   border border-gray-300 focus:border-green-500 focus:outline-none"
                        />
                    </div>

                    // Sense category
                    <div>
                        <label class="block text-sm text-gray-600 mb-2">"Sense"</label>
                        <select
                            on:change=move |ev| set_sense_type.set(event_target_value(&ev))
                            prop:value=move || sense_type.get()
                            class="w-full bg-gray-50 rounded-lg px-4 py-3
                                   border border-gray-300 focus:border-green-500 focus:outline-none"
                        >
                            {SENSE_TYPES
                                .into_iter()
                                .map(|s| view! { <option value=s>{s}</option> })
                                .collect_view()}
                        </select>
                    </div>
                </div>

                // Location
                <div>
                    <label class="block text-sm text-gray-600 mb-2">"Location"</label>
                    <input
                        type="text"
                        placeholder="Where did you sense it?"
                        prop:value=move || location.get()
                        on:input=move |ev| set_location.set(event_target_value(&ev))
                        class="w-full bg-gray-50 rounded-lg px-4 py-3
                               border border-gray-300 focus:border-green-500 focus:outline-none"
                    />
                </div>

                // Keyword
                <div>
                    <label class="block text-sm text-gray-600 mb-2">"Keyword"</label>
                    <input
                        type="text"
                        placeholder="One word that captures it"
                        prop:value=move || keyword.get()
                        on:input=move |ev| set_keyword.set(event_target_value(&ev))
                        class="w-full bg-gray-50 rounded-lg px-4 py-3
                               border border-gray-300 focus:border-green-500 focus:outline-none"
                    />
                </div>

                // Emotion score slider
                <div>
                    <label class="block text-sm text-gray-600 mb-2">
                        "Emotion score: "
                        <span class="text-gray-900 font-medium">
                            {move || format!("{:.1}", emotion_score.get())}
                        </span>
                    </label>
                    <input
                        type="range"
                        min="0"
                        max="10"
                        step="0.5"
                        prop:value=move || emotion_score.get().to_string()
                        on:input=move |ev| {
                            if let Ok(v) = event_target_value(&ev).parse() {
                                set_emotion_score.set(v);
                            }
                        }
                        class="w-full"
                    />
                </div>

                // Description
                <div>
                    <label class="block text-sm text-gray-600 mb-2">"Description"</label>
                    <textarea
                        placeholder="Describe the moment"
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                        class="w-full bg-gray-50 rounded-lg px-4 py-3 h-24
                               border border-gray-300 focus:border-green-500 focus:outline-none"
                    />
                </div>

                // Submit button
                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="w-full bg-green-500 hover:bg-green-600 disabled:bg-gray-400
                           disabled:cursor-not-allowed text-white rounded-lg py-3 font-semibold
                           transition-colors flex items-center justify-center space-x-2"
                >
                    {move || if submitting.get() {
                        view! {
                            <div class="loading-spinner w-5 h-5" />
                            <span>"Uploading..."</span>
                        }.into_view()
                    } else {
                        view! {
                            <span>"Upload"</span>
                        }.into_view()
                    }}
                </button>
            </form>
        </div>
    }
}
