//! Home Page
//!
//! The data market landing page: hero and banner, upload form, the six
//! most recent records, the five highest-scored records, and the
//! aggregate emotion chart.

use leptos::*;

use crate::api;
use crate::components::{CardSkeleton, EmotionChart, RecordCard, UploadForm};
use crate::state::global::{GlobalState, Record};

/// Replace the record set with a fresh fetch.
///
/// A failed fetch is logged and the current set is kept, so the list
/// stays at its previous value (empty on first load).
fn refetch(state: &GlobalState) {
    let state = state.clone();
    spawn_local(async move {
        state.loading.set(true);

        match api::fetch_records().await {
            Ok(records) => {
                state.records.set(records);
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to fetch records: {}", e).into());
            }
        }

        state.loading.set(false);
    });
}

/// Home page component
#[component]
pub fn Home() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Fetch the record set on mount
    {
        let state = state.clone();
        create_effect(move |_| refetch(&state));
    }

    let latest = {
        let state = state.clone();
        create_memo(move |_| state.latest_six())
    };
    let top = {
        let state = state.clone();
        create_memo(move |_| state.top_five())
    };
    let loading = state.loading;

    let state_for_upload = state.clone();

    view! {
        <div>
            // Hero section
            <section class="bg-gray-50 py-16">
                <div class="max-w-screen-xl mx-auto px-8 text-center">
                    <h1 class="text-4xl lg:text-5xl font-bold text-gray-900 mb-4">
                        "The SENSE Data Market"
                    </h1>
                    <p class="text-lg lg:text-xl text-gray-600">
                        "A data commerce platform connecting emotion data with AI"
                    </p>
                </div>
            </section>

            // Banner section
            <section class="bg-white py-8">
                <div class="max-w-screen-xl mx-auto px-8">
                    <img
                        src="/images/banner.png"
                        alt="Academy data banner"
                        class="w-full h-auto rounded-lg"
                    />
                </div>
            </section>

            // Main content
            <main class="max-w-screen-xl mx-auto px-8 py-12 space-y-16">
                // Upload form
                <section class="bg-white shadow-lg rounded-lg p-8">
                    <UploadForm on_uploaded=Callback::new(move |_| refetch(&state_for_upload)) />
                </section>

                // Latest records (6)
                <RecordSection
                    title="Latest records (newest 6)"
                    accent="text-orange-600"
                    records=latest
                    loading=loading
                    skeleton_count=6
                />

                // Highest emotion scores (5)
                <RecordSection
                    title="Top emotion scores (top 5)"
                    accent="text-blue-600"
                    records=top
                    loading=loading
                    skeleton_count=5
                />

                // Emotion chart
                <section>
                    <EmotionChart />
                </section>
            </main>
        </div>
    }
}

/// One grid section of record cards with loading and empty states
#[component]
fn RecordSection(
    title: &'static str,
    /// Tailwind text color class for the section heading
    accent: &'static str,
    #[prop(into)]
    records: Signal<Vec<Record>>,
    #[prop(into)]
    loading: Signal<bool>,
    skeleton_count: usize,
) -> impl IntoView {
    view! {
        <section>
            <h2 class=format!("text-2xl font-bold mb-6 {}", accent)>{title}</h2>

            {move || {
                if loading.get() {
                    view! {
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                            {(0..skeleton_count)
                                .map(|_| view! { <CardSkeleton /> })
                                .collect_view()}
                        </div>
                    }.into_view()
                } else if records.get().is_empty() {
                    view! {
                        <p class="text-center text-gray-500">"No records yet."</p>
                    }.into_view()
                } else {
                    view! {
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                            {records.get()
                                .into_iter()
                                .map(|record| view! { <RecordCard record=record /> })
                                .collect_view()}
                        </div>
                    }.into_view()
                }
            }}
        </section>
    }
}
