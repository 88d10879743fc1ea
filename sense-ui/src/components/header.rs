//! Header Component
//!
//! Top navigation bar with the hamburger menu, logo, search box, and
//! login link. The dropdown menu is local open/close state and closes on
//! outside click or link click.

use leptos::*;
use leptos_router::*;
use wasm_bindgen::JsCast;

/// Dropdown menu destinations
const MENU_ITEMS: [(&str, &str); 5] = [
    ("/map", "Sense Map"),
    ("/report", "Sense Report"),
    ("/shop", "Sense Shop"),
    ("/data-market", "Data Market"),
    ("/mypage", "My Page"),
];

/// Header component
#[component]
pub fn Header() -> impl IntoView {
    let (open, set_open) = create_signal(false);
    let menu_ref = create_node_ref::<html::Div>();

    // Close the menu when a click lands outside the dropdown
    let handle = window_event_listener(ev::mousedown, move |event| {
        if !open.get_untracked() {
            return;
        }
        if let Some(menu) = menu_ref.get_untracked() {
            let clicked_inside = event
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
                .map(|node| menu.contains(Some(&node)))
                .unwrap_or(false);
            if !clicked_inside {
                set_open.set(false);
            }
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <header class="relative bg-white shadow">
            <div class="max-w-6xl mx-auto px-6 py-4 flex items-center justify-between">
                // Hamburger button
                <button
                    on:click=move |_| set_open.update(|o| *o = !*o)
                    class="p-2 rounded hover:bg-gray-100"
                    aria-label="Open menu"
                >
                    {move || {
                        if open.get() {
                            view! { <CloseIcon /> }.into_view()
                        } else {
                            view! { <MenuIcon /> }.into_view()
                        }
                    }}
                </button>

                // Logo
                <A href="/" class="text-2xl font-bold text-gray-900">
                    "SENSE"
                </A>

                // Search box
                <div class="flex items-center border border-gray-300 rounded overflow-hidden">
                    <input
                        type="text"
                        placeholder="Search keywords, locations"
                        class="px-3 py-1 outline-none"
                    />
                    <button class="bg-green-500 text-white px-4 py-1">
                        "Search"
                    </button>
                </div>

                // Login
                <A href="/login" class="text-gray-700 hover:text-gray-900">
                    "Log in"
                </A>
            </div>

            // Dropdown menu
            {move || {
                open.get().then(|| view! {
                    <div
                        node_ref=menu_ref
                        class="absolute top-full left-0 w-full bg-white shadow-md z-50"
                    >
                        // Link clicks bubble up here and close the menu
                        <nav
                            class="flex flex-col py-4 space-y-2 px-6"
                            on:click=move |_| set_open.set(false)
                        >
                            {MENU_ITEMS
                                .into_iter()
                                .map(|(href, label)| view! {
                                    <A href=href class="block py-2 hover:text-gray-900">
                                        {label}
                                    </A>
                                })
                                .collect_view()}
                        </nav>
                    </div>
                })
            }}
        </header>
    }
}

/// Hamburger icon
#[component]
fn MenuIcon() -> impl IntoView {
    view! {
        <svg class="w-6 h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24">
            <path
                stroke-linecap="round"
                stroke-linejoin="round"
                stroke-width="2"
                d="M4 6h16M4 12h16M4 18h16"
            />
        </svg>
    }
}

/// Close (X) icon
#[component]
fn CloseIcon() -> impl IntoView {
    view! {
        <svg class="w-6 h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24">
            <path
                stroke-linecap="round"
                stroke-linejoin="round"
                stroke-width="2"
                d="M6 18L18 6M6 6l12 12"
            />
        </svg>
    }
}
