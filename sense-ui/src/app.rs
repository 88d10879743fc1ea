//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{Header, Toast};
use crate::pages::Home;
use crate::state::global::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    view! {
        <Router>
            <div class="min-h-screen bg-white text-gray-800 font-sans flex flex-col">
                // Navigation header
                <Header />

                // Main content area
                <main class="flex-1">
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Footer
                <Footer />

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// Footer component
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-white border-t py-8 mt-12">
            <div class="text-center text-sm text-gray-500">
                "© 2025 SENSE. All rights reserved. | Privacy Policy | Terms of Service"
            </div>
        </footer>
    }
}

/// 404 page for header destinations that are not built yet
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-500 mb-6">"This part of SENSE is not open yet."</p>
            <A
                href="/"
                class="px-6 py-3 bg-green-500 hover:bg-green-600 text-white rounded-lg font-medium transition-colors"
            >
                "Back to the Data Market"
            </A>
        </div>
    }
}
