//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"XRD Data Analysis"</h1>
            <p class="text-muted">
                "Upload an XRD data file to get AI-powered crystal structure suggestions."
            </p>
        </header>
    }
}
