//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"CSV to JSON"</h1>
            <p class="subtitle">
                "Paste or open a CSV file, convert it, edit the JSON and save it. "
                "The first line is used as the header."
            </p>
        </div>
    }
}
