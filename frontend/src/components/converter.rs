//! CSV/JSON converter panel.
//!
//! Binds two textareas to a [`ConverterState`] and turns button clicks and
//! file selection into calls on it. All conversion and validation happens
//! in the `csvjson` core; this component only renders and forwards.

use csvjson::{ConverterState, FileHost, HostError, LoadOutcome, SaveOutcome};
use leptos::*;
use web_sys::{Event, HtmlInputElement};

use crate::services::{notify, BrowserHost};
use crate::CSV_ACCEPT;

#[component]
pub fn ConverterPanel() -> impl IntoView {
    let state = create_rw_signal(ConverterState::new());
    let file_input: NodeRef<html::Input> = create_node_ref();

    // File picked: read it, then load it in one synchronous update
    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        spawn_local(async move {
            let host = BrowserHost::with_file(file);
            match host.read_file().await {
                Ok(loaded) => {
                    let mut outcome = LoadOutcome::Cancelled;
                    state.update(|s| outcome = s.load_csv_file(loaded));
                    log::info!("📄 Load: {:?}", outcome);
                }
                Err(HostError::Cancelled) => {}
                Err(e) => notify(&e.to_string()),
            }
        });
    };

    let on_open = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_convert = move |_| {
        state.update(|s| match s.convert() {
            Ok(info) => log::info!("✅ Converted {} rows", info.row_count),
            Err(e) => log::warn!("❌ {}", e),
        });
    };

    let on_save = move |_| {
        let snapshot = state.get_untracked();
        spawn_local(async move {
            match snapshot.save_json(&BrowserHost::new()).await {
                Ok(SaveOutcome::Saved) => log::info!("💾 JSON saved"),
                Ok(SaveOutcome::Cancelled) => {}
                Err(e) => notify(&e.to_string()),
            }
        });
    };

    let on_clear = move |_| {
        state.update(|s| s.clear());
        if let Some(input) = file_input.get() {
            input.set_value("");
        }
    };

    view! {
        <div class="converter">
            <div class="buffers">
                <textarea
                    id="csv-area"
                    placeholder="Paste CSV here or open a file"
                    prop:value=move || state.with(|s| s.csv_text.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.csv_text = value);
                    }
                />
                <textarea
                    id="json-area"
                    class=move || if state.with(|s| s.json_error) { "error" } else { "" }
                    prop:value=move || state.with(|s| s.json_text.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.json_text = value);
                    }
                />
            </div>

            <div class="actions">
                <button id="openFile-btn" on:click=on_open>"Open CSV"</button>
                <button id="convert-btn" on:click=on_convert>"Convert"</button>
                <button id="saveFile-btn" on:click=on_save>"Save JSON"</button>
                <button id="clear-btn" on:click=on_clear>"Clear"</button>
                <span class="file-name">
                    {move || state.with(|s| s.selected_file_name.clone().unwrap_or_default())}
                </span>
            </div>

            <input
                type="file"
                id="file-selector"
                accept=CSV_ACCEPT
                style="display:none"
                node_ref=file_input
                on:change=on_file_change
            />
        </div>
    }
}
