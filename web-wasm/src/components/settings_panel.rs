//! 設定パネルコンポーネント

use leptos::prelude::*;

#[component]
pub fn SettingsPanel(
    api_key: ReadSignal<String>,
    set_api_key: WriteSignal<String>,
    model: ReadSignal<String>,
    set_model: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div class="settings-panel">
            <div class="settings-grid">
                <div class="form-group">
                    <label for="api-key">"Gemini API Key"</label>
                    <input
                        type="password"
                        id="api-key"
                        placeholder="Enter API key..."
                        prop:value=move || api_key.get()
                        on:input=move |ev| {
                            set_api_key.set(event_target_value(&ev));
                        }
                    />
                    <a
                        href="https://aistudio.google.com/app/apikey"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="api-key-link"
                    >
                        "Get an API key →"
                    </a>
                </div>

                <div class="form-group">
                    <label for="model">"Model"</label>
                    <input
                        type="text"
                        id="model"
                        prop:value=move || model.get()
                        on:input=move |ev| {
                            set_model.set(event_target_value(&ev));
                        }
                    />
                </div>
            </div>
        </div>
    }
}
