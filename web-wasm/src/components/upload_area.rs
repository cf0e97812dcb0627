//! アップロードエリアコンポーネント

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{File, FileReader, HtmlInputElement};
use xrd_match_common::{FileContent, ACCEPTED_EXTENSIONS};

/// input要素のaccept属性（".raw,.rd,..."）
fn accept_attribute() -> String {
    ACCEPTED_EXTENSIONS
        .iter()
        .map(|ext| format!(".{ext}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// 読み込み失敗時に画面へ出す文言
fn read_error_message(filename: &str) -> String {
    format!("Failed to read {filename} as text. Please choose another XRD data file.")
}

#[component]
pub fn UploadArea<F, E>(
    file: ReadSignal<Option<FileContent>>,
    element_profile: ReadSignal<String>,
    set_element_profile: WriteSignal<String>,
    is_analyzing: ReadSignal<bool>,
    on_file_loaded: F,
    on_error: E,
) -> impl IntoView
where
    F: Fn(FileContent) + 'static + Clone + Send + Sync,
    E: Fn(String) + 'static + Clone + Send + Sync,
{
    let on_change = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        if let Some(selected) = input.files().and_then(|files| files.get(0)) {
            read_file(selected, on_file_loaded.clone(), on_error.clone());
        }
    };

    let label = move || {
        file.get()
            .map(|f| f.filename)
            .unwrap_or_else(|| "Upload XRD Data".to_string())
    };

    view! {
        <div class=move || {
            if is_analyzing.get() { "upload-area disabled" } else { "upload-area" }
        }>
            <label for="xrd-file" class="upload-label">
                <div class="upload-icon">"📈"</div>
                <p>{label}</p>
                <p class="text-muted">
                    {format!("Supported formats: {}", ACCEPTED_EXTENSIONS.join(", "))}
                </p>
            </label>
            <input
                type="file"
                id="xrd-file"
                class="hidden"
                accept=accept_attribute()
                disabled=move || is_analyzing.get()
                on:change=on_change
            />

            <div class="form-group">
                <label for="element-profile">"Element Profile (optional)"</label>
                <input
                    type="text"
                    id="element-profile"
                    placeholder="e.g. Na, Cl"
                    disabled=move || is_analyzing.get()
                    prop:value=move || element_profile.get()
                    on:input=move |ev| {
                        set_element_profile.set(event_target_value(&ev));
                    }
                />
            </div>
        </div>
    }
}

fn read_file<F, E>(file: File, on_file_loaded: F, on_error: E)
where
    F: Fn(FileContent) + 'static,
    E: Fn(String) + 'static + Clone,
{
    let filename = file.name();
    let reader = match FileReader::new() {
        Ok(reader) => reader,
        Err(e) => {
            gloo::console::error!("FileReader is not available", e);
            on_error(read_error_message(&filename));
            return;
        }
    };

    let reader_clone = reader.clone();
    let loaded_name = filename.clone();
    let on_load_error = on_error.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        match reader_clone.result().ok().and_then(|r| r.as_string()) {
            Some(data) => on_file_loaded(FileContent {
                filename: loaded_name.clone(),
                data,
            }),
            None => {
                gloo::console::error!(format!("{loaded_name}: FileReader result is not text"));
                on_load_error(read_error_message(&loaded_name));
            }
        }
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    if let Err(e) = reader.read_as_text(&file) {
        gloo::console::error!("Failed to read the XRD data file", e);
        on_error(read_error_message(&filename));
    }
}
