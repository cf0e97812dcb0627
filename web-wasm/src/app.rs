//! メインアプリケーションコンポーネント

use gloo::storage::{LocalStorage, Storage};
use leptos::prelude::*;
use leptos::task::spawn_local;
use xrd_match_common::gemini::DEFAULT_GEMINI_MODEL;
use xrd_match_common::{Error, FileContent, StructureMatch};

use crate::api::gemini::suggest_structures;
use crate::components::{
    export_buttons::ExportButtons,
    header::Header,
    results_table::ResultsTable,
    settings_panel::SettingsPanel,
    upload_area::UploadArea,
};
use crate::export::download::download_matches_json;

const API_KEY_STORAGE_KEY: &str = "xrd-match.gemini-api-key";
const MODEL_STORAGE_KEY: &str = "xrd-match.gemini-model";

/// 利用者に見せる汎用エラー文（詳細はコンソールへ）
const ANALYZE_ERROR_MESSAGE: &str = "An error occurred while analyzing the XRD data.";
const MISSING_API_KEY_MESSAGE: &str = "Please enter a Gemini API key.";

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let (api_key, set_api_key) =
        signal(LocalStorage::get::<String>(API_KEY_STORAGE_KEY).unwrap_or_default());
    let (model, set_model) = signal(
        LocalStorage::get::<String>(MODEL_STORAGE_KEY)
            .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
    );
    let (file, set_file) = signal(None::<FileContent>);
    let (element_profile, set_element_profile) = signal(String::new());
    let (matches, set_matches) = signal(None::<Vec<StructureMatch>>);
    let (error, set_error) = signal(None::<String>);
    let (is_analyzing, set_is_analyzing) = signal(false);

    // 設定はブラウザに保存
    Effect::new(move |_| {
        let key = api_key.get();
        let result = if key.is_empty() {
            LocalStorage::delete(API_KEY_STORAGE_KEY);
            Ok(())
        } else {
            LocalStorage::set(API_KEY_STORAGE_KEY, key)
        };
        if let Err(e) = result {
            gloo::console::warn!(format!("API key could not be stored: {e}"));
        }
    });

    Effect::new(move |_| {
        if let Err(e) = LocalStorage::set(MODEL_STORAGE_KEY, model.get()) {
            gloo::console::warn!(format!("Model could not be stored: {e}"));
        }
    });

    let on_file_loaded = move |content: FileContent| {
        set_file.set(Some(content));
        set_error.set(None);
    };

    let on_file_error = move |message: String| {
        set_file.set(None);
        set_error.set(Some(message));
    };

    // 解析開始ハンドラ
    let on_analyze = move |_: ()| {
        if is_analyzing.get_untracked() {
            return;
        }

        let current_file = file.get_untracked();
        if current_file.is_none() {
            set_error.set(Some(Error::NoFileSelected.to_string()));
            return;
        }

        let key = api_key.get_untracked();
        if key.trim().is_empty() {
            set_error.set(Some(MISSING_API_KEY_MESSAGE.to_string()));
            return;
        }

        let model_name = model.get_untracked();
        let profile = element_profile.get_untracked();

        set_error.set(None);
        set_matches.set(None);
        set_is_analyzing.set(true);

        spawn_local(async move {
            match suggest_structures(key.trim(), &model_name, current_file, &profile).await {
                Ok(result) => set_matches.set(Some(result)),
                Err(e) => {
                    gloo::console::error!(format!("XRD analysis failed: {e}"));
                    set_error.set(Some(ANALYZE_ERROR_MESSAGE.to_string()));
                }
            }
            set_is_analyzing.set(false);
        });
    };

    // JSON出力ハンドラ
    let on_export_json = move |_: ()| {
        let Some(current) = matches.get_untracked() else {
            return;
        };
        if current.is_empty() {
            return;
        }
        if let Err(e) = download_matches_json(&current) {
            gloo::console::error!(format!("JSON export failed: {e}"));
            set_error.set(Some(e));
        }
    };

    view! {
        <div class="container">
            <Header />

            <SettingsPanel
                api_key=api_key
                set_api_key=set_api_key
                model=model
                set_model=set_model
            />

            <UploadArea
                file=file
                element_profile=element_profile
                set_element_profile=set_element_profile
                is_analyzing=is_analyzing
                on_file_loaded=on_file_loaded
                on_error=on_file_error
            />

            <Show when=move || error.get().is_some()>
                <div class="alert alert-error" role="alert">
                    {move || error.get().unwrap_or_default()}
                </div>
            </Show>

            <ExportButtons
                matches=matches
                is_analyzing=is_analyzing
                on_analyze=on_analyze
                on_export_json=on_export_json
            />

            <Show when=move || matches.get().is_some()>
                <ResultsTable matches=matches />
            </Show>
        </div>
    }
}
