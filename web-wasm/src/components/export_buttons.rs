//! 解析・エクスポートボタンコンポーネント

use leptos::prelude::*;
use xrd_match_common::StructureMatch;

#[component]
pub fn ExportButtons<FA, FE>(
    matches: ReadSignal<Option<Vec<StructureMatch>>>,
    is_analyzing: ReadSignal<bool>,
    on_analyze: FA,
    on_export_json: FE,
) -> impl IntoView
where
    FA: Fn(()) + 'static + Clone + Send + Sync,
    FE: Fn(()) + 'static + Clone + Send + Sync,
{
    let has_matches = move || matches.get().is_some_and(|m| !m.is_empty());

    view! {
        <div class="export-buttons">
            <button
                class="btn btn-primary"
                disabled=move || is_analyzing.get()
                on:click={
                    let on_analyze = on_analyze.clone();
                    move |_| on_analyze(())
                }
            >
                {move || if is_analyzing.get() { "Analyzing..." } else { "Analyze" }}
            </button>

            <button
                class="btn btn-secondary"
                disabled=move || !has_matches() || is_analyzing.get()
                on:click={
                    let on_export_json = on_export_json.clone();
                    move |_| on_export_json(())
                }
            >
                "Export JSON"
            </button>
        </div>
    }
}
