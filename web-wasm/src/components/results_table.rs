//! 候補構造の結果表

use leptos::prelude::*;
use xrd_match_common::view::{match_rows, NO_MATCHES_MESSAGE, NO_MATCHES_TITLE, TABLE_HEADERS};
use xrd_match_common::StructureMatch;

#[component]
pub fn ResultsTable(matches: ReadSignal<Option<Vec<StructureMatch>>>) -> impl IntoView {
    let rows = move || match_rows(&matches.get().unwrap_or_default());

    view! {
        <Show
            when=move || !rows().is_empty()
            fallback=|| view! {
                <div class="alert alert-info" role="status">
                    <strong>{NO_MATCHES_TITLE}</strong>
                    <p>{NO_MATCHES_MESSAGE}</p>
                </div>
            }
        >
            <table class="results-table">
                <caption>"Potential crystal structure matches, ordered by the model"</caption>
                <thead>
                    <tr>
                        <th>"Rank"</th>
                        {TABLE_HEADERS.iter().map(|h| view! { <th>{*h}</th> }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        rows()
                            .into_iter()
                            .map(|row| {
                                let cells = row.cells().map(|cell| cell.to_string());
                                view! {
                                    <tr>
                                        <td>{row.rank}</td>
                                        {cells
                                            .into_iter()
                                            .map(|cell| view! { <td>{cell}</td> })
                                            .collect_view()}
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </Show>
    }
}
