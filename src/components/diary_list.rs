//! Diary List Component
//!
//! One row per stored entry, newest first; clicking a row opens the overlay.

use leptos::prelude::*;
use rolling_logger::RollingBuffer;

use crate::context::AppContext;
use crate::listing::{EntryRow, Listing, EMPTY_MESSAGE};

#[component]
pub fn DiaryList() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let logs = use_context::<RollingBuffer>();

    let rows = move || match ctx.listing() {
        Listing::Rows(rows) => rows,
        Listing::Empty => Vec::new(),
    };
    let is_empty = move || ctx.load_error().is_none() && ctx.listing() == Listing::Empty;

    view! {
        <section id="diaryList" class="diary-list">
            <h2>"일기 목록"</h2>
            <div id="diaryListContainer">
                {move || ctx.load_error().map(|err| {
                    // Last few log lines, oldest first
                    let recent = logs
                        .as_ref()
                        .map(|logs| logs.tail(ctx.config.error_log_lines).join("\n"))
                        .unwrap_or_default();
                    view! {
                        <div class="error-message">{format!("일기를 불러오지 못했습니다: {}", err)}</div>
                        {(!recent.is_empty()).then(move || view! {
                            <pre class="recent-log">{recent}</pre>
                        })}
                    }
                })}
                <Show when=is_empty>
                    <div class="empty-message">{EMPTY_MESSAGE}</div>
                </Show>
                <For
                    each=rows
                    key=|row| row.entry.id.clone()
                    children=move |row: EntryRow| {
                        let EntryRow { entry, date_label, preview } = row;
                        let id = entry.id.clone();
                        let title = entry.title.clone();
                        view! {
                            <div
                                class="diary-item"
                                data-id=id
                                on:click=move |_| ctx.open_entry(entry.clone())
                            >
                                <div class="diary-item-title">{title}</div>
                                <div class="diary-item-date">{date_label}</div>
                                <div class="diary-item-preview">{preview}</div>
                            </div>
                        }
                    }
                />
            </div>
        </section>
    }
}
