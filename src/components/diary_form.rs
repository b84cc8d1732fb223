//! Diary Form Component
//!
//! Title, date and content inputs; submission creates an entry.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::dates;
use crate::dom;
use crate::models::NewEntry;

#[component]
pub fn DiaryForm() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let (title, set_title) = signal(String::new());
    let (date, set_date) = signal(dates::today_iso());
    let (content, set_content) = signal(String::new());

    let save_entry = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let mut form = NewEntry {
            title: title.get_untracked(),
            date: date.get_untracked(),
            content: content.get_untracked(),
        };
        let notice = ctx.submit(&mut form);

        // Cleared on success, unchanged otherwise
        set_title.set(form.title);
        set_date.set(form.date);
        set_content.set(form.content);

        dom::alert(&notice.message());
    };

    view! {
        <section id="diaryForm" class="diary-form">
            <h2>"일기 쓰기"</h2>
            <form id="diaryFormElement" on:submit=save_entry>
                <div class="form-group">
                    <label for="title">"제목"</label>
                    <input
                        type="text"
                        id="title"
                        placeholder="오늘의 제목"
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="date">"날짜"</label>
                    <input
                        type="date"
                        id="date"
                        prop:value=move || date.get()
                        on:input=move |ev| set_date.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="content">"내용"</label>
                    <textarea
                        id="content"
                        rows="8"
                        placeholder="오늘 있었던 일을 적어보세요"
                        prop:value=move || content.get()
                        on:input=move |ev| set_content.set(event_target_value(&ev))
                    ></textarea>
                </div>
                <button type="submit" class="submit-btn">"저장하기"</button>
            </form>
        </section>
    }
}
