//! Header Component
//!
//! Navigation shortcuts plus the font size and dark mode controls.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::dom;
use crate::preferences::FontDirection;

/// Navigation shortcut
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Home,
    Write,
    List,
}

impl NavTarget {
    pub const ALL: [NavTarget; 3] = [NavTarget::Home, NavTarget::Write, NavTarget::List];

    /// Id of the link element
    pub fn element_id(&self) -> &'static str {
        match self {
            NavTarget::Home => "navHome",
            NavTarget::Write => "navWrite",
            NavTarget::List => "navList",
        }
    }

    /// Id of the section scrolled into view
    pub fn section_id(&self) -> &'static str {
        match self {
            NavTarget::Home | NavTarget::Write => "diaryForm",
            NavTarget::List => "diaryList",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NavTarget::Home => "홈",
            NavTarget::Write => "일기 쓰기",
            NavTarget::List => "일기 목록",
        }
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    view! {
        <header class="site-header">
            <h1 class="site-title">"나의 일기장"</h1>
            <nav class="site-nav">
                {NavTarget::ALL.iter().map(|target| {
                    let target = *target;
                    view! {
                        <a
                            href="#"
                            id=target.element_id()
                            on:click=move |ev: web_sys::MouseEvent| {
                                ev.prevent_default();
                                dom::scroll_to_section(target.section_id());
                            }
                        >
                            {target.label()}
                        </a>
                    }
                }).collect_view()}
            </nav>
            <div class="preference-controls">
                <button
                    id="fontDecrease"
                    class="font-btn"
                    title="글자 작게"
                    on:click=move |_| ctx.adjust_font_size(FontDirection::Decrease)
                >
                    "A-"
                </button>
                <button
                    id="fontIncrease"
                    class="font-btn"
                    title="글자 크게"
                    on:click=move |_| ctx.adjust_font_size(FontDirection::Increase)
                >
                    "A+"
                </button>
                <button
                    id="darkModeToggle"
                    class="dark-mode-btn"
                    on:click=move |_| ctx.toggle_dark_mode()
                >
                    {move || ctx.preferences().dark_mode_label()}
                </button>
            </div>
        </header>
    }
}
