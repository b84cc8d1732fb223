//! Host Document Helpers
//!
//! The small slice of the browser the diary needs outside Leptos views:
//! the body's class list, smooth scrolling and blocking alerts.

use leptos::prelude::*;

/// Class-list capability of an element
pub trait ClassList {
    fn add(&self, class: &str);
    fn remove(&self, class: &str);
    fn contains(&self, class: &str) -> bool;

    /// Add or remove `class` so that its presence equals `on`
    fn set(&self, class: &str, on: bool) {
        if on {
            self.add(class);
        } else {
            self.remove(class);
        }
    }
}

impl ClassList for web_sys::DomTokenList {
    fn add(&self, class: &str) {
        if let Err(err) = self.add_1(class) {
            tracing::warn!(class, error = ?err, "adding body class failed");
        }
    }

    fn remove(&self, class: &str) {
        if let Err(err) = self.remove_1(class) {
            tracing::warn!(class, error = ?err, "removing body class failed");
        }
    }

    fn contains(&self, class: &str) -> bool {
        web_sys::DomTokenList::contains(self, class)
    }
}

/// `document.body.classList`
pub fn body_class_list() -> Option<web_sys::DomTokenList> {
    document().body().map(|body| body.class_list())
}

/// Smoothly scroll the element with `id` into view
pub fn scroll_to_section(id: &str) {
    if let Some(el) = document().get_element_by_id(id) {
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&options);
    } else {
        tracing::warn!(id, "scroll target not found");
    }
}

/// Blocking `window.alert`
pub fn alert(message: &str) {
    if let Err(err) = window().alert_with_message(message) {
        tracing::warn!(message, error = ?err, "alert failed");
    }
}

#[cfg(test)]
pub mod testing {
    use super::ClassList;
    use std::cell::RefCell;

    /// In-memory class list for tests
    #[derive(Debug, Default)]
    pub struct MemoryClassList {
        classes: RefCell<Vec<String>>,
    }

    impl MemoryClassList {
        pub fn classes(&self) -> Vec<String> {
            self.classes.borrow().clone()
        }
    }

    impl ClassList for MemoryClassList {
        fn add(&self, class: &str) {
            if !self.contains(class) {
                self.classes.borrow_mut().push(class.to_string());
            }
        }

        fn remove(&self, class: &str) {
            self.classes.borrow_mut().retain(|c| c != class);
        }

        fn contains(&self, class: &str) -> bool {
            self.classes.borrow().iter().any(|c| c == class)
        }
    }
}
