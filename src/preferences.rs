//! Display Preferences
//!
//! Dark mode and font size, persisted as strings and reflected onto the
//! body's class list.

use kv_storage::{KeyValueStore, StorageResult};

use crate::config::StorageKeys;
use crate::dom::ClassList;

/// Body class applied while dark mode is on
pub const DARK_MODE_CLASS: &str = "dark-mode";

/// Font size levels, smallest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontSize {
    Small,
    #[default]
    Normal,
    Large,
    XLarge,
}

/// Which way `adjust_font_size` moves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontDirection {
    Increase,
    Decrease,
}

impl FontSize {
    pub const ALL: [FontSize; 4] = [FontSize::Small, FontSize::Normal, FontSize::Large, FontSize::XLarge];

    /// Body class, also the persisted value
    pub fn class_name(&self) -> &'static str {
        match self {
            FontSize::Small => "font-small",
            FontSize::Normal => "font-normal",
            FontSize::Large => "font-large",
            FontSize::XLarge => "font-xlarge",
        }
    }

    pub fn from_class_name(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.class_name() == s)
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|size| size == self).unwrap_or(1)
    }

    /// Neighbouring level, clamped at both ends
    pub fn step(&self, direction: FontDirection) -> Self {
        let index = match direction {
            FontDirection::Increase => (self.index() + 1).min(Self::ALL.len() - 1),
            FontDirection::Decrease => self.index().saturating_sub(1),
        };
        Self::ALL[index]
    }
}

/// Current display preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preferences {
    pub dark_mode: bool,
    pub font_size: FontSize,
}

impl Preferences {
    /// Read both preferences, defaulting absent or unknown values
    pub fn load<S: KeyValueStore>(storage: &S, keys: &StorageKeys) -> StorageResult<Self> {
        let dark_mode = storage.get(keys.dark_mode)?.as_deref() == Some("true");
        let font_size = match storage.get(keys.font_size)? {
            Some(raw) => FontSize::from_class_name(&raw).unwrap_or_else(|| {
                tracing::warn!(value = %raw, "unknown font size, using default");
                FontSize::default()
            }),
            None => FontSize::default(),
        };
        Ok(Self { dark_mode, font_size })
    }

    /// Flip dark mode and persist `"true"`/`"false"`; state only changes if the write succeeds
    pub fn toggle_dark_mode<S: KeyValueStore>(&mut self, storage: &S, keys: &StorageKeys) -> StorageResult<bool> {
        let next = !self.dark_mode;
        storage.set(keys.dark_mode, if next { "true" } else { "false" })?;
        self.dark_mode = next;
        Ok(next)
    }

    /// Move one font level and persist the level name
    pub fn adjust_font_size<S: KeyValueStore>(
        &mut self,
        direction: FontDirection,
        storage: &S,
        keys: &StorageKeys,
    ) -> StorageResult<FontSize> {
        let next = self.font_size.step(direction);
        storage.set(keys.font_size, next.class_name())?;
        self.font_size = next;
        Ok(next)
    }

    /// Label of the dark mode control: names the action a click performs
    pub fn dark_mode_label(&self) -> &'static str {
        if self.dark_mode {
            "☀️ 라이트모드"
        } else {
            "🌙 다크모드"
        }
    }

    /// Sync the dark class and exactly one font class onto `classes`
    pub fn apply(&self, classes: &impl ClassList) {
        classes.set(DARK_MODE_CLASS, self.dark_mode);
        for size in FontSize::ALL {
            classes.remove(size.class_name());
        }
        classes.add(self.font_size.class_name());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::testing::MemoryClassList;
    use kv_storage::{MemoryStorage, StorageError};

    fn font_classes(classes: &MemoryClassList) -> Vec<String> {
        classes
            .classes()
            .into_iter()
            .filter(|c| FontSize::from_class_name(c).is_some())
            .collect()
    }

    #[test]
    fn test_defaults_when_absent() {
        let prefs = Preferences::load(&MemoryStorage::new(), &StorageKeys::default()).unwrap();
        assert!(!prefs.dark_mode);
        assert_eq!(prefs.font_size, FontSize::Normal);
        assert_eq!(prefs.dark_mode_label(), "🌙 다크모드");
    }

    #[test]
    fn test_unknown_font_size_falls_back() {
        let storage = MemoryStorage::new();
        storage.set("fontSize", "font-huge").unwrap();
        let prefs = Preferences::load(&storage, &StorageKeys::default()).unwrap();
        assert_eq!(prefs.font_size, FontSize::Normal);
    }

    #[test]
    fn test_toggle_persists_literal_strings() {
        let storage = MemoryStorage::new();
        let keys = StorageKeys::default();
        let mut prefs = Preferences::default();

        assert!(prefs.toggle_dark_mode(&storage, &keys).unwrap());
        assert_eq!(storage.get("darkMode").unwrap().as_deref(), Some("true"));
        assert_eq!(prefs.dark_mode_label(), "☀️ 라이트모드");

        assert!(!prefs.toggle_dark_mode(&storage, &keys).unwrap());
        assert_eq!(storage.get("darkMode").unwrap().as_deref(), Some("false"));
    }

    #[test]
    fn test_toggle_survives_reload() {
        let storage = MemoryStorage::new();
        let keys = StorageKeys::default();
        let mut prefs = Preferences::load(&storage, &keys).unwrap();
        prefs.toggle_dark_mode(&storage, &keys).unwrap();

        let reloaded = Preferences::load(&storage.clone(), &keys).unwrap();
        let classes = MemoryClassList::default();
        reloaded.apply(&classes);

        assert!(reloaded.dark_mode);
        assert!(classes.contains(DARK_MODE_CLASS));
    }

    #[test]
    fn test_font_size_clamps_at_both_ends() {
        let storage = MemoryStorage::new();
        let keys = StorageKeys::default();
        let mut prefs = Preferences::default();
        let classes = MemoryClassList::default();

        for _ in 0..6 {
            prefs.adjust_font_size(FontDirection::Decrease, &storage, &keys).unwrap();
            prefs.apply(&classes);
            assert_eq!(font_classes(&classes).len(), 1);
        }
        assert_eq!(prefs.font_size, FontSize::Small);
        assert_eq!(storage.get("fontSize").unwrap().as_deref(), Some("font-small"));

        for _ in 0..6 {
            prefs.adjust_font_size(FontDirection::Increase, &storage, &keys).unwrap();
            prefs.apply(&classes);
            assert_eq!(font_classes(&classes).len(), 1);
        }
        assert_eq!(prefs.font_size, FontSize::XLarge);
        assert_eq!(font_classes(&classes), vec!["font-xlarge".to_string()]);
    }

    #[test]
    fn test_apply_replaces_stale_font_classes() {
        let classes = MemoryClassList::default();
        classes.add("font-small");
        classes.add("font-large");
        classes.add("unrelated");

        Preferences { dark_mode: false, font_size: FontSize::Normal }.apply(&classes);

        assert_eq!(font_classes(&classes), vec!["font-normal".to_string()]);
        assert!(classes.contains("unrelated"));
        assert!(!classes.contains(DARK_MODE_CLASS));
    }

    #[test]
    fn test_failed_write_keeps_state() {
        let storage = MemoryStorage::new();
        storage.set_quota(Some(0));
        let keys = StorageKeys::default();
        let mut prefs = Preferences::default();

        let err = prefs.toggle_dark_mode(&storage, &keys).unwrap_err();
        assert!(matches!(err, StorageError::WriteRejected { .. }));
        assert!(!prefs.dark_mode);

        assert!(prefs.adjust_font_size(FontDirection::Increase, &storage, &keys).is_err());
        assert_eq!(prefs.font_size, FontSize::Normal);
    }
}
