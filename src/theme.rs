use crate::config::THEME_KEY;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }

    /// A stored `"dark"` wins, any other stored value means light, and an
    /// absent or empty entry defers to the system preference.
    pub fn resolve(stored: Option<&str>, prefers_dark: bool) -> Self {
        match stored {
            Some("dark") => Self::Dark,
            Some(value) if !value.is_empty() => Self::Light,
            _ if prefers_dark => Self::Dark,
            _ => Self::Light,
        }
    }
}

pub trait ThemeStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: &str);
}

pub struct ThemeController<S> {
    store: S,
    current: Option<Theme>,
}

impl<S: ThemeStore> ThemeController<S> {
    pub fn new(store: S) -> Self {
        Self { store, current: None }
    }

    pub fn initialize(&mut self, prefers_dark: bool) -> Theme {
        if let Some(theme) = self.current {
            return theme;
        }

        let stored = self.store.load(THEME_KEY);
        let theme = Theme::resolve(stored.as_deref(), prefers_dark);
        self.current = Some(theme);
        theme
    }

    // An uninitialised controller toggles from light.
    pub fn toggle(&mut self) -> Theme {
        let next = self.current.unwrap_or(Theme::Light).toggled();
        self.store.save(THEME_KEY, next.as_str());
        self.current = Some(next);
        next
    }

    pub fn current(&self) -> Option<Theme> {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct MemoryStore {
        entries: Rc<RefCell<HashMap<String, String>>>,
        loads: Rc<RefCell<usize>>,
    }

    impl ThemeStore for MemoryStore {
        fn load(&self, key: &str) -> Option<String> {
            *self.loads.borrow_mut() += 1;
            self.entries.borrow().get(key).cloned()
        }

        fn save(&mut self, key: &str, value: &str) {
            self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        }
    }

    fn store_with(value: &str) -> MemoryStore {
        let store = MemoryStore::default();
        store
            .entries
            .borrow_mut()
            .insert(THEME_KEY.to_string(), value.to_string());
        store
    }

    #[test]
    fn stored_value_overrides_system_preference() {
        assert_eq!(Theme::resolve(Some("dark"), false), Theme::Dark);
        assert_eq!(Theme::resolve(Some("light"), true), Theme::Light);
    }

    #[test]
    fn absent_or_empty_value_uses_system_preference() {
        assert_eq!(Theme::resolve(None, true), Theme::Dark);
        assert_eq!(Theme::resolve(None, false), Theme::Light);
        assert_eq!(Theme::resolve(Some(""), true), Theme::Dark);
    }

    #[test]
    fn unknown_stored_value_means_light() {
        assert_eq!(Theme::resolve(Some("sepia"), true), Theme::Light);
    }

    #[test]
    fn initialize_is_idempotent() {
        let store = store_with("dark");
        let mut controller = ThemeController::new(store.clone());

        assert_eq!(controller.initialize(false), Theme::Dark);
        store
            .entries
            .borrow_mut()
            .insert(THEME_KEY.to_string(), "light".to_string());
        assert_eq!(controller.initialize(true), Theme::Dark);
        assert_eq!(*store.loads.borrow(), 1);
    }

    #[test]
    fn toggle_flips_and_persists() {
        let store = MemoryStore::default();
        let mut controller = ThemeController::new(store.clone());
        controller.initialize(false);

        assert_eq!(controller.toggle(), Theme::Dark);
        assert_eq!(store.entries.borrow().get(THEME_KEY).map(String::as_str), Some("dark"));

        assert_eq!(controller.toggle(), Theme::Light);
        assert_eq!(store.entries.borrow().get(THEME_KEY).map(String::as_str), Some("light"));
        assert_eq!(controller.current(), Some(Theme::Light));
    }

    #[test]
    fn toggled_value_survives_a_reload() {
        let store = MemoryStore::default();
        let mut first = ThemeController::new(store.clone());
        first.initialize(false);
        first.toggle();

        let mut reloaded = ThemeController::new(store);
        assert_eq!(reloaded.initialize(false), Theme::Dark);
    }

    #[test]
    fn toggle_label_names_the_next_theme() {
        assert_eq!(Theme::Light.toggle_label(), "Switch to dark theme");
        assert_eq!(Theme::Dark.toggle_label(), "Switch to light theme");
    }
}
