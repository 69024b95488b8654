use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, MediaQueryList, MediaQueryListEvent};

use super::ThemeMode;

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";
const PREFERENCE_ATTRIBUTE: &str = "data-theme";

/// Deployment-level theme choice, read from `<html data-theme="...">`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreference {
    #[default]
    System,
    Light,
    Dark,
}

impl ThemePreference {
    /// Unknown values fall back to following the system.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => ThemePreference::Light,
            "dark" => ThemePreference::Dark,
            _ => ThemePreference::System,
        }
    }

    pub fn resolve(self, system_dark: bool) -> ThemeMode {
        match self {
            ThemePreference::Light => ThemeMode::Light,
            ThemePreference::Dark => ThemeMode::Dark,
            ThemePreference::System if system_dark => ThemeMode::Dark,
            ThemePreference::System => ThemeMode::Light,
        }
    }

    pub fn follows_system(self) -> bool {
        self == ThemePreference::System
    }
}

pub fn document_preference() -> ThemePreference {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .and_then(|root| root.get_attribute(PREFERENCE_ATTRIBUTE))
        .map(|value| ThemePreference::parse(&value))
        .unwrap_or_default()
}

fn dark_query() -> Option<MediaQueryList> {
    window()?.match_media(DARK_QUERY).ok().flatten()
}

pub fn system_prefers_dark() -> bool {
    dark_query().map(|q| q.matches()).unwrap_or(false)
}

/// Listens for `prefers-color-scheme` changes until dropped.
pub struct SystemThemeWatch {
    query: MediaQueryList,
    callback: Closure<dyn FnMut(MediaQueryListEvent)>,
}

impl SystemThemeWatch {
    pub fn start(on_change: impl Fn(ThemeMode) + 'static) -> Option<Self> {
        let query = dark_query()?;
        let callback = Closure::wrap(Box::new(move |event: MediaQueryListEvent| {
            let mode = ThemePreference::System.resolve(event.matches());
            info!("System theme changed to {}", mode);
            on_change(mode);
        }) as Box<dyn FnMut(MediaQueryListEvent)>);

        if let Err(err) =
            query.add_event_listener_with_callback("change", callback.as_ref().unchecked_ref())
        {
            warn!("Could not watch system theme: {:?}", err);
            return None;
        }

        Some(Self { query, callback })
    }
}

impl Drop for SystemThemeWatch {
    fn drop(&mut self) {
        let _ = self
            .query
            .remove_event_listener_with_callback("change", self.callback.as_ref().unchecked_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_attribute_values() {
        assert_eq!(ThemePreference::parse("dark"), ThemePreference::Dark);
        assert_eq!(ThemePreference::parse(" Light "), ThemePreference::Light);
        assert_eq!(ThemePreference::parse("system"), ThemePreference::System);
        assert_eq!(ThemePreference::parse("sepia"), ThemePreference::System);
    }

    #[test]
    fn pinned_preference_ignores_system() {
        assert_eq!(ThemePreference::Light.resolve(true), ThemeMode::Light);
        assert_eq!(ThemePreference::Dark.resolve(false), ThemeMode::Dark);
    }

    #[test]
    fn system_preference_follows_media_query() {
        assert_eq!(ThemePreference::System.resolve(true), ThemeMode::Dark);
        assert_eq!(ThemePreference::System.resolve(false), ThemeMode::Light);
        assert!(ThemePreference::default().follows_system());
    }
}
