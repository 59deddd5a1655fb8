//! Light/dark theme selection.
//!
//! The persisted choice wins on load; without one the platform's
//! `prefers-color-scheme` decides. The active theme is mirrored as the
//! `dark` class on `<html>`, which the Tailwind `dark:` variants key off.

use log::{debug, warn};
use yew::prelude::*;

use crate::config::THEME_STORAGE_KEY;
use crate::error::{self, BrowserError};

const DARK_CLASS: &str = "dark";
const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Stored text takes precedence whenever it is non-empty, and only the
    /// exact value `"dark"` selects the dark theme.
    pub fn resolve(stored: Option<&str>, prefers_dark: bool) -> Theme {
        match stored {
            Some(value) if !value.is_empty() => {
                if value == Theme::Dark.as_str() {
                    Theme::Dark
                } else {
                    Theme::Light
                }
            }
            _ if prefers_dark => Theme::Dark,
            _ => Theme::Light,
        }
    }
}

/// What the theme controller needs from its environment.
pub trait ThemeHost {
    fn stored_theme(&self) -> Option<String>;
    fn store_theme(&self, theme: Theme) -> Result<(), BrowserError>;
    fn prefers_dark(&self) -> bool;
    fn apply(&self, theme: Theme) -> Result<(), BrowserError>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserThemeHost;

fn local_storage() -> Result<web_sys::Storage, BrowserError> {
    error::window()?
        .local_storage()?
        .ok_or(BrowserError::StorageUnavailable)
}

impl ThemeHost for BrowserThemeHost {
    fn stored_theme(&self) -> Option<String> {
        local_storage()
            .ok()
            .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok())
            .flatten()
    }

    fn store_theme(&self, theme: Theme) -> Result<(), BrowserError> {
        local_storage()?.set_item(THEME_STORAGE_KEY, theme.as_str())?;
        Ok(())
    }

    fn prefers_dark(&self) -> bool {
        web_sys::window()
            .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok())
            .flatten()
            .map(|query| query.matches())
            .unwrap_or(false)
    }

    fn apply(&self, theme: Theme) -> Result<(), BrowserError> {
        let root = error::document()?
            .document_element()
            .ok_or(BrowserError::NoDocument)?;
        let classes = root.class_list();
        if theme.is_dark() {
            classes.add_1(DARK_CLASS)?;
        } else {
            classes.remove_1(DARK_CLASS)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThemeController<H: ThemeHost> {
    host: H,
    theme: Theme,
}

impl<H: ThemeHost> ThemeController<H> {
    /// Resolves the initial theme and applies it. Nothing is written back.
    pub fn load(host: H) -> Self {
        let stored = host.stored_theme();
        let theme = Theme::resolve(stored.as_deref(), host.prefers_dark());
        debug!("initial theme {} (stored: {:?})", theme.as_str(), stored);
        if let Err(e) = host.apply(theme) {
            warn!("could not apply theme: {}", e);
        }
        Self { host, theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flips the theme, re-applies it and persists it. A storage failure
    /// only costs persistence; the flag still changes for this session.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        if let Err(e) = self.host.apply(self.theme) {
            warn!("could not apply theme: {}", e);
        }
        if let Err(e) = self.host.store_theme(self.theme) {
            warn!("theme not persisted: {}", e);
        }
        self.theme
    }
}

#[derive(Clone)]
pub struct UseThemeHandle {
    pub theme: Theme,
    pub toggle: Callback<MouseEvent>,
}

#[hook]
pub fn use_theme() -> UseThemeHandle {
    let controller = use_state(|| ThemeController::load(BrowserThemeHost));

    let toggle = {
        let controller = controller.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let mut next = (*controller).clone();
            next.toggle();
            controller.set(next);
        })
    };

    UseThemeHandle {
        theme: controller.theme(),
        toggle,
    }
}
