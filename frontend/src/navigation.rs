use log::debug;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

use crate::error::{self, BrowserError};

/// Page landmarks the navigation can jump to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Book,
}

impl Section {
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Book => "book",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    expanded: bool,
}

impl MenuState {
    pub fn is_expanded(self) -> bool {
        self.expanded
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn collapse(&mut self) {
        self.expanded = false;
    }
}

pub trait AnchorScroller {
    /// Smoothly scrolls the landmark with this id into view.
    /// Returns false when no such landmark exists.
    fn scroll_into_view(&self, anchor: &str) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserAnchors;

impl AnchorScroller for BrowserAnchors {
    fn scroll_into_view(&self, anchor: &str) -> bool {
        let Some(element) = error::document()
            .ok()
            .and_then(|doc| doc.get_element_by_id(anchor))
        else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

/// Brings `anchor` into view and collapses the mobile menu. An unknown
/// anchor only collapses the menu.
pub fn scroll_to_section<S: AnchorScroller>(scroller: &S, menu: &mut MenuState, anchor: &str) {
    if !scroller.scroll_into_view(anchor) {
        debug!("no landmark with id '{}'", anchor);
    }
    menu.collapse();
}

pub fn scroll_to_top() -> Result<(), BrowserError> {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    error::window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    struct FakePage {
        landmarks: Vec<&'static str>,
        scrolled_to: RefCell<Vec<String>>,
    }

    impl FakePage {
        fn new() -> Self {
            FakePage {
                landmarks: vec!["home", "about", "book"],
                scrolled_to: RefCell::new(Vec::new()),
            }
        }
    }

    impl AnchorScroller for FakePage {
        fn scroll_into_view(&self, anchor: &str) -> bool {
            if self.landmarks.contains(&anchor) {
                self.scrolled_to.borrow_mut().push(anchor.to_string());
                true
            } else {
                false
            }
        }
    }

    #[test]
    fn menu_starts_collapsed_and_toggles() {
        let mut menu = MenuState::default();
        assert!(!menu.is_expanded());
        menu.toggle();
        assert!(menu.is_expanded());
        menu.toggle();
        assert!(!menu.is_expanded());
    }

    #[test]
    fn navigating_scrolls_and_collapses_menu() {
        let page = FakePage::new();
        let mut menu = MenuState::default();
        menu.toggle();

        scroll_to_section(&page, &mut menu, Section::Book.anchor());

        assert_eq!(*page.scrolled_to.borrow(), vec!["book".to_string()]);
        assert!(!menu.is_expanded());
    }

    #[test]
    fn unknown_anchor_still_collapses_menu() {
        let page = FakePage::new();
        let mut menu = MenuState::default();
        menu.toggle();

        scroll_to_section(&page, &mut menu, "pricing");

        assert!(page.scrolled_to.borrow().is_empty());
        assert!(!menu.is_expanded());
    }

    #[test]
    fn collapsed_menu_stays_collapsed() {
        let page = FakePage::new();
        let mut menu = MenuState::default();
        scroll_to_section(&page, &mut menu, Section::Home.anchor());
        assert!(!menu.is_expanded());
    }

    #[test]
    fn section_anchors_match_page_ids() {
        let anchors: Vec<_> = [Section::Home, Section::About, Section::Book]
            .iter()
            .map(|s| s.anchor())
            .collect();
        assert_eq!(anchors, vec!["home", "about", "book"]);
    }
}
