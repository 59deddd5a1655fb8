use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::config::BACK_TO_TOP_THRESHOLD;

pub fn back_to_top_visible(offset: f64) -> bool {
    offset > BACK_TO_TOP_THRESHOLD
}

/// Tracks `window.scrollY` and reports whether the back-to-top button
/// should be shown. The listener is removed when the component unmounts.
#[hook]
pub fn use_back_to_top() -> bool {
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let listener = window.as_ref().map(|window| {
                    let reader = window.clone();
                    let scroll_callback = Closure::<dyn FnMut()>::new(move || {
                        let offset = reader.scroll_y().unwrap_or(0.0);
                        visible.set(back_to_top_visible(offset));
                    });
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                    scroll_callback
                });

                move || {
                    if let (Some(window), Some(scroll_callback)) = (window, listener) {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    *visible
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_at_top_of_page() {
        assert!(!back_to_top_visible(0.0));
    }

    #[test]
    fn flips_at_threshold_boundary() {
        assert!(!back_to_top_visible(499.0));
        assert!(!back_to_top_visible(500.0));
        assert!(back_to_top_visible(501.0));
    }

    #[test]
    fn fractional_offsets_past_threshold_show() {
        assert!(back_to_top_visible(500.5));
    }
}
