use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Where an element slides in from.
#[derive(Clone, Copy, PartialEq, Default)]
pub enum Origin {
    #[default]
    Below,
    Left,
    Right,
    /// Fade only.
    InPlace,
}

impl Origin {
    fn hidden_classes(self) -> &'static str {
        match self {
            Origin::Below => "opacity-0 translate-y-12",
            Origin::Left => "opacity-0 -translate-x-12",
            Origin::Right => "opacity-0 translate-x-12",
            Origin::InPlace => "opacity-0",
        }
    }
}

/// Flips to true `delay_ms` after mount. Unmounting first cancels the timer.
#[hook]
pub fn use_reveal(delay_ms: u32) -> bool {
    let shown = use_state(|| false);

    {
        let shown = shown.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(delay_ms, move || shown.set(true));
                move || drop(timeout)
            },
            (),
        );
    }

    *shown
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub origin: Origin,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let shown = use_reveal(props.delay_ms);
    let state = if shown {
        "opacity-100 translate-x-0 translate-y-0"
    } else {
        props.origin.hidden_classes()
    };

    html! {
        <div class={classes!("transition-all", "duration-700", "ease-out", state, props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}
