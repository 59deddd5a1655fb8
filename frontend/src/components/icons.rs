//! Inline line icons (24x24 viewBox, stroked with `currentColor`).

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct IconProps {
    #[prop_or(classes!("w-6", "h-6"))]
    pub class: Classes,
}

fn stroked(class: &Classes, body: Html) -> Html {
    html! {
        <svg class={class.clone()} xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"
            fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            { body }
        </svg>
    }
}

#[function_component(ChevronDown)]
pub fn chevron_down(props: &IconProps) -> Html {
    stroked(&props.class, html! { <path d="m6 9 6 6 6-6" /> })
}

#[function_component(MenuIcon)]
pub fn menu_icon(props: &IconProps) -> Html {
    stroked(&props.class, html! {
        <>
            <line x1="4" x2="20" y1="6" y2="6" />
            <line x1="4" x2="20" y1="12" y2="12" />
            <line x1="4" x2="20" y1="18" y2="18" />
        </>
    })
}

#[function_component(CloseIcon)]
pub fn close_icon(props: &IconProps) -> Html {
    stroked(&props.class, html! {
        <>
            <path d="M18 6 6 18" />
            <path d="m6 6 12 12" />
        </>
    })
}

#[function_component(ArrowUp)]
pub fn arrow_up(props: &IconProps) -> Html {
    stroked(&props.class, html! {
        <>
            <path d="m5 12 7-7 7 7" />
            <path d="M12 19V5" />
        </>
    })
}

#[function_component(Sun)]
pub fn sun(props: &IconProps) -> Html {
    stroked(&props.class, html! {
        <>
            <circle cx="12" cy="12" r="4" />
            <path d="M12 2v2" />
            <path d="M12 20v2" />
            <path d="m4.93 4.93 1.41 1.41" />
            <path d="m17.66 17.66 1.41 1.41" />
            <path d="M2 12h2" />
            <path d="M20 12h2" />
            <path d="m6.34 17.66-1.41 1.41" />
            <path d="m19.07 4.93-1.41 1.41" />
        </>
    })
}

#[function_component(Moon)]
pub fn moon(props: &IconProps) -> Html {
    stroked(&props.class, html! { <path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z" /> })
}
