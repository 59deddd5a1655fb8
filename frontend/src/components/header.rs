use yew::prelude::*;

use crate::components::icons::{ChevronDown, CloseIcon, MenuIcon, Moon, Sun};
use crate::content::SERVICES;
use crate::navigation::{MenuState, Section};
use crate::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub theme: Theme,
    pub on_toggle_theme: Callback<MouseEvent>,
    pub menu: MenuState,
    pub on_toggle_menu: Callback<MouseEvent>,
    pub on_navigate: Callback<Section>,
}

fn nav_to(on_navigate: &Callback<Section>, section: Section) -> Callback<MouseEvent> {
    on_navigate.reform(move |e: MouseEvent| {
        e.prevent_default();
        section
    })
}

fn theme_icon(theme: Theme) -> Html {
    if theme.is_dark() {
        html! { <Sun class={classes!("w-5", "h-5", "text-vyva-gold")} /> }
    } else {
        html! { <Moon class={classes!("w-5", "h-5", "text-vyva-white")} /> }
    }
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let HeaderProps { theme, on_toggle_theme, menu, on_toggle_menu, on_navigate } = props;

    html! {
        <header class="fixed top-0 left-0 right-0 z-50 bg-transparent transition-all duration-300">
            <div class="container mx-auto px-6 py-4 flex justify-between items-center">
                <div class="flex items-center space-x-3">
                    <img
                        src="/assets/logo.png"
                        alt="Vyvabrill Logo"
                        width="580"
                        height="580"
                        class="w-50 h-50 md:w-58 md:h-58 rounded-full object-contain drop-shadow-lg"
                    />
                </div>

                <nav class="hidden md:flex items-center space-x-8">
                    <button onclick={nav_to(on_navigate, Section::Home)} class="font-medium text-vyva-white hover:text-vyva-gold transition">{"Home"}</button>
                    <button onclick={nav_to(on_navigate, Section::About)} class="font-medium text-vyva-white hover:text-vyva-gold transition">{"About"}</button>

                    <div class="relative group">
                        <button class="font-medium text-vyva-white hover:text-vyva-gold flex items-center gap-1 transition">
                            {"Services"} <ChevronDown class={classes!("w-4", "h-4")} />
                        </button>
                        <div class="absolute top-full left-1/2 -translate-x-1/2 mt-3 w-64 bg-vyva-white dark:bg-vyva-black rounded-2xl shadow-2xl opacity-0 invisible group-hover:opacity-100 group-hover:visible transition-all duration-300 pointer-events-none group-hover:pointer-events-auto">
                            {
                                SERVICES.iter().enumerate().map(|(i, service)| html! {
                                    <button
                                        key={*service}
                                        class="block w-full text-left px-6 py-3 text-vyva-black dark:text-vyva-white hover:bg-gradient-to-r hover:from-vyva-blue hover:to-vyva-gold hover:text-vyva-white transition-all first:rounded-t-2xl last:rounded-b-2xl"
                                        style={format!("transition-delay: {}ms", i * 50)}
                                    >
                                        { *service }
                                    </button>
                                }).collect::<Html>()
                            }
                        </div>
                    </div>

                    <button onclick={nav_to(on_navigate, Section::Book)} class="bg-vyva-gold text-vyva-black font-bold px-6 py-2 rounded-full hover:scale-105 transition shadow-lg">
                        {"Book a Session"}
                    </button>

                    <button onclick={on_toggle_theme.clone()} class="p-2 rounded-full bg-vyva-white/20 backdrop-blur-sm hover:bg-vyva-gold/30 transition">
                        { theme_icon(*theme) }
                    </button>
                </nav>

                <div class="md:hidden flex items-center gap-4">
                    <button onclick={on_toggle_theme.clone()} class="p-2 rounded-full bg-vyva-white/20 backdrop-blur-sm">
                        { theme_icon(*theme) }
                    </button>
                    <button onclick={on_toggle_menu.clone()} class="text-vyva-white">
                        if menu.is_expanded() { <CloseIcon /> } else { <MenuIcon /> }
                    </button>
                </div>
            </div>

            if menu.is_expanded() {
                <div class="md:hidden bg-vyva-white dark:bg-vyva-black/95 backdrop-blur-md border-t">
                    <div class="container mx-auto px-6 py-4 space-y-3">
                        <button onclick={nav_to(on_navigate, Section::Home)} class="block w-full text-left font-medium text-vyva-black dark:text-vyva-white">{"Home"}</button>
                        <button onclick={nav_to(on_navigate, Section::About)} class="block w-full text-left font-medium text-vyva-black dark:text-vyva-white">{"About"}</button>
                        <div class="space-y-2">
                            <p class="font-medium text-vyva-black dark:text-vyva-white">{"Services"}</p>
                            {
                                SERVICES.iter().map(|service| html! {
                                    <button key={*service} class="block w-full text-left text-sm text-vyva-black/70 dark:text-vyva-white/70 pl-4 hover:text-vyva-blue">
                                        { *service }
                                    </button>
                                }).collect::<Html>()
                            }
                        </div>
                        <button onclick={nav_to(on_navigate, Section::Book)} class="w-full bg-vyva-gold text-vyva-black font-bold py-3 rounded-full">
                            {"Book a Session"}
                        </button>
                    </div>
                </div>
            }
        </header>
    }
}
