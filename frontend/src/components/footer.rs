use log::warn;
use yew::prelude::*;

use crate::components::icons::ArrowUp;
use crate::navigation;
use crate::scroll::use_back_to_top;

#[function_component(Footer)]
pub fn footer() -> Html {
    let show_back_to_top = use_back_to_top();

    let to_top = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        if let Err(e) = navigation::scroll_to_top() {
            warn!("scroll to top failed: {}", e);
        }
    });

    html! {
        <footer class="bg-vyva-black dark:bg-vyva-black text-vyva-white py-12">
            <div class="container mx-auto px-6 text-center">
                <p class="text-lg">{"© 2025 Vyvabrill. All rights reserved."}</p>
                if show_back_to_top {
                    <button
                        onclick={to_top}
                        class="mt-6 inline-flex items-center gap-2 bg-vyva-gold text-vyva-black font-bold px-6 py-3 rounded-full hover:scale-105 transition"
                    >
                        <ArrowUp class={classes!("w-5", "h-5")} /> {"Back to Top"}
                    </button>
                }
            </div>
        </footer>
    }
}
