use chrono::Utc;
use log::{debug, warn};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::booking::{BookingState, CalendlyScheduler, LeadCapture, LeadError, SheetsIntake};
use crate::config::CONTACT_EMAIL;
use crate::error;

fn show_notice(message: &str) {
    match error::window() {
        Ok(window) => {
            if let Err(e) = window.alert_with_message(message) {
                warn!("could not show notice: {:?}", e);
            }
        }
        Err(e) => warn!("could not show notice: {}", e),
    }
}

#[function_component(BookSection)]
pub fn book_section() -> Html {
    let lead = use_state(LeadCapture::default);

    let oninput = {
        let lead = lead.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*lead).clone();
            next.set_email(input.value());
            lead.set(next);
        })
    };

    let onsubmit = {
        let lead = lead.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let mut next = (*lead).clone();
            match next.submit(&SheetsIntake::default(), &CalendlyScheduler, Utc::now()) {
                Ok(_) => lead.set(next),
                Err(LeadError::InvalidEmail) => show_notice(&LeadError::InvalidEmail.to_string()),
                Err(e) => debug!("submit ignored: {}", e),
            }
        })
    };

    html! {
        <section id="book" class="py-24 px-6 bg-gradient-to-b from-vyva-blue to-[#0230c0] text-vyva-white">
            <div class="max-w-4xl mx-auto text-center">
                <h2 class="text-5xl md:text-6xl font-bold mb-8">{"Let’s Grow Your Business"}</h2>
                <p class="text-xl mb-6 opacity-90">{"Free 30-min strategy call. No pitch. Just results."}</p>

                if lead.state() == BookingState::Collecting {
                    <div class="max-w-md mx-auto space-y-4">
                        <input
                            type="email"
                            placeholder="Enter your email to book"
                            value={lead.email().to_string()}
                            {oninput}
                            class="w-full px-6 py-4 rounded-full text-vyva-black text-lg bg-vyva-white"
                        />
                        <button
                            onclick={onsubmit}
                            class="w-full bg-vyva-gold text-vyva-black font-bold text-xl py-4 rounded-full hover:scale-105 transition-all shadow-2xl"
                        >
                            {"Continue to Booking"}
                        </button>
                    </div>
                } else {
                    <p class="text-lg font-bold text-vyva-gold">{"Calendly is open! Pick your time"}</p>
                }

                <p class="mt-8 text-lg">{"Or email: "}<strong>{ CONTACT_EMAIL }</strong></p>
            </div>
        </section>
    }
}
