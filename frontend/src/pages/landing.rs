use yew::prelude::*;

use crate::components::book::BookSection;
use crate::components::footer::Footer;
use crate::components::icons::ChevronDown;
use crate::components::reveal::{Origin, Reveal};
use crate::content::{CaseStudy, Testimonial, ABOUT, MISSION, PORTFOLIO, TAGLINE, TESTIMONIALS, VISION};
use crate::navigation::Section;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub on_navigate: Callback<Section>,
}

fn hero(on_navigate: &Callback<Section>) -> Html {
    let book = on_navigate.reform(|e: MouseEvent| {
        e.prevent_default();
        Section::Book
    });

    html! {
        <section id="home" class="relative min-h-screen flex items-center justify-center overflow-hidden bg-gradient-to-br from-vyva-blue via-[#0260e0] to-vyva-gold pt-20">
            <div class="absolute inset-0 bg-vyva-black/20"></div>
            <Reveal class={classes!("relative", "z-10", "text-center", "px-6", "max-w-5xl", "mx-auto")}>
                <h1 class="text-6xl md:text-8xl lg:text-9xl font-black text-vyva-white tracking-tighter mb-6 drop-shadow-2xl">
                    {"VYVABRILL"}
                </h1>
                <p class="text-xl md:text-2xl text-vyva-white/90 font-medium mb-10 max-w-2xl mx-auto">
                    { TAGLINE }
                </p>
                <button
                    onclick={book}
                    class="inline-block bg-vyva-gold text-vyva-black font-bold text-lg px-10 py-5 rounded-full hover:scale-105 transition-transform duration-200 shadow-xl"
                >
                    {"Book a Free Strategy Call"}
                </button>
            </Reveal>
            <div class="absolute bottom-10 left-1/2 -translate-x-1/2 animate-bounce">
                <ChevronDown class={classes!("w-8", "h-8", "text-vyva-white")} />
            </div>
        </section>
    }
}

fn about() -> Html {
    html! {
        <section id="about" class="py-24 px-6 bg-vyva-white dark:bg-vyva-black">
            <div class="max-w-6xl mx-auto text-center">
                <Reveal origin={Origin::InPlace} delay_ms={200}>
                    <h2 class="text-5xl md:text-6xl font-bold text-vyva-blue mb-8">{"We Don’t Guess. We Grow."}</h2>
                </Reveal>
                <p class="text-xl text-vyva-black/70 dark:text-vyva-white/70 max-w-3xl mx-auto leading-relaxed">
                    { ABOUT }
                </p>
            </div>
        </section>
    }
}

fn statement(title: &'static str, body: &'static str, badge: &'static str, icon: Html) -> Html {
    html! {
        <>
            <div class="flex items-center gap-4">
                <div class={classes!("w-16", "h-16", badge, "rounded-full", "flex", "items-center", "justify-center", "shadow-lg")}>
                    { icon }
                </div>
                <h3 class="text-3xl md:text-4xl font-bold text-vyva-blue">{ title }</h3>
            </div>
            <p class="text-lg text-vyva-black/70 dark:text-vyva-white/70 leading-relaxed pl-20">{ body }</p>
        </>
    }
}

fn vision_mission() -> Html {
    let bulb = html! {
        <svg class="w-8 h-8 text-vyva-white" fill="none" stroke="currentColor" viewBox="0 0 24 24">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9.663 17h4.673M12 3v1m6.364 1.636l-.707.707M21 12h-1M4 12H3m3.343-5.657l-.707-.707m2.828 9.9a5 5 0 117.072 0l-.548.547A3.374 3.374 0 0014 18.469V19a2 2 0 11-4 0v-.531c0-.895-.356-1.754-.988-2.386l-.548-.547z" />
        </svg>
    };
    let bolt = html! {
        <svg class="w-8 h-8 text-vyva-black" fill="none" stroke="currentColor" viewBox="0 0 24 24">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M13 10V3L4 14h7v7l9-11h-7z" />
        </svg>
    };

    html! {
        <section class="py-24 px-6 bg-vyva-gray/30 dark:bg-vyva-black/50">
            <div class="max-w-7xl mx-auto">
                <div class="grid md:grid-cols-2 gap-12 items-center">
                    <Reveal origin={Origin::Left} class={classes!("space-y-6")}>
                        { statement("Vision", VISION, "bg-vyva-blue", bulb) }
                    </Reveal>
                    <Reveal origin={Origin::Right} delay_ms={200} class={classes!("space-y-6")}>
                        { statement("Mission", MISSION, "bg-vyva-gold", bolt) }
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

fn case_study_card(index: usize, study: &CaseStudy) -> Html {
    html! {
        <Reveal key={study.title} delay_ms={(index as u32) * 200} class={classes!("group", "relative", "overflow-hidden", "rounded-3xl", "bg-vyva-white", "dark:bg-vyva-black", "shadow-lg", "h-full")}>
            <div class="aspect-video relative">
                <div class={classes!("absolute", "inset-0", "bg-gradient-to-t", study.gradient, "opacity-80")}></div>
                <div class="bg-vyva-gray/30 dark:bg-vyva-white/10 border-2 border-dashed rounded-xl w-full h-full"></div>
                <div class="absolute bottom-6 left-6 text-vyva-white z-20">
                    <h3 class="text-2xl font-bold">{ study.title }</h3>
                    <p class="text-vyva-gold font-medium">{ study.result }</p>
                </div>
            </div>
        </Reveal>
    }
}

fn portfolio() -> Html {
    html! {
        <section class="py-24 px-6 bg-vyva-gray/20 dark:bg-vyva-black/30">
            <div class="max-w-7xl mx-auto">
                <h2 class="text-5xl md:text-6xl font-bold text-center text-vyva-blue mb-16">{"Selected Work"}</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8 lg:gap-12">
                    { PORTFOLIO.iter().enumerate().map(|(i, study)| case_study_card(i, study)).collect::<Html>() }
                </div>
            </div>
        </section>
    }
}

fn testimonial(index: usize, review: &Testimonial) -> Html {
    // Alternate the side each quote slides in from.
    let origin = if index % 2 == 0 { Origin::Left } else { Origin::Right };

    html! {
        <Reveal key={review.name} {origin} class={classes!("bg-gradient-to-r", "from-vyva-blue/5", "to-vyva-gold/10", "dark:from-vyva-blue/20", "dark:to-vyva-gold/20", "p-8", "rounded-3xl", "border-l-4", "border-vyva-gold")}>
            <p class="text-xl italic text-vyva-black/80 dark:text-vyva-white/80 mb-4">{ format!("“{}”", review.quote) }</p>
            <p class="font-bold text-vyva-blue">
                { review.name }
                <span class="font-normal text-vyva-black/60 dark:text-vyva-white/60">{ format!(" — {}", review.role) }</span>
            </p>
        </Reveal>
    }
}

fn client_love() -> Html {
    html! {
        <section class="py-24 px-6 bg-vyva-white dark:bg-vyva-black">
            <div class="max-w-5xl mx-auto">
                <h2 class="text-5xl md:text-6xl font-bold text-center text-vyva-blue mb-16">{"Client Love"}</h2>
                <div class="space-y-12">
                    { TESTIMONIALS.iter().enumerate().map(|(i, review)| testimonial(i, review)).collect::<Html>() }
                </div>
            </div>
        </section>
    }
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    html! {
        <>
            { hero(&props.on_navigate) }
            { about() }
            { vision_mission() }
            { portfolio() }
            { client_love() }
            <BookSection />
            <Footer />
        </>
    }
}
