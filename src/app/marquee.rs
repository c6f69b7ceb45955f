use leptos::prelude::*;
use leptos_use::{use_raf_fn, UseRafFnCallbackArgs};

use super::use_theme;
use crate::motion::{stagger, wobble};

const GRADIENT_TEXT: &str = "background: linear-gradient(90deg, #ff4c29, #22e299); -webkit-background-clip: text; -webkit-text-fill-color: transparent; background-clip: text; color: transparent;";

/// Endlessly scrolling strip of short phrases.
#[component]
pub fn Marquee(items: Vec<&'static str>) -> impl IntoView {
    let theme = use_theme();
    view! {
        <div class="overflow-hidden py-4 backdrop-blur-md">
            <div class="whitespace-nowrap animate-marquee">
                {items
                    .into_iter()
                    .map(|item| {
                        view! {
                            <span class=move || {
                                format!(
                                    "text-xl font-semibold mx-8 {}",
                                    theme.get().pick("text-white", "text-black"),
                                )
                            }>{item}</span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Gradient text revealed one word at a time.
#[component]
pub fn AnimatedText(text: &'static str) -> impl IntoView {
    view! {
        <div class="flex flex-wrap justify-center">
            {text
                .split(' ')
                .enumerate()
                .map(|(i, word)| {
                    let style = format!(
                        "{GRADIENT_TEXT} animation-delay: {:.1}s;",
                        stagger(i, 0.2),
                    );
                    view! {
                        <span class="mr-2 opacity-0 animate-word-in" style=style>
                            {word}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Large title gently rocking in 3D behind the hero.
#[component]
pub fn Welcome3D(text: &'static str) -> impl IntoView {
    let (tilt, set_tilt) = signal((0.0_f64, 0.0_f64));
    let _ = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        set_tilt.set(wobble(args.timestamp / 1000.0));
    });

    view! {
        <div class="absolute inset-0 -z-10 flex items-center justify-center [perspective:600px]">
            <span
                class="text-8xl font-bold opacity-30 select-none tracking-wide"
                style=move || {
                    let (x, y) = tilt.get();
                    format!("display: inline-block; transform: rotateX({x}rad) rotateY({y}rad);")
                }
            >
                {text}
            </span>
        </div>
    }
}
