use leptos::{ev::SubmitEvent, prelude::*};

use super::icons::{Icon, IconKind};
use super::marquee::AnimatedText;
use super::reveal::Reveal;
use super::use_theme;
use crate::content::{OWNER_NAME, SOCIAL_LINKS};

/// Contact form. It is display-only: submitting keeps the reader on the page
/// and sends nothing anywhere.
#[component]
pub fn ContactSection() -> impl IntoView {
    let theme = use_theme();
    let field_class = move || {
        format!(
            "w-full p-3 rounded-lg focus:outline-none transition-colors {}",
            theme.get().input_class(),
        )
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        log::debug!("contact form submitted; no handler is wired");
    };

    view! {
        <section id="contact">
            <Reveal class="min-h-screen flex items-center justify-center p-8">
                <div class="max-w-3xl w-full">
                    <h2 class="text-4xl font-bold mb-8 text-center font-geist">
                        <AnimatedText text="Get in Touch" />
                    </h2>
                    <form class="space-y-6" on:submit=on_submit>
                        <div>
                            <label for="name" class="block text-xl mb-2">
                                "Name"
                            </label>
                            <input type="text" id="name" name="name" class=field_class />
                        </div>
                        <div>
                            <label for="email" class="block text-xl mb-2">
                                "Email"
                            </label>
                            <input type="email" id="email" name="email" class=field_class />
                        </div>
                        <div>
                            <label for="message" class="block text-xl mb-2">
                                "Message"
                            </label>
                            <textarea id="message" name="message" rows="4" class=field_class></textarea>
                        </div>
                        <button
                            type="submit"
                            class=move || {
                                format!(
                                    "w-full p-4 text-xl font-bold rounded-lg transition-all hover:scale-105 active:scale-95 {}",
                                    theme.get().button_class(),
                                )
                            }
                        >
                            "Send Message"
                        </button>
                    </form>
                </div>
            </Reveal>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-8 text-center font-geist">
            <p>{format!("© 2023 {OWNER_NAME}. Crafting innovative web solutions.")}</p>
            <div class="flex justify-center space-x-6 mt-4">
                {SOCIAL_LINKS
                    .iter()
                    .filter_map(|link| IconKind::from_name(link.icon).map(|kind| (link, kind)))
                    .map(|(link, kind)| {
                        view! {
                            <a
                                href=link.href
                                aria-label=link.label
                                class="transition-transform hover:scale-110"
                            >
                                <Icon kind class="w-6 h-6" />
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </footer>
    }
}
