use leptos::{either::Either, prelude::*};
use leptos_use::use_window_scroll;

use super::icons::{Icon, IconKind};
use super::use_theme;
use crate::content::{anchor_for, BRAND, NAV_ITEMS};
use crate::scroll::is_scrolled;

#[component]
pub fn Navbar() -> impl IntoView {
    let theme = use_theme();
    let (is_open, set_is_open) = signal(false);
    let (_, scroll_y) = use_window_scroll();
    let scrolled = Memo::new(move |_| is_scrolled(scroll_y.get()));

    let toggle_theme = move |_| {
        theme.update(|t| t.toggle());
        log::debug!("theme set to {}", theme.get_untracked());
    };

    view! {
        <header class=move || {
            format!(
                "fixed top-1 left-0 right-0 z-50 transition-all duration-300 animate-drop-in {}",
                theme.get().header_class(scrolled.get()),
            )
        }>
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16 sm:h-20">
                    <div class="flex-shrink-0 animate-fade-in [animation-delay:200ms]">
                        <a href="#" class="text-xl sm:text-2xl font-bold font-speedbeast">
                            {BRAND}
                        </a>
                    </div>
                    <div class="hidden md:block">
                        <div class="ml-10 flex items-center space-x-4">
                            {NAV_ITEMS
                                .iter()
                                .map(|item| {
                                    view! {
                                        <a
                                            href=anchor_for(item)
                                            class="text-sm font-medium hover:text-gray-300 transition-all duration-300 hover:scale-105 active:scale-95"
                                        >
                                            {*item}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="flex items-center">
                        <button
                            on:click=toggle_theme
                            aria-label="Toggle theme"
                            class=move || {
                                format!(
                                    "p-2 rounded-full transition-all duration-300 mr-2 hover:scale-110 active:scale-90 {}",
                                    theme.get().pick("bg-gray-800 text-white", "bg-gray-200 text-gray-800"),
                                )
                            }
                        >
                            {move || {
                                if theme.get().is_dark() {
                                    Either::Left(view! { <Icon kind=IconKind::Sun class="w-5 h-5" /> })
                                } else {
                                    Either::Right(view! { <Icon kind=IconKind::Moon class="w-5 h-5" /> })
                                }
                            }}
                        </button>
                        <button
                            on:click=move |_| set_is_open.update(|open| *open = !*open)
                            aria-label="Toggle menu"
                            class="md:hidden p-2 rounded-full transition-all duration-300 hover:scale-110 active:scale-90"
                        >
                            {move || {
                                if is_open.get() {
                                    Either::Left(view! { <Icon kind=IconKind::Close class="w-6 h-6" /> })
                                } else {
                                    Either::Right(view! { <Icon kind=IconKind::Menu class="w-6 h-6" /> })
                                }
                            }}
                        </button>
                    </div>
                </div>
            </div>
            <Show when=move || is_open.get()>
                <div class="md:hidden animate-expand">
                    <div class=move || {
                        format!(
                            "px-2 pt-2 pb-3 space-y-1 sm:px-3 {}",
                            theme.get().pick("bg-black", "bg-white"),
                        )
                    }>
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                view! {
                                    <a
                                        href=anchor_for(item)
                                        on:click=move |_| set_is_open.set(false)
                                        class="block px-3 py-2 rounded-md font-speedbeast text-base font-medium hover:bg-gray-700 hover:text-white transition-all duration-300 hover:scale-105 active:scale-95"
                                    >
                                        {*item}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </Show>
        </header>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::theme::ThemeMode;

    fn render(mode: ThemeMode) -> String {
        let owner = Owner::new();
        owner.set();
        provide_context(RwSignal::new(mode));
        view! { <Navbar /> }.to_html()
    }

    #[test]
    fn test_theme_button_icon_follows_mode() {
        let dark = render(ThemeMode::Dark);
        assert!(dark.contains(IconKind::Sun.body()));
        assert!(!dark.contains(IconKind::Moon.body()));

        let light = render(ThemeMode::Light);
        assert!(light.contains(IconKind::Moon.body()));
        assert!(!light.contains(IconKind::Sun.body()));
    }

    #[test]
    fn test_anchor_links_in_order() {
        let html = render(ThemeMode::default());
        let anchors = ["#about", "#skills", "#projects", "#experience", "#education", "#contact"];
        let positions = anchors
            .iter()
            .map(|a| {
                let attr = format!(r#"href="{a}""#);
                assert_eq!(html.matches(&attr).count(), 1, "{a} should render once");
                html.find(&attr).unwrap_or_default()
            })
            .collect::<Vec<_>>();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(NAV_ITEMS.len(), anchors.len());
    }

    #[test]
    fn test_mobile_menu_starts_closed() {
        let html = render(ThemeMode::default());
        assert!(!html.contains("animate-expand"));
        assert!(html.contains(IconKind::Menu.body()));
        assert!(!html.contains(IconKind::Close.body()));
    }

    #[test]
    fn test_header_tint_at_top_of_page() {
        let html = render(ThemeMode::Light);
        assert!(html.contains(ThemeMode::Light.header_class(false)));
        assert!(!html.contains("shadow-md"));
    }
}
