use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

use crate::reveal::{reveal_style, Entrance, Visibility};

/// Tracks whether `target` has ever been in the viewport.
///
/// The observer keeps running after the first hit, but [`Visibility`] ignores
/// everything past the first intersection.
pub fn use_reveal(target: NodeRef<html::Div>) -> Signal<Visibility> {
    let visibility = RwSignal::new(Visibility::NotSeen);
    let in_view = use_element_visibility(target);

    Effect::new(move |_| {
        let intersecting = in_view.get();
        let mut v = visibility.get_untracked();
        if v.observe(intersecting) {
            visibility.set(v);
        }
    });

    visibility.into()
}

/// Wraps `children` in an element that fades and slides in the first time it
/// scrolls into view.
#[component]
pub fn Reveal(
    #[prop(optional)] class: &'static str,
    #[prop(default = Entrance::Rise)] entrance: Entrance,
    #[prop(default = 0.8)] duration: f64,
    #[prop(default = 0.0)] delay: f64,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let visibility = use_reveal(target);

    view! {
        <div
            node_ref=target
            class=class
            style=move || reveal_style(visibility.get(), entrance, duration, delay)
        >
            {children()}
        </div>
    }
}
