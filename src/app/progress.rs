use leptos::prelude::*;
use leptos_use::{use_raf_fn, use_window_scroll, utils::Pausable, UseRafFnCallbackArgs};

use super::use_theme;
use crate::motion::Spring;
use crate::scroll::scroll_progress;

fn document_progress(scroll_y: f64) -> f64 {
    let scroll_height = document()
        .document_element()
        .map(|el| el.scroll_height() as f64)
        .unwrap_or_default();
    let viewport_height = window()
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or_default();
    scroll_progress(scroll_y, scroll_height, viewport_height)
}

/// Thin bar across the top of the page tracking how far down the reader is.
#[component]
pub fn ScrollProgress() -> impl IntoView {
    let theme = use_theme();
    let (_, scroll_y) = use_window_scroll();
    let spring = StoredValue::new(Spring::default());
    let (scale, set_scale) = signal(0.0_f64);

    let (resting, set_resting) = signal(false);

    // the callback only ever runs in the browser
    let Pausable { pause, resume, .. } = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        let target = document_progress(scroll_y.get_untracked());
        spring.update_value(|s| {
            s.step(target, args.delta / 1000.0);
        });
        let pos = spring.with_value(Spring::position);
        if pos != scale.get_untracked() {
            set_scale.set(pos);
        }
        if spring.with_value(|s| s.is_resting_at(target)) {
            set_resting.set(true);
        }
    });

    // idle while the bar sits on its target; any scroll wakes the loop
    Effect::watch(
        move || resting.get(),
        move |&rest, _, _| {
            if rest {
                pause();
            }
        },
        false,
    );
    Effect::watch(
        move || scroll_y.get(),
        move |_, _, _| {
            set_resting.set(false);
            resume();
        },
        false,
    );

    view! {
        <div
            class=move || {
                format!(
                    "fixed top-0 left-0 right-0 h-1 origin-left z-50 {}",
                    theme.get().accent_class(),
                )
            }
            style=move || format!("transform: scaleX({});", scale.get())
        ></div>
    }
}
