use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};

use super::icons::{Icon, IconKind};
use crate::trail::{marker_hue, marker_opacity, CursorSample, TrailBuffer};

/// Cursor-following trail of fading, rotating arrows.
#[component]
pub fn SwirlCursor() -> impl IntoView {
    let trail = RwSignal::new(TrailBuffer::default());
    let (is_client, set_is_client) = signal(false);

    // effects only run in the browser, so the trail stays empty in SSR output
    // and the first hydrated frame matches it
    Effect::new(move |_| set_is_client.set(true));

    // released with this component's owner
    let _ = use_event_listener(use_window(), ev::mousemove, move |ev| {
        let rotation = js_sys::Math::random() * 360.0;
        trail.update(|t| {
            t.push(ev.client_x() as f64, ev.client_y() as f64, rotation);
        });
    });
    log::debug!("cursor trail listener attached");

    view! {
        <Show when=move || is_client.get()>
            <div class="fixed inset-0 pointer-events-none z-50">
                <For
                    each=move || trail.with(|t| t.iter().copied().collect::<Vec<_>>())
                    key=|sample| sample.id
                    children=move |sample| view! { <TrailMarker sample trail /> }
                />
            </div>
        </Show>
    }
}

#[component]
fn TrailMarker(sample: CursorSample, trail: RwSignal<TrailBuffer>) -> impl IntoView {
    let id = sample.id;
    let index = Memo::new(move |_| {
        trail.with(|t| t.iter().position(|s| s.id == id).unwrap_or_default())
    });

    view! {
        <div
            class="absolute trail-marker"
            style=format!(
                "left: {}px; top: {}px; --rotation: {}deg;",
                sample.x,
                sample.y,
                sample.rotation,
            )
        >
            <span
                class="block"
                style=move || {
                    let i = index.get();
                    format!(
                        "opacity: {}; color: hsl({}, 100%, 50%);",
                        marker_opacity(i),
                        marker_hue(i),
                    )
                }
            >
                <Icon kind=IconKind::Pointer />
            </span>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_server_render_has_no_trail() {
        let owner = Owner::new();
        owner.set();
        let html = view! { <SwirlCursor /> }.to_html();
        assert!(!html.contains("pointer-events-none"));
        assert!(!html.contains("trail-marker"));
        assert!(!html.contains(IconKind::Pointer.body()));
    }

    #[test]
    fn test_marker_position_and_falloff() {
        let owner = Owner::new();
        owner.set();
        let mut buffer = TrailBuffer::default();
        buffer.push(10.0, 20.0, 45.0);
        buffer.push(30.0, 40.0, 90.0);
        let oldest = buffer.iter().copied().last().unwrap();
        let trail = RwSignal::new(buffer);

        let html = view! { <TrailMarker sample=oldest trail /> }.to_html();
        assert!(html.contains("left: 10px; top: 20px; --rotation: 45deg;"));
        assert!(html.contains("opacity: 0.95; color: hsl(20, 100%, 50%);"));
    }
}
