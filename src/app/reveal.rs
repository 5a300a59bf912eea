use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use crate::portfolio::reveal::{RevealLatch, Stagger, VISIBLE_THRESHOLD};

/// Latches true the first time `target` is at least 10% on screen, then stops observing.
pub fn use_reveal(target: NodeRef<html::Section>) -> Signal<bool> {
    let latch = StoredValue::new(RevealLatch::default());
    let (visible, set_visible) = signal(false);

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries: Vec<web_sys::IntersectionObserverEntry>, _| {
            let fired = entries.iter().any(|entry| {
                latch
                    .try_update_value(|l| {
                        l.observe(entry.is_intersecting(), entry.intersection_ratio())
                    })
                    .unwrap_or(false)
            });
            if fired {
                set_visible.set(true);
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![VISIBLE_THRESHOLD]),
    );

    Effect::new(move |_| {
        if visible.get() {
            stop();
        }
    });

    visible.into()
}

/// Shown as soon as the component has mounted in the browser.
pub fn use_reveal_on_mount() -> Signal<bool> {
    let (visible, set_visible) = signal(false);
    Effect::new(move |_| {
        // wait a frame so the hidden state is painted and the transition runs
        request_animation_frame(move || set_visible.set(true));
    });
    visible.into()
}

/// Wrapper that fades its children in with the `index`th delay of `stagger`.
#[component]
pub fn Reveal(
    #[prop(into)] visible: Signal<bool>,
    stagger: Stagger,
    index: usize,
    #[prop(optional, into)] class: String,
    #[prop(optional)] pop: bool,
    children: Children,
) -> impl IntoView {
    let base = if pop { "reveal-pop" } else { "reveal" };
    view! {
        <div
            class=format!("{base} {class}")
            class:revealed=move || visible.get()
            style=stagger.style(index)
        >
            {children()}
        </div>
    }
}
