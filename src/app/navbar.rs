use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};

use crate::portfolio::{
    nav::{MobileMenu, NavItem, ScrollState, Theme, NAV_ITEMS},
    profile::OWNER,
};

use super::scroll::{scroll_offset, scroll_to_anchor};

#[component]
pub fn Navbar(theme: Signal<Theme>, set_theme: WriteSignal<Theme>) -> impl IntoView {
    let (scroll, set_scroll) = signal(ScrollState::default());
    let menu = RwSignal::new(MobileMenu::default());

    // removed again when the navbar is cleaned up
    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        set_scroll.set(ScrollState::from_offset(scroll_offset()));
    });
    // pick up a restored scroll position on load
    Effect::new(move |_| set_scroll.set(ScrollState::from_offset(scroll_offset())));

    let select = move |item: &'static NavItem| {
        if let Some(anchor) = menu.try_update(|m| m.select(item)) {
            scroll_to_anchor(anchor);
        }
    };
    let toggle_theme = move |_: ev::MouseEvent| set_theme.update(|t| *t = t.toggle());

    view! {
        <nav class=move || {
            if scroll.get().elevated {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-white/80 dark:bg-gray-900/80 backdrop-blur-md shadow-lg"
            } else {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-transparent"
            }
        }>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center py-4">
                    <span class="text-xl font-bold bg-gradient-to-r from-primary-500 to-primary-600 bg-clip-text text-transparent hover:scale-105 transition-transform">
                        {OWNER}
                    </span>
                    <div class="hidden md:flex items-center space-x-8">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                view! {
                                    <button
                                        on:click=move |_| select(item)
                                        class="text-gray-700 dark:text-gray-300 hover:text-primary-500 dark:hover:text-primary-400 font-medium transition-colors duration-200"
                                    >
                                        {item.name}
                                    </button>
                                }
                            })
                            .collect_view()}
                        <ThemeToggle theme on_toggle=toggle_theme />
                    </div>
                    <div class="md:hidden flex items-center space-x-4">
                        <ThemeToggle theme on_toggle=toggle_theme />
                        <button
                            on:click=move |_| menu.update(MobileMenu::toggle)
                            class="p-2 rounded-lg bg-gray-100 dark:bg-gray-800 text-gray-700 dark:text-gray-300"
                            aria-label="Toggle menu"
                            aria-expanded=move || menu.get().open.to_string()
                        >
                            {move || if menu.get().open { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>
                <div class="md:hidden menu-panel" class:open=move || menu.get().open>
                    <div class="overflow-hidden">
                        <div class="py-4 space-y-4">
                            {NAV_ITEMS
                                .iter()
                                .map(|item| {
                                    view! {
                                        <button
                                            on:click=move |_| select(item)
                                            class="block w-full text-left px-4 py-2 text-gray-700 dark:text-gray-300 hover:text-primary-500 dark:hover:text-primary-400 hover:bg-gray-100 dark:hover:bg-gray-800 rounded-lg font-medium transition-colors duration-200"
                                        >
                                            {item.name}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[component]
fn ThemeToggle<F>(theme: Signal<Theme>, on_toggle: F) -> impl IntoView
where
    F: Fn(ev::MouseEvent) + 'static,
{
    view! {
        <button
            on:click=on_toggle
            class="p-2 rounded-lg bg-gray-100 dark:bg-gray-800 text-gray-700 dark:text-gray-300 hover:bg-gray-200 dark:hover:bg-gray-700 transition-colors duration-200"
            aria-label="Toggle dark mode"
        >
            {move || theme.get().toggle_icon()}
        </button>
    }
}
