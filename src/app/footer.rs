use leptos::prelude::*;

use crate::portfolio::{
    nav::NAV_ITEMS,
    profile::{copyright_year, social_links, FIRST_NAME, OWNER, RESUME_DOWNLOAD_NAME, RESUME_PATH, TAGLINE},
};

use super::scroll::scroll_to_top;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-white dark:bg-gray-900 border-t border-gray-200 dark:border-gray-800 transition-colors duration-300">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
                <div class="grid md:grid-cols-3 gap-8 items-center">
                    <div class="text-center md:text-left">
                        <span class="text-2xl font-bold bg-gradient-to-r from-primary-500 to-primary-600 bg-clip-text text-transparent">
                            {OWNER}
                        </span>
                        <p class="mt-2 text-gray-600 dark:text-gray-400 text-sm">{TAGLINE}</p>
                    </div>
                    <div class="flex justify-center space-x-6">
                        {social_links()
                            .into_iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.url
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label=link.name
                                        class=format!(
                                            "text-gray-600 dark:text-gray-400 text-xl hover:scale-110 transition-all {}",
                                            link.hover_class,
                                        )
                                    >
                                        <i class=link.icon></i>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="flex justify-center md:justify-end">
                        <button
                            on:click=move |_| scroll_to_top()
                            class="flex items-center space-x-2 px-4 py-2 rounded-lg bg-gray-100 dark:bg-gray-800 text-gray-700 dark:text-gray-300 hover:bg-primary-500 hover:text-white transition-colors duration-200"
                        >
                            <span>"Back to Top"</span>
                            <span aria-hidden="true">"↑"</span>
                        </button>
                    </div>
                </div>
                <div class="mt-8 pt-8 border-t border-gray-200 dark:border-gray-800 flex flex-col md:flex-row justify-between items-center gap-4 text-sm text-gray-600 dark:text-gray-400">
                    <span>{format!("© {} {OWNER}. All rights reserved.", copyright_year())}</span>
                    <span class="font-medium">{format!("Made by {FIRST_NAME} 👨‍💻")}</span>
                </div>
                <div class="mt-6 flex flex-wrap justify-center gap-6 text-sm">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            view! {
                                <a
                                    href=item.anchor.href()
                                    class="text-gray-600 dark:text-gray-400 hover:text-primary-500 transition-colors"
                                >
                                    {item.name}
                                </a>
                            }
                        })
                        .collect_view()}
                    <a
                        href=RESUME_PATH
                        download=RESUME_DOWNLOAD_NAME
                        class="text-gray-600 dark:text-gray-400 hover:text-primary-500 transition-colors"
                    >
                        "Resume"
                    </a>
                </div>
            </div>
        </footer>
    }
}
