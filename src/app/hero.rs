use leptos::prelude::*;

use crate::portfolio::{
    nav::Anchor,
    profile::{GITHUB_URL, LINKEDIN_URL, OWNER, RESUME_DOWNLOAD_NAME, RESUME_PATH, TITLE},
    reveal::Stagger,
};

use super::{
    reveal::{use_reveal_on_mount, Reveal},
    scroll::scroll_to_anchor,
};

#[component]
pub fn Hero() -> impl IntoView {
    // the hero is on screen at load, so it plays straight away
    let visible = use_reveal_on_mount();
    let stagger = Stagger::HERO;

    view! {
        <section
            id=Anchor::Home.id()
            class="min-h-screen flex items-center justify-center relative overflow-hidden bg-gradient-to-br from-gray-50 to-gray-100 dark:from-gray-900 dark:to-gray-800 transition-colors duration-300"
        >
            <div class="absolute inset-0 overflow-hidden pointer-events-none">
                <div class="absolute -top-40 -right-40 w-80 h-80 bg-primary-500/20 rounded-full blur-3xl"></div>
                <div class="absolute -bottom-40 -left-40 w-80 h-80 bg-primary-600/20 rounded-full blur-3xl"></div>
            </div>
            <div class="relative z-10 max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                <Reveal visible stagger index=0 class="mb-6">
                    <span class="inline-block px-4 py-2 bg-primary-500/10 text-primary-600 dark:text-primary-400 rounded-full text-sm font-medium">
                        "👋 Welcome to my portfolio"
                    </span>
                </Reveal>
                <Reveal visible stagger index=1>
                    <h1 class="text-5xl md:text-7xl font-bold mb-6">
                        <span class="bg-gradient-to-r from-primary-500 to-primary-700 bg-clip-text text-transparent">
                            {OWNER}
                        </span>
                    </h1>
                </Reveal>
                <Reveal visible stagger index=2>
                    <h2 class="text-2xl md:text-3xl font-semibold text-gray-700 dark:text-gray-300 mb-8">
                        {TITLE}
                    </h2>
                </Reveal>
                <Reveal visible stagger index=3>
                    <p class="text-lg text-gray-600 dark:text-gray-400 max-w-3xl mx-auto mb-12 leading-relaxed">
                        "I'm a passionate full-stack developer with expertise in modern web technologies. "
                        "I love creating beautiful, functional, and user-friendly applications that solve "
                        "real-world problems. Let's build something amazing together!"
                    </p>
                </Reveal>
                <Reveal
                    visible
                    stagger
                    index=4
                    class="flex flex-col sm:flex-row gap-4 justify-center items-center mb-16"
                >
                    <a
                        href=GITHUB_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex items-center space-x-2 bg-gray-900 dark:bg-white text-white dark:text-gray-900 px-8 py-4 rounded-lg font-medium hover:scale-105 transition-transform duration-200"
                    >
                        <i class="devicon-github-original"></i>
                        <span>"View GitHub"</span>
                    </a>
                    <a
                        href=LINKEDIN_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex items-center space-x-2 bg-blue-600 text-white px-8 py-4 rounded-lg font-medium hover:scale-105 transition-transform duration-200"
                    >
                        <i class="devicon-linkedin-plain"></i>
                        <span>"LinkedIn"</span>
                    </a>
                    <a
                        href=RESUME_PATH
                        download=RESUME_DOWNLOAD_NAME
                        class="flex items-center space-x-2 border-2 border-primary-500 text-primary-600 dark:text-primary-400 px-8 py-4 rounded-lg font-medium hover:bg-primary-500 hover:text-white transition-colors duration-200"
                    >
                        <span aria-hidden="true">"⬇"</span>
                        <span>"Resume"</span>
                    </a>
                </Reveal>
                <Reveal visible stagger index=5 class="flex flex-col items-center">
                    <button
                        on:click=move |_| scroll_to_anchor(Anchor::About)
                        class="p-3 rounded-full bg-white/50 dark:bg-gray-800/50 text-gray-700 dark:text-gray-300 animate-bounce"
                        aria-label="Scroll to about"
                    >
                        "↓"
                    </button>
                    <span class="mt-2 text-sm text-gray-500 dark:text-gray-400">"Scroll to explore"</span>
                </Reveal>
            </div>
        </section>
    }
}
