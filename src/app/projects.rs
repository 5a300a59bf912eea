use leptos::{html, prelude::*};

use crate::portfolio::{
    nav::Anchor,
    profile::GITHUB_URL,
    projects::{ProjectEntry, PROJECTS},
    reveal::Stagger,
};

use super::reveal::{use_reveal, Reveal};

#[component]
pub fn Projects() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_reveal(section_ref);
    let stagger = Stagger::SECTION;

    view! {
        <section
            id=Anchor::Projects.id()
            node_ref=section_ref
            class="py-20 bg-gray-50 dark:bg-gray-800 transition-colors duration-300"
        >
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <Reveal visible stagger index=0>
                        <h2 class="text-4xl md:text-5xl font-bold mb-6">"My Projects"</h2>
                    </Reveal>
                    <Reveal visible stagger index=1>
                        <div class="w-24 h-1 bg-gradient-to-r from-primary-500 to-primary-600 mx-auto rounded-full mb-6"></div>
                    </Reveal>
                    <Reveal visible stagger index=2>
                        <p class="text-lg text-gray-600 dark:text-gray-300 max-w-3xl mx-auto">
                            "Here are some of my recent projects that showcase my skills in full-stack development, "
                            "UI/UX design, and problem-solving. Each project represents a unique challenge and learning experience."
                        </p>
                    </Reveal>
                </div>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(i, project)| {
                            view! {
                                <Reveal visible stagger=Stagger::CARD index=i pop=true>
                                    <ProjectCard project />
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
                <Reveal visible stagger index=3 class="text-center mt-12">
                    <a
                        href=GITHUB_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="inline-flex items-center space-x-2 bg-gradient-to-r from-primary-500 to-primary-600 text-white px-8 py-4 rounded-lg font-medium shadow-lg hover:shadow-xl hover:scale-105 transition-all duration-200"
                    >
                        <i class="devicon-github-original"></i>
                        <span>"View More Projects"</span>
                    </a>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static ProjectEntry) -> impl IntoView {
    // hide the picture and show the placeholder if it fails to load
    let (broken, set_broken) = signal(false);
    let kind = project.link_kind;

    view! {
        <div class="group relative h-full bg-white dark:bg-gray-900 rounded-2xl shadow-lg overflow-hidden hover:-translate-y-2 transition-transform duration-300">
            {project
                .featured
                .then(|| {
                    view! {
                        <div class="absolute top-4 left-4 z-10 flex items-center space-x-1 bg-yellow-400 text-gray-900 px-3 py-1 rounded-full text-xs font-semibold">
                            <span>"★"</span>
                            <span>"Featured"</span>
                        </div>
                    }
                })}
            <div class="relative h-48 overflow-hidden bg-gray-200 dark:bg-gray-700">
                <img
                    src=project.image
                    alt=project.title
                    class="w-full h-full object-cover group-hover:scale-110 transition-transform duration-300"
                    class:hidden=move || broken.get()
                    on:error=move |_| {
                        log::debug!("project image {} failed to load", project.image);
                        set_broken.set(true);
                    }
                />
                <div
                    class="w-full h-full items-center justify-center text-5xl text-primary-500"
                    class:hidden=move || !broken.get()
                    class:flex=move || broken.get()
                >
                    "</>"
                </div>
                <a
                    href=project.link
                    target="_blank"
                    rel="noopener noreferrer"
                    class="absolute inset-0 flex items-center justify-center bg-black/50 opacity-0 group-hover:opacity-100 transition-opacity duration-300 text-white text-3xl"
                    aria-label=kind.label()
                >
                    <i class=kind.icon()></i>
                </a>
            </div>
            <div class="p-6">
                <h3 class="text-xl font-semibold mb-3">{project.title}</h3>
                <p class="text-gray-600 dark:text-gray-300 mb-4 text-sm leading-relaxed">
                    {project.description}
                </p>
                <div class="flex flex-wrap gap-2 mb-6">
                    {project
                        .technologies
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="px-3 py-1 bg-primary-500/10 text-primary-600 dark:text-primary-400 rounded-full text-xs font-medium">
                                    {*tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <a
                    href=project.link
                    target="_blank"
                    rel="noopener noreferrer"
                    class="inline-flex items-center space-x-2 text-primary-600 dark:text-primary-400 font-medium hover:underline"
                >
                    <i class=kind.icon()></i>
                    <span>{kind.label()}</span>
                </a>
            </div>
        </div>
    }
}
