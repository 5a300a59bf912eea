use leptos::{html, prelude::*};

use crate::portfolio::{
    nav::Anchor,
    projects::{STATS, TECH_STACK},
    reveal::Stagger,
};

use super::reveal::{use_reveal, Reveal};

#[component]
pub fn About() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_reveal(section_ref);
    let stagger = Stagger::SECTION;

    view! {
        <section
            id=Anchor::About.id()
            node_ref=section_ref
            class="py-20 bg-white dark:bg-gray-900 transition-colors duration-300"
        >
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <Reveal visible stagger index=0>
                        <h2 class="text-4xl md:text-5xl font-bold mb-6">"About Me"</h2>
                    </Reveal>
                    <Reveal visible stagger index=1>
                        <div class="w-24 h-1 bg-gradient-to-r from-primary-500 to-primary-600 mx-auto rounded-full"></div>
                    </Reveal>
                </div>
                <div class="grid lg:grid-cols-2 gap-12 items-start">
                    <Reveal visible stagger index=2>
                        <Biography />
                    </Reveal>
                    <Reveal visible stagger index=3 class="space-y-8">
                        <TechStack visible />
                        <div class="grid grid-cols-3 gap-4">
                            {STATS
                                .iter()
                                .map(|stat| {
                                    view! {
                                        <div class="text-center p-4 bg-white dark:bg-gray-700 rounded-lg shadow-md">
                                            <div class="text-2xl font-bold text-primary-500">
                                                {stat.value}
                                            </div>
                                            <div class="text-sm text-gray-600 dark:text-gray-300">
                                                {stat.label}
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Biography() -> impl IntoView {
    view! {
        <div class="glass rounded-2xl p-8 shadow-lg">
            <h3 class="text-2xl font-semibold mb-6">"My Journey"</h3>
            <div class="space-y-4 text-gray-600 dark:text-gray-300 leading-relaxed">
                <p>
                    "Hello! I'm Kunal, a passionate full-stack developer with over 3 years of experience "
                    "in creating digital solutions that make a difference. My journey in tech started "
                    "with curiosity and has evolved into a deep love for building scalable, user-centric applications."
                </p>
                <p>
                    "I specialize in modern web technologies and have a strong foundation in both "
                    "frontend and backend development. I enjoy working with React, Node.js, and Python "
                    "to create seamless user experiences backed by robust server-side architecture."
                </p>
                <p>
                    "When I'm not coding, you'll find me exploring new technologies, contributing to "
                    "open-source projects, or sharing knowledge with the developer community. I believe "
                    "in continuous learning and staying updated with the latest industry trends."
                </p>
                <p>
                    "I'm always excited to take on new challenges and collaborate with teams that "
                    "share my passion for innovation and excellence."
                </p>
            </div>
        </div>
    }
}

#[component]
fn TechStack(visible: Signal<bool>) -> impl IntoView {
    view! {
        <div class="glass rounded-2xl p-8 shadow-lg">
            <h3 class="text-2xl font-semibold mb-6">"Tech Stack"</h3>
            <div class="grid grid-cols-3 sm:grid-cols-4 gap-4">
                {TECH_STACK
                    .iter()
                    .enumerate()
                    .map(|(i, tech)| {
                        view! {
                            <Reveal
                                visible
                                stagger=Stagger::TECH
                                index=i
                                pop=true
                                class="flex flex-col items-center p-3 rounded-lg bg-white dark:bg-gray-800 shadow hover:-translate-y-1 transition-transform"
                            >
                                <i class=format!("{} {} text-3xl mb-2", tech.icon, tech.color)></i>
                                <span class="text-xs font-medium text-gray-700 dark:text-gray-300">
                                    {tech.name}
                                </span>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
