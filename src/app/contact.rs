use std::time::Duration;

use leptos::{either::Either, ev::SubmitEvent, html, prelude::*, task::spawn_local};

use crate::portfolio::{
    contact::{
        run_submission, ContactState, Field, LocalFuture, SimulatedSubmitter, StateHandle,
        SubmitPhase, SUBMIT_DELAY,
    },
    nav::Anchor,
    profile::{EMAIL, LOCATION, PHONE, SCHEDULING_PAGE_URL},
    reveal::Stagger,
    scheduler::{Mount, SchedulerConfig},
};

use super::{
    reveal::{use_reveal, Reveal},
    Scheduler,
};

#[cfg(feature = "hydrate")]
fn sleep(d: Duration) -> LocalFuture<()> {
    Box::pin(gloo_timers::future::sleep(d))
}

#[cfg(not(feature = "hydrate"))]
fn sleep(d: Duration) -> LocalFuture<()> {
    Box::pin(tokio::time::sleep(d))
}

#[component]
pub fn Contact() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_reveal(section_ref);
    let stagger = Stagger::SECTION;

    view! {
        <section
            id=Anchor::Contact.id()
            node_ref=section_ref
            class="py-20 bg-gray-50 dark:bg-gray-800 transition-colors duration-300"
        >
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <Reveal visible stagger index=0>
                        <h2 class="text-4xl md:text-5xl font-bold mb-6">"Get In Touch"</h2>
                    </Reveal>
                    <Reveal visible stagger index=1>
                        <div class="w-24 h-1 bg-gradient-to-r from-primary-500 to-primary-600 mx-auto rounded-full mb-6"></div>
                    </Reveal>
                    <Reveal visible stagger index=2>
                        <p class="text-lg text-gray-600 dark:text-gray-300 max-w-3xl mx-auto">
                            "I'm always open to discussing new opportunities, interesting projects, or just having a chat about technology. "
                            "Feel free to reach out through the form below or schedule a meeting!"
                        </p>
                    </Reveal>
                </div>
                <div class="grid lg:grid-cols-2 gap-12">
                    <Reveal visible stagger index=3 class="space-y-8">
                        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-1 xl:grid-cols-2 gap-6">
                            <InfoCard icon="✉" heading="Email" value=EMAIL />
                            <InfoCard icon="☎" heading="Phone" value=PHONE />
                            <InfoCard
                                icon="⌖"
                                heading="Location"
                                value=LOCATION
                                class="col-span-1 sm:col-span-2 lg:col-span-1 xl:col-span-2"
                            />
                        </div>
                        <ContactForm />
                    </Reveal>
                    <Reveal visible stagger index=4 class="space-y-8">
                        <Scheduling />
                        <div class="glass rounded-xl p-6 shadow-lg text-center">
                            <div class="flex items-center justify-center space-x-2 text-primary-500 mb-2">
                                <div class="w-3 h-3 bg-green-500 rounded-full animate-pulse"></div>
                                <span class="font-medium">"Quick Response"</span>
                            </div>
                            <p class="text-gray-600 dark:text-gray-300 text-sm">
                                "I typically respond within 24 hours"
                            </p>
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[component]
fn InfoCard(
    icon: &'static str,
    heading: &'static str,
    value: &'static str,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!(
            "glass rounded-xl p-6 shadow-lg hover:-translate-y-1 transition-transform {class}",
        )>
            <div class="flex items-center space-x-4">
                <div class="w-12 h-12 bg-primary-500 rounded-lg flex items-center justify-center flex-shrink-0 text-white text-xl">
                    {icon}
                </div>
                <div class="flex-1 min-w-0">
                    <h3 class="font-semibold">{heading}</h3>
                    <p class="text-gray-600 dark:text-gray-300 break-words">{value}</p>
                </div>
            </div>
        </div>
    }
}

/// The form's signal; disposed once the section unmounts.
#[derive(Clone, Copy)]
struct FormState(RwSignal<ContactState>);

impl StateHandle for FormState {
    fn apply<R>(&self, f: impl FnOnce(&mut ContactState) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}

const INPUT_CLASS: &str = "w-full px-4 py-3 bg-white dark:bg-gray-700 border border-gray-300 dark:border-gray-600 rounded-lg focus:ring-2 focus:ring-primary-500 focus:border-transparent transition-colors duration-200";

#[component]
fn ContactForm() -> impl IntoView {
    let state = RwSignal::new(ContactState::default());
    let submitter = SimulatedSubmitter::new(SUBMIT_DELAY, sleep);

    let value_of = move |field: Field| move || state.with(|s| s.form.get(field).to_string());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let (ticket, form) = match state.try_update(|s| s.begin_submit().map(|t| (t, s.form.clone()))) {
            Some(Ok(started)) => started,
            Some(Err(e)) => {
                log::debug!("ignoring submit: {e}");
                return;
            }
            None => return,
        };
        spawn_local(async move {
            run_submission(&submitter, sleep, FormState(state), ticket, form).await;
        });
    };

    let submitting = move || state.with(|s| s.phase() == SubmitPhase::Submitting);

    view! {
        <div class="glass rounded-2xl p-8 shadow-lg">
            <h3 class="text-2xl font-semibold mb-6 flex items-center space-x-2">
                <span class="text-primary-500">"✎"</span>
                <span>"Send a Message"</span>
            </h3>
            <form on:submit=on_submit class="space-y-6">
                <div>
                    <label for="name" class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2">
                        "Name"
                    </label>
                    <input
                        type="text"
                        id="name"
                        name="name"
                        required
                        class=INPUT_CLASS
                        placeholder="Your full name"
                        prop:value=value_of(Field::Name)
                        on:input=move |ev| state.update(|s| s.form.set(Field::Name, event_target_value(&ev)))
                    />
                </div>
                <div>
                    <label for="email" class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2">
                        "Email"
                    </label>
                    <input
                        type="email"
                        id="email"
                        name="email"
                        required
                        class=INPUT_CLASS
                        placeholder="your.email@example.com"
                        prop:value=value_of(Field::Email)
                        on:input=move |ev| state.update(|s| s.form.set(Field::Email, event_target_value(&ev)))
                    />
                </div>
                <div>
                    <label for="message" class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2">
                        "Message"
                    </label>
                    <textarea
                        id="message"
                        name="message"
                        required
                        rows=5
                        class=format!("{INPUT_CLASS} resize-none")
                        placeholder="Tell me about your project or just say hello!"
                        prop:value=value_of(Field::Message)
                        on:input=move |ev| state.update(|s| s.form.set(Field::Message, event_target_value(&ev)))
                    ></textarea>
                </div>
                <button
                    type="submit"
                    disabled=submitting
                    class=move || {
                        if submitting() {
                            "w-full py-3 px-6 rounded-lg font-medium flex items-center justify-center space-x-2 bg-gray-400 cursor-not-allowed"
                        } else {
                            "w-full py-3 px-6 rounded-lg font-medium flex items-center justify-center space-x-2 bg-gradient-to-r from-primary-500 to-primary-600 hover:from-primary-600 hover:to-primary-700 text-white shadow-lg hover:shadow-xl transition-all duration-200"
                        }
                    }
                >
                    {move || {
                        if submitting() {
                            Either::Left(
                                view! {
                                    <div class="w-6 h-6 border-2 border-white border-t-transparent rounded-full animate-spin"></div>
                                },
                            )
                        } else {
                            Either::Right(
                                view! {
                                    <span>"➤"</span>
                                    <span>"Send Message"</span>
                                },
                            )
                        }
                    }}
                </button>
                {move || {
                    let phase = state.with(|s| s.phase());
                    phase
                        .notice()
                        .map(|text| {
                            let class = if phase == SubmitPhase::Succeeded {
                                "text-center py-2 px-4 rounded-lg bg-green-100 dark:bg-green-900/30 text-green-600 dark:text-green-400"
                            } else {
                                "text-center py-2 px-4 rounded-lg bg-red-100 dark:bg-red-900/30 text-red-600 dark:text-red-400"
                            };
                            view! {
                                <div class=class role="status">
                                    {text}
                                </div>
                            }
                        })
                }}
            </form>
        </div>
    }
}

#[component]
fn Scheduling() -> impl IntoView {
    let scheduler = expect_context::<Scheduler>();
    let config = SchedulerConfig::default();
    let container_id = config.container_id.clone();
    let namespace = config.namespace.clone();

    // effects only run in the browser, after the container is in the DOM
    Effect::new(move |_| match scheduler.try_update_value(|l| l.mount(&config)) {
        Some(Ok(Mount::Pending(loaded))) => spawn_local(async move {
            let res = loaded.await;
            // the loader outlives this section; queued calls from an unmounted
            // section were already dropped in `unmount`
            scheduler.try_update_value(|l| match res {
                Ok(()) => {
                    let replayed = l.script_loaded();
                    log::debug!("scheduling embed ready, replayed {replayed} calls");
                }
                Err(e) => l.script_failed(e),
            });
        }),
        Some(Ok(Mount::Ready | Mount::Queued)) | None => {}
        Some(Err(e)) => log::warn!("scheduling embed unavailable: {e}"),
    });

    on_cleanup(move || {
        scheduler.try_update_value(|l| l.unmount(&namespace));
    });

    view! {
        <div class="glass rounded-2xl p-8 shadow-lg">
            <h3 class="text-2xl font-semibold mb-6 flex items-center space-x-2">
                <span class="text-primary-500">"📅"</span>
                <span>"Schedule a Meeting"</span>
            </h3>
            <p class="text-gray-600 dark:text-gray-300 mb-6">
                "Prefer to have a direct conversation? Schedule a 30-minute call to discuss your project, "
                "collaboration opportunities, or anything tech-related!"
            </p>
            <div
                id=container_id
                class="w-full h-[700px] overflow-scroll rounded-xl border border-gray-200 dark:border-gray-600 bg-white dark:bg-gray-800"
            ></div>
            <div class="mt-4 text-center">
                <p class="text-gray-600 dark:text-gray-300 mb-4">"Can't see the calendar?"</p>
                <a
                    href=SCHEDULING_PAGE_URL
                    target="_blank"
                    rel="noopener noreferrer"
                    class="bg-primary-500 text-white px-6 py-3 rounded-lg font-medium hover:bg-primary-600 transition-colors duration-200 inline-flex items-center space-x-2"
                >
                    <span>"📅"</span>
                    <span>"Schedule 30 Min Meeting"</span>
                </a>
            </div>
        </div>
    }
}
