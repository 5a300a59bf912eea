mod about;
mod contact;
mod embed;
mod footer;
mod hero;
mod navbar;
mod projects;
mod reveal;
mod scroll;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use crate::portfolio::{
    nav::Theme,
    profile::{OWNER, TITLE},
    scheduler::WidgetLoader,
};

use about::About;
use contact::Contact;
use embed::DomEmbed;
use footer::Footer;
use hero::Hero;
use navbar::Navbar;
use projects::Projects;

/// The scheduling embed loader shared by every mount of the contact section.
pub type Scheduler = StoredValue<WidgetLoader<DomEmbed>, LocalStorage>;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[cfg(feature = "hydrate")]
fn use_theme() -> (Signal<Theme>, WriteSignal<Theme>) {
    let (theme, set_theme, _) = use_local_storage::<Theme, JsonSerdeWasmCodec>("theme");
    (theme, set_theme)
}

#[cfg(not(feature = "hydrate"))]
fn use_theme() -> (Signal<Theme>, WriteSignal<Theme>) {
    let (theme, set_theme) = signal(Theme::default());
    (theme.into(), set_theme)
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let (theme, set_theme) = use_theme();
    let scheduler: Scheduler = StoredValue::new_local(WidgetLoader::new(DomEmbed::default()));
    provide_context(scheduler);

    view! {
        <Title formatter=|title| format!("{OWNER} - {title}") />
        <Meta name="description" content=format!("{OWNER}, {TITLE}. Projects, skills and contact.") />

        <Router>
            <div class=move || {
                format!(
                    "{} min-h-screen bg-white dark:bg-gray-900 text-gray-900 dark:text-white transition-colors duration-300",
                    theme.get().class(),
                )
            }>
                <Navbar theme set_theme />
                <main>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <About />
        <Projects />
        <Contact />
    }
}
