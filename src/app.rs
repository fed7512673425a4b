mod about;
mod contact;
mod experience;
mod hero;
mod motion;
mod navbar;
mod projects;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::OWNER_NAME;
use crate::theme::{provide_theme, use_theme, Theme};

use about::About;
use contact::Contact;
use experience::Experience;
use hero::Hero;
use navbar::Navbar;
use projects::Projects;
use skills::Skills;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="preconnect" href="https://fonts.googleapis.com" />
                <link
                    rel="stylesheet"
                    href="https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&family=Fira+Code:wght@400;500&display=swap"
                />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let theme = provide_theme(Theme::default());
    let palette = theme.palette();
    let is_dark = theme.is_dark();

    view! {
        <Title formatter=|title| format!("{OWNER_NAME} - {title}") />

        <Router>
            <div
                class="app-container min-h-screen"
                class:dark=move || is_dark.get()
                style=move || palette.get().css_variables()
            >
                <ThemeToggle />
                <Navbar />
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=Portfolio />
                </Routes>
            </div>
        </Router>
    }
}

/// Every section, in page order.
#[component]
fn Portfolio() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <main>
            <Hero />
            <About />
            <Experience />
            <Projects />
            <Skills />
            <Contact />
        </main>
    }
}

#[component]
fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();
    let is_dark = theme.is_dark();

    view! {
        <button
            class="theme-toggle fixed top-8 right-8 z-[1000] flex items-center gap-2 p-3 rounded-xl font-medium"
            aria-label="Toggle color theme"
            on:click=move |_| theme.toggle()
        >
            {move || if is_dark.get() { "🌞 Light" } else { "🌙 Dark" }}
        </button>
    }
}
