mod about;
mod case_studies;
mod contact;
mod experience;
mod hero;
mod navigation;
mod skills;
mod theme;

pub use theme::{try_use_theme, use_theme, ThemeContext, ThemeProvider, ThemeToggle};

use about::About;
use case_studies::CaseStudies;
use contact::Contact;
use experience::Experience;
use hero::Hero;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use navigation::Navigation;
use skills::Skills;

use crate::{content::PROFILE, seo::person_json_ld};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content=PROFILE.tagline />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <script type="application/ld+json" inner_html=person_json_ld().to_string()></script>
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{} - {title}", PROFILE.name) />
        <ThemeProvider>
            <Router>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=PortfolioPage />
                </Routes>
            </Router>
        </ThemeProvider>
    }
}

#[component]
fn PortfolioPage() -> impl IntoView {
    view! {
        <Title text="Product Manager" />
        <PageSections />
    }
}

/// Every panel, once each, top to bottom.
#[component]
fn PageSections() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-white text-gray-900 dark:bg-gray-950 dark:text-gray-100 transition-colors duration-300">
            <Navigation />
            <main>
                <Hero />
                <About />
                <Experience />
                <CaseStudies />
                <Skills />
            </main>
            <Contact />
        </div>
    }
}
