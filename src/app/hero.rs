use leptos::prelude::*;

use super::theme::use_theme;
use crate::{
    content::{employer_marks, PROFILE},
    section::Section,
};

#[component]
pub fn Hero() -> impl IntoView {
    let theme = use_theme();
    let badge_class = move || {
        if theme.is_dark() {
            "absolute -bottom-4 -right-4 bg-blue-500 text-gray-950 p-4 rounded-xl shadow-lg"
        } else {
            "absolute -bottom-4 -right-4 bg-blue-600 text-white p-4 rounded-xl shadow-lg"
        }
    };

    view! {
        <section
            id=Section::Home.id()
            class="min-h-screen flex flex-col items-center justify-center pt-20 bg-white dark:bg-gray-950"
        >
            <div class="max-w-6xl mx-auto px-6 py-12">
                <div class="grid lg:grid-cols-2 gap-12 items-center">
                    <div class="space-y-6 fade-in-up">
                        <div class="space-y-2">
                            <p class="text-sm font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wide">
                                "Available for opportunities"
                            </p>
                            <h1 class="text-4xl md:text-6xl font-bold text-gray-900 dark:text-white leading-tight">
                                "Hi, I'm "
                                <span class="block text-blue-600 dark:text-blue-400">
                                    {PROFILE.first_name}
                                </span>
                            </h1>
                            <p class="text-xl md:text-2xl text-gray-600 dark:text-gray-300 font-light">
                                {PROFILE.headline}
                            </p>
                        </div>
                        <p class="text-lg text-gray-700 dark:text-gray-300 leading-relaxed max-w-lg">
                            {PROFILE.tagline}
                        </p>
                        <div class="flex flex-col sm:flex-row gap-4 pt-4">
                            <a
                                href=format!("#{}", Section::CaseStudies.id())
                                class="bg-gray-900 text-white dark:bg-white dark:text-gray-900 px-6 py-3 rounded-lg hover:bg-gray-800 dark:hover:bg-gray-200 transition-colors text-center font-medium"
                            >
                                "View Case Studies"
                            </a>
                            <a
                                href=PROFILE.resume
                                class="border border-gray-300 dark:border-gray-700 text-gray-700 dark:text-gray-200 px-6 py-3 rounded-lg hover:bg-gray-50 dark:hover:bg-gray-900 transition-colors text-center font-medium"
                            >
                                "Download Resume"
                            </a>
                        </div>
                    </div>
                    <div class="flex justify-center lg:justify-end">
                        <div class="relative">
                            <img
                                src=PROFILE.portrait
                                alt=PROFILE.name
                                class="w-80 h-80 object-cover rounded-2xl shadow-xl"
                            />
                            <div class=badge_class>
                                <p class="text-sm font-medium">{PROFILE.years_experience}</p>
                                <p class="text-xs opacity-80">"Product Experience"</p>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
            <LogoStrip />
        </section>
    }
}

/// Employer wordmarks on an endless horizontal loop.
#[component]
fn LogoStrip() -> impl IntoView {
    view! {
        <div class="w-full max-w-6xl mx-auto px-6 pb-12">
            <p class="text-xs text-center uppercase tracking-widest text-gray-400 dark:text-gray-500 mb-4">
                "Where I've built products"
            </p>
            <div class="overflow-hidden marquee-mask">
                <div class="flex w-max gap-16 animate-marquee" aria-hidden="true">
                    {employer_marks()
                        .map(|e| {
                            view! {
                                <span class="whitespace-nowrap text-lg font-semibold text-gray-400 dark:text-gray-600">
                                    {e.short_name}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::content::EXPERIENCES;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn test_logo_strip_repeats_every_mark_twice() {
        let html = Owner::new().with(|| view! { <LogoStrip /> }.to_html());
        for e in EXPERIENCES {
            assert_eq!(html.matches(e.short_name).count(), 2, "{}", e.short_name);
        }
    }
}
