use leptos::{either::Either, prelude::*};

use crate::{
    content::{format_metric_label, stagger_delay_ms, EmployerRecord, EXPERIENCES},
    section::Section,
};

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <section id=Section::Experience.id() class="py-20 bg-white dark:bg-gray-950">
            <div class="max-w-6xl mx-auto px-6">
                <div class="text-center mb-16">
                    <h2 class="text-3xl md:text-4xl font-bold text-gray-900 dark:text-white mb-4">
                        "Experience"
                    </h2>
                    <p class="text-lg text-gray-600 dark:text-gray-400 max-w-2xl mx-auto">
                        "10+ years building and scaling products across SaaS, platforms, and data analytics"
                    </p>
                </div>
                <ol class="relative space-y-8 border-l-2 border-blue-100 dark:border-gray-800 ml-4">
                    {EXPERIENCES
                        .iter()
                        .enumerate()
                        .map(|(index, record)| view! { <ExperienceCard record index /> })
                        .collect_view()}
                </ol>
            </div>
        </section>
    }
}

#[component]
fn ExperienceCard(record: &'static EmployerRecord, index: usize) -> impl IntoView {
    let mark = match record.logo {
        Some(src) => Either::Left(view! {
            <img src=src alt=record.short_name class="w-12 h-12 rounded-lg object-contain" />
        }),
        None => Either::Right(view! {
            <div class="w-12 h-12 rounded-lg flex items-center justify-center bg-blue-600 text-white font-bold">
                {record.monogram()}
            </div>
        }),
    };

    view! {
        <li
            class="ml-8 bg-gray-50 dark:bg-gray-900 rounded-xl p-8 shadow-sm border border-gray-100 dark:border-gray-800 fade-in-up"
            style=format!("animation-delay: {}ms", stagger_delay_ms(index))
        >
            <span class="absolute -left-[9px] mt-2 w-4 h-4 rounded-full bg-blue-600 ring-4 ring-white dark:ring-gray-950"></span>
            <div class="flex flex-col md:flex-row md:items-center md:justify-between mb-6 gap-4">
                <div class="flex items-center gap-4">
                    {mark}
                    <div>
                        <h3 class="text-xl font-semibold text-gray-900 dark:text-white">
                            {record.role}
                        </h3>
                        <p class="text-lg text-blue-600 dark:text-blue-400 font-medium">
                            {record.company}
                        </p>
                    </div>
                </div>
                <div class="text-sm text-gray-500 dark:text-gray-400 md:text-right">
                    <p>{record.period}</p>
                    <p>{record.location}</p>
                </div>
            </div>
            <ul class="space-y-2">
                {record
                    .achievements
                    .iter()
                    .map(|achievement| {
                        view! {
                            <li class="flex items-start">
                                <span class="text-blue-600 dark:text-blue-400 mr-3 mt-1">"•"</span>
                                <span class="text-gray-700 dark:text-gray-300">{*achievement}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            {(!record.metrics.is_empty())
                .then(|| {
                    view! {
                        <div class="flex flex-wrap gap-3 mt-6">
                            {record
                                .metrics
                                .iter()
                                .map(|m| {
                                    view! {
                                        <span class="text-xs bg-blue-50 text-blue-700 dark:bg-blue-950 dark:text-blue-300 px-3 py-1 rounded-full">
                                            <strong>{m.value}</strong>
                                            " "
                                            {format_metric_label(m.label)}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                })}
        </li>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn assert_in_order(html: &str, needles: &[&str]) {
        let mut last = 0;
        for needle in needles {
            let pos = html[last..]
                .find(needle)
                .unwrap_or_else(|| panic!("missing or out of order: {needle}"));
            last += pos + needle.len();
        }
    }

    #[test]
    fn test_every_employer_and_achievement_in_order() {
        let html = Owner::new().with(|| view! { <Experience /> }.to_html());
        let mut expected = Vec::new();
        for record in EXPERIENCES {
            expected.push(record.role);
            expected.push(record.company);
            expected.extend(record.achievements.iter().copied());
        }
        // the html escaper turns `&` into `&amp;`
        let html = html.replace("&amp;", "&");
        assert_in_order(&html, &expected);
    }

    #[test]
    fn test_metric_chips_are_formatted() {
        let html = Owner::new().with(|| view! { <Experience /> }.to_html());
        assert!(html.contains("Cost Recovery"));
        assert!(!html.contains("costRecovery"));
    }

    #[test]
    fn test_monogram_without_logo() {
        let html = Owner::new().with(|| view! { <Experience /> }.to_html());
        assert!(html.contains("BG"));
    }
}
