use leptos::prelude::*;

use crate::{
    content::{format_metric_label, stagger_delay_ms, CaseStudyRecord, CASE_STUDIES},
    section::Section,
};

#[component]
pub fn CaseStudies() -> impl IntoView {
    view! {
        <section id=Section::CaseStudies.id() class="py-20 bg-gray-50 dark:bg-gray-900">
            <div class="max-w-6xl mx-auto px-6">
                <div class="text-center mb-16">
                    <h2 class="text-3xl md:text-4xl font-bold text-gray-900 dark:text-white mb-4">
                        "Case Studies"
                    </h2>
                    <p class="text-lg text-gray-600 dark:text-gray-400 max-w-2xl mx-auto">
                        "Strategic product initiatives with measurable business impact"
                    </p>
                </div>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {CASE_STUDIES
                        .iter()
                        .enumerate()
                        .map(|(index, study)| view! { <CaseStudyCard study index /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn CaseStudyCard(study: &'static CaseStudyRecord, index: usize) -> impl IntoView {
    view! {
        <article
            class="bg-white dark:bg-gray-950 rounded-xl p-8 hover:shadow-lg transition-shadow border border-gray-100 dark:border-gray-800 fade-in-up"
            style=format!("animation-delay: {}ms", stagger_delay_ms(index))
        >
            {study
                .image
                .map(|src| {
                    view! {
                        <img src=src alt=study.title class="w-full h-40 object-cover rounded-lg mb-6" />
                    }
                })}
            <div class="mb-6">
                <p class="text-sm font-medium text-blue-600 dark:text-blue-400 mb-2">
                    {study.category}
                </p>
                <h3 class="text-xl font-semibold text-gray-900 dark:text-white mb-2">
                    {study.title}
                </h3>
                <p class="text-sm text-gray-600 dark:text-gray-400 font-medium">{study.company}</p>
            </div>
            <div class="mb-6">
                <div class="grid grid-cols-3 gap-4 mb-4">
                    {study
                        .metrics
                        .iter()
                        .map(|m| {
                            view! {
                                <div class="text-center">
                                    <p class="text-lg font-bold text-gray-900 dark:text-white">
                                        {m.value}
                                    </p>
                                    <p class="text-xs text-gray-500 dark:text-gray-400">
                                        {format_metric_label(m.label)}
                                    </p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <p class="text-gray-700 dark:text-gray-300 text-sm leading-relaxed">
                    {study.description}
                </p>
            </div>
            <div class="flex flex-wrap gap-2">
                {study
                    .tags
                    .iter()
                    .map(|tag| {
                        view! {
                            <span class="text-xs bg-gray-100 text-gray-600 dark:bg-gray-800 dark:text-gray-300 px-2 py-1 rounded-md">
                                {*tag}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </article>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn render() -> String {
        Owner::new()
            .with(|| view! { <CaseStudies /> }.to_html())
            .replace("&amp;", "&")
    }

    #[test]
    fn test_every_case_study_and_tag_in_order() {
        let html = render();
        let mut last = 0;
        for study in CASE_STUDIES {
            let needles = std::iter::once(study.title).chain(study.tags.iter().copied());
            for needle in needles {
                let pos = html[last..]
                    .find(needle)
                    .unwrap_or_else(|| panic!("missing or out of order: {needle}"));
                last += pos + needle.len();
            }
        }
    }

    #[test]
    fn test_metrics_render_value_and_label() {
        let html = render();
        for study in CASE_STUDIES {
            for m in study.metrics {
                assert!(html.contains(m.value), "{}", m.value);
                assert!(html.contains(&format_metric_label(m.label)));
            }
        }
        assert!(html.contains("Improvement"));
    }

    #[test]
    fn test_stagger_delay_follows_index() {
        let html = render();
        assert!(html.contains("animation-delay: 0ms"));
        assert!(html.contains("animation-delay: 200ms"));
    }
}
