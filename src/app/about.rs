use leptos::prelude::*;

use crate::{
    content::{stagger_delay_ms, BIOGRAPHY, QUALIFICATIONS},
    section::Section,
};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=Section::About.id() class="py-20 bg-gray-50 dark:bg-gray-900">
            <div class="max-w-6xl mx-auto px-6">
                <div class="text-center mb-16">
                    <h2 class="text-3xl md:text-4xl font-bold text-gray-900 dark:text-white mb-4">
                        "About Me"
                    </h2>
                </div>
                <div class="grid lg:grid-cols-2 gap-12 items-start">
                    <div class="space-y-4">
                        {BIOGRAPHY
                            .iter()
                            .map(|p| {
                                view! {
                                    <p class="text-lg text-gray-700 dark:text-gray-300 leading-relaxed">
                                        {*p}
                                    </p>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="grid sm:grid-cols-2 gap-6">
                        {QUALIFICATIONS
                            .iter()
                            .enumerate()
                            .map(|(i, q)| {
                                view! {
                                    <div
                                        class="bg-white dark:bg-gray-950 rounded-xl p-6 shadow-sm border border-gray-100 dark:border-gray-800 fade-in-up"
                                        style=format!("animation-delay: {}ms", stagger_delay_ms(i))
                                    >
                                        <div class="text-2xl mb-3">{q.icon}</div>
                                        <h3 class="font-semibold text-gray-900 dark:text-white mb-2">
                                            {q.title}
                                        </h3>
                                        <p class="text-sm text-gray-600 dark:text-gray-400">
                                            {q.summary}
                                        </p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
