use leptos::prelude::*;

use crate::{
    content::{stagger_delay_ms, Proficiency, SKILLS},
    section::Section,
};

fn proficiency_class(p: Proficiency) -> &'static str {
    match p {
        Proficiency::Expert => "text-green-700 bg-green-50 dark:text-green-300 dark:bg-green-950",
        Proficiency::Advanced => "text-blue-700 bg-blue-50 dark:text-blue-300 dark:bg-blue-950",
        Proficiency::Intermediate => {
            "text-amber-700 bg-amber-50 dark:text-amber-300 dark:bg-amber-950"
        }
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id=Section::Skills.id() class="py-20 bg-white dark:bg-gray-950">
            <div class="max-w-6xl mx-auto px-6">
                <div class="text-center mb-16">
                    <h2 class="text-3xl md:text-4xl font-bold text-gray-900 dark:text-white mb-4">
                        "Skills"
                    </h2>
                </div>
                <ul class="grid sm:grid-cols-2 lg:grid-cols-4 gap-6">
                    {SKILLS
                        .iter()
                        .enumerate()
                        .map(|(i, skill)| {
                            view! {
                                <li
                                    class="flex items-center gap-4 p-5 rounded-xl border border-gray-100 dark:border-gray-800 bg-gray-50 dark:bg-gray-900 fade-in-up"
                                    style=format!("animation-delay: {}ms", stagger_delay_ms(i))
                                >
                                    <span class="text-2xl" aria-hidden="true">
                                        {skill.icon}
                                    </span>
                                    <div>
                                        <p class="font-medium text-gray-900 dark:text-white">
                                            {skill.name}
                                        </p>
                                        <span class=format!(
                                            "text-xs px-2 py-0.5 rounded-full {}",
                                            proficiency_class(skill.proficiency),
                                        )>{skill.proficiency.label()}</span>
                                    </div>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </section>
    }
}
