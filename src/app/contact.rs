use leptos::prelude::*;

use crate::{
    content::{ContactKind, CONTACT_LINKS, PROFILE},
    section::Section,
};

const COPYRIGHT_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id=Section::Contact.id() class="py-20 bg-gray-900 dark:bg-black text-white">
            <div class="max-w-4xl mx-auto px-6 text-center">
                <h2 class="text-3xl md:text-4xl font-bold mb-8">"Let's Build Something Great"</h2>
                <p class="text-xl text-gray-300 mb-12 max-w-2xl mx-auto">
                    "Ready to drive product strategy and measurable business impact. Let's discuss how I can help scale your product vision."
                </p>
                <div class="flex flex-col sm:flex-row gap-6 justify-center items-center mb-12">
                    {CONTACT_LINKS
                        .iter()
                        .map(|link| {
                            let external = link.kind == ContactKind::LinkedIn;
                            let primary = link.kind == ContactKind::Email;
                            view! {
                                <a
                                    href=link.href
                                    target=external.then_some("_blank")
                                    rel=external.then_some("noopener noreferrer")
                                    download=(link.kind == ContactKind::Resume).then_some("")
                                    class=if primary {
                                        "flex items-center space-x-3 bg-blue-600 hover:bg-blue-700 px-6 py-3 rounded-lg transition-colors"
                                    } else {
                                        "flex items-center space-x-3 border border-gray-600 hover:border-gray-400 px-6 py-3 rounded-lg transition-colors"
                                    }
                                >
                                    <span>{link.kind.icon()}</span>
                                    <span>{link.label}</span>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <Footer />
            </div>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-gray-800 pt-8">
            <p class="text-gray-400">
                {format!("© {COPYRIGHT_YEAR} {}. Building products that matter.", PROFILE.name)}
            </p>
        </footer>
    }
}
