use leptos::prelude::*;
use leptos_use::use_window_scroll;

use super::theme::ThemeToggle;
use crate::{
    content::PROFILE,
    section::{is_scrolled, jump_to_section, Section},
};

fn jump(section: Section) {
    jump_to_section(|id| document().get_element_by_id(id), section.id());
}

fn bar_class(scrolled: bool) -> &'static str {
    if scrolled {
        "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-white/90 dark:bg-gray-950/90 backdrop-blur-md shadow-sm border-b border-gray-100 dark:border-gray-800"
    } else {
        "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-transparent border-b border-transparent"
    }
}

#[component]
pub fn Navigation() -> impl IntoView {
    let (_, y) = use_window_scroll();
    let scrolled = Memo::new(move |_| is_scrolled(y.get()));
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <nav class=move || bar_class(scrolled.get())>
            <div class="max-w-6xl mx-auto px-6 py-4">
                <div class="flex justify-between items-center">
                    <button
                        type="button"
                        class="text-xl font-bold text-gray-900 dark:text-white"
                        on:click=move |_| jump(Section::Home)
                    >
                        {PROFILE.name}
                    </button>
                    <div class="hidden md:flex space-x-8">
                        {Section::ALL
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <button
                                        type="button"
                                        class="text-gray-600 hover:text-gray-900 dark:text-gray-300 dark:hover:text-white transition-colors"
                                        on:click=move |_| jump(section)
                                    >
                                        {section.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="flex items-center space-x-2">
                        <ThemeToggle />
                        <a
                            href=format!("mailto:{}", PROFILE.email)
                            class="hidden sm:inline-block text-sm bg-gray-900 text-white dark:bg-white dark:text-gray-900 px-4 py-2 rounded-lg hover:bg-gray-800 dark:hover:bg-gray-200 transition-colors"
                        >
                            "Contact Me"
                        </a>
                        <button
                            type="button"
                            class="md:hidden p-2 rounded-lg text-gray-700 dark:text-gray-200"
                            aria-label="Toggle navigation menu"
                            aria-expanded=move || menu_open.get().to_string()
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            {move || if menu_open.get() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>
            </div>
            <MobileMenu open=menu_open set_open=set_menu_open />
        </nav>
    }
}

/// Drawer shown below `md`. Any selection jumps and closes it.
#[component]
fn MobileMenu(open: ReadSignal<bool>, set_open: WriteSignal<bool>) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="md:hidden bg-white dark:bg-gray-950 border-t border-gray-100 dark:border-gray-800 px-6 py-4 space-y-2">
                {Section::ALL
                    .into_iter()
                    .map(|section| {
                        view! {
                            <button
                                type="button"
                                class="block w-full text-left py-2 text-gray-700 hover:text-gray-900 dark:text-gray-300 dark:hover:text-white"
                                on:click=move |_| {
                                    jump(section);
                                    set_open.set(false);
                                }
                            >
                                {section.label()}
                            </button>
                        }
                    })
                    .collect_view()}
                <a
                    href=format!("mailto:{}", PROFILE.email)
                    class="block py-2 font-medium text-blue-600 dark:text-blue-400"
                    on:click=move |_| set_open.set(false)
                >
                    "Contact Me"
                </a>
            </div>
        </Show>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::{app::theme::ThemeContext, theme::Theme};
    use leptos::tachys::view::RenderHtml;

    fn render_nav() -> String {
        let owner = Owner::new();
        owner.with(|| {
            let (theme, set_theme) = signal(Theme::Light);
            provide_context(ThemeContext::new(theme.into(), set_theme));
            view! { <Navigation /> }.to_html()
        })
    }

    #[test]
    fn test_bar_class_by_scroll_state() {
        assert!(bar_class(false).contains("bg-transparent"));
        assert!(bar_class(true).contains("backdrop-blur-md"));
        assert_eq!(bar_class(is_scrolled(50.0)), bar_class(false));
        assert_eq!(bar_class(is_scrolled(51.0)), bar_class(true));
    }

    #[test]
    fn test_nav_renders_unscrolled_with_every_section() {
        let html = render_nav();
        assert!(html.contains("bg-transparent"));
        let mut last = 0;
        for section in Section::ALL {
            let pos = html[last..]
                .find(section.label())
                .map(|p| p + last)
                .unwrap_or_else(|| panic!("missing nav link {}", section.label()));
            last = pos;
        }
    }

    #[test]
    fn test_mobile_menu_starts_closed() {
        let html = render_nav();
        assert!(html.contains("aria-expanded=\"false\""));
        assert!(html.contains("☰"));
        assert!(!html.contains("block w-full text-left"));
    }
}
