use codee::string::FromToStringCodec;
use leptos::prelude::*;
use leptos_meta::Html;
use leptos_use::storage::{use_local_storage_with_options, UseStorageOptions};

use crate::theme::{Theme, ThemeError, THEME_STORAGE_KEY};

/// Page-wide theme, readable anywhere below a [`ThemeProvider`].
///
/// [`ThemeContext::toggle`] is the only way to change it.
#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    theme: Signal<Theme>,
    set_theme: WriteSignal<Theme>,
}

impl ThemeContext {
    pub fn new(theme: Signal<Theme>, set_theme: WriteSignal<Theme>) -> Self {
        Self { theme, set_theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn is_dark(&self) -> bool {
        self.theme.get().is_dark()
    }

    pub fn toggle(&self) {
        self.set_theme.update(|t| {
            *t = t.toggled();
            log::debug!("theme set to {t}");
        });
    }
}

/// Restores the stored preference, provides [`ThemeContext`] and keeps the
/// `dark` class on `<html>` in sync with it.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    // absent or unparsable values fall back to Theme::default(); the read waits
    // until hydration is done so the first client render matches the server
    let (theme, set_theme, _) = use_local_storage_with_options::<Theme, FromToStringCodec>(
        THEME_STORAGE_KEY,
        UseStorageOptions::default().delay_during_hydration(true),
    );
    provide_context(ThemeContext::new(theme, set_theme));

    view! {
        <Html attr:class=move || theme.get().class() />
        {children()}
    }
}

pub fn try_use_theme() -> Result<ThemeContext, ThemeError> {
    use_context::<ThemeContext>().ok_or(ThemeError::MissingProvider)
}

/// Panics outside of a [`ThemeProvider`].
pub fn use_theme() -> ThemeContext {
    match try_use_theme() {
        Ok(ctx) => ctx,
        Err(e) => panic!("{e}"),
    }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();
    view! {
        <button
            type="button"
            class="p-2 rounded-lg text-gray-600 hover:bg-gray-100 dark:text-gray-300 dark:hover:bg-gray-800 transition-colors"
            aria-label=move || {
                if theme.is_dark() { "Switch to light mode" } else { "Switch to dark mode" }
            }
            on:click=move |_| theme.toggle()
        >
            {move || if theme.is_dark() { "☀️" } else { "🌙" }}
        </button>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn with_theme<T>(initial: Theme, f: impl FnOnce(ThemeContext) -> T) -> T {
        let owner = Owner::new();
        owner.with(|| {
            let (theme, set_theme) = signal(initial);
            let ctx = ThemeContext::new(theme.into(), set_theme);
            provide_context(ctx);
            f(ctx)
        })
    }

    #[test]
    fn test_double_toggle_restores_theme() {
        with_theme(Theme::Light, |ctx| {
            ctx.toggle();
            assert_eq!(ctx.theme(), Theme::Dark);
            assert!(ctx.is_dark());
            ctx.toggle();
            assert_eq!(ctx.theme(), Theme::Light);
        });
    }

    #[test]
    fn test_use_theme_inside_provider_scope() {
        with_theme(Theme::Dark, |_| {
            let ctx = try_use_theme().expect("context was provided");
            assert_eq!(ctx.theme(), Theme::Dark);
        });
    }

    #[test]
    fn test_try_use_theme_without_provider() {
        let owner = Owner::new();
        owner.with(|| {
            assert_eq!(try_use_theme().err(), Some(ThemeError::MissingProvider));
        });
    }

    #[test]
    #[should_panic(expected = "outside of a ThemeProvider")]
    fn test_use_theme_without_provider_panics() {
        let owner = Owner::new();
        owner.with(|| {
            use_theme();
        });
    }

    #[component]
    fn ThemeReadout() -> impl IntoView {
        let theme = use_theme();
        view! { <span>{move || format!("theme={}", theme.theme())}</span> }
    }

    #[test]
    fn test_provider_renders_light_without_stored_preference() {
        let html = Owner::new().with(|| {
            leptos_meta::provide_meta_context();
            view! {
                <ThemeProvider>
                    <ThemeReadout />
                    <ThemeToggle />
                </ThemeProvider>
            }
            .to_html()
        });
        assert!(html.contains("theme=light"));
        assert!(html.contains("Switch to dark mode"));
    }

    #[test]
    fn test_toggle_icon_follows_theme() {
        let html = with_theme(Theme::Dark, |_| view! { <ThemeToggle /> }.to_html());
        assert!(html.contains("☀️"));
        assert!(html.contains("Switch to light mode"));
        let html = with_theme(Theme::Light, |_| view! { <ThemeToggle /> }.to_html());
        assert!(html.contains("🌙"));
    }
}
