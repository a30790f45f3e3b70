//! Page sections and the navigation behaviour tied to them.

use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions};

/// Vertical offset past which the navigation bar switches to its scrolled style.
pub const SCROLL_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Experience,
    CaseStudies,
    Skills,
    Contact,
}

impl Section {
    /// Page order, top to bottom.
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Experience,
        Section::CaseStudies,
        Section::Skills,
        Section::Contact,
    ];

    /// Anchor id of the rendered `<section>`.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Experience => "experience",
            Section::CaseStudies => "case-studies",
            Section::Skills => "skills",
            Section::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Experience => "Experience",
            Section::CaseStudies => "Case Studies",
            Section::Skills => "Skills",
            Section::Contact => "Contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }
}

/// Strictly greater than the threshold; exactly 50 is still "not scrolled".
pub fn is_scrolled(y: f64) -> bool {
    y > SCROLL_THRESHOLD
}

pub trait ScrollTarget {
    fn scroll_into_view_smooth(&self);
}

impl ScrollTarget for Element {
    fn scroll_into_view_smooth(&self) {
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        self.scroll_into_view_with_scroll_into_view_options(&opts);
    }
}

/// Smooth-scrolls to the anchor `id`. A missing anchor is a silent no-op.
///
/// Returns whether a target was found.
pub fn jump_to_section<F, T>(lookup: F, id: &str) -> bool
where
    F: FnOnce(&str) -> Option<T>,
    T: ScrollTarget,
{
    match lookup(id) {
        Some(target) => {
            target.scroll_into_view_smooth();
            true
        }
        None => false,
    }
}
