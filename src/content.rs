//! Literal page content.
//!
//! Everything rendered on the page comes from the tables in this module. The
//! tables are never reordered or filtered; panels iterate them as-is.

/// A single headline number, e.g. `("costRecovery", "£2.6M")`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metric {
    /// camelCase key, formatted for display with [`format_metric_label`]
    pub label: &'static str,
    pub value: &'static str,
}

const fn metric(label: &'static str, value: &'static str) -> Metric {
    Metric { label, value }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmployerRecord {
    pub company: &'static str,
    /// Wordmark used in the hero logo strip
    pub short_name: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    pub achievements: &'static [&'static str],
    pub logo: Option<&'static str>,
    pub metrics: &'static [Metric],
}

impl EmployerRecord {
    /// Up to two initials, shown when there is no logo image.
    pub fn monogram(&self) -> String {
        self.short_name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .filter(|c| c.is_alphanumeric())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseStudyRecord {
    pub title: &'static str,
    pub company: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub metrics: &'static [Metric],
    pub image: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Proficiency {
    Expert,
    Advanced,
    Intermediate,
}

impl Proficiency {
    pub fn label(&self) -> &'static str {
        match self {
            Proficiency::Expert => "Expert",
            Proficiency::Advanced => "Advanced",
            Proficiency::Intermediate => "Intermediate",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillRecord {
    pub name: &'static str,
    pub icon: &'static str,
    pub proficiency: Proficiency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Qualification {
    pub icon: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Email,
    LinkedIn,
    Resume,
}

impl ContactKind {
    pub fn icon(&self) -> &'static str {
        match self {
            ContactKind::Email => "📧",
            ContactKind::LinkedIn => "💼",
            ContactKind::Resume => "📄",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactLink {
    pub kind: ContactKind,
    pub label: &'static str,
    pub href: &'static str,
}

pub struct Profile {
    pub name: &'static str,
    pub first_name: &'static str,
    pub headline: &'static str,
    pub tagline: &'static str,
    pub portrait: &'static str,
    pub email: &'static str,
    pub linkedin: &'static str,
    pub resume: &'static str,
    pub years_experience: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Shreyansh Jain",
    first_name: "Shreyansh",
    headline: "Senior Product Manager | SaaS, Platform & Data Products",
    tagline: "Building and scaling SaaS, platform, and analytics products with measurable business impact, from 0→1 to enterprise scale.",
    portrait: "https://images.unsplash.com/photo-1560250097-0b93528c311a?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NDQ2MzR8MHwxfHNlYXJjaHwxfHxwcm9mZXNzaW9uYWwlMjBoZWFkc2hvdHxlbnwwfHx8fDE3NTc3Njk3NjN8MA&ixlib=rb-4.1.0&q=85",
    email: "shreyansh@example.com",
    linkedin: "https://linkedin.com/in/shreyanshjain",
    resume: "/resume.pdf",
    years_experience: "10+ Years",
};

pub const BIOGRAPHY: &[&str] = &[
    "I'm a product manager who likes the unglamorous middle of products: the platforms, data pipelines and integrations that everything else depends on.",
    "Over the past decade I've founded a startup, been the sole PM at a seed-stage SaaS company, scaled a logistics platform through acquisition, and led enterprise cost platforms at BT Group.",
    "I work closely with engineering and finance, measure everything, and prefer shipping a small thing that moves a number over a big thing that might.",
];

pub static QUALIFICATIONS: &[Qualification] = &[
    Qualification {
        icon: "🏗️",
        title: "Platform & Data Products",
        summary: "Enterprise cost, utilization and BI platforms used by hundreds of internal teams.",
    },
    Qualification {
        icon: "🚀",
        title: "0→1 and Scale-up",
        summary: "Founder and sole-PM experience taking products from first customer to sustainable growth.",
    },
    Qualification {
        icon: "📊",
        title: "Measurable Impact",
        summary: "Track record of cost recovery, MRR growth and operational efficiency tied to shipped work.",
    },
    Qualification {
        icon: "🤝",
        title: "Cross-functional Leadership",
        summary: "Aligning engineering, finance, operations and vendors around a single roadmap.",
    },
];

pub static EXPERIENCES: &[EmployerRecord] = &[
    EmployerRecord {
        company: "BT Group",
        short_name: "BT Group",
        role: "Senior Product Manager",
        period: "2022 - Present",
        location: "London, UK",
        achievements: &[
            "Built cost chargeback & utilization platform managing £11.6M budget",
            "Automated financial reporting processes across enterprise teams",
            "Recovered £2.6M in cost savings (~20% efficiency improvement)",
        ],
        logo: None,
        metrics: &[metric("budget", "£11.6M"), metric("costRecovery", "£2.6M")],
    },
    EmployerRecord {
        company: "Omnivio",
        short_name: "Omnivio",
        role: "Product Manager",
        period: "2021 - 2022",
        location: "Seed-stage SaaS",
        achievements: &[
            "Sole PM at seed-stage SaaS startup",
            "Standardized integrations across 50+ vendor partners",
            "Cut customer onboarding time by 300%",
            "Drove 40% MRR growth and 11% ARR growth",
        ],
        logo: None,
        metrics: &[metric("mrrGrowth", "40%"), metric("arrGrowth", "11%")],
    },
    EmployerRecord {
        company: "Pickrr (Acquired by Shiprocket for $200M)",
        short_name: "Pickrr",
        role: "Product Manager",
        period: "2019 - 2021",
        location: "Gurugram, India",
        achievements: &[
            "Built courier allocation engine saving INR 2.5M annually",
            "Improved delivery success rate by 2-3%",
            "Scaled platform adoption by 30% month-over-month",
            "Built BI Dashboard suite with 200+ KPIs for 200+ staff",
        ],
        logo: None,
        metrics: &[metric("annualSavings", "INR 2.5M")],
    },
    EmployerRecord {
        company: "PolCol (Founder)",
        short_name: "PolCol",
        role: "Founder & Product Lead",
        period: "2018 - 2019",
        location: "New Delhi, India",
        achievements: &[
            "Scaled doorstep vehicle PUC startup to 10K+ orders",
            "Achieved 70% customer retention rate",
            "Built operationally sustainable business with near-zero CAC",
        ],
        logo: None,
        metrics: &[],
    },
];

pub static CASE_STUDIES: &[CaseStudyRecord] = &[
    CaseStudyRecord {
        title: "Enterprise Cost Management Platform",
        company: "BT Group",
        category: "Platform & Analytics",
        description: "Built comprehensive cost chargeback and utilization platform for enterprise-scale operations",
        tags: &["Platform Architecture", "Financial Analytics", "Enterprise Scale"],
        metrics: &[
            metric("budget", "£11.6M"),
            metric("recovery", "£2.6M"),
            metric("efficiency", "20%"),
        ],
        image: None,
    },
    CaseStudyRecord {
        title: "SaaS Integration Standardization",
        company: "Omnivio",
        category: "Product Growth",
        description: "Standardized vendor integrations and drove significant product growth at seed-stage SaaS",
        tags: &["0→1 Product", "Integration Platform", "Growth Strategy"],
        metrics: &[
            metric("vendors", "50+"),
            metric("onboarding", "300% faster"),
            metric("growth", "40% MRR"),
        ],
        image: None,
    },
    CaseStudyRecord {
        title: "Intelligent Courier Allocation Engine",
        company: "Pickrr",
        category: "Logistics & AI",
        description: "Built AI-powered courier allocation system improving delivery success and operational efficiency",
        tags: &["AI/ML Platform", "Logistics Optimization", "Scaling"],
        metrics: &[
            metric("savings", "INR 2.5M"),
            metric("improvement", "2-3%"),
            metric("adoption", "30% MoM"),
        ],
        image: None,
    },
];

pub static SKILLS: &[SkillRecord] = &[
    SkillRecord {
        name: "Product Strategy",
        icon: "🎯",
        proficiency: Proficiency::Expert,
    },
    SkillRecord {
        name: "Platform Architecture",
        icon: "🏗️",
        proficiency: Proficiency::Advanced,
    },
    SkillRecord {
        name: "Data Analytics & BI",
        icon: "📊",
        proficiency: Proficiency::Expert,
    },
    SkillRecord {
        name: "SQL",
        icon: "🗄️",
        proficiency: Proficiency::Advanced,
    },
    SkillRecord {
        name: "Go-to-Market",
        icon: "🚀",
        proficiency: Proficiency::Advanced,
    },
    SkillRecord {
        name: "Stakeholder Management",
        icon: "🤝",
        proficiency: Proficiency::Expert,
    },
    SkillRecord {
        name: "Agile Delivery",
        icon: "⚡",
        proficiency: Proficiency::Expert,
    },
    SkillRecord {
        name: "AI/ML Products",
        icon: "🤖",
        proficiency: Proficiency::Intermediate,
    },
];

pub static CONTACT_LINKS: &[ContactLink] = &[
    ContactLink {
        kind: ContactKind::Email,
        label: PROFILE.email,
        href: "mailto:shreyansh@example.com",
    },
    ContactLink {
        kind: ContactKind::LinkedIn,
        label: "LinkedIn Profile",
        href: PROFILE.linkedin,
    },
    ContactLink {
        kind: ContactKind::Resume,
        label: "Download Resume",
        href: PROFILE.resume,
    },
];

/// `costRecovery` -> `Cost Recovery`
pub fn format_metric_label(label: &str) -> String {
    let mut out = String::with_capacity(label.len() + 4);
    for (i, c) in label.chars().enumerate() {
        if i == 0 {
            out.extend(c.to_uppercase());
        } else if c.is_uppercase() {
            out.push(' ');
            out.push(c);
        } else {
            out.push(c);
        }
    }
    out
}

/// Employer marks for the hero strip. The list is emitted twice back to back
/// so the marquee can loop without a visible seam.
pub fn employer_marks() -> impl Iterator<Item = &'static EmployerRecord> {
    EXPERIENCES.iter().chain(EXPERIENCES.iter())
}

pub fn stagger_delay_ms(index: usize) -> u32 {
    (index as u32) * 100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_metric_label() {
        assert_eq!(format_metric_label("budget"), "Budget");
        assert_eq!(format_metric_label("costRecovery"), "Cost Recovery");
        assert_eq!(format_metric_label("mrrGrowth"), "Mrr Growth");
        assert_eq!(format_metric_label("annualSavings"), "Annual Savings");
        assert_eq!(format_metric_label(""), "");
    }

    #[test]
    fn test_employer_marks_duplicated_in_order() {
        let marks = employer_marks().map(|e| e.short_name).collect::<Vec<_>>();
        assert_eq!(marks.len(), EXPERIENCES.len() * 2);
        let (first, second) = marks.split_at(EXPERIENCES.len());
        assert_eq!(first, second);
        assert_eq!(first[0], "BT Group");
        assert_eq!(first[EXPERIENCES.len() - 1], "PolCol");
    }

    #[test]
    fn test_monogram() {
        assert_eq!(EXPERIENCES[0].monogram(), "BG");
        assert_eq!(EXPERIENCES[1].monogram(), "O");
    }

    #[test]
    fn test_stagger_delay() {
        assert_eq!(stagger_delay_ms(0), 0);
        assert_eq!(stagger_delay_ms(3), 300);
    }

    #[test]
    fn test_case_study_metrics_keep_source_order() {
        let keys = |i: usize| {
            CASE_STUDIES[i]
                .metrics
                .iter()
                .map(|m| (m.label, m.value))
                .collect::<Vec<_>>()
        };
        assert_eq!(
            keys(0),
            vec![("budget", "£11.6M"), ("recovery", "£2.6M"), ("efficiency", "20%")]
        );
        assert_eq!(
            keys(1),
            vec![("vendors", "50+"), ("onboarding", "300% faster"), ("growth", "40% MRR")]
        );
        assert_eq!(
            keys(2),
            vec![("savings", "INR 2.5M"), ("improvement", "2-3%"), ("adoption", "30% MoM")]
        );
    }

    #[test]
    fn test_tables_populated() {
        assert_eq!(EXPERIENCES.len(), 4);
        assert_eq!(CASE_STUDIES.len(), 3);
        assert!(EXPERIENCES.iter().all(|e| !e.achievements.is_empty()));
        assert!(CASE_STUDIES.iter().all(|c| !c.tags.is_empty()));
        assert!(CONTACT_LINKS
            .iter()
            .any(|l| l.kind == ContactKind::Email && l.href.starts_with("mailto:")));
    }
}
