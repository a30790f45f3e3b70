//! schema.org structured data embedded in the page head.

use serde_json::{json, Value};

use crate::content::{EXPERIENCES, PROFILE, SKILLS};

pub fn person_json_ld() -> Value {
    let works_for = EXPERIENCES.first().map(|e| {
        json!({
            "@type": "Organization",
            "name": e.short_name,
        })
    });
    json!({
        "@context": "https://schema.org",
        "@type": "Person",
        "name": PROFILE.name,
        "jobTitle": PROFILE.headline,
        "description": PROFILE.tagline,
        "image": PROFILE.portrait,
        "email": format!("mailto:{}", PROFILE.email),
        "sameAs": [PROFILE.linkedin],
        "worksFor": works_for,
        "knowsAbout": SKILLS.iter().map(|s| s.name).collect::<Vec<_>>(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_json_ld() {
        let v = person_json_ld();
        assert_eq!(v["@type"], "Person");
        assert_eq!(v["name"], "Shreyansh Jain");
        assert_eq!(v["worksFor"]["name"], "BT Group");
        assert_eq!(v["email"], "mailto:shreyansh@example.com");
        let skills = v["knowsAbout"].as_array().expect("knowsAbout is an array");
        assert_eq!(skills.len(), SKILLS.len());
        assert_eq!(skills[0], SKILLS[0].name);
    }
}
