//! Field Extractor — recovers name, email and phone from raw résumé text.
//!
//! Extraction never fails. When no pattern matches, a plausible placeholder is synthesized and
//! tagged `FieldSource::Synthesized` so callers can tell it apart from real data.

use tracing::warn;

use crate::analysis::patterns::{EMAIL_PATTERN, NAME_PATTERNS, PHONE_PATTERNS};
use crate::analysis::random::{choose, RandomSource};
use crate::analysis::templates::{EMAIL_DOMAINS, FALLBACK_PHONE, FIRST_NAMES, LAST_NAMES};
use crate::models::analysis::{ContactProfile, ExtractedField};

/// Extracts all three contact fields. The email fallback is derived from the resolved name.
pub fn extract_contact(text: &str, rng: &mut dyn RandomSource) -> ContactProfile {
    let name = extract_name(text, rng);
    let email = extract_email(text, &name.value, rng);
    let phone = extract_phone(text);

    for (label, field) in [("name", &name), ("email", &email), ("phone", &phone)] {
        if field.is_synthesized() {
            warn!("No {label} found in resume text; using placeholder '{}'", field.value);
        }
    }

    ContactProfile { name, email, phone }
}

pub fn extract_name(text: &str, rng: &mut dyn RandomSource) -> ExtractedField {
    let found = NAME_PATTERNS
        .iter()
        .filter_map(|pattern| pattern.captures(text))
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().trim().to_string()))
        .find(|name| !name.is_empty());

    match found {
        Some(name) => ExtractedField::extracted(name),
        None => {
            let first = choose(rng, FIRST_NAMES);
            let last = choose(rng, LAST_NAMES);
            ExtractedField::synthesized(format!("{first} {last}"))
        }
    }
}

/// `name` is only used to build the placeholder address.
pub fn extract_email(text: &str, name: &str, rng: &mut dyn RandomSource) -> ExtractedField {
    if let Some(m) = EMAIL_PATTERN.find(text) {
        return ExtractedField::extracted(m.as_str());
    }

    let local_part = name.to_lowercase().replacen(' ', ".", 1);
    let domain = choose(rng, EMAIL_DOMAINS);
    ExtractedField::synthesized(format!("{local_part}@{domain}"))
}

pub fn extract_phone(text: &str) -> ExtractedField {
    PHONE_PATTERNS
        .iter()
        .find_map(|pattern| pattern.find(text))
        .map(|m| ExtractedField::extracted(m.as_str()))
        .unwrap_or_else(|| ExtractedField::synthesized(FALLBACK_PHONE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::random::FixedRandom;
    use crate::models::analysis::FieldSource;

    fn fixed(index: usize) -> FixedRandom {
        FixedRandom {
            index,
            ..Default::default()
        }
    }

    #[test]
    fn test_name_from_leading_capitalized_pair() {
        let field = extract_name("Jane Doe\nSoftware Engineer", &mut fixed(0));
        assert_eq!(field, ExtractedField::extracted("Jane Doe"));
    }

    #[test]
    fn test_name_from_label_is_case_insensitive() {
        let field = extract_name("contact details\nname: john smith", &mut fixed(0));
        assert_eq!(field.value, "john smith");
        assert_eq!(field.source, FieldSource::Extracted);
    }

    #[test]
    fn test_name_from_all_caps_line() {
        let field = extract_name("JANE DOE\nsoftware developer", &mut fixed(0));
        assert_eq!(field.value, "JANE DOE");
    }

    #[test]
    fn test_name_fallback_is_synthesized_from_candidates() {
        let field = extract_name("no capitals here at all", &mut fixed(1));
        assert_eq!(field, ExtractedField::synthesized("Priya Patel"));
    }

    #[test]
    fn test_email_extracted() {
        let field = extract_email("reach me at jane.doe@example.com today", "Jane Doe", &mut fixed(0));
        assert_eq!(field, ExtractedField::extracted("jane.doe@example.com"));
    }

    #[test]
    fn test_email_fallback_derives_from_name() {
        let field = extract_email("no address here", "Rahul Sharma", &mut fixed(2));
        assert_eq!(field, ExtractedField::synthesized("rahul.sharma@outlook.com"));
    }

    #[test]
    fn test_phone_ten_digit_pattern_wins() {
        let field = extract_phone("Mobile: +91 9876543210");
        assert_eq!(field, ExtractedField::extracted("+91 9876543210"));
    }

    #[test]
    fn test_phone_international_pattern() {
        let field = extract_phone("Phone: (555) 123-4567");
        assert_eq!(field, ExtractedField::extracted("(555) 123-4567"));
    }

    #[test]
    fn test_phone_fallback_literal() {
        let field = extract_phone("no digits");
        assert_eq!(field, ExtractedField::synthesized("+91 98765 43210"));
    }

    #[test]
    fn test_contact_profile_always_populated() {
        let profile = extract_contact("lowercase text only", &mut fixed(0));
        assert!(!profile.name.value.is_empty());
        assert!(!profile.email.value.is_empty());
        assert!(!profile.phone.value.is_empty());
        assert!(profile.name.is_synthesized());
        assert_eq!(profile.email.value, "rahul.sharma@gmail.com");
    }
}
