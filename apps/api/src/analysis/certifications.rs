use crate::analysis::patterns::KNOWN_CERTIFICATIONS;

pub const MAX_CERTIFICATIONS: usize = 2;

/// Matches known certifications by their leading word (e.g. "AWS", "Certified").
/// Returns at most two, in table order.
pub fn extract_certifications(text: &str) -> Vec<String> {
    let text_lower = text.to_lowercase();

    KNOWN_CERTIFICATIONS
        .iter()
        .filter(|cert| {
            cert.split_whitespace()
                .next()
                .is_some_and(|first| text_lower.contains(&first.to_lowercase()))
        })
        .take(MAX_CERTIFICATIONS)
        .map(|cert| cert.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_by_leading_word() {
        let certs = extract_certifications("Deployed services on AWS");
        assert_eq!(certs, vec!["AWS Certified Developer"]);
    }

    #[test]
    fn test_caps_at_two_in_table_order() {
        let certs = extract_certifications("aws google microsoft certified oracle comptia");
        assert_eq!(
            certs,
            vec!["AWS Certified Developer", "Google Cloud Professional"]
        );
    }

    #[test]
    fn test_empty_when_nothing_matches() {
        assert!(extract_certifications("Carpentry and woodwork").is_empty());
    }
}
