use crate::analysis::patterns::Patterns;
use crate::models::report::PersonalInfo;

const UNKNOWN_NAME: &str = "Unknown";

/// Extracts contact fields. Each field is the first regex match, or empty.
/// The name is the first line of the text.
pub fn extract_personal_info(text: &str, patterns: &Patterns) -> PersonalInfo {
    let first_match = |re: &regex::Regex| {
        re.find(text)
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default()
    };

    let name = text.split('\n').next().unwrap_or("").trim();

    PersonalInfo {
        name: if name.is_empty() {
            UNKNOWN_NAME.to_string()
        } else {
            name.to_string()
        },
        email: first_match(&patterns.email),
        phone: first_match(&patterns.phone),
        linkedin: first_match(&patterns.linkedin),
        github: first_match(&patterns.github),
        portfolio: String::new(),
    }
}
