use crate::models::report::KeywordMatchResult;

/// Partitions `required_skills` into found and missing by case-insensitive presence in
/// `resume_text`, either anywhere or within one `.`-delimited sentence.
///
/// Score is the found percentage, or 0 when no skills are required.
pub fn match_keywords(resume_text: &str, required_skills: &[String]) -> KeywordMatchResult {
    let text_lower = resume_text.to_lowercase();
    let mut found_skills = Vec::new();
    let mut missing_skills = Vec::new();

    for skill in required_skills {
        let skill_lower = skill.to_lowercase();
        let found = text_lower.contains(&skill_lower)
            || text_lower
                .split('.')
                .any(|sentence| sentence.contains(&skill_lower));

        if found {
            found_skills.push(skill.clone());
        } else {
            missing_skills.push(skill.clone());
        }
    }

    let score = if required_skills.is_empty() {
        0.0
    } else {
        found_skills.len() as f64 / required_skills.len() as f64 * 100.0
    };

    KeywordMatchResult {
        score,
        found_skills,
        missing_skills,
    }
}
