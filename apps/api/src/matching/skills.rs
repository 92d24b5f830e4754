//! Skill vocabulary and case-insensitive presence checks.

/// Terms checked in every resume and job description, in reporting order.
pub const SKILL_VOCABULARY: &[&str] = &[
    "Python",
    "R",
    "SQL",
    "Excel",
    "Tableau",
    "Power BI",
    "Machine Learning",
    "Deep Learning",
    "NLP",
    "Computer Vision",
    "TensorFlow",
    "Keras",
    "PyTorch",
    "Scikit-learn",
    "Data Analysis",
    "Data Visualization",
    "Statistics",
    "Probability",
    "AWS",
    "Azure",
    "GCP",
    "BigQuery",
    "Hadoop",
    "Spark",
    "Communication",
    "Teamwork",
    "Problem Solving",
    "Critical Thinking",
];

/// Vocabulary terms that occur (case-insensitive substring) in `text`,
/// in vocabulary order.
pub fn skills_present<'v>(text: &str, vocabulary: &[&'v str]) -> Vec<&'v str> {
    let haystack = text.to_lowercase();
    vocabulary
        .iter()
        .copied()
        .filter(|skill| haystack.contains(&skill.to_lowercase()))
        .collect()
}

/// Terms present in the job description but absent from the resume.
/// Casing and order follow the vocabulary.
pub fn find_missing_skills(resume_text: &str, jd_text: &str, vocabulary: &[&str]) -> Vec<String> {
    let resume_lower = resume_text.to_lowercase();
    skills_present(jd_text, vocabulary)
        .into_iter()
        .filter(|skill| !resume_lower.contains(&skill.to_lowercase()))
        .map(String::from)
        .collect()
}

/// `|J ∩ R| / |J|` over vocabulary terms, or 0 when the JD names none.
pub fn skill_overlap_ratio(resume_text: &str, jd_text: &str, vocabulary: &[&str]) -> f64 {
    let jd_skills = skills_present(jd_text, vocabulary);
    if jd_skills.is_empty() {
        return 0.0;
    }
    let resume_skills = skills_present(resume_text, vocabulary);
    let shared = jd_skills
        .iter()
        .filter(|skill| resume_skills.contains(skill))
        .count();
    shared as f64 / jd_skills.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &[&str] = &["Python", "SQL"];

    #[test]
    fn test_missing_skills_example() {
        let missing = find_missing_skills(
            "I know Python well",
            "Requires Python and SQL skills",
            SMALL,
        );
        assert_eq!(missing, vec!["SQL"]);
    }

    #[test]
    fn test_overlap_ratio_example() {
        let ratio = skill_overlap_ratio(
            "I know Python well",
            "Requires Python and SQL skills",
            SMALL,
        );
        assert!((ratio - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_overlap_zero_when_jd_has_no_skills() {
        let ratio = skill_overlap_ratio("Python SQL everything", "Friendly team, free snacks", SMALL);
        assert_eq!(ratio, 0.0);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let missing = find_missing_skills("PYTHON and sql", "python, SQL", SMALL);
        assert!(missing.is_empty());
        assert_eq!(skill_overlap_ratio("PYTHON and sql", "python, SQL", SMALL), 1.0);
    }

    #[test]
    fn test_missing_preserves_vocabulary_order_and_casing() {
        let jd = "spark, aws, tableau and power bi required";
        let missing = find_missing_skills("", jd, SKILL_VOCABULARY);
        // "r" is a substring of "required", so it is reported too.
        assert_eq!(missing, vec!["R", "Tableau", "Power BI", "AWS", "Spark"]);
    }

    #[test]
    fn test_each_missing_term_reported_once() {
        let jd = "SQL SQL sql, more SQL";
        let missing = find_missing_skills("nothing relevant", jd, SMALL);
        assert_eq!(missing, vec!["SQL"]);
    }

    #[test]
    fn test_overlap_ratio_bounded() {
        let ratio = skill_overlap_ratio(
            "Python, Keras, AWS",
            "Python Keras AWS Azure GCP",
            SKILL_VOCABULARY,
        );
        assert!((0.0..=1.0).contains(&ratio));
    }

    #[test]
    fn test_vocabulary_has_28_terms() {
        assert_eq!(SKILL_VOCABULARY.len(), 28);
    }
}
