//! Basic résumé overview — which standard sections and common technical skills appear.

use serde::Serialize;

const RESUME_SECTIONS: &[(&str, &[&str])] = &[
    ("contact", &["email", "phone", "linkedin", "github", "contact"]),
    (
        "education",
        &["education", "university", "college", "degree", "gpa"],
    ),
    (
        "experience",
        &["experience", "work", "internship", "employed"],
    ),
    ("skills", &["skills", "programming", "technical", "languages"]),
    ("projects", &["projects", "portfolio", "github"]),
    (
        "certifications",
        &["certification", "certificate", "training"],
    ),
];

const TECHNICAL_SKILLS: &[&str] = &[
    "python",
    "java",
    "sql",
    "javascript",
    "html",
    "css",
    "react",
    "node",
    "machine learning",
    "ai",
    "data analysis",
    "pandas",
    "numpy",
    "tensorflow",
    "aws",
    "docker",
    "git",
    "github",
    "streamlit",
    "django",
    "flask",
];

/// Fewer sections than this flags the résumé as thinly structured.
const MIN_EXPECTED_SECTIONS: usize = 3;
const HIGHLIGHTED_SKILL_LIMIT: usize = 8;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResumeOverview {
    pub sections_found: Vec<String>,
    pub limited_structure: bool,
    pub skills_found: Vec<&'static str>,
    pub highlighted_skills: Vec<&'static str>,
    pub additional_skill_count: usize,
}

pub fn analyze_resume_sections(text: &str) -> ResumeOverview {
    let text_lower = text.to_lowercase();

    let sections_found: Vec<String> = RESUME_SECTIONS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|k| text_lower.contains(k)))
        .map(|(section, _)| capitalize(section))
        .collect();

    let skills_found: Vec<&'static str> = TECHNICAL_SKILLS
        .iter()
        .copied()
        .filter(|skill| text_lower.contains(skill))
        .collect();

    let highlighted_skills: Vec<&'static str> = skills_found
        .iter()
        .copied()
        .take(HIGHLIGHTED_SKILL_LIMIT)
        .collect();

    ResumeOverview {
        limited_structure: sections_found.len() < MIN_EXPECTED_SECTIONS,
        additional_skill_count: skills_found.len() - highlighted_skills.len(),
        sections_found,
        highlighted_skills,
        skills_found,
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
