//! Built-in role profiles — the fixed skill table every résumé is scored against.
//!
//! Skill names are stored lower-case; matching lower-cases the document, never the skill.
//! Declaration order matters: it drives found/missing ordering and the
//! "first two missing" recommendations.

use serde::Serialize;

/// A named target role with five ordered skill lists.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoleProfile {
    pub name: &'static str,
    pub core_skills: &'static [&'static str],
    pub advanced_skills: &'static [&'static str],
    pub tools: &'static [&'static str],
    pub concepts: &'static [&'static str],
    pub experience_keywords: &'static [&'static str],
}

// ────────────────────────────────────────────────────────────────────────────
// Static profile table
// ────────────────────────────────────────────────────────────────────────────

static ROLE_PROFILES: [RoleProfile; 6] = [
    RoleProfile {
        name: "Data Scientist",
        core_skills: &["python", "machine learning", "statistics", "sql", "data analysis"],
        advanced_skills: &["tensorflow", "pytorch", "deep learning", "nlp", "computer vision"],
        tools: &["pandas", "numpy", "scikit-learn", "jupyter", "tableau"],
        concepts: &["data cleaning", "feature engineering", "model deployment", "ab testing"],
        experience_keywords: &["data science", "ml", "predictive modeling", "data mining"],
    },
    RoleProfile {
        name: "Software Engineer",
        core_skills: &["python", "java", "javascript", "sql", "algorithms"],
        advanced_skills: &["system design", "microservices", "aws", "docker", "kubernetes"],
        tools: &["git", "jenkins", "docker", "postman", "visual studio"],
        concepts: &["ood", "design patterns", "ci/cd", "rest api", "agile"],
        experience_keywords: &["software development", "full stack", "backend", "frontend"],
    },
    RoleProfile {
        name: "Data Analyst",
        core_skills: &["sql", "excel", "python", "tableau", "data visualization"],
        advanced_skills: &["power bi", "r", "etl", "data warehousing", "dashboard"],
        tools: &["excel", "tableau", "power bi", "sql", "python"],
        concepts: &["reporting", "kpi", "metrics", "data governance", "business intelligence"],
        experience_keywords: &["data analysis", "reporting", "insights", "analytics"],
    },
    RoleProfile {
        name: "Machine Learning Engineer",
        core_skills: &["python", "machine learning", "deep learning", "sql", "aws"],
        advanced_skills: &["tensorflow", "pytorch", "mlops", "model deployment", "docker"],
        tools: &["tensorflow", "pytorch", "docker", "kubernetes", "airflow"],
        concepts: &["model serving", "feature store", "model monitoring", "experiment tracking"],
        experience_keywords: &["ml engineering", "model deployment", "mlops", "production"],
    },
    RoleProfile {
        name: "Web Developer",
        core_skills: &["javascript", "html", "css", "react", "node.js"],
        advanced_skills: &["typescript", "redux", "graphql", "next.js", "aws"],
        tools: &["react", "node.js", "mongodb", "express", "git"],
        concepts: &["responsive design", "rest api", "authentication", "web performance"],
        experience_keywords: &["web development", "frontend", "backend", "full stack"],
    },
    RoleProfile {
        name: "DevOps Engineer",
        core_skills: &["aws", "docker", "kubernetes", "linux", "python"],
        advanced_skills: &["terraform", "ansible", "jenkins", "prometheus", "grafana"],
        tools: &["docker", "kubernetes", "jenkins", "terraform", "aws"],
        concepts: &["ci/cd", "infrastructure as code", "monitoring", "cloud security"],
        experience_keywords: &["devops", "cloud", "infrastructure", "automation"],
    },
];

/// All built-in profiles, in presentation order.
pub fn all_profiles() -> &'static [RoleProfile] {
    &ROLE_PROFILES
}

/// Looks up a profile by its exact display name.
pub fn find_profile(name: &str) -> Option<&'static RoleProfile> {
    all_profiles().iter().find(|p| p.name == name)
}

/// Names of every built-in role, in table order.
pub fn role_names() -> Vec<&'static str> {
    all_profiles().iter().map(|p| p.name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_profiles_ship_built_in() {
        assert_eq!(
            role_names(),
            vec![
                "Data Scientist",
                "Software Engineer",
                "Data Analyst",
                "Machine Learning Engineer",
                "Web Developer",
                "DevOps Engineer",
            ]
        );
    }

    #[test]
    fn test_find_profile_is_exact_match() {
        assert!(find_profile("Data Scientist").is_some());
        assert!(find_profile("data scientist").is_none());
        assert!(find_profile("NotARole").is_none());
    }

    #[test]
    fn test_data_scientist_core_skills_order() {
        let p = find_profile("Data Scientist").unwrap();
        assert_eq!(
            p.core_skills,
            &["python", "machine learning", "statistics", "sql", "data analysis"]
        );
    }

    #[test]
    fn test_all_skills_are_lowercase() {
        for p in all_profiles() {
            let lists = [
                p.core_skills,
                p.advanced_skills,
                p.tools,
                p.concepts,
                p.experience_keywords,
            ];
            for skill in lists.iter().flat_map(|l| l.iter()) {
                assert_eq!(*skill, skill.to_lowercase(), "{} in {}", skill, p.name);
            }
        }
    }
}
