//! Role match scoring — weighted skill coverage of a résumé against a role profile.
//!
//! Algorithm:
//! 1. Per category, `score = 100 × found / total` (0 for an empty category), where a
//!    skill is found if it is a substring of the lower-cased text.
//! 2. `overall = 0.40×core + 0.30×advanced + 0.15×tools + 0.10×concepts + 0.05×experience`
//! 3. Recommendations: tier message, first two missing core, first two missing advanced,
//!    then one learning-path line per notable missing skill.
//!
//! Pure: no I/O, no shared mutable state.

use serde::Serialize;

use crate::analysis::profiles::{find_profile, RoleProfile};

/// Category weights for the overall score. They sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryWeights {
    pub core: f64,
    pub advanced: f64,
    pub tools: f64,
    pub concepts: f64,
    pub experience: f64,
}

pub const CATEGORY_WEIGHTS: CategoryWeights = CategoryWeights {
    core: 0.40,
    advanced: 0.30,
    tools: 0.15,
    concepts: 0.10,
    experience: 0.05,
};

const MODERATE_THRESHOLD: f64 = 50.0;
const STRONG_THRESHOLD: f64 = 70.0;

/// Notable skills with a fixed learning-path suggestion, checked in this order.
const LEARNING_PATHS: &[(&str, &str)] = &[
    ("aws", "Cloud: Start with AWS Fundamentals certification"),
    ("docker", "DevOps: Learn Docker containerization basics"),
    (
        "machine learning",
        "ML: Practice with Scikit-learn and basic algorithms",
    ),
];

const RESOURCE_MAP: &[(&str, &[&str])] = &[
    (
        "python",
        &[
            "Codecademy Python Course",
            "Real Python Tutorials",
            "Python.org Documentation",
        ],
    ),
    (
        "machine learning",
        &[
            "Coursera ML by Andrew Ng",
            "Fast.ai Practical Deep Learning",
            "Kaggle Learn",
        ],
    ),
    (
        "aws",
        &[
            "AWS Training & Certification",
            "A Cloud Guru",
            "AWS Whitepapers",
        ],
    ),
    (
        "docker",
        &[
            "Docker Getting Started",
            "Kubernetes.io Tutorials",
            "DevOps Roadmap",
        ],
    ),
];

/// At most this many other roles are scored alongside the primary one.
pub const MAX_COMPARED_ROLES: usize = 2;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryScores {
    pub core_skills: f64,
    pub advanced_skills: f64,
    pub tools: f64,
    pub concepts: f64,
    pub experience: f64,
}

/// Found/missing partition of one skill list, in profile order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SkillPartition {
    pub found: Vec<&'static str>,
    pub missing: Vec<&'static str>,
}

impl SkillPartition {
    fn of(skills: &'static [&'static str], text_lower: &str) -> Self {
        let (found, missing) = skills.iter().partition(|s| text_lower.contains(**s));
        Self { found, missing }
    }

    /// Percentage of skills found; 0 for an empty list.
    pub fn coverage(&self) -> f64 {
        let total = self.found.len() + self.missing.len();
        if total == 0 {
            return 0.0;
        }
        self.found.len() as f64 / total as f64 * 100.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillBreakdown {
    pub core: SkillPartition,
    pub advanced: SkillPartition,
    pub tools: SkillPartition,
    pub concepts: SkillPartition,
    pub experience: SkillPartition,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LearningResource {
    pub skill: &'static str,
    pub resources: Vec<&'static str>,
}

/// Full match result for one (document, role) pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleMatch {
    pub role: &'static str,
    pub overall_score: f64, // 0 – 100
    pub category_scores: CategoryScores,
    pub skills: SkillBreakdown,
    pub recommendations: Vec<String>,
    pub learning_resources: Vec<LearningResource>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleComparison {
    pub role: &'static str,
    pub overall_score: f64,
}

// ────────────────────────────────────────────────────────────────────────────
// Scoring
// ────────────────────────────────────────────────────────────────────────────

/// Scores `text` against the named role. `None` when the role is not a built-in profile.
pub fn score_role(text: &str, role: &str) -> Option<RoleMatch> {
    find_profile(role).map(|profile| score_profile(text, profile))
}

pub fn score_profile(text: &str, profile: &'static RoleProfile) -> RoleMatch {
    let text_lower = text.to_lowercase();

    let skills = SkillBreakdown {
        core: SkillPartition::of(profile.core_skills, &text_lower),
        advanced: SkillPartition::of(profile.advanced_skills, &text_lower),
        tools: SkillPartition::of(profile.tools, &text_lower),
        concepts: SkillPartition::of(profile.concepts, &text_lower),
        experience: SkillPartition::of(profile.experience_keywords, &text_lower),
    };

    let category_scores = CategoryScores {
        core_skills: skills.core.coverage(),
        advanced_skills: skills.advanced.coverage(),
        tools: skills.tools.coverage(),
        concepts: skills.concepts.coverage(),
        experience: skills.experience.coverage(),
    };

    let overall_score = weighted_overall(&category_scores, &CATEGORY_WEIGHTS);
    let recommendations =
        build_recommendations(overall_score, &skills.core.missing, &skills.advanced.missing);
    let learning_resources = learning_resources_for(&skills.core.missing);

    RoleMatch {
        role: profile.name,
        overall_score,
        category_scores,
        skills,
        recommendations,
        learning_resources,
    }
}

fn weighted_overall(scores: &CategoryScores, w: &CategoryWeights) -> f64 {
    (scores.core_skills * w.core
        + scores.advanced_skills * w.advanced
        + scores.tools * w.tools
        + scores.concepts * w.concepts
        + scores.experience * w.experience)
        .clamp(0.0, 100.0)
}

/// Builds the improvement plan in its fixed order. Thresholds: `< 50`, `< 70`, else.
fn build_recommendations(
    overall_score: f64,
    missing_core: &[&str],
    missing_advanced: &[&str],
) -> Vec<String> {
    let mut recs = Vec::new();

    let tier = if overall_score < MODERATE_THRESHOLD {
        "Major Skills Gap: Focus on core skills first"
    } else if overall_score < STRONG_THRESHOLD {
        "Moderate Skills Gap: Build on your foundation"
    } else {
        "Strong Foundation: Focus on advanced specialization"
    };
    recs.push(tier.to_string());

    if !missing_core.is_empty() {
        recs.push(format!("Priority: Learn {}", first_two(missing_core)));
    }
    if !missing_advanced.is_empty() {
        recs.push(format!("Next Level: Explore {}", first_two(missing_advanced)));
    }

    for (skill, path) in LEARNING_PATHS {
        if missing_core.contains(skill) || missing_advanced.contains(skill) {
            recs.push(path.to_string());
        }
    }

    recs
}

fn first_two(skills: &[&str]) -> String {
    skills.iter().take(2).copied().collect::<Vec<_>>().join(", ")
}

/// Resources for the first two missing core skills that have an entry in the map.
fn learning_resources_for(missing_core: &[&'static str]) -> Vec<LearningResource> {
    missing_core
        .iter()
        .take(2)
        .filter_map(|skill| {
            RESOURCE_MAP
                .iter()
                .find(|(name, _)| name == skill)
                .map(|(name, resources)| LearningResource {
                    skill: *name,
                    resources: resources.to_vec(),
                })
        })
        .collect()
}

/// Scores the primary role plus up to `MAX_COMPARED_ROLES` others, in request order.
///
/// Unknown roles and repeats of already-listed roles are skipped. An unknown
/// primary role is dropped from the output but does not stop the comparison.
pub fn compare_roles(text: &str, primary: &str, others: &[String]) -> Vec<RoleComparison> {
    let mut roles: Vec<&str> = vec![primary];
    for role in others.iter().map(String::as_str) {
        if roles.len() > MAX_COMPARED_ROLES {
            break;
        }
        if find_profile(role).is_some() && !roles.contains(&role) {
            roles.push(role);
        }
    }

    roles
        .into_iter()
        .filter_map(|role| score_role(text, role))
        .map(|m| RoleComparison {
            role: m.role,
            overall_score: m.overall_score,
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
