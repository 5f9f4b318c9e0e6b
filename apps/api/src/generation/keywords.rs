//! Keyword analysis over a raw job description.
//!
//! Two deterministic passes feed the prompt builder: a generic 1-3 word
//! phrase tokenization (first 20 unique phrases, in order of appearance) and
//! a case-insensitive containment match against a fixed skill inventory.

use std::sync::OnceLock;

use regex::Regex;

/// Common skills probed for by containment match. Matching is substring,
/// case-insensitive; the JD is never parsed beyond this.
const COMMON_SKILLS: &[&str] = &[
    "JavaScript",
    "React",
    "TypeScript",
    "Node.js",
    "Python",
    "SQL",
    "NoSQL",
    "MongoDB",
    "PostgreSQL",
    "AWS",
    "Docker",
    "Kubernetes",
    "CI/CD",
    "Git",
    "DevOps",
    "Machine Learning",
    "Data Analysis",
    "UI/UX",
    "Agile",
    "Scrum",
];

const MAX_PHRASES: usize = 20;

fn phrase_pattern() -> &'static Regex {
    static PHRASE: OnceLock<Regex> = OnceLock::new();
    PHRASE.get_or_init(|| {
        Regex::new(r"\b[\w']+(?:\s+[\w']+){0,2}\b").expect("valid phrase regex")
    })
}

/// Result of analyzing a job description.
#[derive(Debug, Clone, Default)]
pub struct KeywordAnalysis {
    /// First 20 unique 1-3 word phrases, in order of appearance.
    pub phrases: Vec<String>,
    /// Skills from the fixed inventory mentioned anywhere in the JD.
    pub matched_skills: Vec<String>,
}

pub fn analyze_keywords(job_description: &str) -> KeywordAnalysis {
    let mut phrases: Vec<String> = Vec::new();
    for m in phrase_pattern().find_iter(job_description) {
        let phrase = m.as_str().to_string();
        if !phrases.contains(&phrase) {
            phrases.push(phrase);
            if phrases.len() == MAX_PHRASES {
                break;
            }
        }
    }

    let jd_lower = job_description.to_lowercase();
    let matched_skills = COMMON_SKILLS
        .iter()
        .filter(|skill| jd_lower.contains(&skill.to_lowercase()))
        .map(|skill| skill.to_string())
        .collect();

    KeywordAnalysis {
        phrases,
        matched_skills,
    }
}
