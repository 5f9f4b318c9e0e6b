//! Section formatters — pure functions from candidate data to HTML fragments.
//!
//! Policy: an empty collection yields a styled `empty-section` placeholder,
//! never an empty string. The document assembler decides whether the section
//! wrapper is rendered at all.

use crate::models::user::{EducationItem, Experience, Project, UserData};
use crate::render::bullets::process_bullets;
use crate::render::sanitize::{sanitize, sanitize_or_placeholder};

fn empty_section(message: &str) -> String {
    format!("<div class=\"empty-section\">{message}</div>")
}

/// Renders bullets, substituting a single placeholder item when none exist.
fn bullet_list(bullets: &[String]) -> String {
    if bullets.is_empty() {
        "<li>No details provided</li>".to_string()
    } else {
        process_bullets(bullets)
    }
}

pub fn education_section(education: &[EducationItem]) -> String {
    if education.is_empty() {
        return empty_section("No education information provided");
    }
    education
        .iter()
        .map(|edu| {
            let gpa = edu
                .gpa
                .as_deref()
                .map(|gpa| {
                    format!(
                        "\n    <div class=\"item-detail\"><strong>GPA:</strong> {}</div>",
                        sanitize(gpa)
                    )
                })
                .unwrap_or_default();
            let coursework = if edu.coursework.is_empty() {
                String::new()
            } else {
                format!(
                    "\n    <div class=\"item-detail\"><strong>Relevant Coursework:</strong> {}</div>",
                    edu.coursework
                        .iter()
                        .map(|c| sanitize(c))
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            };
            format!(
                "<div class=\"section-item\">\n    \
                 <div class=\"item-header\">\n        \
                 <span class=\"item-title\">{}</span>\n        \
                 <span class=\"item-date\">{}</span>\n    </div>\n    \
                 <div class=\"item-subtitle\">{}</div>{gpa}{coursework}\n</div>",
                sanitize_or_placeholder(edu.degree.as_deref()),
                sanitize_or_placeholder(edu.duration.as_deref()),
                sanitize_or_placeholder(edu.institute.as_deref()),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Skills render in map order; the first letter of each category label is
/// upper-cased; categories with zero members are skipped entirely.
pub fn skills_section(user: &UserData) -> String {
    if user.skills_empty() {
        return empty_section("No skills information provided");
    }
    let categories = user
        .skill_categories()
        .into_iter()
        .filter(|(_, members)| !members.is_empty())
        .map(|(category, members)| {
            format!(
                "    <div class=\"skill-category\">\n        <strong>{}:</strong>\n        {}\n    </div>",
                sanitize(&capitalize(category)),
                members.iter().map(|m| sanitize(m)).collect::<Vec<_>>().join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!("<div class=\"skills-container\">\n{categories}\n</div>")
}

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

pub fn projects_section(projects: &[Project]) -> String {
    if projects.is_empty() {
        return empty_section("No projects information provided");
    }
    projects
        .iter()
        .map(|project| {
            let tech_stack = project
                .tech_stack
                .as_deref()
                .map(|stack| format!("\n    <div class=\"item-subtitle\">{}</div>", sanitize(stack)))
                .unwrap_or_default();
            format!(
                "<div class=\"section-item\">\n    \
                 <div class=\"item-header\">\n        \
                 <span class=\"item-title\">{}</span>\n    </div>{tech_stack}\n    \
                 <ul class=\"item-bullets\">\n        {}\n    </ul>\n</div>",
                sanitize(project.name.as_deref().unwrap_or("Unnamed Project")),
                bullet_list(&project.bullets),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn experience_section(experience: &[Experience]) -> String {
    if experience.is_empty() {
        return empty_section("No experience information provided");
    }
    experience
        .iter()
        .map(|exp| {
            let location = exp
                .location
                .as_deref()
                .map(|loc| format!(" ({})", sanitize(loc)))
                .unwrap_or_default();
            format!(
                "<div class=\"section-item\">\n    \
                 <div class=\"item-header\">\n        \
                 <span class=\"item-title\">{}</span>\n        \
                 <span class=\"item-date\">{}</span>\n    </div>\n    \
                 <div class=\"item-subtitle\">{}{location}</div>\n    \
                 <ul class=\"item-bullets\">\n        {}\n    </ul>\n</div>",
                sanitize_or_placeholder(exp.company.as_deref()),
                sanitize_or_placeholder(exp.duration.as_deref()),
                sanitize_or_placeholder(exp.title.as_deref()),
                bullet_list(&exp.bullets),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn certifications_section(certifications: &[String]) -> String {
    if certifications.is_empty() {
        return empty_section("No certifications provided");
    }
    let items = certifications
        .iter()
        .map(|cert| format!("<li>{}</li>", sanitize(cert)))
        .collect::<Vec<_>>()
        .join("\n");
    format!("<ul class=\"certification-list\">{items}</ul>")
}

pub fn strengths_section(strengths: &[String]) -> String {
    if strengths.is_empty() {
        return empty_section("No strengths provided");
    }
    let items = strengths
        .iter()
        .map(|strength| format!("<li>{}</li>", sanitize(strength)))
        .collect::<Vec<_>>()
        .join("\n");
    format!("<ul class=\"strengths-list\">{items}</ul>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_education_renders_degree_duration_institute() {
        let education = vec![EducationItem {
            institute: Some("MIT".to_string()),
            duration: Some("2016-2020".to_string()),
            degree: Some("BSc Computer Science".to_string()),
            gpa: None,
            coursework: vec![],
        }];
        let html = education_section(&education);
        assert!(html.contains("BSc Computer Science"));
        assert!(html.contains("2016-2020"));
        assert!(html.contains("MIT"));
        assert!(!html.contains("GPA"));
        assert!(!html.contains("Coursework"));
    }

    #[test]
    fn test_education_optional_gpa_and_coursework() {
        let education = vec![EducationItem {
            institute: Some("MIT".to_string()),
            duration: None,
            degree: None,
            gpa: Some("3.9".to_string()),
            coursework: vec!["Compilers".to_string(), "OS".to_string()],
        }];
        let html = education_section(&education);
        assert!(html.contains("<strong>GPA:</strong> 3.9"));
        assert!(html.contains("Compilers, OS"));
        // Missing degree/duration degrade to the placeholder, not omission.
        assert!(html.contains("N/A"));
    }

    #[test]
    fn test_education_empty_placeholder() {
        assert_eq!(
            education_section(&[]),
            "<div class=\"empty-section\">No education information provided</div>"
        );
    }

    #[test]
    fn test_skills_order_capitalization_and_skipping() {
        let user: UserData = serde_json::from_value(json!({
            "skills": {
                "languages": ["Rust", "Go"],
                "databases": [],
                "tools": ["Git"]
            }
        }))
        .unwrap();
        let html = skills_section(&user);
        assert!(html.contains("<strong>Languages:</strong>"));
        assert!(html.contains("Rust, Go"));
        assert!(html.contains("<strong>Tools:</strong>"));
        assert!(!html.contains("Databases"));
        let languages_at = html.find("Languages").unwrap();
        let tools_at = html.find("Tools").unwrap();
        assert!(languages_at < tools_at, "map order must be preserved");
    }

    #[test]
    fn test_skills_all_empty_placeholder() {
        let user = UserData::default();
        assert!(skills_section(&user).contains("No skills information provided"));
    }

    #[test]
    fn test_projects_tech_stack_optional_and_bullet_placeholder() {
        let projects = vec![Project {
            name: Some("Indexer".to_string()),
            tech_stack: None,
            bullets: vec![],
        }];
        let html = projects_section(&projects);
        assert!(html.contains("Indexer"));
        assert!(html.contains("<li>No details provided</li>"));
        assert!(!html.contains("item-subtitle"));
    }

    #[test]
    fn test_projects_unnamed_placeholder() {
        let projects = vec![Project::default()];
        assert!(projects_section(&projects).contains("Unnamed Project"));
    }

    #[test]
    fn test_experience_location_in_parentheses() {
        let experience = vec![Experience {
            company: Some("Acme".to_string()),
            duration: Some("2020-2022".to_string()),
            title: Some("Dev".to_string()),
            location: Some("Remote".to_string()),
            bullets: vec!["Improved throughput by 30%".to_string()],
        }];
        let html = experience_section(&experience);
        assert!(html.contains("Dev (Remote)"));
        assert!(html.contains("<strong>30%</strong>"));
    }

    #[test]
    fn test_experience_empty_placeholder() {
        assert!(experience_section(&[]).contains("No experience information provided"));
    }

    #[test]
    fn test_certifications_and_strengths_lists() {
        let html = certifications_section(&["AWS SAA".to_string()]);
        assert!(html.contains("<ul class=\"certification-list\"><li>AWS SAA</li></ul>"));
        let html = strengths_section(&["Ownership & grit".to_string()]);
        assert!(html.contains("<li>Ownership &amp; grit</li>"));
        assert!(certifications_section(&[]).contains("No certifications provided"));
        assert!(strengths_section(&[]).contains("No strengths provided"));
    }

    #[test]
    fn test_untrusted_input_is_escaped_everywhere() {
        let experience = vec![Experience {
            company: Some("<script>evil()</script>".to_string()),
            duration: None,
            title: None,
            location: None,
            bullets: vec![],
        }];
        let html = experience_section(&experience);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
