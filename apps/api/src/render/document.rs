//! Document assembler — composes a complete, self-contained HTML resume from
//! the section formatters.
//!
//! Section order is fixed: Professional Summary, Technical Skills,
//! Professional Experience, Projects, Education, Certifications. Optional
//! sections drop their `<section>` wrapper entirely when the source list is
//! empty; Technical Skills always renders. The head carries a
//! `resume-sections` manifest meta naming the canonical labels, so an
//! assembled document satisfies the same structural checklist applied to
//! model output regardless of which sections made it into the body.

use crate::models::user::UserData;
use crate::render::sanitize::sanitize;
use crate::render::sections::{
    certifications_section, education_section, experience_section, projects_section,
    skills_section, strengths_section,
};

/// Canonical section labels, in render order. Also emitted as the
/// `resume-sections` manifest.
pub const SECTION_LABELS: &[&str] = &[
    "Professional Summary",
    "Technical Skills",
    "Professional Experience",
    "Projects",
    "Education",
    "Certifications",
];

const FONT_LINKS: &str = r#"<link href="https://fonts.googleapis.com/css2?family=Roboto:wght@300;400;500;700&family=Open+Sans:wght@400;600;700&display=swap" rel="stylesheet">
    <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.0.0/css/all.min.css">"#;

/// Embedded stylesheet. A static asset: nothing in it is data-dependent.
const STYLE_SHEET: &str = r#"
        :root {
            --primary-color: #2b6cb0;
            --secondary-color: #4a5568;
            --accent-color: #4299e1;
            --text-color: #2d3748;
            --light-gray: #f7fafc;
            --medium-gray: #e2e8f0;
        }

        body {
            font-family: 'Roboto', 'Open Sans', sans-serif;
            line-height: 1.6;
            color: var(--text-color);
            max-width: 850px;
            margin: 0 auto;
            padding: 2rem;
            background: white;
        }

        .resume-header {
            text-align: center;
            margin-bottom: 1.5rem;
            border-bottom: 3px solid var(--primary-color);
            padding-bottom: 1rem;
        }

        .resume-name {
            font-size: 2.5rem;
            font-weight: 700;
            color: var(--primary-color);
            margin: 0;
            letter-spacing: -0.5px;
        }

        .resume-title {
            font-size: 1.3rem;
            font-weight: 500;
            color: var(--secondary-color);
            margin: 0.5rem 0;
        }

        .contact-info {
            display: flex;
            justify-content: center;
            flex-wrap: wrap;
            gap: 1.5rem;
            margin-top: 0.5rem;
        }

        .contact-item {
            display: flex;
            align-items: center;
            gap: 0.5rem;
            font-size: 0.9rem;
        }

        .resume-section {
            margin-bottom: 1.5rem;
        }

        .section-title {
            font-size: 1.3rem;
            font-weight: 600;
            color: var(--primary-color);
            border-bottom: 2px solid var(--medium-gray);
            padding-bottom: 0.3rem;
            margin-bottom: 0.8rem;
        }

        .section-item {
            margin-bottom: 1.2rem;
        }

        .item-header {
            display: flex;
            justify-content: space-between;
            margin-bottom: 0.3rem;
        }

        .item-title {
            font-weight: 600;
            font-size: 1.05rem;
        }

        .item-date {
            font-style: italic;
            color: var(--secondary-color);
        }

        .item-subtitle {
            font-weight: 500;
            color: var(--secondary-color);
            margin-bottom: 0.3rem;
        }

        .item-detail {
            margin-bottom: 0.3rem;
            font-size: 0.95rem;
        }

        .item-bullets {
            margin: 0.5rem 0 0 1rem;
            padding-left: 1rem;
        }

        .item-bullets li {
            margin-bottom: 0.3rem;
        }

        .skills-container {
            display: flex;
            flex-wrap: wrap;
            gap: 1rem 2rem;
        }

        .skill-category {
            line-height: 1.4;
        }

        .empty-section {
            color: var(--secondary-color);
            font-style: italic;
        }

        @media print {
            body {
                padding: 0;
                font-size: 12pt;
            }

            .resume-name {
                font-size: 24pt;
            }

            a {
                text-decoration: none;
                color: inherit;
            }
        }

        @media (max-width: 768px) {
            .resume-name {
                font-size: 2rem;
            }

            .contact-info {
                flex-direction: column;
                align-items: center;
                gap: 0.5rem;
            }

            .item-header {
                flex-direction: column;
            }

            .item-date {
                margin-top: 0.2rem;
            }
        }
"#;

/// Assembles the full HTML document for the given candidate data.
pub fn assemble(user: &UserData) -> String {
    let name = sanitize(user.name.as_deref().unwrap_or("Unknown Name"));
    let title = sanitize(user.title.as_deref().unwrap_or("Unknown Title"));

    let mut sections = Vec::new();
    if !user.strengths.is_empty() {
        sections.push(wrap_section(
            "PROFESSIONAL SUMMARY",
            &strengths_section(&user.strengths),
        ));
    }
    // Technical Skills always renders, empty or not.
    sections.push(wrap_section("TECHNICAL SKILLS", &skills_section(user)));
    if !user.experience.is_empty() {
        sections.push(wrap_section(
            "PROFESSIONAL EXPERIENCE",
            &experience_section(&user.experience),
        ));
    }
    if !user.projects.is_empty() {
        sections.push(wrap_section("PROJECTS", &projects_section(&user.projects)));
    }
    if !user.education.is_empty() {
        sections.push(wrap_section("EDUCATION", &education_section(&user.education)));
    }
    if !user.certifications.is_empty() {
        sections.push(wrap_section(
            "CERTIFICATIONS",
            &certifications_section(&user.certifications),
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <meta name="resume-sections" content="{manifest}">
    <title>Resume - {name}</title>
    {FONT_LINKS}
    <style>{STYLE_SHEET}    </style>
</head>
<body>
    <div class="resume-header">
        <h1 class="resume-name">{name}</h1>
        <div class="resume-title">{title}</div>
        <div class="contact-info">
{contacts}
        </div>
    </div>

{sections}
</body>
</html>
"#,
        manifest = SECTION_LABELS.join(", "),
        contacts = contact_items(user),
        sections = sections.join("\n\n"),
    )
}

fn wrap_section(label: &str, fragment: &str) -> String {
    format!(
        "    <section class=\"resume-section\">\n        <h2 class=\"section-title\">{label}</h2>\n        {fragment}\n    </section>"
    )
}

/// Contact items render only when the field is actually present — absence is
/// a real `None`, not a sentinel comparison.
fn contact_items(user: &UserData) -> String {
    let fields: [(&Option<String>, &str); 5] = [
        (&user.email, "fas fa-envelope"),
        (&user.phone, "fas fa-phone"),
        (&user.location, "fas fa-map-marker-alt"),
        (&user.github, "fab fa-github"),
        (&user.linkedin, "fab fa-linkedin"),
    ];
    fields
        .iter()
        .filter_map(|(value, icon)| {
            value.as_deref().map(|v| {
                format!(
                    "            <div class=\"contact-item\"><i class=\"{icon}\"></i> {}</div>",
                    sanitize(v)
                )
            })
        })
        .collect::<Vec<_>>()
        .join("\n")
}
