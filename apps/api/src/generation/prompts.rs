//! Prompt constants and the prompt builder for resume generation.
//!
//! The user turn serializes the candidate as a natural-language block (never
//! HTML) followed by the target job description, a keyword snapshot, and the
//! output requirements. The system instruction states the same structural
//! constraints imperatively and is not data-dependent.

use crate::generation::keywords::analyze_keywords;
use crate::models::user::UserData;

/// Fixed system instruction sent with every generation call.
pub const GENERATION_SYSTEM: &str = r#"You are an ATS resume expert that generates perfect HTML resumes. Follow these rules:
1. Output ONLY valid HTML code with embedded CSS styling (no external files)
2. Include a complete HTML document structure with proper head and body tags
3. Use professional fonts (like Open Sans or Roboto from Google Fonts)
4. Include Font Awesome icons for contact information
5. Maintain a clean, professional design with a blue color scheme
6. Ensure the resume is responsive and works on different screen sizes
7. Required sections:
   - Header with contact info (name, title, email, phone, location, GitHub, LinkedIn)
   - Professional Summary
   - Technical Skills (multi-column layout)
   - Professional Experience
   - Education
   - Projects
   - Certifications & Achievements
8. Use semantic HTML and proper section organization
9. Include CSS styling that mimics a professional LaTeX resume aesthetic
10. Format for ATS compatibility with clear section headings
11. Use strong action verbs and metrics where possible
12. Never wrap the output in markdown code block markers
13. Example structure:
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Resume - [Name]</title>
    <style>
        /* Professional CSS styling here */
    </style>
</head>
<body>
    <!-- Resume content here -->
</body>
</html>"#;

/// User-turn template. Replace: {candidate_block}, {job_description},
/// {keyword_snapshot}
const GENERATION_PROMPT_TEMPLATE: &str = r#"Create a tailored, ATS-optimized resume for the candidate below, targeting the given job description.

CANDIDATE PROFILE
{candidate_block}

TARGET JOB DESCRIPTION
{job_description}

KEYWORD SNAPSHOT (incorporate naturally where the candidate's background supports them — never keyword-stuff)
{keyword_snapshot}

OUTPUT REQUIREMENTS
1. Return a complete HTML document: doctype, html root, head and body
2. Include these named sections: Professional Summary, Technical Skills, Professional Experience, Education, Projects
3. Use semantic tags (header, section, h1/h2, ul/li) with clear section headings
4. Embed all CSS in a single style element; no external stylesheets beyond font and icon links
5. Highlight quantified achievements (percentages, dollar amounts, multipliers)
6. Do NOT emit markdown code fences or any text outside the HTML document"#;

/// Builds the sole user-turn content for a generation call.
pub fn build_prompt(user: &UserData, job_description: &str) -> String {
    GENERATION_PROMPT_TEMPLATE
        .replace("{candidate_block}", &candidate_block(user))
        .replace("{job_description}", job_description)
        .replace("{keyword_snapshot}", &keyword_snapshot(job_description))
}

/// Serializes candidate data as plain text, one concern per block. Absent
/// scalar fields degrade to "N/A"; absent collections state so explicitly.
fn candidate_block(user: &UserData) -> String {
    let field = |value: &Option<String>| value.as_deref().unwrap_or("N/A").to_string();

    let mut lines = vec![
        format!("Name: {}", user.name.as_deref().unwrap_or("Unknown Name")),
        format!("Title: {}", user.title.as_deref().unwrap_or("Unknown Title")),
        format!("Email: {}", field(&user.email)),
        format!("Phone: {}", field(&user.phone)),
        format!("Location: {}", field(&user.location)),
        format!("GitHub: {}", field(&user.github)),
        format!("LinkedIn: {}", field(&user.linkedin)),
    ];

    lines.push("\nEDUCATION".to_string());
    if user.education.is_empty() {
        lines.push("No education provided".to_string());
    }
    for edu in &user.education {
        let mut line = format!(
            "- {} at {} ({})",
            edu.degree.as_deref().unwrap_or("N/A"),
            edu.institute.as_deref().unwrap_or("N/A"),
            edu.duration.as_deref().unwrap_or("N/A"),
        );
        if let Some(gpa) = &edu.gpa {
            line.push_str(&format!(", GPA {gpa}"));
        }
        if !edu.coursework.is_empty() {
            line.push_str(&format!("; coursework: {}", edu.coursework.join(", ")));
        }
        lines.push(line);
    }

    lines.push("\nSKILLS".to_string());
    if user.skills_empty() {
        lines.push("No skills provided".to_string());
    }
    for (category, members) in user.skill_categories() {
        if !members.is_empty() {
            lines.push(format!("- {category}: {}", members.join(", ")));
        }
    }

    lines.push("\nPROFESSIONAL EXPERIENCE".to_string());
    if user.experience.is_empty() {
        lines.push("No experience provided".to_string());
    }
    for exp in &user.experience {
        let location = exp
            .location
            .as_deref()
            .map(|loc| format!(", {loc}"))
            .unwrap_or_default();
        lines.push(format!(
            "- {} at {} ({}{location})",
            exp.title.as_deref().unwrap_or("N/A"),
            exp.company.as_deref().unwrap_or("N/A"),
            exp.duration.as_deref().unwrap_or("N/A"),
        ));
        for bullet in &exp.bullets {
            lines.push(format!("  * {bullet}"));
        }
    }

    lines.push("\nPROJECTS".to_string());
    if user.projects.is_empty() {
        lines.push("No projects provided".to_string());
    }
    for project in &user.projects {
        let stack = project
            .tech_stack
            .as_deref()
            .map(|stack| format!(" [{stack}]"))
            .unwrap_or_default();
        lines.push(format!(
            "- {}{stack}",
            project.name.as_deref().unwrap_or("Unnamed Project"),
        ));
        for bullet in &project.bullets {
            lines.push(format!("  * {bullet}"));
        }
    }

    lines.push("\nCERTIFICATIONS".to_string());
    if user.certifications.is_empty() {
        lines.push("No certifications provided".to_string());
    }
    for cert in &user.certifications {
        lines.push(format!("- {cert}"));
    }

    lines.push("\nSTRENGTHS".to_string());
    if user.strengths.is_empty() {
        lines.push("No strengths provided".to_string());
    }
    for strength in &user.strengths {
        lines.push(format!("- {strength}"));
    }

    lines.join("\n")
}

fn keyword_snapshot(job_description: &str) -> String {
    let analysis = analyze_keywords(job_description);
    let phrases = if analysis.phrases.is_empty() {
        "none".to_string()
    } else {
        analysis.phrases.join(", ")
    };
    let skills = if analysis.matched_skills.is_empty() {
        "none detected".to_string()
    } else {
        analysis.matched_skills.join(", ")
    };
    format!("Top phrases: {phrases}\nSkills named in the job description: {skills}")
}
