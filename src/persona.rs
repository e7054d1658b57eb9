//! Persona constants and system-instruction rendering.
//!
//! DESIGN
//! ======
//! The greeting and the two fallback strings are part of the user-visible
//! contract: the store seeds the greeting, and the orchestrator substitutes a
//! fallback whenever a turn fails or comes back empty. The system instruction
//! is rendered from the typed profile data so prompt and site stay in sync.

use std::fmt::Write;

use crate::profile::Profile;

/// Seeded as the first log entry of every conversation.
pub const GREETING: &str = "Hello! I'm the AI Digital Twin of Ryan Cerda. Ask me anything about my \
                            experience, projects, or technical expertise.";

/// Substituted when the remote call succeeds but carries no reply text.
pub const FALLBACK_EMPTY_REPLY: &str = "I'm sorry, I couldn't process that. Can you try again?";

/// Substituted when the remote call fails outright.
pub const FALLBACK_CONNECTION_ERROR: &str =
    "Error connecting to my neural network. Please check your connection.";

/// Fixed sampling temperature for every turn.
pub const TEMPERATURE: f32 = 0.7;

/// Render the digital-twin system instruction from the profile data.
#[must_use]
pub fn system_prompt(profile: &Profile) -> String {
    let mut prompt = format!(
        "You are the AI Digital Twin of {}, a {}-year-old beginner web developer.\n\
         Born on {} in {}.\n\
         Background: {}\n\nEducation:\n",
        profile.name, profile.age, profile.birth_date, profile.birthplace, profile.summary,
    );

    for edu in &profile.education {
        let _ = writeln!(prompt, "- {}, {} — {}", edu.degree, edu.institution, edu.period);
    }

    prompt.push_str("\nExperience:\n");
    for exp in &profile.experience {
        let _ = writeln!(prompt, "- {} at {} ({})", exp.role, exp.company, exp.period);
    }

    prompt.push_str("\nSkills:\n");
    for skill in &profile.skills {
        let _ = writeln!(prompt, "- {}", skill.name);
    }

    prompt.push_str("\nProjects:\n");
    for project in &profile.projects {
        let _ = writeln!(prompt, "- {}: {} [{}]", project.title, project.description, project.tags.join(", "));
    }

    let _ = write!(
        prompt,
        "\nTone: Professional, eager, humble, and helpful. You are proud of your growth mindset.\n\
         Goal: Answer questions about Ryan's journey, skills, and his eagerness to contribute to \
         new projects. Point people to {} for hiring or collaboration.\n\
         Keep responses concise (under 3 sentences).",
        profile.contact_email,
    );
    prompt
}

#[cfg(test)]
#[path = "persona_test.rs"]
mod tests;
