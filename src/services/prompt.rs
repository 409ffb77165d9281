//! Prompt assembly — system prompt built from the static profile document.
//!
//! DESIGN
//! ======
//! `build_prompt` is a pure function: same profile in, same string out, no
//! I/O, no clock. Empty fields are omitted from the rendered sections
//! rather than producing an error, so a sparse profile still yields a
//! usable prompt.

use std::fmt::Write;

use serde::Deserialize;

/// Default profile document compiled into the binary; `PROFILE_PATH`
/// points at a replacement JSON file when set.
const DEFAULT_PROFILE: &str = include_str!("../../data/profile.json");

// =============================================================================
// PROFILE DOCUMENT
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub summary: String,
    pub location: String,
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
    pub experience: Vec<Position>,
    pub contact: Contact,
    pub guidance: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub stack: Vec<String>,
    pub link: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Position {
    pub company: String,
    pub role: String,
    pub period: String,
    pub summary: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub email: String,
    pub github: String,
    pub linkedin: String,
    pub website: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("failed to read profile file '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse profile JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Load the profile: `PROFILE_PATH` if set, the embedded default otherwise.
///
/// # Errors
///
/// Returns an error if the override file is unreadable or either document
/// is not valid profile JSON.
pub fn load_profile() -> Result<Profile, ProfileError> {
    match std::env::var("PROFILE_PATH") {
        Ok(path) => {
            let raw = std::fs::read_to_string(&path).map_err(|source| ProfileError::Io { path, source })?;
            Ok(serde_json::from_str(&raw)?)
        }
        Err(_) => Ok(serde_json::from_str(DEFAULT_PROFILE)?),
    }
}

// =============================================================================
// PROMPT ASSEMBLY
// =============================================================================

/// Build the deterministic system prompt from the profile, optionally
/// appending extra context (e.g. the page the visitor is reading).
#[must_use]
pub fn build_prompt(profile: &Profile, additional_context: Option<&str>) -> String {
    let mut out = String::new();

    if profile.name.is_empty() {
        let _ = writeln!(out, "You are the assistant on a personal portfolio website.");
    } else {
        let _ = writeln!(
            out,
            "You are the assistant on {}'s personal portfolio website. Visitors ask you about {}'s work and background.",
            profile.name, profile.name
        );
    }

    if !profile.title.is_empty() || !profile.summary.is_empty() || !profile.location.is_empty() {
        let _ = writeln!(out, "\n## About");
        if !profile.title.is_empty() {
            let _ = writeln!(out, "Title: {}", profile.title);
        }
        if !profile.location.is_empty() {
            let _ = writeln!(out, "Location: {}", profile.location);
        }
        if !profile.summary.is_empty() {
            let _ = writeln!(out, "{}", profile.summary);
        }
    }

    if !profile.skills.is_empty() {
        let _ = writeln!(out, "\n## Skills");
        let _ = writeln!(out, "{}", profile.skills.join(", "));
    }

    if !profile.projects.is_empty() {
        let _ = writeln!(out, "\n## Projects");
        for project in &profile.projects {
            let _ = write!(out, "- {}: {}", project.name, project.description);
            if !project.stack.is_empty() {
                let _ = write!(out, " (built with {})", project.stack.join(", "));
            }
            if !project.link.is_empty() {
                let _ = write!(out, " — {}", project.link);
            }
            let _ = writeln!(out);
        }
    }

    if !profile.experience.is_empty() {
        let _ = writeln!(out, "\n## Experience");
        for position in &profile.experience {
            let _ = write!(out, "- {} at {} ({})", position.role, position.company, position.period);
            if !position.summary.is_empty() {
                let _ = write!(out, ": {}", position.summary);
            }
            let _ = writeln!(out);
        }
    }

    let contact = &profile.contact;
    if !contact.email.is_empty() || !contact.github.is_empty() || !contact.linkedin.is_empty() || !contact.website.is_empty() {
        let _ = writeln!(out, "\n## Contact");
        for (label, value) in [
            ("Email", &contact.email),
            ("GitHub", &contact.github),
            ("LinkedIn", &contact.linkedin),
            ("Website", &contact.website),
        ] {
            if !value.is_empty() {
                let _ = writeln!(out, "{label}: {value}");
            }
        }
    }

    if !profile.guidance.is_empty() {
        let _ = writeln!(out, "\n## Answering guidance");
        for rule in &profile.guidance {
            let _ = writeln!(out, "- {rule}");
        }
    }

    if let Some(extra) = additional_context {
        let extra = extra.trim();
        if !extra.is_empty() {
            let _ = writeln!(out, "\n## Additional context");
            let _ = writeln!(out, "{extra}");
        }
    }

    out
}

#[cfg(test)]
#[path = "prompt_test.rs"]
mod tests;
