//! Skill pill suggestions, crowdsourced from the loaded profiles.

use std::collections::HashSet;

use crate::models::Profile;

/// The suggestion list split for display: the viewer's active pills in
/// insertion order, and the remaining suggestions still available to add.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillPills {
    pub active: Vec<String>,
    pub available: Vec<String>,
}

/// Collect the distinct skills across all loaded profiles, sorted.
///
/// Deduplication is case-insensitive with the first-seen casing kept, so
/// "rust" typed by one user folds into an earlier user's "Rust" pill.
pub fn skill_suggestions(profiles: &[Profile]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut suggestions = Vec::new();

    for profile in profiles {
        let Some(skills) = &profile.skills else {
            continue;
        };
        for skill in skills {
            if seen.insert(skill.to_lowercase()) {
                suggestions.push(skill.clone());
            }
        }
    }

    suggestions.sort();
    suggestions
}

/// Split the suggestion list against the currently selected pills.
pub fn split_pills(suggestions: Vec<String>, selected: &[String]) -> SkillPills {
    let available = suggestions
        .into_iter()
        .filter(|skill| !selected.contains(skill))
        .collect();

    SkillPills {
        active: selected.to_vec(),
        available,
    }
}
