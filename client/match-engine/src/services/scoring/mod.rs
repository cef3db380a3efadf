// ============================================
// Match scoring
// ============================================
//
// Pure scoring between the viewer and a project post or another profile.
// Scores are exact skill-set intersections, not learned weights:
// - project match: +1 per post tag found in the viewer's skills
// - profile match: +1 per shared skill, +2 when the two roles complement
//   each other within the founder/co-founder pair
//
// All skill and role comparisons are case-insensitive. Duplicate tags and
// skills count once per occurrence on the candidate side.

use std::collections::HashSet;

use crate::models::Profile;

/// Project score at or above this renders the high-match badge.
pub const PROJECT_HIGH_MATCH_THRESHOLD: u32 = 2;

/// Profile score at or above this renders the high-match badge. Higher than
/// the project threshold because the role bonus alone contributes 2.
pub const PROFILE_HIGH_MATCH_THRESHOLD: u32 = 3;

/// Bonus for a Founder/Co-founder pairing with differing roles.
pub const ROLE_COMPLEMENT_BONUS: u32 = 2;

/// Badge classification for a positive match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    High,
    Standard,
}

impl MatchTier {
    pub fn for_project(score: u32) -> Self {
        if score >= PROJECT_HIGH_MATCH_THRESHOLD {
            MatchTier::High
        } else {
            MatchTier::Standard
        }
    }

    pub fn for_profile(score: u32) -> Self {
        if score >= PROFILE_HIGH_MATCH_THRESHOLD {
            MatchTier::High
        } else {
            MatchTier::Standard
        }
    }
}

/// Count how many of the post's tags appear in the viewer's skills.
///
/// Duplicated tags count every time they occur. Returns 0 when either side
/// has nothing to compare.
pub fn score_project_match(viewer_skills: &[String], post_tags: &[String]) -> u32 {
    if viewer_skills.is_empty() || post_tags.is_empty() {
        return 0;
    }

    let mine: HashSet<String> = viewer_skills.iter().map(|s| s.to_lowercase()).collect();

    post_tags
        .iter()
        .filter(|tag| mine.contains(&tag.to_lowercase()))
        .count() as u32
}

/// Score another profile against the viewer's own profile.
///
/// A profile never matches itself. Profiles whose skills field is absent
/// upstream score 0 outright; a present-but-empty skill list still earns the
/// role-complementarity bonus, so a pure Founder/Co-founder pairing can score
/// positive with zero skill overlap.
pub fn score_profile_match(viewer: &Profile, candidate: &Profile) -> u32 {
    if viewer.id == candidate.id {
        return 0;
    }

    let (Some(my_skills), Some(their_skills)) = (&viewer.skills, &candidate.skills) else {
        return 0;
    };

    let mine: HashSet<String> = my_skills.iter().map(|s| s.to_lowercase()).collect();
    let base = their_skills
        .iter()
        .filter(|skill| mine.contains(&skill.to_lowercase()))
        .count() as u32;

    let bonus = if roles_complement(&viewer.role, &candidate.role) {
        ROLE_COMPLEMENT_BONUS
    } else {
        0
    };

    base + bonus
}

/// Founder and co-founder complement each other; two founders (or two
/// co-founders, or anything outside the pair) do not.
fn roles_complement(mine: &str, theirs: &str) -> bool {
    let mine = mine.to_lowercase();
    let theirs = theirs.to_lowercase();

    mine != theirs && is_founder_pair_role(&mine) && is_founder_pair_role(&theirs)
}

fn is_founder_pair_role(role: &str) -> bool {
    matches!(role, "founder" | "co-founder")
}
