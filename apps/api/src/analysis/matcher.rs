//! Role Matcher — maps free-text role input onto a canonical catalog role.
//!
//! Precedence (first success wins):
//! 1. exact canonical name (after trim + lowercase)
//! 2. keyword scoring against `KEYWORD_RULES`
//! 3. substring match against catalog names, in catalog order
//! 4. `DEFAULT_ROLE`
//!
//! Never fails. Every path returns a name present in the catalog.

use tracing::{debug, info, warn};

use crate::analysis::catalog::{lookup, DEFAULT_ROLE, ROLE_PROFILES};

/// How a canonical role is recognized from free text.
#[derive(Debug, Clone, Copy)]
pub struct RoleKeywordRule {
    pub canonical_name: &'static str,
    /// Lowercase substrings. Strength = number of these contained in the input.
    pub keywords: &'static [&'static str],
}

/// Keyword rules in tie-break order: on equal scores the EARLIER rule wins.
/// Reordering this slice changes matcher output for ambiguous inputs.
pub static KEYWORD_RULES: &[RoleKeywordRule] = &[
    RoleKeywordRule {
        canonical_name: "web developer",
        keywords: &["web", "frontend", "front-end", "html", "css", "javascript"],
    },
    RoleKeywordRule {
        canonical_name: "frontend developer",
        keywords: &["frontend", "front-end", "react", "vue", "angular", "ui"],
    },
    RoleKeywordRule {
        canonical_name: "backend developer",
        keywords: &["backend", "back-end", "server", "api", "database"],
    },
    RoleKeywordRule {
        canonical_name: "full stack developer",
        keywords: &["full stack", "fullstack", "both", "mern", "mean"],
    },
    RoleKeywordRule {
        canonical_name: "data scientist",
        keywords: &["data", "science", "ml", "machine", "learning", "statistics", "analytics"],
    },
    RoleKeywordRule {
        canonical_name: "ai engineer",
        keywords: &["ai", "artificial", "intelligence", "llm", "generative", "neural"],
    },
    RoleKeywordRule {
        canonical_name: "devops engineer",
        keywords: &["devops", "ops", "infrastructure", "deployment", "docker", "kubernetes"],
    },
    RoleKeywordRule {
        canonical_name: "java engineer",
        keywords: &["java", "spring", "enterprise"],
    },
    RoleKeywordRule {
        canonical_name: "mobile developer",
        keywords: &["mobile", "ios", "android", "app", "flutter", "react native"],
    },
    RoleKeywordRule {
        canonical_name: "python developer",
        keywords: &["python", "django", "fastapi", "flask"],
    },
];

impl RoleKeywordRule {
    /// Number of this rule's keywords contained in `normalized_input`.
    pub fn score(&self, normalized_input: &str) -> usize {
        self.keywords
            .iter()
            .filter(|kw| normalized_input.contains(*kw))
            .count()
    }
}

/// Selects the best canonical role for a free-text role string.
pub fn match_role(input_role: &str) -> &'static str {
    let normalized = input_role.trim().to_lowercase();

    if let Some(profile) = lookup(&normalized) {
        debug!("Role \"{input_role}\" is an exact catalog match");
        return profile.canonical_name;
    }

    if let Some((rule, score)) = best_keyword_rule(&normalized) {
        info!(
            "Role \"{input_role}\" matched \"{}\" by keywords (score: {score})",
            rule.canonical_name
        );
        return rule.canonical_name;
    }

    if let Some(profile) = ROLE_PROFILES.iter().find(|p| {
        normalized.contains(p.canonical_name) || p.canonical_name.contains(normalized.as_str())
    }) {
        info!(
            "Role \"{input_role}\" matched \"{}\" by substring",
            profile.canonical_name
        );
        return profile.canonical_name;
    }

    warn!("Role \"{input_role}\" matched nothing, using default \"{DEFAULT_ROLE}\"");
    DEFAULT_ROLE
}

/// Highest-scoring rule, or `None` when every rule scores zero.
/// Only a strictly higher score displaces the current best.
fn best_keyword_rule(normalized_input: &str) -> Option<(&'static RoleKeywordRule, usize)> {
    let mut best: Option<(&'static RoleKeywordRule, usize)> = None;
    for rule in KEYWORD_RULES {
        let score = rule.score(normalized_input);
        if score > best.map_or(0, |(_, s)| s) {
            best = Some((rule, score));
        }
    }
    best
}
