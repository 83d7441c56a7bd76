use serde::{Deserialize, Serialize};

/// Commit categories recognized by the archiver. Closed set; every commit
/// maps to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Feature,
    Fix,
    Refactor,
    Docs,
    Security,
    Chore,
    Other,
}

impl Category {
    /// The uppercase label used both for subject prefixes and section headings.
    pub fn label(self) -> &'static str {
        match self {
            Category::Feature => "FEATURE",
            Category::Fix => "FIX",
            Category::Refactor => "REFACTOR",
            Category::Docs => "DOCS",
            Category::Security => "SECURITY",
            Category::Chore => "CHORE",
            Category::Other => "OTHER",
        }
    }
}

/// Prefix scan order; first match wins.
pub const CLASSIFY_ORDER: [Category; 6] = [
    Category::Feature,
    Category::Fix,
    Category::Refactor,
    Category::Docs,
    Category::Security,
    Category::Chore,
];

/// Display order for the session summary's commit sections.
pub const SUMMARY_ORDER: [Category; 7] = [
    Category::Feature,
    Category::Fix,
    Category::Security,
    Category::Docs,
    Category::Refactor,
    Category::Chore,
    Category::Other,
];

/// Enumeration order for changelog sections. `Other` comes last so
/// unclassified commits are never dropped from the changelog.
pub const CHANGELOG_ORDER: [Category; 7] = [
    Category::Feature,
    Category::Fix,
    Category::Refactor,
    Category::Docs,
    Category::Security,
    Category::Chore,
    Category::Other,
];

/// Classify a commit subject by its `NAME:` prefix.
///
/// Scans [`CLASSIFY_ORDER`] for a category label immediately followed by a
/// colon; the first match wins. Unmatched subjects are [`Category::Other`],
/// the same default in every rendered view.
pub fn classify(subject: &str) -> Category {
    for cat in CLASSIFY_ORDER {
        if subject
            .strip_prefix(cat.label())
            .is_some_and(|rest| rest.starts_with(':'))
        {
            return cat;
        }
    }
    Category::Other
}
