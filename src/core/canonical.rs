//! Ordered alias tables used to canonicalize query text.
//!
//! Each table is scanned front to back and the first hit wins, so the order
//! of entries is part of the behavior.

/// Platform aliases mapped to their short code
pub const PLATFORM_ALIASES: &[(&str, &str)] = &[
    ("instagram", "ig"),
    ("youtube", "yt"),
    ("facebook", "fb"),
    ("tiktok", "tiktok"),
    ("ig", "ig"),
    ("insta", "ig"),
    ("yt", "yt"),
    ("fb", "fb"),
];

/// Category synonyms mapped to the catalog category
pub const CATEGORY_SYNONYMS: &[(&str, &str)] = &[
    ("fitness", "fitness"),
    ("fit", "fitness"),
    ("workout", "fitness"),
    ("gym", "fitness"),
    ("exercise", "fitness"),
    ("tech", "tech"),
    ("technology", "tech"),
    ("gadgets", "tech"),
    ("fashion", "fashion"),
    ("style", "fashion"),
    ("clothing", "fashion"),
    ("food", "food"),
    ("cooking", "food"),
    ("cuisine", "food"),
    ("recipe", "food"),
    ("travel", "travel"),
    ("tourism", "travel"),
    ("adventure", "travel"),
];

/// Gender trigger words, female first
pub const GENDER_TRIGGERS: &[(&str, &[&str])] = &[
    ("female", &["female", "woman", "women", "girl", "she", "her"]),
    ("male", &["male", "man", "men", "boy", "he", "him"]),
];

/// First table entry whose alias occurs anywhere in `text`
pub fn first_substring_match(table: &[(&str, &'static str)], text: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(alias, _)| text.contains(alias))
        .map(|(_, canonical)| *canonical)
}

/// Exact alias lookup, used on values that are already a single term
pub fn lookup(table: &[(&str, &'static str)], value: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(alias, _)| *alias == value)
        .map(|(_, canonical)| *canonical)
}

/// Resolve a platform name to its code, keeping unknown values as given
pub fn resolve_platform(value: &str) -> String {
    let normalized = normalize(value);
    lookup(PLATFORM_ALIASES, &normalized)
        .map(str::to_string)
        .unwrap_or(normalized)
}

/// Resolve a category synonym, keeping unknown values as given
pub fn resolve_category(value: &str) -> String {
    let normalized = normalize(value);
    lookup(CATEGORY_SYNONYMS, &normalized)
        .map(str::to_string)
        .unwrap_or(normalized)
}

/// Resolve a gender word such as "women" to its catalog value
pub fn resolve_gender(value: &str) -> String {
    let normalized = normalize(value);
    GENDER_TRIGGERS
        .iter()
        .find(|(_, triggers)| triggers.contains(&normalized.as_str()))
        .map(|(gender, _)| gender.to_string())
        .unwrap_or(normalized)
}

#[inline]
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}
