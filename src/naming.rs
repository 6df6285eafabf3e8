//! Case conversion and pluralization of entity names.
//!
//! None of these functions fail: empty or odd input degrades to empty or
//! minimally transformed output.

use regex::Regex;
use std::sync::LazyLock;

static KEBAB_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("kebab boundary pattern"));

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("identifier pattern"));

/// Words whose plural form is the word itself (compared case-insensitively)
pub const UNCHANGING_PLURALS: [&str; 5] = ["sheep", "fish", "deer", "species", "series"];

/// Irregular plurals. Keys are matched case-insensitively, the value is returned as stored.
pub const IRREGULAR_PLURALS: [(&str, &str); 8] = [
    ("child", "Children"),
    ("person", "People"),
    ("man", "Men"),
    ("woman", "Women"),
    ("tooth", "Teeth"),
    ("foot", "Feet"),
    ("mouse", "Mice"),
    ("goose", "Geese"),
];

/// Upper-case the first character, leave the rest untouched
pub fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lower-case the first character, leave the rest untouched
pub fn lower_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `"order item"` -> `"orderItem"`
pub fn to_camel_case(phrase: &str) -> String {
    phrase
        .split(' ')
        .enumerate()
        .map(|(i, token)| match i {
            0 => lower_first(token),
            _ => upper_first(token),
        })
        .collect()
}

/// `"order item"` -> `"OrderItem"`
pub fn to_pascal_case(phrase: &str) -> String {
    phrase.split(' ').map(upper_first).collect()
}

/// `"OrderItem"` -> `"order-item"`
///
/// A hyphen is only inserted on a lower-case letter or digit followed by an
/// upper-case letter, so runs of capitals stay together: `"HTTPServer"`
/// becomes `"httpserver"`. Existing generated file names rely on this.
pub fn to_kebab_case(identifier: &str) -> String {
    KEBAB_BOUNDARY
        .replace_all(identifier, "$1-$2")
        .to_lowercase()
}

/// English pluralization good enough for entity names.
///
/// Rules apply in order: unchanging words, irregular table, consonant + `y`,
/// sibilant and `o` endings, then a plain `s`.
pub fn pluralize(word: &str) -> String {
    let lower = word.to_lowercase();

    if UNCHANGING_PLURALS.contains(&lower.as_str()) {
        return word.to_owned();
    }

    if let Some((_, plural)) = IRREGULAR_PLURALS
        .iter()
        .find(|(singular, _)| *singular == lower)
    {
        return (*plural).to_owned();
    }

    if let Some(stem) = word.strip_suffix('y') {
        let after_vowel = stem
            .chars()
            .last()
            .is_some_and(|c| "aeiouAEIOU".contains(c));
        if !after_vowel {
            return format!("{stem}ies");
        }
    }

    if ["o", "ch", "sh", "x", "s", "z"]
        .iter()
        .any(|suffix| word.ends_with(suffix))
    {
        return format!("{word}es");
    }

    format!("{word}s")
}

/// Whether `name` can be pasted into generated source as a bare identifier
pub fn is_identifier(name: &str) -> bool {
    IDENTIFIER.is_match(name)
}
