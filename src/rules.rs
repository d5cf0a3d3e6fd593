use crate::config::Transform;

const LEET_MAP: &[(char, char)] = &[
    ('a', '@'),
    ('e', '3'),
    ('i', '1'),
    ('o', '0'),
    ('s', '$'),
    ('l', '1'),
];

pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

/// Lowercases the input and substitutes every mapped letter at once.
pub fn leetspeak(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .map(|c| {
            LEET_MAP
                .iter()
                .find(|(from, _)| *from == c)
                .map_or(c, |(_, to)| *to)
        })
        .collect()
}

pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

pub fn initials(words: &[&str]) -> String {
    words.iter().filter_map(|w| w.chars().next()).collect()
}

pub fn apply_transform(s: &str, transform: Transform) -> String {
    match transform {
        Transform::Verbatim => s.to_string(),
        Transform::Reversed => reverse(s),
        Transform::Uppercase => s.to_uppercase(),
    }
}

pub fn affixed(target: &str, affix: &str, prepend: bool) -> Vec<String> {
    if target.is_empty() || affix.is_empty() {
        return Vec::new();
    }

    let mut out = vec![format!("{target}{affix}")];
    if prepend {
        out.push(format!("{affix}{target}"));
    }
    out
}
