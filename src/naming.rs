// src/naming.rs
// =============================================================================
// Turns an asset path into a component identifier.
//
//   "arrows/arrow-left.svg" + Pascal -> "ArrowsArrowLeft"
//   "arrows/arrow-left.svg" + Kebab  -> "arrows-arrow-left"
//
// Steps:
// 1. Drop the extension of the last path segment
// 2. Split on path separators, '-', '_', '.', and whitespace
// 3. Split camelCase humps ("arrowLeft" -> "arrow", "Left"; "SVGIcon" -> "SVG", "Icon")
// 4. Join the words according to the scheme
//
// Pure and deterministic: same input, same output, no I/O.
// =============================================================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamingScheme {
    /// ArrowLeft
    #[default]
    Pascal,
    /// arrowLeft
    Camel,
    /// arrow-left
    Kebab,
    /// arrow_left
    Snake,
}

#[derive(Debug, Error)]
#[error("unknown naming scheme '{0}' (expected pascal, camel, kebab or snake)")]
pub struct UnknownScheme(String);

impl FromStr for NamingScheme {
    type Err = UnknownScheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pascal" => Ok(NamingScheme::Pascal),
            "camel" => Ok(NamingScheme::Camel),
            "kebab" => Ok(NamingScheme::Kebab),
            "snake" => Ok(NamingScheme::Snake),
            _ => Err(UnknownScheme(s.to_string())),
        }
    }
}

impl fmt::Display for NamingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NamingScheme::Pascal => "pascal",
            NamingScheme::Camel => "camel",
            NamingScheme::Kebab => "kebab",
            NamingScheme::Snake => "snake",
        };
        f.write_str(name)
    }
}

pub fn path_to_name(path: &str, scheme: NamingScheme) -> String {
    // "nav/arrowLeft.svg" -> ["nav", "arrow", "Left"]
    let words = words(strip_extension(path));

    match scheme {
        NamingScheme::Pascal => words.iter().map(|w| capitalize(w)).collect(),
        // Like Pascal, except the first word stays lowercase
        NamingScheme::Camel => words
            .iter()
            .enumerate()
            .map(|(i, w)| if i == 0 { w.to_lowercase() } else { capitalize(w) })
            .collect(),
        NamingScheme::Kebab => join_lower(&words, "-"),
        NamingScheme::Snake => join_lower(&words, "_"),
    }
}

// "icons/arrow.left.svg" -> "icons/arrow.left"; dotfiles keep their name
fn strip_extension(path: &str) -> &str {
    // Byte index where the last path segment begins
    let file_start = path.rfind(['/', '\\']).map_or(0, |i| i + 1);

    // dot > 0 keeps ".gitkeep"-style names whole
    match path[file_start..].rfind('.') {
        Some(dot) if dot > 0 => &path[..file_start + dot],
        _ => path,
    }
}

fn words(input: &str) -> Vec<String> {
    input
        .split(|c: char| matches!(c, '/' | '\\' | '-' | '_' | '.') || c.is_whitespace())
        .filter(|chunk| !chunk.is_empty())
        .flat_map(split_humps)
        .collect()
}

// Splits a single chunk at lower->upper transitions and before the last
// capital of an acronym that runs into a lowercase word
fn split_humps(chunk: &str) -> Vec<String> {
    let chars: Vec<char> = chunk.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        // Only an uppercase letter can start a new word inside a chunk
        if i > 0 && c.is_uppercase() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower);
            if boundary && !current.is_empty() {
                // take() hands over the word and leaves an empty String behind
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }
    // Whatever is left after the last boundary
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn join_lower(words: &[String], separator: &str) -> String {
    words
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(separator)
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. char vs byte indices
//    - rfind returns byte offsets, which are safe to slice with because '/',
//      '\\' and '.' are single-byte characters
//    - split_humps collects into Vec<char> so it can look one char back and
//      one char ahead without worrying about UTF-8 widths
//
// 2. to_uppercase / to_lowercase return iterators
//    - Some characters change length when their case changes ('ß' -> "SS"),
//      so the std API yields chars instead of a single char
//
// 3. #[derive(Default)] on an enum
//    - The #[default] attribute picks the variant Default::default() returns
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_scheme() {
        let path = "arrows/arrow-left.svg";
        assert_eq!(path_to_name(path, NamingScheme::Pascal), "ArrowsArrowLeft");
        assert_eq!(path_to_name(path, NamingScheme::Camel), "arrowsArrowLeft");
        assert_eq!(path_to_name(path, NamingScheme::Kebab), "arrows-arrow-left");
        assert_eq!(path_to_name(path, NamingScheme::Snake), "arrows_arrow_left");
    }

    #[test]
    fn test_top_level_file() {
        assert_eq!(path_to_name("a.svg", NamingScheme::Pascal), "A");
        assert_eq!(path_to_name("check_mark.svg", NamingScheme::Pascal), "CheckMark");
    }

    #[test]
    fn test_camel_case_and_acronyms() {
        assert_eq!(path_to_name("arrowLeft.svg", NamingScheme::Kebab), "arrow-left");
        assert_eq!(path_to_name("SVGIcon.svg", NamingScheme::Snake), "svg_icon");
        assert_eq!(path_to_name("icon2x.svg", NamingScheme::Pascal), "Icon2x");
    }

    #[test]
    fn test_only_last_extension_dropped() {
        assert_eq!(path_to_name("logo.dark.svg", NamingScheme::Pascal), "LogoDark");
        assert_eq!(path_to_name("v1.2/logo", NamingScheme::Kebab), "v1-2-logo");
    }

    #[test]
    fn test_scheme_from_str() {
        assert_eq!("Kebab".parse::<NamingScheme>().unwrap(), NamingScheme::Kebab);
        assert_eq!(NamingScheme::Snake.to_string(), "snake");
        assert!("title".parse::<NamingScheme>().is_err());
    }
}
