// src/assets/filter.rs
// =============================================================================
// Decides which changed files are assets we care about.
//
// A file survives when:
// 1. its repo path starts with the folder scope, and
// 2. its path relative to that folder matches the glob pattern.
//
// Globs follow the usual conventions: `*` stays inside one path segment, `**`
// crosses segments, `{a,b}` picks alternatives. A leading `**/` is optional,
// so `**/*.svg` also picks up files sitting directly in the folder.
//
// Hidden entries (segments starting with '.') only match when the pattern
// names them with a literal leading dot: `*.svg` skips `.hidden.svg`, `**`
// never walks into `.cache/`, but `.cache/*.svg` reaches `.cache/x.svg`.
// =============================================================================

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

#[derive(Debug, Clone)]
pub struct AssetFilter {
    folder: String,
    // One compiled glob per normalised variant, in the same order as `variants`
    globs: GlobSet,
    variants: Vec<String>,
}

impl AssetFilter {
    pub fn new(folder: &str, pattern: &str) -> Result<Self, globset::Error> {
        let variants: Vec<String> = normalise_glob(pattern)
            .into_iter()
            .map(str::to_string)
            .collect();

        // literal_separator: `*` must not swallow '/'
        let mut builder = GlobSetBuilder::new();
        for variant in &variants {
            builder.add(GlobBuilder::new(variant).literal_separator(true).build()?);
        }

        Ok(Self {
            folder: folder.to_string(),
            globs: builder.build()?,
            variants,
        })
    }

    // Returns the folder-relative path when `filename` is a wanted asset
    pub fn select(&self, filename: &str) -> Option<String> {
        // Plain string prefix check first, cheap and catches most misses
        if !filename.starts_with(&self.folder) {
            return None;
        }

        let relative = relative_path(&self.folder, filename);
        if relative.is_empty() || relative == ".." || relative.starts_with("../") {
            // "icons-old/a.svg" shares the "icons" prefix but is a sibling
            return None;
        }

        // A variant counts only if it matches AND respects hidden segments
        let matched = self
            .globs
            .matches(&relative)
            .into_iter()
            .any(|i| hidden_segments_allowed(&self.variants[i], &relative));

        matched.then_some(relative)
    }

    // Path of `filename` relative to the folder, without any filtering. Used
    // for the previous name of a rename, which may live elsewhere.
    pub fn relative(&self, filename: &str) -> String {
        relative_path(&self.folder, filename)
    }
}

// The pattern itself, plus the pattern without its leading `**/`
pub fn normalise_glob(pattern: &str) -> Vec<&str> {
    match pattern.strip_prefix("**/") {
        Some(rest) if !rest.is_empty() => vec![pattern, rest],
        _ => vec![pattern],
    }
}

// Checks every dot-prefixed segment of `path` against the pattern segment it
// lines up with. Segments before the first `**` line up from the front,
// segments after the last `**` line up from the back, and anything in
// between was consumed by `**`, which never matches hidden segments.
//
// Assumes `pattern` already matched `path`, so the counts line up.
fn hidden_segments_allowed(pattern: &str, path: &str) -> bool {
    let pat: Vec<&str> = pattern.split('/').collect();
    let segs: Vec<&str> = path.split('/').collect();

    let first_star = pat.iter().position(|p| *p == "**");
    let last_star = pat.iter().rposition(|p| *p == "**");

    segs.iter().enumerate().all(|(i, seg)| {
        if !seg.starts_with('.') {
            return true;
        }

        let counterpart = match (first_star, last_star) {
            (Some(first), Some(last)) => {
                let tail = pat.len() - last - 1;
                let tail_start = segs.len().saturating_sub(tail);
                if i < first {
                    pat.get(i)
                } else if i >= tail_start {
                    pat.get(last + 1 + (i - tail_start))
                } else {
                    None
                }
            }
            // No `**`: one pattern segment per path segment
            _ => pat.get(i),
        };

        counterpart.is_some_and(|p| p.starts_with('.'))
    })
}

// Lexical equivalent of "path from `from` to `to`" for repo paths.
//
//   relative_path("icons/", "icons/a/b.svg") -> "a/b.svg"
//   relative_path("icons", "logos/c.svg")    -> "../logos/c.svg"
//   relative_path("", "x.svg")               -> "x.svg"
pub fn relative_path(from: &str, to: &str) -> String {
    let from: Vec<&str> = segments(from).collect();
    let to: Vec<&str> = segments(to).collect();

    // Length of the shared leading directories
    let common = from
        .iter()
        .zip(to.iter())
        .take_while(|(a, b)| a == b)
        .count();

    // Climb out of what is left of `from`, then walk down the rest of `to`
    let ups = std::iter::repeat("..").take(from.len() - common);
    ups.chain(to[common..].iter().copied())
        .collect::<Vec<_>>()
        .join("/")
}

// Empty and "." segments carry no meaning ("icons//a", "./icons")
fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty() && *s != ".")
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. GlobSet::matches vs is_match
//    - is_match answers "did anything match?"
//    - matches returns the indices of every glob that matched, which lets us
//      run the hidden-segment check against the exact variant that matched
//
// 2. then_some
//    - bool::then_some(x) is Some(x) when true, None when false
//    - Handy for "return the value only if a check passed"
//
// 3. impl Iterator<Item = &str>
//    - segments() returns a lazy iterator borrowing from `path`
//    - Nothing is allocated until the caller collects
// -----------------------------------------------------------------------------
