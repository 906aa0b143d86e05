// src/cli.rs
// =============================================================================
// Command-line interface for the host binary, built with clap's derive API.
//
// The binary owns everything the library refuses to read on its own:
// the token (flag or GITHUB_TOKEN), the API URL, and output formatting.
// =============================================================================

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;
use svg_asset_diff::github::DEFAULT_API_URL;
use svg_asset_diff::NamingScheme;

#[derive(Parser, Debug)]
#[command(
    name = "svg-asset-diff",
    version,
    about = "Find SVG assets changed between two GitHub revisions",
    long_about = "svg-asset-diff compares two revisions of a GitHub repository, picks the SVG \
                  files that changed inside a folder, and prints their decoded code together \
                  with the component name each one maps to."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the assets changed between two revisions
    ///
    /// Example: svg-asset-diff find acme/icons --head feature/new-arrows --folder icons/
    Find {
        /// Repository as owner/repo or a GitHub URL
        repo: String,

        /// Revision with the changes (branch, tag or SHA)
        #[arg(long)]
        head: String,

        /// Revision to compare against
        #[arg(long, default_value = svg_asset_diff::assets::DEFAULT_BASE)]
        base: String,

        /// Folder to look in, relative to the repository root
        #[arg(long, default_value = "")]
        folder: String,

        /// Glob relative to --folder; a leading **/ also matches top-level files
        #[arg(long, default_value = "**/*.svg")]
        glob: String,

        /// How file paths become component names: pascal, camel, kebab or snake
        #[arg(long, default_value_t = NamingScheme::Pascal)]
        name_scheme: NamingScheme,

        /// Extra state merged into every asset, as key=value (value parsed as JSON when possible)
        #[arg(long = "state", value_parser = parse_state_entry)]
        state: Vec<(String, Value)>,

        /// Maximum number of content requests in flight (default: no limit)
        #[arg(long)]
        max_concurrency: Option<usize>,

        /// GitHub API base URL (change for GitHub Enterprise)
        #[arg(long, default_value = DEFAULT_API_URL)]
        api_url: String,

        /// Seconds before a single GitHub request gives up
        #[arg(long, default_value_t = 30)]
        timeout: u64,

        /// Access token; falls back to GITHUB_TOKEN
        #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
        token: Option<String>,

        /// Output results in JSON format instead of a table
        #[arg(long)]
        json: bool,
    },
}

// Splits a repository reference into (owner, repo)
//
// Supported formats:
//   - owner/repo
//   - https://github.com/owner/repo
//   - https://github.com/owner/repo.git
//   - github.com/owner/repo
pub fn parse_repo_slug(input: &str) -> Result<(String, String)> {
    // Strip scheme and "www." so URLs and bare slugs look the same
    let trimmed = input
        .trim()
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_start_matches("www.");
    let path = trimmed.strip_prefix("github.com/").unwrap_or(trimmed);

    // Exactly two non-empty parts: owner and repo
    let parts: Vec<&str> = path.split('/').filter(|p| !p.is_empty()).collect();
    if parts.len() != 2 {
        return Err(anyhow!(
            "expected 'owner/repo' or a GitHub URL, got '{}'",
            input
        ));
    }

    let owner = parts[0].to_string();
    let repo = parts[1].trim_end_matches(".git").to_string();
    Ok((owner, repo))
}

// "size=24" -> ("size", 24), "theme=dark" -> ("theme", "dark")
fn parse_state_entry(input: &str) -> Result<(String, Value), String> {
    let (key, raw) = input
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{}'", input))?;
    if key.is_empty() {
        return Err(format!("missing key in '{}'", input));
    }
    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((key.to_string(), value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_repo_slug() {
        let (owner, repo) = parse_repo_slug("rust-lang/rust").unwrap();
        assert_eq!(owner, "rust-lang");
        assert_eq!(repo, "rust");
    }

    #[test]
    fn test_parse_repo_slug_from_url_with_git() {
        let (owner, repo) = parse_repo_slug("https://github.com/user/repo.git").unwrap();
        assert_eq!(owner, "user");
        assert_eq!(repo, "repo");
    }

    #[test]
    fn test_parse_invalid_slug() {
        let err = parse_repo_slug("https://github.com/only-owner").unwrap_err();
        assert!(err.to_string().contains("expected 'owner/repo'"));
        assert!(parse_repo_slug("a/b/c").is_err());
    }

    #[test]
    fn test_parse_state_entry() {
        assert_eq!(parse_state_entry("size=24").unwrap(), ("size".to_string(), json!(24)));
        assert_eq!(
            parse_state_entry("theme=dark").unwrap(),
            ("theme".to_string(), json!("dark"))
        );
        assert_eq!(
            parse_state_entry("tags=[\"a\"]").unwrap(),
            ("tags".to_string(), json!(["a"]))
        );
        assert!(parse_state_entry("novalue").is_err());
        assert!(parse_state_entry("=1").is_err());
    }

    #[test]
    fn test_find_defaults() {
        let cli = Cli::try_parse_from(["svg-asset-diff", "find", "acme/icons", "--head", "dev"]).unwrap();
        match cli.command {
            Commands::Find {
                base,
                folder,
                glob,
                name_scheme,
                state,
                max_concurrency,
                timeout,
                ..
            } => {
                assert_eq!(base, "master");
                assert_eq!(folder, "");
                assert_eq!(glob, "**/*.svg");
                assert_eq!(name_scheme, NamingScheme::Pascal);
                assert!(state.is_empty());
                assert_eq!(max_concurrency, None);
                assert_eq!(timeout, 30);
            }
        }
    }

    #[test]
    fn test_find_requires_head() {
        assert!(Cli::try_parse_from(["svg-asset-diff", "find", "acme/icons"]).is_err());
    }
}
