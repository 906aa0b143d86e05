// src/lib.rs
// =============================================================================
// Finds the SVG files that changed between two GitHub revisions and hands
// them to code generation as (code, state) pairs.
//
// Modules:
// - github: the API client trait and a REST implementation
// - assets: filtering, fetching and state building
// - naming: path -> component name
//
// The library never reads the environment or configures logging; the binary
// in main.rs does both.
// =============================================================================

pub mod assets;
pub mod github;
pub mod naming;

pub use assets::{resolve, GithubParams, PluginInput, ResolveError, ResolveParams, State};
pub use github::{GithubApi, RestClient};
pub use naming::{path_to_name, NamingScheme};
