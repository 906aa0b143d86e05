// src/assets/mod.rs
// =============================================================================
// Diff-based SVG asset discovery.
//
// Submodules:
// - filter: folder scope + glob matching
// - state: the per-asset state map and its merge order
// - resolve: compare, filter, fetch, decode, name
// - error: what can go wrong along the way
// =============================================================================

mod error;
mod filter;
mod resolve;
mod state;

pub use error::{ContentError, ResolveError};
pub use filter::{normalise_glob, relative_path, AssetFilter};
pub use resolve::{
    decode_content, resolve, GithubParams, PluginInput, ResolveParams, DEFAULT_BASE, EMPTY_SVG,
};
pub use state::{keys, State, StateBuilder};
