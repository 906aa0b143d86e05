// src/main.rs
// =============================================================================
// Entry point of the svg-asset-diff binary.
//
// What happens here:
// 1. Set up logging (stderr, filtered by RUST_LOG, default "info")
// 2. Parse command-line arguments using clap
// 3. Build an authenticated GitHub client and run the resolver
// 4. Print the assets as a table or JSON
// 5. Exit with 0 on success, 2 on error
// =============================================================================

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{parse_repo_slug, Cli, Commands};
use std::time::Duration;
use svg_asset_diff::assets::{keys, GithubParams, PluginInput, ResolveParams, State};
use svg_asset_diff::github::RestClient;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() {
    init_logging();

    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Find {
            repo,
            head,
            base,
            folder,
            glob,
            name_scheme,
            state,
            max_concurrency,
            api_url,
            timeout,
            token,
            json,
        } => {
            let (owner, repo) = parse_repo_slug(&repo)?;

            let mut builder = RestClient::builder()
                .api_url(api_url)
                .timeout(Duration::from_secs(timeout));
            if let Some(token) = token {
                builder = builder.token(token);
            }
            let client = builder.build().context("failed to build GitHub client")?;

            let base_state: State = state.into_iter().collect();
            let github = GithubParams::new(&client, &owner, &repo, head).base(base);
            let params = ResolveParams::new(github, glob)
                .folder(folder)
                .name_scheme(name_scheme)
                .state(base_state)
                .max_concurrency(max_concurrency);

            let assets = svg_asset_diff::resolve(params)
                .await
                .with_context(|| format!("failed to resolve assets in {}/{}", owner, repo))?;

            print_results(&assets, json)
        }
    }
}

fn print_results(assets: &[PluginInput], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(assets)?);
    } else {
        print_table(assets);
    }
    Ok(())
}

fn print_table(assets: &[PluginInput]) {
    if assets.is_empty() {
        println!("No changed assets found");
        return;
    }

    println!("{:<10} {:<50} {:<30}", "DIFF", "FILE", "COMPONENT");
    println!("{}", "=".repeat(90));

    for asset in assets {
        let field = |key: &str| {
            asset
                .state
                .get(key)
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string()
        };

        let component = match asset.state.get(keys::COMPONENT_NAME_OLD).and_then(|v| v.as_str()) {
            Some(old) => format!("{} (was {})", field(keys::COMPONENT_NAME), old),
            None => field(keys::COMPONENT_NAME),
        };

        println!(
            "{:<10} {:<50} {:<30}",
            field(keys::DIFF_TYPE),
            field(keys::FILE_PATH),
            component
        );
    }

    println!();
    println!("{} asset(s)", assets.len());
}
