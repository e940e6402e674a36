use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::error;

use setup_sysl::config::{
    DEFAULT_API_BASE_URL, DEFAULT_DOWNLOAD_BASE_URL, DEFAULT_REPOSITORY, InstallerConfig,
};
use setup_sysl::host::HostInfo;
use setup_sysl::install::installer::Installer;
use setup_sysl::install::search_path::RunnerPath;
use setup_sysl::install::toolchain::GoToolchain;
use setup_sysl::release::github::GitHubReleases;

#[derive(Parser)]
#[command(name = "setup-sysl")]
#[command(version, about = "Install a sysl release and add it to the job PATH")]
struct Cli {
    /// Version to install: semver (1.2.0), partial (1.2) or x-trailing (1.2.x).
    /// Empty selects the newest stable release.
    #[arg(id = "spec", value_name = "VERSION", env = "INPUT_VERSION", default_value = "")]
    version: String,

    /// GitHub repository publishing the releases
    #[arg(long, default_value = DEFAULT_REPOSITORY)]
    repository: String,

    /// Base URL of the GitHub API
    #[arg(long, default_value = DEFAULT_API_BASE_URL)]
    api_url: String,

    /// Base URL release archives are downloaded from
    #[arg(long, default_value = DEFAULT_DOWNLOAD_BASE_URL)]
    download_url: String,

    /// Token used to authenticate GitHub API requests
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    github_token: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_sysl::logging::init();

    let result = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start the async runtime")
        .and_then(|runtime| runtime.block_on(run(cli)));
    ExitCode::from(report(result))
}

/// Logs the full error chain and maps the outcome to a process exit status
fn report(result: anyhow::Result<()>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            error!("{:#}", e);
            1
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = InstallerConfig::from_env(HostInfo::current());
    config.repository = cli.repository;
    config.api_base_url = cli.api_url;
    config.download_base_url = cli.download_url;
    config.github_token = cli.github_token;

    let source = GitHubReleases::new(&config.api_base_url)?.with_token(config.github_token.clone());
    let installer = Installer::new(
        config,
        Arc::new(source),
        Arc::new(RunnerPath::from_env()),
        Arc::new(GoToolchain::default()),
    )?;

    installer
        .install(&cli.version)
        .await
        .with_context(|| format!("failed to install version '{}'", cli.version))?;
    Ok(())
}
