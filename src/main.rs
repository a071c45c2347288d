use std::{sync::Arc, time::Duration};

use clap::Parser;
use log::{debug, info};

use portfolio_loader::{
    AccountName, AllowList, DEFAULT_ACCOUNT, FEATURED_PROJECTS, GITHUB_API_ENDPOINT,
    GITHUB_RAW_ENDPOINT, LEARNING_MODULES, LoaderConfig, LogNotifier, PipelineLoader,
    ProjectLoader, README_BRANCH, README_FILE, SnapshotStore, StdResult,
};

/// Command line arguments for the portfolio project loader
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Account whose repositories are showcased
    #[arg(short, long, env = "PORTFOLIO_ACCOUNT", default_value = DEFAULT_ACCOUNT)]
    account: String,

    /// Repositories shown as featured projects
    #[arg(short, long, value_delimiter = ',', default_values_t = FEATURED_PROJECTS.map(String::from))]
    featured: Vec<String>,

    /// Repositories shown as learning modules
    #[arg(short, long, value_delimiter = ',', default_values_t = LEARNING_MODULES.map(String::from))]
    modules: Vec<String>,

    /// Listing API endpoint
    #[arg(long, default_value = GITHUB_API_ENDPOINT)]
    api_endpoint: String,

    /// Raw content endpoint the README documents are read from
    #[arg(long, default_value = GITHUB_RAW_ENDPOINT)]
    raw_endpoint: String,

    /// Timeout of each request, in seconds
    #[arg(short, long, default_value_t = 10)]
    timeout_secs: u64,

    /// Number of manual refreshes run after the initial load
    #[arg(short, long, default_value_t = 0)]
    refreshes: u32,
}

impl From<&Args> for LoaderConfig {
    fn from(args: &Args) -> Self {
        Self {
            account: AccountName(args.account.clone()),
            featured: AllowList::new(&args.featured),
            modules: AllowList::new(&args.modules),
            api_endpoint: args.api_endpoint.clone(),
            raw_endpoint: args.raw_endpoint.clone(),
            readme_branch: README_BRANCH.to_string(),
            readme_file: README_FILE.to_string(),
            request_timeout: Duration::from_secs(args.timeout_secs),
        }
    }
}

#[tokio::main]
async fn main() -> StdResult<()> {
    env_logger::init();
    info!("Starting portfolio project loader");
    let args = Args::parse();
    let config = LoaderConfig::from(&args);
    debug!("Configuration: {config:?}");

    let store = Arc::new(SnapshotStore::new());
    let loader = build_loader(&config, store.clone())?;
    loader.load().await;
    for refresh in 1..=args.refreshes {
        info!("Refreshing projects ({refresh}/{})", args.refreshes);
        loader.refresh().await;
    }

    println!("{}", serde_json::to_string_pretty(&store.view().await)?);
    info!("Loading completed");

    Ok(())
}

fn build_loader(
    config: &LoaderConfig,
    store: Arc<SnapshotStore>,
) -> StdResult<Arc<dyn ProjectLoader>> {
    Ok(Arc::new(PipelineLoader::try_new(
        config,
        store,
        Arc::new(LogNotifier),
    )?))
}
