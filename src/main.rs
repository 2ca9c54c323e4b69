use clap::{Parser, ValueEnum};

use server_version_cache::config::FetcherConfig;
use server_version_cache::version::cache::VersionCache;
use server_version_cache::version::fetchers::bitbucket::BitbucketFetcher;
use server_version_cache::version::fetchers::gitlab::GitLabFetcher;

#[derive(Parser)]
#[command(name = "server-version-cache")]
#[command(version, about = "Look up the version of a remote VCS hosting service")]
struct Cli {
    /// Base URL of the server, e.g. https://gitlab.example.com
    url: String,

    /// Which service API to query
    #[arg(long, value_enum, default_value_t = Service::Gitlab)]
    service: Service,
}

#[derive(Clone, Copy, ValueEnum)]
enum Service {
    Gitlab,
    Bitbucket,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(cli))
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = FetcherConfig::default();

    let version = match cli.service {
        Service::Gitlab => {
            VersionCache::new(GitLabFetcher::new(&config))
                .get_version(&cli.url)
                .await
        }
        Service::Bitbucket => {
            VersionCache::new(BitbucketFetcher::new(&config))
                .get_version(&cli.url)
                .await
        }
    };

    match version {
        Some(v) => {
            println!("{v}");
            Ok(())
        }
        None => anyhow::bail!("no version information available for {}", cli.url),
    }
}
