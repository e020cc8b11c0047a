use mimalloc::MiMalloc;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = &clubhub::config::CONFIG;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_level(true)
                .with_target(false),
        )
        .init();

    let seed_dir = cfg
        .seed_dir
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<bundled>".to_string());
    info!(
        database_url = %cfg.database_url,
        seed_dir = %seed_dir,
        discover_tag_count = cfg.discover_tag_count,
        loglevel = %cfg.loglevel
    );

    let seed = clubhub::SeedDataset::load(cfg.seed_dir.as_deref())?;
    let store = clubhub::PersistentStore::open(&cfg.database_url).await?;

    let handle = clubhub::service::directory_actor::spawn(clubhub::service::DirectoryArgs {
        seed,
        store,
        discover_tag_count: cfg.discover_tag_count,
        rng_seed: None,
    })
    .await?;

    let stdin = BufReader::new(tokio::io::stdin());
    let result = clubhub::ui::terminal::run(&handle, stdin, tokio::io::stdout()).await;
    handle.stop();
    result?;
    Ok(())
}
