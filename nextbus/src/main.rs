use nextbus::config::AppConfig;
use nextbus::domain::WallClock;
use nextbus::nextrip::{MockNexTripClient, NexTripClient};
use nextbus::prompt::run_prompt_loop;
use nextbus::provider::TransitProvider;
use nextbus::session::Session;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Logs go to stderr so they don't interleave with the prompts.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "nextbus=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::from_env().expect("Invalid configuration");

    match config.mock_data.clone() {
        Some(path) => {
            info!(path = %path.display(), "using mock NexTrip data");
            let client = MockNexTripClient::from_file(&path).expect("Failed to load mock data");
            run(client, config).await;
        }
        None => {
            info!(base_url = %config.nextrip.base_url, "using live NexTrip service");
            let client =
                NexTripClient::new(config.nextrip.clone()).expect("Failed to create NexTrip client");
            run(client, config).await;
        }
    }
}

async fn run<P: TransitProvider>(provider: P, config: AppConfig) {
    // Fetch the route catalog once (fail fast if unavailable)
    let session = Session::start(provider, config.session)
        .await
        .expect("Failed to fetch route catalog");
    info!(routes = session.catalog().len(), "loaded route catalog");

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();

    match run_prompt_loop(&session, stdin, &mut stdout, WallClock::now).await {
        Ok(summary) => info!(cycles = summary.cycles, exit = ?summary.exit, "done"),
        Err(e) => eprintln!("Error reading input: {e}"),
    }
}
