use clap::Parser;
use jatra::sdk::client::render_fare_data;
use jatra::sdk::util::log::init_logging;
use jatra::{relay_url_from_env, FareClient, FareForm};

/// Ask the fare relay for distance, fares and tips between two places
#[derive(Parser, Debug)]
#[command(name = "jatra", version, about, long_about = None)]
struct Cli {
    /// The starting location (e.g., "Uttara")
    #[arg(short, long)]
    start: String,

    /// The destination (e.g., "Motijheel")
    #[arg(short, long)]
    end: String,

    /// Relay base URL (defaults to JATRA_RELAY_URL or http://localhost:8080)
    #[arg(long)]
    relay: Option<String>,

    /// Print the raw JSON instead of rendered cards
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() {
    // Start with our custom logger
    init_logging();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let relay_url = cli.relay.unwrap_or_else(relay_url_from_env);

    // One form instance per run: a second submit while one is in flight
    // would be rejected, same as a disabled submit button.
    let form = FareForm::new(FareClient::new(&relay_url));

    log::info!(
        "Requesting fare estimate for \"{}\" -> \"{}\" via {}",
        cli.start,
        cli.end,
        relay_url
    );

    match form.submit(&cli.start, &cli.end) {
        Ok(data) => {
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&data).unwrap_or_default()
                );
            } else {
                print!("{}", render_fare_data(&data));
            }
        }
        Err(e) => {
            log::error!("Fare lookup failed: {}", e);
            eprintln!("{}", e.user_message());
            std::process::exit(1);
        }
    }
}
