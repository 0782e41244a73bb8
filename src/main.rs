use anyhow::Context;
use clap::{Parser, Subcommand};
use nestquest_core::{
    Amenity, Catalog, Config, Listing, ListingType, PriceRange, PropertyType, Query,
    SearchEngine, SearchEvent, SearchOutcome, SearchStatus, SuggestionIndex,
};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "nestquest", about = "NestQuest — property catalog search")]
struct Cli {
    /// Log engine internals to stderr (RUST_LOG overrides the level).
    #[arg(long)]
    debug: bool,

    /// JSON catalog file to search instead of the built-in sample listings.
    #[arg(long)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search the catalog with the given filters.
    Search {
        /// City, neighborhood, or address fragment.
        #[arg(long, default_value = "")]
        location: String,
        /// house | apartment | condo | townhouse | land
        #[arg(long)]
        property_type: Option<PropertyType>,
        /// Price interval as one min-max token, e.g. 300000-600000 or "$1,500-$3,000".
        #[arg(long)]
        price_range: Option<String>,
        /// Minimum number of bedrooms.
        #[arg(long)]
        bedrooms: Option<u32>,
        /// Minimum number of bathrooms.
        #[arg(long)]
        bathrooms: Option<u32>,
        /// Minimum floor area in square feet.
        #[arg(long)]
        min_area: Option<u32>,
        /// Required amenity; repeat for each tag (e.g. --feature "Swimming Pool").
        #[arg(long = "feature")]
        features: Vec<Amenity>,
    },
    /// Suggest known place names matching a partial location.
    Suggest {
        /// What the user has typed so far.
        partial: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
    }

    let config = Config::load()?;
    let catalog = match &cli.catalog {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("loading catalog from {}", path.display()))?,
        None => Catalog::sample(),
    };

    match cli.command {
        Command::Search {
            location,
            property_type,
            price_range,
            bedrooms,
            bathrooms,
            min_area,
            features,
        } => {
            let query = Query {
                location,
                property_type,
                price_range: price_range.as_deref().and_then(PriceRange::parse),
                bedrooms,
                bathrooms,
                min_area,
                features: features.into_iter().collect(),
            };
            search(catalog, config.search.latency(), query).await;
            Ok(())
        }
        Command::Suggest { partial } => {
            let index = SuggestionIndex::new(config.suggest.places);
            for place in index.suggest(&partial) {
                println!("{place}");
            }
            Ok(())
        }
    }
}

/// Drive one search session to its terminal state and render the outcome.
async fn search(catalog: Catalog, latency: Duration, query: Query) {
    let (engine, mut events) = SearchEngine::with_latency(catalog, latency);

    let session = match engine.submit(query) {
        Ok(session) => session,
        Err(err) => {
            // A rejected submission is recorded as a failed search.
            tracing::debug!(%err, status = %SearchStatus::Failed, "submission rejected");
            println!("Please enter a location to search");
            std::process::exit(1);
        }
    };

    println!("Searching properties…");
    while let Some(event) = events.recv().await {
        match event {
            SearchEvent::Completed {
                session: done,
                outcome,
            } if done == session => {
                report(&outcome);
                break;
            }
            _ => {}
        }
    }
}

fn report(outcome: &SearchOutcome) {
    match outcome {
        SearchOutcome::Found(listings) => {
            println!("Found {} properties matching your criteria!", listings.len());
            println!();
            for listing in listings {
                print_card(listing);
            }
        }
        SearchOutcome::Empty => {
            println!("No properties found matching your criteria. Try adjusting your filters.");
        }
    }
}

fn print_card(listing: &Listing) {
    println!("  {} — {}", listing.title, format_price(listing));
    println!(
        "    {} · {} bd · {} ba · {} sq ft",
        listing.location,
        listing.features.bedrooms,
        listing.features.bathrooms,
        listing.features.area
    );
    if !listing.amenities.is_empty() {
        let tags: Vec<&str> = listing.amenities.iter().map(|a| a.name()).collect();
        println!("    {}", tags.join(", "));
    }
    println!();
}

fn format_price(listing: &Listing) -> String {
    match listing.listing_type {
        ListingType::Rent => format!("${}/mo (for rent)", thousands(listing.price)),
        ListingType::Sale => format!("${} (for sale)", thousands(listing.price)),
    }
}

/// 1250000 → "1,250,000".
fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
