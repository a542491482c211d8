//! Six Cities CLI entry point.
//!
//! Drives the same store a UI would: every subcommand dispatches commands
//! through `SixCitiesApp` and prints from selectors.

use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use sixcities::app::selectors::{
    favorites_by_city, is_authorized, nearby_preview, places_found, select_visible_offers,
    visible_reviews,
};
use sixcities::app::{SixCitiesApp, change_city, change_sort};
use sixcities::domain::{CITIES, Credentials, FavoriteStatus, NewReview, Offer, SortKey};
use sixcities::infra::api::HttpApi;
use sixcities::infra::app_config::{load_config, save_config};
use sixcities::infra::token::{FileStore, TokenStorage};
use sixcities::Command as StoreCommand;

#[derive(Parser, Debug)]
#[command(name = "sixcities")]
#[command(version)]
#[command(about = "Browse rental offers in six cities", long_about = None)]
struct Args {
    /// Backend base URL (overrides config and SIX_CITIES_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List offers in a city
    Offers {
        #[arg(short, long)]
        city: Option<String>,
        /// popular, price-low-to-high, price-high-to-low, top-rated-first
        #[arg(short, long)]
        sort: Option<SortKey>,
    },
    /// Show one offer with its reviews and nearby places
    Offer { id: String },
    /// Sign in and remember the token
    Login { email: String, password: String },
    /// Sign out and forget the token
    Logout,
    /// Show the current session
    Whoami,
    /// List favorite offers grouped by city
    Favorites,
    /// Add or remove an offer from favorites
    Favorite {
        id: String,
        /// on or off
        status: FavoriteStatus,
    },
    /// Post a review
    Review {
        id: String,
        #[arg(short, long)]
        rating: u8,
        comment: String,
    },
    /// List supported cities
    Cities,
    /// Print the effective configuration
    Config {
        /// Persist it, including any --api-url override
        #[arg(long)]
        save: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if let Commands::Cities = args.command {
        for city in CITIES {
            println!("{city}");
        }
        return Ok(());
    }

    let mut config = load_config();
    if let Some(api_url) = args.api_url {
        config.api_url = api_url;
    }

    if let Commands::Config { save } = args.command {
        print!("{}", toml::to_string_pretty(&config)?);
        if save {
            save_config(&config).context("Failed to save config")?;
        }
        return Ok(());
    }
    let tokens = TokenStorage::new(Arc::new(FileStore::new(config.token_store_path())));
    let api = HttpApi::new(&config, tokens.clone()).context("Failed to build HTTP client")?;
    log::debug!("using backend {}", api.base_url());

    let mut app = SixCitiesApp::new(Arc::new(api), tokens);
    if let Err(err) = app.run(StoreCommand::CheckAuth).await {
        log::debug!("not signed in: {err}");
    }

    match args.command {
        Commands::Offers { city, sort } => {
            if let Some(city) = city {
                app.dispatch(change_city(city));
            }
            app.dispatch(change_sort(sort));
            app.run(StoreCommand::LoadOffers)
                .await
                .context("Failed to load offers")?;

            let state = app.state();
            let offers = select_visible_offers(state);
            println!("{}", places_found(offers.len(), &state.filters.city));
            println!("Sorted by: {}", state.filters.sort.label());
            for offer in &offers {
                print_offer_line(offer);
            }
        }
        Commands::Offer { id } => {
            app.run(StoreCommand::FetchOffer {
                offer_id: id.clone(),
            })
            .await
            .with_context(|| format!("Failed to load offer {id}"))?;
            // Secondary panels degrade to empty on failure.
            app.request(StoreCommand::FetchReviews {
                offer_id: id.clone(),
            });
            app.request(StoreCommand::FetchNearby { offer_id: id });
            app.wait_for_idle().await;

            let state = app.state();
            let Some(offer) = state.offer_details.current.as_ref() else {
                bail!("Offer not loaded");
            };
            println!("{} [{}]", offer.title, offer.kind);
            println!(
                "€{} / night · rating {:.1} · {} bedrooms · up to {} adults",
                offer.price, offer.rating, offer.bedrooms, offer.max_adults
            );
            if offer.is_premium {
                println!("Premium");
            }
            println!("Host: {}{}", offer.host.name, if offer.host.is_pro { " (Pro)" } else { "" });
            println!("{}", offer.description);
            if !offer.goods.is_empty() {
                println!("Inside: {}", offer.goods.join(", "));
            }

            println!("\nReviews · {}", state.reviews.list.len());
            for review in visible_reviews(state) {
                println!(
                    "  {} ({}) {}/5: {}",
                    review.user.name,
                    format_review_date(&review.date),
                    review.rating,
                    review.comment
                );
            }

            println!("\nOther places in the neighbourhood");
            for nearby in nearby_preview(state) {
                print_offer_line(nearby);
            }
        }
        Commands::Login { email, password } => {
            app.run(StoreCommand::Login {
                credentials: Credentials { email, password },
            })
            .await
            .context("Login failed")?;
            if let Some(user) = app.state().auth.user.as_ref() {
                println!("Signed in as {}", user.email);
            }
        }
        Commands::Logout => {
            app.run(StoreCommand::Logout)
                .await
                .context("Logout failed")?;
            println!("Signed out");
        }
        Commands::Whoami => {
            let state = app.state();
            match state.auth.user.as_ref() {
                Some(user) => println!("{} <{}>", user.name, user.email),
                None => println!("{}", state.auth.status),
            }
        }
        Commands::Favorites => {
            require_auth(&app)?;
            app.run(StoreCommand::FetchFavorites)
                .await
                .context("Failed to load favorites")?;
            let groups = favorites_by_city(app.state());
            if groups.is_empty() {
                println!("Nothing yet saved.");
            }
            for (city, offers) in groups {
                println!("{city}");
                for offer in &offers {
                    print_offer_line(offer);
                }
            }
        }
        Commands::Favorite { id, status } => {
            require_auth(&app)?;
            app.run(StoreCommand::SetFavoriteStatus {
                offer_id: id.clone(),
                status,
            })
            .await
            .with_context(|| format!("Failed to update favorite {id}"))?;
            println!("Favorite {id}: {status}");
        }
        Commands::Review {
            id,
            rating,
            comment,
        } => {
            require_auth(&app)?;
            let review = NewReview { comment, rating };
            if let Err(reason) = review.validate() {
                bail!(reason);
            }
            app.run(StoreCommand::PostReview {
                offer_id: id.clone(),
                review,
            })
            .await
            .with_context(|| format!("Failed to post review for {id}"))?;
            println!("Review posted");
        }
        // Handled before the backend is contacted.
        Commands::Cities | Commands::Config { .. } => {}
    }

    Ok(())
}

fn require_auth(app: &SixCitiesApp) -> Result<()> {
    if !is_authorized(app.state()) {
        bail!("Sign in first: sixcities login <email> <password>");
    }
    Ok(())
}

fn print_offer_line(offer: &Offer) {
    println!(
        "  {:>4} {}€{:<5} {:.1}★ {}{}",
        offer.id,
        if offer.is_premium { "[Premium] " } else { "" },
        offer.price,
        offer.rating,
        offer.title,
        if offer.is_favorite { " ♥" } else { "" },
    );
}

fn format_review_date(value: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.format("%B %Y").to_string())
        .unwrap_or_else(|_| value.to_string())
}
