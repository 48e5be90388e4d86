use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use engine::{
    LikeOutcome, MealRecommendation, RecommendationEngine, Session, SuggestionOutcome,
};
use preferences::RecommendationFilters;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;
use weather_client::{
    NoWeather, WeatherClient, WeatherConfig, WeatherObservation, WeatherProvider,
    DEFAULT_WEATHER_URL,
};

/// MealRecs - Weather-aware meal recommender
#[derive(Parser)]
#[command(name = "meal-recs")]
#[command(about = "Suggests dishes from a recipe catalog using filters, weather and your likes", long_about = None)]
struct Cli {
    /// Path to the recipe catalog (JSON array)
    #[arg(short, long, default_value = "data/recipes.json")]
    catalog: PathBuf,

    /// Weather API key; without one every lookup falls back to "any" weather
    #[arg(long, env = "API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Current-weather endpoint
    #[arg(long, env = "WEATHER_API_URL", default_value = DEFAULT_WEATHER_URL)]
    weather_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank the catalog once and print the best matches
    Recommend {
        #[arg(long, value_enum)]
        meal_type: Option<MealType>,

        /// Cuisine to prefer (exact match)
        #[arg(long)]
        cuisine: Option<String>,

        /// City to look the weather up for
        #[arg(long)]
        city: Option<String>,

        /// Number of recommendations to show
        #[arg(long, default_value = "5")]
        limit: usize,

        /// Show the score breakdown for each recommendation
        #[arg(long)]
        explain: bool,
    },

    /// List the cuisines in the catalog
    Cuisines,

    /// Suggest dishes one at a time and learn from likes and dislikes
    Interactive {
        #[arg(long, value_enum)]
        meal_type: Option<MealType>,

        #[arg(long)]
        cuisine: Option<String>,

        #[arg(long)]
        city: Option<String>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    fn as_str(self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = WeatherConfig::new(cli.api_key.clone()).with_base_url(cli.weather_url.clone());
    let weather: Arc<dyn WeatherProvider> = if config.api_key.is_some() {
        Arc::new(WeatherClient::new(config))
    } else {
        warn!("API_KEY not set, weather lookups are disabled");
        Arc::new(NoWeather)
    };

    println!("Loading recipe catalog from {}...", cli.catalog.display());
    let start = Instant::now();
    let engine = RecommendationEngine::load(&cli.catalog, weather)
        .context("Cannot start without a recipe catalog")?;
    println!(
        "{} Loaded {} recipes in {:?}",
        "✓".green(),
        engine.catalog().len(),
        start.elapsed()
    );

    match cli.command {
        Commands::Recommend {
            meal_type,
            cuisine,
            city,
            limit,
            explain,
        } => {
            let filters = build_filters(meal_type, cuisine, city);
            handle_recommend(&engine, &filters, limit, explain).await?
        }
        Commands::Cuisines => handle_cuisines(&engine),
        Commands::Interactive {
            meal_type,
            cuisine,
            city,
        } => {
            let filters = build_filters(meal_type, cuisine, city);
            handle_interactive(&engine, filters).await?
        }
    }

    Ok(())
}

fn build_filters(
    meal_type: Option<MealType>,
    cuisine: Option<String>,
    city: Option<String>,
) -> RecommendationFilters {
    RecommendationFilters::from_parts(meal_type.map(|m| m.as_str().to_string()), cuisine, city)
}

/// Handle the 'recommend' command
async fn handle_recommend(
    engine: &RecommendationEngine,
    filters: &RecommendationFilters,
    limit: usize,
    explain: bool,
) -> Result<()> {
    if limit == 0 {
        return Err(anyhow!("--limit must be at least 1"));
    }

    let outcome = engine
        .get_recommendations(filters, &Default::default(), &Default::default())
        .await;

    print_weather(outcome.weather.as_ref(), filters.city());
    println!("Weather suitability: {}", outcome.suitability.to_string().cyan());

    if outcome.recommendations.is_empty() {
        println!("{}", "No recipes in the catalog.".yellow());
        return Ok(());
    }

    let shown = &outcome.recommendations[..limit.min(outcome.recommendations.len())];
    print_recommendations(shown, explain);
    Ok(())
}

/// Handle the 'cuisines' command
fn handle_cuisines(engine: &RecommendationEngine) {
    let catalog = engine.catalog();
    println!("{}", "Cuisines:".bold().blue());
    for cuisine in catalog.cuisines() {
        println!(
            "  - {} ({} recipes)",
            cuisine,
            catalog.get_recipes_by_cuisine(cuisine).len()
        );
    }
}

/// One line of input in interactive mode
#[derive(Debug, PartialEq, Eq)]
enum SessionCommand {
    Suggest,
    Like,
    Dislike,
    MealType(Option<MealType>),
    Cuisine(Option<String>),
    City(Option<String>),
    Liked,
    Help,
    Quit,
}

impl SessionCommand {
    fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };
        let value = if rest.is_empty() || rest.eq_ignore_ascii_case("none") {
            None
        } else {
            Some(rest.to_string())
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "" | "s" | "suggest" => SessionCommand::Suggest,
            "l" | "like" => SessionCommand::Like,
            "d" | "dislike" => SessionCommand::Dislike,
            "meal" => match value {
                Some(v) => SessionCommand::MealType(Some(
                    MealType::from_str(&v, true).map_err(|e| anyhow!(e))?,
                )),
                None => SessionCommand::MealType(None),
            },
            "cuisine" => SessionCommand::Cuisine(value),
            "city" => SessionCommand::City(value),
            "liked" => SessionCommand::Liked,
            "h" | "help" | "?" => SessionCommand::Help,
            "q" | "quit" | "exit" => SessionCommand::Quit,
            other => return Err(anyhow!("Unknown command '{}', type 'help'", other)),
        };
        Ok(command)
    }
}

/// Handle the 'interactive' command
async fn handle_interactive(
    engine: &RecommendationEngine,
    mut filters: RecommendationFilters,
) -> Result<()> {
    let mut session = Session::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    print_help();
    print_filters(&filters);

    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        let command = match SessionCommand::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e.to_string().red());
                continue;
            }
        };

        match command {
            SessionCommand::Suggest => {
                let outcome = session.request_suggestion(engine, &filters).await;
                print_weather(session.weather(), filters.city());
                print_suggestion(&outcome);
            }
            SessionCommand::Like => match session.like(engine.catalog()) {
                LikeOutcome::Liked(_) | LikeOutcome::AlreadyLiked(_) => {
                    println!("{} Noted, you'll see more like this.", "♥".red());
                }
                LikeOutcome::NoActiveRecommendation => {
                    println!("{}", "Nothing to like yet, ask for a suggestion first.".yellow());
                }
            },
            SessionCommand::Dislike => match session.dislike(engine, &filters).await {
                Some(outcome) => {
                    println!("Got it, you won't see that one again.");
                    print_suggestion(&outcome);
                }
                None => {
                    println!("{}", "Nothing to dislike yet, ask for a suggestion first.".yellow());
                }
            },
            SessionCommand::MealType(meal) => {
                filters = RecommendationFilters::from_parts(
                    meal.map(|m| m.as_str().to_string()),
                    filters.cuisine().map(str::to_string),
                    filters.city().map(str::to_string),
                );
                print_filters(&filters);
            }
            SessionCommand::Cuisine(cuisine) => {
                filters = RecommendationFilters::from_parts(
                    filters.meal_type().map(str::to_string),
                    cuisine,
                    filters.city().map(str::to_string),
                );
                print_filters(&filters);
            }
            SessionCommand::City(city) => {
                filters = RecommendationFilters::from_parts(
                    filters.meal_type().map(str::to_string),
                    filters.cuisine().map(str::to_string),
                    city,
                );
                print_filters(&filters);
            }
            SessionCommand::Liked => {
                let names = session.liked_names(engine.catalog());
                if names.is_empty() {
                    println!("No liked dishes yet.");
                } else {
                    println!("{}", "Liked dishes:".bold().blue());
                    for name in names {
                        println!("  - {}", name);
                    }
                }
            }
            SessionCommand::Help => print_help(),
            SessionCommand::Quit => break,
        }
    }

    Ok(())
}

fn print_help() {
    println!("{}", "Commands:".bold().blue());
    println!("  suggest (or empty line)   next dish");
    println!("  like / dislike            feedback on the current dish");
    println!("  meal <type|none>          breakfast, lunch, dinner, snack");
    println!("  cuisine <name|none>       prefer a cuisine");
    println!("  city <name|none>          use that city's weather");
    println!("  liked                     list liked dishes");
    println!("  quit");
}

fn print_filters(filters: &RecommendationFilters) {
    println!(
        "Filters: meal type {}, cuisine {}, city {}",
        filters.meal_type().unwrap_or("any").cyan(),
        filters.cuisine().unwrap_or("any").cyan(),
        filters.city().unwrap_or("none").cyan()
    );
}

fn print_weather(weather: Option<&WeatherObservation>, city: Option<&str>) {
    match (weather, city) {
        (Some(w), _) => {
            let temperature = w
                .temperature_celsius
                .map(|t| format!("{:.1}°C", t))
                .unwrap_or_else(|| "?".to_string());
            println!(
                "Weather in {}: {}, {}",
                w.city_name.bold(),
                w.condition.as_deref().unwrap_or("unknown"),
                temperature
            );
        }
        (None, Some(city)) => println!("{}", format!("Weather info not available for {}.", city).yellow()),
        (None, None) => {}
    }
}

fn print_suggestion(outcome: &SuggestionOutcome) {
    match outcome {
        SuggestionOutcome::Suggested(rec) => {
            println!(
                "{} {} ({}) - Score: {}",
                "➜".green(),
                rec.name.bold(),
                rec.cuisine,
                rec.score
            );
        }
        SuggestionOutcome::Exhausted => {
            println!("{}", "No more recommendations, starting over.".yellow());
        }
    }
}

/// Helper function to format and print recommendations
fn print_recommendations(recommendations: &[MealRecommendation], explain: bool) {
    println!("{}", "Meal Recommendations:".bold().blue());
    for (i, rec) in recommendations.iter().enumerate() {
        println!(
            "{}. {} ({}) [{}] - Score: {}",
            (i + 1).to_string().green(),
            rec.name,
            rec.cuisine,
            rec.meal_type.join(", "),
            rec.score
        );
        if explain {
            println!("   {}", rec.explanation);
        }
    }
}
