use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use food_data::FoodTable;
use goal_describer::{GoalDescriber, KeywordGoalDescriber};
use profile::{DietaryPreferences, UserProfile};
use rand::rngs::StdRng;
use rand::SeedableRng;
use server::{load_food_table, NutritionRecommendation, NutritionRecommender};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;

/// NutriRecs - Rule-based nutrition recommendations
#[derive(Parser)]
#[command(name = "nutri-recs")]
#[command(about = "Meal plans filtered by dietary preferences", long_about = None)]
struct Cli {
    /// Food table file (defaults to the built-in table)
    #[arg(short, long, global = true, env = "NUTRI_RECS_FOODS")]
    foods: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a recommendation
    Recommend {
        /// User id recorded in the profile
        #[arg(long)]
        user_id: Option<String>,

        /// Only plant-based foods
        #[arg(long)]
        vegan: bool,

        /// Only low-carb foods
        #[arg(long)]
        low_carb: bool,

        /// Free-text nutrition goal
        #[arg(long)]
        goal: Option<String>,

        /// Seed for reproducible meal choices
        #[arg(long)]
        seed: Option<u64>,

        /// Print the response body as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the food table
    Foods {
        /// Only foods carrying this tag
        #[arg(long)]
        tag: Option<String>,
    },

    /// Describe a free-text goal
    DescribeGoal {
        #[arg(long)]
        text: String,
    },

    /// Run benchmark to test performance
    Benchmark {
        /// Number of requests to make
        #[arg(long, default_value = "1000")]
        requests: usize,

        /// Number of concurrent requests
        #[arg(long, default_value = "10")]
        concurrent: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Recommend {
            user_id,
            vegan,
            low_carb,
            goal,
            seed,
            json,
        } => handle_recommend(
            load_table(&cli.foods)?,
            user_id,
            DietaryPreferences::new(vegan, low_carb),
            goal,
            seed,
            json,
        )?,
        Commands::Foods { tag } => {
            let food_table = load_table(&cli.foods)?;
            handle_foods(&food_table, tag)?
        }
        Commands::DescribeGoal { text } => handle_describe_goal(&text)?,
        Commands::Benchmark {
            requests,
            concurrent,
        } => handle_benchmark(load_table(&cli.foods)?, requests, concurrent).await?,
    }

    Ok(())
}

/// Load the food table named on the command line, or the built-in one
fn load_table(path: &Option<PathBuf>) -> Result<Arc<FoodTable>> {
    let start = Instant::now();
    let food_table = load_food_table(path.as_deref())?;
    eprintln!(
        "{} Loaded {} foods in {:?}",
        "✓".green(),
        food_table.len(),
        start.elapsed()
    );
    Ok(Arc::new(food_table))
}

/// Handle the 'recommend' command
fn handle_recommend(
    food_table: Arc<FoodTable>,
    user_id: Option<String>,
    preferences: DietaryPreferences,
    goal: Option<String>,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let mut user_profile = UserProfile::new();
    if let Some(user_id) = user_id {
        user_profile = user_profile.with_field("user_id", user_id);
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let recommender = NutritionRecommender::new(food_table);
    let recommendation =
        recommender.recommend(&user_profile, Some(&preferences), goal.as_deref(), &mut rng);

    if json {
        let body = serde_json::to_string_pretty(&recommendation)
            .context("Failed to serialize recommendation")?;
        println!("{}", body);
    } else {
        print_recommendation(&recommendation, &preferences);
    }
    Ok(())
}

/// Handle the 'foods' command
fn handle_foods(food_table: &FoodTable, tag: Option<String>) -> Result<()> {
    let items = match &tag {
        Some(tag) => {
            let tag = tag.trim().to_lowercase();
            let items = food_table.with_tag(&tag);
            if items.is_empty() {
                bail!("No foods tagged '{}'", tag);
            }
            items
        }
        None => food_table.all(),
    };

    println!("{}", "Foods:".bold().blue());
    for item in items {
        let tags = item.tags.iter().cloned().collect::<Vec<_>>().join(", ");
        println!(
            "  {} - {:.0} kcal, P {:.1} g / C {:.1} g / F {:.1} g [{}]",
            item.name.green(),
            item.calories,
            item.protein_g,
            item.carbs_g,
            item.fat_g,
            tags
        );
    }

    if tag.is_none() {
        println!("{}", "Tags:".bold().blue());
        for (tag, count) in food_table.tag_counts() {
            println!("  {}: {}", tag, count);
        }
    }
    Ok(())
}

/// Handle the 'describe-goal' command
fn handle_describe_goal(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        bail!("Goal text is empty");
    }
    let describer = KeywordGoalDescriber::new();
    println!("{}", describer.describe(text));
    Ok(())
}

/// Handle the 'benchmark' command
async fn handle_benchmark(
    food_table: Arc<FoodTable>,
    requests: usize,
    concurrent: usize,
) -> Result<()> {
    if requests == 0 {
        bail!("--requests must be at least 1");
    }
    if concurrent == 0 {
        bail!("--concurrent must be at least 1");
    }

    let recommender = NutritionRecommender::new(food_table);
    let limiter = Arc::new(Semaphore::new(concurrent));

    // Cycle through every preference combination
    let combinations = [
        DietaryPreferences::new(false, false),
        DietaryPreferences::new(true, false),
        DietaryPreferences::new(false, true),
        DietaryPreferences::new(true, true),
    ];

    let wall_clock = Instant::now();
    let mut handles = Vec::with_capacity(requests);
    for i in 0..requests {
        let recommender = recommender.clone();
        let limiter = limiter.clone();
        let preferences = combinations[i % combinations.len()];
        let user_profile = UserProfile::new().with_field("user_id", i);
        let handle = tokio::spawn(async move {
            let _permit = limiter.acquire_owned().await?;
            let mut rng = StdRng::seed_from_u64(i as u64);
            let start = Instant::now();
            recommender.recommend(
                &user_profile,
                Some(&preferences),
                Some("lose 5 kg in 2 months"),
                &mut rng,
            );
            Ok::<_, anyhow::Error>(start.elapsed())
        });
        handles.push(handle);
    }

    // Wait for all tasks to complete and collect timings
    let mut timings: Vec<Duration> = Vec::with_capacity(requests);
    for handle in handles {
        timings.push(handle.await??);
    }
    let total_time = wall_clock.elapsed();

    let latency_sum: Duration = timings.iter().sum();
    let avg_latency = latency_sum / timings.len() as u32;
    timings.sort();
    let p50 = timings[timings.len() / 2];
    let p95 = timings[(timings.len() as f64 * 0.95) as usize];
    let p99 = timings[(timings.len() as f64 * 0.99) as usize];
    let throughput = requests as f64 / total_time.as_secs_f64();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Requests: {} ({} concurrent)", requests, concurrent);
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", p50);
    println!("P95 latency: {:?}", p95);
    println!("P99 latency: {:?}", p99);
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

/// Helper function to format and print a recommendation
fn print_recommendation(recommendation: &NutritionRecommendation, preferences: &DietaryPreferences) {
    let active = preferences.active();
    if active.is_empty() {
        println!("{}", "Meal Plan:".bold().blue());
    } else {
        println!(
            "{} ({})",
            "Meal Plan:".bold().blue(),
            active.join(", ")
        );
    }

    if recommendation.meal_plan.is_empty() {
        println!("  {}", "No foods match these preferences".yellow());
    }
    for entry in &recommendation.meal_plan {
        println!("  {}: {}", entry.meal_type.to_string().green(), entry.food_item);
    }

    println!();
    println!("{} {}", "Goal:".bold(), recommendation.nutrition_goal_description);
    println!("{} {}", "Macros:".bold(), recommendation.macronutrient_distribution_notes);
    println!("{} {}", "Tips:".bold(), recommendation.tips);
}
