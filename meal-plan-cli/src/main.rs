use std::collections::HashMap;
use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use meal_plan::{convert_to_meal_plan, ManualMealPlanInput, MealPlanParser};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a pasted meal plan into meals and warnings
    Parse {
        /// File with the plan text; reads stdin when absent or `-`
        #[clap(value_parser)]
        file: Option<PathBuf>,
        #[arg(long, default_value = "Manual Meal Plan")]
        plan_name: String,
        #[arg(long, default_value = "general")]
        fitness_goal: String,
        #[arg(long, default_value_t = 1)]
        days: u32,
        #[arg(long, default_value_t = 3)]
        meals_per_day: u32,
        #[arg(long)]
        generate_images: bool,
        /// Emit a complete meal plan instead of the parse result
        #[arg(short, long)]
        convert: bool,
        /// Image for a meal, e.g. `day1-meal2=https://...` (repeatable)
        #[arg(long, value_parser = parse_image)]
        image: Vec<(String, String)>,
        /// Extra count unit that is kept but never converted (repeatable)
        #[arg(long)]
        count_unit: Vec<String>,
    },
    /// Parse a single ingredient line
    ParseIngredient {
        #[clap(value_parser)]
        line: String,
        #[arg(short, long)]
        json: bool,
    },
}

fn parse_image(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, url)) if key.starts_with("day") && key.contains("-meal") && !url.is_empty() => {
            Ok((key.to_string(), url.to_string()))
        }
        _ => Err(format!("expected dayN-mealM=URL, got \"{s}\"")),
    }
}

fn read_text(file: Option<&PathBuf>) -> anyhow::Result<String> {
    match file {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            file,
            plan_name,
            fitness_goal,
            days,
            meals_per_day,
            generate_images,
            convert,
            image,
            count_unit,
        } => {
            let input = ManualMealPlanInput {
                plan_name,
                fitness_goal,
                days,
                meals_per_day,
                pasted_text: read_text(file.as_ref())?,
                generate_images,
            };
            input.validate()?;

            let mut parser = MealPlanParser::new();
            parser
                .count_units
                .extend(count_unit.iter().map(|u| u.trim().to_lowercase()));

            let parsed = parser.parse(&input)?;
            tracing::info!(
                meals = parsed.meals.len(),
                ingredients = parsed.ingredient_count(),
                warnings = parsed.parse_warnings.len(),
                "parsed meal plan"
            );

            if convert {
                let images: HashMap<String, String> = image.into_iter().collect();
                let plan = convert_to_meal_plan(&input, &parsed.meals, Some(&images));
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                if !image.is_empty() {
                    tracing::warn!("--image only applies together with --convert");
                }
                println!("{}", serde_json::to_string_pretty(&parsed)?);
            }
        }
        Commands::ParseIngredient { line, json } => {
            let parsed = MealPlanParser::new().parse_ingredient_line(&line)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&parsed)?);
            } else {
                println!("{parsed}");
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_image() {
        assert_eq!(
            parse_image("day1-meal2=http://x/1.jpg"),
            Ok(("day1-meal2".to_string(), "http://x/1.jpg".to_string()))
        );
        assert!(parse_image("http://x/1.jpg").is_err());
        assert!(parse_image("day1-meal2=").is_err());
        assert!(parse_image("breakfast=http://x/1.jpg").is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parse_flags() {
        let cli = Cli::try_parse_from([
            "meal-plan",
            "parse",
            "plan.txt",
            "--days",
            "2",
            "--convert",
            "--image",
            "day1-meal1=http://x/1.jpg",
            "--count-unit",
            "rasher",
        ]);
        match cli.map(|c| c.command) {
            Ok(Commands::Parse {
                file,
                days,
                convert,
                image,
                count_unit,
                ..
            }) => {
                assert_eq!(file, Some(PathBuf::from("plan.txt")));
                assert_eq!(days, 2);
                assert!(convert);
                assert_eq!(image.len(), 1);
                assert_eq!(count_unit, vec!["rasher".to_string()]);
            }
            _ => unreachable!("parse subcommand expected"),
        }
    }
}
