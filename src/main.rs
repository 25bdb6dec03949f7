//! nutrikit demo binary
//!
//! Loads the sample data set and prints the derived nutrition report.

use serde::Serialize;
use tracing_subscriber::EnvFilter;

use nutrikit::build_info;
use nutrikit::models::{ActivityLevel, Gender, User};
use nutrikit::nutrition::{food_security_impact, NutritionCalculator, NutritionalItem};
use nutrikit::sample_data;

/// Top-level figures for the JSON report
#[derive(Debug, Serialize)]
struct Report {
    build: build_info::BuildInfo,
    food_count: usize,
    recipe_count: usize,
    average_food_score: f64,
    food_diversity_index: f64,
    food_security_impact: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("nutrikit=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    let data = sample_data::load()?;
    let foods = data.foods.snapshot();
    let food_calc = NutritionCalculator::new(&foods);

    println!("Foods:");
    for food in food_calc.sorted_by_score() {
        println!("  {}", food.summary());
    }

    println!("\nRecipes:");
    for recipe in &data.recipes {
        println!("  {}", recipe.summary());
        println!(
            "    {} | {} min | {}",
            recipe.difficulty().as_str(),
            recipe.estimated_cooking_time(),
            recipe.cost_category().as_str(),
        );
    }

    let user = User::new(
        "Robin", 34, Gender::Female, 70.0, 175.0, ActivityLevel::Moderate,
    );
    println!(
        "\n{}: BMI {:.1} ({}), {:.0} kcal/day, {:.0} g protein/day",
        user.name,
        user.bmi(),
        user.bmi_category().as_str(),
        user.daily_calorie_needs(),
        user.protein_needs(),
    );

    let report = Report {
        build: build_info::BuildInfo::current(),
        food_count: foods.len(),
        recipe_count: data.recipes.len(),
        average_food_score: food_calc.average_score(),
        food_diversity_index: food_calc.diversity_index(),
        food_security_impact: food_security_impact(&foods),
    };
    println!("\n{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
