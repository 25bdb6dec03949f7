//! In-memory sample data
//!
//! The application ships with a small food library and a few composed
//! recipes; nothing is persisted.

use crate::error::{NutritionError, NutritionResult};
use crate::library::FoodLibrary;
use crate::models::{Food, Recipe};

/// The loaded sample data set
pub struct SampleData {
    pub foods: FoodLibrary,
    pub recipes: Vec<Recipe>,
}

/// Build the sample library and recipes
pub fn load() -> NutritionResult<SampleData> {
    let mut foods = FoodLibrary::new();

    // per 100 g: calories, protein, carbs, fat, fiber, potassium, vitamin C, iron
    let apple = foods.add(Food::from_values(
        "Apple", 52.0, 0.3, 13.8, 0.2, 2.4, 107.0, 4.0, 0.12,
    ));
    let chicken = foods.add(Food::from_values(
        "Chicken Breast", 165.0, 31.0, 0.0, 3.6, 0.0, 256.0, 0.0, 1.0,
    ));
    let rice = foods.add(Food::from_values(
        "Brown Rice", 112.0, 2.6, 23.5, 0.9, 1.8, 43.0, 0.0, 0.4,
    ));
    let broccoli = foods.add(Food::from_values(
        "Broccoli", 34.0, 2.8, 6.6, 0.4, 2.6, 316.0, 89.2, 0.73,
    ));
    let spinach = foods.add(Food::from_values(
        "Spinach", 23.0, 2.9, 3.6, 0.4, 2.2, 558.0, 28.1, 2.71,
    ));
    let lentils = foods.add(Food::from_values(
        "Lentils", 116.0, 9.0, 20.0, 0.4, 7.9, 369.0, 1.5, 3.3,
    ));
    let beef = foods.add(Food::from_values(
        "Beef Stew Meat", 215.0, 30.0, 0.0, 10.0, 0.0, 318.0, 0.0, 2.9,
    ));
    let salmon = foods.add(Food::from_values(
        "Salmon", 208.0, 20.0, 0.0, 13.0, 0.0, 363.0, 0.0, 0.8,
    ));
    let oil = foods.add(Food::from_values(
        "Olive Oil", 884.0, 0.0, 0.0, 100.0, 0.0, 1.0, 0.0, 0.56,
    ));

    let handle = |id: i64| foods.get(id).ok_or(NutritionError::UnknownFood(id));

    let mut bowl = Recipe::new("Chicken and Rice Bowl", 2);
    bowl.add_ingredient(handle(chicken)?, 300.0)?;
    bowl.add_ingredient(handle(rice)?, 200.0)?;
    bowl.add_ingredient(handle(broccoli)?, 150.0)?;
    bowl.add_ingredient(handle(oil)?, 15.0)?;

    let mut stew = Recipe::new("Beef and Lentil Stew", 4);
    stew.add_ingredient(handle(beef)?, 400.0)?;
    stew.add_ingredient(handle(lentils)?, 200.0)?;
    stew.add_ingredient(handle(spinach)?, 100.0)?;

    let mut salad = Recipe::new("Salmon Spinach Salad", 1);
    salad.add_ingredient(handle(salmon)?, 120.0)?;
    salad.add_ingredient(handle(spinach)?, 80.0)?;
    salad.add_ingredient(handle(apple)?, 60.0)?;

    tracing::info!(
        foods = foods.len(),
        recipes = 3,
        "sample data loaded"
    );

    Ok(SampleData {
        foods,
        recipes: vec![bowl, stew, salad],
    })
}
