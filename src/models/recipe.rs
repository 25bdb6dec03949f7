//! Recipe model
//!
//! A named aggregate of (food, grams) pairs with a serving count. Foods are
//! shared handles, not owned: one food can appear in many recipes and
//! outlives all of them. All reported nutrition is per serving.

use serde::{Deserialize, Serialize};

use crate::error::{NutritionError, NutritionResult};
use crate::library::SharedFood;
use crate::nutrition::NutritionalItem;
use super::{FoodCategory, Nutrition};

/// Recipe classification by per-serving calories and ingredient makeup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecipeCategory {
    EmptyRecipe,
    LightMeal,
    HeartyMeal,
    ProteinRichMeal,
    HighFatMeal,
    BalancedMeal,
}

impl RecipeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecipeCategory::EmptyRecipe => "Empty Recipe",
            RecipeCategory::LightMeal => "Light Meal",
            RecipeCategory::HeartyMeal => "Hearty Meal",
            RecipeCategory::ProteinRichMeal => "Protein-Rich Meal",
            RecipeCategory::HighFatMeal => "High-Fat Meal",
            RecipeCategory::BalancedMeal => "Balanced Meal",
        }
    }
}

/// Preparation difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Estimated ingredient cost band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CostCategory {
    BudgetFriendly,
    ModerateCost,
    HigherCost,
}

impl CostCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            CostCategory::BudgetFriendly => "Budget-Friendly",
            CostCategory::ModerateCost => "Moderate Cost",
            CostCategory::HigherCost => "Higher Cost",
        }
    }
}

/// An ingredient: a shared food handle and an amount in grams
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub food: SharedFood,
    pub grams: f64,
}

/// A recipe composed of shared food handles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    servings: u32,
    ingredients: Vec<Ingredient>,
}

impl Recipe {
    /// Create an empty recipe. Serving counts below 1 are clamped to 1.
    pub fn new(name: impl Into<String>, servings: u32) -> Self {
        Self {
            name: name.into(),
            servings: servings.max(1),
            ingredients: Vec::new(),
        }
    }

    pub fn servings(&self) -> u32 {
        self.servings
    }

    pub fn set_servings(&mut self, servings: u32) {
        self.servings = servings.max(1);
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn ingredient_count(&self) -> usize {
        self.ingredients.len()
    }

    /// Append an ingredient. Non-positive amounts are rejected and leave the
    /// ingredient sequence untouched.
    pub fn add_ingredient(&mut self, food: SharedFood, grams: f64) -> NutritionResult<()> {
        if grams <= 0.0 {
            return Err(NutritionError::NonPositiveAmount(grams));
        }
        tracing::debug!(recipe = %self.name, food = %food.borrow().name, grams, "adding ingredient");
        self.ingredients.push(Ingredient { food, grams });
        Ok(())
    }

    /// Remove the ingredient at `index`, preserving order of the rest.
    /// Out-of-range indexes are a no-op.
    pub fn remove_ingredient(&mut self, index: usize) {
        if index < self.ingredients.len() {
            self.ingredients.remove(index);
        }
    }

    /// Total ingredient weight in grams
    pub fn total_weight(&self) -> f64 {
        self.ingredients.iter().map(|i| i.grams).sum()
    }

    /// Per-serving nutrient totals, scaled by `multiplier` servings
    pub fn per_serving(&self, multiplier: f64) -> Nutrition {
        let total: Nutrition = self
            .ingredients
            .iter()
            .map(|i| i.food.borrow().scaled(i.grams))
            .sum();
        total.scale(multiplier / self.servings as f64)
    }

    /// Amount-weighted average of ingredient scores plus a complexity bonus
    /// of 0.5 per ingredient, capped at 5. Empty or weightless recipes
    /// score 0.
    pub fn score(&self) -> f64 {
        let total_weight = self.total_weight();
        if self.ingredients.is_empty() || total_weight <= 0.0 {
            return 0.0;
        }
        let weighted: f64 = self
            .ingredients
            .iter()
            .map(|i| i.food.borrow().score() * i.grams / total_weight)
            .sum();
        let complexity_bonus = (self.ingredients.len() as f64 * 0.5).min(5.0);
        weighted + complexity_bonus
    }

    /// Classify by per-serving calories, then by ingredient makeup.
    /// First match wins.
    pub fn category_kind(&self) -> RecipeCategory {
        if self.ingredients.is_empty() {
            return RecipeCategory::EmptyRecipe;
        }
        let calories = self.per_serving(1.0).calories;
        if calories < 200.0 {
            RecipeCategory::LightMeal
        } else if calories > 600.0 {
            RecipeCategory::HeartyMeal
        } else if self.any_ingredient_category(FoodCategory::HighProtein) {
            RecipeCategory::ProteinRichMeal
        } else if self.any_ingredient_category(FoodCategory::HighFat) {
            RecipeCategory::HighFatMeal
        } else {
            RecipeCategory::BalancedMeal
        }
    }

    /// Minutes: 15 base, 5 per ingredient, 10 extra per meat ingredient
    pub fn estimated_cooking_time(&self) -> u32 {
        let meat_count = self
            .ingredients
            .iter()
            .filter(|i| {
                let food = i.food.borrow();
                food.category_kind() == FoodCategory::HighProtein
                    && food.name.to_lowercase().contains("meat")
            })
            .count();
        15 + 5 * self.ingredients.len() as u32 + 10 * meat_count as u32
    }

    pub fn difficulty(&self) -> Difficulty {
        let has_meat_or_fish = self.ingredients.iter().any(|i| {
            let name = i.food.borrow().name.to_lowercase();
            name.contains("meat") || name.contains("fish")
        });
        if self.ingredients.len() <= 3 && !has_meat_or_fish {
            Difficulty::Easy
        } else if self.ingredients.len() <= 6 {
            Difficulty::Medium
        } else {
            Difficulty::Hard
        }
    }

    /// A recipe preps well when nothing demands immediate refrigeration and
    /// there are at least two ingredients
    pub fn is_suitable_for_meal_prep(&self) -> bool {
        let all_storable = self.ingredients.iter().all(|i| {
            !i.food
                .borrow()
                .storage_info()
                .to_lowercase()
                .contains("refrigerate immediately")
        });
        all_storable && self.ingredients.len() >= 2
    }

    /// Meal-prep efficiency: mean of score, time efficiency (full marks at
    /// zero minutes, none at an hour or more), and a flat storage bonus
    pub fn meal_prep_efficiency(&self) -> f64 {
        let cooking_time = self.estimated_cooking_time() as f64;
        let time_efficiency = (60.0 - cooking_time).max(0.0) / 60.0 * 100.0;
        let storage_bonus = if self.is_suitable_for_meal_prep() {
            20.0
        } else {
            0.0
        };
        (self.score() + time_efficiency + storage_bonus) / 3.0
    }

    /// Cost band from the count of premium ingredients: meats, salmon, and
    /// anything used in bulk (over 200 g)
    pub fn cost_category(&self) -> CostCategory {
        let premium_count = self
            .ingredients
            .iter()
            .filter(|i| {
                let food = i.food.borrow();
                let name = food.name.to_lowercase();
                (food.category_kind() == FoodCategory::HighProtein && name.contains("meat"))
                    || name.contains("salmon")
                    || i.grams > 200.0
            })
            .count();
        match premium_count {
            0 => CostCategory::BudgetFriendly,
            1..=2 => CostCategory::ModerateCost,
            _ => CostCategory::HigherCost,
        }
    }

    fn any_ingredient_category(&self, category: FoodCategory) -> bool {
        self.ingredients
            .iter()
            .any(|i| i.food.borrow().category_kind() == category)
    }
}

impl NutritionalItem for Recipe {
    fn name(&self) -> &str {
        &self.name
    }

    fn reference_amount(&self) -> f64 {
        1.0
    }

    fn nutritional_info(&self, amount: f64) -> Nutrition {
        self.per_serving(amount)
    }

    fn nutrition_score(&self) -> f64 {
        self.score()
    }

    fn category(&self) -> &'static str {
        self.category_kind().as_str()
    }

    fn dietary_rule(&self, need: &str) -> Option<bool> {
        match need {
            "meal-prep" => Some(self.is_suitable_for_meal_prep()),
            "quick-meal" => Some(self.estimated_cooking_time() <= 30),
            "budget" => Some(self.cost_category() == CostCategory::BudgetFriendly),
            "complex-nutrition" => Some(self.ingredient_count() >= 4 && self.score() > 20.0),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::models::Food;

    fn shared(food: Food) -> SharedFood {
        Rc::new(RefCell::new(food))
    }

    fn chicken() -> SharedFood {
        shared(Food::from_values(
            "Chicken Breast", 165.0, 31.0, 0.0, 3.6, 0.0, 256.0, 0.0, 1.0,
        ))
    }

    fn rice() -> SharedFood {
        shared(Food::from_values(
            "Brown Rice", 112.0, 2.6, 23.5, 0.9, 1.8, 43.0, 0.0, 0.4,
        ))
    }

    fn beef() -> SharedFood {
        shared(Food::from_values(
            "Beef Stew Meat", 215.0, 30.0, 0.0, 10.0, 0.0, 318.0, 0.0, 2.9,
        ))
    }

    #[test]
    fn test_empty_recipe() {
        let recipe = Recipe::new("Nothing Yet", 2);
        assert_eq!(recipe.score(), 0.0);
        assert_eq!(recipe.category_kind(), RecipeCategory::EmptyRecipe);
        assert_eq!(recipe.estimated_cooking_time(), 15);
    }

    #[test]
    fn test_add_ingredient_rejects_non_positive_amount() {
        let mut recipe = Recipe::new("Test", 1);
        assert!(recipe.add_ingredient(chicken(), 0.0).is_err());
        assert!(recipe.add_ingredient(rice(), -50.0).is_err());
        assert_eq!(recipe.ingredient_count(), 0);
    }

    #[test]
    fn test_remove_ingredient_out_of_range_is_noop() {
        let mut recipe = Recipe::new("Test", 1);
        recipe.add_ingredient(chicken(), 100.0).unwrap();
        recipe.remove_ingredient(5);
        assert_eq!(recipe.ingredient_count(), 1);
        recipe.remove_ingredient(0);
        assert_eq!(recipe.ingredient_count(), 0);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut recipe = Recipe::new("Test", 1);
        recipe.add_ingredient(chicken(), 100.0).unwrap();
        recipe.add_ingredient(rice(), 150.0).unwrap();
        recipe.add_ingredient(beef(), 200.0).unwrap();
        recipe.remove_ingredient(1);
        assert_eq!(recipe.ingredients()[0].food.borrow().name, "Chicken Breast");
        assert_eq!(recipe.ingredients()[1].food.borrow().name, "Beef Stew Meat");
    }

    #[test]
    fn test_per_serving_divides_by_servings() {
        let food = chicken();
        let mut recipe = Recipe::new("Meal Prep Chicken", 3);
        recipe.add_ingredient(food.clone(), 450.0).unwrap();

        let per_serving = recipe.per_serving(1.0);
        let whole = food.borrow().scaled(450.0);
        assert!((per_serving.calories - whole.calories / 3.0).abs() < 1e-9);
        assert!((per_serving.protein - whole.protein / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_score_is_weighted_average_plus_bonus() {
        let c = chicken();
        let r = rice();
        let mut recipe = Recipe::new("Chicken and Rice", 2);
        recipe.add_ingredient(c.clone(), 100.0).unwrap();
        recipe.add_ingredient(r.clone(), 300.0).unwrap();

        let expected = (c.borrow().score() * 100.0 + r.borrow().score() * 300.0) / 400.0 + 1.0;
        assert!((recipe.score() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_complexity_bonus_caps_at_five() {
        let mut recipe = Recipe::new("Everything Bowl", 1);
        for _ in 0..12 {
            recipe.add_ingredient(rice(), 50.0).unwrap();
        }
        let base = rice().borrow().score();
        assert!((recipe.score() - (base + 5.0)).abs() < 1e-9);
    }

    #[test]
    fn test_category_bands() {
        let mut light = Recipe::new("Rice Cup", 1);
        light.add_ingredient(rice(), 100.0).unwrap();
        assert_eq!(light.category_kind(), RecipeCategory::LightMeal);

        let mut hearty = Recipe::new("Rice Mountain", 1);
        hearty.add_ingredient(rice(), 600.0).unwrap();
        assert_eq!(hearty.category_kind(), RecipeCategory::HeartyMeal);

        // 300 g chicken + 200 g rice = 719 kcal for 2 servings = 359.5 each
        let mut protein_rich = Recipe::new("Chicken and Rice", 2);
        protein_rich.add_ingredient(chicken(), 300.0).unwrap();
        protein_rich.add_ingredient(rice(), 200.0).unwrap();
        assert_eq!(protein_rich.category_kind(), RecipeCategory::ProteinRichMeal);
    }

    #[test]
    fn test_cooking_time_counts_meat() {
        let mut recipe = Recipe::new("Stew", 4);
        recipe.add_ingredient(beef(), 300.0).unwrap();
        recipe.add_ingredient(rice(), 200.0).unwrap();
        // 15 + 5*2 + 10*1
        assert_eq!(recipe.estimated_cooking_time(), 35);
    }

    #[test]
    fn test_difficulty() {
        let mut easy = Recipe::new("Rice Bowl", 1);
        easy.add_ingredient(rice(), 200.0).unwrap();
        assert_eq!(easy.difficulty(), Difficulty::Easy);

        // small but meaty: not easy
        let mut meaty = Recipe::new("Beef Bowl", 1);
        meaty.add_ingredient(beef(), 200.0).unwrap();
        assert_eq!(meaty.difficulty(), Difficulty::Medium);

        let mut big = Recipe::new("Feast", 1);
        for _ in 0..7 {
            big.add_ingredient(rice(), 50.0).unwrap();
        }
        assert_eq!(big.difficulty(), Difficulty::Hard);
    }

    #[test]
    fn test_meal_prep_suitability() {
        // beef demands immediate refrigeration
        let mut stew = Recipe::new("Stew", 2);
        stew.add_ingredient(beef(), 300.0).unwrap();
        stew.add_ingredient(rice(), 200.0).unwrap();
        assert!(!stew.is_suitable_for_meal_prep());

        // a single storable ingredient is still not enough
        let mut lone = Recipe::new("Plain Rice", 1);
        lone.add_ingredient(rice(), 200.0).unwrap();
        assert!(!lone.is_suitable_for_meal_prep());

        let mut bowl = Recipe::new("Chicken and Rice", 2);
        bowl.add_ingredient(chicken(), 150.0).unwrap();
        bowl.add_ingredient(rice(), 200.0).unwrap();
        assert!(bowl.is_suitable_for_meal_prep());
    }

    #[test]
    fn test_cost_category() {
        let mut budget = Recipe::new("Rice", 1);
        budget.add_ingredient(rice(), 150.0).unwrap();
        assert_eq!(budget.cost_category(), CostCategory::BudgetFriendly);

        let mut moderate = Recipe::new("Beef and Rice", 2);
        moderate.add_ingredient(beef(), 150.0).unwrap();
        moderate.add_ingredient(rice(), 150.0).unwrap();
        assert_eq!(moderate.cost_category(), CostCategory::ModerateCost);

        // meat + salmon + bulk rice: three premium ingredients
        let salmon = shared(Food::from_values(
            "Salmon", 208.0, 20.0, 0.0, 13.0, 0.0, 363.0, 0.0, 0.8,
        ));
        let mut pricey = Recipe::new("Surf and Turf", 2);
        pricey.add_ingredient(beef(), 150.0).unwrap();
        pricey.add_ingredient(salmon, 150.0).unwrap();
        pricey.add_ingredient(rice(), 250.0).unwrap();
        assert_eq!(pricey.cost_category(), CostCategory::HigherCost);
    }

    #[test]
    fn test_meal_prep_efficiency() {
        let mut bowl = Recipe::new("Chicken and Rice", 2);
        bowl.add_ingredient(chicken(), 300.0).unwrap();
        bowl.add_ingredient(rice(), 200.0).unwrap();

        // 25 minutes of cooking, meal-prep suitable
        let expected = (bowl.score() + (60.0 - 25.0) / 60.0 * 100.0 + 20.0) / 3.0;
        assert!((bowl.meal_prep_efficiency() - expected).abs() < 1e-9);

        // an hour-plus recipe earns no time credit
        let mut slow = Recipe::new("All-Day Stew", 4);
        for _ in 0..10 {
            slow.add_ingredient(beef(), 100.0).unwrap();
        }
        assert!(slow.estimated_cooking_time() >= 60);
        let expected = (slow.score() + 0.0) / 3.0;
        assert!((slow.meal_prep_efficiency() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_recipe_dietary_rules_and_fallback() {
        let mut bowl = Recipe::new("Chicken and Rice", 2);
        bowl.add_ingredient(chicken(), 150.0).unwrap();
        bowl.add_ingredient(rice(), 200.0).unwrap();

        assert!(bowl.is_suitable_for("meal-prep"));
        // 15 + 5*2 = 25 minutes
        assert!(bowl.is_suitable_for("quick-meal"));
        assert!(bowl.is_suitable_for("budget"));
        assert!(!bowl.is_suitable_for("complex-nutrition"));
        // unrecognized needs fall through to the base contract
        assert!(bowl.is_suitable_for("anything-else"));
    }

    #[test]
    fn test_shared_food_edit_is_visible_to_recipe() {
        let food = chicken();
        let mut recipe = Recipe::new("Bowl", 1);
        recipe.add_ingredient(food.clone(), 100.0).unwrap();

        food.borrow_mut().nutrition.calories = 200.0;
        assert!((recipe.per_serving(1.0).calories - 200.0).abs() < 1e-9);
    }
}
