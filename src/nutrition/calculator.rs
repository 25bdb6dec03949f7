//! Batch operations over collections of nutritional items
//!
//! [`NutritionCalculator`] is generic over anything implementing the shared
//! contract; inherent impls on the `Food` and `Recipe` instantiations add the
//! domain-specific queries.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{NutritionError, NutritionResult};
use crate::models::{Difficulty, Food, FoodCategory, Nutrition, Recipe};
use super::NutritionalItem;

/// Batch helper over a slice of items, with an optional parallel sequence of
/// amounts. Without amounts, a uniform amount of 1.0 is used per item.
pub struct NutritionCalculator<'a, T> {
    items: &'a [T],
    amounts: Option<Vec<f64>>,
}

impl<'a, T: NutritionalItem> NutritionCalculator<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        Self {
            items,
            amounts: None,
        }
    }

    /// Attach per-item amounts; the sequence must match the item count.
    pub fn with_amounts(items: &'a [T], amounts: Vec<f64>) -> NutritionResult<Self> {
        if amounts.len() != items.len() {
            return Err(NutritionError::AmountLengthMismatch {
                items: items.len(),
                amounts: amounts.len(),
            });
        }
        Ok(Self {
            items,
            amounts: Some(amounts),
        })
    }

    fn amount_for(&self, index: usize) -> f64 {
        self.amounts.as_ref().map_or(1.0, |a| a[index])
    }

    /// Sum of nutrient values across all items
    pub fn total_nutrition(&self) -> Nutrition {
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| item.nutritional_info(self.amount_for(i)))
            .sum()
    }

    pub fn filter<P>(&self, predicate: P) -> Vec<&'a T>
    where
        P: Fn(&T) -> bool,
    {
        self.items.iter().filter(|item| predicate(item)).collect()
    }

    /// Items sorted by score, best first
    pub fn sorted_by_score(&self) -> Vec<&'a T> {
        let mut sorted: Vec<&T> = self.items.iter().collect();
        sorted.sort_by(|a, b| {
            b.nutrition_score()
                .partial_cmp(&a.nutrition_score())
                .unwrap_or(Ordering::Equal)
        });
        sorted
    }

    pub fn group_by_category(&self) -> BTreeMap<&'static str, Vec<&'a T>> {
        let mut groups: BTreeMap<&'static str, Vec<&T>> = BTreeMap::new();
        for item in self.items {
            groups.entry(item.category()).or_default().push(item);
        }
        groups
    }

    /// Mean score; empty input yields 0
    pub fn average_score(&self) -> f64 {
        if self.items.is_empty() {
            return 0.0;
        }
        let total: f64 = self.items.iter().map(|i| i.nutrition_score()).sum();
        total / self.items.len() as f64
    }

    /// The `n` best-scoring items (fewer when the input is shorter)
    pub fn top_n(&self, n: usize) -> Vec<&'a T> {
        let mut sorted = self.sorted_by_score();
        sorted.truncate(n);
        sorted
    }

    /// Shannon entropy over the category distribution, scaled by 10
    pub fn diversity_index(&self) -> f64 {
        if self.items.is_empty() {
            return 0.0;
        }
        let mut counts: BTreeMap<&'static str, usize> = BTreeMap::new();
        for item in self.items {
            *counts.entry(item.category()).or_default() += 1;
        }
        let total = self.items.len() as f64;
        let entropy: f64 = counts
            .values()
            .map(|&count| {
                let p = count as f64 / total;
                -p * p.ln()
            })
            .sum();
        entropy * 10.0
    }
}

/// Calorie shares of the three macronutrients
#[derive(Debug, Clone, Serialize)]
pub struct MacroBalance {
    pub protein_pct: f64,
    pub carb_pct: f64,
    pub fat_pct: f64,
}

impl MacroBalance {
    fn from_nutrition(info: &Nutrition) -> Self {
        let protein_cal = info.protein * 4.0;
        let carb_cal = info.carbs * 4.0;
        let fat_cal = info.fat * 9.0;
        let total = protein_cal + carb_cal + fat_cal;
        if total <= 0.0 {
            return Self {
                protein_pct: 0.0,
                carb_pct: 0.0,
                fat_pct: 0.0,
            };
        }
        Self {
            protein_pct: protein_cal / total * 100.0,
            carb_pct: carb_cal / total * 100.0,
            fat_pct: fat_cal / total * 100.0,
        }
    }
}

/// Categories that pair well with the given one
fn complementary_categories(category: FoodCategory) -> &'static [FoodCategory] {
    match category {
        FoodCategory::HighProtein => {
            &[FoodCategory::CarbohydrateRich, FoodCategory::HighFiber]
        }
        FoodCategory::CarbohydrateRich => {
            &[FoodCategory::HighProtein, FoodCategory::LowCalorie]
        }
        FoodCategory::HighFat => &[FoodCategory::HighFiber, FoodCategory::LowCalorie],
        FoodCategory::HighFiber => &[FoodCategory::HighProtein, FoodCategory::Balanced],
        FoodCategory::LowCalorie => {
            &[FoodCategory::HighProtein, FoodCategory::CarbohydrateRich]
        }
        FoodCategory::Balanced => &[FoodCategory::HighFiber, FoodCategory::LowCalorie],
    }
}

impl<'a> NutritionCalculator<'a, Food> {
    /// Foods suitable for a dietary need string
    pub fn filter_for_diet(&self, need: &str) -> Vec<&'a Food> {
        self.filter(|food| food.is_suitable_for(need))
    }

    /// Macro-calorie percentage split across the whole collection
    pub fn macro_balance(&self) -> MacroBalance {
        MacroBalance::from_nutrition(&self.total_nutrition())
    }

    /// Foods whose category pairs well with the primary food's category
    pub fn complementary_foods(&self, primary: &Food) -> Vec<&'a Food> {
        let wanted = complementary_categories(primary.category_kind());
        self.items
            .iter()
            .filter(|food| food.name != primary.name && wanted.contains(&food.category_kind()))
            .collect()
    }
}

impl<'a> NutritionCalculator<'a, Recipe> {
    /// Recipes finishable within `minutes`
    pub fn filter_by_max_time(&self, minutes: u32) -> Vec<&'a Recipe> {
        self.filter(|recipe| recipe.estimated_cooking_time() <= minutes)
    }

    pub fn filter_by_difficulty(&self, level: Difficulty) -> Vec<&'a Recipe> {
        self.filter(|recipe| recipe.difficulty() == level)
    }

    /// Recipes paired with their meal-prep efficiency, most efficient first
    pub fn rank_by_meal_prep_efficiency(&self) -> Vec<(&'a Recipe, f64)> {
        let mut ranked: Vec<(&Recipe, f64)> = self
            .items
            .iter()
            .map(|recipe| (recipe, recipe.meal_prep_efficiency()))
            .collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        ranked
    }
}

/// Aggregate food-security impact across a collection: the mean of average
/// score, diversity index, and the percentage of contributing items
pub fn food_security_impact<T: NutritionalItem>(items: &[T]) -> f64 {
    if items.is_empty() {
        return 0.0;
    }
    let calculator = NutritionCalculator::new(items);
    let contributing_pct = items
        .iter()
        .filter(|item| item.contributes_to_food_security())
        .count() as f64
        / items.len() as f64
        * 100.0;
    (calculator.average_score() + calculator.diversity_index() + contributing_pct) / 3.0
}
