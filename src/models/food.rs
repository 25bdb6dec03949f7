//! Food model
//!
//! A concrete nutrient-bearing record. All stored values are per 100 grams;
//! every reported value scales linearly from that baseline.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::nutrition::NutritionalItem;
use super::Nutrition;

/// Daily reference values for the nutrients with a known recommendation
pub const DV_PROTEIN_G: f64 = 50.0;
pub const DV_FIBER_G: f64 = 25.0;
pub const DV_VITAMIN_C_MG: f64 = 90.0;
pub const DV_IRON_MG: f64 = 18.0;
pub const DV_POTASSIUM_MG: f64 = 3500.0;

/// Food classification by macro-calorie proportions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoodCategory {
    HighFat,
    HighProtein,
    CarbohydrateRich,
    HighFiber,
    LowCalorie,
    Balanced,
}

impl FoodCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            FoodCategory::HighFat => "High-Fat",
            FoodCategory::HighProtein => "High-Protein",
            FoodCategory::CarbohydrateRich => "Carbohydrate-Rich",
            FoodCategory::HighFiber => "High-Fiber",
            FoodCategory::LowCalorie => "Low-Calorie",
            FoodCategory::Balanced => "Balanced",
        }
    }
}

/// A food with nutritional information per 100 g
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Food {
    pub name: String,
    pub nutrition: Nutrition,
}

impl Food {
    pub fn new(name: impl Into<String>, nutrition: Nutrition) -> Self {
        Self {
            name: name.into(),
            nutrition,
        }
    }

    /// Construct from individual per-100g values
    #[allow(clippy::too_many_arguments)]
    pub fn from_values(
        name: impl Into<String>,
        calories: f64,
        protein: f64,
        carbs: f64,
        fat: f64,
        fiber: f64,
        potassium: f64,
        vitamin_c: f64,
        iron: f64,
    ) -> Self {
        Self::new(
            name,
            Nutrition {
                calories,
                protein,
                carbs,
                fat,
                fiber,
                potassium,
                vitamin_c,
                iron,
            },
        )
    }

    /// Construct from raw text fields as submitted by an entry form.
    ///
    /// Order: calories, protein, carbs, fat, fiber, potassium, vitamin C,
    /// iron. Values that fail to parse become 0.0.
    pub fn from_text(name: impl Into<String>, values: [&str; 8]) -> Self {
        let [calories, protein, carbs, fat, fiber, potassium, vitamin_c, iron] =
            values.map(parse_lenient);
        Self::from_values(
            name, calories, protein, carbs, fat, fiber, potassium, vitamin_c, iron,
        )
    }

    /// Nutrient values for `grams` of this food
    pub fn scaled(&self, grams: f64) -> Nutrition {
        self.nutrition.scale(grams / 100.0)
    }

    /// Quality heuristic: important nutrients relative to calories.
    /// Zero-calorie foods score 0.
    pub fn score(&self) -> f64 {
        let n = &self.nutrition;
        if n.calories <= 0.0 {
            return 0.0;
        }
        (n.protein + n.fiber + n.vitamin_c / 10.0 + n.iron * 10.0) / n.calories * 100.0
    }

    /// Classify by macro-calorie proportions, first match wins.
    /// Zero total calories leaves every fraction at 0.
    pub fn category_kind(&self) -> FoodCategory {
        let n = &self.nutrition;
        let total = n.calories;
        let fraction = |macro_calories: f64| {
            if total > 0.0 {
                macro_calories / total
            } else {
                0.0
            }
        };

        if fraction(n.fat * 9.0) > 0.5 {
            FoodCategory::HighFat
        } else if fraction(n.protein * 4.0) > 0.4 {
            FoodCategory::HighProtein
        } else if fraction(n.carbs * 4.0) > 0.6 {
            FoodCategory::CarbohydrateRich
        } else if n.fiber > 5.0 {
            FoodCategory::HighFiber
        } else if total < 50.0 {
            FoodCategory::LowCalorie
        } else {
            FoodCategory::Balanced
        }
    }

    /// Nutrient-dense foods clear a stricter density bar and also carry the
    /// food-security flag
    pub fn is_nutrient_dense(&self) -> bool {
        self.nutritional_density() > 0.1 && self.contributes_to_food_security()
    }

    /// Percent of the daily reference value supplied by `grams` of this food,
    /// for the five nutrients with a known reference. Capped at 100.
    pub fn daily_value_contribution(&self, grams: f64) -> BTreeMap<&'static str, f64> {
        let info = self.scaled(grams);
        let percent = |value: f64, reference: f64| (value / reference * 100.0).min(100.0);
        BTreeMap::from([
            ("Protein", percent(info.protein, DV_PROTEIN_G)),
            ("Fiber", percent(info.fiber, DV_FIBER_G)),
            ("Vitamin C", percent(info.vitamin_c, DV_VITAMIN_C_MG)),
            ("Iron", percent(info.iron, DV_IRON_MG)),
            ("Potassium", percent(info.potassium, DV_POTASSIUM_MG)),
        ])
    }

    /// Storage guidance keyed on category and name
    pub fn storage_info(&self) -> &'static str {
        let name = self.name.to_lowercase();
        match self.category_kind() {
            FoodCategory::HighProtein if name.contains("meat") => {
                "Refrigerate immediately and use within 2-3 days"
            }
            _ if name.contains("fruit") => {
                "Store at room temperature, refrigerate when ripe"
            }
            FoodCategory::HighFat => "Keep sealed in a cool, dark place",
            FoodCategory::LowCalorie => "Refrigerate in the crisper drawer",
            _ => "Store in a cool, dry place",
        }
    }
}

impl NutritionalItem for Food {
    fn name(&self) -> &str {
        &self.name
    }

    fn reference_amount(&self) -> f64 {
        100.0
    }

    fn nutritional_info(&self, amount: f64) -> Nutrition {
        self.scaled(amount)
    }

    fn nutrition_score(&self) -> f64 {
        self.score()
    }

    fn category(&self) -> &'static str {
        self.category_kind().as_str()
    }

    fn dietary_rule(&self, need: &str) -> Option<bool> {
        let n = &self.nutrition;
        match need {
            "weight-loss" => Some(n.calories < 150.0 && n.fiber > 2.0),
            "muscle-building" => Some(n.protein > 15.0),
            "heart-healthy" => Some(n.fat < 10.0 && n.fiber > 3.0 && n.potassium > 200.0),
            "immune-support" => Some(n.vitamin_c > 20.0 || n.iron > 2.0),
            "diabetic-friendly" => Some(n.carbs < 20.0 && n.fiber > 2.0),
            "low-fat" => Some(n.fat < 3.0),
            "high-energy" => Some(n.calories > 250.0 && n.carbs > 30.0),
            "keto-friendly" => Some(n.carbs < 10.0 && n.fat > 10.0),
            _ => None,
        }
    }
}

/// Parse a numeric form field, substituting 0.0 on failure.
/// Masking malformed input keeps entry forms non-blocking.
fn parse_lenient(raw: &str) -> f64 {
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(value = raw, "unparsable nutrient value, substituting 0.0");
            0.0
        }
    }
}
