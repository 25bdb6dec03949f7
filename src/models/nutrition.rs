//! Shared nutrition data structure
//!
//! Used across foods, recipes, and batch calculations.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The eight tracked nutrient quantities
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Nutrient {
    Calories,
    Protein,
    Carbs,
    Fat,
    Fiber,
    Potassium,
    VitaminC,
    Iron,
}

impl Nutrient {
    /// All nutrients, in display order
    pub const ALL: [Nutrient; 8] = [
        Nutrient::Calories,
        Nutrient::Protein,
        Nutrient::Carbs,
        Nutrient::Fat,
        Nutrient::Fiber,
        Nutrient::Potassium,
        Nutrient::VitaminC,
        Nutrient::Iron,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Nutrient::Calories => "Calories",
            Nutrient::Protein => "Protein",
            Nutrient::Carbs => "Carbohydrates",
            Nutrient::Fat => "Fats",
            Nutrient::Fiber => "Fiber",
            Nutrient::Potassium => "Potassium",
            Nutrient::VitaminC => "Vitamin C",
            Nutrient::Iron => "Iron",
        }
    }
}

/// Nutritional information
///
/// Calories in kcal; protein, carbs, fat, and fiber in grams; potassium,
/// vitamin C, and iron in milligrams.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
    pub potassium: f64,
    pub vitamin_c: f64,
    pub iron: f64,
}

impl Nutrition {
    /// Create a new Nutrition with all zeros
    pub fn zero() -> Self {
        Self::default()
    }

    /// Scale nutrition values by a multiplier
    pub fn scale(&self, multiplier: f64) -> Self {
        Self {
            calories: self.calories * multiplier,
            protein: self.protein * multiplier,
            carbs: self.carbs * multiplier,
            fat: self.fat * multiplier,
            fiber: self.fiber * multiplier,
            potassium: self.potassium * multiplier,
            vitamin_c: self.vitamin_c * multiplier,
            iron: self.iron * multiplier,
        }
    }

    /// Add another nutrition to this one
    pub fn add(&self, other: &Nutrition) -> Self {
        Self {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            carbs: self.carbs + other.carbs,
            fat: self.fat + other.fat,
            fiber: self.fiber + other.fiber,
            potassium: self.potassium + other.potassium,
            vitamin_c: self.vitamin_c + other.vitamin_c,
            iron: self.iron + other.iron,
        }
    }

    /// Look up a nutrient value by key
    pub fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Protein => self.protein,
            Nutrient::Carbs => self.carbs,
            Nutrient::Fat => self.fat,
            Nutrient::Fiber => self.fiber,
            Nutrient::Potassium => self.potassium,
            Nutrient::VitaminC => self.vitamin_c,
            Nutrient::Iron => self.iron,
        }
    }

    /// Name-keyed view for the display boundary
    pub fn to_map(&self) -> BTreeMap<&'static str, f64> {
        Nutrient::ALL
            .iter()
            .map(|n| (n.as_str(), self.get(*n)))
            .collect()
    }
}

impl std::ops::Add for Nutrition {
    type Output = Nutrition;

    fn add(self, other: Nutrition) -> Nutrition {
        Nutrition::add(&self, &other)
    }
}

impl std::ops::Mul<f64> for Nutrition {
    type Output = Nutrition;

    fn mul(self, multiplier: f64) -> Nutrition {
        self.scale(multiplier)
    }
}

impl std::iter::Sum for Nutrition {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Nutrition::zero(), |acc, n| acc + n)
    }
}
