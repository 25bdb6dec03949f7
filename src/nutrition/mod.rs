//! Nutrition computation module
//!
//! The shared item contract and the batch calculator built on it.

pub mod calculator;
pub mod item;

pub use calculator::{food_security_impact, MacroBalance, NutritionCalculator};
pub use item::{NutritionalItem, BASE_DIETARY_NEEDS};
