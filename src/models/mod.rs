//! Data models
//!
//! The nutrient value struct plus the concrete entity types.

mod food;
mod nutrition;
mod recipe;
mod user;

pub use food::{
    Food, FoodCategory, DV_FIBER_G, DV_IRON_MG, DV_POTASSIUM_MG, DV_PROTEIN_G, DV_VITAMIN_C_MG,
};
pub use nutrition::{Nutrient, Nutrition};
pub use recipe::{CostCategory, Difficulty, Ingredient, Recipe, RecipeCategory};
pub use user::{ActivityLevel, BmiCategory, Gender, User};
