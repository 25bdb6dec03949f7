//! nutrikit library
//!
//! In-memory object model for recording foods and recipes and computing
//! derived nutrition metrics: scores, categories, dietary suitability,
//! BMI and calorie targets.

pub mod build_info;
pub mod error;
pub mod library;
pub mod models;
pub mod nutrition;
pub mod sample_data;

pub use error::{NutritionError, NutritionResult};
pub use library::{FoodLibrary, SharedFood};
