//! Crate error types
//!
//! The computational core has a small error surface: invalid ingredient
//! amounts, mismatched batch inputs, and blocked food removal.

use thiserror::Error;

/// Error types for the nutrition core
#[derive(Debug, Error)]
pub enum NutritionError {
    #[error("ingredient amount must be positive (got {0})")]
    NonPositiveAmount(f64),

    #[error("expected {items} amounts for {items} items, got {amounts}")]
    AmountLengthMismatch { items: usize, amounts: usize },

    #[error("food '{name}' is still referenced by {references} recipe handle(s)")]
    FoodInUse { name: String, references: usize },

    #[error("no food with id {0}")]
    UnknownFood(i64),
}

/// Result type for nutrition operations
pub type NutritionResult<T> = Result<T, NutritionError>;
