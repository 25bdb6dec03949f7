//! In-memory food collection
//!
//! Foods live for the process lifetime in a [`FoodLibrary`] and are handed
//! out as shared handles. Recipes hold those handles without owning them, so
//! a food can appear in many recipes and edits are visible everywhere.
//! Removing a food that a recipe still references is blocked.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::error::{NutritionError, NutritionResult};
use crate::models::Food;

/// Shared, editable handle to a food. The data model is single-threaded.
pub type SharedFood = Rc<RefCell<Food>>;

/// Id-keyed registry of foods
#[derive(Debug, Default)]
pub struct FoodLibrary {
    next_id: i64,
    foods: BTreeMap<i64, SharedFood>,
}

impl FoodLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a food and return its id
    pub fn add(&mut self, food: Food) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        tracing::debug!(id, name = %food.name, "registering food");
        self.foods.insert(id, Rc::new(RefCell::new(food)));
        id
    }

    /// Get a shared handle by id
    pub fn get(&self, id: i64) -> Option<SharedFood> {
        self.foods.get(&id).cloned()
    }

    /// Case-insensitive lookup by name
    pub fn find_by_name(&self, name: &str) -> Option<SharedFood> {
        let needle = name.to_lowercase();
        self.foods
            .values()
            .find(|food| food.borrow().name.to_lowercase() == needle)
            .cloned()
    }

    /// Remove a food. Blocked while any recipe (or other caller) still holds
    /// a handle to it.
    pub fn remove(&mut self, id: i64) -> NutritionResult<Food> {
        let handle = self
            .foods
            .remove(&id)
            .ok_or(NutritionError::UnknownFood(id))?;

        match Rc::try_unwrap(handle) {
            Ok(cell) => Ok(cell.into_inner()),
            Err(handle) => {
                let err = NutritionError::FoodInUse {
                    name: handle.borrow().name.clone(),
                    references: Rc::strong_count(&handle) - 1,
                };
                self.foods.insert(id, handle);
                Err(err)
            }
        }
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    /// Iterate over (id, handle) pairs in id order
    pub fn iter(&self) -> impl Iterator<Item = (i64, &SharedFood)> {
        self.foods.iter().map(|(id, food)| (*id, food))
    }

    /// Detached copies of every food, for batch calculations
    pub fn snapshot(&self) -> Vec<Food> {
        self.foods.values().map(|f| f.borrow().clone()).collect()
    }
}
