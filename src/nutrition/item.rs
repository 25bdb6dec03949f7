//! The shared nutritional capability contract
//!
//! Anything that can report nutrient values, a quality score, and a category
//! implements [`NutritionalItem`]. The derived operations (suitability,
//! density, food-security flag, summary) are defined once here as provided
//! methods and must not be overridden; per-type dietary rules hook in through
//! [`NutritionalItem::dietary_rule`] instead.

use crate::models::Nutrition;

/// Dietary needs recognized by the base contract. Implementers may recognize
/// more through `dietary_rule`; anything unrecognized is considered suitable.
pub const BASE_DIETARY_NEEDS: [&str; 4] =
    ["high-protein", "low-calorie", "high-fiber", "high-iron"];

/// Contract for nutrient-bearing items (foods, recipes)
pub trait NutritionalItem {
    /// Display name
    fn name(&self) -> &str;

    /// The amount a caller passes to get the item's reference values:
    /// 100 (grams) for foods, 1 (serving multiplier) for recipes.
    fn reference_amount(&self) -> f64;

    /// Nutrient values scaled to `amount`
    fn nutritional_info(&self, amount: f64) -> Nutrition;

    /// Quality heuristic, algorithm owned by the implementer
    fn nutrition_score(&self) -> f64;

    /// Classification label, algorithm owned by the implementer
    fn category(&self) -> &'static str;

    /// Type-specific dietary rules. Return `None` for unrecognized needs so
    /// the base rules in `is_suitable_for` apply.
    fn dietary_rule(&self, _need: &str) -> Option<bool> {
        None
    }

    /// Check whether the item suits a dietary need string.
    ///
    /// Type-specific rules are consulted first; the base rules cover
    /// [`BASE_DIETARY_NEEDS`]. Unrecognized needs default to suitable.
    fn is_suitable_for(&self, need: &str) -> bool {
        if let Some(verdict) = self.dietary_rule(need) {
            return verdict;
        }
        if !BASE_DIETARY_NEEDS.contains(&need) {
            return true;
        }
        let info = self.nutritional_info(self.reference_amount());
        match need {
            "high-protein" => info.protein >= 15.0,
            "low-calorie" => info.calories <= 150.0,
            "high-fiber" => info.fiber >= 5.0,
            "high-iron" => info.iron >= 3.0,
            _ => true,
        }
    }

    /// Ratio of important nutrients to calories, a food-security proxy.
    /// Zero calories are treated as 1 to guard the division.
    fn nutritional_density(&self) -> f64 {
        let info = self.nutritional_info(self.reference_amount());
        let calories = if info.calories > 0.0 { info.calories } else { 1.0 };
        (info.protein + info.fiber + info.iron + info.vitamin_c / 10.0) / calories
    }

    /// Whether the item is nutrient-dense and high-scoring
    fn contributes_to_food_security(&self) -> bool {
        self.nutritional_density() > 0.05 && self.nutrition_score() > 5.0
    }

    /// Fixed-format display summary
    fn summary(&self) -> String {
        let info = self.nutritional_info(self.reference_amount());
        format!(
            "{} [{}] score {:.1}: {:.0} kcal, {:.1} g protein, density {:.3}",
            self.name(),
            self.category(),
            self.nutrition_score(),
            info.calories,
            info.protein,
            self.nutritional_density(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal implementer exercising only the base contract
    struct Flat {
        name: &'static str,
        nutrition: Nutrition,
        score: f64,
    }

    impl NutritionalItem for Flat {
        fn name(&self) -> &str {
            self.name
        }

        fn reference_amount(&self) -> f64 {
            1.0
        }

        fn nutritional_info(&self, amount: f64) -> Nutrition {
            self.nutrition.scale(amount)
        }

        fn nutrition_score(&self) -> f64 {
            self.score
        }

        fn category(&self) -> &'static str {
            "Test"
        }
    }

    fn item(nutrition: Nutrition, score: f64) -> Flat {
        Flat {
            name: "probe",
            nutrition,
            score,
        }
    }

    #[test]
    fn test_density_guards_zero_calories() {
        let probe = item(
            Nutrition {
                protein: 2.0,
                fiber: 1.0,
                ..Nutrition::zero()
            },
            0.0,
        );
        // denominator substituted with 1
        assert!((probe.nutritional_density() - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_food_security_needs_both_density_and_score() {
        let dense = Nutrition {
            calories: 100.0,
            protein: 10.0,
            fiber: 5.0,
            ..Nutrition::zero()
        };
        assert!(item(dense.clone(), 6.0).contributes_to_food_security());
        assert!(!item(dense, 4.0).contributes_to_food_security());
    }

    #[test]
    fn test_base_suitability_rules() {
        let probe = item(
            Nutrition {
                calories: 120.0,
                protein: 20.0,
                fiber: 2.0,
                iron: 1.0,
                ..Nutrition::zero()
            },
            0.0,
        );
        assert!(probe.is_suitable_for("high-protein"));
        assert!(probe.is_suitable_for("low-calorie"));
        assert!(!probe.is_suitable_for("high-fiber"));
        assert!(!probe.is_suitable_for("high-iron"));
    }

    #[test]
    fn test_every_base_need_has_a_real_rule() {
        let rich = item(
            Nutrition {
                calories: 10.0,
                protein: 50.0,
                fiber: 20.0,
                iron: 10.0,
                ..Nutrition::zero()
            },
            0.0,
        );
        let poor = item(
            Nutrition {
                calories: 999.0,
                ..Nutrition::zero()
            },
            0.0,
        );
        for need in BASE_DIETARY_NEEDS {
            assert!(rich.is_suitable_for(need));
            // a recognized need must be able to say no
            assert!(!poor.is_suitable_for(need));
        }
    }

    #[test]
    fn test_unrecognized_need_is_suitable() {
        let probe = item(Nutrition::zero(), 0.0);
        assert!(probe.is_suitable_for("gluten-free"));
        assert!(probe.is_suitable_for(""));
    }

    #[test]
    fn test_summary_contains_name_and_category() {
        let probe = item(Nutrition::zero(), 1.5);
        let text = probe.summary();
        assert!(text.contains("probe"));
        assert!(text.contains("[Test]"));
    }
}
