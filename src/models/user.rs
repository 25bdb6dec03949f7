//! User profile model
//!
//! A standalone record computing BMI and daily calorie/protein targets from
//! personal attributes. Unrelated to the food/recipe contract.

use serde::{Deserialize, Serialize};

/// Gender, used only to pick the calorie base
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "male" | "m" => Gender::Male,
            _ => Gender::Female,
        }
    }

    /// Daily calorie base before age and activity adjustment
    fn calorie_base(&self) -> f64 {
        match self {
            Gender::Male => 2000.0,
            Gender::Female => 1800.0,
        }
    }
}

/// Activity level with its calorie multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    #[default]
    Sedentary,
    Light,
    Moderate,
    Active,
}

impl ActivityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
        }
    }

    /// Unrecognized strings fall back to sedentary (the default factor)
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "light" => ActivityLevel::Light,
            "moderate" => ActivityLevel::Moderate,
            "active" => ActivityLevel::Active,
            _ => ActivityLevel::Sedentary,
        }
    }

    pub fn factor(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
        }
    }
}

/// BMI classification bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

/// A user profile; every field stays editable
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub activity: ActivityLevel,
}

impl User {
    pub fn new(
        name: impl Into<String>,
        age: u32,
        gender: Gender,
        weight_kg: f64,
        height_cm: f64,
        activity: ActivityLevel,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            gender,
            weight_kg,
            height_cm,
            activity,
        }
    }

    /// Body mass index: kg divided by height in meters squared.
    /// Zero height yields 0 rather than dividing by zero.
    pub fn bmi(&self) -> f64 {
        let meters = self.height_cm / 100.0;
        if meters <= 0.0 {
            return 0.0;
        }
        self.weight_kg / (meters * meters)
    }

    pub fn bmi_category(&self) -> BmiCategory {
        let bmi = self.bmi();
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    /// Daily calorie estimate: gender base, reduced 10% past age 50,
    /// scaled by the activity factor
    pub fn daily_calorie_needs(&self) -> f64 {
        let age_factor = if self.age > 50 { 0.9 } else { 1.0 };
        self.gender.calorie_base() * age_factor * self.activity.factor()
    }

    /// Daily protein target in grams (0.8 g per kg of body weight)
    pub fn protein_needs(&self) -> f64 {
        self.weight_kg * 0.8
    }
}
