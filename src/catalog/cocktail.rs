use serde::{Deserialize, Serialize};

use crate::store::Record;

/// A single ingredient line within a recipe. No identity of its own;
/// owned by exactly one cocktail.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub quantity: f64,
    /// Free-text unit ("мл", "шт", ...).
    pub unit: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Ingredient {
            name: name.into(),
            quantity,
            unit: unit.into(),
        }
    }
}

/// One step of a recipe. Step numbers are caller-assigned and are not
/// checked for contiguity or uniqueness.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreparationStep {
    pub step_number: u32,
    pub description: String,
    pub tips: String,
    /// Duration in seconds.
    pub duration: u32,
}

impl PreparationStep {
    pub fn new(
        step_number: u32,
        description: impl Into<String>,
        tips: impl Into<String>,
        duration: u32,
    ) -> Self {
        PreparationStep {
            step_number,
            description: description.into(),
            tips: tips.into(),
            duration,
        }
    }
}

/// A cocktail recipe in the catalog.
///
/// `average_rating` is derived from the user population and maintained
/// by [`RatingService`](crate::RatingService); callers should not write
/// it directly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cocktail {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub alcohol_base: String,
    /// Open-set difficulty tag ("EASY", "MEDIUM", ...); the store does
    /// not validate membership.
    pub difficulty: String,
    /// Preparation time in minutes.
    pub preparation_time: u32,
    pub image_url: String,
    pub average_rating: f64,
    pub ingredients: Vec<Ingredient>,
    pub preparation_steps: Vec<PreparationStep>,
}

impl Cocktail {
    /// A recipe with no ingredients or steps yet and no ratings.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: u32,
        name: impl Into<String>,
        description: impl Into<String>,
        alcohol_base: impl Into<String>,
        difficulty: impl Into<String>,
        preparation_time: u32,
        image_url: impl Into<String>,
    ) -> Self {
        Cocktail {
            id,
            name: name.into(),
            description: description.into(),
            alcohol_base: alcohol_base.into(),
            difficulty: difficulty.into(),
            preparation_time,
            image_url: image_url.into(),
            average_rating: 0.0,
            ingredients: Vec::new(),
            preparation_steps: Vec::new(),
        }
    }
}

impl Record for Cocktail {
    const COLLECTION: &'static str = "cocktails";

    fn id(&self) -> u32 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_wire_field_names() {
        let mut cocktail = Cocktail::new(1, "Негрони", "", "Gin", "MEDIUM", 3, "negroni.png");
        cocktail.ingredients.push(Ingredient::new("Джин", 30.0, "мл"));
        cocktail
            .preparation_steps
            .push(PreparationStep::new(1, "Смешать", "", 20));

        let value = serde_json::to_value(&cocktail).unwrap();
        assert_eq!(value["alcoholBase"], "Gin");
        assert_eq!(value["preparationTime"], 3);
        assert_eq!(value["imageUrl"], "negroni.png");
        assert_eq!(value["averageRating"], 0.0);
        assert_eq!(value["ingredients"][0]["quantity"], 30.0);
        assert_eq!(value["preparationSteps"][0]["stepNumber"], 1);
    }

    #[test]
    fn round_trips_through_json() {
        let mut cocktail = Cocktail::new(2, "Сауэр", "Кислый", "Whiskey", "HARD", 7, "sour.png");
        cocktail.ingredients.push(Ingredient::new("Виски", 45.0, "мл"));
        cocktail.average_rating = 4.5;

        let json = serde_json::to_string(&cocktail).unwrap();
        let parsed: Cocktail = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, cocktail);
    }
}
