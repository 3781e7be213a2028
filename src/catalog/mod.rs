//! Catalog domain records and database bootstrap.

mod cocktail;
mod user;

pub use cocktail::{Cocktail, Ingredient, PreparationStep};
pub use user::User;

use std::path::PathBuf;

use crate::store::{FileStorage, JsonRecordStore, StoreError};

/// Open the catalog database rooted at `dir`.
///
/// Collections load from their JSON files on first access. When no
/// usable cocktails file exists the starter recipes are written out, so
/// a fresh installation has something to show. Users are never seeded;
/// a missing users file just means nobody has registered yet.
pub fn open(dir: impl Into<PathBuf>) -> Result<JsonRecordStore, StoreError> {
    let store = JsonRecordStore::new(FileStorage::new(dir));
    store.seed_if_fresh(starter_cocktails)?;
    Ok(store)
}

/// The two recipes a fresh catalog starts with.
pub fn starter_cocktails() -> Vec<Cocktail> {
    let mut martini = Cocktail::new(
        1,
        "Мартини",
        "Классический коктейль из водки и вермута",
        "Vodka",
        "EASY",
        5,
        "resources/images/martini.png",
    );
    martini.ingredients = vec![
        Ingredient::new("Водка", 60.0, "мл"),
        Ingredient::new("Сухой вермут", 10.0, "мл"),
        Ingredient::new("Оливка", 1.0, "шт"),
    ];
    martini.preparation_steps = vec![
        PreparationStep::new(
            1,
            "Охладить коктейльный стакан",
            "Заполните стакан льдом и холодной водой",
            30,
        ),
        PreparationStep::new(2, "Добавить ингредиенты", "Налейте водку и вермут в стакан", 20),
        PreparationStep::new(3, "Перемешать", "Перемешивайте со льдом в течение 30 секунд", 30),
        PreparationStep::new(4, "Процедить", "Процедите в охлажденный бокал", 15),
    ];

    let mut daiquiri = Cocktail::new(
        2,
        "Дайкири",
        "Освежающий коктейль с ромом и лимоном",
        "Rum",
        "EASY",
        5,
        "resources/images/daiquiri.png",
    );
    daiquiri.ingredients = vec![
        Ingredient::new("Белый ром", 45.0, "мл"),
        Ingredient::new("Свежевыжатый лимонный сок", 25.0, "мл"),
        Ingredient::new("Сахарный сироп", 15.0, "мл"),
    ];
    daiquiri.preparation_steps = vec![
        PreparationStep::new(
            1,
            "Добавить ингредиенты в шейкер",
            "Используйте качественный свежий сок",
            20,
        ),
        PreparationStep::new(2, "Заполнить льдом", "Добавьте лед и закройте шейкер", 15),
        PreparationStep::new(3, "Встряхнуть", "Встряхивайте в течение 10-15 секунд", 15),
        PreparationStep::new(4, "Процедить", "Процедите в охлажденный бокал", 10),
    ];

    vec![martini, daiquiri]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starter_catalog_shape() {
        let cocktails = starter_cocktails();
        assert_eq!(cocktails.len(), 2);
        assert_eq!(cocktails[0].id, 1);
        assert_eq!(cocktails[1].id, 2);
        for cocktail in &cocktails {
            assert_eq!(cocktail.average_rating, 0.0);
            assert_eq!(cocktail.ingredients.len(), 3);
            assert_eq!(cocktail.preparation_steps.len(), 4);
        }
    }
}
