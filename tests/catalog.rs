use mixbook::{Cocktail, Ingredient, PreparationStep, RecordStore, User};
use tempfile::tempdir;

// --- Seeding ---

#[test]
fn open_on_an_empty_directory_seeds_the_starter_catalog() {
    let dir = tempdir().unwrap();
    let store = mixbook::open(dir.path()).unwrap();

    let cocktails = store.list::<Cocktail>().unwrap();
    assert_eq!(cocktails.len(), 2);
    assert_eq!(cocktails[0].name, "Мартини");
    assert_eq!(cocktails[1].name, "Дайкири");
    assert!(dir.path().join("cocktails.json").is_file());
}

#[test]
fn users_are_never_seeded() {
    let dir = tempdir().unwrap();
    let store = mixbook::open(dir.path()).unwrap();

    assert!(store.list::<User>().unwrap().is_empty());
    assert!(!dir.path().join("users.json").exists());
}

#[test]
fn a_corrupt_cocktails_file_is_replaced_by_the_starter_catalog() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("cocktails.json"), "{ not json").unwrap();

    let store = mixbook::open(dir.path()).unwrap();
    assert_eq!(store.list::<Cocktail>().unwrap().len(), 2);

    // The replacement is written back immediately.
    let bytes = std::fs::read(dir.path().join("cocktails.json")).unwrap();
    let on_disk: Vec<Cocktail> = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(on_disk.len(), 2);
}

#[test]
fn an_empty_catalog_file_is_not_reseeded() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("cocktails.json"), "[]").unwrap();

    let store = mixbook::open(dir.path()).unwrap();
    assert!(store.list::<Cocktail>().unwrap().is_empty());
}

#[test]
fn a_corrupt_users_file_loads_as_an_empty_collection() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("users.json"), "not even close").unwrap();

    let store = mixbook::open(dir.path()).unwrap();
    assert!(store.list::<User>().unwrap().is_empty());

    // No seeding and no rewrite for users; the broken file stays until
    // the next user mutation.
    let bytes = std::fs::read(dir.path().join("users.json")).unwrap();
    assert_eq!(bytes, b"not even close");
}

// --- Durability ---

#[test]
fn mutations_round_trip_through_reopen() {
    let dir = tempdir().unwrap();
    {
        let store = mixbook::open(dir.path()).unwrap();
        assert_eq!(store.next_id::<Cocktail>().unwrap(), 3);

        let mut negroni = Cocktail::new(
            3,
            "Негрони",
            "Горький аперитив",
            "Gin",
            "MEDIUM",
            3,
            "resources/images/negroni.png",
        );
        negroni.ingredients = vec![
            Ingredient::new("Джин", 30.0, "мл"),
            Ingredient::new("Красный вермут", 30.0, "мл"),
        ];
        negroni.preparation_steps = vec![PreparationStep::new(
            1,
            "Смешать в стакане со льдом",
            "Не взбалтывать",
            30,
        )];
        store.add(&negroni).unwrap();

        let mut martini = store.get::<Cocktail>(1).unwrap().unwrap();
        martini.description = "Классика с оливкой".to_string();
        store.update(&martini).unwrap();

        store.delete::<Cocktail>(2).unwrap();
    }

    let reopened = mixbook::open(dir.path()).unwrap();
    let cocktails = reopened.list::<Cocktail>().unwrap();
    assert_eq!(cocktails.len(), 2);
    assert_eq!(cocktails[0].name, "Мартини");
    assert_eq!(cocktails[0].description, "Классика с оливкой");
    assert_eq!(cocktails[1].name, "Негрони");
    assert_eq!(cocktails[1].ingredients.len(), 2);
    assert_eq!(cocktails[1].preparation_steps[0].tips, "Не взбалтывать");
}

#[test]
fn reopen_preserves_every_field_of_a_persisted_record() {
    let dir = tempdir().unwrap();
    let written = {
        let store = mixbook::open(dir.path()).unwrap();
        let mut sour = Cocktail::new(3, "Сауэр", "Кислый", "Whiskey", "HARD", 7, "sour.png");
        sour.ingredients = vec![Ingredient::new("Виски", 45.0, "мл")];
        sour.preparation_steps = vec![PreparationStep::new(1, "Встряхнуть", "Со льдом", 15)];
        sour.average_rating = 4.5;
        store.add(&sour).unwrap();
        sour
    };

    let reopened = mixbook::open(dir.path()).unwrap();
    assert_eq!(reopened.get::<Cocktail>(3).unwrap().unwrap(), written);
}

#[test]
fn the_durable_format_uses_camel_case_field_names() {
    let dir = tempdir().unwrap();
    mixbook::open(dir.path()).unwrap();

    let bytes = std::fs::read(dir.path().join("cocktails.json")).unwrap();
    let on_disk: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(on_disk[0]["alcoholBase"], "Vodka");
    assert_eq!(on_disk[0]["preparationTime"], 5);
    assert_eq!(on_disk[0]["imageUrl"], "resources/images/martini.png");
    assert_eq!(on_disk[0]["averageRating"], 0.0);
    assert_eq!(on_disk[0]["preparationSteps"][0]["stepNumber"], 1);
    assert_eq!(on_disk[0]["ingredients"][0]["unit"], "мл");
}

// --- Id Assignment ---

#[test]
fn deleting_the_highest_id_frees_it_for_reuse() {
    let dir = tempdir().unwrap();
    let store = mixbook::open(dir.path()).unwrap();

    store.delete::<Cocktail>(2).unwrap();

    // max + 1 over the survivors, not a monotonic counter.
    assert_eq!(store.next_id::<Cocktail>().unwrap(), 2);
}
