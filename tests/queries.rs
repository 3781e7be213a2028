use mixbook::{query, AccountService, Cocktail, RatingService, RecordStore};
use tempfile::tempdir;

// --- Against the Starter Catalog ---

#[test]
fn advanced_search_narrows_the_starter_catalog_by_name() {
    let dir = tempdir().unwrap();
    let store = mixbook::open(dir.path()).unwrap();
    let cocktails = store.list::<Cocktail>().unwrap();

    let found = query::advanced_search(&cocktails, "дай", "", "");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Дайкири");
}

#[test]
fn advanced_search_with_no_active_predicates_returns_everything() {
    let dir = tempdir().unwrap();
    let store = mixbook::open(dir.path()).unwrap();
    let cocktails = store.list::<Cocktail>().unwrap();

    assert_eq!(query::advanced_search(&cocktails, "", "", "").len(), 2);
    assert_eq!(query::search_by_name(&cocktails, "").len(), 2);
}

#[test]
fn ingredient_search_finds_the_rum_based_starter() {
    let dir = tempdir().unwrap();
    let store = mixbook::open(dir.path()).unwrap();
    let cocktails = store.list::<Cocktail>().unwrap();

    let found = query::search_by_ingredient(&cocktails, "ром");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Дайкири");
}

#[test]
fn distinct_values_over_the_starter_catalog() {
    let dir = tempdir().unwrap();
    let store = mixbook::open(dir.path()).unwrap();
    let cocktails = store.list::<Cocktail>().unwrap();

    assert_eq!(query::alcohol_bases(&cocktails), vec!["Rum", "Vodka"]);
    assert_eq!(query::difficulties(&cocktails), vec!["EASY"]);
}

// --- With Live Ratings ---

#[test]
fn rating_sort_reflects_freshly_submitted_ratings() {
    let dir = tempdir().unwrap();
    let store = mixbook::open(dir.path()).unwrap();
    let accounts = AccountService::new(store.clone());
    assert!(accounts.register("anna", "anna@example.com", "secret1").unwrap());

    let ratings = RatingService::new(store.clone());
    ratings.rate(1, 2, 5).unwrap();
    ratings.rate(1, 1, 3).unwrap();

    let sorted = query::sort_by_rating(&store.list::<Cocktail>().unwrap());
    assert_eq!(sorted[0].name, "Дайкири");
    assert_eq!(sorted[0].average_rating, 5.0);
    assert_eq!(sorted[1].name, "Мартини");
}

#[test]
fn filters_compose_with_the_store() {
    let dir = tempdir().unwrap();
    let store = mixbook::open(dir.path()).unwrap();
    store
        .add(&Cocktail::new(3, "Сауэр", "", "Whiskey", "HARD", 7, ""))
        .unwrap();

    let cocktails = store.list::<Cocktail>().unwrap();
    assert_eq!(query::filter_by_max_preparation_time(&cocktails, 5).len(), 2);
    assert_eq!(query::filter_by_difficulty(&cocktails, "hard").len(), 1);
    assert_eq!(
        query::sort_by_preparation_time(&cocktails)
            .last()
            .map(|c| c.name.clone()),
        Some("Сауэр".to_string())
    );
}
