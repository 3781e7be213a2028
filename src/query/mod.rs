//! Read-side catalog queries: sorting, filtering, and search.
//!
//! Every function takes a listed slice and returns a newly allocated
//! vector, so nothing here can alias or mutate stored state. Matching
//! is case-insensitive via Unicode lowercasing; the starter catalog is
//! Cyrillic, so ASCII folding is not enough.

use crate::catalog::Cocktail;

/// Sort by the difficulty tag, plain lexicographic ascending. Tags are
/// an open set of strings, so "EASY" < "HARD" < "MEDIUM".
pub fn sort_by_difficulty(cocktails: &[Cocktail]) -> Vec<Cocktail> {
    let mut sorted = cocktails.to_vec();
    sorted.sort_by(|a, b| a.difficulty.cmp(&b.difficulty));
    sorted
}

/// Sort by preparation time, quickest first.
pub fn sort_by_preparation_time(cocktails: &[Cocktail]) -> Vec<Cocktail> {
    let mut sorted = cocktails.to_vec();
    sorted.sort_by_key(|c| c.preparation_time);
    sorted
}

/// Sort by average rating, highest first. The sort is stable, so ties
/// keep their encounter order.
pub fn sort_by_rating(cocktails: &[Cocktail]) -> Vec<Cocktail> {
    let mut sorted = cocktails.to_vec();
    sorted.sort_by(|a, b| b.average_rating.total_cmp(&a.average_rating));
    sorted
}

/// Keep cocktails whose difficulty tag matches, ignoring case.
pub fn filter_by_difficulty(cocktails: &[Cocktail], difficulty: &str) -> Vec<Cocktail> {
    let difficulty = difficulty.to_lowercase();
    cocktails
        .iter()
        .filter(|c| c.difficulty.to_lowercase() == difficulty)
        .cloned()
        .collect()
}

/// Keep cocktails whose alcohol base matches, ignoring case.
pub fn filter_by_alcohol_base(cocktails: &[Cocktail], alcohol_base: &str) -> Vec<Cocktail> {
    let alcohol_base = alcohol_base.to_lowercase();
    cocktails
        .iter()
        .filter(|c| c.alcohol_base.to_lowercase() == alcohol_base)
        .cloned()
        .collect()
}

/// Keep cocktails that take at most `max_time` minutes to prepare.
pub fn filter_by_max_preparation_time(cocktails: &[Cocktail], max_time: u32) -> Vec<Cocktail> {
    cocktails
        .iter()
        .filter(|c| c.preparation_time <= max_time)
        .cloned()
        .collect()
}

/// Case-insensitive substring search over cocktail names. An empty
/// query means "no filter" and returns the whole catalog.
pub fn search_by_name(cocktails: &[Cocktail], query: &str) -> Vec<Cocktail> {
    if query.is_empty() {
        return cocktails.to_vec();
    }
    let query = query.to_lowercase();
    cocktails
        .iter()
        .filter(|c| c.name.to_lowercase().contains(&query))
        .cloned()
        .collect()
}

/// Case-insensitive exact match on the alcohol base. An empty query
/// returns the whole catalog.
pub fn search_by_alcohol_base(cocktails: &[Cocktail], alcohol_base: &str) -> Vec<Cocktail> {
    if alcohol_base.is_empty() {
        return cocktails.to_vec();
    }
    filter_by_alcohol_base(cocktails, alcohol_base)
}

/// Case-insensitive substring search over ingredient names; a cocktail
/// matches when any of its ingredients does. An empty query returns the
/// whole catalog.
pub fn search_by_ingredient(cocktails: &[Cocktail], ingredient_name: &str) -> Vec<Cocktail> {
    if ingredient_name.is_empty() {
        return cocktails.to_vec();
    }
    let query = ingredient_name.to_lowercase();
    cocktails
        .iter()
        .filter(|c| {
            c.ingredients
                .iter()
                .any(|ing| ing.name.to_lowercase().contains(&query))
        })
        .cloned()
        .collect()
}

/// Conjunction of a name substring, an exact alcohol base, and an exact
/// difficulty, all case-insensitive. An empty string disables its
/// predicate, so three empty parameters return the whole catalog.
pub fn advanced_search(
    cocktails: &[Cocktail],
    name: &str,
    alcohol_base: &str,
    difficulty: &str,
) -> Vec<Cocktail> {
    let name = name.to_lowercase();
    let alcohol_base = alcohol_base.to_lowercase();
    let difficulty = difficulty.to_lowercase();
    cocktails
        .iter()
        .filter(|c| {
            let name_match = name.is_empty() || c.name.to_lowercase().contains(&name);
            let alcohol_match =
                alcohol_base.is_empty() || c.alcohol_base.to_lowercase() == alcohol_base;
            let difficulty_match =
                difficulty.is_empty() || c.difficulty.to_lowercase() == difficulty;
            name_match && alcohol_match && difficulty_match
        })
        .cloned()
        .collect()
}

/// Every alcohol base in the catalog, de-duplicated and sorted.
pub fn alcohol_bases(cocktails: &[Cocktail]) -> Vec<String> {
    let mut bases: Vec<String> = cocktails.iter().map(|c| c.alcohol_base.clone()).collect();
    bases.sort();
    bases.dedup();
    bases
}

/// Every difficulty tag in the catalog, de-duplicated in first-seen
/// order (not sorted, unlike [`alcohol_bases`]).
pub fn difficulties(cocktails: &[Cocktail]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for cocktail in cocktails {
        if !seen.contains(&cocktail.difficulty) {
            seen.push(cocktail.difficulty.clone());
        }
    }
    seen
}
