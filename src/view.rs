//! Plain-text rendering of gateway results for the terminal front end.

use std::fmt::Write;

use crate::api::{Character, CharactersResult, SavedSearch};

pub fn characters_result(result: &CharactersResult) -> String {
    let mut out = characters(&result.characters);
    if !result.search_id.is_empty() {
        let _ = writeln!(out, "Search ID: {}", result.search_id);
    }
    out
}

pub fn characters(characters: &[Character]) -> String {
    if characters.is_empty() {
        return "No characters found\n".to_string();
    }

    let mut out = String::new();
    for character in characters {
        let _ = writeln!(out, "{}", character.name);
        let _ = writeln!(out, "  Films:    {}", list_or_none(&character.films));
        let _ = writeln!(out, "  Vehicles: {}", list_or_none(&character.vehicle_models));
    }
    out
}

pub fn saved_searches(searches: &[SavedSearch]) -> String {
    if searches.is_empty() {
        return "No saved searches\n".to_string();
    }

    let width = searches.iter().map(|s| s.id.len()).max().unwrap_or(0);
    searches
        .iter()
        .map(|s| format!("{:<width$}  {}\n", s.id, s.search_key, width = width))
        .collect()
}

pub fn save_result(search_id: &str, saved: Option<bool>) -> String {
    match saved {
        Some(true) => format!("Saved search {}\n", search_id),
        Some(false) => format!("Search {} was not saved\n", search_id),
        None => format!("Server returned no result for {}\n", search_id),
    }
}

fn list_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn luke() -> Character {
        Character {
            name: "Luke Skywalker".into(),
            films: vec!["A New Hope".into(), "The Empire Strikes Back".into()],
            vehicle_models: vec![],
        }
    }

    #[test]
    fn test_characters_result_lists_search_id() {
        let result = CharactersResult {
            characters: vec![luke()],
            search_id: "abc123".into(),
        };
        assert_eq!(
            characters_result(&result),
            "Luke Skywalker\n  Films:    A New Hope, The Empire Strikes Back\n  Vehicles: -\nSearch ID: abc123\n"
        );
    }

    #[test]
    fn test_empty_results() {
        assert_eq!(characters_result(&CharactersResult::default()), "No characters found\n");
        assert_eq!(saved_searches(&[]), "No saved searches\n");
    }

    #[test]
    fn test_saved_searches_align_ids() {
        let searches = vec![
            SavedSearch {
                id: "a1".into(),
                search_key: "luke".into(),
            },
            SavedSearch {
                id: "b222".into(),
                search_key: "leia".into(),
            },
        ];
        assert_eq!(saved_searches(&searches), "a1    luke\nb222  leia\n");
    }

    #[test]
    fn test_save_result_messages() {
        assert_eq!(save_result("x", Some(true)), "Saved search x\n");
        assert_eq!(save_result("x", Some(false)), "Search x was not saved\n");
        assert_eq!(save_result("x", None), "Server returned no result for x\n");
    }
}
