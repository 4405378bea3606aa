//! Integration tests for listing filters.
//!
//! Tests cover:
//! - The end-to-end type filter scenario
//! - Identity, inclusivity and empty-result behaviour over the seed data
//! - Filters driven through session commands

mod common;

use common::*;

#[test]
fn test_type_filter_end_to_end() {
    let projects = emerald_and_serenity();
    let state = FilterState {
        search: String::new(),
        city: String::new(),
        property_type: "plot".to_string(),
        min_price: 0,
        max_price: 10_000_000,
    };

    let visible = filter_projects(&projects, &state);

    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].city, "Lonavala");
    assert_eq!(visible[0].title, "Serenity Lake Plots");
}

#[test]
fn test_excluded_just_outside_price_bounds() {
    let projects = vec![
        make_project("Below", "A", PropertyType::Plot, 999_999),
        make_project("At Min", "A", PropertyType::Plot, 1_000_000),
        make_project("At Max", "A", PropertyType::Plot, 2_000_000),
        make_project("Above", "A", PropertyType::Plot, 2_000_001),
    ];
    let state = FilterState {
        min_price: 1_000_000,
        max_price: 2_000_000,
        ..FilterState::default()
    };

    let visible = filter_projects(&projects, &state);
    let titles: Vec<_> = visible.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["At Min", "At Max"]);
}

#[tokio::test]
async fn test_seed_listing_with_defaults_hides_only_overpriced() -> anyhow::Result<()> {
    // 1. Load the built-in collection
    let projects = SeedSource.load().await?;

    // 2. Default filters cap the price at ₹1 crore, so the ₹1.2 crore resort drops out
    let visible = filter_projects(&projects, &FilterState::default());
    assert_eq!(visible.len(), projects.len() - 1);
    assert!(visible.iter().all(|p| p.slug != "whispering-pines-resort"));

    // 3. Raising the cap shows everything, in the original order
    let wide = FilterState {
        max_price: u64::MAX,
        ..FilterState::default()
    };
    let all = filter_projects(&projects, &wide);
    let slugs: Vec<_> = all.iter().map(|p| p.slug.as_str()).collect();
    let expected: Vec<_> = projects.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, expected);

    Ok(())
}

#[test]
fn test_no_match_leaves_collection_untouched() {
    let projects = emerald_and_serenity();
    let before = projects.clone();
    let state = FilterState {
        search: "atlantis".to_string(),
        ..FilterState::default()
    };

    assert!(filter_projects(&projects, &state).is_empty());
    assert_eq!(projects, before);
}

#[test]
fn test_session_filter_commands() {
    let mut session = make_session(emerald_and_serenity());

    let text = run(&mut session, "set search EMERALD");
    assert!(text.starts_with("Found 1 properties"), "{text}");
    assert!(text.contains("Emerald Hills Estate"));

    let text = run(&mut session, "set type plot");
    assert!(text.starts_with("Found 0 properties"), "{text}");
    assert!(text.contains("`clear`"));

    let text = run(&mut session, "clear");
    assert!(text.starts_with("Found 2 properties"), "{text}");
    assert_eq!(session.filters(), &FilterState::default());

    let text = run(&mut session, "set city Lonavala");
    assert!(text.contains("Serenity Lake Plots"));
    assert!(!text.contains("Emerald Hills Estate"));

    let text = run(&mut session, "cities");
    assert_eq!(text, "All Cities\n - Munnar\n - Lonavala\n");
}
