#![cfg(feature = "online")]

use movie_treemap::Client;
use movie_treemap::api::FetchError;
use movie_treemap::stats::category_summary;
use movie_treemap::Hierarchy;

#[test]
fn live_dataset_covers_every_genre() {
    let data = Client::default().fetch().expect("fetch movie dataset");
    assert!(data.leaf_count() > 50);
    let summary = category_summary(&Hierarchy::from_dataset(&data));
    assert_eq!(summary.len(), 7);
}

#[test]
fn live_not_found_is_a_status_error() {
    let client = Client::with_url(
        "https://cdn.freecodecamp.org/testable-projects-fcc/data/tree_map/no-such-file.json",
    );
    match client.fetch() {
        Err(FetchError::Status(code)) => assert!((400..500).contains(&code)),
        other => panic!("unexpected: {other:?}"),
    }
}
