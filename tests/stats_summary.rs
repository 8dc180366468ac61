use movie_treemap::api::load_dataset;
use movie_treemap::stats::category_summary;
use movie_treemap::{DatasetNode, Hierarchy};

#[test]
fn summary_follows_legend_order_and_handles_even_odd_medians() {
    let data = load_dataset("tests/data/movies_small.json").unwrap();
    let got = category_summary(&Hierarchy::from_dataset(&data));
    let cats: Vec<&str> = got.iter().map(|s| s.category.as_str()).collect();
    // Action, Drama, ..., Animation per the legend; absent genres are skipped
    assert_eq!(cats, ["Action", "Drama", "Animation"]);

    let action = &got[0];
    assert_eq!(action.count, 3);
    assert_eq!(action.min, Some(533_316_061.0));
    assert_eq!(action.max, Some(760_505_847.0));
    assert_eq!(action.median, Some(623_279_547.0));

    let drama = &got[1];
    assert_eq!(drama.count, 2);
    assert_eq!(drama.median, Some((658_672_302.0 + 329_691_196.0) / 2.0));

    let share_sum: f64 = got.iter().map(|s| s.share).sum();
    assert!((share_sum - 1.0).abs() < 1e-12);
}

#[test]
fn unknown_categories_come_last() {
    let data = DatasetNode::group(
        "root",
        vec![
            DatasetNode::leaf("Rio Bravo", "Western", 50.0),
            DatasetNode::leaf("Up", "Animation", 10.0),
            DatasetNode::leaf("Heat", "Action", 5.0),
        ],
    );
    let got = category_summary(&Hierarchy::from_dataset(&data));
    let cats: Vec<&str> = got.iter().map(|s| s.category.as_str()).collect();
    assert_eq!(cats, ["Action", "Animation", "Western"]);
    assert!((got[2].mean.unwrap() - 50.0).abs() < 1e-9);
}
