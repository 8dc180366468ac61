use movie_treemap::viz::text::{line_budget, wrap_label};

#[test]
fn single_word_is_never_split() {
    for width in [0.0, 1.0, 10.0, 57.3, 80.0, 840.0] {
        assert_eq!(
            wrap_label(width, "Inception"),
            vec!["Inception".to_string()],
            "width {width}"
        );
    }
    // Longer than any budget a narrow tile can offer, still one line.
    assert_eq!(wrap_label(12.0, "Supercalifragilistic"), ["Supercalifragilistic"]);
}

#[test]
fn two_words_join_when_they_fit_the_budget() {
    // "Iron Man" is 8 characters; floor(W * 14 / 80) >= 8 needs W >= 45.72
    let fits = 46.0;
    assert!(line_budget(fits) >= 8);
    assert_eq!(wrap_label(fits, "Iron Man"), ["Iron Man"]);

    let too_narrow = 45.0;
    assert!(line_budget(too_narrow) < 8);
    assert_eq!(wrap_label(too_narrow, "Iron Man"), ["Iron", "Man"]);
}

#[test]
fn budget_boundary_is_inclusive() {
    // width 80 -> budget 14; "Frozen Kingdom" is exactly 14 characters
    assert_eq!(wrap_label(80.0, "Frozen Kingdom"), ["Frozen Kingdom"]);
    assert_eq!(wrap_label(80.0, "Frozen Kingdoms"), ["Frozen", "Kingdoms"]);
}

#[test]
fn longer_names_are_consumed_in_pairs() {
    assert_eq!(
        wrap_label(60.0, "Pirates of the Caribbean: Dead Man's Chest"),
        // budget 10: "Pirates of" fits, "the Caribbean:" does not,
        // "Dead Man's" fits, "Chest" trails alone
        ["Pirates of", "the", "Caribbean:", "Dead Man's", "Chest"]
    );
}

#[test]
fn multibyte_names_count_characters_not_bytes() {
    // 8 characters, 10 bytes
    assert_eq!(wrap_label(46.0, "Amélie è"), ["Amélie è"]);
}
