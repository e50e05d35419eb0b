#![cfg(feature = "serde")]

use sorted_scan::{Hint, Searcher, SortedFloats};

#[test]
fn serde_roundtrip_searcher() {
    let searcher = Searcher::new().crossover(48).hint(Hint::Front);

    let json = serde_json::to_string(&searcher).unwrap();
    let de: Searcher = serde_json::from_str(&json).unwrap();

    assert_eq!(searcher, de);
    assert_eq!(de.effective_crossover(), 96);
}

#[test]
fn serde_roundtrip_sorted_floats() {
    let sorted = SortedFloats::from_sorted(vec![1.0, 2.0, 3.5]).unwrap();

    let json = serde_json::to_string(&sorted).unwrap();
    let de: SortedFloats = serde_json::from_str(&json).unwrap();

    assert_eq!(sorted, de);
    assert_eq!(de.position(2.5), 2);
    assert!(de.contains(3.5));
}
