use camscan_core::{parse_extra_list, CandidatePlan, CandidateStrategy};
use pretty_assertions::assert_eq;

#[test]
fn numeric_range_is_inclusive_and_ascending() {
    let strategy = CandidateStrategy::NumericRange {
        start: 1000,
        end: 1100,
    };
    let candidates: Vec<_> = strategy.candidates().collect();

    assert_eq!(candidates.len(), 101);
    assert_eq!(strategy.len(), 101);
    assert_eq!(candidates.first().map(String::as_str), Some("1000"));
    assert_eq!(candidates.last().map(String::as_str), Some("1100"));
}

#[test]
fn numeric_range_counts_and_formats_every_value() {
    for (start, end) in [(0, 0), (0, 15), (5, 7), (98, 102), (999, 1001)] {
        let strategy = CandidateStrategy::NumericRange { start, end };
        let candidates: Vec<String> = strategy.candidates().collect();

        assert_eq!(candidates.len() as u64, end - start + 1);
        let values: Vec<u64> = candidates.iter().map(|c| c.parse().unwrap()).collect();
        assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
        for (candidate, value) in candidates.iter().zip(values) {
            assert_eq!(candidate, &value.to_string());
            assert!(candidate == "0" || !candidate.starts_with('0'));
        }
    }
}

#[test]
fn inverted_bounds_yield_nothing() {
    let numeric = CandidateStrategy::NumericRange { start: 10, end: 9 };
    assert_eq!(numeric.candidates().count(), 0);
    assert!(numeric.is_empty());

    let prefixed = CandidateStrategy::PrefixedSuffix {
        prefix: "CAM-".to_string(),
        suffix_start: 3,
        suffix_end: 1,
    };
    assert_eq!(prefixed.candidates().count(), 0);
    assert_eq!(prefixed.len(), 0);
}

#[test]
fn suffixes_pad_to_two_digits_and_grow_past_them() {
    let strategy = CandidateStrategy::PrefixedSuffix {
        prefix: "1070 - MALIBU HOME - ".to_string(),
        suffix_start: 0,
        suffix_end: 1000,
    };
    let candidates: Vec<_> = strategy.candidates().collect();

    assert_eq!(candidates.len(), 1001);
    assert_eq!(candidates[0], "1070 - MALIBU HOME - 00");
    assert_eq!(candidates[5], "1070 - MALIBU HOME - 05");
    assert_eq!(candidates[55], "1070 - MALIBU HOME - 55");
    assert_eq!(candidates[100], "1070 - MALIBU HOME - 100");
    assert_eq!(candidates[1000], "1070 - MALIBU HOME - 1000");
}

#[test]
fn every_suffix_matches_its_value() {
    let strategy = CandidateStrategy::PrefixedSuffix {
        prefix: "CAM-".to_string(),
        suffix_start: 7,
        suffix_end: 120,
    };
    let candidates: Vec<_> = strategy.candidates().collect();
    assert_eq!(candidates.len(), 114);

    for (offset, candidate) in candidates.iter().enumerate() {
        let suffix = candidate.strip_prefix("CAM-").unwrap();
        assert!(suffix.len() >= 2);
        assert_eq!(suffix.parse::<u64>().unwrap(), 7 + offset as u64);
    }
}

#[test]
fn strategies_are_restartable() {
    let strategy = CandidateStrategy::NumericRange { start: 1, end: 3 };
    let first: Vec<_> = strategy.candidates().collect();
    let second: Vec<_> = strategy.candidates().collect();
    assert_eq!(first, second);
}

#[test]
fn extra_list_drops_blank_entries_and_keeps_order() {
    assert_eq!(
        parse_extra_list("Lobby, ,Garage"),
        vec!["Lobby".to_string(), "Garage".to_string()]
    );
    assert_eq!(
        parse_extra_list("  Dock 3 ,,Roof,  "),
        vec!["Dock 3".to_string(), "Roof".to_string()]
    );
    assert!(parse_extra_list("").is_empty());
    assert!(parse_extra_list(" , ,").is_empty());
}

#[test]
fn plan_runs_primary_then_extras_without_dedup() {
    let plan = CandidatePlan::new(
        CandidateStrategy::NumericRange { start: 5, end: 7 },
        vec!["6".to_string(), "Lobby".to_string()],
    );

    let candidates: Vec<_> = plan.iter().collect();
    assert_eq!(candidates, vec!["5", "6", "7", "6", "Lobby"]);
    assert_eq!(plan.len(), 5);
}

#[test]
fn full_u64_range_length_saturates() {
    let plan = CandidatePlan::new(
        CandidateStrategy::NumericRange {
            start: 0,
            end: u64::MAX,
        },
        vec!["Lobby".to_string()],
    );

    assert_eq!(plan.strategy.len(), u64::MAX);
    assert_eq!(plan.len(), u64::MAX);
    assert!(!plan.is_empty());
    let first: Vec<_> = plan.iter().take(3).collect();
    assert_eq!(first, vec!["0", "1", "2"]);
}
