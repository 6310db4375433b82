#![cfg(feature = "search")]
//! Integration tests for lower-bound search.
//!
//! Boundary behaviour is checked at both ends of the range, on single-element
//! sequences and on every supported sequence type.

use idset::search::{OrderedSequence, lower_bound, lower_bound_by, lower_bound_by_key};
use rstest::rstest;
use std::collections::VecDeque;

#[rstest]
#[case(5, Some(0))]
#[case(10, Some(0))]
#[case(25, Some(2))]
#[case(40, Some(3))]
#[case(45, None)]
fn test_reference_sequence(#[case] value: u32, #[case] expected: Option<usize>) {
    let sequence: Vec<u32> = vec![10, 20, 30, 40];
    assert_eq!(lower_bound(&sequence, &value), expected);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(u32::MAX)]
fn test_empty_sequence_is_not_found(#[case] value: u32) {
    let sequence: [u32; 0] = [];
    assert_eq!(lower_bound(&sequence, &value), None);
    assert_eq!(lower_bound(&sequence[..], &value), None);
}

#[rstest]
#[case(u32::MIN, Some(0))]
#[case(41, Some(0))]
#[case(42, Some(0))]
#[case(43, None)]
#[case(u32::MAX, None)]
fn test_single_element_sequence(#[case] value: u32, #[case] expected: Option<usize>) {
    assert_eq!(lower_bound(&[42_u32], &value), expected);
}

#[rstest]
fn test_every_exact_match_in_long_sequence() {
    let sequence: Vec<u64> = (0..1_000).map(|value| value * 7).collect();
    for (index, value) in sequence.iter().enumerate() {
        assert_eq!(lower_bound(&sequence, value), Some(index));
    }
}

#[rstest]
fn test_every_gap_in_long_sequence() {
    let sequence: Vec<u64> = (0..1_000).map(|value| value * 7).collect();
    for index in 1..sequence.len() {
        let between = sequence[index] - 3;
        assert_eq!(lower_bound(&sequence, &between), Some(index));
    }
}

#[rstest]
fn test_runs_of_equal_elements() {
    let sequence = vec![1, 1, 1, 4, 4, 4, 4, 9, 9];
    assert_eq!(lower_bound(&sequence, &1), Some(0));
    assert_eq!(lower_bound(&sequence, &2), Some(3));
    assert_eq!(lower_bound(&sequence, &4), Some(3));
    assert_eq!(lower_bound(&sequence, &5), Some(7));
    assert_eq!(lower_bound(&sequence, &9), Some(7));
    assert_eq!(lower_bound(&sequence, &10), None);
}

#[rstest]
fn test_all_equal_elements() {
    let sequence = [6; 17];
    assert_eq!(lower_bound(&sequence, &5), Some(0));
    assert_eq!(lower_bound(&sequence, &6), Some(0));
    assert_eq!(lower_bound(&sequence, &7), None);
}

#[rstest]
fn test_string_elements() {
    let sequence: Vec<String> = ["ant", "bee", "cat", "dog"]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(lower_bound(&sequence, &"bz".to_string()), Some(2));
    assert_eq!(lower_bound(&sequence, &"a".to_string()), Some(0));
    assert_eq!(lower_bound(&sequence, &"eel".to_string()), None);
}

#[rstest]
fn test_deque_after_rotation() {
    let mut sequence: VecDeque<i32> = VecDeque::new();
    sequence.push_back(30);
    sequence.push_back(40);
    sequence.push_front(20);
    sequence.push_front(10);
    assert_eq!(lower_bound(&sequence, &21), Some(2));
    assert_eq!(OrderedSequence::len(&sequence), 4);
}

#[rstest]
fn test_by_key_on_records() {
    struct Version {
        major: u32,
        name: &'static str,
    }
    let releases = vec![
        Version { major: 1, name: "one" },
        Version { major: 3, name: "three" },
        Version { major: 7, name: "seven" },
    ];
    let index = lower_bound_by_key(&releases, &2, |release| release.major);
    assert_eq!(index.map(|index| releases[index].name), Some("three"));
}

#[rstest]
fn test_by_with_float_ordering() {
    let sequence = [0.5_f64, 1.5, 2.5];
    let index = lower_bound_by(&sequence, |element| element.total_cmp(&1.0));
    assert_eq!(index, Some(1));
}

#[rstest]
fn test_large_indices_do_not_overflow_midpoint() {
    let sequence: Vec<u8> = vec![0; 1 << 20];
    assert_eq!(lower_bound(&sequence, &0), Some(0));
    assert_eq!(lower_bound(&sequence, &1), None);
}
