//! Unit tests for Sequence transformations.
//!
//! Tests cover:
//! - Laziness and exhaustion
//! - Release propagation on every abandonment path
//! - Prefix and suffix selection with negative counts
//! - Concatenation, interleaving and zipping
//! - Chunking, interposing and splicing

use rstest::rstest;
use seqkit::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

/// Yields `0..limit` and records every pull and release.
struct Recorded {
    next: u32,
    limit: Option<u32>,
    pulls: Rc<Cell<u32>>,
    releases: Rc<Cell<u32>>,
}

struct Counters {
    pulls: Rc<Cell<u32>>,
    releases: Rc<Cell<u32>>,
}

impl Counters {
    fn new() -> Self {
        Self {
            pulls: Rc::new(Cell::new(0)),
            releases: Rc::new(Cell::new(0)),
        }
    }

    fn recorded(&self, limit: Option<u32>) -> Sequence<'static, u32> {
        Sequence::from_cursor(Recorded {
            next: 0,
            limit,
            pulls: Rc::clone(&self.pulls),
            releases: Rc::clone(&self.releases),
        })
    }
}

impl Cursor for Recorded {
    type Item = u32;

    fn pull(&mut self) -> Option<u32> {
        self.pulls.set(self.pulls.get() + 1);
        if self.limit.is_some_and(|limit| self.next >= limit) {
            return None;
        }
        let value = self.next;
        self.next += 1;
        Some(value)
    }

    fn release(&mut self) {
        self.releases.set(self.releases.get() + 1);
    }
}

// =============================================================================
// Laziness
// =============================================================================

#[rstest]
fn transformations_do_not_pull_until_consumed() {
    let counters = Counters::new();
    let sequence = counters
        .recorded(None)
        .map(|value, _| value * 2)
        .filter(|value, _| value % 3 == 0)
        .skip(1);

    assert_eq!(counters.pulls.get(), 0);
    drop(sequence);
    assert_eq!(counters.pulls.get(), 0);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(5)]
fn take_over_infinite_source_pulls_exactly_n(#[case] count: u32) {
    let counters = Counters::new();
    let taken = counters
        .recorded(None)
        .take(isize::try_from(count).unwrap())
        .to_vec();

    assert_eq!(taken, (0..count).collect::<Vec<_>>());
    assert_eq!(counters.pulls.get(), count);
}

#[rstest]
fn take_over_count_is_lazy() {
    let first = Sequence::count(CountOptions::<u64>::new())
        .map(|value, _| value * value)
        .take(4)
        .to_vec();
    assert_eq!(first, vec![0, 1, 4, 9]);
}

#[rstest]
fn exhaustion_is_terminal() {
    let mut calls = 0;
    let mut sequence = Sequence::from_cursor(FnCursor::new(move || {
        calls += 1;
        match calls {
            1 => Some("first"),
            2 => None,
            _ => Some("resurrected"),
        }
    }));

    assert_eq!(sequence.pull(), Some("first"));
    assert_eq!(sequence.pull(), None);
    assert_eq!(sequence.pull(), None);
    assert_eq!(sequence.next(), None);
    assert!(sequence.is_finished());
}

// =============================================================================
// Release Propagation
// =============================================================================

#[rstest]
fn take_releases_source_when_limit_reached() {
    let counters = Counters::new();
    let taken = counters.recorded(Some(10)).take(3).to_vec();

    assert_eq!(taken, vec![0, 1, 2]);
    assert_eq!(counters.releases.get(), 1);
}

#[rstest]
fn take_beyond_length_does_not_release_exhausted_source() {
    let counters = Counters::new();
    let taken = counters.recorded(Some(2)).take(5).to_vec();

    assert_eq!(taken, vec![0, 1]);
    assert_eq!(counters.releases.get(), 0);
}

#[rstest]
fn take_while_releases_source_on_first_failure() {
    let counters = Counters::new();
    let taken = counters
        .recorded(Some(10))
        .take_while(|value, _| *value < 3)
        .to_vec();

    assert_eq!(taken, vec![0, 1, 2]);
    assert_eq!(counters.pulls.get(), 4);
    assert_eq!(counters.releases.get(), 1);
}

#[rstest]
fn dropping_partially_consumed_chain_releases_once() {
    let counters = Counters::new();
    let mut sequence = counters
        .recorded(Some(10))
        .map(|value, _| value + 1)
        .interpose(0)
        .chunk(2);

    assert_eq!(sequence.pull(), Some(vec![1, 0]));
    drop(sequence);
    assert_eq!(counters.releases.get(), 1);
}

#[rstest]
fn explicit_release_stops_the_sequence() {
    let counters = Counters::new();
    let mut sequence = counters.recorded(None).filter(|value, _| value % 2 == 0);

    assert_eq!(sequence.pull(), Some(0));
    sequence.release();
    assert_eq!(sequence.pull(), None);
    assert_eq!(counters.releases.get(), 1);
}

#[rstest]
fn first_releases_the_rest_of_the_source() {
    let counters = Counters::new();
    assert_eq!(counters.recorded(Some(3)).skip(1).first(), Some(1));
    assert_eq!(counters.releases.get(), 1);
}

#[rstest]
fn unpulled_negative_skip_releases_source() {
    let counters = Counters::new();
    let sequence = counters.recorded(Some(3)).skip(-1);
    drop(sequence);

    assert_eq!(counters.pulls.get(), 0);
    assert_eq!(counters.releases.get(), 1);
}

#[rstest]
fn zip_releases_longer_operands() {
    let short = Counters::new();
    let long = Counters::new();
    let zipped = Sequence::zip([short.recorded(Some(2)), long.recorded(Some(5))]).to_vec();

    assert_eq!(zipped, vec![vec![0, 0], vec![1, 1]]);
    assert_eq!(short.releases.get(), 0);
    assert_eq!(long.releases.get(), 1);
}

// =============================================================================
// Prefix and Suffix Selection
// =============================================================================

#[rstest]
#[case(2, vec![1, 2])]
#[case(0, vec![])]
#[case(9, vec![1, 2, 3, 4, 5])]
#[case(-2, vec![4, 5])]
#[case(-9, vec![1, 2, 3, 4, 5])]
fn take_selects_prefix_or_suffix(#[case] count: isize, #[case] expected: Vec<i32>) {
    assert_eq!(vec![1, 2, 3, 4, 5].to_sequence().take(count).to_vec(), expected);
}

#[rstest]
#[case(2, vec![3, 4, 5])]
#[case(0, vec![1, 2, 3, 4, 5])]
#[case(9, vec![])]
#[case(-2, vec![1, 2, 3])]
#[case(-9, vec![])]
fn skip_drops_prefix_or_suffix(#[case] count: isize, #[case] expected: Vec<i32>) {
    assert_eq!(vec![1, 2, 3, 4, 5].to_sequence().skip(count).to_vec(), expected);
}

#[rstest]
fn skip_while_tests_only_until_first_failure() {
    let skipped = vec![1, 2, 5, 1, 2]
        .to_sequence()
        .skip_while(|value, _| *value < 3)
        .to_vec();
    assert_eq!(skipped, vec![5, 1, 2]);
}

#[rstest]
fn filter_passes_source_positions() {
    let even_positions = vec!['a', 'b', 'c', 'd', 'e']
        .to_sequence()
        .filter(|_, index| index % 2 == 0)
        .to_vec();
    assert_eq!(even_positions, vec!['a', 'c', 'e']);
}

// =============================================================================
// Concatenation and Merging
// =============================================================================

#[rstest]
fn concat_and_prepend_keep_order() {
    let combined = vec![3, 4]
        .to_sequence()
        .concat(vec![5, 6])
        .prepend_many(vec![1, 2])
        .append(7)
        .prepend(0)
        .to_vec();
    assert_eq!(combined, vec![0, 1, 2, 3, 4, 5, 6, 7]);
}

#[rstest]
fn concat_does_not_pull_tail_early() {
    let tail = Counters::new();
    let first = vec![100].to_sequence().concat(tail.recorded(Some(3))).first();

    assert_eq!(first, Some(100));
    assert_eq!(tail.pulls.get(), 0);
}

#[rstest]
#[case(vec![1, 3, 5], vec![2, 4, 6], vec![1, 2, 3, 4, 5, 6])]
#[case(vec![1], vec![2, 3, 4], vec![1, 2, 3, 4])]
#[case(vec![1, 2, 3], vec![], vec![1, 2, 3])]
#[case(vec![], vec![7, 8], vec![7, 8])]
fn interleave_alternates_then_drains(
    #[case] receiver: Vec<i32>,
    #[case] other: Vec<i32>,
    #[case] expected: Vec<i32>,
) {
    assert_eq!(receiver.to_sequence().interleave(other).to_vec(), expected);
}

#[rstest]
fn zip_stops_at_shortest_operand() {
    let zipped = Sequence::zip([
        vec![1, 2, 3].to_sequence(),
        vec![10, 20].to_sequence(),
        vec![100, 200, 300, 400].to_sequence(),
    ])
    .to_vec();
    assert_eq!(zipped, vec![vec![1, 10, 100], vec![2, 20, 200]]);
}

#[rstest]
fn zip_with_pairs_heterogeneous_elements() {
    let pairs = vec!["a", "b", "c"].to_sequence().zip_with(1..).to_vec();
    assert_eq!(pairs, vec![("a", 1), ("b", 2), ("c", 3)]);
}

// =============================================================================
// Element-wise
// =============================================================================

#[rstest]
fn with_each_observes_without_changing() {
    let mut seen = Vec::new();
    let passed = vec![4, 5]
        .to_sequence()
        .with_each(|value, index| seen.push((*value, index)))
        .to_vec();

    assert_eq!(passed, vec![4, 5]);
    assert_eq!(seen, vec![(4, 0), (5, 1)]);
}

#[rstest]
fn flatten_removes_one_level() {
    let flat = vec![vec![1], vec![], vec![2, 3]].to_sequence().flatten().to_vec();
    assert_eq!(flat, vec![1, 2, 3]);
}

#[rstest]
fn unique_keeps_first_occurrences() {
    let distinct = vec![3, 1, 3, 2, 1].to_sequence().unique().to_vec();
    assert_eq!(distinct, vec![3, 1, 2]);
}

#[rstest]
fn compact_drops_absent_elements() {
    let present = vec![None, Some("x"), None, Some("y")].to_sequence().compact().to_vec();
    assert_eq!(present, vec!["x", "y"]);
}

// =============================================================================
// Grouping
// =============================================================================

#[rstest]
#[case(vec![1, 2, 3, 4, 5], 2, vec![vec![1, 2], vec![3, 4], vec![5]])]
#[case(vec![1, 2, 3, 4], 2, vec![vec![1, 2], vec![3, 4]])]
#[case(vec![1, 2], 5, vec![vec![1, 2]])]
#[case(vec![], 3, vec![])]
fn chunk_groups_consecutive_elements(
    #[case] items: Vec<i32>,
    #[case] size: usize,
    #[case] expected: Vec<Vec<i32>>,
) {
    assert_eq!(items.to_sequence().chunk(size).to_vec(), expected);
}

#[rstest]
#[should_panic(expected = "chunk size must be non-zero")]
fn chunk_of_zero_panics() {
    let _ = vec![1].to_sequence().chunk(0);
}

#[rstest]
fn chunk_with_groups_ascending_runs() {
    let runs = vec![1, 2, 3, 2, 3, 1]
        .to_sequence()
        .chunk_with(|previous, next| previous < next)
        .to_vec();
    assert_eq!(runs, vec![vec![1, 2, 3], vec![2, 3], vec![1]]);
}

// =============================================================================
// Insertion and Replacement
// =============================================================================

#[rstest]
#[case(vec![], vec![])]
#[case(vec!["a"], vec!["a"])]
#[case(vec!["a", "b", "c"], vec!["a", ",", "b", ",", "c"])]
fn interpose_inserts_between_neighbours(#[case] items: Vec<&str>, #[case] expected: Vec<&str>) {
    assert_eq!(items.to_sequence().interpose(",").to_vec(), expected);
}

#[rstest]
fn interpose_with_passes_neighbours_and_pair_index() {
    let labelled = vec![String::from("a"), String::from("b"), String::from("c")]
        .to_sequence()
        .interpose_with(|previous, next, index| format!("{previous}{next}{index}"))
        .to_vec();
    assert_eq!(labelled, vec!["a", "ab0", "b", "bc1", "c"]);
}

#[rstest]
#[case(1, 2, vec![9], vec![1, 9, 4, 5])]
#[case(0, 0, vec![8, 9], vec![8, 9, 1, 2, 3, 4, 5])]
#[case(3, 10, vec![], vec![1, 2, 3])]
#[case(7, 1, vec![9], vec![1, 2, 3, 4, 5])]
#[case(-2, 1, vec![9], vec![1, 2, 3, 9, 5])]
#[case(-9, 2, vec![0], vec![0, 3, 4, 5])]
fn splice_replaces_range(
    #[case] start: isize,
    #[case] delete_count: usize,
    #[case] items: Vec<i32>,
    #[case] expected: Vec<i32>,
) {
    let spliced = vec![1, 2, 3, 4, 5].to_sequence().splice(start, delete_count, items);
    assert_eq!(spliced.to_vec(), expected);
}

#[rstest]
fn with_replaces_single_element() {
    assert_eq!(vec![1, 2, 3].to_sequence().with(1, 0).to_vec(), vec![1, 0, 3]);
    assert_eq!(vec![1, 2, 3].to_sequence().with(-1, 0).to_vec(), vec![1, 2, 0]);
}

#[rstest]
fn default_if_empty_only_fills_empty_sequences() {
    assert_eq!(Sequence::<i32>::empty().default_if_empty(|| 7).to_vec(), vec![7]);
    assert_eq!(vec![1].to_sequence().default_if_empty(|| 7).to_vec(), vec![1]);
}

#[rstest]
#[case(0, vec![])]
#[case(1, vec!['a', 'b'])]
#[case(3, vec!['a', 'b', 'a', 'b', 'a', 'b'])]
fn cycle_times_repeats_whole_passes(#[case] times: usize, #[case] expected: Vec<char>) {
    assert_eq!(vec!['a', 'b'].to_sequence().cycle_times(times).to_vec(), expected);
}

#[rstest]
fn cycle_times_streams_first_pass() {
    let counters = Counters::new();
    let first = counters.recorded(Some(100)).cycle_times(2).first();

    assert_eq!(first, Some(0));
    assert_eq!(counters.pulls.get(), 1);
}

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn count_honours_start_end_and_interval() {
    let values = Sequence::count(CountOptions::new().start(10).end(20).interval(3)).to_vec();
    assert_eq!(values, vec![10, 13, 16, 19]);
}

#[rstest]
fn repeat_forever_is_bounded_by_take() {
    assert_eq!(Sequence::repeat_forever(1).take(3).to_vec(), vec![1, 1, 1]);
}

#[rstest]
fn sequence_interoperates_with_std_iterators() {
    let mut visited = Vec::new();
    for value in vec![1, 2, 3].to_sequence() {
        visited.push(value);
    }
    let total: i32 = vec![1, 2, 3].to_sequence().sum();
    let (left, right): (Vec<_>, Vec<_>) = vec![(1, 'a'), (2, 'b')].to_sequence().unzip();

    assert_eq!(visited, vec![1, 2, 3]);
    assert_eq!(total, 6);
    assert_eq!(left, vec![1, 2]);
    assert_eq!(right, vec!['a', 'b']);
}
