use kioku::{
    GrowableBuffer, PreconditionError, QueryResult, SortKind, StaticArray, create_const_view,
    create_cursor, create_view, search, sort,
};
use kioku_check::capture::capture_diagnostics;
use pretty_assertions::assert_eq;

// =============================================================================
// The merge scenario
// =============================================================================

#[test]
fn merge_sorts_a_fixed_array() {
    let mut array = StaticArray::<i32, 10>::from_array([-1, 0, -2, 4, 12, -11, 0, -2, 25, -3]);
    sort::merge(&mut array);
    assert_eq!(array.as_slice(), &[-11, -3, -2, -2, -1, 0, 0, 4, 12, 25]);
}

#[test]
fn all_sorts_agree_on_the_scenario() {
    let input = [-1, 0, -2, 4, 12, -11, 0, -2, 25, -3];
    let results: Vec<Vec<i32>> = SortKind::ALL
        .iter()
        .map(|&kind| {
            let mut array = StaticArray::<i32, 10>::from_array(input);
            sort::sort(kind, &mut array);
            array.as_slice().to_vec()
        })
        .collect();
    for result in &results[1..] {
        assert_eq!(result, &results[0]);
    }
}

// =============================================================================
// Containers feeding algorithms
// =============================================================================

#[test]
fn sort_then_search_a_growable_buffer() {
    let source = vec![1502, 46, 0, 71, 5, 123, 2, 15, 522, 26, 29, 31, 37, 41, 45, 47, 48];
    let mut buffer = GrowableBuffer::from_sequence(&source);
    sort::insertion(&mut buffer);

    assert_eq!(
        buffer.as_slice(),
        &[0, 2, 5, 15, 26, 29, 31, 37, 41, 45, 46, 47, 48, 71, 123, 522, 1502]
    );
    assert_eq!(
        search::binary(&buffer, &37),
        Some(QueryResult { idx: 7, val: 37 })
    );
    assert_eq!(search::binary(&buffer, &38), None);
}

#[test]
fn grown_buffer_is_searchable() {
    let mut buffer = GrowableBuffer::from_sequence(&[3, 1, 2]);
    buffer.reallocate(5);
    assert_eq!(buffer.as_slice(), &[3, 1, 2, 0, 0]);

    sort::selection(&mut buffer);
    assert_eq!(buffer.as_slice(), &[0, 0, 1, 2, 3]);
    assert_eq!(search::linear(&buffer, &0).map(|hit| hit.idx), Some(0));
    assert_eq!(search::max(&buffer).map(|hit| hit.idx), Some(4));
}

#[test]
fn sort_a_window_through_a_view() {
    let mut array = StaticArray::<i32, 8>::from_array([8, 7, 6, 5, 4, 3, 2, 1]);
    {
        let mut view = create_view(&mut array);
        let mut window = view.range_mut(2, 6);
        sort::bubble(&mut window);
    }
    assert_eq!(array.as_slice(), &[8, 7, 3, 4, 5, 6, 2, 1]);

    let window = create_const_view(&array).range(2, 6);
    assert_eq!(search::min(&window), Some(QueryResult { idx: 0, val: 3 }));
    assert_eq!(search::max(&window), Some(QueryResult { idx: 3, val: 6 }));
}

#[test]
fn cursor_fills_then_sorts() {
    let mut buffer = GrowableBuffer::<i32>::new(6);
    let mut cursor = create_cursor(&mut buffer);
    for v in [4, -1, 9, 0] {
        cursor.push_back(v);
    }
    sort::merge(&mut cursor);
    assert_eq!(cursor.as_slice(), &[-1, 0, 4, 9]);
    drop(cursor);
    assert_eq!(buffer.as_slice(), &[-1, 0, 4, 9, 0, 0]);
}

// =============================================================================
// Error model
// =============================================================================

#[test]
fn soft_misuse_continues() {
    let mut array = StaticArray::<i32, 3>::from_array([1, 2, 3]);
    let (last, logs) = capture_diagnostics(|| {
        array.push_back(4);
        array[3]
    });
    assert_eq!(last, 3);
    assert_eq!(array.len(), 3);
    assert!(logs.contains("push_back(): Capacity full"), "{logs}");
    assert!(logs.contains("Out of bounds access at idx: 3"), "{logs}");
    assert!(logs.contains("WARN"), "{logs}");
}

#[test]
fn hard_misuse_has_fallible_twins() {
    assert_eq!(
        GrowableBuffer::<u8>::try_new(0).unwrap_err(),
        PreconditionError::ZeroSize
    );

    let data = [1, 2, 3, 4];
    let view = create_const_view(&data);
    let err = view.try_range(0, 4).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid range 0..4 for a view of length 4: expected start < end < len"
    );
}

#[test]
#[should_panic(expected = "precondition violated")]
fn invalid_range_is_fatal() {
    let data = [1, 2, 3, 4];
    let _ = create_const_view(&data).range(3, 2);
}

#[test]
fn fatal_report_is_logged_before_panicking() {
    let (outcome, logs) = capture_diagnostics(|| {
        std::panic::catch_unwind(|| {
            let mut buffer = GrowableBuffer::<u8>::new(2);
            buffer.reallocate(1);
        })
    });
    assert!(outcome.is_err());
    assert!(logs.contains("ERROR"), "{logs}");
    assert!(logs.contains("Assertion failed: new_size > self.len()"), "{logs}");
}
