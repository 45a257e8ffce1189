use super::*;
use crate::kernel::highlight::{Highlight, HighlightKind};

fn controller(pattern: &str, content: &str) -> SearchController {
    let mut controller: SearchController = SearchController::new();
    controller.set_content(content);
    controller.set_pattern(pattern);
    controller
}

#[test]
fn test_two_block_scenario() {
    let mut c = controller("o", "foo\nbop");
    assert_eq!(c.size(), 3);
    assert_eq!(c.match_index().active_match_index(), 0);
    assert_eq!(c.highlight_index(), 1);
    assert_eq!(c.cursor_position(), 2);

    assert_eq!(c.go_to_highlight_index(3), Some(6));
    assert_eq!(c.match_index().active_match_index(), 2);
    assert_eq!(c.cursor_position(), 6);
    assert_eq!(c.highlight_index(), 3);
    assert_eq!(c.line_position(), 1);
}

#[test]
fn test_empty_pattern_clears_size() {
    let mut c = controller("a", "banana");
    assert_eq!(c.size(), 3);

    c.set_pattern("");
    assert_eq!(c.size(), 0);
    assert_eq!(c.highlight_index(), 0);
}

#[test]
fn test_next_wraps_to_first() {
    let mut c = controller("a", "banana");
    c.go_to_highlight_index(3);

    assert_eq!(c.go_to_next(), Some(2));
    assert_eq!(c.match_index().active_match_index(), 0);
    assert_eq!(c.highlight_index(), 1);
    assert_eq!(c.cursor_position(), 2);
}

#[test]
fn test_prev_wraps_to_last() {
    let mut c = controller("a", "banana");

    assert_eq!(c.go_to_prev(), Some(6));
    assert_eq!(c.match_index().active_match_index(), 2);
    assert_eq!(c.highlight_index(), 3);
}

#[test]
fn test_same_index_is_noop() {
    let mut c = controller("a", "banana");
    c.go_to_highlight_index(2);
    let mut rx = c.subscribe();

    assert_eq!(c.go_to_highlight_index(2), None);
    assert_eq!(c.highlight_index(), 2);
    assert!(rx.drain().is_empty());
}

#[test]
fn test_clamp_on_shrink() {
    let mut c = controller("a", "a a a a a");
    c.go_to_highlight_index(5);
    assert_eq!(c.match_index().active_match_index(), 4);

    c.set_content("a a");
    assert_eq!(c.size(), 2);
    assert_eq!(c.match_index().active_match_index(), 1);
    assert_eq!(c.highlight_index(), 2);
    assert_eq!(c.cursor_position(), 3);
}

#[test]
fn test_content_change_keeps_active_match() {
    let mut c = controller("a", "banana");
    c.go_to_highlight_index(2);

    c.set_content("xbanana");
    assert_eq!(c.match_index().active_match_index(), 1);
    assert_eq!(c.highlight_index(), 2);
    assert_eq!(c.cursor_position(), 5);
}

#[test]
fn test_pattern_change_resets_to_first() {
    let mut c = controller("a", "banana");
    c.go_to_highlight_index(3);

    c.set_pattern("an");
    assert_eq!(c.size(), 2);
    assert_eq!(c.match_index().active_match_index(), 0);
    assert_eq!(c.highlight_index(), 1);
    assert_eq!(c.cursor_position(), 3);
}

#[test]
fn test_highlight_index_tracks_active() {
    let mut c = controller("a", "banana\nalpaca");
    for _ in 0..10 {
        c.go_to_next();
        assert_eq!(c.highlight_index(), c.match_index().active_match_index() + 1);
    }
    for _ in 0..10 {
        c.go_to_prev();
        assert_eq!(c.highlight_index(), c.match_index().active_match_index() + 1);
    }
}

#[test]
fn test_pattern_cascade_order() {
    let mut c: SearchController = SearchController::new();
    c.set_content("foo\nbop");
    let mut rx = c.subscribe();

    c.set_pattern("o");
    assert_eq!(
        rx.drain(),
        vec![
            SearchEvent::PatternChanged,
            SearchEvent::SizeChanged(3),
            SearchEvent::HighlightIndexChanged(1),
            SearchEvent::CursorPositionChanged(2),
        ]
    );
}

#[test]
fn test_unchanged_inputs_do_not_notify() {
    let mut c = controller("o", "foo");
    let mut rx = c.subscribe();

    c.set_pattern("o");
    c.set_content("foo");
    assert!(rx.drain().is_empty());
}

#[test]
fn test_invalid_pattern_reports_error() {
    let mut c = controller("a", "banana");
    let mut rx = c.subscribe();

    c.set_pattern("[");
    assert_eq!(c.size(), 0);
    assert!(c.last_error().is_some());

    let events = rx.drain();
    assert_eq!(events[0], SearchEvent::PatternChanged);
    assert!(matches!(events[1], SearchEvent::ErrorChanged(Some(_))));
    assert_eq!(events[2], SearchEvent::SizeChanged(0));

    c.set_pattern("a");
    assert!(c.last_error().is_none());
    assert_eq!(c.size(), 3);
}

#[test]
fn test_case_sensitive_toggle() {
    let mut c = controller("a", "Banana AAA");
    assert_eq!(c.size(), 6);

    c.set_case_sensitive(true);
    assert_eq!(c.size(), 3);
    assert_eq!(c.highlight_index(), 1);
}

#[test]
fn test_literal_toggle() {
    let mut c = controller("a.", "ab a.");
    assert_eq!(c.size(), 2);

    c.set_use_regex(false);
    assert_eq!(c.size(), 1);
    assert_eq!(c.cursor_position(), 5);
}

#[test]
fn test_no_document_means_no_matches() {
    let mut c: SearchController = SearchController::new();
    c.set_pattern("a");
    assert_eq!(c.size(), 0);
    assert_eq!(c.go_to_next(), None);
}

#[test]
fn test_attach_and_detach_document() {
    let mut c: SearchController = SearchController::new();
    c.set_pattern("o");
    let mut rx = c.subscribe();

    c.attach_document(TextDocument::from("foo"));
    assert_eq!(c.size(), 2);
    assert_eq!(rx.drain()[0], SearchEvent::DocumentAttached);

    let doc = c.detach_document();
    assert!(doc.is_some());
    assert_eq!(c.size(), 0);
    assert_eq!(
        rx.drain(),
        vec![SearchEvent::DocumentDetached, SearchEvent::SizeChanged(0)]
    );
}

#[test]
fn test_host_edits_through_document_mut() {
    let mut c = controller("x", "abc");
    assert_eq!(c.size(), 0);

    if let Some(doc) = c.document_mut() {
        doc.set_text("x\nxx");
    }
    c.notify_content_changed();
    assert_eq!(c.size(), 3);
    assert_eq!(c.cursor_position(), 1);
}

#[test]
fn test_paint_marks_active_match() {
    let mut c = controller("a", "banana");
    c.go_to_next();

    let mut sink: Vec<Highlight> = vec![Highlight::from_match(
        &crate::kernel::services::ports::Match::new(9, 9, 0, 1),
        HighlightKind::Match,
    )];
    c.paint(&mut sink);

    assert_eq!(sink.len(), 3);
    assert_eq!(sink[1].kind, HighlightKind::Active);
    assert_eq!((sink[1].start, sink[1].end), (3, 4));
    assert!(!sink[0].is_active());
}

#[test]
fn test_snapshot() {
    let c = controller("o", "foo\nbop");
    let snapshot = c.snapshot();
    assert_eq!(snapshot.pattern, "o");
    assert_eq!(snapshot.size, 3);
    assert_eq!(snapshot.highlight_index, 1);
    assert_eq!(snapshot.cursor_position, 2);
    assert_eq!(snapshot.last_error, None);
}

#[test]
fn test_with_settings() {
    let settings = SearchSettings {
        case_sensitive: true,
        use_regex: false,
        ..SearchSettings::default()
    };
    let mut c: SearchController = SearchController::with_settings(&settings);
    c.set_content("A.a.");
    c.set_pattern("a.");
    assert_eq!(c.size(), 1);
    assert_eq!(c.cursor_position(), 4);
}

#[test]
fn test_set_content_after_attach_compares_against_document() {
    let mut c: SearchController = SearchController::new();
    c.attach_document(TextDocument::from("foo"));
    c.set_pattern("o");
    assert_eq!(c.size(), 2);
    assert_eq!(c.content(), "foo");

    c.set_content("");
    assert_eq!(c.size(), 0);
    assert_eq!(c.content(), "");
}

#[test]
fn test_set_content_after_host_edit_is_not_masked() {
    let mut c = controller("a", "banana");
    if let Some(doc) = c.document_mut() {
        doc.set_text("xyz");
    }
    c.notify_content_changed();
    assert_eq!(c.size(), 0);
    assert_eq!(c.content(), "xyz");

    c.set_content("banana");
    assert_eq!(c.size(), 3);
    assert_eq!(c.content(), "banana");
}

#[test]
fn test_huge_goto_index_wraps_to_first() {
    let mut c = controller("a", "banana");
    c.go_to_highlight_index(2);

    assert_eq!(c.go_to_highlight_index(usize::MAX), Some(2));
    assert_eq!(c.match_index().active_match_index(), 0);
    assert_eq!(c.highlight_index(), 1);
}

#[test]
fn test_zero_offset_match_does_not_move_cursor() {
    let mut c = controller("^", "abc");
    assert_eq!(c.size(), 1);
    assert_eq!(c.highlight_index(), 0);
    assert_eq!(c.cursor_position(), 0);
}

#[test]
fn test_empty_matches_update_once_offset_is_positive() {
    let mut c = controller("x*", "abc");
    assert_eq!(c.size(), 4);
    assert_eq!(c.highlight_index(), 0);

    assert_eq!(c.go_to_next(), Some(1));
    assert_eq!(c.highlight_index(), 2);
    assert_eq!(c.cursor_position(), 1);
}

#[test]
fn test_navigation_after_detach_is_silent() {
    let mut c = controller("a", "banana");
    c.detach_document();
    let mut rx = c.subscribe();

    assert_eq!(c.go_to_next(), None);
    assert_eq!(c.go_to_prev(), None);
    assert_eq!(c.go_to_highlight_index(2), None);
    assert_eq!(c.highlight_index(), 0);
    assert!(rx.drain().is_empty());
}
