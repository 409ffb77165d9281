use super::*;

fn sections() -> Vec<Section> {
    vec![
        Section { id: "intro".into(), top: 0.0 },
        Section { id: "projects".into(), top: 800.0 },
        Section { id: "contact".into(), top: 2000.0 },
    ]
}

#[test]
fn empty_list_has_no_active_section() {
    assert_eq!(active_index(&[], 500.0, 900.0), None);
}

#[test]
fn top_of_page_activates_first_section() {
    assert_eq!(active_index(&sections(), 0.0, 900.0), Some(0));
}

#[test]
fn section_activates_when_top_crosses_probe_line() {
    let sections = sections();
    // Probe at scroll_y + 300: "projects" (top 800) activates at scroll_y 500.
    assert_eq!(active_index(&sections, 499.0, 900.0), Some(0));
    assert_eq!(active_index(&sections, 500.0, 900.0), Some(1));
}

#[test]
fn deep_scroll_activates_last_section() {
    assert_eq!(active_index(&sections(), 5000.0, 900.0), Some(2));
}

#[test]
fn section_below_fold_is_inactive() {
    let below = vec![Section { id: "later".into(), top: 10_000.0 }];
    assert_eq!(active_index(&below, 0.0, 900.0), None);
}

#[test]
fn viewport_height_moves_the_probe() {
    let sections = sections();
    // Same scroll position, taller viewport: probe reaches further down.
    assert_eq!(active_index(&sections, 400.0, 900.0), Some(0));
    assert_eq!(active_index(&sections, 400.0, 1500.0), Some(1));
}
