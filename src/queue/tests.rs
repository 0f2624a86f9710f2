use super::*;

fn t(title: &str) -> Track {
    Track::new(title, None, None).unwrap()
}

fn titles(q: &TrackQueue) -> Vec<String> {
    q.iter().map(|e| e.track.title().to_string()).collect()
}

fn current_title(q: &TrackQueue) -> Option<String> {
    q.current().map(|t| t.title().to_string())
}

fn queue_of(names: &[&str]) -> TrackQueue {
    let mut q = TrackQueue::new();
    for name in names {
        q.append(t(name));
    }
    q.assert_well_linked();
    q
}

#[test]
fn track_new_rejects_blank_title_and_normalizes_optionals() {
    assert_eq!(Track::new("", None, None), Err(TrackError::EmptyTitle));
    assert_eq!(Track::new("   ", Some("x"), None), Err(TrackError::EmptyTitle));

    let track = Track::new("  Song ", Some("  "), Some(" 3:45 ")).unwrap();
    assert_eq!(track.title(), "Song");
    assert_eq!(track.artist(), None);
    assert_eq!(track.duration(), Some("3:45"));
}

#[test]
fn track_display_omits_missing_parts() {
    assert_eq!(t("Song").display(), "Song");
    let full = Track::new("Song", Some("Artist"), Some("3:45")).unwrap();
    assert_eq!(full.display(), "Song by Artist [3:45]");
    assert_eq!(full.to_string(), "Song by Artist [3:45]");
    let no_artist = Track::new("Song", None, Some("1:02")).unwrap();
    assert_eq!(no_artist.display(), "Song [1:02]");
}

#[test]
fn documented_scenario_walkthrough() {
    let mut q = TrackQueue::new();
    assert!(q.jump_to(1).is_none());

    q.append(t("A"));
    assert_eq!(current_title(&q).as_deref(), Some("A"));
    assert_eq!(q.len(), 1);

    q.append(t("B"));
    assert_eq!(current_title(&q).as_deref(), Some("A"));

    q.insert_after_cursor(t("X"));
    assert_eq!(titles(&q), vec!["A", "X", "B"]);
    assert_eq!(current_title(&q).as_deref(), Some("X"));
    q.assert_well_linked();

    assert!(q.remove_by_title("B"));
    assert_eq!(titles(&q), vec!["A", "X"]);
    q.assert_well_linked();

    q.jump_to(1);
    assert_eq!(q.retreat().map(Track::title), Some("A"));
    assert_eq!(current_title(&q).as_deref(), Some("A"));

    q.clear();
    assert_eq!(q.len(), 0);
    assert!(q.is_empty());
    assert!(q.advance().is_none());
    q.assert_well_linked();
}

#[test]
fn remove_current_in_middle_steps_forward() {
    let mut q = queue_of(&["A", "B", "C"]);
    q.jump_to(2);
    assert!(q.remove_current());
    assert_eq!(titles(&q), vec!["A", "C"]);
    assert_eq!(current_title(&q).as_deref(), Some("C"));
    q.assert_well_linked();
}

#[test]
fn remove_current_at_tail_falls_back_to_predecessor() {
    let mut q = queue_of(&["A", "B", "C"]);
    q.jump_to(3);
    assert!(q.remove_current());
    assert_eq!(titles(&q), vec!["A", "B"]);
    assert_eq!(current_title(&q).as_deref(), Some("B"));
    q.assert_well_linked();
}

#[test]
fn remove_current_until_empty() {
    let mut q = queue_of(&["A", "B"]);
    assert!(q.remove_current());
    assert_eq!(current_title(&q).as_deref(), Some("B"));
    assert!(q.remove_current());
    assert!(q.is_empty());
    assert!(q.current().is_none());
    assert!(!q.remove_current());
    q.assert_well_linked();
}

#[test]
fn remove_by_title_is_case_insensitive_and_exact() {
    let mut q = queue_of(&["Hello World", "Other"]);
    assert!(!q.remove_by_title("hello"));
    assert!(!q.remove_by_title("hello world "));
    assert!(q.remove_by_title("HELLO world"));
    assert_eq!(titles(&q), vec!["Other"]);
    assert!(!q.remove_by_title("hello world"));
    q.assert_well_linked();
}

#[test]
fn remove_by_title_takes_first_duplicate_and_keeps_cursor_elsewhere() {
    let mut q = queue_of(&["Dup", "Mid", "Dup"]);
    q.jump_to(2);
    assert!(q.remove_by_title("dup"));
    assert_eq!(titles(&q), vec!["Mid", "Dup"]);
    assert_eq!(current_title(&q).as_deref(), Some("Mid"));
    assert_eq!(q.cursor_position(), Some(1));
    q.assert_well_linked();
}

#[test]
fn remove_by_title_on_head_and_tail_relinks_boundaries() {
    let mut q = queue_of(&["A", "B", "C"]);
    assert!(q.remove_by_title("a"));
    assert_eq!(titles(&q), vec!["B", "C"]);
    assert_eq!(current_title(&q).as_deref(), Some("B"));
    q.assert_well_linked();

    assert!(q.remove_by_title("c"));
    assert_eq!(titles(&q), vec!["B"]);
    q.assert_well_linked();
}

#[test]
fn navigation_is_idempotent_at_the_boundaries() {
    let mut q = queue_of(&["A", "B", "C"]);
    assert_eq!(q.retreat().map(Track::title), Some("A"));
    assert_eq!(q.retreat().map(Track::title), Some("A"));

    assert_eq!(q.advance().map(Track::title), Some("B"));
    assert_eq!(q.advance().map(Track::title), Some("C"));
    assert_eq!(q.advance().map(Track::title), Some("C"));
    assert_eq!(q.advance().map(Track::title), Some("C"));
    assert_eq!(q.cursor_position(), Some(3));
}

#[test]
fn navigation_on_empty_queue_returns_none() {
    let mut q = TrackQueue::new();
    assert!(q.advance().is_none());
    assert!(q.retreat().is_none());
    assert!(!q.remove_current());
    assert!(!q.remove_by_title("anything"));
    assert_eq!(q.cursor_position(), None);
    q.assert_well_linked();
}

#[test]
fn jump_to_rejects_out_of_range_positions() {
    let mut q = queue_of(&["A", "B"]);
    assert!(q.jump_to(0).is_none());
    assert!(q.jump_to(3).is_none());
    assert_eq!(current_title(&q).as_deref(), Some("A"));
    assert_eq!(q.jump_to(2).map(Track::title), Some("B"));
}

#[test]
fn edges_hold_after_draining_to_empty() {
    let mut q = queue_of(&["A", "B", "Ærø"]);
    q.jump_to(3);
    assert!(q.remove_current());
    assert_eq!(current_title(&q).as_deref(), Some("B"));
    assert!(q.jump_to(usize::MAX).is_none());

    while q.remove_current() {}
    assert!(q.is_empty());
    q.assert_well_linked();

    q.insert_after_cursor_quietly(t("Ærø"));
    assert_eq!(current_title(&q).as_deref(), Some("Ærø"));
    assert!(q.remove_by_title("ÆRØ"));
    assert!(q.is_empty());
    q.assert_well_linked();
}

#[test]
fn insert_after_cursor_then_jump_round_trips() {
    let names = ["one", "two", "three", "four", "five"];
    let mut q = TrackQueue::new();
    for name in names {
        q.insert_after_cursor(t(name));
        assert_eq!(current_title(&q).as_deref(), Some(name));
        q.assert_well_linked();
    }
    for (i, name) in names.iter().enumerate() {
        assert_eq!(q.jump_to(i + 1).map(Track::title), Some(*name));
    }
}

#[test]
fn insert_after_cursor_on_tail_moves_tail() {
    let mut q = queue_of(&["A", "B"]);
    q.jump_to(2);
    q.insert_after_cursor(t("C"));
    assert_eq!(titles(&q), vec!["A", "B", "C"]);
    assert_eq!(q.iter().next_back().map(|e| e.track.title()), Some("C"));
    q.assert_well_linked();
}

#[test]
fn quiet_insert_keeps_cursor_and_select_append_moves_it() {
    let mut q = TrackQueue::new();
    q.insert_after_cursor_quietly(t("A"));
    assert_eq!(current_title(&q).as_deref(), Some("A"));

    q.insert_after_cursor_quietly(t("C"));
    q.insert_after_cursor_quietly(t("B"));
    assert_eq!(titles(&q), vec!["A", "B", "C"]);
    assert_eq!(current_title(&q).as_deref(), Some("A"));

    q.append_and_select(t("D"));
    assert_eq!(current_title(&q).as_deref(), Some("D"));
    assert_eq!(q.cursor_position(), Some(4));
    q.assert_well_linked();
}

#[test]
fn iter_reports_positions_and_cursor_from_both_ends() {
    let mut q = queue_of(&["A", "B", "C"]);
    q.jump_to(2);

    let forward: Vec<(usize, &str, bool)> = q
        .iter()
        .map(|e| (e.position, e.track.title(), e.is_cursor))
        .collect();
    assert_eq!(
        forward,
        vec![(1, "A", false), (2, "B", true), (3, "C", false)]
    );

    let backward: Vec<(usize, &str)> = q
        .iter()
        .rev()
        .map(|e| (e.position, e.track.title()))
        .collect();
    assert_eq!(backward, vec![(3, "C"), (2, "B"), (1, "A")]);

    let mut it = q.iter();
    assert_eq!(it.len(), 3);
    assert_eq!(it.next().map(|e| e.position), Some(1));
    assert_eq!(it.next_back().map(|e| e.position), Some(3));
    assert_eq!(it.next().map(|e| e.position), Some(2));
    assert!(it.next().is_none());
    assert!(it.next_back().is_none());

    // Restartable: a fresh walk sees everything again.
    assert_eq!((&q).into_iter().count(), 3);
}

#[test]
fn slots_are_reused_after_removal() {
    let mut q = queue_of(&["A", "B", "C"]);
    assert!(q.remove_by_title("b"));
    q.append(t("D"));
    assert_eq!(titles(&q), vec!["A", "C", "D"]);
    q.insert_after_cursor(t("E"));
    assert_eq!(titles(&q), vec!["A", "E", "C", "D"]);
    q.assert_well_linked();
}

#[test]
fn clear_then_reuse_behaves_like_a_fresh_queue() {
    let mut q = queue_of(&["A", "B", "C"]);
    q.clear();
    q.assert_well_linked();
    assert!(q.jump_to(1).is_none());

    q.append(t("Z"));
    assert_eq!(titles(&q), vec!["Z"]);
    assert_eq!(current_title(&q).as_deref(), Some("Z"));
    q.assert_well_linked();
}

#[test]
fn invariants_hold_across_a_mixed_operation_sequence() {
    let mut q = TrackQueue::new();
    // Deterministic pseudo-random op stream.
    let mut seed: u32 = 0x2545_f491;
    for step in 0..400u32 {
        seed ^= seed << 13;
        seed ^= seed >> 17;
        seed ^= seed << 5;
        let name = format!("t{}", seed % 7);
        match seed % 9 {
            0 | 1 => q.append(t(&name)),
            2 => q.insert_after_cursor(t(&name)),
            3 => q.insert_after_cursor_quietly(t(&name)),
            4 => {
                q.remove_by_title(&name.to_uppercase());
            }
            5 => {
                q.remove_current();
            }
            6 => {
                q.advance();
            }
            7 => {
                q.retreat();
            }
            _ => {
                if step % 50 == 0 {
                    q.clear();
                } else {
                    q.jump_to((seed as usize % 5) + 1);
                }
            }
        }
        q.assert_well_linked();
        assert_eq!(q.iter().count(), q.len());
        assert_eq!(q.iter().rev().count(), q.len());
        if !q.is_empty() {
            assert_eq!(q.iter().filter(|e| e.is_cursor).count(), 1);
        }
    }
}
