use super::*;

#[test]
fn zero_total_never_renders() {
    let progress = CheckProgress::new_with_visibility(0, false, true);
    assert!(progress.bar.is_hidden());
}

#[test]
fn quiet_mode_hides_the_bar() {
    let progress = CheckProgress::new_with_visibility(100, true, true);
    assert!(progress.bar.is_hidden());
}

#[test]
fn non_tty_hides_the_bar() {
    let progress = CheckProgress::new_with_visibility(100, false, false);
    assert!(progress.bar.is_hidden());
}

#[test]
fn visible_bar_tracks_position() {
    let progress = CheckProgress::new_with_visibility(10, false, true);
    progress.update(3);
    assert_eq!(progress.bar.position(), 3);
    progress.update(10);
    assert_eq!(progress.bar.position(), 10);
    progress.finish();
}
