use viz_core::*;

#[test]
fn starts_idle_and_not_playing() {
    let p = Playback::new();
    assert_eq!(p.phase(), PlaybackPhase::Idle);
    assert!(!p.is_playing());
}

#[test]
fn playing_only_after_start_resolves() {
    let mut p = Playback::new();
    assert!(p.request_start());
    assert_eq!(p.phase(), PlaybackPhase::Starting);
    assert!(!p.is_playing());

    p.start_resolved().unwrap();
    assert!(p.is_playing());
}

#[test]
fn repeated_requests_are_ignored_while_active() {
    let mut p = Playback::new();
    assert!(p.request_start());
    assert!(!p.request_start());
    p.start_resolved().unwrap();
    assert!(!p.request_start());
    assert!(p.is_playing());
}

#[test]
fn ended_returns_to_idle() {
    let mut p = Playback::new();
    p.request_start();
    p.start_resolved().unwrap();
    p.ended().unwrap();
    assert_eq!(p.phase(), PlaybackPhase::Idle);
    assert!(!p.is_playing());
}

#[test]
fn ended_is_ignored_unless_playing() {
    let mut p = Playback::new();
    assert_eq!(
        p.ended(),
        Err(VizError::InvalidTransition {
            from: PlaybackPhase::Idle,
            event: PlaybackEvent::Ended,
        })
    );
    p.request_start();
    assert!(p.ended().is_err());
    assert_eq!(p.phase(), PlaybackPhase::Starting);
}

#[test]
fn resolve_without_request_is_rejected() {
    let mut p = Playback::new();
    assert!(p.start_resolved().is_err());
    assert!(!p.is_playing());
}

#[test]
fn rejected_start_never_plays_and_keeps_reason() {
    let mut p = Playback::new();
    p.request_start();
    p.start_rejected("NotSupportedError").unwrap();
    assert_eq!(p.phase(), PlaybackPhase::Failed);
    assert_eq!(p.last_error(), Some("NotSupportedError"));
    assert!(!p.is_playing());
    assert!(p.start_resolved().is_err());
}

#[test]
fn new_request_after_failure_starts_over() {
    let mut p = Playback::new();
    p.request_start();
    p.start_rejected("no source").unwrap();
    assert!(p.request_start());
    assert_eq!(p.last_error(), None);
    p.start_resolved().unwrap();
    assert!(p.is_playing());
}
