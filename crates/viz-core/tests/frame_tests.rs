mod common;

use common::*;
use std::cell::RefCell;
use std::rc::Rc;
use viz_core::constants::{BLUR_PALETTE, LINE_PALETTE};
use viz_core::*;

struct Rig {
    orchestrator: FrameOrchestrator<RecordingSurface>,
    main: OpLog,
    trail: OpLog,
}

fn rig() -> Rig {
    let (main_surface, main) = RecordingSurface::new(400, 224);
    let (trail_surface, trail) = RecordingSurface::new(100, 56);
    let main_layer = Layer::new(main_surface, 30.0, &LINE_PALETTE).unwrap();
    let trail_layer = Layer::new(trail_surface, 7.5, &BLUR_PALETTE).unwrap();
    main.borrow_mut().clear();
    trail.borrow_mut().clear();
    Rig {
        orchestrator: FrameOrchestrator::new(main_layer, trail_layer, FrameConfig::default()),
        main,
        trail,
    }
}

fn analyzer() -> Analyzer<ConstantSource> {
    Analyzer::new(ConstantSource::new(128), AnalyserConfig::default()).unwrap()
}

#[test]
fn idle_frame_only_fades_main() {
    let mut rig = rig();
    let mut a = analyzer();
    for _ in 0..2 {
        let outcome = rig.orchestrator.step(false, Some(&mut a));
        assert_eq!(outcome, FrameOutcome::Idle);
    }
    let fade = Op::FillRect(Rect::full(400, 224), Rgba::rgba(0, 0, 0, 0.04));
    assert_eq!(*rig.main.borrow(), vec![fade.clone(), fade]);
    assert!(rig.trail.borrow().is_empty());
}

#[test]
fn idle_frame_does_not_pull_samples() {
    let mut rig = rig();
    let source = ConstantSource::new(128);
    let pulls = source.time_pulls.clone();
    let mut a = Analyzer::new(source, AnalyserConfig::default()).unwrap();
    rig.orchestrator.step(false, Some(&mut a));
    assert_eq!(*pulls.borrow(), 0);
}

#[test]
fn playing_frame_composites_in_order() {
    let mut rig = rig();
    let mut a = analyzer();
    assert_eq!(rig.orchestrator.step(true, Some(&mut a)), FrameOutcome::Rendered);

    let main = rig.main.borrow();
    assert!(matches!(main[0], Op::FillRect(_, c) if c == Rgba::rgba(0, 0, 0, 0.04)));
    assert_eq!(
        main[1],
        Op::DrawSelf {
            src: zoom_source_rect(400, 224, 1.0),
            dst: Rect::full(400, 224),
        }
    );
    assert_eq!(
        main[2],
        Op::DrawSurface {
            from: (100, 56),
            dst: Rect::full(400, 224),
            blur_px: 2.0,
        }
    );
    assert_eq!(main[3], Op::SetLineWidth(2.0));
    assert_eq!(main[4], Op::SetBrush(1));
    assert_eq!(main[5], Op::BeginPath);
    assert_eq!(count(&main, |op| *op == Op::Stroke), 1);
    assert_eq!(vertices(&main).len(), 512);

    let trail = rig.trail.borrow();
    assert_eq!(trail[0], Op::Clear);
    assert_eq!(trail[1], Op::SetLineWidth(0.25));
    assert_eq!(trail[2], Op::SetBrush(1));
    assert_eq!(count(&trail, |op| *op == Op::Stroke), 1);
    assert_eq!(vertices(&trail).len(), 512);
}

#[test]
fn both_passes_share_one_snapshot() {
    let mut rig = rig();
    let source = ConstantSource::new(128);
    let pulls = source.time_pulls.clone();
    let mut a = Analyzer::new(source, AnalyserConfig::default()).unwrap();
    rig.orchestrator.step(true, Some(&mut a));
    assert_eq!(*pulls.borrow(), 1);
}

#[test]
fn pass_scales_set_wave_radius() {
    let mut rig = rig();
    let mut a = analyzer();
    rig.orchestrator.step(true, Some(&mut a));

    let main_center = Vec2::new(200.0, 112.0);
    let trail_center = Vec2::new(50.0, 28.0);
    for v in vertices(&rig.main.borrow()) {
        assert!(((v - main_center).length() - 128.0 * 0.75).abs() < 1e-3);
    }
    for v in vertices(&rig.trail.borrow()) {
        assert!(((v - trail_center).length() - 128.0 * 0.1875).abs() < 1e-3);
    }
}

#[test]
fn playing_without_analyser_is_skipped_after_fade() {
    let mut rig = rig();
    let outcome = rig.orchestrator.step::<ConstantSource>(true, None);
    assert_eq!(outcome, FrameOutcome::Skipped);
    assert_eq!(rig.main.borrow().len(), 1);
    assert!(rig.trail.borrow().is_empty());
}

fn driver() -> (
    FrameDriver<RecordingSurface, ConstantSource>,
    Rc<RefCell<Playback>>,
    Rc<RefCell<Option<Analyzer<ConstantSource>>>>,
    CancelToken,
    OpLog,
) {
    let rig = rig();
    let playback = Rc::new(RefCell::new(Playback::new()));
    let slot = Rc::new(RefCell::new(None));
    let token = CancelToken::new();
    let driver = FrameDriver::new(rig.orchestrator, playback.clone(), slot.clone(), token.clone());
    (driver, playback, slot, token, rig.trail)
}

#[test]
fn driver_follows_playback_state() {
    let (mut driver, playback, slot, _token, trail) = driver();

    assert_eq!(driver.tick(), LoopControl::Continue);
    assert!(trail.borrow().is_empty());

    *slot.borrow_mut() = Some(analyzer());
    playback.borrow_mut().request_start();
    driver.tick();
    assert!(trail.borrow().is_empty(), "no strokes before start resolves");

    playback.borrow_mut().start_resolved().unwrap();
    driver.tick();
    assert_eq!(count(&trail.borrow(), |op| *op == Op::Stroke), 1);

    playback.borrow_mut().ended().unwrap();
    trail.borrow_mut().clear();
    driver.tick();
    assert!(trail.borrow().is_empty());
    assert_eq!(driver.frames(), 4);
}

#[test]
fn cancelled_driver_stops_without_rendering() {
    let (mut driver, _playback, _slot, token, _trail) = driver();
    driver.tick();
    token.cancel();
    assert_eq!(driver.tick(), LoopControl::Stop);
    assert_eq!(driver.tick(), LoopControl::Stop);
    assert_eq!(driver.frames(), 1);
}
