// SPDX-License-Identifier: MPL-2.0
//! Integration tests for the assembled control engine.
//!
//! These exercise full interaction sequences - gesture streams, panel
//! navigation, lock/unlock - against a recording playback surface, checking
//! both the published events and the commands issued to the player.

use iced_core::{Point, Rectangle, Size};
use iced_helm::application::port::{PlaybackStatus, PlaybackSurface};
use iced_helm::config::EngineConfig;
use iced_helm::controls::visibility::Overlay;
use iced_helm::domain::LayoutDirection;
use iced_helm::engine::{ControlAction, ControlEngine, PlayerEvent};
use iced_helm::error::Error;
use iced_helm::gesture::{PointerEvent, TapZone};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Records every command the engine issues to the player.
#[derive(Clone, Default)]
struct CommandLog(Rc<RefCell<Vec<String>>>);

impl CommandLog {
    fn contains(&self, command: &str) -> bool {
        self.0.borrow().iter().any(|c| c == command)
    }

    fn count_starting_with(&self, prefix: &str) -> usize {
        self.0.borrow().iter().filter(|c| c.starts_with(prefix)).count()
    }
}

struct FakePlayer {
    log: CommandLog,
    fail_load: bool,
}

impl FakePlayer {
    fn new(log: CommandLog) -> Self {
        Self {
            log,
            fail_load: false,
        }
    }
}

impl PlaybackSurface for FakePlayer {
    fn play(&mut self) {
        self.log.0.borrow_mut().push("play".into());
    }

    fn pause(&mut self) {
        self.log.0.borrow_mut().push("pause".into());
    }

    fn seek_to(&mut self, position: Duration) {
        self.log
            .0
            .borrow_mut()
            .push(format!("seek:{}", position.as_millis()));
    }

    fn set_volume(&mut self, volume: f32) {
        self.log.0.borrow_mut().push(format!("volume:{volume:.2}"));
    }

    fn set_rate(&mut self, rate: f64) {
        self.log.0.borrow_mut().push(format!("rate:{rate}"));
    }

    fn set_looping(&mut self, looping: bool) {
        self.log.0.borrow_mut().push(format!("loop:{looping}"));
    }

    fn set_muted(&mut self, muted: bool) {
        self.log.0.borrow_mut().push(format!("muted:{muted}"));
    }

    fn load(&mut self, source: &str) -> Result<(), Error> {
        if self.fail_load {
            return Err(Error::LoadFailed(source.to_string()));
        }
        self.log.0.borrow_mut().push(format!("load:{source}"));
        Ok(())
    }

    fn unload(&mut self) {
        self.log.0.borrow_mut().push("unload".into());
    }
}

const ANIM: Duration = Duration::from_millis(150);
const TAP_WINDOW: Duration = Duration::from_millis(300);

fn engine_with_log() -> (ControlEngine<FakePlayer>, CommandLog) {
    let log = CommandLog::default();
    let engine = ControlEngine::new(
        FakePlayer::new(log.clone()),
        EngineConfig::default(),
        LayoutDirection::Ltr,
        Rectangle::new(Point::new(0.0, 0.0), Size::new(360.0, 240.0)),
    );
    (engine, log)
}

fn loaded_status(position_secs: u64, duration_secs: u64) -> PlaybackStatus {
    PlaybackStatus {
        is_loaded: true,
        position: Duration::from_secs(position_secs),
        duration: Duration::from_secs(duration_secs),
        playable_duration: Duration::from_secs(duration_secs),
        did_just_finish: false,
        is_looping: false,
    }
}

/// Grants, drags horizontally in five steps to `final_dx`, and releases.
fn scrub(
    engine: &mut ControlEngine<FakePlayer>,
    start: Point,
    final_dx: f32,
    now: Instant,
) -> Vec<PlayerEvent> {
    engine.handle_surface_event(PointerEvent::Grant { position: start }, now);
    for step in 1..=5 {
        let dx = final_dx * step as f32 / 5.0;
        engine.handle_surface_event(PointerEvent::Move { dx, dy: 0.0 }, now);
    }
    engine.handle_surface_event(PointerEvent::Release, now)
}

/// Shows the main controls with a tap, then opens the more panel.
fn open_more_panel(engine: &mut ControlEngine<FakePlayer>, now: Instant) -> Instant {
    engine.handle_surface_event(
        PointerEvent::Grant {
            position: Point::new(180.0, 120.0),
        },
        now,
    );
    engine.handle_surface_event(PointerEvent::Release, now);
    engine.tick(now + TAP_WINDOW);
    assert_eq!(engine.overlay(), Overlay::MainControls);

    let now = now + TAP_WINDOW;
    engine.handle_control(ControlAction::ShowMore, now);
    engine.tick(now + ANIM);
    assert_eq!(engine.overlay(), Overlay::MorePanel);
    now + ANIM
}

#[test]
fn horizontal_scrub_commits_clamped_seek() {
    let (mut engine, log) = engine_with_log();
    let now = Instant::now();
    engine.handle_status(loaded_status(30, 120), now);

    // 50 px at the default 0.2 s/px is +10 s from the 30 s position.
    let events = scrub(&mut engine, Point::new(180.0, 120.0), 50.0, now);

    assert!(events.contains(&PlayerEvent::SeekCommitted(Duration::from_secs(40))));
    assert!(log.contains("seek:40000"));
}

#[test]
fn scrub_preview_is_live_and_cleared_on_release() {
    let (mut engine, _log) = engine_with_log();
    let now = Instant::now();
    engine.handle_status(loaded_status(30, 120), now);

    engine.handle_surface_event(
        PointerEvent::Grant {
            position: Point::new(180.0, 120.0),
        },
        now,
    );
    for step in 1..=5 {
        engine.handle_surface_event(
            PointerEvent::Move {
                dx: step as f32 * 10.0,
                dy: 0.0,
            },
            now,
        );
    }
    let preview = engine.scrub_preview().expect("preview while dragging");
    assert_eq!(preview.target, Duration::from_secs(40));
    assert_eq!(preview.tooltip, "+00:10 (00:40)");

    engine.handle_surface_event(PointerEvent::Release, now);
    assert!(engine.scrub_preview().is_none());
}

#[test]
fn double_tap_left_rewinds_with_feedback_cue() {
    let (mut engine, log) = engine_with_log();
    let now = Instant::now();
    engine.handle_status(loaded_status(30, 120), now);

    // Two tap-downs at x=40 (left quarter of 360 px) inside the window.
    engine.handle_surface_event(
        PointerEvent::Grant {
            position: Point::new(40.0, 120.0),
        },
        now,
    );
    engine.handle_surface_event(PointerEvent::Release, now);
    let events = engine.handle_surface_event(
        PointerEvent::Grant {
            position: Point::new(40.0, 120.0),
        },
        now + Duration::from_millis(200),
    );

    assert!(events.contains(&PlayerEvent::SeekFeedback {
        zone: TapZone::Left,
        target: Duration::from_secs(20),
    }));
    assert!(log.contains("seek:20000"));
}

#[test]
fn double_tap_middle_toggles_playback() {
    let (mut engine, log) = engine_with_log();
    let now = Instant::now();
    engine.handle_status(loaded_status(0, 120), now);

    engine.handle_surface_event(
        PointerEvent::Grant {
            position: Point::new(180.0, 120.0),
        },
        now,
    );
    engine.handle_surface_event(PointerEvent::Release, now);
    let events = engine.handle_surface_event(
        PointerEvent::Grant {
            position: Point::new(180.0, 120.0),
        },
        now + Duration::from_millis(100),
    );

    assert!(events.contains(&PlayerEvent::Play));
    assert!(engine.is_playing());
    assert!(log.contains("play"));
}

#[test]
fn lone_tap_shows_controls_after_window() {
    let (mut engine, _log) = engine_with_log();
    let now = Instant::now();
    engine.handle_status(loaded_status(0, 120), now);

    engine.handle_surface_event(
        PointerEvent::Grant {
            position: Point::new(180.0, 120.0),
        },
        now,
    );
    engine.handle_surface_event(PointerEvent::Release, now);

    // Inside the window nothing shows yet.
    engine.tick(now + Duration::from_millis(299));
    assert_eq!(engine.overlay(), Overlay::Hidden);

    engine.tick(now + TAP_WINDOW);
    assert_eq!(engine.overlay(), Overlay::MainControls);
}

#[test]
fn volume_drag_commits_on_release() {
    let (mut engine, log) = engine_with_log();
    let now = Instant::now();
    engine.handle_status(loaded_status(30, 120), now);

    // Vertical drag on the right half, upward: volume rises.
    engine.handle_surface_event(
        PointerEvent::Grant {
            position: Point::new(300.0, 120.0),
        },
        now,
    );
    for step in 1..=5 {
        engine.handle_surface_event(
            PointerEvent::Move {
                dx: 0.0,
                dy: -15.0 * step as f32,
            },
            now,
        );
    }
    let events = engine.handle_surface_event(PointerEvent::Release, now);

    assert!(matches!(events.as_slice(), [PlayerEvent::VolumeChanged(level)]
        if (level.value() - 100.0).abs() < 0.01));
    // Live volume commands were issued during the drag as well.
    assert!(log.count_starting_with("volume:") >= 2);
}

#[test]
fn gesture_termination_never_commits() {
    let (mut engine, log) = engine_with_log();
    let now = Instant::now();
    engine.handle_status(loaded_status(30, 120), now);

    engine.handle_surface_event(
        PointerEvent::Grant {
            position: Point::new(180.0, 120.0),
        },
        now,
    );
    for step in 1..=5 {
        engine.handle_surface_event(
            PointerEvent::Move {
                dx: step as f32 * 10.0,
                dy: 0.0,
            },
            now,
        );
    }
    let events = engine.handle_surface_event(PointerEvent::Terminate, now);

    assert!(events.is_empty());
    assert_eq!(log.count_starting_with("seek:"), 0);

    // The next gesture starts from a clean slate.
    let events = scrub(&mut engine, Point::new(180.0, 120.0), 50.0, now);
    assert!(events.contains(&PlayerEvent::SeekCommitted(Duration::from_secs(40))));
}

#[test]
fn speed_panel_commit_sets_rate_after_settle() {
    let (mut engine, log) = engine_with_log();
    let now = Instant::now();
    engine.handle_status(loaded_status(0, 120), now);

    let now = open_more_panel(&mut engine, now);
    engine.handle_control(ControlAction::OpenSpeedPanel, now);
    engine.tick(now + ANIM);
    assert_eq!(engine.overlay(), Overlay::SpeedPanel);

    // 7 stops over 300 px; cursor rests at 150 (1x). Jump out of the dead
    // zone, track to 210, release: snaps to stop 4 (1.25x).
    let t0 = now + ANIM;
    engine.handle_speed_slider_event(
        PointerEvent::Grant {
            position: Point::new(150.0, 0.0),
        },
        t0,
    );
    engine.handle_speed_slider_event(PointerEvent::Move { dx: 30.0, dy: 0.0 }, t0);
    engine.tick(t0 + Duration::from_millis(100));
    engine.handle_speed_slider_event(
        PointerEvent::Move { dx: 60.0, dy: 0.0 },
        t0 + Duration::from_millis(100),
    );
    engine.handle_speed_slider_event(PointerEvent::Release, t0 + Duration::from_millis(100));

    // Before the settle completes: no commit, no rate change.
    let events = engine.tick(t0 + Duration::from_millis(200));
    assert!(events.is_empty());

    let events = engine.tick(t0 + Duration::from_millis(300));
    assert!(events
        .iter()
        .any(|e| matches!(e, PlayerEvent::SpeedChanged(s) if (s.value() - 1.25).abs() < 1e-9)));
    assert!(log.contains("rate:1.25"));
    assert_eq!(engine.speed_slider().selected_index(), 4);
}

#[test]
fn lock_gates_seeking_until_slide_to_confirm() {
    let (mut engine, log) = engine_with_log();
    let now = Instant::now();
    engine.handle_status(loaded_status(30, 120), now);
    engine.set_lock_travel(150.0);

    let now = open_more_panel(&mut engine, now);
    engine.handle_control(ControlAction::Lock, now);
    engine.tick(now + ANIM);
    assert_eq!(engine.overlay(), Overlay::Locked);
    assert!(engine.is_locked());

    // Seek bar drags are no-ops while locked.
    let t1 = now + ANIM;
    engine.handle_seek_bar_event(
        PointerEvent::Grant {
            position: Point::new(90.0, 0.0),
        },
        t1,
    );
    engine.handle_seek_bar_event(PointerEvent::Move { dx: 60.0, dy: 0.0 }, t1);
    let events = engine.handle_seek_bar_event(PointerEvent::Release, t1);
    assert!(events.is_empty());
    assert_eq!(log.count_starting_with("seek:"), 0);

    // Surface gestures are gated too.
    let events = scrub(&mut engine, Point::new(180.0, 120.0), 50.0, t1);
    assert!(events.is_empty());

    // Slide short of 60% of 150 px (90 px): still locked.
    engine.handle_lock_slider_event(PointerEvent::Grant {
        position: Point::new(0.0, 0.0),
    }, t1);
    engine.handle_lock_slider_event(PointerEvent::Move { dx: 80.0, dy: 0.0 }, t1);
    engine.handle_lock_slider_event(PointerEvent::Release, t1);
    assert!(engine.is_locked());

    // Slide past the threshold: unlocked, back to a bare surface.
    let t2 = t1 + Duration::from_millis(250);
    engine.handle_lock_slider_event(PointerEvent::Grant {
        position: Point::new(0.0, 0.0),
    }, t2);
    engine.handle_lock_slider_event(PointerEvent::Move { dx: 140.0, dy: 0.0 }, t2);
    engine.handle_lock_slider_event(PointerEvent::Release, t2);
    engine.tick(t2 + ANIM);
    assert_eq!(engine.overlay(), Overlay::Hidden);
    assert!(!engine.is_locked());

    // Seeking works again.
    let t3 = t2 + ANIM;
    engine.handle_seek_bar_event(
        PointerEvent::Grant {
            position: Point::new(90.0, 0.0),
        },
        t3,
    );
    let events = engine.handle_seek_bar_event(PointerEvent::Release, t3);
    assert!(events.contains(&PlayerEvent::SeekCommitted(Duration::from_secs(30))));
    assert!(log.contains("seek:30000"));
}

#[test]
fn overlays_are_mutually_exclusive_through_a_session() {
    let (mut engine, _log) = engine_with_log();
    let mut now = Instant::now();
    engine.handle_status(loaded_status(0, 120), now);

    now = open_more_panel(&mut engine, now);

    engine.handle_control(ControlAction::OpenPlaylistPanel, now);
    now += ANIM;
    engine.tick(now);
    assert_eq!(engine.overlay(), Overlay::PlaylistPanel);

    engine.handle_control(ControlAction::ClosePanel, now);
    now += ANIM;
    engine.tick(now);
    // Closing a panel lands on the bare surface, not on the main controls.
    assert_eq!(engine.overlay(), Overlay::Hidden);
}

#[test]
fn playlist_selection_loads_and_reports() {
    let (mut engine, log) = engine_with_log();
    let now = Instant::now();
    use iced_helm::engine::PlaylistItem;

    assert!(engine.set_playlist(
        vec![
            PlaylistItem::new("intro.mp4"),
            PlaylistItem::new("feature.mp4"),
            PlaylistItem::new("credits.mp4"),
        ],
        0,
        now,
    ));
    assert!(log.contains("load:intro.mp4"));

    let events = engine.handle_control(ControlAction::SelectPlaylistItem(2), now);
    assert!(events.contains(&PlayerEvent::PlaylistItemSelected(2)));
    assert!(log.contains("load:credits.mp4"));

    // Out of range: silently ignored.
    let events = engine.handle_control(ControlAction::SelectPlaylistItem(9), now);
    assert!(events.is_empty());
    assert_eq!(engine.playlist().active_index(), 2);
}

#[test]
fn finished_source_auto_advances_when_not_looping() {
    let (mut engine, log) = engine_with_log();
    let now = Instant::now();
    use iced_helm::engine::PlaylistItem;

    engine.set_playlist(
        vec![PlaylistItem::new("a.mp4"), PlaylistItem::new("b.mp4")],
        0,
        now,
    );
    engine.handle_status(loaded_status(0, 60), now);

    let finished = PlaybackStatus {
        did_just_finish: true,
        ..loaded_status(60, 60)
    };
    let events = engine.handle_status(finished, now);
    assert!(events.is_empty());
    assert_eq!(engine.playlist().active_index(), 1);
    assert!(log.contains("load:b.mp4"));

    // At the end of the playlist, playback stops instead.
    let events = engine.handle_status(finished, now);
    assert!(events.contains(&PlayerEvent::Stop));
    assert!(!engine.is_playing());
}

#[test]
fn load_failure_shows_error_until_reload_succeeds() {
    let (mut engine, log) = engine_with_log();
    let now = Instant::now();
    use iced_helm::engine::PlaylistItem;

    engine.set_playlist(vec![PlaylistItem::new("a.mp4")], 0, now);
    engine.handle_status(loaded_status(0, 60), now);
    engine.handle_error(Error::Decoding("mid-stream failure".into()), now);

    assert!(engine.error_visible());
    assert!(!engine.line_indicator_visible());

    // Gesture input is refused while the error affordance is up.
    let events = scrub(&mut engine, Point::new(180.0, 120.0), 50.0, now);
    assert!(events.is_empty());

    // Explicit reload, then a fresh loaded status clears the error.
    engine.reload(now);
    assert_eq!(log.count_starting_with("load:a.mp4"), 2);
    engine.handle_status(loaded_status(0, 60), now);
    assert!(!engine.error_visible());
    let events = scrub(&mut engine, Point::new(180.0, 120.0), 50.0, now);
    assert!(events.contains(&PlayerEvent::SeekCommitted(Duration::from_secs(10))));
}

#[test]
fn fullscreen_and_back_are_passed_through() {
    let (mut engine, _log) = engine_with_log();
    let now = Instant::now();

    let events = engine.handle_control(ControlAction::ToggleFullscreen, now);
    assert_eq!(events, vec![PlayerEvent::FullscreenToggled(true)]);

    let events = engine.handle_control(ControlAction::Back, now);
    assert_eq!(events, vec![PlayerEvent::BackPressed]);
}
