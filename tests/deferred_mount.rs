// SPDX-License-Identifier: MPL-2.0
//! Deferred hero mount driven by a manual clock.

use approx::assert_abs_diff_eq;
use speaker_page::ascii::{AsciiVideo, AsciiVideoConfig, Charset};
use speaker_page::hero::{
    DeferredMount, FireOutcome, HeavyModule, HeroMount, HeroTimer, MountPhase, MountTicket,
    PendingTimer,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

// ==========================================================================
// Manual clock
// ==========================================================================

struct Scheduled {
    deadline: Duration,
    ticket: MountTicket,
    cancelled: Rc<Cell<bool>>,
}

/// Fake clock: timers fire only when the test advances time past them.
#[derive(Clone, Default)]
struct ManualClock {
    now: Rc<Cell<Duration>>,
    timers: Rc<RefCell<Vec<Scheduled>>>,
}

struct ClockTimer {
    cancelled: Rc<Cell<bool>>,
}

impl PendingTimer for ClockTimer {
    fn cancel(self) {
        self.cancelled.set(true);
    }
}

impl ManualClock {
    fn schedule(&self, delay: Duration, ticket: MountTicket) -> ClockTimer {
        let cancelled = Rc::new(Cell::new(false));
        self.timers.borrow_mut().push(Scheduled {
            deadline: self.now.get() + delay,
            ticket,
            cancelled: Rc::clone(&cancelled),
        });
        ClockTimer { cancelled }
    }

    /// Moves time to `millis` and delivers every due, uncancelled timer.
    fn advance_to<M: HeavyModule>(&self, millis: u64, mount: &mut DeferredMount<M, ClockTimer>) {
        self.now.set(Duration::from_millis(millis));
        let now = self.now.get();
        let due: Vec<MountTicket> = {
            let mut timers = self.timers.borrow_mut();
            let (due, pending): (Vec<_>, Vec<_>) =
                timers.drain(..).partition(|timer| timer.deadline <= now);
            *timers = pending;
            due.into_iter()
                .filter(|timer| !timer.cancelled.get())
                .map(|timer| timer.ticket)
                .collect()
        };
        for ticket in due {
            mount.fire(ticket);
        }
    }

    fn pending_timers(&self) -> usize {
        self.timers
            .borrow()
            .iter()
            .filter(|timer| !timer.cancelled.get())
            .count()
    }
}

// ==========================================================================
// Fake heavy module
// ==========================================================================

thread_local! {
    static INSTANTIATED: Cell<u32> = const { Cell::new(0) };
    static TORN_DOWN: Cell<u32> = const { Cell::new(0) };
}

fn instantiated() -> u32 {
    INSTANTIATED.with(Cell::get)
}

fn torn_down() -> u32 {
    TORN_DOWN.with(Cell::get)
}

/// Records the configuration it was mounted with.
struct FakeHero {
    config: AsciiVideoConfig,
}

impl HeavyModule for FakeHero {
    type Config = AsciiVideoConfig;
    type Error = String;

    fn instantiate(config: &AsciiVideoConfig) -> Result<Self, String> {
        INSTANTIATED.with(|count| count.set(count.get() + 1));
        if config.source.is_empty() {
            return Err("no source".to_string());
        }
        Ok(Self {
            config: config.clone(),
        })
    }

    fn teardown(&mut self) {
        TORN_DOWN.with(|count| count.set(count.get() + 1));
    }
}

fn activated(clock: &ManualClock, config: AsciiVideoConfig) -> DeferredMount<FakeHero, ClockTimer> {
    let mut mount = DeferredMount::new(Duration::from_millis(300), config);
    assert!(mount.activate(|delay, ticket| clock.schedule(delay, ticket)));
    mount
}

// ==========================================================================
// Scenarios
// ==========================================================================

#[test]
fn mounts_with_default_hero_config_after_delay() {
    let clock = ManualClock::default();
    let mut mount = activated(&clock, AsciiVideoConfig::default());

    clock.advance_to(299, &mut mount);
    assert!(!mount.is_ready());
    assert!(mount.module().is_none());

    clock.advance_to(300, &mut mount);
    assert!(mount.is_ready());
    let hero = mount.module().expect("hero should be mounted at 300ms");
    assert_eq!(hero.config.source, "/hero-clip.mp4");
    assert_eq!(hero.config.column_count, 180);
    assert!(hero.config.color_enabled);
    assert_abs_diff_eq!(hero.config.brightness, 0.85);
    assert!(hero.config.pointer_interaction_enabled);
    assert!(hero.config.ripple_effect_enabled);
    assert_eq!(hero.config.charset, Charset::Detailed);
    assert!(hero.config.autoplay);
    assert!(hero.config.playing);
}

#[test]
fn teardown_before_delay_cancels_for_good() {
    let clock = ManualClock::default();
    let mut mount = activated(&clock, AsciiVideoConfig::default());
    let before = instantiated();

    clock.advance_to(150, &mut mount);
    mount.deactivate();
    assert_eq!(clock.pending_timers(), 0);

    clock.advance_to(300, &mut mount);
    clock.advance_to(10_000, &mut mount);

    assert!(!mount.is_ready());
    assert!(mount.module().is_none());
    assert_eq!(mount.phase(), MountPhase::Terminated);
    assert_eq!(instantiated(), before);
}

#[test]
fn teardown_after_mount_runs_hook_once() {
    let clock = ManualClock::default();
    let mut mount = activated(&clock, AsciiVideoConfig::default());
    clock.advance_to(300, &mut mount);
    let before = torn_down();

    mount.deactivate();
    mount.deactivate();
    drop(mount);

    assert_eq!(torn_down() - before, 1);
}

#[test]
fn duplicate_fires_and_activations_mount_once() {
    let clock = ManualClock::default();
    let mut mount = activated(&clock, AsciiVideoConfig::default());
    let ticket = mount.pending_ticket().expect("timer should be pending");
    let before = instantiated();

    // Re-renders may try to activate again
    assert!(!mount.activate(|delay, ticket| clock.schedule(delay, ticket)));
    assert_eq!(clock.pending_timers(), 1);

    clock.advance_to(300, &mut mount);
    assert_eq!(mount.fire(ticket), FireOutcome::Ignored);

    assert_eq!(instantiated() - before, 1);
    assert_eq!(mount.phase(), MountPhase::Active);
}

#[test]
fn region_stays_empty_until_ready() {
    let clock = ManualClock::default();
    let mut mount = activated(&clock, AsciiVideoConfig::default());

    for millis in [0, 50, 100, 200, 299] {
        clock.advance_to(millis, &mut mount);
        assert!(mount.module().is_none(), "mounted early at {millis}ms");
        assert_eq!(mount.phase(), MountPhase::Pending);
    }
}

#[test]
fn configured_delay_is_honoured() {
    let clock = ManualClock::default();
    let mut mount: DeferredMount<FakeHero, ClockTimer> =
        DeferredMount::new(Duration::from_millis(1_000), AsciiVideoConfig::default());
    mount.activate(|delay, ticket| clock.schedule(delay, ticket));

    clock.advance_to(999, &mut mount);
    assert!(!mount.is_ready());
    clock.advance_to(1_000, &mut mount);
    assert!(mount.is_ready());
}

#[test]
fn failed_instantiation_is_not_retried() {
    let clock = ManualClock::default();
    let config = AsciiVideoConfig {
        source: String::new(),
        ..AsciiVideoConfig::default()
    };
    let mut mount = activated(&clock, config);
    let before = instantiated();

    clock.advance_to(300, &mut mount);
    clock.advance_to(600, &mut mount);

    assert!(mount.is_ready());
    assert!(mount.module().is_none());
    assert_eq!(mount.phase(), MountPhase::Failed);
    assert_eq!(instantiated() - before, 1);
    assert!(!mount.activate(|delay, ticket| clock.schedule(delay, ticket)));
}

#[test]
fn ascii_video_mounts_from_assets_dir() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    std::fs::write(dir.path().join("hero-clip.mp4"), b"clip").expect("failed to write clip");
    std::env::set_var("SPEAKER_PAGE_ASSETS_DIR", dir.path());

    let mut mount = HeroMount::new(Duration::from_millis(300), AsciiVideoConfig::default());
    let mut scheduled = None;
    mount.activate(|_, ticket| {
        scheduled = Some(ticket);
        let (_task, handle) = iced::Task::<()>::none().abortable();
        HeroTimer::new(handle)
    });

    let outcome = mount.fire(scheduled.expect("timer should be scheduled"));
    std::env::remove_var("SPEAKER_PAGE_ASSETS_DIR");

    assert_eq!(outcome, FireOutcome::Mounted);
    let video: &AsciiVideo = mount.module().expect("hero should be mounted");
    assert_eq!(video.config(), &AsciiVideoConfig::default());
}
