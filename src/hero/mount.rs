// SPDX-License-Identifier: MPL-2.0
//! Deferred, one-shot mounting of a heavy module.
//!
//! [`DeferredMount`] holds back a costly module until a short delay after the
//! page is activated, mounts it exactly once, and guarantees that nothing is
//! mounted or mutated after teardown.
//!
//! ```text
//! Idle ──activate──▶ Pending ──fire──▶ Active ──deactivate──▶ Terminated
//!   │                   │  └───fire (error)──▶ Failed ──────────▲
//!   └──deactivate───────┴──deactivate─────────────────────────────┘
//! ```
//!
//! The controller does not own a clock. `activate` hands the delay and a
//! [`MountTicket`] to a scheduling closure, which returns a [`PendingTimer`]
//! and arranges for `fire(ticket)` to be called once the delay has elapsed.
//! The application backs this with an abortable Iced task; tests use a manual
//! clock.

use std::fmt;
use std::time::Duration;

/// A module that is expensive enough to be worth mounting late.
pub trait HeavyModule: Sized {
    /// Configuration handed through to [`HeavyModule::instantiate`] unchanged.
    type Config: Clone;
    type Error: fmt::Display;

    fn instantiate(config: &Self::Config) -> Result<Self, Self::Error>;

    /// Releases the module's resources. Called at most once by the controller.
    fn teardown(&mut self);
}

/// Handle to a scheduled, not yet fired, mount timer.
pub trait PendingTimer {
    /// Cancels the timer; its callback must not run afterwards.
    fn cancel(self);
}

/// Identifies one scheduled timer so late or duplicate fires are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MountTicket(u64);

/// Result of delivering a timer fire to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FireOutcome {
    /// The module was instantiated.
    Mounted,
    /// Instantiation failed; the controller will not retry.
    Failed(String),
    /// Stale ticket or wrong phase; nothing changed.
    Ignored,
}

enum Phase<M, T> {
    Idle,
    Pending { ticket: MountTicket, timer: T },
    Active(M),
    Failed,
    Terminated,
}

/// Public view of the controller's phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountPhase {
    Idle,
    Pending,
    Active,
    Failed,
    Terminated,
}

/// Timer-gated, one-shot mount of `M`, cancelled by teardown.
pub struct DeferredMount<M: HeavyModule, T: PendingTimer> {
    delay: Duration,
    config: M::Config,
    phase: Phase<M, T>,
    /// Flips to `true` once, when the timer fires while pending.
    ready: bool,
    next_ticket: u64,
}

impl<M: HeavyModule, T: PendingTimer> DeferredMount<M, T> {
    #[must_use]
    pub fn new(delay: Duration, config: M::Config) -> Self {
        Self {
            delay,
            config,
            phase: Phase::Idle,
            ready: false,
            next_ticket: 0,
        }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    #[must_use]
    pub fn config(&self) -> &M::Config {
        &self.config
    }

    /// Whether the delay has elapsed and a mount was attempted.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    #[must_use]
    pub fn phase(&self) -> MountPhase {
        match self.phase {
            Phase::Idle => MountPhase::Idle,
            Phase::Pending { .. } => MountPhase::Pending,
            Phase::Active(_) => MountPhase::Active,
            Phase::Failed => MountPhase::Failed,
            Phase::Terminated => MountPhase::Terminated,
        }
    }

    /// Ticket of the scheduled timer while the mount is pending.
    #[must_use]
    pub fn pending_ticket(&self) -> Option<MountTicket> {
        match self.phase {
            Phase::Pending { ticket, .. } => Some(ticket),
            _ => None,
        }
    }

    /// The mounted module, if any.
    #[must_use]
    pub fn module(&self) -> Option<&M> {
        match &self.phase {
            Phase::Active(module) => Some(module),
            _ => None,
        }
    }

    pub fn module_mut(&mut self) -> Option<&mut M> {
        match &mut self.phase {
            Phase::Active(module) => Some(module),
            _ => None,
        }
    }

    /// Schedules the mount timer. Only acts from the idle phase.
    ///
    /// `schedule` receives the delay and the ticket that must be passed back to
    /// [`DeferredMount::fire`]. Returns `false` when the call was a no-op.
    pub fn activate<F>(&mut self, schedule: F) -> bool
    where
        F: FnOnce(Duration, MountTicket) -> T,
    {
        if !matches!(self.phase, Phase::Idle) {
            return false;
        }

        let ticket = MountTicket(self.next_ticket);
        self.next_ticket += 1;
        let timer = schedule(self.delay, ticket);
        self.phase = Phase::Pending { ticket, timer };
        tracing::debug!(delay_ms = self.delay.as_millis(), "hero mount scheduled");
        true
    }

    /// Delivers a timer fire.
    ///
    /// Mounts the module if the controller is still pending on `ticket`;
    /// everything else is ignored without mutation.
    pub fn fire(&mut self, ticket: MountTicket) -> FireOutcome {
        match &self.phase {
            Phase::Pending { ticket: pending, .. } if *pending == ticket => {}
            _ => {
                tracing::trace!(?ticket, phase = ?self.phase(), "stale mount timer ignored");
                return FireOutcome::Ignored;
            }
        }

        self.ready = true;
        match M::instantiate(&self.config) {
            Ok(module) => {
                self.phase = Phase::Active(module);
                tracing::debug!("hero module mounted");
                FireOutcome::Mounted
            }
            Err(e) => {
                self.phase = Phase::Failed;
                tracing::warn!(error = %e, "hero module failed to mount");
                FireOutcome::Failed(e.to_string())
            }
        }
    }

    /// Tears the controller down. Terminal and idempotent.
    ///
    /// A pending timer is cancelled before this returns; a mounted module has
    /// its teardown hook invoked exactly once.
    pub fn deactivate(&mut self) {
        match std::mem::replace(&mut self.phase, Phase::Terminated) {
            Phase::Pending { timer, .. } => {
                timer.cancel();
                tracing::debug!("pending hero mount cancelled");
            }
            Phase::Active(mut module) => {
                module.teardown();
                tracing::debug!("hero module unmounted");
            }
            Phase::Idle | Phase::Failed | Phase::Terminated => {}
        }
    }
}

impl<M: HeavyModule, T: PendingTimer> Drop for DeferredMount<M, T> {
    fn drop(&mut self) {
        self.deactivate();
    }
}

impl<M: HeavyModule, T: PendingTimer> fmt::Debug for DeferredMount<M, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferredMount")
            .field("delay", &self.delay)
            .field("phase", &self.phase())
            .field("ready", &self.ready)
            .finish()
    }
}
