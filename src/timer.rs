//! Meditation countdown engine.
//!
//! The engine never reads a clock. The UI loop feeds it whole-second ticks
//! through [`SecondClock`], and tests drive it with synthetic ticks.
//!
//! ```text
//! Idle -> Running <-> Paused
//!         Running -> Completed
//! {Running, Paused, Completed} -> Idle   (stop)
//! ```

use std::{fmt, time::Duration};

use crate::catalog::{DEFAULT_DURATION_SECS, PracticeKind};
use crate::error::TimerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerStatus {
    Idle,
    Running,
    Paused,
    Completed,
}

impl fmt::Display for TimerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Paused => "paused",
            Self::Completed => "completed",
        })
    }
}

/// The operation that was attempted, carried in transition errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerOp {
    Configure,
    SelectKind,
    Start,
    Pause,
    Resume,
    Stop,
}

impl fmt::Display for TimerOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Configure => "configure",
            Self::SelectKind => "change practice",
            Self::Start => "start",
            Self::Pause => "pause",
            Self::Resume => "resume",
            Self::Stop => "stop",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerEvent {
    Configured { duration_secs: u32 },
    KindSelected { kind: PracticeKind },
    Started { kind: PracticeKind, duration_secs: u32 },
    Paused { remaining_secs: u32 },
    Resumed { remaining_secs: u32 },
    Stopped { duration_secs: u32 },
    Completed { kind: PracticeKind, duration_secs: u32 },
}

#[derive(Debug, Clone)]
pub struct TimerEngine {
    kind: PracticeKind,
    selected_secs: u32,
    remaining_secs: u32,
    status: TimerStatus,
}

impl Default for TimerEngine {
    fn default() -> Self {
        Self::new(PracticeKind::Morning, DEFAULT_DURATION_SECS)
    }
}

impl TimerEngine {
    /// A zero duration falls back to the default session length.
    pub fn new(kind: PracticeKind, duration_secs: u32) -> Self {
        let secs = if duration_secs == 0 { DEFAULT_DURATION_SECS } else { duration_secs };
        Self {
            kind,
            selected_secs: secs,
            remaining_secs: secs,
            status: TimerStatus::Idle,
        }
    }

    pub fn status(&self) -> TimerStatus {
        self.status
    }

    pub fn kind(&self) -> PracticeKind {
        self.kind
    }

    pub fn selected_secs(&self) -> u32 {
        self.selected_secs
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    /// True while a session is in flight (running or paused).
    pub fn is_active(&self) -> bool {
        matches!(self.status, TimerStatus::Running | TimerStatus::Paused)
    }

    /// 0.0 ..= 1.0 of the selected duration elapsed.
    pub fn progress_ratio(&self) -> f64 {
        let done = self.selected_secs - self.remaining_secs;
        (f64::from(done) / f64::from(self.selected_secs)).clamp(0.0, 1.0)
    }

    /// `MM:SS`, minutes not wrapped into hours.
    pub fn format_clock(&self) -> String {
        format_clock(self.remaining_secs)
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn configure(&mut self, duration_secs: u32) -> Result<TimerEvent, TimerError> {
        self.ensure_reconfigurable(TimerOp::Configure)?;
        if duration_secs == 0 {
            return Err(TimerError::InvalidDuration);
        }
        self.status = TimerStatus::Idle;
        self.selected_secs = duration_secs;
        self.remaining_secs = duration_secs;
        Ok(TimerEvent::Configured { duration_secs })
    }

    pub fn select_kind(&mut self, kind: PracticeKind) -> Result<TimerEvent, TimerError> {
        self.ensure_reconfigurable(TimerOp::SelectKind)?;
        if self.status == TimerStatus::Completed {
            self.reset();
        }
        self.kind = kind;
        Ok(TimerEvent::KindSelected { kind })
    }

    pub fn start(&mut self) -> Result<TimerEvent, TimerError> {
        self.transition(TimerOp::Start, TimerStatus::Idle, TimerStatus::Running)?;
        Ok(TimerEvent::Started {
            kind: self.kind,
            duration_secs: self.selected_secs,
        })
    }

    pub fn pause(&mut self) -> Result<TimerEvent, TimerError> {
        self.transition(TimerOp::Pause, TimerStatus::Running, TimerStatus::Paused)?;
        Ok(TimerEvent::Paused {
            remaining_secs: self.remaining_secs,
        })
    }

    pub fn resume(&mut self) -> Result<TimerEvent, TimerError> {
        self.transition(TimerOp::Resume, TimerStatus::Paused, TimerStatus::Running)?;
        Ok(TimerEvent::Resumed {
            remaining_secs: self.remaining_secs,
        })
    }

    pub fn stop(&mut self) -> Result<TimerEvent, TimerError> {
        if self.status == TimerStatus::Idle {
            return Err(TimerError::InvalidStateTransition {
                from: self.status,
                action: TimerOp::Stop,
            });
        }
        self.reset();
        Ok(TimerEvent::Stopped {
            duration_secs: self.selected_secs,
        })
    }

    /// One elapsed second. Returns the completion event on the tick that
    /// reaches zero; every other tick returns `None`.
    pub fn tick(&mut self) -> Option<TimerEvent> {
        if self.status != TimerStatus::Running {
            return None;
        }

        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs > 0 {
            return None;
        }

        self.status = TimerStatus::Completed;
        Some(TimerEvent::Completed {
            kind: self.kind,
            duration_secs: self.selected_secs,
        })
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn transition(&mut self, op: TimerOp, from: TimerStatus, to: TimerStatus) -> Result<(), TimerError> {
        if self.status != from {
            return Err(TimerError::InvalidStateTransition {
                from: self.status,
                action: op,
            });
        }
        self.status = to;
        Ok(())
    }

    fn ensure_reconfigurable(&self, op: TimerOp) -> Result<(), TimerError> {
        if self.is_active() {
            return Err(TimerError::InvalidStateTransition {
                from: self.status,
                action: op,
            });
        }
        Ok(())
    }

    fn reset(&mut self) {
        self.status = TimerStatus::Idle;
        self.remaining_secs = self.selected_secs;
    }
}

pub fn format_clock(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

// ============================================================================
// Second Clock
// ============================================================================

/// Turns the UI loop's irregular frame deltas into whole seconds, carrying
/// the sub-second remainder between frames.
#[derive(Debug, Default)]
pub struct SecondClock {
    carry: Duration,
}

impl SecondClock {
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.carry += elapsed;
        let whole = self.carry.as_secs();
        self.carry -= Duration::from_secs(whole);
        u32::try_from(whole).unwrap_or(u32::MAX)
    }

    /// Drops any partial second, e.g. when the countdown is paused.
    pub fn reset(&mut self) {
        self.carry = Duration::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running(secs: u32) -> TimerEngine {
        let mut engine = TimerEngine::default();
        engine.configure(secs).unwrap();
        engine.start().unwrap();
        engine
    }

    #[test]
    fn runs_to_completion_for_any_duration() {
        for d in [1, 2, 59, 60, 61, 600, 3600] {
            let mut engine = running(d);
            for _ in 0..d {
                engine.tick();
            }
            assert_eq!(engine.status(), TimerStatus::Completed, "duration {d}");
            assert_eq!(engine.remaining_secs(), 0);
        }
    }

    #[test]
    fn completion_is_signalled_exactly_once() {
        let mut engine = running(600);
        let completions = (0..700)
            .filter_map(|_| engine.tick())
            .filter(|e| matches!(e, TimerEvent::Completed { .. }))
            .count();
        assert_eq!(completions, 1);
        assert_eq!(engine.status(), TimerStatus::Completed);
        assert_eq!(engine.remaining_secs(), 0);
    }

    #[test]
    fn pause_freezes_remaining() {
        let mut engine = running(1200);
        for _ in 0..5 {
            engine.tick();
        }
        engine.pause().unwrap();
        for _ in 0..100 {
            assert!(engine.tick().is_none());
        }
        assert_eq!(engine.remaining_secs(), 1195);

        engine.resume().unwrap();
        engine.tick();
        assert_eq!(engine.remaining_secs(), 1200 - 6);
    }

    #[test]
    fn stop_restores_selected_duration_from_every_non_idle_state() {
        let mut engine = running(90);
        engine.tick();
        engine.stop().unwrap();
        assert_eq!((engine.status(), engine.remaining_secs()), (TimerStatus::Idle, 90));

        let mut engine = running(90);
        engine.tick();
        engine.pause().unwrap();
        engine.stop().unwrap();
        assert_eq!((engine.status(), engine.remaining_secs()), (TimerStatus::Idle, 90));

        let mut engine = running(3);
        (0..3).for_each(|_| {
            engine.tick();
        });
        engine.stop().unwrap();
        assert_eq!((engine.status(), engine.remaining_secs()), (TimerStatus::Idle, 3));
    }

    #[test]
    fn start_then_stop_returns_to_idle() {
        let mut engine = TimerEngine::new(PracticeKind::Evening, 900);
        engine.start().unwrap();
        assert_eq!(engine.stop(), Ok(TimerEvent::Stopped { duration_secs: 900 }));
        assert_eq!(engine.status(), TimerStatus::Idle);
        assert_eq!(engine.remaining_secs(), 900);
    }

    #[test]
    fn configure_rejected_while_active() {
        let mut engine = running(600);
        engine.tick();
        let err = engine.configure(1200).unwrap_err();
        assert_eq!(
            err,
            TimerError::InvalidStateTransition {
                from: TimerStatus::Running,
                action: TimerOp::Configure
            }
        );
        assert_eq!(engine.selected_secs(), 600);
        assert_eq!(engine.remaining_secs(), 599);

        engine.pause().unwrap();
        assert!(engine.configure(1200).is_err());
        assert!(engine.select_kind(PracticeKind::Night).is_err());
        assert_eq!(engine.status(), TimerStatus::Paused);
        assert_eq!(engine.remaining_secs(), 599);
    }

    #[test]
    fn configure_after_completion_starts_a_fresh_cycle() {
        let mut engine = running(2);
        engine.tick();
        engine.tick();
        assert!(engine.start().is_err());

        engine.configure(30).unwrap();
        assert_eq!(engine.status(), TimerStatus::Idle);
        assert_eq!(engine.remaining_secs(), 30);
        assert!(engine.start().is_ok());
    }

    #[test]
    fn zero_duration_is_rejected() {
        let mut engine = TimerEngine::default();
        assert_eq!(engine.configure(0), Err(TimerError::InvalidDuration));
        assert_eq!(engine.selected_secs(), DEFAULT_DURATION_SECS);
    }

    #[test]
    fn illegal_transitions_are_reported() {
        let mut engine = TimerEngine::default();
        assert!(engine.pause().is_err());
        assert!(engine.resume().is_err());
        assert!(engine.stop().is_err());

        engine.start().unwrap();
        assert!(engine.start().is_err());
        assert!(engine.resume().is_err());
    }

    #[test]
    fn idle_ticks_do_nothing() {
        let mut engine = TimerEngine::default();
        assert!(engine.tick().is_none());
        assert_eq!(engine.remaining_secs(), DEFAULT_DURATION_SECS);
    }

    #[test]
    fn progress_and_clock_track_remaining() {
        let mut engine = running(120);
        assert_eq!(engine.format_clock(), "02:00");
        for _ in 0..30 {
            engine.tick();
        }
        assert_eq!(engine.format_clock(), "01:30");
        assert!((engine.progress_ratio() - 0.25).abs() < f64::EPSILON);
        assert_eq!(format_clock(3600), "60:00");
    }

    #[test]
    fn second_clock_carries_fractions() {
        let mut clock = SecondClock::default();
        assert_eq!(clock.advance(Duration::from_millis(700)), 0);
        assert_eq!(clock.advance(Duration::from_millis(700)), 1);
        assert_eq!(clock.advance(Duration::from_millis(2600)), 3);
        clock.advance(Duration::from_millis(900));
        clock.reset();
        assert_eq!(clock.advance(Duration::from_millis(200)), 0);
    }
}
