//! Application shell: every screen's state lives in [`App`] and changes only
//! through [`App::update`]. Key presses become [`Action`]s in
//! [`action_for_key`].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::{collections::VecDeque, path::PathBuf, time::Duration};

use crate::catalog::{DURATION_PRESETS, GUIDED_SESSIONS, PracticeKind};
use crate::config::{Config, Overrides};
use crate::error::TimerError;
use crate::notifier::Notifier;
use crate::player::GuidedPlayer;
use crate::scheduler::Schedule;
use crate::theme::{self, Theme};
use crate::timer::{SecondClock, TimerEngine, TimerEvent, TimerStatus};

const TOAST_TTL: Duration = Duration::from_secs(4);
const MAX_TOASTS: usize = 3;
const TIME_INPUT_LEN: usize = 5;

// ============================================================================
// Views & Actions
// ============================================================================

#[derive(PartialEq, Eq, Clone, Copy, Debug, clap::ValueEnum)]
pub enum View {
    Dashboard,
    Scheduler,
    Timer,
    Guided,
    Progress,
    Knowledge,
    #[value(skip)]
    Help,
}

impl View {
    pub const NAV: [View; 6] = [
        Self::Dashboard,
        Self::Scheduler,
        Self::Timer,
        Self::Guided,
        Self::Progress,
        Self::Knowledge,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Scheduler => "Daily Schedule",
            Self::Timer => "Meditation Timer",
            Self::Guided => "Guided Sessions",
            Self::Progress => "Progress",
            Self::Knowledge => "Knowledge Hub",
            Self::Help => "Help",
        }
    }

    fn nav_index(self) -> usize {
        Self::NAV.iter().position(|&v| v == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::NAV[(self.nav_index() + 1) % Self::NAV.len()]
    }

    fn prev(self) -> Self {
        Self::NAV[(self.nav_index() + Self::NAV.len() - 1) % Self::NAV.len()]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    Navigate(View),
    NextView,
    PrevView,
    ToggleHelp,
    CycleTheme { forward: bool },
    /// Real time elapsed since the previous frame.
    Frame(Duration),

    StartTimer,
    TogglePause,
    StopTimer,
    CyclePreset { forward: bool },
    CyclePractice { forward: bool },
    ToggleSound,

    CursorUp,
    CursorDown,
    ToggleEnabled,
    ToggleCompleted,
    BeginTimeEdit,
    TimeInput(char),
    TimeBackspace,
    CommitTime,
    CancelTimeEdit,
    TestNotification,

    StartGuided,
    StopGuided,
    ScrollUp,
    ScrollDown,

    Satsang,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub body: String,
    pub ttl: Duration,
}

// ============================================================================
// Application State
// ============================================================================

pub struct App {
    pub view: View,
    /// View to return to when help closes.
    pub previous_view: View,
    pub timer: TimerEngine,
    pub schedule: Schedule,
    pub schedule_cursor: usize,
    /// `Some` while the user is typing a new time for the selected practice.
    pub time_input: Option<String>,
    pub player: GuidedPlayer,
    pub guided_cursor: usize,
    pub toasts: VecDeque<Toast>,
    /// Settings in effect for this run.
    pub config: Config,
    /// What is saved to disk. Command-line overrides never reach it.
    prefs: Config,
    pub theme: Theme,
    pub animation_frame: u8,
    pub should_quit: bool,
    clock: SecondClock,
    config_path: PathBuf,
    notifier: Box<dyn Notifier>,
}

impl App {
    pub fn new(
        prefs: Config,
        overrides: &Overrides,
        config_path: PathBuf,
        view: View,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        let config = overrides.apply(&prefs);
        let mut notifier = notifier;
        // Ask up front, once.
        notifier.request_permission();

        Self {
            view,
            previous_view: view,
            timer: TimerEngine::new(config.practice, config.duration_secs),
            schedule: Schedule::default(),
            schedule_cursor: 0,
            time_input: None,
            player: GuidedPlayer::default(),
            guided_cursor: 0,
            toasts: VecDeque::new(),
            theme: theme::get_theme(&config.theme),
            config,
            prefs,
            animation_frame: 0,
            should_quit: false,
            clock: SecondClock::default(),
            config_path,
            notifier,
        }
    }

    pub fn selected_practice(&self) -> PracticeKind {
        PracticeKind::ALL[self.schedule_cursor]
    }

    pub fn update(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Navigate(view) => self.navigate(view),
            Action::NextView => self.navigate(self.view.next()),
            Action::PrevView => self.navigate(self.view.prev()),
            Action::ToggleHelp => {
                if self.view == View::Help {
                    self.view = self.previous_view;
                } else {
                    self.previous_view = self.view;
                    self.view = View::Help;
                }
            }
            Action::CycleTheme { forward } => {
                self.config.theme = theme::cycle(&self.config.theme, forward).into();
                self.theme = theme::get_theme(&self.config.theme);
                self.prefs.theme = self.config.theme.clone();
                self.save_prefs();
            }
            Action::Frame(elapsed) => self.on_frame(elapsed),

            Action::StartTimer => self.start_timer(),
            Action::TogglePause => match self.timer.status() {
                TimerStatus::Running => self.apply_timer(TimerEngine::pause),
                TimerStatus::Paused => self.apply_timer(TimerEngine::resume),
                TimerStatus::Idle | TimerStatus::Completed => self.start_timer(),
            },
            Action::StopTimer => self.apply_timer(TimerEngine::stop),
            Action::CyclePreset { forward } => {
                let secs = next_preset(self.timer.selected_secs(), forward);
                self.apply_timer(|t| t.configure(secs));
            }
            Action::CyclePractice { forward } => {
                let kind = if forward { self.timer.kind().next() } else { self.timer.kind().prev() };
                self.apply_timer(|t| t.select_kind(kind));
            }
            Action::ToggleSound => {
                self.config.sound_enabled = !self.config.sound_enabled;
                self.prefs.sound_enabled = self.config.sound_enabled;
                self.save_prefs();
            }

            Action::CursorUp => match self.view {
                View::Scheduler => self.schedule_cursor = self.schedule_cursor.saturating_sub(1),
                View::Guided => self.guided_cursor = self.guided_cursor.saturating_sub(1),
                _ => {}
            },
            Action::CursorDown => match self.view {
                View::Scheduler => self.schedule_cursor = (self.schedule_cursor + 1).min(PracticeKind::ALL.len() - 1),
                View::Guided => self.guided_cursor = (self.guided_cursor + 1).min(GUIDED_SESSIONS.len() - 1),
                _ => {}
            },
            Action::ToggleEnabled => {
                let kind = self.selected_practice();
                let enabled = self.schedule.toggle_enabled(kind);
                tracing::debug!(practice = kind.info().id, enabled, "practice toggled");
            }
            Action::ToggleCompleted => {
                let kind = self.selected_practice();
                if self.schedule.toggle_completed(kind) {
                    self.toast(
                        "🙏 Practice Completed",
                        &format!("{} marked as complete. May divine love fill your heart.", kind.info().name),
                    );
                }
            }
            Action::BeginTimeEdit => {
                let entry = self.schedule.entry(self.selected_practice());
                if entry.enabled {
                    self.time_input = Some(entry.time_label());
                } else {
                    self.toast("Practice disabled", "Enable it with Space before changing its time.");
                }
            }
            Action::TimeInput(c) => {
                if let Some(input) = self.time_input.as_mut()
                    && (c.is_ascii_digit() || c == ':')
                    && input.len() < TIME_INPUT_LEN
                {
                    input.push(c);
                }
            }
            Action::TimeBackspace => {
                if let Some(input) = self.time_input.as_mut() {
                    input.pop();
                }
            }
            Action::CommitTime => {
                if let Some(input) = self.time_input.take() {
                    let kind = self.selected_practice();
                    match self.schedule.set_time_str(kind, &input) {
                        Ok(time) => tracing::debug!(practice = kind.info().id, %time, "practice time updated"),
                        Err(e) => self.toast("Time not changed", &e.to_string()),
                    }
                }
            }
            Action::CancelTimeEdit => self.time_input = None,
            Action::TestNotification => {
                self.announce(
                    "🔔 Sahaj Marg Reminder",
                    "Time for your meditation practice. Come with love and surrender.",
                );
                self.toast(
                    "Test Notification Sent",
                    "Enable desktop notifications for gentle practice reminders.",
                );
            }

            Action::StartGuided => {
                let session = self.player.start(GUIDED_SESSIONS[self.guided_cursor].id);
                tracing::info!(session = session.title, "guided session started");
                self.toast(
                    "🧘 Guided Session Started",
                    &format!("Beginning {}. Follow the gentle guidance with an open heart.", session.title),
                );
            }
            Action::StopGuided => match self.player.stop() {
                Ok(session) => {
                    tracing::info!(session = session.title, "guided session ended");
                    self.toast(
                        "Session Complete",
                        "Thank you for your dedicated practice. May divine love remain with you.",
                    );
                }
                Err(e) => tracing::debug!(error = %e, "stop ignored"),
            },
            Action::ScrollUp => self.player.scroll_up(),
            Action::ScrollDown => self.player.scroll_down(),

            Action::Satsang => self.toast(
                "Satsang Reminder",
                "Next group sitting is today at 7 PM. Join with an open heart.",
            ),
        }
    }

    fn navigate(&mut self, view: View) {
        self.time_input = None;
        self.view = view;
    }

    fn on_frame(&mut self, elapsed: Duration) {
        self.animation_frame = self.animation_frame.wrapping_add(1) % 20;

        for toast in &mut self.toasts {
            toast.ttl = toast.ttl.saturating_sub(elapsed);
        }
        self.toasts.retain(|t| !t.ttl.is_zero());

        if self.timer.status() != TimerStatus::Running {
            self.clock.reset();
            return;
        }

        for _ in 0..self.clock.advance(elapsed) {
            if let Some(event) = self.timer.tick() {
                self.on_timer_event(event);
                break;
            }
        }
    }

    /// Starting from Completed begins a fresh cycle.
    fn start_timer(&mut self) {
        if self.timer.status() == TimerStatus::Completed {
            self.apply_timer(TimerEngine::stop);
        }
        self.apply_timer(TimerEngine::start);
    }

    fn apply_timer<F>(&mut self, op: F)
    where
        F: FnOnce(&mut TimerEngine) -> Result<TimerEvent, TimerError>,
    {
        match op(&mut self.timer) {
            Ok(event) => self.on_timer_event(event),
            Err(e) => {
                tracing::debug!(error = %e, "timer action rejected");
                self.toast("Not now", &e.to_string());
            }
        }
    }

    fn on_timer_event(&mut self, event: TimerEvent) {
        tracing::info!(?event, "timer");
        match event {
            TimerEvent::Started { .. } => {
                self.clock.reset();
                self.toast(
                    "🧘 Session Started",
                    "Find a comfortable position and let your heart be open to divine transmission.",
                );
            }
            TimerEvent::Completed { .. } => self.announce(
                "🙏 Session Complete",
                "Your meditation session is complete. May divine love remain with you.",
            ),
            _ => {}
        }
    }

    /// Bell (if sound is on) plus a desktop notification, falling back to a
    /// toast when the notifier refuses or fails. The bell does not depend on
    /// notification permission.
    fn announce(&mut self, title: &str, body: &str) {
        if self.config.sound_enabled {
            self.notifier.bell();
        }
        if let Err(e) = self.notifier.notify(title, body) {
            tracing::debug!(error = %e, "notification fell back to toast");
            self.toast(title, body);
        }
    }

    fn toast(&mut self, title: &str, body: &str) {
        self.toasts.push_back(Toast {
            title: title.into(),
            body: body.into(),
            ttl: TOAST_TTL,
        });
        while self.toasts.len() > MAX_TOASTS {
            self.toasts.pop_front();
        }
    }

    fn save_prefs(&self) {
        if let Err(e) = self.prefs.save(&self.config_path) {
            tracing::warn!(error = %e, "failed to save preferences");
        }
    }
}

/// Next preset above (or below) `current`, wrapping at the ends.
fn next_preset(current: u32, forward: bool) -> u32 {
    let found = if forward {
        DURATION_PRESETS.iter().find(|p| p.seconds > current)
    } else {
        DURATION_PRESETS.iter().rev().find(|p| p.seconds < current)
    };
    match (found, forward) {
        (Some(p), _) => p.seconds,
        (None, true) => DURATION_PRESETS[0].seconds,
        (None, false) => DURATION_PRESETS[DURATION_PRESETS.len() - 1].seconds,
    }
}

pub fn greeting(hour: u32) -> &'static str {
    match hour {
        0..=5 => "Sacred Dawn Awakens",
        6..=11 => "Divine Morning Light",
        12..=17 => "Peaceful Afternoon",
        18..=20 => "Blessed Evening",
        _ => "Peaceful Night",
    }
}

// ============================================================================
// Event Handlers
// ============================================================================

pub fn action_for_key(app: &App, key: KeyEvent) -> Option<Action> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }

    if app.time_input.is_some() {
        return match key.code {
            KeyCode::Char(c) => Some(Action::TimeInput(c)),
            KeyCode::Backspace => Some(Action::TimeBackspace),
            KeyCode::Enter => Some(Action::CommitTime),
            KeyCode::Esc => Some(Action::CancelTimeEdit),
            _ => None,
        };
    }

    let global = match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Tab => Some(Action::NextView),
        KeyCode::BackTab => Some(Action::PrevView),
        KeyCode::Char('?') => Some(Action::ToggleHelp),
        KeyCode::Char('[') => Some(Action::CycleTheme { forward: false }),
        KeyCode::Char(']') => Some(Action::CycleTheme { forward: true }),
        KeyCode::Char(c @ '1'..='6') => View::NAV.get(c as usize - '1' as usize).map(|&v| Action::Navigate(v)),
        _ => None,
    };
    if global.is_some() {
        return global;
    }

    match app.view {
        View::Dashboard => handle_dashboard(key),
        View::Scheduler => handle_scheduler(key),
        View::Timer => handle_timer(key),
        View::Guided => handle_guided(key, app.player.is_playing()),
        View::Progress | View::Knowledge => match key.code {
            KeyCode::Esc => Some(Action::Navigate(View::Dashboard)),
            _ => None,
        },
        View::Help => match key.code {
            KeyCode::Esc | KeyCode::Char('h') => Some(Action::ToggleHelp),
            _ => None,
        },
    }
}

fn handle_dashboard(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('m') => Some(Action::Navigate(View::Timer)),
        KeyCode::Char('g') => Some(Action::Navigate(View::Guided)),
        KeyCode::Char('s') => Some(Action::Satsang),
        KeyCode::Char('h') => Some(Action::ToggleHelp),
        KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

fn handle_scheduler(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::CursorUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::CursorDown),
        KeyCode::Char(' ') => Some(Action::ToggleEnabled),
        KeyCode::Enter | KeyCode::Char('e') => Some(Action::BeginTimeEdit),
        KeyCode::Char('c') => Some(Action::ToggleCompleted),
        KeyCode::Char('n') => Some(Action::TestNotification),
        KeyCode::Char('b') => Some(Action::ToggleSound),
        KeyCode::Esc => Some(Action::Navigate(View::Dashboard)),
        _ => None,
    }
}

fn handle_timer(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Enter => Some(Action::StartTimer),
        KeyCode::Char(' ') => Some(Action::TogglePause),
        KeyCode::Char('x') => Some(Action::StopTimer),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::CyclePreset { forward: true }),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::CyclePreset { forward: false }),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::CyclePractice { forward: true }),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::CyclePractice { forward: false }),
        KeyCode::Char('b') => Some(Action::ToggleSound),
        KeyCode::Esc => Some(Action::Navigate(View::Dashboard)),
        _ => None,
    }
}

fn handle_guided(key: KeyEvent, playing: bool) -> Option<Action> {
    match (key.code, playing) {
        (KeyCode::Up | KeyCode::Char('k'), false) => Some(Action::CursorUp),
        (KeyCode::Down | KeyCode::Char('j'), false) => Some(Action::CursorDown),
        (KeyCode::Enter, false) => Some(Action::StartGuided),
        (KeyCode::Esc, false) => Some(Action::Navigate(View::Dashboard)),
        (KeyCode::Up | KeyCode::Char('k'), true) => Some(Action::ScrollUp),
        (KeyCode::Down | KeyCode::Char('j'), true) => Some(Action::ScrollDown),
        (KeyCode::Esc | KeyCode::Char('x'), true) => Some(Action::StopGuided),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NotifyError;
    use crate::notifier::Permission;
    use std::{cell::RefCell, rc::Rc};

    #[derive(Default)]
    struct Recorded {
        permission_requests: usize,
        sent: Vec<String>,
        bells: usize,
    }

    struct FakeNotifier {
        permission: Permission,
        log: Rc<RefCell<Recorded>>,
    }

    impl Notifier for FakeNotifier {
        fn request_permission(&mut self) -> Permission {
            self.log.borrow_mut().permission_requests += 1;
            self.permission
        }

        fn notify(&mut self, title: &str, _body: &str) -> Result<(), NotifyError> {
            if self.permission == Permission::Denied {
                return Err(NotifyError::PermissionDenied);
            }
            self.log.borrow_mut().sent.push(title.into());
            Ok(())
        }

        fn bell(&mut self) {
            self.log.borrow_mut().bells += 1;
        }
    }

    fn app_with(permission: Permission) -> (App, Rc<RefCell<Recorded>>, tempfile::TempDir) {
        let prefs = Config { duration_secs: 3, ..Config::default() };
        app_with_overrides(permission, prefs, &Overrides::default())
    }

    fn app_with_overrides(
        permission: Permission,
        prefs: Config,
        overrides: &Overrides,
    ) -> (App, Rc<RefCell<Recorded>>, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let log = Rc::new(RefCell::new(Recorded::default()));
        let notifier = FakeNotifier { permission, log: Rc::clone(&log) };
        let app = App::new(prefs, overrides, dir.path().join("config.json"), View::Timer, Box::new(notifier));
        (app, log, dir)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn has_toast(app: &App, title: &str) -> bool {
        app.toasts.iter().any(|t| t.title == title)
    }

    #[test]
    fn permission_is_requested_once_at_startup() {
        let (_app, log, _dir) = app_with(Permission::Granted);
        assert_eq!(log.borrow().permission_requests, 1);
    }

    #[test]
    fn frames_drive_the_countdown_to_a_single_notification() {
        let (mut app, log, _dir) = app_with(Permission::Granted);
        app.update(Action::StartTimer);
        for _ in 0..80 {
            app.update(Action::Frame(Duration::from_millis(50)));
        }
        assert_eq!(app.timer.status(), TimerStatus::Completed);
        assert_eq!(app.timer.remaining_secs(), 0);
        assert_eq!(log.borrow().sent, vec!["🙏 Session Complete".to_string()]);
        assert!(!has_toast(&app, "🙏 Session Complete"));
    }

    #[test]
    fn denied_notifications_fall_back_to_toast() {
        let (mut app, log, _dir) = app_with(Permission::Denied);
        app.update(Action::StartTimer);
        app.update(Action::Frame(Duration::from_secs(3)));
        assert_eq!(app.timer.status(), TimerStatus::Completed);
        assert!(log.borrow().sent.is_empty());
        assert!(has_toast(&app, "🙏 Session Complete"));
    }

    #[test]
    fn bell_rings_on_completion_even_when_notifications_are_denied() {
        let (mut app, log, _dir) = app_with(Permission::Denied);
        app.update(Action::StartTimer);
        app.update(Action::Frame(Duration::from_secs(3)));
        assert_eq!(app.timer.status(), TimerStatus::Completed);
        assert_eq!(log.borrow().bells, 1);
    }

    #[test]
    fn no_bell_when_sound_is_off() {
        let overrides = Overrides { no_sound: true, ..Overrides::default() };
        let prefs = Config { duration_secs: 3, ..Config::default() };
        let (mut app, log, _dir) = app_with_overrides(Permission::Granted, prefs, &overrides);
        app.update(Action::StartTimer);
        app.update(Action::Frame(Duration::from_secs(3)));
        assert_eq!(log.borrow().sent.len(), 1);
        assert_eq!(log.borrow().bells, 0);
    }

    #[test]
    fn paused_frames_do_not_count_down() {
        let (mut app, _log, _dir) = app_with(Permission::Granted);
        app.update(Action::TogglePause);
        app.update(Action::Frame(Duration::from_millis(1500)));
        assert_eq!(app.timer.remaining_secs(), 2);

        app.update(Action::TogglePause);
        assert_eq!(app.timer.status(), TimerStatus::Paused);
        app.update(Action::Frame(Duration::from_secs(10)));
        assert_eq!(app.timer.remaining_secs(), 2);

        // The half second carried before the pause is dropped.
        app.update(Action::TogglePause);
        app.update(Action::Frame(Duration::from_millis(600)));
        assert_eq!(app.timer.remaining_secs(), 2);
    }

    #[test]
    fn presets_are_locked_while_running() {
        let (mut app, _log, _dir) = app_with(Permission::Granted);
        app.update(Action::CyclePreset { forward: true });
        assert_eq!(app.timer.selected_secs(), 600);

        app.update(Action::StartTimer);
        app.update(Action::CyclePreset { forward: true });
        assert_eq!(app.timer.selected_secs(), 600);
        assert!(has_toast(&app, "Not now"));
    }

    #[test]
    fn start_after_completion_begins_a_new_cycle() {
        let (mut app, _log, _dir) = app_with(Permission::Granted);
        app.update(Action::StartTimer);
        app.update(Action::Frame(Duration::from_secs(5)));
        assert_eq!(app.timer.status(), TimerStatus::Completed);

        app.update(Action::StartTimer);
        assert_eq!(app.timer.status(), TimerStatus::Running);
        assert_eq!(app.timer.remaining_secs(), 3);
    }

    #[test]
    fn preset_cycle_wraps() {
        assert_eq!(next_preset(1800, true), 2700);
        assert_eq!(next_preset(3600, true), 600);
        assert_eq!(next_preset(600, false), 3600);
        assert_eq!(next_preset(1000, false), 600);
    }

    #[test]
    fn time_edit_round_trip_through_keys() {
        let (mut app, _log, _dir) = app_with(Permission::Granted);
        app.update(Action::Navigate(View::Scheduler));
        app.update(Action::CursorDown);
        assert_eq!(app.selected_practice(), PracticeKind::Evening);

        app.update(action_for_key(&app, key(KeyCode::Enter)).unwrap());
        assert_eq!(app.time_input.as_deref(), Some("19:00"));
        for _ in 0..5 {
            app.update(action_for_key(&app, key(KeyCode::Backspace)).unwrap());
        }
        for c in "18:45x".chars() {
            app.update(action_for_key(&app, key(KeyCode::Char(c))).unwrap());
        }
        assert_eq!(app.time_input.as_deref(), Some("18:45"));
        app.update(action_for_key(&app, key(KeyCode::Enter)).unwrap());

        assert!(app.time_input.is_none());
        assert_eq!(app.schedule.entry(PracticeKind::Evening).time_label(), "18:45");
    }

    #[test]
    fn disabled_practice_cannot_be_edited() {
        let (mut app, _log, _dir) = app_with(Permission::Granted);
        app.update(Action::Navigate(View::Scheduler));
        app.update(Action::ToggleEnabled);
        app.update(Action::BeginTimeEdit);
        assert!(app.time_input.is_none());
        assert!(has_toast(&app, "Practice disabled"));
    }

    #[test]
    fn bad_time_is_reported_not_applied() {
        let (mut app, _log, _dir) = app_with(Permission::Granted);
        app.update(Action::Navigate(View::Scheduler));
        app.update(Action::BeginTimeEdit);
        app.time_input = Some("99:99".into());
        app.update(Action::CommitTime);
        assert!(has_toast(&app, "Time not changed"));
        assert_eq!(app.schedule.entry(PracticeKind::Morning).time_label(), "05:30");
    }

    #[test]
    fn completing_a_practice_toasts_only_when_marked() {
        let (mut app, _log, _dir) = app_with(Permission::Granted);
        app.update(Action::Navigate(View::Scheduler));
        app.update(Action::ToggleCompleted);
        assert_eq!(app.toasts.len(), 1);
        app.update(Action::ToggleCompleted);
        assert_eq!(app.toasts.len(), 1);
        assert_eq!(app.schedule.completed_count(), 0);
    }

    #[test]
    fn guided_keys_depend_on_playback() {
        let (mut app, _log, _dir) = app_with(Permission::Granted);
        app.update(Action::Navigate(View::Guided));
        app.update(action_for_key(&app, key(KeyCode::Down)).unwrap());
        app.update(action_for_key(&app, key(KeyCode::Enter)).unwrap());
        assert_eq!(app.player.now_playing().map(|s| s.title), Some(GUIDED_SESSIONS[1].title));

        assert_eq!(action_for_key(&app, key(KeyCode::Down)), Some(Action::ScrollDown));
        app.update(action_for_key(&app, key(KeyCode::Esc)).unwrap());
        assert!(!app.player.is_playing());
        assert!(has_toast(&app, "Session Complete"));
        assert_eq!(app.view, View::Guided);
    }

    #[test]
    fn toasts_expire_and_are_capped() {
        let (mut app, _log, _dir) = app_with(Permission::Granted);
        for _ in 0..5 {
            app.update(Action::Satsang);
        }
        assert_eq!(app.toasts.len(), MAX_TOASTS);
        app.update(Action::Frame(TOAST_TTL));
        assert!(app.toasts.is_empty());
    }

    #[test]
    fn navigation_and_help() {
        let (mut app, _log, _dir) = app_with(Permission::Granted);
        assert_eq!(action_for_key(&app, key(KeyCode::Char('5'))), Some(Action::Navigate(View::Progress)));
        app.update(Action::NextView);
        assert_eq!(app.view, View::Guided);
        app.update(Action::ToggleHelp);
        assert_eq!(app.view, View::Help);
        app.update(Action::ToggleHelp);
        assert_eq!(app.view, View::Guided);
        app.update(Action::Navigate(View::Dashboard));
        app.update(Action::PrevView);
        assert_eq!(app.view, View::Knowledge);
    }

    #[test]
    fn quit_keys() {
        let (app, _log, _dir) = app_with(Permission::Granted);
        assert_eq!(action_for_key(&app, key(KeyCode::Char('q'))), Some(Action::Quit));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action_for_key(&app, ctrl_c), Some(Action::Quit));
    }

    #[test]
    fn theme_and_sound_changes_are_saved() {
        let (mut app, _log, dir) = app_with(Permission::Granted);
        app.update(Action::CycleTheme { forward: true });
        app.update(Action::ToggleSound);
        let saved = Config::load(&dir.path().join("config.json"));
        assert_eq!(saved.theme, "dawn");
        assert!(!saved.sound_enabled);
    }

    #[test]
    fn command_line_overrides_are_not_saved() {
        let overrides = Overrides {
            duration_secs: Some(2700),
            practice: Some(PracticeKind::Night),
            no_notify: true,
            ..Overrides::default()
        };
        let (mut app, _log, dir) = app_with_overrides(Permission::Granted, Config::default(), &overrides);
        assert_eq!(app.timer.selected_secs(), 2700);
        assert!(!app.config.notifications_enabled);

        app.update(Action::CycleTheme { forward: true });
        let saved = Config::load(&dir.path().join("config.json"));
        assert_eq!(saved.theme, "dawn");
        assert!(saved.notifications_enabled);
        assert_eq!(saved.duration_secs, Config::default().duration_secs);
        assert_eq!(saved.practice, PracticeKind::Morning);
    }

    #[test]
    fn greeting_follows_the_hour() {
        assert_eq!(greeting(4), "Sacred Dawn Awakens");
        assert_eq!(greeting(9), "Divine Morning Light");
        assert_eq!(greeting(15), "Peaceful Afternoon");
        assert_eq!(greeting(20), "Blessed Evening");
        assert_eq!(greeting(23), "Peaceful Night");
    }
}
