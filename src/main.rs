mod app;
mod catalog;
mod config;
mod error;
mod knowledge;
mod logging;
mod notifier;
mod player;
mod progress;
mod scheduler;
mod theme;
mod timer;
mod ui;

use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use std::{io, time::{Duration, Instant}};

use crate::app::{Action, App, View, action_for_key};
use crate::catalog::PracticeKind;
use crate::config::{CONFIG_FILE, Config, Overrides, get_path};
use crate::error::Result;
use crate::notifier::DesktopNotifier;

const TICK_RATE: Duration = Duration::from_millis(50);

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Clone)]
#[command(author, version, about = "🙏 pranahuti - A heartful meditation companion for the terminal")]
struct Args {
    /// Session length, e.g. 30m, 1h, 45m30s
    #[arg(short, long, value_parser = parse_duration)]
    duration: Option<u32>,
    #[arg(short, long, value_enum)]
    kind: Option<PracticeKind>,
    #[arg(short = 't', long)]
    theme: Option<String>,
    /// Screen to open on
    #[arg(short, long, value_enum)]
    view: Option<View>,
    #[arg(long)]
    no_sound: bool,
    #[arg(long)]
    no_notify: bool,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            duration_secs: self.duration,
            practice: self.kind,
            theme: self.theme.clone(),
            no_sound: self.no_sound,
            no_notify: self.no_notify,
        }
    }
}

/// Parses `1h`, `30m`, `90s` and combinations into whole seconds. A bare
/// number is minutes.
fn parse_duration(s: &str) -> std::result::Result<u32, String> {
    let s = s.trim().to_lowercase();
    let mut total = 0.0;
    let mut num = String::new();

    for c in s.chars() {
        match c {
            '0'..='9' | '.' => num.push(c),
            'h' => { total += num.parse::<f64>().map_err(|_| "Invalid hours")? * 3600.0; num.clear(); }
            'm' => { total += num.parse::<f64>().map_err(|_| "Invalid minutes")? * 60.0; num.clear(); }
            's' => { total += num.parse::<f64>().map_err(|_| "Invalid seconds")?; num.clear(); }
            _ => return Err("Invalid format".into()),
        }
    }
    if !num.is_empty() {
        total += num.parse::<f64>().map_err(|_| "Invalid minutes")? * 60.0;
    }

    let secs = total.round();
    if secs < 1.0 {
        Err("Duration must be at least one second".into())
    } else if secs > f64::from(u32::MAX) {
        Err("Duration is too long".into())
    } else {
        Ok(secs as u32)
    }
}

// ============================================================================
// Main
// ============================================================================

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_tracing();

    let config_path = get_path(CONFIG_FILE);
    let prefs = Config::load_or_init(&config_path);
    let overrides = args.overrides();

    let notifier = DesktopNotifier::new(overrides.apply(&prefs).notifications_enabled);
    let view = args.view.unwrap_or(View::Dashboard);
    let mut app = App::new(prefs, &overrides, config_path, view, Box::new(notifier));
    tracing::info!(view = ?app.view, "starting");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Err(e) = &res {
        tracing::error!(error = %e, "exited with error");
    }
    res
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::render_ui(f, app))?;

        let timeout = TICK_RATE.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
                && let Some(action) = action_for_key(app, key)
            {
                app.update(action);
            }
        }

        if last_tick.elapsed() >= TICK_RATE {
            app.update(Action::Frame(last_tick.elapsed()));
            last_tick = Instant::now();
        }

        if app.should_quit {
            tracing::info!("goodbye");
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations_parse_to_seconds() {
        assert_eq!(parse_duration("30m"), Ok(1800));
        assert_eq!(parse_duration("1h"), Ok(3600));
        assert_eq!(parse_duration("1h30m"), Ok(5400));
        assert_eq!(parse_duration("90s"), Ok(90));
        assert_eq!(parse_duration(" 20 "), Ok(1200));
        assert_eq!(parse_duration("0.5m"), Ok(30));
    }

    #[test]
    fn bad_durations_are_rejected() {
        assert!(parse_duration("0m").is_err());
        assert!(parse_duration("abc").is_err());
        assert!(parse_duration("").is_err());
        assert!(parse_duration("xm").is_err());
    }

    #[test]
    fn cli_accepts_practice_and_view() {
        let args = Args::try_parse_from(["pranahuti", "-d", "45m", "-k", "evening", "-v", "timer", "--no-notify"]).unwrap();
        assert_eq!(args.duration, Some(2700));
        assert_eq!(args.kind, Some(PracticeKind::Evening));
        assert_eq!(args.view, Some(View::Timer));
        assert!(args.no_notify && !args.no_sound);

        let config = args.overrides().apply(&Config::default());
        assert_eq!(config.duration_secs, 2700);
        assert_eq!(config.practice, PracticeKind::Evening);
        assert!(!config.notifications_enabled && config.sound_enabled);
    }
}
