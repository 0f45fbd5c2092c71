use chrono::Timelike;
use ratatui::{prelude::*, widgets::*};

use crate::app::{App, View, greeting};
use crate::catalog::{DURATION_PRESETS, GUIDED_SESSIONS, GuidedSession, PracticeKind, preset_index};
use crate::knowledge;
use crate::progress;
use crate::timer::{self, TimerStatus};

// ============================================================================
// UI Rendering
// ============================================================================

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(2),
        ])
        .split(f.size());

    render_header(f, app, chunks[0]);
    render_nav(f, app, chunks[1]);

    match app.view {
        View::Dashboard => render_dashboard(f, app, chunks[2]),
        View::Scheduler => render_scheduler(f, app, chunks[2]),
        View::Timer => render_timer(f, app, chunks[2]),
        View::Guided => render_guided(f, app, chunks[2]),
        View::Progress => render_progress(f, app, chunks[2]),
        View::Knowledge => render_knowledge(f, app, chunks[2]),
        View::Help => render_help(f, app, chunks[2]),
    }

    render_controls(f, app, chunks[3]);
    render_toasts(f, app);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let now = chrono::Local::now();
    let heart = if app.animation_frame < 10 { "♥" } else { "♡" };

    let block = panel(app, "");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(20), Constraint::Percentage(40)])
        .split(inner);

    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(" PRANAHUTI ", Style::default().fg(app.theme.accent_color).add_modifier(Modifier::BOLD)),
            Span::styled(greeting(now.hour()), Style::default().fg(Color::Gray)),
        ])),
        cols[0],
    );
    f.render_widget(
        Paragraph::new(Span::styled(heart, Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD)))
            .alignment(Alignment::Center),
        cols[1],
    );
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(now.format("%I:%M %p").to_string(), Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            Span::styled(now.format("  %a %d %b %Y ").to_string(), Style::default().fg(Color::DarkGray)),
        ]))
        .alignment(Alignment::Right),
        cols[2],
    );
}

fn render_nav(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = View::NAV
        .iter()
        .enumerate()
        .map(|(i, v)| Line::from(format!("{} {}", i + 1, v.title())))
        .collect();
    let selected = View::NAV.iter().position(|&v| v == app.view);

    let mut tabs = Tabs::new(titles)
        .block(panel(app, ""))
        .style(Style::default().fg(Color::Gray))
        .highlight_style(Style::default().fg(app.theme.accent_color).add_modifier(Modifier::BOLD))
        .divider(" • ");
    if let Some(i) = selected {
        tabs = tabs.select(i);
    }
    f.render_widget(tabs, area);
}

fn render_dashboard(f: &mut Frame, app: &App, area: Rect) {
    let (thought, author) = knowledge::DAILY_THOUGHT;
    let now = chrono::Local::now().time();

    let mut lines = vec![
        Line::from(""),
        section_title(app, "💗 TODAY'S DIVINE THOUGHT"),
        Line::from(""),
        Line::from(Span::styled(format!("  \"{thought}\""), Style::default().fg(Color::White).add_modifier(Modifier::ITALIC))),
        Line::from(Span::styled(format!("     - {author}"), Style::default().fg(Color::DarkGray))),
        Line::from(""),
        section_title(app, "📅 TODAY'S PRACTICE"),
        Line::from(""),
    ];

    for entry in app.schedule.entries() {
        let info = entry.kind.info();
        let (badge, badge_color) = match (entry.enabled, entry.completed) {
            (_, true) => ("Done", Color::Green),
            (true, false) => ("Pending", Color::Yellow),
            (false, false) => ("Off", Color::DarkGray),
        };
        lines.push(Line::from(vec![
            Span::raw(format!("  {}  ", info.icon)),
            Span::styled(format!("{:<20}", info.name), Style::default().fg(app.theme.color(info.color)).add_modifier(Modifier::BOLD)),
            Span::styled(format!("{}  ", entry.time_label()), Style::default().fg(Color::Gray)),
            Span::styled(format!("[{badge}]"), Style::default().fg(badge_color)),
        ]));
    }

    lines.push(Line::from(""));
    let next = match app.schedule.next_up(now) {
        Some(entry) => format!("  Next practice: {} at {}", entry.kind.info().name, entry.time_label()),
        None => "  All of today's practice is behind you. Rest in the heart.".into(),
    };
    lines.push(Line::from(Span::styled(next, Style::default().fg(Color::Cyan))));
    lines.push(Line::from(Span::styled(
        format!("  {} of {} practices completed today", app.schedule.completed_count(), PracticeKind::ALL.len()),
        Style::default().fg(Color::Gray),
    )));

    lines.push(Line::from(""));
    lines.push(section_title(app, "✨ QUICK PRACTICE"));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw("  "),
        span_key("M", app),
        Span::raw(" Start Meditation  •  "),
        span_key("G", app),
        Span::raw(" Guided Session  •  "),
        span_key("S", app),
        Span::raw(" Satsang"),
    ]));

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }).block(panel(app, " Dashboard ")), area);
}

fn render_scheduler(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![
        Line::from(""),
        section_title(app, "🔔 DAILY PRACTICE SCHEDULER"),
        Line::from(Span::styled(
            "  Configure your daily spiritual practice with gentle reminders",
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("  🔊 Divine Sound Notifications: "),
            on_off(app.config.sound_enabled),
        ]),
    ];

    for (idx, entry) in app.schedule.entries().iter().enumerate() {
        let info = entry.kind.info();
        let selected = idx == app.schedule_cursor;
        let color = app.theme.color(info.color);
        let label_style = if !entry.enabled {
            Style::default().fg(Color::DarkGray)
        } else if selected {
            Style::default().fg(color).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color)
        };

        lines.push(Line::from(""));
        let mut heading = vec![
            Span::styled(if selected { "  > " } else { "    " }, Style::default().fg(app.theme.accent_color).add_modifier(Modifier::BOLD)),
            Span::raw(format!("{}  ", info.icon)),
            Span::styled(info.name, label_style),
        ];
        if entry.completed {
            heading.push(Span::styled("  ✓ Completed", Style::default().fg(Color::Green)));
        }
        lines.push(Line::from(heading));
        lines.push(Line::from(Span::styled(format!("       {}", info.description), Style::default().fg(Color::Gray))));

        let time = match (&app.time_input, selected) {
            (Some(input), true) => Line::from(vec![
                Span::raw("       ⏰ "),
                Span::styled(input.clone(), Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
                Span::styled("█", Style::default().fg(Color::Green)),
            ]),
            _ => Line::from(vec![
                Span::raw("       ⏰ "),
                Span::styled(
                    entry.time_label(),
                    if entry.enabled { Style::default().fg(Color::White) } else { Style::default().fg(Color::DarkGray) },
                ),
                Span::raw("   "),
                on_off(entry.enabled),
            ]),
        };
        lines.push(time);
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  \"The morning meditation connects you to the divine source. The evening cleaning removes the day's impressions.\"",
        Style::default().fg(Color::Blue).add_modifier(Modifier::ITALIC),
    )));

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }).block(panel(app, " Daily Schedule ")), area);
}

fn render_timer(f: &mut Frame, app: &App, area: Rect) {
    let block = panel(app, " Meditation Timer ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(2), Constraint::Length(2),
            Constraint::Length(1), Constraint::Length(1),
            Constraint::Length(3), Constraint::Length(1),
            Constraint::Length(3), Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(inner);

    let kind = app.timer.kind();
    let color = app.theme.color(kind.info().color);
    let locked = app.timer.is_active();

    // Practice type
    let kinds: Vec<Span> = PracticeKind::ALL
        .iter()
        .flat_map(|&k| {
            let style = if k == kind {
                Style::default().fg(app.theme.color(k.info().color)).add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(if locked { Color::DarkGray } else { Color::Gray })
            };
            [Span::styled(format!(" {} ", k.info().timer_label), style), Span::raw("  ")]
        })
        .collect();
    f.render_widget(Paragraph::new(Line::from(kinds)).alignment(Alignment::Center), sections[1]);

    // Duration
    let selected_preset = preset_index(app.timer.selected_secs());
    let mut presets: Vec<Span> = DURATION_PRESETS
        .iter()
        .enumerate()
        .flat_map(|(i, p)| {
            let style = if selected_preset == Some(i) {
                Style::default().fg(app.theme.accent_color).add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(if locked { Color::DarkGray } else { Color::Gray })
            };
            [Span::styled(format!(" {} ", p.label), style), Span::raw(" ")]
        })
        .collect();
    if selected_preset.is_none() {
        presets.push(Span::styled(
            format!(" custom {} ", timer::format_clock(app.timer.selected_secs())),
            Style::default().fg(app.theme.accent_color).add_modifier(Modifier::BOLD | Modifier::REVERSED),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(presets)).alignment(Alignment::Center), sections[2]);

    f.render_widget(
        Paragraph::new(kind.info().timer_label)
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center),
        sections[3],
    );

    // Timer
    f.render_widget(
        Paragraph::new(app.timer.format_clock())
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center),
        sections[5],
    );

    // Status
    let (status, status_color) = match app.timer.status() {
        TimerStatus::Idle => ("◇ READY - press Enter to begin practice".to_string(), Color::Gray),
        TimerStatus::Running => (
            format!("{} IN PRACTICE  •  {}", if app.animation_frame < 10 { "●" } else { "○" }, minutes_left(app.timer.remaining_secs())),
            Color::Green,
        ),
        TimerStatus::Paused => (
            format!("⏸  PAUSED{}  •  {}", ".".repeat((app.animation_frame / 5) as usize % 4), minutes_left(app.timer.remaining_secs())),
            Color::Yellow,
        ),
        TimerStatus::Completed => ("🙏 SESSION COMPLETE".to_string(), Color::Magenta),
    };
    f.render_widget(
        Paragraph::new(status)
            .style(Style::default().fg(status_color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center),
        sections[6],
    );

    // Progress
    f.render_widget(
        Gauge::default()
            .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded))
            .gauge_style(Style::default().fg(color).bg(Color::Black))
            .percent((app.timer.progress_ratio() * 100.0) as u16),
        sections[7],
    );

    f.render_widget(
        Paragraph::new(Line::from(vec![Span::raw("🔔 Completion Bell: "), on_off(app.config.sound_enabled)]))
            .alignment(Alignment::Center),
        sections[8],
    );

    let mut guidance = vec![section_title(app, "💜 MEDITATION GUIDANCE")];
    for tip in knowledge::SITTING_GUIDANCE {
        guidance.push(Line::from(Span::styled(format!("  • {tip}"), Style::default().fg(Color::Gray))));
    }
    f.render_widget(Paragraph::new(guidance), sections[9]);
}

fn render_guided(f: &mut Frame, app: &App, area: Rect) {
    if let Some(session) = app.player.now_playing() {
        render_transcript(f, app, session, area);
        return;
    }

    let mut lines = vec![
        Line::from(""),
        section_title(app, "▶ GUIDED SESSIONS"),
        Line::from(Span::styled(
            "  Follow gentle guidance for your daily practices",
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        )),
    ];

    for (idx, session) in GUIDED_SESSIONS.iter().enumerate() {
        let selected = idx == app.guided_cursor;
        let info = session.kind.info();
        let title_style = if selected {
            Style::default().fg(app.theme.color(info.color)).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(if selected { "  ► " } else { "    " }, Style::default().fg(app.theme.accent_color).add_modifier(Modifier::BOLD)),
            Span::raw(format!("{}  ", info.icon)),
            Span::styled(session.title, title_style),
            Span::styled(format!("  [{}]", session.difficulty.label()), Style::default().fg(Color::DarkGray)),
            Span::styled(format!("  {} min", session.minutes), Style::default().fg(Color::Cyan)),
        ]));
        lines.push(Line::from(Span::styled(format!("       {}", session.description), Style::default().fg(Color::Gray))));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Approach each session with love, humility, and openness. Sincere effort with love is what matters most.",
        Style::default().fg(Color::Green).add_modifier(Modifier::ITALIC),
    )));

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }).block(panel(app, " Guided Sessions ")), area);
}

fn render_transcript(f: &mut Frame, app: &App, session: &GuidedSession, area: Rect) {
    let color = app.theme.color(session.kind.info().color);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(1)])
        .split(area);

    let pulse = if app.animation_frame < 10 { "🎧" } else { "  " };
    let header = vec![
        Line::from(Span::styled(session.title, Style::default().fg(color).add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(session.description, Style::default().fg(Color::Gray))),
        Line::from(""),
        Line::from(vec![
            Span::raw(format!("{pulse} ")),
            Span::styled("Session in Progress", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
            Span::styled(format!("  •  {} min duration", session.minutes), Style::default().fg(Color::Gray)),
        ]),
    ];
    f.render_widget(
        Paragraph::new(header)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded).border_style(Style::default().fg(color))),
        chunks[0],
    );

    let mut transcript = Vec::new();
    for paragraph in session.transcript {
        transcript.push(Line::from(Span::styled(*paragraph, Style::default().fg(Color::White))));
        transcript.push(Line::from(""));
    }
    f.render_widget(
        Paragraph::new(transcript)
            .wrap(Wrap { trim: true })
            .scroll((app.player.scroll(), 0))
            .block(panel(app, " 📖 Guidance Transcript ")),
        chunks[1],
    );
}

fn render_progress(f: &mut Frame, app: &App, area: Rect) {
    let s = &progress::SUMMARY;
    let mut lines = vec![
        Line::from(""),
        section_title(app, "📈 PRACTICE PROGRESS"),
        Line::from(Span::styled(
            "  Track your spiritual journey with love, not competition",
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        stat_line("🔥 Current streak", format!("{} days", s.current_streak)),
        stat_line("💙 Total sessions", s.total_sessions.to_string()),
        stat_line("⏱  Avg duration", format!("{} min", s.avg_duration_min)),
        stat_line("📅 Sessions this month", s.this_month.to_string()),
        stat_line("🏔  Longest streak", format!("{} days", s.longest_streak)),
        Line::from(vec![
            Span::raw("     Practice consistency: "),
            Span::styled(bar(u32::from(s.consistency_pct), 100, 30), Style::default().fg(app.theme.accent_color)),
            Span::raw(format!(" {}%", s.consistency_pct)),
        ]),
        Line::from(""),
        section_title(app, "📊 MONTHLY SESSIONS"),
    ];

    let max = progress::max_monthly_sessions();
    for m in &progress::MONTHLY {
        lines.push(Line::from(vec![
            Span::styled(format!("     {} ", m.month), Style::default().fg(Color::Gray)),
            Span::styled(bar(m.sessions, max, 30), Style::default().fg(app.theme.accent_color)),
            Span::raw(format!(" {}  ({}%)", m.sessions, m.consistency_pct)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(section_title(app, "🕘 RECENT PRACTICE"));
    for r in &progress::RECENT {
        lines.push(Line::from(vec![
            Span::styled("     ● ", Style::default().fg(Color::Green)),
            Span::styled(format!("{:<20}", r.practice), Style::default().fg(Color::White)),
            Span::styled(format!("{:<12}", r.when), Style::default().fg(Color::Gray)),
            Span::styled(format!("{:<10}", r.mood.label()), Style::default().fg(Color::Magenta)),
            Span::styled(format!("{}min", r.minutes), Style::default().fg(Color::Cyan)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(section_title(
        app,
        &format!("🏅 MILESTONES OF GRACE ({}/{})", progress::earned_count(), progress::ACHIEVEMENTS.len()),
    ));
    for a in &progress::ACHIEVEMENTS {
        let style = if a.earned { Style::default().fg(Color::Green) } else { Style::default().fg(Color::DarkGray) };
        lines.push(Line::from(vec![
            Span::raw(format!("     {}  ", a.icon)),
            Span::styled(a.title, style.add_modifier(Modifier::BOLD)),
            Span::styled(format!("  {}", a.description), style),
        ]));
    }

    f.render_widget(Paragraph::new(lines).block(panel(app, " Progress ")), area);
}

fn render_knowledge(f: &mut Frame, app: &App, area: Rect) {
    let (thought, author) = knowledge::LIBRARY_THOUGHT;
    let mut lines = vec![
        Line::from(""),
        section_title(app, "⭐ TODAY'S DIVINE WISDOM"),
        Line::from(Span::styled(format!("  \"{thought}\""), Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC))),
        Line::from(Span::styled(format!("     - {author}"), Style::default().fg(Color::DarkGray))),
        Line::from(""),
        section_title(app, "📚 SACRED TEXTS & TEACHINGS"),
    ];

    for text in &knowledge::TEXTS {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(format!("  [{}] ", text.category), Style::default().fg(Color::Cyan)),
            Span::styled(text.title, Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            Span::styled(format!("  ⏱ {}", text.read_time), Style::default().fg(Color::DarkGray)),
        ]));
        lines.push(Line::from(Span::styled(format!("       {}", text.author), Style::default().fg(Color::Blue))));
        lines.push(Line::from(Span::styled(format!("       {}", text.description), Style::default().fg(Color::Gray))));
    }

    lines.push(Line::from(""));
    lines.push(section_title(app, "💗 TEN MAXIMS"));
    for maxim in knowledge::TEN_MAXIMS {
        lines.push(Line::from(Span::styled(format!("     • {maxim}"), Style::default().fg(Color::Gray))));
    }
    lines.push(Line::from(""));
    lines.push(section_title(app, "🌅 DAILY PRACTICE"));
    for item in knowledge::DAILY_PRACTICE {
        lines.push(Line::from(Span::styled(format!("     • {item}"), Style::default().fg(Color::Gray))));
    }

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }).block(panel(app, " Knowledge Hub ")), area);
}

fn render_help(f: &mut Frame, app: &App, area: Rect) {
    let help_text = vec![
        Line::from(""),
        section_title(app, "⌨️  KEYBOARD SHORTCUTS"),
        Line::from(""),
        Line::from("  Navigation:"),
        help_line("1-6", "Jump to a screen"),
        help_line("Tab / Shift+Tab", "Next / previous screen"),
        help_line("[ / ]", "Cycle themes"),
        help_line("?", "Toggle help"),
        Line::from(""),
        Line::from("  Meditation Timer:"),
        help_line("Enter", "Begin practice"),
        help_line("Space", "Pause / resume"),
        help_line("X", "Stop and reset"),
        help_line("←→ / HL", "Choose duration"),
        help_line("↑↓ / JK", "Choose practice type"),
        help_line("B", "Toggle completion bell"),
        Line::from(""),
        Line::from("  Daily Schedule:"),
        help_line("Space", "Enable / disable practice"),
        help_line("Enter / E", "Edit time (HH:MM)"),
        help_line("C", "Mark practice complete"),
        help_line("N", "Send a test notification"),
        Line::from(""),
        Line::from("  Guided Sessions:"),
        help_line("Enter", "Start the selected session"),
        help_line("↑↓ / JK", "Select, or scroll the transcript"),
        help_line("Esc / X", "End the session"),
        Line::from(""),
        Line::from("  General:"),
        help_line("Q", "Quit"),
        help_line("Ctrl+C", "Force quit"),
    ];

    f.render_widget(
        Paragraph::new(help_text).block(panel(app, " Help ").title_alignment(Alignment::Center)),
        centered_rect(70, 95, area),
    );
}

fn render_controls(f: &mut Frame, app: &App, area: Rect) {
    let view_keys: Vec<Span> = match app.view {
        View::Timer => vec![
            span_key("Enter", app), Span::raw(" Begin  •  "),
            span_key("Space", app), Span::raw(" Pause/Resume  •  "),
            span_key("X", app), Span::raw(" Stop  •  "),
            span_key("←→", app), Span::raw(" Duration  •  "),
            span_key("↑↓", app), Span::raw(" Practice"),
        ],
        View::Scheduler if app.time_input.is_some() => vec![
            span_key("Enter", app), Span::raw(" Save time  •  "),
            span_key("Esc", app), Span::raw(" Cancel"),
        ],
        View::Scheduler => vec![
            span_key("Space", app), Span::raw(" Enable  •  "),
            span_key("E", app), Span::raw(" Edit time  •  "),
            span_key("C", app), Span::raw(" Complete  •  "),
            span_key("N", app), Span::raw(" Test notification  •  "),
            span_key("B", app), Span::raw(" Sound"),
        ],
        View::Guided if app.player.is_playing() => vec![
            span_key("↑↓", app), Span::raw(" Scroll  •  "),
            span_key("Esc", app), Span::raw(" End session"),
        ],
        View::Guided => vec![
            span_key("↑↓", app), Span::raw(" Select  •  "),
            span_key("Enter", app), Span::raw(" Start session"),
        ],
        View::Dashboard => vec![
            span_key("M", app), Span::raw(" Meditate  •  "),
            span_key("G", app), Span::raw(" Guided  •  "),
            span_key("S", app), Span::raw(" Satsang"),
        ],
        _ => vec![span_key("Esc", app), Span::raw(" Back")],
    };

    let controls = vec![
        Line::from(view_keys),
        Line::from(vec![
            span_key("Tab", app), Span::raw(" Next screen  •  "),
            span_key("[ ]", app), Span::raw(" Theme  •  "),
            span_key("?", app), Span::raw(" Help  •  "),
            span_key("Q", app), Span::raw(" Quit"),
        ]),
    ];
    f.render_widget(
        Paragraph::new(controls).alignment(Alignment::Center).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

fn render_toasts(f: &mut Frame, app: &App) {
    let screen = f.size();
    let width = 48.min(screen.width);
    let mut y = 6;

    for toast in &app.toasts {
        if y + 4 > screen.height {
            break;
        }
        let area = Rect::new(screen.width - width, y, width, 4);
        f.render_widget(Clear, area);
        f.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled(toast.title.as_str(), Style::default().fg(app.theme.accent_color).add_modifier(Modifier::BOLD))),
                Line::from(Span::styled(toast.body.as_str(), Style::default().fg(Color::White))),
            ])
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded).border_style(Style::default().fg(app.theme.border_color))),
            area,
        );
        y += 4;
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn panel<'a>(app: &App, title: &'a str) -> Block<'a> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(app.theme.border_color))
}

fn section_title(app: &App, text: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {text}"),
        Style::default().fg(app.theme.accent_color).add_modifier(Modifier::BOLD),
    ))
}

fn span_key<'a>(text: &'a str, app: &App) -> Span<'a> {
    Span::styled(text, Style::default().fg(app.theme.accent_color).add_modifier(Modifier::BOLD))
}

fn help_line<'a>(key: &'a str, desc: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::raw("    "),
        Span::styled(format!("{key:<16}"), Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::raw(desc),
    ])
}

fn stat_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::raw(format!("     {label}: ")),
        Span::styled(value, Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
    ])
}

fn on_off(on: bool) -> Span<'static> {
    if on {
        Span::styled("ON", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
    } else {
        Span::styled("OFF", Style::default().fg(Color::DarkGray))
    }
}

fn minutes_left(remaining_secs: u32) -> String {
    match remaining_secs.div_ceil(60) {
        1 => "1 minute left".into(),
        n => format!("{n} minutes left"),
    }
}

fn bar(value: u32, max: u32, width: u32) -> String {
    let filled = value.min(max) * width / max.max(1);
    "█".repeat(filled as usize)
}

fn centered_rect(w: u16, h: u16, r: Rect) -> Rect {
    let v = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - h) / 2),
            Constraint::Percentage(h),
            Constraint::Percentage((100 - h) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - w) / 2),
            Constraint::Percentage(w),
            Constraint::Percentage((100 - w) / 2),
        ])
        .split(v[1])[1]
}
