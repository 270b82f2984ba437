//! Terminal presenter for a spawned carousel.

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};
use folio_carousel::{
    CarouselHandle, CarouselMessage, CarouselView, Key, VisibleEntry,
};
use futures::StreamExt;
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use tokio::time::MissedTickBehavior;

/// Redraw cadence while a transition is animating.
const FRAME: Duration = Duration::from_millis(33);

/// What a key press asks of the presenter.
#[derive(Debug, Clone, PartialEq)]
enum Command {
    Send(CarouselMessage),
    Quit,
}

/// Map a key press to a carousel intent, given the frame on screen.
fn translate(key: &KeyEvent, view: &CarouselView) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    let message = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return Some(Command::Quit);
        }
        KeyCode::Char('q') => return Some(Command::Quit),
        KeyCode::Left => CarouselMessage::Key(Key::ArrowLeft),
        KeyCode::Right => CarouselMessage::Key(Key::ArrowRight),
        KeyCode::Char(' ') => CarouselMessage::ToggleAutoRotate,
        KeyCode::Char('r') => CarouselMessage::Retry,
        KeyCode::Enter => {
            let center = view.center()?;
            CarouselMessage::Select(Some(center.item.id.clone()))
        }
        KeyCode::Esc if view.selected.is_some() => CarouselMessage::Select(None),
        _ => return None,
    };
    Some(Command::Send(message))
}

/// Take over the terminal and present `handle` until the user quits.
///
/// Dropping the handle on return unmounts the carousel if `q` was not used.
pub async fn run(mut handle: CarouselHandle) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut terminal = match enter_screen() {
        Ok(terminal) => terminal,
        Err(err) => {
            if let Err(restore) = disable_raw_mode() {
                log::warn!("Failed to leave raw mode: {restore}");
            }
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            return Err(err).context("enter alternate screen");
        }
    };

    let result = event_loop(&mut terminal, &mut handle).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result
}

fn enter_screen() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    handle: &mut CarouselHandle,
) -> Result<()> {
    let mut events = EventStream::new();
    let mut frames = tokio::time::interval(FRAME);
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut view = handle.view();

    loop {
        let now = Instant::now();
        terminal.draw(|frame| render(frame, &view, now))?;

        tokio::select! {
            changed = handle.changed() => match changed {
                Ok(next) => view = next,
                Err(_) => break,
            },
            _ = frames.tick(), if view.is_transitioning => {}
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) => match translate(&key, &view) {
                    Some(Command::Quit) => {
                        if let Err(err) = handle.unmount() {
                            log::debug!("Quit after driver stopped: {err}");
                        }
                        break;
                    }
                    Some(Command::Send(message)) => handle.send(message)?,
                    None => {}
                },
                Some(Ok(_)) => {}
                Some(Err(err)) => {
                    return Err(err).context("read terminal event");
                }
                None => break,
            },
        }
    }
    Ok(())
}

fn render(frame: &mut Frame<'_>, view: &CarouselView, now: Instant) {
    let detail_height = if view.selected.is_some() { 8 } else { 0 };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(7),
            Constraint::Length(detail_height),
            Constraint::Length(1),
        ])
        .split(frame.size());

    render_ring(frame, rows[0], view);
    if let Some(item) = &view.selected {
        let mut lines = vec![
            Line::from(Span::styled(
                format!("{} · {}", item.title, item.category.label()),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(item.description.clone()),
            Line::from(""),
        ];
        lines.extend(
            item.links()
                .map(|(kind, url)| Line::from(format!("{}: {url}", kind.label()))),
        );
        let detail = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Details (Esc)"));
        frame.render_widget(detail, rows[1]);
    }
    frame.render_widget(Paragraph::new(status_line(view, now)), rows[2]);
}

fn render_ring(frame: &mut Frame<'_>, area: Rect, view: &CarouselView) {
    if view.is_empty() {
        let empty = Paragraph::new("No projects to show")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(empty, area);
        return;
    }

    let count = view.entries.len() as u32;
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(view.entries.iter().map(|_| Constraint::Ratio(1, count)))
        .split(area);

    let reference = full_scale(view);
    for (entry, column) in view.entries.iter().zip(columns.iter()) {
        render_card(frame, card_area(*column, entry, reference), entry);
    }
}

/// Scale that fills a whole column: the centered card's, or the largest shown.
fn full_scale(view: &CarouselView) -> f32 {
    view.center()
        .map(|entry| entry.placement.scale)
        .unwrap_or_else(|| {
            view.entries
                .iter()
                .map(|entry| entry.placement.scale)
                .fold(0.0, f32::max)
        })
}

/// Shrink a column to the card's share of `full_scale`, keeping it vertically
/// centered.
fn card_area(column: Rect, entry: &VisibleEntry, full_scale: f32) -> Rect {
    if full_scale <= 0.0 {
        return column;
    }
    let shrink = ((full_scale - entry.placement.scale).max(0.0) / full_scale
        * f32::from(column.height)
        / 2.0) as u16;
    let height = column
        .height
        .saturating_sub(shrink.saturating_mul(2))
        .max(3)
        .min(column.height);
    Rect {
        y: column.y + (column.height - height) / 2,
        height,
        ..column
    }
}

fn render_card(frame: &mut Frame<'_>, area: Rect, entry: &VisibleEntry) {
    let opacity = entry.placement.opacity;
    let mut style = Style::default().fg(if opacity >= 0.9 {
        Color::White
    } else if opacity >= 0.45 {
        Color::Gray
    } else {
        Color::DarkGray
    });
    if entry.is_center() {
        style = style.add_modifier(Modifier::BOLD);
    }

    let lines = vec![
        Line::from(entry.item.title.clone()),
        Line::from(Span::styled(
            entry.item.category.label(),
            Style::default().fg(Color::Cyan),
        )),
    ];
    let borders = if entry.is_center() {
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
    } else {
        Block::default().borders(Borders::ALL)
    };
    let card = Paragraph::new(lines)
        .style(style)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(borders);
    frame.render_widget(card, area);
}

fn status_line(view: &CarouselView, now: Instant) -> Line<'static> {
    let mut spans = Vec::new();
    if !view.is_empty() {
        spans.push(Span::raw(format!(
            " {}/{} ",
            view.current_index + 1,
            view.len
        )));
    }
    spans.push(Span::raw(if view.auto_rotate_enabled {
        " auto: on "
    } else {
        " auto: off "
    }));
    if let Some(progress) = view.transition_progress(now) {
        spans.push(Span::raw(format!(" moving {:>3.0}% ", progress * 100.0)));
    }
    if let Some(err) = &view.last_error {
        spans.push(Span::styled(
            format!(" error: {err} (r to retry) "),
            Style::default().fg(Color::Red),
        ));
    }
    spans.push(Span::styled(
        " ←/→ rotate · space auto · enter open · q quit",
        Style::default().fg(Color::DarkGray),
    ));
    Line::from(spans)
}
