pub mod app;
pub mod ui;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use hourmark_core::Language;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tracing::error;

use crate::tui::app::{App, InputMode};

pub fn run(language: Language) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(language);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = %err, "tui exited with an error");
        println!("{:?}", err);
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .map_err(|e| io::Error::other(e.to_string()))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key(app, key) {
                    return Ok(());
                }
            }
        }
    }
}

/// Returns `true` when the app should quit.
fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    // The alert blocks everything else until dismissed.
    if app.session.is_alert_visible() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char('c')) {
            app.dismiss_alert();
        }
        return false;
    }

    if app.details.is_some() {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Backspace => app.close_details(),
            KeyCode::Char('[') | KeyCode::Left | KeyCode::Char('h') => app.details_previous_month(),
            KeyCode::Char(']') | KeyCode::Right | KeyCode::Char('l') => app.details_next_month(),
            _ => {}
        }
        return false;
    }

    match app.input_mode {
        InputMode::Normal => match key.code {
            KeyCode::Char('q') => return true,
            KeyCode::Left | KeyCode::Char('h') => app.move_days(-1),
            KeyCode::Right | KeyCode::Char('l') => app.move_days(1),
            KeyCode::Up | KeyCode::Char('k') => app.move_days(-7),
            KeyCode::Down | KeyCode::Char('j') => app.move_days(7),
            KeyCode::Char('[') => app.previous_month(),
            KeyCode::Char(']') => app.next_month(),
            KeyCode::Char('t') => app.jump_to_today(),
            KeyCode::Char(' ') | KeyCode::Enter => app.toggle_day(),
            KeyCode::Char('i') | KeyCode::Char('a') => app.enter_edit_mode(),
            KeyCode::Char('d') => app.open_details(),
            KeyCode::Char('L') => app.switch_language(),
            _ => {}
        },
        InputMode::Editing => match key.code {
            KeyCode::Enter => app.submit_hours(),
            KeyCode::Esc => app.exit_input_mode(),
            KeyCode::Char(c) => app.input_char(c),
            KeyCode::Backspace => app.delete_char(),
            KeyCode::Left => app.move_cursor_left(),
            KeyCode::Right => app.move_cursor_right(),
            _ => {}
        },
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) -> bool {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_keyboard_flow() {
        let mut app = App::new(Language::English);
        app.cursor = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();

        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Char('l'));
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Char('i'));
        press(&mut app, KeyCode::Char('8'));
        press(&mut app, KeyCode::Enter);

        let store = app.session.store();
        assert_eq!(store.get("2024-03-04").unwrap().hours_worked.map(|h| h.get()), Some(8));
        assert_eq!(store.get("2024-03-05").unwrap().hours_worked.map(|h| h.get()), Some(8));
        assert!(!press(&mut app, KeyCode::Char('x')));
        assert!(press(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn test_alert_swallows_keys_until_dismissed() {
        let mut app = App::new(Language::English);
        press(&mut app, KeyCode::Char('i'));
        press(&mut app, KeyCode::Char('0'));
        press(&mut app, KeyCode::Enter);
        assert!(app.session.is_alert_visible());

        assert!(!press(&mut app, KeyCode::Char('q')));
        assert_eq!(app.session.hours_input, "0");

        press(&mut app, KeyCode::Esc);
        assert!(!app.session.is_alert_visible());
    }

    #[test]
    fn test_language_switch_key() {
        let mut app = App::new(Language::English);
        press(&mut app, KeyCode::Char('L'));
        assert_eq!(app.session.language(), Language::Swedish);
    }
}
