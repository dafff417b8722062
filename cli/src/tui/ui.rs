use hourmark_core::{Color as DayColor, DayRecord, Language, LocaleConfig};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Clear, Paragraph, Row, Table},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::tui::app::{App, Details, InputMode};

fn to_color(color: DayColor) -> Color {
    match color {
        DayColor::LightBlue => Color::LightBlue,
        DayColor::Green => Color::Green,
        DayColor::Yellow => Color::Yellow,
        DayColor::Red => Color::Red,
    }
}

pub fn draw(f: &mut Frame, app: &App) {
    match &app.details {
        Some(details) => draw_details(f, details, app.session.locale()),
        None => draw_home(f, app),
    }

    if app.session.is_alert_visible() {
        draw_alert(f, app.session.locale());
    }
}

fn draw_home(f: &mut Frame, app: &App) {
    let locale = app.session.locale();
    let size = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Length(15), // Calendar
            Constraint::Length(3),  // Hours input
            Constraint::Length(1),  // Language
            Constraint::Min(0),
            Constraint::Length(1), // Footer/Help
        ])
        .split(size);

    let month = app.visible_month();
    let header = Paragraph::new(format!("{} {}", locale.month_name(month.month), month.year))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(header, main_chunks[0]);

    draw_calendar(f, app, main_chunks[1]);
    draw_input(f, app, main_chunks[2]);

    let language = Line::from(vec![
        Span::styled(format!("{}: ", locale.choose_language), Style::default().fg(Color::DarkGray)),
        Span::styled(
            locale.language_name(app.session.language()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(language).alignment(Alignment::Center), main_chunks[3]);

    let footer = Paragraph::new(format!(
        "←↓↑→/hjkl: Move | space: Select | i: {} | d: {} | [/]: Month | t: {} | L: {} | q: Quit",
        locale.add_hours,
        locale.see_hours_worked,
        locale.today,
        language_hint(app.session.language(), locale),
    ))
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    f.render_widget(footer, main_chunks[5]);
}

fn language_hint(current: Language, locale: &LocaleConfig) -> &'static str {
    locale.language_name(current.toggled())
}

fn draw_calendar(f: &mut Frame, app: &App, area: Rect) {
    let locale = app.session.locale();
    let store = app.session.store();

    let rows: Vec<Row> = app
        .visible_month()
        .weeks()
        .into_iter()
        .map(|week| {
            let cells = week.into_iter().map(|slot| match slot {
                Some(date) => {
                    let record = store.get_date(date);
                    let mut cell = day_cell(date.format("%e").to_string(), record);
                    if date == app.cursor {
                        cell = cell.style(cursor_style(record));
                    }
                    cell
                }
                None => Cell::from(""),
            });
            Row::new(cells).height(2)
        })
        .collect();

    let widths = [Constraint::Length(5); 7];
    let table = Table::new(rows, widths)
        .header(
            Row::new(locale.week_header().map(Cell::from))
                .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        )
        .column_spacing(1)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));

    let width = (5 * 7 + 6 + 2).min(area.width);
    let centered = Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    };
    f.render_widget(table, centered);
}

fn day_cell(label: String, record: Option<&DayRecord>) -> Cell<'static> {
    let Some(record) = record else {
        return Cell::from(label);
    };

    let bg = to_color(record.background_color());
    let dot = match record.dot_color() {
        Some(color) => Span::styled("•", Style::default().fg(to_color(color)).add_modifier(Modifier::BOLD)),
        None => Span::raw(" "),
    };
    Cell::from(vec![Line::from(label), Line::from(dot)]).style(Style::default().bg(bg).fg(Color::Black))
}

fn cursor_style(record: Option<&DayRecord>) -> Style {
    let bg = record.map(|r| to_color(r.background_color())).unwrap_or(Color::Reset);
    Style::default()
        .bg(bg)
        .fg(Color::Black)
        .add_modifier(Modifier::REVERSED | Modifier::BOLD)
}

fn draw_input(f: &mut Frame, app: &App, area: Rect) {
    let locale = app.session.locale();
    let editing = app.input_mode == InputMode::Editing;

    let text = if app.session.hours_input.is_empty() && !editing {
        Span::styled(locale.hours, Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(app.session.hours_input.as_str())
    };

    let border = if editing { Color::Cyan } else { Color::DarkGray };
    let width = 24.min(area.width);
    let input_area = Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    };
    let input = Paragraph::new(Line::from(text)).block(
        Block::default()
            .title(format!(" {} ", locale.add_hours))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border)),
    );
    f.render_widget(input, input_area);

    if editing && !app.session.is_alert_visible() {
        let prefix: String = app.session.hours_input.chars().take(app.cursor_position).collect();
        let x = input_area.x + 1 + prefix.width() as u16;
        f.set_cursor_position((x.min(input_area.right().saturating_sub(2)), input_area.y + 1));
    }
}

fn draw_details(f: &mut Frame, details: &Details, locale: &LocaleConfig) {
    let size = f.area();
    let summary = details.summary();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(size);

    let header = Paragraph::new(format!(
        "{}: {} {}",
        locale.hours_worked,
        locale.month_name(summary.month),
        summary.year
    ))
    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(header, chunks[0]);

    let rows: Vec<Row> = summary
        .rows
        .iter()
        .map(|row| {
            let style = if row.hours_worked > 0 {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(row.date.format("%Y-%m-%d").to_string()),
                Cell::from(row.hours_worked.to_string()),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(rows, [Constraint::Length(12), Constraint::Length(16)])
        .header(
            Row::new(vec![locale.date, locale.hours_worked])
                .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        )
        .block(
            Block::default()
                .title(format!(" {}: {} ", locale.total, summary.total_hours))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(table, chunks[1]);

    let footer = Paragraph::new("[/]: Month | esc/q: Back")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(footer, chunks[2]);
}

fn draw_alert(f: &mut Frame, locale: &LocaleConfig) {
    let text_width = [locale.error_title, locale.validation_message, locale.cancel]
        .iter()
        .map(|s| s.width())
        .max()
        .unwrap_or(0) as u16;
    let area = centered_rect(text_width + 6, 7, f.area());

    let body = vec![
        Line::from(Span::styled(locale.error_title, Style::default().add_modifier(Modifier::BOLD))),
        Line::from(locale.validation_message),
        Line::from(""),
        Line::from(Span::styled(
            locale.cancel,
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
    ];

    f.render_widget(Clear, area);
    let alert = Paragraph::new(body).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().bg(Color::White).fg(Color::Black)),
    );
    f.render_widget(alert, area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
