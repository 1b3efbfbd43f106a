use eduplan_core::{SortStrategy, Status, TaskRepository};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Row, Table, Wrap},
    Frame,
};

use crate::tui::app::{App, InputMode};

pub fn draw<R: TaskRepository>(f: &mut Frame, app: &mut App<R>) {
    let size = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(0)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Content
            Constraint::Length(3), // Input / message
            Constraint::Length(1), // Footer/Help
        ])
        .split(size);

    let header = Paragraph::new("EDUPLAN")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(header, main_chunks[0]);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(main_chunks[1]);

    draw_task_list(f, app, content_chunks[0]);
    draw_detail_view(f, app, content_chunks[1]);
    draw_input(f, app, main_chunks[2]);

    let footer = Paragraph::new("j/k: Навігація | пробіл: Статус | d: Видалити | s: Сортування | a: Додати | q: Вихід")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(footer, main_chunks[3]);
}

fn status_style(status: Status) -> (&'static str, Style) {
    match status {
        Status::Planned => ("☐", Style::default().fg(Color::Yellow)),
        Status::InProgress => ("▶", Style::default().fg(Color::Cyan)),
        Status::Completed => ("✔", Style::default().fg(Color::Green)),
    }
}

fn draw_task_list<R: TaskRepository>(f: &mut Frame, app: &mut App<R>, area: Rect) {
    let rows: Vec<Row> = app
        .tasks
        .iter()
        .map(|task| {
            let (icon, style) = status_style(task.status);
            Row::new(vec![
                Span::raw(task.id.to_string()),
                Span::styled(icon, style),
                Span::raw(task.due_date.format("%d.%m").to_string()),
                Span::raw(task.course.clone()),
                Span::styled(task.title.clone(), Style::default().add_modifier(Modifier::BOLD)),
            ])
        })
        .collect();

    let title = match app.sort {
        SortStrategy::DueDate => " Завдання (за терміном) ",
        SortStrategy::Id => " Завдання (за ID) ",
    };

    let table = Table::new(
        rows,
        [
            Constraint::Length(4),  // Id
            Constraint::Length(3),  // Status
            Constraint::Length(6),  // Due
            Constraint::Length(16), // Course
            Constraint::Min(10),    // Title
        ],
    )
    .header(Row::new(vec!["ID", "Ст", "Термін", "Курс", "Завдання"]).style(Style::default().fg(Color::Yellow)))
    .block(Block::default().title(title).borders(Borders::ALL).border_type(BorderType::Rounded))
    .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
    .highlight_symbol(">> ");

    f.render_stateful_widget(table, area, &mut app.state);
}

fn draw_detail_view<R: TaskRepository>(f: &mut Frame, app: &App<R>, area: Rect) {
    let block = Block::default().title(" Деталі ").borders(Borders::ALL).border_type(BorderType::Rounded);

    let Some(task) = app.selected_task() else {
        f.render_widget(block, area);
        return;
    };

    let (_, style) = status_style(task.status);
    let detail_text = vec![
        Line::from(vec![
            Span::styled("Назва: ", Style::default().fg(Color::Blue)),
            Span::styled(task.title.as_str(), Style::default().add_modifier(Modifier::BOLD)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("ID: ", Style::default().fg(Color::DarkGray)),
            Span::raw(task.id.to_string()),
        ]),
        Line::from(vec![
            Span::styled("Статус: ", Style::default().fg(Color::Blue)),
            Span::styled(task.status.label(), style),
        ]),
        Line::from(vec![
            Span::styled("Курс: ", Style::default().fg(Color::Blue)),
            Span::raw(task.course.as_str()),
        ]),
        Line::from(vec![
            Span::styled("Термін: ", Style::default().fg(Color::Blue)),
            Span::raw(task.due_date.format("%d.%m.%Y %H:%M").to_string()),
        ]),
    ];

    let detail_block = Paragraph::new(detail_text).block(block).wrap(Wrap { trim: true });
    f.render_widget(detail_block, area);
}

fn draw_input<R: TaskRepository>(f: &mut Frame, app: &App<R>, area: Rect) {
    let (text, title, style) = match app.input_mode {
        InputMode::Adding => (
            app.input.clone(),
            " Додати: назва | курс | дата ",
            Style::default().fg(Color::Yellow),
        ),
        InputMode::Normal => (
            app.message.clone().unwrap_or_default(),
            " Повідомлення ",
            Style::default().fg(Color::DarkGray),
        ),
    };

    let input = Paragraph::new(text)
        .style(style)
        .block(Block::default().title(title).borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(input, area);

    if let InputMode::Adding = app.input_mode {
        f.set_cursor_position((cursor_column(area, app.cursor_position), area.y + 1));
    }
}

/// Column for the input cursor, clamped inside the bordered box.
fn cursor_column(area: Rect, cursor_position: usize) -> u16 {
    let offset = u16::try_from(cursor_position).unwrap_or(u16::MAX);
    area.x
        .saturating_add(1)
        .saturating_add(offset)
        .min(area.right().saturating_sub(2))
}
