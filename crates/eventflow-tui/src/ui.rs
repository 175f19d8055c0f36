use eventflow_core::DialogForm;
use eventflow_domain::{ColumnKind, PendingDialog, Task};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use crate::app::{App, AppMode, TRANSFORM_CATEGORIES};
use crate::theme;

pub fn render(app: &mut App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(frame.area());

    render_board(app, frame, chunks[0]);
    render_footer(app, frame, chunks[1]);

    match app.mode {
        AppMode::Normal => {}
        AppMode::AddTask => render_form_popup(app, frame, "Add Standard Event"),
        AppMode::TransformPick => render_transform_pick(app, frame),
        AppMode::TransformEdit => render_form_popup(app, frame, "Transform into Bank Event"),
        AppMode::ExecuteTask => render_execute_popup(app, frame),
        AppMode::MergeTasks => render_merge_popup(app, frame),
        AppMode::ExportBoard => render_form_popup(app, frame, "Export Tasks"),
    }
}

fn render_board(app: &App, frame: &mut Frame, area: Rect) {
    let columns = app.board.columns();
    if columns.is_empty() {
        return;
    }
    let constraints: Vec<Constraint> = columns
        .iter()
        .map(|_| Constraint::Ratio(1, columns.len() as u32))
        .collect();
    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (idx, column) in columns.iter().enumerate() {
        let focused = app.cursor.column == idx;
        let border = if focused {
            theme::focused_border()
        } else {
            theme::unfocused_border()
        };
        let tasks = app.board.tasks_in(column.kind);
        let items: Vec<ListItem> = tasks
            .iter()
            .enumerate()
            .map(|(row, task)| task_item(app, task, focused && app.cursor.row == row))
            .collect();

        let title = format!(" {} ({}) ", column.title, tasks.len());
        let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title).border_style(border));
        frame.render_widget(list, slots[idx]);
    }
}

fn task_item<'a>(app: &App, task: &'a Task, under_cursor: bool) -> ListItem<'a> {
    let grabbed = app
        .grab
        .as_deref()
        .is_some_and(|raw| raw == task.id.to_string());

    let style = if grabbed {
        theme::grabbed_row()
    } else if under_cursor {
        theme::selected_row()
    } else {
        theme::normal_text()
    };

    let mut spans = vec![Span::styled(task.name.clone(), style)];
    if let Some(sources) = &task.source_tasks {
        spans.push(Span::styled(
            format!(" [merged x{}]", sources.len()),
            ratatui::style::Style::default().fg(theme::MERGED_BADGE),
        ));
    }
    ListItem::new(Line::from(spans))
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let text = if let Some(status) = &app.status {
        Line::from(Span::styled(
            status.clone(),
            ratatui::style::Style::default().fg(theme::STATUS_TEXT),
        ))
    } else {
        let hints = match app.mode {
            AppMode::Normal if app.grab.is_some() => {
                "space/enter drop · arrows move target · esc cancel"
            }
            AppMode::Normal => {
                "q quit · arrows move · space grab/drop · c grab column · a add · d delete · m merge · x export"
            }
            AppMode::TransformPick => "j/k pick category · enter next · esc cancel",
            AppMode::MergeTasks => "j/k move · space select · enter merge (needs 2+) · esc cancel",
            _ => "tab next field · enter submit · esc cancel",
        };
        Line::from(Span::styled(hints, theme::label_text()))
    };

    let footer = Paragraph::new(text).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

fn popup_block(frame: &mut Frame, title: &str, percent_x: u16, percent_y: u16) -> Rect {
    let area = centered_rect(percent_x, percent_y, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(theme::focused_border())
        .style(theme::popup_bg());
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

fn render_form_popup(app: &App, frame: &mut Frame, title: &str) {
    let inner = popup_block(frame, title, 60, 70);
    render_form_fields(&app.form, frame, inner);
}

fn render_form_fields(form: &DialogForm, frame: &mut Frame, area: Rect) {
    let mut constraints: Vec<Constraint> = Vec::new();
    for _ in form.fields() {
        constraints.push(Constraint::Length(1)); // label
        constraints.push(Constraint::Length(1)); // input
    }
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(1)); // submit hint
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(constraints)
        .split(area);

    for (idx, field) in form.fields().iter().enumerate() {
        let label = if field.required {
            format!("{} *", field.label)
        } else {
            field.label.to_string()
        };
        frame.render_widget(Paragraph::new(label).style(theme::label_text()), rows[idx * 2]);

        let input_area = rows[idx * 2 + 1];
        frame.render_widget(
            Paragraph::new(field.input.as_str()).style(theme::normal_text()),
            input_area,
        );
        if idx == form.focused_index() {
            let x = input_area.x + field.input.cursor_chars() as u16;
            frame.set_cursor_position((x.min(input_area.right().saturating_sub(1)), input_area.y));
        }
    }

    let hint = if form.is_submittable() {
        Span::styled("enter: submit", theme::normal_text())
    } else {
        Span::styled(
            "fill required fields to submit",
            ratatui::style::Style::default().fg(theme::DISABLED_TEXT),
        )
    };
    frame.render_widget(
        Paragraph::new(Line::from(hint)),
        rows[rows.len() - 1],
    );
}

fn render_transform_pick(app: &App, frame: &mut Frame) {
    let inner = popup_block(frame, "Transform Category", 40, 40);

    let items: Vec<ListItem> = TRANSFORM_CATEGORIES
        .iter()
        .enumerate()
        .map(|(idx, category)| {
            let style = if idx == app.category_cursor {
                theme::selected_row()
            } else {
                theme::normal_text()
            };
            ListItem::new(Span::styled(*category, style))
        })
        .collect();

    frame.render_widget(List::new(items), inner);
}

fn render_merge_popup(app: &App, frame: &mut Frame) {
    let inner = popup_block(frame, "Merge Personal Events", 50, 60);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let person = app.board.tasks_in(ColumnKind::Person);
    let items: Vec<ListItem> = person
        .iter()
        .enumerate()
        .map(|(idx, task)| {
            let mark = if app.merge_select.is_picked(idx) {
                "[x]"
            } else {
                "[ ]"
            };
            let style = if idx == app.merge_select.cursor() {
                theme::selected_row()
            } else {
                theme::normal_text()
            };
            ListItem::new(Span::styled(format!("{mark} {}", task.name), style))
        })
        .collect();
    frame.render_widget(List::new(items), rows[0]);

    let hint = if app.merge_select.meets_minimum(2) {
        Span::styled(
            format!("enter: merge {} tasks", app.merge_select.count()),
            theme::normal_text(),
        )
    } else {
        Span::styled(
            "select at least 2 tasks",
            ratatui::style::Style::default().fg(theme::DISABLED_TEXT),
        )
    };
    frame.render_widget(Paragraph::new(Line::from(hint)), rows[1]);
}

fn render_execute_popup(app: &App, frame: &mut Frame) {
    let inner = popup_block(frame, "Execute Event", 60, 80);

    // When the pending task is a merge result, list what it was built from.
    let sources: Vec<String> = match app.board.pending() {
        PendingDialog::Executing { task, .. } => app
            .board
            .task(*task)
            .and_then(|t| t.source_tasks.as_ref())
            .map(|sources| sources.iter().map(|s| format!("- {}", s.name)).collect())
            .unwrap_or_default(),
        _ => Vec::new(),
    };

    if sources.is_empty() {
        render_form_fields(&app.form, frame, inner);
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(sources.len() as u16),
        ])
        .split(inner);

    render_form_fields(&app.form, frame, rows[0]);
    frame.render_widget(
        Paragraph::new("Merged from:").style(theme::label_text()),
        rows[1],
    );
    let lines: Vec<Line> = sources.into_iter().map(Line::from).collect();
    frame.render_widget(Paragraph::new(lines).style(theme::normal_text()), rows[2]);
}
