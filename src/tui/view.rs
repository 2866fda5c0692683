// File: src/tui/view.rs
use crate::color::{self, Rgba};
use crate::gender::GenderTone;
use crate::model::Character;
use crate::screen::detail::DetailScreen;
use crate::screen::list::{LIST_TITLE, ViewStatus};
use crate::tui::state::AppState;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

fn solid(c: Rgba) -> Color {
    let (r, g, b) = c.over(color::ROW_BACKGROUND);
    Color::Rgb(r, g, b)
}

/// Gender label rendered as a coloured pill.
fn gender_badge(gender: &str) -> Span<'static> {
    let tone = GenderTone::from_label(gender);
    Span::styled(
        format!(" {} ", gender),
        Style::default()
            .fg(solid(tone.text_color()))
            .bg(solid(tone.background_color()))
            .add_modifier(Modifier::BOLD),
    )
}

fn character_row(c: &Character) -> ListItem<'static> {
    let header = Line::from(vec![
        Span::styled(c.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        gender_badge(&c.gender),
    ]);
    let species = Line::from(Span::styled(
        format!("  {}", c.species),
        Style::default().fg(Color::DarkGray),
    ));
    ListItem::new(vec![header, species, Line::from("")])
}

pub fn draw(f: &mut Frame, state: &mut AppState) {
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(f.area());

    match &state.detail {
        Some(detail) => draw_detail(f, v_chunks[0], detail, state.detail_scroll),
        None => draw_list(f, v_chunks[0], state),
    }

    // --- Footer ---
    let f_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(v_chunks[1]);
    let status = Paragraph::new(state.message.clone())
        .style(Style::default().fg(Color::Cyan))
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::TOP | Borders::BOTTOM)
                .title(" Status "),
        );

    let help_str = if state.in_detail() {
        "Esc:Back | j/k:Scroll | q:Quit"
    } else {
        "Enter:Open | j/k:Move | r:Refresh | q:Quit"
    };
    let help = Paragraph::new(help_str)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::RIGHT | Borders::TOP | Borders::BOTTOM)
                .title(" Actions "),
        );
    f.render_widget(status, f_chunks[0]);
    f.render_widget(help, f_chunks[1]);
}

fn draw_list(f: &mut Frame, area: Rect, state: &mut AppState) {
    let title = match state.list.status() {
        ViewStatus::Success(characters) => format!(" {} ({}) ", LIST_TITLE, characters.len()),
        _ => format!(" {} ", LIST_TITLE),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(Color::Yellow));

    match state.list.status() {
        ViewStatus::Loading => {
            let p = Paragraph::new("Loading...")
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(p, area);
        }
        ViewStatus::Error(message) => {
            let p = Paragraph::new(message.clone())
                .style(Style::default().fg(solid(color::ERROR_TEXT)))
                .wrap(Wrap { trim: true })
                .block(block);
            f.render_widget(p, area);
        }
        ViewStatus::Success(characters) => {
            let items: Vec<ListItem> = characters.iter().map(character_row).collect();
            let list = List::new(items)
                .block(block)
                .highlight_style(
                    Style::default()
                        .add_modifier(Modifier::BOLD)
                        .bg(Color::Blue),
                );
            f.render_stateful_widget(list, area, &mut state.list_state);
        }
    }
}

fn draw_detail(f: &mut Frame, area: Rect, detail: &DetailScreen, scroll: u16) {
    let c = detail.character();
    let label = Style::default().add_modifier(Modifier::BOLD);
    let value = Style::default().fg(solid(color::SECONDARY_TEXT));

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Image: ", label),
            Span::styled(c.image.clone(), Style::default().fg(Color::Blue)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                c.name.clone(),
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .add_modifier(Modifier::UNDERLINED),
            ),
            Span::raw("  "),
            gender_badge(&c.gender),
        ]),
        Line::from(""),
    ];

    for (key, val) in c.properties() {
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", key), label),
            Span::styled(val.to_string(), value),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Episodes:", label)));
    let episode_style = if detail.is_loading() {
        Style::default().fg(Color::Yellow)
    } else {
        value
    };
    for title in detail.episode_lines() {
        lines.push(Line::from(Span::styled(format!("  {}", title), episode_style)));
    }

    let p = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" < {} ", detail.title()))
                .border_style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(p, area);
}
