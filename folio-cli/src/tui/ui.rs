//! UI rendering using ratatui
//!
//! Every mouse-reactive surface is registered with the app as it is drawn so
//! the next pointer event is tested against the current layout. A lit glow is
//! painted as a short highlight at the published `--glow-x`/`--glow-y` cell.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use folio_core::catalog::{category_label, filter_tabs, ProjectRecord};
use folio_core::glow::ElementRect;

use super::app::{App, Feedback, FormField, Mode, Surface, Tab};

/// Primary accent color
const ACCENT: Color = Color::Cyan;
/// Secondary color for less important elements
const SECONDARY: Color = Color::DarkGray;
/// Highlight color for selected items
const HIGHLIGHT: Color = Color::Yellow;
/// Success color
const SUCCESS: Color = Color::Green;
/// Validation errors
const ERROR: Color = Color::Red;
/// Dim text color
const DIM: Color = Color::Rgb(100, 100, 100);
/// Glow spot background
const GLOW: Color = Color::Rgb(40, 90, 110);

const CARD_HEIGHT: u16 = 4;

/// Render the entire UI
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    app.begin_frame(area.width, area.height);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(1), // Backdrop
            Constraint::Min(5),    // Page
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    render_header(frame, app, chunks[0]);
    render_backdrop(frame, app, chunks[1]);

    match app.tab {
        Tab::Home => render_home(frame, app, chunks[2]),
        Tab::Projects => render_projects(frame, app, chunks[2]),
        Tab::About => render_about(frame, app, chunks[2]),
        Tab::Contact => render_contact(frame, app, chunks[2]),
    }

    render_status_bar(frame, app, chunks[3]);
}

fn element_rect(area: Rect) -> ElementRect {
    ElementRect::new(
        f64::from(area.x),
        f64::from(area.y),
        f64::from(area.width),
        f64::from(area.height),
    )
}

fn is_lit(app: &App, surface: Surface) -> bool {
    app.lit_glow(surface).is_some()
}

/// Map a percentage onto a cell offset inside `extent` cells.
fn percent_to_cell(percent: f64, extent: u16) -> u16 {
    if extent == 0 {
        return 0;
    }
    let cell = (percent / 100.0 * f64::from(extent)).floor();
    cell.clamp(0.0, f64::from(extent - 1)) as u16
}

/// Paint the glow spot of `surface` inside `area`.
fn paint_glow(frame: &mut Frame, app: &App, surface: Surface, area: Rect) {
    let Some(state) = app.lit_glow(surface) else {
        return;
    };
    let x = area.x + percent_to_cell(state.glow_x, area.width);
    let y = match state.glow_y {
        Some(gy) => area.y + percent_to_cell(gy, area.height),
        None => area.y + area.height / 2,
    };
    let left = x.saturating_sub(2).max(area.x);
    let right = (x + 2).min(area.right().saturating_sub(1));
    let buffer = frame.buffer_mut();
    for cx in left..=right {
        if let Some(cell) = buffer.cell_mut((cx, y)) {
            cell.set_bg(GLOW);
        }
    }
}

fn surface_block<'a>(
    app: &App,
    surface: Surface,
    title: impl Into<Line<'a>>,
    selected: bool,
) -> Block<'a> {
    let border = if selected {
        HIGHLIGHT
    } else if is_lit(app, surface) {
        ACCENT
    } else {
        SECONDARY
    };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

/// Draw a surface, register its hit area and paint its glow.
fn draw_surface(
    frame: &mut Frame,
    app: &mut App,
    surface: Surface,
    area: Rect,
    widget: Paragraph,
) {
    app.register(surface, element_rect(area));
    frame.render_widget(widget, area);
    paint_glow(frame, app, surface, area);
}

// === Header ===

fn render_header(frame: &mut Frame, app: &mut App, area: Rect) {
    let compact = app.header_compact();
    let title = if compact {
        format!(" {} ", app.portfolio.profile.first_name())
    } else {
        format!(" {} · {} ", app.portfolio.profile.name, app.portfolio.profile.title)
    };
    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if compact { ACCENT } else { SECONDARY }));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(inner);

    let count = Tab::ALL.len();
    let nav_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, count as u32); count])
        .split(halves[0]);

    for (tab, chunk) in Tab::ALL.into_iter().zip(nav_chunks.iter()) {
        let i = tab.index();
        let label = app.nav_label(tab).to_string();
        let style = if app.tab == tab {
            Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD)
        } else if is_lit(app, Surface::Nav(i)) {
            Style::default().fg(ACCENT)
        } else {
            Style::default().fg(Color::White)
        };
        let widget = Paragraph::new(Line::from(Span::styled(format!("{}:{}", i + 1, label), style)))
            .alignment(Alignment::Center);
        draw_surface(frame, app, Surface::Nav(i), *chunk, widget);
    }

    let motion = if app.motion.is_reduced() {
        "motion: reduced"
    } else {
        "motion: full"
    };
    let right = Line::from(vec![
        Span::styled(motion, Style::default().fg(DIM)),
        Span::raw("  "),
        Span::styled(app.locale.code(), Style::default().fg(DIM)),
        Span::raw("  "),
        Span::styled(app.clock_text.as_str(), Style::default().fg(ACCENT)),
        Span::raw(" "),
    ]);
    frame.render_widget(Paragraph::new(right).alignment(Alignment::Right), halves[1]);
}

/// A sparse star field that drifts with scroll and leans toward the cursor.
fn render_backdrop(frame: &mut Frame, app: &App, area: Rect) {
    let backdrop = app.parallax.frame();
    let offset = backdrop.scroll_offset.round().max(0.0) as usize;
    let star = usize::from(percent_to_cell(backdrop.cursor_x, area.width));

    let spans: Vec<Span> = (0..usize::from(area.width))
        .map(|i| {
            if i == star {
                Span::styled("✦", Style::default().fg(ACCENT))
            } else if (i + offset) % 9 == 0 {
                Span::styled("·", Style::default().fg(DIM))
            } else {
                Span::raw(" ")
            }
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

// === Home ===

fn render_home(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(CARD_HEIGHT)])
        .split(area);

    let profile = &app.portfolio.profile;
    let skills = app.portfolio.skills.preview().join(" · ");
    let intro = Text::from(vec![
        Line::from(Span::styled(
            profile.name.as_str(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(profile.title.as_str()),
        Line::from(""),
        Line::from(Span::styled(profile.tagline.as_str(), Style::default().fg(HIGHLIGHT))),
        Line::from(profile.bio_short.as_str()),
        Line::from(Span::styled(skills, Style::default().fg(DIM))),
    ]);
    frame.render_widget(
        Paragraph::new(intro)
            .block(Block::default().borders(Borders::NONE))
            .wrap(Wrap { trim: true }),
        chunks[0],
    );

    let featured: Vec<(usize, ProjectRecord)> = app
        .featured_projects()
        .into_iter()
        .filter_map(|p| app.project_slot(&p.slug).map(|slot| (slot, p.clone())))
        .collect();
    if featured.is_empty() {
        return;
    }
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, featured.len() as u32); featured.len()])
        .split(chunks[1]);
    for ((slot, project), col) in featured.iter().zip(cols.iter()) {
        let card = Rect {
            height: col.height.min(CARD_HEIGHT + 2),
            ..*col
        };
        render_card(frame, app, *slot, project, card, false);
    }
}

fn render_card(
    frame: &mut Frame,
    app: &mut App,
    slot: usize,
    project: &ProjectRecord,
    area: Rect,
    selected: bool,
) {
    let surface = Surface::Card(slot);
    let block = surface_block(
        app,
        surface,
        Span::styled(
            format!(" {} ", project.title),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        selected,
    );
    let body = Text::from(vec![
        Line::from(vec![
            Span::styled(project.year.to_string(), Style::default().fg(HIGHLIGHT)),
            Span::raw(" · "),
            Span::styled(
                category_label(&project.category).to_string(),
                Style::default().fg(ACCENT),
            ),
        ]),
        Line::from(Span::styled(project.headline().to_string(), Style::default().fg(DIM))),
    ]);
    let widget = Paragraph::new(body).block(block).wrap(Wrap { trim: true });
    draw_surface(frame, app, surface, area, widget);
}

// === Projects ===

fn render_projects(frame: &mut Frame, app: &mut App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(26),
            Constraint::Min(20),
            Constraint::Percentage(40),
        ])
        .split(area);

    render_filter_pills(frame, app, columns[0]);

    let listing: Vec<(usize, ProjectRecord)> = app
        .visible_projects()
        .into_iter()
        .filter_map(|p| app.project_slot(&p.slug).map(|slot| (slot, p.clone())))
        .collect();

    let list_block = Block::default()
        .title(format!(" {} ({}) ", filter_tabs()[app.filter_index].label, listing.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(SECONDARY));
    let inner = list_block.inner(columns[1]);
    frame.render_widget(list_block, columns[1]);

    let fit = usize::from((inner.height / CARD_HEIGHT).max(1));
    let start = app.selected_project.saturating_sub(fit - 1);
    let window = listing.iter().enumerate().skip(start).take(fit);
    for (row, (i, (slot, project))) in window.enumerate() {
        let card = Rect {
            x: inner.x,
            y: inner.y + row as u16 * CARD_HEIGHT,
            width: inner.width,
            height: CARD_HEIGHT.min(inner.height),
        };
        let selected = i == app.selected_project;
        render_card(frame, app, *slot, project, card, selected);
    }

    let selected = app.selected().cloned();
    render_detail(frame, app, selected.as_ref(), columns[2]);
}

fn render_filter_pills(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Filter ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(SECONDARY));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    for (i, tab) in filter_tabs().iter().enumerate() {
        let y = inner.y + i as u16;
        if y >= inner.bottom() {
            break;
        }
        let pill = Rect {
            y,
            height: 1,
            ..inner
        };
        let style = if i == app.filter_index {
            Style::default().fg(Color::Black).bg(HIGHLIGHT)
        } else if is_lit(app, Surface::Pill(i)) {
            Style::default().fg(ACCENT)
        } else {
            Style::default().fg(Color::White)
        };
        let widget = Paragraph::new(Line::from(Span::styled(format!(" {} ", tab.label), style)));
        draw_surface(frame, app, Surface::Pill(i), pill, widget);
    }
}

fn bullet_lines<'a>(heading: &'a str, items: &'a [String]) -> Vec<Line<'a>> {
    if items.is_empty() {
        return Vec::new();
    }
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(heading, Style::default().fg(ACCENT))),
    ];
    lines.extend(items.iter().map(|item| Line::from(format!("  • {item}"))));
    lines
}

fn render_detail(frame: &mut Frame, app: &mut App, project: Option<&ProjectRecord>, area: Rect) {
    let block = surface_block(app, Surface::DetailPanel, " Case Study ", false);
    let Some(project) = project else {
        let widget = Paragraph::new("No projects in this category.").block(block);
        draw_surface(frame, app, Surface::DetailPanel, area, widget);
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            project.title.as_str(),
            Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("{} · {}", project.year, category_label(&project.category))),
        Line::from(""),
        Line::from(project.headline()),
    ];
    if let Some(impact) = &project.impact {
        lines.push(Line::from(Span::styled(impact.as_str(), Style::default().fg(DIM))));
    }
    if !project.stack.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            project.stack.join(" · "),
            Style::default().fg(ACCENT),
        )));
    }
    if let Some(study) = &project.extended_case_study {
        lines.push(Line::from(""));
        lines.push(Line::from(study.what_it_is.as_str()));
        lines.extend(bullet_lines("Key features", &study.key_features));
        lines.extend(bullet_lines("Outcomes", &study.outcomes));
    } else if let Some(study) = &project.case_study {
        lines.push(Line::from(""));
        lines.push(Line::from(study.overview.as_str()));
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Problem: ", Style::default().fg(ACCENT)),
            Span::raw(study.problem.as_str()),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Approach: ", Style::default().fg(ACCENT)),
            Span::raw(study.approach.as_str()),
        ]));
        lines.extend(bullet_lines("Features", &study.features));
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Outcome: ", Style::default().fg(ACCENT)),
            Span::raw(study.outcome.as_str()),
        ]));
    }
    if let Some(url) = project.source_url() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(url, Style::default().fg(DIM))));
    }

    let widget = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: true });
    draw_surface(frame, app, Surface::DetailPanel, area, widget);
}

// === About ===

fn render_about(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(3)])
        .split(area);

    let portfolio = app.portfolio.clone();
    let mut lines = vec![
        Line::from(Span::styled(
            format!("{} {}", portfolio.profile.first_name(), portfolio.profile.last_name()),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(portfolio.profile.bio.as_str()),
    ];
    if let Some(edu) = &portfolio.education {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Education", Style::default().fg(ACCENT))));
        lines.push(Line::from(format!("{} · {}", edu.university, edu.period)));
        let gpa = edu
            .gpa
            .as_deref()
            .map(|g| format!(" (GPA {g})"))
            .unwrap_or_default();
        lines.push(Line::from(format!("{}{}", edu.degree, gpa)));
    }

    if app.disclosure.is_expanded() {
        for job in &portfolio.experience {
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled(job.title.as_str(), Style::default().fg(HIGHLIGHT)),
                Span::raw(format!(" @ {} ({})", job.company, job.period)),
            ]));
            lines.extend(job.highlights.iter().map(|h| Line::from(format!("  • {h}"))));
        }
        for (group, items) in portfolio.skills.groups() {
            lines.push(Line::from(vec![
                Span::styled(format!("{group}: "), Style::default().fg(ACCENT)),
                Span::raw(items.join(", ")),
            ]));
        }
    }

    let block = surface_block(app, Surface::AboutPanel, " About ", false);
    let widget = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: true });
    draw_surface(frame, app, Surface::AboutPanel, chunks[0], widget);

    let label = app.disclosure.label(app.locale);
    let button_area = centered_width(chunks[1], label.chars().count() as u16 + 6);
    let block = surface_block(app, Surface::DisclosureButton, "", false);
    let widget = Paragraph::new(label)
        .alignment(Alignment::Center)
        .block(block);
    draw_surface(frame, app, Surface::DisclosureButton, button_area, widget);
}

fn centered_width(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

// === Contact ===

fn render_contact(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(3), Constraint::Length(4)])
        .split(area);

    let editing = app.mode == Mode::Edit;
    let mut lines = vec![
        Line::from(Span::styled(
            app.portfolio.profile.email.clone(),
            Style::default().fg(ACCENT),
        )),
        Line::from(""),
    ];
    for field in [FormField::Name, FormField::Email, FormField::Message] {
        let value = match field {
            FormField::Name => &app.form.name,
            FormField::Email => &app.form.email,
            FormField::Message => &app.form.message,
        };
        let focused = editing && app.form_field == field;
        let label_style = if focused {
            Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DIM)
        };
        let cursor = if focused { "|" } else { "" };
        lines.push(Line::from(vec![
            Span::styled(format!("{:>8}: ", field.label()), label_style),
            Span::raw(format!("{value}{cursor}")),
        ]));
    }

    let title = if editing { " Contact [EDIT] " } else { " Contact " };
    let block = surface_block(app, Surface::ContactPanel, title, editing);
    let widget = Paragraph::new(Text::from(lines)).block(block);
    draw_surface(frame, app, Surface::ContactPanel, chunks[0], widget);

    let button_area = centered_width(chunks[1], 12);
    let block = surface_block(app, Surface::SendButton, "", false);
    let widget = Paragraph::new("Send")
        .alignment(Alignment::Center)
        .block(block);
    draw_surface(frame, app, Surface::SendButton, button_area, widget);

    let feedback = match &app.feedback {
        Some(Feedback::Sent(msg)) => Text::from(Line::from(Span::styled(
            msg.clone(),
            Style::default().fg(SUCCESS),
        ))),
        Some(Feedback::Errors(errors)) => Text::from(
            errors
                .iter()
                .map(|e| Line::from(Span::styled(e.clone(), Style::default().fg(ERROR))))
                .collect::<Vec<_>>(),
        ),
        None => Text::default(),
    };
    frame.render_widget(Paragraph::new(feedback), chunks[2]);
}

// === Status bar ===

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mode_indicator = match app.mode {
        Mode::Normal => Span::styled(" NORMAL ", Style::default().bg(ACCENT).fg(Color::Black)),
        Mode::Edit => Span::styled(" EDIT ", Style::default().bg(SUCCESS).fg(Color::Black)),
    };

    let help_text = match (app.mode, app.tab) {
        (Mode::Edit, _) => "Tab:next field  Enter:send  Esc:done",
        (Mode::Normal, Tab::Projects) => "1-4:page  j/k:project  h/l:filter  m:motion  q:quit",
        (Mode::Normal, Tab::About) => "1-4:page  Space:more/less  m:motion  q:quit",
        (Mode::Normal, Tab::Contact) => "1-4:page  i:edit  m:motion  q:quit",
        (Mode::Normal, Tab::Home) => "1-4:page  Tab:next  m:motion  q:quit",
    };

    let status = match (&app.status_message, app.active_glow()) {
        (Some(msg), _) => msg.clone(),
        (None, Some((_, css))) => css,
        (None, None) => String::new(),
    };

    let line = Line::from(vec![
        mode_indicator,
        Span::raw(" "),
        Span::styled(help_text, Style::default().fg(DIM)),
        Span::raw(" "),
        Span::styled(status, Style::default().fg(HIGHLIGHT)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_to_cell_clamps() {
        assert_eq!(percent_to_cell(0.0, 10), 0);
        assert_eq!(percent_to_cell(50.0, 10), 5);
        assert_eq!(percent_to_cell(100.0, 10), 9);
        assert_eq!(percent_to_cell(-30.0, 10), 0);
        assert_eq!(percent_to_cell(250.0, 10), 9);
        assert_eq!(percent_to_cell(50.0, 0), 0);
    }

    #[test]
    fn test_centered_width() {
        let area = Rect::new(10, 3, 40, 3);
        assert_eq!(centered_width(area, 10), Rect::new(25, 3, 10, 3));
        assert_eq!(centered_width(area, 100), area);
    }
}
