//! Event handling for the TUI

use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::app::{App, Mode, Tab};

/// Poll for events with timeout
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Result of handling an event
#[derive(Debug, PartialEq, Eq)]
pub enum HandleResult {
    /// Continue running
    Continue,
    /// Quit the application
    Quit,
}

/// Handle a key event
pub fn handle_key(app: &mut App, key: KeyEvent) -> HandleResult {
    // Global quit shortcuts (Ctrl+C, Ctrl+Q)
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => return HandleResult::Quit,
            _ => {}
        }
    }

    app.clear_status();
    match app.mode {
        Mode::Normal => handle_normal_mode(app, key),
        Mode::Edit => handle_edit_mode(app, key),
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) -> HandleResult {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return HandleResult::Quit,

        // Tabs
        KeyCode::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            if let Some(tab) = Tab::from_index(index) {
                app.switch_tab(tab);
            }
        }
        KeyCode::Tab => app.next_tab(),
        KeyCode::BackTab => app.prev_tab(),

        // Reduced-motion preference
        KeyCode::Char('m') => app.toggle_reduced_motion(),

        // Project listing
        KeyCode::Char('j') | KeyCode::Down if app.tab == Tab::Projects => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up if app.tab == Tab::Projects => app.select_prev(),
        KeyCode::Char('l') | KeyCode::Right if app.tab == Tab::Projects => app.next_filter(),
        KeyCode::Char('h') | KeyCode::Left if app.tab == Tab::Projects => app.prev_filter(),

        // Page scroll
        KeyCode::PageDown => app.scroll(1),
        KeyCode::PageUp => app.scroll(-1),

        // About disclosure
        KeyCode::Char(' ') | KeyCode::Enter if app.tab == Tab::About => app.toggle_disclosure(),

        // Contact form
        KeyCode::Char('i') | KeyCode::Enter if app.tab == Tab::Contact => app.start_editing(),

        _ => {}
    }
    HandleResult::Continue
}

/// Keys while typing into the contact form
fn handle_edit_mode(app: &mut App, key: KeyEvent) -> HandleResult {
    match key.code {
        KeyCode::Esc => app.exit_mode(),
        KeyCode::Tab => app.next_field(),
        KeyCode::Enter => app.submit_form(),
        KeyCode::Backspace => app.field_backspace(),
        KeyCode::Char(c) => app.field_insert(c),
        _ => {}
    }
    HandleResult::Continue
}

/// Handle a mouse event: motion drives the glows, clicks activate surfaces
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            app.pointer_moved(mouse.column, mouse.row);
        }
        MouseEventKind::Down(MouseButton::Left) => {
            app.pointer_moved(mouse.column, mouse.row);
            app.click(mouse.column, mouse.row);
        }
        MouseEventKind::ScrollDown => app.scroll(1),
        MouseEventKind::ScrollUp => app.scroll(-1),
        _ => {}
    }
}
