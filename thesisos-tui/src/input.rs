//! Keyboard input dispatch: overlays → editing → global keys → field keys.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppState, Field, Mode, Overlay, Tab};

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.running = false;
        return;
    }

    // 1. Overlays consume input first.
    match app.overlay {
        Overlay::Welcome | Overlay::Help => {
            app.overlay = Overlay::None;
            return;
        }
        Overlay::ErrorHistory => {
            handle_error_overlay(app, key);
            return;
        }
        Overlay::None => {}
    }

    // 2. Text entry swallows everything but Esc/Enter.
    if app.mode == Mode::Editing {
        handle_editing_key(app, key);
        return;
    }

    // 3. Global keys.
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('?') => {
            app.overlay = Overlay::Help;
            return;
        }
        KeyCode::Char('e') => {
            app.error_scroll = 0;
            app.overlay = Overlay::ErrorHistory;
            return;
        }
        KeyCode::Char('g') => {
            app.request_submit();
            return;
        }
        KeyCode::Char(c @ '1'..='6') if app.has_thesis() => {
            if let Some(tab) = Tab::from_index(c as usize - '1' as usize) {
                app.set_tab(tab);
            }
            return;
        }
        KeyCode::Tab if app.has_thesis() => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.set_tab(app.active_tab.prev());
            } else {
                app.set_tab(app.active_tab.next());
            }
            return;
        }
        KeyCode::BackTab if app.has_thesis() => {
            app.set_tab(app.active_tab.prev());
            return;
        }
        _ => {}
    }

    // 4. Focused field.
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_cursor(1),
        KeyCode::Char('k') | KeyCode::Up => app.move_cursor(-1),
        KeyCode::Char('l') | KeyCode::Right => app.adjust(1),
        KeyCode::Char('h') | KeyCode::Left => app.adjust(-1),
        KeyCode::Char(' ') => app.toggle_commodity(),
        KeyCode::Enter => app.activate(),
        _ => {}
    }
}

fn handle_editing_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.mode = Mode::Normal,
        KeyCode::Enter => {
            if app.focused() == Field::Ticker {
                app.request_submit();
            } else {
                app.type_char('\n');
            }
        }
        KeyCode::Backspace => app.backspace(),
        KeyCode::Char(c) => app.type_char(c),
        _ => {}
    }
}

fn handle_error_overlay(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('e') => {
            app.overlay = Overlay::None;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            if app.error_scroll + 1 < app.error_history.len() {
                app.error_scroll += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.error_scroll = app.error_scroll.saturating_sub(1);
        }
        _ => {}
    }
}
