use macroquad::prelude::*;
use tracing::warn;

use crate::application::GameState;
use crate::ui::{Button, ButtonAction, cell_at};

/// Apply a control action to the state
pub fn apply_action(state: GameState, action: ButtonAction) -> GameState {
    match action {
        ButtonAction::PlayPause => state.toggle_running(),
        ButtonAction::Slower => state.adjust_speed(1),
        ButtonAction::Faster => state.adjust_speed(-1),
        ButtonAction::Clear => state.clear(),
        ButtonAction::Randomize => state.randomize(),
    }
}

/// Toggle the cell under `pos`, if any. Clicks outside the board are ignored.
pub fn click_cell(state: &mut GameState, pos: (f32, f32)) {
    let Some((row, col)) = cell_at(pos, state.grid.dimensions()) else {
        return;
    };
    if let Err(err) = state.toggle_cell(row, col) {
        warn!(%err, "ignoring click");
    }
}

/// Toggle the clicked cell on left mouse press
pub fn handle_cell_click(state: &mut GameState, mouse_pos: (f32, f32)) {
    if is_mouse_button_pressed(MouseButton::Left) {
        click_cell(state, mouse_pos);
    }
}

/// Process keyboard input functionally
pub fn process_keyboard_input(state: GameState) -> GameState {
    let bindings: [(KeyCode, ButtonAction); 5] = [
        (KeyCode::Space, ButtonAction::PlayPause),
        (KeyCode::Down, ButtonAction::Slower),
        (KeyCode::Up, ButtonAction::Faster),
        (KeyCode::C, ButtonAction::Clear),
        (KeyCode::R, ButtonAction::Randomize),
    ];

    bindings.iter().fold(state, |s, &(key, action)| {
        if is_key_pressed(key) { apply_action(s, action) } else { s }
    })
}

/// Process button clicks functionally
pub fn process_button_clicks(state: GameState, buttons: &[Button], mouse_pos: (f32, f32)) -> GameState {
    buttons.iter().fold(state, |s, btn| {
        if btn.is_clicked(mouse_pos) {
            apply_action(s, btn.action())
        } else {
            s
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::SimulationConfig;
    use crate::domain::Cell;
    use crate::ui::cell_position;
    use std::time::Duration;

    fn state() -> GameState {
        GameState::new(SimulationConfig::default().with_seed(9)).unwrap()
    }

    #[test]
    fn test_click_toggles_cell_under_cursor() {
        let mut s = state();
        let (x, y) = cell_position(4, 7);
        click_cell(&mut s, (x + 5.0, y + 5.0));
        assert_eq!(s.grid.get(4, 7), Some(Cell::Alive));
        click_cell(&mut s, (x + 5.0, y + 5.0));
        assert_eq!(s.grid.get(4, 7), Some(Cell::Dead));
    }

    #[test]
    fn test_click_off_board_is_ignored() {
        let mut s = state();
        click_cell(&mut s, (0.0, 0.0));
        click_cell(&mut s, (5000.0, 5000.0));
        assert_eq!(s.grid.population(), 0);
    }

    #[test]
    fn test_actions_drive_state() {
        let s = apply_action(state(), ButtonAction::Randomize);
        assert!(s.grid.population() > 0);

        let s = apply_action(s, ButtonAction::PlayPause);
        assert!(s.is_running());

        let s = apply_action(s, ButtonAction::Faster);
        assert_eq!(s.clock.interval(), Duration::from_millis(900));
        let s = apply_action(s, ButtonAction::Slower);
        let s = apply_action(s, ButtonAction::Slower);
        assert_eq!(s.clock.interval(), Duration::from_millis(1100));

        let s = apply_action(s, ButtonAction::Clear);
        assert_eq!(s.grid.population(), 0);
    }
}
