use macroquad::prelude::*;

use crate::application::GameState;
use crate::domain::Grid;
use crate::ui::{Button, CELL_SIZE, MARGIN, BUTTON_HEIGHT, buttons_y, cell_position};

/// Draw every cell of the board with its border
pub fn draw_grid(grid: &Grid) {
    let alive_color = Color::from_rgba(183, 222, 237, 255); // #b7deed
    let dead_color = Color::from_rgba(79, 78, 84, 255); // #4F4E54
    let border_color = Color::from_rgba(232, 214, 168, 255); // #E8D6A8

    for (row, col, cell) in grid.iter_cells() {
        let (x, y) = cell_position(row, col);
        let color = if cell.is_alive() { alive_color } else { dead_color };
        draw_rectangle(x, y, CELL_SIZE, CELL_SIZE, color);
        draw_rectangle_lines(x, y, CELL_SIZE, CELL_SIZE, 1.0, border_color);
    }
}

/// Status line shown under the buttons
pub fn status_text(state: &GameState) -> String {
    format!(
        "{} | Generation: {} | Alive: {} | Delay: {}ms",
        if state.is_running() { "Running" } else { "Paused" },
        state.generation,
        state.grid.population(),
        state.clock.interval().as_millis(),
    )
}

/// Draw the title, buttons and status line
pub fn draw_controls(state: &GameState, buttons: &[Button], mouse_pos: (f32, f32)) {
    draw_text("Conway's Game Of Life", MARGIN, 40.0, 32.0, WHITE);

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let (rows, _) = state.grid.dimensions();
    let status_y = buttons_y(rows) + BUTTON_HEIGHT + 30.0;
    let status_color = if state.is_running() {
        Color::from_rgba(183, 222, 237, 255)
    } else {
        Color::from_rgba(232, 214, 168, 255)
    };
    draw_text(&status_text(state), MARGIN, status_y, 20.0, status_color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::SimulationConfig;

    #[test]
    fn test_status_text() {
        let state = GameState::new(SimulationConfig::default().with_seed(1)).unwrap();
        assert_eq!(status_text(&state), "Paused | Generation: 0 | Alive: 0 | Delay: 1000ms");

        let state = state.toggle_running();
        assert!(status_text(&state).starts_with("Running"));
    }
}
