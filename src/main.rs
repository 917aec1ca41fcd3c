use std::time::Duration;

use life_board::{GameState, SimulationConfig, input, rendering, ui};
use macroquad::prelude::*;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn window_conf() -> Conf {
    let config = SimulationConfig::default();
    let (width, height) = ui::window_size(config.rows, config.columns);
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: width,
        window_height: height,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut state = match GameState::new(SimulationConfig::default()) {
        Ok(state) => state,
        Err(err) => {
            error!(%err, "invalid simulation config");
            return;
        }
    };
    let background = Color::from_rgba(30, 30, 34, 255);

    loop {
        let mouse_pos = mouse_position();
        let (rows, _) = state.grid.dimensions();
        let buttons = ui::create_buttons(rows, state.is_running());

        state = input::process_button_clicks(state, &buttons, mouse_pos);
        input::handle_cell_click(&mut state, mouse_pos);
        state = input::process_keyboard_input(state);

        state = state.tick(Duration::from_secs_f32(get_frame_time()));

        clear_background(background);
        rendering::draw_grid(&state.grid);
        rendering::draw_controls(&state, &buttons, mouse_pos);

        next_frame().await;
    }
}
