mod button;

pub use button::{Button, ButtonAction};

pub const CELL_SIZE: f32 = 20.0;
pub const MARGIN: f32 = 20.0;
/// Space above the board for the title
pub const HEADER_HEIGHT: f32 = 60.0;
pub const BUTTON_WIDTH: f32 = 120.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
pub const BUTTON_GAP: f32 = 12.0;
/// Space below the buttons for the status line
pub const FOOTER_HEIGHT: f32 = 50.0;

/// Top-left corner of the board on screen
pub const fn grid_origin() -> (f32, f32) {
    (MARGIN, HEADER_HEIGHT)
}

/// Screen position of the top-left corner of a cell
pub fn cell_position(row: usize, col: usize) -> (f32, f32) {
    let (ox, oy) = grid_origin();
    (ox + col as f32 * CELL_SIZE, oy + row as f32 * CELL_SIZE)
}

/// Map a screen position to the (row, col) under it, if it is on the board
pub fn cell_at(pos: (f32, f32), dimensions: (usize, usize)) -> Option<(usize, usize)> {
    let (ox, oy) = grid_origin();
    let (rows, columns) = dimensions;
    let x = pos.0 - ox;
    let y = pos.1 - oy;
    if x < 0.0 || y < 0.0 {
        return None;
    }

    let row = (y / CELL_SIZE) as usize;
    let col = (x / CELL_SIZE) as usize;
    (row < rows && col < columns).then_some((row, col))
}

/// Vertical position of the button row
pub fn buttons_y(rows: usize) -> f32 {
    grid_origin().1 + rows as f32 * CELL_SIZE + MARGIN
}

/// Window size that fits the board, buttons and status line
pub fn window_size(rows: usize, columns: usize) -> (i32, i32) {
    let width = (2.0 * MARGIN + columns as f32 * CELL_SIZE).max(5.0 * (BUTTON_WIDTH + BUTTON_GAP) + MARGIN);
    let height = buttons_y(rows) + BUTTON_HEIGHT + FOOTER_HEIGHT;
    (width as i32, height as i32)
}

/// Create the control buttons in one row under the board
pub fn create_buttons(rows: usize, running: bool) -> Vec<Button> {
    let y = buttons_y(rows);
    let play_label = if running { "Pause" } else { "Play" };
    [
        (play_label, ButtonAction::PlayPause),
        ("Slower", ButtonAction::Slower),
        ("Faster", ButtonAction::Faster),
        ("Clear", ButtonAction::Clear),
        ("Random", ButtonAction::Randomize),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (label, action))| {
        let x = MARGIN + i as f32 * (BUTTON_WIDTH + BUTTON_GAP);
        Button::new(x, y, BUTTON_WIDTH, BUTTON_HEIGHT, label, action)
    })
    .collect()
}
