mod button;
mod slider;

pub use button::Button;
pub use slider::Slider;

use crate::application::SimulationConfig;

pub const STRIP_HEIGHT: f32 = 50.0;
pub const BUTTON_WIDTH: f32 = 110.0;
pub const BUTTON_HEIGHT: f32 = 30.0;
pub const BUTTON_GAP: f32 = 10.0;
pub const SLIDER_WIDTH: f32 = 300.0;
pub const SLIDER_LABEL_WIDTH: f32 = 140.0;
const MARGIN: f32 = 10.0;

/// Button order in the bottom strip
pub const BUTTON_LABELS: [&str; 4] = ["Start", "Clear", "Random", "Apply Delay"];

/// Screen geometry: slider strip on top, grid in the middle, buttons at the bottom
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub rows: usize,
    pub cols: usize,
    pub cell_size: f32,
    pub window_width: f32,
    pub window_height: f32,
    pub grid_x: f32,
    pub grid_y: f32,
}

impl Layout {
    pub fn new(config: &SimulationConfig) -> Self {
        let grid_width = config.cols as f32 * config.cell_size;
        let grid_height = config.rows as f32 * config.cell_size;
        let window_width = grid_width
            .max(buttons_width() + 2.0 * MARGIN)
            .max(SLIDER_LABEL_WIDTH + SLIDER_WIDTH + 2.0 * MARGIN);

        Self {
            rows: config.rows,
            cols: config.cols,
            cell_size: config.cell_size,
            window_width,
            window_height: grid_height + 2.0 * STRIP_HEIGHT,
            grid_x: (window_width - grid_width) / 2.0,
            grid_y: STRIP_HEIGHT,
        }
    }

    pub fn grid_width(&self) -> f32 {
        self.cols as f32 * self.cell_size
    }

    pub fn grid_height(&self) -> f32 {
        self.rows as f32 * self.cell_size
    }

    /// Map a screen position to (row, col); `None` outside the grid
    pub fn screen_to_cell(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        let local_x = x - self.grid_x;
        let local_y = y - self.grid_y;
        if local_x < 0.0 || local_y < 0.0 {
            return None;
        }
        let row = (local_y / self.cell_size) as usize;
        let col = (local_x / self.cell_size) as usize;
        (row < self.rows && col < self.cols).then_some((row, col))
    }

    /// Top-left screen corner of a cell
    pub fn cell_to_screen(&self, row: usize, col: usize) -> (f32, f32) {
        (
            self.grid_x + col as f32 * self.cell_size,
            self.grid_y + row as f32 * self.cell_size,
        )
    }

    /// Top of the bottom control strip
    pub fn controls_y(&self) -> f32 {
        self.grid_y + self.grid_height()
    }

    /// Create the bottom strip buttons, centered, in `BUTTON_LABELS` order
    pub fn create_buttons(&self) -> Vec<Button> {
        let start_x = (self.window_width - buttons_width()) / 2.0;
        let y = self.controls_y() + (STRIP_HEIGHT - BUTTON_HEIGHT) / 2.0;
        BUTTON_LABELS
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let x = start_x + i as f32 * (BUTTON_WIDTH + BUTTON_GAP);
                Button::new(x, y, BUTTON_WIDTH, BUTTON_HEIGHT, *label)
            })
            .collect()
    }

    /// Create the delay slider in the top strip
    pub fn create_slider(&self, config: &SimulationConfig) -> Slider {
        let x = (self.window_width - SLIDER_LABEL_WIDTH - SLIDER_WIDTH) / 2.0 + SLIDER_LABEL_WIDTH;
        Slider::new(
            x,
            STRIP_HEIGHT / 2.0,
            SLIDER_WIDTH,
            "Generation Delay:",
            (config.min_delay_ms, config.max_delay_ms),
            config.delay_step_ms,
            config.initial_delay_ms,
        )
    }
}

fn buttons_width() -> f32 {
    BUTTON_LABELS.len() as f32 * BUTTON_WIDTH + (BUTTON_LABELS.len() - 1) as f32 * BUTTON_GAP
}
