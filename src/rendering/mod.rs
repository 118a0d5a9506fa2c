use macroquad::prelude::*;
use crate::application::SimulationController;
use crate::domain::LifeEngine;
use crate::ui::{Button, Layout, Slider};

/// Draw every cell: live black, dead white, each with a gray border
pub fn draw_grid(engine: &LifeEngine, layout: &Layout) {
    let size = layout.cell_size;
    let border = Color::from_rgba(128, 128, 128, 255);

    for (row, col, cell) in engine.iter_cells() {
        let (x, y) = layout.cell_to_screen(row, col);
        let fill = if cell.is_alive() { BLACK } else { WHITE };
        draw_rectangle(x, y, size, size, fill);
        draw_rectangle_lines(x, y, size, size, 1.0, border);
    }
}

/// Status text: generation, population, applied delay and run state
pub fn status_line(controller: &SimulationController) -> String {
    format!(
        "Gen {} | Live {} | {} ms | {}",
        controller.generation(),
        controller.population(),
        controller.delay_ms(),
        if controller.is_running() { "Running" } else { "Stopped" },
    )
}

/// Draw the slider strip, button strip and status line
pub fn draw_controls(
    controller: &SimulationController,
    layout: &Layout,
    buttons: &[Button],
    slider: &Slider,
    mouse_pos: (f32, f32),
) {
    let panel = Color::from_rgba(238, 238, 238, 255);
    draw_rectangle(0.0, 0.0, layout.window_width, layout.grid_y, panel);
    draw_rectangle(
        0.0,
        layout.controls_y(),
        layout.window_width,
        layout.window_height - layout.controls_y(),
        panel,
    );

    slider.draw();
    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    draw_text(
        &status_line(controller),
        6.0,
        layout.window_height - 3.0,
        12.0,
        DARKGRAY,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::SimulationConfig;

    #[test]
    fn test_status_line() {
        let mut ctrl = SimulationController::new(&SimulationConfig::default().with_seed(1)).unwrap();
        ctrl.toggle_cell(0, 0).unwrap();
        ctrl.apply_delay(300);
        assert_eq!(status_line(&ctrl), "Gen 0 | Live 1 | 300 ms | Stopped");
        ctrl.start();
        assert!(status_line(&ctrl).ends_with("Running"));
    }
}
