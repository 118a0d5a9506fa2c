use std::time::Duration;

use macroquad::logging::{error, info};
use macroquad::prelude::*;
use life_gui::{
    SimulationConfig, SimulationController,
    input,
    rendering,
    ui::Layout,
};

fn window_conf() -> Conf {
    let layout = Layout::new(&SimulationConfig::default());
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: layout.window_width.ceil() as i32,
        window_height: layout.window_height.ceil() as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = SimulationConfig::default();
    let mut controller = match SimulationController::new(&config) {
        Ok(controller) => controller,
        Err(err) => {
            error!("invalid configuration: {}", err);
            return;
        }
    };
    info!(
        "{}x{} grid, {} ms/generation ({}..={} ms)",
        config.rows, config.cols, config.initial_delay_ms, config.min_delay_ms, config.max_delay_ms
    );

    let layout = Layout::new(&config);
    let mut buttons = layout.create_buttons();
    let mut slider = layout.create_slider(&config);

    loop {
        let mouse_pos = mouse_position();

        slider.update(mouse_pos);

        let mut commands = input::button_clicks(&buttons, &slider, mouse_pos);
        commands.extend(input::grid_click(&layout, mouse_pos));
        commands.extend(input::keyboard_commands());
        for command in commands {
            input::apply_command(&mut controller, command);
        }

        if let Some(start) = buttons.first_mut() {
            start.set_text(if controller.is_running() { "Stop" } else { "Start" });
        }

        controller.tick(Duration::from_secs_f32(get_frame_time()));

        clear_background(WHITE);
        rendering::draw_grid(controller.engine(), &layout);
        rendering::draw_controls(&controller, &layout, &buttons, &slider, mouse_pos);

        next_frame().await;
    }
}
