use macroquad::logging::{debug, warn};
use macroquad::prelude::*;
use crate::application::SimulationController;
use crate::domain::presets;
use crate::ui::{Button, Layout, Slider};

/// A user action against the simulation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    ToggleRunning,
    Clear,
    Randomize,
    /// Apply the slider's pending value
    ApplyDelay(u64),
    StepOnce,
    ToggleCell(usize, usize),
    /// Stamp `presets::all_patterns()[index]` at the grid center
    PlacePattern(usize),
}

/// Commands for each bottom-strip button, in layout order
const BUTTON_COMMANDS: [fn(&Slider) -> Command; 4] = [
    |_| Command::ToggleRunning,
    |_| Command::Clear,
    |_| Command::Randomize,
    |slider| Command::ApplyDelay(slider.value()),
];

/// Apply a command to the controller
pub fn apply_command(controller: &mut SimulationController, command: Command) {
    debug!("command {:?}", command);
    match command {
        Command::ToggleRunning => controller.toggle_running(),
        Command::Clear => controller.clear(),
        Command::Randomize => controller.randomize(),
        Command::ApplyDelay(ms) => {
            controller.apply_delay(ms);
        }
        Command::StepOnce => controller.step_once(),
        Command::ToggleCell(row, col) => {
            if let Err(err) = controller.toggle_cell(row, col) {
                warn!("toggle rejected: {}", err);
            }
        }
        Command::PlacePattern(index) => match presets::all_patterns().get(index) {
            Some(pattern) => {
                if let Err(err) = controller.place_centered(pattern) {
                    warn!("cannot place {}: {}", pattern.name, err);
                }
            }
            None => {
                warn!("no preset pattern #{}", index);
            }
        },
    }
}

/// Map a left click inside the grid to a toggle
pub fn grid_click(layout: &Layout, mouse_pos: (f32, f32)) -> Option<Command> {
    if !is_mouse_button_pressed(MouseButton::Left) {
        return None;
    }
    layout
        .screen_to_cell(mouse_pos.0, mouse_pos.1)
        .map(|(row, col)| Command::ToggleCell(row, col))
}

/// Collect button clicks for this frame
pub fn button_clicks(buttons: &[Button], slider: &Slider, mouse_pos: (f32, f32)) -> Vec<Command> {
    buttons
        .iter()
        .zip(BUTTON_COMMANDS)
        .filter(|(btn, _)| btn.is_clicked(mouse_pos))
        .map(|(_, command)| command(slider))
        .collect()
}

/// Keyboard shortcuts; digits 1-5 stamp the preset patterns
pub fn keyboard_commands() -> Vec<Command> {
    let bindings: [(KeyCode, Command); 9] = [
        (KeyCode::Space, Command::ToggleRunning),
        (KeyCode::C, Command::Clear),
        (KeyCode::R, Command::Randomize),
        (KeyCode::N, Command::StepOnce),
        (KeyCode::Key1, Command::PlacePattern(0)),
        (KeyCode::Key2, Command::PlacePattern(1)),
        (KeyCode::Key3, Command::PlacePattern(2)),
        (KeyCode::Key4, Command::PlacePattern(3)),
        (KeyCode::Key5, Command::PlacePattern(4)),
    ];

    bindings
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .map(|(_, command)| *command)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::SimulationConfig;

    fn controller() -> SimulationController {
        SimulationController::new(&SimulationConfig::default().with_seed(5)).unwrap()
    }

    #[test]
    fn test_commands_route_to_controller() {
        let mut ctrl = controller();

        apply_command(&mut ctrl, Command::ToggleCell(3, 4));
        assert!(ctrl.engine().cell_at(3, 4).unwrap());

        apply_command(&mut ctrl, Command::ToggleRunning);
        assert!(ctrl.is_running());

        apply_command(&mut ctrl, Command::ApplyDelay(750));
        assert_eq!(ctrl.delay_ms(), 750);
        assert!(ctrl.is_running());

        apply_command(&mut ctrl, Command::Clear);
        assert_eq!(ctrl.population(), 0);

        apply_command(&mut ctrl, Command::ToggleRunning);
        assert!(!ctrl.is_running());
    }

    #[test]
    fn test_step_once_while_stopped() {
        let mut ctrl = controller();
        apply_command(&mut ctrl, Command::Randomize);
        apply_command(&mut ctrl, Command::StepOnce);
        assert_eq!(ctrl.generation(), 1);
        assert!(!ctrl.is_running());
    }

    #[test]
    fn test_out_of_range_toggle_is_ignored() {
        let mut ctrl = controller();
        apply_command(&mut ctrl, Command::ToggleCell(99, 99));
        assert_eq!(ctrl.population(), 0);
    }

    #[test]
    fn test_place_pattern_stamps_preset() {
        let mut ctrl = controller();
        // Index 2 is the glider
        apply_command(&mut ctrl, Command::PlacePattern(2));
        assert_eq!(ctrl.population(), 5);
        apply_command(&mut ctrl, Command::PlacePattern(99));
        assert_eq!(ctrl.population(), 5);
    }

    #[test]
    fn test_apply_delay_button_reads_slider() {
        let slider = Slider::new(0.0, 0.0, 100.0, "", (100, 1000), 50, 650);
        assert_eq!(BUTTON_COMMANDS[3](&slider), Command::ApplyDelay(650));
        assert_eq!(BUTTON_COMMANDS[0](&slider), Command::ToggleRunning);
    }
}
