use macroquad::prelude::*;

const TRACK_HEIGHT: f32 = 4.0;
const KNOB_RADIUS: f32 = 7.0;

/// Horizontal integer slider with a snapping step.
/// Its value is only a pending choice; callers decide when to apply it.
#[derive(Clone)]
pub struct Slider {
    x: f32,
    y: f32,
    width: f32,
    label: String,
    min: u64,
    max: u64,
    step: u64,
    value: u64,
    dragging: bool,
}

impl Slider {
    /// `y` is the vertical center of the track
    pub fn new(
        x: f32,
        y: f32,
        width: f32,
        label: impl Into<String>,
        (min, max): (u64, u64),
        step: u64,
        value: u64,
    ) -> Self {
        Self {
            x,
            y,
            width,
            label: label.into(),
            min,
            max,
            step: step.max(1),
            value: value.clamp(min, max),
            dragging: false,
        }
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn set_value(&mut self, value: u64) {
        self.value = self.snap(value);
    }

    /// Round to the nearest step above `min`, kept inside the range
    fn snap(&self, value: u64) -> u64 {
        let offset = value.clamp(self.min, self.max) - self.min;
        let snapped = self.min + (offset + self.step / 2) / self.step * self.step;
        snapped.min(self.max)
    }

    /// Value under a horizontal screen position
    pub fn value_at(&self, mouse_x: f32) -> u64 {
        let t = ((mouse_x - self.x) / self.width).clamp(0.0, 1.0);
        let raw = self.min as f32 + t * (self.max - self.min) as f32;
        self.snap(raw.round() as u64)
    }

    fn knob_x(&self) -> f32 {
        if self.max == self.min {
            return self.x;
        }
        let t = (self.value - self.min) as f32 / (self.max - self.min) as f32;
        self.x + t * self.width
    }

    fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x - KNOB_RADIUS
            && mouse_pos.0 <= self.x + self.width + KNOB_RADIUS
            && (mouse_pos.1 - self.y).abs() <= KNOB_RADIUS * 2.0
    }

    /// Handle press/drag; returns true if the value changed
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> bool {
        if is_mouse_button_pressed(MouseButton::Left) && self.is_hovered(mouse_pos) {
            self.dragging = true;
        }
        if !is_mouse_button_down(MouseButton::Left) {
            self.dragging = false;
        }
        if !self.dragging {
            return false;
        }

        let value = self.value_at(mouse_pos.0);
        let changed = value != self.value;
        self.value = value;
        changed
    }

    pub fn draw(&self) {
        let label_size = measure_text(&self.label, None, 16, 1.0);
        draw_text(
            &self.label,
            self.x - label_size.width - 12.0,
            self.y + label_size.height / 2.0,
            16.0,
            BLACK,
        );

        draw_rectangle(
            self.x,
            self.y - TRACK_HEIGHT / 2.0,
            self.width,
            TRACK_HEIGHT,
            Color::from_rgba(170, 170, 170, 255),
        );

        // Ticks every four steps, labels at the ends
        let ticks = (self.max - self.min) / (self.step * 4);
        for i in 0..=ticks {
            let t = i as f32 / ticks.max(1) as f32;
            let tx = self.x + t * self.width;
            draw_line(tx, self.y + 6.0, tx, self.y + 10.0, 1.0, GRAY);
        }
        draw_text(&self.min.to_string(), self.x - 8.0, self.y + 22.0, 12.0, GRAY);
        draw_text(&self.max.to_string(), self.x + self.width - 12.0, self.y + 22.0, 12.0, GRAY);

        draw_circle(self.knob_x(), self.y, KNOB_RADIUS, Color::from_rgba(70, 130, 180, 255));
        draw_text(
            &format!("{} ms", self.value),
            self.knob_x() - 16.0,
            self.y - 10.0,
            14.0,
            BLACK,
        );
    }
}
