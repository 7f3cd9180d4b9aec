pub const PREVIEW_DISPLAY: &str = "block";
pub const LOADING_DISPLAY: &str = "flex";

pub const PRESSED_SCALE: f32 = 0.96;
pub const RESTING_SCALE: f32 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressEvent {
    Down,
    Up,
    Leave,
}

impl PressEvent {
    pub const ALL: [PressEvent; 3] = [PressEvent::Down, PressEvent::Up, PressEvent::Leave];

    pub fn event_type(self) -> &'static str {
        match self {
            PressEvent::Down => "mousedown",
            PressEvent::Up => "mouseup",
            PressEvent::Leave => "mouseleave",
        }
    }

    pub fn scale(self) -> f32 {
        match self {
            PressEvent::Down => PRESSED_SCALE,
            PressEvent::Up | PressEvent::Leave => RESTING_SCALE,
        }
    }

    pub fn transform(self) -> String {
        scale_transform(self.scale())
    }
}

/// Formats a CSS scale transform the way it is written in the stylesheet,
/// `scale(1)` rather than `scale(1.0)`.
pub fn scale_transform(scale: f32) -> String {
    format!("scale({scale})")
}
