type MousePosition = glutin::dpi::PhysicalPosition<f64>;

/// Pointer state accumulated from window events between two frames.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MouseState {
    pub left_mouse_button_down: bool,
    pub current_position: Option<MousePosition>,
    pub previous_position: Option<MousePosition>,
    pub scroll_delta: f32,
}

impl Default for MouseState {
    fn default() -> Self {
        Self::new()
    }
}

impl MouseState {
    const PIXELS_PER_LINE: f64 = 20.0;

    pub fn new() -> MouseState {
        MouseState {
            left_mouse_button_down: false,
            current_position: None,
            previous_position: None,
            scroll_delta: 0.0,
        }
    }

    pub fn is_left_button_down(&self) -> bool {
        self.left_mouse_button_down
    }

    /// Movement since the previous call.
    pub fn take_position_delta(&mut self) -> MousePosition {
        let delta = self.current_position.zip(self.previous_position).map_or(
            MousePosition::new(0.0, 0.0),
            |(current_position, previous_position)| {
                MousePosition::new(
                    current_position.x - previous_position.x,
                    current_position.y - previous_position.y,
                )
            },
        );

        self.previous_position = self.current_position;
        delta
    }

    pub fn take_scroll_delta(&mut self) -> f32 {
        std::mem::take(&mut self.scroll_delta)
    }

    pub fn handle_window_event(&mut self, event: &glutin::event::WindowEvent) {
        use glutin::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};

        match event {
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                self.left_mouse_button_down = *state == ElementState::Pressed;
                // dragging starts from where the button went down
                self.previous_position = self.current_position;
            }
            WindowEvent::CursorLeft { .. } => {
                self.left_mouse_button_down = false;
            }
            WindowEvent::CursorMoved { position, .. } => {
                if self.previous_position.is_none() {
                    self.previous_position = Some(*position);
                }
                self.current_position = Some(*position);
            }
            WindowEvent::MouseWheel {
                delta: MouseScrollDelta::LineDelta(_, lines),
                ..
            } => {
                self.scroll_delta += lines;
            }
            WindowEvent::MouseWheel {
                delta: MouseScrollDelta::PixelDelta(pixels),
                ..
            } => {
                self.scroll_delta += (pixels.y / Self::PIXELS_PER_LINE) as f32;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_delta_is_consumed() {
        let mut mouse = MouseState::new();
        mouse.previous_position = Some(MousePosition::new(10.0, 10.0));
        mouse.current_position = Some(MousePosition::new(13.0, 6.0));

        assert_eq!(mouse.take_position_delta(), MousePosition::new(3.0, -4.0));
        assert_eq!(mouse.take_position_delta(), MousePosition::new(0.0, 0.0));
    }

    #[test]
    fn scroll_delta_is_consumed() {
        let mut mouse = MouseState::new();
        mouse.scroll_delta = 2.5;

        assert_eq!(mouse.take_scroll_delta(), 2.5);
        assert_eq!(mouse.take_scroll_delta(), 0.0);
    }

    #[test]
    fn no_delta_without_positions() {
        assert_eq!(
            MouseState::new().take_position_delta(),
            MousePosition::new(0.0, 0.0)
        );
    }
}
