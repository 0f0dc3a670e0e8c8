use crate::api::types::BodyId;

/// Input events the orrery understands.
/// Pointer coordinates are normalized device coordinates: x and y in [-1, 1], +y up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A click at (x, y). Resolved against the scene by picking.
    Click { x: f32, y: f32 },
    /// A drag by a fraction of the viewport size.
    Drag { dx: f32, dy: f32 },
    /// Wheel steps; positive moves away from the target.
    Zoom { delta: f32 },
    /// A body label was clicked.
    LabelClick { body: BodyId },
    /// The detail panel's close button.
    ClosePanel,
    /// The play/pause button.
    TogglePause,
    /// Viewport resized to `width` × `height` pixels.
    Resize { width: f32, height: f32 },
}

/// A queue of input events.
/// JS writes events into the queue; Rust reads and drains them each frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(16),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
