// Per-paper interaction state and gesture state machine.
use super::vec2::Vec2;
use super::z_order::{BASE_Z, ZOrder};

/// Half-width of the random tilt a paper is created with, in degrees.
pub const MAX_INITIAL_TILT: f64 = 15.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gesture {
    Idle,
    Dragging,
    Rotating,
}

/// Which input started a pick-up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Grab {
    /// Left mouse button or a touch start.
    Primary,
    /// Right mouse button.
    Secondary,
}

impl Grab {
    /// Map a `MouseEvent::button()` code; other buttons do not grab.
    pub fn from_mouse_button(button: i16) -> Option<Grab> {
        match button {
            0 => Some(Grab::Primary),
            2 => Some(Grab::Secondary),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PaperState {
    pub held: bool,
    pub rotating: bool,
    pub grab_anchor: Vec2,
    pub pointer: Vec2,
    pub prev_pointer: Vec2,
    pub velocity: Vec2,
    pub rotation_deg: f64,
    pub position: Vec2,
    pub z_index: u32,
}

impl PaperState {
    /// Fresh paper at its layout position with the given tilt.
    pub fn new(rotation_deg: f64) -> Self {
        Self {
            held: false,
            rotating: false,
            grab_anchor: Vec2::ZERO,
            pointer: Vec2::ZERO,
            prev_pointer: Vec2::ZERO,
            velocity: Vec2::ZERO,
            rotation_deg,
            position: Vec2::ZERO,
            z_index: BASE_Z,
        }
    }

    /// Map a unit sample in [0, 1) onto the initial tilt range [-15, 15).
    pub fn tilt_from_unit(sample: f64) -> f64 {
        sample * MAX_INITIAL_TILT * 2.0 - MAX_INITIAL_TILT
    }

    pub fn gesture(&self) -> Gesture {
        match (self.held, self.rotating) {
            (false, _) => Gesture::Idle,
            (true, false) => Gesture::Dragging,
            (true, true) => Gesture::Rotating,
        }
    }

    /// Start a gesture at `at`. Raises the paper above every other one that
    /// shares `z_order`. Returns false when the paper was already held.
    pub fn pick_up(&mut self, grab: Grab, at: Vec2, z_order: &ZOrder) -> bool {
        if self.held {
            return false;
        }
        self.held = true;
        self.rotating = grab == Grab::Secondary;
        self.z_index = z_order.raise();
        self.grab_anchor = at;
        self.pointer = at;
        self.prev_pointer = at;
        self.velocity = Vec2::ZERO;
        true
    }

    /// Feed a pointer position. Returns true when the paper's transform
    /// changed and needs to be written back to the element.
    pub fn pointer_move(&mut self, at: Vec2) -> bool {
        if !self.held {
            return false;
        }
        if self.rotating {
            // a pointer sitting on the anchor has no direction; keep the old angle
            if let Some(deg) = (at - self.grab_anchor).heading_degrees() {
                self.rotation_deg = deg;
            }
        } else {
            self.pointer = at;
            self.velocity = self.pointer - self.prev_pointer;
            self.position += self.velocity;
            self.prev_pointer = self.pointer;
        }
        true
    }

    /// End any gesture. Returns true if a gesture was actually in progress.
    pub fn release(&mut self) -> bool {
        let was_held = self.held;
        self.held = false;
        self.rotating = false;
        was_held
    }

    /// CSS `transform` value for the current position and rotation.
    pub fn transform(&self) -> String {
        format!(
            "translateX({}px) translateY({}px) rotateZ({}deg)",
            self.position.x, self.position.y, self.rotation_deg
        )
    }
}
