//! Orbit controller: drag-to-rotate with inertia, wheel zoom, ambient
//! auto-rotation and the heartbeat pulse.

use crate::camera::ScenePose;
use crate::constants::*;
use glam::Vec2;
use std::time::Duration;

/// Target orbit values driven by input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraState {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub yaw_velocity: f32,
    pub pitch_velocity: f32,
}

impl CameraState {
    /// Starting state for a viewport of the given width. Narrow (phone)
    /// viewports start further out so the whole heart fits.
    pub fn for_viewport_width(width: f32) -> Self {
        let distance = if width < MOBILE_BREAKPOINT_PX {
            MOBILE_DISTANCE
        } else {
            DESKTOP_DISTANCE
        };
        Self {
            yaw: 0.0,
            pitch: INITIAL_PITCH,
            distance,
            yaw_velocity: 0.0,
            pitch_velocity: 0.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderedPose {
    pub yaw: f32,
    pub pitch: f32,
    pub camera_z: f32,
}

impl Default for RenderedPose {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            camera_z: CAMERA_START_Z,
        }
    }
}

/// Cursor the front-end should show over the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorHint {
    Grab,
    Grabbing,
}

impl CursorHint {
    pub fn as_css(self) -> &'static str {
        match self {
            CursorHint::Grab => "grab",
            CursorHint::Grabbing => "grabbing",
        }
    }
}

/// What a pointer move produced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerMove {
    /// The drag rotated the camera target.
    Rotated,
    /// Not dragging: hover should be cleared and the cursor updated.
    Idle { cursor: CursorHint },
}

#[inline]
pub fn clamp_pitch(pitch: f32) -> f32 {
    pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT)
}

#[inline]
pub fn clamp_distance(distance: f32) -> f32 {
    distance.clamp(MIN_DISTANCE, MAX_DISTANCE)
}

/// Half-rectified heartbeat: a primary sine gated by the positive half of a
/// beat at twice the frequency.
#[inline]
pub fn pulse_factor(phase: f32) -> f32 {
    1.0 + phase.sin() * PULSE_AMPLITUDE * (phase * 2.0).sin().max(0.0)
}

/// Exponential blend toward `target` over `frames` reference frames.
#[inline]
pub fn blend_toward(current: f32, target: f32, per_frame: f32, frames: f32) -> f32 {
    let alpha = 1.0 - (1.0 - per_frame).powf(frames);
    current + (target - current) * alpha
}

#[inline]
pub fn reference_frames(dt: Duration) -> f32 {
    dt.as_secs_f32().clamp(0.0, MAX_FRAME_DT_SEC) * REFERENCE_FPS
}

#[derive(Clone, Debug)]
pub struct CameraController {
    state: CameraState,
    rendered: RenderedPose,
    dragging: bool,
    last_pointer: Vec2,
    pulse_phase: f32,
    pulse: f32,
}

impl CameraController {
    pub fn new(viewport_width: f32) -> Self {
        Self {
            state: CameraState::for_viewport_width(viewport_width),
            rendered: RenderedPose::default(),
            dragging: false,
            last_pointer: Vec2::ZERO,
            pulse_phase: 0.0,
            pulse: 1.0,
        }
    }

    #[inline]
    pub fn state(&self) -> &CameraState {
        &self.state
    }

    #[inline]
    pub fn rendered(&self) -> &RenderedPose {
        &self.rendered
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    #[inline]
    pub fn last_pointer(&self) -> Vec2 {
        self.last_pointer
    }

    #[inline]
    pub fn pulse(&self) -> f32 {
        self.pulse
    }

    pub fn pose(&self) -> ScenePose {
        ScenePose {
            yaw: self.rendered.yaw,
            pitch: self.rendered.pitch,
            camera_z: self.rendered.camera_z,
            pulse: self.pulse,
        }
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.dragging = true;
        self.last_pointer = Vec2::new(x, y);
        self.state.yaw_velocity = 0.0;
        self.state.pitch_velocity = 0.0;
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) -> PointerMove {
        if !self.dragging {
            return PointerMove::Idle {
                cursor: CursorHint::Grab,
            };
        }
        let dx = x - self.last_pointer.x;
        let dy = y - self.last_pointer.y;
        self.state.yaw_velocity = dx * DRAG_RADIANS_PER_PX;
        self.state.pitch_velocity = dy * DRAG_RADIANS_PER_PX;
        self.state.yaw += self.state.yaw_velocity;
        self.state.pitch = clamp_pitch(self.state.pitch + self.state.pitch_velocity);
        self.last_pointer = Vec2::new(x, y);
        PointerMove::Rotated
    }

    /// Ends a drag. Returns whether a drag was in progress.
    pub fn pointer_up(&mut self) -> bool {
        std::mem::replace(&mut self.dragging, false)
    }

    pub fn wheel(&mut self, delta_y: f32) {
        self.state.distance = clamp_distance(self.state.distance + delta_y * WHEEL_DISTANCE_PER_UNIT);
    }

    /// True when the pointer is within the click slop of the last recorded
    /// drag point, so the click was not the tail of a drag.
    pub fn is_click(&self, x: f32, y: f32) -> bool {
        (x - self.last_pointer.x).abs() <= CLICK_SLOP_PX
            && (y - self.last_pointer.y).abs() <= CLICK_SLOP_PX
    }

    /// Advance one frame. `has_selection` pauses the ambient auto-rotation.
    pub fn tick(&mut self, dt: Duration, has_selection: bool) {
        let frames = reference_frames(dt);

        if !self.dragging && !has_selection {
            self.state.yaw += AUTO_ROTATE_PER_FRAME * frames;
        }

        if !self.dragging {
            let damping = VELOCITY_DAMPING.powf(frames);
            self.state.yaw_velocity *= damping;
            self.state.pitch_velocity *= damping;
            self.state.yaw += self.state.yaw_velocity * frames;
            self.state.pitch = clamp_pitch(self.state.pitch + self.state.pitch_velocity * frames);
        }

        self.rendered.yaw = blend_toward(self.rendered.yaw, self.state.yaw, POSE_BLEND, frames);
        self.rendered.pitch =
            blend_toward(self.rendered.pitch, self.state.pitch, POSE_BLEND, frames);
        self.rendered.camera_z =
            blend_toward(self.rendered.camera_z, self.state.distance, POSE_BLEND, frames);

        self.pulse_phase += PULSE_PHASE_PER_FRAME * frames;
        self.pulse = pulse_factor(self.pulse_phase);
    }

    /// Jump straight to a pose, skipping smoothing.
    pub fn set_pose(&mut self, yaw: f32, pitch: f32, distance: f32) {
        self.state.yaw = yaw;
        self.state.pitch = clamp_pitch(pitch);
        self.state.distance = clamp_distance(distance);
        self.state.yaw_velocity = 0.0;
        self.state.pitch_velocity = 0.0;
        self.rendered = RenderedPose {
            yaw: self.state.yaw,
            pitch: self.state.pitch,
            camera_z: self.state.distance,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pulse_holds_on_negative_half_beat() {
        // sin(2t) < 0 for t in (pi/2, pi): factor stays at rest
        assert_eq!(pulse_factor(2.0), 1.0);
        assert!(pulse_factor(0.6) > 1.0);
    }

    #[test]
    fn blend_one_frame_matches_factor() {
        let v = blend_toward(0.0, 10.0, 0.1, 1.0);
        assert!((v - 1.0).abs() < 1e-6);
    }
}
