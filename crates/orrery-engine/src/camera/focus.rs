// camera/focus.rs
//
// Focus state machine: Free → TransitioningIn → Focused → TransitioningOut → Free.
// Two concurrent tweens drive the camera position and look-at target.
// The restore point is captured by the first focus of a session and
// released only when the camera has returned to it.

use glam::Vec3;

use crate::api::config::FocusConfig;
use crate::api::types::BodyId;
use crate::extensions::{Easing, Tween};
use super::perspective::CameraPose;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPhase {
    /// User drives the camera.
    #[default]
    Free,
    TransitioningIn,
    Focused,
    TransitioningOut,
}

/// Camera distance used to frame a body of the given radius.
#[inline]
pub fn focus_distance(radius: f32) -> f32 {
    radius * 5.0 + 10.0
}

/// Camera position that frames a body: above and behind it on +Z.
pub fn focus_position(body_position: Vec3, radius: f32) -> Vec3 {
    let d = focus_distance(radius);
    body_position + Vec3::new(0.0, d / 2.0, d)
}

#[derive(Debug, Clone)]
pub struct FocusController {
    phase: FocusPhase,
    focused: Option<BodyId>,
    restore: Option<CameraPose>,
    position_tween: Option<Tween>,
    target_tween: Option<Tween>,
    focus_light: bool,
    duration: f32,
    easing: Easing,
}

impl Default for FocusController {
    fn default() -> Self {
        Self::new(1.0, Easing::QuadOut)
    }
}

impl FocusController {
    pub fn new(duration: f32, easing: Easing) -> Self {
        Self {
            phase: FocusPhase::Free,
            focused: None,
            restore: None,
            position_tween: None,
            target_tween: None,
            focus_light: false,
            duration,
            easing,
        }
    }

    pub fn from_config(config: &FocusConfig) -> Self {
        Self::new(config.duration, config.easing)
    }

    pub fn phase(&self) -> FocusPhase {
        self.phase
    }

    /// The body the camera is locked on. Cleared as soon as `close` is called.
    pub fn focused(&self) -> Option<BodyId> {
        self.focused
    }

    pub fn focus_light(&self) -> bool {
        self.focus_light
    }

    /// Pose the camera returns to on close.
    pub fn restore_point(&self) -> Option<CameraPose> {
        self.restore
    }

    /// Start moving toward `body`. Returns false when it is already the focused body.
    pub fn focus(&mut self, body: BodyId, body_position: Vec3, radius: f32, pose: &CameraPose) -> bool {
        if self.focused == Some(body) {
            return false;
        }
        if self.restore.is_none() {
            self.restore = Some(*pose);
        }

        self.start(*pose, CameraPose::new(focus_position(body_position, radius), body_position));
        self.focused = Some(body);
        self.focus_light = true;
        self.phase = FocusPhase::TransitioningIn;
        log::debug!("focus: {:?} at {}", body, body_position);
        true
    }

    /// Return to the restore point. Returns false when nothing is focused.
    pub fn close(&mut self, pose: &CameraPose) -> bool {
        if !matches!(self.phase, FocusPhase::TransitioningIn | FocusPhase::Focused) {
            return false;
        }
        let Some(restore) = self.restore else { return false };

        self.start(*pose, restore);
        self.focused = None;
        self.focus_light = false;
        self.phase = FocusPhase::TransitioningOut;
        log::debug!("focus closed, returning to {}", restore.position);
        true
    }

    /// Replace any in-flight tweens with fresh ones from `from` to `to`.
    fn start(&mut self, from: CameraPose, to: CameraPose) {
        self.position_tween = Some(Tween::new(from.position, to.position, self.duration, self.easing));
        self.target_tween = Some(Tween::new(from.target, to.target, self.duration, self.easing));
    }

    /// Advance tweens by `dt` seconds and write the camera pose. While a body
    /// is focused the look-at target is then snapped to its current position.
    pub fn update(&mut self, dt: f32, pose: &mut CameraPose, body_position: impl Fn(BodyId) -> Option<Vec3>) {
        let mut done = true;
        if let Some(tween) = &mut self.position_tween {
            tween.advance(dt);
            pose.position = tween.value();
            done &= tween.is_complete();
        }
        if let Some(tween) = &mut self.target_tween {
            tween.advance(dt);
            pose.target = tween.value();
            done &= tween.is_complete();
        }

        if done {
            self.position_tween = None;
            self.target_tween = None;
            match self.phase {
                FocusPhase::TransitioningIn => self.phase = FocusPhase::Focused,
                FocusPhase::TransitioningOut => {
                    self.phase = FocusPhase::Free;
                    self.restore = None;
                }
                FocusPhase::Free | FocusPhase::Focused => {}
            }
        }

        if let Some(position) = self.focused.and_then(&body_position) {
            pose.target = position;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn start_pose() -> CameraPose {
        CameraPose::new(Vec3::new(0.0, 100.0, 200.0), Vec3::ZERO)
    }

    fn run(ctrl: &mut FocusController, pose: &mut CameraPose, frames: usize, at: Vec3) {
        for _ in 0..frames {
            ctrl.update(DT, pose, |_| Some(at));
        }
    }

    #[test]
    fn focus_then_settle() {
        let mut ctrl = FocusController::default();
        let mut pose = start_pose();
        let earth = Vec3::new(45.0, 0.0, 0.0);

        assert!(ctrl.focus(BodyId(3), earth, 1.0, &pose));
        assert_eq!(ctrl.phase(), FocusPhase::TransitioningIn);
        assert!(ctrl.focus_light());

        run(&mut ctrl, &mut pose, 30, earth);
        assert_eq!(ctrl.phase(), FocusPhase::TransitioningIn);

        run(&mut ctrl, &mut pose, 40, earth);
        assert_eq!(ctrl.phase(), FocusPhase::Focused);
        assert_eq!(pose.position, Vec3::new(45.0, 7.5, 15.0));
        assert_eq!(pose.target, earth);
    }

    #[test]
    fn close_before_arrival_returns_to_saved_pose() {
        let mut ctrl = FocusController::default();
        let mut pose = start_pose();
        let before = pose;

        ctrl.focus(BodyId(1), Vec3::new(20.0, 0.0, 0.0), 0.38, &pose);
        assert!(ctrl.close(&pose));
        assert_eq!(ctrl.focused(), None);
        assert!(!ctrl.focus_light());

        run(&mut ctrl, &mut pose, 120, Vec3::new(20.0, 0.0, 0.0));
        assert_eq!(ctrl.phase(), FocusPhase::Free);
        assert_eq!(pose, before);
        assert_eq!(ctrl.restore_point(), None);
    }

    #[test]
    fn close_mid_flight_cancels_inbound_motion() {
        let mut ctrl = FocusController::default();
        let mut pose = start_pose();
        let before = pose;
        let mars = Vec3::new(-60.0, 0.0, 10.0);

        ctrl.focus(BodyId(5), mars, 0.53, &pose);
        run(&mut ctrl, &mut pose, 20, mars);
        assert_ne!(pose, before);

        ctrl.close(&pose);
        run(&mut ctrl, &mut pose, 61, mars);
        assert_eq!(ctrl.phase(), FocusPhase::Free);
        assert_eq!(pose, before);
    }

    #[test]
    fn refocus_keeps_first_restore_point() {
        let mut ctrl = FocusController::default();
        let mut pose = start_pose();
        let before = pose;

        ctrl.focus(BodyId(3), Vec3::new(45.0, 0.0, 0.0), 1.0, &pose);
        run(&mut ctrl, &mut pose, 70, Vec3::new(45.0, 0.0, 0.0));
        assert_eq!(ctrl.phase(), FocusPhase::Focused);

        assert!(ctrl.focus(BodyId(6), Vec3::new(0.0, 0.0, 120.0), 4.0, &pose));
        assert_eq!(ctrl.phase(), FocusPhase::TransitioningIn);
        assert_eq!(ctrl.restore_point(), Some(before));
    }

    #[test]
    fn same_body_and_idle_close_are_noops() {
        let mut ctrl = FocusController::default();
        let pose = start_pose();
        assert!(!ctrl.close(&pose));

        assert!(ctrl.focus(BodyId(2), Vec3::X, 1.0, &pose));
        assert!(!ctrl.focus(BodyId(2), Vec3::X, 1.0, &pose));
    }

    #[test]
    fn target_tracks_moving_body_while_focused() {
        let mut ctrl = FocusController::default();
        let mut pose = start_pose();
        ctrl.focus(BodyId(3), Vec3::new(45.0, 0.0, 0.0), 1.0, &pose);
        run(&mut ctrl, &mut pose, 70, Vec3::new(45.0, 0.0, 0.0));

        let moved = Vec3::new(44.0, 0.0, 3.0);
        ctrl.update(DT, &mut pose, |_| Some(moved));
        assert_eq!(pose.target, moved);
    }

    #[test]
    fn focus_distance_formula() {
        assert_eq!(focus_distance(1.0), 15.0);
        assert_eq!(focus_position(Vec3::ZERO, 2.0), Vec3::new(0.0, 10.0, 20.0));
    }
}
