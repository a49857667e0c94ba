// Character animation controller

use super::state::AnimState;
use crate::core::math::sign;
use crate::engine::assets::{AnimationClip, Frame, SheetError, SpriteSheetIndex};
use crate::engine::physics::PhysicsBody;
use crate::engine::renderer::RenderTarget;
use glam::{Affine2, Vec2};
use log::debug;
use std::sync::Arc;

/// Seconds each animation frame stays on screen
pub const DEFAULT_FRAME_RATE: f32 = 0.1;

/// Selects the displayed frame from the active clip
///
/// The state is re-derived from the body's velocity every tick. Whenever it
/// changes the elapsed counter drops to zero, so a clip always restarts from
/// its first frame. Playback is cyclic.
#[derive(Debug, Clone)]
pub struct AnimationController {
    idle: Arc<AnimationClip>,
    run: Arc<AnimationClip>,
    /// Seconds per frame
    frame_rate: f32,
    pub state: AnimState,
    /// Seconds since the last state transition
    pub counter: f32,
    /// +1 facing right, -1 facing left
    pub direction: f32,
    /// Frame shown by the next draw
    pub frame: Frame,
}

impl AnimationController {
    /// Create a controller in the Idle state, facing right
    ///
    /// Fails if the sheet lacks the "Idle" or "Run" clip, or if `frame_rate`
    /// is not a positive number of seconds.
    pub fn new(sheet: &SpriteSheetIndex, frame_rate: f32) -> Result<Self, SheetError> {
        if frame_rate.is_nan() || frame_rate <= 0.0 {
            return Err(SheetError::InvalidFrameRate(frame_rate));
        }

        let idle = sheet.require_clip(AnimState::Idle.clip_name())?;
        let run = sheet.require_clip(AnimState::Running.clip_name())?;
        let frame = idle.frame(0).unwrap_or_default();

        Ok(Self {
            idle,
            run,
            frame_rate,
            state: AnimState::Idle,
            counter: 0.0,
            direction: 1.0,
            frame,
        })
    }

    /// Advance by `dt` seconds; must run after the body's update for this tick
    pub fn update(&mut self, dt: f32, body: &PhysicsBody) {
        self.counter += dt;

        let new_state = AnimState::from_velocity(body.velocity());
        if new_state != self.state {
            debug!("Animation {:?} -> {:?}", self.state, new_state);
            self.state = new_state;
            self.counter = 0.0;
        }

        if let Some(frame) = self.active_clip().frame(self.frame_index()) {
            self.frame = frame;
        }

        // Vertical-only and idle ticks keep the previous facing
        let velocity_x = body.velocity().x;
        if velocity_x != 0.0 {
            self.direction = sign(velocity_x);
        }
    }

    /// Queue the current frame, stretched over the body's rectangle
    pub fn draw<T: RenderTarget + ?Sized>(&self, target: &mut T, body: &PhysicsBody) {
        let rect = body.rect();
        // Sheet art faces left, so facing right draws it mirrored
        let scale = Vec2::new(
            rect.width() / self.frame.width() * -self.direction,
            rect.height() / self.frame.height(),
        );
        let transform = Affine2::from_scale_angle_translation(scale, 0.0, rect.center());

        target.draw_frame(self.frame, transform);
    }

    /// Index of the displayed frame within the active clip
    pub fn frame_index(&self) -> usize {
        let ticks = (self.counter / self.frame_rate).floor() as usize;
        ticks.checked_rem(self.active_clip().len()).unwrap_or(0)
    }

    /// The clip bound to the current state
    pub fn active_clip(&self) -> &AnimationClip {
        match self.state {
            AnimState::Idle => &self.idle,
            AnimState::Running => &self.run,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::Rect;
    use approx::assert_relative_eq;
    use image::RgbaImage;

    /// 10 frames of 32px: Idle is 0..=3, Run is 4..=9
    fn sheet() -> SpriteSheetIndex {
        let surface = RgbaImage::new(320, 32);
        SpriteSheetIndex::from_parts(surface, "Idle,0,3\nRun,4,9", 32).unwrap()
    }

    /// The i-th frame of the strip
    fn strip_frame(i: usize) -> Frame {
        let x = (i * 32) as f32;
        Rect::new(x, 0.0, x + 32.0, 32.0)
    }

    fn controller() -> AnimationController {
        AnimationController::new(&sheet(), DEFAULT_FRAME_RATE).unwrap()
    }

    fn body() -> PhysicsBody {
        PhysicsBody::new(Rect::new(-64.0, -64.0, 64.0, 64.0), 80.0)
    }

    /// Records draw requests instead of compositing
    #[derive(Default)]
    struct Recorder {
        draws: Vec<(Frame, Affine2)>,
    }

    impl RenderTarget for Recorder {
        fn draw_frame(&mut self, frame: Frame, transform: Affine2) {
            self.draws.push((frame, transform));
        }
    }

    #[test]
    fn test_initial_state() {
        let anim = controller();
        assert_eq!(anim.state, AnimState::Idle);
        assert_eq!(anim.counter, 0.0);
        assert_eq!(anim.direction, 1.0);
        assert_eq!(anim.frame, strip_frame(0));
    }

    #[test]
    fn test_missing_clip_fails() {
        let surface = RgbaImage::new(320, 32);
        let sheet = SpriteSheetIndex::from_parts(surface, "Idle,0,3", 32).unwrap();
        let err = AnimationController::new(&sheet, DEFAULT_FRAME_RATE).unwrap_err();
        assert!(matches!(err, SheetError::MissingClip(name) if name == "Run"));
    }

    #[test]
    fn test_non_positive_frame_rate_fails() {
        let sheet = sheet();
        for rate in [0.0, -0.1, f32::NAN] {
            let err = AnimationController::new(&sheet, rate).unwrap_err();
            assert!(matches!(err, SheetError::InvalidFrameRate(_)), "rate = {rate}");
        }
    }

    #[test]
    fn test_zero_velocity_is_idle() {
        let mut anim = controller();
        anim.update(0.05, &body());
        assert_eq!(anim.state, AnimState::Idle);
        assert_relative_eq!(anim.counter, 0.05);
    }

    #[test]
    fn test_moving_body_is_running() {
        let mut anim = controller();
        let mut body = body();
        body.update(0.016, Vec2::new(0.0, 1.0));

        anim.update(0.016, &body);
        assert_eq!(anim.state, AnimState::Running);
        assert_eq!(anim.frame, strip_frame(4));
    }

    #[test]
    fn test_transition_resets_counter_on_that_tick() {
        let mut anim = controller();
        let mut body = body();

        body.update(0.25, Vec2::new(1.0, 0.0));
        anim.update(0.25, &body);
        anim.update(0.25, &body);
        assert_eq!(anim.state, AnimState::Running);
        assert_relative_eq!(anim.counter, 0.25);

        body.update(0.25, Vec2::ZERO);
        anim.update(0.25, &body);
        assert_eq!(anim.state, AnimState::Idle);
        assert_eq!(anim.counter, 0.0);
        assert_eq!(anim.frame_index(), 0);
        assert_eq!(anim.frame, strip_frame(0));
    }

    #[test]
    fn test_frame_advances_with_time() {
        let mut anim = controller();
        let body = body();

        anim.update(0.15, &body);
        assert_eq!(anim.frame_index(), 1);
        assert_eq!(anim.frame, strip_frame(1));

        anim.update(0.1, &body);
        assert_eq!(anim.frame_index(), 2);
    }

    #[test]
    fn test_frame_index_wraps() {
        let mut anim = controller();
        // Idle has 4 frames: 0.45s is tick 4, which wraps to frame 0
        anim.update(0.45, &body());
        assert_eq!(anim.frame_index(), 0);

        anim.update(0.1, &body());
        assert_eq!(anim.frame_index(), 1);
    }

    #[test]
    fn test_frame_index_is_periodic() {
        let body = body();
        let period = 4.0 * DEFAULT_FRAME_RATE;

        for t in [0.05_f32, 0.15, 0.27, 0.38] {
            let mut a = controller();
            let mut b = controller();
            a.update(t, &body);
            b.update(t + period, &body);
            assert_eq!(a.frame_index(), b.frame_index(), "t = {t}");
        }
    }

    #[test]
    fn test_large_dt_skips_frames() {
        let mut anim = controller();
        anim.update(1.25, &body());
        // tick 12 of a 4-frame clip
        assert_eq!(anim.frame_index(), 0);
        anim.update(0.1, &body());
        assert_eq!(anim.frame_index(), 1);
    }

    #[test]
    fn test_facing_follows_horizontal_velocity() {
        let mut anim = controller();
        let mut body = body();

        body.update(0.5, Vec2::new(-1.0, 0.0));
        anim.update(0.5, &body);
        assert_eq!(body.velocity(), Vec2::new(-80.0, 0.0));
        assert_eq!(anim.direction, -1.0);

        body.update(0.5, Vec2::new(1.0, 0.0));
        anim.update(0.5, &body);
        assert_eq!(anim.direction, 1.0);
    }

    #[test]
    fn test_vertical_and_idle_ticks_keep_facing() {
        let mut anim = controller();
        let mut body = body();

        body.update(0.1, Vec2::new(-1.0, 0.0));
        anim.update(0.1, &body);

        body.update(0.1, Vec2::new(0.0, 1.0));
        anim.update(0.1, &body);
        assert_eq!(anim.direction, -1.0);

        body.update(0.1, Vec2::ZERO);
        anim.update(0.1, &body);
        assert_eq!(anim.direction, -1.0);
    }

    #[test]
    fn test_staying_in_state_does_not_restart_clip() {
        let mut anim = controller();
        let mut body = body();

        body.update(0.1, Vec2::new(1.0, 0.0));
        anim.update(0.1, &body);
        // switching axis keeps Running
        body.update(0.1, Vec2::new(0.0, -1.0));
        anim.update(0.15, &body);

        assert_eq!(anim.state, AnimState::Running);
        assert_relative_eq!(anim.counter, 0.15);
        assert_eq!(anim.frame_index(), 1);
        assert_eq!(anim.frame, strip_frame(5));
    }

    #[test]
    fn test_draw_right_facing_is_mirrored() {
        let anim = controller();
        let body = body();
        let mut recorder = Recorder::default();

        anim.draw(&mut recorder, &body);

        assert_eq!(recorder.draws.len(), 1);
        let (frame, transform) = recorder.draws[0];
        assert_eq!(frame, anim.frame);
        // 32px frame stretched to a 128px body, mirrored horizontally
        assert_eq!(transform.matrix2.x_axis, Vec2::new(-4.0, 0.0));
        assert_eq!(transform.matrix2.y_axis, Vec2::new(0.0, 4.0));
        assert_eq!(transform.translation, Vec2::ZERO);
    }

    #[test]
    fn test_draw_left_facing_follows_body_center() {
        let mut anim = controller();
        let mut body = body();
        body.update(0.5, Vec2::new(-1.0, 0.0));
        anim.update(0.5, &body);

        let mut recorder = Recorder::default();
        anim.draw(&mut recorder, &body);

        let (_, transform) = recorder.draws[0];
        assert_eq!(transform.matrix2.x_axis, Vec2::new(4.0, 0.0));
        assert_eq!(transform.translation, Vec2::new(-40.0, 0.0));

        // the drawn quad covers the body's rectangle exactly
        let corner = transform.transform_point2(Vec2::new(-16.0, -16.0));
        assert_eq!(corner, body.rect().min);
    }
}
