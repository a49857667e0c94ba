use crate::core::math::Rect;
use glam::Vec2;

/// A kinematic body driven by discrete directional input
///
/// The bounding rectangle is the authoritative position. Only one axis of
/// motion is active per tick; there is no diagonal movement.
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicsBody {
    rect: Rect,
    velocity: Vec2,
    run_speed: f32,
}

impl PhysicsBody {
    /// Create a body at rest
    pub fn new(rect: Rect, run_speed: f32) -> Self {
        Self {
            rect,
            velocity: Vec2::ZERO,
            run_speed,
        }
    }

    /// Resolve input into velocity, then integrate position
    ///
    /// `control` components are expected in {-1, 0, 1}. When several
    /// directions are held the priority is left, right, down, up.
    pub fn update(&mut self, dt: f32, control: Vec2) {
        self.velocity = if control.x < 0.0 {
            Vec2::new(-self.run_speed, 0.0)
        } else if control.x > 0.0 {
            Vec2::new(self.run_speed, 0.0)
        } else if control.y < 0.0 {
            Vec2::new(0.0, -self.run_speed)
        } else if control.y > 0.0 {
            Vec2::new(0.0, self.run_speed)
        } else {
            Vec2::ZERO
        };

        // Explicit Euler, no sub-stepping
        self.rect = self.rect.moved(self.velocity * dt);
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }
}
