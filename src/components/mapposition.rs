//! World-space position of an entity.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct MapPosition {
    pub x: f32,
    pub y: f32,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        MapPosition { x, y }
    }

    /// Linear interpolation between `self` (t = 0) and `other` (t = 1).
    pub fn lerp(self, other: MapPosition, t: f32) -> MapPosition {
        MapPosition {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    /// Position displaced by `(dx, dy)`.
    pub fn offset(self, dx: f32, dy: f32) -> MapPosition {
        MapPosition {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn distance(self, other: MapPosition) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}
