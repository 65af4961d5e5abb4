use std::ops::{Add, Mul, Sub};

/// First-order low-pass tracker: each step moves `rate` of the remaining
/// distance toward the target.
///
/// Used for the plane rotation (`glam::Vec2`, rate 0.05) and the overlay hue
/// (`f32`, rate 0.075). With `rate` in `(0, 1]` the residual shrinks by a
/// factor of `1 - rate` per step and never changes sign.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Damped<T> {
    value: T,
    rate: f32,
}

impl<T> Damped<T>
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<f32, Output = T>,
{
    pub fn new(initial: T, rate: f32) -> Self {
        Self {
            value: initial,
            rate: rate.clamp(0.0, 1.0),
        }
    }

    #[inline]
    pub fn value(&self) -> T {
        self.value
    }

    /// Advance one step toward `target` and return the new value.
    #[inline]
    pub fn step(&mut self, target: T) -> T {
        self.value = self.value + (target - self.value) * self.rate;
        self.value
    }
}
