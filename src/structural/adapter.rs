//! Adapter: a square rock made to look round so a round hole can judge it.

use log::debug;

/// Anything with a radius a [`RoundHole`] can compare against.
pub trait Rounded {
    fn radius(&self) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundRock {
    pub radius: f64,
}

impl RoundRock {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Rounded for RoundRock {
    fn radius(&self) -> f64 {
        self.radius
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundHole {
    pub radius: f64,
}

impl RoundHole {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    /// A rock fits when its radius is strictly smaller than the hole's.
    pub fn fits(&self, rock: &impl Rounded) -> bool {
        let radius = rock.radius();
        debug!("Checking rock of radius {} against hole of radius {}", radius, self.radius);
        radius < self.radius
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquareRock {
    pub width: f64,
    pub height: f64,
}

impl SquareRock {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquareRockAdapter {
    rock: SquareRock,
}

impl SquareRockAdapter {
    pub fn new(rock: SquareRock) -> Self {
        Self { rock }
    }

    pub fn rock(&self) -> &SquareRock {
        &self.rock
    }
}

impl Rounded for SquareRockAdapter {
    /// The full diagonal of the square, not half of it.
    // TODO: the bounding circle's radius is half this diagonal
    fn radius(&self) -> f64 {
        self.rock.width.hypot(self.rock.height)
    }
}
