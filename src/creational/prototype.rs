//! Prototype: new shapes are produced by copying an existing one.

/// A positioned shape. Cloning yields an equal but independent copy.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle {
        radius: f64,
        x: f64,
        y: f64,
    },
    Rectangle {
        height: f64,
        width: f64,
        x: f64,
        y: f64,
    },
}

impl Shape {
    pub fn position(&self) -> (f64, f64) {
        match self {
            Shape::Circle { x, y, .. } | Shape::Rectangle { x, y, .. } => (*x, *y),
        }
    }

    pub fn move_to(&mut self, new_x: f64, new_y: f64) {
        match self {
            Shape::Circle { x, y, .. } | Shape::Rectangle { x, y, .. } => {
                *x = new_x;
                *y = new_y;
            }
        }
    }

    /// Field listing, e.g. `{'x': 10, 'y': 20, 'height': 3, 'width': 4}`.
    pub fn describe(&self) -> String {
        match self {
            Shape::Circle { radius, x, y } => {
                format!("{{'x': {}, 'y': {}, 'radius': {}}}", x, y, radius)
            }
            Shape::Rectangle {
                height,
                width,
                x,
                y,
            } => format!(
                "{{'x': {}, 'y': {}, 'height': {}, 'width': {}}}",
                x, y, height, width
            ),
        }
    }
}
