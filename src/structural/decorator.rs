//! Decorator: color adjustments stacked in order, applied as a fold.

use std::fmt;

use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({} , {} , {})", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorOperator {
    MakeRedder,
    MakeGreener,
}

impl ColorOperator {
    /// Channels saturate at 255.
    pub fn operate(&self, color: Rgb) -> Rgb {
        match self {
            ColorOperator::MakeRedder => Rgb {
                r: color.r.saturating_add(1),
                ..color
            },
            ColorOperator::MakeGreener => Rgb {
                g: color.g.saturating_add(1),
                ..color
            },
        }
    }
}

/// Operators in application order; the first one sees the input color.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorPipeline {
    operators: Vec<ColorOperator>,
}

impl ColorPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then(mut self, operator: ColorOperator) -> Self {
        self.operators.push(operator);
        self
    }

    pub fn len(&self) -> usize {
        self.operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    pub fn apply(&self, color: Rgb) -> Rgb {
        self.operators.iter().fold(color, |current, operator| {
            let next = operator.operate(current);
            debug!("{:?}: {} -> {}", operator, current, next);
            next
        })
    }
}

impl FromIterator<ColorOperator> for ColorPipeline {
    fn from_iter<I: IntoIterator<Item = ColorOperator>>(iter: I) -> Self {
        Self {
            operators: iter.into_iter().collect(),
        }
    }
}
