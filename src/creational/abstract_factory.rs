//! Abstract Factory: a factory produces a family of related parts (a car and its wheel).

use std::fmt;

use log::debug;

/// Anything that can serve as a car's wheel.
pub trait Wheel: fmt::Debug + Send + Sync {
    fn radius(&self) -> f64;
}

impl<'a> fmt::Display for dyn Wheel + 'a {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "This is a wheel in size {:.1}", self.radius())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HyundaiWheel;

impl Wheel for HyundaiWheel {
    fn radius(&self) -> f64 {
        28.0
    }
}

#[derive(Debug)]
pub struct Car {
    name: &'static str,
    wheel: Option<Box<dyn Wheel>>,
}

impl Car {
    pub fn new(name: &'static str) -> Self {
        Self { name, wheel: None }
    }

    pub fn name(&self) -> &str {
        self.name
    }

    pub fn wheel(&self) -> Option<&dyn Wheel> {
        self.wheel.as_deref()
    }

    pub fn set_wheel(&mut self, wheel: Box<dyn Wheel>) {
        self.wheel = Some(wheel);
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Car of type {} with a wheel: ", self.name)?;
        match self.wheel() {
            Some(wheel) => write!(f, "{}", wheel),
            None => write!(f, "None"),
        }
    }
}

/// Produces cars together with wheels that match them.
pub trait CarFactory: Send + Sync {
    /// Name the factory is registered under.
    fn name(&self) -> &'static str;

    fn create_car(&self) -> Car;

    fn create_wheel(&self) -> Box<dyn Wheel>;

    fn create_car_with_wheel(&self) -> Car {
        let mut car = self.create_car();
        let wheel = self.create_wheel();
        debug!("Fitting {} with a wheel of radius {}", car.name(), wheel.radius());
        car.set_wheel(wheel);
        car
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HyundaiFactory;

impl CarFactory for HyundaiFactory {
    fn name(&self) -> &'static str {
        "Hyundai"
    }

    fn create_car(&self) -> Car {
        Car::new("Hyundai")
    }

    fn create_wheel(&self) -> Box<dyn Wheel> {
        Box::new(HyundaiWheel)
    }
}
