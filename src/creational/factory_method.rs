//! Factory Method: subclasses of a factory decide which car model gets built.

use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarModel {
    Hyundai,
    Kaya,
}

impl CarModel {
    pub fn product_name(&self) -> &'static str {
        match self {
            CarModel::Hyundai => "Hyundai",
            CarModel::Kaya => "Kaya",
        }
    }
}

/// A car that knows where it is along one axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovingCar {
    model: CarModel,
    current_x: i64,
}

impl MovingCar {
    pub fn new(model: CarModel) -> Self {
        Self {
            model,
            current_x: 0,
        }
    }

    pub fn model(&self) -> CarModel {
        self.model
    }

    pub fn position(&self) -> i64 {
        self.current_x
    }

    /// Move to `x`, returning the announcement of the trip.
    pub fn move_to(&mut self, x: i64) -> String {
        let message = format!(
            "the car ({}) will move from {} to {}",
            self.model.product_name(),
            self.current_x,
            x
        );
        debug!("{}", message);
        self.current_x = x;
        message
    }
}

pub trait VehicleFactory {
    fn create_car(&self) -> MovingCar;

    fn create_car_and_move(&self) -> (MovingCar, String) {
        let mut car = self.create_car();
        let message = car.move_to(5);
        (car, message)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HyundaiFactory;

impl VehicleFactory for HyundaiFactory {
    fn create_car(&self) -> MovingCar {
        MovingCar::new(CarModel::Hyundai)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct KayaFactory;

impl VehicleFactory for KayaFactory {
    fn create_car(&self) -> MovingCar {
        MovingCar::new(CarModel::Kaya)
    }
}
