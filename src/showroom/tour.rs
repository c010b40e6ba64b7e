use log::info;

use crate::creational::abstract_factory::HyundaiFactory;
use crate::creational::builder::ApartmentDirector;
use crate::creational::factory_method::{self, VehicleFactory};
use crate::creational::prototype::Shape;
use crate::creational::singleton::Singleton;
use crate::showroom::errors::ShowroomError;
use crate::showroom::registry::FactoryRegistry;

/// Walk through every creational pattern, returning the lines to print.
///
/// # Errors
///
/// Returns an error if the showroom's own factory cannot be found in its registry.
pub fn run_showroom() -> Result<Vec<String>, ShowroomError> {
    info!("Opening the showroom");

    let mut registry = FactoryRegistry::new();
    registry.register(Box::new(HyundaiFactory));

    let mut lines = Vec::new();

    lines.push("Abstract Factory Example:".to_string());
    let factory = registry.get("Hyundai")?;
    lines.push(format!("Car with wheel: {}", factory.create_car_with_wheel()));
    lines.push(format!("Car without wheel: {}", factory.create_car()));

    lines.push(String::new());
    lines.push("Factory Method Example:".to_string());
    let (_, message) = factory_method::HyundaiFactory.create_car_and_move();
    lines.push(message);

    lines.push(String::new());
    lines.push("Builder Example:".to_string());
    let apartment = ApartmentDirector::create_home();
    lines.push(format!(
        "Home constructed: {}, rooms: {}, garden: {}",
        apartment.roof, apartment.rooms, apartment.garden
    ));

    lines.push(String::new());
    lines.push("Prototype Example:".to_string());
    let prototype = Shape::Rectangle {
        height: 3.0,
        width: 4.0,
        x: 10.0,
        y: 20.0,
    };
    let cloned = prototype.clone();
    lines.push(format!("Original Rectangle: {}", prototype.describe()));
    lines.push(format!("Cloned Rectangle: {}", cloned.describe()));

    lines.push(String::new());
    lines.push("Singleton Example:".to_string());
    let same = std::ptr::eq(Singleton::instance(), Singleton::instance());
    lines.push(format!("Are both instances the same? {}", same));
    lines.push(format!("Registered factories: {}", registry.names().join(", ")));

    Ok(lines)
}
