use log::{debug, info};

use crate::creational::abstract_factory::{self, CarFactory};
use crate::creational::builder::ApartmentDirector;
use crate::creational::factory_method::{self, VehicleFactory};
use crate::creational::prototype;
use crate::creational::singleton::Singleton;
use crate::demos::errors::DemoError;
use crate::expression::Expression;
use crate::showroom::run_showroom;
use crate::structural::adapter::{RoundHole, RoundRock, SquareRock, SquareRockAdapter};
use crate::structural::bridge::{self, Color};
use crate::structural::decorator::{ColorOperator, ColorPipeline, Rgb};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demo {
    Composite,
    AbstractFactory,
    FactoryMethod,
    Builder,
    Prototype,
    Singleton,
    Adapter,
    Bridge,
    Decorator,
    Showroom,
    All,
}

impl Demo {
    /// Every single-pattern demo, in the order `All` runs them.
    pub const EACH: [Demo; 10] = [
        Demo::AbstractFactory,
        Demo::FactoryMethod,
        Demo::Builder,
        Demo::Prototype,
        Demo::Singleton,
        Demo::Adapter,
        Demo::Bridge,
        Demo::Composite,
        Demo::Decorator,
        Demo::Showroom,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Demo::Composite => "Composite",
            Demo::AbstractFactory => "Abstract Factory",
            Demo::FactoryMethod => "Factory Method",
            Demo::Builder => "Builder",
            Demo::Prototype => "Prototype",
            Demo::Singleton => "Singleton",
            Demo::Adapter => "Adapter",
            Demo::Bridge => "Bridge",
            Demo::Decorator => "Decorator",
            Demo::Showroom => "Showroom",
            Demo::All => "All",
        }
    }
}

/// Run a demo and return the lines it would print.
///
/// # Errors
///
/// Returns an error if an expression in the demo fails to evaluate or the showroom
/// cannot find one of its factories.
pub fn run_demo(demo: Demo) -> Result<Vec<String>, DemoError> {
    info!("Running {} demo", demo.title());

    let lines = match demo {
        Demo::Composite => composite_lines()?,
        Demo::AbstractFactory => abstract_factory_lines(),
        Demo::FactoryMethod => factory_method_lines(),
        Demo::Builder => builder_lines(),
        Demo::Prototype => prototype_lines(),
        Demo::Singleton => vec![Singleton::instance().to_string()],
        Demo::Adapter => adapter_lines(),
        Demo::Bridge => bridge_lines(),
        Demo::Decorator => decorator_lines(),
        Demo::Showroom => run_showroom()?,
        Demo::All => {
            let mut lines = Vec::new();
            for each in Demo::EACH {
                if !lines.is_empty() {
                    lines.push(String::new());
                }
                lines.push(format!("== {} ==", each.title()));
                lines.extend(run_demo(each)?);
            }
            lines
        }
    };

    debug!("{} demo produced {} lines", demo.title(), lines.len());
    Ok(lines)
}

fn composite_lines() -> Result<Vec<String>, DemoError> {
    let sum = Expression::plus(
        Expression::plus(Expression::number(1.0), Expression::number(2.0)),
        Expression::number(3.0),
    );
    let mixed = Expression::plus(
        Expression::number(5.0),
        Expression::minus(Expression::number(3.0), Expression::number(1.0)),
    );

    [sum, mixed]
        .iter()
        .map(|expr| -> Result<String, DemoError> {
            Ok(format!("{} = {}", expr, expr.evaluate()?))
        })
        .collect()
}

fn abstract_factory_lines() -> Vec<String> {
    let factory = abstract_factory::HyundaiFactory;
    vec![
        format!("car_without_a_wheel: {}", factory.create_car()),
        format!("car_with_a_wheel: {}", factory.create_car_with_wheel()),
    ]
}

fn factory_method_lines() -> Vec<String> {
    let (_, message) = factory_method::HyundaiFactory.create_car_and_move();
    vec![message]
}

fn builder_lines() -> Vec<String> {
    let home = ApartmentDirector::create_home();
    vec![
        format!("roof: {}", home.roof),
        format!("rooms: {}", home.rooms),
    ]
}

fn prototype_lines() -> Vec<String> {
    let original = prototype::Shape::Rectangle {
        height: 2.0,
        width: 2.0,
        x: 2.0,
        y: 2.0,
    };
    let copy = original.clone();
    vec![original.describe(), copy.describe()]
}

fn adapter_lines() -> Vec<String> {
    let hole = RoundHole::new(11.0);
    let round = RoundRock::new(10.0);
    let square = SquareRockAdapter::new(SquareRock::new(3.0, 4.0));
    vec![
        format!("Does the rock fit the hole? {}", hole.fits(&round)),
        format!("Does the square rock fit the hole? {}", hole.fits(&square)),
    ]
}

fn bridge_lines() -> Vec<String> {
    [Color::Red, Color::Blue]
        .into_iter()
        .map(|color| bridge::Shape::Circle(color).render())
        .collect()
}

fn decorator_lines() -> Vec<String> {
    let pipeline = ColorPipeline::new()
        .then(ColorOperator::MakeGreener)
        .then(ColorOperator::MakeRedder)
        .then(ColorOperator::MakeRedder);
    vec![pipeline.apply(Rgb::new(1, 1, 1)).to_string()]
}
