use log::{debug, warn};

use crate::creational::abstract_factory::CarFactory;
use crate::showroom::errors::ShowroomError;

/// Factories known to the showroom, in registration order.
///
/// Constructed by the caller and passed around explicitly.
#[derive(Default)]
pub struct FactoryRegistry {
    factories: Vec<Box<dyn CarFactory>>,
}

impl FactoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, factory: Box<dyn CarFactory>) {
        debug!("Registering factory '{}'", factory.name());
        self.factories.push(factory);
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.factories.iter().map(|f| f.name()).collect()
    }

    /// # Errors
    ///
    /// Returns [`ShowroomError::UnknownFactory`] when nothing is registered under `name`.
    pub fn get(&self, name: &str) -> Result<&dyn CarFactory, ShowroomError> {
        self.factories
            .iter()
            .find(|f| f.name() == name)
            .map(|f| f.as_ref())
            .ok_or_else(|| {
                warn!("Factory '{}' is not registered", name);
                ShowroomError::UnknownFactory(name.to_string())
            })
    }
}
