//! Builder: a home assembled step by step, with a director that knows the recipe.

use log::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Home {
    pub roof: bool,
    pub garden: bool,
    pub rooms: u32,
}

impl Default for Home {
    fn default() -> Self {
        Self {
            roof: false,
            garden: true,
            rooms: 0,
        }
    }
}

#[derive(Debug, Default)]
pub struct HomeBuilder {
    home: Home,
}

impl HomeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build_roof(mut self) -> Self {
        self.home.roof = true;
        self
    }

    pub fn build_room(mut self) -> Self {
        self.home.rooms += 1;
        self
    }

    pub fn build(self) -> Home {
        debug!("Finished building {:?}", self.home);
        self.home
    }
}

pub struct ApartmentDirector;

impl ApartmentDirector {
    pub const ROOMS: u32 = 3;

    /// An apartment: three rooms under a roof.
    pub fn create_home() -> Home {
        (0..Self::ROOMS)
            .fold(HomeBuilder::new(), |builder, _| builder.build_room())
            .build_roof()
            .build()
    }
}
