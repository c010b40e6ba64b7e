//! Singleton: one lazily created, process-wide instance.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use lazy_static::lazy_static;
use log::debug;

static CREATED: AtomicUsize = AtomicUsize::new(0);

lazy_static! {
    static ref INSTANCE: Singleton = Singleton::create();
}

#[derive(Debug)]
pub struct Singleton {
    _private: (),
}

impl Singleton {
    fn create() -> Self {
        CREATED.fetch_add(1, Ordering::SeqCst);
        debug!("Creating the Singleton instance");
        Self { _private: () }
    }

    /// The one instance, created on first access. Safe to call from any thread.
    pub fn instance() -> &'static Singleton {
        &INSTANCE
    }

    /// How many times the instance has been constructed; never more than one.
    pub fn creation_count() -> usize {
        CREATED.load(Ordering::SeqCst)
    }
}

impl fmt::Display for Singleton {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "This is the Singleton instance.")
    }
}
