//! Strategy factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::element::Element;
use crate::error::StrassenError;
use crate::options::Options;
use crate::strategy::{Multiplier, NaiveStrategy, ParallelStrassenStrategy, StrassenStrategy};

/// Factory trait for creating multiplication strategies.
pub trait StrategyFactory<T: Element>: Send + Sync {
    /// Get or create a strategy by name.
    fn get(&self, name: &str) -> Result<Arc<dyn Multiplier<T>>, StrassenError>;

    /// List all available strategy names.
    fn available(&self) -> Vec<&str>;
}

/// Default factory with lazy creation and cache.
pub struct DefaultFactory<T: Element> {
    opts: Options,
    cache: RwLock<HashMap<String, Arc<dyn Multiplier<T>>>>,
}

impl<T: Element> DefaultFactory<T> {
    /// Create a factory whose strategies use the given options.
    #[must_use]
    pub fn new(opts: Options) -> Self {
        Self {
            opts,
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn create_strategy(&self, name: &str) -> Result<Arc<dyn Multiplier<T>>, StrassenError> {
        match name {
            "naive" => Ok(Arc::new(NaiveStrategy::new())),
            "strassen" => Ok(Arc::new(StrassenStrategy::new(&self.opts))),
            "parallel" => Ok(Arc::new(ParallelStrassenStrategy::new(&self.opts))),
            _ => Err(StrassenError::Config(format!("unknown strategy: {name}"))),
        }
    }
}

impl<T: Element> Default for DefaultFactory<T> {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl<T: Element> StrategyFactory<T> for DefaultFactory<T> {
    fn get(&self, name: &str) -> Result<Arc<dyn Multiplier<T>>, StrassenError> {
        if let Some(strat) = self.cache.read().get(name) {
            return Ok(Arc::clone(strat));
        }

        let strat = self.create_strategy(name)?;
        self.cache
            .write()
            .insert(name.to_string(), Arc::clone(&strat));
        Ok(strat)
    }

    fn available(&self) -> Vec<&str> {
        vec!["naive", "strassen", "parallel"]
    }
}
