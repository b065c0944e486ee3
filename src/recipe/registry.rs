use std::collections::BTreeMap;
use thiserror::Error;

use super::Recipe;
use super::chaos::UnidChaosRecipe;

pub type RecipeFactory = fn() -> Box<dyn Recipe>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("recipe {0:?} is already registered")]
    Duplicate(String),

    #[error("unknown recipe {0:?}")]
    Unknown(String),
}

/// Recipes available to the scanner, by name
#[derive(Default)]
pub struct RecipeRegistry {
    factories: BTreeMap<String, RecipeFactory>,
}

impl RecipeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in recipe
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry
            .factories
            .insert("unid_chaos".to_string(), || Box::new(UnidChaosRecipe::new()));
        registry
    }

    pub fn register(&mut self, name: &str, factory: RecipeFactory) -> Result<(), RegistryError> {
        if self.factories.contains_key(name) {
            return Err(RegistryError::Duplicate(name.to_string()));
        }
        self.factories.insert(name.to_string(), factory);
        Ok(())
    }

    pub fn create(&self, name: &str) -> Result<Box<dyn Recipe>, RegistryError> {
        self.factories
            .get(name)
            .map(|factory| factory())
            .ok_or_else(|| RegistryError::Unknown(name.to_string()))
    }

    /// Registered names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.factories.keys().map(String::as_str)
    }
}
