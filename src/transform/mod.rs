//! # Transform System
//!
//! Transforms are pure, total functions from text to text. Each one is
//! registered under a stable name so the fixture harness can bind to it
//! without depending on its implementation.
//!
//! ## Module Structure
//!
//! - **`rewrite`**: word-level rewrite engine
//! - **`base`**: `some_function`
//! - **`helpers`**: `helper_function`

use im::HashMap;
use tracing::{debug, trace};

use crate::GoldcaseError;

pub mod base;
pub mod helpers;
pub mod rewrite;

pub use self::base::some_function;
pub use self::helpers::helper_function;

pub const SOME_FUNCTION: &str = "some_function";
pub const HELPER_FUNCTION: &str = "helper_function";

/// Transform function type. Implementations must not keep state between
/// calls.
pub type TransformFn = fn(&str) -> String;

// Names accepted for fixtures written against the camelCase identifiers.
const ALIASES: &[(&str, &str)] = &[
    ("someFunction", SOME_FUNCTION),
    ("helperFunction", HELPER_FUNCTION),
];

/// Registry of named transforms, inspectable at runtime.
#[derive(Default, Clone)]
pub struct TransformRegistry {
    pub transforms: HashMap<String, TransformFn>,
}

impl TransformRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: &str, func: TransformFn) {
        self.transforms.insert(name.to_string(), func);
    }

    pub fn get(&self, name: &str) -> Option<TransformFn> {
        self.transforms.get(canonical_name(name)).copied()
    }

    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Registered names, sorted.
    pub fn list(&self) -> Vec<String> {
        let mut names: Vec<String> = self.transforms.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Looks up `name`, failing with a setup error when nothing is registered
    /// under it or any of its aliases.
    pub fn resolve(&self, name: &str) -> Result<TransformFn, GoldcaseError> {
        if let Some(func) = self.get(name) {
            trace!(transform = name, "resolved transform");
            return Ok(func);
        }
        debug!(transform = name, "transform not registered");
        Err(GoldcaseError::UnknownTransform {
            name: name.to_string(),
            help: self.suggest(name),
        })
    }

    /// Resolves `name` and applies it to `input`.
    pub fn apply(&self, name: &str, input: &str) -> Result<String, GoldcaseError> {
        let func = self.resolve(name)?;
        Ok(func(input))
    }

    fn suggest(&self, name: &str) -> Option<String> {
        let lowered = name.to_lowercase().replace(['-', '_'], "");
        let hit = self
            .list()
            .into_iter()
            .find(|known| known.to_lowercase().replace('_', "") == lowered);
        match hit {
            Some(known) => Some(format!("did you mean '{}'?", known)),
            None if self.is_empty() => None,
            None => Some(format!("registered transforms: {}", self.list().join(", "))),
        }
    }
}

fn canonical_name(name: &str) -> &str {
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(name)
}

/// Registers every built-in transform.
pub fn register_all_transforms(registry: &mut TransformRegistry) {
    registry.register(SOME_FUNCTION, some_function);
    registry.register(HELPER_FUNCTION, helper_function);
}

/// Builds the canonical registry used by the CLI and the harness.
pub fn build_default_registry() -> TransformRegistry {
    let mut registry = TransformRegistry::new();
    register_all_transforms(&mut registry);
    registry
}
