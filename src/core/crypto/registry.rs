/*!
Registry of cipher names.

Maps variant identifiers and their historical aliases to
[`CipherAlgorithm`] so a presentation layer can select a cipher by name.
The registry is built once and never changes afterwards.
*/

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::core::crypto::types::CipherAlgorithm;
use crate::core::error::{Error, Result};

/// Registry of supported cipher algorithms
pub struct CipherRegistry {
    /// Lowercase name to algorithm
    algorithms: HashMap<&'static str, CipherAlgorithm>,
}

impl CipherRegistry {
    /// Create a registry with every built-in name
    fn new() -> Self {
        let mut registry = Self {
            algorithms: HashMap::new(),
        };

        for algorithm in CipherAlgorithm::all() {
            registry.register(algorithm.identifier(), algorithm);
        }

        // Historical names
        registry.register("caesar", CipherAlgorithm::Shift);
        registry.register("vigenere", CipherAlgorithm::Polyalphabetic);
        registry.register("vigenère", CipherAlgorithm::Polyalphabetic);
        registry.register("playfair", CipherAlgorithm::Digraph);

        registry
    }

    fn register(&mut self, name: &'static str, algorithm: CipherAlgorithm) {
        self.algorithms.insert(name, algorithm);
    }

    /// Look up an algorithm; case-insensitive, surrounding whitespace ignored
    pub fn get(&self, name: &str) -> Option<CipherAlgorithm> {
        let name = name.trim().to_lowercase();
        self.algorithms.get(name.as_str()).copied()
    }

    /// Every registered name, sorted
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.algorithms.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

// Global registry instance
static REGISTRY: Lazy<CipherRegistry> = Lazy::new(CipherRegistry::new);

/// Get a reference to the global registry
pub fn get_registry() -> &'static CipherRegistry {
    &REGISTRY
}

/// Get an algorithm by name
pub fn get_algorithm(name: &str) -> Option<CipherAlgorithm> {
    get_registry().get(name)
}

/// Get an algorithm by name, failing with `UnknownAlgorithm`
pub fn lookup(name: &str) -> Result<CipherAlgorithm> {
    get_algorithm(name).ok_or_else(|| Error::UnknownAlgorithm(name.to_string()))
}

/// List the variant identifiers, sorted
pub fn list_algorithms() -> Vec<&'static str> {
    let mut identifiers: Vec<&'static str> =
        CipherAlgorithm::all().iter().map(|a| a.identifier()).collect();
    identifiers.sort_unstable();
    identifiers
}
