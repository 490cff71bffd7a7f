//! # reikna_core - Material Estimation Engine
//!
//! `reikna_core` answers free-text Icelandic questions about building
//! materials: how many paving stones, how much bedding sand or concrete,
//! which concrete grade, how long a prefabricated house takes to build, how
//! many bin shelters or benches fit. All inputs and outputs are
//! JSON-serializable.
//!
//! ## Pipeline
//!
//! ```text
//! query ─► intent::classify_intent ─► (kind, parameters) ─► router::compute ─► CalculationResult
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use reikna_core::{classify_intent, compute, CalculationResult, ReferenceData, Settings};
//!
//! let intent = classify_intent("Hvað þarf mikla steypu í 5x4 m plötu 10 cm þykka?").unwrap();
//! let result = compute(intent.kind, &intent.parameters, &Settings::default(), ReferenceData::builtin()).unwrap();
//!
//! let CalculationResult::ConcreteVolume(slab) = result else { panic!() };
//! assert!((slab.volume_m3 - 2.0).abs() < 1e-9);
//! ```
//!
//! ## Modules
//!
//! - [`intent`] - Query classification and parameter extraction
//! - [`router`] - Default substitution and formula dispatch
//! - [`calculations`] - The formula library
//! - [`catalog`] - Products, concrete grades, building types, precast tables
//! - [`settings`] - Router defaults, VAT and currency
//! - [`units`] - Type-safe unit wrappers
//! - [`text`] - Folding and number parsing shared across modules
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod catalog;
pub mod errors;
pub mod intent;
pub mod router;
pub mod settings;
pub mod text;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::CalculationResult;
pub use catalog::ReferenceData;
pub use errors::{CalcError, CalcResult, Constrained};
pub use intent::{classify_intent, CalculationKind, ClassifiedIntent, ParameterSet};
pub use router::{compute, compute_named};
pub use settings::Settings;
