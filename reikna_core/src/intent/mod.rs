//! # Intent Pipeline
//!
//! Turns a free-text Icelandic query into a [`CalculationKind`] and a
//! [`ParameterSet`]:
//!
//! 1. [`classifier`] picks the kind from an ordered rule table
//! 2. [`extractors`] pull every recognizable fact out of the text
//! 3. parameters read from the classifier's own match groups (price
//!    quantity and product) are layered on top
//!
//! ## Example
//!
//! ```
//! use reikna_core::intent::{classify_intent, CalculationKind};
//!
//! let intent = classify_intent("Hversu margar hellur þarf ég á 5x4 m plan?").unwrap();
//! assert_eq!(intent.kind, CalculationKind::PavingStones);
//! assert_eq!(intent.parameters.length, Some(5.0));
//! assert_eq!(intent.parameters.width, Some(4.0));
//! ```

pub mod classifier;
pub mod extractors;
pub mod kind;
pub mod parameters;

use serde::{Deserialize, Serialize};

pub use classifier::{detect_calculation_intent, Confidence, DetectedIntent};
pub use extractors::extract_parameters;
pub use kind::CalculationKind;
pub use parameters::ParameterSet;

/// A classified query, ready for the router
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedIntent {
    pub kind: CalculationKind,
    pub parameters: ParameterSet,
    pub confidence: Confidence,
}

/// Classify a query and extract its parameters.
///
/// Returns `None` when the query matches no kind.
pub fn classify_intent(query: &str) -> Option<ClassifiedIntent> {
    let detected = detect_calculation_intent(query)?;
    let parameters = extract_parameters(query).merged(detected.raw_parameters);

    tracing::debug!(
        kind = %detected.kind,
        confidence = ?detected.confidence,
        "classified query"
    );

    Some(ClassifiedIntent {
        kind: detected.kind,
        parameters,
        confidence: detected.confidence,
    })
}
