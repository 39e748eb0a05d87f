//! Error types for edit-cost computation.
//!
//! Both variants signal malformed input data from the label-loading layer.
//! Neither is transient: the caller is expected to surface them, not retry.

use thiserror::Error;

/// Result type alias for cost-model operations.
pub type CostResult<T> = Result<T, CostModelError>;

/// Errors raised while comparing or aggregating labels.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CostModelError {
    /// A required attribute key is absent from one of the labels involved.
    #[error("attribute `{key}` is missing from a label")]
    MissingAttribute {
        /// The attribute key that could not be found.
        key: String,
    },

    /// An attribute value could not be parsed as a real number.
    #[error("attribute `{key}` has non-numeric value `{value}`")]
    NonNumericAttribute {
        /// The attribute key whose value failed to parse.
        key: String,
        /// The raw text value as stored in the label.
        value: String,
        /// The underlying parse failure.
        #[source]
        source: std::num::ParseFloatError,
    },
}
