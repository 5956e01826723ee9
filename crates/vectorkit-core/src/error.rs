//! Error handling for VectorKit
//!
//! Provides the error taxonomy shared by every layer of the editor core:
//! - Geometry errors (non-finite or out-of-range shape parameters)
//! - Property errors (edits that do not fit the targeted property)
//! - Command errors (aggregate failures of dispatched edits and history)
//!
//! All error types use `thiserror` for ergonomic error handling. Every one of
//! them is recoverable: the caller keeps its prior, valid state.

use thiserror::Error;

use crate::types::ShapeId;

/// Geometry error type
///
/// Raised by shape constructors and setters when a value, or a value derived
/// from it, would break a shape invariant.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A coordinate or parameter is NaN or infinite
    #[error("Non-finite value for {field}: {value}")]
    NonFinite {
        /// The name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A lower bound is not strictly below its upper bound
    #[error("Invalid range for {field}: {min} must be lower than {max}")]
    InvalidRange {
        /// The name of the range.
        field: &'static str,
        /// The requested lower bound.
        min: f64,
        /// The requested upper bound.
        max: f64,
    },

    /// A magnitude that must be strictly positive is not
    #[error("{field} must be strictly positive, got {value}")]
    NotPositive {
        /// The name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A magnitude that may be zero is negative
    #[error("{field} must not be negative, got {value}")]
    Negative {
        /// The name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A count is out of its valid domain
    #[error("Invalid count for {field}: {value}")]
    InvalidCount {
        /// The name of the offending field.
        field: &'static str,
        /// The rejected count.
        value: u32,
    },

    /// A plot equation cannot be parsed or evaluated
    #[error("Invalid plot equation '{equation}': {reason}")]
    InvalidEquation {
        /// The equation source text.
        equation: String,
        /// Why the equation was rejected.
        reason: String,
    },

    /// A sampled plot point is not finite
    #[error("Plot sample {index} at x={x} is not finite")]
    NonFiniteSample {
        /// Index of the sample in the point sequence.
        index: usize,
        /// Abscissa the equation was evaluated at.
        x: f64,
    },
}

impl GeometryError {
    /// Check a value for finiteness, naming the field on failure.
    pub fn check_finite(field: &'static str, value: f64) -> std::result::Result<f64, GeometryError> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(GeometryError::NonFinite { field, value })
        }
    }

    /// Check that a value is finite and strictly positive.
    pub fn check_positive(field: &'static str, value: f64) -> std::result::Result<f64, GeometryError> {
        let value = Self::check_finite(field, value)?;
        if value > 0.0 {
            Ok(value)
        } else {
            Err(GeometryError::NotPositive { field, value })
        }
    }

    /// Check that a value is finite and zero or above.
    pub fn check_non_negative(
        field: &'static str,
        value: f64,
    ) -> std::result::Result<f64, GeometryError> {
        let value = Self::check_finite(field, value)?;
        if value >= 0.0 {
            Ok(value)
        } else {
            Err(GeometryError::Negative { field, value })
        }
    }
}

/// Property error type
///
/// Raised when an edit names a property the shape does not carry, or carries a
/// value of the wrong kind.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PropertyError {
    /// The value kind does not match the property
    #[error("Property {property} expects a {expected} value")]
    TypeMismatch {
        /// The property being edited.
        property: String,
        /// The expected value kind.
        expected: &'static str,
    },

    /// The shape kind does not carry the property
    #[error("Property {property} is not supported by {shape}")]
    Unsupported {
        /// The property being edited.
        property: String,
        /// The shape kind that lacks it.
        shape: String,
    },
}

/// Command error type
///
/// Represents failures of a dispatched edit taken as a whole, and of the
/// undo/redo history.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommandError {
    /// One eligible shape rejected the edit; the whole command was rolled back
    #[error("Shape {shape_id} rejected {property}: {source}")]
    Rejected {
        /// The first shape that rejected the edit.
        shape_id: ShapeId,
        /// The property being edited.
        property: String,
        /// The underlying validation failure.
        source: Box<Error>,
    },

    /// The referenced shape is not in the store
    #[error("Shape {0} not found")]
    ShapeNotFound(ShapeId),

    /// The undo stack is empty
    #[error("Nothing to undo")]
    NothingToUndo,

    /// The redo stack is empty
    #[error("Nothing to redo")]
    NothingToRedo,
}

/// Main error type for VectorKit
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Property error
    #[error(transparent)]
    Property(#[from] PropertyError),

    /// Command error
    #[error(transparent)]
    Command(#[from] CommandError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a geometry error
    pub fn is_geometry_error(&self) -> bool {
        matches!(self, Error::Geometry(_))
    }

    /// Check if this is a property error
    pub fn is_property_error(&self) -> bool {
        matches!(self, Error::Property(_))
    }

    /// Check if this is a command error
    pub fn is_command_error(&self) -> bool {
        matches!(self, Error::Command(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
