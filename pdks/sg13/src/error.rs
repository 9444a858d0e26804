//! Error types for the SG13 technology and its generators.

use thiserror::Error;

use crate::layers::Sg13Layer;

/// The result type returned by fallible SG13 operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// An error loading technology data or generating layout.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested well type is not recognized.
    #[error("invalid well type `{0}` (expected `sub` or `nwell`)")]
    InvalidWell(String),
    /// A requested dimension is not a positive, finite length.
    #[error("invalid {name} {value}: must be a positive, finite length in micrometers")]
    InvalidDimension {
        /// The name of the offending parameter.
        name: &'static str,
        /// The value supplied.
        value: f64,
    },
    /// The technology grid resolution is negative or not finite.
    #[error("invalid grid resolution {0}: must be zero or a positive, finite length")]
    InvalidGrid(f64),
    /// A design rule is negative or not finite.
    #[error("invalid design rule {name} = {value}: must be a non-negative, finite length")]
    InvalidRule {
        /// The technology key of the offending rule.
        name: &'static str,
        /// The value supplied.
        value: f64,
    },
    /// The requested dimensions leave no room for a ring on some layer.
    #[error(
        "guard ring of width {w} and length {l} is too small: \
         the {layer} ring would have no inner boundary"
    )]
    DimensionTooSmall {
        /// The first layer whose ring could not be built.
        layer: Sg13Layer,
        /// The requested width.
        w: f64,
        /// The requested length.
        l: f64,
    },
    /// A technology file could not be read.
    #[error("error reading technology file")]
    Io(#[from] std::io::Error),
    /// A technology file could not be parsed.
    #[error("error parsing technology file")]
    TomlParse(#[from] toml::de::Error),
    /// Technology parameters could not be serialized.
    #[error("error serializing technology parameters")]
    TomlSerialize(#[from] toml::ser::Error),
}
