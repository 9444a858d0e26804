//! The IHP SG13 process family.
//!
//! Provides the technology's layer set, its design rules as a
//! strongly-typed [`TechParams`] structure, and the [`gring`] guard
//! ring generator.
//!
//! # Examples
//!
//! ```
//! use sg13::gring::{GuardRingParams, Well};
//! use sg13::{Sg13Layer, TechParams};
//!
//! let tech = TechParams::sg13g2();
//! let params = GuardRingParams::builder()
//!     .w(2.)
//!     .l(3.)
//!     .well(Well::Sub)
//!     .build()
//!     .unwrap();
//! let cell = params.draw(&tech).unwrap();
//! assert_eq!(cell.shapes_on(&Sg13Layer::PSd).count(), 1);
//! ```
#![warn(missing_docs)]

pub mod error;
pub mod gring;
pub mod layers;
pub mod tech;

pub use error::{Error, Result};
pub use layers::Sg13Layer;
pub use tech::TechParams;
