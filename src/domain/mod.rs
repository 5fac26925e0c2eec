//! Domain layer for the Restloop plugin.
//!
//! Core types with no dependency on Zellij or on rendering.
//!
//! # Organization
//!
//! - [`error`]: Error types and result alias
//! - [`rest_point`]: Rest point record, creation input and patch
//! - [`category`]: Top-level view categories
//!
//! # Examples
//!
//! ```
//! use restloop::domain::{Category, NewRestPoint};
//!
//! let input = NewRestPoint {
//!     name: "Roadside Stop".to_string(),
//!     postcode: "2000".to_string(),
//!     ..NewRestPoint::default()
//! };
//! assert_eq!(Category::default(), Category::RestPoints);
//! assert!(input.phone.is_none());
//! ```

pub mod category;
pub mod error;
pub mod rest_point;

pub use category::Category;
pub use error::{RestloopError, Result};
pub use rest_point::{normalize_phone, Coordinates, NewRestPoint, RestPoint, RestPointPatch};
