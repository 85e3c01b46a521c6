//! Prelude module.
//!
//! You may import all symbols within for convenient usage of this library.
//!
//! # Example
//!
//! ```ignore
//! use dcmdata_core::prelude::*;
//! ```

pub use crate::DataDictionary as _;
pub use crate::{NumericKind, Tag, VrClass, VR};
