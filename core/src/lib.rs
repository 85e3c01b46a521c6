#![crate_type = "lib"]
#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    unused_import_braces
)]

//! This is the core library of dcmdata, containing the concepts
//! shared by every other crate in the project.
//!
//! The current structure of this crate is as follows:
//!
//! - [`header`] comprises the data types for identifying DICOM data elements:
//!   the attribute [`Tag`] and the value representation [`VR`],
//!   along with the classification, capacity and width tables
//!   which drive value validation.
//! - [`dictionary`] describes common behavior of DICOM data dictionaries,
//!   which translate attribute names and/or tags to a dictionary entry
//!   containing relevant information about the attribute.
//!
//! [`dictionary`]: ./dictionary/index.html
//! [`header`]: ./header/index.html

pub mod dictionary;
pub mod header;
pub mod prelude;

pub use dictionary::DataDictionary;
pub use header::{NumericKind, Tag, VrClass, VR};
