//! This crate implements the standard DICOM attribute dictionary
//! and the tag constants used throughout the data model.
//!
//! - [`data_element`]: the run-time dictionary,
//!   mapping tags to their keyword and canonical value representation.
//!   It is the dictionary consulted by default
//!   when creating data elements and when printing data sets.
//! - [`tags`]: compile-time constants mapping an attribute keyword
//!   to its DICOM tag, without any look-up cost.
//!
//! The records are collected from [DICOM PS3.6].
//! Only a subset of the registry is currently covered,
//! but any other [`DataDictionary`](dcmdata_core::DataDictionary)
//! implementation can be plugged in where a wider one is needed.
//!
//! [DICOM PS3.6]: https://dicom.nema.org/medical/dicom/current/output/chtml/part06/ps3.6.html
pub mod data_element;
pub mod tags;

pub use data_element::{registry, StandardDataDictionary, StandardDataDictionaryRegistry};
