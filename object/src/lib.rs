#![allow(clippy::derive_partial_eq_without_eq)]
//! This crate contains the in-memory DICOM data model:
//! data elements holding typed values,
//! data sets which gather elements by tag,
//! and sequences which nest data sets inside elements.
//!
//! - An [`Element`] is created from a tag,
//!   which a [data dictionary](dcmdata_core::DataDictionary)
//!   resolves into a value representation.
//!   A value is then assigned once, and validated against that representation
//!   (see the [`element`] module).
//! - A [`Dataset`] owns its elements, at most one per tag.
//! - A [`Sequence`] owns an ordered list of data set items,
//!   and is itself the value of a data element with the VR `SQ`.
//!
//! Data sets and sequences can be locked,
//! after which nothing can be added to them or removed from them.
//! Appending a data set to a sequence locks the data set,
//! and assigning a sequence to a data element locks the sequence,
//! so whatever hangs below an element value is fixed in its composition.
//!
//! # Example
//!
//! ```
//! use dcmdata_object::{Dataset, Element, Sequence};
//! use dcmdata_dictionary_std::tags;
//! # fn run() -> dcmdata_object::Result<()> {
//! let mut item = Dataset::new();
//! let mut uid = Element::new(tags::REFERENCED_SOP_INSTANCE_UID, 0)?;
//! uid.set_value_string("1.2.840.10008.5.1.4.1.1.2")?;
//! item.insert(uid)?;
//!
//! let mut items = Sequence::new();
//! items.append(item)?;
//!
//! let mut references = Element::new(tags::REFERENCED_IMAGE_SEQUENCE, 0)?;
//! references.set_value_sequence(items)?;
//!
//! let mut obj = Dataset::new();
//! obj.insert(references)?;
//!
//! let item = obj.get(tags::REFERENCED_IMAGE_SEQUENCE)?.value_sequence()?.get(0)?;
//! assert!(item.is_locked());
//! assert_eq!(
//!     item.get(tags::REFERENCED_SOP_INSTANCE_UID)?.value_string(0)?,
//!     "1.2.840.10008.5.1.4.1.1.2",
//! );
//! # Ok(())
//! # }
//! # run().unwrap();
//! ```
//!
//! Printing a data set lists one element per line, see [`dump`].
pub mod dataset;
pub mod dump;
pub mod element;
mod error;
pub mod pixeldata;
pub mod sequence;
pub mod value;

pub use crate::dataset::Dataset;
pub use crate::dump::DumpOptions;
pub use crate::element::Element;
pub use crate::error::{Error, Result};
pub use crate::pixeldata::{
    is_encapsulated_transfer_syntax, BasicOffsetTable, Frame, PixelDescription,
};
pub use crate::sequence::Sequence;
pub use crate::value::{NumericValue, Value, C};
pub use dcmdata_core::{Tag, VR};
pub use dcmdata_dictionary_std::StandardDataDictionary;

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn model_is_send_and_sync() {
        assert_send_sync::<Element>();
        assert_send_sync::<Dataset>();
        assert_send_sync::<Sequence>();
        assert_send_sync::<Frame>();
    }

    #[test]
    fn errors_display() {
        let err = Element::new(Tag(0x0011, 0x1010), 0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown tag (0011,1010): not found in the data dictionary"
        );
    }
}
