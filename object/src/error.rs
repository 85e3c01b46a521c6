//! Error type shared by every fallible operation of the data model.

use dcmdata_core::{Tag, VR};
use snafu::{Backtrace, Snafu};

/// An error which may occur when creating, assigning, reading
/// or composing data elements, data sets and sequences.
///
/// The variant tells the kind of failure,
/// and its [`Display`](std::fmt::Display) implementation
/// provides a human-readable message.
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// The data dictionary knows no value representation for this tag
    #[snafu(display("Unknown tag {}: not found in the data dictionary", tag))]
    UnknownTag { tag: Tag, backtrace: Backtrace },

    /// The value was accessed or assigned as the wrong kind for the element's VR
    #[snafu(display("Data element {} with VR {} does not hold {}", tag, vr, expected))]
    TypeMismatch {
        tag: Tag,
        vr: VR,
        expected: &'static str,
        backtrace: Backtrace,
    },

    /// A value can only be assigned once
    #[snafu(display("Data element {} already has a value", tag))]
    AlreadyAssigned { tag: Tag, backtrace: Backtrace },

    /// The element was read before a value was assigned
    #[snafu(display("Data element {} has no value", tag))]
    NotAssigned { tag: Tag, backtrace: Backtrace },

    /// No value, item or frame at this position
    #[snafu(display("Index {} is out of range, there are only {} values", index, len))]
    IndexOutOfRange {
        index: usize,
        len: usize,
        backtrace: Backtrace,
    },

    /// A textual value is longer than its VR allows
    #[snafu(display(
        "Value of data element {} is too long for VR {}: {} bytes, maximum is {}",
        tag,
        vr,
        length,
        capacity
    ))]
    CapacityExceeded {
        tag: Tag,
        vr: VR,
        length: usize,
        capacity: u32,
        backtrace: Backtrace,
    },

    /// At most one element per tag can be in a data set
    #[snafu(display("Data set already contains an element with tag {}", tag))]
    DuplicateTag { tag: Tag, backtrace: Backtrace },

    /// The data set has no element with this tag
    #[snafu(display("No such data element with tag {}", tag))]
    NotFound { tag: Tag, backtrace: Backtrace },

    /// The container was locked and can no longer be modified
    #[snafu(display("{} is locked", what))]
    Locked {
        what: &'static str,
        backtrace: Backtrace,
    },

    /// Memory for a value or container could not be reserved
    #[snafu(display("Could not allocate memory for {}", what))]
    OutOfMemory {
        what: &'static str,
        backtrace: Backtrace,
    },

    /// The recorded length disagrees with the numeric values assigned
    #[snafu(display(
        "Invalid length {} for data element {}, expected {}",
        length,
        tag,
        expected
    ))]
    InvalidLength {
        tag: Tag,
        length: u32,
        expected: u32,
        backtrace: Backtrace,
    },

    /// The frame data or its pixel description is inconsistent
    #[snafu(display("Invalid frame: {}", reason))]
    InvalidFrame {
        reason: String,
        backtrace: Backtrace,
    },

    /// The offsets do not describe a usable basic offset table
    #[snafu(display("Invalid basic offset table: {}", reason))]
    InvalidOffsetTable {
        reason: &'static str,
        backtrace: Backtrace,
    },
}

/// Alias for a result with the data model's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
