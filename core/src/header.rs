//! This module contains the basic data types for identifying
//! and describing DICOM data elements:
//! the attribute [`Tag`], the value representation [`VR`],
//! and the classification of value representations
//! which dictates how an element value is stored and validated.

use std::fmt;

/// Idiomatic alias for a tag's group number.
pub type GroupNumber = u16;
/// Idiomatic alias for a tag's element number.
pub type ElementNumber = u16;

/// The data type for DICOM data element tags.
///
/// A tag is a pair of 16-bit numbers `(group, element)`.
/// It can also be seen as a single 32-bit number
/// with the group in the upper half,
/// which is how tags are ordered:
/// `(0008,0020)` comes before `(0010,0010)`.
#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy)]
pub struct Tag(pub GroupNumber, pub ElementNumber);

impl Tag {
    /// Getter for the tag's group value.
    #[inline]
    pub fn group(self) -> GroupNumber {
        self.0
    }

    /// Getter for the tag's element value.
    #[inline]
    pub fn element(self) -> ElementNumber {
        self.1
    }

    /// Retrieve the tag as a single 32-bit number,
    /// with the group number in the most significant half.
    #[inline]
    pub fn to_u32(self) -> u32 {
        (u32::from(self.0) << 16) | u32::from(self.1)
    }

    /// Check whether the tag belongs to a private group
    /// (a group with an odd number).
    #[inline]
    pub fn is_private(self) -> bool {
        self.0 & 1 == 1
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Tag({:#06X?}, {:#06X?})", self.0, self.1)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:04X},{:04X})", self.0, self.1)
    }
}

impl PartialEq<(u16, u16)> for Tag {
    fn eq(&self, other: &(u16, u16)) -> bool {
        self.0 == other.0 && self.1 == other.1
    }
}

impl PartialEq<u32> for Tag {
    fn eq(&self, other: &u32) -> bool {
        self.to_u32() == *other
    }
}

impl From<(u16, u16)> for Tag {
    #[inline]
    fn from(value: (u16, u16)) -> Tag {
        Tag(value.0, value.1)
    }
}

impl From<[u16; 2]> for Tag {
    #[inline]
    fn from(value: [u16; 2]) -> Tag {
        Tag(value[0], value[1])
    }
}

impl From<u32> for Tag {
    #[inline]
    fn from(value: u32) -> Tag {
        Tag((value >> 16) as u16, value as u16)
    }
}

impl From<Tag> for u32 {
    #[inline]
    fn from(tag: Tag) -> u32 {
        tag.to_u32()
    }
}

/// The classification of a value representation,
/// which determines how the element value is stored
/// and which accessors apply to it.
#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone)]
pub enum VrClass {
    /// Fixed-width binary numbers (integers or floating point)
    Numeric,
    /// Character strings which may hold multiple values,
    /// separated by a backslash
    StringMulti,
    /// Character strings which always hold a single value
    StringSingle,
    /// Opaque byte sequences
    Binary,
    /// Nested sequence of data sets
    Sequence,
}

/// The concrete scalar type behind a numeric value representation.
#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone)]
pub enum NumericKind {
    /// signed 16-bit integer (SS)
    I16,
    /// signed 32-bit integer (SL)
    I32,
    /// signed 64-bit integer (SV)
    I64,
    /// unsigned 16-bit integer (US)
    U16,
    /// unsigned 32-bit integer (UL, AT)
    U32,
    /// unsigned 64-bit integer (UV)
    U64,
    /// 32-bit floating point (FL)
    F32,
    /// 64-bit floating point (FD)
    F64,
}

impl NumericKind {
    /// The size in bytes of a single value of this kind.
    pub fn width(self) -> u32 {
        match self {
            NumericKind::I16 | NumericKind::U16 => 2,
            NumericKind::I32 | NumericKind::U32 | NumericKind::F32 => 4,
            NumericKind::I64 | NumericKind::U64 | NumericKind::F64 => 8,
        }
    }

    /// Whether this is a floating point kind.
    pub fn is_float(self) -> bool {
        matches!(self, NumericKind::F32 | NumericKind::F64)
    }
}

/// Maximum value length for text kinds with unlimited capacity.
const UNLIMITED_CAPACITY: u32 = 0xFFFF_FFFE;

/// An enum type for a DICOM value representation.
#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone, Ord, PartialOrd)]
pub enum VR {
    /// Application Entity
    AE,
    /// Age String
    AS,
    /// Attribute Tag
    AT,
    /// Code String
    CS,
    /// Date
    DA,
    /// Decimal String
    DS,
    /// Date Time
    DT,
    /// Floating Point Single
    FL,
    /// Floating Point Double
    FD,
    /// Integer String
    IS,
    /// Long String
    LO,
    /// Long Text
    LT,
    /// Other Byte
    OB,
    /// Other Double
    OD,
    /// Other Float
    OF,
    /// Other Long
    OL,
    /// Other Very Long
    OV,
    /// Other Word
    OW,
    /// Person Name
    PN,
    /// Short String
    SH,
    /// Signed Long
    SL,
    /// Sequence of Items
    SQ,
    /// Signed Short
    SS,
    /// Short Text
    ST,
    /// Signed Very Long
    SV,
    /// Time
    TM,
    /// Unlimited Characters
    UC,
    /// Unique Identifier (UID)
    UI,
    /// Unsigned Long
    UL,
    /// Unknown
    UN,
    /// Universal Resource Identifier or Universal Resource Locator (URI/URL)
    UR,
    /// Unsigned Short
    US,
    /// Unlimited Text
    UT,
    /// Unsigned Very Long
    UV,
}

impl VR {
    /// Retrieve a string representation of this VR.
    pub fn to_string(self) -> &'static str {
        use VR::*;
        match self {
            AE => "AE",
            AS => "AS",
            AT => "AT",
            CS => "CS",
            DA => "DA",
            DS => "DS",
            DT => "DT",
            FL => "FL",
            FD => "FD",
            IS => "IS",
            LO => "LO",
            LT => "LT",
            OB => "OB",
            OD => "OD",
            OF => "OF",
            OL => "OL",
            OV => "OV",
            OW => "OW",
            PN => "PN",
            SH => "SH",
            SL => "SL",
            SQ => "SQ",
            SS => "SS",
            ST => "ST",
            SV => "SV",
            TM => "TM",
            UC => "UC",
            UI => "UI",
            UL => "UL",
            UN => "UN",
            UR => "UR",
            US => "US",
            UT => "UT",
            UV => "UV",
        }
    }

    /// Retrieve the class of this value representation.
    pub fn class(self) -> VrClass {
        use VR::*;
        match self {
            AT | FL | FD | SL | SS | SV | UL | US | UV => VrClass::Numeric,
            AE | AS | CS | DA | DS | DT | IS | LO | PN | SH | TM | UC | UI => VrClass::StringMulti,
            LT | ST | UR | UT => VrClass::StringSingle,
            OB | OD | OF | OL | OV | OW | UN => VrClass::Binary,
            SQ => VrClass::Sequence,
        }
    }

    /// The maximum length in bytes of a single textual value
    /// of this representation.
    ///
    /// Returns zero for representations which are not textual.
    pub fn capacity(self) -> u32 {
        use VR::*;
        match self {
            AE => 16,
            AS => 4,
            CS => 16,
            DA => 8,
            DS => 16,
            DT => 26,
            IS => 12,
            LO => 64,
            LT => 10240,
            PN => 64,
            SH => 16,
            ST => 1024,
            TM => 14,
            UI => 64,
            UC | UR | UT => UNLIMITED_CAPACITY,
            _ => 0,
        }
    }

    /// The size in bytes of a single value of this representation,
    /// if it is numeric.
    ///
    /// Returns zero for representations which are not numeric.
    pub fn width(self) -> u32 {
        self.numeric_kind().map(NumericKind::width).unwrap_or(0)
    }

    /// The concrete scalar type used to store values of this representation,
    /// if it is numeric.
    pub fn numeric_kind(self) -> Option<NumericKind> {
        use VR::*;
        match self {
            SS => Some(NumericKind::I16),
            SL => Some(NumericKind::I32),
            SV => Some(NumericKind::I64),
            US => Some(NumericKind::U16),
            UL | AT => Some(NumericKind::U32),
            UV => Some(NumericKind::U64),
            FL => Some(NumericKind::F32),
            FD => Some(NumericKind::F64),
            _ => None,
        }
    }
}

impl fmt::Display for VR {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(VR::to_string(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_from_u16_pair() {
        let t = Tag::from((0x0010u16, 0x0020u16));
        assert_eq!(0x0010u16, t.group());
        assert_eq!(0x0020u16, t.element());
    }

    #[test]
    fn tag_from_u16_array() {
        let t = Tag::from([0x0010u16, 0x0020u16]);
        assert_eq!(0x0010u16, t.group());
        assert_eq!(0x0020u16, t.element());
    }

    #[test]
    fn tag_u32_conversions() {
        let t = Tag::from(0x0010_0010u32);
        assert_eq!(t, Tag(0x0010, 0x0010));
        assert_eq!(t.to_u32(), 0x0010_0010);
        assert_eq!(u32::from(Tag(0x7FE0, 0x0010)), 0x7FE0_0010);
        assert_eq!(Tag(0x0028, 0x0010), 0x0028_0010u32);
    }

    #[test]
    fn tag_ordering_follows_u32() {
        let mut tags = vec![Tag(0x0010, 0x0010), Tag(0x0008, 0x0060), Tag(0x0008, 0x0020)];
        tags.sort();
        assert_eq!(
            tags,
            vec![Tag(0x0008, 0x0020), Tag(0x0008, 0x0060), Tag(0x0010, 0x0010)]
        );
    }

    #[test]
    fn tag_display() {
        let t = Tag(0x0010, 0x00A0);
        assert_eq!(t.to_string(), "(0010,00A0)");
        assert_eq!(format!("{:?}", t), "Tag(0x0010, 0x00A0)");
    }

    #[test]
    fn private_tags() {
        assert!(Tag(0x0009, 0x0010).is_private());
        assert!(!Tag(0x0010, 0x0010).is_private());
    }

    #[test]
    fn vr_classes() {
        assert_eq!(VR::US.class(), VrClass::Numeric);
        assert_eq!(VR::AT.class(), VrClass::Numeric);
        assert_eq!(VR::PN.class(), VrClass::StringMulti);
        assert_eq!(VR::UT.class(), VrClass::StringSingle);
        assert_eq!(VR::OB.class(), VrClass::Binary);
        assert_eq!(VR::UN.class(), VrClass::Binary);
        assert_eq!(VR::SQ.class(), VrClass::Sequence);
    }

    #[test]
    fn vr_widths_and_capacities() {
        assert_eq!(VR::US.width(), 2);
        assert_eq!(VR::SS.width(), 2);
        assert_eq!(VR::UL.width(), 4);
        assert_eq!(VR::FL.width(), 4);
        assert_eq!(VR::FD.width(), 8);
        assert_eq!(VR::UV.width(), 8);
        assert_eq!(VR::PN.width(), 0);

        assert_eq!(VR::CS.capacity(), 16);
        assert_eq!(VR::PN.capacity(), 64);
        assert_eq!(VR::UT.capacity(), 0xFFFF_FFFE);
        assert_eq!(VR::US.capacity(), 0);
    }

    #[test]
    fn vr_display() {
        assert_eq!(VR::TM.to_string(), "TM");
        assert_eq!(format!("{} {}", VR::SQ, VR::UV), "SQ UV");
    }
}
