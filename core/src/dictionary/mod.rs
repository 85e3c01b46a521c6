//! This module contains the concept of a DICOM data dictionary.
//!
//! A data element dictionary is the oracle consulted
//! whenever a data element is created:
//! it resolves a tag into the attribute's canonical
//! value representation and keyword.
//!
//! The standard dictionary lives in the `dcmdata-dictionary-std` crate.
//! This module only provides the traits and the entry types,
//! plus a [stub dictionary](stub::StubDataDictionary) which knows nothing.

pub mod stub;

use crate::header::{Tag, VR};

/// A range of tags pertaining to an attribute.
/// Very often, the dictionary of attributes indicates a unique
/// group part and element part `(group,elem)`,
/// but occasionally an attribute may cover
/// a range of groups or elements instead.
/// For example,
/// _Overlay Data_ (60xx,3000) has more than one possible tag,
/// since it is part of a repeating group.
/// Moreover, a unique variant is defined for group length tags
/// and another one for private creator tags.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TagRange {
    /// Only a specific tag
    Single(Tag),
    /// The two rightmost digits of the _group_ portion are open:
    /// `(GGxx,EEEE)`
    Group100(Tag),
    /// The two rightmost digits of the _element_ portion are open:
    /// `(GGGG,EExx)`
    Element100(Tag),
    /// Generic group length tag,
    /// refers to any attribute of the form `(GGGG,0000)`
    GroupLength,
    /// Generic private creator tag,
    /// refers to any tag from (GGGG,0010) to (GGGG,00FF),
    /// where `GGGG` is an odd number.
    PrivateCreator,
}

impl TagRange {
    /// Retrieve the inner tag representation of this range.
    ///
    /// Open components are zeroed out.
    /// Returns a zeroed out tag if it is a group length tag.
    /// If it is a private creator tag,
    /// this method returns `Tag(0x0009, 0x0010)`.
    pub fn inner(self) -> Tag {
        match self {
            TagRange::Single(tag) => tag,
            TagRange::Group100(tag) => tag,
            TagRange::Element100(tag) => tag,
            TagRange::GroupLength => Tag(0x0000, 0x0000),
            TagRange::PrivateCreator => Tag(0x0009, 0x0010),
        }
    }

    /// Check whether the given tag falls into this range.
    pub fn contains(self, tag: Tag) -> bool {
        match self {
            TagRange::Single(t) => t == tag,
            TagRange::Group100(t) => t == Tag(tag.0 & 0xFF00, tag.1),
            TagRange::Element100(t) => t == Tag(tag.0, tag.1 & 0xFF00),
            TagRange::GroupLength => tag.1 == 0x0000,
            TagRange::PrivateCreator => tag.is_private() && (0x0010..=0x00FF).contains(&tag.1),
        }
    }
}

/// Type trait for a dictionary of DICOM attributes.
///
/// The main purpose of an attribute dictionary is
/// to retrieve a record containing additional information about a data element,
/// either by DICOM tag via [`by_tag`][1],
/// or by its keyword (also known as alias) via [`by_name`][2].
///
/// The provided methods are the queries
/// made by the data element model:
/// the value representation of a tag ([`vr_by_tag`][3]),
/// its keyword ([`keyword`][4]),
/// and whether it is a public attribute ([`is_public`][5]).
///
/// [1]: DataDictionary::by_tag
/// [2]: DataDictionary::by_name
/// [3]: DataDictionary::vr_by_tag
/// [4]: DataDictionary::keyword
/// [5]: DataDictionary::is_public
pub trait DataDictionary {
    /// The type of the dictionary entry.
    type Entry: DataDictionaryEntry;

    /// Fetch a data element entry by its tag.
    fn by_tag(&self, tag: Tag) -> Option<&Self::Entry>;

    /// Fetch an entry by its usual alias
    /// (e.g. "PatientName" or "SOPInstanceUID").
    /// Aliases are case sensitive.
    fn by_name(&self, name: &str) -> Option<&Self::Entry>;

    /// Look up the canonical value representation of an attribute.
    ///
    /// Returns `None` if the tag is not known to this dictionary.
    fn vr_by_tag(&self, tag: Tag) -> Option<VR> {
        self.by_tag(tag).map(|e| e.vr())
    }

    /// Look up the keyword of an attribute, such as `PatientName`.
    fn keyword(&self, tag: Tag) -> Option<&str> {
        self.by_tag(tag).map(|e| e.alias())
    }

    /// Check whether the tag identifies a public attribute:
    /// one defined by the standard,
    /// as opposed to a private data element.
    fn is_public(&self, tag: Tag) -> bool {
        !tag.is_private() && self.by_tag(tag).is_some()
    }
}

impl<D> DataDictionary for &D
where
    D: DataDictionary + ?Sized,
{
    type Entry = D::Entry;

    fn by_tag(&self, tag: Tag) -> Option<&Self::Entry> {
        (**self).by_tag(tag)
    }

    fn by_name(&self, name: &str) -> Option<&Self::Entry> {
        (**self).by_name(name)
    }
}

/// The data element dictionary entry type,
/// representing a DICOM attribute.
pub trait DataDictionaryEntry {
    /// The full possible tag range of the attribute,
    /// which this dictionary entry can represent.
    fn tag_range(&self) -> TagRange;

    /// Fetch a single tag applicable to this attribute.
    ///
    /// Note that this is not necessarily
    /// the original tag used as key for this entry.
    fn tag(&self) -> Tag {
        self.tag_range().inner()
    }

    /// The alias of the attribute, with no spaces, usually in UpperCamelCase.
    fn alias(&self) -> &str;

    /// The _typical_ value representation of the attribute.
    fn vr(&self) -> VR;
}

/// A data type for a dictionary entry with a string slice for its alias.
#[derive(Debug, PartialEq, Clone)]
pub struct DataDictionaryEntryRef<'a> {
    /// The attribute tag or tag range
    pub tag: TagRange,
    /// The alias of the attribute, with no spaces, usually InCapitalizedCamelCase
    pub alias: &'a str,
    /// The _typical_ value representation of the attribute
    pub vr: VR,
}

impl<'a> DataDictionaryEntry for DataDictionaryEntryRef<'a> {
    fn tag_range(&self) -> TagRange {
        self.tag
    }
    fn alias(&self) -> &str {
        self.alias
    }
    fn vr(&self) -> VR {
        self.vr
    }
}
