//! Human readable listing of data elements and data sets.
//!
//! Each data element takes one line:
//!
//! ```none
//! (0010,0010) PatientName | PN | 8 | Doe^John
//!  (0009,1001) | LO | 4 | ABCD
//! (0008,0008) ImageType | CS | 16 | [ORIGINAL, PRIMARY]
//! ```
//!
//! Attributes which are not public are listed without a keyword.
//! Binary values are not shown, only their length.
//! Sequences open a bracket,
//! list each item under a `---Item #n---` header
//! one indentation level deeper,
//! and close the bracket on its own line.
//!
//! ```
//! use dcmdata_object::{dump::dump_dataset_to, Dataset, Element};
//! use dcmdata_dictionary_std::tags;
//! # fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let mut ds = Dataset::new();
//! let mut e = Element::new(tags::MODALITY, 0)?;
//! e.set_value_string("CT")?;
//! ds.insert(e)?;
//!
//! let mut out = Vec::new();
//! dump_dataset_to(&mut out, &ds)?;
//! assert_eq!(String::from_utf8(out)?, "(0008,0060) Modality | CS | 2 | CT\n");
//! # Ok(())
//! # }
//! # run().unwrap();
//! ```

use crate::dataset::Dataset;
use crate::element::Element;
use crate::sequence::Sequence;
use crate::value::{NumericValue, Value};
use dcmdata_core::{DataDictionary, VrClass};
use dcmdata_dictionary_std::StandardDataDictionary;
use itertools::Itertools;
use std::io::{stdout, Result as IoResult, Write};
use tracing::warn;

/// Options and flags to configure how data sets are listed.
///
/// The dictionary resolves keywords and decides which tags are public.
///
/// ```
/// # use dcmdata_object::{dump::DumpOptions, Dataset};
/// # let dataset = Dataset::new();
/// let mut out = Vec::new();
/// DumpOptions::new()
///     .indent_width(4)
///     .dump_dataset_to(&mut out, &dataset)?;
/// # Result::<(), std::io::Error>::Ok(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct DumpOptions<D = StandardDataDictionary> {
    /// the number of spaces per nesting level
    pub indent_width: usize,
    /// the data dictionary for keyword resolution
    pub dict: D,
}

impl Default for DumpOptions {
    fn default() -> Self {
        DumpOptions {
            indent_width: 2,
            dict: StandardDataDictionary,
        }
    }
}

impl DumpOptions {
    /// Create the default options,
    /// indenting by two spaces with the standard dictionary.
    pub fn new() -> Self {
        Default::default()
    }
}

impl<D> DumpOptions<D>
where
    D: DataDictionary,
{
    /// Set the number of spaces per nesting level.
    pub fn indent_width(&mut self, indent_width: usize) -> &mut Self {
        self.indent_width = indent_width;
        self
    }

    /// Use another data dictionary to resolve keywords.
    pub fn with_dict<E>(self, dict: E) -> DumpOptions<E>
    where
        E: DataDictionary,
    {
        DumpOptions {
            indent_width: self.indent_width,
            dict,
        }
    }

    /// List a data element to standard output.
    pub fn dump_element(&self, element: &Element) -> IoResult<()> {
        self.dump_element_to(stdout().lock(), element)
    }

    /// List a data element to the given writer.
    pub fn dump_element_to(&self, mut to: impl Write, element: &Element) -> IoResult<()> {
        self.element(&mut to, element, 0)
    }

    /// List a data set to standard output.
    pub fn dump_dataset(&self, dataset: &Dataset) -> IoResult<()> {
        self.dump_dataset_to(stdout().lock(), dataset)
    }

    /// List a data set to the given writer, in ascending tag order.
    pub fn dump_dataset_to(&self, mut to: impl Write, dataset: &Dataset) -> IoResult<()> {
        self.dataset(&mut to, dataset, 0)
    }

    fn indent<W: ?Sized + Write>(&self, to: &mut W, depth: usize) -> IoResult<()> {
        write!(to, "{:1$}", "", depth * self.indent_width)
    }

    fn dataset<W>(&self, to: &mut W, dataset: &Dataset, depth: usize) -> IoResult<()>
    where
        W: ?Sized + Write,
    {
        for tag in dataset.tags() {
            match dataset.contains(tag) {
                Some(element) => self.element(to, element, depth)?,
                None => warn!("Data element {} vanished while listing", tag),
            }
        }
        Ok(())
    }

    fn element<W>(&self, to: &mut W, element: &Element, depth: usize) -> IoResult<()>
    where
        W: ?Sized + Write,
    {
        let tag = element.tag();
        self.indent(to, depth)?;
        match self.dict.keyword(tag).filter(|_| self.dict.is_public(tag)) {
            Some(keyword) => write!(
                to,
                "({:04X},{:04X}) {} | {}",
                tag.group(),
                tag.element(),
                keyword,
                element.vr()
            )?,
            None => write!(
                to,
                " ({:04X},{:04X}) | {}",
                tag.group(),
                tag.element(),
                element.vr()
            )?,
        }

        match element.value() {
            Some(Value::Sequence(seq)) => self.items(to, seq, depth),
            None if element.vr_class() == VrClass::Sequence => {
                self.items(to, &Sequence::new(), depth)
            }
            Some(value) => {
                write!(to, " | {} | ", element.length())?;
                let shown = match value {
                    Value::Numeric(values) => numbers(values),
                    Value::Strings(strings) => strings.iter().join(", "),
                    Value::Binary(_) => String::new(),
                    Value::Sequence(_) => {
                        warn!("Unexpected sequence value in data element {}", tag);
                        String::new()
                    }
                };
                if value.multiplicity() > 1 {
                    writeln!(to, "[{}]", shown)
                } else {
                    writeln!(to, "{}", shown)
                }
            }
            None => writeln!(to, " | {} | ", element.length()),
        }
    }

    fn items<W>(&self, to: &mut W, seq: &Sequence, depth: usize) -> IoResult<()>
    where
        W: ?Sized + Write,
    {
        if seq.is_empty() {
            write!(to, " | [")?;
        } else {
            writeln!(to, " | [")?;
        }
        for (i, item) in seq.iter().enumerate() {
            self.indent(to, depth + 1)?;
            writeln!(to, "---Item #{}---", i + 1)?;
            self.dataset(to, item, depth + 1)?;
        }
        self.indent(to, depth)?;
        writeln!(to, "]")
    }
}

fn numbers(values: &NumericValue) -> String {
    match values {
        NumericValue::I16(v) => v.iter().join(", "),
        NumericValue::I32(v) => v.iter().join(", "),
        NumericValue::I64(v) => v.iter().join(", "),
        NumericValue::U16(v) => v.iter().join(", "),
        NumericValue::U32(v) => v.iter().join(", "),
        NumericValue::U64(v) => v.iter().join(", "),
        NumericValue::F32(v) => v.iter().join(", "),
        NumericValue::F64(v) => v.iter().join(", "),
    }
}

/// List a data element to the given writer
/// with the default options.
pub fn dump_element_to(to: impl Write, element: &Element) -> IoResult<()> {
    DumpOptions::new().dump_element_to(to, element)
}

/// List a data set to the given writer
/// with the default options.
pub fn dump_dataset_to(to: impl Write, dataset: &Dataset) -> IoResult<()> {
    DumpOptions::new().dump_dataset_to(to, dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcmdata_core::dictionary::stub::StubDataDictionary;
    use dcmdata_core::Tag;
    use dcmdata_dictionary_std::tags;

    fn listing(element: &Element) -> String {
        let mut out = Vec::new();
        dump_element_to(&mut out, element).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn public_string() {
        let mut e = Element::new(tags::PATIENT_NAME, 0).unwrap();
        e.set_value_string("Doe^John").unwrap();
        assert_eq!(listing(&e), "(0010,0010) PatientName | PN | 8 | Doe^John\n");
    }

    #[test]
    fn multiple_values() {
        let mut e = Element::new(tags::IMAGE_TYPE, 0).unwrap();
        e.set_value_string("ORIGINAL\\PRIMARY").unwrap();
        assert_eq!(
            listing(&e),
            "(0008,0008) ImageType | CS | 16 | [ORIGINAL, PRIMARY]\n"
        );

        let mut e = Element::new(tags::SELECTOR_US_VALUE, 0).unwrap();
        e.set_value_numeric_multi([1_u16, 2, 65535]).unwrap();
        assert_eq!(
            listing(&e),
            "(0072,007A) SelectorUSValue | US | 6 | [1, 2, 65535]\n"
        );
    }

    #[test]
    fn numbers_keep_their_type() {
        let mut e = Element::new(tags::SELECTOR_UV_VALUE, 0).unwrap();
        e.set_value_numeric_multi(u64::MAX).unwrap();
        assert_eq!(
            listing(&e),
            format!("(0072,0083) SelectorUVValue | UV | 8 | {}\n", u64::MAX)
        );

        let mut e = Element::new(tags::SELECTOR_FD_VALUE, 0).unwrap();
        e.set_value_double(1.5).unwrap();
        assert_eq!(listing(&e), "(0072,0074) SelectorFDValue | FD | 8 | 1.5\n");
    }

    #[test]
    fn binary_is_hidden() {
        let mut e = Element::new(tags::PIXEL_DATA, 0).unwrap();
        e.set_value_binary(vec![1_u8, 2, 3, 4]).unwrap();
        assert_eq!(listing(&e), "(7FE0,0010) PixelData | OW | 4 | \n");
    }

    #[test]
    fn not_public_without_keyword() {
        let mut e = Element::new(Tag(0x0009, 0x0010), 0).unwrap();
        e.set_value_string("ACME").unwrap();
        assert_eq!(listing(&e), " (0009,0010) | LO | 4 | ACME\n");

        // a dictionary which knows nothing makes every tag look private
        let mut e = Element::new(tags::MODALITY, 0).unwrap();
        e.set_value_string("CT").unwrap();
        let mut out = Vec::new();
        DumpOptions::new()
            .with_dict(StubDataDictionary)
            .dump_element_to(&mut out, &e)
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), " (0008,0060) | CS | 2 | CT\n");
    }

    #[test]
    fn nested_sequence() {
        let mut item = Dataset::new();
        let mut e = Element::new(tags::REFERENCED_SOP_INSTANCE_UID, 0).unwrap();
        e.set_value_string("1.2.3.4").unwrap();
        item.insert(e).unwrap();
        let mut seq = Sequence::new();
        seq.append(item).unwrap();
        let mut e = Element::new(tags::REFERENCED_IMAGE_SEQUENCE, 0).unwrap();
        e.set_value_sequence(seq).unwrap();

        assert_eq!(
            listing(&e),
            "(0008,1140) ReferencedImageSequence | SQ | [\n\
             \x20\x20---Item #1---\n\
             \x20\x20(0008,1155) ReferencedSOPInstanceUID | UI | 8 | 1.2.3.4\n\
             ]\n"
        );

        let mut empty = Element::new(tags::REFERENCED_IMAGE_SEQUENCE, 0).unwrap();
        empty.set_value_sequence(Sequence::new()).unwrap();
        assert_eq!(listing(&empty), "(0008,1140) ReferencedImageSequence | SQ | []\n");
    }

    #[test]
    fn indent_width_applies_to_items() {
        let mut item = Dataset::new();
        let mut e = Element::new(tags::MODALITY, 0).unwrap();
        e.set_value_string("MR").unwrap();
        item.insert(e).unwrap();
        let mut seq = Sequence::new();
        seq.append(item).unwrap();
        let mut e = Element::new(tags::REFERENCED_IMAGE_SEQUENCE, 0).unwrap();
        e.set_value_sequence(seq).unwrap();

        let mut out = Vec::new();
        DumpOptions::new()
            .indent_width(4)
            .dump_element_to(&mut out, &e)
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\n    ---Item #1---\n    (0008,0060) Modality"));
    }
}
