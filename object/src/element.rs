//! The data element: one tag, one value representation
//! and at most one value, assigned once.
//!
//! The value representation is resolved from the tag
//! through a [`DataDictionary`] when the element is created.
//! Values are then assigned through one of the `set_value_*` methods,
//! which validate the value against the representation
//! before committing to it.
//! A failed assignment leaves the element untouched.
//!
//! ```
//! use dcmdata_object::Element;
//! use dcmdata_dictionary_std::tags;
//! # fn run() -> dcmdata_object::Result<()> {
//! let mut patient_name = Element::new(tags::PATIENT_NAME, 0)?;
//! patient_name.set_value_string("Doe^John")?;
//! assert_eq!(patient_name.length(), 8);
//! assert_eq!(patient_name.value_string(0)?, "Doe^John");
//! # Ok(())
//! # }
//! # run().unwrap();
//! ```

use crate::dump::DumpOptions;
use crate::error::{
    AlreadyAssignedSnafu, CapacityExceededSnafu, IndexOutOfRangeSnafu, InvalidLengthSnafu,
    NotAssignedSnafu, Result, TypeMismatchSnafu, UnknownTagSnafu,
};
use crate::sequence::Sequence;
use crate::value::{split_multi, NumericValue, Value, C};
use dcmdata_core::header::{ElementNumber, GroupNumber};
use dcmdata_core::{DataDictionary, NumericKind, Tag, VrClass, VR};
use dcmdata_dictionary_std::StandardDataDictionary;
use snafu::{ensure, OptionExt};
use std::borrow::Cow;
use tracing::debug;

/// Round a byte length up to the next even number.
///
/// The undefined length `0xFFFF_FFFF` wraps around to 0,
/// so it counts as no declared length at all.
#[inline]
fn even(length: u32) -> u32 {
    length.wrapping_add(length & 1)
}

/// A DICOM data element.
///
/// Cloning through [`Clone`] is a structural copy.
/// [`try_clone`](Element::try_clone) deep copies the value
/// with fallible allocation and revalidates it.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: Tag,
    vr: VR,
    length: u32,
    value: Option<Value>,
}

impl Element {
    /// Create an unassigned data element,
    /// resolving its value representation
    /// with the standard data dictionary.
    ///
    /// `length` is the length declared for the value, which may be zero.
    /// Odd lengths are rounded up,
    /// and the undefined length `0xFFFF_FFFF` is taken as zero.
    pub fn new(tag: Tag, length: u32) -> Result<Self> {
        Self::new_with_dict(tag, length, &StandardDataDictionary)
    }

    /// Create an unassigned data element,
    /// resolving its value representation with the given dictionary.
    pub fn new_with_dict<D>(tag: Tag, length: u32, dict: &D) -> Result<Self>
    where
        D: DataDictionary + ?Sized,
    {
        let vr = dict.vr_by_tag(tag).context(UnknownTagSnafu { tag })?;
        debug!("Created data element {} {} (length {})", tag, vr, length);
        Ok(Element {
            tag,
            vr,
            length: even(length),
            value: None,
        })
    }

    /// The element's tag.
    #[inline]
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// The group number of the element's tag.
    #[inline]
    pub fn group_number(&self) -> GroupNumber {
        self.tag.group()
    }

    /// The element number of the element's tag.
    #[inline]
    pub fn element_number(&self) -> ElementNumber {
        self.tag.element()
    }

    /// The element's value representation.
    #[inline]
    pub fn vr(&self) -> VR {
        self.vr
    }

    /// The class of the element's value representation.
    #[inline]
    pub fn vr_class(&self) -> VrClass {
        self.vr.class()
    }

    /// The number of values. Zero if unassigned.
    pub fn multiplicity(&self) -> u32 {
        self.value.as_ref().map(Value::multiplicity).unwrap_or(0)
    }

    /// Whether the element holds more than one value.
    pub fn is_multivalued(&self) -> bool {
        self.multiplicity() > 1
    }

    /// The length of the value in bytes, always even.
    ///
    /// Before assignment this is the declared length.
    #[inline]
    pub fn length(&self) -> u32 {
        self.length
    }

    /// Whether a value was assigned to this element.
    #[inline]
    pub fn is_assigned(&self) -> bool {
        self.value.is_some()
    }

    /// Borrow the element's value, if assigned.
    #[inline]
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    fn ensure_unassigned(&self) -> Result<()> {
        ensure!(self.value.is_none(), AlreadyAssignedSnafu { tag: self.tag });
        Ok(())
    }

    fn mismatch<T>(&self, expected: &'static str) -> Result<T> {
        TypeMismatchSnafu {
            tag: self.tag,
            vr: self.vr,
            expected,
        }
        .fail()
    }

    fn numeric_kind(&self, expected: &'static str) -> Result<NumericKind> {
        match self.vr.numeric_kind() {
            Some(kind) => Ok(kind),
            None => self.mismatch(expected),
        }
    }

    /// Check the value against the element's representation
    /// and return the length to record.
    fn validate(&self, value: &Value) -> Result<u32> {
        let length = if self.length != 0 {
            self.length
        } else {
            even(value.encoded_length())
        };

        match value {
            Value::Numeric(values) => {
                let expected = values.encoded_length();
                ensure!(
                    length == expected,
                    InvalidLengthSnafu {
                        tag: self.tag,
                        length,
                        expected,
                    }
                );
            }
            Value::Strings(strings) => {
                let capacity = self.vr.capacity();
                for s in strings {
                    ensure!(
                        s.len() as u64 <= u64::from(capacity),
                        CapacityExceededSnafu {
                            tag: self.tag,
                            vr: self.vr,
                            length: s.len(),
                            capacity,
                        }
                    );
                }
            }
            Value::Binary(_) | Value::Sequence(_) => {}
        }
        Ok(length)
    }

    fn commit(&mut self, mut value: Value) -> Result<()> {
        let length = self.validate(&value)?;
        if let Value::Sequence(seq) = &mut value {
            seq.lock();
        }
        self.length = length;
        self.value = Some(value);
        Ok(())
    }

    /// Assign a single integer value.
    ///
    /// The element must have an integer representation.
    /// The value is truncated to the representation's width.
    pub fn set_value_integer(&mut self, value: i64) -> Result<()> {
        self.ensure_unassigned()?;
        let kind = self.numeric_kind("an integer value")?;
        if kind.is_float() {
            return self.mismatch("an integer value");
        }
        self.commit(Value::Numeric(NumericValue::from_i64(kind, value)))
    }

    /// Assign a single floating point value.
    ///
    /// The element must have a floating point representation.
    pub fn set_value_double(&mut self, value: f64) -> Result<()> {
        self.ensure_unassigned()?;
        let kind = self.numeric_kind("a floating point value")?;
        if !kind.is_float() {
            return self.mismatch("a floating point value");
        }
        self.commit(Value::Numeric(NumericValue::from_f64(kind, value)))
    }

    /// Assign one or more numbers of the representation's exact scalar type.
    ///
    /// ```
    /// # use dcmdata_object::Element;
    /// # use dcmdata_core::Tag;
    /// # fn run() -> dcmdata_object::Result<()> {
    /// // Selector US Value
    /// let mut e = Element::new(Tag(0x0072, 0x007A), 0)?;
    /// e.set_value_numeric_multi(vec![1_u16, 2, 65535])?;
    /// assert_eq!(e.multiplicity(), 3);
    /// assert_eq!(e.value_integer(2)?, 65535);
    /// # Ok(())
    /// # }
    /// # run().unwrap();
    /// ```
    pub fn set_value_numeric_multi(&mut self, values: impl Into<NumericValue>) -> Result<()> {
        self.ensure_unassigned()?;
        let values = values.into();
        let kind = self.numeric_kind("numeric values")?;
        if kind != values.kind() {
            return self.mismatch(numeric_kind_description(kind));
        }
        self.commit(Value::Numeric(values))
    }

    /// Assign opaque bytes.
    ///
    /// Owned bytes are moved into the element,
    /// static bytes are referenced without copying.
    pub fn set_value_binary(&mut self, bytes: impl Into<Cow<'static, [u8]>>) -> Result<()> {
        self.ensure_unassigned()?;
        if self.vr.class() != VrClass::Binary {
            return self.mismatch("binary data");
        }
        self.commit(Value::Binary(bytes.into()))
    }

    /// Assign a character string.
    ///
    /// If the representation admits multiple values,
    /// the text is split on each backslash into separate values.
    pub fn set_value_string(&mut self, text: impl Into<Cow<'static, str>>) -> Result<()> {
        self.ensure_unassigned()?;
        let strings = match self.vr.class() {
            VrClass::StringMulti => split_multi(text.into()),
            VrClass::StringSingle => C::from_elem(text.into(), 1),
            _ => return self.mismatch("a string value"),
        };
        self.commit(Value::Strings(strings))
    }

    /// Assign a collection of character strings, one per value.
    ///
    /// More than one value requires a representation
    /// which admits multiple values.
    pub fn set_value_string_multi<I, S>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        self.ensure_unassigned()?;
        let class = self.vr.class();
        if !matches!(class, VrClass::StringMulti | VrClass::StringSingle) {
            return self.mismatch("string values");
        }
        let strings: C<Cow<'static, str>> = values.into_iter().map(Into::into).collect();
        if strings.len() > 1 && class != VrClass::StringMulti {
            return self.mismatch("a single string value");
        }
        self.commit(Value::Strings(strings))
    }

    /// Assign a sequence of data sets.
    ///
    /// The sequence is locked once assigned.
    /// Unless a length was declared,
    /// the element's length is the sum of the lengths
    /// of every element in every item.
    pub fn set_value_sequence(&mut self, sequence: Sequence) -> Result<()> {
        self.ensure_unassigned()?;
        if self.vr.class() != VrClass::Sequence {
            return self.mismatch("a sequence");
        }
        self.commit(Value::Sequence(sequence))
    }

    fn assigned_value(&self) -> Result<&Value> {
        self.value.as_ref().context(NotAssignedSnafu { tag: self.tag })
    }

    fn numeric_value(&self, float: bool, expected: &'static str) -> Result<&NumericValue> {
        match self.assigned_value()? {
            Value::Numeric(values) if values.kind().is_float() == float => Ok(values),
            _ => self.mismatch(expected),
        }
    }

    /// Get the integer value at `index`, widened to 64 bits.
    ///
    /// Unsigned 64-bit values above `i64::MAX` wrap around.
    pub fn value_integer(&self, index: usize) -> Result<i64> {
        let values = self.numeric_value(false, "an integer value")?;
        values.get_i64(index).context(IndexOutOfRangeSnafu {
            index,
            len: values.multiplicity() as usize,
        })
    }

    /// Get the floating point value at `index`, widened to double precision.
    pub fn value_double(&self, index: usize) -> Result<f64> {
        let values = self.numeric_value(true, "a floating point value")?;
        values.get_f64(index).context(IndexOutOfRangeSnafu {
            index,
            len: values.multiplicity() as usize,
        })
    }

    /// Get all numbers in their concrete scalar type.
    pub fn value_numeric(&self) -> Result<&NumericValue> {
        match self.assigned_value()? {
            Value::Numeric(values) => Ok(values),
            _ => self.mismatch("numeric values"),
        }
    }

    /// Get the string value at `index`.
    pub fn value_string(&self, index: usize) -> Result<&str> {
        let strings = self.value_strings()?;
        strings
            .get(index)
            .map(|s| &**s)
            .context(IndexOutOfRangeSnafu {
                index,
                len: strings.len(),
            })
    }

    /// Get all string values.
    pub fn value_strings(&self) -> Result<&[Cow<'static, str>]> {
        match self.assigned_value()? {
            Value::Strings(strings) => Ok(strings),
            _ => self.mismatch("string values"),
        }
    }

    /// Get the binary value.
    pub fn value_binary(&self) -> Result<&[u8]> {
        match self.assigned_value()? {
            Value::Binary(bytes) => Ok(bytes),
            _ => self.mismatch("binary data"),
        }
    }

    /// Get the sequence value.
    pub fn value_sequence(&self) -> Result<&Sequence> {
        match self.assigned_value()? {
            Value::Sequence(seq) => Ok(seq),
            _ => self.mismatch("a sequence"),
        }
    }

    /// Get the sequence value for item-level access.
    ///
    /// The sequence is locked,
    /// so items can be reached but not added or removed.
    pub fn value_sequence_mut(&mut self) -> Result<&mut Sequence> {
        let tag = self.tag;
        let vr = self.vr;
        match self.value.as_mut() {
            Some(Value::Sequence(seq)) => Ok(seq),
            Some(_) => TypeMismatchSnafu {
                tag,
                vr,
                expected: "a sequence",
            }
            .fail(),
            None => NotAssignedSnafu { tag }.fail(),
        }
    }

    /// Deep copy this element.
    ///
    /// The copy starts as a fresh element with the same tag and length,
    /// then the copied value is validated and assigned to it.
    pub fn try_clone(&self) -> Result<Element> {
        let mut element = Element {
            tag: self.tag,
            vr: self.vr,
            length: self.length,
            value: None,
        };
        if let Some(value) = &self.value {
            element.commit(value.try_clone()?)?;
        }
        debug!("Cloned data element {}", self.tag);
        Ok(element)
    }

    /// Print this element and its nested items to standard output.
    ///
    /// See the [`dump`](crate::dump) module for the format.
    pub fn print(&self) -> std::io::Result<()> {
        DumpOptions::new().dump_element(self)
    }
}

fn numeric_kind_description(kind: NumericKind) -> &'static str {
    match kind {
        NumericKind::I16 => "signed 16-bit integers",
        NumericKind::I32 => "signed 32-bit integers",
        NumericKind::I64 => "signed 64-bit integers",
        NumericKind::U16 => "unsigned 16-bit integers",
        NumericKind::U32 => "unsigned 32-bit integers",
        NumericKind::U64 => "unsigned 64-bit integers",
        NumericKind::F32 => "single precision numbers",
        NumericKind::F64 => "double precision numbers",
    }
}
