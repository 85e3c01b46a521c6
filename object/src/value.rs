//! Data element value payloads.
//!
//! A [`Value`] is one of four shapes:
//! fixed-width numbers, character strings, opaque bytes,
//! or a nested [`Sequence`] of data sets.
//! Values are kept in [`C`] collections,
//! so that the single-valued case does not allocate.

use crate::error::{OutOfMemorySnafu, Result};
use crate::sequence::Sequence;
use dcmdata_core::NumericKind;
use num_traits::AsPrimitive;
use smallvec::SmallVec;
use std::borrow::Cow;

/// An aggregation of one or more elements in a value.
pub type C<T> = SmallVec<[T; 2]>;

/// A sequence of fixed-width numbers,
/// all of the same concrete scalar type.
///
/// The variant in use always matches
/// the [`NumericKind`] of the element's value representation.
#[derive(Debug, Clone, PartialEq)]
pub enum NumericValue {
    /// signed 16-bit integers (SS)
    I16(C<i16>),
    /// signed 32-bit integers (SL)
    I32(C<i32>),
    /// signed 64-bit integers (SV)
    I64(C<i64>),
    /// unsigned 16-bit integers (US)
    U16(C<u16>),
    /// unsigned 32-bit integers (UL, AT)
    U32(C<u32>),
    /// unsigned 64-bit integers (UV)
    U64(C<u64>),
    /// single precision floating point numbers (FL)
    F32(C<f32>),
    /// double precision floating point numbers (FD)
    F64(C<f64>),
}

/// Evaluate the same expression against the inner collection
/// of any numeric variant.
macro_rules! each_numeric {
    ($value: expr, $v: ident => $body: expr) => {
        match $value {
            NumericValue::I16($v) => $body,
            NumericValue::I32($v) => $body,
            NumericValue::I64($v) => $body,
            NumericValue::U16($v) => $body,
            NumericValue::U32($v) => $body,
            NumericValue::U64($v) => $body,
            NumericValue::F32($v) => $body,
            NumericValue::F64($v) => $body,
        }
    };
}

/// Convert a single number into a one-value collection
/// of the requested scalar type.
macro_rules! numeric_from_scalar {
    ($kind: expr, $value: expr) => {
        match $kind {
            NumericKind::I16 => NumericValue::I16(C::from_elem($value.as_(), 1)),
            NumericKind::I32 => NumericValue::I32(C::from_elem($value.as_(), 1)),
            NumericKind::I64 => NumericValue::I64(C::from_elem($value.as_(), 1)),
            NumericKind::U16 => NumericValue::U16(C::from_elem($value.as_(), 1)),
            NumericKind::U32 => NumericValue::U32(C::from_elem($value.as_(), 1)),
            NumericKind::U64 => NumericValue::U64(C::from_elem($value.as_(), 1)),
            NumericKind::F32 => NumericValue::F32(C::from_elem($value.as_(), 1)),
            NumericKind::F64 => NumericValue::F64(C::from_elem($value.as_(), 1)),
        }
    };
}

fn widen<T, O>(values: &[T], index: usize) -> Option<O>
where
    T: AsPrimitive<O>,
    O: 'static + Copy,
{
    values.get(index).map(|v| v.as_())
}

fn try_copy<T: Copy>(values: &C<T>) -> Result<C<T>> {
    let mut out = C::new();
    out.try_reserve(values.len())
        .map_err(|_| OutOfMemorySnafu { what: "numeric values" }.build())?;
    out.extend_from_slice(values);
    Ok(out)
}

impl NumericValue {
    /// Create a single-valued collection of the given kind
    /// from an integer, truncating it to the kind's width.
    pub fn from_i64(kind: NumericKind, value: i64) -> Self {
        numeric_from_scalar!(kind, value)
    }

    /// Create a single-valued collection of the given kind
    /// from a floating point number.
    pub fn from_f64(kind: NumericKind, value: f64) -> Self {
        numeric_from_scalar!(kind, value)
    }

    /// The concrete scalar type of these values.
    pub fn kind(&self) -> NumericKind {
        match self {
            NumericValue::I16(_) => NumericKind::I16,
            NumericValue::I32(_) => NumericKind::I32,
            NumericValue::I64(_) => NumericKind::I64,
            NumericValue::U16(_) => NumericKind::U16,
            NumericValue::U32(_) => NumericKind::U32,
            NumericValue::U64(_) => NumericKind::U64,
            NumericValue::F32(_) => NumericKind::F32,
            NumericValue::F64(_) => NumericKind::F64,
        }
    }

    /// The number of values.
    pub fn multiplicity(&self) -> u32 {
        each_numeric!(self, v => v.len() as u32)
    }

    /// Whether there are no values.
    pub fn is_empty(&self) -> bool {
        self.multiplicity() == 0
    }

    /// Get the value at `index` widened to a 64-bit signed integer.
    ///
    /// Unsigned 64-bit values above `i64::MAX` wrap around.
    pub fn get_i64(&self, index: usize) -> Option<i64> {
        each_numeric!(self, v => widen(v, index))
    }

    /// Get the value at `index` widened to a double precision number.
    pub fn get_f64(&self, index: usize) -> Option<f64> {
        each_numeric!(self, v => widen(v, index))
    }

    /// The number of bytes taken by these values when encoded.
    pub fn encoded_length(&self) -> u32 {
        self.kind().width().saturating_mul(self.multiplicity())
    }

    pub(crate) fn try_clone(&self) -> Result<Self> {
        Ok(match self {
            NumericValue::I16(v) => NumericValue::I16(try_copy(v)?),
            NumericValue::I32(v) => NumericValue::I32(try_copy(v)?),
            NumericValue::I64(v) => NumericValue::I64(try_copy(v)?),
            NumericValue::U16(v) => NumericValue::U16(try_copy(v)?),
            NumericValue::U32(v) => NumericValue::U32(try_copy(v)?),
            NumericValue::U64(v) => NumericValue::U64(try_copy(v)?),
            NumericValue::F32(v) => NumericValue::F32(try_copy(v)?),
            NumericValue::F64(v) => NumericValue::F64(try_copy(v)?),
        })
    }
}

macro_rules! impl_from_for_numeric {
    ($typ: ty, $variant: ident) => {
        impl From<$typ> for NumericValue {
            fn from(value: $typ) -> Self {
                NumericValue::$variant(C::from_elem(value, 1))
            }
        }

        impl From<C<$typ>> for NumericValue {
            fn from(values: C<$typ>) -> Self {
                NumericValue::$variant(values)
            }
        }

        impl From<Vec<$typ>> for NumericValue {
            fn from(values: Vec<$typ>) -> Self {
                NumericValue::$variant(C::from_vec(values))
            }
        }

        impl From<&[$typ]> for NumericValue {
            fn from(values: &[$typ]) -> Self {
                NumericValue::$variant(C::from_slice(values))
            }
        }

        impl<const N: usize> From<[$typ; N]> for NumericValue {
            fn from(values: [$typ; N]) -> Self {
                NumericValue::$variant(C::from_slice(&values[..]))
            }
        }
    };
}

impl_from_for_numeric!(i16, I16);
impl_from_for_numeric!(i32, I32);
impl_from_for_numeric!(i64, I64);
impl_from_for_numeric!(u16, U16);
impl_from_for_numeric!(u32, U32);
impl_from_for_numeric!(u64, U64);
impl_from_for_numeric!(f32, F32);
impl_from_for_numeric!(f64, F64);

/// The value of an assigned data element.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Fixed-width numbers
    Numeric(NumericValue),
    /// Character strings, one per value
    Strings(C<Cow<'static, str>>),
    /// Opaque bytes, always a single value
    Binary(Cow<'static, [u8]>),
    /// A sequence of nested data sets, always a single value
    Sequence(Sequence),
}

impl Value {
    /// The number of values.
    pub fn multiplicity(&self) -> u32 {
        match self {
            Value::Numeric(v) => v.multiplicity(),
            Value::Strings(v) => v.len() as u32,
            Value::Binary(_) | Value::Sequence(_) => 1,
        }
    }

    /// The number of bytes taken by this value when encoded,
    /// before even padding.
    ///
    /// Multiple strings are separated by a single backslash.
    /// The length of a sequence is the sum of the lengths
    /// of all elements of all of its items.
    pub fn encoded_length(&self) -> u32 {
        match self {
            Value::Numeric(v) => v.encoded_length(),
            Value::Strings(v) => {
                let separators = v.len().saturating_sub(1);
                let total = v.iter().map(|s| s.len()).sum::<usize>() + separators;
                u32::try_from(total).unwrap_or(u32::MAX)
            }
            Value::Binary(v) => u32::try_from(v.len()).unwrap_or(u32::MAX),
            Value::Sequence(seq) => seq.content_length(),
        }
    }

    /// Deep copy this value,
    /// failing gracefully if memory cannot be reserved.
    ///
    /// Owned strings and bytes are copied into new buffers.
    /// Static data is shared.
    pub fn try_clone(&self) -> Result<Self> {
        Ok(match self {
            Value::Numeric(v) => Value::Numeric(v.try_clone()?),
            Value::Strings(strings) => {
                let mut out: C<Cow<'static, str>> = C::new();
                out.try_reserve(strings.len())
                    .map_err(|_| OutOfMemorySnafu { what: "string values" }.build())?;
                for s in strings {
                    out.push(try_clone_str(s)?);
                }
                Value::Strings(out)
            }
            Value::Binary(Cow::Borrowed(bytes)) => Value::Binary(Cow::Borrowed(bytes)),
            Value::Binary(Cow::Owned(bytes)) => {
                let mut out = Vec::new();
                out.try_reserve_exact(bytes.len())
                    .map_err(|_| OutOfMemorySnafu { what: "binary value" }.build())?;
                out.extend_from_slice(bytes);
                Value::Binary(Cow::Owned(out))
            }
            Value::Sequence(seq) => Value::Sequence(seq.try_clone()?),
        })
    }
}

fn try_clone_str(s: &Cow<'static, str>) -> Result<Cow<'static, str>> {
    match s {
        Cow::Borrowed(s) => Ok(Cow::Borrowed(s)),
        Cow::Owned(s) => {
            let mut out = String::new();
            out.try_reserve_exact(s.len())
                .map_err(|_| OutOfMemorySnafu { what: "string value" }.build())?;
            out.push_str(s);
            Ok(Cow::Owned(out))
        }
    }
}

/// Split a multi-valued string on the backslash separator.
///
/// Static text is split without copying.
pub(crate) fn split_multi(text: Cow<'static, str>) -> C<Cow<'static, str>> {
    match text {
        Cow::Borrowed(s) => s.split('\\').map(Cow::Borrowed).collect(),
        Cow::Owned(s) if !s.contains('\\') => C::from_elem(Cow::Owned(s), 1),
        Cow::Owned(s) => s.split('\\').map(|p| Cow::Owned(p.to_owned())).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn numeric_kind_follows_variant() {
        assert_eq!(NumericValue::from(5_u16).kind(), NumericKind::U16);
        assert_eq!(NumericValue::from(vec![1.5_f32, 2.]).kind(), NumericKind::F32);
        assert_eq!(NumericValue::from([1_i64, 2, 3]).multiplicity(), 3);
        assert_eq!(NumericValue::from(&[7_u32][..]).multiplicity(), 1);
    }

    #[test]
    fn numeric_widening() {
        let v = NumericValue::from([-2_i16, 300]);
        assert_eq!(v.get_i64(0), Some(-2));
        assert_eq!(v.get_i64(1), Some(300));
        assert_eq!(v.get_i64(2), None);
        assert_eq!(v.get_f64(1), Some(300.));

        let v = NumericValue::from(u64::MAX);
        assert_eq!(v.get_i64(0), Some(-1));

        let v = NumericValue::from(0.25_f32);
        assert_eq!(v.get_f64(0), Some(0.25));
    }

    #[test]
    fn numeric_from_scalar_truncates() {
        let v = NumericValue::from_i64(NumericKind::U16, 65535);
        assert_eq!(v, NumericValue::U16(smallvec![65535]));
        let v = NumericValue::from_i64(NumericKind::I16, 0x1_0001);
        assert_eq!(v, NumericValue::I16(smallvec![1]));
        let v = NumericValue::from_f64(NumericKind::F32, 1.5);
        assert_eq!(v, NumericValue::F32(smallvec![1.5]));
        assert_eq!(v.encoded_length(), 4);
    }

    #[test]
    fn single_values_are_inline() {
        let NumericValue::F64(v) = NumericValue::from(4.0_f64) else {
            panic!("expected F64");
        };
        assert!(!v.spilled());
    }

    #[test]
    fn string_lengths_count_separators() {
        let v = Value::Strings(smallvec!["ORIGINAL".into(), "PRIMARY".into(), "AXIAL".into()]);
        assert_eq!(v.multiplicity(), 3);
        assert_eq!(v.encoded_length(), 8 + 7 + 5 + 2);

        let v = Value::Strings(smallvec!["".into()]);
        assert_eq!(v.encoded_length(), 0);
    }

    #[test]
    fn split_static_text_borrows() {
        let parts = split_multi(Cow::Borrowed("A\\B\\"));
        assert_eq!(parts.len(), 3);
        assert!(parts.iter().all(|p| matches!(p, Cow::Borrowed(_))));
        assert_eq!(parts[2], "");

        let parts = split_multi(Cow::Owned("1.2\\3.4".to_string()));
        assert_eq!(&parts[..], &["1.2", "3.4"]);
    }

    #[test]
    fn deep_copy_of_owned_bytes() {
        let v = Value::Binary(Cow::Owned(vec![1, 2, 3]));
        let copy = v.try_clone().unwrap();
        assert_eq!(copy, v);
        match (&v, &copy) {
            (Value::Binary(a), Value::Binary(b)) => assert_ne!(a.as_ptr(), b.as_ptr()),
            _ => unreachable!(),
        }
    }
}
