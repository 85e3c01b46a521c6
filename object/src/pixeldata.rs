//! Holders for encapsulated pixel data:
//! individual frames and the basic offset table locating them.
//!
//! These are plain containers, validated on construction.
//! Reading frames out of a pixel data element
//! is left to the layers built on top of this crate.

use crate::error::{IndexOutOfRangeSnafu, InvalidFrameSnafu, InvalidOffsetTableSnafu, Result};
use itertools::Itertools;
use snafu::{ensure, OptionExt};
use std::borrow::Cow;
use std::fmt;
use tracing::debug;

/// Transfer syntaxes in which pixel data is stored natively,
/// as opposed to encapsulated in fragments.
const NATIVE_TRANSFER_SYNTAXES: [&str; 4] = [
    // Implicit VR Little Endian
    "1.2.840.10008.1.2",
    // Explicit VR Little Endian
    "1.2.840.10008.1.2.1",
    // Deflated Explicit VR Little Endian
    "1.2.840.10008.1.2.1.99",
    // Explicit VR Big Endian
    "1.2.840.10008.1.2.2",
];

/// Check whether pixel data in the given transfer syntax is encapsulated.
///
/// Every transfer syntax other than the native
/// implicit/explicit VR little endian, deflated and big endian ones
/// is considered encapsulated.
/// Trailing null padding of the UID is ignored.
pub fn is_encapsulated_transfer_syntax(uid: &str) -> bool {
    let uid = uid.trim_end_matches('\0');
    !NATIVE_TRANSFER_SYNTAXES.contains(&uid)
}

/// The attributes describing how the pixels of a frame are laid out.
///
/// These usually come from the Image Pixel module of the data set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelDescription {
    /// Rows (0028,0010)
    pub rows: u16,
    /// Columns (0028,0011)
    pub columns: u16,
    /// Samples per Pixel (0028,0002)
    pub samples_per_pixel: u16,
    /// Bits Allocated (0028,0100)
    pub bits_allocated: u16,
    /// Bits Stored (0028,0101)
    pub bits_stored: u16,
    /// Pixel Representation (0028,0103): 0 for unsigned, 1 for signed
    pub pixel_representation: u16,
    /// Planar Configuration (0028,0006): 0 for interleaved, 1 for planar
    pub planar_configuration: u16,
    /// Photometric Interpretation (0028,0004)
    pub photometric_interpretation: String,
}

impl Default for PixelDescription {
    fn default() -> Self {
        PixelDescription {
            rows: 0,
            columns: 0,
            samples_per_pixel: 1,
            bits_allocated: 8,
            bits_stored: 8,
            pixel_representation: 0,
            planar_configuration: 0,
            photometric_interpretation: String::from("MONOCHROME2"),
        }
    }
}

/// A bit count must be either 1 or a positive multiple of 8.
fn valid_bit_count(bits: u16) -> bool {
    bits == 1 || (bits != 0 && bits % 8 == 0)
}

/// A single frame of pixel data, as stored in the file.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    number: u32,
    data: Cow<'static, [u8]>,
    description: PixelDescription,
    transfer_syntax_uid: String,
}

impl Frame {
    /// Create a frame holding the given pixel data.
    ///
    /// Fails if the data is empty or the pixel description is inconsistent:
    /// bits allocated and bits stored must each be 1 or a multiple of 8,
    /// pixel representation and planar configuration must be 0 or 1.
    pub fn new(
        number: u32,
        data: impl Into<Cow<'static, [u8]>>,
        description: PixelDescription,
        transfer_syntax_uid: impl Into<String>,
    ) -> Result<Self> {
        let data = data.into();
        ensure!(
            !data.is_empty(),
            InvalidFrameSnafu {
                reason: "pixel data cannot be empty"
            }
        );
        ensure!(
            valid_bit_count(description.bits_allocated),
            InvalidFrameSnafu {
                reason: format!("wrong number of bits allocated: {}", description.bits_allocated)
            }
        );
        ensure!(
            valid_bit_count(description.bits_stored),
            InvalidFrameSnafu {
                reason: format!("wrong number of bits stored: {}", description.bits_stored)
            }
        );
        ensure!(
            description.pixel_representation <= 1,
            InvalidFrameSnafu {
                reason: format!(
                    "wrong pixel representation: {}",
                    description.pixel_representation
                )
            }
        );
        ensure!(
            description.planar_configuration <= 1,
            InvalidFrameSnafu {
                reason: format!(
                    "wrong planar configuration: {}",
                    description.planar_configuration
                )
            }
        );
        debug!("Created frame #{} ({} bytes)", number, data.len());
        Ok(Frame {
            number,
            data,
            description,
            transfer_syntax_uid: transfer_syntax_uid.into(),
        })
    }

    /// The frame number, starting at 1.
    pub fn number(&self) -> u32 {
        self.number
    }

    /// The encoded pixel data of this frame.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The length of the pixel data in bytes.
    pub fn length(&self) -> usize {
        self.data.len()
    }

    /// The number of rows of the frame.
    pub fn rows(&self) -> u16 {
        self.description.rows
    }

    /// The number of columns of the frame.
    pub fn columns(&self) -> u16 {
        self.description.columns
    }

    /// The number of samples per pixel.
    pub fn samples_per_pixel(&self) -> u16 {
        self.description.samples_per_pixel
    }

    /// The number of bits allocated to each sample.
    pub fn bits_allocated(&self) -> u16 {
        self.description.bits_allocated
    }

    /// The number of bits used in each sample.
    pub fn bits_stored(&self) -> u16 {
        self.description.bits_stored
    }

    /// The most significant bit of each sample,
    /// always one less than the number of bits stored.
    pub fn high_bit(&self) -> u16 {
        self.description.bits_stored - 1
    }

    /// 0 if samples are unsigned, 1 if signed.
    pub fn pixel_representation(&self) -> u16 {
        self.description.pixel_representation
    }

    /// 0 if samples are interleaved per pixel, 1 if stored by plane.
    pub fn planar_configuration(&self) -> u16 {
        self.description.planar_configuration
    }

    /// The color model of the pixel data, such as `MONOCHROME2` or `RGB`.
    pub fn photometric_interpretation(&self) -> &str {
        &self.description.photometric_interpretation
    }

    /// The UID of the transfer syntax in which the pixel data is encoded.
    pub fn transfer_syntax_uid(&self) -> &str {
        &self.transfer_syntax_uid
    }

    /// Whether the pixel data of this frame is encapsulated,
    /// according to its transfer syntax.
    pub fn is_encapsulated(&self) -> bool {
        is_encapsulated_transfer_syntax(&self.transfer_syntax_uid)
    }

    /// The full pixel description.
    pub fn description(&self) -> &PixelDescription {
        &self.description
    }
}

/// Byte offsets of each frame of encapsulated pixel data.
///
/// Offsets are relative to the first frame,
/// whose own position is kept separately.
/// Every absolute offset fits in an `i64`
/// and the number of frames fits in a `u32`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicOffsetTable {
    offsets: Vec<i64>,
    first_frame_offset: i64,
}

impl BasicOffsetTable {
    /// Create a basic offset table.
    ///
    /// There must be an offset for at least one frame,
    /// and no offset may overflow when added to the first frame offset.
    pub fn new(offsets: Vec<i64>, first_frame_offset: i64) -> Result<Self> {
        ensure!(
            !offsets.is_empty(),
            InvalidOffsetTableSnafu {
                reason: "expected offsets of at least one frame"
            }
        );
        ensure!(
            u32::try_from(offsets.len()).is_ok(),
            InvalidOffsetTableSnafu {
                reason: "too many frames"
            }
        );
        ensure!(
            offsets
                .iter()
                .all(|o| o.checked_add(first_frame_offset).is_some()),
            InvalidOffsetTableSnafu {
                reason: "frame offset out of range"
            }
        );
        debug!("Created basic offset table of {} frames", offsets.len());
        Ok(BasicOffsetTable {
            offsets,
            first_frame_offset,
        })
    }

    /// The number of frames.
    pub fn num_frames(&self) -> u32 {
        // bounded on construction
        self.offsets.len() as u32
    }

    /// The position of the first frame.
    pub fn first_frame_offset(&self) -> i64 {
        self.first_frame_offset
    }

    /// The absolute offset of a frame, given its 1-based number.
    pub fn frame_offset(&self, number: u32) -> Result<i64> {
        let len = self.offsets.len();
        let offset = (number as usize)
            .checked_sub(1)
            .and_then(|index| self.offsets.get(index))
            .context(IndexOutOfRangeSnafu {
                index: number as usize,
                len,
            })?;
        Ok(offset + self.first_frame_offset)
    }

    /// Iterate over the absolute offsets of all frames in order.
    pub fn frame_offsets(&self) -> impl Iterator<Item = i64> + '_ {
        self.offsets.iter().map(move |o| o + self.first_frame_offset)
    }
}

impl fmt::Display for BasicOffsetTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.frame_offsets().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use rstest::rstest;

    const EXPLICIT_VR_LE: &str = "1.2.840.10008.1.2.1";

    fn description() -> PixelDescription {
        PixelDescription {
            rows: 2,
            columns: 2,
            bits_allocated: 16,
            bits_stored: 16,
            ..Default::default()
        }
    }

    #[test]
    fn frame_accessors() {
        let frame = Frame::new(1, vec![0_u8; 8], description(), EXPLICIT_VR_LE).unwrap();
        assert_eq!(frame.number(), 1);
        assert_eq!(frame.length(), 8);
        assert_eq!(frame.data(), &[0; 8]);
        assert_eq!(frame.rows(), 2);
        assert_eq!(frame.columns(), 2);
        assert_eq!(frame.samples_per_pixel(), 1);
        assert_eq!(frame.bits_allocated(), 16);
        assert_eq!(frame.bits_stored(), 16);
        assert_eq!(frame.high_bit(), 15);
        assert_eq!(frame.pixel_representation(), 0);
        assert_eq!(frame.planar_configuration(), 0);
        assert_eq!(frame.photometric_interpretation(), "MONOCHROME2");
        assert_eq!(frame.transfer_syntax_uid(), EXPLICIT_VR_LE);
    }

    #[test]
    fn empty_frame() {
        assert!(matches!(
            Frame::new(1, Vec::new(), description(), EXPLICIT_VR_LE),
            Err(Error::InvalidFrame { .. })
        ));
    }

    #[rstest]
    #[case(16, 12, 0, 0)]
    #[case(12, 16, 0, 0)]
    #[case(0, 8, 0, 0)]
    #[case(8, 0, 0, 0)]
    #[case(8, 8, 2, 0)]
    #[case(8, 8, 0, 2)]
    fn invalid_pixel_description(
        #[case] bits_allocated: u16,
        #[case] bits_stored: u16,
        #[case] pixel_representation: u16,
        #[case] planar_configuration: u16,
    ) {
        let desc = PixelDescription {
            bits_allocated,
            bits_stored,
            pixel_representation,
            planar_configuration,
            ..description()
        };
        assert!(matches!(
            Frame::new(1, vec![1_u8, 2, 3, 4], desc, EXPLICIT_VR_LE),
            Err(Error::InvalidFrame { .. })
        ));
    }

    #[rstest]
    #[case(1, 1)]
    #[case(8, 8)]
    #[case(16, 8)]
    #[case(32, 24)]
    fn valid_bit_counts(#[case] bits_allocated: u16, #[case] bits_stored: u16) {
        let desc = PixelDescription {
            bits_allocated,
            bits_stored,
            ..description()
        };
        let frame = Frame::new(3, vec![0xFF_u8; 4], desc, EXPLICIT_VR_LE).unwrap();
        assert_eq!(frame.high_bit(), bits_stored - 1);
    }

    #[test]
    fn offset_table() {
        let bot = BasicOffsetTable::new(vec![0, 1024, 2048], 100).unwrap();
        assert_eq!(bot.num_frames(), 3);
        assert_eq!(bot.first_frame_offset(), 100);
        assert_eq!(bot.frame_offset(1).unwrap(), 100);
        assert_eq!(bot.frame_offset(3).unwrap(), 2148);
        assert!(matches!(
            bot.frame_offset(0),
            Err(Error::IndexOutOfRange { .. })
        ));
        assert!(matches!(
            bot.frame_offset(4),
            Err(Error::IndexOutOfRange { .. })
        ));
        assert_eq!(bot.to_string(), "[100, 1124, 2148]");
    }

    #[test]
    fn empty_offset_table() {
        assert!(matches!(
            BasicOffsetTable::new(Vec::new(), 0),
            Err(Error::InvalidOffsetTable { .. })
        ));
    }

    #[rstest]
    #[case(vec![0, i64::MAX], 1)]
    #[case(vec![i64::MIN], -1)]
    #[case(vec![0, 1024], i64::MAX)]
    fn overflowing_offset_table(#[case] offsets: Vec<i64>, #[case] first_frame_offset: i64) {
        assert!(matches!(
            BasicOffsetTable::new(offsets, first_frame_offset),
            Err(Error::InvalidOffsetTable { .. })
        ));
    }

    #[test]
    fn offset_table_at_the_limit() {
        let bot = BasicOffsetTable::new(vec![0, i64::MAX - 10], 10).unwrap();
        assert_eq!(bot.frame_offset(2).unwrap(), i64::MAX);
        assert_eq!(bot.frame_offsets().last(), Some(i64::MAX));
    }

    #[rstest]
    #[case("1.2.840.10008.1.2", false)]
    #[case("1.2.840.10008.1.2.1", false)]
    #[case("1.2.840.10008.1.2.1.99", false)]
    #[case("1.2.840.10008.1.2.2", false)]
    #[case("1.2.840.10008.1.2.1\0", false)]
    #[case("1.2.840.10008.1.2.1.98", true)]
    #[case("1.2.840.10008.1.2.4.50", true)]
    #[case("1.2.840.10008.1.2.4.90", true)]
    #[case("1.2.840.10008.1.2.5", true)]
    #[case("1.2.840.10008.1.2.4.201", true)]
    fn encapsulated_transfer_syntaxes(#[case] uid: &str, #[case] encapsulated: bool) {
        assert_eq!(is_encapsulated_transfer_syntax(uid), encapsulated);
    }

    #[test]
    fn frame_knows_its_encapsulation() {
        let native = Frame::new(1, vec![0_u8; 8], description(), EXPLICIT_VR_LE).unwrap();
        assert!(!native.is_encapsulated());

        let jpeg = Frame::new(1, vec![0xFF_u8, 0xD8], description(), "1.2.840.10008.1.2.4.50")
            .unwrap();
        assert!(jpeg.is_encapsulated());
    }
}
