//! Automatically generated. Edit at your own risk.
//!
//! Tag constants and dictionary entries
//! for a selection of standard DICOM attributes.

use dcmdata_core::dictionary::{DataDictionaryEntryRef, TagRange::*};
use dcmdata_core::Tag;
use dcmdata_core::VR::*;

/// CommandGroupLength (0000,0000) UL
#[rustfmt::skip]
pub const COMMAND_GROUP_LENGTH: Tag = Tag(0x0000, 0x0000);

/// AffectedSOPClassUID (0000,0002) UI
#[rustfmt::skip]
pub const AFFECTED_SOP_CLASS_UID: Tag = Tag(0x0000, 0x0002);

/// CommandField (0000,0100) US
#[rustfmt::skip]
pub const COMMAND_FIELD: Tag = Tag(0x0000, 0x0100);

/// MessageID (0000,0110) US
#[rustfmt::skip]
pub const MESSAGE_ID: Tag = Tag(0x0000, 0x0110);

/// CommandDataSetType (0000,0800) US
#[rustfmt::skip]
pub const COMMAND_DATA_SET_TYPE: Tag = Tag(0x0000, 0x0800);

/// Status (0000,0900) US
#[rustfmt::skip]
pub const STATUS: Tag = Tag(0x0000, 0x0900);

/// FileMetaInformationGroupLength (0002,0000) UL
#[rustfmt::skip]
pub const FILE_META_INFORMATION_GROUP_LENGTH: Tag = Tag(0x0002, 0x0000);

/// FileMetaInformationVersion (0002,0001) OB
#[rustfmt::skip]
pub const FILE_META_INFORMATION_VERSION: Tag = Tag(0x0002, 0x0001);

/// MediaStorageSOPClassUID (0002,0002) UI
#[rustfmt::skip]
pub const MEDIA_STORAGE_SOP_CLASS_UID: Tag = Tag(0x0002, 0x0002);

/// MediaStorageSOPInstanceUID (0002,0003) UI
#[rustfmt::skip]
pub const MEDIA_STORAGE_SOP_INSTANCE_UID: Tag = Tag(0x0002, 0x0003);

/// TransferSyntaxUID (0002,0010) UI
#[rustfmt::skip]
pub const TRANSFER_SYNTAX_UID: Tag = Tag(0x0002, 0x0010);

/// ImplementationClassUID (0002,0012) UI
#[rustfmt::skip]
pub const IMPLEMENTATION_CLASS_UID: Tag = Tag(0x0002, 0x0012);

/// ImplementationVersionName (0002,0013) SH
#[rustfmt::skip]
pub const IMPLEMENTATION_VERSION_NAME: Tag = Tag(0x0002, 0x0013);

/// SpecificCharacterSet (0008,0005) CS
#[rustfmt::skip]
pub const SPECIFIC_CHARACTER_SET: Tag = Tag(0x0008, 0x0005);

/// ImageType (0008,0008) CS
#[rustfmt::skip]
pub const IMAGE_TYPE: Tag = Tag(0x0008, 0x0008);

/// InstanceCreationDate (0008,0012) DA
#[rustfmt::skip]
pub const INSTANCE_CREATION_DATE: Tag = Tag(0x0008, 0x0012);

/// InstanceCreationTime (0008,0013) TM
#[rustfmt::skip]
pub const INSTANCE_CREATION_TIME: Tag = Tag(0x0008, 0x0013);

/// SOPClassUID (0008,0016) UI
#[rustfmt::skip]
pub const SOP_CLASS_UID: Tag = Tag(0x0008, 0x0016);

/// SOPInstanceUID (0008,0018) UI
#[rustfmt::skip]
pub const SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x0018);

/// StudyDate (0008,0020) DA
#[rustfmt::skip]
pub const STUDY_DATE: Tag = Tag(0x0008, 0x0020);

/// SeriesDate (0008,0021) DA
#[rustfmt::skip]
pub const SERIES_DATE: Tag = Tag(0x0008, 0x0021);

/// AcquisitionDate (0008,0022) DA
#[rustfmt::skip]
pub const ACQUISITION_DATE: Tag = Tag(0x0008, 0x0022);

/// ContentDate (0008,0023) DA
#[rustfmt::skip]
pub const CONTENT_DATE: Tag = Tag(0x0008, 0x0023);

/// AcquisitionDateTime (0008,002A) DT
#[rustfmt::skip]
pub const ACQUISITION_DATE_TIME: Tag = Tag(0x0008, 0x002A);

/// StudyTime (0008,0030) TM
#[rustfmt::skip]
pub const STUDY_TIME: Tag = Tag(0x0008, 0x0030);

/// SeriesTime (0008,0031) TM
#[rustfmt::skip]
pub const SERIES_TIME: Tag = Tag(0x0008, 0x0031);

/// ContentTime (0008,0033) TM
#[rustfmt::skip]
pub const CONTENT_TIME: Tag = Tag(0x0008, 0x0033);

/// AccessionNumber (0008,0050) SH
#[rustfmt::skip]
pub const ACCESSION_NUMBER: Tag = Tag(0x0008, 0x0050);

/// Modality (0008,0060) CS
#[rustfmt::skip]
pub const MODALITY: Tag = Tag(0x0008, 0x0060);

/// ConversionType (0008,0064) CS
#[rustfmt::skip]
pub const CONVERSION_TYPE: Tag = Tag(0x0008, 0x0064);

/// Manufacturer (0008,0070) LO
#[rustfmt::skip]
pub const MANUFACTURER: Tag = Tag(0x0008, 0x0070);

/// InstitutionName (0008,0080) LO
#[rustfmt::skip]
pub const INSTITUTION_NAME: Tag = Tag(0x0008, 0x0080);

/// InstitutionAddress (0008,0081) ST
#[rustfmt::skip]
pub const INSTITUTION_ADDRESS: Tag = Tag(0x0008, 0x0081);

/// ReferringPhysicianName (0008,0090) PN
#[rustfmt::skip]
pub const REFERRING_PHYSICIAN_NAME: Tag = Tag(0x0008, 0x0090);

/// CodeValue (0008,0100) SH
#[rustfmt::skip]
pub const CODE_VALUE: Tag = Tag(0x0008, 0x0100);

/// CodingSchemeDesignator (0008,0102) SH
#[rustfmt::skip]
pub const CODING_SCHEME_DESIGNATOR: Tag = Tag(0x0008, 0x0102);

/// CodeMeaning (0008,0104) LO
#[rustfmt::skip]
pub const CODE_MEANING: Tag = Tag(0x0008, 0x0104);

/// MappingResource (0008,0105) CS
#[rustfmt::skip]
pub const MAPPING_RESOURCE: Tag = Tag(0x0008, 0x0105);

/// LongCodeValue (0008,0119) UC
#[rustfmt::skip]
pub const LONG_CODE_VALUE: Tag = Tag(0x0008, 0x0119);

/// URNCodeValue (0008,0120) UR
#[rustfmt::skip]
pub const URN_CODE_VALUE: Tag = Tag(0x0008, 0x0120);

/// TimezoneOffsetFromUTC (0008,0201) SH
#[rustfmt::skip]
pub const TIMEZONE_OFFSET_FROM_UTC: Tag = Tag(0x0008, 0x0201);

/// StudyDescription (0008,1030) LO
#[rustfmt::skip]
pub const STUDY_DESCRIPTION: Tag = Tag(0x0008, 0x1030);

/// SeriesDescription (0008,103E) LO
#[rustfmt::skip]
pub const SERIES_DESCRIPTION: Tag = Tag(0x0008, 0x103E);

/// InstitutionalDepartmentName (0008,1040) LO
#[rustfmt::skip]
pub const INSTITUTIONAL_DEPARTMENT_NAME: Tag = Tag(0x0008, 0x1040);

/// OperatorsName (0008,1070) PN
#[rustfmt::skip]
pub const OPERATORS_NAME: Tag = Tag(0x0008, 0x1070);

/// ManufacturerModelName (0008,1090) LO
#[rustfmt::skip]
pub const MANUFACTURER_MODEL_NAME: Tag = Tag(0x0008, 0x1090);

/// ReferencedSeriesSequence (0008,1115) SQ
#[rustfmt::skip]
pub const REFERENCED_SERIES_SEQUENCE: Tag = Tag(0x0008, 0x1115);

/// ReferencedImageSequence (0008,1140) SQ
#[rustfmt::skip]
pub const REFERENCED_IMAGE_SEQUENCE: Tag = Tag(0x0008, 0x1140);

/// ReferencedSOPClassUID (0008,1150) UI
#[rustfmt::skip]
pub const REFERENCED_SOP_CLASS_UID: Tag = Tag(0x0008, 0x1150);

/// ReferencedSOPInstanceUID (0008,1155) UI
#[rustfmt::skip]
pub const REFERENCED_SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x1155);

/// ReferencedFrameNumber (0008,1160) IS
#[rustfmt::skip]
pub const REFERENCED_FRAME_NUMBER: Tag = Tag(0x0008, 0x1160);

/// ReferencedSOPSequence (0008,1199) SQ
#[rustfmt::skip]
pub const REFERENCED_SOP_SEQUENCE: Tag = Tag(0x0008, 0x1199);

/// AnatomicRegionSequence (0008,2218) SQ
#[rustfmt::skip]
pub const ANATOMIC_REGION_SEQUENCE: Tag = Tag(0x0008, 0x2218);

/// VolumetricProperties (0008,9206) CS
#[rustfmt::skip]
pub const VOLUMETRIC_PROPERTIES: Tag = Tag(0x0008, 0x9206);

/// PatientName (0010,0010) PN
#[rustfmt::skip]
pub const PATIENT_NAME: Tag = Tag(0x0010, 0x0010);

/// PatientID (0010,0020) LO
#[rustfmt::skip]
pub const PATIENT_ID: Tag = Tag(0x0010, 0x0020);

/// PatientBirthDate (0010,0030) DA
#[rustfmt::skip]
pub const PATIENT_BIRTH_DATE: Tag = Tag(0x0010, 0x0030);

/// PatientSex (0010,0040) CS
#[rustfmt::skip]
pub const PATIENT_SEX: Tag = Tag(0x0010, 0x0040);

/// PatientAge (0010,1010) AS
#[rustfmt::skip]
pub const PATIENT_AGE: Tag = Tag(0x0010, 0x1010);

/// PatientSize (0010,1020) DS
#[rustfmt::skip]
pub const PATIENT_SIZE: Tag = Tag(0x0010, 0x1020);

/// PatientWeight (0010,1030) DS
#[rustfmt::skip]
pub const PATIENT_WEIGHT: Tag = Tag(0x0010, 0x1030);

/// PregnancyStatus (0010,21C0) US
#[rustfmt::skip]
pub const PREGNANCY_STATUS: Tag = Tag(0x0010, 0x21C0);

/// PatientComments (0010,4000) LT
#[rustfmt::skip]
pub const PATIENT_COMMENTS: Tag = Tag(0x0010, 0x4000);

/// BodyPartExamined (0018,0015) CS
#[rustfmt::skip]
pub const BODY_PART_EXAMINED: Tag = Tag(0x0018, 0x0015);

/// SliceThickness (0018,0050) DS
#[rustfmt::skip]
pub const SLICE_THICKNESS: Tag = Tag(0x0018, 0x0050);

/// KVP (0018,0060) DS
#[rustfmt::skip]
pub const KVP: Tag = Tag(0x0018, 0x0060);

/// SpacingBetweenSlices (0018,0088) DS
#[rustfmt::skip]
pub const SPACING_BETWEEN_SLICES: Tag = Tag(0x0018, 0x0088);

/// DeviceSerialNumber (0018,1000) LO
#[rustfmt::skip]
pub const DEVICE_SERIAL_NUMBER: Tag = Tag(0x0018, 0x1000);

/// SoftwareVersions (0018,1020) LO
#[rustfmt::skip]
pub const SOFTWARE_VERSIONS: Tag = Tag(0x0018, 0x1020);

/// PatientPosition (0018,5100) CS
#[rustfmt::skip]
pub const PATIENT_POSITION: Tag = Tag(0x0018, 0x5100);

/// SequenceOfUltrasoundRegions (0018,6011) SQ
#[rustfmt::skip]
pub const SEQUENCE_OF_ULTRASOUND_REGIONS: Tag = Tag(0x0018, 0x6011);

/// RegionSpatialFormat (0018,6012) US
#[rustfmt::skip]
pub const REGION_SPATIAL_FORMAT: Tag = Tag(0x0018, 0x6012);

/// RegionDataType (0018,6014) US
#[rustfmt::skip]
pub const REGION_DATA_TYPE: Tag = Tag(0x0018, 0x6014);

/// ReferencePixelX0 (0018,6020) SL
#[rustfmt::skip]
pub const REFERENCE_PIXEL_X0: Tag = Tag(0x0018, 0x6020);

/// ReferencePixelY0 (0018,6022) SL
#[rustfmt::skip]
pub const REFERENCE_PIXEL_Y0: Tag = Tag(0x0018, 0x6022);

/// FrameAcquisitionDateTime (0018,9074) DT
#[rustfmt::skip]
pub const FRAME_ACQUISITION_DATE_TIME: Tag = Tag(0x0018, 0x9074);

/// FrameReferenceDateTime (0018,9151) DT
#[rustfmt::skip]
pub const FRAME_REFERENCE_DATE_TIME: Tag = Tag(0x0018, 0x9151);

/// FrameAcquisitionDuration (0018,9220) FD
#[rustfmt::skip]
pub const FRAME_ACQUISITION_DURATION: Tag = Tag(0x0018, 0x9220);

/// StudyInstanceUID (0020,000D) UI
#[rustfmt::skip]
pub const STUDY_INSTANCE_UID: Tag = Tag(0x0020, 0x000D);

/// SeriesInstanceUID (0020,000E) UI
#[rustfmt::skip]
pub const SERIES_INSTANCE_UID: Tag = Tag(0x0020, 0x000E);

/// StudyID (0020,0010) SH
#[rustfmt::skip]
pub const STUDY_ID: Tag = Tag(0x0020, 0x0010);

/// SeriesNumber (0020,0011) IS
#[rustfmt::skip]
pub const SERIES_NUMBER: Tag = Tag(0x0020, 0x0011);

/// InstanceNumber (0020,0013) IS
#[rustfmt::skip]
pub const INSTANCE_NUMBER: Tag = Tag(0x0020, 0x0013);

/// PatientOrientation (0020,0020) CS
#[rustfmt::skip]
pub const PATIENT_ORIENTATION: Tag = Tag(0x0020, 0x0020);

/// ImagePositionPatient (0020,0032) DS
#[rustfmt::skip]
pub const IMAGE_POSITION_PATIENT: Tag = Tag(0x0020, 0x0032);

/// ImageOrientationPatient (0020,0037) DS
#[rustfmt::skip]
pub const IMAGE_ORIENTATION_PATIENT: Tag = Tag(0x0020, 0x0037);

/// FrameOfReferenceUID (0020,0052) UI
#[rustfmt::skip]
pub const FRAME_OF_REFERENCE_UID: Tag = Tag(0x0020, 0x0052);

/// Laterality (0020,0060) CS
#[rustfmt::skip]
pub const LATERALITY: Tag = Tag(0x0020, 0x0060);

/// SliceLocation (0020,1041) DS
#[rustfmt::skip]
pub const SLICE_LOCATION: Tag = Tag(0x0020, 0x1041);

/// ImageComments (0020,4000) LT
#[rustfmt::skip]
pub const IMAGE_COMMENTS: Tag = Tag(0x0020, 0x4000);

/// FrameContentSequence (0020,9111) SQ
#[rustfmt::skip]
pub const FRAME_CONTENT_SEQUENCE: Tag = Tag(0x0020, 0x9111);

/// DimensionIndexValues (0020,9157) UL
#[rustfmt::skip]
pub const DIMENSION_INDEX_VALUES: Tag = Tag(0x0020, 0x9157);

/// ConcatenationUID (0020,9161) UI
#[rustfmt::skip]
pub const CONCATENATION_UID: Tag = Tag(0x0020, 0x9161);

/// InConcatenationNumber (0020,9162) US
#[rustfmt::skip]
pub const IN_CONCATENATION_NUMBER: Tag = Tag(0x0020, 0x9162);

/// DimensionIndexPointer (0020,9165) AT
#[rustfmt::skip]
pub const DIMENSION_INDEX_POINTER: Tag = Tag(0x0020, 0x9165);

/// DimensionOrganizationSequence (0020,9221) SQ
#[rustfmt::skip]
pub const DIMENSION_ORGANIZATION_SEQUENCE: Tag = Tag(0x0020, 0x9221);

/// DimensionIndexSequence (0020,9222) SQ
#[rustfmt::skip]
pub const DIMENSION_INDEX_SEQUENCE: Tag = Tag(0x0020, 0x9222);

/// ConcatenationFrameOffsetNumber (0020,9228) UL
#[rustfmt::skip]
pub const CONCATENATION_FRAME_OFFSET_NUMBER: Tag = Tag(0x0020, 0x9228);

/// SamplesPerPixel (0028,0002) US
#[rustfmt::skip]
pub const SAMPLES_PER_PIXEL: Tag = Tag(0x0028, 0x0002);

/// PhotometricInterpretation (0028,0004) CS
#[rustfmt::skip]
pub const PHOTOMETRIC_INTERPRETATION: Tag = Tag(0x0028, 0x0004);

/// PlanarConfiguration (0028,0006) US
#[rustfmt::skip]
pub const PLANAR_CONFIGURATION: Tag = Tag(0x0028, 0x0006);

/// NumberOfFrames (0028,0008) IS
#[rustfmt::skip]
pub const NUMBER_OF_FRAMES: Tag = Tag(0x0028, 0x0008);

/// FrameIncrementPointer (0028,0009) AT
#[rustfmt::skip]
pub const FRAME_INCREMENT_POINTER: Tag = Tag(0x0028, 0x0009);

/// Rows (0028,0010) US
#[rustfmt::skip]
pub const ROWS: Tag = Tag(0x0028, 0x0010);

/// Columns (0028,0011) US
#[rustfmt::skip]
pub const COLUMNS: Tag = Tag(0x0028, 0x0011);

/// PixelSpacing (0028,0030) DS
#[rustfmt::skip]
pub const PIXEL_SPACING: Tag = Tag(0x0028, 0x0030);

/// BitsAllocated (0028,0100) US
#[rustfmt::skip]
pub const BITS_ALLOCATED: Tag = Tag(0x0028, 0x0100);

/// BitsStored (0028,0101) US
#[rustfmt::skip]
pub const BITS_STORED: Tag = Tag(0x0028, 0x0101);

/// HighBit (0028,0102) US
#[rustfmt::skip]
pub const HIGH_BIT: Tag = Tag(0x0028, 0x0102);

/// PixelRepresentation (0028,0103) US
#[rustfmt::skip]
pub const PIXEL_REPRESENTATION: Tag = Tag(0x0028, 0x0103);

/// BurnedInAnnotation (0028,0301) CS
#[rustfmt::skip]
pub const BURNED_IN_ANNOTATION: Tag = Tag(0x0028, 0x0301);

/// WindowCenter (0028,1050) DS
#[rustfmt::skip]
pub const WINDOW_CENTER: Tag = Tag(0x0028, 0x1050);

/// WindowWidth (0028,1051) DS
#[rustfmt::skip]
pub const WINDOW_WIDTH: Tag = Tag(0x0028, 0x1051);

/// RescaleIntercept (0028,1052) DS
#[rustfmt::skip]
pub const RESCALE_INTERCEPT: Tag = Tag(0x0028, 0x1052);

/// RescaleSlope (0028,1053) DS
#[rustfmt::skip]
pub const RESCALE_SLOPE: Tag = Tag(0x0028, 0x1053);

/// ICCProfile (0028,2000) OB
#[rustfmt::skip]
pub const ICC_PROFILE: Tag = Tag(0x0028, 0x2000);

/// LossyImageCompression (0028,2110) CS
#[rustfmt::skip]
pub const LOSSY_IMAGE_COMPRESSION: Tag = Tag(0x0028, 0x2110);

/// PixelDataProviderURL (0028,7FE0) UR
#[rustfmt::skip]
pub const PIXEL_DATA_PROVIDER_URL: Tag = Tag(0x0028, 0x7FE0);

/// PixelMeasuresSequence (0028,9110) SQ
#[rustfmt::skip]
pub const PIXEL_MEASURES_SEQUENCE: Tag = Tag(0x0028, 0x9110);

/// RequestedProcedureDescription (0032,1060) LO
#[rustfmt::skip]
pub const REQUESTED_PROCEDURE_DESCRIPTION: Tag = Tag(0x0032, 0x1060);

/// PerformedProcedureStepStartDate (0040,0244) DA
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_START_DATE: Tag = Tag(0x0040, 0x0244);

/// PerformedProcedureStepDescription (0040,0254) LO
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_DESCRIPTION: Tag = Tag(0x0040, 0x0254);

/// ContentItemModifierSequence (0040,0441) SQ
#[rustfmt::skip]
pub const CONTENT_ITEM_MODIFIER_SEQUENCE: Tag = Tag(0x0040, 0x0441);

/// ContainerIdentifier (0040,0512) LO
#[rustfmt::skip]
pub const CONTAINER_IDENTIFIER: Tag = Tag(0x0040, 0x0512);

/// SpecimenIdentifier (0040,0551) LO
#[rustfmt::skip]
pub const SPECIMEN_IDENTIFIER: Tag = Tag(0x0040, 0x0551);

/// SpecimenUID (0040,0554) UI
#[rustfmt::skip]
pub const SPECIMEN_UID: Tag = Tag(0x0040, 0x0554);

/// AcquisitionContextSequence (0040,0555) SQ
#[rustfmt::skip]
pub const ACQUISITION_CONTEXT_SEQUENCE: Tag = Tag(0x0040, 0x0555);

/// SpecimenDescriptionSequence (0040,0560) SQ
#[rustfmt::skip]
pub const SPECIMEN_DESCRIPTION_SEQUENCE: Tag = Tag(0x0040, 0x0560);

/// XOffsetInSlideCoordinateSystem (0040,072A) DS
#[rustfmt::skip]
pub const X_OFFSET_IN_SLIDE_COORDINATE_SYSTEM: Tag = Tag(0x0040, 0x072A);

/// YOffsetInSlideCoordinateSystem (0040,073A) DS
#[rustfmt::skip]
pub const Y_OFFSET_IN_SLIDE_COORDINATE_SYSTEM: Tag = Tag(0x0040, 0x073A);

/// ZOffsetInSlideCoordinateSystem (0040,074A) DS
#[rustfmt::skip]
pub const Z_OFFSET_IN_SLIDE_COORDINATE_SYSTEM: Tag = Tag(0x0040, 0x074A);

/// RealWorldValueMappingSequence (0040,9096) SQ
#[rustfmt::skip]
pub const REAL_WORLD_VALUE_MAPPING_SEQUENCE: Tag = Tag(0x0040, 0x9096);

/// RealWorldValueIntercept (0040,9224) FD
#[rustfmt::skip]
pub const REAL_WORLD_VALUE_INTERCEPT: Tag = Tag(0x0040, 0x9224);

/// RealWorldValueSlope (0040,9225) FD
#[rustfmt::skip]
pub const REAL_WORLD_VALUE_SLOPE: Tag = Tag(0x0040, 0x9225);

/// RelationshipType (0040,A010) CS
#[rustfmt::skip]
pub const RELATIONSHIP_TYPE: Tag = Tag(0x0040, 0xA010);

/// ValueType (0040,A040) CS
#[rustfmt::skip]
pub const VALUE_TYPE: Tag = Tag(0x0040, 0xA040);

/// ConceptNameCodeSequence (0040,A043) SQ
#[rustfmt::skip]
pub const CONCEPT_NAME_CODE_SEQUENCE: Tag = Tag(0x0040, 0xA043);

/// UID (0040,A124) UI
#[rustfmt::skip]
pub const UID: Tag = Tag(0x0040, 0xA124);

/// TextValue (0040,A160) UT
#[rustfmt::skip]
pub const TEXT_VALUE: Tag = Tag(0x0040, 0xA160);

/// ConceptCodeSequence (0040,A168) SQ
#[rustfmt::skip]
pub const CONCEPT_CODE_SEQUENCE: Tag = Tag(0x0040, 0xA168);

/// PurposeOfReferenceCodeSequence (0040,A170) SQ
#[rustfmt::skip]
pub const PURPOSE_OF_REFERENCE_CODE_SEQUENCE: Tag = Tag(0x0040, 0xA170);

/// ContentSequence (0040,A730) SQ
#[rustfmt::skip]
pub const CONTENT_SEQUENCE: Tag = Tag(0x0040, 0xA730);

/// ImagedVolumeWidth (0048,0001) FL
#[rustfmt::skip]
pub const IMAGED_VOLUME_WIDTH: Tag = Tag(0x0048, 0x0001);

/// ImagedVolumeHeight (0048,0002) FL
#[rustfmt::skip]
pub const IMAGED_VOLUME_HEIGHT: Tag = Tag(0x0048, 0x0002);

/// ImagedVolumeDepth (0048,0003) FL
#[rustfmt::skip]
pub const IMAGED_VOLUME_DEPTH: Tag = Tag(0x0048, 0x0003);

/// TotalPixelMatrixColumns (0048,0006) UL
#[rustfmt::skip]
pub const TOTAL_PIXEL_MATRIX_COLUMNS: Tag = Tag(0x0048, 0x0006);

/// TotalPixelMatrixRows (0048,0007) UL
#[rustfmt::skip]
pub const TOTAL_PIXEL_MATRIX_ROWS: Tag = Tag(0x0048, 0x0007);

/// TotalPixelMatrixOriginSequence (0048,0008) SQ
#[rustfmt::skip]
pub const TOTAL_PIXEL_MATRIX_ORIGIN_SEQUENCE: Tag = Tag(0x0048, 0x0008);

/// SpecimenLabelInImage (0048,0010) CS
#[rustfmt::skip]
pub const SPECIMEN_LABEL_IN_IMAGE: Tag = Tag(0x0048, 0x0010);

/// ImageOrientationSlide (0048,0102) DS
#[rustfmt::skip]
pub const IMAGE_ORIENTATION_SLIDE: Tag = Tag(0x0048, 0x0102);

/// OpticalPathSequence (0048,0105) SQ
#[rustfmt::skip]
pub const OPTICAL_PATH_SEQUENCE: Tag = Tag(0x0048, 0x0105);

/// OpticalPathIdentifier (0048,0106) SH
#[rustfmt::skip]
pub const OPTICAL_PATH_IDENTIFIER: Tag = Tag(0x0048, 0x0106);

/// PlanePositionSlideSequence (0048,021A) SQ
#[rustfmt::skip]
pub const PLANE_POSITION_SLIDE_SEQUENCE: Tag = Tag(0x0048, 0x021A);

/// ColumnPositionInTotalImagePixelMatrix (0048,021E) SL
#[rustfmt::skip]
pub const COLUMN_POSITION_IN_TOTAL_IMAGE_PIXEL_MATRIX: Tag = Tag(0x0048, 0x021E);

/// RowPositionInTotalImagePixelMatrix (0048,021F) SL
#[rustfmt::skip]
pub const ROW_POSITION_IN_TOTAL_IMAGE_PIXEL_MATRIX: Tag = Tag(0x0048, 0x021F);

/// NumberOfSlices (0054,0081) US
#[rustfmt::skip]
pub const NUMBER_OF_SLICES: Tag = Tag(0x0054, 0x0081);

/// SelectorFDValue (0072,0074) FD
#[rustfmt::skip]
pub const SELECTOR_FD_VALUE: Tag = Tag(0x0072, 0x0074);

/// SelectorFLValue (0072,0076) FL
#[rustfmt::skip]
pub const SELECTOR_FL_VALUE: Tag = Tag(0x0072, 0x0076);

/// SelectorULValue (0072,0078) UL
#[rustfmt::skip]
pub const SELECTOR_UL_VALUE: Tag = Tag(0x0072, 0x0078);

/// SelectorUSValue (0072,007A) US
#[rustfmt::skip]
pub const SELECTOR_US_VALUE: Tag = Tag(0x0072, 0x007A);

/// SelectorSLValue (0072,007C) SL
#[rustfmt::skip]
pub const SELECTOR_SL_VALUE: Tag = Tag(0x0072, 0x007C);

/// SelectorSSValue (0072,007E) SS
#[rustfmt::skip]
pub const SELECTOR_SS_VALUE: Tag = Tag(0x0072, 0x007E);

/// SelectorOVValue (0072,0081) OV
#[rustfmt::skip]
pub const SELECTOR_OV_VALUE: Tag = Tag(0x0072, 0x0081);

/// SelectorSVValue (0072,0082) SV
#[rustfmt::skip]
pub const SELECTOR_SV_VALUE: Tag = Tag(0x0072, 0x0082);

/// SelectorUVValue (0072,0083) UV
#[rustfmt::skip]
pub const SELECTOR_UV_VALUE: Tag = Tag(0x0072, 0x0083);

/// SharedFunctionalGroupsSequence (5200,9229) SQ
#[rustfmt::skip]
pub const SHARED_FUNCTIONAL_GROUPS_SEQUENCE: Tag = Tag(0x5200, 0x9229);

/// PerFrameFunctionalGroupsSequence (5200,9230) SQ
#[rustfmt::skip]
pub const PER_FRAME_FUNCTIONAL_GROUPS_SEQUENCE: Tag = Tag(0x5200, 0x9230);

/// OverlayRows (60xx,0010) US
#[rustfmt::skip]
pub const OVERLAY_ROWS: Tag = Tag(0x6000, 0x0010);

/// OverlayColumns (60xx,0011) US
#[rustfmt::skip]
pub const OVERLAY_COLUMNS: Tag = Tag(0x6000, 0x0011);

/// OverlayData (60xx,3000) OW
#[rustfmt::skip]
pub const OVERLAY_DATA: Tag = Tag(0x6000, 0x3000);

/// ExtendedOffsetTable (7FE0,0001) OV
#[rustfmt::skip]
pub const EXTENDED_OFFSET_TABLE: Tag = Tag(0x7FE0, 0x0001);

/// ExtendedOffsetTableLengths (7FE0,0002) OV
#[rustfmt::skip]
pub const EXTENDED_OFFSET_TABLE_LENGTHS: Tag = Tag(0x7FE0, 0x0002);

/// FloatPixelData (7FE0,0008) OF
#[rustfmt::skip]
pub const FLOAT_PIXEL_DATA: Tag = Tag(0x7FE0, 0x0008);

/// DoubleFloatPixelData (7FE0,0009) OD
#[rustfmt::skip]
pub const DOUBLE_FLOAT_PIXEL_DATA: Tag = Tag(0x7FE0, 0x0009);

/// PixelData (7FE0,0010) OW
#[rustfmt::skip]
pub const PIXEL_DATA: Tag = Tag(0x7FE0, 0x0010);

type E = DataDictionaryEntryRef<'static>;

#[rustfmt::skip]
pub(crate) const ENTRIES: &[E] = &[
    E { tag: Single(COMMAND_GROUP_LENGTH), alias: "CommandGroupLength", vr: UL },
    E { tag: Single(AFFECTED_SOP_CLASS_UID), alias: "AffectedSOPClassUID", vr: UI },
    E { tag: Single(COMMAND_FIELD), alias: "CommandField", vr: US },
    E { tag: Single(MESSAGE_ID), alias: "MessageID", vr: US },
    E { tag: Single(COMMAND_DATA_SET_TYPE), alias: "CommandDataSetType", vr: US },
    E { tag: Single(STATUS), alias: "Status", vr: US },
    E { tag: Single(FILE_META_INFORMATION_GROUP_LENGTH), alias: "FileMetaInformationGroupLength", vr: UL },
    E { tag: Single(FILE_META_INFORMATION_VERSION), alias: "FileMetaInformationVersion", vr: OB },
    E { tag: Single(MEDIA_STORAGE_SOP_CLASS_UID), alias: "MediaStorageSOPClassUID", vr: UI },
    E { tag: Single(MEDIA_STORAGE_SOP_INSTANCE_UID), alias: "MediaStorageSOPInstanceUID", vr: UI },
    E { tag: Single(TRANSFER_SYNTAX_UID), alias: "TransferSyntaxUID", vr: UI },
    E { tag: Single(IMPLEMENTATION_CLASS_UID), alias: "ImplementationClassUID", vr: UI },
    E { tag: Single(IMPLEMENTATION_VERSION_NAME), alias: "ImplementationVersionName", vr: SH },
    E { tag: Single(SPECIFIC_CHARACTER_SET), alias: "SpecificCharacterSet", vr: CS },
    E { tag: Single(IMAGE_TYPE), alias: "ImageType", vr: CS },
    E { tag: Single(INSTANCE_CREATION_DATE), alias: "InstanceCreationDate", vr: DA },
    E { tag: Single(INSTANCE_CREATION_TIME), alias: "InstanceCreationTime", vr: TM },
    E { tag: Single(SOP_CLASS_UID), alias: "SOPClassUID", vr: UI },
    E { tag: Single(SOP_INSTANCE_UID), alias: "SOPInstanceUID", vr: UI },
    E { tag: Single(STUDY_DATE), alias: "StudyDate", vr: DA },
    E { tag: Single(SERIES_DATE), alias: "SeriesDate", vr: DA },
    E { tag: Single(ACQUISITION_DATE), alias: "AcquisitionDate", vr: DA },
    E { tag: Single(CONTENT_DATE), alias: "ContentDate", vr: DA },
    E { tag: Single(ACQUISITION_DATE_TIME), alias: "AcquisitionDateTime", vr: DT },
    E { tag: Single(STUDY_TIME), alias: "StudyTime", vr: TM },
    E { tag: Single(SERIES_TIME), alias: "SeriesTime", vr: TM },
    E { tag: Single(CONTENT_TIME), alias: "ContentTime", vr: TM },
    E { tag: Single(ACCESSION_NUMBER), alias: "AccessionNumber", vr: SH },
    E { tag: Single(MODALITY), alias: "Modality", vr: CS },
    E { tag: Single(CONVERSION_TYPE), alias: "ConversionType", vr: CS },
    E { tag: Single(MANUFACTURER), alias: "Manufacturer", vr: LO },
    E { tag: Single(INSTITUTION_NAME), alias: "InstitutionName", vr: LO },
    E { tag: Single(INSTITUTION_ADDRESS), alias: "InstitutionAddress", vr: ST },
    E { tag: Single(REFERRING_PHYSICIAN_NAME), alias: "ReferringPhysicianName", vr: PN },
    E { tag: Single(CODE_VALUE), alias: "CodeValue", vr: SH },
    E { tag: Single(CODING_SCHEME_DESIGNATOR), alias: "CodingSchemeDesignator", vr: SH },
    E { tag: Single(CODE_MEANING), alias: "CodeMeaning", vr: LO },
    E { tag: Single(MAPPING_RESOURCE), alias: "MappingResource", vr: CS },
    E { tag: Single(LONG_CODE_VALUE), alias: "LongCodeValue", vr: UC },
    E { tag: Single(URN_CODE_VALUE), alias: "URNCodeValue", vr: UR },
    E { tag: Single(TIMEZONE_OFFSET_FROM_UTC), alias: "TimezoneOffsetFromUTC", vr: SH },
    E { tag: Single(STUDY_DESCRIPTION), alias: "StudyDescription", vr: LO },
    E { tag: Single(SERIES_DESCRIPTION), alias: "SeriesDescription", vr: LO },
    E { tag: Single(INSTITUTIONAL_DEPARTMENT_NAME), alias: "InstitutionalDepartmentName", vr: LO },
    E { tag: Single(OPERATORS_NAME), alias: "OperatorsName", vr: PN },
    E { tag: Single(MANUFACTURER_MODEL_NAME), alias: "ManufacturerModelName", vr: LO },
    E { tag: Single(REFERENCED_SERIES_SEQUENCE), alias: "ReferencedSeriesSequence", vr: SQ },
    E { tag: Single(REFERENCED_IMAGE_SEQUENCE), alias: "ReferencedImageSequence", vr: SQ },
    E { tag: Single(REFERENCED_SOP_CLASS_UID), alias: "ReferencedSOPClassUID", vr: UI },
    E { tag: Single(REFERENCED_SOP_INSTANCE_UID), alias: "ReferencedSOPInstanceUID", vr: UI },
    E { tag: Single(REFERENCED_FRAME_NUMBER), alias: "ReferencedFrameNumber", vr: IS },
    E { tag: Single(REFERENCED_SOP_SEQUENCE), alias: "ReferencedSOPSequence", vr: SQ },
    E { tag: Single(ANATOMIC_REGION_SEQUENCE), alias: "AnatomicRegionSequence", vr: SQ },
    E { tag: Single(VOLUMETRIC_PROPERTIES), alias: "VolumetricProperties", vr: CS },
    E { tag: Single(PATIENT_NAME), alias: "PatientName", vr: PN },
    E { tag: Single(PATIENT_ID), alias: "PatientID", vr: LO },
    E { tag: Single(PATIENT_BIRTH_DATE), alias: "PatientBirthDate", vr: DA },
    E { tag: Single(PATIENT_SEX), alias: "PatientSex", vr: CS },
    E { tag: Single(PATIENT_AGE), alias: "PatientAge", vr: AS },
    E { tag: Single(PATIENT_SIZE), alias: "PatientSize", vr: DS },
    E { tag: Single(PATIENT_WEIGHT), alias: "PatientWeight", vr: DS },
    E { tag: Single(PREGNANCY_STATUS), alias: "PregnancyStatus", vr: US },
    E { tag: Single(PATIENT_COMMENTS), alias: "PatientComments", vr: LT },
    E { tag: Single(BODY_PART_EXAMINED), alias: "BodyPartExamined", vr: CS },
    E { tag: Single(SLICE_THICKNESS), alias: "SliceThickness", vr: DS },
    E { tag: Single(KVP), alias: "KVP", vr: DS },
    E { tag: Single(SPACING_BETWEEN_SLICES), alias: "SpacingBetweenSlices", vr: DS },
    E { tag: Single(DEVICE_SERIAL_NUMBER), alias: "DeviceSerialNumber", vr: LO },
    E { tag: Single(SOFTWARE_VERSIONS), alias: "SoftwareVersions", vr: LO },
    E { tag: Single(PATIENT_POSITION), alias: "PatientPosition", vr: CS },
    E { tag: Single(SEQUENCE_OF_ULTRASOUND_REGIONS), alias: "SequenceOfUltrasoundRegions", vr: SQ },
    E { tag: Single(REGION_SPATIAL_FORMAT), alias: "RegionSpatialFormat", vr: US },
    E { tag: Single(REGION_DATA_TYPE), alias: "RegionDataType", vr: US },
    E { tag: Single(REFERENCE_PIXEL_X0), alias: "ReferencePixelX0", vr: SL },
    E { tag: Single(REFERENCE_PIXEL_Y0), alias: "ReferencePixelY0", vr: SL },
    E { tag: Single(FRAME_ACQUISITION_DATE_TIME), alias: "FrameAcquisitionDateTime", vr: DT },
    E { tag: Single(FRAME_REFERENCE_DATE_TIME), alias: "FrameReferenceDateTime", vr: DT },
    E { tag: Single(FRAME_ACQUISITION_DURATION), alias: "FrameAcquisitionDuration", vr: FD },
    E { tag: Single(STUDY_INSTANCE_UID), alias: "StudyInstanceUID", vr: UI },
    E { tag: Single(SERIES_INSTANCE_UID), alias: "SeriesInstanceUID", vr: UI },
    E { tag: Single(STUDY_ID), alias: "StudyID", vr: SH },
    E { tag: Single(SERIES_NUMBER), alias: "SeriesNumber", vr: IS },
    E { tag: Single(INSTANCE_NUMBER), alias: "InstanceNumber", vr: IS },
    E { tag: Single(PATIENT_ORIENTATION), alias: "PatientOrientation", vr: CS },
    E { tag: Single(IMAGE_POSITION_PATIENT), alias: "ImagePositionPatient", vr: DS },
    E { tag: Single(IMAGE_ORIENTATION_PATIENT), alias: "ImageOrientationPatient", vr: DS },
    E { tag: Single(FRAME_OF_REFERENCE_UID), alias: "FrameOfReferenceUID", vr: UI },
    E { tag: Single(LATERALITY), alias: "Laterality", vr: CS },
    E { tag: Single(SLICE_LOCATION), alias: "SliceLocation", vr: DS },
    E { tag: Single(IMAGE_COMMENTS), alias: "ImageComments", vr: LT },
    E { tag: Single(FRAME_CONTENT_SEQUENCE), alias: "FrameContentSequence", vr: SQ },
    E { tag: Single(DIMENSION_INDEX_VALUES), alias: "DimensionIndexValues", vr: UL },
    E { tag: Single(CONCATENATION_UID), alias: "ConcatenationUID", vr: UI },
    E { tag: Single(IN_CONCATENATION_NUMBER), alias: "InConcatenationNumber", vr: US },
    E { tag: Single(DIMENSION_INDEX_POINTER), alias: "DimensionIndexPointer", vr: AT },
    E { tag: Single(DIMENSION_ORGANIZATION_SEQUENCE), alias: "DimensionOrganizationSequence", vr: SQ },
    E { tag: Single(DIMENSION_INDEX_SEQUENCE), alias: "DimensionIndexSequence", vr: SQ },
    E { tag: Single(CONCATENATION_FRAME_OFFSET_NUMBER), alias: "ConcatenationFrameOffsetNumber", vr: UL },
    E { tag: Single(SAMPLES_PER_PIXEL), alias: "SamplesPerPixel", vr: US },
    E { tag: Single(PHOTOMETRIC_INTERPRETATION), alias: "PhotometricInterpretation", vr: CS },
    E { tag: Single(PLANAR_CONFIGURATION), alias: "PlanarConfiguration", vr: US },
    E { tag: Single(NUMBER_OF_FRAMES), alias: "NumberOfFrames", vr: IS },
    E { tag: Single(FRAME_INCREMENT_POINTER), alias: "FrameIncrementPointer", vr: AT },
    E { tag: Single(ROWS), alias: "Rows", vr: US },
    E { tag: Single(COLUMNS), alias: "Columns", vr: US },
    E { tag: Single(PIXEL_SPACING), alias: "PixelSpacing", vr: DS },
    E { tag: Single(BITS_ALLOCATED), alias: "BitsAllocated", vr: US },
    E { tag: Single(BITS_STORED), alias: "BitsStored", vr: US },
    E { tag: Single(HIGH_BIT), alias: "HighBit", vr: US },
    E { tag: Single(PIXEL_REPRESENTATION), alias: "PixelRepresentation", vr: US },
    E { tag: Single(BURNED_IN_ANNOTATION), alias: "BurnedInAnnotation", vr: CS },
    E { tag: Single(WINDOW_CENTER), alias: "WindowCenter", vr: DS },
    E { tag: Single(WINDOW_WIDTH), alias: "WindowWidth", vr: DS },
    E { tag: Single(RESCALE_INTERCEPT), alias: "RescaleIntercept", vr: DS },
    E { tag: Single(RESCALE_SLOPE), alias: "RescaleSlope", vr: DS },
    E { tag: Single(ICC_PROFILE), alias: "ICCProfile", vr: OB },
    E { tag: Single(LOSSY_IMAGE_COMPRESSION), alias: "LossyImageCompression", vr: CS },
    E { tag: Single(PIXEL_DATA_PROVIDER_URL), alias: "PixelDataProviderURL", vr: UR },
    E { tag: Single(PIXEL_MEASURES_SEQUENCE), alias: "PixelMeasuresSequence", vr: SQ },
    E { tag: Single(REQUESTED_PROCEDURE_DESCRIPTION), alias: "RequestedProcedureDescription", vr: LO },
    E { tag: Single(PERFORMED_PROCEDURE_STEP_START_DATE), alias: "PerformedProcedureStepStartDate", vr: DA },
    E { tag: Single(PERFORMED_PROCEDURE_STEP_DESCRIPTION), alias: "PerformedProcedureStepDescription", vr: LO },
    E { tag: Single(CONTENT_ITEM_MODIFIER_SEQUENCE), alias: "ContentItemModifierSequence", vr: SQ },
    E { tag: Single(CONTAINER_IDENTIFIER), alias: "ContainerIdentifier", vr: LO },
    E { tag: Single(SPECIMEN_IDENTIFIER), alias: "SpecimenIdentifier", vr: LO },
    E { tag: Single(SPECIMEN_UID), alias: "SpecimenUID", vr: UI },
    E { tag: Single(ACQUISITION_CONTEXT_SEQUENCE), alias: "AcquisitionContextSequence", vr: SQ },
    E { tag: Single(SPECIMEN_DESCRIPTION_SEQUENCE), alias: "SpecimenDescriptionSequence", vr: SQ },
    E { tag: Single(X_OFFSET_IN_SLIDE_COORDINATE_SYSTEM), alias: "XOffsetInSlideCoordinateSystem", vr: DS },
    E { tag: Single(Y_OFFSET_IN_SLIDE_COORDINATE_SYSTEM), alias: "YOffsetInSlideCoordinateSystem", vr: DS },
    E { tag: Single(Z_OFFSET_IN_SLIDE_COORDINATE_SYSTEM), alias: "ZOffsetInSlideCoordinateSystem", vr: DS },
    E { tag: Single(REAL_WORLD_VALUE_MAPPING_SEQUENCE), alias: "RealWorldValueMappingSequence", vr: SQ },
    E { tag: Single(REAL_WORLD_VALUE_INTERCEPT), alias: "RealWorldValueIntercept", vr: FD },
    E { tag: Single(REAL_WORLD_VALUE_SLOPE), alias: "RealWorldValueSlope", vr: FD },
    E { tag: Single(RELATIONSHIP_TYPE), alias: "RelationshipType", vr: CS },
    E { tag: Single(VALUE_TYPE), alias: "ValueType", vr: CS },
    E { tag: Single(CONCEPT_NAME_CODE_SEQUENCE), alias: "ConceptNameCodeSequence", vr: SQ },
    E { tag: Single(UID), alias: "UID", vr: UI },
    E { tag: Single(TEXT_VALUE), alias: "TextValue", vr: UT },
    E { tag: Single(CONCEPT_CODE_SEQUENCE), alias: "ConceptCodeSequence", vr: SQ },
    E { tag: Single(PURPOSE_OF_REFERENCE_CODE_SEQUENCE), alias: "PurposeOfReferenceCodeSequence", vr: SQ },
    E { tag: Single(CONTENT_SEQUENCE), alias: "ContentSequence", vr: SQ },
    E { tag: Single(IMAGED_VOLUME_WIDTH), alias: "ImagedVolumeWidth", vr: FL },
    E { tag: Single(IMAGED_VOLUME_HEIGHT), alias: "ImagedVolumeHeight", vr: FL },
    E { tag: Single(IMAGED_VOLUME_DEPTH), alias: "ImagedVolumeDepth", vr: FL },
    E { tag: Single(TOTAL_PIXEL_MATRIX_COLUMNS), alias: "TotalPixelMatrixColumns", vr: UL },
    E { tag: Single(TOTAL_PIXEL_MATRIX_ROWS), alias: "TotalPixelMatrixRows", vr: UL },
    E { tag: Single(TOTAL_PIXEL_MATRIX_ORIGIN_SEQUENCE), alias: "TotalPixelMatrixOriginSequence", vr: SQ },
    E { tag: Single(SPECIMEN_LABEL_IN_IMAGE), alias: "SpecimenLabelInImage", vr: CS },
    E { tag: Single(IMAGE_ORIENTATION_SLIDE), alias: "ImageOrientationSlide", vr: DS },
    E { tag: Single(OPTICAL_PATH_SEQUENCE), alias: "OpticalPathSequence", vr: SQ },
    E { tag: Single(OPTICAL_PATH_IDENTIFIER), alias: "OpticalPathIdentifier", vr: SH },
    E { tag: Single(PLANE_POSITION_SLIDE_SEQUENCE), alias: "PlanePositionSlideSequence", vr: SQ },
    E { tag: Single(COLUMN_POSITION_IN_TOTAL_IMAGE_PIXEL_MATRIX), alias: "ColumnPositionInTotalImagePixelMatrix", vr: SL },
    E { tag: Single(ROW_POSITION_IN_TOTAL_IMAGE_PIXEL_MATRIX), alias: "RowPositionInTotalImagePixelMatrix", vr: SL },
    E { tag: Single(NUMBER_OF_SLICES), alias: "NumberOfSlices", vr: US },
    E { tag: Single(SELECTOR_FD_VALUE), alias: "SelectorFDValue", vr: FD },
    E { tag: Single(SELECTOR_FL_VALUE), alias: "SelectorFLValue", vr: FL },
    E { tag: Single(SELECTOR_UL_VALUE), alias: "SelectorULValue", vr: UL },
    E { tag: Single(SELECTOR_US_VALUE), alias: "SelectorUSValue", vr: US },
    E { tag: Single(SELECTOR_SL_VALUE), alias: "SelectorSLValue", vr: SL },
    E { tag: Single(SELECTOR_SS_VALUE), alias: "SelectorSSValue", vr: SS },
    E { tag: Single(SELECTOR_OV_VALUE), alias: "SelectorOVValue", vr: OV },
    E { tag: Single(SELECTOR_SV_VALUE), alias: "SelectorSVValue", vr: SV },
    E { tag: Single(SELECTOR_UV_VALUE), alias: "SelectorUVValue", vr: UV },
    E { tag: Single(SHARED_FUNCTIONAL_GROUPS_SEQUENCE), alias: "SharedFunctionalGroupsSequence", vr: SQ },
    E { tag: Single(PER_FRAME_FUNCTIONAL_GROUPS_SEQUENCE), alias: "PerFrameFunctionalGroupsSequence", vr: SQ },
    E { tag: Group100(OVERLAY_ROWS), alias: "OverlayRows", vr: US },
    E { tag: Group100(OVERLAY_COLUMNS), alias: "OverlayColumns", vr: US },
    E { tag: Group100(OVERLAY_DATA), alias: "OverlayData", vr: OW },
    E { tag: Single(EXTENDED_OFFSET_TABLE), alias: "ExtendedOffsetTable", vr: OV },
    E { tag: Single(EXTENDED_OFFSET_TABLE_LENGTHS), alias: "ExtendedOffsetTableLengths", vr: OV },
    E { tag: Single(FLOAT_PIXEL_DATA), alias: "FloatPixelData", vr: OF },
    E { tag: Single(DOUBLE_FLOAT_PIXEL_DATA), alias: "DoubleFloatPixelData", vr: OD },
    E { tag: Single(PIXEL_DATA), alias: "PixelData", vr: OW },
];
