use dcmdata_core::{Tag, VrClass, VR};
use dcmdata_dictionary_std::tags;
use dcmdata_object::{dump::dump_dataset_to, Dataset, Element, Error, NumericValue, Sequence};
use rstest::rstest;

fn element(tag: Tag) -> Element {
    Element::new(tag, 0).unwrap()
}

fn item_with_modality(modality: &'static str) -> Dataset {
    let mut ds = Dataset::new();
    let mut e = element(tags::MODALITY);
    e.set_value_string(modality).unwrap();
    ds.insert(e).unwrap();
    ds
}

#[test]
fn patient_name_from_u32_tag() {
    let mut e = element(Tag::from(0x0010_0010));
    assert_eq!(e.vr(), VR::PN);
    e.set_value_string("Doe^John").unwrap();
    assert!(e.is_assigned());
    assert_eq!(e.length(), 8);
    assert_eq!(e.multiplicity(), 1);
    assert_eq!(e.value_string(0).unwrap(), "Doe^John");
}

#[test]
fn unsigned_short_array() {
    let mut e = element(tags::SELECTOR_US_VALUE);
    e.set_value_numeric_multi(vec![1_u16, 2, 65535]).unwrap();
    assert_eq!(e.multiplicity(), 3);
    assert_eq!(e.length(), 6);
    assert_eq!(e.value_integer(2).unwrap(), 65535);
    assert!(matches!(
        e.value_integer(3),
        Err(Error::IndexOutOfRange { .. })
    ));
}

#[test]
fn sequence_of_two_items() {
    let mut seq = Sequence::new();
    seq.append(item_with_modality("CT")).unwrap();
    seq.append(item_with_modality("MR")).unwrap();
    assert_eq!(seq.count(), 2);

    for i in 0..2 {
        let mut other = element(tags::PATIENT_ID);
        other.set_value_string("X").unwrap();
        let item = seq.get_mut(i).unwrap();
        assert!(item.is_locked());
        assert!(matches!(item.insert(other), Err(Error::Locked { .. })));
    }

    let modality = |i| {
        seq.get(i)
            .unwrap()
            .get(tags::MODALITY)
            .unwrap()
            .value_string(0)
            .unwrap()
            .to_string()
    };
    assert_eq!(modality(0), "CT");
    assert_eq!(modality(1), "MR");
    assert!(matches!(seq.get(2), Err(Error::IndexOutOfRange { .. })));
}

#[test]
fn seven_bytes_are_padded() {
    let mut e = element(tags::PIXEL_DATA);
    e.set_value_binary(vec![1_u8, 2, 3, 4, 5, 6, 7]).unwrap();
    assert_eq!(e.length(), 8);
    assert_eq!(e.value_binary().unwrap(), &[1, 2, 3, 4, 5, 6, 7]);
}

/// Assign a value through the setter of the element's category.
fn assign_sample(e: &mut Element) {
    match e.vr() {
        VR::FL | VR::FD => e.set_value_double(0.5).unwrap(),
        _ => match e.vr_class() {
            VrClass::Numeric => e.set_value_integer(7).unwrap(),
            VrClass::StringMulti | VrClass::StringSingle => e.set_value_string("TEXT").unwrap(),
            VrClass::Binary => e.set_value_binary(vec![0xAB_u8; 4]).unwrap(),
            VrClass::Sequence => {
                let mut seq = Sequence::new();
                seq.append(item_with_modality("OT")).unwrap();
                e.set_value_sequence(seq).unwrap()
            }
        },
    }
}

#[rstest]
#[case(tags::SELECTOR_SS_VALUE)]
#[case(tags::SELECTOR_SL_VALUE)]
#[case(tags::SELECTOR_SV_VALUE)]
#[case(tags::SELECTOR_US_VALUE)]
#[case(tags::SELECTOR_UL_VALUE)]
#[case(tags::SELECTOR_UV_VALUE)]
#[case(tags::DIMENSION_INDEX_POINTER)]
#[case(tags::SELECTOR_FL_VALUE)]
#[case(tags::SELECTOR_FD_VALUE)]
#[case(tags::MODALITY)]
#[case(tags::PATIENT_COMMENTS)]
#[case(tags::TEXT_VALUE)]
#[case(tags::URN_CODE_VALUE)]
#[case(tags::LONG_CODE_VALUE)]
#[case(tags::FILE_META_INFORMATION_VERSION)]
#[case(tags::FLOAT_PIXEL_DATA)]
#[case(tags::DOUBLE_FLOAT_PIXEL_DATA)]
#[case(tags::EXTENDED_OFFSET_TABLE)]
#[case(tags::CONTENT_SEQUENCE)]
fn matching_accessor_only(#[case] tag: Tag) {
    let mut e = element(tag);
    assign_sample(&mut e);
    let vr = e.vr();

    let integer = e.value_integer(0);
    let double = e.value_double(0);
    let string = e.value_string(0);
    let binary = e.value_binary();
    let sequence = e.value_sequence();

    let is_integer = vr.class() == VrClass::Numeric && !matches!(vr, VR::FL | VR::FD);
    let is_float = matches!(vr, VR::FL | VR::FD);
    let is_string = matches!(vr.class(), VrClass::StringMulti | VrClass::StringSingle);

    assert_eq!(integer.is_ok(), is_integer, "{} integer", vr);
    assert_eq!(double.is_ok(), is_float, "{} double", vr);
    assert_eq!(string.is_ok(), is_string, "{} string", vr);
    assert_eq!(binary.is_ok(), vr.class() == VrClass::Binary, "{} binary", vr);
    assert_eq!(sequence.is_ok(), vr == VR::SQ, "{} sequence", vr);

    for err in [
        integer.err(),
        double.err(),
        string.map(drop).err(),
        binary.map(drop).err(),
        sequence.map(drop).err(),
    ]
    .into_iter()
    .flatten()
    {
        assert!(matches!(err, Error::TypeMismatch { .. }), "{}: {}", vr, err);
    }

    if is_integer {
        assert_eq!(e.value_integer(0).unwrap(), 7);
    }
    if is_float {
        assert_eq!(e.value_double(0).unwrap(), 0.5);
    }
    if is_string {
        assert_eq!(e.value_string(0).unwrap(), "TEXT");
    }
    if vr.class() == VrClass::Binary {
        assert_eq!(e.value_binary().unwrap(), &[0xAB; 4]);
    }
}

#[rstest]
#[case(tags::MODALITY, 16)]
#[case(tags::PATIENT_NAME, 64)]
#[case(tags::STUDY_DATE, 8)]
#[case(tags::SOP_INSTANCE_UID, 64)]
#[case(tags::INSTITUTION_ADDRESS, 1024)]
#[case(tags::PATIENT_COMMENTS, 10240)]
fn capacity_is_enforced(#[case] tag: Tag, #[case] capacity: usize) {
    let mut fits = element(tag);
    fits.set_value_string("1".repeat(capacity)).unwrap();
    assert_eq!(fits.length() as usize, capacity);

    let mut too_long = element(tag);
    assert!(matches!(
        too_long.set_value_string("1".repeat(capacity + 1)),
        Err(Error::CapacityExceeded { .. })
    ));
    assert!(!too_long.is_assigned());
    assert_eq!(too_long.multiplicity(), 0);
}

#[test]
fn second_assignment_is_rejected() {
    let mut e = element(tags::ROWS);
    e.set_value_integer(256).unwrap();
    assert!(matches!(
        e.set_value_integer(512),
        Err(Error::AlreadyAssigned { .. })
    ));
    assert!(matches!(
        e.set_value_numeric_multi(vec![1_u16]),
        Err(Error::AlreadyAssigned { .. })
    ));
    assert_eq!(e.value_integer(0).unwrap(), 256);
}

#[test]
fn clone_keeps_header_and_values() {
    let mut e = element(tags::PIXEL_SPACING);
    e.set_value_string(String::from("0.5\\0.25")).unwrap();
    let copy = e.try_clone().unwrap();
    assert_eq!(copy.tag(), e.tag());
    assert_eq!(copy.vr(), e.vr());
    assert_eq!(copy.multiplicity(), 2);
    assert_eq!(copy.length(), e.length());
    assert_eq!(copy.value_strings().unwrap(), e.value_strings().unwrap());
    drop(e);
    assert_eq!(copy.value_string(1).unwrap(), "0.25");

    let mut e = element(tags::SELECTOR_FD_VALUE);
    e.set_value_numeric_multi([1.0_f64, 2.0, 3.0]).unwrap();
    let copy = e.try_clone().unwrap();
    assert_eq!(copy.value_numeric().unwrap(), &NumericValue::from([1.0_f64, 2.0, 3.0]));
}

#[test]
fn nested_sequence_clone_is_independent() {
    let mut inner_seq = Sequence::new();
    inner_seq.append(item_with_modality("SR")).unwrap();
    let mut inner = element(tags::CONCEPT_CODE_SEQUENCE);
    inner.set_value_sequence(inner_seq).unwrap();

    let mut item = item_with_modality("CT");
    item.insert(inner).unwrap();
    let mut outer_seq = Sequence::new();
    outer_seq.append(item).unwrap();

    let mut outer = element(tags::CONTENT_SEQUENCE);
    outer.set_value_sequence(outer_seq).unwrap();
    // "CT" (2) + "SR" (2), the inner sequence counts its own contents
    assert_eq!(outer.length(), 4);

    let copy = outer.try_clone().unwrap();
    assert_eq!(copy, outer);
    assert!(copy.value_sequence().unwrap().is_locked());
    let copied_item = copy.value_sequence().unwrap().get(0).unwrap();
    let original_item = outer.value_sequence().unwrap().get(0).unwrap();
    assert!(!std::ptr::eq(copied_item, original_item));
    assert!(copied_item.is_locked());
}

#[test]
fn duplicate_insert_keeps_count() {
    let mut ds = Dataset::new();
    ds.insert(item_with_modality("CT").get_clone(tags::MODALITY).unwrap())
        .unwrap();
    let mut dup = element(tags::MODALITY);
    dup.set_value_string("MR").unwrap();
    assert!(matches!(ds.insert(dup), Err(Error::DuplicateTag { .. })));
    assert_eq!(ds.count(), 1);
}

#[test]
fn lock_is_permanent() {
    let mut ds = item_with_modality("CT");
    ds.lock();
    for _ in 0..3 {
        assert!(matches!(
            ds.remove(tags::MODALITY),
            Err(Error::Locked { .. })
        ));
        assert!(matches!(
            ds.insert(element(tags::PATIENT_ID)),
            Err(Error::Locked { .. })
        ));
        assert!(ds.is_locked());
    }
}

#[test]
fn listing_of_a_whole_data_set() {
    let mut ds = Dataset::new();

    let mut e = element(tags::PATIENT_NAME);
    e.set_value_string("Doe^John").unwrap();
    ds.insert(e).unwrap();

    let mut e = element(tags::ROWS);
    e.set_value_integer(512).unwrap();
    ds.insert(e).unwrap();

    let mut e = element(Tag(0x0009, 0x0010));
    e.set_value_string("ACME 1.0").unwrap();
    ds.insert(e).unwrap();

    let mut seq = Sequence::new();
    seq.append(item_with_modality("CT")).unwrap();
    seq.append(item_with_modality("MR")).unwrap();
    let mut e = element(tags::REFERENCED_IMAGE_SEQUENCE);
    e.set_value_sequence(seq).unwrap();
    ds.insert(e).unwrap();

    let mut out = Vec::new();
    dump_dataset_to(&mut out, &ds).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(
        text,
        "(0008,1140) ReferencedImageSequence | SQ | [\n\
         \x20\x20---Item #1---\n\
         \x20\x20(0008,0060) Modality | CS | 2 | CT\n\
         \x20\x20---Item #2---\n\
         \x20\x20(0008,0060) Modality | CS | 2 | MR\n\
         ]\n\
         \x20(0009,0010) | LO | 8 | ACME 1.0\n\
         (0010,0010) PatientName | PN | 8 | Doe^John\n\
         (0028,0010) Rows | US | 2 | 512\n"
    );
}
