//! Data sets: collections of data elements indexed by tag.
//!
//! A data set owns its elements and keeps at most one element per tag.
//! Once [locked](Dataset::lock),
//! which happens whenever it becomes an item of a [`Sequence`],
//! no element can be inserted or removed anymore.
//!
//! [`Sequence`]: crate::Sequence

use crate::dump::DumpOptions;
use crate::element::Element;
use crate::error::{DuplicateTagSnafu, LockedSnafu, NotFoundSnafu, OutOfMemorySnafu, Result};
use dcmdata_core::Tag;
use snafu::{ensure, OptionExt};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tracing::debug;

/// An unordered collection of data elements with unique tags.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    elements: HashMap<Tag, Element>,
    locked: bool,
}

impl Dataset {
    /// Create a new empty, unlocked data set.
    pub fn new() -> Self {
        Dataset::default()
    }

    /// Insert a data element, taking ownership of it.
    ///
    /// Fails if the data set is locked
    /// or if it already has an element with the same tag.
    /// In both cases the given element is dropped.
    pub fn insert(&mut self, element: Element) -> Result<()> {
        ensure!(!self.locked, LockedSnafu { what: "data set" });
        let tag = element.tag();
        self.elements
            .try_reserve(1)
            .map_err(|_| OutOfMemorySnafu { what: "data set" }.build())?;
        match self.elements.entry(tag) {
            Entry::Occupied(_) => DuplicateTagSnafu { tag }.fail(),
            Entry::Vacant(entry) => {
                entry.insert(element);
                debug!("Inserted data element {} into data set", tag);
                Ok(())
            }
        }
    }

    /// Remove and drop the data element with the given tag.
    pub fn remove(&mut self, tag: Tag) -> Result<()> {
        ensure!(!self.locked, LockedSnafu { what: "data set" });
        self.elements.remove(&tag).context(NotFoundSnafu { tag })?;
        debug!("Removed data element {} from data set", tag);
        Ok(())
    }

    /// Borrow the data element with the given tag.
    pub fn get(&self, tag: Tag) -> Result<&Element> {
        let element = self.elements.get(&tag).context(NotFoundSnafu { tag })?;
        debug!("Fetched data element {}", tag);
        Ok(element)
    }

    /// Obtain an independent deep copy
    /// of the data element with the given tag.
    pub fn get_clone(&self, tag: Tag) -> Result<Element> {
        self.get(tag)?.try_clone()
    }

    /// Look up the data element with the given tag, if present.
    pub fn contains(&self, tag: Tag) -> Option<&Element> {
        self.elements.get(&tag)
    }

    /// The number of data elements.
    pub fn count(&self) -> usize {
        self.elements.len()
    }

    /// Whether the data set has no data elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterate over the tags of all data elements
    /// in ascending order.
    ///
    /// The tags are collected and sorted on each call,
    /// so calling this again starts over from the lowest tag.
    pub fn tags(&self) -> impl Iterator<Item = Tag> {
        let mut tags: Vec<Tag> = self.elements.keys().copied().collect();
        tags.sort_unstable();
        tags.into_iter()
    }

    /// Iterate over the data elements in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Element> + '_ {
        self.elements.values()
    }

    /// Call `f` on every data element in no particular order.
    pub fn for_each<F>(&self, f: F)
    where
        F: FnMut(&Element),
    {
        self.elements.values().for_each(f)
    }

    /// Lock the data set against insertions and removals.
    /// This cannot be undone.
    pub fn lock(&mut self) {
        self.locked = true;
    }

    /// Whether the data set is locked.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Deep copy this data set.
    ///
    /// The copy is never locked,
    /// even if this data set is.
    pub fn try_clone(&self) -> Result<Dataset> {
        let mut elements = HashMap::new();
        elements
            .try_reserve(self.elements.len())
            .map_err(|_| OutOfMemorySnafu { what: "data set" }.build())?;
        for (tag, element) in &self.elements {
            elements.insert(*tag, element.try_clone()?);
        }
        debug!("Cloned data set with {} elements", elements.len());
        Ok(Dataset {
            elements,
            locked: false,
        })
    }

    /// Print the data set to standard output,
    /// one data element per line in ascending tag order.
    pub fn print(&self) -> std::io::Result<()> {
        DumpOptions::new().dump_dataset(self)
    }

    /// Sum of the lengths of all data elements.
    pub(crate) fn content_length(&self) -> u32 {
        self.elements
            .values()
            .map(Element::length)
            .fold(0, u32::saturating_add)
    }
}

/// Lock state does not take part in equality.
impl PartialEq for Dataset {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Element;
    type IntoIter = std::collections::hash_map::Values<'a, Tag, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use dcmdata_dictionary_std::tags;

    fn string_element(tag: Tag, text: &'static str) -> Element {
        let mut e = Element::new(tag, 0).unwrap();
        e.set_value_string(text).unwrap();
        e
    }

    #[test]
    fn insert_and_get() {
        let mut ds = Dataset::new();
        assert!(ds.is_empty());
        ds.insert(string_element(tags::PATIENT_NAME, "Doe^John"))
            .unwrap();
        ds.insert(string_element(tags::MODALITY, "CT")).unwrap();
        assert_eq!(ds.count(), 2);

        let e = ds.get(tags::MODALITY).unwrap();
        assert_eq!(e.value_string(0).unwrap(), "CT");
        assert!(ds.contains(tags::PATIENT_NAME).is_some());
        assert!(ds.contains(tags::PATIENT_ID).is_none());
        assert!(matches!(
            ds.get(tags::PATIENT_ID),
            Err(Error::NotFound { .. })
        ));
    }

    #[test]
    fn duplicate_tag() {
        let mut ds = Dataset::new();
        ds.insert(string_element(tags::MODALITY, "CT")).unwrap();
        assert!(matches!(
            ds.insert(string_element(tags::MODALITY, "MR")),
            Err(Error::DuplicateTag { .. })
        ));
        assert_eq!(ds.count(), 1);
        assert_eq!(
            ds.get(tags::MODALITY).unwrap().value_string(0).unwrap(),
            "CT"
        );
    }

    #[test]
    fn remove() {
        let mut ds = Dataset::new();
        ds.insert(string_element(tags::MODALITY, "CT")).unwrap();
        ds.remove(tags::MODALITY).unwrap();
        assert!(ds.is_empty());
        assert!(matches!(
            ds.remove(tags::MODALITY),
            Err(Error::NotFound { .. })
        ));
    }

    #[test]
    fn locked_data_set() {
        let mut ds = Dataset::new();
        ds.insert(string_element(tags::MODALITY, "CT")).unwrap();
        ds.lock();
        assert!(ds.is_locked());
        assert!(matches!(
            ds.insert(string_element(tags::PATIENT_ID, "1")),
            Err(Error::Locked { .. })
        ));
        assert!(matches!(
            ds.remove(tags::MODALITY),
            Err(Error::Locked { .. })
        ));
        ds.lock();
        assert!(ds.is_locked());
        assert_eq!(ds.count(), 1);
    }

    #[test]
    fn tags_are_sorted() {
        let mut ds = Dataset::new();
        ds.insert(string_element(tags::PATIENT_NAME, "Doe^John"))
            .unwrap();
        ds.insert(string_element(tags::SOP_INSTANCE_UID, "1.2.3"))
            .unwrap();
        ds.insert(string_element(tags::MODALITY, "CT")).unwrap();

        let expected = vec![tags::SOP_INSTANCE_UID, tags::MODALITY, tags::PATIENT_NAME];
        assert_eq!(ds.tags().collect::<Vec<_>>(), expected);
        // restartable
        assert_eq!(ds.tags().collect::<Vec<_>>(), expected);
        assert_eq!(ds.iter().count(), 3);
        assert_eq!((&ds).into_iter().count(), 3);

        let mut seen = 0;
        ds.for_each(|_| seen += 1);
        assert_eq!(seen, 3);
    }

    #[test]
    fn clone_is_deep_and_unlocked() {
        let mut ds = Dataset::new();
        ds.insert(string_element(tags::MODALITY, "CT")).unwrap();
        ds.lock();

        let mut copy = ds.try_clone().unwrap();
        assert!(!copy.is_locked());
        assert_eq!(copy, ds);
        copy.insert(string_element(tags::PATIENT_ID, "1")).unwrap();
        assert_eq!(copy.count(), 2);
        assert_eq!(ds.count(), 1);

        let e = ds.get_clone(tags::MODALITY).unwrap();
        assert_eq!(&e, ds.get(tags::MODALITY).unwrap());
        assert!(matches!(
            ds.get_clone(tags::ROWS),
            Err(Error::NotFound { .. })
        ));
    }
}
