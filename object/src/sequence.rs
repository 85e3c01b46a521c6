//! Sequences of data set items.

use crate::dataset::Dataset;
use crate::error::{IndexOutOfRangeSnafu, LockedSnafu, OutOfMemorySnafu, Result};
use snafu::{ensure, OptionExt};
use tracing::debug;

/// An ordered list of data set items.
///
/// Every item is locked as soon as it is appended,
/// so the data sets reachable through a sequence
/// can be read but never changed in their composition.
/// The sequence itself is locked
/// once it becomes the value of a data element.
#[derive(Debug, Clone, Default)]
pub struct Sequence {
    items: Vec<Dataset>,
    locked: bool,
}

impl Sequence {
    /// Create a new empty, unlocked sequence.
    pub fn new() -> Self {
        Sequence::default()
    }

    /// Append a data set item, taking ownership of it and locking it.
    ///
    /// If the sequence is locked, the item is dropped.
    pub fn append(&mut self, mut item: Dataset) -> Result<()> {
        ensure!(!self.locked, LockedSnafu { what: "sequence" });
        self.items
            .try_reserve(1)
            .map_err(|_| OutOfMemorySnafu { what: "sequence item" }.build())?;
        item.lock();
        self.items.push(item);
        debug!("Appended item #{} to sequence", self.items.len());
        Ok(())
    }

    /// Borrow the item at the given position.
    pub fn get(&self, index: usize) -> Result<&Dataset> {
        let item = self.items.get(index).context(IndexOutOfRangeSnafu {
            index,
            len: self.items.len(),
        })?;
        debug!("Fetched sequence item #{}", index + 1);
        Ok(item)
    }

    /// Mutably borrow the item at the given position.
    ///
    /// The item is locked again before it is handed out.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut Dataset> {
        let len = self.items.len();
        let item = self
            .items
            .get_mut(index)
            .context(IndexOutOfRangeSnafu { index, len })?;
        item.lock();
        Ok(item)
    }

    /// Remove and drop the item at the given position.
    /// Later items are shifted down by one.
    pub fn remove(&mut self, index: usize) -> Result<()> {
        ensure!(!self.locked, LockedSnafu { what: "sequence" });
        ensure!(
            index < self.items.len(),
            IndexOutOfRangeSnafu {
                index,
                len: self.items.len(),
            }
        );
        self.items.remove(index);
        debug!("Removed sequence item #{}", index + 1);
        Ok(())
    }

    /// The number of items.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Whether the sequence has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the items in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Dataset> {
        self.items.iter()
    }

    /// Lock the sequence against appending and removing items.
    /// This cannot be undone.
    pub fn lock(&mut self) {
        self.locked = true;
    }

    /// Whether the sequence is locked.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Deep copy this sequence and all of its items.
    ///
    /// The copy is not locked, but its items are.
    pub fn try_clone(&self) -> Result<Sequence> {
        let mut out = Sequence::new();
        out.items
            .try_reserve_exact(self.items.len())
            .map_err(|_| OutOfMemorySnafu { what: "sequence" }.build())?;
        for item in &self.items {
            out.append(item.try_clone()?)?;
        }
        Ok(out)
    }

    /// Sum of the lengths of all elements of all items.
    pub(crate) fn content_length(&self) -> u32 {
        self.items
            .iter()
            .map(Dataset::content_length)
            .fold(0, u32::saturating_add)
    }
}

/// Lock state does not take part in equality.
impl PartialEq for Sequence {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Dataset;
    type IntoIter = std::slice::Iter<'a, Dataset>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Element;
    use crate::error::Error;
    use dcmdata_dictionary_std::tags;

    fn item(uid: &'static str) -> Dataset {
        let mut ds = Dataset::new();
        let mut e = Element::new(tags::REFERENCED_SOP_INSTANCE_UID, 0).unwrap();
        e.set_value_string(uid).unwrap();
        ds.insert(e).unwrap();
        ds
    }

    fn uid_of(ds: &Dataset) -> &str {
        ds.get(tags::REFERENCED_SOP_INSTANCE_UID)
            .unwrap()
            .value_string(0)
            .unwrap()
    }

    #[test]
    fn append_locks_items() {
        let mut seq = Sequence::new();
        seq.append(item("1.2.3")).unwrap();
        seq.append(item("1.2.4")).unwrap();
        assert_eq!(seq.count(), 2);
        assert!(seq.iter().all(Dataset::is_locked));

        assert_eq!(uid_of(seq.get(0).unwrap()), "1.2.3");
        assert_eq!(uid_of(seq.get(1).unwrap()), "1.2.4");
        assert!(matches!(
            seq.get(2),
            Err(Error::IndexOutOfRange { index: 2, len: 2, .. })
        ));

        let first = seq.get_mut(0).unwrap();
        assert!(first.is_locked());
        assert!(matches!(
            first.remove(tags::REFERENCED_SOP_INSTANCE_UID),
            Err(Error::Locked { .. })
        ));
    }

    #[test]
    fn remove_shifts_items() {
        let mut seq = Sequence::new();
        seq.append(item("1.1")).unwrap();
        seq.append(item("1.2")).unwrap();
        seq.append(item("1.3")).unwrap();
        seq.remove(0).unwrap();
        assert_eq!(seq.count(), 2);
        assert_eq!(uid_of(seq.get(0).unwrap()), "1.2");
        assert!(matches!(
            seq.remove(2),
            Err(Error::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn locked_sequence() {
        let mut seq = Sequence::new();
        seq.append(item("1.1")).unwrap();
        seq.lock();
        assert!(seq.is_locked());
        assert!(matches!(seq.append(item("1.2")), Err(Error::Locked { .. })));
        assert!(matches!(seq.remove(0), Err(Error::Locked { .. })));
        assert_eq!(seq.count(), 1);
        // reading is still fine
        assert_eq!(uid_of(seq.get(0).unwrap()), "1.1");
    }

    #[test]
    fn clone_is_deep() {
        let mut seq = Sequence::new();
        seq.append(item("1.1")).unwrap();
        seq.append(item("1.2")).unwrap();
        seq.lock();

        let copy = seq.try_clone().unwrap();
        assert!(!copy.is_locked());
        assert_eq!(copy, seq);
        assert!(copy.iter().all(Dataset::is_locked));
        assert!(!std::ptr::eq(copy.get(0).unwrap(), seq.get(0).unwrap()));
    }

    #[test]
    fn content_length_sums_all_items() {
        let mut seq = Sequence::new();
        assert_eq!(seq.content_length(), 0);
        // "1.1" is padded to 4
        seq.append(item("1.1")).unwrap();
        seq.append(item("1.22")).unwrap();
        assert_eq!(seq.content_length(), 8);
    }
}
