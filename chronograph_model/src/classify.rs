// Copyright 2025 the Chronograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capabilities consumed from the data source: classification and item access.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::marker::PhantomData;

/// One level of the hierarchy: maps a raw item to the id of its bucket.
///
/// `classify` folds three steps together: adapting the raw item to the type
/// this level understands, extracting its grouping key, and deriving the id
/// string. Returning `None` means the item does not adapt to this level; the
/// restructure pass then silently leaves it out of that level.
///
/// Closures `Fn(&D) -> Option<String>` implement this trait directly. Use
/// [`KeyedClassifier`] to keep key extraction and id derivation separate.
pub trait Classifier<D> {
    /// Bucket id for `item`, or `None` if the item does not adapt.
    fn classify(&self, item: &D) -> Option<String>;
}

impl<D, F> Classifier<D> for F
where
    F: Fn(&D) -> Option<String>,
{
    fn classify(&self, item: &D) -> Option<String> {
        self(item)
    }
}

/// A [`Classifier`] built from a key extractor and an id function.
///
/// ```rust
/// use chronograph_model::{Classifier, KeyedClassifier};
///
/// struct Task { owner: Option<u32> }
///
/// let by_owner = KeyedClassifier::new(
///     |t: &Task| t.owner,
///     |owner: &u32| format!("owner-{owner}"),
/// );
/// assert_eq!(by_owner.classify(&Task { owner: Some(7) }).as_deref(), Some("owner-7"));
/// assert_eq!(by_owner.classify(&Task { owner: None }), None);
/// ```
pub struct KeyedClassifier<K, C, I> {
    classify: C,
    identify: I,
    _key: PhantomData<fn() -> K>,
}

impl<K, C, I> KeyedClassifier<K, C, I> {
    /// Combines `classify` (item to optional key) with `identify` (key to id).
    pub fn new(classify: C, identify: I) -> Self {
        Self {
            classify,
            identify,
            _key: PhantomData,
        }
    }
}

impl<D, K, C, I> Classifier<D> for KeyedClassifier<K, C, I>
where
    C: Fn(&D) -> Option<K>,
    I: Fn(&K) -> String,
{
    fn classify(&self, item: &D) -> Option<String> {
        (self.classify)(item).map(|key| (self.identify)(&key))
    }
}

impl<K, C, I> fmt::Debug for KeyedClassifier<K, C, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyedClassifier").finish_non_exhaustive()
    }
}

/// Read access to the raw items a stage visualizes.
///
/// Brick identity and bounds are read through this trait rather than through
/// the classifiers, so the section/group/subgroup levels may look at
/// different facets of the same item.
pub trait DataAccess<D> {
    /// Materializes every item accepted by `filter`. No pagination.
    fn fetch_all(&self, filter: &dyn Fn(&D) -> bool) -> Vec<D>;

    /// Id of the brick built from `item`.
    fn brick_id(&self, item: &D) -> String;

    /// Start of the item's interval.
    fn start(&self, item: &D) -> i64;

    /// End of the item's interval.
    fn end(&self, item: &D) -> i64;
}

impl<D, A: DataAccess<D> + ?Sized> DataAccess<D> for &A {
    fn fetch_all(&self, filter: &dyn Fn(&D) -> bool) -> Vec<D> {
        (**self).fetch_all(filter)
    }

    fn brick_id(&self, item: &D) -> String {
        (**self).brick_id(item)
    }

    fn start(&self, item: &D) -> i64 {
        (**self).start(item)
    }

    fn end(&self, item: &D) -> i64 {
        (**self).end(item)
    }
}
