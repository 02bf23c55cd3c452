// Copyright 2025 the Chronograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hierarchy entities: sections, groups (and subgroups), and bricks.

use alloc::string::String;
use core::ops::Range;

use smallvec::SmallVec;

use crate::Position;

macro_rules! entity_key {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(u32);

        impl $name {
            pub(crate) fn from_index(idx: usize) -> Self {
                #[expect(
                    clippy::cast_possible_truncation,
                    reason = "Entity counts are bounded by the input length, well below u32::MAX"
                )]
                {
                    Self(idx as u32)
                }
            }

            /// Dense index of the entity inside its storage.
            ///
            /// Useful for side tables (for example per-entity layout areas) that are
            /// rebuilt together with the hierarchy.
            #[must_use]
            pub const fn index(self) -> usize {
                self.0 as usize
            }
        }
    };
}

entity_key! {
    /// Handle of a [`Section`] inside a [`Storage`](crate::Storage).
    ///
    /// Handles are assigned in creation order during a restructure and become
    /// meaningless after the next restructure or clear.
    SectionKey
}

entity_key! {
    /// Handle of a [`Group`] (group or subgroup) inside a [`Storage`](crate::Storage).
    ///
    /// Two groups may share an id string while living under different
    /// containers; their keys always differ.
    GroupKey
}

entity_key! {
    /// Handle of a [`Brick`] inside a [`Storage`](crate::Storage).
    BrickKey
}

/// What a [`Group`] hangs from.
///
/// Top-level groups belong to a section; subgroups belong to a group.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Container {
    /// Top-level group of a section.
    Section(SectionKey),
    /// Subgroup of a group.
    Group(GroupKey),
}

/// Top-level container of the hierarchy.
#[derive(Clone, Debug)]
pub struct Section {
    pub(crate) key: SectionKey,
    pub(crate) id: String,
    pub(crate) groups: SmallVec<[GroupKey; 4]>,
}

impl Section {
    /// Handle of this section.
    #[must_use]
    pub fn key(&self) -> SectionKey {
        self.key
    }

    /// Identifier, unique across sections.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Handles of the section's groups, in display order.
    #[must_use]
    pub fn groups(&self) -> &[GroupKey] {
        &self.groups
    }
}

/// A group or a subgroup.
///
/// A subgroup is a group whose [`Container`] is another group. Only subgroups
/// own bricks; a subgroup is one horizontal lane on the stage.
#[derive(Clone, Debug)]
pub struct Group {
    pub(crate) key: GroupKey,
    pub(crate) id: String,
    pub(crate) container: Container,
    pub(crate) subgroups: SmallVec<[GroupKey; 4]>,
    pub(crate) bricks: Range<usize>,
}

impl Group {
    /// Handle of this group.
    #[must_use]
    pub fn key(&self) -> GroupKey {
        self.key
    }

    /// Identifier, unique only within the container.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The section or group this group belongs to.
    #[must_use]
    pub fn container(&self) -> Container {
        self.container
    }

    /// Returns `true` for subgroups (lanes).
    #[must_use]
    pub fn is_subgroup(&self) -> bool {
        matches!(self.container, Container::Group(_))
    }

    /// Handles of the subgroups, in display order. Empty for subgroups.
    #[must_use]
    pub fn subgroups(&self) -> &[GroupKey] {
        &self.subgroups
    }
}

/// Composite address of a group: the container's id plus the group's own id.
///
/// This is how hosts that only know string ids refer to a group. Ids alone are
/// ambiguous across containers; the pair is not.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GroupPath<'a> {
    /// Id of the containing section (for groups) or group (for subgroups).
    pub container_id: &'a str,
    /// Id of the group itself.
    pub id: &'a str,
}

/// A single time-bounded item, the leaf of the hierarchy.
///
/// Brick ids come from the data source and are trusted, not checked, for
/// uniqueness.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Brick<D> {
    pub(crate) key: BrickKey,
    pub(crate) id: String,
    pub(crate) position: Position,
    pub(crate) data: D,
}

impl<D> Brick<D> {
    /// Handle of this brick.
    #[must_use]
    pub fn key(&self) -> BrickKey {
        self.key
    }

    /// Identifier supplied by the data source.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Time interval.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Payload the brick was built from.
    #[must_use]
    pub fn data(&self) -> &D {
        &self.data
    }
}
