// Copyright 2025 the Chronograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The hierarchy store and the restructure pass that fills it.

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::{
    Brick, BrickKey, BrickPredicate, Classifier, Container, DataAccess, Group, GroupKey, GroupPath,
    LEVELS, Position, RestructureError, Section, SectionKey,
};

/// Summary of a successful [`Storage::restructure`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RestructureReport {
    /// Items fetched from the data source.
    pub items: usize,
    /// Bricks built.
    pub bricks: usize,
    /// Items that did not become a brick: they failed to adapt at some
    /// level or carried an inverted interval.
    pub dropped: usize,
    /// The part of `dropped` caused by an interval ending before it starts.
    pub inverted: usize,
}

/// Distinct bucket ids in first-occurrence order, plus the member items of each.
struct Buckets<'a> {
    order: Vec<&'a str>,
    members: HashMap<&'a str, Vec<usize>>,
}

impl<'a> Buckets<'a> {
    fn collect(ids: impl Iterator<Item = (usize, Option<&'a str>)>) -> Self {
        let mut order = Vec::new();
        let mut members: HashMap<&str, Vec<usize>> = HashMap::new();
        for (item, id) in ids {
            let Some(id) = id else {
                continue;
            };
            members
                .entry(id)
                .or_insert_with(|| {
                    order.push(id);
                    Vec::new()
                })
                .push(item);
        }
        Self { order, members }
    }

    fn get(&self, id: &str) -> &[usize] {
        self.members.get(id).map(Vec::as_slice).unwrap_or_default()
    }
}

/// Distinct ids of `level` among `items`, in first-occurrence order.
fn distinct_ids<'a>(keys: &'a [[Option<String>; LEVELS]], items: &[usize], level: usize) -> Vec<&'a str> {
    let mut out: Vec<&str> = Vec::new();
    for &item in items {
        if let Some(id) = keys[item][level].as_deref()
            && !out.contains(&id)
        {
            out.push(id);
        }
    }
    out
}

/// Section → group → subgroup → brick hierarchy built from raw items.
///
/// The hierarchy is read-only between calls to [`Storage::restructure`] and
/// [`Storage::clear`]; both discard everything built before.
///
/// Groups and subgroups are addressed by [`GroupKey`] handles, never by id
/// alone: the same id may appear under several containers.
pub struct Storage<D> {
    structure: Vec<Arc<dyn Classifier<D>>>,
    sections: Vec<Section>,
    section_ids: HashMap<String, SectionKey>,
    groups: Vec<Group>,
    bricks: Vec<Brick<D>>,
}

impl<D> Default for Storage<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> fmt::Debug for Storage<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Storage")
            .field("structure", &self.structure.len())
            .field("sections", &self.sections.len())
            .field("groups", &self.groups.len())
            .field("bricks", &self.bricks.len())
            .finish_non_exhaustive()
    }
}

impl<D> Storage<D> {
    /// Creates an empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self {
            structure: Vec::new(),
            sections: Vec::new(),
            section_ids: HashMap::new(),
            groups: Vec::new(),
            bricks: Vec::new(),
        }
    }

    /// Drops the hierarchy and the recorded structure.
    pub fn clear(&mut self) {
        self.structure.clear();
        self.sections.clear();
        self.section_ids.clear();
        self.groups.clear();
        self.bricks.clear();
    }

    /// Rebuilds the hierarchy from every item `access` returns.
    ///
    /// `structure` lists one classifier per level: sections, groups, subgroups.
    /// Classifiers past the third are recorded but unused.
    ///
    /// - Sections are the distinct level-0 ids over all items.
    /// - A section's groups are the distinct level-1 ids of the items in its bucket.
    /// - A group's subgroups are the distinct level-2 ids of the items in the
    ///   group's level-1 bucket.
    /// - A subgroup's bricks are the items of its level-2 bucket that also sit in
    ///   the enclosing group's and section's buckets.
    ///
    /// Items that fail to classify at some level, or whose interval is
    /// inverted, are left out and counted in [`RestructureReport::dropped`].
    ///
    /// # Errors
    ///
    /// [`RestructureError::InvalidConfiguration`] when fewer than three
    /// classifiers are given. The storage is left empty in that case.
    pub fn restructure<A>(
        &mut self,
        access: &A,
        structure: &[Arc<dyn Classifier<D>>],
    ) -> Result<RestructureReport, RestructureError>
    where
        A: DataAccess<D> + ?Sized,
    {
        self.clear();
        if structure.len() < LEVELS {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                supplied = structure.len(),
                "restructure skipped: incomplete classifier structure"
            );
            return Err(RestructureError::InvalidConfiguration {
                supplied: structure.len(),
            });
        }
        self.structure.extend(structure.iter().cloned());

        // Filters are not supported yet; every item passes.
        let input = access.fetch_all(&|_| true);
        let keys: Vec<[Option<String>; LEVELS]> = input
            .iter()
            .map(|item| core::array::from_fn(|level| structure[level].classify(item)))
            .collect();
        let buckets: [Buckets<'_>; LEVELS] = core::array::from_fn(|level| {
            Buckets::collect(
                keys.iter()
                    .enumerate()
                    .map(|(item, k)| (item, k[level].as_deref())),
            )
        });

        let mut items: Vec<Option<D>> = input.into_iter().map(Some).collect();
        let mut inverted = 0;

        for &section_id in &buckets[0].order {
            let section_key = SectionKey::from_index(self.sections.len());
            self.sections.push(Section {
                key: section_key,
                id: section_id.into(),
                groups: SmallVec::new(),
            });
            self.section_ids.insert(section_id.into(), section_key);

            let in_section = buckets[0].get(section_id);
            for group_id in distinct_ids(&keys, in_section, 1) {
                let group_key = GroupKey::from_index(self.groups.len());
                self.groups.push(Group {
                    key: group_key,
                    id: group_id.into(),
                    container: Container::Section(section_key),
                    subgroups: SmallVec::new(),
                    bricks: 0..0,
                });
                self.sections[section_key.index()].groups.push(group_key);

                // Lanes come from the group id's bucket across all sections, so a
                // group id shared by two sections lists the lanes of both. Lanes
                // with no item in this section stay empty.
                for subgroup_id in distinct_ids(&keys, buckets[1].get(group_id), 2) {
                    let subgroup_key = GroupKey::from_index(self.groups.len());
                    let first = self.bricks.len();
                    for &item in buckets[2].get(subgroup_id) {
                        let [k0, k1, _] = &keys[item];
                        if k0.as_deref() != Some(section_id) || k1.as_deref() != Some(group_id) {
                            continue;
                        }
                        let Some(data) = items[item].take() else {
                            continue;
                        };
                        let Ok(position) = Position::new(access.start(&data), access.end(&data))
                        else {
                            inverted += 1;
                            continue;
                        };
                        self.bricks.push(Brick {
                            key: BrickKey::from_index(self.bricks.len()),
                            id: access.brick_id(&data),
                            position,
                            data,
                        });
                    }
                    self.groups.push(Group {
                        key: subgroup_key,
                        id: subgroup_id.into(),
                        container: Container::Group(group_key),
                        subgroups: SmallVec::new(),
                        bricks: first..self.bricks.len(),
                    });
                    self.groups[group_key.index()].subgroups.push(subgroup_key);
                }
            }
        }

        let report = RestructureReport {
            items: items.len(),
            bricks: self.bricks.len(),
            dropped: items.len() - self.bricks.len(),
            inverted,
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(
            items = report.items,
            sections = self.sections.len(),
            groups = self.groups.len(),
            bricks = report.bricks,
            dropped = report.dropped,
            inverted = report.inverted,
            "restructured hierarchy"
        );
        Ok(report)
    }

    /// The classifier list recorded by the last successful restructure.
    #[must_use]
    pub fn structure(&self) -> &[Arc<dyn Classifier<D>>] {
        &self.structure
    }

    /// Returns `true` if there are no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// All sections, in display order.
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Looks up a section by handle.
    #[must_use]
    pub fn section(&self, key: SectionKey) -> Option<&Section> {
        self.sections.get(key.index())
    }

    /// Looks up a section by id.
    #[must_use]
    pub fn section_by_id(&self, id: &str) -> Option<&Section> {
        self.section_ids.get(id).and_then(|key| self.section(*key))
    }

    /// Looks up a group or subgroup by handle.
    #[must_use]
    pub fn group(&self, key: GroupKey) -> Option<&Group> {
        self.groups.get(key.index())
    }

    /// Number of groups and subgroups together.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// The groups of `section`, in display order.
    pub fn groups_of<'a>(&'a self, section: &'a Section) -> impl Iterator<Item = &'a Group> + 'a {
        section.groups.iter().filter_map(|key| self.group(*key))
    }

    /// The subgroups of `group`, in display order.
    pub fn subgroups_of<'a>(&'a self, group: &'a Group) -> impl Iterator<Item = &'a Group> + 'a {
        group.subgroups.iter().filter_map(|key| self.group(*key))
    }

    /// The bricks owned by `subgroup`. Empty for top-level groups.
    #[must_use]
    pub fn bricks_of(&self, subgroup: &Group) -> &[Brick<D>] {
        self.bricks.get(subgroup.bricks.clone()).unwrap_or_default()
    }

    /// The bricks of the subgroup addressed by its id and its ancestors' ids.
    ///
    /// Returns an empty slice if any id does not resolve.
    #[must_use]
    pub fn bricks(&self, subgroup_id: &str, group_id: &str, section_id: &str) -> &[Brick<D>] {
        self.section_by_id(section_id)
            .and_then(|section| self.groups_of(section).find(|g| g.id == group_id))
            .and_then(|group| self.subgroups_of(group).find(|s| s.id == subgroup_id))
            .map(|subgroup| self.bricks_of(subgroup))
            .unwrap_or_default()
    }

    /// Looks up a brick by handle.
    #[must_use]
    pub fn brick(&self, key: BrickKey) -> Option<&Brick<D>> {
        self.bricks.get(key.index())
    }

    /// Every brick, grouped by subgroup in display order.
    #[must_use]
    pub fn all_bricks(&self) -> &[Brick<D>] {
        &self.bricks
    }

    /// Bricks accepted by `predicate`, in storage order.
    pub fn query<P>(&self, predicate: &P) -> Vec<&Brick<D>>
    where
        P: BrickPredicate<D> + ?Sized,
    {
        self.bricks.iter().filter(|b| predicate.matches(b)).collect()
    }

    /// Number of bricks accepted by `predicate`.
    pub fn count<P>(&self, predicate: &P) -> usize
    where
        P: BrickPredicate<D> + ?Sized,
    {
        self.bricks.iter().filter(|b| predicate.matches(b)).count()
    }

    /// Latest brick end, or `None` without bricks.
    ///
    /// Scans every brick.
    #[must_use]
    pub fn max_end(&self) -> Option<i64> {
        self.bricks.iter().map(|b| b.position.end()).max()
    }

    /// Id of the section or group that contains `group`.
    #[must_use]
    pub fn container_id(&self, group: &Group) -> &str {
        match group.container {
            Container::Section(key) => self.section(key).map_or("", Section::id),
            Container::Group(key) => self.group(key).map_or("", Group::id),
        }
    }

    /// Composite `(container id, id)` address of `group`.
    #[must_use]
    pub fn group_path<'a>(&'a self, group: &'a Group) -> GroupPath<'a> {
        GroupPath {
            container_id: self.container_id(group),
            id: &group.id,
        }
    }

    /// First group or subgroup whose composite address equals `path`.
    #[must_use]
    pub fn find_group(&self, path: GroupPath<'_>) -> Option<&Group> {
        self.groups
            .iter()
            .find(|g| g.id == path.id && self.container_id(g) == path.container_id)
    }
}
