// ABOUTME: Generic lookup table shapes keyed by fitness level
// ABOUTME: LevelTable gives exhaustive per-level entries, LevelBucket adds a level-independent form
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PeakForm Training Intelligence

use serde::{Deserialize, Serialize};

use peakform_core::models::FitnessLevel;

/// One entry per fitness level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelTable<T> {
    /// Beginner entry
    pub beginner: T,
    /// Intermediate entry
    pub intermediate: T,
    /// Advanced entry
    pub advanced: T,
    /// Elite entry
    pub elite: T,
}

impl<T> LevelTable<T> {
    /// Entry for `level`
    #[must_use]
    pub const fn get(&self, level: FitnessLevel) -> &T {
        match level {
            FitnessLevel::Beginner => &self.beginner,
            FitnessLevel::Intermediate => &self.intermediate,
            FitnessLevel::Advanced => &self.advanced,
            FitnessLevel::Elite => &self.elite,
        }
    }

    /// Entries in ascending level order
    pub fn iter(&self) -> impl Iterator<Item = (FitnessLevel, &T)> {
        FitnessLevel::ALL.into_iter().map(move |level| (level, self.get(level)))
    }
}

/// Entries either split by fitness level or shared by every level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelBucket<T> {
    /// Distinct entry per level
    ByLevel(LevelTable<T>),
    /// One entry for all levels
    All(T),
}

impl<T> LevelBucket<T> {
    /// Entry for `level`
    #[must_use]
    pub const fn get(&self, level: FitnessLevel) -> &T {
        match self {
            Self::ByLevel(table) => table.get(level),
            Self::All(entry) => entry,
        }
    }

    /// Every distinct entry in the bucket
    #[must_use]
    pub fn entries(&self) -> Vec<&T> {
        match self {
            Self::ByLevel(table) => table.iter().map(|(_, entry)| entry).collect(),
            Self::All(entry) => vec![entry],
        }
    }
}
