//! # Feature Matrix
//!
//! The core library is tested once per feature combination, each in
//! isolation with default features disabled. This module expands the
//! resolved [`ExecutionConfig`] into those combinations.
//!
//! Every base feature is tested three ways: on its own, paired with `radix`
//! and paired with `unchecked_index`. Hosted builds cover all base features;
//! freestanding builds only have the lookup-table policy available.

use std::fmt;

use log::debug;
use serde::Serialize;

use crate::config::ExecutionConfig;

/// Base features in the order they are tested; the last one is the only
/// entry available without the standard library.
pub const BASE_FEATURES: [&str; 7] = [
    "rounding",
    "trim_floats",
    "grisu3",
    "ryu",
    "format",
    "correct",
    "table",
];

/// Base features that also build without the standard library.
pub const FREESTANDING_BASE_FEATURES: [&str; 1] = ["table"];

/// Companion features each base entry is paired with. `None` tests the base
/// feature alone.
pub const PAIRINGS: [Option<&str>; 3] = [None, Some("radix"), Some("unchecked_index")];

/// An ordered combination of features activated together in one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FeatureSet(Vec<String>);

impl FeatureSet {
    pub fn new<I, S>(features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(features.into_iter().map(Into::into).collect())
    }

    pub fn push(&mut self, feature: impl Into<String>) {
        self.0.push(feature.into());
    }

    /// Features of `self` followed by those of `other`.
    pub fn chain(&self, other: &FeatureSet) -> FeatureSet {
        Self(self.0.iter().chain(other.0.iter()).cloned().collect())
    }

    /// Comma-joined form accepted by `--features`.
    pub fn join(&self) -> String {
        self.0.join(",")
    }

    pub fn contains(&self, feature: &str) -> bool {
        self.0.iter().any(|f| f == feature)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for FeatureSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join())
    }
}

/// Feature combinations per subproject family.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FeatureMatrix {
    pub core: Vec<FeatureSet>,
    /// Always empty; the binding layer is not tested per feature.
    pub bindings: Vec<FeatureSet>,
    /// Always empty; the code-generation layer is not tested per feature.
    pub codegen: Vec<FeatureSet>,
}

impl FeatureMatrix {
    /// Expand the configuration into the per-family feature lists.
    pub fn build(config: &ExecutionConfig) -> Self {
        if config.feature_matrix_disabled {
            debug!("Feature matrix disabled");
            return Self::default();
        }

        let bases: &[&str] = if config.freestanding {
            &FREESTANDING_BASE_FEATURES
        } else {
            &BASE_FEATURES
        };

        let core: Vec<FeatureSet> = bases
            .iter()
            .flat_map(|base| {
                PAIRINGS.iter().map(move |pairing| match pairing {
                    Some(companion) => FeatureSet::new([*base, *companion]),
                    None => FeatureSet::new([*base]),
                })
            })
            .collect();

        debug!("Core feature matrix has {} entries", core.len());
        Self {
            core,
            bindings: Vec::new(),
            codegen: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.core.is_empty() && self.bindings.is_empty() && self.codegen.is_empty()
    }
}
