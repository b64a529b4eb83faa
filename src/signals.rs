//! # Environment Signals
//!
//! The CI provider configures a run entirely through environment variables.
//! Every variable is a presence flag: it counts as set when it exists and is
//! non-empty, and only `TARGET` and `TRAVIS_TAG` carry meaningful content.
//!
//! [`Signals`] is a snapshot of the recognised variables. It is captured once
//! with [`Signals::from_env`]; nothing else in the crate reads the process
//! environment. Tests and embedders build arbitrary snapshots with
//! `FromIterator`:
//!
//! ```
//! use lexical_ci::signals::{Signals, NO_STD};
//!
//! let signals: Signals = [(NO_STD, "1")].into_iter().collect();
//! assert!(signals.is_set(NO_STD));
//! ```

use std::collections::BTreeMap;
use std::env;

/// Running under a CI provider.
pub const CI: &str = "CI";
/// Use the native build tool even under CI.
pub const DISABLE_CROSS: &str = "DISABLE_CROSS";
/// Cross-compilation target triple.
pub const TARGET: &str = "TARGET";
/// Build without the hosted standard library.
pub const NO_STD: &str = "NO_STD";
/// Drop the `property_tests` feature.
pub const DISABLE_PROPERTY_TESTS: &str = "DISABLE_PROPERTY_TESTS";
/// Request the software `libm` feature.
pub const ENABLE_LIBM: &str = "ENABLE_LIBM";
/// Skip documentation examples when testing.
pub const DISABLE_DOCTESTS: &str = "DISABLE_DOCTESTS";
/// Skip the feature matrix entirely.
pub const NO_FEATURES: &str = "NO_FEATURES";
/// Skip every test and benchmark phase.
pub const DISABLE_TESTS: &str = "DISABLE_TESTS";
/// Skip the benchmark compile pass.
pub const DISABLE_BENCHES: &str = "DISABLE_BENCHES";
/// Run the foreign-binding test harness.
pub const ENABLE_FFI_TESTS: &str = "ENABLE_FFI_TESTS";
/// Run the code-generation tests.
pub const ENABLE_DERIVE_TESTS: &str = "ENABLE_DERIVE_TESTS";
/// Deployment tag; a tagged build is a publish pass, not a verification pass.
pub const TRAVIS_TAG: &str = "TRAVIS_TAG";

/// Every variable the orchestrator recognises.
pub const ALL: [&str; 13] = [
    CI,
    DISABLE_CROSS,
    TARGET,
    NO_STD,
    DISABLE_PROPERTY_TESTS,
    ENABLE_LIBM,
    DISABLE_DOCTESTS,
    NO_FEATURES,
    DISABLE_TESTS,
    DISABLE_BENCHES,
    ENABLE_FFI_TESTS,
    ENABLE_DERIVE_TESTS,
    TRAVIS_TAG,
];

/// Snapshot of the environment variables that drive a CI run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Signals {
    values: BTreeMap<String, String>,
}

impl Signals {
    /// An empty snapshot: every signal unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture the recognised variables from the process environment.
    ///
    /// Values that are not valid Unicode are converted lossily; only their
    /// presence matters for every variable except `TARGET` and `TRAVIS_TAG`.
    pub fn from_env() -> Self {
        ALL.iter()
            .filter_map(|name| {
                env::var_os(name).map(|value| (*name, value.to_string_lossy().into_owned()))
            })
            .collect()
    }

    /// Whether `name` is present with a non-empty value.
    pub fn is_set(&self, name: &str) -> bool {
        self.value(name).is_some()
    }

    /// The non-empty value of `name`, if any.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Return a copy with `name` set to `value`.
    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.values.insert(name.to_string(), value.to_string());
        self
    }
}

impl<K, V> FromIterator<(K, V)> for Signals
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
