//! # Execution Configuration
//!
//! [`ExecutionConfig`] is the single, immutable description of a CI run. It is
//! resolved once from a [`Signals`] snapshot and then passed by reference to
//! every component; nothing downstream consults the environment again.
//!
//! ## Resolution Rules
//!
//! - `CI` selects the pinned interpreter and, unless `DISABLE_CROSS` is set,
//!   the `cross` wrapper together with the `TARGET` triple.
//! - `NO_STD` builds without default features, drops `std` from the required
//!   features and restricts testing to the non-doc subset.
//! - `DISABLE_PROPERTY_TESTS`, `ENABLE_LIBM` and `DISABLE_DOCTESTS` adjust the
//!   required feature list and doc-test toggle.
//! - The remaining signals map one to one onto kill-switches and opt-ins.
//!
//! Resolution cannot fail: every signal has a default.

use log::debug;
use serde::Serialize;

use crate::defaults;
use crate::matrix::FeatureSet;
use crate::signals::{self, Signals};

/// Feature gating the hosted standard library.
pub const STD_FEATURE: &str = "std";
/// Feature enabling the property-based test suites.
pub const PROPERTY_TESTS_FEATURE: &str = "property_tests";
/// Feature enabling the software math library.
pub const LIBM_FEATURE: &str = "libm";

/// Which build-tool family drives the core phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildTool {
    /// The host's `cargo`.
    Native,
    /// The `cross` wrapper, building for `target_triple`.
    Cross,
}

/// Resolved, immutable configuration for one CI run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutionConfig {
    pub is_ci: bool,
    pub cross_compile_disabled: bool,
    pub build_tool: BuildTool,
    /// Only set when `build_tool` is [`BuildTool::Cross`].
    pub target_triple: Option<String>,
    /// Interpreter running the foreign-binding harness.
    pub interpreter: String,
    /// Build without the hosted standard library.
    pub freestanding: bool,
    pub default_features_disabled: bool,
    pub doc_tests_disabled: bool,
    pub property_tests_enabled: bool,
    pub libm_enabled: bool,
    /// Features passed to every invocation, in `std`, `property_tests`,
    /// `libm` order.
    pub required_features: FeatureSet,
    pub tests_disabled: bool,
    pub benches_disabled: bool,
    pub ffi_tests_enabled: bool,
    pub derive_tests_enabled: bool,
    pub feature_matrix_disabled: bool,
}

impl ExecutionConfig {
    /// Resolve the configuration from a signal snapshot.
    pub fn resolve(signals: &Signals) -> Self {
        let is_ci = signals.is_set(signals::CI);
        let cross_compile_disabled = signals.is_set(signals::DISABLE_CROSS);

        let (build_tool, target_triple) = if is_ci && !cross_compile_disabled {
            (
                BuildTool::Cross,
                signals.value(signals::TARGET).map(str::to_string),
            )
        } else {
            (BuildTool::Native, None)
        };

        let interpreter = if is_ci {
            defaults::CI_INTERPRETER
        } else {
            defaults::LOCAL_INTERPRETER
        };

        let freestanding = signals.is_set(signals::NO_STD);
        let property_tests_enabled = !signals.is_set(signals::DISABLE_PROPERTY_TESTS);
        let libm_enabled = signals.is_set(signals::ENABLE_LIBM);

        let mut required_features = FeatureSet::default();
        if !freestanding {
            required_features.push(STD_FEATURE);
        }
        if property_tests_enabled {
            required_features.push(PROPERTY_TESTS_FEATURE);
        }
        if libm_enabled {
            required_features.push(LIBM_FEATURE);
        }

        let config = Self {
            is_ci,
            cross_compile_disabled,
            build_tool,
            target_triple,
            interpreter: interpreter.to_string(),
            freestanding,
            default_features_disabled: freestanding,
            doc_tests_disabled: freestanding || signals.is_set(signals::DISABLE_DOCTESTS),
            property_tests_enabled,
            libm_enabled,
            required_features,
            tests_disabled: signals.is_set(signals::DISABLE_TESTS),
            benches_disabled: signals.is_set(signals::DISABLE_BENCHES),
            ffi_tests_enabled: signals.is_set(signals::ENABLE_FFI_TESTS),
            derive_tests_enabled: signals.is_set(signals::ENABLE_DERIVE_TESTS),
            feature_matrix_disabled: signals.is_set(signals::NO_FEATURES),
        };
        debug!("Resolved execution config: {:?}", config);
        config
    }
}
