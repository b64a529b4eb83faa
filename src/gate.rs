//! Deployment-tag gate.
//!
//! A tagged build is a release/publish pass. The verification matrix has
//! already run for the tagged commit, so the whole run is skipped before any
//! configuration is resolved.

use log::info;

use crate::signals::{Signals, TRAVIS_TAG};

/// Returns the deployment tag when the run must be skipped.
pub fn deployment_tag(signals: &Signals) -> Option<&str> {
    let tag = signals.value(TRAVIS_TAG)?;
    info!("Deployment tag {} is set, skipping verification run", tag);
    Some(tag)
}
