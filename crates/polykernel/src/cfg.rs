//! Kernel configuration.
//!
//! Policy
//! - Backends are chosen here, explicitly, and never by probing the
//!   environment inside a hot path.
//! - Defaults keep the deterministic reference path (`MonotoneChain`).

use crate::hull::{HullStrategy, MonotoneChain};

/// Convex hull backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HullBackend {
    /// Manual monotone chain (always available).
    #[default]
    MonotoneChain,
    /// QuickHull from the `geo` crate.
    #[cfg(feature = "geo")]
    GeoQuickHull,
}

/// Kernel configuration.
#[derive(Clone, Copy, Debug)]
pub struct KernelCfg {
    pub hull: HullBackend,
    /// Pairwise additions between Minkowski-sum checkpoints. `0` is treated as `1`.
    pub checkpoint_interval: usize,
}

impl Default for KernelCfg {
    fn default() -> Self {
        Self {
            hull: HullBackend::default(),
            checkpoint_interval: 1024,
        }
    }
}

impl KernelCfg {
    /// Strategy object for the configured hull backend.
    pub fn hull_strategy(&self) -> &'static dyn HullStrategy {
        match self.hull {
            HullBackend::MonotoneChain => &MonotoneChain,
            #[cfg(feature = "geo")]
            HullBackend::GeoQuickHull => &crate::hull::GeoQuickHull,
        }
    }

    #[inline]
    pub(crate) fn checkpoint_every(&self) -> usize {
        self.checkpoint_interval.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_selects_reference_hull() {
        let cfg = KernelCfg::default();
        assert_eq!(cfg.hull, HullBackend::MonotoneChain);
        assert_eq!(cfg.hull_strategy().name(), "monotone-chain");
    }

    #[test]
    fn zero_interval_clamps_to_one() {
        let cfg = KernelCfg {
            checkpoint_interval: 0,
            ..KernelCfg::default()
        };
        assert_eq!(cfg.checkpoint_every(), 1);
    }

    #[cfg(feature = "geo")]
    #[test]
    fn geo_backend_is_selectable() {
        let cfg = KernelCfg {
            hull: HullBackend::GeoQuickHull,
            ..KernelCfg::default()
        };
        assert_eq!(cfg.hull_strategy().name(), "geo-quickhull");
    }
}
