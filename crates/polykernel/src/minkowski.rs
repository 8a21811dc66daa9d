//! Minkowski sum (pointwise, unreduced) and Minkowski hull.
//!
//! The sum is `O(n·m)` and dominates any pipeline built on this kernel. It
//! calls a caller-supplied `Checkpoint` every `KernelCfg::checkpoint_interval`
//! additions so single-threaded hosts can stay responsive or abort. There is
//! no sleep at a checkpoint; a cancelled sum returns `Cancelled`, never a
//! partial cloud.

use std::ops::ControlFlow;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use nalgebra::Vector2;

use crate::cfg::KernelCfg;
use crate::error::{PolygonError, Result};
use crate::hull::HullStrategy;
use crate::polygon::Polygon;

/// Progress reported at a checkpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Progress {
    /// Pairwise sums computed so far.
    pub completed: usize,
    pub total: usize,
}

/// Cooperative yield/cancellation hook.
pub trait Checkpoint {
    /// `Break` aborts the computation.
    fn checkpoint(&mut self, progress: Progress) -> ControlFlow<()>;
}

/// Never cancels.
impl Checkpoint for () {
    #[inline]
    fn checkpoint(&mut self, _progress: Progress) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }
}

impl<F> Checkpoint for F
where
    F: FnMut(Progress) -> ControlFlow<()>,
{
    #[inline]
    fn checkpoint(&mut self, progress: Progress) -> ControlFlow<()> {
        self(progress)
    }
}

/// Shared cancellation flag; clones observe the same flag.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

impl Checkpoint for CancelToken {
    #[inline]
    fn checkpoint(&mut self, _progress: Progress) -> ControlFlow<()> {
        if self.is_cancelled() {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

impl Polygon {
    /// Pointwise sum cloud `{p + q}`; point `i·|other| + j` is `self[i] + other[j]`.
    pub fn minkowski_sum(&self, other: &Polygon) -> Result<Polygon> {
        self.minkowski_sum_with(other, &KernelCfg::default(), &mut ())
    }

    /// `minkowski_sum` with explicit configuration and checkpoint.
    pub fn minkowski_sum_with<C: Checkpoint + ?Sized>(
        &self,
        other: &Polygon,
        cfg: &KernelCfg,
        checkpoint: &mut C,
    ) -> Result<Polygon> {
        if !self.is_valid() || !other.is_valid() {
            return Err(PolygonError::InvalidPolygon {
                op: "minkowski_sum",
            });
        }
        let every = cfg.checkpoint_every();
        let total = self.len() * other.len();
        let mut points: Vec<Vector2<f64>> = Vec::with_capacity(total);
        for p in self.points() {
            for q in other.points() {
                points.push(p + q);
                let completed = points.len();
                if completed % every == 0 || completed == total {
                    if let ControlFlow::Break(()) =
                        checkpoint.checkpoint(Progress { completed, total })
                    {
                        tracing::debug!(completed, total, "minkowski sum cancelled");
                        return Err(PolygonError::Cancelled { completed, total });
                    }
                }
            }
        }
        Ok(Polygon::new(points))
    }

    /// Convex hull of the Minkowski sum (reference hull backend).
    pub fn minkowski_hull(&self, other: &Polygon) -> Result<Polygon> {
        self.minkowski_hull_with(other, &KernelCfg::default(), &mut ())
    }

    /// `minkowski_hull` using the backend from `cfg` and a checkpoint for the sum.
    pub fn minkowski_hull_with<C: Checkpoint + ?Sized>(
        &self,
        other: &Polygon,
        cfg: &KernelCfg,
        checkpoint: &mut C,
    ) -> Result<Polygon> {
        let sum = self.minkowski_sum_with(other, cfg, checkpoint)?;
        let strategy: &dyn HullStrategy = cfg.hull_strategy();
        tracing::debug!(backend = strategy.name(), points = sum.len(), "minkowski hull");
        Ok(sum.convex_hull_with(strategy))
    }
}
