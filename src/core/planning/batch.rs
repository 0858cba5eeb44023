//! Per-slot plan cache for a fixed-size batch. Slot identity is the batch
//! position; entries are never shared across slots.
use tracing::debug;

use crate::core::params::CanvasConfig;
use crate::core::planning::geometry::Rect;
use crate::core::planning::planner::{Plan, plan_full_image, plan_sub_region};
use crate::types::SourceGeometry;

/// One batch position: the source geometry the stored plan was derived from,
/// and the plan itself.
#[derive(Clone, Debug, Default)]
pub struct BatchSlot {
    cached_source: Option<SourceGeometry>,
    plan: Option<Plan>,
}

/// Arena of [`BatchSlot`]s plus a replan counter.
///
/// Full-image planning is skipped when a slot sees the same `(width, height)`
/// again; sub-region planning always recomputes, since the caller rectangle
/// may change even when the frame dimensions do not.
#[derive(Debug)]
pub struct SlotCache {
    slots: Vec<BatchSlot>,
    replans: u64,
}

impl SlotCache {
    pub fn new(batch_size: usize) -> Self {
        Self {
            slots: vec![BatchSlot::default(); batch_size],
            replans: 0,
        }
    }

    pub fn batch_size(&self) -> usize {
        self.slots.len()
    }

    /// Total number of planner invocations so far. Diagnostic counter; tests
    /// use it to assert that repeated identical geometry skips replanning.
    pub fn replan_count(&self) -> u64 {
        self.replans
    }

    /// Plan slot `index` for a whole frame, reusing the cached plan when the
    /// source dimensions match the previous call.
    pub fn plan_full(&mut self, index: usize, source: SourceGeometry, config: &CanvasConfig) -> Plan {
        let slot = &mut self.slots[index];
        if let (Some(cached), Some(plan)) = (slot.cached_source, slot.plan) {
            if cached == source {
                return plan;
            }
        }
        debug!(slot = index, %source, "slot geometry changed, replanning");
        let plan = plan_full_image(source, config);
        slot.cached_source = Some(source);
        slot.plan = Some(plan);
        self.replans += 1;
        plan
    }

    /// Plan slot `index` for a caller-supplied sub-rectangle. Never cached;
    /// the stored full-image geometry is invalidated so the next full-image
    /// call replans instead of reusing a sub-region plan.
    pub fn plan_region(&mut self, index: usize, roi: Rect, config: &CanvasConfig) -> Plan {
        let plan = plan_sub_region(roi, config);
        let slot = &mut self.slots[index];
        slot.cached_source = None;
        slot.plan = Some(plan);
        self.replans += 1;
        plan
    }

    /// Forget all cached geometry, forcing replans on the next call.
    pub fn reset(&mut self) {
        for slot in &mut self.slots {
            slot.cached_source = None;
            slot.plan = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_dimensions_reuse_the_stored_plan() {
        let cfg = CanvasConfig::default();
        let mut cache = SlotCache::new(2);
        let src = SourceGeometry::new(1920, 1080);

        let first = cache.plan_full(0, src, &cfg);
        assert_eq!(cache.replan_count(), 1);

        let second = cache.plan_full(0, src, &cfg);
        assert_eq!(cache.replan_count(), 1, "identical geometry replanned");
        assert_eq!(first, second);

        // a different slot has its own entry
        cache.plan_full(1, src, &cfg);
        assert_eq!(cache.replan_count(), 2);
    }

    #[test]
    fn changed_dimensions_replan() {
        let cfg = CanvasConfig::default();
        let mut cache = SlotCache::new(1);
        cache.plan_full(0, SourceGeometry::new(1920, 1080), &cfg);
        let plan = cache.plan_full(0, SourceGeometry::new(1280, 720), &cfg);
        assert_eq!(cache.replan_count(), 2);
        assert_eq!(plan.crop, Rect::new(0, 1279, 0, 719));
    }

    #[test]
    fn sub_regions_are_never_cached() {
        let cfg = CanvasConfig::default();
        let mut cache = SlotCache::new(1);

        let a = cache.plan_region(0, Rect::new(0, 199, 0, 99), &cfg);
        let b = cache.plan_region(0, Rect::new(100, 299, 0, 99), &cfg);
        assert_eq!(cache.replan_count(), 2);
        assert_ne!(a.crop, b.crop);
    }

    #[test]
    fn sub_region_invalidates_full_image_cache() {
        let cfg = CanvasConfig::default();
        let mut cache = SlotCache::new(1);
        let src = SourceGeometry::new(1920, 1080);

        cache.plan_full(0, src, &cfg);
        cache.plan_region(0, Rect::new(0, 99, 0, 99), &cfg);
        cache.plan_full(0, src, &cfg);
        assert_eq!(cache.replan_count(), 3, "stale sub-region plan was reused");
    }

    #[test]
    fn reset_forces_replanning() {
        let cfg = CanvasConfig::default();
        let mut cache = SlotCache::new(1);
        let src = SourceGeometry::new(1920, 1080);

        cache.plan_full(0, src, &cfg);
        cache.reset();
        cache.plan_full(0, src, &cfg);
        assert_eq!(cache.replan_count(), 2);
    }
}
