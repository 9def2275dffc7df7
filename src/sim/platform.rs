//! Platforms, the player figure and the platform trail

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::transform::{Axis, Transform};

/// A placed platform. Never mutated after creation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub transform: Transform,
    /// Half the side length of the square footprint
    pub half_extent: f32,
}

impl Platform {
    pub fn new(transform: Transform, half_extent: f32) -> Self {
        Self {
            transform,
            half_extent,
        }
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.transform.position
    }

    /// Height of the top surface the figure stands on
    #[inline]
    pub fn surface_height(&self) -> f32 {
        self.transform.position.y
    }

    /// New platform `distance` further along `axis`
    pub fn offset_along(&self, axis: Axis, distance: f32) -> Self {
        Self {
            transform: self.transform.translated(axis.unit() * distance),
            half_extent: self.half_extent,
        }
    }
}

/// The player figure
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    /// Rest transform; yaw excludes the facing turn (see `facing_yaw`)
    pub transform: Transform,
    /// Axis the next jump travels along
    pub facing: Axis,
}

impl Figure {
    /// Figure standing `lift` above the platform, facing `facing`
    pub fn resting_on(platform: &Platform, facing: Axis, lift: f32, scale: f32) -> Self {
        Self {
            transform: Transform::new(platform.position() + Vec3::Y * lift, 0.0, scale),
            facing,
        }
    }

    /// Transform to draw: rest transform turned to face along `facing`
    pub fn draw_transform(&self) -> Transform {
        self.transform
            .with_yaw(self.transform.yaw + self.facing.facing_yaw())
    }
}

/// Fixed-capacity FIFO of placed platforms.
///
/// Storage is allocated once; when full the oldest slot is overwritten.
#[derive(Debug, Clone)]
pub struct PlatformHistory {
    slots: Vec<Platform>,
    /// Index of the oldest entry once the buffer has wrapped
    head: usize,
    capacity: usize,
}

impl PlatformHistory {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(2);
        Self {
            slots: Vec::with_capacity(capacity),
            head: 0,
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Append a platform, returning the evicted oldest one when full
    pub fn push(&mut self, platform: Platform) -> Option<Platform> {
        if self.slots.len() < self.capacity {
            self.slots.push(platform);
            return None;
        }
        let evicted = std::mem::replace(&mut self.slots[self.head], platform);
        self.head = (self.head + 1) % self.capacity;
        Some(evicted)
    }

    /// Logical index 0 = oldest
    pub fn get(&self, index: usize) -> Option<&Platform> {
        if index >= self.slots.len() {
            return None;
        }
        Some(&self.slots[(self.head + index) % self.slots.len()])
    }

    /// Most recently placed platform (the jump target)
    pub fn newest(&self) -> Option<&Platform> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    /// Platform placed just before the newest one (the figure's platform)
    pub fn previous(&self) -> Option<&Platform> {
        self.len().checked_sub(2).and_then(|i| self.get(i))
    }

    /// Oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &Platform> + '_ {
        (0..self.slots.len()).filter_map(move |i| self.get(i))
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = 0;
    }
}
