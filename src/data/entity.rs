//! Tracked plant groups and their per-group state.

use serde::{Deserialize, Serialize};

use crate::data::history::{EnergySample, SampleHistory};

/// The plant groups shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityId {
    SinglePlant,
    HundredPlants,
    Custom,
}

impl EntityId {
    pub const ALL: [EntityId; 3] = [
        EntityId::SinglePlant,
        EntityId::HundredPlants,
        EntityId::Custom,
    ];

    /// Position in [`EntityId::ALL`].
    pub fn index(self) -> usize {
        match self {
            EntityId::SinglePlant => 0,
            EntityId::HundredPlants => 1,
            EntityId::Custom => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EntityId::SinglePlant => "1 Plant",
            EntityId::HundredPlants => "100 Plants",
            EntityId::Custom => "Custom Plants",
        }
    }

    /// Suffix used in image file names (`open_<suffix>.png`).
    pub fn asset_suffix(self) -> &'static str {
        match self {
            EntityId::SinglePlant => "1",
            EntityId::HundredPlants => "100",
            EntityId::Custom => "custom",
        }
    }

    pub fn default_plant_count(self) -> u32 {
        match self {
            EntityId::SinglePlant => 1,
            EntityId::HundredPlants => 100,
            EntityId::Custom => 1,
        }
    }

    /// Only the custom group lets the user change its size.
    pub fn plant_count_editable(self) -> bool {
        self == EntityId::Custom
    }
}

/// Live state of one plant group.
///
/// `current_energy` is the single-plant reading; the recorded history holds
/// that reading scaled by `plant_count`.
#[derive(Debug, Clone)]
pub struct EntityState {
    pub id: EntityId,
    pub current_energy: f64,
    pub is_active: bool,
    pub history: SampleHistory,
    pub plant_count: u32,
    /// A touch is holding the energy until its baseline return fires.
    pub touched: bool,
    loop_generation: u64,
    touch_generation: u64,
}

impl EntityState {
    pub fn new(id: EntityId, baseline: f64, plant_count: u32, history_capacity: usize) -> Self {
        Self {
            id,
            current_energy: baseline,
            is_active: false,
            history: SampleHistory::new(history_capacity),
            plant_count,
            touched: false,
            loop_generation: 0,
            touch_generation: 0,
        }
    }

    /// Energy of the whole group.
    pub fn aggregate_energy(&self) -> f64 {
        self.current_energy * f64::from(self.plant_count)
    }

    /// Push the current aggregate energy into the history.
    pub fn record(&mut self) -> EnergySample {
        let value = self.aggregate_energy();
        self.history.push(value)
    }

    /// Generation tick callbacks must carry to still be honoured.
    pub fn loop_generation(&self) -> u64 {
        self.loop_generation
    }

    /// Generation a baseline-return callback must carry to still be honoured.
    pub fn touch_generation(&self) -> u64 {
        self.touch_generation
    }

    /// Invalidate every pending tick; returns the new generation.
    pub(crate) fn bump_loop_generation(&mut self) -> u64 {
        self.loop_generation = self.loop_generation.wrapping_add(1);
        self.loop_generation
    }

    /// Invalidate a pending baseline return; returns the new generation.
    pub(crate) fn bump_touch_generation(&mut self) -> u64 {
        self.touch_generation = self.touch_generation.wrapping_add(1);
        self.touch_generation
    }
}
