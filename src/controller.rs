//! Simulation controller.
//!
//! [`DashboardController`] owns every plant group, the battery, the sensor and
//! the scheduler. All state changes go through it, either as a [`Command`]
//! from the UI or as a [`Task`] coming due on the scheduler.
//!
//! Pending callbacks are never cancelled. Each one carries the generation of
//! its entity at scheduling time, and it is ignored when it fires if that
//! generation has moved on:
//!
//! | Action  | Loop generation | Touch generation |
//! |---------|-----------------|------------------|
//! | start   | bumped          |                  |
//! | stop    | bumped          | bumped           |
//! | touch   |                 | bumped           |

use tracing::{debug, info, trace};

use crate::config::{DashboardConfig, SimulationConfig};
use crate::data::battery::BatteryState;
use crate::data::chart::{ChartPresenter, ChartSpec, ChartView};
use crate::data::entity::{EntityId, EntityState};
use crate::data::sensor::{EnergySource, UniformSensor};
use crate::error::{DashboardError, Result};
use crate::events::{DashboardEvent, EventController, EventKind};
use crate::scheduler::{Scheduler, Task};
use crate::sink::Command;

/// Intervals [`DashboardController::catch_up_to`] replays after a stall.
pub const MAX_CATCH_UP_TICKS: u64 = 5;

/// Parse plant count text input as a positive whole number.
pub fn parse_plant_count(input: &str) -> Result<u32> {
    match input.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(DashboardError::InvalidPlantCount {
            input: input.to_string(),
        }),
    }
}

/// An entity together with the chart that displays it.
pub struct TrackedEntity {
    pub state: EntityState,
    pub chart: ChartPresenter,
}

pub struct DashboardController {
    sim: SimulationConfig,
    sensor: Box<dyn EnergySource>,
    entities: Vec<TrackedEntity>,
    battery: BatteryState,
    scheduler: Scheduler,
    events: Option<EventController>,
}

impl DashboardController {
    /// Controller with a uniform random sensor, seeded if the config asks for it.
    pub fn new(config: &DashboardConfig) -> Self {
        let sim = &config.simulation;
        let sensor = match sim.seed {
            Some(seed) => UniformSensor::seeded(sim.baseline_energy, sim.spike_energy, seed),
            None => UniformSensor::new(sim.baseline_energy, sim.spike_energy),
        };
        Self::with_source(config, Box::new(sensor))
    }

    /// Controller reading from an arbitrary energy source.
    ///
    /// Every entity starts inactive at baseline with one recorded sample. The
    /// battery loop is scheduled immediately and runs for the lifetime of the
    /// controller.
    pub fn with_source(config: &DashboardConfig, sensor: Box<dyn EnergySource>) -> Self {
        let sim = config.simulation.clone();
        let entities = EntityId::ALL
            .iter()
            .map(|&id| {
                let count = if id.plant_count_editable() {
                    sim.custom_plant_count.max(1)
                } else {
                    id.default_plant_count()
                };
                let mut state =
                    EntityState::new(id, sim.baseline_energy, count, sim.history_capacity);
                state.record();
                let mut chart = ChartPresenter::new(ChartSpec::for_entity(id));
                chart.redraw(&state, &sim);
                TrackedEntity { state, chart }
            })
            .collect();

        let mut scheduler = Scheduler::new();
        scheduler.schedule_once(sim.interval_ms(), Task::BatteryTick);

        Self {
            battery: BatteryState::new(&config.battery),
            sim,
            sensor,
            entities,
            scheduler,
            events: None,
        }
    }

    pub fn set_event_controller(&mut self, events: EventController) {
        self.events = Some(events);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn simulation(&self) -> &SimulationConfig {
        &self.sim
    }

    pub fn entity(&self, id: EntityId) -> &EntityState {
        &self.entities[id.index()].state
    }

    pub fn chart_spec(&self, id: EntityId) -> &ChartSpec {
        self.entities[id.index()].chart.spec()
    }

    pub fn chart(&self, id: EntityId) -> &ChartView {
        self.entities[id.index()].chart.view()
    }

    pub fn battery(&self) -> &BatteryState {
        &self.battery
    }

    /// Simulated time in milliseconds.
    pub fn now_ms(&self) -> u64 {
        self.scheduler.now_ms()
    }

    pub fn pending_tasks(&self) -> usize {
        self.scheduler.pending()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Commands
    // ─────────────────────────────────────────────────────────────────────────

    pub fn dispatch(&mut self, cmd: Command) -> Result<()> {
        match cmd {
            Command::Start(id) => self.start(id),
            Command::Stop(id) => self.stop(id),
            Command::Touch(id) => self.touch(id),
            Command::SetPlantCount { entity, input } => {
                let count = parse_plant_count(&input)?;
                self.set_plant_count(entity, count)?;
            }
        }
        Ok(())
    }

    /// Start the tick loop. The first tick runs immediately.
    pub fn start(&mut self, id: EntityId) {
        let state = &mut self.entities[id.index()].state;
        if state.is_active {
            debug!(entity = ?id, "start ignored, already active");
            return;
        }
        state.is_active = true;
        let generation = state.bump_loop_generation();
        info!(entity = ?id, "tick loop started");
        self.emit(DashboardEvent::new(EventKind::START, self.now_ms()).for_entity(id));
        self.on_tick(id, generation);
    }

    /// Stop the tick loop. Every callback already scheduled for the entity,
    /// including a pending baseline return, becomes a no-op.
    pub fn stop(&mut self, id: EntityId) {
        let state = &mut self.entities[id.index()].state;
        state.is_active = false;
        state.touched = false;
        state.bump_loop_generation();
        state.bump_touch_generation();
        info!(entity = ?id, energy = state.current_energy, "tick loop stopped");
        self.emit(DashboardEvent::new(EventKind::STOP, self.now_ms()).for_entity(id));
    }

    /// Touch the plants: hold the touch energy and return to baseline after
    /// the decay delay. Touching again restarts the delay.
    pub fn touch(&mut self, id: EntityId) {
        let energy = self.sim.touch_energy();
        let state = &mut self.entities[id.index()].state;
        state.current_energy = energy;
        state.touched = true;
        let generation = state.bump_touch_generation();
        info!(entity = ?id, energy, "plants touched");
        self.emit(
            DashboardEvent::new(EventKind::TOUCH, self.now_ms())
                .for_entity(id)
                .with_value(energy),
        );
        self.record(id);
        self.scheduler.schedule_once(
            self.sim.touch_decay_ms,
            Task::ReturnToBaseline {
                entity: id,
                generation,
            },
        );
    }

    /// Resize a group. Records a sample at the new scale straight away.
    pub fn set_plant_count(&mut self, id: EntityId, count: u32) -> Result<()> {
        if !id.plant_count_editable() {
            return Err(DashboardError::PlantCountLocked(id));
        }
        if count == 0 {
            return Err(DashboardError::InvalidPlantCount {
                input: count.to_string(),
            });
        }
        let state = &mut self.entities[id.index()].state;
        if state.plant_count == count {
            return Ok(());
        }
        state.plant_count = count;
        info!(entity = ?id, count, "plant count changed");
        self.emit(
            DashboardEvent::new(EventKind::PLANT_COUNT_CHANGED, self.now_ms())
                .for_entity(id)
                .with_value(f64::from(count)),
        );
        self.record(id);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Time
    // ─────────────────────────────────────────────────────────────────────────

    /// Run every task due at or before `now_ms`, in order, then move the
    /// clock to `now_ms`.
    pub fn advance_to(&mut self, now_ms: u64) {
        while let Some(task) = self.scheduler.pop_due(now_ms) {
            self.run_task(task);
        }
        self.scheduler.advance_clock(now_ms);
    }

    /// Like [`advance_to`](Self::advance_to), but replays at most
    /// [`MAX_CATCH_UP_TICKS`] intervals. After a longer stall every overdue
    /// task is moved up to the start of that window first, so loops resume
    /// from near `now_ms` instead of replaying the whole gap.
    pub fn catch_up_to(&mut self, now_ms: u64) {
        let window = self.sim.interval_ms().saturating_mul(MAX_CATCH_UP_TICKS);
        let resume_at = now_ms.saturating_sub(window);
        if resume_at > self.now_ms() {
            let moved = self.scheduler.postpone_until(resume_at);
            debug!(
                stalled_ms = resume_at - self.now_ms(),
                moved, "skipping stalled interval"
            );
            self.scheduler.advance_clock(resume_at);
        }
        self.advance_to(now_ms);
    }

    pub fn advance_by(&mut self, delta_ms: u64) {
        let target = self.now_ms().saturating_add(delta_ms);
        self.advance_to(target);
    }

    fn run_task(&mut self, task: Task) {
        match task {
            Task::Tick { entity, generation } => self.on_tick(entity, generation),
            Task::ReturnToBaseline { entity, generation } => {
                self.on_return_to_baseline(entity, generation)
            }
            Task::BatteryTick => self.on_battery_tick(),
        }
    }

    fn on_tick(&mut self, id: EntityId, generation: u64) {
        let state = &self.entities[id.index()].state;
        if !state.is_active || state.loop_generation() != generation {
            trace!(entity = ?id, generation, "stale tick ignored");
            return;
        }
        let reading = self.sensor.sample();
        self.entities[id.index()].state.current_energy = reading;
        self.record(id);
        self.scheduler.schedule_once(
            self.sim.interval_ms(),
            Task::Tick {
                entity: id,
                generation,
            },
        );
    }

    fn on_return_to_baseline(&mut self, id: EntityId, generation: u64) {
        let baseline = self.sim.baseline_energy;
        let state = &mut self.entities[id.index()].state;
        if state.touch_generation() != generation {
            trace!(entity = ?id, generation, "stale baseline return ignored");
            return;
        }
        state.current_energy = baseline;
        state.touched = false;
        debug!(entity = ?id, "returned to baseline");
        self.emit(
            DashboardEvent::new(EventKind::BASELINE_RETURN, self.now_ms())
                .for_entity(id)
                .with_value(baseline),
        );
        self.record(id);
    }

    fn on_battery_tick(&mut self) {
        let delta = self.entities[EntityId::Custom.index()]
            .state
            .aggregate_energy();
        let was_full = self.battery.is_full();
        let level = self.battery.accumulate(delta);
        trace!(delta, level, "battery tick");
        if !was_full && self.battery.is_full() {
            info!(level, "battery full");
            self.emit(DashboardEvent::new(EventKind::BATTERY_FULL, self.now_ms()).with_value(level));
        }
        self.scheduler
            .schedule_once(self.sim.interval_ms(), Task::BatteryTick);
    }

    /// Append the entity's current energy to its history and redraw its chart.
    fn record(&mut self, id: EntityId) {
        let now = self.now_ms();
        let tracked = &mut self.entities[id.index()];
        let sample = tracked.state.record();
        tracked.chart.redraw(&tracked.state, &self.sim);
        debug!(entity = ?id, tick = sample.tick, value = sample.value, "sample recorded");
        self.emit(
            DashboardEvent::new(EventKind::SAMPLE, now)
                .for_entity(id)
                .with_value(sample.value),
        );
    }

    fn emit(&self, event: DashboardEvent) {
        if let Some(events) = &self.events {
            events.emit(event);
        }
    }
}
