//! Dashboard event notifications.
//!
//! Observers subscribe through [`EventController`] with an [`EventFilter`].
//! Each [`DashboardEvent`] carries a set of [`EventKind`] flags; an event is
//! delivered when `(event.kinds & filter) != 0`.

use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, Mutex};

use crate::data::entity::EntityId;

// ─────────────────────────────────────────────────────────────────────────────
// EventKind – bitflags
// ─────────────────────────────────────────────────────────────────────────────

/// Bitflags describing the categories an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventKind(pub u32);

impl EventKind {
    /// An entity's tick loop was started.
    pub const START: Self = Self(1 << 0);
    /// An entity's tick loop was stopped.
    pub const STOP: Self = Self(1 << 1);
    /// A plant group was touched.
    pub const TOUCH: Self = Self(1 << 2);
    /// A touched group went back to baseline.
    pub const BASELINE_RETURN: Self = Self(1 << 3);
    /// A sample was appended to an entity's history.
    pub const SAMPLE: Self = Self(1 << 4);
    /// The custom group's plant count changed.
    pub const PLANT_COUNT_CHANGED: Self = Self(1 << 5);
    /// The battery reached capacity.
    pub const BATTERY_FULL: Self = Self(1 << 6);

    /// Wildcard: matches every event kind.
    pub const ALL: Self = Self(u32::MAX);

    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// `true` if `self` has every bit of `other`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    #[inline]
    pub const fn intersects(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for EventKind {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for EventKind {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "EMPTY");
        }
        if *self == EventKind::ALL {
            return write!(f, "ALL");
        }
        let pairs: &[(EventKind, &str)] = &[
            (EventKind::START, "START"),
            (EventKind::STOP, "STOP"),
            (EventKind::TOUCH, "TOUCH"),
            (EventKind::BASELINE_RETURN, "BASELINE_RETURN"),
            (EventKind::SAMPLE, "SAMPLE"),
            (EventKind::PLANT_COUNT_CHANGED, "PLANT_COUNT_CHANGED"),
            (EventKind::BATTERY_FULL, "BATTERY_FULL"),
        ];
        let mut names = Vec::new();
        let mut known_bits = 0;
        for (kind, name) in pairs {
            known_bits |= kind.0;
            if self.contains(*kind) {
                names.push((*name).to_string());
            }
        }
        let extra = self.0 & !known_bits;
        if extra != 0 {
            names.push(format!("0x{:x}", extra));
        }
        write!(f, "{}", names.join("|"))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// DashboardEvent
// ─────────────────────────────────────────────────────────────────────────────

/// A single notification.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardEvent {
    pub kinds: EventKind,
    /// Simulated time in milliseconds.
    pub at_ms: u64,
    /// Entity the event concerns, if any.
    pub entity: Option<EntityId>,
    /// Energy value, plant count or battery level depending on the kind.
    pub value: Option<f64>,
}

impl DashboardEvent {
    pub fn new(kinds: EventKind, at_ms: u64) -> Self {
        Self {
            kinds,
            at_ms,
            entity: None,
            value: None,
        }
    }

    pub fn for_entity(mut self, entity: EntityId) -> Self {
        self.entity = Some(entity);
        self
    }

    pub fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// EventFilter
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct EventFilter {
    pub mask: EventKind,
}

impl EventFilter {
    pub const fn all() -> Self {
        Self {
            mask: EventKind::ALL,
        }
    }

    pub const fn only(mask: EventKind) -> Self {
        Self { mask }
    }

    #[inline]
    pub fn matches(&self, event: &DashboardEvent) -> bool {
        event.kinds.intersects(self.mask)
    }
}

impl Default for EventFilter {
    fn default() -> Self {
        Self::all()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// EventController
// ─────────────────────────────────────────────────────────────────────────────

struct Subscriber {
    filter: EventFilter,
    sender: Sender<DashboardEvent>,
}

/// Cloneable hub that fans events out to subscribers.
#[derive(Clone, Default)]
pub struct EventController {
    inner: Arc<Mutex<Vec<Subscriber>>>,
}

impl EventController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, filter: EventFilter) -> Receiver<DashboardEvent> {
        let (tx, rx) = std::sync::mpsc::channel();
        if let Ok(mut subs) = self.inner.lock() {
            subs.push(Subscriber { filter, sender: tx });
        }
        rx
    }

    pub fn subscribe_all(&self) -> Receiver<DashboardEvent> {
        self.subscribe(EventFilter::all())
    }

    /// Deliver `event` to matching subscribers. Subscribers whose receiver
    /// was dropped are removed when an event reaches them.
    pub fn emit(&self, event: DashboardEvent) {
        if let Ok(mut subs) = self.inner.lock() {
            subs.retain(|sub| !sub.filter.matches(&event) || sub.sender.send(event.clone()).is_ok());
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.lock().map(|subs| subs.len()).unwrap_or(0)
    }
}
