//! Commands and the channel used to route them to the controller.
//!
//! Buttons never touch simulation state directly. Each one sends a
//! [`Command`] through a [`CommandSink`]; the UI drains the receiving end
//! once per frame and hands every command to the controller.

use std::sync::mpsc::{Receiver, SendError, Sender};

use crate::data::entity::EntityId;

/// User action aimed at one plant group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Begin the periodic tick loop.
    Start(EntityId),
    /// End the periodic tick loop and drop pending callbacks.
    Stop(EntityId),
    /// Simulate touching the plants.
    Touch(EntityId),
    /// Change the group size from raw text input.
    SetPlantCount { entity: EntityId, input: String },
}

impl Command {
    pub fn entity(&self) -> EntityId {
        match self {
            Command::Start(id) | Command::Stop(id) | Command::Touch(id) => *id,
            Command::SetPlantCount { entity, .. } => *entity,
        }
    }
}

/// Cloneable sender for [`Command`]s.
#[derive(Clone)]
pub struct CommandSink {
    tx: Sender<Command>,
}

impl CommandSink {
    pub fn send(&self, cmd: Command) -> Result<(), SendError<Command>> {
        self.tx.send(cmd)
    }

    #[inline]
    pub fn start(&self, id: EntityId) -> Result<(), SendError<Command>> {
        self.send(Command::Start(id))
    }

    #[inline]
    pub fn stop(&self, id: EntityId) -> Result<(), SendError<Command>> {
        self.send(Command::Stop(id))
    }

    #[inline]
    pub fn touch(&self, id: EntityId) -> Result<(), SendError<Command>> {
        self.send(Command::Touch(id))
    }

    pub fn set_plant_count<S: Into<String>>(
        &self,
        id: EntityId,
        input: S,
    ) -> Result<(), SendError<Command>> {
        self.send(Command::SetPlantCount {
            entity: id,
            input: input.into(),
        })
    }
}

/// Create a command channel: a sink for producers and the receiver the UI drains.
pub fn channel_commands() -> (CommandSink, Receiver<Command>) {
    let (tx, rx) = std::sync::mpsc::channel();
    (CommandSink { tx }, rx)
}
