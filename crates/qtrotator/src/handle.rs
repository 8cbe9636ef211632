//! Per-container rotator attachment
//!
//! A [`RotatorHandle`] is what the host keeps for each container that may
//! carry a rotator. It initializes (or re-initializes) the instance and routes
//! commands to it, logging and rejecting commands sent before initialization.

use qtrotator_core::{Event, Millis};
use qtrotator_dom::{Document, ElementId};

use crate::capabilities::Capabilities;
use crate::command::Command;
use crate::error::{Result, RotatorError};
use crate::options::RotatorOptions;
use crate::rotator::Rotator;

pub struct RotatorHandle {
    container: ElementId,
    instance: Option<Rotator>,
}

impl RotatorHandle {
    pub fn new(container: ElementId) -> Self {
        Self {
            container,
            instance: None,
        }
    }

    pub fn container(&self) -> ElementId {
        self.container
    }

    /// Create the rotator, replacing any earlier instance
    ///
    /// A previous instance is destroyed first so its timers, listeners and
    /// progress indicator do not outlive it.
    pub fn initialize(
        &mut self,
        doc: &mut Document,
        options: RotatorOptions,
        capabilities: Capabilities,
        now: Millis,
    ) -> Result<&mut Rotator> {
        if let Some(mut previous) = self.instance.take() {
            tracing::debug!("re-initializing rotator");
            previous.destroy(doc);
        }
        let rotator = Rotator::initialize(doc, self.container, options, capabilities, now)?;
        Ok(self.instance.insert(rotator))
    }

    pub fn is_initialized(&self) -> bool {
        self.instance.is_some()
    }

    pub fn rotator(&self) -> Option<&Rotator> {
        self.instance.as_ref()
    }

    pub fn rotator_mut(&mut self) -> Option<&mut Rotator> {
        self.instance.as_mut()
    }

    /// Run a command on the initialized rotator
    pub fn dispatch(&mut self, doc: &mut Document, command: Command, now: Millis) -> Result<()> {
        let rotator = self.require(command.name())?;
        rotator.apply(doc, command, now);
        Ok(())
    }

    /// Resolve `name` to a public command and run it
    ///
    /// Initialization is checked before the name, so an uninitialized
    /// container reports that regardless of what was asked for.
    pub fn dispatch_named(&mut self, doc: &mut Document, name: &str, now: Millis) -> Result<()> {
        let rotator = self.require(name)?;
        let command = name.parse::<Command>().map_err(|err| {
            tracing::error!("{err}");
            err
        })?;
        rotator.apply(doc, command, now);
        Ok(())
    }

    /// Forward an input event; ignored until initialized
    pub fn handle_event(&mut self, doc: &mut Document, event: &Event) -> bool {
        self.instance
            .as_mut()
            .is_some_and(|rotator| rotator.handle_event(doc, event))
    }

    /// Advance the instance's timers; no-op until initialized
    pub fn tick(&mut self, doc: &mut Document, now: Millis) -> usize {
        self.instance
            .as_mut()
            .map_or(0, |rotator| rotator.tick(doc, now))
    }

    fn require(&mut self, command: &str) -> Result<&mut Rotator> {
        match self.instance.as_mut() {
            Some(rotator) => Ok(rotator),
            None => {
                let err = RotatorError::NotInitialized {
                    command: command.to_string(),
                };
                tracing::error!("{err}");
                Err(err)
            }
        }
    }
}
