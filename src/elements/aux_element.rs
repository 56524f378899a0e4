use crate::{
    backend::{read_level, write_level},
    ChannelPair, ControlStyle, DecibelScale, ElementKind, ElementOptions, Id, MidiAssignments,
    ParameterSlot, Result, SharedBackend,
};

use super::{
    element_core::ElementCore,
    element_event::{ElementObserver, EventReceiver},
};

/// A volume control for a single route of the mixing matrix
pub struct AuxElement {
    core: ElementCore,
    pair: ChannelPair,
    style: ControlStyle,
    scale: DecibelScale,
    volume_db: f64,
}

impl AuxElement {
    /// Create an element for the route from `input` to `output`
    ///
    /// The initial volume is read from the backend; nothing is written
    pub fn new(
        input: &str,
        output: &str,
        style: ControlStyle,
        backend: SharedBackend,
        options: &ElementOptions,
    ) -> Result<Self> {
        let pair = ChannelPair::new(input, output);
        let scale = *options.decibel_scale();

        let level = read_level(backend.as_ref(), &pair)?;
        let volume_db = scale.clamp(scale.amplitude_to_db(level));

        let core = ElementCore::new(ElementKind::Aux(style), backend);

        tracing::debug!("{} {} ({pair}): {volume_db} dB", core.kind, core.id);

        Ok(Self {
            core,
            pair,
            style,
            scale,
            volume_db,
        })
    }

    /// The identity carried by this element's events
    pub fn id(&self) -> Id {
        self.core.id
    }

    /// The kind of this element
    pub fn kind(&self) -> ElementKind {
        self.core.kind
    }

    /// How the host should present the control
    pub fn style(&self) -> ControlStyle {
        self.style
    }

    /// The controlled route
    pub fn channel_pair(&self) -> &ChannelPair {
        &self.pair
    }

    /// The channel name to show, for routes that connect a channel to its
    /// namesake
    pub fn label(&self) -> Option<&str> {
        self.pair.is_direct().then(|| self.pair.input())
    }

    /// Describes the route
    pub fn caption(&self) -> String {
        self.pair.to_string()
    }

    /// The scale of the volume control
    pub fn decibel_scale(&self) -> &DecibelScale {
        &self.scale
    }

    /// The current volume in dB
    pub fn volume_db(&self) -> f64 {
        self.volume_db
    }

    /// Set the volume in dB, clamped to the scale, and write it to the
    /// backend
    pub fn set_volume(&mut self, volume_db: f64) -> Result<()> {
        self.volume_db = self.scale.clamp(volume_db);

        let level = self.scale.db_to_amplitude(self.volume_db);
        write_level(self.core.backend.as_ref(), &self.pair, level)?;

        self.core.notify(ParameterSlot::Volume, self.volume_db);
        Ok(())
    }

    /// Run `observer` after every change
    pub fn add_observer(&mut self, observer: ElementObserver) {
        self.core.events.add_observer(observer);
    }

    /// Receive every change on a channel
    pub fn subscribe(&mut self) -> EventReceiver {
        self.core.events.subscribe()
    }

    /// The MIDI controllers driving this element
    pub fn midi_assignments(&self) -> &MidiAssignments {
        &self.core.midi
    }

    /// Change the MIDI controllers driving this element
    pub fn midi_assignments_mut(&mut self) -> &mut MidiAssignments {
        &mut self.core.midi
    }
}
