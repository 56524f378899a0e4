use crate::{
    backend::{read_level, write_level},
    ChannelPair, DecibelScale, ElementKind, ElementOptions, Id, Level, MidiAssignments,
    ParameterRange, ParameterSlot, Result, SharedBackend,
};

use super::{
    element_core::ElementCore,
    element_event::{ElementObserver, EventReceiver},
    pan_law::{self, StereoLevels},
};

/// A volume and balance control spread across a left and a right route
///
/// Created either for one input feeding two outputs, where the balance acts
/// as a pan pot, or for a stereo input feeding a stereo output, where it
/// cross-fades between the two sides.
///
/// Every change recomputes both routes from the current volume and balance
/// and writes them left then right. The two writes are not atomic.
pub struct StereoElement {
    core: ElementCore,
    left: ChannelPair,
    right: ChannelPair,
    scale: DecibelScale,
    balance_range: ParameterRange,
    volume_db: f64,
    balance: f64,
}

impl StereoElement {
    /// Pan one input between two outputs
    pub fn mono_to_stereo(
        input: &str,
        outputs: [&str; 2],
        backend: SharedBackend,
        options: &ElementOptions,
    ) -> Result<Self> {
        let [left_output, right_output] = outputs;

        Self::from_backend(
            ElementKind::MonoToStereo,
            ChannelPair::new(input, left_output),
            ChannelPair::new(input, right_output),
            backend,
            options,
        )
    }

    /// Cross-fade a stereo input into a stereo output
    ///
    /// The crossed routes (left input to right output and right input to
    /// left output) are silenced before the initial values are read.
    pub fn stereo_to_stereo(
        inputs: [&str; 2],
        outputs: [&str; 2],
        backend: SharedBackend,
        options: &ElementOptions,
    ) -> Result<Self> {
        let [left_input, right_input] = inputs;
        let [left_output, right_output] = outputs;

        write_level(
            backend.as_ref(),
            &ChannelPair::new(left_input, right_output),
            Level::zero(),
        )?;
        write_level(
            backend.as_ref(),
            &ChannelPair::new(right_input, left_output),
            Level::zero(),
        )?;

        Self::from_backend(
            ElementKind::StereoToStereo,
            ChannelPair::new(left_input, left_output),
            ChannelPair::new(right_input, right_output),
            backend,
            options,
        )
    }

    fn from_backend(
        kind: ElementKind,
        left: ChannelPair,
        right: ChannelPair,
        backend: SharedBackend,
        options: &ElementOptions,
    ) -> Result<Self> {
        let scale = *options.decibel_scale();

        let levels = StereoLevels {
            left: read_level(backend.as_ref(), &left)?,
            right: read_level(backend.as_ref(), &right)?,
        };

        let (volume, balance) = pan_law::reconstruct(levels);
        let volume_db = scale.clamp(scale.amplitude_to_db(volume));

        let core = ElementCore::new(kind, backend);

        let element = Self {
            core,
            left,
            right,
            scale,
            balance_range: pan_law::balance_range(),
            volume_db,
            balance,
        };

        tracing::debug!(
            "{} {} ({}): {volume_db} dB, balance {balance}",
            element.core.kind,
            element.core.id,
            element.caption()
        );

        Ok(element)
    }

    /// The identity carried by this element's events
    pub fn id(&self) -> Id {
        self.core.id
    }

    /// The kind of this element
    pub fn kind(&self) -> ElementKind {
        self.core.kind
    }

    /// The route written with the left amplitude
    pub fn left_pair(&self) -> &ChannelPair {
        &self.left
    }

    /// The route written with the right amplitude
    pub fn right_pair(&self) -> &ChannelPair {
        &self.right
    }

    /// Describes the routing, e.g. `in → (out_l/out_r)`
    pub fn caption(&self) -> String {
        let outputs = format!("({}/{})", self.left.output(), self.right.output());

        if self.left.input() == self.right.input() {
            format!("{} → {outputs}", self.left.input())
        } else {
            format!("({}/{}) → {outputs}", self.left.input(), self.right.input())
        }
    }

    /// The scale of the volume control
    pub fn decibel_scale(&self) -> &DecibelScale {
        &self.scale
    }

    /// The range of the balance control
    pub fn balance_range(&self) -> &ParameterRange {
        &self.balance_range
    }

    /// The current volume in dB
    pub fn volume_db(&self) -> f64 {
        self.volume_db
    }

    /// The current balance, from -1 (left) to 1 (right)
    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// The amplitudes the current volume and balance give each route
    pub fn calculate_levels(&self) -> StereoLevels {
        let volume = self.scale.db_to_amplitude(self.volume_db);
        pan_law::distribute(volume, self.balance)
    }

    /// Set the volume in dB, clamped to the scale, and write both routes
    pub fn set_volume(&mut self, volume_db: f64) -> Result<()> {
        self.volume_db = self.scale.clamp(volume_db);
        self.apply_levels()?;

        self.core.notify(ParameterSlot::Volume, self.volume_db);
        Ok(())
    }

    /// Set the balance, clamped to `[-1, 1]`, and write both routes
    pub fn set_balance(&mut self, balance: f64) -> Result<()> {
        self.balance = self.balance_range.clamp(balance);
        self.apply_levels()?;

        self.core.notify(ParameterSlot::Balance, self.balance);
        Ok(())
    }

    fn apply_levels(&self) -> Result<()> {
        let levels = self.calculate_levels();
        let backend = self.core.backend.as_ref();

        write_level(backend, &self.left, levels.left)?;
        write_level(backend, &self.right, levels.right)?;

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
