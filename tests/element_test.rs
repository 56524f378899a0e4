use std::rc::Rc;

use approx::assert_relative_eq;
use gainstage::{
    BackendError, ControlStyle, DecibelScale, Element, ElementError, ElementKind, ElementOptions,
    Level, MatrixBackend, MixingBackend, ParameterSlot,
};

struct Fixture {
    backend: Rc<MatrixBackend>,
    options: ElementOptions,
}

impl Fixture {
    fn create(&self, kind: ElementKind, inputs: &[&str], outputs: &[&str]) -> Element {
        Element::create(kind, inputs, outputs, self.backend.clone(), &self.options).unwrap()
    }

    fn level(&self, input: &str, output: &str) -> f64 {
        self.backend.get_volume(input, output).unwrap().as_linear()
    }
}

impl Default for Fixture {
    fn default() -> Self {
        let backend = Rc::new(MatrixBackend::new(
            ["mic", "synth_l", "synth_r"],
            ["main_l", "main_r", "mic"],
        ));

        for (input, output) in [
            ("mic", "main_l"),
            ("mic", "main_r"),
            ("synth_l", "main_l"),
            ("synth_r", "main_r"),
        ] {
            backend.set_volume(input, output, Level::unity()).unwrap();
        }

        Self {
            backend,
            options: ElementOptions::default(),
        }
    }
}

#[test]
fn creates_each_kind() {
    let fixture = Fixture::default();

    let aux = fixture.create(ElementKind::Aux(ControlStyle::Knob), &["mic"], &["mic"]);
    assert!(matches!(aux, Element::Aux(_)));
    assert_eq!(aux.balance(), None);
    assert_eq!(aux.caption(), "mic → mic");

    let mono = fixture.create(ElementKind::MonoToStereo, &["mic"], &["main_l", "main_r"]);
    assert_eq!(mono.kind(), ElementKind::MonoToStereo);
    assert_eq!(mono.balance(), Some(0.0));
    assert_eq!(mono.volume_db(), 0.0);

    let stereo = fixture.create(
        ElementKind::StereoToStereo,
        &["synth_l", "synth_r"],
        &["main_l", "main_r"],
    );
    assert_eq!(stereo.kind(), ElementKind::StereoToStereo);
    assert_eq!(stereo.caption(), "(synth_l/synth_r) → (main_l/main_r)");

    assert_ne!(mono.id(), stereo.id());
}

#[test]
fn kind_is_validated_against_selection() {
    let fixture = Fixture::default();

    let result = Element::create(
        ElementKind::StereoToStereo,
        &["mic"],
        &["main_l", "main_r"],
        fixture.backend.clone(),
        &fixture.options,
    );

    assert!(matches!(
        result,
        Err(ElementError::UnsupportedChannelCount {
            kind: ElementKind::StereoToStereo,
            input_count: 1,
            output_count: 2,
        })
    ));
}

#[test]
fn kind_by_name() {
    let fixture = Fixture::default();
    let kind: ElementKind = "mono-to-stereo".parse().unwrap();

    let element = fixture.create(kind, &["mic"], &["main_l", "main_r"]);
    assert_eq!(element.kind().to_string(), "mono-to-stereo");
}

#[test]
fn unknown_route_propagates_backend_error() {
    let fixture = Fixture::default();

    let result = Element::create(
        ElementKind::Aux(ControlStyle::Slider),
        &["mic"],
        &["monitor"],
        fixture.backend.clone(),
        &fixture.options,
    );

    assert!(matches!(
        result,
        Err(ElementError::Backend(BackendError::InvalidChannelPair { .. }))
    ));
}

#[test]
fn aux_has_no_balance() {
    let fixture = Fixture::default();
    let mut aux = fixture.create(ElementKind::Aux(ControlStyle::Knob), &["mic"], &["mic"]);

    assert_eq!(
        aux.set_balance(0.5),
        Err(ElementError::UnsupportedParameter {
            kind: ElementKind::Aux(ControlStyle::Knob),
            parameter: ParameterSlot::Balance,
        })
    );
    assert!(aux.parameter_range(ParameterSlot::Balance).is_none());
}

#[test]
fn set_parameter_by_slot() {
    let fixture = Fixture::default();
    let mut mono = fixture.create(ElementKind::MonoToStereo, &["mic"], &["main_l", "main_r"]);

    mono.set_parameter(ParameterSlot::Balance, 1.0).unwrap();
    mono.set_parameter(ParameterSlot::Volume, -6.0).unwrap();

    assert_eq!(mono.parameter(ParameterSlot::Balance), Some(1.0));
    assert_eq!(mono.parameter(ParameterSlot::Volume), Some(-6.0));
    assert_eq!(fixture.level("mic", "main_l"), 0.0);
    assert_relative_eq!(
        fixture.level("mic", "main_r"),
        DecibelScale::default().db_to_amplitude(-6.0).as_linear()
    );
}

#[test]
fn controller_drives_assigned_slots() {
    let fixture = Fixture::default();
    let mut mono = fixture.create(ElementKind::MonoToStereo, &["mic"], &["main_l", "main_r"]);
    let events = mono.subscribe();

    mono.midi_assignments_mut()
        .assign(ParameterSlot::Volume, 7)
        .unwrap();
    mono.midi_assignments_mut()
        .assign(ParameterSlot::Balance, 10)
        .unwrap();

    assert!(mono.handle_controller(7, 127).unwrap());
    assert_eq!(mono.volume_db(), 6.0);

    assert!(mono.handle_controller(10, 0).unwrap());
    assert_eq!(mono.balance(), Some(-1.0));

    assert!(!mono.handle_controller(11, 64).unwrap());

    let parameters: Vec<_> = events.try_iter().map(|event| event.parameter()).collect();
    assert_eq!(
        parameters,
        vec![ParameterSlot::Volume, ParameterSlot::Balance]
    );
}

#[test]
fn one_controller_can_drive_several_slots() {
    let fixture = Fixture::default();
    let mut stereo = fixture.create(
        ElementKind::StereoToStereo,
        &["synth_l", "synth_r"],
        &["main_l", "main_r"],
    );

    let assignments = stereo.midi_assignments_mut();
    assignments.assign(ParameterSlot::Volume, 1).unwrap();
    assignments.assign(ParameterSlot::Balance, 1).unwrap();

    stereo.handle_controller(1, 0).unwrap();

    assert_eq!(stereo.volume_db(), -42.0);
    assert_eq!(stereo.balance(), Some(-1.0));
    assert_eq!(fixture.level("synth_r", "main_r"), 0.0);
}

#[test]
fn aux_accepts_only_volume_assignment() {
    let fixture = Fixture::default();
    let mut aux = fixture.create(ElementKind::Aux(ControlStyle::Slider), &["mic"], &["mic"]);

    assert!(aux
        .midi_assignments_mut()
        .assign(ParameterSlot::Balance, 3)
        .is_err());

    aux.midi_assignments_mut()
        .assign(ParameterSlot::Volume, 3)
        .unwrap();
    aux.handle_controller(3, 0).unwrap();

    assert_eq!(aux.volume_db(), -42.0);
    assert_relative_eq!(
        fixture.level("mic", "mic"),
        DecibelScale::default().db_to_amplitude(-42.0).as_linear()
    );
}
