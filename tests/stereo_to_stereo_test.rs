use std::{cell::Cell, rc::Rc};

use approx::assert_relative_eq;
use gainstage::{
    BackendError, DecibelScale, ElementError, ElementOptions, Level, MatrixBackend,
    MixingBackend, ParameterSlot, StereoElement,
};
use rand::Rng;

const INPUTS: [&str; 2] = ["in_l", "in_r"];
const OUTPUTS: [&str; 2] = ["out_l", "out_r"];

/// Wraps a matrix and starts failing writes once its budget is spent
struct FlakyBackend {
    matrix: MatrixBackend,
    writes_left: Cell<usize>,
}

impl FlakyBackend {
    fn new(writes_left: usize) -> Self {
        Self {
            matrix: MatrixBackend::new(INPUTS, OUTPUTS),
            writes_left: Cell::new(writes_left),
        }
    }
}

impl MixingBackend for FlakyBackend {
    fn get_volume(&self, input: &str, output: &str) -> Result<Level, BackendError> {
        self.matrix.get_volume(input, output)
    }

    fn set_volume(&self, input: &str, output: &str, level: Level) -> Result<(), BackendError> {
        match self.writes_left.get() {
            0 => Err(BackendError::Unavailable("device disconnected".to_string())),
            remaining => {
                self.writes_left.set(remaining - 1);
                self.matrix.set_volume(input, output, level)
            }
        }
    }
}

struct Fixture {
    backend: Rc<MatrixBackend>,
    element: StereoElement,
}

impl Fixture {
    fn new(levels: [[f64; 2]; 2]) -> Self {
        let backend = Rc::new(MatrixBackend::new(INPUTS, OUTPUTS));

        for (input, row) in INPUTS.iter().zip(levels) {
            for (output, level) in OUTPUTS.iter().zip(row) {
                backend
                    .set_volume(input, output, Level::from_linear(level))
                    .unwrap();
            }
        }

        let element = StereoElement::stereo_to_stereo(
            INPUTS,
            OUTPUTS,
            backend.clone(),
            &ElementOptions::default(),
        )
        .unwrap();

        Self { backend, element }
    }

    fn level(&self, input: &str, output: &str) -> f64 {
        self.backend.get_volume(input, output).unwrap().as_linear()
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new([[1.0, 0.0], [0.0, 1.0]])
    }
}

#[test]
fn crossed_routes_are_silenced() {
    let fixture = Fixture::new([[1.0, 0.7], [0.3, 1.0]]);

    assert_eq!(fixture.level("in_l", "out_r"), 0.0);
    assert_eq!(fixture.level("in_r", "out_l"), 0.0);
    assert_eq!(fixture.level("in_l", "out_l"), 1.0);
    assert_eq!(fixture.level("in_r", "out_r"), 1.0);
}

#[test]
fn crossed_routes_are_silenced_for_any_prior_state() {
    let mut rng = rand::rng();

    for _ in 0..100 {
        let levels = [
            [rng.random_range(0.0..2.0), rng.random_range(0.0..2.0)],
            [rng.random_range(0.0..2.0), rng.random_range(0.0..2.0)],
        ];

        let fixture = Fixture::new(levels);

        assert_eq!(fixture.level("in_l", "out_r"), 0.0);
        assert_eq!(fixture.level("in_r", "out_l"), 0.0);
        assert!((-1.0..=1.0).contains(&fixture.element.balance()));
        assert!((-42.0..=6.0).contains(&fixture.element.volume_db()));
    }
}

#[test]
fn balance_is_reconstructed_and_clamped() {
    let fixture = Fixture::new([[0.0, 0.0], [0.0, 1.9]]);

    assert_eq!(fixture.element.balance(), 1.0);
    assert_relative_eq!(
        fixture.element.volume_db(),
        20.0 * 1.9_f64.log10(),
        epsilon = 1e-9
    );
}

#[test]
fn cross_fade_writes_matching_routes() {
    let mut fixture = Fixture::default();

    fixture.element.set_balance(0.5).unwrap();

    assert_relative_eq!(fixture.level("in_l", "out_l"), 0.5);
    assert_relative_eq!(fixture.level("in_r", "out_r"), 1.0);
    assert_eq!(fixture.level("in_l", "out_r"), 0.0);
    assert_eq!(fixture.level("in_r", "out_l"), 0.0);

    fixture.element.set_balance(-0.25).unwrap();

    assert_relative_eq!(fixture.level("in_l", "out_l"), 1.0);
    assert_relative_eq!(fixture.level("in_r", "out_r"), 0.75);
}

#[test]
fn volume_is_clamped() {
    let mut fixture = Fixture::default();

    fixture.element.set_volume(100.0).unwrap();

    assert_eq!(fixture.element.volume_db(), 6.0);
    assert_relative_eq!(
        fixture.level("in_r", "out_r"),
        DecibelScale::default().db_to_amplitude(6.0).as_linear()
    );
}

#[test]
fn one_event_per_change() {
    let mut fixture = Fixture::default();
    let events = fixture.element.subscribe();

    fixture.element.set_volume(-6.0).unwrap();
    fixture.element.set_balance(0.5).unwrap();
    fixture.element.set_balance(0.5).unwrap();

    let received: Vec<_> = events.try_iter().collect();
    assert_eq!(received.len(), 3);

    for event in &received {
        assert_eq!(event.element_id(), fixture.element.id());
    }

    assert_eq!(received[0].parameter(), ParameterSlot::Volume);
    assert_eq!(received[0].volume_db(), Some(-6.0));
    assert_eq!(received[1].parameter(), ParameterSlot::Balance);
    assert_eq!(received[1].balance(), Some(0.5));
    assert_eq!(received[2], received[1]);
}

#[test]
fn construction_failure_propagates() {
    let backend = Rc::new(FlakyBackend::new(0));

    let result =
        StereoElement::stereo_to_stereo(INPUTS, OUTPUTS, backend, &ElementOptions::default());

    assert!(matches!(
        result,
        Err(ElementError::Backend(BackendError::Unavailable(_)))
    ));
}

#[test]
fn failure_between_writes_leaves_left_updated() {
    let backend = Rc::new(FlakyBackend::new(3));
    backend
        .matrix
        .set_volume("in_l", "out_l", Level::unity())
        .unwrap();
    backend
        .matrix
        .set_volume("in_r", "out_r", Level::unity())
        .unwrap();

    let mut element = StereoElement::stereo_to_stereo(
        INPUTS,
        OUTPUTS,
        backend.clone(),
        &ElementOptions::default(),
    )
    .unwrap();
    let events = element.subscribe();

    let result = element.set_balance(0.5);

    assert_eq!(
        result,
        Err(ElementError::Backend(BackendError::Unavailable(
            "device disconnected".to_string()
        )))
    );
    assert_relative_eq!(
        backend.get_volume("in_l", "out_l").unwrap().as_linear(),
        0.5
    );
    assert!(backend.get_volume("in_r", "out_r").unwrap().is_unity());
    assert_eq!(element.balance(), 0.5);
    assert!(events.try_recv().is_err());
}
