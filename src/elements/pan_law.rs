use crate::{Level, ParameterRange};

/// Balance fully to the left
pub const MIN_BALANCE: f64 = -1.0;

/// Balance fully to the right
pub const MAX_BALANCE: f64 = 1.0;

/// The range of a balance or cross-fade control
pub fn balance_range() -> ParameterRange {
    ParameterRange::new(0.0, MIN_BALANCE, MAX_BALANCE)
}

/// The amplitudes of the two routes of a stereo element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StereoLevels {
    /// The left route
    pub left: Level,

    /// The right route
    pub right: Level,
}

/// Spread a volume across two routes
///
/// The louder side always gets the full `volume`; the other side is
/// attenuated linearly, reaching silence at a balance of +/-1.
pub fn distribute(volume: Level, balance: f64) -> StereoLevels {
    let left_gain = (1.0 - balance).min(1.0);
    let right_gain = (1.0 + balance).min(1.0);

    StereoLevels {
        left: volume.scaled(left_gain),
        right: volume.scaled(right_gain),
    }
}

/// Recover a volume and balance from the amplitudes of two routes
///
/// Exact when the louder side is the full volume, as [distribute] produces.
/// Any other pair is approximated: the louder side is kept and the
/// difference becomes the balance.
pub fn reconstruct(levels: StereoLevels) -> (Level, f64) {
    let volume = levels.left.max(levels.right);
    let balance = levels.right.as_linear() - levels.left.as_linear();

    (volume, balance_range().clamp(balance))
}
