//! Simulation of color vision deficiencies.
//!
//! Each [`SimulationMode`] other than [`SimulationMode::Normal`] corresponds to
//! a fixed 3×3 matrix that is applied to the raw `0..=255` sRGB coordinates.
//! The matrices are coarse approximations operating on gamma-encoded values,
//! not physiological models, but they are cheap and widely used for quick
//! previews.
use crate::core::{from_24bit, multiply};
use crate::error::UnknownNameError;
use crate::{Float, Rgb};

#[rustfmt::skip]
const PROTANOPIA: [[Float; 3]; 3] = [
    [ 0.567, 0.433, 0.0   ],
    [ 0.558, 0.442, 0.0   ],
    [ 0.0,   0.242, 0.758 ],
];

#[rustfmt::skip]
const DEUTERANOPIA: [[Float; 3]; 3] = [
    [ 0.625, 0.375, 0.0 ],
    [ 0.7,   0.3,   0.0 ],
    [ 0.0,   0.3,   0.7 ],
];

#[rustfmt::skip]
const TRITANOPIA: [[Float; 3]; 3] = [
    [ 0.95, 0.05,  0.0   ],
    [ 0.0,  0.433, 0.567 ],
    [ 0.0,  0.475, 0.525 ],
];

// Identical rows, so all three channels come out the same.
#[rustfmt::skip]
const ACHROMATOPSIA: [[Float; 3]; 3] = [
    [ 0.299, 0.587, 0.114 ],
    [ 0.299, 0.587, 0.114 ],
    [ 0.299, 0.587, 0.114 ],
];

/// The simulated kinds of color vision.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SimulationMode {
    /// Regular color vision, i.e., no simulation at all.
    #[default]
    Normal,
    /// Missing long-wavelength (red) cones.
    Protanopia,
    /// Missing medium-wavelength (green) cones.
    Deuteranopia,
    /// Missing short-wavelength (blue) cones.
    Tritanopia,
    /// Complete color blindness.
    Achromatopsia,
}

impl SimulationMode {
    /// All simulation modes in order.
    pub const ALL: [SimulationMode; 5] = [
        SimulationMode::Normal,
        SimulationMode::Protanopia,
        SimulationMode::Deuteranopia,
        SimulationMode::Tritanopia,
        SimulationMode::Achromatopsia,
    ];

    const NAMES: &'static [&'static str] = &[
        "Normal",
        "Protanopia",
        "Deuteranopia",
        "Tritanopia",
        "Achromatopsia",
    ];

    /// Get this simulation mode's human-readable name.
    pub fn name(&self) -> &'static str {
        Self::NAMES[*self as usize]
    }

    /// Get the matrix for this simulation mode, unless it is the identity.
    pub fn matrix(&self) -> Option<&'static [[Float; 3]; 3]> {
        use SimulationMode::*;

        match self {
            Normal => None,
            Protanopia => Some(&PROTANOPIA),
            Deuteranopia => Some(&DEUTERANOPIA),
            Tritanopia => Some(&TRITANOPIA),
            Achromatopsia => Some(&ACHROMATOPSIA),
        }
    }

    /// Simulate how the given color appears in this mode.
    ///
    /// For [`SimulationMode::Normal`], this method returns the color unchanged.
    /// Otherwise, it multiplies the mode's matrix with the color's raw
    /// coordinates and clamps and rounds the result.
    ///
    /// ```
    /// # use chromacount::{Rgb, SimulationMode};
    /// let red = Rgb::new(0xff, 0, 0);
    /// assert_eq!(SimulationMode::Normal.simulate(&red), red);
    /// let seen = SimulationMode::Deuteranopia.simulate(&red);
    /// assert_eq!(seen.to_string(), "#9FB300");
    /// ```
    pub fn simulate(&self, color: &Rgb) -> Rgb {
        match self.matrix() {
            None => *color,
            Some(matrix) => {
                Rgb::from_coordinates(&multiply(matrix, &from_24bit(color.as_ref())))
            }
        }
    }
}

impl Rgb {
    /// Simulate how this color appears in the given mode.
    ///
    /// This method is a convenience wrapper around
    /// [`SimulationMode::simulate`].
    pub fn simulate(&self, mode: SimulationMode) -> Rgb {
        mode.simulate(self)
    }
}

impl std::str::FromStr for SimulationMode {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownNameError::new(s, Self::NAMES))
    }
}

impl std::fmt::Display for SimulationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::SimulationMode::{self, *};
    use crate::Rgb;
    use rand::Rng;

    #[test]
    fn test_primaries() {
        let red = Rgb::new(0xff, 0, 0);
        let green = Rgb::new(0, 0xff, 0);
        let blue = Rgb::new(0, 0, 0xff);

        // 0.625 * 255 is 159.375 and 0.7 * 255 is 178.5, which rounds up.
        assert_eq!(Deuteranopia.simulate(&red), Rgb::new(159, 179, 0));
        assert_eq!(Protanopia.simulate(&red), Rgb::new(145, 142, 0));
        assert_eq!(Tritanopia.simulate(&red), Rgb::new(242, 0, 0));
        assert_eq!(Achromatopsia.simulate(&red), Rgb::new(76, 76, 76));

        assert_eq!(Protanopia.simulate(&green), Rgb::new(110, 113, 62));
        assert_eq!(Deuteranopia.simulate(&green), Rgb::new(96, 77, 77));
        assert_eq!(Tritanopia.simulate(&blue), Rgb::new(0, 145, 134));
        assert_eq!(Achromatopsia.simulate(&blue), Rgb::new(29, 29, 29));
    }

    #[test]
    fn test_invariants() {
        // Rows sum to 1, so white and black stay put.
        for mode in SimulationMode::ALL {
            assert_eq!(mode.simulate(&Rgb::WHITE), Rgb::WHITE, "{} of white", mode);
            assert_eq!(mode.simulate(&Rgb::BLACK), Rgb::BLACK, "{} of black", mode);
        }

        let mut rng = rand::rng();
        for _ in 0..500 {
            let color = Rgb::new(rng.random(), rng.random(), rng.random());
            assert_eq!(Normal.simulate(&color), color);
            assert_eq!(color.simulate(Normal), color);

            let [r, g, b] = *Achromatopsia.simulate(&color).as_ref();
            assert!(r == g && g == b, "{} should simulate as gray", color);
        }
    }

    #[test]
    fn test_names() {
        assert_eq!("deuteranopia".parse(), Ok(Deuteranopia));
        assert_eq!("NORMAL".parse(), Ok(Normal));
        assert!(
            "monochrome".parse::<SimulationMode>().is_err(),
            "unknown mode should not parse"
        );
        assert_eq!(Tritanopia.to_string(), "Tritanopia");
    }
}
