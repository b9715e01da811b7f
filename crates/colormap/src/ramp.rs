//! Color ramps and the multi-stop interpolation engine.

/// RGB color with channels in 0..=255.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// RGB color plus a fractional alpha in [0, 1].
///
/// Alpha stays fractional here; quantization to a byte happens when the
/// pixel buffer is assembled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f32,
}

impl Rgba {
    pub const TRANSPARENT: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        alpha: 0.0,
    };

    const fn opaque(color: Rgb) -> Self {
        Self {
            r: color.r,
            g: color.g,
            b: color.b,
            alpha: 1.0,
        }
    }
}

/// A color stop: ramp-domain value mapped to an RGB color.
///
/// Stops in a table are strictly ascending by value; the first and last
/// stops are the ramp's domain bounds.
#[derive(Debug, Clone, Copy)]
pub struct ColorStop {
    pub value: f64,
    pub color: Rgb,
}

impl ColorStop {
    pub const fn new(value: f64, r: u8, g: u8, b: u8) -> Self {
        Self {
            value,
            color: Rgb::new(r, g, b),
        }
    }
}

/// Available color ramps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ramp {
    /// Absolute suitability, 0–100 %: gray → orange → yellow → green.
    Suitability,
    /// Scenario-minus-baseline change, 0–60 pp: white → blue → indigo → purple.
    Difference,
}

// Suitability stops match the published web legend.
const SUITABILITY_STOPS: &[ColorStop] = &[
    ColorStop::new(0.0, 215, 212, 213),
    ColorStop::new(20.0, 245, 144, 83),
    ColorStop::new(40.0, 254, 223, 154),
    ColorStop::new(60.0, 219, 240, 158),
    ColorStop::new(80.0, 138, 204, 98),
    ColorStop::new(100.0, 26, 150, 65),
];

const DIFFERENCE_STOPS: &[ColorStop] = &[
    ColorStop::new(0.0, 255, 255, 255),
    ColorStop::new(5.0, 218, 232, 245),
    ColorStop::new(10.0, 158, 202, 225),
    ColorStop::new(20.0, 107, 174, 214),
    ColorStop::new(30.0, 66, 146, 198),
    ColorStop::new(40.0, 92, 83, 190),
    ColorStop::new(50.0, 106, 61, 154),
    ColorStop::new(60.0, 84, 39, 143),
];

impl Ramp {
    /// All ramps, for UI combo boxes.
    pub const ALL: &[Ramp] = &[Self::Suitability, Self::Difference];

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Suitability => "Suitability (%)",
            Self::Difference => "Change (pp)",
        }
    }

    /// Ordered control points.
    pub fn stops(&self) -> &'static [ColorStop] {
        match self {
            Self::Suitability => SUITABILITY_STOPS,
            Self::Difference => DIFFERENCE_STOPS,
        }
    }

    /// Domain covered by the stops, (min, max).
    pub fn domain(&self) -> (f64, f64) {
        let stops = self.stops();
        (stops[0].value, stops[stops.len() - 1].value)
    }

    /// Width of the near-zero band where alpha ramps up from transparent.
    ///
    /// Suitability fades over [0, 20) at 0.02 per unit; the difference ramp
    /// fades over [0, 5) so a zero change disappears instead of painting
    /// the ocean white.
    fn fade(&self) -> (f64, f32) {
        match self {
            Self::Suitability => (20.0, 0.02),
            Self::Difference => (5.0, 0.2),
        }
    }

    /// Alpha for a domain value: 1.0 outside the near-zero fade band.
    pub fn alpha(&self, value: f64) -> f32 {
        let (band, slope) = self.fade();
        if value < band {
            slope * value.max(0.0) as f32
        } else {
            1.0
        }
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

fn lerp_color(c1: Rgb, c2: Rgb, t: f64) -> Rgb {
    Rgb::new(
        lerp(c1.r as f64, c2.r as f64, t).round() as u8,
        lerp(c1.g as f64, c2.g as f64, t).round() as u8,
        lerp(c1.b as f64, c2.b as f64, t).round() as u8,
    )
}

/// Evaluate a ramp at a domain value.
///
/// The value is clamped to the ramp's domain, the bracketing stop pair is
/// found and each channel is interpolated linearly by the fractional
/// position between them. Alpha comes from the ramp's near-zero fade band.
/// A value beyond the last stop returns the final stop's color at full
/// alpha.
pub fn evaluate(ramp: Ramp, value: f64) -> Rgba {
    let stops = ramp.stops();
    let (min, max) = ramp.domain();
    let v = value.clamp(min, max);
    let alpha = ramp.alpha(v);

    for i in 1..stops.len() {
        if v <= stops[i].value {
            let span = stops[i].value - stops[i - 1].value;
            let t = (v - stops[i - 1].value) / span;
            let color = lerp_color(stops[i - 1].color, stops[i].color, t);
            return Rgba {
                r: color.r,
                g: color.g,
                b: color.b,
                alpha,
            };
        }
    }

    Rgba::opaque(stops[stops.len() - 1].color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stops_strictly_ascending() {
        for &ramp in Ramp::ALL {
            let stops = ramp.stops();
            for pair in stops.windows(2) {
                assert!(pair[0].value < pair[1].value, "{:?}", ramp);
            }
        }
    }

    #[test]
    fn exact_stop_values_return_stop_colors() {
        for &ramp in Ramp::ALL {
            for stop in ramp.stops() {
                let c = evaluate(ramp, stop.value);
                assert_eq!((c.r, c.g, c.b), (stop.color.r, stop.color.g, stop.color.b));
            }
        }
    }

    #[test]
    fn midpoint_of_first_suitability_segment() {
        // (0, [215,212,213]) .. (20, [245,144,83]), v=10 -> t=0.5
        let c = evaluate(Ramp::Suitability, 10.0);
        assert_eq!((c.r, c.g, c.b), (230, 178, 148));
        assert!((c.alpha - 0.2).abs() < 1e-6);
    }

    #[test]
    fn suitability_alpha_band() {
        for v in 0..20 {
            let c = evaluate(Ramp::Suitability, v as f64);
            assert!((c.alpha - 0.02 * v as f32).abs() < 1e-6, "v={}", v);
        }
        for v in [20.0, 50.0, 100.0] {
            assert_eq!(evaluate(Ramp::Suitability, v).alpha, 1.0);
        }
    }

    #[test]
    fn difference_alpha_band() {
        let c = evaluate(Ramp::Difference, 2.5);
        assert!((c.alpha - 0.5).abs() < 1e-6);
        assert_eq!(evaluate(Ramp::Difference, 5.0).alpha, 1.0);
        assert_eq!(evaluate(Ramp::Difference, 60.0).alpha, 1.0);
    }

    #[test]
    fn clamps_outside_domain() {
        let below = evaluate(Ramp::Suitability, -10.0);
        assert_eq!((below.r, below.g, below.b), (215, 212, 213));

        let above = evaluate(Ramp::Suitability, 250.0);
        assert_eq!((above.r, above.g, above.b), (26, 150, 65));
        assert_eq!(above.alpha, 1.0);

        let above = evaluate(Ramp::Difference, 75.0);
        assert_eq!((above.r, above.g, above.b), (84, 39, 143));
    }

    #[test]
    fn channels_monotonic_between_stops() {
        for &ramp in Ramp::ALL {
            for pair in ramp.stops().windows(2) {
                let (lo, hi) = (pair[0], pair[1]);
                let mut prev = evaluate(ramp, lo.value);
                for step in 1..=16 {
                    let v = lo.value + (hi.value - lo.value) * step as f64 / 16.0;
                    let cur = evaluate(ramp, v);
                    for (p, c, a, b) in [
                        (prev.r, cur.r, lo.color.r, hi.color.r),
                        (prev.g, cur.g, lo.color.g, hi.color.g),
                        (prev.b, cur.b, lo.color.b, hi.color.b),
                    ] {
                        if a <= b {
                            assert!(c >= p, "{:?} segment {}..{}", ramp, lo.value, hi.value);
                        } else {
                            assert!(c <= p, "{:?} segment {}..{}", ramp, lo.value, hi.value);
                        }
                    }
                    prev = cur;
                }
            }
        }
    }

    #[test]
    fn domains() {
        assert_eq!(Ramp::Suitability.domain(), (0.0, 100.0));
        assert_eq!(Ramp::Difference.domain(), (0.0, 60.0));
    }
}
