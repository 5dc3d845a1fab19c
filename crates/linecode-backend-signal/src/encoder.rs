//! Line encoder.
//!
//! Every scheme is a step function over an [`EncoderState`]: it takes the
//! state and one input character, and returns the samples that character
//! produces. Schemes that test for `'1'` treat any other character as a zero;
//! schemes that test for `'0'` treat any other character as a one.

use linecode_spec::Scheme;
use tracing::{debug, warn};

/// Transition history carried across bits within one encode call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EncoderState {
    /// The most recent non-zero level.
    pub last: f64,
}

impl EncoderState {
    /// Initial state for a given amplitude: the low level.
    pub fn seeded(amplitude: f64) -> Self {
        Self { last: -amplitude }
    }

    fn invert(&mut self) -> f64 {
        self.last = -self.last;
        self.last
    }
}

/// The samples produced for one input bit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Emit {
    /// One full-period sample.
    Single(f64),
    /// Two half-period samples, first half first.
    Split(f64, f64),
}

impl Emit {
    /// Number of samples carried.
    pub fn sample_count(&self) -> usize {
        match self {
            Emit::Single(_) => 1,
            Emit::Split(_, _) => 2,
        }
    }

    /// Appends the samples to `out` in time order.
    pub fn push_into(self, out: &mut Vec<f64>) {
        match self {
            Emit::Single(v) => out.push(v),
            Emit::Split(first, second) => {
                out.push(first);
                out.push(second);
            }
        }
    }
}

/// Advances `state` by one character under `scheme`.
pub fn step(scheme: Scheme, amplitude: f64, state: &mut EncoderState, bit: char) -> Emit {
    match scheme {
        Scheme::NrzL => {
            if bit == '1' {
                Emit::Single(amplitude)
            } else {
                Emit::Single(-amplitude)
            }
        }
        Scheme::NrzI => {
            if bit == '1' {
                state.invert();
            }
            Emit::Single(state.last)
        }
        Scheme::BipolarAmi => {
            if bit == '1' {
                Emit::Single(state.invert())
            } else {
                Emit::Single(0.0)
            }
        }
        Scheme::Pseudoternary => {
            if bit == '0' {
                Emit::Single(state.invert())
            } else {
                Emit::Single(0.0)
            }
        }
        Scheme::Manchester => {
            if bit == '1' {
                Emit::Split(amplitude, -amplitude)
            } else {
                Emit::Split(-amplitude, amplitude)
            }
        }
        Scheme::DifferentialManchester => {
            if bit == '0' {
                state.invert();
            }
            Emit::Split(state.last, -state.last)
        }
    }
}

/// A streaming encoder for one scheme and amplitude.
#[derive(Debug, Clone)]
pub struct LineEncoder {
    scheme: Scheme,
    amplitude: f64,
    state: EncoderState,
}

impl LineEncoder {
    /// Creates an encoder with freshly seeded state.
    pub fn new(scheme: Scheme, amplitude: f64) -> Self {
        Self {
            scheme,
            amplitude,
            state: EncoderState::seeded(amplitude),
        }
    }

    /// Encodes one character.
    pub fn step(&mut self, bit: char) -> Emit {
        step(self.scheme, self.amplitude, &mut self.state, bit)
    }

    /// Re-seeds the transition history.
    pub fn reset(&mut self) {
        self.state = EncoderState::seeded(self.amplitude);
    }

    /// The scheme this encoder applies.
    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// The peak level.
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Current transition history.
    pub fn state(&self) -> EncoderState {
        self.state
    }

    /// Encodes a whole string from the current state.
    pub fn encode_str(&mut self, bits: &str) -> Vec<f64> {
        let mut out = Vec::with_capacity(bits.len() * self.scheme.samples_per_bit());
        for bit in bits.chars() {
            self.step(bit).push_into(&mut out);
        }
        out
    }
}

/// Encodes `bits` under `scheme`, starting from a fresh state.
///
/// ```
/// use linecode_backend_signal::encode;
/// use linecode_spec::Scheme;
///
/// assert_eq!(encode("1011", Scheme::NrzI, 5.0), vec![5.0, 5.0, -5.0, 5.0]);
/// assert!(encode("", Scheme::Manchester, 5.0).is_empty());
/// ```
pub fn encode(bits: &str, scheme: Scheme, amplitude: f64) -> Vec<f64> {
    let samples = LineEncoder::new(scheme, amplitude).encode_str(bits);
    let stray = bits.chars().filter(|c| !matches!(c, '0' | '1')).count();
    if stray > 0 {
        warn!(
            scheme = scheme.as_str(),
            stray, "non-binary characters encoded via fall-through branch"
        );
    }
    debug!(
        scheme = scheme.as_str(),
        bits = bits.chars().count(),
        samples = samples.len(),
        "encoded bit string"
    );
    samples
}

/// Encodes `bits` under a scheme given by name.
///
/// An unrecognized name yields an empty sequence rather than an error, so
/// nothing gets plotted.
pub fn encode_named(bits: &str, scheme_name: &str, amplitude: f64) -> Vec<f64> {
    match Scheme::from_name(scheme_name) {
        Some(scheme) => encode(bits, scheme, amplitude),
        None => {
            warn!(scheme = scheme_name, "unknown scheme, producing no samples");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const V: f64 = 5.0;

    #[test]
    fn test_nrz_l() {
        assert_eq!(encode("1011", Scheme::NrzL, V), vec![5.0, -5.0, 5.0, 5.0]);
    }

    #[test]
    fn test_nrz_i() {
        assert_eq!(encode("1011", Scheme::NrzI, V), vec![5.0, 5.0, -5.0, 5.0]);
        // Leading zeros hold the seeded low level.
        assert_eq!(encode("001", Scheme::NrzI, V), vec![-5.0, -5.0, 5.0]);
    }

    #[test]
    fn test_bipolar_ami() {
        assert_eq!(encode("101", Scheme::BipolarAmi, V), vec![5.0, 0.0, -5.0]);
        assert_eq!(
            encode("1101", Scheme::BipolarAmi, V),
            vec![5.0, -5.0, 0.0, 5.0]
        );
    }

    #[test]
    fn test_pseudoternary() {
        assert_eq!(
            encode("0100", Scheme::Pseudoternary, V),
            vec![5.0, 0.0, -5.0, 5.0]
        );
    }

    #[test]
    fn test_manchester() {
        assert_eq!(
            encode("11", Scheme::Manchester, V),
            vec![5.0, -5.0, 5.0, -5.0]
        );
        assert_eq!(
            encode("10", Scheme::Manchester, V),
            vec![5.0, -5.0, -5.0, 5.0]
        );
    }

    #[test]
    fn test_differential_manchester() {
        // '0' inverts before emitting, '1' keeps the previous polarity.
        assert_eq!(
            encode("01", Scheme::DifferentialManchester, V),
            vec![5.0, -5.0, 5.0, -5.0]
        );
        assert_eq!(
            encode("10", Scheme::DifferentialManchester, V),
            vec![-5.0, 5.0, 5.0, -5.0]
        );
    }

    #[test]
    fn test_empty_input_for_every_scheme() {
        for scheme in Scheme::ALL {
            assert!(encode("", scheme, V).is_empty(), "{}", scheme);
        }
    }

    #[test]
    fn test_non_binary_falls_through() {
        // Schemes testing '1' read 'x' as a zero.
        assert_eq!(encode("x", Scheme::NrzL, V), vec![-5.0]);
        assert_eq!(encode("x", Scheme::BipolarAmi, V), vec![0.0]);
        assert_eq!(encode("x", Scheme::Manchester, V), vec![-5.0, 5.0]);
        // Schemes testing '0' read 'x' as a one.
        assert_eq!(encode("x", Scheme::Pseudoternary, V), vec![0.0]);
        assert_eq!(
            encode("x", Scheme::DifferentialManchester, V),
            vec![-5.0, 5.0]
        );
    }

    #[test]
    fn test_state_is_reseeded_per_call() {
        let first = encode("1", Scheme::NrzI, V);
        let second = encode("1", Scheme::NrzI, V);
        assert_eq!(first, second);
    }

    #[test]
    fn test_encoder_reset() {
        let mut encoder = LineEncoder::new(Scheme::BipolarAmi, V);
        assert_eq!(encoder.step('1'), Emit::Single(5.0));
        assert_eq!(encoder.step('1'), Emit::Single(-5.0));
        encoder.reset();
        assert_eq!(encoder.state(), EncoderState::seeded(V));
        assert_eq!(encoder.step('1'), Emit::Single(5.0));
    }

    #[test]
    fn test_encoder_continues_across_chunks() {
        let mut encoder = LineEncoder::new(Scheme::NrzI, V);
        let mut samples = encoder.encode_str("10");
        samples.extend(encoder.encode_str("11"));
        assert_eq!(samples, encode("1011", Scheme::NrzI, V));
    }

    #[test]
    fn test_encode_named() {
        assert_eq!(
            encode_named("101", "Bipolar AMI", V),
            vec![5.0, 0.0, -5.0]
        );
        assert!(encode_named("101", "4B5B", V).is_empty());
    }

    #[test]
    fn test_emit_sample_count_matches_scheme() {
        for scheme in Scheme::ALL {
            let mut encoder = LineEncoder::new(scheme, V);
            assert_eq!(encoder.step('1').sample_count(), scheme.samples_per_bit());
        }
    }
}
