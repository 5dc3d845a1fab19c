//! Encoded signals and their summary statistics.

use linecode_spec::Scheme;
use serde::Serialize;

use crate::encoder::encode;

/// A sample sequence together with the parameters that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EncodedSignal {
    /// Scheme applied.
    pub scheme: Scheme,
    /// Peak level.
    pub amplitude: f64,
    /// Samples in time order.
    pub samples: Vec<f64>,
}

impl EncodedSignal {
    /// Encodes `bits` and keeps the parameters alongside the samples.
    pub fn encode(bits: &str, scheme: Scheme, amplitude: f64) -> Self {
        Self {
            scheme,
            amplitude,
            samples: encode(bits, scheme, amplitude),
        }
    }

    /// Number of input bits the samples represent.
    pub fn bit_count(&self) -> usize {
        self.samples.len() / self.samples_per_bit()
    }

    /// Samples emitted per input bit.
    pub fn samples_per_bit(&self) -> usize {
        self.scheme.samples_per_bit()
    }

    /// Returns true if there is nothing to plot.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Computes summary statistics over the samples.
    pub fn stats(&self) -> SignalStats {
        SignalStats::from_samples(&self.samples)
    }
}

/// Level and transition counts for a sample sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SignalStats {
    /// Total samples.
    pub samples: usize,
    /// Adjacent sample pairs that differ.
    pub transitions: usize,
    /// Samples above zero.
    pub positive: usize,
    /// Samples at zero.
    pub zero: usize,
    /// Samples below zero.
    pub negative: usize,
    /// Mean level; zero for an empty sequence.
    pub dc_level: f64,
    /// Longest stretch of identical consecutive samples.
    pub longest_run: usize,
}

impl SignalStats {
    /// Computes statistics for `samples`.
    pub fn from_samples(samples: &[f64]) -> Self {
        let mut stats = SignalStats {
            samples: samples.len(),
            ..Default::default()
        };

        let Some((&first, rest)) = samples.split_first() else {
            return stats;
        };

        for &s in samples {
            if s > 0.0 {
                stats.positive += 1;
            } else if s < 0.0 {
                stats.negative += 1;
            } else {
                stats.zero += 1;
            }
        }

        let mut current = first;
        let mut run = 1usize;
        stats.longest_run = 1;
        for &s in rest {
            if s == current {
                run += 1;
            } else {
                stats.transitions += 1;
                current = s;
                run = 1;
            }
            stats.longest_run = stats.longest_run.max(run);
        }

        stats.dc_level = samples.iter().sum::<f64>() / samples.len() as f64;
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_signal() {
        let signal = EncodedSignal::encode("", Scheme::Manchester, 5.0);
        assert!(signal.is_empty());
        assert_eq!(signal.bit_count(), 0);
        assert_eq!(signal.stats(), SignalStats::default());
    }

    #[test]
    fn test_bit_count_for_split_schemes() {
        let signal = EncodedSignal::encode("1011", Scheme::DifferentialManchester, 5.0);
        assert_eq!(signal.samples.len(), 8);
        assert_eq!(signal.samples_per_bit(), 2);
        assert_eq!(signal.bit_count(), 4);
    }

    #[test]
    fn test_ami_stats() {
        let signal = EncodedSignal::encode("11001", Scheme::BipolarAmi, 5.0);
        // [5, -5, 0, 0, 5]
        let stats = signal.stats();
        assert_eq!(
            stats,
            SignalStats {
                samples: 5,
                transitions: 3,
                positive: 2,
                zero: 2,
                negative: 1,
                dc_level: 1.0,
                longest_run: 2,
            }
        );
    }

    #[test]
    fn test_manchester_is_dc_balanced() {
        let stats = EncodedSignal::encode("1110001", Scheme::Manchester, 3.0).stats();
        assert_eq!(stats.dc_level, 0.0);
        assert_eq!(stats.positive, stats.negative);
        assert!(stats.longest_run <= 2);
    }

    #[test]
    fn test_nrz_l_long_run() {
        let stats = EncodedSignal::encode("0000", Scheme::NrzL, 1.0).stats();
        assert_eq!(stats.transitions, 0);
        assert_eq!(stats.longest_run, 4);
        assert_eq!(stats.dc_level, -1.0);
    }

    #[test]
    fn test_serializes_scheme_as_snake_case() {
        let signal = EncodedSignal::encode("1", Scheme::NrzI, 5.0);
        let json = serde_json::to_value(&signal).unwrap();
        assert_eq!(json["scheme"], "nrz_i");
        assert_eq!(json["samples"], serde_json::json!([5.0]));
    }
}
