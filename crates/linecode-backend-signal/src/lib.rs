//! LineCode Signal Backend
//!
//! This crate turns bit strings into voltage sample sequences under the six
//! classic line-encoding schemes:
//!
//! - **NRZ-L** - level follows the bit
//! - **NRZ-I** - level inverts on every one
//! - **Bipolar AMI** - ones alternate polarity, zeros sit at 0V
//! - **Pseudoternary** - zeros alternate polarity, ones sit at 0V
//! - **Manchester** - two opposite half-periods keyed by the bit
//! - **Differential Manchester** - two opposite half-periods, inverted on zeros
//!
//! # Determinism
//!
//! Encoding is a pure function of its inputs. Transition history is seeded to
//! the low level at the start of every call and never outlives it.
//!
//! # Example
//!
//! ```
//! use linecode_backend_signal::{encode, EncodedSignal};
//! use linecode_spec::Scheme;
//!
//! let samples = encode("101", Scheme::BipolarAmi, 5.0);
//! assert_eq!(samples, vec![5.0, 0.0, -5.0]);
//!
//! let signal = EncodedSignal::encode("1011", Scheme::Manchester, 5.0);
//! assert_eq!(signal.stats().samples, 8);
//! ```

pub mod encoder;
pub mod signal;

pub use encoder::{encode, encode_named, step, Emit, EncoderState, LineEncoder};
pub use signal::{EncodedSignal, SignalStats};
