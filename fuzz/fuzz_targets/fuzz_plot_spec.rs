#![no_main]

use libfuzzer_sys::fuzz_target;
use linecode_backend_plot::plot_ops;
use linecode_backend_signal::encode_named;
use linecode_spec::{validate_plot_spec, PlotSpec};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(spec) = PlotSpec::from_json(text) else {
        return;
    };

    let result = validate_plot_spec(&spec);
    if !result.is_ok() {
        return;
    }

    let samples = encode_named(&spec.bits, &spec.scheme, spec.amplitude_or_nan());
    assert_eq!(
        samples.len() % spec.resolved_scheme().map_or(1, |s| s.samples_per_bit()),
        0
    );
    plot_ops(
        &samples,
        spec.amplitude_or_nan(),
        spec.canvas.width as f64,
        spec.canvas.height as f64,
        &spec.style,
    );
});
