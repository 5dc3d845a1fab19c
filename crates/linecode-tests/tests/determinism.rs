//! Determinism tests: identical requests produce identical PNG bytes.

use linecode_backend_plot::plot_png;
use linecode_backend_signal::encode;
use linecode_cli::input::PlotOverrides;
use linecode_spec::{PlotStyle, Scheme};
use linecode_tests::determinism::verify_determinism;
use linecode_tests::harness::TestHarness;

#[test]
fn plot_png_is_deterministic_for_every_scheme() {
    for scheme in Scheme::ALL {
        let samples = encode("0100111010", scheme, 4.5);
        let result = verify_determinism(
            || {
                plot_png(&samples, 4.5, 400, 200, &PlotStyle::default())
                    .unwrap()
                    .png_data
            },
            3,
        );
        result.assert_deterministic();
    }
}

#[test]
fn reported_hash_matches_file_bytes() {
    let samples = encode("1100", Scheme::Manchester, 2.0);
    let image = plot_png(&samples, 2.0, 160, 80, &PlotStyle::default()).unwrap();
    assert_eq!(image.hash, blake3::hash(&image.png_data).to_hex().to_string());
}

#[test]
fn cli_output_is_reproducible() {
    let harness = TestHarness::new();
    let overrides = |output: &str| PlotOverrides {
        bits: Some("011010".to_string()),
        scheme: Some("differential manchester".to_string()),
        amplitude: Some(2.5),
        width: Some(240),
        height: Some(120),
        output: Some(output.to_string()),
    };

    harness.plot(None, &overrides("first.png"));
    harness.plot(None, &overrides("second.png"));
    assert_eq!(
        harness.read_output("first.png"),
        harness.read_output("second.png")
    );
}

#[test]
fn different_schemes_produce_different_images() {
    let render = |scheme| {
        let samples = encode("1011", scheme, 5.0);
        plot_png(&samples, 5.0, 200, 100, &PlotStyle::default())
            .unwrap()
            .hash
    };
    assert_ne!(render(Scheme::NrzL), render(Scheme::NrzI));
}
