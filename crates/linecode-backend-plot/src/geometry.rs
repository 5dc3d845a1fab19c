//! Pixel geometry of a step-waveform plot.
//!
//! Voltage maps linearly onto the canvas height: `+amplitude` sits at the top
//! edge, 0V at the vertical middle, and `-amplitude` at the bottom edge. Time
//! is divided into equal slots, one per sample.

use serde::Serialize;

/// Most horizontal grid lines drawn. Larger level counts are thinned to a
/// regular stride.
pub const MAX_GRID_LINES: u64 = 1 << 16;

/// A horizontal grid line and its voltage label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridLine {
    /// Pixel row.
    pub y: f64,
    /// True for the 0V line.
    pub emphasized: bool,
    /// Voltage at this line.
    pub volts: f64,
    /// Formatted label, e.g. `"2.5V"`.
    pub label: String,
}

/// Scale and layout for plotting `sample_count` samples on a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlotGeometry {
    sample_count: usize,
    amplitude: f64,
    width: f64,
    height: f64,
}

impl PlotGeometry {
    /// Returns `None` when there is nothing plottable: no samples, an
    /// amplitude that is not a positive finite number, or an empty canvas.
    pub fn new(sample_count: usize, amplitude: f64, width: f64, height: f64) -> Option<Self> {
        if sample_count == 0 {
            return None;
        }
        if !(amplitude.is_finite() && amplitude > 0.0) {
            return None;
        }
        if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
            return None;
        }
        Some(Self {
            sample_count,
            amplitude,
            width,
            height,
        })
    }

    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Pixel row of 0V.
    pub fn mid_y(&self) -> f64 {
        self.height / 2.0
    }

    /// Width of one sample slot.
    pub fn bit_width(&self) -> f64 {
        self.width / self.sample_count as f64
    }

    /// Number of grid divisions: `ceil(2 * amplitude)`.
    pub fn voltage_levels(&self) -> u64 {
        (self.amplitude * 2.0).ceil() as u64
    }

    /// Step between drawn grid lines, in divisions.
    pub fn grid_stride(&self) -> u64 {
        self.voltage_levels().div_ceil(MAX_GRID_LINES).max(1)
    }

    /// Pixel distance between adjacent grid lines.
    pub fn line_spacing(&self) -> f64 {
        self.height / self.voltage_levels() as f64
    }

    /// Maps a voltage to its pixel row.
    pub fn voltage_to_y(&self, volts: f64) -> f64 {
        self.mid_y() - volts * (self.height / 2.0) / self.amplitude
    }

    /// Horizontal grid lines from top to bottom.
    ///
    /// There are `voltage_levels() + 1` lines. With an odd level count no
    /// line falls exactly on 0V, so none is emphasized. Past
    /// [`MAX_GRID_LINES`] only every `grid_stride()`-th line is kept, plus
    /// the bottom edge.
    pub fn grid_lines(&self) -> Vec<GridLine> {
        let levels = self.voltage_levels();
        let half = levels as f64 / 2.0;
        let spacing = self.line_spacing();
        let volts_per_level = self.amplitude / half;
        let stride = self.grid_stride();

        (0..=levels)
            .step_by(stride as usize)
            .chain((levels % stride != 0).then_some(levels))
            .map(|i| {
                let offset = i as f64 - half;
                let volts = -offset * volts_per_level;
                GridLine {
                    y: self.mid_y() + offset * spacing,
                    emphasized: offset == 0.0,
                    volts,
                    label: format_volts(volts),
                }
            })
            .collect()
    }

    /// x positions of the vertical grid lines, one per sample slot.
    pub fn vertical_lines(&self) -> Vec<f64> {
        let bit_width = self.bit_width();
        (0..self.sample_count)
            .map(|k| k as f64 * bit_width)
            .filter(|x| *x < self.width)
            .collect()
    }

    /// Vertices of the step trace for `samples`.
    ///
    /// The path starts at the left edge on the first sample's level, runs
    /// flat across each slot, and drops or rises at the slot boundary only
    /// where the next sample differs.
    pub fn trace_points(&self, samples: &[f64]) -> Vec<(f64, f64)> {
        let Some(&first) = samples.first() else {
            return Vec::new();
        };
        let bit_width = self.bit_width();
        let mut points = Vec::with_capacity(samples.len() * 2 + 1);
        points.push((0.0, self.voltage_to_y(first)));

        for (i, &sample) in samples.iter().enumerate() {
            let x = i as f64 * bit_width + bit_width;
            points.push((x, self.voltage_to_y(sample)));
            if let Some(&next) = samples.get(i + 1) {
                if next != sample {
                    points.push((x, self.voltage_to_y(next)));
                }
            }
        }
        points
    }
}

/// Formats a grid voltage with one decimal and a trailing `V`.
pub fn format_volts(volts: f64) -> String {
    let label = format!("{:.1}V", volts);
    if label == "-0.0V" {
        "0.0V".to_string()
    } else {
        label
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_nothing_plottable() {
        assert!(PlotGeometry::new(0, 5.0, 100.0, 100.0).is_none());
        assert!(PlotGeometry::new(2, 0.0, 100.0, 100.0).is_none());
        assert!(PlotGeometry::new(2, -1.0, 100.0, 100.0).is_none());
        assert!(PlotGeometry::new(2, f64::NAN, 100.0, 100.0).is_none());
        assert!(PlotGeometry::new(2, f64::INFINITY, 100.0, 100.0).is_none());
        assert!(PlotGeometry::new(2, 5.0, 0.0, 100.0).is_none());
        assert!(PlotGeometry::new(2, 5.0, 100.0, f64::NAN).is_none());
    }

    #[test]
    fn test_large_amplitude_thins_grid() {
        // ceil(2 * 40000) = 80000 divisions, thinned to every second one.
        let g = PlotGeometry::new(2, 40000.0, 800.0, 400.0).unwrap();
        assert_eq!(g.voltage_levels(), 80000);
        assert_eq!(g.grid_stride(), 2);

        let lines = g.grid_lines();
        assert_eq!(lines.len(), 40001);
        assert!(lines[0].y.abs() < 1e-6);
        assert_eq!(lines[20000].y, 200.0);
        assert!(lines[20000].emphasized);
        assert!((lines[40000].y - 400.0).abs() < 1e-6);
        assert_eq!(g.trace_points(&[40000.0, -40000.0]).len(), 4);
    }

    #[test]
    fn test_thinned_grid_keeps_bottom_edge() {
        // 3 * MAX_GRID_LINES divisions with stride 4 leaves a remainder.
        let amplitude = (3 * MAX_GRID_LINES) as f64 / 2.0;
        let g = PlotGeometry::new(1, amplitude, 100.0, 100.0).unwrap();
        assert_eq!(g.grid_stride(), 3);
        let g = PlotGeometry::new(1, amplitude + 1.0, 100.0, 100.0).unwrap();
        assert_eq!(g.grid_stride(), 4);
        let lines = g.grid_lines();
        assert!(lines.len() as u64 <= MAX_GRID_LINES + 2);
        let (first, last) = (&lines[0], &lines[lines.len() - 1]);
        assert!(first.y.abs() < 1e-6);
        assert!((last.y - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_small_amplitude_is_not_thinned() {
        let g = PlotGeometry::new(2, 5.0, 100.0, 100.0).unwrap();
        assert_eq!(g.grid_stride(), 1);
    }

    #[test]
    fn test_scale_mapping() {
        let g = PlotGeometry::new(2, 5.0, 100.0, 100.0).unwrap();
        assert_eq!(g.mid_y(), 50.0);
        assert_eq!(g.bit_width(), 50.0);
        assert_eq!(g.voltage_to_y(5.0), 0.0);
        assert_eq!(g.voltage_to_y(0.0), 50.0);
        assert_eq!(g.voltage_to_y(-5.0), 100.0);
    }

    #[test]
    fn test_grid_lines_even_levels() {
        let g = PlotGeometry::new(2, 5.0, 100.0, 100.0).unwrap();
        assert_eq!(g.voltage_levels(), 10);
        assert_eq!(g.line_spacing(), 10.0);

        let lines = g.grid_lines();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0].y, 0.0);
        assert_eq!(lines[0].label, "5.0V");
        assert_eq!(lines[5].y, 50.0);
        assert!(lines[5].emphasized);
        assert_eq!(lines[5].label, "0.0V");
        assert_eq!(lines[10].y, 100.0);
        assert_eq!(lines[10].label, "-5.0V");
        assert_eq!(lines.iter().filter(|l| l.emphasized).count(), 1);
    }

    #[test]
    fn test_grid_lines_odd_levels_have_no_center() {
        // ceil(2 * 2.5) = 5 divisions, none on 0V.
        let g = PlotGeometry::new(4, 2.5, 200.0, 100.0).unwrap();
        let lines = g.grid_lines();
        assert_eq!(lines.len(), 6);
        assert!(lines.iter().all(|l| !l.emphasized));
        assert_eq!(lines[0].label, "2.5V");
        assert_eq!(lines[2].label, "0.5V");
        assert_eq!(lines[3].label, "-0.5V");
    }

    #[test]
    fn test_grid_labels_fractional_amplitude() {
        // ceil(0.6) = 1 division: top at +0.3V, bottom at -0.3V.
        let g = PlotGeometry::new(1, 0.3, 100.0, 100.0).unwrap();
        let labels: Vec<String> = g.grid_lines().into_iter().map(|l| l.label).collect();
        assert_eq!(labels, vec!["0.3V", "-0.3V"]);
    }

    #[test]
    fn test_vertical_lines() {
        let g = PlotGeometry::new(4, 1.0, 100.0, 50.0).unwrap();
        assert_eq!(g.vertical_lines(), vec![0.0, 25.0, 50.0, 75.0]);

        // Slot boundaries that are not exact still yield one line per slot.
        let g = PlotGeometry::new(3, 1.0, 100.0, 50.0).unwrap();
        assert_eq!(g.vertical_lines().len(), 3);
    }

    #[test]
    fn test_trace_points_two_levels() {
        let g = PlotGeometry::new(2, 5.0, 100.0, 100.0).unwrap();
        assert_eq!(
            g.trace_points(&[5.0, -5.0]),
            vec![(0.0, 0.0), (50.0, 0.0), (50.0, 100.0), (100.0, 100.0)]
        );
    }

    #[test]
    fn test_trace_points_skip_equal_neighbors() {
        let g = PlotGeometry::new(3, 1.0, 30.0, 20.0).unwrap();
        assert_eq!(
            g.trace_points(&[1.0, 1.0, 0.0]),
            vec![
                (0.0, 0.0),
                (10.0, 0.0),
                (20.0, 0.0),
                (20.0, 10.0),
                (30.0, 10.0)
            ]
        );
        assert!(g.trace_points(&[]).is_empty());
    }

    #[test]
    fn test_format_volts() {
        assert_eq!(format_volts(2.5), "2.5V");
        assert_eq!(format_volts(-0.0), "0.0V");
        assert_eq!(format_volts(-1.25e-17), "0.0V");
        assert_eq!(format_volts(-3.0), "-3.0V");
    }
}
