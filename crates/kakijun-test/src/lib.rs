//! kakijun-test - Regression test framework for kakijun
//!
//! Provides the pieces shared by the regression tests of every crate:
//!
//! - [`RegParams`]: indexed value/drawing comparisons with a summary report
//! - [`load_test_drawing`]: fixture drawings from `tests/data/drawings`
//! - [`init_logging`]: routes `tracing` events to the test output
//!
//! # Usage
//!
//! ```ignore
//! use kakijun_test::{RegParams, load_test_drawing};
//!
//! let mut rp = RegParams::new("compare");
//! let drawing = load_test_drawing("ju.strokes").unwrap();
//! rp.compare_values(2.0, drawing.stroke_count() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Fixture format
//!
//! One stroke per line, points as `x,y` separated by whitespace. Blank
//! lines and lines starting with `#` are ignored.
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "display" to print every comparison

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use kakijun_core::Drawing;

/// Load a drawing fixture from the test data directory
///
/// # Arguments
///
/// * `name` - Fixture filename (e.g., "ju.strokes")
pub fn load_test_drawing(name: &str) -> TestResult<Drawing> {
    let path = test_data_path(name);
    let text = std::fs::read_to_string(&path).map_err(|e| TestError::DrawingLoad {
        path: path.clone(),
        message: e.to_string(),
    })?;
    parse_drawing(&path, &text)
}

/// Parse fixture text into a drawing
///
/// `origin` is only used in error messages.
pub fn parse_drawing(origin: &str, text: &str) -> TestResult<Drawing> {
    let mut strokes: Vec<Vec<f32>> = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let parse_err = |message: String| TestError::DrawingParse {
            path: origin.to_string(),
            line: lineno + 1,
            message,
        };
        let mut flat = Vec::new();
        for token in line.split_whitespace() {
            let (x, y) = token
                .split_once(',')
                .ok_or_else(|| parse_err(format!("expected x,y pair, got '{token}'")))?;
            for v in [x, y] {
                flat.push(
                    v.parse::<f32>()
                        .map_err(|e| parse_err(format!("bad coordinate '{v}': {e}")))?,
                );
            }
        }
        strokes.push(flat);
    }
    Drawing::from_flat_strokes(&strokes).map_err(|e| TestError::DrawingLoad {
        path: origin.to_string(),
        message: e.to_string(),
    })
}

/// Install a `tracing` subscriber that writes to the test output
///
/// Safe to call from every test; only the first call installs.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
        .try_init();
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // kakijun-test is at crates/kakijun-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to a test data file
pub fn test_data_path(name: &str) -> String {
    format!("{}/tests/data/drawings/{}", workspace_root(), name)
}
