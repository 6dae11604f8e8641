//! Regression test parameters and operations

use crate::error::TestError;
use kakijun_core::Drawing;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Check values, report only failures (default)
    #[default]
    Compare,
    /// Check values and print every comparison
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// This structure tracks the state of a regression test, including
/// the test name, current index, mode, and success status.
pub struct RegParams {
    /// Name of the test (e.g., "resample")
    pub test_name: String,
    /// Current test index (incremented before each test)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// The mode is taken from the `REGTEST_MODE` environment variable.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise. A NaN
    /// `actual` never matches.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();
        if self.display() {
            eprintln!(
                "  [{:02}] expected = {}, actual = {}, delta = {}",
                self.index, expected, actual, delta
            );
        }
        if diff <= delta {
            return true;
        }
        let err = TestError::ValueMismatch {
            index: self.index,
            expected,
            actual,
            delta,
        };
        self.record(format!("Failure in {}_reg: {}", self.test_name, err));
        false
    }

    /// Check a condition
    ///
    /// Counts as one indexed comparison; `what` names the condition in
    /// the failure report.
    pub fn compare_true(&mut self, condition: bool, what: &str) -> bool {
        self.index += 1;
        if !condition {
            self.record(format!(
                "Failure in {}_reg: condition at index {} does not hold: {}",
                self.test_name, self.index, what
            ));
        }
        condition
    }

    /// Compare two strings for exact equality
    pub fn compare_strings(&mut self, expected: &str, actual: &str) -> bool {
        self.index += 1;
        if expected == actual {
            return true;
        }
        self.record(format!(
            "Failure in {}_reg: string comparison for index {}\n\
             expected = {:?}\n\
             actual   = {:?}",
            self.test_name, self.index, expected, actual
        ));
        false
    }

    /// Compare two drawings point by point
    ///
    /// Drawings match when they have the same stroke structure and every
    /// coordinate differs by at most `delta`.
    pub fn compare_drawings(&mut self, expected: &Drawing, actual: &Drawing, delta: f32) -> bool {
        self.index += 1;
        let shape = |d: &Drawing| d.iter().map(|s| s.len()).collect::<Vec<_>>();
        if shape(expected) != shape(actual) {
            self.record(format!(
                "Failure in {}_reg: drawing comparison for index {} - structure mismatch\n\
                 expected strokes = {:?}, actual strokes = {:?}",
                self.test_name,
                self.index,
                shape(expected),
                shape(actual)
            ));
            return false;
        }
        for (si, (se, sa)) in expected.iter().zip(actual.iter()).enumerate() {
            for (pi, ((ex, ey), (ax, ay))) in se.iter().zip(sa.iter()).enumerate() {
                if (ex - ax).abs() > delta || (ey - ay).abs() > delta {
                    self.record(format!(
                        "Failure in {}_reg: drawing comparison for index {} - \
                         stroke {} point {}: expected ({}, {}), actual ({}, {})",
                        self.test_name, self.index, si, pi, ex, ey, ax, ay
                    ));
                    return false;
                }
            }
        }
        true
    }

    fn record(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Finish the test and report results
    ///
    /// # Returns
    ///
    /// `true` if all comparisons passed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all tests have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
