use std::sync::LazyLock;

use crate::error::{Result, ZoomError};

static DEFAULT_TABLE: LazyLock<CellSizeTable> = LazyLock::new(CellSizeTable::default);

/// Clustering grid cell size in pixels for a zoom level.
///
/// | zoom level | cell size |
/// |---|---|
/// | below 13 | 88 |
/// | 13 to 15 | 64 |
/// | 16 to 18 | 32 |
/// | 19 and up | 16 |
///
/// Takes a zoom level, not a scale; apply [`zoom_level`](super::zoom_level)
/// first. Negative or non-finite levels get the coarsest size, 88.
///
/// The table is a step function over thresholds, so fractional levels take
/// the size of the threshold below them: 15.5 gives 64, 18.5 gives 32, and
/// `f64::MAX` gives 16. A closed-range match that only lists whole levels
/// would send those gaps to the 88 default instead. [`zoom_level`](super::zoom_level)
/// only returns whole levels, so the two readings agree on its output.
#[must_use]
pub fn cell_size(zoom_level: f64) -> f64 {
    DEFAULT_TABLE.cell_size(zoom_level)
}

/// One threshold of a [`CellSizeTable`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellSizeStep {
    /// Lowest zoom level this step applies to.
    pub min_zoom_level: f64,
    /// Cell size in pixels from `min_zoom_level` up to the next step.
    pub cell_size: f64,
}

impl CellSizeStep {
    #[must_use]
    pub const fn new(min_zoom_level: f64, cell_size: f64) -> Self {
        Self {
            min_zoom_level,
            cell_size,
        }
    }
}

/// Step function from zoom level to clustering cell size.
///
/// Levels below the first step use `base`. Each step covers the levels from
/// its threshold up to the next step's threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct CellSizeTable {
    base: f64,
    steps: Vec<CellSizeStep>,
}

impl CellSizeTable {
    /// Creates a table.
    ///
    /// # Errors
    ///
    /// Returns an error if any cell size is not finite and positive, or if
    /// the step thresholds are not finite and strictly ascending.
    pub fn new(base: f64, steps: Vec<CellSizeStep>) -> Result<Self> {
        if !is_valid_size(base) {
            return Err(invalid(format!("base cell size {base} must be finite and positive")));
        }
        for step in &steps {
            if !is_valid_size(step.cell_size) {
                return Err(invalid(format!(
                    "cell size {} at zoom level {} must be finite and positive",
                    step.cell_size, step.min_zoom_level
                )));
            }
            if !step.min_zoom_level.is_finite() {
                return Err(invalid(format!(
                    "zoom level threshold {} must be finite",
                    step.min_zoom_level
                )));
            }
        }
        if let Some(pair) = steps
            .windows(2)
            .find(|pair| pair[0].min_zoom_level >= pair[1].min_zoom_level)
        {
            return Err(invalid(format!(
                "zoom level thresholds must ascend, got {} then {}",
                pair[0].min_zoom_level, pair[1].min_zoom_level
            )));
        }
        Ok(Self { base, steps })
    }

    /// A table with the same cell size at every zoom level.
    ///
    /// # Errors
    ///
    /// Returns an error if `cell_size` is not finite and positive.
    pub fn uniform(cell_size: f64) -> Result<Self> {
        Self::new(cell_size, Vec::new())
    }

    /// Cell size below the first threshold.
    #[must_use]
    pub fn base(&self) -> f64 {
        self.base
    }

    #[must_use]
    pub fn steps(&self) -> &[CellSizeStep] {
        &self.steps
    }

    /// Looks up the cell size for `zoom_level`.
    ///
    /// Negative and non-finite levels fall back to the base size.
    #[must_use]
    pub fn cell_size(&self, zoom_level: f64) -> f64 {
        if !zoom_level.is_finite() || zoom_level < 0.0 {
            tracing::debug!(
                zoom_level,
                base = self.base,
                "zoom level out of range, using base cell size"
            );
            return self.base;
        }
        self.steps
            .iter()
            .rev()
            .find(|step| zoom_level >= step.min_zoom_level)
            .map_or(self.base, |step| step.cell_size)
    }
}

impl Default for CellSizeTable {
    fn default() -> Self {
        Self {
            base: 88.0,
            steps: vec![
                CellSizeStep::new(13.0, 64.0),
                CellSizeStep::new(16.0, 32.0),
                CellSizeStep::new(19.0, 16.0),
            ],
        }
    }
}

fn is_valid_size(size: f64) -> bool {
    size.is_finite() && size > 0.0
}

fn invalid(message: String) -> crate::error::MapClusterError {
    ZoomError::InvalidCellSizeTable(message).into()
}
