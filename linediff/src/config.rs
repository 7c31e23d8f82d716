//! Alignment settings.
//!
//! Settings can be built programmatically or loaded from the environment with
//! the `LINEDIFF` prefix, e.g. `LINEDIFF__STRATEGY=anchored` or
//! `LINEDIFF__MAX_MATRIX_CELLS=1000000`.

use config::{Config, Environment, Source};
use serde::{Deserialize, Serialize};

use crate::error::DiffError;

/// Default cap on LCS matrix cells (64 Mi cells, 512 MiB of `usize` on 64-bit).
pub const DEFAULT_MAX_MATRIX_CELLS: usize = 64 * 1024 * 1024;

/// Which alignment algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Minimal edit script from the LCS matrix.
    #[default]
    Optimal,
    /// Patience-style alignment over elements unique to both sides.
    Anchored,
}

/// How the anchored strategy treats the gaps between anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorMode {
    /// One anchoring pass; every gap is emitted as a block replace.
    #[default]
    SinglePass,
    /// Gaps are trimmed and re-anchored on values unique within the gap.
    Recursive,
}

/// Settings for [`crate::align`] and [`crate::try_diff`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffSettings {
    /// Algorithm used by [`crate::align`].
    pub strategy: Strategy,
    /// Gap handling for [`Strategy::Anchored`].
    pub anchor_mode: AnchorMode,
    /// Maximum number of LCS matrix cells for the optimal path.
    pub max_matrix_cells: usize,
}

impl Default for DiffSettings {
    fn default() -> Self {
        Self {
            strategy: Strategy::Optimal,
            anchor_mode: AnchorMode::SinglePass,
            max_matrix_cells: DEFAULT_MAX_MATRIX_CELLS,
        }
    }
}

impl DiffSettings {
    /// Loads settings from `LINEDIFF__*` environment variables over the defaults.
    ///
    /// # Errors
    /// Returns [`DiffError::Config`] if a variable cannot be deserialized.
    pub fn load() -> Result<Self, DiffError> {
        Self::load_from(
            Environment::with_prefix("LINEDIFF")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
    }

    /// Loads settings from an arbitrary source layered over the defaults.
    ///
    /// # Errors
    /// Returns [`DiffError::Config`] if the source cannot be deserialized.
    pub fn load_from<S>(source: S) -> Result<Self, DiffError>
    where
        S: Source + Send + Sync + 'static,
    {
        let max_cells = u64::try_from(DEFAULT_MAX_MATRIX_CELLS).unwrap_or(u64::MAX);
        let settings = Config::builder()
            .set_default("strategy", "optimal")?
            .set_default("anchor_mode", "single_pass")?
            .set_default("max_matrix_cells", max_cells)?
            .add_source(source)
            .build()?;

        let loaded: Self = settings.try_deserialize()?;
        tracing::debug!(
            strategy = ?loaded.strategy,
            anchor_mode = ?loaded.anchor_mode,
            max_matrix_cells = loaded.max_matrix_cells,
            "Loaded diff settings"
        );
        Ok(loaded)
    }

    /// Sets the strategy.
    #[must_use]
    pub const fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the anchor mode.
    #[must_use]
    pub const fn with_anchor_mode(mut self, anchor_mode: AnchorMode) -> Self {
        self.anchor_mode = anchor_mode;
        self
    }

    /// Sets the matrix cell budget.
    #[must_use]
    pub const fn with_max_matrix_cells(mut self, max_matrix_cells: usize) -> Self {
        self.max_matrix_cells = max_matrix_cells;
        self
    }
}
