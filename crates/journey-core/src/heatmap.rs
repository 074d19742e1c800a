//! Theme × stage mention matrix
//!
//! Every tag on a touchpoint adds that touchpoint's frequency to the cell
//! (tag, stage column). The grid always spans the full taxonomy vocabularies;
//! empty rows and columns stay as zeros.

use journey_model::{Dataset, ThemeTaxonomy};
use serde::Serialize;

/// Dense theme × stage mention counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeMatrix {
    /// Row labels (taxonomy themes)
    pub themes: Vec<String>,
    /// Column labels (taxonomy stages)
    pub stages: Vec<String>,
    /// `cells[row][column]`
    pub cells: Vec<Vec<u64>>,
    /// Mentions whose tag or stage has no row/column
    pub unplaced_mentions: u64,
}

impl ThemeMatrix {
    /// Build the matrix for a dataset under a taxonomy
    #[must_use]
    pub fn build(dataset: &Dataset, taxonomy: &ThemeTaxonomy) -> Self {
        let mut cells = vec![vec![0_u64; taxonomy.stages.len()]; taxonomy.themes.len()];
        let mut unplaced_mentions = 0_u64;

        for tp in dataset {
            let column = taxonomy.stages.position(taxonomy.column_for(&tp.stage));
            for tag in taxonomy.tags(&tp.label) {
                match (taxonomy.themes.position(tag), column) {
                    (Some(row), Some(col)) => cells[row][col] += u64::from(tp.frequency),
                    _ => {
                        tracing::debug!(tag = %tag, stage = %tp.stage, "theme contribution has no cell");
                        unplaced_mentions += u64::from(tp.frequency);
                    }
                }
            }
        }

        tracing::debug!(
            taxonomy = %taxonomy.kind,
            rows = taxonomy.themes.len(),
            columns = taxonomy.stages.len(),
            "built theme matrix"
        );

        Self {
            themes: taxonomy.themes.as_slice().to_vec(),
            stages: taxonomy.stages.as_slice().to_vec(),
            cells,
            unplaced_mentions,
        }
    }

    /// Mentions in one cell, `None` if either name is not on the grid
    #[must_use]
    pub fn cell(&self, theme: &str, stage: &str) -> Option<u64> {
        let row = self.themes.iter().position(|t| t == theme)?;
        let col = self.stages.iter().position(|s| s == stage)?;
        Some(self.cells[row][col])
    }

    /// Largest cell, the upper bound of the colour scale
    #[must_use]
    pub fn max_cell(&self) -> u64 {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Sum over all cells
    #[must_use]
    pub fn total(&self) -> u64 {
        self.cells.iter().flatten().sum()
    }

    /// Mentions per theme
    #[must_use]
    pub fn row_totals(&self) -> Vec<u64> {
        self.cells.iter().map(|row| row.iter().sum()).collect()
    }

    /// Mentions per stage column
    #[must_use]
    pub fn column_totals(&self) -> Vec<u64> {
        (0..self.stages.len())
            .map(|col| self.cells.iter().map(|row| row[col]).sum())
            .collect()
    }

    /// True when no mention landed in any cell
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.total() == 0
    }
}
