//! The nine selection × mutation strategy combinations.

use crate::ga::{Mutation, Selection};

/// Number of strategy combinations in the comparison grid.
pub const COMBINATION_COUNT: usize = 9;

/// Tournament size used by the comparison grid.
pub const TOURNAMENT_SIZE: usize = 3;

/// One immutable pairing of a selection strategy and a mutation operator.
///
/// The ordinal (0–8) fixes the grid order and serves as the final
/// deterministic tie-break in ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombinationSpec {
    /// Parent selection policy for this combination.
    pub selection: Selection,
    /// Route perturbation policy for this combination.
    pub mutation: Mutation,
    /// Position in the grid, 0–8.
    pub ordinal: usize,
}

impl CombinationSpec {
    /// The full selection-major grid: tournament, roulette, rank, each
    /// paired with swap, inversion, scramble.
    pub fn grid() -> Vec<CombinationSpec> {
        let selections = [
            Selection::Tournament(TOURNAMENT_SIZE),
            Selection::Roulette,
            Selection::Rank,
        ];
        let mutations = [Mutation::Swap, Mutation::Inversion, Mutation::Scramble];

        let mut grid = Vec::with_capacity(COMBINATION_COUNT);
        for selection in selections {
            for mutation in mutations {
                grid.push(CombinationSpec {
                    selection,
                    mutation,
                    ordinal: grid.len(),
                });
            }
        }
        grid
    }

    /// Display name, e.g. `"Tournament + Swap"`.
    pub fn name(&self) -> String {
        format!("{} + {}", self.selection.label(), self.mutation.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_has_nine_distinct_combinations() {
        let grid = CombinationSpec::grid();
        assert_eq!(grid.len(), COMBINATION_COUNT);

        let names: std::collections::HashSet<String> =
            grid.iter().map(CombinationSpec::name).collect();
        assert_eq!(names.len(), COMBINATION_COUNT);
    }

    #[test]
    fn test_ordinals_follow_grid_order() {
        let grid = CombinationSpec::grid();
        for (i, spec) in grid.iter().enumerate() {
            assert_eq!(spec.ordinal, i);
        }
        assert_eq!(grid[0].name(), "Tournament + Swap");
        assert_eq!(grid[4].name(), "Roulette + Inversion");
        assert_eq!(grid[8].name(), "Rank + Scramble");
    }

    #[test]
    fn test_tournament_size_is_three() {
        let grid = CombinationSpec::grid();
        assert_eq!(grid[0].selection, Selection::Tournament(3));
    }
}
