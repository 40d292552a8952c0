//! One-dimensional merge of a single line toward its front (index 0)

use super::grid::Line;
use super::stage::Stage;
use crate::consts::GRID_SIZE;

/// Result of merging one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineMerge {
    pub line: Line,
    /// Sum of the ranks of every stage produced
    pub score_delta: u64,
    /// An Exit tile was produced
    pub won: bool,
}

/// Compress a line toward index 0 and merge equal neighbours pairwise.
///
/// The scan moves forward one slot after every comparison, so a freshly
/// promoted tile is never compared again within the same call. A pair that
/// cannot be promoted (two Exit tiles) is left as it is.
pub fn merge_line(line: Line) -> LineMerge {
    let mut tiles: Vec<Stage> = line.iter().flatten().copied().collect();
    let mut score_delta = 0;
    let mut won = false;

    let mut i = 0;
    while i + 1 < tiles.len() {
        if tiles[i] == tiles[i + 1] {
            match tiles[i].promote() {
                Some(promoted) => {
                    tiles[i] = promoted;
                    tiles.remove(i + 1);
                    score_delta += u64::from(promoted.rank());
                    won |= promoted.is_exit();
                }
                None => log::warn!("Refusing to promote past {}", tiles[i]),
            }
        }
        i += 1;
    }

    let mut merged: Line = [None; GRID_SIZE];
    for (slot, stage) in merged.iter_mut().zip(tiles) {
        *slot = Some(stage);
    }

    LineMerge {
        line: merged,
        score_delta,
        won,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Stage::*;

    #[test]
    fn test_pair_merges_to_next_stage() {
        let result = merge_line([Some(Angel), Some(Angel), None, None]);
        assert_eq!(result.line, [Some(PreSeed), None, None, None]);
        assert_eq!(result.score_delta, 2);
        assert!(!result.won);
    }

    #[test]
    fn test_four_equal_make_two_pairs() {
        let result = merge_line([Some(Angel); 4]);
        assert_eq!(result.line, [Some(PreSeed), Some(PreSeed), None, None]);
        assert_eq!(result.score_delta, 4);
    }

    #[test]
    fn test_disjoint_pairs_both_merge() {
        let result = merge_line([Some(Seed), Some(Seed), Some(SeriesA), Some(SeriesA)]);
        assert_eq!(result.line, [Some(SeriesA), Some(SeriesB), None, None]);
        assert_eq!(result.score_delta, u64::from(SeriesA.rank() + SeriesB.rank()));
    }

    #[test]
    fn test_no_chain_merge_with_promoted_tile() {
        // Angel+Angel -> Pre-seed, which must not then absorb the Pre-seed behind it
        let result = merge_line([Some(Angel), Some(Angel), Some(PreSeed), None]);
        assert_eq!(result.line, [Some(PreSeed), Some(PreSeed), None, None]);
        assert_eq!(result.score_delta, 2);
    }

    #[test]
    fn test_three_equal_merge_front_pair_only() {
        let result = merge_line([Some(Seed), Some(Seed), Some(Seed), None]);
        assert_eq!(result.line, [Some(SeriesA), Some(Seed), None, None]);
    }

    #[test]
    fn test_gaps_are_compressed() {
        let result = merge_line([None, Some(Seed), None, Some(Seed)]);
        assert_eq!(result.line, [Some(SeriesA), None, None, None]);

        let result = merge_line([None, Some(Seed), None, Some(Angel)]);
        assert_eq!(result.line, [Some(Seed), Some(Angel), None, None]);
        assert_eq!(result.score_delta, 0);
    }

    #[test]
    fn test_producing_exit_wins() {
        let result = merge_line([Some(Ipo), None, Some(Ipo), None]);
        assert_eq!(result.line, [Some(Exit), None, None, None]);
        assert_eq!(result.score_delta, 10);
        assert!(result.won);
    }

    #[test]
    fn test_exit_pair_is_left_unmerged() {
        let result = merge_line([None, Some(Exit), Some(Exit), None]);
        assert_eq!(result.line, [Some(Exit), Some(Exit), None, None]);
        assert_eq!(result.score_delta, 0);
        assert!(!result.won);
    }

    #[test]
    fn test_empty_line_stays_empty() {
        let result = merge_line([None; 4]);
        assert_eq!(result.line, [None; 4]);
        assert_eq!(result.score_delta, 0);
    }
}
