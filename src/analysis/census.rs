//! Game-tree census

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    search,
    tictactoe::{Board, Mark},
};

/// How often progress callbacks fire, in completed games
pub const PROGRESS_INTERVAL: u64 = 10_000;

/// Distribution of game outcomes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeDistribution {
    pub x_wins: u64,
    pub o_wins: u64,
    pub draws: u64,
}

/// Counts gathered by walking every game from the empty board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameCensus {
    /// Distinct move sequences ending in a terminal board
    pub total_games: u64,
    pub outcome_distribution: OutcomeDistribution,
    /// Games by number of moves played
    pub length_histogram: BTreeMap<usize, u64>,
    pub average_game_length: f64,
    /// Distinct boards reachable by legal play, the empty board included
    pub reachable_positions: usize,
    pub terminal_positions: usize,
    /// Minimax value of the empty board
    pub root_value: Option<i32>,
}

impl GameCensus {
    /// Run the complete census
    pub fn analyze() -> Self {
        Self::analyze_with_progress(|_| {})
    }

    /// Run the census, reporting the number of finished games every
    /// [`PROGRESS_INTERVAL`] games
    pub fn analyze_with_progress(mut progress: impl FnMut(u64)) -> Self {
        let mut census = GameCensus {
            total_games: 0,
            outcome_distribution: OutcomeDistribution::default(),
            length_histogram: BTreeMap::new(),
            average_game_length: 0.0,
            reachable_positions: 0,
            terminal_positions: 0,
            root_value: None,
        };

        let mut positions = HashSet::new();
        let mut total_length = 0;
        census.walk(
            Board::new(),
            0,
            &mut positions,
            &mut total_length,
            &mut progress,
        );

        census.reachable_positions = positions.len();
        census.terminal_positions = positions.iter().filter(|b| b.is_terminal()).count();
        if census.total_games > 0 {
            census.average_game_length = total_length as f64 / census.total_games as f64;
        }
        census.root_value = search::recursive_search(&Board::new()).map(|(_, value)| value);
        progress(census.total_games);

        debug!(
            games = census.total_games,
            positions = census.reachable_positions,
            root_value = ?census.root_value,
            "census finished"
        );
        census
    }

    fn walk(
        &mut self,
        board: Board,
        depth: usize,
        positions: &mut HashSet<Board>,
        total_length: &mut usize,
        progress: &mut dyn FnMut(u64),
    ) {
        positions.insert(board);

        if board.is_terminal() {
            self.total_games += 1;
            *self.length_histogram.entry(depth).or_insert(0) += 1;
            *total_length += depth;

            match board.winner() {
                Some(Mark::X) => self.outcome_distribution.x_wins += 1,
                Some(Mark::O) => self.outcome_distribution.o_wins += 1,
                None => self.outcome_distribution.draws += 1,
            }

            if self.total_games.is_multiple_of(PROGRESS_INTERVAL) {
                progress(self.total_games);
            }
            return;
        }

        for mv in board.legal_moves() {
            if let Ok(next) = board.apply_move(mv) {
                self.walk(next, depth + 1, positions, total_length, progress);
            }
        }
    }
}
