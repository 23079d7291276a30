//! Exhaustive minimax search
//!
//! Every call explores the full subtree below the given board: no pruning,
//! no memoization, no depth limit. X maximizes, O minimizes, and values are
//! backed up unchanged from the terminal utilities (+1, 0, -1).
//!
//! Ties between equally good moves go to the first one in row-major order,
//! which is the order [`Board::legal_moves`] generates them in.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::tictactoe::{Board, Mark, Move};

/// Minimax value of each legal move at one board, in generation order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionValues(Vec<(Move, i32)>);

impl ActionValues {
    /// Best value for `mark`: the maximum for X, the minimum for O
    pub fn best_value(&self, mark: Mark) -> Option<i32> {
        let values = self.0.iter().map(|&(_, value)| value);
        match mark {
            Mark::X => values.max(),
            Mark::O => values.min(),
        }
    }

    /// First entry whose value equals the best value for `mark`
    pub fn best(&self, mark: Mark) -> Option<(Move, i32)> {
        let best_value = self.best_value(mark)?;
        self.0.iter().copied().find(|&(_, value)| value == best_value)
    }

    /// Every move that achieves the best value for `mark`
    pub fn optimal_moves(&self, mark: Mark) -> Vec<Move> {
        match self.best_value(mark) {
            Some(best_value) => self
                .0
                .iter()
                .filter(|&&(_, value)| value == best_value)
                .map(|&(mv, _)| mv)
                .collect(),
            None => Vec::new(),
        }
    }

    /// Value recorded for a move, if it was legal
    pub fn value_of(&self, mv: Move) -> Option<i32> {
        self.0
            .iter()
            .find(|(candidate, _)| *candidate == mv)
            .map(|&(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Move, i32)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Recursive search state; only counts the positions it visits
#[derive(Debug, Default)]
struct Searcher {
    nodes: u64,
}

impl Searcher {
    fn action_values(&mut self, board: &Board) -> ActionValues {
        let mut values = Vec::with_capacity(9);
        for mv in board.legal_moves() {
            // Every generated move names an empty cell, so this never fails.
            let Ok(next) = board.apply_move(mv) else {
                continue;
            };
            self.nodes += 1;
            values.push((mv, self.value(&next)));
        }
        ActionValues(values)
    }

    /// Utility of a terminal board, otherwise its backed-up minimax value
    fn value(&mut self, board: &Board) -> i32 {
        if board.is_terminal() {
            return board.utility();
        }
        match self.search(board) {
            Some((_, value)) => value,
            // A board that is not terminal still has an empty cell.
            None => unreachable!("non-terminal board {} has no legal move", board.encode()),
        }
    }

    fn search(&mut self, board: &Board) -> Option<(Move, i32)> {
        let mark = board.current_player();
        let best = self.action_values(board).best(mark);
        trace!(board = %board.encode(), ?mark, ?best, "backed up");
        best
    }
}

/// Minimax search from a non-terminal board.
///
/// Returns the first move (row-major) achieving the optimal value for the
/// player to move, together with that value. Returns `None` only when the
/// board has no empty cell; callers should go through [`choose_move`], which
/// never searches a terminal board.
pub fn recursive_search(board: &Board) -> Option<(Move, i32)> {
    Searcher::default().search(board)
}

/// Minimax value of every legal move at `board`
pub fn action_values(board: &Board) -> ActionValues {
    Searcher::default().action_values(board)
}

/// Optimal move for the player to move, or `None` if the game is over
pub fn choose_move(board: &Board) -> Option<Move> {
    if board.is_terminal() {
        debug!(board = %board.encode(), "terminal board, no move to choose");
        return None;
    }
    analyze(board).map(|report| report.chosen)
}

/// Full result of searching one position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    pub board: Board,
    pub to_move: Mark,
    pub chosen: Move,
    pub value: i32,
    pub action_values: ActionValues,
    /// Positions generated below the root
    pub nodes: u64,
}

impl SearchReport {
    /// All moves tied with the chosen one
    pub fn optimal_moves(&self) -> Vec<Move> {
        self.action_values.optimal_moves(self.to_move)
    }
}

/// Search `board` and report the chosen move, its value, and the value of
/// every alternative. Returns `None` for terminal boards.
pub fn analyze(board: &Board) -> Option<SearchReport> {
    if board.is_terminal() {
        return None;
    }

    let mut searcher = Searcher::default();
    let to_move = board.current_player();
    let action_values = searcher.action_values(board);
    let (chosen, value) = action_values.best(to_move)?;

    debug!(
        board = %board.encode(),
        ?to_move,
        %chosen,
        value,
        nodes = searcher.nodes,
        "search finished"
    );

    Some(SearchReport {
        board: *board,
        to_move,
        chosen,
        value,
        action_values,
        nodes: searcher.nodes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Cell;

    fn board(s: &str) -> Board {
        Board::from_string(s).unwrap()
    }

    fn mv(row: usize, col: usize) -> Move {
        Move::new(row, col).unwrap()
    }

    #[test]
    fn test_terminal_board_has_no_move() {
        assert_eq!(choose_move(&board("XXX OO. ...")), None);
        assert_eq!(choose_move(&board("XOX XOO OXX")), None);
        assert!(analyze(&board("XOX XOO OXX")).is_none());
    }

    #[test]
    fn test_x_takes_immediate_win() {
        // XX.
        // OO.
        // ...
        assert_eq!(choose_move(&board("XX. OO. ...")), Some(mv(0, 2)));
    }

    #[test]
    fn test_o_blocks_forced_loss() {
        // XX.
        // .O.
        // ...
        let chosen = choose_move(&board("XX. .O. ...")).unwrap();
        assert_eq!(chosen, mv(0, 2));
    }

    #[test]
    fn test_last_cell_is_only_choice() {
        // XOX
        // XOO
        // OX.
        let report = analyze(&board("XOX XOO OX.")).unwrap();
        assert_eq!(report.chosen, mv(2, 2));
        assert_eq!(report.value, 0);
        assert_eq!(report.action_values.len(), 1);
        assert_eq!(report.nodes, 1);
    }

    #[test]
    fn test_tie_break_prefers_first_in_row_major_order() {
        // Every remaining move wins for X: (0,2) and (2,0) at once, (2,2)
        // through a double threat.
        // XX.
        // XOO
        // .O.
        let b = board("XX. XOO .O.");
        let values = action_values(&b);
        assert_eq!(values.value_of(mv(0, 2)), Some(1));
        assert_eq!(values.value_of(mv(2, 0)), Some(1));
        assert_eq!(values.value_of(mv(2, 2)), Some(1));
        assert_eq!(choose_move(&b), Some(mv(0, 2)));
        assert_eq!(
            values.optimal_moves(Mark::X),
            vec![mv(0, 2), mv(2, 0), mv(2, 2)]
        );
    }

    #[test]
    fn test_recursive_search_matches_choose_move() {
        let b = board("X.. .O. ...");
        let (mv, value) = recursive_search(&b).unwrap();
        assert_eq!(Some(mv), choose_move(&b));
        assert_eq!(value, 0);
    }

    #[test]
    fn test_recursive_search_on_full_board_is_none() {
        assert_eq!(recursive_search(&board("XOX XOO OXX")), None);
    }

    #[test]
    fn test_action_values_cover_every_legal_move() {
        let b = board("X.. ... ...");
        let values = action_values(&b);
        let moves: Vec<Move> = values.iter().map(|&(mv, _)| mv).collect();
        assert_eq!(moves, b.legal_moves());
    }

    #[test]
    fn test_every_child_gets_a_minimax_value() {
        // Unbalanced grids still search: any board with an empty cell and no
        // line has a legal move to back up from.
        let grid = [
            [Cell::X, Cell::X, Cell::O],
            [Cell::X, Cell::Empty, Cell::Empty],
            [Cell::O, Cell::Empty, Cell::X],
        ];
        let b = Board::from_rows(grid);
        assert!(!b.is_terminal());

        let values = action_values(&b);
        assert_eq!(values.len(), b.legal_moves().len());
        assert!(values.iter().all(|&(_, value)| (-1..=1).contains(&value)));
        assert!(recursive_search(&b).is_some());
    }

    #[test]
    fn test_best_on_empty_values_is_none() {
        let values = ActionValues::default();
        assert_eq!(values.best(Mark::X), None);
        assert!(values.optimal_moves(Mark::O).is_empty());
    }
}
