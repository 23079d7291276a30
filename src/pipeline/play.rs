//! Match driver

use tracing::{debug, info};

use crate::{
    Result,
    ports::{Agent, Observer},
    tictactoe::{Board, Game, Mark},
};

/// Play a full game from the empty board, X moving first
///
/// # Errors
///
/// Propagates agent failures, illegal moves, and observer errors.
pub fn play_match(
    x: &mut dyn Agent,
    o: &mut dyn Agent,
    observers: &mut [&mut dyn Observer],
) -> Result<Game> {
    play_from(Board::new(), x, o, observers)
}

/// Play from an arbitrary starting board until the game ends
///
/// The mark on turn is derived from the board, so the same pair of agents
/// can pick up a position in the middle of a game.
///
/// # Errors
///
/// Propagates agent failures, illegal moves, and observer errors. An agent
/// returning an occupied cell ends the match with
/// [`crate::Error::InvalidMove`].
pub fn play_from(
    start: Board,
    x: &mut dyn Agent,
    o: &mut dyn Agent,
    observers: &mut [&mut dyn Observer],
) -> Result<Game> {
    let mut game = Game::from_board(start);
    let mut board = start;

    info!(x = x.name(), o = o.name(), start = %start.encode(), "match started");
    for observer in observers.iter_mut() {
        observer.on_game_start(&board)?;
    }

    while !game.is_over() {
        let agent: &mut dyn Agent = match board.current_player() {
            Mark::X => &mut *x,
            Mark::O => &mut *o,
        };
        let mv = agent.select_move(&board)?;
        debug!(agent = agent.name(), %mv, "move selected");

        game.play(mv)?;
        board = board.apply_move(mv)?;

        if let Some(ply) = game.plies.last() {
            for observer in observers.iter_mut() {
                observer.on_move(ply, &board)?;
            }
        }
    }

    info!(outcome = ?game.outcome, plies = game.plies.len(), "match finished");
    for observer in observers.iter_mut() {
        observer.on_game_end(&game)?;
    }

    Ok(game)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Error,
        pipeline::{MinimaxAgent, RecordingObserver, ScriptedAgent},
        tictactoe::{Move, Outcome},
    };

    fn moves(indices: &[usize]) -> Vec<Move> {
        indices
            .iter()
            .map(|&i| Move::from_index(i).unwrap())
            .collect()
    }

    #[test]
    fn test_scripted_match_reaches_win() {
        let mut x = ScriptedAgent::new("x", moves(&[0, 1, 2]));
        let mut o = ScriptedAgent::new("o", moves(&[3, 4]));
        let game = play_match(&mut x, &mut o, &mut []).unwrap();

        assert_eq!(game.outcome, Some(Outcome::Win(Mark::X)));
        assert_eq!(game.plies.len(), 5);
    }

    #[test]
    fn test_engine_converts_won_position() {
        // O answered a corner opening with an adjacent edge, which loses by force.
        let mut x = MinimaxAgent::new("x");
        let mut o = MinimaxAgent::new("o");
        let start = Board::from_string("XO. ... ...").unwrap();
        let game = play_from(start, &mut x, &mut o, &mut []).unwrap();

        assert_eq!(game.outcome, Some(Outcome::Win(Mark::X)));
        assert_eq!(game.initial, start);
    }

    #[test]
    fn test_illegal_agent_move_aborts_match() {
        let mut x = ScriptedAgent::new("x", moves(&[4]));
        let mut o = ScriptedAgent::new("o", moves(&[4]));
        let err = play_match(&mut x, &mut o, &mut []).unwrap_err();
        assert!(matches!(err, Error::InvalidMove { row: 1, col: 1 }));
    }

    #[test]
    fn test_observers_see_every_move() {
        let mut x = MinimaxAgent::new("x");
        let mut o = MinimaxAgent::new("o");
        let mut recorder = RecordingObserver::default();
        let game = play_from(
            Board::from_string("XO. .X. ...").unwrap(),
            &mut x,
            &mut o,
            &mut [&mut recorder],
        )
        .unwrap();

        assert_eq!(recorder.boards.len(), game.plies.len() + 1);
        assert_eq!(recorder.outcome, game.outcome);
    }
}
