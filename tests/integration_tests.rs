use noughts::{
    Board, Cell, GameEngine, GameError, GameState, Leader, Outcome, PlayerId, Position, Session,
};

/// Play the given ids in order, asserting every move but the last is non-terminal.
fn play(session: &mut Session, ids: &[i64]) -> GameState {
    let (last, rest) = ids.split_last().expect("at least one move");
    for &id in rest {
        assert_eq!(session.submit_move(id).unwrap(), GameState::InProgress, "move {}", id);
    }
    session.submit_move(*last).unwrap()
}

#[test]
fn column_win_updates_leader() {
    let mut session = Session::new(42);
    let first = session.start_round().unwrap();

    // first: 1, 4, 7
    let state = play(&mut session, &[1, 2, 4, 3, 7]);

    assert_eq!(state, GameState::Finished(Outcome::Win(first)));
    assert_eq!(session.player(first).wins(), 1);
    assert_eq!(session.leader(), Leader::Player(first));
}

#[test]
fn lineless_full_board_is_a_draw() {
    let mut session = Session::new(42);
    session.start_round().unwrap();

    // x o x / o x o / o x o with the first mover on the o squares
    let state = play(&mut session, &[2, 1, 4, 3, 6, 5, 7, 8, 9]);

    assert_eq!(state, GameState::Finished(Outcome::Draw));
    assert!(session.engine().board().is_full());
    assert_eq!(session.leader(), Leader::Tie);
}

#[test]
fn winning_ninth_move_beats_draw() {
    let mut session = Session::new(5);
    let first = session.start_round().unwrap();

    // first: 1, 3, 5, 8, 9 (diagonal 1-5-9 on the last move); second: 2, 4, 6, 7
    let state = play(&mut session, &[1, 2, 3, 4, 5, 6, 8, 7, 9]);

    assert!(session.engine().board().is_full());
    assert_eq!(state, GameState::Finished(Outcome::Win(first)));
}

#[test]
fn rounds_won_by_each_player_tie_the_session() {
    let mut session = Session::new(7);

    let first_winner = session.start_round().unwrap();
    play(&mut session, &[1, 2, 4, 3, 7]);
    assert_eq!(session.leader(), Leader::Player(first_winner));

    // Second round goes to the other player whoever opens it.
    let opener = session.start_round().unwrap();
    let moves: &[i64] = if opener == first_winner {
        &[9, 1, 8, 4, 3, 7]
    } else {
        &[1, 2, 4, 3, 7]
    };
    let state = play(&mut session, moves);

    assert_eq!(state, GameState::Finished(Outcome::Win(first_winner.other())));
    assert_eq!(session.player(PlayerId::One).wins(), 1);
    assert_eq!(session.player(PlayerId::Two).wins(), 1);
    assert_eq!(session.leader(), Leader::Tie);
}

#[test]
fn occupied_cell_never_mutates_board() {
    let mut engine = GameEngine::new(3);
    let first = engine.start_round().unwrap();
    engine.submit_move(5).unwrap();
    let before = engine.board().clone();

    let err = engine.submit_move(5).unwrap_err();

    assert!(matches!(err, GameError::OccupiedCell(p) if p.id() == 5));
    assert!(err.is_recoverable());
    assert_eq!(*engine.board(), before);
    assert_eq!(
        engine.board().get(Position::from_id(5).unwrap()),
        Cell::Marked(first)
    );
}

#[test]
fn out_of_range_selectors_leave_state_unchanged() {
    let mut engine = GameEngine::new(3);
    let first = engine.start_round().unwrap();

    for id in [0, 10] {
        assert!(matches!(engine.submit_move(id), Err(GameError::InvalidPosition(_))));
    }

    assert_eq!(*engine.board(), Board::new());
    assert_eq!(engine.current_player(), Some(first));
    assert_eq!(engine.state(), GameState::InProgress);
}

#[test]
fn start_round_always_clears_the_board() {
    let mut engine = GameEngine::new(9);
    engine.start_round().unwrap();
    for id in [1, 2, 4, 3, 7] {
        engine.submit_move(id).unwrap();
    }
    assert!(engine.outcome().is_some());

    engine.start_round().unwrap();

    assert_eq!(*engine.board(), Board::new());
    assert_eq!(engine.outcome(), None);
}

#[test]
fn turns_alternate_strictly() {
    let mut engine = GameEngine::new(13);
    let mut expected = engine.start_round().unwrap();

    // 8 moves with no line: 2, 1, 4, 3, 6, 5, 7, 8
    for id in [2, 1, 4, 3, 6, 5, 7, 8] {
        assert_eq!(engine.current_player(), Some(expected));
        engine.submit_move(id).unwrap();
        expected = expected.other();
    }
    assert_eq!(engine.current_player(), Some(expected));
}

#[test]
fn deterministic_first_player_same_seed() {
    let mut a = Session::new(100);
    let mut b = Session::new(100);
    for _ in 0..5 {
        assert_eq!(a.start_round().unwrap(), b.start_round().unwrap());
        play(&mut a, &[1, 2, 4, 3, 7]);
        play(&mut b, &[1, 2, 4, 3, 7]);
    }
}

#[test]
fn moves_outside_a_round_are_contract_violations() {
    let mut session = Session::new(1);
    let err = session.submit_move(1).unwrap_err();
    assert!(matches!(err, GameError::InvalidStateTransition { .. }));
    assert!(!err.is_recoverable());

    session.start_round().unwrap();
    assert!(matches!(
        session.start_round(),
        Err(GameError::InvalidStateTransition { .. })
    ));
}
