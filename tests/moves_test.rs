//! Gravity placement, turn gating, and end-of-game gating.

use connectn::{Board, BoardInvariants, MoveError, Player, compare_boards};

fn board() -> Board {
    Board::create(6, 6, 4).expect("valid configuration")
}

#[test]
fn drops_land_in_the_lowest_empty_row() {
    let mut board = board();
    let alice = Player::new("alice");
    let bob = Player::new("bob");

    assert_eq!(board.drop_in_column(&alice, 3), Ok(0));
    assert_eq!(board.drop_in_column(&bob, 3), Ok(1));
    assert_eq!(board.drop_in_column(&alice, 3), Ok(2));
    assert_eq!(board.cell(3, 0), Some(&alice));
    assert_eq!(board.cell(3, 1), Some(&bob));
    assert_eq!(board.cell(3, 2), Some(&alice));
    assert_eq!(board.landing_row(3), Some(3));
}

#[test]
fn a_filled_column_rejects_further_drops() {
    let mut board = board();
    let alice = Player::new("alice");
    let bob = Player::new("bob");

    for turn in 0..6 {
        let player = if turn % 2 == 0 { &alice } else { &bob };
        assert_eq!(board.drop_in_column(player, 0), Ok(turn));
    }
    assert_eq!(board.landing_row(0), None);
    assert_eq!(board.drop_in_column(&alice, 0), Err(MoveError::ColumnFull(0)));
    // Targeted placement into a full column reports the cell as occupied.
    assert_eq!(
        board.place_at(&alice, 0, 5),
        Err(MoveError::Occupied { x: 0, y: 5 })
    );
}

#[test]
fn placement_must_hit_the_landing_row() {
    let mut board = board();
    let alice = Player::new("alice");
    let bob = Player::new("bob");

    assert_eq!(
        board.place_at(&alice, 0, 1),
        Err(MoveError::Floating { y: 1, landing: 0 })
    );
    assert_eq!(board.place_at(&alice, 0, 0), Ok(()));
    assert_eq!(board.place_at(&bob, 0, 0), Err(MoveError::Occupied { x: 0, y: 0 }));
    assert_eq!(
        board.place_at(&bob, 0, 2),
        Err(MoveError::Floating { y: 2, landing: 1 })
    );
    assert_eq!(board.place_at(&bob, 0, 1), Ok(()));
}

#[test]
fn out_of_bounds_moves_are_rejected() {
    let mut board = board();
    let alice = Player::new("alice");
    assert_eq!(
        board.place_at(&alice, 6, 0),
        Err(MoveError::OutOfBounds { x: 6, y: 0 })
    );
    assert_eq!(
        board.place_at(&alice, 0, 6),
        Err(MoveError::OutOfBounds { x: 0, y: 6 })
    );
    assert_eq!(board.drop_in_column(&alice, 6), Err(MoveError::InvalidColumn(6)));
}

#[test]
fn unconfigured_boards_reject_moves() {
    let mut board = Board::new();
    let alice = Player::new("alice");
    assert_eq!(board.drop_in_column(&alice, 0), Err(MoveError::NotConfigured));
    assert_eq!(board.place_at(&alice, 0, 0), Err(MoveError::NotConfigured));
}

#[test]
fn the_player_behind_owns_the_turn() {
    let mut board = board();
    let alice = Player::new("alice");
    let bob = Player::new("bob");

    // No turn owner before two identities have played.
    assert_eq!(board.whose_turn(), None);
    board.drop_in_column(&alice, 0).expect("legal drop");
    assert_eq!(board.whose_turn(), None);

    board.drop_in_column(&bob, 1).expect("legal drop");
    // Tie: the first identity in scan order (alice, bottom-left) moves.
    assert_eq!(board.whose_turn(), Some(&alice));
    assert_eq!(
        board.drop_in_column(&bob, 2),
        Err(MoveError::WrongTurn("bob".to_owned()))
    );

    board.drop_in_column(&alice, 2).expect("legal drop");
    assert_eq!(board.whose_turn(), Some(&bob));
    assert_eq!(
        board.drop_in_column(&alice, 3),
        Err(MoveError::WrongTurn("alice".to_owned()))
    );
}

#[test]
fn a_lone_player_may_keep_moving() {
    let mut board = board();
    let alice = Player::new("alice");
    board.drop_in_column(&alice, 0).expect("legal drop");
    board.drop_in_column(&alice, 1).expect("legal drop");
    board.drop_in_column(&alice, 2).expect("legal drop");
    assert_eq!(board.whose_turn(), None);
}

#[test]
fn moves_fail_once_the_game_has_ended() {
    let mut board = board();
    let alice = Player::new("alice");
    let bob = Player::new("bob");

    // A lone column of four ends the game before bob ever joins.
    for _ in 0..4 {
        board.drop_in_column(&alice, 0).expect("legal drop");
    }
    assert!(board.game_ended());
    assert_eq!(board.drop_in_column(&bob, 1), Err(MoveError::GameOver));
    assert_eq!(board.place_at(&bob, 1, 0), Err(MoveError::GameOver));
}

#[test]
fn failed_moves_leave_the_board_untouched() {
    let ids = connectn::IdSequence::new();
    let mut board = Board::create_with(&ids, 6, 6, 4).expect("valid configuration");
    let mut twin = Board::create_with(&ids, 6, 6, 4).expect("valid configuration");
    let alice = Player::new("alice");
    let bob = Player::new("bob");
    for b in [&mut board, &mut twin] {
        b.drop_in_column(&alice, 0).expect("legal drop");
        b.drop_in_column(&bob, 1).expect("legal drop");
    }

    assert!(board.drop_in_column(&bob, 2).is_err());
    assert!(board.place_at(&alice, 4, 3).is_err());
    assert!(board.drop_in_column(&alice, 17).is_err());
    assert!(compare_boards(&board, &twin));
}

#[test]
fn legal_play_preserves_the_structural_invariants() {
    let mut board = board();
    let alice = Player::new("alice");
    let bob = Player::new("bob");
    let script = [(0, 'a'), (0, 'b'), (1, 'a'), (3, 'b'), (1, 'a'), (0, 'b'), (2, 'a')];
    for (column, who) in script {
        let player = if who == 'a' { &alice } else { &bob };
        board.drop_in_column(player, column).expect("legal drop");
        assert_eq!(BoardInvariants::check_all(&board), Ok(()));
    }
}
