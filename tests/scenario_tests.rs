//! Scenario tests on hand-built tables.
//!
//! Each test sets up a concrete table and walks it through the public API,
//! checking the piles, the turn and the events after every step.

use lama::{
    Action, Card, GameError, GameEvent, GameResult, GameState, InvalidMove, LamaConfig, LamaGame,
    LamaGameBuilder, PlayerId, RulesEngine, WinPolicy,
};

fn cards(ranks: &[u8]) -> Vec<Card> {
    ranks.iter().copied().map(Card::new).collect()
}

fn hand(state: &GameState, player: u8) -> Vec<Card> {
    state.hand(PlayerId::new(player)).unwrap().iter().copied().collect()
}

fn stack(state: &GameState) -> Vec<Card> {
    state.stack().iter().copied().collect()
}

/// Playing the wrap card from the reference table.
#[test]
fn test_reference_wrap_play() {
    let (game, state) = LamaGameBuilder::new().reference_table(42);

    let transition = game.play_card(&state, PlayerId::new(0), 0).unwrap();
    let next = transition.state;

    assert_eq!(stack(&next), cards(&[1, 3]));
    assert_eq!(next.top_card(), Card::new(1));
    assert_eq!(hand(&next, 0), cards(&[2, 3]));
    assert_eq!(next.current_player(), PlayerId::new(1));
    assert_eq!(next.card_count(), state.card_count());
}

/// A 2 on a 3 is refused and nothing changes.
#[test]
fn test_reference_illegal_play() {
    let (game, state) = LamaGameBuilder::new().reference_table(42);
    let before = state.clone();

    let err = game.play_card(&state, PlayerId::new(0), 1).unwrap_err();

    assert_eq!(
        err,
        GameError::InvalidMove(InvalidMove::IllegalCard {
            top: Card::new(3),
            candidate: Card::new(2),
        })
    );
    assert_eq!(state, before);
    assert_eq!(state.current_player(), PlayerId::new(0));
    assert_eq!(hand(&state, 0), cards(&[1, 2, 3]));
}

/// Walk the reference table until player 0 goes out.
#[test]
fn test_reference_round_to_win() {
    let (game, s0) = LamaGameBuilder::new().reference_table(42);
    let (p0, p1, p2) = (PlayerId::new(0), PlayerId::new(1), PlayerId::new(2));

    // P0 plays 3 on 3.
    let s1 = game.play_card(&s0, p0, 2).unwrap().into_state();
    assert_eq!(s1.top_card(), Card::new(3));

    // P1 plays 1 on 3 (wrap).
    let s2 = game.play_card(&s1, p1, 1).unwrap().into_state();
    assert_eq!(s2.top_card(), Card::new(1));
    assert_eq!(hand(&s2, 1), cards(&[3]));

    // P2 holds only a 3: it cannot go on a 1, so P2 draws the deck's first card.
    assert!(game.playable_cards(&s2, p2).is_empty());
    let s3 = game.draw_card(&s2).unwrap().into_state();
    assert_eq!(hand(&s3, 2), cards(&[1, 3]));
    assert_eq!(s3.deck().len(), 7);
    assert_eq!(s3.current_player(), p0);

    // P0 plays 1 on 1, P1 draws a 2, P2 plays 1 on 1.
    let s4 = game.play_card(&s3, p0, 0).unwrap().into_state();
    assert_eq!(hand(&s4, 0), cards(&[2]));

    let s5 = game.draw_card(&s4).unwrap().into_state();
    assert_eq!(hand(&s5, 1), cards(&[2, 3]));

    let s6 = game.play_card(&s5, p2, 0).unwrap().into_state();
    assert_eq!(hand(&s6, 2), cards(&[3]));

    // P0 plays their last card, a 2 on the 1.
    let win = game.play_card(&s6, p0, 0).unwrap();
    assert_eq!(win.winner(), Some(p0));
    assert_eq!(
        win.events,
        vec![
            GameEvent::CardPlayed { player: p0, card: Card::new(2) },
            GameEvent::PlayerWon(p0),
        ]
    );
    assert_eq!(game.is_terminal(&win.state), Some(GameResult::Winner(p0)));
    assert!(win.state.is_round_over());
    assert_eq!(win.state.history().len(), 7);
    assert_eq!(win.state.card_multiset(), s0.card_multiset());
}

/// Drain the deck, then force a reshuffle.
#[test]
fn test_reshuffle_after_deck_runs_out() {
    let state = GameState::from_parts(
        0,
        cards(&[2, 3, 1, 1]),
        cards(&[3]),
        vec![cards(&[1]), cards(&[1])],
        7,
    )
    .unwrap();
    let game = LamaGame::new(LamaConfig::default());

    // P0 takes the last deck card.
    let s1 = game.draw_card(&state).unwrap();
    assert!(s1.state.deck().is_empty());
    assert_eq!(s1.events, vec![GameEvent::CardDrawn { player: PlayerId::new(0) }]);

    // P1 draws from an empty deck: the stack below the 2 becomes the deck.
    let s2 = game.draw_card(&s1.state).unwrap();
    assert_eq!(s2.events[0], GameEvent::DeckReshuffled { cards: 3 });
    assert_eq!(stack(&s2.state), cards(&[2]));
    assert_eq!(s2.state.deck().len(), 2);
    assert_eq!(hand(&s2.state, 1).len(), 2);
    assert_eq!(s2.state.card_multiset(), state.card_multiset());
}

/// Deck empty and only the top card on the stack.
#[test]
fn test_no_cards_available() {
    let state = GameState::from_parts(1, cards(&[3]), vec![], vec![cards(&[2]), cards(&[2])], 0).unwrap();
    let game = LamaGame::new(LamaConfig::default());
    let before = state.clone();

    assert_eq!(game.draw_card(&state), Err(GameError::NoCardsAvailable));
    assert_eq!(
        game.apply_action(&state, PlayerId::new(1), &Action::Draw),
        Err(GameError::NoCardsAvailable)
    );
    assert_eq!(state, before);
    assert!(game.legal_actions(&state, PlayerId::new(1)).is_empty());
    assert_eq!(game.is_terminal(&state), Some(GameResult::Stalled));
}

/// Under PlayOn the reference behaviour holds: turns keep rotating.
#[test]
fn test_play_on_after_win() {
    let (game, state) = LamaGameBuilder::new()
        .win_policy(WinPolicy::PlayOn)
        .reference_table(3);
    let (p0, p1, p2) = (PlayerId::new(0), PlayerId::new(1), PlayerId::new(2));

    let s1 = game.draw_card(&state).unwrap().into_state();
    let s2 = game.draw_card(&s1).unwrap().into_state();

    // P2's single 3 goes on the 3.
    let win = game.play_card(&s2, p2, 0).unwrap();
    assert_eq!(win.winner(), Some(p2));

    let s3 = game.play_card(&win.state, p0, 3).unwrap();
    assert!(s3.winner().is_none());
    assert_eq!(s3.state.winner(), Some(p2));
    assert_eq!(s3.state.current_player(), p1);

    // Everyone still gets a turn, including the winner.
    let s4 = game.draw_card(&s3.state).unwrap().into_state();
    assert_eq!(s4.current_player(), p2);
    assert!(game.legal_actions(&s4, p2).contains(&Action::Draw));
}

/// The round ends for everybody once someone wins.
#[test]
fn test_end_round_after_win() {
    let (game, state) = LamaGameBuilder::new().reference_table(3);
    let p2 = PlayerId::new(2);

    let s1 = game.draw_card(&state).unwrap().into_state();
    let s2 = game.draw_card(&s1).unwrap().into_state();
    let done = game.play_card(&s2, p2, 0).unwrap().into_state();

    assert_eq!(
        game.play_card(&done, PlayerId::new(0), 0),
        Err(GameError::RoundOver { winner: p2 })
    );
    assert_eq!(game.draw_card(&done), Err(GameError::RoundOver { winner: p2 }));
}

/// Public view tracks the piles without revealing hands.
#[test]
fn test_public_view_follows_transitions() {
    let (game, state) = LamaGameBuilder::new().reference_table(1);

    let next = game.draw_card(&state).unwrap().into_state();
    let view = next.public_view();

    assert_eq!(view.current_player, PlayerId::new(1));
    assert_eq!(view.top_card, Card::new(3));
    assert_eq!(view.deck_size, 7);
    assert_eq!(view.hand_sizes[PlayerId::new(0)], 4);
    assert_eq!(view.turn_number, 2);
}
