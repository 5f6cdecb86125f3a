use super::*;
use crate::card::{Card, Suit};
use crate::error::GameError;

fn game() -> Game {
    Game::with_seed(1, 6, 42).unwrap()
}

fn give(game: &mut Game, id: ParticipantId, ranks: &[u8]) {
    for &rank in ranks {
        game.participants[id].hand.push(Card::new(rank, Suit::Clubs));
    }
}

#[test]
fn test_new_game() {
    let game = game();
    assert_eq!(game.participants.len(), 2);
    assert!(game.participants[DEALER].is_dealer);
    assert!(!game.participants[1].is_dealer);
    assert_eq!(game.phase, Phase::Dealing);
    assert_eq!(game.shoe.remaining(), 312);
    assert_eq!(game.winner, None);
}

#[test]
fn test_new_game_invalid_counts() {
    assert_eq!(
        Game::with_seed(0, 6, 0).unwrap_err(),
        GameError::InvalidPlayerCount(0)
    );
    assert_eq!(
        Game::with_seed(8, 6, 0).unwrap_err(),
        GameError::InvalidPlayerCount(8)
    );
    assert_eq!(
        Game::with_seed(1, 0, 0).unwrap_err(),
        GameError::InvalidDeckCount(0)
    );
}

#[test]
fn test_deal_gives_two_cards_each() {
    let mut game = game();
    game.deal();
    assert_eq!(game.participants[DEALER].hand.len(), 2);
    assert_eq!(game.participants[1].hand.len(), 2);
    assert_eq!(game.shoe.remaining(), 308);
    assert!(matches!(game.phase, Phase::PlayerTurn | Phase::Resolved));
}

#[test]
fn test_deal_is_noop_after_round_starts() {
    let mut game = game();
    game.deal();
    let remaining = game.shoe.remaining();
    game.deal();
    assert_eq!(game.shoe.remaining(), remaining);
    assert_eq!(game.participants[1].hand.len(), 2);
}

#[test]
fn test_deal_emits_events() {
    let mut game = game();
    game.deal();
    let events = game.drain_events();
    assert_eq!(
        events[0],
        GameEvent::ControlsChanged {
            show_actions: true,
            show_reset: false,
            reveal_dealer: false,
        }
    );
    let dealt = events
        .iter()
        .filter(|e| matches!(e, GameEvent::CardDealt { .. }))
        .count();
    let scored = events
        .iter()
        .filter(|e| matches!(e, GameEvent::ScoreChanged { .. }))
        .count();
    assert_eq!(dealt, 4);
    assert_eq!(scored, 4);
    assert!(game.drain_events().is_empty());
}

#[test]
fn test_actions_reject_invalid_participant() {
    let mut game = game();
    game.deal();
    assert_eq!(game.hit(DEALER), Err(GameError::InvalidParticipant(0)));
    assert_eq!(game.hit(9), Err(GameError::InvalidParticipant(9)));
    assert_eq!(game.stand(DEALER), Err(GameError::InvalidParticipant(0)));
    assert_eq!(game.stand(9), Err(GameError::InvalidParticipant(9)));
}

#[test]
fn test_natural_pays_double_and_resolves() {
    let mut game = game();
    give(&mut game, 1, &[1, 13]);
    give(&mut game, DEALER, &[13, 9]);
    game.evaluate_initial();

    assert_eq!(game.phase, Phase::Resolved);
    assert_eq!(game.winner, Some(1));
    assert_eq!(game.participants[1].wins, 2);
    assert!(!game.participants[1].in_play);
    let events = game.drain_events();
    assert!(events.contains(&GameEvent::RoundResolved {
        outcome: Outcome::PlayerWin,
        payout: 2,
    }));
}

#[test]
fn test_natural_against_dealer_21_plays_on() {
    let mut game = game();
    give(&mut game, 1, &[1, 13]);
    give(&mut game, DEALER, &[1, 12]);
    game.evaluate_initial();

    assert_eq!(game.phase, Phase::PlayerTurn);
    assert_eq!(game.participants[1].wins, 0);
    assert_eq!(game.winner, None);
}

#[test]
fn test_hit_draws_one_card_for_player() {
    let mut game = game();
    give(&mut game, 1, &[2, 3]);
    give(&mut game, DEALER, &[13, 9]);
    game.phase = Phase::PlayerTurn;

    game.hit(1).unwrap();

    // 2 + 3 cannot bust with one more card; dealer sits on 19.
    assert_eq!(game.participants[1].hand.len(), 3);
    assert_eq!(game.participants[DEALER].hand.len(), 2);
    assert_eq!(game.phase, Phase::PlayerTurn);
}

#[test]
fn test_hit_assists_dealer_below_17() {
    let mut game = game();
    give(&mut game, 1, &[2, 3]);
    give(&mut game, DEALER, &[2, 3]);
    game.phase = Phase::PlayerTurn;

    game.hit(1).unwrap();

    assert_eq!(game.participants[1].hand.len(), 3);
    assert_eq!(game.participants[DEALER].hand.len(), 3);
}

#[test]
fn test_hit_bust_hands_round_to_dealer() {
    let mut game = game();
    // Any draw on a hard 21 busts.
    give(&mut game, 1, &[7, 7, 7]);
    give(&mut game, DEALER, &[13, 9]);
    game.phase = Phase::PlayerTurn;

    game.hit(1).unwrap();

    assert!(game.participants[1].score() > 21);
    assert_eq!(game.phase, Phase::Resolved);
    assert_eq!(game.winner, Some(DEALER));
    // Dealer held exactly two cards, so the win pays double.
    assert_eq!(game.participants[DEALER].wins, 2);
    let events = game.drain_events();
    assert!(events.contains(&GameEvent::RoundResolved {
        outcome: Outcome::DealerWin,
        payout: 2,
    }));
}

#[test]
fn test_hit_is_noop_when_shoe_is_empty() {
    let mut game = game();
    give(&mut game, 1, &[2, 3]);
    give(&mut game, DEALER, &[13, 9]);
    game.phase = Phase::PlayerTurn;
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
    while !game.shoe.is_empty() {
        game.shoe.draw(&mut rng);
    }

    game.hit(1).unwrap();

    assert_eq!(game.participants[1].hand.len(), 2);
    assert_eq!(game.phase, Phase::PlayerTurn);
}

#[test]
fn test_stand_player_wins_higher_total() {
    let mut game = game();
    give(&mut game, 1, &[13, 12]);
    give(&mut game, DEALER, &[13, 8]);
    game.phase = Phase::PlayerTurn;

    game.stand(1).unwrap();

    assert_eq!(game.phase, Phase::Resolved);
    assert_eq!(game.winner, Some(1));
    assert_eq!(game.participants[1].wins, 1);
    let events = game.drain_events();
    assert!(events.contains(&GameEvent::RoundResolved {
        outcome: Outcome::PlayerWin,
        payout: 1,
    }));
    assert!(events.contains(&GameEvent::ControlsChanged {
        show_actions: false,
        show_reset: true,
        reveal_dealer: true,
    }));
}

#[test]
fn test_stand_tie_goes_to_dealer() {
    let mut game = game();
    give(&mut game, 1, &[13, 8]);
    give(&mut game, DEALER, &[13, 8]);
    game.phase = Phase::PlayerTurn;

    game.stand(1).unwrap();

    assert_eq!(game.winner, Some(DEALER));
    assert_eq!(game.participants[DEALER].wins, 2);
    assert_eq!(game.participants[1].wins, 0);
}

#[test]
fn test_stand_with_21_pays_double() {
    let mut game = game();
    give(&mut game, 1, &[1, 13]);
    give(&mut game, DEALER, &[13, 12]);
    game.phase = Phase::PlayerTurn;

    game.stand(1).unwrap();

    assert_eq!(game.winner, Some(1));
    assert_eq!(game.participants[1].wins, 2);
}

#[test]
fn test_stand_both_21_is_push() {
    let mut game = game();
    give(&mut game, 1, &[1, 13]);
    give(&mut game, DEALER, &[7, 7, 7]);
    game.phase = Phase::PlayerTurn;

    game.stand(1).unwrap();

    assert!(game.push);
    assert_eq!(game.winner, None);
    assert_eq!(game.participants[1].wins, 0);
    assert_eq!(game.participants[DEALER].wins, 0);
    let events = game.drain_events();
    assert!(events.contains(&GameEvent::RoundResolved {
        outcome: Outcome::Push,
        payout: 0,
    }));
}

#[test]
fn test_stand_against_dealer_21_pays_nothing() {
    let mut game = game();
    give(&mut game, 1, &[13, 8]);
    give(&mut game, DEALER, &[1, 13]);
    game.phase = Phase::PlayerTurn;

    game.stand(1).unwrap();

    assert_eq!(game.winner, Some(DEALER));
    assert_eq!(game.participants[DEALER].wins, 0);
    let events = game.drain_events();
    assert!(events.contains(&GameEvent::RoundResolved {
        outcome: Outcome::DealerWin,
        payout: 0,
    }));
}

#[test]
fn test_stand_dealer_bust_pays_single() {
    let mut game = game();
    give(&mut game, 1, &[13, 8]);
    give(&mut game, DEALER, &[13, 12, 5]);
    game.phase = Phase::PlayerTurn;

    game.stand(1).unwrap();

    assert_eq!(game.winner, Some(1));
    assert_eq!(game.participants[1].wins, 1);
}

#[test]
fn test_stand_after_stand_is_noop() {
    let mut game = game();
    give(&mut game, 1, &[13, 12]);
    give(&mut game, DEALER, &[13, 8]);
    game.phase = Phase::PlayerTurn;
    game.stand(1).unwrap();
    let wins = game.participants[1].wins;

    game.stand(1).unwrap();
    game.hit(1).unwrap();

    assert_eq!(game.participants[1].wins, wins);
    assert_eq!(game.participants[1].hand.len(), 2);
}

#[test]
fn test_dealer_autoplay_halts_at_17_or_exhaustion() {
    for seed in 0..25 {
        let mut game = Game::with_seed(1, 6, seed).unwrap();
        game.deal();
        if game.phase != Phase::PlayerTurn {
            continue;
        }
        game.stand(1).unwrap();
        assert_eq!(game.phase, Phase::Resolved);
        assert!(game.participants[DEALER].score() >= 17 || game.shoe.is_empty());
    }
}

#[test]
fn test_reset_round_keeps_scoreboard_and_reshuffles() {
    let mut game = game();
    give(&mut game, 1, &[13, 12]);
    give(&mut game, DEALER, &[13, 8]);
    game.phase = Phase::PlayerTurn;
    game.stand(1).unwrap();
    assert_eq!(game.participants[1].wins, 1);

    game.reset_round();

    assert_eq!(game.participants[1].wins, 1);
    assert_eq!(game.participants[DEALER].hand.len(), 2);
    assert_eq!(game.participants[1].hand.len(), 2);
    assert_eq!(game.shoe.remaining(), 312 - 4);
    assert_eq!(game.winner, None);
    assert!(!game.push);
    assert!(matches!(game.phase, Phase::PlayerTurn | Phase::Resolved));
}

#[test]
fn test_score_of() {
    let mut game = game();
    give(&mut game, 1, &[1, 13]);
    assert_eq!(game.score_of(1), Some(21));
    assert_eq!(game.score_of(DEALER), Some(0));
    assert_eq!(game.score_of(5), None);
}
