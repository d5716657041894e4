//! Integration test: Selection -> Card -> GameResult pipeline
//!
//! Plays games through the public API and checks the tally invariants, the
//! card population and the terminal-state behavior.

use cardsim::game::{possible_cards, Card, Combination, Game, GameConfig, Selection};
use cardsim::services::create_game;
use cardsim::GameError;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

// =========================================================================
// Card population
// =========================================================================

#[test]
fn test_population_is_exhaustive_for_standard_game() {
    let config = GameConfig::standard(1).unwrap();
    let keys: Vec<String> = possible_cards(&config)
        .iter()
        .map(|card| card.key_combination().to_string())
        .collect();

    assert_eq!(
        keys,
        vec!["111", "115", "151", "155", "511", "515", "551", "555"],
        "One card per combination, in enumeration order"
    );
}

#[test]
fn test_population_scales_with_option_count() {
    for options in [vec![1], vec![1, 5], vec![2, 4, 8], vec![1, 2, 3, 4]] {
        let config = GameConfig::new(1, options.clone()).unwrap();
        let cards = possible_cards(&config);
        let keys: HashSet<Combination> = cards.iter().map(Card::key_combination).collect();

        assert_eq!(cards.len(), config.combination_count());
        assert_eq!(keys.len(), cards.len(), "duplicate card for {:?}", options);
        assert_eq!(keys, config.combinations().into_iter().collect::<HashSet<_>>());
    }
}

#[test]
fn test_every_selection_scores_identically_twice() {
    let config = GameConfig::standard(1).unwrap();
    for card in possible_cards(&config) {
        for a in 1..=2 {
            for b in 1..=2 {
                for c in 1..=2 {
                    let selection = Selection::new(vec![a, b, c]);
                    let first = card.score(&selection).unwrap();
                    let second = card.score(&selection).unwrap();
                    assert_eq!(first, second);
                    assert_eq!(
                        first.wins,
                        first.combination.symbols().iter().all(|&s| s == first.combination.symbols()[0])
                    );
                }
            }
        }
    }
}

// =========================================================================
// Tally invariants
// =========================================================================

#[test]
fn test_thousand_trials_fill_the_tally() {
    let mut game = create_game("scenario", 1000).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let selections = [
        Selection::new(vec![1, 1, 1]),
        Selection::new(vec![2, 1, 2]),
        Selection::new(vec![1, 2, 2]),
    ];

    for i in 0..1000 {
        game.play(&selections[i % selections.len()], &mut rng).unwrap();
    }

    let result = game.result();
    let labelled: u64 = ["111", "115", "151", "155", "511", "515", "551", "555"]
        .iter()
        .map(|label| result.combination_count(label).unwrap())
        .sum();
    assert_eq!(labelled, 1000);
    assert_eq!(result.losses() + result.total_wins(), 1000);
    assert_eq!(
        result.total_wins(),
        result.combination_count("111").unwrap() + result.combination_count("555").unwrap()
    );
}

#[test]
fn test_uniform_draws_are_roughly_uniform() {
    // Column 1 everywhere reads the card's key, so counts track the draws
    let mut game = create_game("uniformity", 80_000).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    let selection = Selection::new(vec![1, 1, 1]);
    while !game.is_finished() {
        game.play(&selection, &mut rng).unwrap();
    }

    for (combination, count) in game.result().combinations() {
        let share = *count as f64 / 80_000.0;
        assert!(
            (share - 0.125).abs() < 0.01,
            "{} drawn {:.3} of the time",
            combination,
            share
        );
    }
}

// =========================================================================
// Terminal state and validation
// =========================================================================

#[test]
fn test_finished_game_rejects_play_and_keeps_tally() {
    let mut game = Game::new("terminal", GameConfig::new(3, vec![1, 5]).unwrap());
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let selection = Selection::new(vec![2, 2, 1]);
    for _ in 0..3 {
        game.play(&selection, &mut rng).unwrap();
    }
    let snapshot = game.result().combinations().to_vec();

    let err = game.play(&selection, &mut rng).unwrap_err();
    assert_eq!(err, GameError::AlreadyFinished { max_tries: 3 });
    assert_eq!(game.result().combinations(), snapshot.as_slice());
    assert_eq!(game.trials().len(), 3);
}

#[test]
fn test_invalid_selections_never_touch_the_tally() {
    let mut game = create_game("invalid", 10).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(4);

    for bad in [vec![], vec![1, 1], vec![1, 1, 1, 1], vec![0, 1, 1], vec![1, 3, 1]] {
        let err = game.play(&Selection::new(bad), &mut rng).unwrap_err();
        assert!(matches!(err, GameError::InvalidSelection { rows: 3, columns: 2, .. }));
    }
    assert_eq!(game.result().total(), 0);
    assert_eq!(game.result().losses(), 0);
    assert_eq!(game.remaining_tries(), 10);
}
