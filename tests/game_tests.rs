use gunnery::{Game, GameStatus};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::collections::HashSet;

#[test]
fn test_opponent_defeats_a_passive_player() {
    let mut rng = SmallRng::seed_from_u64(321);
    let mut game = Game::new();
    game.setup(&mut rng).unwrap();

    let mut turns = 0;
    let mut seen = HashSet::new();
    while game.status() == GameStatus::InProgress {
        turns += 1;
        let shot = game
            .opponent_turn(&mut rng)
            .unwrap()
            .expect("board exhausted before the game ended");
        assert!(seen.insert(shot.coord), "opponent repeated {}", shot.coord);
        if turns > 100 {
            panic!("game took too many turns");
        }
    }
    assert_eq!(game.status(), GameStatus::Lost);
}

#[test]
fn test_player_can_win() {
    let mut rng = SmallRng::seed_from_u64(654);
    let mut game = Game::new();
    game.setup(&mut rng).unwrap();

    // sink the enemy fleet by sweeping the whole board
    'sweep: for r in 0..10 {
        for c in 0..10 {
            game.player_attack(gunnery::Coord::new(r, c)).unwrap();
            if game.status() == GameStatus::Won {
                break 'sweep;
            }
        }
    }
    assert_eq!(game.status(), GameStatus::Won);
}

#[test]
fn test_reset_restores_a_fresh_game() {
    let mut rng = SmallRng::seed_from_u64(987);
    let mut game = Game::new();
    game.setup(&mut rng).unwrap();

    for _ in 0..5 {
        game.opponent_turn(&mut rng).unwrap().unwrap();
    }
    assert_eq!(game.opponent().history().count(), 5);

    game.reset();
    assert_eq!(game.opponent().history().count(), 0);
    assert_eq!(game.status(), GameStatus::InProgress);
    assert!(game.player_board().ship_map().is_empty());
    assert!(game.enemy_board().ship_map().is_empty());

    // a fresh setup plays normally
    game.setup(&mut rng).unwrap();
    assert!(game.opponent_turn(&mut rng).unwrap().is_some());
}
