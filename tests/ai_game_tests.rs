use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{AiPlayer, Board};

/// Two automated opponents firing at each other must finish well inside the
/// exhaustive bound of one full board sweep each.
#[test]
fn test_ai_vs_ai_game_terminates() {
    for seed in [123u64, 7, 99] {
        let mut rng = SmallRng::seed_from_u64(seed);
        let lengths = vec![5, 4, 3, 3, 2];

        let mut board_a = Board::new(10);
        let mut board_b = Board::new(10);
        let mut ai_a = AiPlayer::new(10);
        let mut ai_b = AiPlayer::new(10);
        ai_a.place_ships(&mut rng, &mut board_a, lengths.clone());
        ai_b.place_ships(&mut rng, &mut board_b, lengths.clone());

        let mut turns = 0;
        loop {
            turns += 1;
            assert!(turns <= 200, "game took too many turns (seed {seed})");

            let shot = ai_a.select_target(&mut rng);
            let res = board_b.attack(shot).unwrap();
            ai_a.record_attack(shot, res);
            if board_b.is_game_over() {
                break;
            }

            let shot = ai_b.select_target(&mut rng);
            let res = board_a.attack(shot).unwrap();
            ai_b.record_attack(shot, res);
            if board_a.is_game_over() {
                break;
            }
        }
        assert!(board_a.is_game_over() || board_b.is_game_over());
    }
}
