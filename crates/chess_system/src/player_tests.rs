use super::*;

fn player(wins: u32, draws: u32, losses: u32) -> Player {
    Player {
        wins,
        draws,
        losses,
        games_played: wins + draws + losses,
        ..Player::default()
    }
}

#[test]
fn test_record_counts_each_result() {
    let mut p = Player::new();
    p.record(GameResult::Win, 30);
    p.record(GameResult::Draw, 20);
    p.record(GameResult::Loss, 10);

    assert_eq!(p.wins, 1);
    assert_eq!(p.draws, 1);
    assert_eq!(p.losses, 1);
    assert_eq!(p.games_played, 3);
    assert_eq!(p.time_played, 60);
}

#[test]
fn test_points_and_level() {
    let p = player(2, 1, 1);
    assert_eq!(p.points(), 5);
    assert_eq!(p.level_score(), 12 - 10 + 2);
    assert_eq!(p.level(), Some(1.0));

    assert_eq!(player(1, 0, 1).level(), Some(-2.0));
    assert_eq!(Player::new().level(), None);
}

#[test]
fn test_standing_prefers_points() {
    assert_eq!(player(2, 0, 5).compare_standing(&player(1, 1, 0)), Ordering::Greater);
    assert_eq!(player(0, 1, 0).compare_standing(&player(1, 0, 0)), Ordering::Less);
}

#[test]
fn test_standing_tie_breaks_on_losses_then_wins() {
    // Equal points, fewer losses ranks higher
    assert_eq!(player(1, 0, 0).compare_standing(&player(1, 0, 3)), Ordering::Greater);

    // Equal points and losses, more wins ranks higher
    let a = player(1, 0, 0);
    let b = player(0, 2, 0);
    assert_eq!(a.compare_standing(&b), Ordering::Greater);
    assert_eq!(b.compare_standing(&a), Ordering::Less);

    assert_eq!(player(1, 1, 1).compare_standing(&player(1, 1, 1)), Ordering::Equal);
}

#[test]
fn test_convert_draw_and_loss_to_win() {
    let mut p = player(0, 1, 1);
    p.convert_to_win(GameResult::Draw);
    assert_eq!((p.wins, p.draws, p.losses), (1, 0, 1));

    p.convert_to_win(GameResult::Loss);
    assert_eq!((p.wins, p.draws, p.losses), (2, 0, 0));
    assert_eq!(p.games_played, 2);
}

#[test]
fn test_convert_existing_win_is_noop() {
    let mut p = player(1, 0, 0);
    p.convert_to_win(GameResult::Win);
    assert_eq!(p, player(1, 0, 0));
}

#[test]
fn test_convert_ignores_player_without_games() {
    let mut p = Player::new();
    p.convert_to_win(GameResult::Loss);
    assert_eq!(p, Player::new());
}

#[test]
fn test_reset_tombstones() {
    let mut p = player(3, 2, 1);
    p.time_played = 500;
    p.reset();

    assert!(p.removed);
    assert!(!p.has_played());
    assert_eq!(p.points(), 0);
    assert_eq!(p.time_played, 0);
}

#[test]
fn test_merge_sums_counters() {
    let mut total = player(1, 0, 2);
    total.time_played = 100;
    let mut other = player(2, 1, 0);
    other.time_played = 40;

    total.merge(&other);
    assert_eq!((total.wins, total.draws, total.losses), (3, 1, 2));
    assert_eq!(total.games_played, 6);
    assert_eq!(total.time_played, 140);
}
