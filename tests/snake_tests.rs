//! Snake tests - movement, growth, wrap-around and self-collision

use tui_demos::core::{GameStatus, SnakeConfig, SnakeGame, TickOutcome};
use tui_demos::types::{Direction, Point};

const ALL_DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

fn board(width: u16, height: u16) -> SnakeConfig {
    SnakeConfig { width, height }
}

fn body(game: &SnakeGame) -> Vec<Point> {
    game.body().iter().copied().collect()
}

#[test]
fn test_scenario_eating_grows_and_scores() {
    let mut game = SnakeGame::from_parts(
        board(10, 10),
        [Point::new(5, 5)],
        Direction::Right,
        Point::new(6, 5),
        1,
    );

    assert_eq!(game.tick(), TickOutcome::Ate);
    assert_eq!(game.score(), 10);
    assert_eq!(body(&game), vec![Point::new(6, 5), Point::new(5, 5)]);
    let food = game.food();
    assert!(food.x < 10 && food.y < 10);
}

#[test]
fn test_scenario_moving_keeps_length() {
    let mut game = SnakeGame::from_parts(
        board(10, 10),
        [Point::new(5, 5), Point::new(4, 5)],
        Direction::Right,
        Point::new(0, 0),
        1,
    );

    assert_eq!(game.tick(), TickOutcome::Moved);
    assert_eq!(body(&game), vec![Point::new(6, 5), Point::new(5, 5)]);
    assert_eq!(game.score(), 0);
    assert_eq!(game.food(), Point::new(0, 0));
}

#[test]
fn test_scenario_reverse_steering_is_refused() {
    let mut game = SnakeGame::from_parts(
        board(10, 10),
        [Point::new(5, 5), Point::new(4, 5)],
        Direction::Right,
        Point::new(0, 0),
        1,
    );

    assert!(!game.steer(Direction::Left));
    assert_eq!(game.direction(), Direction::Right);

    // The refused turn must not lead into the neck on the next tick.
    assert_eq!(game.tick(), TickOutcome::Moved);
    assert_eq!(game.head(), Point::new(6, 5));
    assert_eq!(game.status(), GameStatus::Running);
}

#[test]
fn test_reverse_is_refused_for_every_heading() {
    for dir in ALL_DIRECTIONS {
        let mut game =
            SnakeGame::from_parts(board(8, 8), [Point::new(4, 4)], dir, Point::new(0, 0), 1);
        assert!(!game.steer(dir.reverse()));
        assert_eq!(game.direction(), dir);
        for turn in ALL_DIRECTIONS.into_iter().filter(|d| *d != dir.reverse()) {
            let mut g = game.clone();
            assert!(g.steer(turn));
            assert_eq!(g.direction(), turn);
        }
        game.tick();
    }
}

#[test]
fn test_length_changes_only_when_eating() {
    let mut game = SnakeGame::new(board(12, 9), 2718);
    let dirs = [Direction::Right, Direction::Down, Direction::Left, Direction::Down];
    let mut score = 0;

    for step in 0..300 {
        if step % 7 == 0 {
            game.steer(dirs[(step / 7) % dirs.len()]);
        }
        let before = game.len();
        match game.tick() {
            TickOutcome::Moved => assert_eq!(game.len(), before),
            TickOutcome::Ate => {
                assert_eq!(game.len(), before + 1);
                assert_eq!(game.score(), score + 10);
            }
            TickOutcome::Collided | TickOutcome::Over => {
                assert_eq!(game.len(), before);
                break;
            }
        }
        assert!(game.score() >= score);
        score = game.score();
    }
}

#[test]
fn test_head_always_stays_on_the_board() {
    let (w, h) = (7, 5);
    for x in 0..w {
        for y in 0..h {
            for dir in ALL_DIRECTIONS {
                let mut game = SnakeGame::from_parts(
                    board(w, h),
                    [Point::new(x, y)],
                    dir,
                    Point::new((x + 3) % w, (y + 2) % h),
                    1,
                );
                game.tick();
                let head = game.head();
                assert!(head.x < w && head.y < h, "head {:?} off board", head);
            }
        }
    }
}

#[test]
fn test_wraps_to_the_opposite_edge() {
    let mut game = SnakeGame::from_parts(
        board(10, 10),
        [Point::new(9, 0)],
        Direction::Right,
        Point::new(5, 5),
        1,
    );
    game.tick();
    assert_eq!(game.head(), Point::new(0, 0));
    game.steer(Direction::Up);
    game.tick();
    assert_eq!(game.head(), Point::new(0, 9));
}

#[test]
fn test_self_collision_ends_game_without_mutation() {
    // Head at (5,5) heading down into its own body at (5,6).
    let segments = [
        Point::new(5, 5),
        Point::new(6, 5),
        Point::new(6, 6),
        Point::new(5, 6),
        Point::new(4, 6),
    ];
    let mut game = SnakeGame::from_parts(
        board(10, 10),
        segments,
        Direction::Down,
        Point::new(0, 0),
        1,
    );

    assert_eq!(game.tick(), TickOutcome::Collided);
    assert_eq!(game.status(), GameStatus::GameOver);
    assert!(game.is_over());
    assert_eq!(body(&game), segments.to_vec());
    assert_eq!(game.score(), 0);
    assert_eq!(game.food(), Point::new(0, 0));

    // GameOver is terminal.
    assert_eq!(game.tick(), TickOutcome::Over);
    assert!(!game.steer(Direction::Left));
    assert_eq!(body(&game), segments.to_vec());
}

#[test]
fn test_running_into_the_tail_cell_collides() {
    // The tail would move away this tick, but it still counts as occupied.
    let segments = [
        Point::new(5, 5),
        Point::new(5, 6),
        Point::new(4, 6),
        Point::new(4, 5),
    ];
    let mut game = SnakeGame::from_parts(
        board(10, 10),
        segments,
        Direction::Left,
        Point::new(0, 0),
        1,
    );
    assert_eq!(game.next_head(), Point::new(4, 5));
    assert_eq!(game.tick(), TickOutcome::Collided);
}

#[test]
fn test_no_collision_when_next_head_is_free() {
    let segments = [Point::new(5, 5), Point::new(5, 6), Point::new(4, 6)];
    let mut game = SnakeGame::from_parts(
        board(10, 10),
        segments,
        Direction::Up,
        Point::new(0, 0),
        1,
    );
    assert!(!game.occupies(game.next_head()));
    assert_eq!(game.tick(), TickOutcome::Moved);
    assert_eq!(game.status(), GameStatus::Running);
}

#[test]
fn test_body_cells_stay_unique_while_alive() {
    let mut game = SnakeGame::new(board(15, 10), 8);
    let dirs = [Direction::Down, Direction::Left, Direction::Up, Direction::Left];
    for step in 0..500 {
        if step % 5 == 0 {
            game.steer(dirs[(step / 5) % dirs.len()]);
        }
        if game.tick() != TickOutcome::Moved && game.is_over() {
            break;
        }
        let mut cells = body(&game);
        let len = cells.len();
        cells.sort_by_key(|p| (p.y, p.x));
        cells.dedup();
        assert_eq!(cells.len(), len);
    }
}
