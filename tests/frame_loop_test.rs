//! Frame loop tests driven by scripted input, a recording console and a
//! recording pacer. Nothing here touches the real terminal or sleeps.

use std::time::Duration;

use tui_demos::core::{
    Fireworks, FireworksConfig, MatrixRain, RainConfig, SnakeConfig, SnakeGame,
};
use tui_demos::engine::{
    CancelToken, Demo, FireworksDemo, FrameLoop, LoopExit, RainDemo, RecordingPacer, SnakeDemo,
    Step,
};
use tui_demos::input::{Command, NoInput, ScriptedInput};
use tui_demos::term::{ConsoleOp, FrameBuffer, RecordingConsole, TerminalRenderer};
use tui_demos::types::{Direction, Point};

fn recording_loop<I: tui_demos::input::InputSource>(
    input: I,
) -> FrameLoop<RecordingConsole, I, RecordingPacer> {
    FrameLoop::new(
        TerminalRenderer::new(RecordingConsole::new()),
        input,
        RecordingPacer::new(),
    )
}

fn two_segment_snake(food: Point) -> SnakeDemo {
    SnakeDemo::from_game(SnakeGame::from_parts(
        SnakeConfig {
            width: 10,
            height: 10,
        },
        [Point::new(5, 5), Point::new(4, 5)],
        Direction::Right,
        food,
        1,
    ))
}

#[test]
fn test_quit_before_first_tick_renders_nothing() {
    let mut demo = two_segment_snake(Point::new(0, 0));
    let mut fl = recording_loop(ScriptedInput::new([Some(Command::Quit)]));

    let report = fl.run(&mut demo).unwrap();
    assert_eq!(report.exit, LoopExit::Quit);
    assert_eq!(report.frames, 0);
    assert!(fl.renderer().console().ops().is_empty());
    assert!(fl.pacer().waits().is_empty());
    assert_eq!(demo.game().head(), Point::new(5, 5));
}

#[test]
fn test_quit_after_a_few_frames() {
    let mut demo = FireworksDemo::new(FireworksConfig::default(), 3);
    let mut fl = recording_loop(ScriptedInput::new([None, None, Some(Command::Quit)]));

    let report = fl.run(&mut demo).unwrap();
    assert_eq!(report.exit, LoopExit::Quit);
    assert_eq!(report.frames, 2);
    assert_eq!(demo.sim().radius(), 2);
}

#[test]
fn test_snake_collision_finishes_after_rendering_game_over() {
    let game = SnakeGame::from_parts(
        SnakeConfig {
            width: 10,
            height: 10,
        },
        [
            Point::new(5, 5),
            Point::new(6, 5),
            Point::new(6, 6),
            Point::new(5, 6),
        ],
        Direction::Down,
        Point::new(0, 0),
        1,
    );
    let mut demo = SnakeDemo::from_game(game);
    let mut fl = recording_loop(NoInput);

    let report = fl.run(&mut demo).unwrap();
    assert_eq!(report.exit, LoopExit::Finished);
    assert_eq!(report.frames, 1);
    assert!(demo.game().is_over());

    let frame = fl.last_frame();
    assert_eq!(frame.height(), 11);
    assert!(frame.row_text(10).starts_with("Game Over! Score: 0"));
    assert!(fl.renderer().console().text().contains("Game Over! Score: 0"));
    // A finished run does not sleep after its last frame.
    assert!(fl.pacer().waits().is_empty());
}

#[test]
fn test_steering_is_applied_before_the_tick() {
    let mut demo = two_segment_snake(Point::new(0, 0));
    let mut fl = recording_loop(ScriptedInput::new([Some(Command::Steer(Direction::Up))]))
        .with_frame_limit(1);

    let report = fl.run(&mut demo).unwrap();
    assert_eq!(report.exit, LoopExit::FrameLimit);
    assert_eq!(demo.game().head(), Point::new(5, 4));
    assert_eq!(demo.game().direction(), Direction::Up);
}

#[test]
fn test_reverse_command_is_ignored() {
    let mut demo = two_segment_snake(Point::new(0, 0));
    let mut fl = recording_loop(ScriptedInput::new([Some(Command::Steer(Direction::Left))]))
        .with_frame_limit(1);

    fl.run(&mut demo).unwrap();
    assert_eq!(demo.game().head(), Point::new(6, 5));
    assert!(!demo.game().is_over());
}

#[test]
fn test_eating_updates_the_status_line() {
    let mut demo = two_segment_snake(Point::new(6, 5));
    let mut fl = recording_loop(NoInput).with_frame_limit(1);

    fl.run(&mut demo).unwrap();
    assert_eq!(demo.game().score(), 10);
    assert_eq!(demo.game().len(), 3);
    assert!(fl.last_frame().row_text(10).starts_with("Score: 10"));
}

#[test]
fn test_snake_frames_are_paced_at_80ms() {
    let mut demo = two_segment_snake(Point::new(0, 0));
    let mut fl = recording_loop(NoInput).with_frame_limit(4);

    fl.run(&mut demo).unwrap();
    assert_eq!(fl.pacer().waits(), &[Duration::from_millis(80); 4]);
}

#[test]
fn test_fireworks_holds_after_a_full_burst() {
    let mut demo = FireworksDemo::from_sim(Fireworks::new(FireworksConfig::default(), 12));
    let mut fl = recording_loop(NoInput).with_frame_limit(15);

    let report = fl.run(&mut demo).unwrap();
    assert_eq!(report.frames, 15);

    // Frames 0..=13 show rings 1..=14; the hold follows the last ring.
    let waits = fl.pacer().waits();
    assert_eq!(waits.len(), 15);
    for (i, wait) in waits.iter().enumerate() {
        let expected = if i == 13 { 850 } else { 50 };
        assert_eq!(*wait, Duration::from_millis(expected), "frame {}", i);
    }
    assert_eq!(demo.sim().launches(), 2);
}

#[test]
fn test_fireworks_first_frame_shows_the_radius_one_ring() {
    let mut demo = FireworksDemo::new(FireworksConfig::default(), 8);
    let burst = demo.sim().burst();
    let mut fl = recording_loop(NoInput).with_frame_limit(1);

    fl.run(&mut demo).unwrap();
    assert_eq!(demo.sim().burst(), burst);

    let frame = fl.last_frame();
    let lit: Vec<_> = frame.lit_cells().collect();
    assert!(!lit.is_empty());
    for (x, y, _) in lit {
        let dx = (x as i32 - burst.center_x) as f32;
        let dy = (y as i32 - burst.center_y) as f32;
        assert!((dx.hypot(dy) - 1.0).abs() < 1.5);
    }
}

#[test]
fn test_fireworks_redraws_every_frame() {
    let mut demo = FireworksDemo::new(FireworksConfig::default(), 4);
    let mut fl = recording_loop(NoInput).with_frame_limit(6);

    fl.run(&mut demo).unwrap();
    let console = fl.renderer().console();
    assert_eq!(console.count(ConsoleOp::Clear), 6);
    assert_eq!(console.count(ConsoleOp::Home), 6);
    assert_eq!(console.count(ConsoleOp::Flush), 6);
    assert_eq!(fl.renderer().frames(), 6);
}

#[test]
fn test_rain_appends_one_line_per_frame() {
    let mut demo = RainDemo::from_sim(MatrixRain::new(RainConfig::default(), 21));
    let mut fl = recording_loop(NoInput).with_frame_limit(5);

    fl.run(&mut demo).unwrap();
    let console = fl.renderer().console();
    assert_eq!(console.count(ConsoleOp::Clear), 0);
    assert_eq!(console.count(ConsoleOp::Home), 0);

    let text = console.text();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 5);
    for line in lines {
        assert_eq!(line.chars().count(), 120);
    }
    assert_eq!(fl.pacer().waits(), &[Duration::from_millis(40); 5]);
}

#[test]
fn test_pre_cancelled_token_stops_immediately() {
    let token = CancelToken::new();
    token.cancel();
    let mut demo = RainDemo::new(RainConfig::default(), 1);
    let mut fl = recording_loop(NoInput).with_cancel_token(token);

    let report = fl.run(&mut demo).unwrap();
    assert_eq!(report.exit, LoopExit::Cancelled);
    assert_eq!(report.frames, 0);
}

struct CancelAfter {
    token: CancelToken,
    remaining: u32,
}

impl Demo for CancelAfter {
    fn name(&self) -> &'static str {
        "cancel-after"
    }

    fn interval(&self) -> Duration {
        Duration::from_millis(1)
    }

    fn tick(&mut self) -> Step {
        self.remaining -= 1;
        if self.remaining == 0 {
            self.token.cancel();
        }
        Step::Continue
    }

    fn render(&self, fb: &mut FrameBuffer) {
        fb.resize(1, 1);
    }
}

#[test]
fn test_cancel_is_observed_at_the_next_frame_boundary() {
    let token = CancelToken::new();
    let mut demo = CancelAfter {
        token: token.clone(),
        remaining: 3,
    };
    let mut fl = recording_loop(NoInput).with_cancel_token(token);

    let report = fl.run(&mut demo).unwrap();
    assert_eq!(report.exit, LoopExit::Cancelled);
    assert_eq!(report.frames, 3);
    assert_eq!(fl.pacer().waits().len(), 3);
}
