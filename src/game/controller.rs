use std::time::Duration;

use super::command::{Command, Direction};
use super::config::GameConfig;
use super::food::{FOOD_COLOR, Food};
use super::grid::Grid;
use super::snake::Snake;
use super::snapshot::{CellSprite, FoodSprite, FrameSnapshot};

/// High-level game state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Title screen, waiting for the first start command
    Start,
    Playing,
    GameOver,
}

/// What ended the game on a given step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    /// Head left the playfield
    Wall,
    /// Head ran into the body
    Body,
}

/// Outcome of a performed grid step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    pub ate_food: bool,
    pub collision: Option<CollisionKind>,
}

/// Owns the snake, the food and the phase machine, and advances the
/// simulation on a fixed wall-clock interval
///
/// Every operation is total: commands that are invalid in the current
/// phase are ignored rather than signalled, so no player input can
/// corrupt the simulation.
pub struct GameController {
    grid: Grid,
    pub(crate) snake: Snake,
    pub(crate) food: Food,
    phase: Phase,
    score: u32,
    score_increment: u32,
    /// Pending heading; applied to the snake as soon as it is accepted
    direction: Direction,
    move_interval: Duration,
    since_step: Duration,
}

impl GameController {
    pub fn new(config: &GameConfig) -> Self {
        let grid = config.grid();
        Self {
            grid,
            snake: Snake::new(grid.center(), grid.cell),
            food: Food::new(grid),
            phase: Phase::Start,
            score: 0,
            score_increment: config.score_increment,
            direction: Direction::Right,
            move_interval: config.move_interval(),
            since_step: Duration::ZERO,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Feed one decoded player command into the state machine
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::StartOrRestart => {
                if matches!(self.phase, Phase::Start | Phase::GameOver) {
                    self.reset();
                    self.phase = Phase::Playing;
                }
            }
            Command::Steer(requested) => {
                if self.phase != Phase::Playing {
                    return;
                }
                // A reversal would walk the head straight into the neck
                if requested.is_opposite(self.direction) {
                    return;
                }
                self.direction = requested;
                self.snake.set_heading(requested);
            }
        }
    }

    /// Advance the simulation by `elapsed` wall-clock time
    ///
    /// Performs at most one grid step per call, once the accumulated
    /// time reaches the move interval; a long stall never burst-moves
    /// the snake. Outside `Playing` only the food's cosmetic pulse
    /// advances.
    pub fn tick(&mut self, elapsed: Duration) -> Option<StepReport> {
        self.food.animate(elapsed);

        if self.phase != Phase::Playing {
            return None;
        }

        self.since_step += elapsed;
        if self.since_step < self.move_interval {
            return None;
        }
        self.since_step = Duration::ZERO;

        self.snake.advance();
        Some(self.resolve_step())
    }

    /// Collision resolution for the step just taken: walls first, then
    /// the body, then food
    fn resolve_step(&mut self) -> StepReport {
        let head = self.snake.head();

        if !self.grid.contains(head) {
            self.phase = Phase::GameOver;
            return StepReport {
                ate_food: false,
                collision: Some(CollisionKind::Wall),
            };
        }

        if self.snake.hits_body(head) {
            self.phase = Phase::GameOver;
            return StepReport {
                ate_food: false,
                collision: Some(CollisionKind::Body),
            };
        }

        if head == self.food.position() {
            self.snake.grow();
            self.food.spawn(self.grid);
            self.score += self.score_increment;
            return StepReport {
                ate_food: true,
                collision: None,
            };
        }

        StepReport {
            ate_food: false,
            collision: None,
        }
    }

    /// Rebuild the snake and food and zero the score and step clock.
    /// Runs on the Start -> Playing and GameOver -> Playing edges.
    pub fn reset(&mut self) {
        self.snake = Snake::new(self.grid.center(), self.grid.cell);
        self.direction = Direction::Right;
        self.food.spawn(self.grid);
        self.since_step = Duration::ZERO;
        self.score = 0;
    }

    /// Everything the presentation layer needs to draw one frame
    pub fn snapshot(&self) -> FrameSnapshot {
        let snake = self
            .snake
            .segments()
            .iter()
            .enumerate()
            .map(|(i, &position)| CellSprite {
                position,
                color: self.snake.color_at(i),
            })
            .collect();

        FrameSnapshot {
            snake,
            food: FoodSprite {
                position: self.food.position(),
                scale: self.food.pulse(),
                color: FOOD_COLOR,
            },
            score: self.score,
            phase: self.phase,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::grid::Point;

    const INTERVAL: Duration = Duration::from_millis(120);

    fn playing_controller() -> GameController {
        let mut controller = GameController::new(&GameConfig::default());
        controller.apply(Command::StartOrRestart);
        // Park the food out of the snake's way; tests place it back
        // where they need it
        controller.food.position = Point::new(0, 0);
        controller
    }

    /// One full grid step
    fn step(controller: &mut GameController) -> Option<StepReport> {
        controller.tick(INTERVAL)
    }

    #[test]
    fn test_initial_phase_is_start() {
        let controller = GameController::new(&GameConfig::default());
        assert_eq!(controller.phase(), Phase::Start);
        assert_eq!(controller.score(), 0);
        assert_eq!(controller.snake.len(), 1);
    }

    #[test]
    fn test_start_command_begins_playing() {
        let mut controller = GameController::new(&GameConfig::default());
        controller.apply(Command::StartOrRestart);
        assert_eq!(controller.phase(), Phase::Playing);
    }

    #[test]
    fn test_start_command_ignored_while_playing() {
        let mut controller = playing_controller();
        controller.apply(Command::Steer(Direction::Down));
        controller.apply(Command::StartOrRestart);

        assert_eq!(controller.phase(), Phase::Playing);
        // Still the steered heading, so no reset happened
        assert_eq!(controller.snake.heading(), Direction::Down);
    }

    #[test]
    fn test_steer_ignored_outside_playing() {
        let mut controller = GameController::new(&GameConfig::default());
        controller.apply(Command::Steer(Direction::Down));
        assert_eq!(controller.snake.heading(), Direction::Right);
    }

    #[test]
    fn test_reversal_is_rejected() {
        let mut controller = playing_controller();
        controller.apply(Command::Steer(Direction::Left));
        assert_eq!(controller.snake.heading(), Direction::Right);

        // Perpendicular turns are fine
        controller.apply(Command::Steer(Direction::Up));
        assert_eq!(controller.snake.heading(), Direction::Up);

        // And the reversal check follows the new heading
        controller.apply(Command::Steer(Direction::Down));
        assert_eq!(controller.snake.heading(), Direction::Up);
    }

    #[test]
    fn test_tick_accumulates_until_interval() {
        let mut controller = playing_controller();
        let head = controller.snake.head();

        assert!(controller.tick(Duration::from_millis(60)).is_none());
        assert_eq!(controller.snake.head(), head);

        let report = controller.tick(Duration::from_millis(60));
        assert!(report.is_some());
        assert_eq!(controller.snake.head(), head.stepped(Direction::Right, 20));
    }

    #[test]
    fn test_oversized_tick_performs_one_step() {
        let mut controller = playing_controller();
        let head = controller.snake.head();

        controller.tick(INTERVAL * 5);
        assert_eq!(controller.snake.head(), head.stepped(Direction::Right, 20));

        // Accumulator was zeroed, not carried over
        assert!(controller.tick(Duration::ZERO).is_none());
    }

    #[test]
    fn test_tick_is_noop_outside_playing() {
        let mut controller = GameController::new(&GameConfig::default());
        let head = controller.snake.head();

        assert!(controller.tick(INTERVAL * 3).is_none());
        assert_eq!(controller.snake.head(), head);
        assert_eq!(controller.phase(), Phase::Start);
    }

    #[test]
    fn test_wall_collision_ends_game() {
        let mut controller = playing_controller();
        // Head one cell from the left edge, marching into it
        controller.snake = Snake::new(Point::new(0, 300), 20);
        controller.snake.set_heading(Direction::Left);

        let report = step(&mut controller).unwrap();
        assert_eq!(report.collision, Some(CollisionKind::Wall));
        assert_eq!(controller.phase(), Phase::GameOver);
    }

    #[test]
    fn test_top_edge_is_exclusive_bottom_is_out() {
        let mut controller = playing_controller();
        controller.snake = Snake::new(Point::new(400, 0), 20);
        controller.snake.set_heading(Direction::Up);

        let report = step(&mut controller).unwrap();
        assert_eq!(report.collision, Some(CollisionKind::Wall));
    }

    #[test]
    fn test_self_collision_ends_game() {
        let mut controller = playing_controller();

        // Feed the snake to length 5 along a straight line
        for _ in 0..4 {
            let ahead = controller.snake.head().stepped(Direction::Right, 20);
            controller.food.position = ahead;
            let report = step(&mut controller).unwrap();
            assert!(report.ate_food);
        }
        assert_eq!(controller.snake.len(), 5);
        controller.food.position = Point::new(0, 0);

        // Curl back into the body: down, left, then up
        controller.apply(Command::Steer(Direction::Down));
        assert!(step(&mut controller).unwrap().collision.is_none());
        controller.apply(Command::Steer(Direction::Left));
        assert!(step(&mut controller).unwrap().collision.is_none());
        controller.apply(Command::Steer(Direction::Up));

        let report = step(&mut controller).unwrap();
        assert_eq!(report.collision, Some(CollisionKind::Body));
        assert_eq!(controller.phase(), Phase::GameOver);
    }

    #[test]
    fn test_food_consumption() {
        let mut controller = playing_controller();
        let ahead = controller.snake.head().stepped(Direction::Right, 20);
        controller.food.position = ahead;

        let report = step(&mut controller).unwrap();
        assert!(report.ate_food);
        assert!(report.collision.is_none());
        assert_eq!(controller.score(), 10);
        assert_eq!(controller.snake.len(), 2);

        // Respawned food landed back on the lattice, inside bounds
        let pos = controller.food.position();
        assert!(pos.x >= 0 && pos.x <= 780);
        assert!(pos.y >= 0 && pos.y <= 580);
        assert_eq!(pos.x % 20, 0);
        assert_eq!(pos.y % 20, 0);
    }

    #[test]
    fn test_score_increments_once_per_food() {
        let mut controller = playing_controller();

        for eaten in 1..=3u32 {
            let ahead = controller.snake.head().stepped(Direction::Right, 20);
            controller.food.position = ahead;
            step(&mut controller);
            assert_eq!(controller.score(), eaten * 10);
        }
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut controller = playing_controller();
        controller.snake = Snake::new(Point::new(0, 300), 20);
        controller.snake.set_heading(Direction::Left);
        step(&mut controller);
        assert_eq!(controller.phase(), Phase::GameOver);

        // Movement keys do nothing on the game-over screen
        controller.apply(Command::Steer(Direction::Down));
        assert!(controller.tick(INTERVAL).is_none());

        controller.apply(Command::StartOrRestart);
        assert_eq!(controller.phase(), Phase::Playing);
        assert_eq!(controller.score(), 0);
        assert_eq!(controller.snake.len(), 1);
        assert_eq!(controller.snake.head(), Point::new(400, 300));
        assert_eq!(controller.snake.heading(), Direction::Right);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut controller = playing_controller();
        let ahead = controller.snake.head().stepped(Direction::Right, 20);
        controller.food.position = ahead;
        step(&mut controller);
        assert!(controller.score() > 0);

        for _ in 0..3 {
            controller.reset();
            assert_eq!(controller.score(), 0);
            assert_eq!(controller.snake.len(), 1);
            assert_eq!(controller.snake.head(), Point::new(400, 300));
            assert_eq!(controller.snake.heading(), Direction::Right);

            let food = controller.food.position();
            assert!(food.x >= 0 && food.x < 800);
            assert!(food.y >= 0 && food.y < 600);
        }
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut controller = playing_controller();
        let snapshot = controller.snapshot();

        assert_eq!(snapshot.phase, Phase::Playing);
        assert_eq!(snapshot.score, 0);
        assert_eq!(snapshot.snake.len(), 1);
        assert_eq!(snapshot.snake[0].position, controller.snake.head());
        assert_eq!(snapshot.snake[0].color, crate::game::snake::HEAD_COLOR);
        assert_eq!(snapshot.food.position, Point::new(0, 0));
        assert_eq!(snapshot.food.color, FOOD_COLOR);

        let ahead = controller.snake.head().stepped(Direction::Right, 20);
        controller.food.position = ahead;
        step(&mut controller);

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.score, 10);
        assert_eq!(snapshot.snake.len(), 2);
        // Head sprite first, body behind it
        assert_eq!(snapshot.snake[0].position, controller.snake.head());
    }
}
