// Gameplay properties exercised through the public API.

use rand::SeedableRng;
use rand::rngs::StdRng;

use snake_canvas::{
    Cell, Collision, Direction, Food, FrameView, GameConfig, GameSession, GridBounds, MemoryStore,
    MoveOutcome, Renderer, Snake, Status,
};

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[test]
fn moving_up_without_food() {
    let bounds = GridBounds::new(10, 10);
    let mut snake = Snake::with_body(vec![Cell::new(5, 5), Cell::new(5, 4), Cell::new(5, 3)], Direction::Up);
    let mut food = Food::at(Cell::new(0, 0));

    assert_eq!(snake.move_step(bounds, &mut food, &mut rng(1)), MoveOutcome::Moved);
    assert_eq!(snake.body(), &[Cell::new(5, 6), Cell::new(5, 5), Cell::new(5, 4)]);
    assert_eq!(snake.score(), 0);
    assert!(!snake.is_dead());
}

#[test]
fn eating_scores_one_and_grows() {
    let bounds = GridBounds::new(10, 10);
    let mut snake = Snake::spawn(bounds);
    let mut food = Food::at(Cell::new(5, 6));

    assert_eq!(snake.move_step(bounds, &mut food, &mut rng(2)), MoveOutcome::Ate);
    assert_eq!(snake.score(), 1);
    assert_eq!(snake.len(), 4);
    assert_eq!(snake.head(), Cell::new(5, 6));
    assert!(!snake.body().contains(&food.cell()));
}

#[test]
fn plain_moves_keep_length() {
    let bounds = GridBounds::new(10, 10);
    let mut snake = Snake::spawn(bounds);
    let mut food = Food::at(Cell::new(0, 9));
    for direction in [Direction::Left, Direction::Up, Direction::Right, Direction::Up] {
        snake.change_direction(direction);
        assert_eq!(snake.move_step(bounds, &mut food, &mut rng(3)), MoveOutcome::Moved);
        assert_eq!(snake.len(), 3);
    }
}

#[test]
fn wall_crash_keeps_length() {
    let bounds = GridBounds::new(10, 10);
    let mut snake = Snake::with_body(vec![Cell::new(5, 9), Cell::new(5, 8), Cell::new(5, 7)], Direction::Up);
    let before = snake.body().to_vec();
    let mut food = Food::at(Cell::new(0, 0));

    assert_eq!(snake.move_step(bounds, &mut food, &mut rng(4)), MoveOutcome::Crashed(Collision::Wall));
    assert!(snake.is_dead());
    assert_eq!(snake.body(), before.as_slice());
}

#[test]
fn self_crash_keeps_length() {
    let bounds = GridBounds::new(10, 10);
    let body = vec![
        Cell::new(4, 4),
        Cell::new(4, 5),
        Cell::new(5, 5),
        Cell::new(5, 4),
        Cell::new(5, 3),
        Cell::new(4, 3),
        Cell::new(3, 3),
    ];
    let mut snake = Snake::with_body(body.clone(), Direction::Down);
    snake.change_direction(Direction::Right);
    let mut food = Food::at(Cell::new(0, 0));

    assert_eq!(snake.move_step(bounds, &mut food, &mut rng(5)), MoveOutcome::Crashed(Collision::Body));
    assert_eq!(snake.len(), body.len());
}

#[test]
fn food_never_lands_on_the_snake() {
    let bounds = GridBounds::new(8, 8);
    let occupied: Vec<Cell> = bounds.cells().filter(|c| c.x < 7 || c.y < 4).collect();
    let mut food = Food::at(Cell::new(0, 0));
    let mut rng = rng(6);
    for _ in 0..500 {
        let cell = food.spawn(bounds, &occupied, &mut rng).unwrap();
        assert!(bounds.contains(cell));
        assert!(!occupied.contains(&cell));
    }
}

#[test]
fn rejected_reversal_leaves_direction() {
    let config = GameConfig { grid: GridBounds::new(10, 10), ..GameConfig::default() };
    let mut session = GameSession::new(&config, MemoryStore::default(), rng(7)).unwrap();
    session.toggle_game(0.0);
    for direction in Direction::ALL {
        let heading = session.snake().direction();
        let accepted = session.on_direction_input(direction);
        if direction.same_axis(heading) {
            assert!(!accepted);
            assert_eq!(session.snake().pending_direction(), heading);
        }
        session.advance(f64::from(direction as u8) + 1.0);
        if session.is_over() {
            break;
        }
    }
}

#[derive(Default)]
struct Recorder {
    frames: Vec<(Vec<Cell>, Cell, u32, u32, Status)>,
}

impl Renderer for Recorder {
    fn render(&mut self, frame: &FrameView<'_>) {
        self.frames.push((frame.body.to_vec(), frame.food, frame.score, frame.high_score, frame.status));
    }
}

#[test]
fn full_game_reaches_game_over_and_saves() {
    let config = GameConfig { grid: GridBounds::new(6, 6), ..GameConfig::default() };
    let mut session = GameSession::new(&config, MemoryStore::with_score(0), rng(8)).unwrap();
    let mut recorder = Recorder::default();

    session.render(&mut recorder);
    session.on_start_pressed(0.0);
    let mut now = 0.0;
    while !session.is_over() {
        session.advance(now);
        session.render(&mut recorder);
        now += 0.5;
        assert!(now < 100.0, "game did not end");
    }

    let (_, _, _, _, first) = &recorder.frames[0];
    assert_eq!(*first, Status::Paused { fresh: true });
    let (body, food, score, high, last) = recorder.frames.last().unwrap();
    assert_eq!(*last, Status::Over { won: false });
    assert!(session.snake().death().is_some());
    assert_eq!(*score, session.snake().score());
    assert!(*high >= *score);
    assert!(!body.contains(food));
    assert_eq!(session.store().saves(), usize::from(*score > 0));
}
