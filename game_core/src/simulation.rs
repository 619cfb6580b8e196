use hecs::{Entity, World};

use crate::{
    create_ball, create_paddle, draw_match, step, Ball, Canvas, Config, Events, FrameSink,
    GameMap, GameRng, InputState, MatchState, Paddle, Params, Side,
};

/// The match controller: owns both paddles, the ball and the match counters
/// for the life of the process. There is a single "running" state.
pub struct Match {
    pub world: World,
    pub map: GameMap,
    pub config: Config,
    pub state: MatchState,
    pub events: Events,
    pub rng: GameRng,
    pub player: Entity,
    pub enemy: Entity,
    pub ball: Entity,
}

impl Match {
    pub fn new(seed: u64) -> Self {
        let config = Config::new();
        let map = GameMap::new();
        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        let player = create_paddle(&mut world, Side::Player, map.paddle_spawn(Side::Player));
        let enemy = create_paddle(&mut world, Side::Enemy, map.paddle_spawn(Side::Enemy));

        let spawned = Ball::spawn(&map, &mut rng);
        let ball = create_ball(&mut world, spawned.pos, spawned.vel);

        Self {
            world,
            map,
            config,
            state: MatchState::new(),
            events: Events::new(),
            rng,
            player,
            enemy,
            ball,
        }
    }

    /// Run one simulation tick
    pub fn tick(&mut self, input: &InputState) {
        step(
            &mut self.world,
            &self.map,
            &self.config,
            &mut self.state,
            &mut self.events,
            input,
            &mut self.rng,
        );
    }

    pub fn render(&self, canvas: &mut dyn Canvas) {
        draw_match(&self.world, &self.state, &self.config, canvas);
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        let entity = match side {
            Side::Player => self.player,
            Side::Enemy => self.enemy,
        };
        self.world.get::<&Paddle>(entity).ok().map(|p| *p)
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world.get::<&Ball>(self.ball).ok().map(|b| *b)
    }

    /// Overwrite the ball's position and velocity
    pub fn place_ball(&mut self, ball: Ball) {
        if let Ok(mut current) = self.world.get::<&mut Ball>(self.ball) {
            *current = ball;
        }
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn speed_multiplier(&self) -> f64 {
        self.state.speed_multiplier
    }

    pub fn tick_count(&self) -> u64 {
        self.state.tick
    }
}

impl FrameSink for Match {
    fn update(&mut self, input: &InputState) {
        self.tick(input);
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        self.render(canvas);
    }

    /// Fixed virtual canvas; the host scales it to the window
    fn layout(&self, _outside_width: u32, _outside_height: u32) -> (u32, u32) {
        (Params::SCREEN_WIDTH, Params::SCREEN_HEIGHT)
    }
}
