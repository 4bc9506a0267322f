//! Prism demo: two scenes switched with the keyboard.
//!
//! - **Enter** switches from the menu to the game scene
//! - **Backspace** returns to the menu
//! - **Arrows / WASD** move the player
//! - **Escape** or closing the window quits
//!
//! If a `resources/` directory next to the executable holds `player.png`,
//! the player is drawn with it; `icon.png` becomes the window icon.
//!
//! Run with: `RUST_LOG=debug cargo run --bin prism_demo`

use log::{error, info, warn};
use prism_engine::prelude::*;

//=== Scene Keys ==========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum DemoScene {
    Menu,
    Game,
}

impl SceneKey for DemoScene {}

//=== Menu ================================================================

struct MenuScene {
    pulse: f32,
}

impl Disposable for MenuScene {
    fn dispose(&mut self) {
        info!("Menu disposed");
    }
}

impl Scene<DemoScene> for MenuScene {
    fn render(&mut self, renderer: &mut dyn Renderer) {
        let (width, height) = renderer.size();
        let center = Vector2::new(width as f32, height as f32) / 2.0;

        renderer.clear(Color::rgb(20, 20, 36));
        renderer.draw_grid(40, Color::rgba(255, 255, 255, 24));

        let size = Vector2::splat(120.0 + 20.0 * self.pulse.sin());
        renderer.draw_filled_rect(Rect::from_vectors(center - size / 2.0, size), Color::BLUE);
        renderer.draw_rect(Rect::from_vectors(center - size / 2.0, size), Color::WHITE);
    }

    fn update(&mut self, context: &mut SceneContext<'_, DemoScene>) {
        self.pulse += 0.05;

        if context.keyboard.is_just_pressed(Scancode::RETURN) {
            context.switch_to(DemoScene::Game);
        }
    }
}

//=== Game ================================================================

const PLAYER_SPEED: f32 = 4.0;
const PLAYER_SIZE: f32 = 32.0;

struct GameScene {
    player: Vector2,
    target: Vector2,
    sprite: Option<Texture>,
}

impl GameScene {
    fn new(textures: &TextureLoader) -> Self {
        let sprite = match textures.load_resource("player.png") {
            Ok(texture) => Some(texture),
            Err(e) => {
                warn!("No player sprite, drawing a rectangle: {}", e);
                None
            }
        };

        Self {
            player: Vector2::new(100.0, 100.0),
            target: Vector2::new(400.0, 300.0),
            sprite,
        }
    }

    fn direction(keyboard: &Keyboard) -> Vector2 {
        let axis = |negative: [Scancode; 2], positive: [Scancode; 2]| {
            let held = |keys: [Scancode; 2]| keys.iter().any(|&k| keyboard.is_pressed(k));
            held(positive) as i32 as f32 - held(negative) as i32 as f32
        };

        Vector2::new(
            axis([Scancode::LEFT, Scancode::A], [Scancode::RIGHT, Scancode::D]),
            axis([Scancode::UP, Scancode::W], [Scancode::DOWN, Scancode::S]),
        )
        .normalize_or_zero()
    }
}

impl Disposable for GameScene {
    fn dispose(&mut self) {
        info!("Game disposed");
        self.sprite = None;
    }
}

impl Scene<DemoScene> for GameScene {
    fn render(&mut self, renderer: &mut dyn Renderer) {
        renderer.clear(Color::BLACK);
        renderer.draw_grid(32, Color::GRAY);

        renderer.draw_line(self.player, self.target, Color::GREEN);
        renderer.draw_point(self.target, Color::RED);

        match &self.sprite {
            Some(sprite) => {
                let scale = Vector2::splat(PLAYER_SIZE) / sprite.dimensions();
                renderer.draw_texture(sprite, self.player, scale);
            }
            None => {
                let rect = Rect::from_vectors(self.player, Vector2::splat(PLAYER_SIZE));
                renderer.draw_filled_rect(rect, Color::RED);
            }
        }
    }

    fn update(&mut self, context: &mut SceneContext<'_, DemoScene>) {
        self.player += Self::direction(context.keyboard) * PLAYER_SPEED;
        self.target = self.target.step_towards(self.player, 1.5);

        if context.keyboard.is_just_pressed(Scancode::BACKSPACE) {
            context.switch_to(DemoScene::Menu);
        }
    }
}

//=== Entry Point =========================================================

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = PrismConfig {
        window_title: "Prism Demo".to_string(),
        ..PrismConfig::default()
    };

    let mut engine = EngineBuilder::<DemoScene>::new()
        .with_config(config)
        .build()?
        .try_init(|scenes| {
            scenes.register(DemoScene::Menu, |_: &TextureLoader| MenuScene { pulse: 0.0 })?;
            scenes.register(DemoScene::Game, GameScene::new)?;
            scenes.activate(DemoScene::Menu)
        })?;

    if let Some(icon) = engine.textures().resource_dir().map(|dir| dir.join("icon.png")) {
        if icon.is_file() {
            if let Err(e) = engine.surface_mut().set_icon(&icon) {
                warn!("{}", e);
            }
        }
    }

    engine.run();
    Ok(())
}
