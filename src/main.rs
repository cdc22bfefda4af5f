mod assets;
mod audio;
mod display;

use macroquad::prelude::*;
use ::rand::thread_rng;

use firefighter_game::compute::{init_state, tick};
use firefighter_game::entities::InputFrame;

use crate::assets::Assets;
use crate::audio::SoundEffect;

const FRAME_WIDTH: i32 = 800;
const FRAME_HEIGHT: i32 = 600;

fn window_conf() -> Conf {
    Conf {
        window_title: "Firefighter Game".to_owned(),
        window_width: FRAME_WIDTH,
        window_height: FRAME_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // All asset I/O happens here, once, before the loop starts.
    let assets = match Assets::load().await {
        Ok(assets) => assets,
        Err(err) => {
            error!("failed to load assets: {}", err);
            std::process::exit(1);
        }
    };

    let mut sfx = SoundEffect::new(&assets.collision);
    let mut rng = thread_rng();
    let mut state = init_state(
        FRAME_WIDTH as f32,
        FRAME_HEIGHT as f32,
        assets.background.width(),
        assets.projectile_size(),
        assets.enemy_size(),
    );

    loop {
        let input = InputFrame {
            up_held: is_key_down(KeyCode::Up),
            down_held: is_key_down(KeyCode::Down),
            fire_held: is_key_down(KeyCode::Space),
        };

        state = tick(&state, &input, &mut rng, &mut sfx);
        display::render(&state, &assets);

        next_frame().await
    }
}
