//! Rendering layer — all draw calls live here.
//!
//! No game logic is performed; this module only translates state into
//! macroquad draw calls, once per frame after the tick.

use macroquad::prelude::*;

use firefighter_game::entities::GameState;

use crate::assets::Assets;

const SCORE_POS_X: f32 = 10.0;
const SCORE_POS_Y: f32 = 24.0;
const SCORE_FONT_SIZE: f32 = 24.0;

/// Render one complete frame: tiled background, truck, every live entity,
/// then the score overlay.
pub fn render(state: &GameState, assets: &Assets) {
    // Two adjacent copies of the background give a seamless wraparound.
    draw_texture(&assets.background, state.background_x, 0.0, WHITE);
    draw_texture(
        &assets.background,
        state.background_x + assets.background.width(),
        0.0,
        WHITE,
    );

    draw_texture(&assets.firetruck, state.player.x, state.player.y, WHITE);

    // Water drops and flames render identically: one uniform pass over
    // (position, sprite) pairs.
    let sprites = state
        .projectiles
        .iter()
        .map(|p| (p.x, p.y, &assets.waterdrop))
        .chain(state.enemies.iter().map(|e| (e.x, e.y, &assets.flame)));
    for (x, y, texture) in sprites {
        draw_texture(texture, x, y, WHITE);
    }

    draw_text(
        &format!("Score: {}", state.score),
        SCORE_POS_X,
        SCORE_POS_Y,
        SCORE_FONT_SIZE,
        WHITE,
    );
}
