//! Asset loading — four textures and one sound clip from fixed relative
//! paths, loaded once before the game loop starts.  Any failure is fatal.

use macroquad::audio::{load_sound, Sound};
use macroquad::prelude::*;

use firefighter_game::entities::SpriteSize;

pub const BACKGROUND_PATH: &str = "street.png";
pub const VEHICLE_PATH: &str = "firetruck.png";
pub const PROJECTILE_PATH: &str = "waterdrop.png";
pub const ENEMY_PATH: &str = "fire.png";
pub const COLLISION_SOUND_PATH: &str = "collision.mp3";

/// Every asset the game uses.  Immutable after load, shared read-only for
/// the process lifetime.
pub struct Assets {
    pub background: Texture2D,
    pub firetruck: Texture2D,
    pub waterdrop: Texture2D,
    pub flame: Texture2D,
    pub collision: Sound,
}

impl Assets {
    /// Load every asset, failing on the first missing or undecodable file.
    pub async fn load() -> Result<Assets, macroquad::Error> {
        Ok(Assets {
            background: load_texture(BACKGROUND_PATH).await?,
            firetruck: load_texture(VEHICLE_PATH).await?,
            waterdrop: load_texture(PROJECTILE_PATH).await?,
            flame: load_texture(ENEMY_PATH).await?,
            collision: load_sound(COLLISION_SOUND_PATH).await?,
        })
    }

    /// AABB extent of the water-drop sprite.
    pub fn projectile_size(&self) -> SpriteSize {
        SpriteSize {
            w: self.waterdrop.width(),
            h: self.waterdrop.height(),
        }
    }

    /// AABB extent of the flame sprite.
    pub fn enemy_size(&self) -> SpriteSize {
        SpriteSize {
            w: self.flame.width(),
            h: self.flame.height(),
        }
    }
}
