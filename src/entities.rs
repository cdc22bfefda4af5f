//! All game entity types — pure data, no logic.

/// AABB extent of a sprite, in pixels.  Measured from the decoded textures
/// once at startup and carried in the game state so collision logic never
/// touches a texture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpriteSize {
    pub w: f32,
    pub h: f32,
}

// ── Entities ──────────────────────────────────────────────────────────────────

/// The player-controlled fire truck.
#[derive(Clone, Debug)]
pub struct Player {
    pub x: f32,
    pub y: f32,
}

/// A water drop in flight.  Moves rightward a fixed distance per tick.
#[derive(Clone, Debug)]
pub struct Projectile {
    pub x: f32,
    pub y: f32,
}

/// A flame.  Moves leftward a fixed distance per tick.
#[derive(Clone, Debug)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
}

// ── Input ─────────────────────────────────────────────────────────────────────

/// One keyboard sample, taken by the game loop each frame.
///
/// Fire arrives as *held* state; `tick` edge-detects it against
/// `GameState::fire_latch`, so holding Space fires exactly once per press.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputFrame {
    pub up_held: bool,
    pub down_held: bool,
    pub fire_held: bool,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Horizontal scroll offset of the tiled background.
    /// Stays within `(-background_width, 0]`.
    pub background_x: f32,
    pub player: Player,
    pub projectiles: Vec<Projectile>,
    pub enemies: Vec<Enemy>,
    pub score: u32,
    /// Whether the fire key was held on the previous tick.
    pub fire_latch: bool,
    /// Logical canvas width — new enemies spawn at this x.
    pub width: f32,
    /// Logical canvas height — spawn y is drawn uniformly from `[0, height)`.
    pub height: f32,
    pub background_width: f32,
    pub projectile_size: SpriteSize,
    pub enemy_size: SpriteSize,
}
