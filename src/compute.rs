//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `GameState` (and, where needed, an RNG handle and a sound sink) and
//! returns a brand-new `GameState`.  Side effects are limited to the
//! injected handles, so callers control determinism and tests can count
//! sound triggers.

use rand::Rng;

use crate::entities::{Enemy, GameState, InputFrame, Player, Projectile, SpriteSize};

// ── Gameplay constants ───────────────────────────────────────────────────────

/// Background scroll distance per tick.
pub const SCROLL_SPEED: f32 = 2.0;
/// Vertical distance the truck moves per tick while Up/Down is held.
pub const PLAYER_STEP: f32 = 2.0;
/// Rightward distance a water drop travels per tick.
pub const PROJECTILE_SPEED: f32 = 4.0;
/// Leftward distance a flame travels per tick.
pub const ENEMY_SPEED: f32 = 2.0;
/// Per-tick probability of a new flame appearing at the right edge.
pub const ENEMY_SPAWN_CHANCE: f64 = 0.02;
/// Offset from the truck position at which water drops appear.
pub const FIRE_OFFSET_X: f32 = 50.0;
pub const FIRE_OFFSET_Y: f32 = 25.0;
/// Truck start position.
pub const PLAYER_START_X: f32 = 50.0;
pub const PLAYER_START_Y: f32 = 250.0;

// ── Collision sound sink ─────────────────────────────────────────────────────

/// Receiver for the one-shot collision sound effect.
///
/// The game loop passes the real audio handle; tests pass a counting stub.
pub trait CollisionSound {
    fn trigger(&mut self);
}

/// No-op sink for callers that don't care about audio.
impl CollisionSound for () {
    fn trigger(&mut self) {}
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial game state for the given canvas and sprite geometry.
pub fn init_state(
    width: f32,
    height: f32,
    background_width: f32,
    projectile_size: SpriteSize,
    enemy_size: SpriteSize,
) -> GameState {
    GameState {
        background_x: 0.0,
        player: Player {
            x: PLAYER_START_X,
            y: PLAYER_START_Y,
        },
        projectiles: Vec::new(),
        enemies: Vec::new(),
        score: 0,
        fire_latch: false,
        width,
        height,
        background_width,
        projectile_size,
        enemy_size,
    }
}

// ── Collision predicate ──────────────────────────────────────────────────────

/// Strict AABB overlap: boxes that merely touch along an edge do not collide.
pub fn aabb_overlap(ax: f32, ay: f32, a: SpriteSize, bx: f32, by: f32, b: SpriteSize) -> bool {
    ax < bx + b.w && ax + a.w > bx && ay < by + b.h && ay + a.h > by
}

// ── Per-frame tick (nearly pure — RNG and sound are injected) ────────────────

/// Advance the simulation by one tick.
///
/// Order within a tick: scroll, vehicle movement, entity movement, fire,
/// collision resolution, enemy spawn.  A freshly fired drop first moves on
/// the tick after it appears.
pub fn tick(
    state: &GameState,
    input: &InputFrame,
    rng: &mut impl Rng,
    sfx: &mut impl CollisionSound,
) -> GameState {
    // ── 1. Scroll the background, wrapping after one full image width ────────
    let scrolled = state.background_x - SCROLL_SPEED;
    let background_x = if scrolled <= -state.background_width {
        0.0
    } else {
        scrolled
    };

    // ── 2. Vertical truck movement while a key is held (no bounds clamp) ─────
    let mut player = state.player.clone();
    if input.up_held {
        player.y -= PLAYER_STEP;
    }
    if input.down_held {
        player.y += PLAYER_STEP;
    }

    // ── 3. Advance projectiles and enemies ───────────────────────────────────
    // Off-screen entities are never culled; the collections only shrink
    // through collisions.
    let mut projectiles: Vec<Projectile> = state
        .projectiles
        .iter()
        .map(|p| Projectile {
            x: p.x + PROJECTILE_SPEED,
            y: p.y,
        })
        .collect();
    let enemies: Vec<Enemy> = state
        .enemies
        .iter()
        .map(|e| Enemy {
            x: e.x - ENEMY_SPEED,
            y: e.y,
        })
        .collect();

    // ── 4. Fire on the key-down edge ─────────────────────────────────────────
    if input.fire_held && !state.fire_latch {
        projectiles.push(Projectile {
            x: player.x + FIRE_OFFSET_X,
            y: player.y + FIRE_OFFSET_Y,
        });
    }

    // ── 5. Collision: projectiles ↔ enemies (two-phase) ──────────────────────
    // Read-only scan first: in list order, each projectile claims the first
    // still-unclaimed enemy it overlaps — at most one pair per projectile.
    // Both collections are then rebuilt without the matched indices.
    let mut spent: Vec<usize> = Vec::new();
    let mut doused: Vec<usize> = Vec::new();

    for (pi, p) in projectiles.iter().enumerate() {
        for (ei, e) in enemies.iter().enumerate() {
            if !doused.contains(&ei)
                && aabb_overlap(p.x, p.y, state.projectile_size, e.x, e.y, state.enemy_size)
            {
                spent.push(pi);
                doused.push(ei);
                break;
            }
        }
    }

    for _ in &spent {
        sfx.trigger();
    }

    let projectiles: Vec<Projectile> = projectiles
        .iter()
        .enumerate()
        .filter(|(i, _)| !spent.contains(i))
        .map(|(_, p)| p.clone())
        .collect();
    let mut enemies: Vec<Enemy> = enemies
        .iter()
        .enumerate()
        .filter(|(i, _)| !doused.contains(i))
        .map(|(_, e)| e.clone())
        .collect();

    // ── 6. Spawn a new flame at the right edge ───────────────────────────────
    if rng.gen_bool(ENEMY_SPAWN_CHANCE) {
        enemies.push(Enemy {
            x: state.width,
            y: rng.gen_range(0.0..state.height),
        });
    }

    GameState {
        background_x,
        player,
        projectiles,
        enemies,
        score: state.score + spent.len() as u32,
        fire_latch: input.fire_held,
        ..state.clone()
    }
}
