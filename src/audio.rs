//! Audio playback — a single one-shot collision sound.

use macroquad::audio::{play_sound, stop_sound, PlaySoundParams, Sound};

use firefighter_game::compute::CollisionSound;

/// Single-channel sound effect.  Re-triggering while the clip is still
/// playing restarts it from the beginning; there is no mixing.
pub struct SoundEffect<'a> {
    sound: &'a Sound,
}

impl<'a> SoundEffect<'a> {
    pub fn new(sound: &'a Sound) -> Self {
        Self { sound }
    }
}

impl CollisionSound for SoundEffect<'_> {
    fn trigger(&mut self) {
        stop_sound(self.sound);
        play_sound(
            self.sound,
            PlaySoundParams {
                looped: false,
                volume: 1.0,
            },
        );
    }
}
