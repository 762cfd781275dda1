//! Image and sound assets
//!
//! Every asset is optional. A missing or unreadable image becomes a solid
//! colour block of the same size, and a missing sound becomes a no-op, so the
//! game always starts and never stops on a bad file.

use crate::config::AssetPaths;
use crate::events::SoundEffect;
use sdl2::image::LoadTexture;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use tracing::warn;

/// An image, or the plain block drawn in its place
pub enum Sprite<'a> {
    Texture(Texture<'a>),
    Placeholder(Color),
}

impl<'a> Sprite<'a> {
    /// Loads a texture, falling back to a `placeholder` coloured block
    pub fn load(
        texture_creator: &'a TextureCreator<WindowContext>,
        path: &str,
        placeholder: Color,
    ) -> Self {
        match texture_creator.load_texture(path) {
            Ok(texture) => Sprite::Texture(texture),
            Err(e) => {
                warn!("Failed to load {}: {} (using placeholder)", path, e);
                Sprite::Placeholder(placeholder)
            }
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Sprite::Placeholder(_))
    }

    /// Draws the sprite stretched into `dest`
    pub fn draw(&self, canvas: &mut Canvas<Window>, dest: Rect) -> Result<(), String> {
        match self {
            Sprite::Texture(texture) => canvas.copy(texture, None, dest),
            Sprite::Placeholder(color) => {
                canvas.set_draw_color(*color);
                canvas.fill_rect(dest)
            }
        }
    }
}

/// Every image the game draws
pub struct GameSprites<'a> {
    pub background: Sprite<'a>,
    pub bird: Sprite<'a>,
    pub pipe: Sprite<'a>,
}

impl<'a> GameSprites<'a> {
    pub fn load(texture_creator: &'a TextureCreator<WindowContext>, paths: &AssetPaths) -> Self {
        GameSprites {
            background: Sprite::load(texture_creator, &paths.background, Color::RGB(20, 24, 48)),
            bird: Sprite::load(texture_creator, &paths.bird, Color::RGB(250, 200, 40)),
            pipe: Sprite::load(texture_creator, &paths.pipe, Color::RGB(150, 210, 230)),
        }
    }

    /// Number of images that fell back to a placeholder
    pub fn placeholder_count(&self) -> usize {
        [&self.background, &self.bird, &self.pipe]
            .iter()
            .filter(|sprite| sprite.is_placeholder())
            .count()
    }
}

#[cfg(feature = "audio")]
mod sound {
    use super::*;
    use sdl2::mixer::{Channel, Chunk};
    use std::collections::HashMap;
    use tracing::debug;

    /// Fire-and-forget sound effects backed by SDL2_mixer
    pub struct SoundBank {
        chunks: HashMap<SoundEffect, Chunk>,
        // Dropping the subsystem would shut audio down
        _audio: Option<sdl2::AudioSubsystem>,
    }

    impl SoundBank {
        pub fn load(sdl_context: &sdl2::Sdl, paths: &AssetPaths) -> Self {
            let mut chunks = HashMap::new();

            let audio = match Self::open_device(sdl_context) {
                Ok(audio) => audio,
                Err(e) => {
                    warn!("Audio unavailable: {} (sounds disabled)", e);
                    return SoundBank { chunks, _audio: None };
                }
            };

            for (effect, path) in [
                (SoundEffect::Flap, &paths.flap_sound),
                (SoundEffect::Score, &paths.score_sound),
                (SoundEffect::Hit, &paths.hit_sound),
            ] {
                match Chunk::from_file(path) {
                    Ok(chunk) => {
                        chunks.insert(effect, chunk);
                    }
                    Err(e) => warn!("Failed to load {}: {} (sound disabled)", path, e),
                }
            }
            debug!("Loaded {} sound effects", chunks.len());

            SoundBank {
                chunks,
                _audio: Some(audio),
            }
        }

        fn open_device(sdl_context: &sdl2::Sdl) -> Result<sdl2::AudioSubsystem, String> {
            let audio = sdl_context.audio()?;
            sdl2::mixer::open_audio(
                sdl2::mixer::DEFAULT_FREQUENCY,
                sdl2::mixer::DEFAULT_FORMAT,
                sdl2::mixer::DEFAULT_CHANNELS,
                1024,
            )?;
            sdl2::mixer::allocate_channels(8);
            Ok(audio)
        }

        /// Plays an effect on any free channel; failures are ignored
        pub fn play(&self, effect: SoundEffect) {
            if let Some(chunk) = self.chunks.get(&effect) {
                if let Err(e) = Channel::all().play(chunk, 0) {
                    debug!("Could not play {:?}: {}", effect, e);
                }
            }
        }
    }
}

#[cfg(not(feature = "audio"))]
mod sound {
    use super::*;
    use tracing::debug;

    /// Silent stand-in used when the game is built without the `audio` feature
    pub struct SoundBank;

    impl SoundBank {
        pub fn load(_sdl_context: &sdl2::Sdl, _paths: &AssetPaths) -> Self {
            debug!("Built without audio support; sound effects are silent");
            SoundBank
        }

        pub fn play(&self, _effect: SoundEffect) {}
    }
}

pub use sound::SoundBank;
