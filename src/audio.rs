//! Sound effects
//!
//! The game has a single fire-and-forget trigger. In the browser it plays
//! the page's `<audio id="breakSound">` element; natively it only counts
//! and logs.

use crate::settings::Settings;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// A hard brick was finally destroyed
    BrickBreak,
}

/// Anything that can play a sound effect. Playback is never awaited.
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Discards every sound
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _effect: SoundEffect) {}
}

/// Audio manager for the game
pub struct AudioManager {
    #[cfg(target_arch = "wasm32")]
    break_sound: Option<web_sys::HtmlAudioElement>,
    sfx_volume: f32,
    muted: bool,
    /// Sounds actually started
    played: u64,
}

impl AudioManager {
    /// Element id of the break sound on the page
    pub const BREAK_SOUND_ID: &'static str = "breakSound";

    pub fn new(settings: &Settings) -> Self {
        Self {
            #[cfg(target_arch = "wasm32")]
            break_sound: find_audio_element(Self::BREAK_SOUND_ID),
            sfx_volume: settings.sfx_volume.clamp(0.0, 1.0),
            muted: settings.muted,
            played: 0,
        }
    }

    /// Get effective volume
    pub fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.sfx_volume }
    }

    pub fn played(&self) -> u64 {
        self.played
    }
}

impl AudioSink for AudioManager {
    fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        self.played += 1;

        #[cfg(target_arch = "wasm32")]
        if let Some(element) = &self.break_sound {
            match effect {
                SoundEffect::BrickBreak => {
                    element.set_volume(vol as f64);
                    match element.play() {
                        Ok(promise) => warn_on_rejection(effect, &promise),
                        Err(e) => log::warn!("Failed to play {:?}: {:?}", effect, e),
                    }
                }
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        log::debug!("Sound: {:?} at volume {:.2}", effect, vol);
    }
}

/// Autoplay blocks and missing assets reject the `play()` promise rather
/// than throwing
#[cfg(target_arch = "wasm32")]
fn warn_on_rejection(effect: SoundEffect, promise: &js_sys::Promise) {
    use wasm_bindgen::JsValue;
    use wasm_bindgen::closure::Closure;

    let on_reject = Closure::<dyn FnMut(JsValue)>::new(move |e: JsValue| {
        log::warn!("Failed to play {:?}: {:?}", effect, e);
    });
    let _ = promise.catch(&on_reject);
    on_reject.forget();
}

#[cfg(target_arch = "wasm32")]
fn find_audio_element(id: &str) -> Option<web_sys::HtmlAudioElement> {
    use wasm_bindgen::JsCast;

    let element = web_sys::window()?
        .document()?
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web_sys::HtmlAudioElement>().ok());
    if element.is_none() {
        log::warn!("No <audio id=\"{}\"> element - audio disabled", id);
    }
    element
}
