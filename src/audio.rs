use crate::core::{click_tone, success_chime, ToneSpec};
use crate::dom;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Plays short synthesized cues through one page-wide `AudioContext`.
///
/// Every tone allocates its own oscillator and gain node; nothing is pooled.
#[derive(Clone)]
pub struct ToneGenerator {
    ctx: web::AudioContext,
}

impl ToneGenerator {
    pub fn new() -> anyhow::Result<Self> {
        let ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { ctx })
    }

    // Contexts created before a user gesture start suspended.
    pub fn resume(&self) {
        _ = self.ctx.resume();
    }

    pub fn play_click(&self) {
        if let Err(e) = self.play(&click_tone()) {
            log::warn!("[audio] click tone failed: {:?}", e);
        }
    }

    /// Schedule each chime note as its own timer task.
    pub fn play_success(&self) {
        for note in success_chime() {
            let tones = self.clone();
            dom::spawn_after(note.offset_ms, move || {
                if let Err(e) = tones.play(&note.tone) {
                    log::warn!("[audio] chime note failed: {:?}", e);
                }
            });
        }
    }

    pub fn play(&self, tone: &ToneSpec) -> Result<(), JsValue> {
        let osc = web::OscillatorNode::new(&self.ctx)?;
        let gain = web::GainNode::new(&self.ctx)?;
        osc.set_type(web::OscillatorType::Sine);
        osc.connect_with_audio_node(&gain)?;
        gain.connect_with_audio_node(&self.ctx.destination())?;

        let now = self.ctx.current_time();
        let end = now + tone.duration_sec;

        let freq = osc.frequency();
        if tone.frequency_hz.is_steady() {
            freq.set_value(tone.frequency_hz.start);
        } else {
            freq.set_value_at_time(tone.frequency_hz.start, now)?;
            freq.exponential_ramp_to_value_at_time(tone.frequency_hz.end, end)?;
        }
        let level = gain.gain();
        level.set_value_at_time(tone.gain.start, now)?;
        level.exponential_ramp_to_value_at_time(tone.gain.end, end)?;

        osc.start_with_when(now)?;
        osc.stop_with_when(end)?;
        Ok(())
    }
}
