use super::constants::{
    CLICK_DURATION_SEC, CLICK_FREQ_END_HZ, CLICK_FREQ_START_HZ, CLICK_GAIN_END, CLICK_GAIN_START,
    SUCCESS_GAIN_END, SUCCESS_GAIN_START, SUCCESS_NOTES_HZ, SUCCESS_NOTE_DURATION_SEC,
    SUCCESS_NOTE_SPACING_MS,
};

/// Exponential ramp of an audio parameter from `start` to `end` over a
/// tone's duration. Both values must be strictly positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ramp {
    pub start: f32,
    pub end: f32,
}

impl Ramp {
    pub const fn steady(value: f32) -> Self {
        Self {
            start: value,
            end: value,
        }
    }

    pub fn is_steady(&self) -> bool {
        self.start == self.end
    }
}

/// One sine oscillator + gain envelope, started immediately and stopped
/// after `duration_sec`.
#[derive(Clone, Debug, PartialEq)]
pub struct ToneSpec {
    pub frequency_hz: Ramp,
    pub gain: Ramp,
    pub duration_sec: f64,
}

/// A tone to be started `offset_ms` after the chime is requested.
#[derive(Clone, Debug, PartialEq)]
pub struct ScheduledTone {
    pub offset_ms: u32,
    pub tone: ToneSpec,
}

/// Short downward "pop" played on every press.
pub fn click_tone() -> ToneSpec {
    ToneSpec {
        frequency_hz: Ramp {
            start: CLICK_FREQ_START_HZ,
            end: CLICK_FREQ_END_HZ,
        },
        gain: Ramp {
            start: CLICK_GAIN_START,
            end: CLICK_GAIN_END,
        },
        duration_sec: CLICK_DURATION_SEC,
    }
}

/// Ascending triad played once the last image is reached, one note every
/// `SUCCESS_NOTE_SPACING_MS`.
pub fn success_chime() -> Vec<ScheduledTone> {
    SUCCESS_NOTES_HZ
        .iter()
        .enumerate()
        .map(|(i, &hz)| ScheduledTone {
            offset_ms: i as u32 * SUCCESS_NOTE_SPACING_MS,
            tone: ToneSpec {
                frequency_hz: Ramp::steady(hz),
                gain: Ramp {
                    start: SUCCESS_GAIN_START,
                    end: SUCCESS_GAIN_END,
                },
                duration_sec: SUCCESS_NOTE_DURATION_SEC,
            },
        })
        .collect()
}
