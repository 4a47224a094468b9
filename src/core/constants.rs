// Fixed configuration for the slideshow, its sound cues and particle bursts.

// Images shown in order, one per button press.
pub const IMAGES: &[&str] = &[
    "./assets/image-content/image-1.png",
    "./assets/image-content/image-2.png",
    "./assets/image-content/image-3.png",
    "./assets/image-content/image-4.png",
    "./assets/image-content/image-5.png",
    "./assets/image-content/image-6.png",
];

// Particle burst
pub const PARTICLE_COUNT: usize = 15;
pub const PARTICLE_SPEED_MIN: f64 = 50.0; // px travelled over the lifetime
pub const PARTICLE_SPEED_MAX: f64 = 100.0;
pub const PARTICLE_LIFETIME_MS: u32 = 1000;
pub const PARTICLE_PALETTE: [&str; 5] = ["#ff6b9d", "#feca57", "#48dbfb", "#ff9ff3", "#54a0ff"];

// Click "pop": downward sweep with a fast decay
pub const CLICK_FREQ_START_HZ: f32 = 800.0;
pub const CLICK_FREQ_END_HZ: f32 = 400.0;
pub const CLICK_GAIN_START: f32 = 0.3;
pub const CLICK_GAIN_END: f32 = 0.01;
pub const CLICK_DURATION_SEC: f64 = 0.1;

// Success chime: C major triad (C5, E5, G5)
pub const SUCCESS_NOTES_HZ: [f32; 3] = [523.25, 659.25, 783.99];
pub const SUCCESS_NOTE_SPACING_MS: u32 = 100;
pub const SUCCESS_GAIN_START: f32 = 0.2;
pub const SUCCESS_GAIN_END: f32 = 0.01;
pub const SUCCESS_NOTE_DURATION_SEC: f64 = 0.3;

// Delay between reaching the last image and the chime
pub const SUCCESS_DELAY_MS: u32 = 200;
