use crate::color::Rgb;

// Fixed tuning constants for the light-source engine.

// Pool
pub const MAX_SOURCES: usize = 15; // pool capacity
pub const MIN_SIMULTANEOUS_COLOURS: usize = 2; // expired sources survive at or below this population
pub const MAX_DIFFUSION_AGE: f32 = 15.0; // sources fade to nothing at this age

// Spawning
pub const BEAT_COUNT: u32 = 8; // addSource calls between panel re-rolls
pub const ENERGY_THRESHOLD: u16 = 50_000; // energy at or above this makes a source "energetic"

// Audio features
pub const N_FFT_BINS: usize = 32;

// Beat / onset sources
pub const BEAT_INTENSITY: f32 = 1.0;
pub const MIN_BEAT_SPEED: f32 = 0.2;
pub const TEMPO_SPEED_DIVISOR: f32 = 50.0; // speed = tempo / divisor
pub const ONSET_INTENSITY: f32 = 0.7;
pub const ONSET_SPEED: f32 = 0.8;

// Rendering
pub const BASE_COLOUR: Rgb = Rgb::new(0, 0, 0);
pub const FRACTION_COLOUR_TO_KEEP: f32 = 0.05; // floor on every source's blend factor
pub const NEAR_DECAY_PER_UNIT: f32 = 0.008; // non-energetic distance falloff
pub const ENERGETIC_DECAY_PER_UNIT: f32 = 0.015;
pub const ENERGETIC_SHRINK_PER_AGE: f32 = 0.2; // energetic reach tightens as the source ages
pub const HUE_DEGREES_PER_UNIT: f32 = 0.10;
pub const VALUE_BOOST: i32 = 10;
pub const TRANSITION_TIME: u8 = 1;

// Palette
pub const FALLBACK_GREY: Rgb = Rgb::new(128, 128, 128); // empty palette
