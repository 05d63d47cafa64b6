//! Synthetic stand-in for the audio analysis collaborator.
//!
//! Produces a steady beat grid at a fixed tempo, sparse onsets between beats, a
//! spectrum whose dominant band wanders slowly, and energy that occasionally
//! peaks past the energetic threshold on a beat.

use drum_core::{AudioFeatureSource, AudioFeatures, FeatureRequest, ENERGY_THRESHOLD, N_FFT_BINS};
use rand::prelude::*;

const ONSET_PROBABILITY: f64 = 0.08;
const PEAK_PROBABILITY: f64 = 0.25; // chance a beat carries an energetic hit
const BAND_DRIFT: f32 = 0.6;
const BAND_WIDTH_SQ: f32 = 8.0;
const BAND_PEAK: f32 = 210.0;
const NOISE_FLOOR: u8 = 24;

pub struct SyntheticAudio {
    bpm: f32,
    tick_ms: u64,
    elapsed_ms: f64,
    next_beat_ms: f64,
    band: f32,
    rng: StdRng,
    request: Option<FeatureRequest>,
}

impl SyntheticAudio {
    pub fn new(bpm: f32, tick_ms: u64, seed: u64) -> Self {
        Self {
            bpm,
            tick_ms,
            elapsed_ms: 0.0,
            next_beat_ms: 0.0,
            band: 2.0,
            rng: StdRng::seed_from_u64(seed),
            request: None,
        }
    }

    fn beat_period_ms(&self) -> f64 {
        60_000.0 / self.bpm as f64
    }

    fn spectrum(&mut self, bins: usize) -> [u8; N_FFT_BINS] {
        self.band = (self.band + self.rng.gen_range(-BAND_DRIFT..=BAND_DRIFT))
            .clamp(0.0, (N_FFT_BINS - 1) as f32);
        let mut out = [0u8; N_FFT_BINS];
        for (i, m) in out.iter_mut().enumerate().take(bins.min(N_FFT_BINS)) {
            let dist = i as f32 - self.band;
            let peak = BAND_PEAK * (-(dist * dist) / BAND_WIDTH_SQ).exp();
            let noise = self.rng.gen_range(0..NOISE_FLOOR) as f32;
            *m = (peak + noise).min(255.0) as u8;
        }
        out
    }
}

impl AudioFeatureSource for SyntheticAudio {
    fn enable(&mut self, request: &FeatureRequest) {
        log::info!(
            "[audio] enabled energy={} fft_bins={} beat={}",
            request.energy,
            request.fft_bins,
            request.beat
        );
        self.request = Some(*request);
    }

    fn sample(&mut self) -> AudioFeatures {
        let Some(request) = self.request else {
            return AudioFeatures::default();
        };

        let is_beat = self.elapsed_ms >= self.next_beat_ms;
        if is_beat {
            self.next_beat_ms += self.beat_period_ms();
        }
        self.elapsed_ms += self.tick_ms as f64;
        let is_onset = !is_beat && self.rng.gen_bool(ONSET_PROBABILITY);

        let fft_bins = self.spectrum(request.fft_bins);
        let energy = if is_beat && self.rng.gen_bool(PEAK_PROBABILITY) {
            self.rng.gen_range(ENERGY_THRESHOLD..=u16::MAX)
        } else {
            self.rng.gen_range(8_000..ENERGY_THRESHOLD)
        };

        AudioFeatures {
            fft_bins,
            energy: if request.energy { energy } else { 0 },
            is_beat: request.beat && is_beat,
            is_onset: request.beat && is_onset,
            tempo: if request.beat { self.bpm as u16 } else { 0 },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enabled(bpm: f32, tick_ms: u64) -> SyntheticAudio {
        let mut audio = SyntheticAudio::new(bpm, tick_ms, 1);
        audio.enable(&FeatureRequest::ENGINE);
        audio
    }

    #[test]
    fn silent_until_enabled() {
        let mut audio = SyntheticAudio::new(120.0, 50, 1);
        assert_eq!(audio.sample(), AudioFeatures::default());
    }

    #[test]
    fn beats_follow_tempo() {
        // 120 bpm at 50 ms ticks: one beat every 10 ticks.
        let mut audio = enabled(120.0, 50);
        let beats = (0..200).filter(|_| audio.sample().is_beat).count();
        assert_eq!(beats, 20);
    }

    #[test]
    fn onsets_never_coincide_with_beats() {
        let mut audio = enabled(90.0, 20);
        for _ in 0..500 {
            let f = audio.sample();
            assert!(!(f.is_beat && f.is_onset));
            assert_eq!(f.tempo, 90);
        }
    }

    #[test]
    fn dominant_band_stays_in_range() {
        let mut audio = enabled(120.0, 50);
        for _ in 0..300 {
            let f = audio.sample();
            assert!(f.dominant_bin() < N_FFT_BINS);
        }
    }

    #[test]
    fn disabled_features_read_as_zero() {
        let mut audio = SyntheticAudio::new(120.0, 50, 3);
        audio.enable(&FeatureRequest {
            energy: false,
            fft_bins: 4,
            beat: false,
        });
        for _ in 0..50 {
            let f = audio.sample();
            assert_eq!(f.energy, 0);
            assert!(!f.is_beat && !f.is_onset);
            assert!(f.fft_bins[4..].iter().all(|&m| m == 0));
        }
    }
}
