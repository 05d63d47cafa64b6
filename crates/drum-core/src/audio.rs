//! Audio features consumed each tick, and the dominant-band tracking between beats.

use crate::constants::N_FFT_BINS;

/// One tick's worth of already-analysed audio.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AudioFeatures {
    pub fft_bins: [u8; N_FFT_BINS],
    pub energy: u16,
    pub is_beat: bool,
    pub is_onset: bool,
    /// Beats per minute.
    pub tempo: u16,
}

impl Default for AudioFeatures {
    fn default() -> Self {
        Self {
            fft_bins: [0; N_FFT_BINS],
            energy: 0,
            is_beat: false,
            is_onset: false,
            tempo: 0,
        }
    }
}

impl AudioFeatures {
    /// Index of the loudest bin; the lowest index wins ties, silence gives 0.
    pub fn dominant_bin(&self) -> usize {
        let mut best = 0u8;
        let mut best_index = 0;
        for (i, &m) in self.fft_bins.iter().enumerate() {
            if m > best {
                best = m;
                best_index = i;
            }
        }
        best_index
    }
}

/// Features the engine asks the audio collaborator to compute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureRequest {
    pub energy: bool,
    pub fft_bins: usize,
    /// Beat, onset and tempo.
    pub beat: bool,
}

impl FeatureRequest {
    pub const ENGINE: FeatureRequest = FeatureRequest {
        energy: true,
        fft_bins: N_FFT_BINS,
        beat: true,
    };
}

/// Running sum of dominant bin indices since the last beat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BinAccumulator {
    sum: u32,
    count: u32,
}

impl BinAccumulator {
    pub fn push(&mut self, bin: usize) {
        self.sum = self.sum.saturating_add(bin as u32);
        self.count = self.count.saturating_add(1);
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Integer mean of the bins pushed so far, resetting the accumulator.
    pub fn take_average(&mut self) -> u32 {
        let avg = if self.count == 0 {
            0
        } else {
            self.sum / self.count
        };
        *self = Self::default();
        avg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_silences_saturate_instead_of_overflowing() {
        let mut bins = BinAccumulator {
            sum: u32::MAX - 10,
            count: u32::MAX,
        };
        bins.push(31);
        bins.push(31);
        assert_eq!(bins.count(), u32::MAX);
        assert_eq!(bins.take_average(), 1);
        assert_eq!(bins.count(), 0);
    }
}
