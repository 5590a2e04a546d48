//! Pull-based access to time-domain and frequency snapshots of live audio.
//!
//! The platform analysis node is hidden behind [`SampleSource`]. Every pull
//! re-samples the source into a buffer owned by [`Analyzer`] and hands the
//! caller a copy, so a snapshot stays valid after later pulls.

use crate::constants::{FFT_SIZE, FFT_SIZE_MAX, FFT_SIZE_MIN, SMOOTHING_TIME_CONSTANT};
use crate::error::{Result, VizError};
use std::ops::Deref;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnalyserConfig {
    /// Analysis window length in samples.
    pub fft_size: u32,
    pub smoothing_time_constant: f64,
}

impl Default for AnalyserConfig {
    fn default() -> Self {
        Self {
            fft_size: FFT_SIZE,
            smoothing_time_constant: SMOOTHING_TIME_CONSTANT,
        }
    }
}

impl AnalyserConfig {
    pub fn validate(&self) -> Result<()> {
        let n = self.fft_size;
        if !n.is_power_of_two() || !(FFT_SIZE_MIN..=FFT_SIZE_MAX).contains(&n) {
            return Err(VizError::InvalidWindow(n));
        }
        if !(0.0..=1.0).contains(&self.smoothing_time_constant) {
            return Err(VizError::InvalidSmoothing(self.smoothing_time_constant));
        }
        Ok(())
    }

    #[inline]
    pub fn frequency_bin_count(&self) -> usize {
        self.fft_size as usize / 2
    }
}

/// A live audio analysis node.
pub trait SampleSource {
    /// Write unsigned 8-bit amplitudes (128 is silence) into `out`.
    fn fill_time_domain(&mut self, out: &mut [u8]);
    /// Write unsigned 8-bit frequency bin magnitudes into `out`.
    fn fill_frequency(&mut self, out: &mut [u8]);
}

/// Owned copy of one analyser pull.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SampleBuffer(Vec<u8>);

impl SampleBuffer {
    pub fn zeroed(len: usize) -> Self {
        Self(vec![0; len])
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }
}

impl Deref for SampleBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for SampleBuffer {
    fn from(v: Vec<u8>) -> Self {
        Self(v)
    }
}

pub struct Analyzer<S: SampleSource> {
    source: S,
    config: AnalyserConfig,
    time_domain: Vec<u8>,
    frequency: Vec<u8>,
}

impl<S: SampleSource> Analyzer<S> {
    pub fn new(source: S, config: AnalyserConfig) -> Result<Self> {
        config.validate()?;
        log::info!(
            "[analyser] window={} bins={} smoothing={:.2}",
            config.fft_size,
            config.frequency_bin_count(),
            config.smoothing_time_constant
        );
        Ok(Self {
            source,
            config,
            time_domain: vec![0; config.fft_size as usize],
            frequency: vec![0; config.frequency_bin_count()],
        })
    }

    pub fn config(&self) -> &AnalyserConfig {
        &self.config
    }

    /// Length of every time-domain snapshot; fixed for the analyser's lifetime.
    pub fn window_size(&self) -> usize {
        self.time_domain.len()
    }

    /// Re-sample the source and return a copy of the time-domain window.
    pub fn time_domain_data(&mut self) -> SampleBuffer {
        self.source.fill_time_domain(&mut self.time_domain);
        SampleBuffer(self.time_domain.clone())
    }

    /// Re-sample the source into a caller-owned buffer, reusing its allocation.
    pub fn time_domain_into(&mut self, dst: &mut SampleBuffer) {
        self.source.fill_time_domain(&mut self.time_domain);
        dst.0.clear();
        dst.0.extend_from_slice(&self.time_domain);
    }

    /// Re-sample the source and return a copy of the frequency bins.
    ///
    /// Nothing in the render pipeline reads these; they are kept available
    /// for spectral consumers.
    pub fn frequency_data(&mut self) -> SampleBuffer {
        self.source.fill_frequency(&mut self.frequency);
        SampleBuffer(self.frequency.clone())
    }
}
