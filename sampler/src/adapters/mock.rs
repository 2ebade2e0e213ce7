// Emulates a hardware motion sensor with per-axis waveforms.

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use std::f64::consts::TAU;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use motion_common::types::{SensorKind, XYZ};

use crate::models::errors::SamplerError;
use crate::ports::SensorSource;

const WAVE_FREQUENCY_HZ: f64 = 0.5;
const WAVE_AMPLITUDE: f64 = 1.0;
const GAUSSIAN_SENSOR_MEAN: f64 = 0.0;

struct GaussianNoise {
    rng: StdRng,
    distribution: Normal<f64>,
}

impl GaussianNoise {
    fn new(seed: u64, stdev: f64) -> Result<Self, SamplerError> {
        let distribution = Normal::new(GAUSSIAN_SENSOR_MEAN, stdev)
            .map_err(|e| SamplerError::InvalidConfig(format!("invalid noise stdev: {}", e)))?;
        Ok(Self {
            rng: StdRng::seed_from_u64(seed),
            distribution,
        })
    }

    fn add_noise(&mut self, value: f64) -> f64 {
        value + self.distribution.sample(&mut self.rng)
    }
}

/// Configures mock data acquisition.
///
/// Readings follow fixed per-axis waveforms of the tick index, so runs are
/// reproducible; seeded Gaussian noise can be layered on top. `drop_every`
/// makes every n-th tick yield no reading, to exercise the skipped-tick
/// path.
pub struct MockMotionSource {
    kinds: Vec<SensorKind>,
    tick_interval_secs: f64,
    ticks: AtomicUsize,
    noise: Option<Mutex<GaussianNoise>>,
    drop_every: Option<usize>,
}

impl MockMotionSource {
    pub fn new(kinds: Vec<SensorKind>, tick_interval_secs: f64) -> Self {
        Self {
            kinds,
            tick_interval_secs,
            ticks: AtomicUsize::new(0),
            noise: None,
            drop_every: None,
        }
    }

    /// Layers seeded Gaussian noise over the waveforms.
    pub fn with_noise(mut self, seed: u64, stdev: f64) -> Result<Self, SamplerError> {
        self.noise = Some(Mutex::new(GaussianNoise::new(seed, stdev)?));
        Ok(self)
    }

    /// Yields no reading on every n-th tick. Zero disables dropout.
    pub fn with_dropout(mut self, drop_every: usize) -> Self {
        self.drop_every = (drop_every > 0).then_some(drop_every);
        self
    }

    fn waveform(&self, tick: usize) -> XYZ {
        let t = tick as f64 * self.tick_interval_secs;
        let phase = TAU * WAVE_FREQUENCY_HZ * t;
        XYZ::new([
            WAVE_AMPLITUDE * phase.sin(),
            WAVE_AMPLITUDE * phase.cos(),
            WAVE_AMPLITUDE * 0.5 * (2.0 * phase).sin(),
        ])
    }
}

#[async_trait]
impl SensorSource for MockMotionSource {
    fn available(&self) -> Vec<SensorKind> {
        self.kinds.clone()
    }

    async fn sample(&self, kind: SensorKind) -> Option<XYZ> {
        if !self.kinds.contains(&kind) {
            return None;
        }
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        if let Some(drop_every) = self.drop_every {
            if (tick + 1) % drop_every == 0 {
                return None;
            }
        }
        let reading = self.waveform(tick);
        match &self.noise {
            Some(noise) => {
                let mut noise = noise.lock().unwrap();
                let [x, y, z] = reading.inner();
                Some(XYZ::new([
                    noise.add_noise(x),
                    noise.add_noise(y),
                    noise.add_noise(z),
                ]))
            }
            None => Some(reading),
        }
    }
}
