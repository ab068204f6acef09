//! Simulated waste scanner.
//!
//! The real program points a camera at the waste; the pilot fakes the
//! analysis with a delay and a coin flip. RNG and delay are injected so
//! tests can force either branch without waiting.

use eco_core::{ScanReading, WasteKind};

use std::time::Duration;

use eco_config::ScannerConfig;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Weight range reported for a recognized item, in kilograms.
const MIN_WEIGHT_KG: f64 = 0.5;
const MAX_WEIGHT_KG: f64 = 5.5;

/// Terminal result of one scan. An unrecognized scan can only be retried
/// by the user; the engine never retries on its own.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanOutcome {
    Recognized(ScanReading),
    Unrecognized,
}

pub struct ScanEngine<R> {
    rng: R,
    delay: Duration,
    success_rate: f64,
}

impl ScanEngine<StdRng> {
    /// Production engine: OS-seeded RNG, configured delay and rate.
    pub fn from_config(config: &ScannerConfig) -> Self {
        Self::new(
            StdRng::from_os_rng(),
            Duration::from_millis(config.delay_ms),
            config.success_rate,
        )
    }
}

impl<R: Rng> ScanEngine<R> {
    pub fn new(rng: R, delay: Duration, success_rate: f64) -> Self {
        Self {
            rng,
            delay,
            success_rate,
        }
    }

    /// Run one simulated analysis. Resolves exactly once, after the
    /// configured delay, to one of the two outcomes.
    pub async fn scan(&mut self) -> ScanOutcome {
        tokio::time::sleep(self.delay).await;

        if !self.rng.random_bool(self.success_rate) {
            debug!("Scan did not recognize the item");
            return ScanOutcome::Unrecognized;
        }

        let kind = WasteKind::ALL[self.rng.random_range(0..WasteKind::ALL.len())];
        let weight_kg = self.rng.random_range(MIN_WEIGHT_KG..MAX_WEIGHT_KG);

        debug!("Scan recognized {} ({:.2} kg)", kind, weight_kg);
        ScanOutcome::Recognized(ScanReading::for_kind(kind, weight_kg))
    }
}
