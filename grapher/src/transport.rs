use log::info;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;

use motion_common::types::MeasuredData;
use motion_common::utils::round_decimal;

use crate::constants::TRANSPORT_TICK_SECS;
use crate::errors::GraphError;

/// Playback transport clock.
///
/// An independent fixed-interval timer that advances a displayed
/// elapsed-time readout and auto-stops when the readout reaches the
/// record's stored duration. It drives no rendering and owns no session
/// state; the readout comparison reuses the same one-decimal rounding as
/// the acquisition timer so the two clocks can never disagree on the end.
pub struct PlaybackTransport {
    duration_secs: f64,
    abort_signal: Arc<Notify>,
}

impl PlaybackTransport {
    pub fn new(record: &MeasuredData) -> Result<Self, GraphError> {
        Self::with_duration(record.duration_secs())
    }

    pub fn with_duration(duration_secs: f64) -> Result<Self, GraphError> {
        if !duration_secs.is_finite() || duration_secs <= 0.0 {
            return Err(GraphError::InvalidGeometry(format!(
                "playback duration must be positive and finite, got {}",
                duration_secs
            )));
        }
        Ok(Self {
            duration_secs,
            abort_signal: Arc::new(Notify::new()),
        })
    }

    pub fn duration_secs(&self) -> f64 {
        self.duration_secs
    }

    /// Runs the readout until it reaches the duration or `stop` is called.
    ///
    /// `on_tick` receives the displayed elapsed time, already rounded to
    /// one decimal.
    pub async fn run<F>(&self, on_tick: F)
    where
        F: Fn(f64) + Send + Sync,
    {
        let tick = Duration::from_secs_f64(TRANSPORT_TICK_SECS);
        let target = round_decimal(self.duration_secs);
        let mut elapsed: f64 = 0.0;
        loop {
            tokio::select! {
                _ = self.abort_signal.notified() => {
                    break;
                }

                _ = tokio::time::sleep(tick) => {
                    elapsed += TRANSPORT_TICK_SECS;
                    let displayed = round_decimal(elapsed);
                    on_tick(displayed);
                    if displayed == target {
                        info!("playback readout reached {:.1}s", target);
                        break;
                    }
                }
            }
        }
    }

    /// Halts the readout before it reaches the duration.
    pub fn stop(&self) {
        self.abort_signal.notify_waiters();
    }
}

/// Drives a transport in a background task.
///
/// Returns a tuple containing:
/// * A `tokio::task::JoinHandle<()>` that completes when the readout ends.
/// * An `Arc<PlaybackTransport>` for stopping it early.
pub fn run_transport<F>(
    transport: PlaybackTransport,
    on_tick: F,
) -> (tokio::task::JoinHandle<()>, Arc<PlaybackTransport>)
where
    F: Fn(f64) + Send + Sync + 'static,
{
    let transport = Arc::new(transport);
    let handle = tokio::spawn({
        let transport_clone = Arc::clone(&transport);
        async move {
            transport_clone.run(on_tick).await;
        }
    });
    (handle, transport)
}
