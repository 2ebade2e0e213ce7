use log::{error, info, warn};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Notify;
use uuid::Uuid;

use motion_common::types::{MeasuredData, MeasuredSession, SensorKind, XYZ};

use crate::adapters::MockMotionSource;
use crate::constants::{DEFAULT_TARGET_DURATION_SECS, DEFAULT_TICK_INTERVAL_SECS};
use crate::listeners::ListenerSet;
use crate::models::errors::SamplerError;
use crate::ports::SensorSource;

const MOCK_NOISE_SEED: u64 = 42;
const MOCK_NOISE_STDEV: f64 = 0.05;

/// Configuration of one sampling session.
#[derive(Clone, Debug)]
pub struct SamplingConfig {
    pub kind: SensorKind,
    pub tick_interval_secs: f64,
    pub target_duration_secs: f64,
}

impl SamplingConfig {
    /// Config with the stock 0.1s tick and 60.0s capture window.
    pub fn new(kind: SensorKind) -> Self {
        Self {
            kind,
            tick_interval_secs: DEFAULT_TICK_INTERVAL_SECS,
            target_duration_secs: DEFAULT_TARGET_DURATION_SECS,
        }
    }

    fn validate(&self) -> Result<(), SamplerError> {
        if !self.tick_interval_secs.is_finite() || self.tick_interval_secs <= 0.0 {
            return Err(SamplerError::InvalidConfig(format!(
                "tick interval must be positive, got {}",
                self.tick_interval_secs
            )));
        }
        if !self.target_duration_secs.is_finite() || self.target_duration_secs <= 0.0 {
            return Err(SamplerError::InvalidConfig(format!(
                "target duration must be positive, got {}",
                self.target_duration_secs
            )));
        }
        Ok(())
    }
}

enum Phase {
    Idle,
    Active(MeasuredSession),
    Finalized,
}

/// Sampling-session state machine over a sensor source.
///
/// At most one session is active per service. `Idle → Active → Finalized`;
/// a finalized service may start again, it never returns to `Idle`. A
/// `start` that finds a session still active cancels it first: the tick
/// source halts and no completion fires for the canceled session.
pub struct SamplingService<C>
where
    C: SensorSource,
{
    source: C,
    state: Mutex<Phase>,
    abort_signal: Arc<Notify>,
    sample_listeners: ListenerSet<XYZ>,
    completion_listeners: ListenerSet<Arc<MeasuredData>>,
}

impl<C> SamplingService<C>
where
    C: SensorSource,
{
    pub fn new(source: C) -> Self {
        Self {
            source,
            state: Mutex::new(Phase::Idle),
            abort_signal: Arc::new(Notify::new()),
            sample_listeners: ListenerSet::new(),
            completion_listeners: ListenerSet::new(),
        }
    }

    /// Registers a callback invoked synchronously with each tick's triple.
    /// Not invoked on ticks the hardware skipped.
    pub fn register_sample_listener<F>(&self, listener: F) -> Uuid
    where
        F: Fn(&XYZ) + Send + Sync + 'static,
    {
        self.sample_listeners.register(listener)
    }

    pub fn unregister_sample_listener(&self, id: Uuid) -> Result<(), SamplerError> {
        self.sample_listeners.unregister(id)
    }

    /// Registers a callback invoked exactly once per session, with the
    /// finalized record.
    pub fn register_completion_listener<F>(&self, listener: F) -> Uuid
    where
        F: Fn(&Arc<MeasuredData>) + Send + Sync + 'static,
    {
        self.completion_listeners.register(listener)
    }

    pub fn unregister_completion_listener(&self, id: Uuid) -> Result<(), SamplerError> {
        self.completion_listeners.unregister(id)
    }

    /// Runs one sampling session to finalization or cancellation.
    ///
    /// This is the tick loop itself; spawn it via [`run_service`] to keep
    /// the caller non-blocking. Each tick reads one triple from the source,
    /// appends it, notifies sample listeners, and advances elapsed time by
    /// exactly the tick interval. A tick with no reading appends nothing
    /// and notifies nobody but still advances elapsed time.
    pub async fn start(&self, config: SamplingConfig) -> Result<(), SamplerError> {
        config.validate()?;
        if !self.source.available().contains(&config.kind) {
            return Err(SamplerError::UnsupportedSensor(format!(
                "source does not provide {}",
                config.kind
            )));
        }

        let session_id = self.begin_session(config.kind);
        info!(
            "session {} started: {} for {:.1}s at {:.1}s ticks",
            session_id, config.kind, config.target_duration_secs, config.tick_interval_secs
        );

        let tick = Duration::from_secs_f64(config.tick_interval_secs);
        loop {
            tokio::select! {
                _ = self.abort_signal.notified() => {
                    break;
                }

                _ = tokio::time::sleep(tick) => {
                    let sample = self.source.sample(config.kind).await;
                    if self.on_tick(session_id, &config, sample) {
                        break;
                    }
                }
            }
        }
        Ok(())
    }

    /// Finalizes the active session and returns its record.
    ///
    /// Shared by manual stops and the internal completion path, so the
    /// record is constructed exactly once. Halts the tick source before
    /// returning; no sample can be appended after this call. Calling it
    /// again (or with no session running) reports `SessionNotActive`.
    pub fn stop(&self) -> Result<MeasuredData, SamplerError> {
        let record = {
            let mut state = self.state.lock().unwrap();
            match std::mem::replace(&mut *state, Phase::Finalized) {
                Phase::Active(session) => {
                    self.abort_signal.notify_waiters();
                    session.finalize()
                }
                Phase::Idle => {
                    *state = Phase::Idle;
                    return Err(SamplerError::SessionNotActive(
                        "no session has been started".to_string(),
                    ));
                }
                Phase::Finalized => {
                    return Err(SamplerError::SessionNotActive(
                        "session already finalized".to_string(),
                    ));
                }
            }
        };
        info!(
            "session {} finalized: {:.1}s, {} samples per axis",
            record.id(),
            record.duration_secs(),
            record.sample_count()
        );
        self.completion_listeners.notify(&Arc::new(record.clone()));
        Ok(record)
    }

    /// Installs a fresh active session, canceling a running one first.
    fn begin_session(&self, kind: SensorKind) -> Uuid {
        let mut state = self.state.lock().unwrap();
        if let Phase::Active(prior) = &*state {
            warn!(
                "session {} still active, canceling it without finalization",
                prior.id()
            );
            self.abort_signal.notify_waiters();
        }
        let session = MeasuredSession::new(kind);
        let session_id = session.id();
        *state = Phase::Active(session);
        session_id
    }

    /// Applies one tick to the session this loop belongs to.
    ///
    /// Returns true when the loop must stop: the session completed, was
    /// replaced by a newer `start`, or was finalized by a manual `stop`.
    fn on_tick(&self, session_id: Uuid, config: &SamplingConfig, sample: Option<XYZ>) -> bool {
        let completed = {
            let mut state = self.state.lock().unwrap();
            let session = match &mut *state {
                Phase::Active(session) if session.id() == session_id => session,
                _ => return true,
            };
            if let Some(sample) = &sample {
                session.append(sample);
            }
            session.advance(config.tick_interval_secs);
            session.is_complete(config.target_duration_secs)
        };

        // listeners run outside the state lock so one may call stop()
        if let Some(sample) = sample {
            self.sample_listeners.notify(&sample);
        }

        if completed {
            if let Err(e) = self.stop() {
                // a manual stop can win the race; the record already exists
                error!("completion raced a manual stop: {:?}", e);
            }
            return true;
        }
        false
    }
}

/// Starts a sampling service over `source`, driving the tick loop in a
/// background task.
///
/// # Returns
///
/// Returns a tuple containing:
/// * A `tokio::task::JoinHandle<()>` for the acquisition task; it completes
///   when the session finalizes or is canceled.
/// * An `Arc<SamplingService<C>>` for registering listeners and stopping.
pub fn run_service<C>(
    source: C,
    config: SamplingConfig,
) -> (tokio::task::JoinHandle<()>, Arc<SamplingService<C>>)
where
    C: SensorSource + Send + Sync + 'static,
{
    let service = Arc::new(SamplingService::new(source));
    let handle = tokio::spawn({
        let service_clone = service.clone();
        async move {
            if let Err(e) = service_clone.start(config).await {
                error!("Error in sampling loop: {:?}", e);
            }
        }
    });
    (handle, service)
}

/// Starts a sampling service over the mock sensor.
///
/// Returns the same `(JoinHandle, Arc<SamplingService>)` pair as
/// [`run_service`]. An `InvalidConfig` error is returned before anything is
/// spawned if the tick interval or target duration is not positive.
pub fn run_mock_service(
    kind: SensorKind,
    tick_interval_secs: f64,
    target_duration_secs: f64,
    add_sensor_noise: bool,
) -> Result<
    (
        tokio::task::JoinHandle<()>,
        Arc<SamplingService<MockMotionSource>>,
    ),
    SamplerError,
> {
    let config = SamplingConfig {
        kind,
        tick_interval_secs,
        target_duration_secs,
    };
    config.validate()?;
    let source = MockMotionSource::new(vec![kind], tick_interval_secs);
    let source = if add_sensor_noise {
        source.with_noise(MOCK_NOISE_SEED, MOCK_NOISE_STDEV)?
    } else {
        source
    };
    Ok(run_service(source, config))
}
