use std::sync::{Arc, Mutex};
use std::time::Duration;

use grapher_rs::geometry::PlotGeometry;
use grapher_rs::render::{GraphMode, GraphRenderer};
use grapher_rs::transport::{run_transport, PlaybackTransport};
use grapher_rs::GraphError;
use motion_common::traits::SampleSink;
use motion_common::types::{Axis, Point, Rgb, SensorKind, XYZ};
use sampler_rs::adapters::ScriptedSource;
use sampler_rs::services::{SamplingConfig, SamplingService};
use test_utils::{fixtures, RecordingSurface};

const TICK_SECS: f64 = 0.1;

fn geometry() -> PlotGeometry {
    PlotGeometry::with_default_scale(350.0, 301.0).unwrap()
}

fn axis_color(axis: Axis) -> Rgb {
    match axis {
        Axis::X => Rgb::RED,
        Axis::Y => Rgb::GREEN,
        Axis::Z => Rgb::BLUE,
    }
}

fn stream_polyline<S>(renderer: &GraphRenderer<S>, axis: Axis) -> Vec<Point>
where
    S: motion_common::traits::RenderSurface,
{
    match renderer.mode() {
        GraphMode::Streaming(state) => state.polyline(axis).to_vec(),
        GraphMode::Playback(_) => panic!("expected a streaming renderer"),
    }
}

#[test]
fn test_live_and_playback_land_on_identical_vertices() {
    let duration_secs = 0.5;
    let triples: Vec<XYZ> = (0..5).map(fixtures::triple).collect();

    // live: feed the triples one at a time
    let mut live =
        GraphRenderer::streaming(RecordingSurface::new(), geometry(), duration_secs, TICK_SECS)
            .unwrap();
    for sample in &triples {
        live.receive(sample.clone());
    }

    // playback: draw the equivalent finalized record in one pass
    let record = fixtures::record_from_triples(SensorKind::Gyroscope, duration_secs, &triples);
    let mut playback =
        GraphRenderer::playback(RecordingSurface::new(), geometry(), Arc::new(record));
    playback.draw().unwrap();

    for axis in Axis::ALL {
        let live_line = stream_polyline(&live, axis);
        let playback_calls = playback.surface().calls_with_color(axis_color(axis));
        assert_eq!(playback_calls.len(), 1);
        assert_eq!(playback_calls[0].points, live_line);
    }
}

#[test]
fn test_cursor_advances_by_exactly_one_interval_per_sample() {
    let mut renderer =
        GraphRenderer::streaming(RecordingSurface::new(), geometry(), 60.0, TICK_SECS).unwrap();

    let mut previous = [0.0; 3];
    for step in 0..4 {
        renderer.receive(fixtures::triple(step));
        let GraphMode::Streaming(state) = renderer.mode() else {
            panic!("expected a streaming renderer");
        };
        let interval = state.interval();
        for axis in Axis::ALL {
            let cursor = state.cursor(axis);
            assert!(cursor > previous[axis.index()]);
            assert_eq!(cursor, previous[axis.index()] + interval);
            previous[axis.index()] = cursor;
        }
    }
}

#[test]
fn test_one_redraw_per_received_triple() {
    let mut renderer =
        GraphRenderer::streaming(RecordingSurface::new(), geometry(), 60.0, TICK_SECS).unwrap();
    for index in 0..4 {
        renderer.receive(fixtures::triple(index));
    }
    // one redraw per triple, one segment per axis
    assert_eq!(renderer.surface().redraw_requests(), 4);
    assert_eq!(renderer.surface().calls().len(), 12);
}

#[test]
fn test_playback_renderer_ignores_live_samples() {
    let record = fixtures::record_from_triples(SensorKind::Gyroscope, 0.3, &[]);
    let mut renderer =
        GraphRenderer::playback(RecordingSurface::new(), geometry(), Arc::new(record));
    renderer.receive(fixtures::triple(0));
    assert!(renderer.surface().calls().is_empty());
    assert_eq!(renderer.surface().redraw_requests(), 0);
}

#[test]
fn test_playback_of_zero_duration_record_fails_fast() {
    let record = fixtures::record_from_triples(SensorKind::Gyroscope, 0.0, &[]);
    let mut renderer =
        GraphRenderer::playback(RecordingSurface::new(), geometry(), Arc::new(record));
    assert!(matches!(
        renderer.draw(),
        Err(GraphError::InvalidGeometry(_))
    ));
}

#[tokio::test]
async fn test_scripted_capture_replays_identically() {
    // full pipeline: sampling service -> live renderer, then the finalized
    // record through the playback renderer
    let triples: Vec<XYZ> = (0..3).map(fixtures::triple).collect();
    let schedule: Vec<Option<XYZ>> = triples.iter().cloned().map(Some).collect();
    let source = ScriptedSource::new(vec![SensorKind::Gyroscope], schedule);
    let service = Arc::new(SamplingService::new(source));

    let live = Arc::new(Mutex::new(
        GraphRenderer::streaming(RecordingSurface::new(), geometry(), 0.3, TICK_SECS).unwrap(),
    ));
    {
        let live = Arc::clone(&live);
        service.register_sample_listener(move |sample: &XYZ| {
            live.lock().unwrap().receive(sample.clone());
        });
    }
    let completed = Arc::new(Mutex::new(Vec::new()));
    {
        let completed = Arc::clone(&completed);
        service.register_completion_listener(move |record| {
            completed.lock().unwrap().push(Arc::clone(record));
        });
    }

    let config = SamplingConfig {
        kind: SensorKind::Gyroscope,
        tick_interval_secs: TICK_SECS,
        target_duration_secs: 0.3,
    };
    let start_task = tokio::task::spawn({
        let service = Arc::clone(&service);
        async move {
            service.start(config).await.unwrap();
        }
    });
    start_task.await.unwrap();

    let record = {
        let completed = completed.lock().unwrap();
        assert_eq!(completed.len(), 1);
        Arc::clone(&completed[0])
    };
    assert_eq!(record.duration_secs(), 0.3);

    let mut playback =
        GraphRenderer::playback(RecordingSurface::new(), geometry(), Arc::clone(&record));
    playback.draw().unwrap();

    let live = live.lock().unwrap();
    for axis in Axis::ALL {
        let live_line = stream_polyline(&live, axis);
        // the live surface saw the same vertices as incremental segments
        assert_eq!(
            live.surface().stitched_polyline(axis_color(axis)),
            live_line
        );
        let playback_calls = playback.surface().calls_with_color(axis_color(axis));
        assert_eq!(playback_calls[0].points, live_line);
    }
}

#[tokio::test]
async fn test_transport_readout_reaches_stored_duration() {
    let triples: Vec<XYZ> = (0..3).map(fixtures::triple).collect();
    let record = fixtures::record_from_triples(SensorKind::Accelerometer, 0.3, &triples);
    let transport = PlaybackTransport::new(&record).unwrap();

    let ticks: Arc<Mutex<Vec<f64>>> = Arc::new(Mutex::new(Vec::new()));
    let (handle, _transport) = run_transport(transport, {
        let ticks = Arc::clone(&ticks);
        move |displayed| {
            ticks.lock().unwrap().push(displayed);
        }
    });
    handle.await.unwrap();

    let ticks = ticks.lock().unwrap();
    assert_eq!(*ticks, vec![0.1, 0.2, 0.3]);
}

#[tokio::test]
async fn test_transport_manual_stop() {
    let transport = PlaybackTransport::with_duration(60.0).unwrap();
    let ticks: Arc<Mutex<Vec<f64>>> = Arc::new(Mutex::new(Vec::new()));
    let (handle, transport) = run_transport(transport, {
        let ticks = Arc::clone(&ticks);
        move |displayed| {
            ticks.lock().unwrap().push(displayed);
        }
    });

    tokio::time::sleep(Duration::from_millis(250)).await;
    transport.stop();
    tokio::time::timeout(Duration::from_secs(2), handle)
        .await
        .expect("transport kept ticking after stop")
        .unwrap();

    let ticks = ticks.lock().unwrap();
    assert!(ticks.len() < 10);
}
