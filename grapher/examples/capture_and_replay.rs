use std::sync::{Arc, Mutex};

use grapher_rs::geometry::PlotGeometry;
use grapher_rs::render::GraphRenderer;
use grapher_rs::transport::{run_transport, PlaybackTransport};
use motion_common::traits::SampleSink;
use motion_common::types::{MeasuredData, SensorKind, XYZ};
use sampler_rs::services::run_mock_service;
use test_utils::RecordingSurface;

#[tokio::main]
async fn main() {
    env_logger::init();

    let geometry = PlotGeometry::with_default_scale(350.0, 301.0).unwrap();

    // Capture two seconds of mock gyroscope data, rendering live.
    let (handle, service) = run_mock_service(SensorKind::Gyroscope, 0.1, 2.0, true).unwrap();

    let live = Arc::new(Mutex::new(
        GraphRenderer::streaming(RecordingSurface::new(), geometry, 2.0, 0.1).unwrap(),
    ));
    {
        let live = Arc::clone(&live);
        service.register_sample_listener(move |sample: &XYZ| {
            live.lock().unwrap().receive(sample.clone());
        });
    }
    let completed: Arc<Mutex<Option<Arc<MeasuredData>>>> = Arc::new(Mutex::new(None));
    {
        let completed = Arc::clone(&completed);
        service.register_completion_listener(move |record| {
            *completed.lock().unwrap() = Some(Arc::clone(record));
        });
    }

    handle.await.unwrap();

    let record = completed.lock().unwrap().take().unwrap();
    println!(
        "captured session {}: {} over {:.1}s, {} samples per axis",
        record.id(),
        record.kind(),
        record.duration_secs(),
        record.sample_count()
    );
    {
        let live = live.lock().unwrap();
        println!(
            "live render issued {} draw calls over {} redraws",
            live.surface().calls().len(),
            live.surface().redraw_requests()
        );
    }

    // Replay: one-pass static render plus the elapsed-time readout.
    let mut playback = GraphRenderer::playback(RecordingSurface::new(), geometry, Arc::clone(&record));
    playback.draw().unwrap();
    println!(
        "playback render issued {} draw calls",
        playback.surface().calls().len()
    );

    let transport = PlaybackTransport::new(&record).unwrap();
    let (readout_handle, _transport) = run_transport(transport, |displayed| {
        println!("  t = {:.1}s", displayed);
    });
    readout_handle.await.unwrap();
}
