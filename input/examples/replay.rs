//! Replays a scripted pointer session and logs every recognized gesture.
//!
//! Run with `RUST_LOG=debug` to see the recognizer's own tracing as well.
use std::time::{Duration, Instant};

use anyhow::Result;
use euclid::point2;
use grasp_input::{GestureConfig, GestureRecognizer, InputEvent, PointerId};
use log::info;

const CONFIG: &str = r#"
double_click_threshold = 16.0
double_click_interval = 0.6
long_press_start = 0.5
"#;

fn main() -> Result<()> {
    env_logger::init();

    let config = GestureConfig::from_toml_str(CONFIG)?;
    let mut recognizer = GestureRecognizer::new(config);
    recognizer
        .dispatcher()
        .on_any(|gesture| info!("{:?}: {gesture:?}", gesture.channel()));

    let t0 = Instant::now();
    let at = |ms: u64| t0 + Duration::from_millis(ms);
    let left = PointerId::LEFT;
    let touch = PointerId::new;

    let script = [
        // Double click.
        InputEvent::PointerDown { pointer: left, pos: point2(10.0, 10.0), time: at(0) },
        InputEvent::PointerUp { pointer: left, pos: point2(10.0, 10.0), time: at(100) },
        InputEvent::PointerDown { pointer: left, pos: point2(12.0, 11.0), time: at(300) },
        InputEvent::PointerUp { pointer: left, pos: point2(12.0, 11.0), time: at(380) },
        // Long press.
        InputEvent::PointerDown { pointer: touch(0), pos: point2(50.0, 50.0), time: at(2000) },
        InputEvent::FrameTick(at(2300)),
        InputEvent::FrameTick(at(2600)),
        InputEvent::PointerUp { pointer: touch(0), pos: point2(50.0, 50.0), time: at(2700) },
        // Pinch.
        InputEvent::PointerDown { pointer: touch(0), pos: point2(0.0, 0.0), time: at(4000) },
        InputEvent::PointerDown { pointer: touch(1), pos: point2(100.0, 0.0), time: at(4010) },
        InputEvent::Drag { pointer: touch(1), pos: point2(80.0, 0.0), time: at(4030) },
        InputEvent::PointerUp { pointer: touch(1), pos: point2(80.0, 0.0), time: at(4100) },
        InputEvent::PointerUp { pointer: touch(0), pos: point2(0.0, 0.0), time: at(4120) },
    ];

    for event in &script {
        recognizer.handle(event);
    }

    Ok(())
}
