//! Demo host driver.
//!
//! Plays the role the embedding host would: constructs one engine, ticks
//! it through a short animation, and reads the buffer back after each
//! frame, saving it as a PNG.

use image::RgbaImage;
use plotline::Engine;

const WIDTH: u32 = 640;
const HEIGHT: u32 = 480;
const FRAMES: u32 = 24;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut engine = Engine::new(WIDTH, HEIGHT)?;

    for frame in 0..FRAMES {
        let dt = frame as f32 / 12.0;
        engine.draw(dt);

        let image = RgbaImage::from_raw(WIDTH, HEIGHT, engine.frame_buffer().to_vec())
            .ok_or("frame buffer size mismatch")?;
        let path = format!("frame_{frame:03}.png");
        image.save(&path)?;
        println!("wrote {path}");
    }

    Ok(())
}
