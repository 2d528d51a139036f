//! Spinning-cube demo.
//!
//! Builds a wireframed cube, lets the background integrator spin it while
//! the camera orbits in, and encodes a handful of frames as PPM files in
//! the working directory.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use nebula_3d_engine::glam::Vec3;
use nebula_3d_engine::nebula3d::output::ImageEncoder;
use nebula_3d_engine::nebula3d::{Camera, Color, Engine, Error, Model, Pose, Result};
use std::f32::consts::FRAC_PI_2;

const FRAMES: u32 = 24;
const FRAME_DELAY: Duration = Duration::from_millis(40);

/// Writes each frame as `frame_NNN.ppm` (binary P6).
struct PpmEncoder {
    dir: PathBuf,
    frame: u32,
}

impl PpmEncoder {
    fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            frame: 0,
        }
    }
}

impl ImageEncoder for PpmEncoder {
    fn encode_frame(&mut self, pixels: &[u8], width: u32, height: u32, channels: u8) -> Result<()> {
        if channels != 3 {
            return Err(Error::OutputFailed(format!(
                "PPM wants 3 channels, got {}",
                channels
            )));
        }
        let path = self.dir.join(format!("frame_{:03}.ppm", self.frame));
        let write = || -> std::io::Result<()> {
            let mut out = BufWriter::new(File::create(&path)?);
            write!(out, "P6\n{} {}\n255\n", width, height)?;
            out.write_all(pixels)?;
            out.flush()
        };
        write().map_err(|e| Error::OutputFailed(format!("{}: {}", path.display(), e)))?;
        self.frame += 1;
        Ok(())
    }
}

/// Cube of half-extent 1: six quad faces plus a wireframe overlay.
fn cube() -> Arc<Model> {
    let mut model = Model::new();

    let corners: [Vec3; 8] = [
        Vec3::new(-1.0, -1.0, -1.0),
        Vec3::new(1.0, -1.0, -1.0),
        Vec3::new(1.0, 1.0, -1.0),
        Vec3::new(-1.0, 1.0, -1.0),
        Vec3::new(-1.0, -1.0, 1.0),
        Vec3::new(1.0, -1.0, 1.0),
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(-1.0, 1.0, 1.0),
    ];

    // (corner indices, face color), two triangles per face
    let faces: [([usize; 4], Color); 6] = [
        ([0, 1, 2, 3], Color::RED),
        ([5, 4, 7, 6], Color::GREEN),
        ([4, 0, 3, 7], Color::BLUE),
        ([1, 5, 6, 2], Color::from_hex(0xFFA500)),
        ([3, 2, 6, 7], Color::from_hex(0x00FFFF)),
        ([4, 5, 1, 0], Color::from_hex(0xFF00FF)),
    ];
    for ([a, b, c, d], color) in faces {
        model
            .add_plane(corners[a], corners[b], corners[c], color)
            .add_plane(corners[a], corners[c], corners[d], color);
    }

    let edges: [(usize, usize); 12] = [
        (0, 1), (1, 2), (2, 3), (3, 0),
        (4, 5), (5, 6), (6, 7), (7, 4),
        (0, 4), (1, 5), (2, 6), (3, 7),
    ];
    for (a, b) in edges {
        model.add_line(corners[a], corners[b], Color::WHITE);
    }

    model.add_label(Vec3::new(0.0, 1.2, 0.0), "cube", Color::WHITE);
    Arc::new(model)
}

fn main() -> Result<()> {
    let engine = Engine::new(20, 200.0, 200.0, 200.0)?;

    let key = engine.add_model(cube(), Pose::at(Vec3::new(0.0, 0.0, 8.0)))?;
    engine.with_sport_mut(key, |sport| {
        sport.angular_velocity = Vec3::new(0.4, 0.9, 0.2);
    })?;
    engine.start();

    let mut camera = Camera::new(
        320,
        240,
        FRAC_PI_2,
        1.0,
        100.0,
        Pose::default(),
    )?;
    camera.backup();

    let mut encoder = PpmEncoder::new(".");
    for _ in 0..FRAMES {
        thread::sleep(FRAME_DELAY);

        camera.photo_clear(Color::from_hex(0x101018));
        engine.photo(&mut camera)?;
        encoder.encode_frame(camera.pixels(), camera.width(), camera.height(), 3)?;

        // slow dolly toward the cube
        camera.translate(Vec3::new(0.0, 0.0, 0.05));
    }

    camera.reset();
    println!("wrote {} frames at {}x{}", FRAMES, camera.width(), camera.height());
    Ok(())
}
