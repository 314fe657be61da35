use anyhow::Result;
use image::{ImageBuffer, Rgb, RgbImage};
use rayon::prelude::*;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use crate::camera::Camera;
use crate::color::Color;
use crate::error::SceneError;
use crate::scene::Scene;
use crate::tracer::{self, DEFAULT_MAX_DEPTH};
use crate::vec3::Vec3;

/// Per-pass parameters that are not part of the scene geometry. Only built
/// through `new`, so size and light are always valid.
#[derive(Debug, Clone, Copy)]
pub struct RenderSettings {
    width: usize,
    height: usize,
    max_depth: i32,
    light_dir: Vec3,
}

impl RenderSettings {
    pub fn new(width: usize, height: usize, light_dir: Vec3) -> Result<Self, SceneError> {
        if width == 0 || height == 0 {
            return Err(SceneError::EmptyImage { width, height });
        }
        if light_dir.is_degenerate() {
            return Err(SceneError::ZeroLightDirection);
        }

        Ok(Self {
            width,
            height,
            max_depth: DEFAULT_MAX_DEPTH,
            light_dir,
        })
    }

    pub fn with_max_depth(mut self, max_depth: i32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn max_depth(&self) -> i32 {
        self.max_depth
    }

    pub fn light_dir(&self) -> Vec3 {
        self.light_dir
    }
}

/// Row-major pixel buffer, row 0 at the top.
pub struct Framebuffer {
    pub width: usize,
    pub height: usize,
    buffer: Vec<Color>,
}

impl Framebuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            buffer: vec![Color::black(); width * height],
        }
    }

    pub fn color(&mut self, x: usize, y: usize, col: Color) {
        self.buffer[y * self.width + x] = col;
    }

    pub fn get(&self, x: usize, y: usize) -> Color {
        self.buffer[y * self.width + x]
    }

    /// Plain-text P3 PPM.
    pub fn to_ppm<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut file = BufWriter::new(File::create(path)?);

        write!(
            file,
            "P3\n{} {}\n{}\n",
            self.width,
            self.height,
            Color::MAX_VAL
        )?;

        for row in self.buffer.chunks(self.width) {
            for col in row {
                let (r, g, b) = col.to_int_rgb();
                write!(file, "{} {} {} ", r, g, b)?;
            }
            writeln!(file)?;
        }
        file.flush()?;

        Ok(())
    }

    pub fn to_rgb_image(&self) -> RgbImage {
        ImageBuffer::from_fn(self.width as u32, self.height as u32, |x, y| {
            let c = self.get(x as usize, y as usize);
            Rgb([c.r, c.g, c.b])
        })
    }

    pub fn to_png<P: AsRef<Path>>(&self, path: P) -> image::ImageResult<()> {
        self.to_rgb_image().save_with_format(path, image::ImageFormat::Png)
    }
}

/// Trace one primary ray per pixel. Rows are split across the rayon pool and
/// each worker writes only its own row.
pub fn render(settings: &RenderSettings, scene: &Scene, cam: &Camera) -> Framebuffer {
    let RenderSettings {
        width,
        height,
        max_depth,
        light_dir,
    } = *settings;

    log::info!(
        "rendering {}x{} with {} objects, max depth {}, on {} threads",
        width,
        height,
        scene.len(),
        max_depth,
        rayon::current_num_threads()
    );
    let start = Instant::now();

    let mut img = Framebuffer::new(width, height);
    let lines_complete = AtomicUsize::new(0);

    img.buffer
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, pixel) in row.iter_mut().enumerate() {
                let ray = cam.ray_through_pixel(x, y, width, height);
                *pixel = tracer::trace(&ray, scene, light_dir, max_depth);
            }

            let done = lines_complete.fetch_add(1, Ordering::Relaxed) + 1;
            if done % 50 == 0 {
                log::debug!("{:.1}%", done as f64 / height as f64 * 100.);
            }
        });

    log::info!("rendered in {:.2?}", start.elapsed());
    img
}
