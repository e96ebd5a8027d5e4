use std::borrow::Cow;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::draw::list::DrawList;
use crate::foundation::core::ViewportSize;
use crate::foundation::error::{SceneError, SceneResult};
use crate::interaction::light_mode::LightMode;
use crate::render::cpu::CpuBackend;
use crate::render::{FrameRGBA, RenderBackend, RenderSettings};
use crate::scene::Scene;

/// Compose + rasterize a single frame.
///
/// Returns a [`FrameRGBA`] in whatever alpha convention `backend` produces; the CPU backend
/// yields **premultiplied** pixels.
pub fn render_frame_rgba(
    scene: &Scene,
    backend: &mut dyn RenderBackend,
    size: ViewportSize,
    elapsed_ms: u64,
    mode: LightMode,
) -> SceneResult<FrameRGBA> {
    let list = scene.render(size, elapsed_ms, mode);
    backend.render(&list, size)
}

/// Scene time of frame `index` at `fps`, in whole milliseconds.
pub fn frame_elapsed_ms(index: u64, fps: u32) -> u64 {
    index.saturating_mul(1000) / u64::from(fps.max(1))
}

/// `frame_00042.png` style file name.
pub fn frame_file_name(index: u64) -> String {
    format!("frame_{index:05}.png")
}

/// A run of evenly spaced frames starting at scene time `start_ms`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SequenceSpec {
    /// Number of frames to render.
    pub frames: u64,
    /// Frames per second; must be >= 1.
    pub fps: u32,
    /// Scene time of frame 0, in milliseconds.
    pub start_ms: u64,
    /// Viewport every frame is composed for.
    pub size: ViewportSize,
    /// Light mode held for the whole run.
    pub mode: LightMode,
}

impl SequenceSpec {
    pub fn validate(&self) -> SceneResult<()> {
        if self.frames == 0 {
            return Err(SceneError::validation("sequence must contain at least one frame"));
        }
        if self.fps == 0 {
            return Err(SceneError::validation("sequence fps must be >= 1"));
        }
        Ok(())
    }

    /// Scene time of frame `index`.
    pub fn elapsed_ms(&self, index: u64) -> u64 {
        self.start_ms.saturating_add(frame_elapsed_ms(index, self.fps))
    }
}

/// How [`render_sequence`] schedules frame work.
#[derive(Clone, Debug)]
pub struct RenderThreading {
    /// Render frames of a chunk across a rayon pool instead of the calling thread.
    pub parallel: bool,
    /// Frames composed per chunk. `0` is treated as `1`.
    pub chunk_size: usize,
    /// Worker count for the rayon pool (parallel mode only). `None` uses rayon's default.
    pub threads: Option<usize>,
    /// Reuse the file of an earlier frame whose draw list is identical.
    pub static_frame_elision: bool,
}

impl Default for RenderThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
            static_frame_elision: false,
        }
    }
}

/// Counters reported by [`render_sequence`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Frames written, rendered or copied.
    pub frames_total: u64,
    /// Frames that went through a backend.
    pub frames_rendered: u64,
    /// Frames copied from an earlier identical frame.
    pub frames_elided: u64,
}

/// Files written by [`render_sequence`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequenceOutput {
    /// One file per frame, in frame order.
    pub paths: Vec<PathBuf>,
    /// Per-run counters.
    pub stats: RenderStats,
}

/// Render every frame of `spec` in memory with one backend.
pub fn render_frames(
    scene: &Scene,
    spec: &SequenceSpec,
    backend: &mut dyn RenderBackend,
) -> SceneResult<Vec<FrameRGBA>> {
    spec.validate()?;
    (0..spec.frames)
        .map(|i| render_frame_rgba(scene, backend, spec.size, spec.elapsed_ms(i), spec.mode))
        .collect()
}

struct FrameJob {
    list: DrawList,
    path: PathBuf,
}

/// Render `spec` to a PNG series in `out_dir` with CPU backends.
///
/// Frames are composed and rendered in chunks of `threading.chunk_size`. With
/// `threading.parallel`, each rayon worker owns its own [`CpuBackend`]; output naming and order
/// are independent of scheduling.
#[tracing::instrument(skip(scene, font_bytes), fields(frames = spec.frames, fps = spec.fps))]
pub fn render_sequence(
    scene: &Scene,
    spec: &SequenceSpec,
    settings: &RenderSettings,
    font_bytes: Option<&[u8]>,
    out_dir: &Path,
    threading: &RenderThreading,
) -> SceneResult<SequenceOutput> {
    spec.validate()?;
    std::fs::create_dir_all(out_dir)?;

    // Also surfaces font errors before any worker starts.
    let mut backend = cpu_backend(settings, font_bytes)?;
    let pool = if threading.parallel {
        Some(build_thread_pool(threading.threads)?)
    } else {
        None
    };

    let chunk_size = normalized_chunk_size(threading.chunk_size);
    let mut paths = Vec::with_capacity(spec.frames.min(4096) as usize);
    let mut written = HashMap::<u64, PathBuf>::new();
    let mut stats = RenderStats::default();

    let mut chunk_start = 0;
    while chunk_start < spec.frames {
        let chunk_end = (chunk_start + chunk_size).min(spec.frames);
        let mut jobs = Vec::with_capacity((chunk_end - chunk_start) as usize);
        let mut copies = Vec::<(PathBuf, PathBuf)>::new();

        for index in chunk_start..chunk_end {
            let list = scene.render(spec.size, spec.elapsed_ms(index), spec.mode);
            let path = out_dir.join(frame_file_name(index));
            paths.push(path.clone());
            if threading.static_frame_elision {
                let fingerprint = list.fingerprint();
                if let Some(source) = written.get(&fingerprint) {
                    copies.push((source.clone(), path));
                    continue;
                }
                written.insert(fingerprint, path.clone());
            }
            jobs.push(FrameJob { list, path });
        }

        match &pool {
            None => {
                for job in &jobs {
                    let frame = backend.render(&job.list, spec.size)?;
                    write_png(&frame, &job.path)?;
                }
            }
            Some(pool) => {
                let results = pool.install(|| {
                    jobs.par_iter()
                        .map_init(
                            || cpu_backend(settings, font_bytes),
                            |worker, job| -> SceneResult<()> {
                                let worker = worker.as_mut().map_err(|e| {
                                    SceneError::render(format!("worker backend unavailable: {e}"))
                                })?;
                                let frame = worker.render(&job.list, spec.size)?;
                                write_png(&frame, &job.path)
                            },
                        )
                        .collect::<Vec<_>>()
                });
                for result in results {
                    result?;
                }
            }
        }

        for (source, dest) in &copies {
            std::fs::copy(source, dest)?;
        }

        stats.frames_total += chunk_end - chunk_start;
        stats.frames_rendered += jobs.len() as u64;
        stats.frames_elided += copies.len() as u64;
        tracing::debug!(chunk_start, chunk_end, rendered = jobs.len(), "chunk done");
        chunk_start = chunk_end;
    }

    Ok(SequenceOutput { paths, stats })
}

/// Write `frame` as an RGBA8 PNG, un-premultiplying first when needed.
pub fn write_png(frame: &FrameRGBA, path: &Path) -> SceneResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    let data = if frame.premultiplied {
        Cow::Owned(unpremultiply_rgba8(&frame.data))
    } else {
        Cow::Borrowed(frame.data.as_slice())
    };
    image::save_buffer_with_format(
        path,
        &data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| SceneError::render(format!("failed to write png '{}': {e}", path.display())))
}

pub fn unpremultiply_rgba8(data: &[u8]) -> Vec<u8> {
    let mut out = data.to_vec();
    for px in out.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 {
            px[..3].fill(0);
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
    out
}

fn cpu_backend(settings: &RenderSettings, font_bytes: Option<&[u8]>) -> SceneResult<CpuBackend> {
    let backend = CpuBackend::new(settings.clone());
    match font_bytes {
        Some(bytes) => backend.with_font_bytes(bytes.to_vec()),
        None => Ok(backend),
    }
}

fn build_thread_pool(threads: Option<usize>) -> SceneResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(SceneError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| SceneError::render(format!("failed to build rayon thread pool: {e}")))
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    chunk_size.max(1) as u64
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
