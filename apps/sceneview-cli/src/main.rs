use anyhow::Context;
use clap::{Parser, Subcommand};
use glam::{Vec2, Vec3};
use sceneview_assets::{
    AssetError, CachedTexture, Drawable, LoadedTexture, ModelRegistry, TextureCache,
};
use sceneview_common::{FrameClock, TextureHandle};
use sceneview_input::{Action, KeyCode, map_key};
use sceneview_math::perspective_divide_transform;
use sceneview_render::{Camera, CameraConfig, RenderContext};
use std::cell::Cell;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sceneview-cli", about = "Headless driver for the sceneview camera core")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Camera config (JSON). Defaults are used when omitted.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print crate info
    Info,
    /// Run simulated frames with fixed input and report the camera state
    Simulate {
        /// Number of frames to run
        #[arg(short, long, default_value = "60")]
        frames: u64,
        /// Fixed frame delta in seconds
        #[arg(long, default_value = "0.016")]
        dt: f32,
        /// Keys pressed every frame, e.g. `w,a`
        #[arg(short, long, value_delimiter = ',')]
        keys: Vec<String>,
        /// Mouse delta applied every frame as `dx,dy`
        #[arg(short, long, value_delimiter = ',', num_args = 2, allow_hyphen_values = true)]
        look: Option<Vec<f32>>,
        /// Number of placeholder models to register
        #[arg(short, long, default_value = "3")]
        models: usize,
        /// Texture files to load and bind to the models (round-robin)
        #[arg(short, long)]
        texture: Vec<PathBuf>,
    },
    /// Project a world-space point through the camera's view-projection
    Project {
        /// Point as `x,y,z`
        #[arg(value_delimiter = ',', num_args = 3, required = true, allow_hyphen_values = true)]
        point: Vec<f32>,
    },
    /// Write the default camera config as JSON
    DumpConfig {
        /// Output file; prints to stdout when omitted
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

/// Stand-in for a linked shader program.
struct DebugShader {
    name: &'static str,
    draws: Cell<usize>,
}

/// Texture payload produced by the file loader: just the source size.
#[derive(Debug)]
struct TextureInfo {
    bytes: u64,
}

struct DebugModel {
    name: String,
    texture: Option<CachedTexture<TextureInfo>>,
}

impl Drawable<DebugShader> for DebugModel {
    fn draw(&self, shader: &DebugShader) {
        shader.draws.set(shader.draws.get() + 1);
        match &self.texture {
            Some(t) => tracing::debug!(
                model = %self.name,
                shader = shader.name,
                texture = %t.handle,
                bytes = t.object.bytes,
                "draw"
            ),
            None => tracing::debug!(model = %self.name, shader = shader.name, "draw"),
        }
    }
}

/// Hands out sequential texture names for files that exist on disk.
fn file_loader() -> impl FnMut(&str) -> Result<LoadedTexture<TextureInfo>, AssetError> {
    let mut next = 0u32;
    move |path| {
        let meta = std::fs::metadata(path)?;
        if !meta.is_file() {
            return Err(AssetError::Load {
                path: path.to_owned(),
                reason: "not a regular file".into(),
            });
        }
        next += 1;
        Ok(LoadedTexture {
            handle: TextureHandle(next),
            object: TextureInfo { bytes: meta.len() },
        })
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<CameraConfig> {
    match path {
        Some(p) => CameraConfig::load(p)
            .with_context(|| format!("loading camera config from {}", p.display())),
        None => Ok(CameraConfig::default()),
    }
}

fn frame_actions(keys: &[String], look: Option<Vec2>) -> anyhow::Result<Vec<Action>> {
    let mut actions = Vec::with_capacity(keys.len() + 1);
    if let Some(delta) = look {
        actions.push(Action::Look(delta));
    }
    for key in keys {
        let code = KeyCode::from_name(key).with_context(|| format!("unknown key `{key}`"))?;
        actions.push(map_key(code));
    }
    Ok(actions)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("sceneview-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("common: {}", sceneview_common::crate_info());
            println!("input: {}", sceneview_input::crate_info());
            println!("assets: {}", sceneview_assets::crate_info());
            println!("render: {}", sceneview_render::crate_info());
        }
        Commands::Simulate {
            frames,
            dt,
            keys,
            look,
            models: model_count,
            texture,
        } => {
            let config = load_config(cli.config.as_deref())?;
            let mut camera = Camera::from_config(&config);
            let look = look.map(|v| Vec2::new(v[0], v[1]));
            let actions = frame_actions(&keys, look)?;

            let mut textures = TextureCache::new();
            let mut loader = file_loader();
            let mut bound = Vec::with_capacity(texture.len());
            for path in &texture {
                let key = path.to_string_lossy();
                let cached = textures
                    .get_or_load(&key, &mut loader)
                    .with_context(|| format!("loading texture {key}"))?;
                bound.push(cached);
            }

            let mut models = ModelRegistry::new();
            for i in 0..model_count {
                let texture = (!bound.is_empty()).then(|| bound[i % bound.len()].clone());
                let handle = models.register(DebugModel {
                    name: format!("model_{i}"),
                    texture,
                });
                tracing::debug!(%handle, "placeholder model ready");
            }

            let shader = DebugShader {
                name: "debug",
                draws: Cell::new(0),
            };
            let mut clock = FrameClock::fixed(dt);
            let mut last = None;
            {
                let mut ctx = RenderContext::new(&mut camera, &models, &textures);
                for _ in 0..frames {
                    let step = clock.tick();
                    last = Some(ctx.tick(&actions, step, &shader));
                }
            }

            tracing::info!(frames = clock.frames(), draws = shader.draws.get(), "simulation done");
            println!(
                "Frames: {}, draw calls: {}, textures cached: {}",
                clock.frames(),
                shader.draws.get(),
                textures.len()
            );
            print_camera(&camera);
            if let Some(stats) = last {
                println!(
                    "Last frame: {} actions, {} draws",
                    stats.actions_applied, stats.draw_calls
                );
            }
        }
        Commands::Project { point } => {
            let config = load_config(cli.config.as_deref())?;
            let camera = Camera::from_config(&config);
            let p = Vec3::new(point[0], point[1], point[2]);
            let ndc = perspective_divide_transform(camera.view_projection(), p);
            println!(
                "world ({:.3}, {:.3}, {:.3}) -> ndc ({:.4}, {:.4}, {:.4})",
                p.x, p.y, p.z, ndc.x, ndc.y, ndc.z
            );
            if !ndc.is_finite() {
                tracing::warn!("point projects onto w = 0");
            }
        }
        Commands::DumpConfig { out } => {
            let config = CameraConfig::default();
            match out {
                Some(path) => {
                    config
                        .save(&path)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("Wrote {}", path.display());
                }
                None => println!("{}", serde_json::to_string_pretty(&config)?),
            }
        }
    }

    Ok(())
}

fn print_camera(camera: &Camera) {
    let p = camera.position;
    let a = camera.pitch_yaw_roll();
    let f = camera.forward_vector();
    let r = camera.right_vector();
    println!("Position: ({:.3}, {:.3}, {:.3})", p.x, p.y, p.z);
    println!("Pitch/yaw/roll: ({:.2}, {:.2}, {:.2})", a.x, a.y, a.z);
    println!("Forward: ({:.3}, {:.3}, {:.3})", f.x, f.y, f.z);
    println!("Right: ({:.3}, {:.3}, {:.3})", r.x, r.y, r.z);
    println!("View:\n{}", format_matrix(camera.view()));
    println!("Projection:\n{}", format_matrix(camera.projection()));
}

fn format_matrix(m: glam::Mat4) -> String {
    (0..4)
        .map(|i| {
            let row = m.row(i);
            format!("  [{:9.4} {:9.4} {:9.4} {:9.4}]", row.x, row.y, row.z, row.w)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
