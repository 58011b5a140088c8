use anyhow::{Context, Result};
use clap::Parser;
use macroquad::models::{Mesh, Vertex as MeshVertex, draw_mesh};
use macroquad::prelude::*;
use triangle_life::{
    Config, GameLoop, OutputMode,
    input::FrameInput,
    rendering::{self, Frame, Renderer, SolidSource},
};

/// Conway's Game of Life on a toroidal grid
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Grid width in cells
    #[arg(long, default_value_t = 128)]
    width: usize,
    /// Grid height in cells
    #[arg(long, default_value_t = 128)]
    height: usize,
    /// Pixels per cell edge
    #[arg(long, value_name = "PIXELS", default_value_t = 4)]
    cell_size: usize,
    /// Each cell starts alive with probability 1/N
    #[arg(long, value_name = "N", default_value_t = 5)]
    density: u32,
    /// Display frames between generations
    #[arg(long = "tpg", value_name = "FRAMES", default_value_t = 5)]
    ticks_per_generation: u32,
    /// How cells are turned into pixels
    #[arg(long, value_enum, default_value_t = OutputMode::Mesh)]
    mode: OutputMode,
    /// Do not draw lines between cells
    #[arg(long)]
    no_gridlines: bool,
    /// Show an FPS overlay and log FPS every generation
    #[arg(long)]
    debug: bool,
    /// Seed for a reproducible starting grid
    #[arg(long)]
    seed: Option<u64>,
    /// Start from a named pattern (block, blinker, toad, beacon, glider, r-pentomino)
    #[arg(long)]
    pattern: Option<String>,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            width: args.width,
            height: args.height,
            cell_size: args.cell_size,
            density: args.density,
            ticks_per_generation: args.ticks_per_generation,
            mode: args.mode,
            gridlines: !args.no_gridlines,
            debug: args.debug,
            seed: args.seed,
            pattern: args.pattern,
        }
    }
}

fn window_conf() -> macroquad::conf::Conf {
    let config = Config::from(Args::parse());
    let (width, height) = match config.validate() {
        Ok(()) => (config.screen_width(), config.screen_height()),
        Err(_) => (800, 600),
    };

    macroquad::conf::Conf {
        miniquad_conf: macroquad::miniquad::conf::Conf {
            window_title: "triangle conway's game of life".to_owned(),
            window_width: i32::try_from(width).unwrap_or(i32::MAX),
            window_height: i32::try_from(height).unwrap_or(i32::MAX),
            window_resizable: true,
            ..Default::default()
        },
        // a full mesh is submitted as one draw call
        draw_call_vertex_capacity: rendering::MAX_MESH_CELLS * 4 + 4,
        draw_call_index_capacity: rendering::MAX_MESH_CELLS * 6 + 6,
        ..Default::default()
    }
}

/// Draws frames with macroquad. Textures and the mesh are created once and
/// updated in place.
struct MacroquadRenderer {
    mesh: Mesh,
    background: Option<Texture2D>,
    raster: Option<Texture2D>,
}

impl MacroquadRenderer {
    fn new() -> Self {
        Self {
            mesh: Mesh { vertices: Vec::new(), indices: Vec::new(), texture: None },
            background: None,
            raster: None,
        }
    }

    fn texture(bytes: &[u8], (width, height): (usize, usize)) -> Texture2D {
        // screen size was checked against u16 at startup
        let texture = Texture2D::from_rgba8(width as u16, height as u16, bytes);
        texture.set_filter(FilterMode::Nearest);
        texture
    }

    fn submit_mesh(&mut self, vertices: &[rendering::Vertex], indices: &[u16], source: SolidSource) {
        if self.mesh.texture.is_none() {
            self.mesh.texture = Some(Self::texture(&source.color, (1, 1)));
        }

        let convert = |v: &rendering::Vertex| {
            let [r, g, b, a] = v.color;
            MeshVertex::new(v.x, v.y, 0.0, v.u, v.v, Color::from_rgba(r, g, b, a))
        };
        if self.mesh.vertices.len() == vertices.len() {
            for (dst, src) in self.mesh.vertices.iter_mut().zip(vertices) {
                *dst = convert(src);
            }
            self.mesh.indices.copy_from_slice(indices);
        } else {
            self.mesh.vertices = vertices.iter().map(convert).collect();
            self.mesh.indices = indices.to_vec();
        }

        draw_mesh(&self.mesh);
    }
}

impl Renderer for MacroquadRenderer {
    fn submit(&mut self, frame: Frame<'_>) {
        match frame {
            Frame::Mesh { vertices, indices, source, background, screen } => {
                let backdrop = self
                    .background
                    .get_or_insert_with(|| Self::texture(background, screen));
                draw_texture(backdrop, 0.0, 0.0, WHITE);
                self.submit_mesh(vertices, indices, source);
            }
            Frame::Raster { pixels, width, height } => match &self.raster {
                Some(texture) => {
                    texture.update_from_bytes(width as u32, height as u32, pixels);
                    draw_texture(texture, 0.0, 0.0, WHITE);
                }
                None => {
                    let texture = Self::texture(pixels, (width, height));
                    draw_texture(&texture, 0.0, 0.0, WHITE);
                    self.raster = Some(texture);
                }
            },
        }
    }
}

async fn run(config: Config) -> Result<()> {
    config.validate().context("invalid configuration")?;
    for (name, pixels) in [("width", config.screen_width()), ("height", config.screen_height())] {
        u16::try_from(pixels).with_context(|| format!("screen {name} of {pixels}px exceeds texture limits"))?;
    }

    let mut game = GameLoop::new(&config).context("failed to initialize simulation")?;
    let mut renderer = MacroquadRenderer::new();

    loop {
        let input = FrameInput::poll();
        if input.quit {
            log::info!("Quit at generation {}", game.generation());
            return Ok(());
        }

        let advanced = game.frame(input);
        if advanced && config.debug {
            log::info!("FPS: {} generation: {} alive: {}", get_fps(), game.generation(), game.population());
        }

        clear_background(BLACK);
        game.present(&mut renderer);

        if config.debug {
            let status = if game.is_paused() { " (paused)" } else { "" };
            let text = format!("FPS: {} gen: {}{}", get_fps(), game.generation(), status);
            draw_text(&text, 8.0, 20.0, 20.0, RED);
        }

        next_frame().await;
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run(Config::from(Args::parse())).await {
        log::error!("{err:#}");
        std::process::exit(1);
    }
}
