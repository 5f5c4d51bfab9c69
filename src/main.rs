//! scrollcore demo entry point.
//!
//! Opens a raylib window, spawns the player and a dragon on the demo level
//! (or a level loaded from JSON) and runs the frame schedule.
//!
//! # Controls
//!
//! - Left/Right or A/D: walk
//! - Left Shift: run
//! - Space or Up: jump
//! - F1: toggle debug overlay
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --config ./config.ini
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use bevy_ecs::prelude::*;
use clap::Parser;
use raylib::ffi::KeyboardKey;
use raylib::prelude::*;
use std::path::PathBuf;
use std::sync::Arc;

use scrollcore::game::{frame_schedule, insert_resources, spawn_actor};
use scrollcore::resources::atlasstore::{AtlasError, AtlasLoader, AtlasSize};
use scrollcore::resources::debugmode::DebugMode;
use scrollcore::resources::gameconfig::GameConfig;
use scrollcore::resources::level::Level;
use scrollcore::resources::playerinput::PlayerInput;
use scrollcore::resources::profile::ActorProfile;
use scrollcore::resources::texturestore::TextureStore;
use scrollcore::systems::render::{render_debug_ui, render_pass};
use scrollcore::systems::time::update_world_time;

#[derive(Parser)]
#[command(version, about = "Side-scrolling platformer core demo")]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// JSON level file. The built-in demo level is used when omitted.
    #[arg(long, value_name = "PATH")]
    level: Option<PathBuf>,

    /// Start with the debug overlay enabled.
    #[arg(long)]
    debug: bool,
}

/// Uploads atlases to the GPU as they are requested.
struct TextureLoader<'a> {
    rl: &'a mut RaylibHandle,
    thread: &'a RaylibThread,
    textures: &'a mut TextureStore,
}

impl AtlasLoader for TextureLoader<'_> {
    fn load_texture(&mut self, path: &str) -> Result<AtlasSize, AtlasError> {
        if !std::path::Path::new(path).exists() {
            return Err(AtlasError::NotFound {
                path: path.to_string(),
            });
        }
        let texture = self
            .rl
            .load_texture(self.thread, path)
            .map_err(|e| AtlasError::Decode {
                path: path.to_string(),
                reason: e.to_string(),
            })?;
        let (width, height) = (texture.width, texture.height);
        if width <= 0 || height <= 0 {
            return Err(AtlasError::Decode {
                path: path.to_string(),
                reason: format!("empty texture {}x{}", width, height),
            });
        }
        self.textures.map.insert(Arc::from(path), texture);
        Ok(AtlasSize::new(width as u32, height as u32))
    }
}

fn read_input(rl: &RaylibHandle) -> PlayerInput {
    PlayerInput {
        left: rl.is_key_down(KeyboardKey::KEY_LEFT) || rl.is_key_down(KeyboardKey::KEY_A),
        right: rl.is_key_down(KeyboardKey::KEY_RIGHT) || rl.is_key_down(KeyboardKey::KEY_D),
        run: rl.is_key_down(KeyboardKey::KEY_LEFT_SHIFT),
        jump: rl.is_key_pressed(KeyboardKey::KEY_SPACE) || rl.is_key_pressed(KeyboardKey::KEY_UP),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("{}; using defaults", e);
    }

    let level = match &cli.level {
        Some(path) => Level::load(path).unwrap_or_else(|e| {
            log::error!("{}; falling back to the demo level", e);
            Level::demo()
        }),
        None => Level::demo(),
    };

    // --------------- Raylib window ---------------
    let (window_width, window_height) = config.window_size();
    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .title("scrollcore")
        .build();
    rl.set_target_fps(config.target_fps);

    // --------------- ECS world + actors ---------------
    let mut world = World::new();
    let mut player = ActorProfile::player();
    player.tuning = config.locomotion_tuning();
    player.gravity = config.gravity;
    player.controller = Some(config.controller());
    let mut dragon = ActorProfile::dragon();
    dragon.gravity = config.gravity;

    insert_resources(&mut world, config, level);
    if cli.debug {
        world.insert_resource(DebugMode {});
    }

    let mut textures = TextureStore::default();
    {
        let mut loader = TextureLoader {
            rl: &mut rl,
            thread: &thread,
            textures: &mut textures,
        };
        let (_, failures) = spawn_actor(&mut world, &player, Vector2::new(100.0, 400.0), &mut loader);
        if !failures.is_empty() {
            log::warn!("Player spawned with {} missing clip(s)", failures.len());
        }
        let (_, failures) = spawn_actor(&mut world, &dragon, Vector2::new(650.0, 150.0), &mut loader);
        if !failures.is_empty() {
            log::warn!("Dragon spawned with {} missing clip(s)", failures.len());
        }
    }
    world.insert_resource(textures);

    let mut schedule = frame_schedule();

    // --------------- Main loop ---------------
    while !rl.window_should_close() {
        if rl.is_key_pressed(KeyboardKey::KEY_F1) {
            if world.contains_resource::<DebugMode>() {
                world.remove_resource::<DebugMode>();
            } else {
                world.insert_resource(DebugMode {});
            }
        }
        world.insert_resource(read_input(&rl));

        let dt = rl.get_frame_time();
        update_world_time(&mut world, dt);
        schedule.run(&mut world);

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::RAYWHITE);
        render_pass(&mut world, &mut d);
        render_debug_ui(&mut world, &mut d);
    }
}
