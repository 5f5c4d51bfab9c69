//! Raylib drawing for the demo binary.
//!
//! The simulation never calls into these; the main loop runs them inside
//! `begin_drawing` after the frame schedule.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::actor::Player;
use crate::components::body::Body;
use crate::components::boxcollider::BoxCollider;
use crate::components::clipset::ClipSet;
use crate::components::locomotion::Locomotion;
use crate::components::mapposition::MapPosition;
use crate::resources::debugmode::DebugMode;
use crate::resources::level::Level;
use crate::resources::texturestore::TextureStore;

/// Draw the level and the active frame of every entity.
///
/// Entities whose active clip has nothing to show (unloaded or degenerate
/// sheet) are drawn as a filled hitbox so a scene without assets stays
/// readable.
pub fn render_pass(world: &mut World, d: &mut impl RaylibDraw) {
    if let Some(level) = world.get_resource::<Level>() {
        for platform in level.platforms() {
            d.draw_rectangle_rec(platform.bounds(), platform.color());
        }
    }

    let mut actors = world.query::<(&MapPosition, &ClipSet, Option<&BoxCollider>)>();
    let textures = world.get_resource::<TextureStore>();

    for (position, clips, collider) in actors.iter(world) {
        let drawable = clips.renderable().and_then(|r| {
            textures
                .and_then(|t| t.get(&r.atlas.key))
                .map(|tex| (r, tex))
        });
        match drawable {
            Some((renderable, tex)) => {
                let p = renderable.placement;
                let (sx, sy) = (p.scale.x, p.scale.y);
                // Negative source width mirrors the frame
                let mut src = renderable.source;
                if sx < 0.0 {
                    src.width = -src.width;
                }
                let dest = Rectangle {
                    x: p.position.x,
                    y: p.position.y,
                    width: renderable.source.width * sx.abs(),
                    height: renderable.source.height * sy.abs(),
                };
                let origin = Vector2 {
                    x: p.origin.x * sx.abs(),
                    y: p.origin.y * sy.abs(),
                };
                d.draw_texture_pro(tex, src, dest, origin, 0.0, Color::WHITE);
            }
            None => {
                if let Some(collider) = collider {
                    d.draw_rectangle_rec(collider.rect(position.pos), Color::MAGENTA);
                }
            }
        }
    }

    if world.contains_resource::<DebugMode>() {
        let mut colliders = world.query::<(&BoxCollider, &MapPosition, Option<&Locomotion>)>();
        for (collider, position, loco) in colliders.iter(world) {
            let rect = collider.rect(position.pos);
            d.draw_rectangle_lines_ex(rect, 1.0, Color::RED);
            if let Some(loco) = loco {
                let label = format!("{:?}", loco.state);
                d.draw_text(&label, rect.x as i32, rect.y as i32 - 12, 10, Color::RED);
            }
        }
    }
}

/// FPS, actor count and the player's state, top-left, while debugging.
pub fn render_debug_ui(world: &mut World, d: &mut RaylibDrawHandle) {
    if !world.contains_resource::<DebugMode>() {
        return;
    }
    let header = format!("F1 debug | FPS: {}", d.get_fps());
    d.draw_text(&header, 10, 10, 10, Color::BLACK);

    let mut actors = world.query::<&ClipSet>();
    let text = format!("Actors: {}", actors.iter(world).count());
    d.draw_text(&text, 10, 24, 10, Color::BLACK);

    let mut players = world.query_filtered::<(&Locomotion, &Body), With<Player>>();
    for (loco, body) in players.iter(world) {
        let text = format!(
            "Player: {:?} v=({:.0}, {:.0}) ground={}",
            loco.state, body.velocity.x, body.velocity.y, body.on_ground
        );
        d.draw_text(&text, 10, 38, 10, Color::BLACK);
    }
}
