//! Canvas 2D frame drawing
//!
//! Pure consumer of the sim: takes a read-only state snapshot and the loaded
//! sprite catalog each tick and never mutates either.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use crate::assets::SpriteCatalog;
use crate::consts::*;
use crate::sim::GameState;

/// Draw one complete frame.
pub fn draw_frame(ctx: &CanvasRenderingContext2d, state: &GameState, sprites: &SpriteCatalog) {
    let w = CANVAS_WIDTH as f64;
    let h = CANVAS_HEIGHT as f64;
    let ground_top = h - GROUND_HEIGHT as f64;

    ctx.clear_rect(0.0, 0.0, w, h);

    // Sky
    ctx.set_fill_style_str("#87CEEB");
    ctx.fill_rect(0.0, 0.0, w, h);

    // Distant mountain silhouette
    ctx.set_fill_style_str("#5F9EA0");
    ctx.begin_path();
    ctx.move_to(0.0, ground_top);
    ctx.line_to(150.0, 150.0);
    ctx.line_to(300.0, ground_top);
    ctx.line_to(450.0, 100.0);
    ctx.line_to(600.0, ground_top);
    ctx.line_to(800.0, 200.0);
    ctx.line_to(w, ground_top);
    ctx.fill();

    // Ground: dirt band with a grass strip on top
    ctx.set_fill_style_str("#8B4513");
    ctx.fill_rect(0.0, ground_top, w, GROUND_HEIGHT as f64);
    ctx.set_fill_style_str("#228B22");
    ctx.fill_rect(0.0, ground_top, w, 10.0);

    for obs in &state.obstacles {
        draw_shadow(
            ctx,
            obs.x as f64 + obs.width as f64 / 2.0,
            obs.y as f64 + obs.height as f64 - 5.0,
            obs.width as f64 / 2.0,
        );
        let _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(
            sprites.enemy(obs.sprite),
            obs.x as f64,
            obs.y as f64,
            obs.width as f64,
            obs.height as f64,
        );
    }

    draw_player(ctx, state, sprites);
}

fn draw_player(ctx: &CanvasRenderingContext2d, state: &GameState, sprites: &SpriteCatalog) {
    let player = &state.player;
    let size = (SPRITE_SIZE * PLAYER_SCALE) as f64;
    let x = PLAYER_X as f64;
    let y = player.y as f64;

    draw_shadow(ctx, x + size / 2.0, y + size - 5.0, 20.0);

    if player.is_jumping {
        // Slight vertical stretch while airborne
        let _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(
            sprites.player(),
            x,
            y,
            size,
            size * 1.1,
        );
    } else {
        // Run bobbing
        let bob = ((state.frame as f64) * 0.2).sin() * 3.0;
        let _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(
            sprites.player(),
            x,
            y + bob,
            size,
            size,
        );
    }
}

fn draw_shadow(ctx: &CanvasRenderingContext2d, cx: f64, cy: f64, rx: f64) {
    ctx.set_fill_style_str("rgba(0,0,0,0.2)");
    ctx.begin_path();
    let _ = ctx.ellipse(cx, cy, rx, 5.0, 0.0, 0.0, PI * 2.0);
    ctx.fill();
}
