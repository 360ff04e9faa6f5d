//! Shape generation for 2D primitives
//!
//! Turns snapshot entities into flat draw commands. Colors are normalized
//! RGBA so any backend can consume them directly.

use glam::Vec2;

use crate::consts::CANVAS_WIDTH;
use crate::palette::{self, Rgb};
use crate::snapshot::{EntityView, Hud, ParticleView};
use crate::sim::Rect;

use super::starfield::Star;

/// A single draw command
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Triangle { points: [Vec2; 3], color: [f32; 4] },
    Rect { rect: Rect, color: [f32; 4], filled: bool },
    Circle { center: Vec2, radius: f32, color: [f32; 4] },
    Text { pos: Vec2, text: String, color: [f32; 4] },
}

/// Convert an 8-bit palette color to normalized RGBA
pub fn rgba(color: Rgb, alpha: u8) -> [f32; 4] {
    [
        color[0] as f32 / 255.0,
        color[1] as f32 / 255.0,
        color[2] as f32 / 255.0,
        alpha as f32 / 255.0,
    ]
}

/// Nose-up ship silhouette inside its bounding box
pub fn ship_up(rect: &Rect, color: Rgb) -> Shape {
    Shape::Triangle {
        points: [
            Vec2::new(rect.x + rect.w / 2.0, rect.y),
            Vec2::new(rect.x, rect.bottom()),
            Vec2::new(rect.right(), rect.bottom()),
        ],
        color: rgba(color, 255),
    }
}

/// Engine flame under a ship, `depth` pixels deep
fn engine_glow(r: &Rect, depth: f32) -> Shape {
    Shape::Triangle {
        points: [
            Vec2::new(r.x + r.w / 4.0, r.bottom()),
            Vec2::new(r.x + r.w / 2.0, r.bottom() + depth),
            Vec2::new(r.x + 3.0 * r.w / 4.0, r.bottom()),
        ],
        color: rgba(palette::ORANGE, 255),
    }
}

/// Enemy hull plus its variant detail: fast ones glow, big ones get a cockpit
pub fn enemy(view: &EntityView) -> Vec<Shape> {
    let r = &view.rect;
    let mut shapes = vec![ship_up(r, view.color)];
    match view.kind {
        "fast" => shapes.push(engine_glow(r, 5.0)),
        "big" => shapes.push(Shape::Circle {
            center: r.center(),
            radius: r.w / 4.0,
            color: rgba(palette::CYAN, 255),
        }),
        _ => {}
    }
    shapes
}

/// Player ship: hull, cockpit, engine glow and wings
pub fn player(view: &EntityView) -> Vec<Shape> {
    let r = &view.rect;
    let color = rgba(view.color, 255);
    let mut shapes = vec![ship_up(r, view.color)];

    shapes.push(Shape::Circle {
        center: Vec2::new(r.x + r.w / 2.0, r.y + r.h / 3.0),
        radius: r.w / 6.0,
        color: rgba(palette::CYAN, 255),
    });
    shapes.push(engine_glow(r, 10.0));
    for (edge, tip) in [(r.x, r.x - r.w / 4.0), (r.right(), r.right() + r.w / 4.0)] {
        shapes.push(Shape::Triangle {
            points: [
                Vec2::new(edge, r.y + 2.0 * r.h / 3.0),
                Vec2::new(tip, r.bottom()),
                Vec2::new(edge, r.bottom()),
            ],
            color,
        });
    }
    shapes
}

/// Boss hull with its eye and three engines
pub fn boss(view: &EntityView) -> Vec<Shape> {
    let r = &view.rect;
    let eye = Vec2::new(r.x + r.w / 2.0, r.y + r.h / 3.0);
    let engines = (-1..=1).map(|i| Shape::Rect {
        rect: Rect::new(r.x + r.w / 2.0 + i as f32 * r.w / 4.0 - 5.0, r.bottom(), 10.0, 15.0),
        color: rgba(palette::ORANGE, 255),
        filled: true,
    });
    let mut shapes = vec![
        ship_up(r, view.color),
        Shape::Circle {
            center: eye,
            radius: r.w / 5.0,
            color: rgba(palette::RED, 255),
        },
        Shape::Circle {
            center: eye,
            radius: r.w / 10.0,
            color: rgba(palette::YELLOW, 255),
        },
    ];
    shapes.extend(engines);
    shapes
}

pub fn filled_rect(view: &EntityView) -> Shape {
    Shape::Rect {
        rect: view.rect,
        color: rgba(view.color, 255),
        filled: true,
    }
}

/// Bullet body with a white glow at its tail
pub fn bullet(view: &EntityView) -> [Shape; 2] {
    let r = &view.rect;
    [
        filled_rect(view),
        Shape::Circle {
            center: Vec2::new(r.x + r.w / 2.0, r.bottom()),
            radius: 3.0,
            color: rgba(palette::WHITE, 255),
        },
    ]
}

/// Pickup square with its type letter centered on it
pub fn powerup(view: &EntityView) -> Vec<Shape> {
    let mut shapes = vec![filled_rect(view)];
    if let Some(label) = view.label {
        shapes.push(Shape::Text {
            pos: view.rect.center(),
            text: label.to_string(),
            color: rgba(palette::WHITE, 255),
        });
    }
    shapes
}

pub fn star(star: &Star) -> Shape {
    Shape::Circle {
        center: star.pos,
        radius: star.radius,
        color: rgba(palette::WHITE, 255),
    }
}

pub fn projectile(view: &EntityView) -> Shape {
    Shape::Circle {
        center: view.rect.center(),
        radius: view.rect.w,
        color: rgba(view.color, 255),
    }
}

pub fn particle(p: &ParticleView) -> Shape {
    Shape::Circle {
        center: p.pos,
        radius: p.radius,
        color: rgba(p.color, p.alpha),
    }
}

/// Background, fill and frame for a horizontal bar
pub fn bar(rect: Rect, fraction: f32) -> Vec<Shape> {
    let mut fill = rect;
    fill.w = rect.w * fraction.clamp(0.0, 1.0);
    vec![
        Shape::Rect {
            rect,
            color: rgba(palette::RED, 255),
            filled: true,
        },
        Shape::Rect {
            rect: fill,
            color: rgba(palette::GREEN, 255),
            filled: true,
        },
        Shape::Rect {
            rect,
            color: rgba(palette::WHITE, 255),
            filled: false,
        },
    ]
}

/// Score, levels, health and (when present) the boss bar
pub fn hud(hud: &Hud) -> Vec<Shape> {
    let white = rgba(palette::WHITE, 255);
    let text = |x: f32, y: f32, text: String| Shape::Text {
        pos: Vec2::new(x, y),
        text,
        color: white,
    };

    let mut shapes = vec![
        text(20.0, 20.0, format!("Score: {}", hud.score)),
        text(20.0, 50.0, format!("Level: {}", hud.level)),
        text(20.0, 80.0, format!("Ship Level: {}", hud.ship_level)),
    ];
    shapes.extend(bar(
        Rect::new(CANVAS_WIDTH - 220.0, 20.0, 200.0, 20.0),
        hud.health_fraction(),
    ));
    shapes.push(text(
        CANVAS_WIDTH - 220.0,
        45.0,
        format!("Health: {}/{}", hud.health, hud.max_health),
    ));
    shapes.push(text(
        CANVAS_WIDTH - 220.0,
        70.0,
        format!("Bullet Power: {}", hud.bullet_power),
    ));

    if let (Some((hp, max)), Some(fraction)) = (hud.boss_health, hud.boss_health_fraction()) {
        shapes.extend(bar(
            Rect::new(CANVAS_WIDTH / 2.0 - 100.0, 20.0, 200.0, 20.0),
            fraction,
        ));
        shapes.push(text(CANVAS_WIDTH / 2.0 - 60.0, 45.0, format!("BOSS: {}/{}", hp, max)));
    }
    shapes
}
