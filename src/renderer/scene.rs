//! Frame description built from the simulation
//!
//! A [`DrawList`] is everything a backend needs to put one frame on screen, in
//! draw order. Which primitives appear depends on the display mode; the
//! simulation underneath is the same either way.

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::assets::AssetId;
use crate::settings::DisplayMode;
use crate::sim::{Facing, GameState, Rect, TextureRect};

/// Gravity indicator placement (top right)
const GRAVITY_BAR_POS: Vec2 = Vec2::new(760.0, 40.0);
const GRAVITY_BAR_WIDTH: f32 = 20.0;

const CANNON_SIZE: Vec2 = Vec2::new(20.0, 70.0);
const CANNON_ORIGIN: Vec2 = Vec2::new(10.0, 35.0);
const BARREL_ORIGIN: Vec2 = Vec2::new(22.0, 45.0);
const BASE_POS: Vec2 = Vec2::new(70.0, 531.0);
const BULLET_ORIGIN: Vec2 = Vec2::new(20.0, 20.0);
const CIRCLE_SEGMENTS: u32 = 24;
const AIM_LINE_WIDTH: f32 = 1.0;

const HUD_TEXT_SIZE: u32 = 20;
const HITS_LABEL_POS: Vec2 = Vec2::new(40.0, 50.0);
const MISSES_LABEL_POS: Vec2 = Vec2::new(40.0, 110.0);

/// One textured quad
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteInstance {
    pub asset: AssetId,
    pub position: Vec2,
    /// Local pivot, from the sprite's top-left, placed on `position`
    pub origin: Vec2,
    /// Degrees, clockwise on screen
    pub rotation: f32,
    /// Negative x mirrors horizontally
    pub scale: Vec2,
    /// Sub-rectangle of the texture; `None` draws the whole image
    pub texture_rect: Option<TextureRect>,
    /// Texture repeats to fill `texture_rect`
    pub repeat: bool,
    pub tint: [f32; 4],
}

impl SpriteInstance {
    fn new(asset: AssetId, position: Vec2) -> Self {
        Self {
            asset,
            position,
            origin: Vec2::ZERO,
            rotation: 0.0,
            scale: Vec2::ONE,
            texture_rect: None,
            repeat: false,
            tint: colors::WHITE,
        }
    }
}

/// A line of HUD text in the HUD font
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub position: Vec2,
    pub size: u32,
    pub color: [f32; 4],
}

/// Everything to draw for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct DrawList {
    pub clear_color: [f32; 4],
    /// Flat geometry (shapes mode), triangle list
    pub vertices: Vec<Vertex>,
    /// Textured quads in draw order (sprite mode)
    pub sprites: Vec<SpriteInstance>,
    /// Drawn last, on top of everything
    pub labels: Vec<TextLabel>,
}

impl DrawList {
    fn new() -> Self {
        Self {
            clear_color: colors::BACKGROUND,
            vertices: Vec::new(),
            sprites: Vec::new(),
            labels: Vec::new(),
        }
    }

    /// Vertex data ready for upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.vertices.as_slice())
    }
}

/// Build the frame for `state` in the given display mode
pub fn build_scene(state: &GameState, mode: DisplayMode) -> DrawList {
    let mut list = DrawList::new();
    match mode {
        DisplayMode::Shapes => push_shapes(&mut list, state),
        DisplayMode::Sprites => push_sprites(&mut list, state),
    }
    push_hud(&mut list, state);
    list
}

fn push_shapes(list: &mut DrawList, state: &GameState) {
    let snap = state.snapshot();
    let v = &mut list.vertices;

    let bar_color = if snap.gravity.clamped {
        colors::GRAVITY_BAR_CLAMPED
    } else {
        colors::GRAVITY_BAR
    };
    let bar = Rect::new(GRAVITY_BAR_POS, Vec2::new(GRAVITY_BAR_WIDTH, snap.gravity.magnitude));
    v.extend(shapes::rect(&bar, bar_color));

    v.extend(shapes::rotated_rect(
        snap.anchor,
        CANNON_SIZE,
        CANNON_ORIGIN,
        snap.barrel_angle,
        colors::CANNON,
    ));
    v.extend(shapes::circle(
        snap.projectile_pos,
        snap.projectile_radius,
        colors::BALL,
        CIRCLE_SEGMENTS,
    ));
    v.extend(shapes::rect(&snap.wall, colors::WALL));
    if let Some((pointer, anchor)) = snap.aim_line {
        v.extend(shapes::line(pointer, anchor, AIM_LINE_WIDTH, colors::AIM_LINE));
    }
    v.extend(shapes::rect(&snap.target, colors::TARGET));
}

fn push_sprites(list: &mut DrawList, state: &GameState) {
    let snap = state.snapshot();
    let s = &mut list.sprites;

    s.push(SpriteInstance::new(AssetId::Background, Vec2::ZERO));

    s.push(SpriteInstance {
        texture_rect: Some(TextureRect {
            x: 0,
            y: 0,
            width: snap.wall.size.x as u32,
            height: snap.wall.size.y as u32,
        }),
        repeat: true,
        ..SpriteInstance::new(AssetId::Wall, snap.wall.min)
    });

    s.push(SpriteInstance {
        scale: Vec2::new(1.0, snap.gravity.arrow_scale),
        tint: if snap.gravity.clamped {
            colors::ARROW_CLAMPED
        } else {
            colors::WHITE
        },
        ..SpriteInstance::new(AssetId::Arrow, GRAVITY_BAR_POS)
    });

    s.push(bullet(snap.projectile_pos, snap.projectile_rotation, colors::WHITE));

    s.push(SpriteInstance {
        origin: BARREL_ORIGIN,
        rotation: snap.barrel_angle,
        ..SpriteInstance::new(AssetId::Barrel, snap.anchor)
    });
    s.push(SpriteInstance::new(AssetId::Base, BASE_POS));

    for point in state.trajectory_preview() {
        let alpha = point.alpha as f32 / 255.0;
        s.push(bullet(point.pos, point.rotation, [1.0, 1.0, 1.0, alpha]));
    }

    let (scale, origin) = match snap.target_facing {
        Facing::Forward => (Vec2::ONE, Vec2::ZERO),
        Facing::Mirrored => (Vec2::new(-1.0, 1.0), Vec2::new(snap.target_frame.width as f32, 0.0)),
    };
    s.push(SpriteInstance {
        origin,
        scale,
        texture_rect: Some(snap.target_frame),
        ..SpriteInstance::new(AssetId::Gumba, snap.target.min)
    });
}

fn bullet(position: Vec2, rotation: f32, tint: [f32; 4]) -> SpriteInstance {
    SpriteInstance {
        origin: BULLET_ORIGIN,
        rotation,
        tint,
        ..SpriteInstance::new(AssetId::Bullet, position)
    }
}

fn push_hud(list: &mut DrawList, state: &GameState) {
    let score = state.score;
    list.labels.push(TextLabel {
        text: format!("Misses: {}", score.misses),
        position: MISSES_LABEL_POS,
        size: HUD_TEXT_SIZE,
        color: colors::HUD_TEXT,
    });
    list.labels.push(TextLabel {
        text: format!("Hits: {}", score.hits),
        position: HITS_LABEL_POS,
        size: HUD_TEXT_SIZE,
        color: colors::HUD_TEXT,
    });
}
