//! Scene renderer
//!
//! Draw order is fixed: backdrop, zombies back-to-front, spark spaces,
//! crosshair, then the status overlay on top.

use glam::Vec2;

use super::colors;
use super::sprites::{SpriteAtlas, SpriteId};
use super::surface::{DrawSurface, LineStyle};
use super::transform::RenderTransform;
use crate::consts::*;
use crate::error::RenderError;
use crate::sim::random::RandomSource;
use crate::sim::state::GameState;
use crate::sim::status::*;

/// Draw one full frame of `state`
pub fn render_frame<S, R>(
    surface: &mut S,
    atlas: &SpriteAtlas<S::Bitmap>,
    state: &GameState<R>,
) -> Result<(), RenderError>
where
    S: DrawSurface,
    R: RandomSource,
{
    let origin = state.viewport.center();
    render_backdrop(surface, atlas, origin)?;
    render_zombies(surface, atlas, state, origin)?;
    render_sparks(surface, state, origin);
    render_crosshair(surface, atlas, state, origin)?;
    render_status(surface, atlas, state, origin)?;
    Ok(())
}

fn render_backdrop<S: DrawSurface>(
    surface: &mut S,
    atlas: &SpriteAtlas<S::Bitmap>,
    origin: Vec2,
) -> Result<(), RenderError> {
    let bitmap = atlas.frame(SpriteId::Backdrop, 0)?;
    let frame_height = surface.bitmap_size(bitmap).y;
    let transform = RenderTransform::new(origin).fit_height(surface.size().y, frame_height);
    surface.draw_image(bitmap, transform.to_affine());
    Ok(())
}

fn render_zombies<S: DrawSurface, R: RandomSource>(
    surface: &mut S,
    atlas: &SpriteAtlas<S::Bitmap>,
    state: &GameState<R>,
    origin: Vec2,
) -> Result<(), RenderError> {
    for zombie in state.draw_order() {
        let bitmap = atlas.frame(SpriteId::Zombie, zombie.walk_frame())?;
        let transform = RenderTransform::new(origin)
            .position_of(zombie.pos)
            .rotation_of(zombie.rotation)
            .scale_of(zombie.scale);
        surface.draw_image(bitmap, transform.to_affine());
    }
    Ok(())
}

fn render_sparks<S: DrawSurface, R: RandomSource>(surface: &mut S, state: &GameState<R>, origin: Vec2) {
    let transform = RenderTransform::new(origin).to_affine();
    for space in state.particle_spaces() {
        let style = LineStyle {
            center: space.pos,
            radius: SPARK_GRADIENT_RADIUS,
            inner: colors::SPARK_INNER,
            outer: colors::SPARK_OUTER,
            width: SPARK_LINE_WIDTH,
        };
        for spark in space.particles() {
            surface.draw_line(spark.pos, spark.trail_pos, &style, transform);
        }
    }
}

fn render_crosshair<S: DrawSurface, R: RandomSource>(
    surface: &mut S,
    atlas: &SpriteAtlas<S::Bitmap>,
    state: &GameState<R>,
    origin: Vec2,
) -> Result<(), RenderError> {
    let crosshair = &state.crosshair;
    let bitmap = atlas.frame(SpriteId::Crosshair, 0)?;
    let transform = RenderTransform::new(origin)
        .position_of(crosshair.pos)
        .rotation_of(crosshair.rotation)
        .scale_of(crosshair.scale);
    surface.draw_image(bitmap, transform.to_affine());
    Ok(())
}

fn render_status<S: DrawSurface, R: RandomSource>(
    surface: &mut S,
    atlas: &SpriteAtlas<S::Bitmap>,
    state: &GameState<R>,
    origin: Vec2,
) -> Result<(), RenderError> {
    let status = &state.status;
    let shot_shake = status.shot_shake();
    let lives = state.lives as i32;

    // Hearts
    let mut heart_pos = state.viewport.viewport_to_absolute(HEART_POSITION_START);
    for i in 0..HEART_COUNT {
        let frame = if (i as i32) < lives {
            FULL_HEART_FRAME
        } else {
            LOST_HEART_FRAME
        };
        let bitmap = atlas.frame(SpriteId::Heart, frame)?;
        let pos = heart_pos + status.heart_shake(lives - i as i32) + shot_shake;
        let transform = RenderTransform::new(origin).position_of(pos).scale_of(HEART_SCALE);
        surface.draw_image(bitmap, transform.to_affine());
        heart_pos.x += HEART_SPACING;
    }

    let font = state.settings.font_name.as_str();
    let font_size = state.settings.font_size;

    // Score
    let score = format!("{:0width$}", state.score, width = SCORE_DIGITS);
    let score_pos = state.viewport.viewport_to_absolute(SCORE_POSITION) + shot_shake;
    let score_layers = TextLayers {
        pos: score_pos,
        rotation: 0.0,
        offset: SCORE_LAYER_OFFSET,
        hidden: 0,
    };
    score_layers.draw(surface, &score, font, font_size, origin);

    // Screen card
    let text = status.card_text();
    if !text.is_empty() {
        let card_layers = TextLayers {
            pos: status.card_offset(),
            rotation: status.card_rotation(),
            offset: status.card_layer_offset(),
            hidden: status.hidden_layer_count(),
        };
        card_layers.draw(surface, text, font, font_size, origin);
    }
    Ok(())
}

/// Stacked text copies; the bottom `hidden` layers are skipped and the
/// remaining ones take colors from the bottom of the palette up
struct TextLayers {
    pos: Vec2,
    rotation: f32,
    offset: Vec2,
    hidden: usize,
}

impl TextLayers {
    fn draw<S: DrawSurface>(&self, surface: &mut S, text: &str, font: &str, size: f32, origin: Vec2) {
        let mut layer_pos = self.pos;
        for i in 0..LAYER_COUNT {
            if i >= self.hidden {
                let transform = RenderTransform::new(origin)
                    .position_of(layer_pos)
                    .rotation_of(self.rotation);
                let color = colors::TEXT_LAYERS[i - self.hidden];
                surface.draw_text(text, color, font, size, transform.to_affine());
            }
            layer_pos += self.offset;
        }
    }
}
