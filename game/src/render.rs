//! Sprite drawing composed over the backend's shader, quad, and texture
//! plumbing. The one GL-aware module in this crate; everything it calls
//! lives in `backend`.

use glam::{Mat4, Vec2, Vec3};

use backend::glutils::{self, Texture};
use backend::quad::Quad;
use backend::shaders::Shaders;

use crate::consts::*;
use crate::game::{Game, GameMode};
use crate::sprite::Sprite;

const VERTEX_SHADER: &str = r#"
#version 330 core
layout (location = 0) in vec2 position;
layout (location = 1) in vec2 texc;

uniform mat4 projection;
uniform mat4 model;
out vec2 tex_coord;

void main()
{
    tex_coord = vec2(texc.s, 1.0 - texc.t);
    gl_Position = projection * model * vec4(position, 0.0, 1.0);
}
"#;

const FRAGMENT_SHADER: &str = r#"
#version 330 core
in vec2 tex_coord;
out vec4 color;

uniform sampler2D tex_buff;
uniform vec2 offset_tex;
uniform bool use_solid_color;
uniform vec3 solid_color;

void main()
{
    if (use_solid_color) {
        color = vec4(solid_color, 1.0);
    } else {
        color = texture(tex_buff, tex_coord + offset_tex);
    }
}
"#;

/// Owns the GL-side objects the game draws with: the shared unit quad, the
/// sprite shader, and every texture.
pub struct SpriteRenderer {
    shader: Shaders,
    quad: Quad,
    background: Texture,
    player: Texture,
    cars: [Texture; NUM_CAR_TEXTURES],
}

impl SpriteRenderer {
    /// Compiles the sprite shader and loads every texture. A shader failure
    /// is fatal and carries the GL info log; a texture failure degrades to
    /// an invalid handle.
    pub fn new() -> Result<Self, String> {
        let shader = Shaders::from_str(VERTEX_SHADER, FRAGMENT_SHADER)?;
        shader.use_program();
        shader.set_i32("tex_buff", 0);
        shader.set_mat4(
            "projection",
            &Mat4::orthographic_rh_gl(0.0, WIDTH as f32, 0.0, HEIGHT as f32, -1.0, 1.0),
        );
        glutils::enable_alpha_blending();

        Ok(Self {
            shader,
            quad: Quad::new(1.0, 1.0),
            background: load_or_warn(BACKGROUND_TEXTURE),
            player: load_or_warn(PLAYER_TEXTURE),
            cars: CAR_TEXTURES.map(load_or_warn),
        })
    }

    /// Issues every draw call for the current mode. `cursor` is in render
    /// coordinates (already flipped) and drives hover highlighting.
    pub fn draw(&self, game: &Game, cursor: Vec2) {
        match game.mode {
            GameMode::Menu => {
                for button in &game.buttons {
                    self.draw_rect(
                        Vec3::new(button.pos.x, button.pos.y, 0.0),
                        Vec3::new(button.size.x, button.size.y, 1.0),
                        button.color_under(cursor),
                    );
                }
            }
            GameMode::Playing => {
                self.draw_sprite(&game.background, self.background);
                for slot in game.enemies.iter_active() {
                    self.draw_sprite(&slot.sprite, self.cars[slot.variant]);
                }
                self.draw_sprite(&game.player, self.player);
            }
            GameMode::GameOver => {
                self.draw_sprite(&game.background, self.background);
            }
        }
    }

    /// Textured draw using the sprite's current atlas cell.
    fn draw_sprite(&self, sprite: &Sprite, texture: Texture) {
        let offset = sprite.atlas_offset();
        self.shader.set_bool("use_solid_color", false);
        self.shader.set_vec2("offset_tex", offset.x, offset.y);
        texture.bind();
        self.shader
            .set_mat4("model", &model_matrix(sprite.pos, sprite.size));
        self.quad.draw();
    }

    /// Flat-colored rectangle; used for the menu buttons.
    fn draw_rect(&self, pos: Vec3, size: Vec3, color: Vec3) {
        self.shader.set_bool("use_solid_color", true);
        self.shader.set_vec3("solid_color", color.x, color.y, color.z);
        self.shader.set_mat4("model", &model_matrix(pos, size));
        self.quad.draw();
    }
}

/// Model matrix: translate to the sprite center, then scale to its size.
fn model_matrix(pos: Vec3, size: Vec3) -> Mat4 {
    Mat4::from_translation(pos) * Mat4::from_scale(size)
}

fn load_or_warn(path: &str) -> Texture {
    match glutils::load_texture(path) {
        Ok(texture) => texture,
        Err(e) => {
            log::warn!("{e}; rendering will use an invalid texture");
            Texture::invalid()
        }
    }
}
