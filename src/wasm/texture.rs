use js_sys::Promise;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlImageElement, WebGl2RenderingContext as GL, WebGlFramebuffer, WebGlTexture};

use crate::error::{Result, RippleError};

/// Loads `url` and uploads it as a mipmapped 2D texture.
///
/// Resolves once the image has decoded. A load that never settles never resolves.
pub async fn load_texture(gl: &GL, url: &str) -> Result<WebGlTexture> {
    let image = load_image(url).await?;
    log::debug!(
        "decoded `{}` ({}x{})",
        url,
        image.natural_width(),
        image.natural_height()
    );

    let texture = gl
        .create_texture()
        .ok_or(RippleError::ResourceCreation("texture"))?;
    gl.bind_texture(GL::TEXTURE_2D, Some(&texture));
    gl.tex_image_2d_with_u32_and_u32_and_html_image_element(
        GL::TEXTURE_2D,
        0,
        GL::RGBA as i32,
        GL::RGBA,
        GL::UNSIGNED_BYTE,
        &image,
    )?;
    gl.generate_mipmap(GL::TEXTURE_2D);
    gl.bind_texture(GL::TEXTURE_2D, None);
    Ok(texture)
}

async fn load_image(url: &str) -> Result<HtmlImageElement> {
    let image = HtmlImageElement::new()?;
    let decoded = Promise::new(&mut |resolve, reject| {
        image.set_onload(Some(&resolve));
        image.set_onerror(Some(&reject));
    });
    image.set_src(url);

    let result = JsFuture::from(decoded).await;
    image.set_onload(None);
    image.set_onerror(None);
    result.map_err(|_| RippleError::ImageLoad {
        url: url.to_owned(),
    })?;
    Ok(image)
}

/// Uploads tightly packed RGBA8 `pixels` as a mipmapped 2D texture.
pub fn texture_from_rgba(gl: &GL, width: u32, height: u32, pixels: &[u8]) -> Result<WebGlTexture> {
    let texture = gl
        .create_texture()
        .ok_or(RippleError::ResourceCreation("texture"))?;
    gl.bind_texture(GL::TEXTURE_2D, Some(&texture));
    gl.tex_image_2d_with_i32_and_i32_and_i32_and_format_and_type_and_opt_u8_array(
        GL::TEXTURE_2D,
        0,
        GL::RGBA as i32,
        width as i32,
        height as i32,
        0,
        GL::RGBA,
        GL::UNSIGNED_BYTE,
        Some(pixels),
    )?;
    gl.generate_mipmap(GL::TEXTURE_2D);
    gl.bind_texture(GL::TEXTURE_2D, None);
    Ok(texture)
}

/// The water state: a square texture attached to its own framebuffer.
pub struct WaterTarget {
    pub texture: WebGlTexture,
    pub framebuffer: WebGlFramebuffer,
    size: u32,
}

impl WaterTarget {
    /// Allocates an uninitialized `size × size` RGBA8 texture with nearest filtering
    /// and clamp-to-edge wrapping, and attaches it to a new framebuffer.
    pub fn new(gl: &GL, size: u32) -> Result<Self> {
        let texture = gl
            .create_texture()
            .ok_or(RippleError::ResourceCreation("water texture"))?;
        gl.bind_texture(GL::TEXTURE_2D, Some(&texture));
        gl.tex_image_2d_with_i32_and_i32_and_i32_and_format_and_type_and_opt_u8_array(
            GL::TEXTURE_2D,
            0,
            GL::RGBA as i32,
            size as i32,
            size as i32,
            0,
            GL::RGBA,
            GL::UNSIGNED_BYTE,
            None,
        )?;
        gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_MIN_FILTER, GL::NEAREST as i32);
        gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_MAG_FILTER, GL::NEAREST as i32);
        gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_WRAP_S, GL::CLAMP_TO_EDGE as i32);
        gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_WRAP_T, GL::CLAMP_TO_EDGE as i32);
        gl.bind_texture(GL::TEXTURE_2D, None);

        let framebuffer = gl
            .create_framebuffer()
            .ok_or(RippleError::ResourceCreation("framebuffer"))?;
        gl.bind_framebuffer(GL::FRAMEBUFFER, Some(&framebuffer));
        gl.framebuffer_texture_2d(
            GL::FRAMEBUFFER,
            GL::COLOR_ATTACHMENT0,
            GL::TEXTURE_2D,
            Some(&texture),
            0,
        );
        let status = gl.check_framebuffer_status(GL::FRAMEBUFFER);
        gl.bind_framebuffer(GL::FRAMEBUFFER, None);
        if status != GL::FRAMEBUFFER_COMPLETE {
            return Err(RippleError::IncompleteFramebuffer { status });
        }

        Ok(Self {
            texture,
            framebuffer,
            size,
        })
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.size, self.size)
    }
}
