#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

pub mod clock;
pub mod config;
pub mod error;
pub mod geometry;
pub mod pointer;
pub mod reference;
pub mod shaders;

pub use config::RippleConfig;
pub use error::{Result, RippleError};

// Only compile browser-facing code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use wasm_bindgen::prelude::*;

    use crate::config::RippleConfig;
    use crate::error::RippleError;

    pub mod input;
    pub mod program;
    pub mod render;
    pub mod renderer;
    pub mod texture;

    pub use renderer::Renderer;

    #[wasm_bindgen(start)]
    pub async fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let config = RippleConfig::default();
        console_log::init_with_level(config.log_level).ok();

        if let Err(err) = start(&config).await {
            log::error!("startup failed: {}", err);
            return Err(err.into());
        }
        Ok(())
    }

    /// Loads the background, builds the renderer and enters the frame loop.
    pub async fn start(config: &RippleConfig) -> crate::Result<()> {
        let window = web_sys::window().ok_or(RippleError::Unsupported("window"))?;
        let document = window.document().ok_or(RippleError::Unsupported("document"))?;
        let canvas = document
            .get_element_by_id(&config.canvas_id)
            .ok_or_else(|| RippleError::MissingElement(config.canvas_id.clone()))?
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .map_err(|_| RippleError::MissingElement(config.canvas_id.clone()))?;

        let gl = render::context(&canvas)?;
        render::fit_to_window(&canvas)?;

        log::info!("loading background `{}`", config.background_url);
        let background = texture::load_texture(&gl, &config.background_url).await?;

        let renderer = Renderer::new(gl, background, config)?;
        input::register(&document, &canvas)?;
        log::info!("initialized, entering frame loop");
        render::start(renderer)
    }
}

// When compiling for non-wasm targets (e.g., `cargo test` on host),
// provide an empty stub so the crate still builds.
#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
