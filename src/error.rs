use thiserror::Error;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use crate::shaders::ShaderStage;

pub type Result<T> = std::result::Result<T, RippleError>;

#[derive(Debug, Error)]
pub enum RippleError {
    #[error("{stage} shader failed to compile: {log}")]
    ShaderCompile { stage: ShaderStage, log: String },

    #[error("program `{program}` failed to link: {log}")]
    ShaderLink { program: &'static str, log: String },

    #[error("attribute `{0}` not found in program")]
    MissingAttribute(&'static str),

    #[error("uniform `{0}` not found in program")]
    MissingUniform(&'static str),

    #[error("failed to create {0}")]
    ResourceCreation(&'static str),

    #[error("failed to load image `{url}`")]
    ImageLoad { url: String },

    #[error("framebuffer incomplete (status 0x{status:04x})")]
    IncompleteFramebuffer { status: u32 },

    #[error("element `#{0}` not found")]
    MissingElement(String),

    #[error("{0} not supported")]
    Unsupported(&'static str),

    #[error("javascript error: {0}")]
    Js(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for RippleError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                value
                    .dyn_ref::<js_sys::Error>()
                    .map(|e| String::from(e.message()))
            })
            .unwrap_or_else(|| format!("{:?}", value));
        RippleError::Js(message)
    }
}

#[cfg(target_arch = "wasm32")]
impl From<RippleError> for wasm_bindgen::JsValue {
    fn from(err: RippleError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
