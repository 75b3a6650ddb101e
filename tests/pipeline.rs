#![cfg(target_arch = "wasm32")]

use ripples_wasm::config::RippleConfig;
use ripples_wasm::wasm::input;
use ripples_wasm::wasm::texture::texture_from_rgba;
use ripples_wasm::wasm::Renderer;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::WebGl2RenderingContext as GL;

wasm_bindgen_test_configure!(run_in_browser);

const SIZE: u32 = 64;
const SOLID_RED: [u8; 16] = [
    255, 0, 0, 255, 255, 0, 0, 255, //
    255, 0, 0, 255, 255, 0, 0, 255,
];

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn canvas() -> web_sys::HtmlCanvasElement {
    document().create_element("canvas").unwrap().dyn_into().unwrap()
}

fn renderer() -> Renderer {
    renderer_on(&canvas())
}

fn renderer_on(canvas: &web_sys::HtmlCanvasElement) -> Renderer {
    canvas.set_width(SIZE);
    canvas.set_height(SIZE);
    let gl: GL = canvas.get_context("webgl2").unwrap().unwrap().dyn_into().unwrap();
    let background = texture_from_rgba(&gl, 2, 2, &SOLID_RED).unwrap();
    Renderer::new(gl, background, &RippleConfig::default()).unwrap()
}

fn read_canvas(gl: &GL) -> Vec<u8> {
    let mut pixels = vec![0u8; (SIZE * SIZE * 4) as usize];
    gl.bind_framebuffer(GL::FRAMEBUFFER, None);
    gl.read_pixels_with_opt_u8_array(
        0,
        0,
        SIZE as i32,
        SIZE as i32,
        GL::RGBA,
        GL::UNSIGNED_BYTE,
        Some(pixels.as_mut_slice()),
    )
    .unwrap();
    pixels
}

fn pixel(pixels: &[u8], x: u32, y: u32) -> [u8; 4] {
    let i = ((y * SIZE + x) * 4) as usize;
    [pixels[i], pixels[i + 1], pixels[i + 2], pixels[i + 3]]
}

fn assert_close(got: [u8; 4], want: [u8; 4]) {
    for (g, w) in got.iter().zip(want.iter()) {
        assert!((*g as i32 - *w as i32).abs() <= 2, "got {:?}, want {:?}", got, want);
    }
}

#[wasm_bindgen_test]
fn water_texture_is_fixed_size() {
    let renderer = renderer();
    assert_eq!(renderer.water_dimensions(), (512, 512));
}

#[wasm_bindgen_test]
fn disc_composites_over_red_background() {
    let mut renderer = renderer();
    renderer.render_frame(0.0);
    let pixels = read_canvas(renderer.gl());

    // Outside the disc: half red background, half black water.
    for (x, y) in [(0, 0), (SIZE - 1, SIZE - 1), (4, SIZE / 2), (SIZE / 2, 4)] {
        assert_close(pixel(&pixels, x, y), [128, 0, 0, 255]);
    }
    // Inside the disc both inputs are red.
    for (x, y) in [(SIZE / 2, SIZE / 2), (SIZE / 2 - 1, SIZE / 2 - 1)] {
        assert_close(pixel(&pixels, x, y), [255, 0, 0, 255]);
    }
    assert_eq!(renderer.gl().get_error(), GL::NO_ERROR);
}

#[wasm_bindgen_test]
fn frames_are_identical_without_input() {
    let mut renderer = renderer();
    renderer.render_frame(0.0);
    let first = read_canvas(renderer.gl());
    renderer.render_frame(16.0);
    let second = read_canvas(renderer.gl());
    assert_eq!(first, second);
    assert_eq!(renderer.clock().frames(), 2);
    assert_eq!(renderer.clock().last(), Some(16.0));
}

#[wasm_bindgen_test]
fn pointer_events_leave_frames_unchanged() {
    let canvas = canvas();
    let mut renderer = renderer_on(&canvas);
    input::register(&document(), &canvas).unwrap();

    renderer.render_frame(0.0);
    let before = read_canvas(renderer.gl());

    for kind in ["mousedown", "mousemove", "mouseup"] {
        let event = web_sys::MouseEvent::new(kind).unwrap();
        document().dispatch_event(&event).unwrap();
    }

    renderer.render_frame(16.0);
    let after = read_canvas(renderer.gl());
    assert_eq!(before, after);
}
