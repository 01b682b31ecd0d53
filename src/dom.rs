use crate::constants::{DEFAULT_DENSITY, PADDING_PROPERTIES};
use crate::css::{css_px, css_to_device_px};
use linkwave_core::{MeasureSpec, Padding};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Backing-store pixels per CSS pixel.
pub fn device_pixel_ratio() -> f32 {
    web::window()
        .map(|w| w.device_pixel_ratio() as f32)
        .filter(|d| d.is_finite() && *d > 0.0)
        .unwrap_or(DEFAULT_DENSITY)
}

/// All attributes of `el` as owned `(name, value)` pairs.
pub fn element_attributes(el: &web::Element) -> Vec<(String, String)> {
    el.get_attribute_names()
        .iter()
        .filter_map(|name| name.as_string())
        .filter_map(|name| {
            let value = el.get_attribute(&name)?;
            Some((name, value))
        })
        .collect()
}

/// Own enumerable properties of a plain JS options object, stringified.
/// Anything that is not an object yields nothing.
pub fn options_attributes(options: &JsValue) -> Vec<(String, String)> {
    let Some(obj) = options.dyn_ref::<js_sys::Object>() else {
        return Vec::new();
    };
    js_sys::Object::entries(obj)
        .iter()
        .filter_map(|entry| {
            let pair = entry.dyn_into::<js_sys::Array>().ok()?;
            let key = pair.get(0).as_string()?;
            let value = js_value_to_string(&pair.get(1))?;
            Some((key, value))
        })
        .collect()
}

fn js_value_to_string(v: &JsValue) -> Option<String> {
    if let Some(s) = v.as_string() {
        return Some(s);
    }
    if let Some(b) = v.as_bool() {
        return Some(b.to_string());
    }
    // integers arrive as f64; attributes want plain integer text
    v.as_f64().map(|n| {
        if n.fract() == 0.0 {
            format!("{}", n as i64)
        } else {
            n.to_string()
        }
    })
}

/// Computed padding in backing-store pixels.
pub fn padding(el: &web::Element, density: f32) -> Padding {
    let style = web::window().and_then(|w| w.get_computed_style(el).ok().flatten());
    let Some(style) = style else {
        return Padding::default();
    };
    let [left, top, right, bottom] = PADDING_PROPERTIES.map(|prop| {
        style
            .get_property_value(prop)
            .ok()
            .and_then(|v| css_px(&v))
            .map_or(0, |px| css_to_device_px(px, density, 0.0))
    });
    Padding {
        left,
        top,
        right,
        bottom,
    }
}

/// An inline CSS `width`/`height` in px is an exact constraint; anything
/// else lets the widget pick its own size.
pub fn measure_specs(
    canvas: &web::HtmlCanvasElement,
    density: f32,
) -> (MeasureSpec, MeasureSpec) {
    let style = canvas.style();
    let spec = |prop: &str| {
        style
            .get_property_value(prop)
            .ok()
            .and_then(|v| css_px(&v))
            .map_or(MeasureSpec::Unspecified, |px| {
                MeasureSpec::Exactly(css_to_device_px(px, density, 1.0))
            })
    };
    (spec("width"), spec("height"))
}

/// Size the canvas backing store in device pixels and its CSS box to match.
pub fn apply_canvas_size(canvas: &web::HtmlCanvasElement, w_px: u32, h_px: u32, density: f32) {
    canvas.set_width(w_px.max(1));
    canvas.set_height(h_px.max(1));
    let style = canvas.style();
    let css = |px: u32| format!("{}px", px as f32 / density);
    _ = style.set_property("width", &css(w_px));
    _ = style.set_property("height", &css(h_px));
}
