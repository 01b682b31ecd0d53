// Host-side tests for CSS value parsing.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod css {
    include!("../src/css.rs");
}

use css::*;

#[test]
fn parses_px_lengths() {
    assert_eq!(css_px("12.5px"), Some(12.5));
    assert_eq!(css_px(" 0px "), Some(0.0));
    assert_eq!(css_px("200 px"), Some(200.0));
}

#[test]
fn rejects_keywords_and_other_units() {
    assert_eq!(css_px("auto"), None);
    assert_eq!(css_px(""), None);
    assert_eq!(css_px("px"), None);
    assert_eq!(css_px("3em"), None);
    assert_eq!(css_px("50%"), None);
    assert_eq!(css_px("infpx"), None);
}

#[test]
fn device_px_rounds_and_floors() {
    assert_eq!(css_to_device_px(12.5, 2.0, 0.0), 25);
    assert_eq!(css_to_device_px(10.3, 1.5, 0.0), 15);
    assert_eq!(css_to_device_px(0.0, 2.0, 1.0), 1);
    assert_eq!(css_to_device_px(-4.0, 1.0, 0.0), 0);
}
