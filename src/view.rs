use crate::canvas::CanvasSurface;
use crate::constants::{LATE_TICK_SLACK_MS, MOUNT_ATTRIBUTE, MOUNT_SELECTOR};
use crate::dom;
use crate::timer::IntervalScheduler;
use instant::Instant;
use linkwave_core::{saturating_i32, Color, MeasureSpec, RingAnimator, WaveSettings};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

struct ViewInner {
    canvas: web::HtmlCanvasElement,
    surface: CanvasSurface,
    animator: RingAnimator<IntervalScheduler>,
    density: f32,
    // constraints the page author set, captured before we size the canvas
    specs: (MeasureSpec, MeasureSpec),
    last_tick: Option<Instant>,
}

impl ViewInner {
    fn on_tick(&mut self) {
        if !self.canvas.is_connected() {
            log::info!("[view] canvas left the document; detaching");
            self.animator.detach();
            self.last_tick = None;
            return;
        }
        let now = Instant::now();
        if let Some(prev) = self.last_tick.replace(now) {
            let expected = self.animator.config().tick_interval;
            let late = (now - prev).saturating_sub(expected);
            if late > Duration::from_millis(LATE_TICK_SLACK_MS) {
                log::trace!("[view] tick late by {}ms", late.as_millis());
            }
        }
        if !self.animator.tick(&mut self.surface) {
            self.last_tick = None;
        }
    }

    fn relayout(&mut self) {
        let padding = dom::padding(&self.canvas, self.density);
        let (w, h) = self.animator.measure(self.specs.0, self.specs.1, padding);
        dom::apply_canvas_size(&self.canvas, w, h, self.density);
        // resizing the backing store wipes it
        self.animator.draw(&mut self.surface);
    }
}

/// The link-wave widget bound to one canvas element.
#[wasm_bindgen]
pub struct LinkWaveView {
    inner: Rc<RefCell<ViewInner>>,
}

impl LinkWaveView {
    fn mount(
        canvas: web::HtmlCanvasElement,
        settings: WaveSettings,
        density: f32,
    ) -> anyhow::Result<Self> {
        let surface = CanvasSurface::new(canvas.clone())?;
        let specs = dom::measure_specs(&canvas, density);
        log::info!(
            "[view] mount speed={} rings={} color={} center={}px running={}",
            settings.speed(),
            settings.ring_count(),
            settings.color(),
            settings.center_width(),
            settings.running()
        );
        let inner = Rc::new_cyclic(|weak: &Weak<RefCell<ViewInner>>| {
            let weak = weak.clone();
            let scheduler = IntervalScheduler::new(move || {
                let Some(inner) = weak.upgrade() else {
                    return;
                };
                match inner.try_borrow_mut() {
                    Ok(mut inner) => inner.on_tick(),
                    Err(_) => log::warn!("[view] tick skipped; view busy"),
                };
            });
            RefCell::new(ViewInner {
                canvas,
                surface,
                animator: RingAnimator::new(settings, scheduler),
                density,
                specs,
                last_tick: None,
            })
        });
        inner.borrow_mut().relayout();
        Ok(Self { inner })
    }

    fn with<T>(&self, f: impl FnOnce(&mut ViewInner) -> T) -> T {
        f(&mut self.inner.borrow_mut())
    }
}

#[wasm_bindgen]
impl LinkWaveView {
    /// Build a view on `canvas`. Settings come from the element's `data-*`
    /// attributes, then from `options` (`speed`, `color`, `ringCount`,
    /// `running`, `centerWidth`), later entries winning.
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas: web::HtmlCanvasElement,
        options: JsValue,
    ) -> Result<LinkWaveView, JsValue> {
        let density = dom::device_pixel_ratio();
        let mut attrs = dom::element_attributes(&canvas);
        attrs.extend(dom::options_attributes(&options));
        let settings = WaveSettings::from_attributes(
            attrs.iter().map(|(k, v)| (k.as_str(), v.as_str())),
            density,
        );
        Self::mount(canvas, settings, density).map_err(|e| JsValue::from_str(&format!("{e:#}")))
    }

    pub fn start(&self) {
        self.with(|v| v.animator.start());
    }

    pub fn stop(&self) {
        self.with(|v| {
            v.animator.stop();
            v.last_tick = None;
        });
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.with(|v| v.animator.is_running())
    }

    #[wasm_bindgen(js_name = getSpeed)]
    pub fn speed(&self) -> u8 {
        self.with(|v| v.animator.speed())
    }

    #[wasm_bindgen(js_name = setSpeed)]
    pub fn set_speed(&self, speed: f64) {
        self.with(|v| v.animator.set_speed(saturating_i32(speed)));
    }

    #[wasm_bindgen(js_name = getRingCount)]
    pub fn ring_count(&self) -> u8 {
        self.with(|v| v.animator.ring_count())
    }

    #[wasm_bindgen(js_name = setRingCount)]
    pub fn set_ring_count(&self, count: f64) {
        self.with(|v| v.animator.set_ring_count(saturating_i32(count)));
    }

    /// Hex color, `#rrggbb` or `#aarrggbb` when translucent.
    #[wasm_bindgen(js_name = getColor)]
    pub fn color(&self) -> String {
        self.with(|v| v.animator.color().to_string())
    }

    /// Unparseable colors are logged and ignored.
    #[wasm_bindgen(js_name = setColor)]
    pub fn set_color(&self, color: &str) {
        match color.parse::<Color>() {
            Ok(c) => self.with(|v| v.animator.set_color(c)),
            Err(e) => log::warn!("[view] setColor ignored: {e}"),
        }
    }

    /// Center view width in canvas pixels.
    #[wasm_bindgen(js_name = getCenterWidth)]
    pub fn center_width(&self) -> u32 {
        self.with(|v| v.animator.center_width())
    }

    #[wasm_bindgen(js_name = setCenterWidth)]
    pub fn set_center_width(&self, width: f64) {
        self.with(|v| {
            v.animator.set_center_width(saturating_i32(width));
            v.relayout();
        });
    }

    /// Preferred content size in canvas pixels, padding excluded.
    #[wasm_bindgen(js_name = preferredSize)]
    pub fn preferred_size(&self) -> u32 {
        self.with(|v| v.animator.preferred_size())
    }

    /// Re-measure against the element's padding and redraw.
    pub fn relayout(&self) {
        self.with(|v| v.relayout());
    }

    /// Stop for good and drop the current rings. `start()` afterwards
    /// begins again from a single ring.
    pub fn detach(&self) {
        self.with(|v| {
            v.animator.detach();
            v.last_tick = None;
        });
    }
}

/// Mount a view on every `canvas[data-link-wave]` in the document.
#[wasm_bindgen(js_name = mountAll)]
pub fn mount_all() -> js_sys::Array {
    let views = js_sys::Array::new();
    let Some(document) = dom::window_document() else {
        log::warn!("[view] no document; nothing mounted");
        return views;
    };
    let nodes = match document.query_selector_all(MOUNT_SELECTOR) {
        Ok(n) => n,
        Err(e) => {
            log::error!("[view] query {MOUNT_SELECTOR} failed: {:?}", e);
            return views;
        }
    };
    for i in 0..nodes.length() {
        let Some(canvas) = nodes
            .item(i)
            .and_then(|n| n.dyn_into::<web::HtmlCanvasElement>().ok())
        else {
            continue;
        };
        match LinkWaveView::new(canvas, JsValue::UNDEFINED) {
            Ok(view) => {
                views.push(&JsValue::from(view));
            }
            Err(e) => log::error!("[view] {MOUNT_ATTRIBUTE} mount failed: {:?}", e),
        }
    }
    log::info!("[view] mounted {} view(s)", views.length());
    views
}
