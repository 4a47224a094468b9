use crate::constants::{OPACITY_HIDDEN, OPACITY_VISIBLE};
use crate::core::ImageSequence;
use crate::dom;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Fades the display element between images of a fixed sequence.
#[derive(Clone)]
pub struct SlideController {
    display: web::HtmlElement,
    images: ImageSequence,
}

impl SlideController {
    pub fn new(display: web::HtmlElement, images: ImageSequence) -> Self {
        Self { display, images }
    }

    /// Fade out, preload image `index`, then swap the background and fade in.
    ///
    /// Calls are not deduplicated: when several loads are in flight, whichever
    /// finishes last wins. A failed load leaves the display transparent.
    pub fn show(&self, index: usize) {
        let Some(src) = self.images.get(index) else {
            log::warn!("[slides] index {} out of range (len {})", index, self.images.len());
            return;
        };
        dom::set_style(&self.display, "opacity", OPACITY_HIDDEN);

        let display = self.display.clone();
        let src = src.to_owned();
        spawn_local(async move {
            match load_image(&src).await {
                Ok(()) => {
                    dom::set_style(&display, "background-image", &format!("url('{}')", src));
                    dom::set_style(&display, "opacity", OPACITY_VISIBLE);
                    log::info!("[slides] showing {} ({})", index, src);
                }
                Err(e) => log::warn!("[slides] failed to load {}: {:?}", src, e),
            }
        });
    }
}

// Resolves once the browser has fetched and decoded `src`. Both handlers
// live until the load settles and are detached afterwards.
async fn load_image(src: &str) -> Result<(), JsValue> {
    let img = web::HtmlImageElement::new()?;
    let mut handlers = None;
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let onload = Closure::once(move || {
            _ = resolve.call0(&JsValue::NULL);
        });
        let onerror = Closure::once(move || {
            _ = reject.call1(&JsValue::NULL, &JsValue::from_str("image_load_failed"));
        });
        img.set_onload(Some(onload.as_ref().unchecked_ref()));
        img.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        handlers = Some((onload, onerror));
    });
    img.set_src(src);
    let result = JsFuture::from(promise).await.map(|_| ());
    img.set_onload(None);
    img.set_onerror(None);
    drop(handlers);
    result
}
