use crate::core::Bounds;
use anyhow::anyhow;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// First element matching `selector`, as an `HtmlElement`.
pub fn query_html(document: &web::Document, selector: &str) -> anyhow::Result<web::HtmlElement> {
    document
        .query_selector(selector)
        .map_err(|e| anyhow!("bad selector {}: {:?}", selector, e))?
        .ok_or_else(|| anyhow!("missing {}", selector))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow!("{} is not an HtmlElement: {:?}", selector, e))
}

pub fn html_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{}", id))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow!("#{} is not an HtmlElement: {:?}", id, e))
}

#[inline]
pub fn add_click_listener(el: &web::HtmlElement, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

pub fn bounds(el: &web::Element) -> Bounds {
    let rect = el.get_bounding_client_rect();
    Bounds {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
}

/// Resolves after `ms` milliseconds on the window's timer queue.
pub async fn sleep(ms: u32) -> Result<(), JsValue> {
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let Some(window) = web::window() else {
            _ = reject.call1(&JsValue::NULL, &JsValue::from_str("no window"));
            return;
        };
        let timeout = i32::try_from(ms).unwrap_or(i32::MAX);
        if let Err(e) =
            window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout)
        {
            _ = reject.call1(&JsValue::NULL, &e);
        }
    });
    JsFuture::from(promise).await.map(|_| ())
}

/// Run `task` as an independent, non-cancellable task after `ms`
/// milliseconds.
pub fn spawn_after(ms: u32, task: impl FnOnce() + 'static) {
    spawn_local(async move {
        match sleep(ms).await {
            Ok(()) => task(),
            Err(e) => log::warn!("timer failed: {:?}", e),
        }
    });
}
