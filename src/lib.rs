#![cfg(target_arch = "wasm32")]
use crate::core::{BurstConfig, ImageSequence, Slideshow, IMAGES};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod overlay;
mod particles;
mod slides;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("image-cycler starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let display = dom::query_html(&document, constants::IMAGE_DISPLAY_SELECTOR)?;
    let button = dom::html_by_id(&document, constants::ACTIVATION_BUTTON_ID)?;
    let message = dom::query_html(&document, constants::COMPLETION_MESSAGE_SELECTOR)?;
    let container = dom::query_html(&document, constants::EFFECTS_CONTAINER_SELECTOR)?;

    let images = ImageSequence::new(IMAGES.iter().copied())?;
    log::info!("[init] {} images", images.len());

    // Sound is optional; the slideshow and particles work without it.
    let tones = match audio::ToneGenerator::new() {
        Ok(t) => Some(t),
        Err(e) => {
            log::warn!("[audio] AudioContext unavailable: {:?}", e);
            None
        }
    };

    let slideshow = Rc::new(RefCell::new(Slideshow::new(images.clone())));
    let slides = slides::SlideController::new(display, images);
    let particles =
        particles::ParticleEmitter::new(document.clone(), container.clone(), BurstConfig::default());

    overlay::hide(&message);
    slides.show(slideshow.borrow().cursor());

    events::wire_activation(events::ActivationWiring {
        button,
        message,
        container,
        slideshow,
        slides,
        particles,
        tones,
    });

    Ok(())
}
