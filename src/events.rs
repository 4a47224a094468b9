use crate::audio::ToneGenerator;
use crate::core::{burst_origin, Slideshow};
use crate::dom;
use crate::overlay;
use crate::particles::ParticleEmitter;
use crate::slides::SlideController;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Everything the activation handler touches. Built once in `init` and
/// moved into the button's click listener.
#[derive(Clone)]
pub struct ActivationWiring {
    pub button: web::HtmlElement,
    pub message: web::HtmlElement,
    pub container: web::HtmlElement,
    pub slideshow: Rc<RefCell<Slideshow>>,
    pub slides: SlideController,
    pub particles: ParticleEmitter,
    // None when the platform refused to create an AudioContext
    pub tones: Option<ToneGenerator>,
}

pub fn wire_activation(w: ActivationWiring) {
    let button = w.button.clone();
    dom::add_click_listener(&button, move || handle_activation(&w));
}

pub fn handle_activation(w: &ActivationWiring) {
    if overlay::is_hidden(&w.button) {
        return;
    }

    if let Some(tones) = &w.tones {
        tones.resume();
        tones.play_click();
    }

    let origin = burst_origin(dom::bounds(&w.button), dom::bounds(&w.container));
    w.particles.emit(origin);

    let activation = w.slideshow.borrow_mut().activate();
    if let Some(index) = activation.show {
        w.slides.show(index);
    }

    {
        let state = w.slideshow.borrow();
        log::info!(
            "[click] cursor={} image={} stage={:?}",
            state.cursor(),
            state.current_image().unwrap_or("?"),
            state.stage()
        );
    }

    if activation.completed {
        overlay::hide(&w.button);
        overlay::show(&w.message);
    }
    if let (Some(delay_ms), Some(tones)) = (activation.chime_after_ms, w.tones.clone()) {
        dom::spawn_after(delay_ms, move || tones.play_success());
    }
}
