use crate::constants::{PARTICLE_CLASS, PARTICLE_DX_VAR, PARTICLE_DY_VAR};
use crate::core::{plan_burst, BurstConfig, Particle};
use crate::dom;
use glam::DVec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Spawns bursts of short-lived particle divs inside the effects container.
#[derive(Clone)]
pub struct ParticleEmitter {
    document: web::Document,
    container: web::HtmlElement,
    config: BurstConfig,
}

impl ParticleEmitter {
    pub fn new(document: web::Document, container: web::HtmlElement, config: BurstConfig) -> Self {
        Self {
            document,
            container,
            config,
        }
    }

    /// Emit one burst at `origin` (container-relative px). Each particle is
    /// removed after the configured lifetime regardless of its animation.
    pub fn emit(&self, origin: DVec2) {
        let particles = plan_burst(origin, &self.config, &mut rand::thread_rng());
        let mut spawned = 0usize;
        for p in &particles {
            match self.spawn(p) {
                Ok(el) => {
                    spawned += 1;
                    dom::spawn_after(self.config.lifetime_ms, move || el.remove());
                }
                Err(e) => log::warn!("[particles] spawn failed: {:?}", e),
            }
        }
        log::debug!(
            "[particles] burst of {} at ({:.0},{:.0})",
            spawned,
            origin.x,
            origin.y
        );
    }

    fn spawn(&self, p: &Particle) -> Result<web::HtmlElement, wasm_bindgen::JsValue> {
        let el = self
            .document
            .create_element("div")?
            .dyn_into::<web::HtmlElement>()?;
        el.set_class_name(PARTICLE_CLASS);
        dom::set_style(&el, "left", &format!("{}px", p.origin.x));
        dom::set_style(&el, "top", &format!("{}px", p.origin.y));
        dom::set_style(&el, PARTICLE_DX_VAR, &format!("{}px", p.displacement.x));
        dom::set_style(&el, PARTICLE_DY_VAR, &format!("{}px", p.displacement.y));
        dom::set_style(&el, "background", p.color);
        self.container.append_child(&el)?;
        Ok(el)
    }
}
