// DOM contract: the host page must provide these elements.
pub const IMAGE_DISPLAY_SELECTOR: &str = ".image-content";
pub const ACTIVATION_BUTTON_ID: &str = "main-button";
pub const COMPLETION_MESSAGE_SELECTOR: &str = ".final-message";
pub const EFFECTS_CONTAINER_SELECTOR: &str = ".inner-container";

// Particles are plain divs animated by the page's stylesheet
pub const PARTICLE_CLASS: &str = "particle";
pub const PARTICLE_DX_VAR: &str = "--tx";
pub const PARTICLE_DY_VAR: &str = "--ty";

// Slide fade is driven by a CSS transition on opacity
pub const OPACITY_HIDDEN: &str = "0";
pub const OPACITY_VISIBLE: &str = "1";
