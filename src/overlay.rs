use crate::dom;
use web_sys as web;

#[inline]
pub fn show(el: &web::HtmlElement) {
    dom::set_style(el, "display", "block");
}

#[inline]
pub fn hide(el: &web::HtmlElement) {
    dom::set_style(el, "display", "none");
}

#[inline]
pub fn is_hidden(el: &web::HtmlElement) -> bool {
    el.style()
        .get_property_value("display")
        .map(|s| s == "none")
        .unwrap_or(false)
}
