use handlebars::{Handlebars, TemplateError};
use std::sync::Arc;

pub type Hbs = Arc<Handlebars<'static>>;

pub fn build_handlebars() -> Result<Hbs, TemplateError> {
    let mut hb = Handlebars::new();
    hb.set_strict_mode(true);

    // Layout + pages
    hb.register_template_string(
        "layouts/base",
        include_str!("../../templates/layouts/base.hbs"),
    )?;
    hb.register_template_string(
        "pages/store",
        include_str!("../../templates/pages/store.hbs"),
    )?;

    Ok(Arc::new(hb))
}
