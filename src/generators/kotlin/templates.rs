use crate::Result;
use tera::Tera;

pub const VIEW_CONTROLLER_TEMPLATE: &str = "kotlin/view_controller.kt.tera";

/// Register Kotlin templates from embedded strings
pub fn register_templates(tera: &mut Tera) -> Result<()> {
    crate::template!(tera, VIEW_CONTROLLER_TEMPLATE, "templates/view_controller.kt.tera");
    Ok(())
}
