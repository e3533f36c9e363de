use crate::Result;
use tera::Tera;

pub const REPRESENTABLE_TEMPLATE: &str = "swift/representable.swift.tera";
pub const TYPE_ALIASES_TEMPLATE: &str = "swift/type_aliases.swift.tera";

/// Register Swift templates from embedded strings
pub fn register_templates(tera: &mut Tera) -> Result<()> {
    crate::template!(tera, REPRESENTABLE_TEMPLATE, "templates/representable.swift.tera");
    crate::template!(tera, TYPE_ALIASES_TEMPLATE, "templates/type_aliases.swift.tera");
    Ok(())
}
