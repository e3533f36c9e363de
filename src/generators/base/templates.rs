use crate::{Error, Result};
use tera::{Context, Tera};

/// First line of every generated file; also used to recognise stale outputs
pub const GENERATED_HEADER: &str =
    "// This file is auto-generated by compose-bridge. Do not edit manually.";

/// Register common templates used by both languages
pub fn register_common_templates(tera: &mut Tera) -> Result<()> {
    crate::template!(tera, "common/header.tera", "templates/header.tera");
    Ok(())
}

/// Render a template, keeping the underlying cause in the message
pub fn render(tera: &Tera, template_name: &str, context: &Context) -> Result<String> {
    tera.render(template_name, context).map_err(|e| {
        let mut error_msg = format!("Failed to render template '{}': {}", template_name, e);
        if let Some(source) = std::error::Error::source(&e) {
            error_msg.push_str(&format!("\nSource: {}", source));
        }
        Error::CodeGeneration(error_msg)
    })
}

/// True when `content` starts with the generated header
pub fn is_generated(content: &str) -> bool {
    content.lines().next() == Some(GENERATED_HEADER)
}
