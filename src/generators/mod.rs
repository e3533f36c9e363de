pub mod base;
pub mod kotlin;
pub mod swift;

use crate::analysis::ResolvedOrigins;
use crate::models::{
    AnnotatedFunction, ArtifactLanguage, ClassifiedParameters, GeneratedArtifact, TypeAlias,
};
use crate::Result;
use base::template_context::{RepresentableContext, TypeAliasFileContext, ViewControllerContext};
use base::templates::{register_common_templates, render};
use tera::{Context, Tera};

pub use base::type_visitor::{map_type, map_type_name};

/// Base name of the pass-wide Swift alias file
pub const TYPE_ALIAS_FILE_NAME: &str = "ExternalTypeAliases";

/// Macro to reduce boilerplate for template registration
#[macro_export]
macro_rules! template {
    ($tera:expr, $name:expr, $path:expr) => {
        $tera
            .add_raw_template($name, include_str!($path))
            .map_err(|e| $crate::Error::CodeGeneration(format!("Failed to register {}: {}", $name, e)))?;
    };
}

/// Renders the Kotlin wrapper and Swift representable of each function,
/// and the shared alias file of a pass
pub struct CodeEmitter {
    tera: Tera,
}

impl CodeEmitter {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        register_common_templates(&mut tera)?;
        kotlin::templates::register_templates(&mut tera)?;
        swift::templates::register_templates(&mut tera)?;
        Ok(Self { tera })
    }

    /// Both artifacts of one function, Kotlin first
    pub fn emit(
        &self,
        function: &AnnotatedFunction,
        classified: &ClassifiedParameters,
        origins: &ResolvedOrigins,
    ) -> Result<Vec<GeneratedArtifact>> {
        Ok(vec![
            self.render_view_controller(function, classified)?,
            self.render_representable(function, classified, origins)?,
        ])
    }

    pub fn render_view_controller(
        &self,
        function: &AnnotatedFunction,
        classified: &ClassifiedParameters,
    ) -> Result<GeneratedArtifact> {
        let context = ViewControllerContext::new(function, classified);
        let content = render(
            &self.tera,
            kotlin::templates::VIEW_CONTROLLER_TEMPLATE,
            &Context::from_serialize(&context)?,
        )?;
        Ok(GeneratedArtifact {
            file_name: format!(
                "{}.{}",
                function.view_controller_name(),
                ArtifactLanguage::Kotlin.extension()
            ),
            language: ArtifactLanguage::Kotlin,
            directory: function.package_name.replace('.', "/"),
            content,
        })
    }

    pub fn render_representable(
        &self,
        function: &AnnotatedFunction,
        classified: &ClassifiedParameters,
        origins: &ResolvedOrigins,
    ) -> Result<GeneratedArtifact> {
        let context = RepresentableContext::new(function, classified, origins);
        let content = render(
            &self.tera,
            swift::templates::REPRESENTABLE_TEMPLATE,
            &Context::from_serialize(&context)?,
        )?;
        Ok(GeneratedArtifact {
            file_name: format!(
                "{}.{}",
                function.representable_name(),
                ArtifactLanguage::Swift.extension()
            ),
            language: ArtifactLanguage::Swift,
            directory: String::new(),
            content,
        })
    }

    /// The alias file, or `None` when no alias was collected
    pub fn emit_type_aliases(&self, aliases: &[TypeAlias]) -> Result<Option<GeneratedArtifact>> {
        if aliases.is_empty() {
            return Ok(None);
        }
        let context = TypeAliasFileContext::new(aliases);
        let content = render(
            &self.tera,
            swift::templates::TYPE_ALIASES_TEMPLATE,
            &Context::from_serialize(&context)?,
        )?;
        Ok(Some(GeneratedArtifact {
            file_name: format!(
                "{}.{}",
                TYPE_ALIAS_FILE_NAME,
                ArtifactLanguage::Swift.extension()
            ),
            language: ArtifactLanguage::Swift,
            directory: String::new(),
            content,
        }))
    }
}
