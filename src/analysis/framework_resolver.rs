use crate::build::module_metadata::{ModuleMetadata, ModuleMetadataIndex};
use crate::interface::output::Logger;
use crate::models::{
    AnnotatedFunction, FrameworkOrigin, MappingProfile, ParameterRole, TypeAlias,
};
use crate::{Error, Result};
use indexmap::{IndexMap, IndexSet};

/// Everything the emitter needs to know about where a function's types come from
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedOrigins {
    /// Frameworks to import, the function's own first, deduplicated in encounter order
    pub frameworks: Vec<String>,
    /// Referenced packages that belong to a known module
    pub origins: Vec<FrameworkOrigin>,
    /// Type-name profile per parameter name
    pub profiles: IndexMap<String, MappingProfile>,
    /// Externally owned types that need a Swift alias
    pub aliases: Vec<TypeAlias>,
}

impl ResolvedOrigins {
    pub fn profile_for(&self, parameter_name: &str) -> MappingProfile {
        self.profiles
            .get(parameter_name)
            .copied()
            .unwrap_or_default()
    }
}

/// Resolves which framework every referenced type is imported from.
///
/// Origins are computed per function; only the metadata snapshot is shared.
pub struct FrameworkResolver<'a> {
    metadata: &'a ModuleMetadataIndex,
    logger: &'a Logger,
}

impl<'a> FrameworkResolver<'a> {
    pub fn new(metadata: &'a ModuleMetadataIndex, logger: &'a Logger) -> Self {
        Self { metadata, logger }
    }

    pub fn resolve(&self, function: &AnnotatedFunction) -> Result<ResolvedOrigins> {
        let own_module = self.metadata.module_for_package(&function.package_name);
        let own_framework = own_module
            .map(|m| m.framework_name().to_string())
            .filter(|name| !name.is_empty())
            .or_else(|| {
                let name = function.framework_base_name.trim();
                (!name.is_empty()).then(|| name.to_string())
            });

        let mut referenced: IndexSet<String> = IndexSet::new();
        let mut origins: IndexMap<String, FrameworkOrigin> = IndexMap::new();
        let mut aliases: IndexSet<TypeAlias> = IndexSet::new();
        let mut profiles = IndexMap::new();

        for roled in &function.parameters {
            if roled.role == ParameterRole::UiBuilder {
                continue;
            }
            let parameter = &roled.parameter;

            // The first user type a known module owns decides, wherever it is nested
            let profile_module = parameter
                .type_ref
                .walk()
                .into_iter()
                .filter(|t| !t.is_builtin())
                .find_map(|t| self.metadata.module_for_package(&t.package))
                .or(own_module);
            profiles.insert(parameter.name.clone(), profile_of(profile_module));

            for type_ref in parameter.type_ref.walk() {
                if type_ref.is_builtin() {
                    continue;
                }
                let Some(module) = self.metadata.module_for_package(&type_ref.package) else {
                    continue;
                };

                let framework = module.framework_name();
                if framework.is_empty() {
                    self.logger.warning(&format!(
                        "Module {} has an empty framework base name",
                        module.name
                    ));
                    continue;
                }
                referenced.insert(framework.to_string());
                origins
                    .entry(type_ref.package.clone())
                    .or_insert_with(|| FrameworkOrigin {
                        package_name: type_ref.package.clone(),
                        framework_base_name: framework.to_string(),
                    });

                let external = own_module.map_or(true, |own| own.name != module.name);
                if external && module.needs_type_aliases() {
                    aliases.insert(TypeAlias {
                        simple_name: outermost_name(&type_ref.name).to_string(),
                        package_name: type_ref.package.clone(),
                        framework_base_name: framework.to_string(),
                    });
                }
            }
        }

        let mut frameworks: IndexSet<String> = IndexSet::new();
        match &own_framework {
            Some(name) => {
                frameworks.insert(name.clone());
            }
            None if referenced.is_empty() => {
                return Err(Error::EmptyFrameworkBaseName {
                    function: function.qualified_name(),
                });
            }
            None => {
                self.logger.debug(&format!(
                    "{} has no framework base name of its own, using parameter frameworks",
                    function.qualified_name()
                ));
            }
        }
        frameworks.extend(referenced);

        self.logger.verbose(&format!(
            "{} imports {}",
            function.qualified_name(),
            frameworks.iter().cloned().collect::<Vec<_>>().join(", ")
        ));

        Ok(ResolvedOrigins {
            frameworks: frameworks.into_iter().collect(),
            origins: origins.into_values().collect(),
            profiles,
            aliases: aliases.into_iter().collect(),
        })
    }
}

fn profile_of(module: Option<&ModuleMetadata>) -> MappingProfile {
    match module {
        Some(m) if m.swift_export_enabled => MappingProfile::NativeExport,
        _ => MappingProfile::BridgedObject,
    }
}

/// `Outer.Inner` is aliased through `Outer`
fn outermost_name(name: &str) -> &str {
    name.split('.').next().unwrap_or(name)
}
