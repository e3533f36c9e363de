use crate::analysis::symbol_graph::SymbolGraph;
use crate::build::module_metadata::ModuleMetadataIndex;
use crate::models::{AnnotatedFunction, TypeReference};
use std::collections::{HashMap, HashSet};

/// Settles names that the parser could only place in the file's own package
/// because a star import might have supplied them.
///
/// A name declared in the file's package stays there. Otherwise it moves to
/// the one star-imported package that declares it, or failing that to the one
/// star-imported package owned by a known module. Names that remain open keep
/// the file's star imports on the function so the wrapper can repeat them.
pub struct WildcardImportResolver<'a> {
    metadata: &'a ModuleMetadataIndex,
    /// package -> simple names declared in the scanned sources
    declared: HashMap<&'a str, HashSet<&'a str>>,
}

impl<'a> WildcardImportResolver<'a> {
    pub fn new<G: SymbolGraph + ?Sized>(graph: &'a G, metadata: &'a ModuleMetadataIndex) -> Self {
        let mut declared: HashMap<&str, HashSet<&str>> = HashMap::new();
        for file in graph.files() {
            declared
                .entry(file.package_name.as_str())
                .or_default()
                .extend(file.declared_types.iter().map(String::as_str));
        }
        Self { metadata, declared }
    }

    pub fn resolve(&self, function: &mut AnnotatedFunction) {
        if function.wildcard_imports.is_empty() {
            return;
        }
        let wildcards = std::mem::take(&mut function.wildcard_imports);
        let mut unresolved = false;
        for roled in &mut function.parameters {
            self.settle(
                &mut roled.parameter.type_ref,
                &function.package_name,
                &wildcards,
                &mut unresolved,
            );
        }
        if unresolved {
            function.wildcard_imports = wildcards;
        }
    }

    fn settle(
        &self,
        type_ref: &mut TypeReference,
        file_package: &str,
        wildcards: &[String],
        unresolved: &mut bool,
    ) {
        for argument in &mut type_ref.arguments {
            self.settle(argument, file_package, wildcards, unresolved);
        }
        if type_ref.is_star() || type_ref.package != file_package {
            return;
        }

        let head = type_ref.name.split('.').next().unwrap_or(&type_ref.name);
        if self.declares(file_package, head) {
            return;
        }
        let declaring = single(wildcards.iter().filter(|p| self.declares(p, head)));
        let owned = || {
            single(
                wildcards
                    .iter()
                    .filter(|p| self.metadata.module_for_package(p).is_some()),
            )
        };
        match declaring.or_else(owned) {
            Some(package) => type_ref.package = package.clone(),
            None => *unresolved = true,
        }
    }

    fn declares(&self, package: &str, name: &str) -> bool {
        self.declared
            .get(package)
            .is_some_and(|names| names.contains(name))
    }
}

fn single<T>(mut items: impl Iterator<Item = T>) -> Option<T> {
    let first = items.next()?;
    items.next().is_none().then_some(first)
}
