//! Discovery driver: finds entry-marked functions and turns each into its artifacts.

use crate::analysis::{classify, FrameworkResolver, SymbolGraph, WildcardImportResolver};
use crate::build::module_metadata::ModuleMetadataIndex;
use crate::generators::CodeEmitter;
use crate::interface::output::Logger;
use crate::models::{AnnotatedFunction, GeneratedArtifact, TypeAlias, ENTRY_MARKER};
use crate::Result;
use indexmap::IndexSet;

/// Alias lines collected over a whole pass, one per (simple name, package)
#[derive(Debug, Default)]
pub struct TypeAliasRegistry {
    aliases: IndexSet<TypeAlias>,
}

impl TypeAliasRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_all<I: IntoIterator<Item = TypeAlias>>(&mut self, aliases: I) {
        self.aliases.extend(aliases);
    }

    pub fn aliases(&self) -> Vec<TypeAlias> {
        self.aliases.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

/// Result of rendering one pass
#[derive(Debug, Default)]
pub struct PassOutput {
    /// Qualified names of the processed functions, in processing order
    pub functions: Vec<String>,
    pub artifacts: Vec<GeneratedArtifact>,
}

pub struct BridgeProcessor<'a> {
    emitter: CodeEmitter,
    metadata: &'a ModuleMetadataIndex,
    logger: &'a Logger,
}

impl<'a> BridgeProcessor<'a> {
    pub fn new(metadata: &'a ModuleMetadataIndex, logger: &'a Logger) -> Result<Self> {
        Ok(Self {
            emitter: CodeEmitter::new()?,
            metadata,
            logger,
        })
    }

    /// Entry-marked functions of the graph. Each containing file is visited
    /// once and all of its marked functions are taken in declaration order.
    /// Star-imported names are settled against the whole graph.
    pub fn discover<G: SymbolGraph + ?Sized>(&self, graph: &G) -> Vec<AnnotatedFunction> {
        let imports = WildcardImportResolver::new(graph, self.metadata);
        let files: IndexSet<&str> = graph
            .symbols_with_annotation(ENTRY_MARKER)
            .iter()
            .map(|symbol| symbol.file.path.as_str())
            .collect();

        let mut functions = Vec::new();
        for path in files {
            let Some(file) = graph.file(path) else {
                continue;
            };
            self.logger
                .verbose(&format!("Processing annotated functions in {}", file.path));
            for declaration in &file.functions {
                if let Some(mut function) = AnnotatedFunction::from_declaration(file, declaration) {
                    imports.resolve(&mut function);
                    functions.push(function);
                }
            }
        }
        functions
    }

    /// Render every artifact of the pass. Nothing is written; the first
    /// failing function aborts the pass.
    pub fn process<G: SymbolGraph + ?Sized>(&self, graph: &G) -> Result<PassOutput> {
        let resolver = FrameworkResolver::new(self.metadata, self.logger);
        let mut registry = TypeAliasRegistry::new();
        let mut output = PassOutput::default();

        for function in self.discover(graph) {
            self.logger.debug(&format!(
                "Generating bridge for {} ({}:{})",
                function.qualified_name(),
                function.file_path,
                function.line
            ));

            let classified = classify(&function)?;
            let origins = resolver.resolve(&function)?;
            registry.register_all(origins.aliases.iter().cloned());

            output
                .artifacts
                .extend(self.emitter.emit(&function, &classified, &origins)?);
            output.functions.push(function.qualified_name());
        }

        if let Some(alias_file) = self.emitter.emit_type_aliases(&registry.aliases())? {
            self.logger
                .verbose(&format!("Collected {} type alias(es)", registry.len()));
            output.artifacts.push(alias_file);
        }

        if output.functions.is_empty() {
            self.logger.info("No @ComposeUIViewController functions found");
        }
        Ok(output)
    }
}
