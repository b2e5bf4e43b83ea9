use std::path::{Path, PathBuf};

use rclass_bytecode::InnerClass;
use rclass_core::{inner_class_name, outer_class_name, package_dir};

use crate::config::Config;
use crate::fields::{FieldInitializers, provenance_annotation};

use super::GenerateError;
use super::files::{create_dirs, write_new};
use super::inner_class::emit_inner_class;
use super::satellite::write_shared_id_class;
use super::shell::{INNER_ACCESS, class_shell};

/// Symbols of one package to generate.
#[derive(Clone, Debug)]
pub struct GenerationRequest {
    pub package: String,
    pub fields: FieldInitializers,
}

impl GenerationRequest {
    /// `package` is dotted (`com.example`); empty means the default package.
    pub fn new(package: impl Into<String>, fields: FieldInitializers) -> Self {
        Self {
            package: package.into(),
            fields,
        }
    }
}

/// Writes `R` classes for any number of packages under one output root.
#[derive(Debug)]
pub struct ClassBuilder {
    out_dir: PathBuf,
    config: Config,
    shared_id_written: bool,
}

impl ClassBuilder {
    pub fn new(out_dir: impl Into<PathBuf>, config: Config) -> Result<Self, GenerateError> {
        let has_label = config.label_value().is_some_and(|l| !l.is_empty());
        if config.is_annotate_transitive() && !has_label {
            return Err(GenerateError::MissingProvenanceLabel);
        }
        Ok(Self {
            out_dir: out_dir.into(),
            config,
            shared_id_written: false,
        })
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Whether the shared id class has been written by this builder.
    pub fn shared_id_written(&self) -> bool {
        self.shared_id_written
    }

    /// Write `R.class` and `R$<type>.class` for every non-empty type of the
    /// request, then the shared id class if configured and not yet written.
    /// Returns the number of fields written.
    ///
    /// The package directory is created even when there is nothing to write.
    pub fn generate(&mut self, request: &GenerationRequest) -> Result<usize, GenerateError> {
        self.write_classes(&request.package, &request.fields)
    }

    /// Like [`ClassBuilder::generate`], restricted to the symbols also
    /// present in `keep`.
    pub fn generate_filtered(
        &mut self,
        request: &GenerationRequest,
        keep: &FieldInitializers,
    ) -> Result<usize, GenerateError> {
        let fields = request.fields.filter(keep);
        self.write_classes(&request.package, &fields)
    }

    fn write_classes(
        &mut self,
        package: &str,
        fields: &FieldInitializers,
    ) -> Result<usize, GenerateError> {
        let dir = package_dir(&self.out_dir, package);
        create_dirs(&dir)?;

        if fields.is_empty() {
            tracing::debug!(package, dir = %dir.display(), "no symbols, nothing to write");
            return Ok(0);
        }

        let outer = outer_class_name(package);
        let mut class = class_shell(&outer);
        if self.config.is_annotate_transitive()
            && let Some(label) = self.config.label_value()
        {
            class.annotation(provenance_annotation(label));
        }
        for (ty, _) in fields.iter() {
            class.inner_class(InnerClass::member(
                inner_class_name(&outer, ty),
                &outer,
                ty.name(),
                INNER_ACCESS,
            ));
        }
        write_new(&dir.join("R.class"), &class.to_bytes()?)?;

        for (ty, type_fields) in fields.iter() {
            let inner = emit_inner_class(&outer, ty, type_fields, &dir, &self.config)?;
            let path = dir.join(format!("R${}.class", ty.name()));
            write_new(&path, &inner.to_bytes()?)?;
        }

        self.write_shared_id_if_needed()?;
        Ok(fields.len())
    }

    fn write_shared_id_if_needed(&mut self) -> Result<(), GenerateError> {
        let Some(descriptor) = self.config.shared_id_descriptor() else {
            return Ok(());
        };
        if self.shared_id_written {
            return Ok(());
        }
        write_shared_id_class(&self.out_dir, descriptor)?;
        self.shared_id_written = true;
        Ok(())
    }
}
