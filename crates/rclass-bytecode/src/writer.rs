//! Class file writer.
//!
//! Members and attributes are collected symbolically; the constant pool is
//! built in one pass by [`ClassWriter::to_bytes`] and written ahead of the body.

use crate::annotation::{Annotation, write_annotations};
use crate::code::Code;
use crate::constant_pool::ConstantPool;
use crate::constants::{MAGIC, MAJOR_VERSION, MAX_U16_COUNT, MINOR_VERSION, access, attr};
use crate::descriptor;
use crate::error::ClassFormatError;

/// Entry of an `InnerClasses` attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InnerClass {
    pub inner: String,
    pub outer: Option<String>,
    pub simple_name: Option<String>,
    pub access: u16,
}

impl InnerClass {
    /// A named member class of `outer`.
    pub fn member(
        inner: impl Into<String>,
        outer: impl Into<String>,
        simple_name: impl Into<String>,
        access: u16,
    ) -> Self {
        Self {
            inner: inner.into(),
            outer: Some(outer.into()),
            simple_name: Some(simple_name.into()),
            access,
        }
    }
}

/// Value of a `ConstantValue` attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConstantValue {
    Int(i32),
    String(String),
}

#[derive(Clone, Debug)]
pub struct FieldWriter {
    access: u16,
    name: String,
    descriptor: String,
    constant_value: Option<ConstantValue>,
    annotations: Vec<Annotation>,
}

impl FieldWriter {
    pub fn constant_value(&mut self, value: ConstantValue) -> &mut Self {
        self.constant_value = Some(value);
        self
    }

    pub fn annotation(&mut self, annotation: Annotation) -> &mut Self {
        self.annotations.push(annotation);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn descriptor(&self) -> &str {
        &self.descriptor
    }

    pub fn access(&self) -> u16 {
        self.access
    }

    fn write_to(&self, pool: &mut ConstantPool, out: &mut Vec<u8>) -> Result<(), ClassFormatError> {
        out.extend_from_slice(&self.access.to_be_bytes());
        out.extend_from_slice(&pool.utf8(&self.name)?.to_be_bytes());
        out.extend_from_slice(&pool.utf8(&self.descriptor)?.to_be_bytes());

        let mut attributes = Vec::new();
        if let Some(value) = &self.constant_value {
            let index = match value {
                ConstantValue::Int(v) => pool.integer(*v)?,
                ConstantValue::String(s) => pool.string(s)?,
            };
            attributes.push((attr::CONSTANT_VALUE, index.to_be_bytes().to_vec()));
        }
        if !self.annotations.is_empty() {
            let body = write_annotations(&self.annotations, pool)?;
            attributes.push((attr::RUNTIME_VISIBLE_ANNOTATIONS, body));
        }
        write_attributes(&attributes, pool, out)
    }
}

#[derive(Clone, Debug)]
pub struct MethodWriter {
    access: u16,
    name: String,
    descriptor: String,
    code: Code,
}

impl MethodWriter {
    pub fn code(&mut self) -> &mut Code {
        &mut self.code
    }

    pub fn body(&self) -> &Code {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn descriptor(&self) -> &str {
        &self.descriptor
    }

    pub fn access(&self) -> u16 {
        self.access
    }

    fn write_to(&self, pool: &mut ConstantPool, out: &mut Vec<u8>) -> Result<(), ClassFormatError> {
        out.extend_from_slice(&self.access.to_be_bytes());
        out.extend_from_slice(&pool.utf8(&self.name)?.to_be_bytes());
        out.extend_from_slice(&pool.utf8(&self.descriptor)?.to_be_bytes());

        let (mut arg_slots, _) = descriptor::method_slots(&self.descriptor)?;
        if self.access & access::STATIC == 0 {
            arg_slots += 1;
        }

        let encoded = self.code.encode(pool, &self.name, arg_slots)?;
        let mut body = Vec::with_capacity(encoded.bytes.len() + 12);
        body.extend_from_slice(&encoded.max_stack.to_be_bytes());
        body.extend_from_slice(&encoded.max_locals.to_be_bytes());
        body.extend_from_slice(&(encoded.bytes.len() as u32).to_be_bytes());
        body.extend_from_slice(&encoded.bytes);
        // exception_table_length, attributes_count
        body.extend_from_slice(&0u16.to_be_bytes());
        body.extend_from_slice(&0u16.to_be_bytes());

        write_attributes(&[(attr::CODE, body)], pool, out)
    }
}

/// A class under construction.
#[derive(Clone, Debug)]
pub struct ClassWriter {
    access: u16,
    name: String,
    super_name: String,
    source_file: Option<String>,
    inner_classes: Vec<InnerClass>,
    annotations: Vec<Annotation>,
    fields: Vec<FieldWriter>,
    methods: Vec<MethodWriter>,
}

impl ClassWriter {
    /// `name` and `super_name` are internal names (`a/b/C`).
    pub fn new(access: u16, name: impl Into<String>, super_name: impl Into<String>) -> Self {
        Self {
            access,
            name: name.into(),
            super_name: super_name.into(),
            source_file: None,
            inner_classes: Vec::new(),
            annotations: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source_file(&mut self, name: impl Into<String>) -> &mut Self {
        self.source_file = Some(name.into());
        self
    }

    pub fn annotation(&mut self, annotation: Annotation) -> &mut Self {
        self.annotations.push(annotation);
        self
    }

    pub fn inner_class(&mut self, entry: InnerClass) -> &mut Self {
        self.inner_classes.push(entry);
        self
    }

    pub fn field(
        &mut self,
        access: u16,
        name: impl Into<String>,
        descriptor: impl Into<String>,
    ) -> &mut FieldWriter {
        self.fields.push(FieldWriter {
            access,
            name: name.into(),
            descriptor: descriptor.into(),
            constant_value: None,
            annotations: Vec::new(),
        });
        let last = self.fields.len() - 1;
        &mut self.fields[last]
    }

    pub fn method(
        &mut self,
        access: u16,
        name: impl Into<String>,
        descriptor: impl Into<String>,
    ) -> &mut MethodWriter {
        self.methods.push(MethodWriter {
            access,
            name: name.into(),
            descriptor: descriptor.into(),
            code: Code::new(),
        });
        let last = self.methods.len() - 1;
        &mut self.methods[last]
    }

    pub fn fields(&self) -> &[FieldWriter] {
        &self.fields
    }

    pub fn methods(&self) -> &[MethodWriter] {
        &self.methods
    }

    /// Serialize the class.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ClassFormatError> {
        self.check_count("fields", self.fields.len())?;
        self.check_count("methods", self.methods.len())?;
        self.check_count("inner classes", self.inner_classes.len())?;

        let mut pool = ConstantPool::new();
        let mut body = Vec::new();

        body.extend_from_slice(&self.access.to_be_bytes());
        body.extend_from_slice(&pool.class(&self.name)?.to_be_bytes());
        body.extend_from_slice(&pool.class(&self.super_name)?.to_be_bytes());
        // interfaces_count
        body.extend_from_slice(&0u16.to_be_bytes());

        body.extend_from_slice(&(self.fields.len() as u16).to_be_bytes());
        for field in &self.fields {
            field.write_to(&mut pool, &mut body)?;
        }

        body.extend_from_slice(&(self.methods.len() as u16).to_be_bytes());
        for method in &self.methods {
            method.write_to(&mut pool, &mut body)?;
        }

        let attributes = self.class_attributes(&mut pool)?;
        write_attributes(&attributes, &mut pool, &mut body)?;

        let mut out = Vec::with_capacity(body.len() + 10 + pool.count() * 8);
        out.extend_from_slice(&MAGIC.to_be_bytes());
        out.extend_from_slice(&MINOR_VERSION.to_be_bytes());
        out.extend_from_slice(&MAJOR_VERSION.to_be_bytes());
        pool.write_to(&mut out);
        out.extend_from_slice(&body);
        Ok(out)
    }

    fn class_attributes(
        &self,
        pool: &mut ConstantPool,
    ) -> Result<Vec<(&'static str, Vec<u8>)>, ClassFormatError> {
        let mut attributes = Vec::new();

        if let Some(source_file) = &self.source_file {
            let index = pool.utf8(source_file)?;
            attributes.push((attr::SOURCE_FILE, index.to_be_bytes().to_vec()));
        }

        if !self.inner_classes.is_empty() {
            let mut body = Vec::with_capacity(2 + self.inner_classes.len() * 8);
            body.extend_from_slice(&(self.inner_classes.len() as u16).to_be_bytes());
            for entry in &self.inner_classes {
                let inner = pool.class(&entry.inner)?;
                let outer = match &entry.outer {
                    Some(outer) => pool.class(outer)?,
                    None => 0,
                };
                let simple_name = match &entry.simple_name {
                    Some(name) => pool.utf8(name)?,
                    None => 0,
                };
                body.extend_from_slice(&inner.to_be_bytes());
                body.extend_from_slice(&outer.to_be_bytes());
                body.extend_from_slice(&simple_name.to_be_bytes());
                body.extend_from_slice(&entry.access.to_be_bytes());
            }
            attributes.push((attr::INNER_CLASSES, body));
        }

        if !self.annotations.is_empty() {
            let body = write_annotations(&self.annotations, pool)?;
            attributes.push((attr::RUNTIME_VISIBLE_ANNOTATIONS, body));
        }

        Ok(attributes)
    }

    fn check_count(&self, kind: &'static str, count: usize) -> Result<(), ClassFormatError> {
        if count > MAX_U16_COUNT {
            return Err(ClassFormatError::TooMany {
                kind,
                class: self.name.clone(),
                count,
            });
        }
        Ok(())
    }
}

fn write_attributes(
    attributes: &[(&'static str, Vec<u8>)],
    pool: &mut ConstantPool,
    out: &mut Vec<u8>,
) -> Result<(), ClassFormatError> {
    out.extend_from_slice(&(attributes.len() as u16).to_be_bytes());
    for (name, body) in attributes {
        out.extend_from_slice(&pool.utf8(name)?.to_be_bytes());
        out.extend_from_slice(&(body.len() as u32).to_be_bytes());
        out.extend_from_slice(body);
    }
    Ok(())
}
