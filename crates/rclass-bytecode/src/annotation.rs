//! Runtime-visible annotations (JVMS 4.7.16).

use crate::constant_pool::ConstantPool;
use crate::error::ClassFormatError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Annotation {
    /// Field descriptor of the annotation type, e.g. `Lcom/example/Tag;`.
    pub descriptor: String,
    pub elements: Vec<(String, ElementValue)>,
}

/// The element value kinds this crate writes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ElementValue {
    String(String),
    Int(i32),
}

impl ElementValue {
    pub fn tag(&self) -> char {
        match self {
            ElementValue::String(_) => 's',
            ElementValue::Int(_) => 'I',
        }
    }
}

impl Annotation {
    pub fn new(descriptor: impl Into<String>) -> Self {
        Self {
            descriptor: descriptor.into(),
            elements: Vec::new(),
        }
    }

    pub fn with(mut self, name: impl Into<String>, value: ElementValue) -> Self {
        self.elements.push((name.into(), value));
        self
    }

    pub(crate) fn write_to(
        &self,
        pool: &mut ConstantPool,
        out: &mut Vec<u8>,
    ) -> Result<(), ClassFormatError> {
        out.extend_from_slice(&pool.utf8(&self.descriptor)?.to_be_bytes());
        out.extend_from_slice(&(self.elements.len() as u16).to_be_bytes());
        for (name, value) in &self.elements {
            out.extend_from_slice(&pool.utf8(name)?.to_be_bytes());
            out.push(value.tag() as u8);
            let index = match value {
                ElementValue::String(s) => pool.utf8(s)?,
                ElementValue::Int(v) => pool.integer(*v)?,
            };
            out.extend_from_slice(&index.to_be_bytes());
        }
        Ok(())
    }
}

/// Body of a `RuntimeVisibleAnnotations` attribute.
pub(crate) fn write_annotations(
    annotations: &[Annotation],
    pool: &mut ConstantPool,
) -> Result<Vec<u8>, ClassFormatError> {
    let mut out = Vec::new();
    out.extend_from_slice(&(annotations.len() as u16).to_be_bytes());
    for annotation in annotations {
        annotation.write_to(pool, &mut out)?;
    }
    Ok(out)
}
