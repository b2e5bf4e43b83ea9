//! Class file reader for the subset this crate writes.
//!
//! Unknown attributes are kept as raw bytes; unknown opcodes inside `Code`
//! and constant kinds outside JVMS 4.4's Java 7 set are errors.

use crate::annotation::{Annotation, ElementValue};
use crate::constant_pool::{Constant, ConstantPool, decode_modified_utf8};
use crate::constants::{MAGIC, attr, tag};
use crate::error::ClassFormatError;
use crate::insn::Insn;
use crate::writer::{ConstantValue, InnerClass};

#[derive(Clone, Debug)]
pub struct ClassFile {
    pub minor_version: u16,
    pub major_version: u16,
    pub pool: ConstantPool,
    pub access: u16,
    pub this_class: String,
    pub super_class: Option<String>,
    pub interfaces: Vec<String>,
    pub fields: Vec<FieldInfo>,
    pub methods: Vec<MethodInfo>,
    pub attributes: Vec<Attribute>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldInfo {
    pub access: u16,
    pub name: String,
    pub descriptor: String,
    pub attributes: Vec<Attribute>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodInfo {
    pub access: u16,
    pub name: String,
    pub descriptor: String,
    pub attributes: Vec<Attribute>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Attribute {
    SourceFile(String),
    InnerClasses(Vec<InnerClass>),
    RuntimeVisibleAnnotations(Vec<Annotation>),
    ConstantValue(ConstantValue),
    Code(CodeInfo),
    Unknown { name: String, data: Vec<u8> },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeInfo {
    pub max_stack: u16,
    pub max_locals: u16,
    pub bytes: Vec<u8>,
    pub instructions: Vec<Instruction>,
}

/// A decoded instruction and where it sits in the method body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instruction {
    pub offset: usize,
    pub opcode: u8,
    pub insn: Insn,
}

impl ClassFile {
    pub fn parse(bytes: &[u8]) -> Result<Self, ClassFormatError> {
        let mut r = Reader { bytes, pos: 0 };

        let magic = r.u32()?;
        if magic != MAGIC {
            return Err(ClassFormatError::InvalidMagic(magic));
        }
        let minor_version = r.u16()?;
        let major_version = r.u16()?;
        let pool = read_pool(&mut r)?;

        let access = r.u16()?;
        let this_class = pool.class_at(r.u16()?)?.to_string();
        let super_class = match r.u16()? {
            0 => None,
            index => Some(pool.class_at(index)?.to_string()),
        };

        let interfaces_count = r.u16()?;
        let mut interfaces = Vec::with_capacity(interfaces_count as usize);
        for _ in 0..interfaces_count {
            interfaces.push(pool.class_at(r.u16()?)?.to_string());
        }

        let fields_count = r.u16()?;
        let mut fields = Vec::with_capacity(fields_count as usize);
        for _ in 0..fields_count {
            let (access, name, descriptor, attributes) = read_member(&mut r, &pool)?;
            fields.push(FieldInfo {
                access,
                name,
                descriptor,
                attributes,
            });
        }

        let methods_count = r.u16()?;
        let mut methods = Vec::with_capacity(methods_count as usize);
        for _ in 0..methods_count {
            let (access, name, descriptor, attributes) = read_member(&mut r, &pool)?;
            methods.push(MethodInfo {
                access,
                name,
                descriptor,
                attributes,
            });
        }

        let attributes = read_attributes(&mut r, &pool)?;

        let trailing = bytes.len() - r.pos;
        if trailing != 0 {
            return Err(ClassFormatError::TrailingBytes(trailing));
        }

        Ok(Self {
            minor_version,
            major_version,
            pool,
            access,
            this_class,
            super_class,
            interfaces,
            fields,
            methods,
            attributes,
        })
    }

    pub fn field(&self, name: &str) -> Option<&FieldInfo> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn method(&self, name: &str) -> Option<&MethodInfo> {
        self.methods.iter().find(|m| m.name == name)
    }

    pub fn source_file(&self) -> Option<&str> {
        self.attributes.iter().find_map(|a| match a {
            Attribute::SourceFile(name) => Some(name.as_str()),
            _ => None,
        })
    }

    pub fn inner_classes(&self) -> &[InnerClass] {
        self.attributes
            .iter()
            .find_map(|a| match a {
                Attribute::InnerClasses(entries) => Some(entries.as_slice()),
                _ => None,
            })
            .unwrap_or(&[])
    }

    pub fn annotations(&self) -> &[Annotation] {
        annotations_in(&self.attributes)
    }
}

impl FieldInfo {
    pub fn constant_value(&self) -> Option<&ConstantValue> {
        self.attributes.iter().find_map(|a| match a {
            Attribute::ConstantValue(value) => Some(value),
            _ => None,
        })
    }

    pub fn annotations(&self) -> &[Annotation] {
        annotations_in(&self.attributes)
    }
}

impl MethodInfo {
    pub fn code(&self) -> Option<&CodeInfo> {
        self.attributes.iter().find_map(|a| match a {
            Attribute::Code(code) => Some(code),
            _ => None,
        })
    }
}

impl CodeInfo {
    pub fn insns(&self) -> impl Iterator<Item = &Insn> {
        self.instructions.iter().map(|i| &i.insn)
    }
}

fn annotations_in(attributes: &[Attribute]) -> &[Annotation] {
    attributes
        .iter()
        .find_map(|a| match a {
            Attribute::RuntimeVisibleAnnotations(list) => Some(list.as_slice()),
            _ => None,
        })
        .unwrap_or(&[])
}

struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn take(&mut self, len: usize) -> Result<&'a [u8], ClassFormatError> {
        let end = self
            .pos
            .checked_add(len)
            .filter(|&end| end <= self.bytes.len())
            .ok_or(ClassFormatError::UnexpectedEof(self.bytes.len()))?;
        let slice = &self.bytes[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    fn u8(&mut self) -> Result<u8, ClassFormatError> {
        Ok(self.take(1)?[0])
    }

    fn u16(&mut self) -> Result<u16, ClassFormatError> {
        let b = self.take(2)?;
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }

    fn u32(&mut self) -> Result<u32, ClassFormatError> {
        let b = self.take(4)?;
        Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    fn u64(&mut self) -> Result<u64, ClassFormatError> {
        let hi = self.u32()? as u64;
        let lo = self.u32()? as u64;
        Ok((hi << 32) | lo)
    }

    fn is_at_end(&self) -> bool {
        self.pos == self.bytes.len()
    }
}

fn read_pool(r: &mut Reader<'_>) -> Result<ConstantPool, ClassFormatError> {
    let count = r.u16()?;
    let mut pool = ConstantPool::new();
    while pool.count() < count as usize {
        let index = pool.count() as u16;
        let constant = match r.u8()? {
            tag::UTF8 => {
                let len = r.u16()? as usize;
                let raw = r.take(len)?;
                let s = decode_modified_utf8(raw).ok_or(ClassFormatError::InvalidUtf8(index))?;
                Constant::Utf8(s)
            }
            tag::INTEGER => Constant::Integer(r.u32()? as i32),
            tag::FLOAT => Constant::Float(r.u32()?),
            tag::LONG => Constant::Long(r.u64()? as i64),
            tag::DOUBLE => Constant::Double(r.u64()?),
            tag::CLASS => Constant::Class(r.u16()?),
            tag::STRING => Constant::String(r.u16()?),
            tag::FIELDREF => Constant::Fieldref {
                class: r.u16()?,
                name_and_type: r.u16()?,
            },
            tag::METHODREF => Constant::Methodref {
                class: r.u16()?,
                name_and_type: r.u16()?,
            },
            tag::INTERFACE_METHODREF => Constant::InterfaceMethodref {
                class: r.u16()?,
                name_and_type: r.u16()?,
            },
            tag::NAME_AND_TYPE => Constant::NameAndType {
                name: r.u16()?,
                descriptor: r.u16()?,
            },
            other => return Err(ClassFormatError::UnsupportedConstant { tag: other, index }),
        };
        pool.push_raw(constant);
    }
    Ok(pool)
}

type Member = (u16, String, String, Vec<Attribute>);

fn read_member(r: &mut Reader<'_>, pool: &ConstantPool) -> Result<Member, ClassFormatError> {
    let access = r.u16()?;
    let name = pool.utf8_at(r.u16()?)?.to_string();
    let descriptor = pool.utf8_at(r.u16()?)?.to_string();
    let attributes = read_attributes(r, pool)?;
    Ok((access, name, descriptor, attributes))
}

fn read_attributes(
    r: &mut Reader<'_>,
    pool: &ConstantPool,
) -> Result<Vec<Attribute>, ClassFormatError> {
    let count = r.u16()?;
    let mut attributes = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let name = pool.utf8_at(r.u16()?)?;
        let len = r.u32()? as usize;
        let data = r.take(len)?;
        attributes.push(read_attribute(name, data, pool)?);
    }
    Ok(attributes)
}

fn read_attribute(
    name: &str,
    data: &[u8],
    pool: &ConstantPool,
) -> Result<Attribute, ClassFormatError> {
    let mut r = Reader {
        bytes: data,
        pos: 0,
    };
    let attribute = match name {
        attr::SOURCE_FILE => Attribute::SourceFile(pool.utf8_at(r.u16()?)?.to_string()),
        attr::CONSTANT_VALUE => {
            let index = r.u16()?;
            let value = match pool.get(index) {
                Some(Constant::Integer(v)) => ConstantValue::Int(*v),
                Some(Constant::String(_)) => ConstantValue::String(pool.string_at(index)?.to_string()),
                _ => return Err(ClassFormatError::MalformedAttribute(attr::CONSTANT_VALUE)),
            };
            Attribute::ConstantValue(value)
        }
        attr::INNER_CLASSES => {
            let count = r.u16()?;
            let mut entries = Vec::with_capacity(count as usize);
            for _ in 0..count {
                let inner = pool.class_at(r.u16()?)?.to_string();
                let outer = match r.u16()? {
                    0 => None,
                    index => Some(pool.class_at(index)?.to_string()),
                };
                let simple_name = match r.u16()? {
                    0 => None,
                    index => Some(pool.utf8_at(index)?.to_string()),
                };
                let access = r.u16()?;
                entries.push(InnerClass {
                    inner,
                    outer,
                    simple_name,
                    access,
                });
            }
            Attribute::InnerClasses(entries)
        }
        attr::RUNTIME_VISIBLE_ANNOTATIONS => {
            let count = r.u16()?;
            let mut annotations = Vec::with_capacity(count as usize);
            for _ in 0..count {
                annotations.push(read_annotation(&mut r, pool)?);
            }
            Attribute::RuntimeVisibleAnnotations(annotations)
        }
        attr::CODE => Attribute::Code(read_code(&mut r, pool)?),
        _ => {
            return Ok(Attribute::Unknown {
                name: name.to_string(),
                data: data.to_vec(),
            });
        }
    };
    if !r.is_at_end() {
        return Err(ClassFormatError::MalformedAttribute(known_name(name)));
    }
    Ok(attribute)
}

fn known_name(name: &str) -> &'static str {
    match name {
        attr::SOURCE_FILE => attr::SOURCE_FILE,
        attr::CONSTANT_VALUE => attr::CONSTANT_VALUE,
        attr::INNER_CLASSES => attr::INNER_CLASSES,
        attr::RUNTIME_VISIBLE_ANNOTATIONS => attr::RUNTIME_VISIBLE_ANNOTATIONS,
        _ => attr::CODE,
    }
}

fn read_annotation(r: &mut Reader<'_>, pool: &ConstantPool) -> Result<Annotation, ClassFormatError> {
    let descriptor = pool.utf8_at(r.u16()?)?.to_string();
    let count = r.u16()?;
    let mut elements = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let name = pool.utf8_at(r.u16()?)?.to_string();
        let tag = r.u8()? as char;
        let index = r.u16()?;
        let value = match tag {
            's' => ElementValue::String(pool.utf8_at(index)?.to_string()),
            'I' => ElementValue::Int(pool.integer_at(index)?),
            other => return Err(ClassFormatError::UnsupportedElementValue(other)),
        };
        elements.push((name, value));
    }
    Ok(Annotation {
        descriptor,
        elements,
    })
}

fn read_code(r: &mut Reader<'_>, pool: &ConstantPool) -> Result<CodeInfo, ClassFormatError> {
    let max_stack = r.u16()?;
    let max_locals = r.u16()?;
    let len = r.u32()? as usize;
    let bytes = r.take(len)?.to_vec();

    let exception_table_len = r.u16()? as usize;
    r.take(exception_table_len * 8)?;
    // Nested attributes (LineNumberTable and friends) are not interpreted.
    let nested = r.u16()?;
    for _ in 0..nested {
        r.u16()?;
        let len = r.u32()? as usize;
        r.take(len)?;
    }

    let mut instructions = Vec::new();
    let mut offset = 0;
    while offset < bytes.len() {
        let (insn, size) = Insn::decode(&bytes, offset, pool)?;
        instructions.push(Instruction {
            offset,
            opcode: bytes[offset],
            insn,
        });
        offset += size;
    }

    Ok(CodeInfo {
        max_stack,
        max_locals,
        bytes,
        instructions,
    })
}
