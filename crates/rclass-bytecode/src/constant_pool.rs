//! Constant pool.
//!
//! One type serves both directions: the writer interns entries (deduplicated,
//! insertion ordered), the reader fills it verbatim and resolves indices.
//! Index 0 is never valid; `Long` and `Double` occupy two slots.

use std::collections::HashMap;

use crate::constants::{MAX_U16_COUNT, tag};
use crate::error::ClassFormatError;
use crate::insn::MemberRef;

/// A constant pool entry. Indices point into the same pool.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Constant {
    Utf8(String),
    Integer(i32),
    /// Raw IEEE 754 bits.
    Float(u32),
    Long(i64),
    /// Raw IEEE 754 bits.
    Double(u64),
    Class(u16),
    String(u16),
    Fieldref { class: u16, name_and_type: u16 },
    Methodref { class: u16, name_and_type: u16 },
    InterfaceMethodref { class: u16, name_and_type: u16 },
    NameAndType { name: u16, descriptor: u16 },
}

impl Constant {
    fn width(&self) -> usize {
        match self {
            Constant::Long(_) | Constant::Double(_) => 2,
            _ => 1,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ConstantPool {
    /// Slot 0 and the upper half of wide entries are `None`.
    entries: Vec<Option<Constant>>,
    lookup: HashMap<Constant, u16>,
}

impl Default for ConstantPool {
    fn default() -> Self {
        Self::new()
    }
}

impl ConstantPool {
    pub fn new() -> Self {
        Self {
            entries: vec![None],
            lookup: HashMap::new(),
        }
    }

    /// The `constant_pool_count` value: one more than the highest index.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.len() <= 1
    }

    /// Intern an entry, returning its index.
    pub fn intern(&mut self, constant: Constant) -> Result<u16, ClassFormatError> {
        if let Some(&index) = self.lookup.get(&constant) {
            return Ok(index);
        }

        if let Constant::Utf8(value) = &constant {
            let len = encode_modified_utf8(value).len();
            if len > MAX_U16_COUNT {
                return Err(ClassFormatError::Utf8TooLong { len });
            }
        }

        let index = self.entries.len();
        if index + constant.width() > MAX_U16_COUNT {
            return Err(ClassFormatError::ConstantPoolOverflow);
        }

        let width = constant.width();
        self.entries.push(Some(constant.clone()));
        for _ in 1..width {
            self.entries.push(None);
        }
        self.lookup.insert(constant, index as u16);
        Ok(index as u16)
    }

    pub fn utf8(&mut self, value: &str) -> Result<u16, ClassFormatError> {
        self.intern(Constant::Utf8(value.to_string()))
    }

    pub fn integer(&mut self, value: i32) -> Result<u16, ClassFormatError> {
        self.intern(Constant::Integer(value))
    }

    pub fn class(&mut self, name: &str) -> Result<u16, ClassFormatError> {
        let name = self.utf8(name)?;
        self.intern(Constant::Class(name))
    }

    pub fn string(&mut self, value: &str) -> Result<u16, ClassFormatError> {
        let value = self.utf8(value)?;
        self.intern(Constant::String(value))
    }

    pub fn name_and_type(&mut self, name: &str, descriptor: &str) -> Result<u16, ClassFormatError> {
        let name = self.utf8(name)?;
        let descriptor = self.utf8(descriptor)?;
        self.intern(Constant::NameAndType { name, descriptor })
    }

    pub fn field_ref(&mut self, member: &MemberRef) -> Result<u16, ClassFormatError> {
        let class = self.class(&member.owner)?;
        let name_and_type = self.name_and_type(&member.name, &member.descriptor)?;
        self.intern(Constant::Fieldref {
            class,
            name_and_type,
        })
    }

    pub fn method_ref(&mut self, member: &MemberRef) -> Result<u16, ClassFormatError> {
        let class = self.class(&member.owner)?;
        let name_and_type = self.name_and_type(&member.name, &member.descriptor)?;
        self.intern(Constant::Methodref {
            class,
            name_and_type,
        })
    }

    /// Append an entry read from a class file, keeping its position.
    pub(crate) fn push_raw(&mut self, constant: Constant) {
        let width = constant.width();
        let index = self.entries.len() as u16;
        self.lookup.entry(constant.clone()).or_insert(index);
        self.entries.push(Some(constant));
        for _ in 1..width {
            self.entries.push(None);
        }
    }

    pub fn get(&self, index: u16) -> Option<&Constant> {
        self.entries.get(index as usize).and_then(Option::as_ref)
    }

    /// Iterate over `(index, entry)` pairs in pool order.
    pub fn iter(&self) -> impl Iterator<Item = (u16, &Constant)> {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.as_ref().map(|c| (i as u16, c)))
    }

    pub fn utf8_at(&self, index: u16) -> Result<&str, ClassFormatError> {
        match self.get(index) {
            Some(Constant::Utf8(s)) => Ok(s),
            _ => Err(bad_index(index, "Utf8")),
        }
    }

    pub fn integer_at(&self, index: u16) -> Result<i32, ClassFormatError> {
        match self.get(index) {
            Some(Constant::Integer(v)) => Ok(*v),
            _ => Err(bad_index(index, "Integer")),
        }
    }

    pub fn class_at(&self, index: u16) -> Result<&str, ClassFormatError> {
        match self.get(index) {
            Some(Constant::Class(name)) => self.utf8_at(*name),
            _ => Err(bad_index(index, "Class")),
        }
    }

    pub fn string_at(&self, index: u16) -> Result<&str, ClassFormatError> {
        match self.get(index) {
            Some(Constant::String(value)) => self.utf8_at(*value),
            _ => Err(bad_index(index, "String")),
        }
    }

    /// Resolve a Fieldref, Methodref or InterfaceMethodref.
    pub fn member_at(&self, index: u16) -> Result<MemberRef, ClassFormatError> {
        let (class, name_and_type) = match self.get(index) {
            Some(
                Constant::Fieldref {
                    class,
                    name_and_type,
                }
                | Constant::Methodref {
                    class,
                    name_and_type,
                }
                | Constant::InterfaceMethodref {
                    class,
                    name_and_type,
                },
            ) => (*class, *name_and_type),
            _ => return Err(bad_index(index, "member reference")),
        };
        let Some(Constant::NameAndType { name, descriptor }) = self.get(name_and_type) else {
            return Err(bad_index(name_and_type, "NameAndType"));
        };
        Ok(MemberRef::new(
            self.class_at(class)?,
            self.utf8_at(*name)?,
            self.utf8_at(*descriptor)?,
        ))
    }

    pub(crate) fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&(self.entries.len() as u16).to_be_bytes());
        for constant in self.entries.iter().flatten() {
            match constant {
                Constant::Utf8(s) => {
                    let bytes = encode_modified_utf8(s);
                    out.push(tag::UTF8);
                    out.extend_from_slice(&(bytes.len() as u16).to_be_bytes());
                    out.extend_from_slice(&bytes);
                }
                Constant::Integer(v) => {
                    out.push(tag::INTEGER);
                    out.extend_from_slice(&v.to_be_bytes());
                }
                Constant::Float(bits) => {
                    out.push(tag::FLOAT);
                    out.extend_from_slice(&bits.to_be_bytes());
                }
                Constant::Long(v) => {
                    out.push(tag::LONG);
                    out.extend_from_slice(&v.to_be_bytes());
                }
                Constant::Double(bits) => {
                    out.push(tag::DOUBLE);
                    out.extend_from_slice(&bits.to_be_bytes());
                }
                Constant::Class(name) => {
                    out.push(tag::CLASS);
                    out.extend_from_slice(&name.to_be_bytes());
                }
                Constant::String(value) => {
                    out.push(tag::STRING);
                    out.extend_from_slice(&value.to_be_bytes());
                }
                Constant::Fieldref {
                    class,
                    name_and_type,
                } => write_ref(out, tag::FIELDREF, *class, *name_and_type),
                Constant::Methodref {
                    class,
                    name_and_type,
                } => write_ref(out, tag::METHODREF, *class, *name_and_type),
                Constant::InterfaceMethodref {
                    class,
                    name_and_type,
                } => write_ref(out, tag::INTERFACE_METHODREF, *class, *name_and_type),
                Constant::NameAndType { name, descriptor } => {
                    write_ref(out, tag::NAME_AND_TYPE, *name, *descriptor)
                }
            }
        }
    }
}

fn write_ref(out: &mut Vec<u8>, tag: u8, a: u16, b: u16) {
    out.push(tag);
    out.extend_from_slice(&a.to_be_bytes());
    out.extend_from_slice(&b.to_be_bytes());
}

fn bad_index(index: u16, expected: &'static str) -> ClassFormatError {
    ClassFormatError::BadConstantIndex { index, expected }
}

/// Encode a string as "modified UTF-8" (JVMS 4.4.7).
///
/// Differs from UTF-8 in two places: NUL is two bytes, and supplementary
/// characters are written as a surrogate pair of three-byte sequences.
pub fn encode_modified_utf8(s: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(s.len());
    for unit in s.encode_utf16() {
        match unit {
            0x0001..=0x007f => out.push(unit as u8),
            0x0000 | 0x0080..=0x07ff => {
                out.push(0xc0 | (unit >> 6) as u8);
                out.push(0x80 | (unit & 0x3f) as u8);
            }
            _ => {
                out.push(0xe0 | (unit >> 12) as u8);
                out.push(0x80 | ((unit >> 6) & 0x3f) as u8);
                out.push(0x80 | (unit & 0x3f) as u8);
            }
        }
    }
    out
}

/// Decode "modified UTF-8". Returns `None` on malformed input.
pub fn decode_modified_utf8(bytes: &[u8]) -> Option<String> {
    let mut units = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        let unit = match b {
            0x01..=0x7f => {
                i += 1;
                b as u16
            }
            0xc0..=0xdf => {
                let b2 = continuation(bytes, i + 1)?;
                i += 2;
                ((b as u16 & 0x1f) << 6) | b2
            }
            0xe0..=0xef => {
                let b2 = continuation(bytes, i + 1)?;
                let b3 = continuation(bytes, i + 2)?;
                i += 3;
                ((b as u16 & 0x0f) << 12) | (b2 << 6) | b3
            }
            _ => return None,
        };
        units.push(unit);
    }
    String::from_utf16(&units).ok()
}

fn continuation(bytes: &[u8], i: usize) -> Option<u16> {
    let b = *bytes.get(i)?;
    (b & 0xc0 == 0x80).then_some((b & 0x3f) as u16)
}
