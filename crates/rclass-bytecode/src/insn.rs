//! Symbolic instructions.
//!
//! Instructions name their operands (member references, literal ints) instead
//! of constant pool indices. Indices are assigned during encoding, which also
//! picks the shortest encoding for loads, stores and integer pushes.

use std::fmt;

use crate::constant_pool::ConstantPool;
use crate::constants::opcode;
use crate::descriptor;
use crate::error::ClassFormatError;

/// `owner.name:descriptor` of a field or method.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MemberRef {
    pub owner: String,
    pub name: String,
    pub descriptor: String,
}

impl MemberRef {
    pub fn new(
        owner: impl Into<String>,
        name: impl Into<String>,
        descriptor: impl Into<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            descriptor: descriptor.into(),
        }
    }
}

impl fmt::Display for MemberRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}:{}", self.owner, self.name, self.descriptor)
    }
}

/// Element type operand of `newarray`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrayType {
    Int,
}

impl ArrayType {
    /// The `atype` code (JVMS 6.5 newarray).
    pub fn code(self) -> u8 {
        match self {
            ArrayType::Int => 10,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            10 => Some(ArrayType::Int),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Insn {
    ALoad(u16),
    ILoad(u16),
    IStore(u16),
    /// Push an int constant: `iconst_*`, `bipush`, `sipush` or `ldc`/`ldc_w`.
    PushInt(i32),
    IAdd,
    Dup,
    NewArray(ArrayType),
    IAStore,
    GetStatic(MemberRef),
    PutStatic(MemberRef),
    InvokeStatic(MemberRef),
    InvokeSpecial(MemberRef),
    Return,
}

impl Insn {
    /// Worst-case encoded size in bytes.
    ///
    /// Exact for everything except pushes of large ints, which take two bytes
    /// as `ldc` when the constant lands in the first 256 pool slots.
    pub fn max_size(&self) -> usize {
        match self {
            Insn::ALoad(slot) | Insn::ILoad(slot) | Insn::IStore(slot) => local_size(*slot),
            Insn::PushInt(value) => match *value {
                -1..=5 => 1,
                v if i8::try_from(v).is_ok() => 2,
                _ => 3,
            },
            Insn::IAdd | Insn::Dup | Insn::IAStore | Insn::Return => 1,
            Insn::NewArray(_) => 2,
            Insn::GetStatic(_) | Insn::PutStatic(_) => 3,
            Insn::InvokeStatic(_) | Insn::InvokeSpecial(_) => 3,
        }
    }

    /// Operand stack slots popped and pushed.
    pub fn stack_effect(&self) -> Result<(u16, u16), ClassFormatError> {
        Ok(match self {
            Insn::ALoad(_) | Insn::ILoad(_) | Insn::PushInt(_) => (0, 1),
            Insn::IStore(_) => (1, 0),
            Insn::IAdd => (2, 1),
            Insn::Dup => (1, 2),
            Insn::NewArray(_) => (1, 1),
            Insn::IAStore => (3, 0),
            Insn::GetStatic(member) => (0, descriptor::field_slots(&member.descriptor)?),
            Insn::PutStatic(member) => (descriptor::field_slots(&member.descriptor)?, 0),
            Insn::InvokeStatic(member) => descriptor::method_slots(&member.descriptor)?,
            Insn::InvokeSpecial(member) => {
                let (args, ret) = descriptor::method_slots(&member.descriptor)?;
                (args + 1, ret)
            }
            Insn::Return => (0, 0),
        })
    }

    /// Local variable slot touched, if any.
    pub fn local(&self) -> Option<u16> {
        match self {
            Insn::ALoad(slot) | Insn::ILoad(slot) | Insn::IStore(slot) => Some(*slot),
            _ => None,
        }
    }

    pub fn encode(&self, pool: &mut ConstantPool, out: &mut Vec<u8>) -> Result<(), ClassFormatError> {
        match self {
            Insn::ALoad(slot) => encode_local(out, opcode::ALOAD_0, opcode::ALOAD, *slot),
            Insn::ILoad(slot) => encode_local(out, opcode::ILOAD_0, opcode::ILOAD, *slot),
            Insn::IStore(slot) => encode_local(out, opcode::ISTORE_0, opcode::ISTORE, *slot),
            Insn::PushInt(value) => encode_push(pool, out, *value)?,
            Insn::IAdd => out.push(opcode::IADD),
            Insn::Dup => out.push(opcode::DUP),
            Insn::NewArray(ty) => out.extend_from_slice(&[opcode::NEWARRAY, ty.code()]),
            Insn::IAStore => out.push(opcode::IASTORE),
            Insn::GetStatic(member) => {
                let index = pool.field_ref(member)?;
                encode_indexed(out, opcode::GETSTATIC, index);
            }
            Insn::PutStatic(member) => {
                let index = pool.field_ref(member)?;
                encode_indexed(out, opcode::PUTSTATIC, index);
            }
            Insn::InvokeStatic(member) => {
                let index = pool.method_ref(member)?;
                encode_indexed(out, opcode::INVOKESTATIC, index);
            }
            Insn::InvokeSpecial(member) => {
                let index = pool.method_ref(member)?;
                encode_indexed(out, opcode::INVOKESPECIAL, index);
            }
            Insn::Return => out.push(opcode::RETURN),
        }
        Ok(())
    }

    /// Decode one instruction at `offset`. Returns the instruction and its length.
    pub fn decode(
        code: &[u8],
        offset: usize,
        pool: &ConstantPool,
    ) -> Result<(Insn, usize), ClassFormatError> {
        let op = *code
            .get(offset)
            .ok_or(ClassFormatError::UnexpectedEof(offset))?;
        let u8_at = |i: usize| {
            code.get(offset + i)
                .copied()
                .ok_or(ClassFormatError::UnexpectedEof(offset + i))
        };
        let u16_at = |i: usize| -> Result<u16, ClassFormatError> {
            Ok(u16::from_be_bytes([u8_at(i)?, u8_at(i + 1)?]))
        };

        let decoded = match op {
            opcode::ICONST_M1..=opcode::ICONST_5 => {
                (Insn::PushInt(op as i32 - opcode::ICONST_0 as i32), 1)
            }
            opcode::BIPUSH => (Insn::PushInt(u8_at(1)? as i8 as i32), 2),
            opcode::SIPUSH => (Insn::PushInt(u16_at(1)? as i16 as i32), 3),
            opcode::LDC => (Insn::PushInt(pool.integer_at(u8_at(1)? as u16)?), 2),
            opcode::LDC_W => (Insn::PushInt(pool.integer_at(u16_at(1)?)?), 3),
            opcode::ILOAD => (Insn::ILoad(u8_at(1)? as u16), 2),
            opcode::ALOAD => (Insn::ALoad(u8_at(1)? as u16), 2),
            opcode::ISTORE => (Insn::IStore(u8_at(1)? as u16), 2),
            opcode::ILOAD_0..=opcode::ILOAD_3 => (Insn::ILoad((op - opcode::ILOAD_0) as u16), 1),
            opcode::ALOAD_0..=opcode::ALOAD_3 => (Insn::ALoad((op - opcode::ALOAD_0) as u16), 1),
            opcode::ISTORE_0..=opcode::ISTORE_3 => {
                (Insn::IStore((op - opcode::ISTORE_0) as u16), 1)
            }
            opcode::IASTORE => (Insn::IAStore, 1),
            opcode::DUP => (Insn::Dup, 1),
            opcode::IADD => (Insn::IAdd, 1),
            opcode::RETURN => (Insn::Return, 1),
            opcode::GETSTATIC => (Insn::GetStatic(pool.member_at(u16_at(1)?)?), 3),
            opcode::PUTSTATIC => (Insn::PutStatic(pool.member_at(u16_at(1)?)?), 3),
            opcode::INVOKESPECIAL => (Insn::InvokeSpecial(pool.member_at(u16_at(1)?)?), 3),
            opcode::INVOKESTATIC => (Insn::InvokeStatic(pool.member_at(u16_at(1)?)?), 3),
            opcode::NEWARRAY => {
                let atype = u8_at(1)?;
                let ty = ArrayType::from_code(atype)
                    .ok_or(ClassFormatError::UnsupportedOpcode { opcode: op, offset })?;
                (Insn::NewArray(ty), 2)
            }
            opcode::WIDE => {
                let inner = u8_at(1)?;
                let slot = u16_at(2)?;
                let insn = match inner {
                    opcode::ILOAD => Insn::ILoad(slot),
                    opcode::ALOAD => Insn::ALoad(slot),
                    opcode::ISTORE => Insn::IStore(slot),
                    _ => {
                        return Err(ClassFormatError::UnsupportedOpcode {
                            opcode: inner,
                            offset,
                        });
                    }
                };
                (insn, 4)
            }
            _ => return Err(ClassFormatError::UnsupportedOpcode { opcode: op, offset }),
        };
        Ok(decoded)
    }
}

/// Mnemonic for an opcode in the supported subset.
pub fn mnemonic(op: u8) -> &'static str {
    match op {
        opcode::ICONST_M1 => "iconst_m1",
        0x03 => "iconst_0",
        0x04 => "iconst_1",
        0x05 => "iconst_2",
        0x06 => "iconst_3",
        0x07 => "iconst_4",
        0x08 => "iconst_5",
        opcode::BIPUSH => "bipush",
        opcode::SIPUSH => "sipush",
        opcode::LDC => "ldc",
        opcode::LDC_W => "ldc_w",
        opcode::ILOAD => "iload",
        opcode::ALOAD => "aload",
        0x1a => "iload_0",
        0x1b => "iload_1",
        0x1c => "iload_2",
        0x1d => "iload_3",
        0x2a => "aload_0",
        0x2b => "aload_1",
        0x2c => "aload_2",
        0x2d => "aload_3",
        opcode::ISTORE => "istore",
        0x3b => "istore_0",
        0x3c => "istore_1",
        0x3d => "istore_2",
        0x3e => "istore_3",
        opcode::IASTORE => "iastore",
        opcode::DUP => "dup",
        opcode::IADD => "iadd",
        opcode::RETURN => "return",
        opcode::GETSTATIC => "getstatic",
        opcode::PUTSTATIC => "putstatic",
        opcode::INVOKESPECIAL => "invokespecial",
        opcode::INVOKESTATIC => "invokestatic",
        opcode::NEWARRAY => "newarray",
        opcode::WIDE => "wide",
        _ => "???",
    }
}

fn local_size(slot: u16) -> usize {
    match slot {
        0..=3 => 1,
        4..=255 => 2,
        _ => 4,
    }
}

fn encode_local(out: &mut Vec<u8>, short_base: u8, long_op: u8, slot: u16) {
    match slot {
        0..=3 => out.push(short_base + slot as u8),
        4..=255 => out.extend_from_slice(&[long_op, slot as u8]),
        _ => {
            out.extend_from_slice(&[opcode::WIDE, long_op]);
            out.extend_from_slice(&slot.to_be_bytes());
        }
    }
}

fn encode_push(pool: &mut ConstantPool, out: &mut Vec<u8>, value: i32) -> Result<(), ClassFormatError> {
    if (-1..=5).contains(&value) {
        out.push((opcode::ICONST_0 as i32 + value) as u8);
    } else if let Ok(byte) = i8::try_from(value) {
        out.extend_from_slice(&[opcode::BIPUSH, byte as u8]);
    } else if let Ok(short) = i16::try_from(value) {
        out.push(opcode::SIPUSH);
        out.extend_from_slice(&short.to_be_bytes());
    } else {
        let index = pool.integer(value)?;
        if let Ok(narrow) = u8::try_from(index) {
            out.extend_from_slice(&[opcode::LDC, narrow]);
        } else {
            encode_indexed(out, opcode::LDC_W, index);
        }
    }
    Ok(())
}

fn encode_indexed(out: &mut Vec<u8>, op: u8, index: u16) {
    out.push(op);
    out.extend_from_slice(&index.to_be_bytes());
}
