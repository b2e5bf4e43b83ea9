//! Errors raised while writing or reading class files.

use crate::constants::MAX_CODE_SIZE;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ClassFormatError {
    // Writer
    #[error("method {method} has {size} bytes of code (limit is {MAX_CODE_SIZE})")]
    CodeTooLarge { method: String, size: usize },

    #[error("constant pool overflow: more than 65535 entries")]
    ConstantPoolOverflow,

    #[error("string constant of {len} bytes exceeds the 65535 byte limit")]
    Utf8TooLong { len: usize },

    #[error("too many {kind} in {class}: {count}")]
    TooMany {
        kind: &'static str,
        class: String,
        count: usize,
    },

    #[error("operand stack underflow in {method} at instruction {index}")]
    StackUnderflow { method: String, index: usize },

    #[error("invalid descriptor `{0}`")]
    InvalidDescriptor(String),

    // Reader
    #[error("invalid magic: expected 0xCAFEBABE, got {0:#010x}")]
    InvalidMagic(u32),

    #[error("unexpected end of class file at offset {0}")]
    UnexpectedEof(usize),

    #[error("{0} trailing bytes after class file")]
    TrailingBytes(usize),

    #[error("unsupported constant pool tag {tag} at index {index}")]
    UnsupportedConstant { tag: u8, index: u16 },

    #[error("invalid constant pool index {index} (expected {expected})")]
    BadConstantIndex { index: u16, expected: &'static str },

    #[error("malformed modified UTF-8 in constant pool entry {0}")]
    InvalidUtf8(u16),

    #[error("unsupported opcode {opcode:#04x} at offset {offset}")]
    UnsupportedOpcode { opcode: u8, offset: usize },

    #[error("unsupported annotation element tag {0:?}")]
    UnsupportedElementValue(char),

    #[error("malformed {0} attribute")]
    MalformedAttribute(&'static str),
}
