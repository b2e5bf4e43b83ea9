//! Fixed values of the class file format.

/// `0xCAFEBABE`
pub const MAGIC: u32 = 0xCAFE_BABE;

/// Java 7. The only version this crate writes.
pub const MAJOR_VERSION: u16 = 51;
pub const MINOR_VERSION: u16 = 0;

/// Upper bound on a method's `code_length` (JVMS 4.7.3).
pub const MAX_CODE_SIZE: usize = 65535;

/// Upper bound on constant pool entries, fields, methods and similar u16 counts.
pub const MAX_U16_COUNT: usize = 65535;

/// Access and property flags.
///
/// Some bits mean different things depending on where they appear
/// (`SUPER` on classes is `SYNCHRONIZED` on methods).
pub mod access {
    pub const PUBLIC: u16 = 0x0001;
    pub const PRIVATE: u16 = 0x0002;
    pub const PROTECTED: u16 = 0x0004;
    pub const STATIC: u16 = 0x0008;
    pub const FINAL: u16 = 0x0010;
    pub const SUPER: u16 = 0x0020;
    pub const SYNCHRONIZED: u16 = 0x0020;
    pub const VOLATILE: u16 = 0x0040;
    pub const BRIDGE: u16 = 0x0040;
    pub const TRANSIENT: u16 = 0x0080;
    pub const VARARGS: u16 = 0x0080;
    pub const NATIVE: u16 = 0x0100;
    pub const INTERFACE: u16 = 0x0200;
    pub const ABSTRACT: u16 = 0x0400;
    pub const STRICT: u16 = 0x0800;
    pub const SYNTHETIC: u16 = 0x1000;
    pub const ANNOTATION: u16 = 0x2000;
    pub const ENUM: u16 = 0x4000;
}

/// Constant pool tags (JVMS 4.4).
pub mod tag {
    pub const UTF8: u8 = 1;
    pub const INTEGER: u8 = 3;
    pub const FLOAT: u8 = 4;
    pub const LONG: u8 = 5;
    pub const DOUBLE: u8 = 6;
    pub const CLASS: u8 = 7;
    pub const STRING: u8 = 8;
    pub const FIELDREF: u8 = 9;
    pub const METHODREF: u8 = 10;
    pub const INTERFACE_METHODREF: u8 = 11;
    pub const NAME_AND_TYPE: u8 = 12;
}

/// Opcodes for the instruction subset in [`crate::Insn`].
pub mod opcode {
    pub const ICONST_M1: u8 = 0x02;
    pub const ICONST_0: u8 = 0x03;
    pub const ICONST_5: u8 = 0x08;
    pub const BIPUSH: u8 = 0x10;
    pub const SIPUSH: u8 = 0x11;
    pub const LDC: u8 = 0x12;
    pub const LDC_W: u8 = 0x13;
    pub const ILOAD: u8 = 0x15;
    pub const ALOAD: u8 = 0x19;
    pub const ILOAD_0: u8 = 0x1a;
    pub const ILOAD_3: u8 = 0x1d;
    pub const ALOAD_0: u8 = 0x2a;
    pub const ALOAD_3: u8 = 0x2d;
    pub const ISTORE: u8 = 0x36;
    pub const ISTORE_0: u8 = 0x3b;
    pub const ISTORE_3: u8 = 0x3e;
    pub const IASTORE: u8 = 0x4f;
    pub const DUP: u8 = 0x59;
    pub const IADD: u8 = 0x60;
    pub const RETURN: u8 = 0xb1;
    pub const GETSTATIC: u8 = 0xb2;
    pub const PUTSTATIC: u8 = 0xb3;
    pub const INVOKESPECIAL: u8 = 0xb7;
    pub const INVOKESTATIC: u8 = 0xb8;
    pub const NEWARRAY: u8 = 0xbc;
    pub const WIDE: u8 = 0xc4;
}

/// Attribute names this crate writes or understands.
pub mod attr {
    pub const CODE: &str = "Code";
    pub const CONSTANT_VALUE: &str = "ConstantValue";
    pub const INNER_CLASSES: &str = "InnerClasses";
    pub const RUNTIME_VISIBLE_ANNOTATIONS: &str = "RuntimeVisibleAnnotations";
    pub const SOURCE_FILE: &str = "SourceFile";
}
