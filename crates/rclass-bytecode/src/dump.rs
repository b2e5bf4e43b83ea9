//! Human-readable class dump, in the spirit of `javap -c -v` but without
//! constant pool indices so output stays stable across pool layouts.

use std::fmt::Write as _;

use crate::annotation::{Annotation, ElementValue};
use crate::constants::access;
use crate::insn::{Insn, mnemonic};
use crate::reader::{Attribute, ClassFile, CodeInfo};
use crate::writer::ConstantValue;

#[derive(Clone, Copy)]
enum FlagContext {
    Class,
    Inner,
    Field,
    Method,
}

/// Generate a dump of a parsed class.
pub fn dump(class: &ClassFile) -> String {
    let mut out = String::new();

    write!(out, "class {}", class.this_class).ok();
    if let Some(super_class) = &class.super_class {
        write!(out, " extends {}", super_class).ok();
    }
    out.push('\n');
    writeln!(out, "  version: {}.{}", class.major_version, class.minor_version).ok();
    writeln!(out, "  flags: {}", flags(class.access, FlagContext::Class)).ok();
    dump_attributes(&mut out, &class.attributes);

    for field in &class.fields {
        writeln!(out).ok();
        writeln!(out, "field {} {}", field.name, field.descriptor).ok();
        writeln!(out, "  flags: {}", flags(field.access, FlagContext::Field)).ok();
        dump_attributes(&mut out, &field.attributes);
    }

    for method in &class.methods {
        writeln!(out).ok();
        writeln!(out, "method {} {}", method.name, method.descriptor).ok();
        writeln!(out, "  flags: {}", flags(method.access, FlagContext::Method)).ok();
        dump_attributes(&mut out, &method.attributes);
    }

    out
}

fn dump_attributes(out: &mut String, attributes: &[Attribute]) {
    for attribute in attributes {
        match attribute {
            Attribute::SourceFile(name) => {
                writeln!(out, "  source: {}", name).ok();
            }
            Attribute::InnerClasses(entries) => {
                for entry in entries {
                    write!(out, "  inner: {}", entry.inner).ok();
                    if let Some(outer) = &entry.outer {
                        write!(out, " in {}", outer).ok();
                    }
                    if let Some(name) = &entry.simple_name {
                        write!(out, " as {}", name).ok();
                    }
                    writeln!(out, " ({})", flags(entry.access, FlagContext::Inner)).ok();
                }
            }
            Attribute::RuntimeVisibleAnnotations(annotations) => {
                for annotation in annotations {
                    writeln!(out, "  {}", format_annotation(annotation)).ok();
                }
            }
            Attribute::ConstantValue(value) => match value {
                ConstantValue::Int(v) => {
                    writeln!(out, "  constant: int {:#x}", v).ok();
                }
                ConstantValue::String(s) => {
                    writeln!(out, "  constant: string {:?}", s).ok();
                }
            },
            Attribute::Code(code) => dump_code(out, code),
            Attribute::Unknown { name, data } => {
                writeln!(out, "  {}: {} bytes", name, data.len()).ok();
            }
        }
    }
}

fn dump_code(out: &mut String, code: &CodeInfo) {
    writeln!(
        out,
        "  code: {} bytes, stack={}, locals={}",
        code.bytes.len(),
        code.max_stack,
        code.max_locals
    )
    .ok();

    let width = code.bytes.len().max(1).to_string().len();
    for instruction in &code.instructions {
        let name = mnemonic(instruction.opcode);
        let operand = operand(&instruction.insn, instruction.opcode);
        if operand.is_empty() {
            writeln!(out, "    {:>width$}: {}", instruction.offset, name).ok();
        } else {
            writeln!(out, "    {:>width$}: {} {}", instruction.offset, name, operand).ok();
        }
    }
}

fn operand(insn: &Insn, opcode: u8) -> String {
    use crate::constants::opcode as op;

    match insn {
        Insn::PushInt(v) if !(op::ICONST_M1..=op::ICONST_5).contains(&opcode) => v.to_string(),
        Insn::ALoad(slot) | Insn::ILoad(slot) | Insn::IStore(slot) if *slot > 3 => slot.to_string(),
        Insn::NewArray(_) => "int".to_string(),
        Insn::GetStatic(m) | Insn::PutStatic(m) | Insn::InvokeStatic(m) | Insn::InvokeSpecial(m) => {
            m.to_string()
        }
        _ => String::new(),
    }
}

fn format_annotation(annotation: &Annotation) -> String {
    let elements: Vec<String> = annotation
        .elements
        .iter()
        .map(|(name, value)| match value {
            ElementValue::String(s) => format!("{} = {:?}", name, s),
            ElementValue::Int(v) => format!("{} = {}", name, v),
        })
        .collect();
    format!("@{}({})", annotation.descriptor, elements.join(", "))
}

fn flags(bits: u16, context: FlagContext) -> String {
    let table: &[(u16, &str)] = match context {
        FlagContext::Class => &[
            (access::PUBLIC, "public"),
            (access::FINAL, "final"),
            (access::SUPER, "super"),
            (access::INTERFACE, "interface"),
            (access::ABSTRACT, "abstract"),
            (access::SYNTHETIC, "synthetic"),
            (access::ANNOTATION, "annotation"),
            (access::ENUM, "enum"),
        ],
        FlagContext::Inner => &[
            (access::PUBLIC, "public"),
            (access::PRIVATE, "private"),
            (access::PROTECTED, "protected"),
            (access::STATIC, "static"),
            (access::FINAL, "final"),
            (access::INTERFACE, "interface"),
            (access::ABSTRACT, "abstract"),
            (access::SYNTHETIC, "synthetic"),
            (access::ANNOTATION, "annotation"),
            (access::ENUM, "enum"),
        ],
        FlagContext::Field => &[
            (access::PUBLIC, "public"),
            (access::PRIVATE, "private"),
            (access::PROTECTED, "protected"),
            (access::STATIC, "static"),
            (access::FINAL, "final"),
            (access::VOLATILE, "volatile"),
            (access::TRANSIENT, "transient"),
            (access::SYNTHETIC, "synthetic"),
            (access::ENUM, "enum"),
        ],
        FlagContext::Method => &[
            (access::PUBLIC, "public"),
            (access::PRIVATE, "private"),
            (access::PROTECTED, "protected"),
            (access::STATIC, "static"),
            (access::FINAL, "final"),
            (access::SYNCHRONIZED, "synchronized"),
            (access::BRIDGE, "bridge"),
            (access::VARARGS, "varargs"),
            (access::NATIVE, "native"),
            (access::ABSTRACT, "abstract"),
            (access::STRICT, "strict"),
            (access::SYNTHETIC, "synthetic"),
        ],
    };

    let names: Vec<&str> = table
        .iter()
        .filter(|(bit, _)| bits & bit != 0)
        .map(|(_, name)| *name)
        .collect();
    if names.is_empty() {
        format!("{:#06x}", bits)
    } else {
        format!("{:#06x} {}", bits, names.join(" "))
    }
}
