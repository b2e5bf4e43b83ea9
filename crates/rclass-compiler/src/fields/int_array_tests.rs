use rclass_bytecode::{ClassFile, ClassWriter, Code, Insn, MemberRef, access};

use super::{FieldInitializer, IntArrayFieldInitializer, SharedIdDescriptor};

#[test]
fn always_deferred() {
    let field = IntArrayFieldInitializer::new("Widget", vec![1, 2]);
    let mut class = ClassWriter::new(access::PUBLIC, "R$styleable", "java/lang/Object");
    assert!(field.declare_field(&mut class, true, false, None));

    let parsed = ClassFile::parse(&class.to_bytes().unwrap()).unwrap();
    let info = parsed.field("Widget").unwrap();
    assert_eq!(info.descriptor, "[I");
    assert_eq!(info.access, access::PUBLIC | access::STATIC | access::FINAL);
    assert_eq!(info.constant_value(), None);
}

#[test]
fn initializer_fills_elements_in_order() {
    let field = IntArrayFieldInitializer::new("Widget", vec![0x0101_0000, 0x7f01_0000]);
    let mut code = Code::new();
    field.emit_initializer(&mut code, "R$styleable", None);
    assert_eq!(
        code.insns(),
        &[
            Insn::PushInt(2),
            Insn::NewArray(rclass_bytecode::ArrayType::Int),
            Insn::Dup,
            Insn::PushInt(0),
            Insn::PushInt(0x0101_0000),
            Insn::IAStore,
            Insn::Dup,
            Insn::PushInt(1),
            Insn::PushInt(0x7f01_0000),
            Insn::IAStore,
            Insn::PutStatic(MemberRef::new("R$styleable", "Widget", "[I")),
        ]
    );
}

#[test]
fn max_size_per_element() {
    let field = IntArrayFieldInitializer::new("Widget", vec![0; 5]);
    assert_eq!(field.max_code_size(false), 8 + 8 * 5);
    assert_eq!(field.max_code_size(true), 8 + 10 * 5);
    assert_eq!(IntArrayFieldInitializer::new("Empty", vec![]).max_code_size(true), 8);
}

#[test]
fn rebases_only_owned_elements() {
    let shared = SharedIdDescriptor::new("RPackage", 0x7f00_0000);
    let values = vec![0x0101_0000, 0x7f01_0001];
    let field = IntArrayFieldInitializer::new("Widget", values);
    let mut code = Code::new();
    field.emit_initializer(&mut code, "R$styleable", Some(&shared));

    let iadds = code.insns().iter().filter(|i| **i == Insn::IAdd).count();
    assert_eq!(iadds, 1);
    assert!(code.insns().contains(&Insn::PushInt(0x0001_0001)));
    assert!(code.max_size() <= field.max_code_size(true));
}
