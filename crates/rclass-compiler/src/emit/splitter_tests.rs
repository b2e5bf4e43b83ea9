use std::sync::Arc;

use rclass_bytecode::{ClassFile, ClassWriter, Insn, MemberRef, access};

use crate::fields::{FieldInitializer, SharedIdDescriptor};
use crate::test_utils::SizedField;

use super::GenerateError;
use super::splitter::{InitializerMethod, METHOD_BUDGET, split, write_chain};

fn sized(sizes: &[usize]) -> Vec<Arc<dyn FieldInitializer>> {
    sizes
        .iter()
        .enumerate()
        .map(|(i, &size)| SizedField::arc(&format!("f{i}"), size))
        .collect()
}

#[test]
fn budget_leaves_room_for_tail() {
    assert_eq!(METHOD_BUDGET, 65531);
}

#[test]
fn small_fields_share_clinit() {
    let methods = split("R$id", &sized(&[6, 6, 6]), false).unwrap();
    assert_eq!(
        methods,
        vec![InitializerMethod {
            ordinal: 0,
            code_size: 18,
            fields: 0..3,
            next: None,
        }]
    );
    assert_eq!(methods[0].name(), "<clinit>");
    assert_eq!(methods[0].access(), access::STATIC);
}

#[test]
fn exact_fit_stays_in_one_method() {
    let methods = split("R$id", &sized(&[METHOD_BUDGET]), false).unwrap();
    assert_eq!(methods.len(), 1);
    assert_eq!(methods[0].code_size, METHOD_BUDGET);
}

#[test]
fn shared_id_prologue_counts_against_budget() {
    let methods = split("R$id", &sized(&[METHOD_BUDGET - 4]), true).unwrap();
    assert_eq!(methods[0].code_size, METHOD_BUDGET);

    let err = split("R$id", &sized(&[METHOD_BUDGET - 3]), true).unwrap_err();
    assert!(matches!(err, GenerateError::OversizedInitializer { .. }), "{err}");
}

#[test]
fn overflow_spills_into_chained_methods() {
    let fields = sized(&[10_000; 10]);
    let methods = split("R$styleable", &fields, false).unwrap();

    assert_eq!(methods.len(), 2);
    assert_eq!(methods[0].fields, 0..6);
    assert_eq!(methods[0].next, Some(1));
    assert_eq!(methods[1].fields, 6..10);
    assert_eq!(methods[1].next, None);
    assert_eq!(methods[1].name(), "staticInit0");
    assert_eq!(
        methods[1].access(),
        access::STATIC | access::PRIVATE | access::SYNTHETIC
    );
    assert!(methods.iter().all(|m| m.code_size <= METHOD_BUDGET));
}

#[test]
fn partition_preserves_order_and_is_minimal() {
    let sizes = [30_000, 30_000, 5_000, 40_000, 20_000, 1, 65_000, 531];
    let methods = split("R$x", &sized(&sizes), false).unwrap();

    let covered: Vec<usize> = methods.iter().flat_map(|m| m.fields.clone()).collect();
    assert_eq!(covered, (0..sizes.len()).collect::<Vec<_>>());

    let ranges: Vec<_> = methods.iter().map(|m| m.fields.clone()).collect();
    assert_eq!(ranges, vec![0..3, 3..6, 6..8]);
    for (i, m) in methods.iter().enumerate() {
        assert_eq!(m.ordinal, i);
    }
}

#[test]
fn oversized_field_names_class_and_field() {
    let err = split("com/example/R$styleable", &sized(&[10, METHOD_BUDGET + 1, 10]), false)
        .unwrap_err();
    match err {
        GenerateError::OversizedInitializer { class, field } => {
            assert_eq!(class, "com/example/R$styleable");
            assert_eq!(field, "f1");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn empty_input_plans_nothing() {
    assert!(split("R$id", &[], true).unwrap().is_empty());
}

#[test]
fn chain_tail_calls_next_method() {
    let fields = sized(&[40_000, 40_000, 40_000]);
    let methods = split("R$id", &fields, false).unwrap();
    assert_eq!(methods.len(), 3);

    let mut class = ClassWriter::new(access::PUBLIC, "R$id", "java/lang/Object");
    write_chain(&mut class, "R$id", &fields, &methods, None);
    let parsed = ClassFile::parse(&class.to_bytes().unwrap()).unwrap();

    let names: Vec<_> = parsed.methods.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["<clinit>", "staticInit0", "staticInit1"]);

    let clinit: Vec<_> = parsed.method("<clinit>").unwrap().code().unwrap().insns().cloned().collect();
    assert_eq!(
        clinit,
        vec![
            Insn::PushInt(0),
            Insn::PutStatic(MemberRef::new("R$id", "f0", "I")),
            Insn::InvokeStatic(MemberRef::new("R$id", "staticInit0", "()V")),
            Insn::Return,
        ]
    );

    let last = parsed.method("staticInit1").unwrap().code().unwrap();
    assert_eq!(last.insns().last(), Some(&Insn::Return));
    assert!(!last.insns().any(|i| matches!(i, Insn::InvokeStatic(_))));
}

#[test]
fn chain_loads_shared_id_in_every_method() {
    let shared = SharedIdDescriptor::new("com.example.RPackage", 0x7f00_0000);
    let fields = sized(&[40_000, 40_000]);
    let methods = split("R$id", &fields, true).unwrap();

    let mut class = ClassWriter::new(access::PUBLIC, "R$id", "java/lang/Object");
    write_chain(&mut class, "R$id", &fields, &methods, Some(&shared));
    let parsed = ClassFile::parse(&class.to_bytes().unwrap()).unwrap();

    let load = Insn::GetStatic(MemberRef::new("com/example/RPackage", "packageId", "I"));
    for method in &parsed.methods {
        let code = method.code().unwrap();
        let insns: Vec<_> = code.insns().take(2).cloned().collect();
        assert_eq!(insns, vec![load.clone(), Insn::IStore(1)], "{}", method.name);
        assert_eq!(code.max_locals, 2);
    }
}
