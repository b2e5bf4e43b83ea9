use rclass_bytecode::{ClassWriter, MemberRef, access};
use rclass_core::{JAVA_LANG_OBJECT, SOURCE_FILE_NAME};

pub(crate) const CLASS_ACCESS: u16 = access::PUBLIC | access::FINAL | access::SUPER;
pub(crate) const INNER_ACCESS: u16 = access::PUBLIC | access::FINAL | access::STATIC;

/// A public final class with `SourceFile` and a public no-arg constructor.
pub(crate) fn class_shell(name: &str) -> ClassWriter {
    let mut class = ClassWriter::new(CLASS_ACCESS, name, JAVA_LANG_OBJECT);
    class.source_file(SOURCE_FILE_NAME);
    class
        .method(access::PUBLIC, "<init>", "()V")
        .code()
        .aload(0)
        .invoke_special(MemberRef::new(JAVA_LANG_OBJECT, "<init>", "()V"))
        .return_void();
    class
}
