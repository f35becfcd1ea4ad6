use std::cell::Cell;
use std::panic::{catch_unwind, AssertUnwindSafe};

use regmask::{bitmask, ModifyScope, RegisterStorage};

/// An instrumented register stub that counts storage accesses.
#[derive(Default)]
struct CountingRegister {
    value: Cell<u32>,
    reads: Cell<usize>,
    writes: Cell<usize>,
}

impl RegisterStorage for CountingRegister {
    type Word = u32;

    fn read(&self) -> u32 {
        self.reads.set(self.reads.get() + 1);
        self.value.get()
    }

    fn write(&mut self, value: u32) {
        self.writes.set(self.writes.get() + 1);
        self.value.set(value);
    }
}

#[test]
fn test_empty_scope_writes_back_unchanged() {
    let mut reg = CountingRegister::default();
    reg.value.set(0x1234_5678);

    let scope = ModifyScope::bind(&mut reg);
    drop(scope);

    assert_eq!(reg.reads.get(), 1);
    assert_eq!(reg.writes.get(), 1);
    assert_eq!(reg.value.get(), 0x1234_5678);
}

#[test]
fn test_single_operation_commits_once() {
    let mut reg = CountingRegister::default();
    {
        let mut scope = ModifyScope::bind(&mut reg);
        scope.set(bitmask!(u32; 0));
    }
    assert_eq!(reg.reads.get(), 1);
    assert_eq!(reg.writes.get(), 1);
    assert_eq!(reg.value.get(), 1);
}

#[test]
fn test_many_operations_commit_once() {
    let mut reg = CountingRegister::default();
    {
        let mut scope = ModifyScope::bind(&mut reg);
        scope
            .insert(bitmask!(u32; 4, 11), 0xFF)
            .set(bitmask!(u32; 16))
            .clear(bitmask!(u32; 5));
    }
    assert_eq!(reg.reads.get(), 1);
    assert_eq!(reg.writes.get(), 1);
    assert_eq!(reg.value.get(), 0x0001_0FD0);
}

#[test]
fn test_intermediate_states_never_reach_storage() {
    let mut reg = CountingRegister::default();
    {
        let mut scope = ModifyScope::bind(&mut reg);
        // The all-ones intermediate state stays in the shadow copy; only the
        // final value is ever written, as the write count shows.
        scope.set(bitmask!(u32; 0, 31));
        scope.insert(bitmask!(u32; 0, 31), 0x0000_00FF);
    }
    assert_eq!(reg.writes.get(), 1);
    assert_eq!(reg.value.get(), 0x0000_00FF);
}

#[test]
fn test_explicit_commit() {
    let mut reg = CountingRegister::default();
    let mut scope = ModifyScope::bind(&mut reg);
    scope.set(bitmask!(u32; 7));
    scope.commit();
    assert_eq!(reg.writes.get(), 1);
    assert_eq!(reg.value.get(), 0x80);
}

#[test]
fn test_commit_on_unwind() {
    let mut reg = CountingRegister::default();
    let result = catch_unwind(AssertUnwindSafe(|| {
        let mut scope = ModifyScope::bind(&mut reg);
        scope.set(bitmask!(u32; 7));
        panic!("abrupt exit");
    }));
    assert!(result.is_err());
    assert_eq!(reg.reads.get(), 1);
    assert_eq!(reg.writes.get(), 1);
    assert_eq!(reg.value.get(), 0x80);
}

#[test]
fn test_extract_sees_batched_mutations() {
    let mut reg = CountingRegister::default();
    reg.value.set(0x0000_0FF0);

    let mut scope = ModifyScope::bind(&mut reg);
    assert_eq!(scope.extract(bitmask!(u32; 4, 11)), 0xFF);
    scope.insert(bitmask!(u32; 4, 11), 0x12);
    assert_eq!(scope.extract(bitmask!(u32; 4, 11)), 0x12);
    scope.commit();

    assert_eq!(reg.reads.get(), 1);
    assert_eq!(reg.value.get(), 0x0000_0120);
}

#[test]
fn test_insert_truncates_in_scope() {
    let mut reg = CountingRegister::default();
    {
        let mut scope = ModifyScope::bind(&mut reg);
        scope.insert(bitmask!(u32; 4, 11), 0xABCD);
    }
    assert_eq!(reg.value.get(), 0x0000_0CD0);
}

#[test]
fn test_plain_word_storage() {
    let mut control: u16 = 0b0101;
    {
        let mut scope = ModifyScope::bind(&mut control);
        scope.clear(bitmask!(u16; 0));
    }
    assert_eq!(control, 0b0100);

    let mut scope = ModifyScope::bind(&mut control);
    scope.set(bitmask!(u16; 0));
    scope.commit();
    assert_eq!(control, 0b0101);
}
