use regmask::{bitmask, ModifyScope, RegisterStorage};
use regmask_mmio::{mmio_device, MmioRegister};

mmio_device! {
    doc_name: "test UART",
    struct_name: TestUart,
    size: 0x10,
    regs: {
        data: u32 = rw,
        status: u32 = ro,
        fifo: u32 = wo,
        control: u32 = rw,
    },
}

/// Backing memory standing in for the device's register block.
#[derive(Default)]
#[repr(C)]
struct TestUartMemory {
    data: u32,
    status: u32,
    fifo: u32,
    control: u32,
}

fn device_over(memory: &mut TestUartMemory) -> TestUart {
    unsafe { TestUart::from_base(memory as *mut TestUartMemory as *mut ()) }
}

#[test]
fn test_read_and_write_accessors() {
    let mut memory = TestUartMemory::default();
    memory.status = 0xA5;
    let mut uart = device_over(&mut memory);

    assert_eq!(uart.read_status(), 0xA5);

    uart.write_data(0x55);
    assert_eq!(memory.data, 0x55);
    assert_eq!(uart.read_data(), 0x55);

    uart.write_fifo(0x77);
    assert_eq!(memory.fifo, 0x77);
}

#[test]
fn test_modify_batches_field_updates() {
    let mut memory = TestUartMemory::default();
    let mut uart = device_over(&mut memory);

    uart.write_control(0x0000_0081);
    uart.modify_control(|scope| {
        scope
            .insert(bitmask!(u32; 4, 11), 0x9C)
            .clear(bitmask!(u32; 0));
    });
    assert_eq!(uart.read_control(), 0x0000_09C0);
    assert_eq!(memory.control, 0x0000_09C0);
}

#[test]
fn test_modify_without_mutation_writes_back_unchanged() {
    let mut memory = TestUartMemory::default();
    memory.data = 0xDEAD_BEEF;
    let mut uart = device_over(&mut memory);

    uart.modify_data(|_scope| {});
    assert_eq!(memory.data, 0xDEAD_BEEF);
}

#[test]
fn test_modify_extract_sees_shadow() {
    let mut memory = TestUartMemory::default();
    memory.control = 0x0000_0FF0;
    let mut uart = device_over(&mut memory);

    uart.modify_control(|scope| {
        let baud = scope.extract(bitmask!(u32; 4, 11));
        scope.insert(bitmask!(u32; 4, 11), baud >> 1);
    });
    assert_eq!(memory.control, 0x0000_07F0);
}

#[test]
fn test_volatile_cell_as_plain_storage() {
    let mut word: u32 = 0x0F;
    let mut reg = unsafe { MmioRegister::from_ptr(&mut word) };

    assert_eq!(reg.read(), 0x0F);
    reg.write(0xF0);
    assert_eq!(reg.read(), 0xF0);

    {
        let mut scope = ModifyScope::bind(&mut reg);
        scope.set(bitmask!(u32; 0, 3));
    }
    assert_eq!(word, 0xFF);
}
