//! # Memory Tests
//!
//! RAM is zero-initialised, fixed in size, and faults on every out-of-range access.

use ls8_core::common::Fault;
use ls8_core::soc::Ram;
use proptest::prelude::*;

#[test]
fn test_default_is_256_zeroed_bytes() {
    let ram = Ram::default();
    assert_eq!(ram.len(), 256);
    assert!(!ram.is_empty());
    assert!(ram.as_slice().iter().all(|&b| b == 0));
}

#[test]
fn test_read_back_written_byte() {
    let mut ram = Ram::new(16);
    ram.write(15, 0xAB).unwrap();
    assert_eq!(ram.read(15), Ok(0xAB));
}

#[test]
fn test_read_past_end_faults() {
    let ram = Ram::new(16);
    assert_eq!(
        ram.read(16),
        Err(Fault::MemoryOutOfBounds {
            addr: 16,
            capacity: 16
        })
    );
}

#[test]
fn test_write_past_end_faults_and_changes_nothing() {
    let mut ram = Ram::new(4);
    let before = ram.clone();
    assert!(ram.write(4, 1).is_err());
    assert_eq!(ram, before);
}

#[test]
fn test_zero_sized_ram_rejects_everything() {
    let ram = Ram::new(0);
    assert!(ram.is_empty());
    assert!(ram.read(0).is_err());
}

#[test]
fn test_write_slice_within_bounds() {
    let mut ram = Ram::new(8);
    ram.write_slice(2, &[1, 2, 3]).unwrap();
    assert_eq!(&ram.as_slice()[..6], &[0, 0, 1, 2, 3, 0]);
}

#[test]
fn test_write_slice_overflow_writes_nothing() {
    let mut ram = Ram::new(4);
    let err = ram.write_slice(2, &[9, 9, 9]).unwrap_err();
    assert_eq!(
        err,
        Fault::MemoryOutOfBounds {
            addr: 4,
            capacity: 4
        }
    );
    assert_eq!(ram.as_slice(), &[0, 0, 0, 0]);
}

#[test]
fn test_dump_prints_rows_of_sixteen() {
    let mut ram = Ram::new(32);
    ram.write(16, 0xFF).unwrap();
    let dump = ram.dump();
    let lines: Vec<&str> = dump.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[1].starts_with("0x10: ff"));
}

#[test]
fn test_debug_does_not_dump_contents() {
    let text = format!("{:?}", Ram::default());
    assert!(text.contains("capacity: 256"));
}

proptest! {
    #[test]
    fn prop_in_range_access_round_trips(addr in 0usize..256, val in any::<u8>()) {
        let mut ram = Ram::default();
        ram.write(addr, val).unwrap();
        prop_assert_eq!(ram.read(addr), Ok(val));
    }

    #[test]
    fn prop_out_of_range_always_faults(addr in 256usize..10_000) {
        let mut ram = Ram::default();
        prop_assert!(ram.read(addr).is_err());
        prop_assert!(ram.write(addr, 0).is_err());
    }
}
