use super::builder::program::ProgramBuilder;
use super::harness::TestContext;
use ls8_core::core::arch::CpuState;

#[test]
fn builder_encodes_three_byte_instruction() {
    let program = ProgramBuilder::new().ldi(3, 42).build();
    assert_eq!(program, vec![0b1001_1001, 3, 42]);
}

#[test]
fn builder_org_pads_with_zeros() {
    let program = ProgramBuilder::new().hlt().org(4).hlt().build();
    assert_eq!(program, vec![0b0000_0001, 0, 0, 0, 0b0000_0001]);
}

#[test]
fn builder_here_tracks_address() {
    let b = ProgramBuilder::new().ldi(0, 1).prn(0);
    assert_eq!(b.here(), 5);
}

#[test]
fn builder_source_is_one_byte_per_line() {
    let src = ProgramBuilder::new().prn(1).to_source();
    assert_eq!(src, "01000011\n00000001\n");
}

#[test]
fn harness_starts_idle_with_program_loaded() {
    let ctx = TestContext::new(&ProgramBuilder::new().hlt().build());
    assert_eq!(ctx.cpu().state, CpuState::Idle);
    assert_eq!(ctx.cpu().ram.read(0), Ok(0b0000_0001));
    assert_eq!(ctx.pc(), 0);
}
