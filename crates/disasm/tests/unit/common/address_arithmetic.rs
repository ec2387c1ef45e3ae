//! # Address Arithmetic Tests
//!
//! Verifies construction, stepping, signed displacement, and hex rendering
//! of [`InstAddr`], including wrap-around at the top of the 32-bit space.

use mips_disasm::common::InstAddr;
use proptest::prelude::*;
use rstest::rstest;

#[test]
fn inst_addr_new_and_val() {
    let a = InstAddr::new(0x9A040);
    assert_eq!(a.val(), 0x9A040);
    assert_eq!(InstAddr::from(0x9A040), a);
}

#[test]
fn inst_addr_next_steps_one_word() {
    assert_eq!(InstAddr::new(0x9A040).next(), InstAddr::new(0x9A044));
}

#[test]
fn inst_addr_next_wraps() {
    assert_eq!(InstAddr::new(0xFFFF_FFFC).next(), InstAddr::new(0));
}

#[rstest]
#[case(0x9A040, 0, 0x9A040)]
#[case(0x9A040, 1, 0x9A044)]
#[case(0x9A040, 10, 0x9A068)]
#[case(0xFFFF_FFF8, 3, 0x0000_0004)]
#[case(0x0000_0001, 2, 0x0000_0009)]
fn inst_addr_nth(#[case] base: u32, #[case] index: usize, #[case] expected: u32) {
    assert_eq!(InstAddr::new(base).nth(index), InstAddr::new(expected));
}

#[rstest]
#[case(0x9A04C, 12, 0x9A058)]
#[case(0x9A068, -36, 0x9A044)]
#[case(0x0000_0000, -4, 0xFFFF_FFFC)]
fn inst_addr_offset(#[case] base: u32, #[case] bytes: i32, #[case] expected: u32) {
    assert_eq!(InstAddr::new(base).offset(bytes), InstAddr::new(expected));
}

#[rstest]
#[case(0x9A040, "0x9a040")]
#[case(0, "0x0")]
#[case(0xFFFF_FFFC, "0xfffffffc")]
fn inst_addr_display_is_unpadded_lowercase(#[case] addr: u32, #[case] text: &str) {
    assert_eq!(InstAddr::new(addr).to_string(), text);
}

#[test]
fn inst_addr_ordering() {
    assert!(InstAddr::new(0x1000) < InstAddr::new(0x1004));
}

proptest! {
    #[test]
    fn nth_matches_wrapping_formula(base in any::<u32>(), index in 0usize..1_000_000) {
        let expected = base.wrapping_add((index as u32).wrapping_mul(4));
        prop_assert_eq!(InstAddr::new(base).nth(index).val(), expected);
    }

    #[test]
    fn nth_one_equals_next(base in any::<u32>()) {
        prop_assert_eq!(InstAddr::new(base).nth(1), InstAddr::new(base).next());
    }
}
