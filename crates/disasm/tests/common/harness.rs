//! Reference batches and logging setup shared by the tests.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

/// Load address of the reference batches.
pub const PROJECT_START: u32 = 0x9A040;

/// Eleven-word reference program.
pub const PROJECT_WORDS: [u32; 11] = [
    0x032B_A020,
    0x8CE9_0014,
    0x12A9_0003,
    0x022D_A822,
    0xADB3_0020,
    0x0269_7824,
    0xAE8F_FFF4,
    0x018C_6020,
    0x02A4_A825,
    0x158F_FFF7,
    0x8ECD_FFF0,
];

/// Expected listing of `PROJECT_WORDS` at `PROJECT_START`.
pub const PROJECT_LISTING: [&str; 11] = [
    "0x9a040 add $20, $25, $11",
    "0x9a044 lw $9, 20($7)",
    "0x9a048 beq $21, $9, address 0x9a058",
    "0x9a04c sub $21, $17, $13",
    "0x9a050 sw $19, 32($13)",
    "0x9a054 and $15, $19, $9",
    "0x9a058 sw $15, -12($20)",
    "0x9a05c add $12, $12, $12",
    "0x9a060 or $21, $21, $4",
    "0x9a064 bne $12, $15, address 0x9a044",
    "0x9a068 lw $13, -16($22)",
];

static TRACING: Once = Once::new();

/// Installs a test-writer subscriber once, filtered by `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
