//! Shared helpers for emission tests.

use crate::binemit::{CodeOffset, CodeSink};

/// A sink that accumulates emitted bytes and renders them as the hex
/// strings checked in next to each test case. Bytes appear in emission
/// (little-endian) order, so a `ret` (word `0xD65F03C0`) stringifies as
/// `"C0035FD6"`.
pub struct TestCodeSink {
    bytes: Vec<u8>,
}

impl TestCodeSink {
    /// Create a new TestCodeSink.
    pub fn new() -> TestCodeSink {
        TestCodeSink { bytes: vec![] }
    }

    /// Return the code emitted to this sink as a hex string.
    pub fn stringify(&self) -> String {
        use std::fmt::Write;
        let mut s = String::with_capacity(self.bytes.len() * 2);
        for b in &self.bytes {
            write!(&mut s, "{:02X}", b).unwrap();
        }
        s
    }
}

impl CodeSink for TestCodeSink {
    fn offset(&self) -> CodeOffset {
        self.bytes.len() as CodeOffset
    }

    fn put1(&mut self, x: u8) {
        self.bytes.push(x);
    }

    fn put2(&mut self, x: u16) {
        self.bytes.extend_from_slice(&x.to_le_bytes());
    }

    fn put4(&mut self, x: u32) {
        self.bytes.extend_from_slice(&x.to_le_bytes());
    }

    fn put8(&mut self, x: u64) {
        self.bytes.extend_from_slice(&x.to_le_bytes());
    }
}
