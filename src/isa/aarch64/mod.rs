//! AArch64 Instruction Set Architecture.

pub mod inst;
