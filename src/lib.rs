//! AArch64 binary code emission library.
//!
//! This crate turns typed machine instructions (`isa::aarch64::inst::Inst`)
//! into their packed 32-bit encodings. Operands are concrete registers and
//! witness-typed immediates; instruction selection, register allocation and
//! relocation are out of scope. Coverage follows the base integer ISA plus
//! the SIMD/FP, SVE and pointer-authentication instruction families.
#![deny(missing_docs)]

pub mod binemit;
pub mod isa;
pub mod machinst;
pub mod result;

pub use crate::machinst::buffer::CodeBuffer;
pub use crate::machinst::{Reg, RegClass, Writable};
pub use crate::result::{CodegenError, CodegenResult};
