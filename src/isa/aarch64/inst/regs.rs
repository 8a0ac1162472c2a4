//! AArch64 ISA definitions: registers.

use crate::machinst::{Reg, RegClass, Writable};

use super::args::{ElementSize, OperandSize, ScalarSize, VectorSize};

/// Get a reference to a GPR (integer register). Index 31 is the shared
/// encoding of `xzr` and `sp`; which one an operand position denotes is a
/// property of the instruction format, as in hardware.
pub fn xreg(num: u8) -> Reg {
    Reg::new(RegClass::Int, num)
}

/// Get a writable reference to a GPR.
pub fn writable_xreg(num: u8) -> Writable<Reg> {
    Writable::from_reg(xreg(num))
}

/// Get a reference to a SIMD/FP register. The same file holds the SVE `z`
/// registers.
pub fn vreg(num: u8) -> Reg {
    Reg::new(RegClass::Float, num)
}

/// Get a writable reference to a SIMD/FP register.
pub fn writable_vreg(num: u8) -> Writable<Reg> {
    Writable::from_reg(vreg(num))
}

/// Get a reference to an SVE predicate register (p0..p15).
pub fn preg(num: u8) -> Reg {
    Reg::new(RegClass::Predicate, num)
}

/// Get a writable reference to an SVE predicate register.
pub fn writable_preg(num: u8) -> Writable<Reg> {
    Writable::from_reg(preg(num))
}

/// Get a reference to the zero-register (xzr/wzr).
pub fn zero_reg() -> Reg {
    xreg(31)
}

/// Get a reference to the stack pointer.
pub fn stack_reg() -> Reg {
    xreg(31)
}

/// Get a writable reference to the stack pointer.
pub fn writable_stack_reg() -> Writable<Reg> {
    Writable::from_reg(stack_reg())
}

/// Get a reference to the link register (x30).
pub fn link_reg() -> Reg {
    xreg(30)
}

//=============================================================================
// Pretty-printing of registers.

/// Show a GPR at the given operand size, reading index 31 as the zero
/// register.
pub fn show_ireg_sized(reg: Reg, size: OperandSize) -> String {
    debug_assert_eq!(reg.class(), RegClass::Int);
    match (reg.hw_enc(), size) {
        (31, OperandSize::Size64) => "xzr".to_string(),
        (31, OperandSize::Size32) => "wzr".to_string(),
        (n, OperandSize::Size64) => format!("x{}", n),
        (n, OperandSize::Size32) => format!("w{}", n),
    }
}

/// Show a 64-bit GPR, reading index 31 as the stack pointer. Used for
/// address bases and the PAC modifier position.
pub fn show_ireg_sp(reg: Reg) -> String {
    debug_assert_eq!(reg.class(), RegClass::Int);
    match reg.hw_enc() {
        31 => "sp".to_string(),
        n => format!("x{}", n),
    }
}

/// Show a SIMD/FP register as a scalar of the given size (`b`/`h`/`s`/`d`/
/// `q` views).
pub fn show_vreg_scalar(reg: Reg, size: ScalarSize) -> String {
    debug_assert_eq!(reg.class(), RegClass::Float);
    let prefix = match size {
        ScalarSize::Size8 => "b",
        ScalarSize::Size16 => "h",
        ScalarSize::Size32 => "s",
        ScalarSize::Size64 => "d",
        ScalarSize::Size128 => "q",
    };
    format!("{}{}", prefix, reg.hw_enc())
}

/// Show a SIMD/FP register with a vector arrangement suffix, e.g. `v3.4s`.
pub fn show_vreg_vector(reg: Reg, size: VectorSize) -> String {
    debug_assert_eq!(reg.class(), RegClass::Float);
    format!("v{}.{}", reg.hw_enc(), size.suffix())
}

/// Show a SIMD/FP register as an SVE vector with an element-size suffix,
/// e.g. `z3.s`.
pub fn show_zreg(reg: Reg, size: ElementSize) -> String {
    debug_assert_eq!(reg.class(), RegClass::Float);
    format!("z{}.{}", reg.hw_enc(), size.suffix())
}

/// Show an SVE predicate register, e.g. `p3`.
pub fn show_preg(reg: Reg) -> String {
    debug_assert_eq!(reg.class(), RegClass::Predicate);
    format!("p{}", reg.hw_enc())
}

/// Show an SVE predicate register with an element-size suffix, e.g. `p3.s`.
pub fn show_preg_sized(reg: Reg, size: ElementSize) -> String {
    debug_assert_eq!(reg.class(), RegClass::Predicate);
    format!("p{}.{}", reg.hw_enc(), size.suffix())
}
