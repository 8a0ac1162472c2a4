//! AArch64 ISA definitions: instruction arguments.

use crate::machinst::{MachLabel, PrettyPrint, Reg, Writable};

use super::imms::{SImm7Scaled, SImm9, UImm12Scaled};
use super::regs::{show_ireg_sized, show_ireg_sp};

/// The size of an integer operand: a 32-bit or 64-bit register view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperandSize {
    /// A 32-bit (`w`) view.
    Size32,
    /// A 64-bit (`x`) view.
    Size64,
}

impl OperandSize {
    /// Is the operand size 64 bits?
    pub fn is64(self) -> bool {
        self == OperandSize::Size64
    }

    /// The `sf` bit selecting the 64-bit form of most integer encodings.
    pub fn sf_bit(self) -> u32 {
        match self {
            OperandSize::Size32 => 0,
            OperandSize::Size64 => 1,
        }
    }

    /// Register-size in bits.
    pub fn bits(self) -> u8 {
        match self {
            OperandSize::Size32 => 32,
            OperandSize::Size64 => 64,
        }
    }
}

/// The size of a scalar SIMD/FP operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScalarSize {
    /// 8-bit (`b`) view.
    Size8,
    /// 16-bit (`h`) view.
    Size16,
    /// 32-bit (`s`) view.
    Size32,
    /// 64-bit (`d`) view.
    Size64,
    /// 128-bit (`q`) view.
    Size128,
}

impl ScalarSize {
    /// Size in bytes.
    pub fn bytes(self) -> u8 {
        match self {
            ScalarSize::Size8 => 1,
            ScalarSize::Size16 => 2,
            ScalarSize::Size32 => 4,
            ScalarSize::Size64 => 8,
            ScalarSize::Size128 => 16,
        }
    }

    /// The `type` field of scalar FP data-processing encodings.
    pub fn ftype(self) -> u32 {
        match self {
            ScalarSize::Size16 => 0b11,
            ScalarSize::Size32 => 0b00,
            ScalarSize::Size64 => 0b01,
            _ => panic!("bad FP operand size: {:?}", self),
        }
    }
}

/// A vector operand arrangement: lane size and lane count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VectorSize {
    /// 8 lanes of 8 bits, 64-bit vector.
    Size8x8,
    /// 16 lanes of 8 bits.
    Size8x16,
    /// 4 lanes of 16 bits, 64-bit vector.
    Size16x4,
    /// 8 lanes of 16 bits.
    Size16x8,
    /// 2 lanes of 32 bits, 64-bit vector.
    Size32x2,
    /// 4 lanes of 32 bits.
    Size32x4,
    /// 2 lanes of 64 bits.
    Size64x2,
}

impl VectorSize {
    /// The `Q` (full-width) and `size` (lane-size) encoding fields.
    pub fn enc_size(self) -> (u32, u32) {
        match self {
            VectorSize::Size8x8 => (0b0, 0b00),
            VectorSize::Size8x16 => (0b1, 0b00),
            VectorSize::Size16x4 => (0b0, 0b01),
            VectorSize::Size16x8 => (0b1, 0b01),
            VectorSize::Size32x2 => (0b0, 0b10),
            VectorSize::Size32x4 => (0b1, 0b10),
            VectorSize::Size64x2 => (0b1, 0b11),
        }
    }

    /// Lane size in bits.
    pub fn lane_bits(self) -> u8 {
        match self {
            VectorSize::Size8x8 | VectorSize::Size8x16 => 8,
            VectorSize::Size16x4 | VectorSize::Size16x8 => 16,
            VectorSize::Size32x2 | VectorSize::Size32x4 => 32,
            VectorSize::Size64x2 => 64,
        }
    }

    /// The arrangement suffix used in assembly, e.g. `4s` in `v1.4s`.
    pub fn suffix(self) -> &'static str {
        match self {
            VectorSize::Size8x8 => "8b",
            VectorSize::Size8x16 => "16b",
            VectorSize::Size16x4 => "4h",
            VectorSize::Size16x8 => "8h",
            VectorSize::Size32x2 => "2s",
            VectorSize::Size32x4 => "4s",
            VectorSize::Size64x2 => "2d",
        }
    }
}

/// An SVE element size. SVE operands carry an element size but no lane
/// count; the vector length is implementation-defined.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementSize {
    /// Byte elements.
    Size8,
    /// Halfword elements.
    Size16,
    /// Word elements.
    Size32,
    /// Doubleword elements.
    Size64,
}

impl ElementSize {
    /// The two-bit `size` field of most SVE encodings.
    pub fn bits(self) -> u32 {
        match self {
            ElementSize::Size8 => 0b00,
            ElementSize::Size16 => 0b01,
            ElementSize::Size32 => 0b10,
            ElementSize::Size64 => 0b11,
        }
    }

    /// Element size in bytes.
    pub fn bytes(self) -> u8 {
        1 << self.bits()
    }

    /// The element suffix on `z`/`p` registers, e.g. `s` in `z1.s`.
    pub fn suffix(self) -> &'static str {
        match self {
            ElementSize::Size8 => "b",
            ElementSize::Size16 => "h",
            ElementSize::Size32 => "s",
            ElementSize::Size64 => "d",
        }
    }
}

/// A shift operator for a register or immediate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ShiftOp {
    /// Logical shift left.
    LSL = 0b00,
    /// Logical shift right.
    LSR = 0b01,
    /// Arithmetic shift right.
    ASR = 0b10,
    /// Rotate right.
    ROR = 0b11,
}

impl ShiftOp {
    /// Get the encoding of this shift operator.
    pub fn bits(self) -> u8 {
        self as u8
    }
}

/// A shift operator with an amount.
#[derive(Clone, Copy, Debug)]
pub struct ShiftOpAndAmt {
    op: ShiftOp,
    shift: u8,
}

impl ShiftOpAndAmt {
    /// Maximum shift for shifted-register operands.
    pub const MAX_SHIFT: u8 = 63;

    /// Create a new shift operator with an amount.
    pub fn new(op: ShiftOp, shift: u8) -> ShiftOpAndAmt {
        assert!(shift <= Self::MAX_SHIFT);
        ShiftOpAndAmt { op, shift }
    }

    /// Get the shift op.
    pub fn op(&self) -> ShiftOp {
        self.op
    }

    /// Get the shift amount.
    pub fn amt(&self) -> u8 {
        self.shift
    }
}

impl PrettyPrint for ShiftOpAndAmt {
    fn show(&self) -> String {
        let op = match self.op {
            ShiftOp::LSL => "lsl",
            ShiftOp::LSR => "lsr",
            ShiftOp::ASR => "asr",
            ShiftOp::ROR => "ror",
        };
        format!("{} #{}", op, self.shift)
    }
}

/// An extend operator for a register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ExtendOp {
    /// Unsigned extend byte.
    UXTB = 0b000,
    /// Unsigned extend halfword.
    UXTH = 0b001,
    /// Unsigned extend word.
    UXTW = 0b010,
    /// Unsigned extend doubleword (no-op width change).
    UXTX = 0b011,
    /// Signed extend byte.
    SXTB = 0b100,
    /// Signed extend halfword.
    SXTH = 0b101,
    /// Signed extend word.
    SXTW = 0b110,
    /// Signed extend doubleword.
    SXTX = 0b111,
}

impl ExtendOp {
    /// Encoding of this extend op.
    pub fn bits(self) -> u8 {
        self as u8
    }

    /// Does this extend op read a 32-bit source view?
    pub fn is_32bit_source(self) -> bool {
        !matches!(self, ExtendOp::UXTX | ExtendOp::SXTX)
    }
}

impl PrettyPrint for ExtendOp {
    fn show(&self) -> String {
        let s = match self {
            ExtendOp::UXTB => "uxtb",
            ExtendOp::UXTH => "uxth",
            ExtendOp::UXTW => "uxtw",
            ExtendOp::UXTX => "uxtx",
            ExtendOp::SXTB => "sxtb",
            ExtendOp::SXTH => "sxth",
            ExtendOp::SXTW => "sxtw",
            ExtendOp::SXTX => "sxtx",
        };
        s.to_string()
    }
}

/// Condition for a conditional instruction or branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Cond {
    /// Equal.
    Eq = 0,
    /// Not equal.
    Ne = 1,
    /// Unsigned higher or same (carry set).
    Hs = 2,
    /// Unsigned lower (carry clear).
    Lo = 3,
    /// Minus, negative.
    Mi = 4,
    /// Plus, positive or zero.
    Pl = 5,
    /// Signed overflow.
    Vs = 6,
    /// No signed overflow.
    Vc = 7,
    /// Unsigned higher.
    Hi = 8,
    /// Unsigned lower or same.
    Ls = 9,
    /// Signed greater or equal.
    Ge = 10,
    /// Signed less than.
    Lt = 11,
    /// Signed greater than.
    Gt = 12,
    /// Signed less or equal.
    Le = 13,
    /// Always executed.
    Al = 14,
    /// Always executed (second encoding).
    Nv = 15,
}

impl Cond {
    /// Return the inverted condition.
    pub fn invert(self) -> Cond {
        match self {
            Cond::Eq => Cond::Ne,
            Cond::Ne => Cond::Eq,
            Cond::Hs => Cond::Lo,
            Cond::Lo => Cond::Hs,
            Cond::Mi => Cond::Pl,
            Cond::Pl => Cond::Mi,
            Cond::Vs => Cond::Vc,
            Cond::Vc => Cond::Vs,
            Cond::Hi => Cond::Ls,
            Cond::Ls => Cond::Hi,
            Cond::Ge => Cond::Lt,
            Cond::Lt => Cond::Ge,
            Cond::Gt => Cond::Le,
            Cond::Le => Cond::Gt,
            Cond::Al => Cond::Nv,
            Cond::Nv => Cond::Al,
        }
    }

    /// Return the machine encoding of this condition.
    pub fn bits(self) -> u32 {
        self as u32
    }
}

impl PrettyPrint for Cond {
    fn show(&self) -> String {
        let s = match self {
            Cond::Eq => "eq",
            Cond::Ne => "ne",
            Cond::Hs => "hs",
            Cond::Lo => "lo",
            Cond::Mi => "mi",
            Cond::Pl => "pl",
            Cond::Vs => "vs",
            Cond::Vc => "vc",
            Cond::Hi => "hi",
            Cond::Ls => "ls",
            Cond::Ge => "ge",
            Cond::Lt => "lt",
            Cond::Gt => "gt",
            Cond::Le => "le",
            Cond::Al => "al",
            Cond::Nv => "nv",
        };
        s.to_string()
    }
}

/// A reference to some memory address.
#[derive(Clone, Copy, Debug)]
pub enum MemLabel {
    /// An address known as an offset from the instruction itself.
    PCRel(i32),
}

/// A memory addressing mode for a scalar load or store.
#[derive(Clone, Copy, Debug)]
pub enum AMode {
    /// Base register plus unscaled signed 9-bit immediate (`ldur` family).
    Unscaled(Reg, SImm9),
    /// Base register plus scaled unsigned 12-bit immediate.
    UnsignedOffset(Reg, UImm12Scaled),
    /// Pre-indexed: base is updated before the access.
    PreIndexed(Writable<Reg>, SImm9),
    /// Post-indexed: base is updated after the access.
    PostIndexed(Writable<Reg>, SImm9),
    /// Base plus 64-bit index register, no scaling.
    RegReg(Reg, Reg),
    /// Base plus 64-bit index register scaled by the access size.
    RegScaled(Reg, Reg),
    /// Base plus extended 32-bit index register, no scaling.
    RegExtended(Reg, Reg, ExtendOp),
    /// Base plus extended 32-bit index register scaled by the access size.
    RegScaledExtended(Reg, Reg, ExtendOp),
    /// A PC-relative literal address.
    Label(MemLabel),
}

impl AMode {
    /// A memory reference to the address in a register, with no offset.
    pub fn reg(reg: Reg) -> AMode {
        AMode::UnsignedOffset(reg, UImm12Scaled::zero(1))
    }

    /// Render this addressing mode. `access_bytes` determines the printed
    /// scale amount for the scaled register forms.
    pub fn show(&self, access_bytes: u8) -> String {
        match self {
            &AMode::Unscaled(rn, simm9) => {
                if simm9.value() != 0 {
                    format!("[{}, #{}]", show_ireg_sp(rn), simm9.value())
                } else {
                    format!("[{}]", show_ireg_sp(rn))
                }
            }
            &AMode::UnsignedOffset(rn, uimm12) => {
                if uimm12.value() != 0 {
                    format!("[{}, #{}]", show_ireg_sp(rn), uimm12.value())
                } else {
                    format!("[{}]", show_ireg_sp(rn))
                }
            }
            &AMode::PreIndexed(rn, simm9) => {
                format!("[{}, #{}]!", show_ireg_sp(rn.to_reg()), simm9.value())
            }
            &AMode::PostIndexed(rn, simm9) => {
                format!("[{}], #{}", show_ireg_sp(rn.to_reg()), simm9.value())
            }
            &AMode::RegReg(rn, rm) => {
                format!(
                    "[{}, {}]",
                    show_ireg_sp(rn),
                    show_ireg_sized(rm, OperandSize::Size64)
                )
            }
            &AMode::RegScaled(rn, rm) => {
                format!(
                    "[{}, {}, lsl #{}]",
                    show_ireg_sp(rn),
                    show_ireg_sized(rm, OperandSize::Size64),
                    shift_for_bytes(access_bytes)
                )
            }
            &AMode::RegExtended(rn, rm, ext) => {
                let size = index_operand_size(ext);
                format!(
                    "[{}, {}, {}]",
                    show_ireg_sp(rn),
                    show_ireg_sized(rm, size),
                    ext.show()
                )
            }
            &AMode::RegScaledExtended(rn, rm, ext) => {
                let size = index_operand_size(ext);
                format!(
                    "[{}, {}, {} #{}]",
                    show_ireg_sp(rn),
                    show_ireg_sized(rm, size),
                    ext.show(),
                    shift_for_bytes(access_bytes)
                )
            }
            &AMode::Label(MemLabel::PCRel(off)) => format!("pc+{}", off),
        }
    }
}

fn shift_for_bytes(bytes: u8) -> u8 {
    debug_assert!(bytes.is_power_of_two());
    bytes.trailing_zeros() as u8
}

fn index_operand_size(ext: ExtendOp) -> OperandSize {
    if ext.is_32bit_source() {
        OperandSize::Size32
    } else {
        OperandSize::Size64
    }
}

/// A memory addressing mode for a load-pair or store-pair.
#[derive(Clone, Copy, Debug)]
pub enum PairAMode {
    /// Base register plus scaled signed 7-bit immediate.
    SignedOffset(Reg, SImm7Scaled),
    /// Pre-indexed: base is updated before the access.
    PreIndexed(Writable<Reg>, SImm7Scaled),
    /// Post-indexed: base is updated after the access.
    PostIndexed(Writable<Reg>, SImm7Scaled),
}

impl PairAMode {
    /// Render this addressing mode.
    pub fn show(&self) -> String {
        match self {
            &PairAMode::SignedOffset(rn, simm7) => {
                if simm7.value() != 0 {
                    format!("[{}, #{}]", show_ireg_sp(rn), simm7.value())
                } else {
                    format!("[{}]", show_ireg_sp(rn))
                }
            }
            &PairAMode::PreIndexed(rn, simm7) => {
                format!("[{}, #{}]!", show_ireg_sp(rn.to_reg()), simm7.value())
            }
            &PairAMode::PostIndexed(rn, simm7) => {
                format!("[{}], #{}", show_ireg_sp(rn.to_reg()), simm7.value())
            }
        }
    }
}

/// A memory addressing mode for an SVE contiguous load or store.
#[derive(Clone, Copy, Debug)]
pub enum SveAMode {
    /// Base register plus a signed 4-bit vector-register-length multiple
    /// (`[xN, #imm, mul vl]`).
    RegImm(Reg, i8),
    /// Base register plus 64-bit index register, scaled by the element
    /// size (`[xN, xM, lsl #shift]`; byte elements take no shift).
    RegReg(Reg, Reg),
}

impl SveAMode {
    /// Render this addressing mode for an access with the given element
    /// size.
    pub fn show(&self, size: ElementSize) -> String {
        match self {
            &SveAMode::RegImm(rn, 0) => format!("[{}]", show_ireg_sp(rn)),
            &SveAMode::RegImm(rn, imm) => {
                format!("[{}, #{}, mul vl]", show_ireg_sp(rn), imm)
            }
            &SveAMode::RegReg(rn, rm) => match size.bits() {
                0 => format!(
                    "[{}, {}]",
                    show_ireg_sp(rn),
                    show_ireg_sized(rm, OperandSize::Size64)
                ),
                shift => format!(
                    "[{}, {}, lsl #{}]",
                    show_ireg_sp(rn),
                    show_ireg_sized(rm, OperandSize::Size64),
                    shift
                ),
            },
        }
    }
}

/// A branch target. Either a label (resolved at buffer finalization) or a
/// known offset from the branch itself.
#[derive(Clone, Copy, Debug)]
pub enum BranchTarget {
    /// An unresolved reference to a label.
    Label(MachLabel),
    /// A resolved PC-relative byte offset.
    ResolvedOffset(i32),
}

impl BranchTarget {
    /// Get the label, if the target is unresolved.
    pub fn as_label(self) -> Option<MachLabel> {
        match self {
            BranchTarget::Label(l) => Some(l),
            _ => None,
        }
    }

    /// Get the offset as a scaled 19-bit field, zero if unresolved.
    pub fn as_offset19_or_zero(self) -> u32 {
        let off = match self {
            BranchTarget::ResolvedOffset(off) => off >> 2,
            _ => 0,
        };
        debug_assert!(off <= 0x3ffff);
        debug_assert!(off >= -0x40000);
        (off as u32) & 0x7ffff
    }

    /// Get the offset as a scaled 26-bit field, zero if unresolved.
    pub fn as_offset26_or_zero(self) -> u32 {
        let off = match self {
            BranchTarget::ResolvedOffset(off) => off >> 2,
            _ => 0,
        };
        debug_assert!(off <= 0x1ffffff);
        debug_assert!(off >= -0x2000000);
        (off as u32) & 0x3ffffff
    }
}

impl PrettyPrint for BranchTarget {
    fn show(&self) -> String {
        match self {
            BranchTarget::Label(l) => format!("{}", l),
            BranchTarget::ResolvedOffset(off) => format!("{}", off),
        }
    }
}

/// An NZCV flags value, as supplied to the conditional-compare
/// instructions for the case where the condition fails.
#[derive(Clone, Copy, Debug)]
pub struct NZCV {
    /// The negative condition flag.
    n: bool,
    /// The zero condition flag.
    z: bool,
    /// The carry condition flag.
    c: bool,
    /// The overflow condition flag.
    v: bool,
}

impl NZCV {
    /// Create an NZCV flags value.
    pub fn new(n: bool, z: bool, c: bool, v: bool) -> NZCV {
        NZCV { n, z, c, v }
    }

    /// Bits for the four-bit `nzcv` field.
    pub fn bits(&self) -> u32 {
        ((self.n as u32) << 3) | ((self.z as u32) << 2) | ((self.c as u32) << 1) | (self.v as u32)
    }
}

impl PrettyPrint for NZCV {
    fn show(&self) -> String {
        format!("#{}", self.bits())
    }
}

/// The kind of a conditional branch.
#[derive(Clone, Copy, Debug)]
pub enum CondBrKind {
    /// Branch if the register is zero.
    Zero(Reg),
    /// Branch if the register is not zero.
    NotZero(Reg),
    /// Branch on the given condition.
    Cond(Cond),
}

/// A memory-barrier instruction kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BarrierKind {
    /// Data memory barrier.
    Dmb,
    /// Data synchronization barrier.
    Dsb,
    /// Instruction synchronization barrier.
    Isb,
}

/// The shareability-domain and access-type option of a barrier, i.e. the
/// `CRm` field of `dmb`/`dsb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum BarrierOption {
    /// Outer shareable, loads only.
    Oshld = 0b0001,
    /// Outer shareable, stores only.
    Oshst = 0b0010,
    /// Outer shareable.
    Osh = 0b0011,
    /// Non-shareable, loads only.
    Nshld = 0b0101,
    /// Non-shareable, stores only.
    Nshst = 0b0110,
    /// Non-shareable.
    Nsh = 0b0111,
    /// Inner shareable, loads only.
    Ishld = 0b1001,
    /// Inner shareable, stores only.
    Ishst = 0b1010,
    /// Inner shareable.
    Ish = 0b1011,
    /// Full system, loads only.
    Ld = 0b1101,
    /// Full system, stores only.
    St = 0b1110,
    /// Full system.
    Sy = 0b1111,
}

impl BarrierOption {
    /// The `CRm` field encoding.
    pub fn bits(self) -> u32 {
        self as u32
    }
}

impl PrettyPrint for BarrierOption {
    fn show(&self) -> String {
        let s = match self {
            BarrierOption::Oshld => "oshld",
            BarrierOption::Oshst => "oshst",
            BarrierOption::Osh => "osh",
            BarrierOption::Nshld => "nshld",
            BarrierOption::Nshst => "nshst",
            BarrierOption::Nsh => "nsh",
            BarrierOption::Ishld => "ishld",
            BarrierOption::Ishst => "ishst",
            BarrierOption::Ish => "ish",
            BarrierOption::Ld => "ld",
            BarrierOption::St => "st",
            BarrierOption::Sy => "sy",
        };
        s.to_string()
    }
}

/// A prefetch operation: target cache level, load/store/instruction
/// stream, and retention policy. This is the `Rt` field of `prfm`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum PrfOp {
    Pldl1keep = 0b00000,
    Pldl1strm = 0b00001,
    Pldl2keep = 0b00010,
    Pldl2strm = 0b00011,
    Pldl3keep = 0b00100,
    Pldl3strm = 0b00101,
    Plil1keep = 0b01000,
    Plil1strm = 0b01001,
    Plil2keep = 0b01010,
    Plil2strm = 0b01011,
    Plil3keep = 0b01100,
    Plil3strm = 0b01101,
    Pstl1keep = 0b10000,
    Pstl1strm = 0b10001,
    Pstl2keep = 0b10010,
    Pstl2strm = 0b10011,
    Pstl3keep = 0b10100,
    Pstl3strm = 0b10101,
}

impl PrfOp {
    /// The five-bit `Rt`-position encoding.
    pub fn bits(self) -> u32 {
        self as u32
    }
}

impl PrettyPrint for PrfOp {
    fn show(&self) -> String {
        let s = match self {
            PrfOp::Pldl1keep => "pldl1keep",
            PrfOp::Pldl1strm => "pldl1strm",
            PrfOp::Pldl2keep => "pldl2keep",
            PrfOp::Pldl2strm => "pldl2strm",
            PrfOp::Pldl3keep => "pldl3keep",
            PrfOp::Pldl3strm => "pldl3strm",
            PrfOp::Plil1keep => "plil1keep",
            PrfOp::Plil1strm => "plil1strm",
            PrfOp::Plil2keep => "plil2keep",
            PrfOp::Plil2strm => "plil2strm",
            PrfOp::Plil3keep => "plil3keep",
            PrfOp::Plil3strm => "plil3strm",
            PrfOp::Pstl1keep => "pstl1keep",
            PrfOp::Pstl1strm => "pstl1strm",
            PrfOp::Pstl2keep => "pstl2keep",
            PrfOp::Pstl2strm => "pstl2strm",
            PrfOp::Pstl3keep => "pstl3keep",
            PrfOp::Pstl3strm => "pstl3strm",
        };
        s.to_string()
    }
}

/// An SVE predicate-constraint pattern, as taken by `ptrue` and the
/// element-count instructions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum SvePattern {
    Pow2 = 0b00000,
    Vl1 = 0b00001,
    Vl2 = 0b00010,
    Vl3 = 0b00011,
    Vl4 = 0b00100,
    Vl5 = 0b00101,
    Vl6 = 0b00110,
    Vl7 = 0b00111,
    Vl8 = 0b01000,
    Vl16 = 0b01001,
    Vl32 = 0b01010,
    Vl64 = 0b01011,
    Vl128 = 0b01100,
    Vl256 = 0b01101,
    Mul4 = 0b11101,
    Mul3 = 0b11110,
    All = 0b11111,
}

impl SvePattern {
    /// The five-bit `pattern` field encoding.
    pub fn bits(self) -> u32 {
        self as u32
    }
}

impl PrettyPrint for SvePattern {
    fn show(&self) -> String {
        let s = match self {
            SvePattern::Pow2 => "pow2",
            SvePattern::Vl1 => "vl1",
            SvePattern::Vl2 => "vl2",
            SvePattern::Vl3 => "vl3",
            SvePattern::Vl4 => "vl4",
            SvePattern::Vl5 => "vl5",
            SvePattern::Vl6 => "vl6",
            SvePattern::Vl7 => "vl7",
            SvePattern::Vl8 => "vl8",
            SvePattern::Vl16 => "vl16",
            SvePattern::Vl32 => "vl32",
            SvePattern::Vl64 => "vl64",
            SvePattern::Vl128 => "vl128",
            SvePattern::Vl256 => "vl256",
            SvePattern::Mul4 => "mul4",
            SvePattern::Mul3 => "mul3",
            SvePattern::All => "all",
        };
        s.to_string()
    }
}
