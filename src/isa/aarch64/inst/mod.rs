//! This module defines AArch64 machine instruction types.

use crate::machinst::{PrettyPrint, Reg, Writable};

pub mod args;
pub use self::args::*;
pub mod imms;
pub use self::imms::*;
pub mod regs;
pub use self::regs::*;
pub mod emit;
pub use self::emit::*;


//=============================================================================
// Instructions (top level): definition

/// An ALU operation. This can be paired with several instruction formats
/// below (see `Inst`) in any combination.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ALUOp {
    /// Add.
    Add,
    /// Subtract.
    Sub,
    /// Add, setting flags.
    AddS,
    /// Subtract, setting flags.
    SubS,
    /// Add with carry.
    Adc,
    /// Add with carry, setting flags.
    AdcS,
    /// Subtract with carry.
    Sbc,
    /// Subtract with carry, setting flags.
    SbcS,
    /// Bitwise or.
    Orr,
    /// Bitwise or-not.
    OrrNot,
    /// Bitwise and.
    And,
    /// Bitwise and, setting flags.
    AndS,
    /// Bitwise and-not.
    AndNot,
    /// Bitwise exclusive or.
    Eor,
    /// Bitwise exclusive-or-not.
    EorNot,
    /// Signed divide.
    SDiv,
    /// Unsigned divide.
    UDiv,
    /// Rotate right.
    RotR,
    /// Logical shift right.
    Lsr,
    /// Arithmetic shift right.
    Asr,
    /// Logical shift left.
    Lsl,
    /// Signed multiply high (64-bit operands only).
    SMulH,
    /// Unsigned multiply high (64-bit operands only).
    UMulH,
}

/// An ALU operation with three register sources.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ALUOp3 {
    /// Multiply-add.
    MAdd,
    /// Multiply-subtract.
    MSub,
}

/// A single-source bit operation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BitOp {
    /// Reverse bits.
    RBit,
    /// Count leading zeroes.
    Clz,
    /// Count leading sign bits.
    Cls,
    /// Reverse bytes within halfwords.
    Rev16,
    /// Reverse bytes within words (the full reverse at 32-bit size).
    Rev32,
    /// Reverse all bytes (64-bit size only).
    Rev64,
}

/// A move-wide operation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveWideOp {
    /// Move with zero.
    MovZ,
    /// Move with not.
    MovN,
    /// Move, keeping other lanes.
    MovK,
}

/// A floating-point unit (FPU) operation with one arg.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FPUOp1 {
    /// Absolute value.
    Abs,
    /// Negate.
    Neg,
    /// Square root.
    Sqrt,
    /// Convert single to double precision.
    Cvt32To64,
    /// Convert double to single precision.
    Cvt64To32,
}

/// A floating-point unit (FPU) operation with two args.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FPUOp2 {
    /// Add.
    Add,
    /// Subtract.
    Sub,
    /// Multiply.
    Mul,
    /// Divide.
    Div,
    /// Maximum.
    Max,
    /// Minimum.
    Min,
}

/// A floating-point unit (FPU) operation with three args.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FPUOp3 {
    /// Fused multiply-add.
    MAdd,
    /// Fused multiply-subtract.
    MSub,
}

/// A rounding mode for the `frint` family.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FpuRoundMode {
    /// Round toward minus infinity.
    Minus,
    /// Round toward plus infinity.
    Plus,
    /// Round toward zero.
    Zero,
    /// Round to nearest, ties to even.
    Nearest,
}

/// A conversion from an FP value to an integer value.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum FpuToIntOp {
    F32ToU32,
    F32ToI32,
    F32ToU64,
    F32ToI64,
    F64ToU32,
    F64ToI32,
    F64ToU64,
    F64ToI64,
}

/// A conversion from an integer value to an FP value.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum IntToFpuOp {
    U32ToF32,
    I32ToF32,
    U64ToF32,
    I64ToF32,
    U32ToF64,
    I32ToF64,
    U64ToF64,
    I64ToF64,
}

/// A vector ALU operation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VecALUOp {
    /// Integer add.
    Add,
    /// Integer subtract.
    Sub,
    /// Integer multiply.
    Mul,
    /// Bitwise and.
    And,
    /// Bitwise and-not.
    Bic,
    /// Bitwise or.
    Orr,
    /// Bitwise exclusive or.
    Eor,
    /// Compare bitwise equal.
    Cmeq,
    /// Compare signed greater than.
    Cmgt,
    /// Compare signed greater than or equal.
    Cmge,
    /// Compare unsigned higher.
    Cmhi,
    /// Compare unsigned higher or same.
    Cmhs,
    /// Unsigned maximum.
    Umax,
    /// Unsigned minimum.
    Umin,
    /// Signed maximum.
    Smax,
    /// Signed minimum.
    Smin,
    /// Add pairwise.
    Addp,
    /// Floating-point add.
    Fadd,
    /// Floating-point subtract.
    Fsub,
    /// Floating-point multiply.
    Fmul,
    /// Floating-point divide.
    Fdiv,
    /// Floating-point maximum.
    Fmax,
    /// Floating-point minimum.
    Fmin,
}

/// A vector two-register miscellaneous operation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VecMisc2 {
    /// Bitwise not.
    Not,
    /// Integer negate.
    Neg,
    /// Integer absolute value.
    Abs,
    /// Population count per byte.
    Cnt,
    /// Reverse elements in 64-bit doublewords.
    Rev64,
    /// Floating-point absolute value.
    Fabs,
    /// Floating-point negate.
    Fneg,
    /// Floating-point square root.
    Fsqrt,
}

/// An operation across the lanes of a vector, producing a scalar.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VecLanesOp {
    /// Integer sum.
    Addv,
    /// Unsigned maximum.
    Umaxv,
    /// Unsigned minimum.
    Uminv,
}

/// A vector shift-by-immediate operation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VecShiftImmOp {
    /// Shift left.
    Shl,
    /// Unsigned (logical) shift right.
    Ushr,
    /// Signed (arithmetic) shift right.
    Sshr,
}

/// An SVE ALU operation, unpredicated form.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SveALUOp {
    /// Integer add.
    Add,
    /// Integer subtract.
    Sub,
    /// Bitwise and.
    And,
    /// Bitwise or.
    Orr,
    /// Bitwise exclusive or.
    Eor,
}

/// An SVE ALU operation, predicated (merging) form.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SveALUPredOp {
    /// Integer add.
    Add,
    /// Integer subtract.
    Sub,
    /// Integer multiply.
    Mul,
    /// Bitwise and.
    And,
    /// Bitwise or.
    Orr,
    /// Bitwise exclusive or.
    Eor,
    /// Signed maximum.
    Smax,
    /// Signed minimum.
    Smin,
    /// Unsigned maximum.
    Umax,
    /// Unsigned minimum.
    Umin,
}

/// An SVE while-predication comparison kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SveWhileOp {
    /// While signed less than.
    Whilelt,
    /// While signed less than or equal.
    Whilele,
    /// While unsigned lower.
    Whilelo,
    /// While unsigned lower or same.
    Whilels,
}

/// A pointer-authentication key.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum APIKey {
    /// Instruction key A.
    IA,
    /// Instruction key B.
    IB,
    /// Data key A.
    DA,
    /// Data key B.
    DB,
}

impl APIKey {
    fn suffix(self) -> &'static str {
        match self {
            APIKey::IA => "ia",
            APIKey::IB => "ib",
            APIKey::DA => "da",
            APIKey::DB => "db",
        }
    }

    /// The suffix of the zero-modifier forms, where the `z` comes before
    /// the key letter (`paciza`, `pacdzb`, ...).
    fn z_suffix(self) -> &'static str {
        match self {
            APIKey::IA => "iza",
            APIKey::IB => "izb",
            APIKey::DA => "dza",
            APIKey::DB => "dzb",
        }
    }
}

/// A pointer-authentication operation in the hint space: these act on
/// fixed registers (lr, sp) and encode as hints, executing as no-ops on
/// cores without the extension.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PacHintOp {
    /// Sign lr with key A, using sp as the modifier.
    PaciaSp,
    /// Sign lr with key B, using sp as the modifier.
    PacibSp,
    /// Authenticate lr with key A, using sp as the modifier.
    AutiaSp,
    /// Authenticate lr with key B, using sp as the modifier.
    AutibSp,
    /// Sign lr with key A, using zero as the modifier.
    PaciaZ,
    /// Sign lr with key B, using zero as the modifier.
    PacibZ,
    /// Authenticate lr with key A, using zero as the modifier.
    AutiaZ,
    /// Authenticate lr with key B, using zero as the modifier.
    AutibZ,
    /// Strip the authentication code from lr.
    XpacLri,
}

/// Instruction formats.
#[derive(Clone, Debug)]
pub enum Inst {
    /// A no-op that is one instruction large.
    Nop4,

    /// An ALU operation with two register sources and a register
    /// destination.
    AluRRR {
        /// The operation.
        alu_op: ALUOp,
        /// The operand width.
        size: OperandSize,
        /// Destination.
        rd: Writable<Reg>,
        /// First source.
        rn: Reg,
        /// Second source.
        rm: Reg,
    },
    /// An ALU operation with three register sources and a register
    /// destination.
    AluRRRR {
        /// The operation.
        alu_op: ALUOp3,
        /// The operand width.
        size: OperandSize,
        /// Destination.
        rd: Writable<Reg>,
        /// Multiplicand.
        rn: Reg,
        /// Multiplier.
        rm: Reg,
        /// Addend.
        ra: Reg,
    },
    /// An ALU operation with a register source and an immediate-12 source,
    /// and a register destination.
    AluRRImm12 {
        /// The operation.
        alu_op: ALUOp,
        /// The operand width.
        size: OperandSize,
        /// Destination.
        rd: Writable<Reg>,
        /// Source.
        rn: Reg,
        /// Immediate.
        imm12: Imm12,
    },
    /// An ALU operation with a register source and an immediate-logic
    /// source, and a register destination.
    AluRRImmLogic {
        /// The operation.
        alu_op: ALUOp,
        /// The operand width.
        size: OperandSize,
        /// Destination.
        rd: Writable<Reg>,
        /// Source.
        rn: Reg,
        /// Immediate.
        imml: ImmLogic,
    },
    /// An ALU operation with a register source and an immediate-shiftamt
    /// source, and a register destination.
    AluRRImmShift {
        /// The operation.
        alu_op: ALUOp,
        /// The operand width.
        size: OperandSize,
        /// Destination.
        rd: Writable<Reg>,
        /// Source.
        rn: Reg,
        /// Shift amount.
        immshift: ImmShift,
    },
    /// An ALU operation with two register sources, one of which can be
    /// shifted, and a register destination.
    AluRRRShift {
        /// The operation.
        alu_op: ALUOp,
        /// The operand width.
        size: OperandSize,
        /// Destination.
        rd: Writable<Reg>,
        /// First source.
        rn: Reg,
        /// Second, shifted, source.
        rm: Reg,
        /// Shift operator and amount.
        shiftop: ShiftOpAndAmt,
    },
    /// An ALU operation with two register sources, one of which can be
    /// extended and shifted, and a register destination.
    AluRRRExtend {
        /// The operation.
        alu_op: ALUOp,
        /// The operand width.
        size: OperandSize,
        /// Destination.
        rd: Writable<Reg>,
        /// First source.
        rn: Reg,
        /// Second, extended, source.
        rm: Reg,
        /// Extend operator.
        extendop: ExtendOp,
    },
    /// A bit operation with a register source and a register destination.
    BitRR {
        /// The operation.
        op: BitOp,
        /// The operand width.
        size: OperandSize,
        /// Destination.
        rd: Writable<Reg>,
        /// Source.
        rn: Reg,
    },
    /// A sign- or zero-extension from a narrow source width.
    Extend {
        /// Destination.
        rd: Writable<Reg>,
        /// Source.
        rn: Reg,
        /// Sign (vs. zero) extension.
        signed: bool,
        /// Source width in bits (8, 16 or 32).
        from_bits: u8,
        /// Destination width in bits (32 or 64).
        to_bits: u8,
    },

    /// An unsigned (zero-extending) 8-bit load.
    ULoad8 {
        /// Destination.
        rd: Writable<Reg>,
        /// Address.
        mem: AMode,
    },
    /// A signed (sign-extending) 8-bit load into a 64-bit destination.
    SLoad8 {
        /// Destination.
        rd: Writable<Reg>,
        /// Address.
        mem: AMode,
    },
    /// An unsigned (zero-extending) 16-bit load.
    ULoad16 {
        /// Destination.
        rd: Writable<Reg>,
        /// Address.
        mem: AMode,
    },
    /// A signed (sign-extending) 16-bit load into a 64-bit destination.
    SLoad16 {
        /// Destination.
        rd: Writable<Reg>,
        /// Address.
        mem: AMode,
    },
    /// An unsigned (zero-extending) 32-bit load.
    ULoad32 {
        /// Destination.
        rd: Writable<Reg>,
        /// Address.
        mem: AMode,
    },
    /// A signed (sign-extending) 32-bit load into a 64-bit destination.
    SLoad32 {
        /// Destination.
        rd: Writable<Reg>,
        /// Address.
        mem: AMode,
    },
    /// A 64-bit load.
    ULoad64 {
        /// Destination.
        rd: Writable<Reg>,
        /// Address.
        mem: AMode,
    },
    /// An 8-bit store.
    Store8 {
        /// Source.
        rd: Reg,
        /// Address.
        mem: AMode,
    },
    /// A 16-bit store.
    Store16 {
        /// Source.
        rd: Reg,
        /// Address.
        mem: AMode,
    },
    /// A 32-bit store.
    Store32 {
        /// Source.
        rd: Reg,
        /// Address.
        mem: AMode,
    },
    /// A 64-bit store.
    Store64 {
        /// Source.
        rd: Reg,
        /// Address.
        mem: AMode,
    },
    /// A load of a pair of 64-bit registers.
    LoadP64 {
        /// First destination.
        rt: Writable<Reg>,
        /// Second destination.
        rt2: Writable<Reg>,
        /// Address.
        mem: PairAMode,
    },
    /// A store of a pair of 64-bit registers.
    StoreP64 {
        /// First source.
        rt: Reg,
        /// Second source.
        rt2: Reg,
        /// Address.
        mem: PairAMode,
    },

    /// A MOV instruction. These are encoded as ORR's with the zero
    /// register, but we keep them separate at the `Inst` level for better
    /// pretty-printing.
    Mov {
        /// The operand width.
        size: OperandSize,
        /// Destination.
        rd: Writable<Reg>,
        /// Source.
        rm: Reg,
    },
    /// A move-wide instruction with a 16-bit immediate chunk.
    MovWide {
        /// The operation.
        op: MoveWideOp,
        /// The operand width.
        size: OperandSize,
        /// Destination.
        rd: Writable<Reg>,
        /// Immediate chunk and lane.
        imm: MoveWideConst,
    },

    /// A conditional select.
    CSel {
        /// The operand width.
        size: OperandSize,
        /// Destination.
        rd: Writable<Reg>,
        /// Value if the condition holds.
        rn: Reg,
        /// Value if the condition fails.
        rm: Reg,
        /// The condition.
        cond: Cond,
    },
    /// A conditional set: 1 if the condition holds, else 0.
    CSet {
        /// Destination.
        rd: Writable<Reg>,
        /// The condition.
        cond: Cond,
    },
    /// A conditional compare of two registers, yielding the given flags if
    /// the condition fails.
    CCmp {
        /// The operand width.
        size: OperandSize,
        /// First comparison operand.
        rn: Reg,
        /// Second comparison operand.
        rm: Reg,
        /// Flags value on condition failure.
        nzcv: NZCV,
        /// The condition.
        cond: Cond,
    },

    /// An unconditional branch.
    Jump {
        /// The branch destination.
        dest: BranchTarget,
    },
    /// A conditional branch: compare-and-branch or flag-conditional.
    CondBr {
        /// The taken-branch destination.
        taken: BranchTarget,
        /// The kind of conditional test.
        kind: CondBrKind,
    },
    /// An indirect branch through a register.
    Br {
        /// The target address.
        rn: Reg,
    },
    /// An indirect call through a register.
    Blr {
        /// The target address.
        rn: Reg,
    },
    /// A return.
    Ret,
    /// A breakpoint trap.
    Brk,
    /// Compute a PC-relative address.
    Adr {
        /// Destination.
        rd: Writable<Reg>,
        /// The address, relative to this instruction.
        target: BranchTarget,
    },

    /// A memory barrier.
    Barrier {
        /// Which barrier instruction.
        kind: BarrierKind,
        /// Shareability domain and access types ordered.
        option: BarrierOption,
    },
    /// A memory-prefetch hint.
    Prefetch {
        /// The prefetch operation.
        op: PrfOp,
        /// Address.
        mem: AMode,
    },

    /// A scalar FP move between FP registers.
    FpuMove {
        /// The operand size.
        size: ScalarSize,
        /// Destination.
        rd: Writable<Reg>,
        /// Source.
        rn: Reg,
    },
    /// A one-operand scalar FP operation.
    FpuRR {
        /// The operation.
        fpu_op: FPUOp1,
        /// The operand size (of the source, for conversions).
        size: ScalarSize,
        /// Destination.
        rd: Writable<Reg>,
        /// Source.
        rn: Reg,
    },
    /// A two-operand scalar FP operation.
    FpuRRR {
        /// The operation.
        fpu_op: FPUOp2,
        /// The operand size.
        size: ScalarSize,
        /// Destination.
        rd: Writable<Reg>,
        /// First source.
        rn: Reg,
        /// Second source.
        rm: Reg,
    },
    /// A three-operand scalar FP operation.
    FpuRRRR {
        /// The operation.
        fpu_op: FPUOp3,
        /// The operand size.
        size: ScalarSize,
        /// Destination.
        rd: Writable<Reg>,
        /// Multiplicand.
        rn: Reg,
        /// Multiplier.
        rm: Reg,
        /// Addend.
        ra: Reg,
    },
    /// A scalar FP compare, setting the integer flags.
    FpuCmp {
        /// The operand size.
        size: ScalarSize,
        /// First operand.
        rn: Reg,
        /// Second operand.
        rm: Reg,
    },
    /// A scalar FP conditional select.
    FpuCSel {
        /// The operand size.
        size: ScalarSize,
        /// Destination.
        rd: Writable<Reg>,
        /// Value if the condition holds.
        rn: Reg,
        /// Value if the condition fails.
        rm: Reg,
        /// The condition.
        cond: Cond,
    },
    /// A scalar FP round-to-integral.
    FpuRound {
        /// The rounding mode.
        op: FpuRoundMode,
        /// The operand size.
        size: ScalarSize,
        /// Destination.
        rd: Writable<Reg>,
        /// Source.
        rn: Reg,
    },
    /// A scalar FP move of an expanded 8-bit immediate.
    FpuMoveFPImm {
        /// The operand size.
        size: ScalarSize,
        /// Destination.
        rd: Writable<Reg>,
        /// The immediate.
        imm: ASIMDFPModImm,
    },
    /// A conversion from FP to integer, rounding toward zero.
    FpuToInt {
        /// The source/destination width combination.
        op: FpuToIntOp,
        /// Destination (integer register).
        rd: Writable<Reg>,
        /// Source (FP register).
        rn: Reg,
    },
    /// A conversion from integer to FP.
    IntToFpu {
        /// The source/destination width combination.
        op: IntToFpuOp,
        /// Destination (FP register).
        rd: Writable<Reg>,
        /// Source (integer register).
        rn: Reg,
    },
    /// A bit-exact move from an integer register into an FP register.
    MovToFpu {
        /// The operand width.
        size: OperandSize,
        /// Destination (FP register).
        rd: Writable<Reg>,
        /// Source (integer register).
        rn: Reg,
    },
    /// A move from a vector element into an integer register,
    /// zero-extending.
    MovFromVec {
        /// Destination (integer register).
        rd: Writable<Reg>,
        /// Source vector.
        rn: Reg,
        /// Source lane index.
        idx: u8,
        /// Lane size.
        size: VectorSize,
    },
    /// A move from an integer register into a vector element.
    MovToVec {
        /// Destination vector.
        rd: Writable<Reg>,
        /// Source (integer register).
        rn: Reg,
        /// Destination lane index.
        idx: u8,
        /// Lane size.
        size: VectorSize,
    },
    /// A vector duplication of an integer register to all lanes.
    VecDup {
        /// Destination vector.
        rd: Writable<Reg>,
        /// Source (integer register).
        rn: Reg,
        /// The arrangement.
        size: VectorSize,
    },
    /// A vector duplication of a vector element to all lanes.
    VecDupFromFpu {
        /// Destination vector.
        rd: Writable<Reg>,
        /// Source vector.
        rn: Reg,
        /// Source lane index.
        idx: u8,
        /// The arrangement.
        size: VectorSize,
    },
    /// A vector ALU operation with two vector sources.
    VecRRR {
        /// The operation.
        alu_op: VecALUOp,
        /// Destination.
        rd: Writable<Reg>,
        /// First source.
        rn: Reg,
        /// Second source.
        rm: Reg,
        /// The arrangement.
        size: VectorSize,
    },
    /// A vector two-register miscellaneous operation.
    VecMisc {
        /// The operation.
        op: VecMisc2,
        /// Destination.
        rd: Writable<Reg>,
        /// Source.
        rn: Reg,
        /// The arrangement.
        size: VectorSize,
    },
    /// An operation across the lanes of a vector, producing a scalar.
    VecLanes {
        /// The operation.
        op: VecLanesOp,
        /// Destination (scalar view of a vector register).
        rd: Writable<Reg>,
        /// Source.
        rn: Reg,
        /// The arrangement.
        size: VectorSize,
    },
    /// A vector shift by immediate.
    VecShiftImm {
        /// The operation.
        op: VecShiftImmOp,
        /// Destination.
        rd: Writable<Reg>,
        /// Source.
        rn: Reg,
        /// The arrangement.
        size: VectorSize,
        /// The shift amount.
        imm: u8,
    },
    /// An FP/vector-register load with a 32-bit access.
    FpuLoad32 {
        /// Destination.
        rd: Writable<Reg>,
        /// Address.
        mem: AMode,
    },
    /// An FP/vector-register load with a 64-bit access.
    FpuLoad64 {
        /// Destination.
        rd: Writable<Reg>,
        /// Address.
        mem: AMode,
    },
    /// An FP/vector-register load with a 128-bit access.
    FpuLoad128 {
        /// Destination.
        rd: Writable<Reg>,
        /// Address.
        mem: AMode,
    },
    /// An FP/vector-register store with a 32-bit access.
    FpuStore32 {
        /// Source.
        rd: Reg,
        /// Address.
        mem: AMode,
    },
    /// An FP/vector-register store with a 64-bit access.
    FpuStore64 {
        /// Source.
        rd: Reg,
        /// Address.
        mem: AMode,
    },
    /// An FP/vector-register store with a 128-bit access.
    FpuStore128 {
        /// Source.
        rd: Reg,
        /// Address.
        mem: AMode,
    },

    /// An SVE integer/bitwise operation, unpredicated.
    SveAluRRR {
        /// The operation.
        alu_op: SveALUOp,
        /// Element size.
        size: ElementSize,
        /// Destination.
        rd: Writable<Reg>,
        /// First source.
        rn: Reg,
        /// Second source.
        rm: Reg,
    },
    /// An SVE integer/bitwise operation, predicated and merging. The
    /// destination is also the first source.
    SveAluRPred {
        /// The operation.
        alu_op: SveALUPredOp,
        /// Element size.
        size: ElementSize,
        /// Destination and first source.
        rdn: Writable<Reg>,
        /// Governing predicate.
        pg: Reg,
        /// Second source.
        rm: Reg,
    },
    /// An SVE broadcast of an integer register to all elements.
    SveDup {
        /// Element size.
        size: ElementSize,
        /// Destination.
        rd: Writable<Reg>,
        /// Source (integer register).
        rn: Reg,
    },
    /// An SVE predicated broadcast of a small immediate.
    SveCpyImm {
        /// Element size.
        size: ElementSize,
        /// Destination.
        rd: Writable<Reg>,
        /// Governing predicate.
        pg: Reg,
        /// Merging or zeroing of inactive elements.
        mode: PredMode,
        /// The immediate.
        imm: i8,
    },
    /// An SVE predicate initialization from a constraint pattern.
    SvePtrue {
        /// Element size.
        size: ElementSize,
        /// Destination predicate.
        pd: Writable<Reg>,
        /// The constraint pattern.
        pattern: SvePattern,
    },
    /// An SVE while-comparison, producing a predicate from a scalar
    /// induction bound.
    SveWhile {
        /// The comparison kind.
        op: SveWhileOp,
        /// Element size of the produced predicate.
        size: ElementSize,
        /// Width of the scalar operands.
        scalar_size: OperandSize,
        /// Destination predicate.
        pd: Writable<Reg>,
        /// First scalar operand.
        rn: Reg,
        /// Second scalar operand.
        rm: Reg,
    },
    /// An SVE element-count: the number of elements of the given size in a
    /// vector, filtered by a constraint pattern.
    SveCnt {
        /// Element size counted.
        size: ElementSize,
        /// Destination (integer register).
        rd: Writable<Reg>,
        /// The constraint pattern.
        pattern: SvePattern,
    },
    /// Read the vector length in bytes, multiplied by an immediate.
    SveRdvl {
        /// Destination (integer register).
        rd: Writable<Reg>,
        /// The multiplier.
        imm: i8,
    },
    /// An SVE contiguous load, zeroing inactive elements.
    SveLoad {
        /// Element size.
        size: ElementSize,
        /// Destination.
        rt: Writable<Reg>,
        /// Governing predicate.
        pg: Reg,
        /// Address.
        mem: SveAMode,
    },
    /// An SVE contiguous store.
    SveStore {
        /// Element size.
        size: ElementSize,
        /// Source.
        rt: Reg,
        /// Governing predicate.
        pg: Reg,
        /// Address.
        mem: SveAMode,
    },

    /// A pointer-authentication sign operation with an explicit modifier.
    Pac {
        /// The key.
        key: APIKey,
        /// The pointer to sign, modified in place.
        rd: Writable<Reg>,
        /// The modifier.
        rn: Reg,
    },
    /// A pointer-authentication authenticate operation with an explicit
    /// modifier.
    Aut {
        /// The key.
        key: APIKey,
        /// The pointer to authenticate, modified in place.
        rd: Writable<Reg>,
        /// The modifier.
        rn: Reg,
    },
    /// A pointer-authentication sign operation with a zero modifier.
    PacZ {
        /// The key.
        key: APIKey,
        /// The pointer to sign, modified in place.
        rd: Writable<Reg>,
    },
    /// A pointer-authentication authenticate operation with a zero
    /// modifier.
    AutZ {
        /// The key.
        key: APIKey,
        /// The pointer to authenticate, modified in place.
        rd: Writable<Reg>,
    },
    /// Strip the authentication code from a pointer. `instruction`
    /// selects the instruction-address interpretation of the pointer's
    /// unused bits, vs. data-address.
    Xpac {
        /// Instruction-address vs. data-address form.
        instruction: bool,
        /// The pointer to strip, modified in place.
        rd: Writable<Reg>,
    },
    /// A pointer-authentication operation on lr, in the hint space.
    PacHint {
        /// The operation.
        op: PacHintOp,
    },
    /// A return that authenticates lr, using sp as the modifier.
    RetAuth {
        /// The key (instruction keys only).
        key: APIKey,
    },
    /// An indirect branch that authenticates the target first.
    BrAuth {
        /// The key (instruction keys only).
        key: APIKey,
        /// The target address.
        rn: Reg,
        /// The modifier.
        rm: Reg,
    },
    /// An indirect call that authenticates the target first.
    BlrAuth {
        /// The key (instruction keys only).
        key: APIKey,
        /// The target address.
        rn: Reg,
        /// The modifier.
        rm: Reg,
    },
}

/// Merging vs. zeroing predication on an SVE operand.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PredMode {
    /// Inactive elements keep their previous value.
    Merging,
    /// Inactive elements are zeroed.
    Zeroing,
}

impl PredMode {
    /// The predicate-qualifier suffix, e.g. `m` in `p0/m`.
    pub fn suffix(self) -> &'static str {
        match self {
            PredMode::Merging => "m",
            PredMode::Zeroing => "z",
        }
    }
}

//=============================================================================
// Instructions: printing

impl ALUOp {
    fn mnemonic(self) -> &'static str {
        match self {
            ALUOp::Add => "add",
            ALUOp::Sub => "sub",
            ALUOp::AddS => "adds",
            ALUOp::SubS => "subs",
            ALUOp::Adc => "adc",
            ALUOp::AdcS => "adcs",
            ALUOp::Sbc => "sbc",
            ALUOp::SbcS => "sbcs",
            ALUOp::Orr => "orr",
            ALUOp::OrrNot => "orn",
            ALUOp::And => "and",
            ALUOp::AndS => "ands",
            ALUOp::AndNot => "bic",
            ALUOp::Eor => "eor",
            ALUOp::EorNot => "eon",
            ALUOp::SDiv => "sdiv",
            ALUOp::UDiv => "udiv",
            ALUOp::RotR => "ror",
            ALUOp::Lsr => "lsr",
            ALUOp::Asr => "asr",
            ALUOp::Lsl => "lsl",
            ALUOp::SMulH => "smulh",
            ALUOp::UMulH => "umulh",
        }
    }
}

impl VecALUOp {
    fn mnemonic(self) -> &'static str {
        match self {
            VecALUOp::Add => "add",
            VecALUOp::Sub => "sub",
            VecALUOp::Mul => "mul",
            VecALUOp::And => "and",
            VecALUOp::Bic => "bic",
            VecALUOp::Orr => "orr",
            VecALUOp::Eor => "eor",
            VecALUOp::Cmeq => "cmeq",
            VecALUOp::Cmgt => "cmgt",
            VecALUOp::Cmge => "cmge",
            VecALUOp::Cmhi => "cmhi",
            VecALUOp::Cmhs => "cmhs",
            VecALUOp::Umax => "umax",
            VecALUOp::Umin => "umin",
            VecALUOp::Smax => "smax",
            VecALUOp::Smin => "smin",
            VecALUOp::Addp => "addp",
            VecALUOp::Fadd => "fadd",
            VecALUOp::Fsub => "fsub",
            VecALUOp::Fmul => "fmul",
            VecALUOp::Fdiv => "fdiv",
            VecALUOp::Fmax => "fmax",
            VecALUOp::Fmin => "fmin",
        }
    }
}

impl SveALUOp {
    fn mnemonic(self) -> &'static str {
        match self {
            SveALUOp::Add => "add",
            SveALUOp::Sub => "sub",
            SveALUOp::And => "and",
            SveALUOp::Orr => "orr",
            SveALUOp::Eor => "eor",
        }
    }

    /// The bitwise ops ignore the element size and always print the `.d`
    /// arrangement.
    fn is_bitwise(self) -> bool {
        matches!(self, SveALUOp::And | SveALUOp::Orr | SveALUOp::Eor)
    }
}

impl SveALUPredOp {
    fn mnemonic(self) -> &'static str {
        match self {
            SveALUPredOp::Add => "add",
            SveALUPredOp::Sub => "sub",
            SveALUPredOp::Mul => "mul",
            SveALUPredOp::And => "and",
            SveALUPredOp::Orr => "orr",
            SveALUPredOp::Eor => "eor",
            SveALUPredOp::Smax => "smax",
            SveALUPredOp::Smin => "smin",
            SveALUPredOp::Umax => "umax",
            SveALUPredOp::Umin => "umin",
        }
    }
}

impl SveWhileOp {
    fn mnemonic(self) -> &'static str {
        match self {
            SveWhileOp::Whilelt => "whilelt",
            SveWhileOp::Whilele => "whilele",
            SveWhileOp::Whilelo => "whilelo",
            SveWhileOp::Whilels => "whilels",
        }
    }
}

impl Inst {
    /// The mnemonic and operand-size behavior of a scalar load or store,
    /// used by both printing and emission: (base mnemonic, unscaled
    /// mnemonic, access bytes).
    fn ldst_parts(&self) -> (&'static str, &'static str, u8) {
        match self {
            Inst::ULoad8 { .. } => ("ldrb", "ldurb", 1),
            Inst::SLoad8 { .. } => ("ldrsb", "ldursb", 1),
            Inst::ULoad16 { .. } => ("ldrh", "ldurh", 2),
            Inst::SLoad16 { .. } => ("ldrsh", "ldursh", 2),
            Inst::ULoad32 { .. } => ("ldr", "ldur", 4),
            Inst::SLoad32 { .. } => ("ldrsw", "ldursw", 4),
            Inst::ULoad64 { .. } => ("ldr", "ldur", 8),
            Inst::Store8 { .. } => ("strb", "sturb", 1),
            Inst::Store16 { .. } => ("strh", "sturh", 2),
            Inst::Store32 { .. } => ("str", "stur", 4),
            Inst::Store64 { .. } => ("str", "stur", 8),
            Inst::FpuLoad32 { .. } => ("ldr", "ldur", 4),
            Inst::FpuLoad64 { .. } => ("ldr", "ldur", 8),
            Inst::FpuLoad128 { .. } => ("ldr", "ldur", 16),
            Inst::FpuStore32 { .. } => ("str", "stur", 4),
            Inst::FpuStore64 { .. } => ("str", "stur", 8),
            Inst::FpuStore128 { .. } => ("str", "stur", 16),
            _ => panic!("not a load/store: {:?}", self),
        }
    }
}

fn mem_mnemonic(base: &'static str, unscaled: &'static str, mem: &AMode) -> &'static str {
    match mem {
        AMode::Unscaled(..) => unscaled,
        _ => base,
    }
}

impl PrettyPrint for Inst {
    fn show(&self) -> String {
        match self {
            &Inst::Nop4 => "nop".to_string(),
            &Inst::AluRRR {
                alu_op,
                size,
                rd,
                rn,
                rm,
            } => {
                let rd = show_ireg_sized(rd.to_reg(), size);
                let rn = show_ireg_sized(rn, size);
                let rm = show_ireg_sized(rm, size);
                format!("{} {}, {}, {}", alu_op.mnemonic(), rd, rn, rm)
            }
            &Inst::AluRRRR {
                alu_op,
                size,
                rd,
                rn,
                rm,
                ra,
            } => {
                let op = match alu_op {
                    ALUOp3::MAdd => "madd",
                    ALUOp3::MSub => "msub",
                };
                let rd = show_ireg_sized(rd.to_reg(), size);
                let rn = show_ireg_sized(rn, size);
                let rm = show_ireg_sized(rm, size);
                let ra = show_ireg_sized(ra, size);
                format!("{} {}, {}, {}, {}", op, rd, rn, rm, ra)
            }
            &Inst::AluRRImm12 {
                alu_op,
                size,
                rd,
                rn,
                ref imm12,
            } => {
                let rd = show_ireg_sized(rd.to_reg(), size);
                let rn = show_ireg_sized(rn, size);
                if imm12.shift12 {
                    format!(
                        "{} {}, {}, #{}, lsl #12",
                        alu_op.mnemonic(),
                        rd,
                        rn,
                        imm12.bits
                    )
                } else {
                    format!("{} {}, {}, #{}", alu_op.mnemonic(), rd, rn, imm12.bits)
                }
            }
            &Inst::AluRRImmLogic {
                alu_op,
                size,
                rd,
                rn,
                ref imml,
            } => {
                let rd = show_ireg_sized(rd.to_reg(), size);
                let rn = show_ireg_sized(rn, size);
                format!("{} {}, {}, #{:#x}", alu_op.mnemonic(), rd, rn, imml.value())
            }
            &Inst::AluRRImmShift {
                alu_op,
                size,
                rd,
                rn,
                ref immshift,
            } => {
                let rd = show_ireg_sized(rd.to_reg(), size);
                let rn = show_ireg_sized(rn, size);
                format!(
                    "{} {}, {}, #{}",
                    alu_op.mnemonic(),
                    rd,
                    rn,
                    immshift.value()
                )
            }
            &Inst::AluRRRShift {
                alu_op,
                size,
                rd,
                rn,
                rm,
                ref shiftop,
            } => {
                let rd = show_ireg_sized(rd.to_reg(), size);
                let rn = show_ireg_sized(rn, size);
                let rm = show_ireg_sized(rm, size);
                format!(
                    "{} {}, {}, {}, {}",
                    alu_op.mnemonic(),
                    rd,
                    rn,
                    rm,
                    shiftop.show()
                )
            }
            &Inst::AluRRRExtend {
                alu_op,
                size,
                rd,
                rn,
                rm,
                extendop,
            } => {
                let rd = show_ireg_sized(rd.to_reg(), size);
                let rn = show_ireg_sized(rn, size);
                let rm_size = if extendop.is_32bit_source() {
                    OperandSize::Size32
                } else {
                    OperandSize::Size64
                };
                let rm = show_ireg_sized(rm, rm_size);
                format!(
                    "{} {}, {}, {}, {}",
                    alu_op.mnemonic(),
                    rd,
                    rn,
                    rm,
                    extendop.show()
                )
            }
            &Inst::BitRR { op, size, rd, rn } => {
                let op = match (op, size) {
                    (BitOp::RBit, _) => "rbit",
                    (BitOp::Clz, _) => "clz",
                    (BitOp::Cls, _) => "cls",
                    (BitOp::Rev16, _) => "rev16",
                    (BitOp::Rev32, OperandSize::Size32) => "rev",
                    (BitOp::Rev32, OperandSize::Size64) => "rev32",
                    (BitOp::Rev64, OperandSize::Size64) => "rev",
                    (BitOp::Rev64, OperandSize::Size32) => panic!("rev64 on 32-bit operand"),
                };
                let rd = show_ireg_sized(rd.to_reg(), size);
                let rn = show_ireg_sized(rn, size);
                format!("{} {}, {}", op, rd, rn)
            }
            &Inst::Extend {
                rd,
                rn,
                signed,
                from_bits,
                to_bits,
            } => {
                let op = match (signed, from_bits) {
                    (true, 8) => "sxtb",
                    (true, 16) => "sxth",
                    (true, 32) => "sxtw",
                    (false, 8) => "uxtb",
                    (false, 16) => "uxth",
                    _ => panic!("bad extend: {} from {} bits", signed, from_bits),
                };
                let dest_size = if to_bits == 64 {
                    OperandSize::Size64
                } else {
                    OperandSize::Size32
                };
                let rd = show_ireg_sized(rd.to_reg(), dest_size);
                let rn = show_ireg_sized(rn, OperandSize::Size32);
                format!("{} {}, {}", op, rd, rn)
            }
            &Inst::ULoad8 { rd, ref mem }
            | &Inst::ULoad16 { rd, ref mem }
            | &Inst::ULoad32 { rd, ref mem }
            | &Inst::SLoad8 { rd, ref mem }
            | &Inst::SLoad16 { rd, ref mem }
            | &Inst::SLoad32 { rd, ref mem }
            | &Inst::ULoad64 { rd, ref mem } => {
                let (base, unscaled, bytes) = self.ldst_parts();
                let dest_size = match self {
                    Inst::ULoad8 { .. } | Inst::ULoad16 { .. } | Inst::ULoad32 { .. } => {
                        OperandSize::Size32
                    }
                    _ => OperandSize::Size64,
                };
                let rd = show_ireg_sized(rd.to_reg(), dest_size);
                if let AMode::Label(MemLabel::PCRel(off)) = mem {
                    return format!("{} {}, pc+{}", base, rd, off);
                }
                format!("{} {}, {}", mem_mnemonic(base, unscaled, mem), rd, mem.show(bytes))
            }
            &Inst::Store8 { rd, ref mem }
            | &Inst::Store16 { rd, ref mem }
            | &Inst::Store32 { rd, ref mem }
            | &Inst::Store64 { rd, ref mem } => {
                let (base, unscaled, bytes) = self.ldst_parts();
                let src_size = match self {
                    Inst::Store64 { .. } => OperandSize::Size64,
                    _ => OperandSize::Size32,
                };
                let rd = show_ireg_sized(rd, src_size);
                format!("{} {}, {}", mem_mnemonic(base, unscaled, mem), rd, mem.show(bytes))
            }
            &Inst::LoadP64 { rt, rt2, ref mem } => {
                let rt = show_ireg_sized(rt.to_reg(), OperandSize::Size64);
                let rt2 = show_ireg_sized(rt2.to_reg(), OperandSize::Size64);
                format!("ldp {}, {}, {}", rt, rt2, mem.show())
            }
            &Inst::StoreP64 { rt, rt2, ref mem } => {
                let rt = show_ireg_sized(rt, OperandSize::Size64);
                let rt2 = show_ireg_sized(rt2, OperandSize::Size64);
                format!("stp {}, {}, {}", rt, rt2, mem.show())
            }
            &Inst::Mov { size, rd, rm } => {
                let rd = show_ireg_sized(rd.to_reg(), size);
                let rm = show_ireg_sized(rm, size);
                format!("mov {}, {}", rd, rm)
            }
            &Inst::MovWide {
                op,
                size,
                rd,
                ref imm,
            } => {
                let op = match op {
                    MoveWideOp::MovZ => "movz",
                    MoveWideOp::MovN => "movn",
                    MoveWideOp::MovK => "movk",
                };
                let rd = show_ireg_sized(rd.to_reg(), size);
                if imm.shift == 0 {
                    format!("{} {}, #{}", op, rd, imm.bits)
                } else {
                    format!("{} {}, #{}, lsl #{}", op, rd, imm.bits, imm.shift * 16)
                }
            }
            &Inst::CSel {
                size,
                rd,
                rn,
                rm,
                cond,
            } => {
                let rd = show_ireg_sized(rd.to_reg(), size);
                let rn = show_ireg_sized(rn, size);
                let rm = show_ireg_sized(rm, size);
                format!("csel {}, {}, {}, {}", rd, rn, rm, cond.show())
            }
            &Inst::CSet { rd, cond } => {
                let rd = show_ireg_sized(rd.to_reg(), OperandSize::Size64);
                format!("cset {}, {}", rd, cond.show())
            }
            &Inst::CCmp {
                size,
                rn,
                rm,
                nzcv,
                cond,
            } => {
                let rn = show_ireg_sized(rn, size);
                let rm = show_ireg_sized(rm, size);
                format!("ccmp {}, {}, {}, {}", rn, rm, nzcv.show(), cond.show())
            }
            &Inst::Jump { ref dest } => format!("b #{}", dest.show()),
            &Inst::CondBr { ref taken, kind } => match kind {
                CondBrKind::Zero(reg) => {
                    let reg = show_ireg_sized(reg, OperandSize::Size64);
                    format!("cbz {}, #{}", reg, taken.show())
                }
                CondBrKind::NotZero(reg) => {
                    let reg = show_ireg_sized(reg, OperandSize::Size64);
                    format!("cbnz {}, #{}", reg, taken.show())
                }
                CondBrKind::Cond(c) => format!("b.{} #{}", c.show(), taken.show()),
            },
            &Inst::Br { rn } => format!("br {}", show_ireg_sized(rn, OperandSize::Size64)),
            &Inst::Blr { rn } => format!("blr {}", show_ireg_sized(rn, OperandSize::Size64)),
            &Inst::Ret => "ret".to_string(),
            &Inst::Brk => "brk #0".to_string(),
            &Inst::Adr { rd, ref target } => {
                let rd = show_ireg_sized(rd.to_reg(), OperandSize::Size64);
                format!("adr {}, #{}", rd, target.show())
            }
            &Inst::Barrier { kind, option } => match kind {
                BarrierKind::Dmb => format!("dmb {}", option.show()),
                BarrierKind::Dsb => format!("dsb {}", option.show()),
                BarrierKind::Isb => "isb".to_string(),
            },
            &Inst::Prefetch { op, ref mem } => {
                let mnemonic = match mem {
                    AMode::Unscaled(..) => "prfum",
                    _ => "prfm",
                };
                format!("{} {}, {}", mnemonic, op.show(), mem.show(8))
            }
            &Inst::FpuMove { size, rd, rn } => {
                let rd = show_vreg_scalar(rd.to_reg(), size);
                let rn = show_vreg_scalar(rn, size);
                format!("fmov {}, {}", rd, rn)
            }
            &Inst::FpuRR {
                fpu_op,
                size,
                rd,
                rn,
            } => {
                let (op, dst_size) = match fpu_op {
                    FPUOp1::Abs => ("fabs", size),
                    FPUOp1::Neg => ("fneg", size),
                    FPUOp1::Sqrt => ("fsqrt", size),
                    FPUOp1::Cvt32To64 => ("fcvt", ScalarSize::Size64),
                    FPUOp1::Cvt64To32 => ("fcvt", ScalarSize::Size32),
                };
                let rd = show_vreg_scalar(rd.to_reg(), dst_size);
                let rn = show_vreg_scalar(rn, size);
                format!("{} {}, {}", op, rd, rn)
            }
            &Inst::FpuRRR {
                fpu_op,
                size,
                rd,
                rn,
                rm,
            } => {
                let op = match fpu_op {
                    FPUOp2::Add => "fadd",
                    FPUOp2::Sub => "fsub",
                    FPUOp2::Mul => "fmul",
                    FPUOp2::Div => "fdiv",
                    FPUOp2::Max => "fmax",
                    FPUOp2::Min => "fmin",
                };
                let rd = show_vreg_scalar(rd.to_reg(), size);
                let rn = show_vreg_scalar(rn, size);
                let rm = show_vreg_scalar(rm, size);
                format!("{} {}, {}, {}", op, rd, rn, rm)
            }
            &Inst::FpuRRRR {
                fpu_op,
                size,
                rd,
                rn,
                rm,
                ra,
            } => {
                let op = match fpu_op {
                    FPUOp3::MAdd => "fmadd",
                    FPUOp3::MSub => "fmsub",
                };
                let rd = show_vreg_scalar(rd.to_reg(), size);
                let rn = show_vreg_scalar(rn, size);
                let rm = show_vreg_scalar(rm, size);
                let ra = show_vreg_scalar(ra, size);
                format!("{} {}, {}, {}, {}", op, rd, rn, rm, ra)
            }
            &Inst::FpuCmp { size, rn, rm } => {
                let rn = show_vreg_scalar(rn, size);
                let rm = show_vreg_scalar(rm, size);
                format!("fcmp {}, {}", rn, rm)
            }
            &Inst::FpuCSel {
                size,
                rd,
                rn,
                rm,
                cond,
            } => {
                let rd = show_vreg_scalar(rd.to_reg(), size);
                let rn = show_vreg_scalar(rn, size);
                let rm = show_vreg_scalar(rm, size);
                format!("fcsel {}, {}, {}, {}", rd, rn, rm, cond.show())
            }
            &Inst::FpuRound { op, size, rd, rn } => {
                let op = match op {
                    FpuRoundMode::Minus => "frintm",
                    FpuRoundMode::Plus => "frintp",
                    FpuRoundMode::Zero => "frintz",
                    FpuRoundMode::Nearest => "frintn",
                };
                let rd = show_vreg_scalar(rd.to_reg(), size);
                let rn = show_vreg_scalar(rn, size);
                format!("{} {}, {}", op, rd, rn)
            }
            &Inst::FpuMoveFPImm { size, rd, ref imm } => {
                let rd = show_vreg_scalar(rd.to_reg(), size);
                format!("fmov {}, #{:?}", rd, imm.value())
            }
            &Inst::FpuToInt { op, rd, rn } => {
                let (mnemonic, int_size, fp_size) = match op {
                    FpuToIntOp::F32ToU32 => ("fcvtzu", OperandSize::Size32, ScalarSize::Size32),
                    FpuToIntOp::F32ToI32 => ("fcvtzs", OperandSize::Size32, ScalarSize::Size32),
                    FpuToIntOp::F32ToU64 => ("fcvtzu", OperandSize::Size64, ScalarSize::Size32),
                    FpuToIntOp::F32ToI64 => ("fcvtzs", OperandSize::Size64, ScalarSize::Size32),
                    FpuToIntOp::F64ToU32 => ("fcvtzu", OperandSize::Size32, ScalarSize::Size64),
                    FpuToIntOp::F64ToI32 => ("fcvtzs", OperandSize::Size32, ScalarSize::Size64),
                    FpuToIntOp::F64ToU64 => ("fcvtzu", OperandSize::Size64, ScalarSize::Size64),
                    FpuToIntOp::F64ToI64 => ("fcvtzs", OperandSize::Size64, ScalarSize::Size64),
                };
                let rd = show_ireg_sized(rd.to_reg(), int_size);
                let rn = show_vreg_scalar(rn, fp_size);
                format!("{} {}, {}", mnemonic, rd, rn)
            }
            &Inst::IntToFpu { op, rd, rn } => {
                let (mnemonic, int_size, fp_size) = match op {
                    IntToFpuOp::U32ToF32 => ("ucvtf", OperandSize::Size32, ScalarSize::Size32),
                    IntToFpuOp::I32ToF32 => ("scvtf", OperandSize::Size32, ScalarSize::Size32),
                    IntToFpuOp::U64ToF32 => ("ucvtf", OperandSize::Size64, ScalarSize::Size32),
                    IntToFpuOp::I64ToF32 => ("scvtf", OperandSize::Size64, ScalarSize::Size32),
                    IntToFpuOp::U32ToF64 => ("ucvtf", OperandSize::Size32, ScalarSize::Size64),
                    IntToFpuOp::I32ToF64 => ("scvtf", OperandSize::Size32, ScalarSize::Size64),
                    IntToFpuOp::U64ToF64 => ("ucvtf", OperandSize::Size64, ScalarSize::Size64),
                    IntToFpuOp::I64ToF64 => ("scvtf", OperandSize::Size64, ScalarSize::Size64),
                };
                let rd = show_vreg_scalar(rd.to_reg(), fp_size);
                let rn = show_ireg_sized(rn, int_size);
                format!("{} {}, {}", mnemonic, rd, rn)
            }
            &Inst::MovToFpu { size, rd, rn } => {
                let fp_size = match size {
                    OperandSize::Size32 => ScalarSize::Size32,
                    OperandSize::Size64 => ScalarSize::Size64,
                };
                let rd = show_vreg_scalar(rd.to_reg(), fp_size);
                let rn = show_ireg_sized(rn, size);
                format!("fmov {}, {}", rd, rn)
            }
            &Inst::MovFromVec { rd, rn, idx, size } => {
                let int_size = match size.lane_bits() {
                    64 => OperandSize::Size64,
                    _ => OperandSize::Size32,
                };
                let rd = show_ireg_sized(rd.to_reg(), int_size);
                format!(
                    "umov {}, v{}.{}[{}]",
                    rd,
                    rn.hw_enc(),
                    lane_suffix(size),
                    idx
                )
            }
            &Inst::MovToVec { rd, rn, idx, size } => {
                let int_size = match size.lane_bits() {
                    64 => OperandSize::Size64,
                    _ => OperandSize::Size32,
                };
                let rn = show_ireg_sized(rn, int_size);
                format!(
                    "mov v{}.{}[{}], {}",
                    rd.to_reg().hw_enc(),
                    lane_suffix(size),
                    idx,
                    rn
                )
            }
            &Inst::VecDup { rd, rn, size } => {
                let int_size = match size.lane_bits() {
                    64 => OperandSize::Size64,
                    _ => OperandSize::Size32,
                };
                let rd = show_vreg_vector(rd.to_reg(), size);
                let rn = show_ireg_sized(rn, int_size);
                format!("dup {}, {}", rd, rn)
            }
            &Inst::VecDupFromFpu { rd, rn, idx, size } => {
                let rd = show_vreg_vector(rd.to_reg(), size);
                format!("dup {}, v{}.{}[{}]", rd, rn.hw_enc(), lane_suffix(size), idx)
            }
            &Inst::VecRRR {
                alu_op,
                rd,
                rn,
                rm,
                size,
            } => {
                let rd = show_vreg_vector(rd.to_reg(), size);
                let rn = show_vreg_vector(rn, size);
                let rm = show_vreg_vector(rm, size);
                format!("{} {}, {}, {}", alu_op.mnemonic(), rd, rn, rm)
            }
            &Inst::VecMisc { op, rd, rn, size } => {
                let op = match op {
                    VecMisc2::Not => "mvn",
                    VecMisc2::Neg => "neg",
                    VecMisc2::Abs => "abs",
                    VecMisc2::Cnt => "cnt",
                    VecMisc2::Rev64 => "rev64",
                    VecMisc2::Fabs => "fabs",
                    VecMisc2::Fneg => "fneg",
                    VecMisc2::Fsqrt => "fsqrt",
                };
                let rd = show_vreg_vector(rd.to_reg(), size);
                let rn = show_vreg_vector(rn, size);
                format!("{} {}, {}", op, rd, rn)
            }
            &Inst::VecLanes { op, rd, rn, size } => {
                let op = match op {
                    VecLanesOp::Addv => "addv",
                    VecLanesOp::Umaxv => "umaxv",
                    VecLanesOp::Uminv => "uminv",
                };
                let scalar = match size.lane_bits() {
                    8 => ScalarSize::Size8,
                    16 => ScalarSize::Size16,
                    _ => ScalarSize::Size32,
                };
                let rd = show_vreg_scalar(rd.to_reg(), scalar);
                let rn = show_vreg_vector(rn, size);
                format!("{} {}, {}", op, rd, rn)
            }
            &Inst::VecShiftImm {
                op,
                rd,
                rn,
                size,
                imm,
            } => {
                let op = match op {
                    VecShiftImmOp::Shl => "shl",
                    VecShiftImmOp::Ushr => "ushr",
                    VecShiftImmOp::Sshr => "sshr",
                };
                let rd = show_vreg_vector(rd.to_reg(), size);
                let rn = show_vreg_vector(rn, size);
                format!("{} {}, {}, #{}", op, rd, rn, imm)
            }
            &Inst::FpuLoad32 { rd, ref mem }
            | &Inst::FpuLoad64 { rd, ref mem }
            | &Inst::FpuLoad128 { rd, ref mem } => {
                let (base, unscaled, bytes) = self.ldst_parts();
                let size = match bytes {
                    4 => ScalarSize::Size32,
                    8 => ScalarSize::Size64,
                    _ => ScalarSize::Size128,
                };
                let rd = show_vreg_scalar(rd.to_reg(), size);
                if let AMode::Label(MemLabel::PCRel(off)) = mem {
                    return format!("{} {}, pc+{}", base, rd, off);
                }
                format!("{} {}, {}", mem_mnemonic(base, unscaled, mem), rd, mem.show(bytes))
            }
            &Inst::FpuStore32 { rd, ref mem }
            | &Inst::FpuStore64 { rd, ref mem }
            | &Inst::FpuStore128 { rd, ref mem } => {
                let (base, unscaled, bytes) = self.ldst_parts();
                let size = match bytes {
                    4 => ScalarSize::Size32,
                    8 => ScalarSize::Size64,
                    _ => ScalarSize::Size128,
                };
                let rd = show_vreg_scalar(rd, size);
                format!("{} {}, {}", mem_mnemonic(base, unscaled, mem), rd, mem.show(bytes))
            }
            &Inst::SveAluRRR {
                alu_op,
                size,
                rd,
                rn,
                rm,
            } => {
                let size = if alu_op.is_bitwise() {
                    ElementSize::Size64
                } else {
                    size
                };
                let rd = show_zreg(rd.to_reg(), size);
                let rn = show_zreg(rn, size);
                let rm = show_zreg(rm, size);
                format!("{} {}, {}, {}", alu_op.mnemonic(), rd, rn, rm)
            }
            &Inst::SveAluRPred {
                alu_op,
                size,
                rdn,
                pg,
                rm,
            } => {
                let rdn = show_zreg(rdn.to_reg(), size);
                let pg = show_preg(pg);
                let rm = show_zreg(rm, size);
                format!("{} {}, {}/m, {}, {}", alu_op.mnemonic(), rdn, pg, rdn, rm)
            }
            &Inst::SveDup { size, rd, rn } => {
                let rd = show_zreg(rd.to_reg(), size);
                let int_size = match size {
                    ElementSize::Size64 => OperandSize::Size64,
                    _ => OperandSize::Size32,
                };
                let rn = show_ireg_sized(rn, int_size);
                format!("mov {}, {}", rd, rn)
            }
            &Inst::SveCpyImm {
                size,
                rd,
                pg,
                mode,
                imm,
            } => {
                let rd = show_zreg(rd.to_reg(), size);
                format!("mov {}, {}/{}, #{}", rd, show_preg(pg), mode.suffix(), imm)
            }
            &Inst::SvePtrue { size, pd, pattern } => {
                let pd = show_preg_sized(pd.to_reg(), size);
                match pattern {
                    SvePattern::All => format!("ptrue {}", pd),
                    _ => format!("ptrue {}, {}", pd, pattern.show()),
                }
            }
            &Inst::SveWhile {
                op,
                size,
                scalar_size,
                pd,
                rn,
                rm,
            } => {
                let pd = show_preg_sized(pd.to_reg(), size);
                let rn = show_ireg_sized(rn, scalar_size);
                let rm = show_ireg_sized(rm, scalar_size);
                format!("{} {}, {}, {}", op.mnemonic(), pd, rn, rm)
            }
            &Inst::SveCnt { size, rd, pattern } => {
                let mnemonic = match size {
                    ElementSize::Size8 => "cntb",
                    ElementSize::Size16 => "cnth",
                    ElementSize::Size32 => "cntw",
                    ElementSize::Size64 => "cntd",
                };
                let rd = show_ireg_sized(rd.to_reg(), OperandSize::Size64);
                match pattern {
                    SvePattern::All => format!("{} {}", mnemonic, rd),
                    _ => format!("{} {}, {}", mnemonic, rd, pattern.show()),
                }
            }
            &Inst::SveRdvl { rd, imm } => {
                let rd = show_ireg_sized(rd.to_reg(), OperandSize::Size64);
                format!("rdvl {}, #{}", rd, imm)
            }
            &Inst::SveLoad {
                size,
                rt,
                pg,
                ref mem,
            } => {
                let mnemonic = match size {
                    ElementSize::Size8 => "ld1b",
                    ElementSize::Size16 => "ld1h",
                    ElementSize::Size32 => "ld1w",
                    ElementSize::Size64 => "ld1d",
                };
                let rt = show_zreg(rt.to_reg(), size);
                format!(
                    "{} {{ {} }}, {}/z, {}",
                    mnemonic,
                    rt,
                    show_preg(pg),
                    mem.show(size)
                )
            }
            &Inst::SveStore {
                size,
                rt,
                pg,
                ref mem,
            } => {
                let mnemonic = match size {
                    ElementSize::Size8 => "st1b",
                    ElementSize::Size16 => "st1h",
                    ElementSize::Size32 => "st1w",
                    ElementSize::Size64 => "st1d",
                };
                let rt = show_zreg(rt, size);
                format!(
                    "{} {{ {} }}, {}, {}",
                    mnemonic,
                    rt,
                    show_preg(pg),
                    mem.show(size)
                )
            }
            &Inst::Pac { key, rd, rn } => {
                let rd = show_ireg_sized(rd.to_reg(), OperandSize::Size64);
                let rn = show_ireg_sized(rn, OperandSize::Size64);
                format!("pac{} {}, {}", key.suffix(), rd, rn)
            }
            &Inst::Aut { key, rd, rn } => {
                let rd = show_ireg_sized(rd.to_reg(), OperandSize::Size64);
                let rn = show_ireg_sized(rn, OperandSize::Size64);
                format!("aut{} {}, {}", key.suffix(), rd, rn)
            }
            &Inst::PacZ { key, rd } => {
                let rd = show_ireg_sized(rd.to_reg(), OperandSize::Size64);
                format!("pac{} {}", key.z_suffix(), rd)
            }
            &Inst::AutZ { key, rd } => {
                let rd = show_ireg_sized(rd.to_reg(), OperandSize::Size64);
                format!("aut{} {}", key.z_suffix(), rd)
            }
            &Inst::Xpac { instruction, rd } => {
                let rd = show_ireg_sized(rd.to_reg(), OperandSize::Size64);
                format!("xpac{} {}", if instruction { "i" } else { "d" }, rd)
            }
            &Inst::PacHint { op } => {
                let s = match op {
                    PacHintOp::PaciaSp => "paciasp",
                    PacHintOp::PacibSp => "pacibsp",
                    PacHintOp::AutiaSp => "autiasp",
                    PacHintOp::AutibSp => "autibsp",
                    PacHintOp::PaciaZ => "paciaz",
                    PacHintOp::PacibZ => "pacibz",
                    PacHintOp::AutiaZ => "autiaz",
                    PacHintOp::AutibZ => "autibz",
                    PacHintOp::XpacLri => "xpaclri",
                };
                s.to_string()
            }
            &Inst::RetAuth { key } => match key {
                APIKey::IA => "retaa".to_string(),
                APIKey::IB => "retab".to_string(),
                _ => panic!("ret-auth requires an instruction key"),
            },
            &Inst::BrAuth { key, rn, rm } => {
                let suffix = match key {
                    APIKey::IA => "a",
                    APIKey::IB => "b",
                    _ => panic!("br-auth requires an instruction key"),
                };
                let rn = show_ireg_sized(rn, OperandSize::Size64);
                let rm = show_ireg_sized(rm, OperandSize::Size64);
                format!("bra{} {}, {}", suffix, rn, rm)
            }
            &Inst::BlrAuth { key, rn, rm } => {
                let suffix = match key {
                    APIKey::IA => "a",
                    APIKey::IB => "b",
                    _ => panic!("blr-auth requires an instruction key"),
                };
                let rn = show_ireg_sized(rn, OperandSize::Size64);
                let rm = show_ireg_sized(rm, OperandSize::Size64);
                format!("blra{} {}, {}", suffix, rn, rm)
            }
        }
    }
}

fn lane_suffix(size: VectorSize) -> &'static str {
    match size.lane_bits() {
        8 => "b",
        16 => "h",
        32 => "s",
        _ => "d",
    }
}
