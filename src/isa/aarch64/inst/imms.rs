//! AArch64 ISA definitions: immediate constants.
//!
//! Each type here is a witness: it can only be constructed from a value
//! that its instruction field can actually hold, so emission never has to
//! range-check. Fallible constructors are the `maybe_from_*` functions.

use super::args::{OperandSize, ScalarSize};

/// A signed, scaled 7-bit offset, as used by the load/store-pair forms.
#[derive(Clone, Copy, Debug)]
pub struct SImm7Scaled {
    value: i16,
    scale: u8,
}

impl SImm7Scaled {
    /// Create a SImm7Scaled from a raw offset and the access size in
    /// bytes, if possible.
    pub fn maybe_from_i64(value: i64, scale: u8) -> Option<SImm7Scaled> {
        debug_assert!(scale.is_power_of_two());
        let scale = i64::from(scale);
        let upper_limit = 63 * scale;
        let lower_limit = -(64 * scale);
        if value >= lower_limit && value <= upper_limit && (value & (scale - 1)) == 0 {
            Some(SImm7Scaled {
                value: value as i16,
                scale: scale as u8,
            })
        } else {
            None
        }
    }

    /// Create a zero immediate of this format.
    pub fn zero(scale: u8) -> SImm7Scaled {
        SImm7Scaled { value: 0, scale }
    }

    /// The byte offset this immediate represents.
    pub fn value(&self) -> i16 {
        self.value
    }

    /// Bits for encoding.
    pub fn bits(&self) -> u32 {
        ((self.value / i16::from(self.scale)) as u32) & 0x7f
    }
}

/// A signed 9-bit offset, as used by the unscaled and pre/post-indexed
/// load/store forms.
#[derive(Clone, Copy, Debug)]
pub struct SImm9 {
    value: i16,
}

impl SImm9 {
    /// Create a signed 9-bit offset from a full-range value, if possible.
    pub fn maybe_from_i64(value: i64) -> Option<SImm9> {
        if (-256..=255).contains(&value) {
            Some(SImm9 {
                value: value as i16,
            })
        } else {
            None
        }
    }

    /// Create a zero immediate of this format.
    pub fn zero() -> SImm9 {
        SImm9 { value: 0 }
    }

    /// The byte offset this immediate represents.
    pub fn value(&self) -> i16 {
        self.value
    }

    /// Bits for encoding.
    pub fn bits(&self) -> u32 {
        (self.value as u32) & 0x1ff
    }
}

/// An unsigned, scaled 12-bit offset, as used by the register-plus-offset
/// load/store forms.
#[derive(Clone, Copy, Debug)]
pub struct UImm12Scaled {
    value: u16,
    scale: u8,
}

impl UImm12Scaled {
    /// Create a UImm12Scaled from a raw offset and the access size in
    /// bytes, if possible.
    pub fn maybe_from_i64(value: i64, scale: u8) -> Option<UImm12Scaled> {
        debug_assert!(scale.is_power_of_two());
        let scale = i64::from(scale);
        let limit = 4095 * scale;
        if value >= 0 && value <= limit && (value & (scale - 1)) == 0 {
            Some(UImm12Scaled {
                value: value as u16,
                scale: scale as u8,
            })
        } else {
            None
        }
    }

    /// Create a zero immediate of this format.
    pub fn zero(scale: u8) -> UImm12Scaled {
        UImm12Scaled { value: 0, scale }
    }

    /// The byte offset this immediate represents.
    pub fn value(&self) -> u16 {
        self.value
    }

    /// Bits for encoding.
    pub fn bits(&self) -> u32 {
        (u32::from(self.value) / u32::from(self.scale)) & 0xfff
    }
}

/// A signed 4-bit vector-length multiple, as used by the SVE contiguous
/// load/store `mul vl` addressing form.
#[derive(Clone, Copy, Debug)]
pub struct SImm4 {
    value: i8,
}

impl SImm4 {
    /// Create a signed 4-bit immediate, if possible.
    pub fn maybe_from_i64(value: i64) -> Option<SImm4> {
        if (-8..=7).contains(&value) {
            Some(SImm4 { value: value as i8 })
        } else {
            None
        }
    }

    /// Create a zero immediate of this format.
    pub fn zero() -> SImm4 {
        SImm4 { value: 0 }
    }

    /// The vector-length multiple this immediate represents.
    pub fn value(&self) -> i8 {
        self.value
    }

    /// Bits for encoding.
    pub fn bits(&self) -> u32 {
        (self.value as u32) & 0xf
    }
}

/// A shifted immediate in the arithmetic `imm12` format: 12 bits, shifted
/// left by 0 or 12 places.
#[derive(Clone, Copy, Debug)]
pub struct Imm12 {
    /// The immediate bits.
    pub bits: u16,
    /// Whether the immediate bits are shifted left by 12 or not.
    pub shift12: bool,
}

impl Imm12 {
    /// Compute an Imm12 from raw bits, if possible.
    pub fn maybe_from_u64(val: u64) -> Option<Imm12> {
        if val & !0xfff == 0 {
            Some(Imm12 {
                bits: val as u16,
                shift12: false,
            })
        } else if val & !(0xfff << 12) == 0 {
            Some(Imm12 {
                bits: (val >> 12) as u16,
                shift12: true,
            })
        } else {
            None
        }
    }

    /// Create a zero immediate of this format.
    pub fn zero() -> Imm12 {
        Imm12 {
            bits: 0,
            shift12: false,
        }
    }

    /// The value this immediate represents.
    pub fn value(&self) -> u32 {
        u32::from(self.bits) << if self.shift12 { 12 } else { 0 }
    }

    /// Bits for the 2-bit "shift" field.
    pub fn shift_bits(&self) -> u32 {
        if self.shift12 {
            0b01
        } else {
            0b00
        }
    }

    /// Bits for the 12-bit "imm12" field.
    pub fn imm_bits(&self) -> u32 {
        u32::from(self.bits)
    }
}

/// An immediate for logical instructions (and/orr/eor/ands): a bitmask
/// pattern described by element size, run length and rotation.
#[derive(Clone, Copy, Debug)]
pub struct ImmLogic {
    /// The value the pattern decodes to, masked to the operand size.
    value: u64,
    /// `N` field.
    n: bool,
    /// `immr` field: rotate amount.
    r: u8,
    /// `imms` field: element size and run length.
    s: u8,
    /// Register width the immediate applies at.
    size: OperandSize,
}

/// Is `v` a non-empty contiguous run of ones (possibly shifted up)?
fn is_shifted_mask(v: u64) -> bool {
    v != 0 && {
        let filled = (v - 1) | v;
        filled & filled.wrapping_add(1) == 0
    }
}

impl ImmLogic {
    /// Compute an ImmLogic from raw bits, if possible. A logical immediate
    /// is a power-of-two-sized element, itself a rotated run of ones,
    /// replicated to fill the register; all-zeros and all-ones are not
    /// expressible.
    pub fn maybe_from_u64(value: u64, size: OperandSize) -> Option<ImmLogic> {
        if !size.is64() && value > u64::from(u32::MAX) {
            return None;
        }
        let original = value;
        // Replicate a 32-bit value so the element search below is uniform.
        let value = if size.is64() {
            value
        } else {
            value | (value << 32)
        };
        if value == 0 || value == u64::MAX {
            return None;
        }

        // Find the smallest element size whose replication produces the
        // value.
        let mut esize = 64u32;
        while esize > 2 {
            let half = esize / 2;
            let mask = (1u64 << half) - 1;
            if (value & mask) != ((value >> half) & mask) {
                break;
            }
            esize = half;
        }

        let emask = if esize == 64 {
            u64::MAX
        } else {
            (1u64 << esize) - 1
        };
        let elem = value & emask;

        // The element must be a run of ones, possibly wrapping around the
        // element boundary. `rotation` is the run's start position,
        // `ones` its length.
        let (rotation, ones) = if is_shifted_mask(elem) {
            let tz = elem.trailing_zeros();
            (tz, (elem >> tz).trailing_ones())
        } else {
            let widened = elem | !emask;
            if !is_shifted_mask(!widened) {
                return None;
            }
            let leading = widened.leading_ones();
            (
                64 - leading,
                leading + widened.trailing_ones() - (64 - esize),
            )
        };

        let immr = esize.wrapping_sub(rotation) & (esize - 1);
        // The imms field prefixes the run length with the element-size
        // marker pattern (11110x for 2-bit elements up through 0xxxxx for
        // 32-bit, with N covering the 64-bit case).
        let nimms = (!(esize - 1) << 1) | (ones - 1);
        let n = ((nimms >> 6) & 1) ^ 1;
        Some(ImmLogic {
            value: original,
            n: n != 0,
            r: immr as u8,
            s: (nimms & 0x3f) as u8,
            size,
        })
    }

    /// The value this immediate represents.
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Bits ready for encoding: N:1, immr:6, imms:6.
    pub fn enc_bits(&self) -> u32 {
        ((self.n as u32) << 12) | (u32::from(self.r) << 6) | u32::from(self.s)
    }
}

/// An immediate shift amount for the shift-immediate aliases.
#[derive(Clone, Copy, Debug)]
pub struct ImmShift {
    /// 6-bit shift amount.
    pub imm: u8,
}

impl ImmShift {
    /// Create an ImmShift from raw bits, if possible.
    pub fn maybe_from_u64(val: u64) -> Option<ImmShift> {
        if val < 64 {
            Some(ImmShift { imm: val as u8 })
        } else {
            None
        }
    }

    /// Get the immediate value.
    pub fn value(&self) -> u8 {
        self.imm
    }
}

/// A 16-bit immediate chunk with a lane shift, for the move-wide family
/// (movz/movn/movk).
#[derive(Clone, Copy, Debug)]
pub struct MoveWideConst {
    /// The 16-bit chunk.
    pub bits: u16,
    /// Result bit position is `16 * shift`.
    pub shift: u8,
}

impl MoveWideConst {
    /// Construct a MoveWideConst from an arbitrary 64-bit constant, if it
    /// is a single 16-bit chunk at a 16-bit-aligned position.
    pub fn maybe_from_u64(value: u64) -> Option<MoveWideConst> {
        for shift in 0..4 {
            let mask = 0xffffu64 << (16 * shift);
            if value & !mask == 0 {
                return Some(MoveWideConst {
                    bits: (value >> (16 * shift)) as u16,
                    shift,
                });
            }
        }
        None
    }

    /// Construct a MoveWideConst from an explicit chunk and lane, if the
    /// lane is valid.
    pub fn maybe_with_shift(bits: u16, shift: u8) -> Option<MoveWideConst> {
        if shift <= 3 {
            Some(MoveWideConst { bits, shift })
        } else {
            None
        }
    }

    /// Create a zero immediate of this format.
    pub fn zero() -> MoveWideConst {
        MoveWideConst { bits: 0, shift: 0 }
    }
}

/// An 8-bit floating-point immediate in the `fmov` (immediate) expanded
/// form: 1 sign bit, 3 exponent bits, 4 mantissa bits.
#[derive(Clone, Copy, Debug)]
pub struct ASIMDFPModImm {
    imm8: u8,
    size: ScalarSize,
}

impl ASIMDFPModImm {
    /// Construct from the raw bit pattern of an f32 or f64 value, if that
    /// value is expressible in the 8-bit form.
    pub fn maybe_from_u64(value: u64, size: ScalarSize) -> Option<ASIMDFPModImm> {
        match size {
            ScalarSize::Size32 => {
                let value = u32::try_from(value).ok()?;
                // aBbbbbbc defgh000 00000000 00000000
                let bot19 = value & 0x7ffff;
                if bot19 != 0 {
                    return None;
                }
                let b = (value >> 25) & 0x1f;
                if b != 0b11111 && b != 0b00000 {
                    return None;
                }
                if ((value >> 30) & 1) == ((value >> 29) & 1) {
                    return None;
                }
                let sign = (value >> 31) as u8;
                let b_field = ((value >> 29) & 1) as u8;
                let cdefgh = ((value >> 19) & 0x3f) as u8;
                Some(ASIMDFPModImm {
                    imm8: (sign << 7) | (b_field << 6) | cdefgh,
                    size,
                })
            }
            ScalarSize::Size64 => {
                // aBbbbbbb bbcdefgh followed by 48 zero bits
                let bot48 = value & 0xffff_ffff_ffff;
                if bot48 != 0 {
                    return None;
                }
                let b = (value >> 54) & 0xff;
                if b != 0b1111_1111 && b != 0b0000_0000 {
                    return None;
                }
                if ((value >> 62) & 1) == ((value >> 61) & 1) {
                    return None;
                }
                let sign = (value >> 63) as u8;
                let b_field = ((value >> 61) & 1) as u8;
                let cdefgh = ((value >> 48) & 0x3f) as u8;
                Some(ASIMDFPModImm {
                    imm8: (sign << 7) | (b_field << 6) | cdefgh,
                    size,
                })
            }
            _ => None,
        }
    }

    /// Bits for the 8-bit `imm8` field.
    pub fn enc_bits(&self) -> u32 {
        u32::from(self.imm8)
    }

    /// The value this immediate represents, as an f64 (exact for both
    /// operand sizes).
    pub fn value(&self) -> f64 {
        let sign = u64::from(self.imm8 >> 7);
        let b = u64::from((self.imm8 >> 6) & 1);
        let cdefgh = u64::from(self.imm8 & 0x3f);
        let not_b = b ^ 1;
        let rep = if b != 0 { 0xffu64 } else { 0 };
        let bits = (sign << 63) | (not_b << 62) | (rep << 54) | (cdefgh << 48);
        f64::from_bits(bits)
    }
}
