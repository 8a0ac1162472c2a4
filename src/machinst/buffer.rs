//! A code buffer that accumulates emitted instruction words and resolves
//! label references at finalization.
//!
//! Labels are created with `get_label`, given an offset with `bind_label`,
//! and referenced by branch emission through `use_label_at_offset`. A label
//! may be bound before or after its uses; `finish` patches every recorded
//! fixup once all offsets are known and reports out-of-range or unbound
//! references as errors rather than emitting corrupt code.

use crate::binemit::{CodeOffset, CodeSink, LabelUse};
use crate::machinst::MachLabel;
use crate::result::{CodegenError, CodegenResult};

use log::trace;
use smallvec::SmallVec;

/// A fixup to perform on the buffer once code is emitted: a use of `label`
/// at `offset`, with field layout described by `kind`.
#[derive(Clone, Copy, Debug)]
struct MachLabelFixup {
    label: MachLabel,
    offset: CodeOffset,
    kind: LabelUse,
}

/// A buffer of emitted code with label support.
#[derive(Default)]
pub struct CodeBuffer {
    data: Vec<u8>,
    label_offsets: Vec<Option<CodeOffset>>,
    fixups: SmallVec<[MachLabelFixup; 16]>,
}

impl CodeBuffer {
    /// Create a new, empty code buffer.
    pub fn new() -> CodeBuffer {
        CodeBuffer::default()
    }

    /// Current offset from the start of the buffer.
    pub fn cur_offset(&self) -> CodeOffset {
        self.data.len() as CodeOffset
    }

    /// Allocate a new label, initially unbound.
    pub fn get_label(&mut self) -> MachLabel {
        let l = self.label_offsets.len() as u32;
        self.label_offsets.push(None);
        trace!("CodeBuffer: get label {}", l);
        MachLabel::from_index(l)
    }

    /// Bind `label` to the current offset.
    pub fn bind_label(&mut self, label: MachLabel) {
        trace!(
            "CodeBuffer: bind label {} at offset {}",
            label,
            self.cur_offset()
        );
        debug_assert_eq!(self.cur_offset() % LabelUse::ALIGN, 0);
        let slot = &mut self.label_offsets[label.index() as usize];
        debug_assert!(slot.is_none(), "label {} bound twice", label);
        *slot = Some(self.data.len() as CodeOffset);
    }

    /// The offset `label` is bound to, if it has been bound.
    pub fn label_offset(&self, label: MachLabel) -> Option<CodeOffset> {
        self.label_offsets[label.index() as usize]
    }

    /// Finalize the buffer: apply all label fixups and return the code
    /// bytes. Fails if any referenced label is unbound or any resolved
    /// offset exceeds its field's range.
    pub fn finish(mut self) -> CodegenResult<Vec<u8>> {
        if self.data.len() > CodeOffset::MAX as usize {
            return Err(CodegenError::CodeTooLarge);
        }
        for fixup in core::mem::take(&mut self.fixups) {
            let MachLabelFixup {
                label,
                offset,
                kind,
            } = fixup;
            let label_offset = self
                .label_offset(label)
                .ok_or(CodegenError::UnboundLabel(label.index()))?;
            let rel = (label_offset as i64) - (offset as i64);
            if rel > kind.max_pos_range() as i64 || rel < -(kind.max_neg_range() as i64) {
                return Err(CodegenError::OffsetOutOfRange {
                    kind: kind.name(),
                    offset: rel,
                });
            }
            trace!(
                "CodeBuffer: patch {} at offset {} -> label {} at {}",
                kind.name(),
                offset,
                label,
                label_offset
            );
            let site = offset as usize;
            let mut word = [0u8; 4];
            word.copy_from_slice(&self.data[site..site + 4]);
            kind.patch(&mut word, offset, label_offset);
            self.data[site..site + 4].copy_from_slice(&word);
        }
        Ok(self.data)
    }
}

impl CodeSink for CodeBuffer {
    fn offset(&self) -> CodeOffset {
        self.cur_offset()
    }

    fn put1(&mut self, x: u8) {
        self.data.push(x);
    }

    fn put2(&mut self, x: u16) {
        self.data.extend_from_slice(&x.to_le_bytes());
    }

    fn put4(&mut self, x: u32) {
        self.data.extend_from_slice(&x.to_le_bytes());
    }

    fn put8(&mut self, x: u64) {
        self.data.extend_from_slice(&x.to_le_bytes());
    }

    fn use_label_at_offset(&mut self, offset: CodeOffset, label: MachLabel, kind: LabelUse) {
        trace!(
            "CodeBuffer: use label {} at offset {} kind {}",
            label,
            offset,
            kind.name()
        );
        debug_assert_eq!(offset % LabelUse::ALIGN, 0);
        self.fixups.push(MachLabelFixup {
            label,
            offset,
            kind,
        });
    }
}
