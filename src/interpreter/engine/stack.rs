use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, symbols::SlotId, value::operand::Operand},
};

/// Saved state pushed on the frame stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    /// A script-defined function call.
    Call {
        /// Program index of the calling line.
        return_pc:     usize,
        /// Indentation level of the calling line.
        return_indent: usize,
        /// Slot receiving the return value, from the caller's `>` capture.
        capture:       Option<SlotId>,
    },
    /// An active `while` loop.
    Loop {
        /// Program index of the `while` line.
        pc:     usize,
        /// Indentation level inside the loop body.
        indent: usize,
    },
}

/// Argument stack and frame stack sharing one capacity.
#[derive(Debug)]
pub struct CallStack {
    args:     Vec<Operand>,
    frames:   Vec<Frame>,
    capacity: usize,
}

impl CallStack {
    /// Creates empty stacks holding at most `capacity` cells between them.
    #[must_use]
    pub const fn new(capacity: usize) -> Self {
        Self { args: Vec::new(),
               frames: Vec::new(),
               capacity }
    }

    /// Pushes a native's argument.
    ///
    /// # Errors
    /// `StackOverflow` when every cell is taken.
    pub fn push_arg(&mut self, operand: Operand, line: usize) -> EvalResult<()> {
        self.ensure_room(line)?;
        self.args.push(operand);
        Ok(())
    }

    /// Drops the `count` topmost arguments.
    pub fn pop_args(&mut self, count: usize) {
        let keep = self.args.len().saturating_sub(count);
        self.args.truncate(keep);
    }

    /// Returns the argument `index` positions below the top.
    ///
    /// Arguments are pushed last to first, so index `0` is the first argument
    /// of the current native.
    #[must_use]
    pub fn arg(&self, index: usize) -> Option<&Operand> {
        self.args
            .len()
            .checked_sub(index + 1)
            .and_then(|position| self.args.get(position))
    }

    /// Pushes a frame.
    ///
    /// # Errors
    /// `StackOverflow` when every cell is taken.
    pub fn push_frame(&mut self, frame: Frame, line: usize) -> EvalResult<()> {
        self.ensure_room(line)?;
        self.frames.push(frame);
        Ok(())
    }

    /// Pops the topmost frame.
    ///
    /// # Errors
    /// `StackUnderflow` when there is no frame.
    pub fn pop_frame(&mut self, line: usize) -> EvalResult<Frame> {
        self.frames.pop().ok_or(RuntimeError::StackUnderflow { line })
    }

    /// Returns the topmost frame.
    #[must_use]
    pub fn top_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Number of active script calls.
    #[must_use]
    pub fn call_depth(&self) -> usize {
        self.frames
            .iter()
            .filter(|frame| matches!(frame, Frame::Call { .. }))
            .count()
    }

    /// Number of cells in use.
    #[must_use]
    pub fn size(&self) -> usize {
        self.args.len() + self.frames.len()
    }

    /// Returns `true` if both stacks are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.args.is_empty() && self.frames.is_empty()
    }

    /// Empties both stacks.
    pub fn clear(&mut self) {
        self.args.clear();
        self.frames.clear();
    }

    fn ensure_room(&self, line: usize) -> EvalResult<()> {
        if self.size() >= self.capacity {
            return Err(RuntimeError::StackOverflow { capacity: self.capacity,
                                                     line });
        }
        Ok(())
    }
}
