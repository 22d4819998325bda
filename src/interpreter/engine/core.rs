use std::{
    io::{self, BufRead},
    rc::Rc,
};

use tracing::{debug, error, trace, warn};

use crate::{
    ast::Line,
    error::{LineError, RuntimeError},
    interpreter::{
        engine::{
            config::EngineConfig,
            host::Host,
            stack::{CallStack, Frame},
        },
        evaluator::core::{EvalResult, ExprContext},
        function::{
            control::{BLOCK_CLOSERS, BLOCK_OPENERS},
            core::register_core,
        },
        parser::core::parse_line,
        symbols::{SlotId, SymbolTable},
        value::{
            core::{Callable, Native, NativeFn, Value},
            operand::Operand,
        },
    },
};

/// The interpreter: program store, symbol table, stacks and control state.
///
/// Lines are fed one at a time. Each fed line is tokenized, appended to the
/// program store and run immediately; running continues through any lines a
/// jump brings back into play (loop bodies, function bodies) until the end of
/// the store is reached.
///
/// # Example
/// ```
/// use linterp::interpreter::{
///     engine::{config::EngineConfig, core::Interpreter, host::{Host, SharedBuffer}},
///     value::core::Value,
/// };
///
/// let output = SharedBuffer::default();
/// let host = Host::new(output.clone(), std::io::empty());
/// let mut interp = Interpreter::with_host(EngineConfig::default(), host).unwrap();
///
/// interp.feed_line("set x (2 * 21)").unwrap();
/// assert_eq!(interp.variable("x"), Some(&Value::integer(42)));
/// ```
#[derive(Debug)]
pub struct Interpreter {
    config:  EngineConfig,
    symbols: SymbolTable,
    program: Vec<Rc<Line>>,
    stack:   CallStack,
    pc:      usize,
    indent:  usize,
    skip:    Option<usize>,
    jump:    Option<usize>,
    ret:     Option<SlotId>,
    argc:    usize,
    fed:     usize,
    host:    Host,
}

impl Interpreter {
    /// Creates an interpreter over the process's standard streams.
    ///
    /// # Errors
    /// `SymbolTableFull` if the configured symbol capacity cannot hold the
    /// core natives.
    pub fn new(config: EngineConfig) -> EvalResult<Self> {
        Self::with_host(config, Host::stdio())
    }

    /// Creates an interpreter over the given host and registers the core
    /// natives (`if`, `while`, `func`, `end`, `ret`, `set`).
    ///
    /// # Errors
    /// `SymbolTableFull` if the configured symbol capacity cannot hold the
    /// core natives.
    pub fn with_host(config: EngineConfig, mut host: Host) -> EvalResult<Self> {
        if let Some(seed) = config.seed {
            host.reseed(seed);
        }

        let mut interp = Self { symbols: SymbolTable::new(config.max_symbols),
                                program: Vec::new(),
                                stack: CallStack::new(config.max_stack),
                                pc: 0,
                                indent: 0,
                                skip: None,
                                jump: None,
                                ret: None,
                                argc: 0,
                                fed: 0,
                                host,
                                config };
        register_core(&mut interp)?;
        Ok(interp)
    }

    /// Binds `name` to a native implementation.
    ///
    /// Registering a name again replaces the previous binding.
    ///
    /// # Errors
    /// `SymbolTableFull` when the name is new and the table is full.
    pub fn register_native(&mut self, name: &str, func: NativeFn) -> EvalResult<SlotId> {
        self.bind_native(Native::new(name, func))
    }

    /// Reserves `name` as a native with no implementation.
    ///
    /// Lines calling it are rejected with `MissingNative` until an
    /// implementation is registered.
    ///
    /// # Errors
    /// `SymbolTableFull` when the name is new and the table is full.
    pub fn declare_native(&mut self, name: &str) -> EvalResult<SlotId> {
        self.bind_native(Native::declared(name))
    }

    fn bind_native(&mut self, native: Native) -> EvalResult<SlotId> {
        let slot = self.symbols.get_or_create(native.name(), self.fed)?;
        self.symbols.set(slot, Value::native(native));
        Ok(slot)
    }

    /// Feeds every line of `source`, continuing after failures.
    ///
    /// # Returns
    /// The errors of the lines that failed, in order.
    pub fn feed_source(&mut self, source: &str) -> Vec<LineError> {
        source.lines().filter_map(|text| self.feed_line(text).err()).collect()
    }

    /// Feeds every line read from `reader`, handing each failed line's error
    /// to `report` and carrying on.
    ///
    /// Bytes that are not valid UTF-8 are replaced with `U+FFFD`, so such a
    /// line still loads or fails on its own.
    ///
    /// # Errors
    /// The I/O error that stopped the read.
    pub fn feed_reader<R: BufRead>(&mut self,
                                   mut reader: R,
                                   mut report: impl FnMut(LineError))
                                   -> io::Result<()> {
        let mut bytes = Vec::new();
        loop {
            bytes.clear();
            if reader.read_until(b'\n', &mut bytes)? == 0 {
                return Ok(());
            }
            let decoded: &str = &String::from_utf8_lossy(&bytes);
            let text = decoded.strip_suffix('\n').unwrap_or(decoded);
            let text = text.strip_suffix('\r').unwrap_or(text);
            if let Err(err) = self.feed_line(text) {
                report(err);
            }
        }
    }

    /// Tokenizes one line, appends it to the program store and runs from it.
    ///
    /// Blank and comment lines only advance the line counter. A line that
    /// fails to tokenize or validate is discarded, and so is a freshly fed
    /// line whose own execution fails with a non-fatal error; either way the
    /// interpreter is left as it was before the call.
    ///
    /// # Errors
    /// - The parse or validation error of the line itself.
    /// - The first non-fatal error raised by a line reached in this run.
    /// - A fatal error, after which the run has been aborted.
    pub fn feed_line(&mut self, text: &str) -> Result<(), LineError> {
        self.fed += 1;
        let Some(line) = parse_line(text, self.fed, &mut self.symbols)? else {
            return Ok(());
        };

        if self.program.len() >= self.config.max_lines {
            return Err(RuntimeError::ProgramStoreFull { capacity: self.config.max_lines,
                                                        line:     line.line, }.into());
        }
        self.validate(&line)?;

        debug!(line = line.line, tokens = line.tokens.len(), "loaded line");
        self.program.push(Rc::new(line));
        self.run(self.program.len() - 1)
    }

    /// Checks that a line can be dispatched: it has a callee, the callee is
    /// a function and, for natives, has an implementation.
    fn validate(&self, line: &Line) -> EvalResult<()> {
        let callee = line.callee()
                         .ok_or(RuntimeError::EmptyLine { line: line.line })?;
        match callee.resolve(&self.symbols).as_callable() {
            Some(Callable::Native(native)) if native.func().is_none() => {
                Err(RuntimeError::MissingNative { name: native.name().to_string(),
                                                  line: line.line, })
            },
            Some(_) => Ok(()),
            None => Err(RuntimeError::NotCallable { name: self.operand_name(callee),
                                                    line: line.line, }),
        }
    }

    /// Runs from `start` until the end of the program store.
    fn run(&mut self, start: usize) -> Result<(), LineError> {
        self.pc = start;
        let mut first_error = None;
        let mut fresh = true;

        while self.pc < self.program.len() {
            let before = (self.indent, self.skip);

            match self.step() {
                Ok(()) => {},
                Err(err) if err.is_fatal() => {
                    error!(line = err.line(), code = err.code(), "{err}");
                    self.abort();
                    return Err(err.into());
                },
                Err(err) if fresh => {
                    debug!(line = err.line(), code = err.code(), "discarding line: {err}");
                    (self.indent, self.skip) = before;
                    self.program.pop();
                    self.jump = None;
                    self.pc = self.program.len();
                    return Err(err.into());
                },
                Err(err) => {
                    warn!(line = err.line(), code = err.code(), "skipping line: {err}");
                    first_error.get_or_insert(err);
                },
            }

            fresh = false;
            self.pc = self.jump.take().unwrap_or(self.pc + 1);
        }

        first_error.map_or(Ok(()), |err| Err(err.into()))
    }

    /// Fetches and executes the line at `pc`.
    fn step(&mut self) -> EvalResult<()> {
        let line = Rc::clone(&self.program[self.pc]);
        let callee = line.callee()
                         .ok_or(RuntimeError::EmptyLine { line: line.line })?;
        let callable = callee.resolve(&self.symbols).as_callable().cloned();

        let opened = match &callable {
            Some(Callable::Native(native)) => self.track_indent(native.name(), line.line)?,
            _ => false,
        };
        if self.is_skipping() {
            trace!(pc = self.pc, line = line.line, indent = self.indent, "skipped");
            return Ok(());
        }

        let result = self.dispatch(&line, callee, callable);
        // A block whose opener failed must not run.
        if opened && result.is_err() {
            self.skip();
        }
        result
    }

    /// Resolves a line's arguments and hands them to its callee.
    fn dispatch(&mut self,
                line: &Line,
                callee: &Operand,
                callable: Option<Callable>)
                -> EvalResult<()> {
        let callable = callable.ok_or_else(|| RuntimeError::NotCallable { name: self.operand_name(callee),
                                                                          line: line.line, })?;
        let args = line.arguments()
                       .iter()
                       .map(|operand| self.resolve_argument(operand, line.line))
                       .collect::<EvalResult<Vec<_>>>()?;

        trace!(pc = self.pc, line = line.line, indent = self.indent, args = args.len(), "dispatch");
        match callable {
            Callable::Native(native) => self.call_native(&native, args, line.capture, line.line),
            Callable::Script(target) => self.enter_call(target, args, line.capture, line.line),
        }
    }

    /// Applies the block keywords' effect on indentation.
    ///
    /// Returns `true` when `name` opened a block.
    fn track_indent(&mut self, name: &str, line: usize) -> EvalResult<bool> {
        if BLOCK_OPENERS.contains(&name) {
            self.indent += 1;
            return Ok(true);
        }
        if BLOCK_CLOSERS.contains(&name) {
            self.indent = self.indent
                              .checked_sub(1)
                              .ok_or(RuntimeError::IndentUnderflow { line })?;
            self.release_skip();
        }
        Ok(false)
    }

    /// Clears the skip level once indentation has fallen back below it.
    fn release_skip(&mut self) {
        if self.skip.is_some_and(|level| self.indent < level || self.indent == 0) {
            self.skip = None;
        }
    }

    /// Prepares one argument for dispatch.
    ///
    /// Deferred expressions are evaluated to transients and literals are
    /// copied out of the program store; variables stay slot references.
    fn resolve_argument(&mut self, operand: &Operand, line: usize) -> EvalResult<Operand> {
        let Operand::Owned(value) = operand else {
            return Ok(operand.clone());
        };
        match value.as_expr() {
            Some(text) => {
                let mut ctx = ExprContext::new(&mut self.symbols, line, self.config.max_expr_depth);
                Ok(Operand::Owned(ctx.evaluate(text)?))
            },
            None => Ok(Operand::Owned(value.clone())),
        }
    }

    fn call_native(&mut self,
                   native: &Native,
                   args: Vec<Operand>,
                   capture: Option<SlotId>,
                   line: usize)
                   -> EvalResult<()> {
        let func = native.func()
                         .ok_or_else(|| RuntimeError::MissingNative { name: native.name().to_string(),
                                                                      line })?;
        let argc = args.len();
        for arg in args.into_iter().rev() {
            self.stack.push_arg(arg, line)?;
        }

        self.argc = argc;
        self.ret = capture;
        let result = func(self);
        self.ret = None;
        self.argc = 0;
        self.stack.pop_args(argc);

        result.map_err(|source| RuntimeError::NativeFailure { name: native.name().to_string(),
                                                              source: Box::new(source),
                                                              line })
    }

    /// Calls the script function whose `func` line is at `target`.
    ///
    /// Arguments are bound to the global slots `arg0`, `arg1`, and so on.
    fn enter_call(&mut self,
                  target: usize,
                  args: Vec<Operand>,
                  capture: Option<SlotId>,
                  line: usize)
                  -> EvalResult<()> {
        if target >= self.program.len() {
            return Err(RuntimeError::NotCallable { name: format!("(func@{target})"),
                                                   line });
        }

        for (index, arg) in args.into_iter().enumerate() {
            let value = arg.into_value(&self.symbols);
            let slot = self.symbols.get_or_create(&format!("arg{index}"), line)?;
            self.symbols.set(slot, value);
        }

        self.stack.push_frame(Frame::Call { return_pc: self.pc,
                                            return_indent: self.indent,
                                            capture },
                              line)?;
        self.indent += 1;
        self.jump = Some(target + 1);
        Ok(())
    }

    /// Returns from the innermost script call.
    ///
    /// Loop frames opened inside the function are discarded. Execution
    /// resumes after the calling line, at the caller's indentation, and
    /// `value`, if any, is stored into the caller's capture slot.
    ///
    /// # Errors
    /// `StackUnderflow` when no call is active.
    pub fn return_from_call(&mut self, value: Option<Value>) -> EvalResult<()> {
        let line = self.current_line();
        loop {
            let Frame::Call { return_pc,
                              return_indent,
                              capture, } = self.stack.pop_frame(line)?
            else {
                continue;
            };

            self.indent = return_indent;
            self.release_skip();
            self.jump = Some(return_pc + 1);
            if let (Some(slot), Some(value)) = (capture, value) {
                self.symbols.set(slot, value);
            }
            return Ok(());
        }
    }

    /// Opens a loop whose condition sits on the current line.
    ///
    /// # Errors
    /// `StackOverflow` when the stacks are full.
    pub fn enter_loop(&mut self) -> EvalResult<()> {
        let line = self.current_line();
        self.stack.push_frame(Frame::Loop { pc:     self.pc,
                                            indent: self.indent, },
                              line)
    }

    /// Handles a block closer that is being dispatched.
    ///
    /// Closing a loop body jumps back to its `while` line; closing a function
    /// body returns from the call. Closing an `if` does nothing more.
    ///
    /// # Errors
    /// Propagates `StackUnderflow` from the frame stack.
    pub fn close_block(&mut self) -> EvalResult<()> {
        let line = self.current_line();
        match self.stack.top_frame() {
            Some(Frame::Loop { pc, indent }) if *indent == self.indent + 1 => {
                let pc = *pc;
                self.stack.pop_frame(line)?;
                self.jump = Some(pc);
                Ok(())
            },
            Some(Frame::Call { return_indent, .. }) if *return_indent == self.indent => {
                self.return_from_call(None)
            },
            _ => Ok(()),
        }
    }

    /// Suppresses dispatch of the lines nested under the current
    /// indentation level. Has no effect while skipping is already engaged.
    pub fn skip(&mut self) {
        if self.skip.is_none() {
            self.skip = Some(self.indent);
        }
    }

    /// Returns `true` if the line at the current indentation would be
    /// skipped.
    #[must_use]
    pub fn is_skipping(&self) -> bool {
        self.indent > 0 && self.skip.is_some_and(|level| self.indent >= level)
    }

    /// Abandons the current run after a fatal error.
    fn abort(&mut self) {
        self.stack.clear();
        self.indent = 0;
        self.skip = None;
        self.jump = None;
        self.ret = None;
        self.argc = 0;
        self.pc = self.program.len();
    }

    /// Number of arguments passed to the running native.
    #[must_use]
    pub const fn arg_count(&self) -> usize {
        self.argc
    }

    /// Returns argument `index` of the running native.
    ///
    /// # Errors
    /// `MissingArgument` when fewer arguments were passed.
    pub fn arg(&self, index: usize) -> EvalResult<&Value> {
        Ok(self.arg_operand(index)?.resolve(&self.symbols))
    }

    /// Returns the slot named by argument `index` of the running native.
    ///
    /// # Errors
    /// - `MissingArgument` when fewer arguments were passed.
    /// - `ExpectedVariable` when the argument is not a bare identifier.
    pub fn arg_slot(&self, index: usize) -> EvalResult<SlotId> {
        self.arg_operand(index)?
            .slot()
            .ok_or(RuntimeError::ExpectedVariable { index,
                                                    line: self.current_line() })
    }

    fn arg_operand(&self, index: usize) -> EvalResult<&Operand> {
        let missing = RuntimeError::MissingArgument { index,
                                                      line: self.current_line() };
        if index >= self.argc {
            return Err(missing);
        }
        self.stack.arg(index).ok_or(missing)
    }

    /// Stores the running native's return value into the line's `>` capture.
    ///
    /// Without a capture the value is dropped.
    pub fn set_return(&mut self, value: Value) {
        if let Some(slot) = self.ret {
            self.symbols.set(slot, value);
        }
    }

    /// Replaces the value of a slot.
    pub fn set_variable(&mut self, slot: SlotId, value: Value) {
        self.symbols.set(slot, value);
    }

    /// Returns a mutable reference to the value of a slot.
    pub fn variable_mut(&mut self, slot: SlotId) -> &mut Value {
        self.symbols.get_mut(slot)
    }

    /// Looks a variable up by name without creating it.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<&Value> {
        self.symbols.lookup(name).map(|slot| self.symbols.get(slot))
    }

    /// Source line number of the line being executed, or of the last line
    /// fed when nothing is running.
    #[must_use]
    pub fn current_line(&self) -> usize {
        self.program.get(self.pc).map_or(self.fed, |line| line.line)
    }

    fn operand_name(&self, operand: &Operand) -> String {
        match operand {
            Operand::Slot(slot) => self.symbols.name_of(*slot).to_string(),
            Operand::Owned(value) => format!("\"{value}\""),
        }
    }

    /// Program index of the line being executed.
    #[must_use]
    pub const fn pc(&self) -> usize {
        self.pc
    }

    /// Current indentation level.
    #[must_use]
    pub const fn indent(&self) -> usize {
        self.indent
    }

    /// The indentation level skipping was engaged at, if any.
    #[must_use]
    pub const fn skip_level(&self) -> Option<usize> {
        self.skip
    }

    /// Number of active script calls.
    #[must_use]
    pub fn call_depth(&self) -> usize {
        self.stack.call_depth()
    }

    /// Number of stack cells in use.
    #[must_use]
    pub fn stack_size(&self) -> usize {
        self.stack.size()
    }

    /// Number of lines in the program store.
    #[must_use]
    pub fn program_len(&self) -> usize {
        self.program.len()
    }

    /// The symbol table.
    #[must_use]
    pub const fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// The configuration the interpreter was built with.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Host I/O.
    pub fn host_mut(&mut self) -> &mut Host {
        &mut self.host
    }
}
