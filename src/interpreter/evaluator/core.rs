use logos::Logos;

use crate::{
    ast::{BinaryOperator, OPERATOR_PRECEDENCE},
    error::RuntimeError,
    interpreter::{
        evaluator::binary::{Number, eval_binary},
        lexer::{ExprToken, LexError},
        symbols::SymbolTable,
        value::{
            core::{Payload, UNDEFINED_DISPLAY, Value},
            operand::Operand,
        },
    },
};

/// Result type used by the evaluator and the engine.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Default limit on nested parentheses inside one expression.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Evaluation context for one deferred expression.
///
/// Holds the symbol table identifiers are resolved against, the source line
/// for error reporting and the nesting limit for parenthesized
/// sub-expressions.
pub struct ExprContext<'a> {
    symbols:   &'a mut SymbolTable,
    line:      usize,
    max_depth: usize,
}

/// An expression split into alternating operands and operators.
///
/// Operator `i` sits between operands `i` and `i + 1`. Applying an operator
/// empties its slot and the right operand's slot and stores the result in the
/// left operand's slot.
struct Sequence {
    operands:  Vec<Option<Operand>>,
    operators: Vec<Option<BinaryOperator>>,
}

impl<'a> ExprContext<'a> {
    /// Creates a context evaluating against `symbols`.
    pub const fn new(symbols: &'a mut SymbolTable, line: usize, max_depth: usize) -> Self {
        Self { symbols,
               line,
               max_depth }
    }

    /// Evaluates expression text to a single number.
    ///
    /// The text is what was found between the parentheses of a deferred
    /// expression. Identifiers that do not exist yet are created, so an
    /// expression can fill the symbol table.
    ///
    /// # Returns
    /// - `Ok(Value)`: An integer or float.
    /// - `Err(RuntimeError)`: `InvalidExpression` for malformed text,
    ///   `ExpressionTooDeep`, `UndefinedVariable`, `ExpectedNumber` or
    ///   `DivisionByZero`.
    ///
    /// # Example
    /// ```
    /// use linterp::interpreter::{
    ///     evaluator::core::ExprContext,
    ///     symbols::SymbolTable,
    ///     value::core::Value,
    /// };
    ///
    /// let mut symbols = SymbolTable::new(10);
    /// let x = symbols.get_or_create("x", 1).unwrap();
    /// symbols.set(x, Value::integer(4));
    ///
    /// let mut ctx = ExprContext::new(&mut symbols, 1, 32);
    /// assert_eq!(ctx.evaluate("3 + x * 2").unwrap(), Value::integer(11));
    /// assert_eq!(ctx.evaluate("(3 + x) * 2").unwrap(), Value::integer(14));
    /// assert_eq!(ctx.evaluate("x / 8.0").unwrap(), Value::float(0.5));
    /// assert!(ctx.evaluate("x +").is_err());
    /// ```
    pub fn evaluate(&mut self, text: &str) -> EvalResult<Value> {
        self.eval_at_depth(text, 0)
    }

    fn eval_at_depth(&mut self, text: &str, depth: usize) -> EvalResult<Value> {
        if depth > self.max_depth {
            return Err(RuntimeError::ExpressionTooDeep { limit: self.max_depth,
                                                         line:  self.line, });
        }

        let mut sequence = self.split(text, depth)?;
        for &op in OPERATOR_PRECEDENCE {
            self.collapse(&mut sequence, op)?;
        }

        let survivor = sequence.operands
                               .into_iter()
                               .flatten()
                               .next()
                               .ok_or_else(|| self.invalid("empty expression"))?;
        let number = self.number(&survivor)?;
        Ok(number.into())
    }

    /// Splits `text` into operands and operators, evaluating parenthesized
    /// groups on the way.
    fn split(&mut self, text: &str, depth: usize) -> EvalResult<Sequence> {
        let mut operands = Vec::new();
        let mut operators = Vec::new();
        let mut lexer = ExprToken::lexer(text);

        while let Some(token) = lexer.next() {
            let token = token.map_err(|e| self.lex_error(&e, lexer.slice()))?;
            let expecting_operand = operands.len() == operators.len();

            match (token, expecting_operand) {
                (ExprToken::Operator(op), true) => {
                    return Err(self.invalid(&format!("expected an operand before '{op}'")));
                },
                (ExprToken::Operator(op), false) => operators.push(Some(op)),
                (_, false) => {
                    return Err(self.invalid(&format!("missing operator before '{}'",
                                                     lexer.slice())));
                },
                (token, true) => {
                    let operand = self.operand(token, depth)?;
                    operands.push(Some(operand));
                },
            }
        }

        if operands.is_empty() {
            return Err(self.invalid("empty expression"));
        }
        if operands.len() == operators.len() {
            return Err(self.invalid("expression ends with an operator"));
        }

        Ok(Sequence { operands, operators })
    }

    fn operand(&mut self, token: ExprToken, depth: usize) -> EvalResult<Operand> {
        let operand = match token {
            ExprToken::Str(raw) => Operand::Owned(Value::from_literal(&raw)),
            ExprToken::Identifier(name) => Operand::Slot(self.symbols.get_or_create(&name, self.line)?),
            ExprToken::Integer(n) => Operand::Owned(Value::integer(n)),
            ExprToken::Float(f) => Operand::Owned(Value::float(f)),
            ExprToken::Group(inner) => Operand::Owned(self.eval_at_depth(&inner, depth + 1)?),
            ExprToken::Operator(op) => {
                return Err(self.invalid(&format!("expected an operand before '{op}'")));
            },
        };
        Ok(operand)
    }

    /// Applies every occurrence of `op`, left to right.
    fn collapse(&self, sequence: &mut Sequence, op: BinaryOperator) -> EvalResult<()> {
        for index in 0..sequence.operators.len() {
            if sequence.operators[index] != Some(op) {
                continue;
            }

            let left_index = (0..=index).rev()
                                        .find(|&i| sequence.operands[i].is_some())
                                        .ok_or_else(|| self.invalid("missing left operand"))?;
            let right_index = (index + 1..sequence.operands.len())
                .find(|&i| sequence.operands[i].is_some())
                .ok_or_else(|| self.invalid("missing right operand"))?;

            let left = sequence.operands[left_index].take();
            let right = sequence.operands[right_index].take();
            let (Some(left), Some(right)) = (left, right) else {
                return Err(self.invalid("missing operand"));
            };

            let result = eval_binary(op, self.number(&left)?, self.number(&right)?, self.line)?;
            sequence.operands[left_index] = Some(Operand::Owned(result.into()));
            sequence.operators[index] = None;
        }
        Ok(())
    }

    /// Reads an operand as a number.
    fn number(&self, operand: &Operand) -> EvalResult<Number> {
        let value = operand.resolve(&*self.symbols);
        match value.payload() {
            Payload::Integer(n) => Ok(Number::Integer(*n)),
            Payload::Float(f) => Ok(Number::Float(*f)),
            Payload::Undefined => {
                let name = operand.slot()
                                  .map_or(UNDEFINED_DISPLAY, |id| self.symbols.name_of(id))
                                  .to_string();
                Err(RuntimeError::UndefinedVariable { name,
                                                      line: self.line })
            },
            _ => Err(RuntimeError::ExpectedNumber { found: value.kind().type_name(),
                                                    line:  self.line, }),
        }
    }

    fn lex_error(&self, error: &LexError, slice: &str) -> RuntimeError {
        let details = match error {
            LexError::UnterminatedString => "unterminated string".to_string(),
            LexError::UnbalancedParen => "unbalanced parenthesis".to_string(),
            LexError::MalformedNumber => format!("malformed number '{slice}'"),
            LexError::UnexpectedCharacter => format!("unexpected '{slice}'"),
        };
        self.invalid(&details)
    }

    fn invalid(&self, details: &str) -> RuntimeError {
        RuntimeError::InvalidExpression { details: details.to_string(),
                                          line:    self.line, }
    }
}
