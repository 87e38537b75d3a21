use std::rc::Rc;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult, Status},
            expression::reduce_operators,
            procedure::{Procedure, pending_word},
        },
        token::core::Token,
        value::core::LogoValue,
    },
};

/// What calling a word amounted to.
enum Call {
    /// The call is still missing inputs.
    Incomplete,
    /// The call produced this token.
    Produced(Token),
    /// The call produced nothing.
    Nothing,
}

/// Index of the first token that still needs evaluating.
fn first_unevaluated(tokens: &[Token]) -> Option<usize> {
    tokens.iter().position(|t| !t.is_literal())
}

impl Context {
    /// Executes a token sequence statement by statement.
    ///
    /// Each statement rewrites its tokens in place until only literals are
    /// left. Execution stops early when `output` or `stop` is unwinding.
    ///
    /// # Parameters
    /// - `tokens`: The sequence to execute. It is mutated.
    /// - `literal_eval_undefined`: Whether an unknown word in statement
    ///   position counts as text instead of an error.
    ///
    /// # Returns
    /// `Status::Incomplete` if a call is still waiting for inputs.
    ///
    /// # Example
    /// ```
    /// use logoterp::interpreter::{
    ///     evaluator::core::{Context, Status},
    ///     output::{Discard, Verbosity},
    ///     token::core::Token,
    ///     tokenizer::{TokenizeResult, tokenize},
    /// };
    ///
    /// let mut context = Context::new(Box::new(Discard), Box::new(Discard), Verbosity::Silent);
    /// let TokenizeResult::Complete(mut tokens) = tokenize("; nothing but a comment") else {
    ///     panic!("should tokenize");
    /// };
    ///
    /// assert_eq!(context.execute_tokens(&mut tokens, false), Ok(Status::Complete));
    /// assert!(tokens.is_empty());
    /// ```
    pub fn execute_tokens(&mut self,
                          tokens: &mut Vec<Token>,
                          literal_eval_undefined: bool)
                          -> EvalResult<Status> {
        while !self.is_unwinding() {
            let Some(index) = first_unevaluated(tokens) else {
                break;
            };
            if self.execute_statement(tokens, index, literal_eval_undefined)? == Status::Incomplete
            {
                return Ok(Status::Incomplete);
            }
        }
        Ok(Status::Complete)
    }

    /// Executes the statement that begins at `index`.
    ///
    /// Comments are dropped. A list or expression cannot start a statement,
    /// and neither can an operator. Anything else is evaluated as a word or
    /// variable.
    pub fn execute_statement(&mut self,
                             tokens: &mut Vec<Token>,
                             index: usize,
                             literal_eval_undefined: bool)
                             -> EvalResult<Status> {
        match &tokens[index] {
            Token::Comment { .. } => {
                tokens.remove(index);
                Ok(Status::Complete)
            },
            Token::List { .. } | Token::Expression { .. } => {
                Err(RuntimeError::BareContainer { text: tokens[index].text() })
            },
            Token::Operator { op } => {
                Err(RuntimeError::MissingOperand { operator: op.to_string() })
            },
            _ => self.evaluate_token(tokens, index, literal_eval_undefined),
        }
    }

    /// Evaluates the token at `index` by one step.
    ///
    /// Words call procedures, variables are looked up, lists become list
    /// values and expressions are reduced. Operators are left for the
    /// expression or infix reduction that owns them.
    pub fn evaluate_token(&mut self,
                          tokens: &mut Vec<Token>,
                          index: usize,
                          literal_eval_undefined: bool)
                          -> EvalResult<Status> {
        match &mut tokens[index] {
            Token::Word { .. } => return self.evaluate_word(tokens, index, literal_eval_undefined),
            Token::Expression { .. } => return self.evaluate_expression(tokens, index),
            Token::List { children } => {
                let children = std::mem::take(children);
                tokens[index] = Token::literal(LogoValue::List(children));
            },
            Token::Variable { .. } => {
                let name = tokens[index].variable_name().unwrap_or_default().to_string();
                tokens[index] = Token::literal(self.get_variable(&name));
            },
            Token::Comment { .. } => {
                tokens.remove(index);
            },
            Token::Literal { .. } | Token::Operator { .. } => {},
        }
        Ok(Status::Complete)
    }

    /// Evaluates the word at `index` and the call it starts.
    ///
    /// `true` and `false` become booleans. An unknown word becomes text when
    /// `literal_eval_undefined` is set and is an error otherwise. A known
    /// word takes as many inputs as the first procedure registered under it
    /// declares; each following token is evaluated until it is a literal.
    /// Then every procedure registered under the name is called in order and
    /// the word is replaced by the last value any of them produced, or
    /// removed if none produced one.
    ///
    /// # Returns
    /// `Status::Incomplete` if the sequence ends before all inputs are there.
    pub fn evaluate_word(&mut self,
                         tokens: &mut Vec<Token>,
                         index: usize,
                         literal_eval_undefined: bool)
                         -> EvalResult<Status> {
        match self.call_word(tokens, index, literal_eval_undefined)? {
            Call::Incomplete => return Ok(Status::Incomplete),
            Call::Produced(token) => tokens[index] = token,
            Call::Nothing => {
                tokens.remove(index);
            },
        }
        Ok(Status::Complete)
    }

    /// Resolves and calls the word at `index`, consuming its inputs but
    /// leaving the word itself in place.
    fn call_word(&mut self,
                 tokens: &mut Vec<Token>,
                 index: usize,
                 literal_eval_undefined: bool)
                 -> EvalResult<Call> {
        let text = tokens[index].text();

        if text.eq_ignore_ascii_case("true") || text.eq_ignore_ascii_case("false") {
            let value = LogoValue::Bool(text.eq_ignore_ascii_case("true"));
            return Ok(Call::Produced(Token::Literal { text, value }));
        }

        let Some(procedures) = self.lookup(&text).map(<[Rc<Procedure>]>::to_vec) else {
            if literal_eval_undefined {
                let value = LogoValue::Text(text.clone());
                return Ok(Call::Produced(Token::Literal { text, value }));
            }
            return Err(RuntimeError::UndefinedProcedure { name: text });
        };

        let inputs = procedures[0].param_count;
        for slot in 1..=inputs {
            if self.evaluate_argument(tokens, index + slot)? == Status::Incomplete {
                return Ok(Call::Incomplete);
            }
            if self.is_unwinding() {
                return Ok(Call::Nothing);
            }
        }

        let args = tokens.drain(index + 1..=index + inputs)
                         .filter_map(|t| t.value().cloned())
                         .collect::<Vec<_>>();

        let mut result = None;
        for procedure in &procedures {
            if let Some(token) = self.invoke(procedure, &args)? {
                result = Some(token);
            }
            if self.is_unwinding() {
                break;
            }
        }

        Ok(result.map_or(Call::Nothing, Call::Produced))
    }

    /// Evaluates a token that stands in for a value, such as an input or an
    /// operand. A call that produces nothing leaves an unknown value behind
    /// instead of vanishing.
    pub(crate) fn evaluate_operand(&mut self,
                                   tokens: &mut Vec<Token>,
                                   position: usize,
                                   literal_eval_undefined: bool)
                                   -> EvalResult<Status> {
        if !matches!(tokens[position], Token::Word { .. }) {
            return self.evaluate_token(tokens, position, literal_eval_undefined);
        }

        match self.call_word(tokens, position, literal_eval_undefined)? {
            Call::Incomplete => return Ok(Status::Incomplete),
            Call::Produced(token) => tokens[position] = token,
            Call::Nothing => tokens[position] = Token::literal(LogoValue::Unknown),
        }
        Ok(Status::Complete)
    }

    /// Brings the input slot at `position` to a literal, then applies any
    /// infix operators that follow it.
    fn evaluate_argument(&mut self, tokens: &mut Vec<Token>, position: usize) -> EvalResult<Status> {
        loop {
            let Some(token) = tokens.get(position) else {
                return Ok(Status::Incomplete);
            };
            match token {
                Token::Literal { .. } => break,
                Token::Operator { op } => {
                    return Err(RuntimeError::MissingOperand { operator: op.to_string() });
                },
                _ => {
                    if self.evaluate_operand(tokens, position, true)? == Status::Incomplete {
                        return Ok(Status::Incomplete);
                    }
                },
            }
            if self.is_unwinding() {
                return Ok(Status::Complete);
            }
        }

        self.reduce_infix(tokens, position)
    }

    /// Folds `value op value op value ...` starting at `position` into one
    /// literal.
    ///
    /// Operands are evaluated the way expression children are, so an unknown
    /// word is an error rather than text.
    fn reduce_infix(&mut self, tokens: &mut Vec<Token>, position: usize) -> EvalResult<Status> {
        let mut end = position;

        while let Some(Token::Operator { op }) = tokens.get(end + 1) {
            let op = *op;
            let operand = end + 2;
            loop {
                let Some(token) = tokens.get(operand) else {
                    return Ok(Status::Incomplete);
                };
                match token {
                    Token::Literal { .. } => break,
                    Token::Operator { .. } => {
                        return Err(RuntimeError::MissingOperand { operator: op.to_string() });
                    },
                    _ => {
                        if self.evaluate_operand(tokens, operand, false)? == Status::Incomplete {
                            return Ok(Status::Incomplete);
                        }
                    },
                }
                if self.is_unwinding() {
                    return Ok(Status::Complete);
                }
            }
            end = operand;
        }

        if end > position {
            let mut window = tokens.drain(position..=end).collect::<Vec<_>>();
            let value = reduce_operators(&mut window)?;
            tokens.insert(position, Token::literal(value));
        }
        Ok(Status::Complete)
    }

    /// Runs the items of a list as statements, as `run`, `repeat` and `if` do.
    ///
    /// The list itself is not changed; a copy is executed.
    ///
    /// # Returns
    /// The last value the list left behind, if any.
    ///
    /// # Errors
    /// `NotEnoughInputs` if the list ends in the middle of a call, and any
    /// error raised by its statements.
    pub fn run_list(&mut self, items: &[Token]) -> EvalResult<Option<LogoValue>> {
        let mut tokens = items.to_vec();

        if self.execute_tokens(&mut tokens, false)? == Status::Incomplete {
            return Err(RuntimeError::NotEnoughInputs { procedure: pending_word(&tokens) });
        }

        Ok(tokens.iter().rev().find_map(|t| t.value().cloned()))
    }
}
