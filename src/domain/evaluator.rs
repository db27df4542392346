//! Expression evaluator for the scientific calculator.
//!
//! Expressions are infix arithmetic with named function calls, e.g.
//! `SIN(30) + 2 * (3 - 1)`. Evaluation runs in three stages:
//!
//! 1. Parenthesis resolution, innermost-first: the first `)` is paired with
//!    the nearest preceding `(`. When a catalog function name sits directly
//!    before the `(`, the enclosed text is that call's argument list —
//!    split on commas at nesting depth zero, each argument evaluated through
//!    this same pipeline — and the call is replaced by its numeric result.
//!    Any other group is evaluated as a segment and replaced by its value.
//! 2. A segment (text without parentheses) starting with a known function
//!    name routes the remainder to that function's argument list.
//! 3. Everything else is basic arithmetic:
//!
//!    ```bnf
//!    Expression ::= Term ( ( "+" | "-" ) Term )*
//!    Term       ::= Unary ( ( "*" | "/" | "%" ) Unary )*
//!    Unary      ::= ( "+" | "-" )? Number
//!    Number     ::= [0-9]* ( "." [0-9]+ )?
//!    ```
//!
//! Equal-precedence operators associate left-to-right. Evaluation is a pure
//! function of the input string and the fixed function catalog; failures of
//! every class surface as [`EvalError`] and never as a panic.

use std::collections::HashMap;
use super::errors::{EvalError, EvalResult};

/// Represents a token in a basic-arithmetic segment.
#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Eof,
}

/// Lexical analyzer for basic-arithmetic segments.
struct Lexer {
    input: Vec<char>,
    position: usize,
    current_char: Option<char>,
}

impl Lexer {
    fn new(input: &str) -> Self {
        let chars: Vec<char> = input.chars().collect();
        let current_char = chars.first().copied();

        Self {
            input: chars,
            position: 0,
            current_char,
        }
    }

    fn advance(&mut self) {
        self.position += 1;
        self.current_char = self.input.get(self.position).copied();
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Reads a number token (integer or decimal).
    fn read_number(&mut self) -> EvalResult<f64> {
        let mut number_str = String::new();

        while let Some(ch) = self.current_char {
            if ch.is_ascii_digit() {
                number_str.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        if self.current_char == Some('.') {
            number_str.push('.');
            self.advance();

            while let Some(ch) = self.current_char {
                if ch.is_ascii_digit() {
                    number_str.push(ch);
                    self.advance();
                } else {
                    break;
                }
            }
        }

        number_str
            .parse::<f64>()
            .map_err(|_| EvalError::MalformedInput(format!("invalid number: {}", number_str)))
    }

    fn next_token(&mut self) -> EvalResult<Token> {
        self.skip_whitespace();

        match self.current_char {
            None => Ok(Token::Eof),

            Some(ch) => match ch {
                '0'..='9' | '.' => {
                    let number = self.read_number()?;
                    Ok(Token::Number(number))
                }

                '+' => {
                    self.advance();
                    Ok(Token::Plus)
                }

                '-' => {
                    self.advance();
                    Ok(Token::Minus)
                }

                '*' => {
                    self.advance();
                    Ok(Token::Star)
                }

                '/' => {
                    self.advance();
                    Ok(Token::Slash)
                }

                '%' => {
                    self.advance();
                    Ok(Token::Percent)
                }

                _ => Err(EvalError::MalformedInput(format!(
                    "unexpected character: '{}'",
                    ch
                ))),
            },
        }
    }
}

/// Recursive descent evaluator for a single paren-free segment.
///
/// Supports `+ - * / %` with conventional precedence and unary minus.
/// Division produces the IEEE result — `1/0` is infinity and `0/0` is NaN;
/// the NaN outcome is rejected at the evaluator boundary, not here.
struct SegmentParser {
    lexer: Lexer,
    current_token: Token,
}

impl SegmentParser {
    fn new(input: &str) -> EvalResult<Self> {
        let mut lexer = Lexer::new(input);
        let current_token = lexer.next_token()?;

        Ok(Self {
            lexer,
            current_token,
        })
    }

    fn advance(&mut self) -> EvalResult<()> {
        self.current_token = self.lexer.next_token()?;
        Ok(())
    }

    fn parse(&mut self) -> EvalResult<f64> {
        let value = self.parse_addition()?;

        if self.current_token != Token::Eof {
            return Err(EvalError::MalformedInput(format!(
                "unexpected token at end: {:?}",
                self.current_token
            )));
        }

        Ok(value)
    }

    fn parse_addition(&mut self) -> EvalResult<f64> {
        let mut left = self.parse_multiplication()?;

        while matches!(self.current_token, Token::Plus | Token::Minus) {
            let negate = self.current_token == Token::Minus;
            self.advance()?;
            let right = self.parse_multiplication()?;
            left = if negate { left - right } else { left + right };
        }

        Ok(left)
    }

    fn parse_multiplication(&mut self) -> EvalResult<f64> {
        let mut left = self.parse_unary()?;

        while matches!(
            self.current_token,
            Token::Star | Token::Slash | Token::Percent
        ) {
            let op = self.current_token.clone();
            self.advance()?;
            let right = self.parse_unary()?;
            left = match op {
                Token::Star => left * right,
                Token::Slash => left / right,
                Token::Percent => left % right,
                _ => unreachable!(),
            };
        }

        Ok(left)
    }

    fn parse_unary(&mut self) -> EvalResult<f64> {
        match self.current_token {
            Token::Plus => {
                self.advance()?;
                self.parse_unary()
            }
            Token::Minus => {
                self.advance()?;
                Ok(-self.parse_unary()?)
            }
            _ => self.parse_primary(),
        }
    }

    fn parse_primary(&mut self) -> EvalResult<f64> {
        match self.current_token {
            Token::Number(value) => {
                self.advance()?;
                Ok(value)
            }
            Token::Eof => Err(EvalError::MalformedInput(
                "unexpected end of expression".to_string(),
            )),
            _ => Err(EvalError::MalformedInput(format!(
                "unexpected token: {:?}",
                self.current_token
            ))),
        }
    }
}

/// Signature shared by all catalog functions.
pub type FunctionImpl = fn(&[f64]) -> EvalResult<f64>;

/// The fixed set of named numeric functions the evaluator recognizes.
///
/// Built once at construction and never mutated afterwards. Lookup is
/// case-insensitive. Trigonometric functions take and return degrees at
/// the boundary; `LOG` is the natural logarithm.
pub struct FunctionCatalog {
    functions: HashMap<String, FunctionImpl>,
}

fn expect_one(name: &str, args: &[f64]) -> EvalResult<f64> {
    if args.len() != 1 {
        return Err(EvalError::InvalidArguments(format!(
            "{} takes exactly 1 argument",
            name
        )));
    }
    Ok(args[0])
}

fn expect_two(name: &str, args: &[f64]) -> EvalResult<(f64, f64)> {
    if args.len() != 2 {
        return Err(EvalError::InvalidArguments(format!(
            "{} takes exactly 2 arguments",
            name
        )));
    }
    Ok((args[0], args[1]))
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance: mean of squared deviations, no Bessel correction.
fn variance(values: &[f64]) -> f64 {
    let avg = mean(values);
    values.iter().map(|v| (v - avg) * (v - avg)).sum::<f64>() / values.len() as f64
}

/// Factorial with the calculator's historical edge cases: the argument is
/// truncated to an integer and negative input yields 0 rather than an error.
fn factorial(x: f64) -> f64 {
    let n = x as i64;
    if n < 0 {
        return 0.0;
    }
    let mut acc = 1.0;
    for i in 1..=n {
        acc *= i as f64;
    }
    acc
}

impl FunctionCatalog {
    pub fn new() -> Self {
        let mut catalog = Self {
            functions: HashMap::new(),
        };

        catalog.register_builtin_functions();
        catalog
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(&name.to_uppercase())
    }

    pub fn get(&self, name: &str) -> Option<&FunctionImpl> {
        self.functions.get(&name.to_uppercase())
    }

    fn register(&mut self, name: &str, func: FunctionImpl) {
        self.functions.insert(name.to_string(), func);
    }

    fn register_builtin_functions(&mut self) {
        self.register("SIN", |args| {
            Ok(expect_one("SIN", args)?.to_radians().sin())
        });

        self.register("COS", |args| {
            Ok(expect_one("COS", args)?.to_radians().cos())
        });

        self.register("TAN", |args| {
            Ok(expect_one("TAN", args)?.to_radians().tan())
        });

        self.register("ASIN", |args| {
            Ok(expect_one("ASIN", args)?.asin().to_degrees())
        });

        self.register("ACOS", |args| {
            Ok(expect_one("ACOS", args)?.acos().to_degrees())
        });

        self.register("ATAN", |args| {
            Ok(expect_one("ATAN", args)?.atan().to_degrees())
        });

        self.register("LOG", |args| Ok(expect_one("LOG", args)?.ln()));

        self.register("LOG10", |args| Ok(expect_one("LOG10", args)?.log10()));

        self.register("EXP", |args| Ok(expect_one("EXP", args)?.exp()));

        self.register("SQRT", |args| Ok(expect_one("SQRT", args)?.sqrt()));

        self.register("ABS", |args| Ok(expect_one("ABS", args)?.abs()));

        self.register("POW", |args| {
            let (base, exponent) = expect_two("POW", args)?;
            Ok(base.powf(exponent))
        });

        self.register("MOD", |args| {
            let (a, b) = expect_two("MOD", args)?;
            Ok(a % b)
        });

        self.register("FACT", |args| Ok(factorial(expect_one("FACT", args)?)));

        self.register("MEAN", |args| {
            if args.is_empty() {
                return Err(EvalError::InvalidArguments(
                    "MEAN requires at least one argument".to_string(),
                ));
            }
            Ok(mean(args))
        });

        self.register("VAR", |args| {
            if args.is_empty() {
                return Err(EvalError::InvalidArguments(
                    "VAR requires at least one argument".to_string(),
                ));
            }
            Ok(variance(args))
        });

        self.register("STD", |args| {
            if args.is_empty() {
                return Err(EvalError::InvalidArguments(
                    "STD requires at least one argument".to_string(),
                ));
            }
            Ok(variance(args).sqrt())
        });
    }
}

impl Default for FunctionCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Evaluates infix arithmetic expressions with named function calls.
///
/// Stateless between calls: each evaluation depends only on the input
/// string and the fixed catalog.
///
/// # Examples
///
/// ```
/// use scitui::domain::ExpressionEvaluator;
///
/// let evaluator = ExpressionEvaluator::new();
/// assert_eq!(evaluator.evaluate("2 + 3 * 4").unwrap(), 14.0);
/// assert_eq!(evaluator.evaluate("SQRT(16)").unwrap(), 4.0);
/// assert!(evaluator.evaluate("2 + (3").is_err());
/// ```
pub struct ExpressionEvaluator {
    catalog: FunctionCatalog,
}

impl ExpressionEvaluator {
    pub fn new() -> Self {
        Self {
            catalog: FunctionCatalog::new(),
        }
    }

    /// Evaluates an expression to a numeric value.
    ///
    /// Display glyphs `×` and `÷` are normalized to `*` and `/` before
    /// parsing. Empty or whitespace-only input is the value `0`. A NaN
    /// outcome (square root of a negative, zero divided by zero) is an
    /// error; infinite results are returned as-is.
    pub fn evaluate(&self, expression: &str) -> EvalResult<f64> {
        let normalized = expression.replace('×', "*").replace('÷', "/");
        let trimmed = normalized.trim();

        if trimmed.is_empty() {
            return Ok(0.0);
        }

        self.eval_expr(trimmed)
    }

    /// Resolves parentheses innermost-first, then evaluates the remaining
    /// segment. Function calls are consumed as a unit so that argument
    /// lists survive intact and trailing arithmetic stays outside the call.
    ///
    /// A NaN sub-result aborts evaluation here, before it is spliced back
    /// into the expression text or handed to an enclosing function.
    fn eval_expr(&self, expr: &str) -> EvalResult<f64> {
        let mut expr = expr.trim().to_string();

        while let Some(close) = expr.find(')') {
            let open = expr[..close].rfind('(').ok_or_else(|| {
                EvalError::MalformedInput("unmatched closing parenthesis".to_string())
            })?;
            let inside = expr[open + 1..close].to_string();

            let head = &expr[..open];
            let name_start = head
                .trim_end_matches(|c: char| c.is_ascii_alphabetic())
                .len();
            let word = &head[name_start..];

            let (splice_from, value) = if !word.is_empty() && self.catalog.contains(word) {
                (name_start, self.apply_function(word, &inside)?)
            } else {
                (open, self.solve_segment(&inside)?)
            };

            if value.is_nan() {
                return Err(EvalError::NotANumber);
            }

            expr = format!("{}{}{}", &expr[..splice_from], value, &expr[close + 1..]);
        }

        if expr.contains('(') {
            return Err(EvalError::MalformedInput(
                "unmatched opening parenthesis".to_string(),
            ));
        }

        let value = self.solve_segment(&expr)?;

        if value.is_nan() {
            return Err(EvalError::NotANumber);
        }

        Ok(value)
    }

    /// Evaluates a paren-free segment: a leading known function name routes
    /// the remainder to that function, anything else is basic arithmetic.
    fn solve_segment(&self, segment: &str) -> EvalResult<f64> {
        let seg = segment.trim();

        let word_end = seg
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(seg.len());
        let word = &seg[..word_end];

        if !word.is_empty() {
            if self.catalog.contains(word) {
                return self.apply_function(word, &seg[word_end..]);
            }
            return Err(EvalError::UnknownFunction(word.to_uppercase()));
        }

        SegmentParser::new(seg)?.parse()
    }

    /// Applies a catalog function to a raw argument list. Each argument is
    /// itself evaluated through the full pipeline before dispatch.
    fn apply_function(&self, name: &str, args_raw: &str) -> EvalResult<f64> {
        let mut raw = args_raw.trim();
        if raw.len() >= 2 && raw.starts_with('(') && raw.ends_with(')') {
            raw = raw[1..raw.len() - 1].trim();
        }

        let func = self
            .catalog
            .get(name)
            .ok_or_else(|| EvalError::UnknownFunction(name.to_uppercase()))?;

        let mut values = Vec::new();
        for arg in split_arguments(raw) {
            values.push(self.eval_expr(&arg)?);
        }

        func(&values)
    }
}

impl Default for ExpressionEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

/// Splits an argument list on commas at nesting depth zero, so an argument
/// that itself contains a parenthesized call is not split apart.
fn split_arguments(args: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut depth: i32 = 0;
    let mut current = String::new();

    for ch in args.chars() {
        match ch {
            '(' => {
                depth += 1;
                current.push(ch);
            }
            ')' => {
                depth -= 1;
                current.push(ch);
            }
            ',' if depth == 0 => {
                parts.push(current.clone());
                current.clear();
            }
            _ => current.push(ch),
        }
    }

    parts.push(current);
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(expr: &str) -> EvalResult<f64> {
        ExpressionEvaluator::new().evaluate(expr)
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {} to be close to {}",
            actual,
            expected
        );
    }

    #[test]
    fn test_lexer_numbers() {
        let mut lexer = Lexer::new("42 3.14 .5");

        assert_eq!(lexer.next_token().unwrap(), Token::Number(42.0));
        assert_eq!(lexer.next_token().unwrap(), Token::Number(3.14));
        assert_eq!(lexer.next_token().unwrap(), Token::Number(0.5));
        assert_eq!(lexer.next_token().unwrap(), Token::Eof);
    }

    #[test]
    fn test_lexer_operators() {
        let mut lexer = Lexer::new("+ - * / %");

        assert_eq!(lexer.next_token().unwrap(), Token::Plus);
        assert_eq!(lexer.next_token().unwrap(), Token::Minus);
        assert_eq!(lexer.next_token().unwrap(), Token::Star);
        assert_eq!(lexer.next_token().unwrap(), Token::Slash);
        assert_eq!(lexer.next_token().unwrap(), Token::Percent);
        assert_eq!(lexer.next_token().unwrap(), Token::Eof);
    }

    #[test]
    fn test_lexer_rejects_unexpected_characters() {
        let mut lexer = Lexer::new("@");
        assert!(lexer.next_token().is_err());
    }

    #[test]
    fn test_segment_operator_precedence() {
        assert_eq!(eval("2 + 3 * 4").unwrap(), 14.0);
        assert_eq!(eval("2 * 3 + 4").unwrap(), 10.0);
        assert_eq!(eval("10 - 4 / 2").unwrap(), 8.0);
        assert_eq!(eval("10 % 3").unwrap(), 1.0);
    }

    #[test]
    fn test_segment_left_associativity() {
        assert_eq!(eval("10 - 3 - 2").unwrap(), 5.0);
        assert_eq!(eval("100 / 10 / 2").unwrap(), 5.0);
        assert_eq!(eval("10 % 7 % 2").unwrap(), 1.0);
    }

    #[test]
    fn test_segment_unary_minus() {
        assert_eq!(eval("-5").unwrap(), -5.0);
        assert_eq!(eval("-5 + 10").unwrap(), 5.0);
        assert_eq!(eval("2 * -3").unwrap(), -6.0);
        assert_eq!(eval("3 - -2").unwrap(), 5.0);
        assert_eq!(eval("--4").unwrap(), 4.0);
    }

    #[test]
    fn test_parenthesis_resolution() {
        assert_eq!(eval("(2 + 3) * 4").unwrap(), 20.0);
        assert_eq!(eval("((1+1)+1)*3").unwrap(), 9.0);
        assert_eq!(eval("2 * (3 - 5)").unwrap(), -4.0);
        assert_eq!(eval("(((7)))").unwrap(), 7.0);
    }

    #[test]
    fn test_display_glyphs_are_normalized() {
        assert_eq!(eval("6 × 7").unwrap(), 42.0);
        assert_eq!(eval("10 ÷ 4").unwrap(), 2.5);
    }

    #[test]
    fn test_empty_input_is_zero() {
        assert_eq!(eval("").unwrap(), 0.0);
        assert_eq!(eval("   ").unwrap(), 0.0);
    }

    #[test]
    fn test_single_argument_functions() {
        assert_eq!(eval("SQRT(16)").unwrap(), 4.0);
        assert_eq!(eval("ABS(-3.5)").unwrap(), 3.5);
        assert_close(eval("LOG(EXP(1))").unwrap(), 1.0);
        assert_close(eval("LOG10(1000)").unwrap(), 3.0);
    }

    #[test]
    fn test_trig_operates_in_degrees() {
        assert_close(eval("SIN(90)").unwrap(), 1.0);
        assert_close(eval("COS(0)").unwrap(), 1.0);
        assert_close(eval("TAN(45)").unwrap(), 1.0);
        assert_close(eval("ASIN(1)").unwrap(), 90.0);
        assert_close(eval("ACOS(1)").unwrap(), 0.0);
        assert_close(eval("ATAN(1)").unwrap(), 45.0);
    }

    #[test]
    fn test_two_argument_functions() {
        assert_eq!(eval("POW(2,10)").unwrap(), 1024.0);
        assert_eq!(eval("MOD(10,3)").unwrap(), 1.0);
        assert_eq!(eval("MOD(7.5,2)").unwrap(), 1.5);
    }

    #[test]
    fn test_factorial() {
        assert_eq!(eval("FACT(5)").unwrap(), 120.0);
        assert_eq!(eval("FACT(0)").unwrap(), 1.0);
        // Historical behavior: truncation, and 0 for negative input.
        assert_eq!(eval("FACT(5.9)").unwrap(), 120.0);
        assert_eq!(eval("FACT(-1)").unwrap(), 0.0);
    }

    #[test]
    fn test_statistical_functions() {
        assert_eq!(eval("MEAN(1,2,3)").unwrap(), 2.0);
        assert_eq!(eval("STD(2,2,2)").unwrap(), 0.0);
        // Population variance, no Bessel correction.
        assert_eq!(eval("VAR(1,2,3,4)").unwrap(), 1.25);
        assert_close(eval("STD(1,2,3,4)").unwrap(), 1.25_f64.sqrt());
    }

    #[test]
    fn test_function_names_are_case_insensitive() {
        assert_eq!(eval("sqrt(16)").unwrap(), 4.0);
        assert_eq!(eval("Pow(2,3)").unwrap(), 8.0);
        assert_close(eval("sin(90)").unwrap(), 1.0);
    }

    #[test]
    fn test_function_results_compose_with_arithmetic() {
        assert_eq!(eval("SQRT(16) + 2").unwrap(), 6.0);
        assert_eq!(eval("2 * POW(2,3)").unwrap(), 16.0);
        assert_close(eval("SIN(30) + 2").unwrap(), 2.5);
    }

    #[test]
    fn test_nested_function_calls() {
        assert_eq!(eval("SQRT(POW(2,4))").unwrap(), 4.0);
        assert_eq!(eval("POW(2, MEAN(4,6))").unwrap(), 32.0);
        assert_eq!(eval("MEAN(POW(2,2), MOD(10,4), ABS(-3))").unwrap(), 3.0);
    }

    #[test]
    fn test_function_arguments_may_be_expressions() {
        assert_eq!(eval("SQRT(10 + 6)").unwrap(), 4.0);
        assert_eq!(eval("POW(1+1, 2*5)").unwrap(), 1024.0);
    }

    #[test]
    fn test_unknown_function_fails() {
        assert_eq!(
            eval("FOO(1)").unwrap_err(),
            EvalError::UnknownFunction("FOO".to_string())
        );
        assert!(eval("BLORP(1,2)").is_err());
    }

    #[test]
    fn test_unbalanced_parentheses_fail() {
        assert!(matches!(
            eval("2 + (3").unwrap_err(),
            EvalError::MalformedInput(_)
        ));
        assert!(matches!(
            eval("2 + 3)").unwrap_err(),
            EvalError::MalformedInput(_)
        ));
    }

    #[test]
    fn test_malformed_segments_fail() {
        assert!(eval("2 +").is_err());
        assert!(eval("* 3").is_err());
        assert!(eval("1,2").is_err());
        assert!(eval("2 3").is_err());
    }

    #[test]
    fn test_empty_function_argument_fails() {
        assert!(eval("SQRT()").is_err());
        assert!(eval("POW(2,)").is_err());
    }

    #[test]
    fn test_wrong_arity_fails() {
        assert!(matches!(
            eval("SQRT(1,2)").unwrap_err(),
            EvalError::InvalidArguments(_)
        ));
        assert!(eval("POW(2)").is_err());
        assert!(eval("MOD(1,2,3)").is_err());
    }

    #[test]
    fn test_nan_results_are_errors() {
        assert_eq!(eval("SQRT(-1)").unwrap_err(), EvalError::NotANumber);
        assert_eq!(eval("0 / 0").unwrap_err(), EvalError::NotANumber);
        assert_eq!(eval("LOG(-1)").unwrap_err(), EvalError::NotANumber);
        assert_eq!(eval("ASIN(2)").unwrap_err(), EvalError::NotANumber);
    }

    #[test]
    fn test_division_by_zero_is_infinite_not_nan() {
        assert_eq!(eval("1 / 0").unwrap(), f64::INFINITY);
        assert_eq!(eval("-1 / 0").unwrap(), f64::NEG_INFINITY);
    }

    #[test]
    fn test_evaluation_is_stateless() {
        let evaluator = ExpressionEvaluator::new();
        assert!(evaluator.evaluate("2 + (3").is_err());
        assert_eq!(evaluator.evaluate("2 + 3").unwrap(), 5.0);
    }

    #[test]
    fn test_reevaluating_a_result_is_idempotent() {
        let evaluator = ExpressionEvaluator::new();
        let first = evaluator.evaluate("2+2").unwrap();
        let again = evaluator.evaluate(&first.to_string()).unwrap();
        assert_eq!(again, evaluator.evaluate("4").unwrap());
    }

    #[test]
    fn test_split_arguments_respects_nesting_depth() {
        assert_eq!(split_arguments("1,2,3"), vec!["1", "2", "3"]);
        assert_eq!(
            split_arguments("POW(1,2),3"),
            vec!["POW(1,2)", "3"]
        );
        assert_eq!(split_arguments(""), vec![""]);
        assert_eq!(split_arguments("MEAN(1,(2,3))"), vec!["MEAN(1,(2,3))"]);
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = FunctionCatalog::new();
        for name in [
            "SIN", "COS", "TAN", "ASIN", "ACOS", "ATAN", "LOG", "LOG10", "EXP", "SQRT", "ABS",
            "POW", "MOD", "FACT", "MEAN", "VAR", "STD",
        ] {
            assert!(catalog.contains(name), "missing {}", name);
        }
        assert!(catalog.contains("sqrt"));
        assert!(!catalog.contains("SUM"));
        assert!(catalog.get("NOPE").is_none());
    }

    #[test]
    fn test_whitespace_is_tolerated() {
        assert_eq!(eval("  2 +  3 ").unwrap(), 5.0);
        assert_eq!(eval("POW( 2 , 10 )").unwrap(), 1024.0);
        assert_eq!(eval(" ( 2 + 3 ) * 4 ").unwrap(), 20.0);
    }
}
