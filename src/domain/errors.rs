/// Why an expression failed to evaluate.
///
/// The calculator display collapses every variant to the single "Error"
/// marker; the distinction exists for tests and internal reporting only.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// Unbalanced parentheses, stray tokens, or an empty argument where a
    /// value is required.
    MalformedInput(String),
    /// A word passed the function-name pattern but is not in the catalog.
    UnknownFunction(String),
    /// Wrong number of arguments for a catalog function.
    InvalidArguments(String),
    /// The computation produced a not-a-number value.
    NotANumber,
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvalError::MalformedInput(detail) => {
                write!(f, "Malformed expression: {}", detail)
            }
            EvalError::UnknownFunction(name) => {
                write!(f, "Invalid Function: {}", name)
            }
            EvalError::InvalidArguments(detail) => {
                write!(f, "Invalid arguments: {}", detail)
            }
            EvalError::NotANumber => {
                write!(f, "Result is not a number")
            }
        }
    }
}

impl std::error::Error for EvalError {}

pub type EvalResult<T> = Result<T, EvalError>;

#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    Validation(String),
    ProductNotFound(u32),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::Validation(msg) => {
                write!(f, "{}", msg)
            }
            DomainError::ProductNotFound(id) => {
                write!(f, "No product with id {}", id)
            }
        }
    }
}

impl std::error::Error for DomainError {}

pub type DomainResult<T> = Result<T, DomainError>;
