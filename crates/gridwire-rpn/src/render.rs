use gridwire_model::CellLocation;
use thiserror::Error;

use crate::token::{FormulaToken, RenderContext, TokenCategory};

/// Rendering of an empty (or absent) token sequence.
///
/// This mirrors the workbook format's own convention for a formula with no
/// token stream and is a valid result, not an error. Note it is `#NAME`, not
/// the `#NAME?` error literal used by error-valued formulas.
pub const EMPTY_FORMULA: &str = "#NAME";

/// Structural failure while rendering a postfix token sequence.
///
/// None of these are retried or recovered internally: each one means the
/// sequence (or a token's declared arity) is malformed, and the error carries
/// enough detail to diagnose the producing file.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RenderError {
    /// A pop found the stack empty where the token contract guarantees an
    /// entry. Every pop in a well-formed sequence is matched by a later push,
    /// so this indicates a defective producer rather than an expected input
    /// shape.
    #[error("formula stack underflow (malformed token sequence)")]
    StackUnderflow,
    /// An operation or sum attribute declared more operands than the stack
    /// holds.
    #[error("too few operands for {token}: expected {expected}, got {actual}")]
    TooFewOperands {
        token: String,
        expected: usize,
        actual: usize,
    },
    /// Tokens that should have been fully absorbed (attribute or mem-group
    /// markers) left extra entries behind.
    #[error("{leftover} unconsumed entries left on the formula stack")]
    ExcessStackEntries { leftover: usize },
    /// An attribute token matched none of the recognized control behaviors.
    #[error("unexpected control token: {token}")]
    UnexpectedControlToken { token: String },
}

/// Structural failure while rendering the formula stored at a specific cell.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("failed to render formula at [{cell}]: {source}")]
pub struct CellRenderError {
    pub cell: CellLocation,
    #[source]
    pub source: RenderError,
}

/// Render a postfix token sequence to infix formula text.
///
/// Walks `tokens` once, left to right, with a local string stack. A
/// well-formed sequence leaves exactly one entry on the stack: the rendered
/// formula. An empty sequence yields [`EMPTY_FORMULA`].
pub fn render_formula(
    context: &dyn RenderContext,
    tokens: &[Box<dyn FormulaToken>],
) -> Result<String, RenderError> {
    if tokens.is_empty() {
        return Ok(EMPTY_FORMULA.to_string());
    }

    let mut stack: Vec<String> = Vec::new();

    for token in tokens {
        match token.category() {
            // Mem markers and silent attributes have no stack effect.
            TokenCategory::MemGroup | TokenCategory::ControlSilent => continue,
            TokenCategory::Parenthesis => {
                let contents = stack.pop().ok_or(RenderError::StackUnderflow)?;
                stack.push(format!("({contents})"));
            }
            TokenCategory::Operation | TokenCategory::ControlSum => {
                let operands = pop_operands(&mut stack, token.as_ref())?;
                stack.push(token.render(&operands));
            }
            TokenCategory::WorkbookDependent => stack.push(token.render_with_context(context)),
            TokenCategory::Operand => stack.push(token.render(&[])),
            TokenCategory::ControlUnrecognized => {
                return Err(RenderError::UnexpectedControlToken {
                    token: format!("{token:?}"),
                });
            }
        }
    }

    let Some(result) = stack.pop() else {
        // Every pop above is matched by a push, so an empty stack here means
        // either a defective sequence or a defect in this renderer.
        return Err(RenderError::StackUnderflow);
    };
    if !stack.is_empty() {
        return Err(RenderError::ExcessStackEntries {
            leftover: stack.len(),
        });
    }
    Ok(result)
}

/// Convenience entry point for callers whose token sequence is optional;
/// `None` renders the same [`EMPTY_FORMULA`] sentinel as an empty slice.
pub fn render_formula_opt(
    context: &dyn RenderContext,
    tokens: Option<&[Box<dyn FormulaToken>]>,
) -> Result<String, RenderError> {
    render_formula(context, tokens.unwrap_or_default())
}

/// Render the formula stored at `cell`, tagging structural failures with the
/// owning cell so diagnostics can name their source.
pub fn render_cell_formula(
    context: &dyn RenderContext,
    cell: CellLocation,
    tokens: &[Box<dyn FormulaToken>],
) -> Result<String, CellRenderError> {
    render_formula(context, tokens).map_err(|source| CellRenderError { cell, source })
}

fn pop_operands(
    stack: &mut Vec<String>,
    token: &dyn FormulaToken,
) -> Result<Vec<String>, RenderError> {
    let expected = token.operand_count();
    if stack.len() < expected {
        return Err(RenderError::TooFewOperands {
            token: format!("{token:?}"),
            expected,
            actual: stack.len(),
        });
    }
    // The last push holds the last operand position, so splitting off the
    // tail restores original left-to-right argument order.
    Ok(stack.split_off(stack.len() - expected))
}
