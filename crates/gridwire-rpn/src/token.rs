use core::fmt;

/// Dispatch category reported by [`FormulaToken::category`].
///
/// The renderer treats tokens purely by category; everything else about a
/// token (its text, its arity) comes through the other trait methods.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenCategory {
    /// Renders itself; consumes nothing, pushes one entry.
    Operand,
    /// Fixed or variable arity operator; consumes
    /// [`FormulaToken::operand_count`] entries, pushes one.
    Operation,
    /// Wraps the entry on top of the stack in parentheses.
    Parenthesis,
    /// Silent marker opening a list of area expressions. The trailing
    /// combining operator (e.g. a range union) absorbs the list, so the
    /// marker itself has no stack effect.
    MemGroup,
    /// Attribute token that only affects evaluation, never text: optimized
    /// IF/CHOOSE branch markers, goto, inter-token spacing, and the
    /// semi-volatile marker. Spacing and volatility hints precede the
    /// operand they apply to, against the postfix ordering assumed here, so
    /// rendering them is unsupported and they are skipped.
    ControlSilent,
    /// Attribute token carrying a dynamic operand count (the optimized SUM
    /// form); consumes [`FormulaToken::operand_count`] entries, pushes one.
    ControlSum,
    /// Attribute-shaped token whose flag bits match none of the recognized
    /// control behaviors. Rendering one is a format error.
    ControlUnrecognized,
    /// Needs workbook metadata to render (3-D sheet-qualified or external
    /// references, names); consumes nothing, pushes one.
    WorkbookDependent,
}

/// Resolution context for workbook-dependent tokens.
///
/// Supplies display names for sheets and external workbooks. Lookups may
/// miss; tokens decide how a miss renders (typically as a `#REF!` form).
/// The context is read-only for the duration of a render call.
pub trait RenderContext {
    /// Display name of the sheet at 0-based `sheet_index`, if it exists.
    fn sheet_name(&self, sheet_index: u32) -> Option<String>;

    /// Display name of the external workbook at `workbook_index`, if known.
    fn external_workbook_name(&self, workbook_index: u32) -> Option<String>;
}

/// One unit of a formula's persisted postfix representation.
///
/// Implemented by the concrete token catalog. `Debug` is required so a
/// malformed sequence can name the offending token in its error.
pub trait FormulaToken: fmt::Debug {
    /// Category driving the renderer's dispatch.
    fn category(&self) -> TokenCategory;

    /// Number of already-rendered operand strings this token consumes from
    /// the stack.
    ///
    /// Zero for operands and silent tokens, the declared arity for
    /// operations, the token's stored operand count for the dynamic-arity
    /// sum attribute.
    fn operand_count(&self) -> usize {
        0
    }

    /// Produce this token's text given its operands in original
    /// left-to-right order.
    ///
    /// Not called for silent tokens or for workbook-dependent tokens.
    fn render(&self, operands: &[String]) -> String;

    /// Produce this token's text using workbook metadata.
    ///
    /// Only called when [`category`](Self::category) is
    /// [`TokenCategory::WorkbookDependent`]; the default falls back to
    /// context-free rendering.
    fn render_with_context(&self, _context: &dyn RenderContext) -> String {
        self.render(&[])
    }
}
