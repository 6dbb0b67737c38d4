//! A small concrete token catalog for exercising the renderer end to end.
//!
//! The library deliberately ships no catalog of its own (tokens live with the
//! format decoders), so these types stand in for the shapes a decoder
//! produces: literals, fixed and variable arity operators, grouping markers,
//! attribute tokens, and workbook-dependent 3-D references.

// Some payload fields (e.g. attribute flag bits) are only observed through
// the Debug output embedded in renderer errors.
#![allow(dead_code)]

use gridwire_model::RangeAddress;
use gridwire_rpn::{FormulaToken, RenderContext, TokenCategory};

/// Resolution context backed by a fixed sheet-name list.
pub struct FakeWorkbook {
    pub sheets: Vec<&'static str>,
    pub external_workbooks: Vec<&'static str>,
}

impl RenderContext for FakeWorkbook {
    fn sheet_name(&self, sheet_index: u32) -> Option<String> {
        self.sheets.get(sheet_index as usize).map(|s| s.to_string())
    }

    fn external_workbook_name(&self, workbook_index: u32) -> Option<String> {
        self.external_workbooks
            .get(workbook_index as usize)
            .map(|s| s.to_string())
    }
}

#[derive(Debug)]
pub struct IntLiteral(pub u16);

impl FormulaToken for IntLiteral {
    fn category(&self) -> TokenCategory {
        TokenCategory::Operand
    }
    fn render(&self, _operands: &[String]) -> String {
        self.0.to_string()
    }
}

#[derive(Debug)]
pub struct StrLiteral(pub &'static str);

impl FormulaToken for StrLiteral {
    fn category(&self) -> TokenCategory {
        TokenCategory::Operand
    }
    fn render(&self, _operands: &[String]) -> String {
        // Embedded quotes are doubled, as in the formula grammar.
        format!("\"{}\"", self.0.replace('"', "\"\""))
    }
}

/// A plain (same-sheet) area or single-cell reference.
#[derive(Debug)]
pub struct AreaRef(pub RangeAddress);

impl FormulaToken for AreaRef {
    fn category(&self) -> TokenCategory {
        TokenCategory::Operand
    }
    fn render(&self, _operands: &[String]) -> String {
        self.0.to_string()
    }
}

#[derive(Debug)]
pub struct BinaryOp(pub &'static str);

impl FormulaToken for BinaryOp {
    fn category(&self) -> TokenCategory {
        TokenCategory::Operation
    }
    fn operand_count(&self) -> usize {
        2
    }
    fn render(&self, operands: &[String]) -> String {
        format!("{}{}{}", operands[0], self.0, operands[1])
    }
}

/// Variable-arity built-in function call.
#[derive(Debug)]
pub struct FuncVar {
    pub name: &'static str,
    pub argc: usize,
}

impl FormulaToken for FuncVar {
    fn category(&self) -> TokenCategory {
        TokenCategory::Operation
    }
    fn operand_count(&self) -> usize {
        self.argc
    }
    fn render(&self, operands: &[String]) -> String {
        format!("{}({})", self.name, operands.join(","))
    }
}

#[derive(Debug)]
pub struct Paren;

impl FormulaToken for Paren {
    fn category(&self) -> TokenCategory {
        TokenCategory::Parenthesis
    }
    fn render(&self, _operands: &[String]) -> String {
        unreachable!("parenthesis markers are wrapped by the renderer")
    }
}

/// Marks the start of a list of area expressions absorbed by a trailing
/// combining operator.
#[derive(Debug)]
pub struct MemAreaMarker;

impl FormulaToken for MemAreaMarker {
    fn category(&self) -> TokenCategory {
        TokenCategory::MemGroup
    }
    fn render(&self, _operands: &[String]) -> String {
        unreachable!("mem markers are silent")
    }
}

/// Skip-only attribute token (optimized branches, goto, spacing, volatility).
#[derive(Debug)]
pub struct SilentAttr(pub &'static str);

impl FormulaToken for SilentAttr {
    fn category(&self) -> TokenCategory {
        TokenCategory::ControlSilent
    }
    fn render(&self, _operands: &[String]) -> String {
        unreachable!("silent attributes are skipped")
    }
}

/// The optimized single-argument SUM attribute.
#[derive(Debug)]
pub struct SumAttr {
    pub operand_count: usize,
}

impl FormulaToken for SumAttr {
    fn category(&self) -> TokenCategory {
        TokenCategory::ControlSum
    }
    fn operand_count(&self) -> usize {
        self.operand_count
    }
    fn render(&self, operands: &[String]) -> String {
        format!("SUM({})", operands.join(","))
    }
}

/// Attribute-shaped token with flag bits that match no known behavior.
#[derive(Debug)]
pub struct MalformedAttr {
    pub flags: u8,
}

impl FormulaToken for MalformedAttr {
    fn category(&self) -> TokenCategory {
        TokenCategory::ControlUnrecognized
    }
    fn render(&self, _operands: &[String]) -> String {
        unreachable!("unrecognized attributes never render")
    }
}

/// A 3-D sheet-qualified area reference; needs the workbook to print the
/// sheet's display name.
#[derive(Debug)]
pub struct SheetAreaRef {
    pub sheet_index: u32,
    pub area: RangeAddress,
}

impl FormulaToken for SheetAreaRef {
    fn category(&self) -> TokenCategory {
        TokenCategory::WorkbookDependent
    }
    fn render(&self, _operands: &[String]) -> String {
        format!("#REF!{}", self.area)
    }
    fn render_with_context(&self, context: &dyn RenderContext) -> String {
        match context.sheet_name(self.sheet_index) {
            Some(name) => format!("{name}!{}", self.area),
            None => format!("#REF!{}", self.area),
        }
    }
}

/// A name defined in an external workbook.
#[derive(Debug)]
pub struct ExternalName {
    pub workbook_index: u32,
    pub name: &'static str,
}

impl FormulaToken for ExternalName {
    fn category(&self) -> TokenCategory {
        TokenCategory::WorkbookDependent
    }
    fn render(&self, _operands: &[String]) -> String {
        format!("#REF!{}", self.name)
    }
    fn render_with_context(&self, context: &dyn RenderContext) -> String {
        match context.external_workbook_name(self.workbook_index) {
            Some(book) => format!("[{book}]!{}", self.name),
            None => format!("#REF!{}", self.name),
        }
    }
}
