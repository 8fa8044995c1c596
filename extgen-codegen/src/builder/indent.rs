//! Indentation configuration for code generation.

/// Indentation width in spaces for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent(pub u8);

impl Indent {
    /// 2-space indentation (TypeScript, JavaScript, JSON).
    pub const TYPESCRIPT: Self = Self(2);

    /// Render `level` indentation steps.
    pub fn repeat(&self, level: usize) -> String {
        " ".repeat(usize::from(self.0) * level)
    }
}
