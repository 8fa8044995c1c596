//! TypeScript AST builders for the generated manifest module.
//!
//! These provide a high-level API for constructing TypeScript syntax,
//! which can then be rendered via CodeBuilder.

mod comments;
mod consts;
mod interface;
mod literal;
mod objects;
mod types;

pub use comments::LineComment;
pub use consts::Const;
pub use interface::Interface;
pub use literal::{json_literal, optional_literal, string_literal};
pub use objects::{JsObject, Property};
pub use types::Union;

#[cfg(test)]
fn render(node: &impl extgen_codegen::builder::Renderable) -> String {
    let mut builder = extgen_codegen::builder::CodeBuilder::typescript();
    builder.emit(node);
    builder.build()
}
