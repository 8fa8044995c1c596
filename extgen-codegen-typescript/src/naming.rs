//! TypeScript-specific naming conventions.

use extgen_codegen::language::NamingConvention;
use extgen_core::to_pascal_case;

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_ident_part(c: char) -> bool {
    is_ident_start(c) || c.is_ascii_digit()
}

/// Member names are emitted unquoted, so they must be plain identifiers.
fn is_valid_ts_member(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(is_ident_start) && chars.all(is_ident_part)
}

/// Drop characters that cannot appear in an identifier, then prefix `_` when
/// the rest cannot start one.
fn escape_ts_member(name: &str) -> String {
    let kept: String = name.chars().filter(|&c| is_ident_part(c)).collect();
    let member = to_pascal_case(&kept);
    if member.chars().next().is_some_and(is_ident_start) {
        member
    } else {
        format!("_{}", member)
    }
}

/// TypeScript naming conventions.
pub const TS_NAMING: NamingConvention = NamingConvention {
    // Map members use PascalCase
    key_to_member: to_pascal_case,
    is_valid_member: is_valid_ts_member,
    escape_invalid: escape_ts_member,
};
