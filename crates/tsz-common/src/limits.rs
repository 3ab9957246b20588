//! Centralized limits and thresholds for the tsz parsers.
//!
//! Shared constants for recursion depths and capacity hints. Keeping them in
//! one place means the scanner, the parser and the tests agree on the values.

// =============================================================================
// Recursion Depth Limits
// =============================================================================

/// Maximum nesting depth of a single JSDoc type expression.
///
/// Every nested type production (operand of `?`, `!`, `...`, a record member
/// type, a union member, a parameter or a type argument) counts one level.
/// Each level costs several stack frames, so the limit is sized to stay
/// inside a default 2 MiB thread stack.
/// Exceeding it makes the whole expression unparseable.
///
/// # Example
///
/// ```text
/// {!!!!!!!!!!!!!!!!!!!!/* ... 150 levels ... */number}
/// {{a: {a: {a: {a: /* ... */}}}}}
/// ```
pub const MAX_JSDOC_TYPE_NESTING_DEPTH: u32 = 100;

// =============================================================================
// Capacity Limits
// =============================================================================

/// Inline capacity for child lists returned by node walkers.
///
/// Most JSDoc nodes have at most two direct children (a name and a type);
/// function types and references with type arguments occasionally exceed it.
pub const NODE_CHILDREN_INLINE: usize = 4;
