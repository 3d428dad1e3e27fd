//! Operator tables: shorthand symbols, bitwise/logical set, bindable operations.

/// An operation that can be exposed through operator syntax or a binding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShorthandOperation {
    pub name: &'static str,
    /// Infix or prefix symbol. `None` when the operation has no operator form.
    pub operator: Option<&'static str>,
    pub unary: bool,
    pub returns_bool: bool,
}

impl ShorthandOperation {
    const fn binary(name: &'static str, operator: &'static str) -> Self {
        Self {
            name,
            operator: Some(operator),
            unary: false,
            returns_bool: false,
        }
    }

    const fn named(name: &'static str, returns_bool: bool) -> Self {
        Self {
            name,
            operator: None,
            unary: false,
            returns_bool,
        }
    }
}

pub const SHORTHAND_OPERATIONS: &[ShorthandOperation] = &[
    ShorthandOperation::binary("add", "+"),
    ShorthandOperation::binary("sub", "-"),
    ShorthandOperation::binary("mul", "*"),
    ShorthandOperation::binary("div", "/"),
    ShorthandOperation::binary("rem", "%"),
    ShorthandOperation::binary("and", "&"),
    ShorthandOperation::binary("or", "|"),
    ShorthandOperation::binary("xor", "^"),
    ShorthandOperation {
        name: "not",
        operator: Some("~"),
        unary: true,
        returns_bool: false,
    },
    ShorthandOperation::named("gt", true),
    ShorthandOperation::named("gte", true),
    ShorthandOperation::named("lt", true),
    ShorthandOperation::named("lte", true),
    ShorthandOperation::named("eq", true),
    ShorthandOperation::named("ne", true),
    ShorthandOperation::named("min", false),
    ShorthandOperation::named("max", false),
    ShorthandOperation::named("shl", false),
    ShorthandOperation::named("shr", false),
];

pub const BITWISE_AND_LOGICAL_OPERATIONS: &[&str] = &["and", "or", "xor", "not"];

/// Operations exposed as methods on every encrypted type, in emission order.
pub const BIND_MATH_OPERATORS: &[&str] = &[
    "add", "sub", "mul", "div", "rem", "and", "or", "xor", "gt", "gte", "lt", "lte", "eq", "ne",
    "min", "max", "shl", "shr", "not", "square",
];

pub fn is_bitwise_op(name: &str) -> bool {
    BITWISE_AND_LOGICAL_OPERATIONS.contains(&name)
}

pub fn shorthand(name: &str) -> Option<&'static ShorthandOperation> {
    SHORTHAND_OPERATIONS.iter().find(|op| op.name == name)
}

/// Operator symbol for `name`, if it has one.
pub fn operator_for(name: &str) -> Option<&'static str> {
    shorthand(name).and_then(|op| op.operator)
}
