use solgen_core::TypeTag;

use crate::expand::expand_all;
use crate::signature::ConcreteSignature;
use crate::synth::bindings::{Binding, binding_block, find_bindings};
use crate::test_utils::default_descriptors;

fn default_signatures() -> Vec<ConcreteSignature> {
    expand_all(&default_descriptors()).unwrap()
}

#[test]
fn integer_type_binds_every_operation() {
    let bindings = find_bindings(TypeTag::Euint8, &default_signatures());

    let names: Vec<&str> = bindings.iter().map(|b| b.operation).collect();
    assert_eq!(
        names,
        vec![
            "add", "sub", "mul", "div", "rem", "and", "or", "xor", "gt", "gte", "lt", "lte", "eq",
            "ne", "min", "max", "shl", "shr", "not", "square",
        ]
    );
}

#[test]
fn bool_type_binds_logical_operations() {
    let bindings = find_bindings(TypeTag::Ebool, &default_signatures());

    assert_eq!(
        bindings,
        vec![
            Binding { operation: "and", unary: false, bool_result: false },
            Binding { operation: "or", unary: false, bool_result: false },
            Binding { operation: "xor", unary: false, bool_result: false },
            Binding { operation: "eq", unary: false, bool_result: true },
            Binding { operation: "ne", unary: false, bool_result: true },
            Binding { operation: "not", unary: true, bool_result: false },
            Binding { operation: "square", unary: true, bool_result: true },
        ]
    );
}

#[test]
fn non_bitwise_op_over_ebool_is_a_bool_result() {
    let bindings = find_bindings(TypeTag::Ebool, &default_signatures());

    let square = bindings.iter().find(|b| b.operation == "square").unwrap();
    assert!(square.unary);
    assert!(square.bool_result);
    let not = bindings.iter().find(|b| b.operation == "not").unwrap();
    assert!(!not.bool_result);
}

#[test]
fn comparisons_return_ebool() {
    let bindings = find_bindings(TypeTag::Euint32, &default_signatures());

    let lt = bindings.iter().find(|b| b.operation == "lt").unwrap();
    assert!(lt.bool_result);
    let add = bindings.iter().find(|b| b.operation == "add").unwrap();
    assert!(!add.bool_result);
}

#[test]
fn mixed_signatures_do_not_bind() {
    let sigs = vec![ConcreteSignature::new(
        "add",
        vec![TypeTag::Euint16, TypeTag::Euint8],
        TypeTag::Euint16,
    )];

    assert!(find_bindings(TypeTag::Euint16, &sigs).is_empty());
    assert!(find_bindings(TypeTag::Euint8, &sigs).is_empty());
}

#[test]
fn missing_signatures_are_omitted() {
    assert!(find_bindings(TypeTag::Euint8, &[]).is_empty());
}

#[test]
fn empty_block_is_just_the_library_shell() {
    insta::assert_snapshot!(binding_block(TypeTag::Euint8, &[]).trim(), @r"
    using BindingsEuint8 for euint8 global;
    library BindingsEuint8 {

    }
    ");
}

#[test]
fn block_wraps_each_binding() {
    let sigs = vec![ConcreteSignature::new(
        "eq",
        vec![TypeTag::Euint64, TypeTag::Euint64],
        TypeTag::Ebool,
    )];

    let block = binding_block(TypeTag::Euint64, &sigs);

    assert!(block.starts_with("\n\nusing BindingsEuint64 for euint64 global;\nlibrary BindingsEuint64 {\n"));
    assert!(block.contains(
        "    function eq(euint64 lhs, euint64 rhs) internal pure returns (ebool) {\n        return FHE.eq(lhs, rhs);\n    }\n"
    ));
    assert!(block.ends_with("\n}\n"));
}
