use serde_json::json;
use solgen_compiler::ConcreteSignature;
use solgen_core::{OperationDescriptor, ParameterClass, ReturnRule, TypeTag};

use super::list::{ListError, ListFormat, render, render_descriptors};

fn sample() -> Vec<ConcreteSignature> {
    vec![
        ConcreteSignature::new("not", vec![TypeTag::Euint8], TypeTag::Euint8),
        ConcreteSignature::new(
            "reencrypt",
            vec![TypeTag::Euint8, TypeTag::Bytes],
            TypeTag::Bytes,
        ),
    ]
}

#[test]
fn text_lists_one_declaration_per_line() {
    let text = render(&sample(), ListFormat::Text).unwrap();

    insta::assert_snapshot!(text.trim_end(), @r"
    function not(euint8 input0) internal pure returns (euint8);
    function reencrypt(euint8 input0, bytes memory input1) internal pure returns (bytes memory);
    ");
}

#[test]
fn json_carries_structure() {
    let text = render(&sample()[..1], ListFormat::Json).unwrap();

    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(
        value,
        json!([{
            "declaration": "function not(euint8 input0) internal pure returns (euint8);",
            "name": "not",
            "inputs": ["euint8"],
            "return_type": "euint8",
            "input_plaintext": "none",
        }])
    );
    assert!(text.ends_with("]\n"));
}

#[test]
fn empty_list() {
    assert_eq!(render(&[], ListFormat::Text).unwrap(), "");
    assert_eq!(render(&[], ListFormat::Json).unwrap(), "[]\n");
}

#[test]
fn descriptors_are_expanded() {
    let desc = OperationDescriptor::new(
        "decrypt",
        vec![ParameterClass::Encrypted],
        ReturnRule::PlaintextExtraction,
    );

    let text = render_descriptors(&[desc], ListFormat::Text).unwrap();

    assert_eq!(text.lines().count(), 8);
    assert!(text.starts_with("function decrypt(ebool input0) internal pure returns (bool);\n"));
}

#[test]
fn expansion_errors_surface() {
    let desc = OperationDescriptor::new(
        "decrypt",
        vec![ParameterClass::Plaintext],
        ReturnRule::PlaintextExtraction,
    );

    let err = render_descriptors(&[desc], ListFormat::Text).unwrap_err();

    assert!(matches!(err, ListError::Compile(_)));
    assert_eq!(
        err.to_string(),
        "`decrypt`: plaintext extraction expects an encrypted input, got `bool`"
    );
}
