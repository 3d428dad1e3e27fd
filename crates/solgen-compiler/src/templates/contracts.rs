//! Test contract templates.
//!
//! Each template returns the Solidity source of one test contract together
//! with the TypeScript interface fragment describing its ABI.

use solgen_core::utils::capitalize;
use solgen_core::{ENCRYPTED_TYPES, TypeTag};

/// Source and ABI fragment of one generated test contract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContractTemplate {
    pub source: String,
    pub abi: String,
}

/// Encrypted types exercised by value-returning test contracts.
///
/// Byte-like types never qualify since their decrypted form is not a number.
fn test_types(include_comparison: bool) -> impl Iterator<Item = TypeTag> {
    ENCRYPTED_TYPES
        .into_iter()
        .filter(move |ty| !ty.is_byte_like() && (include_comparison || !ty.is_comparison_only()))
}

fn header() -> String {
    let imported = ENCRYPTED_TYPES
        .iter()
        .map(|ty| ty.name())
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "// SPDX-License-Identifier: MIT\npragma solidity >=0.8.19 <0.9.0;\n\nimport {{FHE}} from \"../../../contracts/FHE.sol\";\nimport {{{imported}}} from \"../../../contracts/FHE.sol\";\nimport {{Utils}} from \"./utils/Utils.sol\";\n\nerror TestNotFound(string test);\n"
    )
}

/// `FHE.decrypt(expr)` converted to `uint256` when needed.
fn decrypt_as_uint(ty: TypeTag, expr: &str) -> String {
    if ty == TypeTag::Ebool {
        format!("Utils.boolToUint(FHE.decrypt({expr}))")
    } else {
        format!("FHE.decrypt({expr})")
    }
}

/// Chain of `if (Utils.cmp(test, "...")) { ... } else if ...` arms that
/// reverts when no label matches.
fn dispatch_chain(cases: &[(String, String)]) -> String {
    if cases.is_empty() {
        return "        revert TestNotFound(test);\n".to_string();
    }
    let mut out = String::from("        ");
    for (idx, (label, stmt)) in cases.iter().enumerate() {
        if idx > 0 {
            out.push_str(" else ");
        }
        out.push_str(&format!(
            "if (Utils.cmp(test, \"{label}\")) {{\n            {stmt}\n        }}"
        ));
    }
    out.push_str(" else {\n            revert TestNotFound(test);\n        }\n");
    out
}

fn abi_interface(type_name: &str, members: &[String]) -> String {
    let mut out = format!("export interface {type_name}TestType extends BaseContract {{\n");
    for member in members {
        out.push_str(&format!("    {member};\n"));
    }
    out.push_str("}\n\n");
    out
}

pub fn test_contract_2_arg(name: &str, is_boolean_math: bool, operator: Option<&str>) -> ContractTemplate {
    let contract = capitalize(name);
    let mut cases = Vec::new();
    for ty in test_types(is_boolean_math) {
        let cap = ty.capitalized();
        cases.push((
            format!("{name}({ty},{ty})"),
            format!(
                "return {};",
                decrypt_as_uint(ty, &format!("FHE.{name}(FHE.as{cap}(a), FHE.as{cap}(b))"))
            ),
        ));
        cases.push((
            format!("{ty}.{name}({ty})"),
            format!(
                "return {};",
                decrypt_as_uint(ty, &format!("FHE.as{cap}(a).{name}(FHE.as{cap}(b))"))
            ),
        ));
        if let Some(op) = operator {
            if !ty.is_comparison_only() || solgen_core::is_bitwise_op(name) {
                cases.push((
                    format!("{ty} {op} {ty}"),
                    format!(
                        "return {};",
                        decrypt_as_uint(ty, &format!("FHE.as{cap}(a) {op} FHE.as{cap}(b)"))
                    ),
                ));
            }
        }
    }

    let source = format!(
        "{}\ncontract {contract}Test {{\n    using Utils for *;\n\n    function {name}(string calldata test, uint256 a, uint256 b) public pure returns (uint256 output) {{\n{}    }}\n}}\n",
        header(),
        dispatch_chain(&cases)
    );
    let abi = abi_interface(
        &contract,
        &[format!("{name}: (test: string, a: bigint, b: bigint) => Promise<bigint>")],
    );
    ContractTemplate { source, abi }
}

pub fn test_contract_2_arg_bool_res(name: &str, is_boolean_math: bool) -> ContractTemplate {
    let contract = capitalize(name);
    let mut cases = Vec::new();
    for ty in test_types(is_boolean_math) {
        let cap = ty.capitalized();
        cases.push((
            format!("{name}({ty},{ty})"),
            format!("return FHE.decrypt(FHE.{name}(FHE.as{cap}(a), FHE.as{cap}(b)));"),
        ));
        cases.push((
            format!("{ty}.{name}({ty})"),
            format!("return FHE.decrypt(FHE.as{cap}(a).{name}(FHE.as{cap}(b)));"),
        ));
    }

    let source = format!(
        "{}\ncontract {contract}Test {{\n    using Utils for *;\n\n    function {name}(string calldata test, uint256 a, uint256 b) public pure returns (bool output) {{\n{}    }}\n}}\n",
        header(),
        dispatch_chain(&cases)
    );
    let abi = abi_interface(
        &contract,
        &[format!("{name}: (test: string, a: bigint, b: bigint) => Promise<boolean>")],
    );
    ContractTemplate { source, abi }
}

pub fn test_contract_1_arg(name: &str) -> ContractTemplate {
    let contract = capitalize(name);
    let cases: Vec<(String, String)> = test_types(false)
        .map(|ty| {
            let cap = ty.capitalized();
            (
                format!("{name}({ty})"),
                format!(
                    "return {};",
                    decrypt_as_uint(ty, &format!("FHE.{name}(FHE.as{cap}(a))"))
                ),
            )
        })
        .collect();

    let source = format!(
        "{}\ncontract {contract}Test {{\n    using Utils for *;\n\n    function {name}(string calldata test, uint256 a) public pure returns (uint256 output) {{\n{}    }}\n}}\n",
        header(),
        dispatch_chain(&cases)
    );
    let abi = abi_interface(
        &contract,
        &[format!("{name}: (test: string, a: bigint) => Promise<bigint>")],
    );
    ContractTemplate { source, abi }
}

pub fn test_contract_3_arg(name: &str) -> ContractTemplate {
    let contract = capitalize(name);
    let cases: Vec<(String, String)> = test_types(false)
        .map(|ty| {
            let cap = ty.capitalized();
            (
                format!("{name}: {ty}"),
                format!(
                    "return {};",
                    decrypt_as_uint(
                        ty,
                        &format!("FHE.{name}(FHE.asEbool(control), FHE.as{cap}(a), FHE.as{cap}(b))")
                    )
                ),
            )
        })
        .collect();

    let source = format!(
        "{}\ncontract {contract}Test {{\n    using Utils for *;\n\n    function {name}(string calldata test, bool control, uint256 a, uint256 b) public pure returns (uint256 output) {{\n{}    }}\n}}\n",
        header(),
        dispatch_chain(&cases)
    );
    let abi = abi_interface(
        &contract,
        &[format!(
            "{name}: (test: string, control: boolean, a: bigint, b: bigint) => Promise<bigint>"
        )],
    );
    ContractTemplate { source, abi }
}

pub fn test_contract_req() -> ContractTemplate {
    let cases: Vec<(String, String)> = test_types(true)
        .map(|ty| {
            let cap = ty.capitalized();
            (format!("req({ty})"), format!("FHE.req(FHE.as{cap}(a));"))
        })
        .collect();

    let source = format!(
        "{}\ncontract ReqTest {{\n    using Utils for *;\n\n    function req(string calldata test, uint256 a) public pure {{\n{}    }}\n}}\n",
        header(),
        dispatch_chain(&cases)
    );
    let abi = abi_interface("Req", &["req: (test: string, a: bigint) => Promise<void>".to_string()]);
    ContractTemplate { source, abi }
}

pub fn test_contract_reencrypt() -> ContractTemplate {
    let cases: Vec<(String, String)> = test_types(false)
        .map(|ty| {
            let cap = ty.capitalized();
            (
                format!("reencrypt({ty})"),
                format!("return FHE.reencrypt(FHE.as{cap}(a), abi.encodePacked(pubkey));"),
            )
        })
        .collect();

    let source = format!(
        "{}\ncontract ReencryptTest {{\n    using Utils for *;\n\n    function reencrypt(string calldata test, uint256 a, bytes32 pubkey) public pure returns (bytes memory reencrypted) {{\n{}    }}\n}}\n",
        header(),
        dispatch_chain(&cases)
    );
    let abi = abi_interface(
        "Reencrypt",
        &["reencrypt: (test: string, a: bigint, pubkey: Uint8Array) => Promise<string>".to_string()],
    );
    ContractTemplate { source, abi }
}

/// Test contract for the `asX` conversions into `to`.
pub fn as_type_testing_contract(to: TypeTag) -> ContractTemplate {
    let cap = to.capitalized();
    let (output, ts_output, convert): (&str, &str, fn(&str) -> String) = match to {
        TypeTag::Ebool => ("uint256", "bigint", |e| {
            format!("Utils.boolToUint(FHE.decrypt({e}))")
        }),
        TypeTag::Ebytes => ("bytes memory", "string", |e| format!("FHE.decrypt({e})")),
        _ => ("uint256", "bigint", |e| format!("FHE.decrypt({e})")),
    };

    let mut functions = String::new();
    let mut members = Vec::new();
    for from in ENCRYPTED_TYPES.into_iter().filter(|ty| *ty != to && !ty.is_byte_like()) {
        let from_cap = from.capitalized();
        let fn_name = format!("castFrom{from_cap}To{cap}");
        functions.push_str(&format!(
            "\n    function {fn_name}(uint256 val) public pure returns ({output}) {{\n        return {};\n    }}\n",
            convert(&format!("FHE.as{cap}(FHE.as{from_cap}(val))"))
        ));
        members.push(format!("{fn_name}: (val: bigint) => Promise<{ts_output}>"));
    }
    functions.push_str(&format!(
        "\n    function castFromPlaintextTo{cap}(uint256 val) public pure returns ({output}) {{\n        return {};\n    }}\n",
        convert(&format!("FHE.as{cap}(val)"))
    ));
    members.push(format!("castFromPlaintextTo{cap}: (val: bigint) => Promise<{ts_output}>"));
    functions.push_str(&format!(
        "\n    function castFromPreEncryptedTo{cap}(bytes memory val) public pure returns ({output}) {{\n        return {};\n    }}\n",
        convert(&format!("FHE.as{cap}(val)"))
    ));
    members.push(format!(
        "castFromPreEncryptedTo{cap}: (val: Uint8Array) => Promise<{ts_output}>"
    ));

    let source = format!(
        "{}\ncontract As{cap}Test {{\n    using Utils for *;\n{functions}}}\n",
        header()
    );
    let abi = abi_interface(&format!("As{cap}"), &members);
    ContractTemplate { source, abi }
}

/// Wrap accumulated ABI fragments into the `abis.ts` module.
pub fn gen_abi_file(fragments: &str) -> String {
    let mut out = String::from(
        "// This file is generated. Do not edit by hand.\nimport { BaseContract } from 'ethers';\n\n",
    );
    out.push_str(fragments);
    out.truncate(out.trim_end().len());
    out.push('\n');
    out
}
