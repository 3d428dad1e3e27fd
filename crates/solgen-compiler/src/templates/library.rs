//! Templates for the `FHE.sol` library file.

use solgen_core::TypeTag;
use solgen_core::utils::{capitalize, to_constant_case};
use solgen_core::ENCRYPTED_TYPES;

use crate::signature::{PlaintextClass, VISIBILITY};

/// Closes a `library` block.
pub fn postfix() -> String {
    "\n}\n".to_string()
}

/// Header up to and including the opening of `library FHE {`.
pub fn preamble() -> String {
    let mut out = String::new();
    out.push_str("// SPDX-License-Identifier: BSD-3-Clause-Clear\n");
    out.push_str("// solhint-disable one-contract-per-file\n\n");
    out.push_str("pragma solidity >=0.8.19 <0.9.0;\n\n");
    out.push_str("import {Precompiles, FheOps} from \"./FheOS.sol\";\n\n");

    for ty in ENCRYPTED_TYPES {
        out.push_str(&format!("type {ty} is uint256;\n"));
    }

    out.push_str("\nlibrary Common {\n");
    out.push_str("    // Values used to communicate types to the runtime.\n");
    for ty in ENCRYPTED_TYPES {
        out.push_str(&format!(
            "    uint8 internal constant {} = {};\n",
            utype_constant_name(ty),
            ty.rank().0
        ));
    }
    out.push_str(COMMON_HELPERS);
    out.push_str("}\n");
    out.push_str(IMPL_LIBRARY);

    out.push_str("\nlibrary FHE {\n");
    for ty in ENCRYPTED_TYPES {
        out.push_str(&format!(
            "    {ty} internal constant NIL_{} = {ty}.wrap(0);\n",
            to_constant_case(ty.name())
        ));
    }
    for ty in ENCRYPTED_TYPES {
        out.push_str(&format!(
            "\n    function isInitialized({ty} v) internal pure returns (bool) {{\n        return {ty}.unwrap(v) != 0;\n    }}\n"
        ));
    }
    out
}

const COMMON_HELPERS: &str = r#"
    function bigIntToBool(uint256 i) internal pure returns (bool) {
        return (i > 0);
    }

    function boolToUint(bool b) internal pure returns (uint256) {
        return b ? 1 : 0;
    }

    function bytesToUint(bytes memory b) internal pure returns (uint256 result) {
        for (uint256 i = 0; i < b.length && i < 32; i++) {
            result = (result << 8) | uint8(b[i]);
        }
    }

    function uintToBytes(uint256 value) internal pure returns (bytes memory) {
        return abi.encodePacked(value);
    }
"#;

const IMPL_LIBRARY: &str = r#"
library Impl {
    function unaryOp(
        uint8 utype,
        uint256 value,
        function(uint8, bytes memory) external pure returns (bytes memory) impl
    ) internal pure returns (uint256) {
        return Common.bytesToUint(impl(utype, Common.uintToBytes(value)));
    }

    function mathOp(
        uint8 utype,
        uint256 lhs,
        uint256 rhs,
        function(uint8, bytes memory, bytes memory) external pure returns (bytes memory) impl
    ) internal pure returns (uint256) {
        return Common.bytesToUint(impl(utype, Common.uintToBytes(lhs), Common.uintToBytes(rhs)));
    }

    function ternaryOp(
        uint8 utype,
        uint256 control,
        uint256 ifTrue,
        uint256 ifFalse,
        function(uint8, bytes memory, bytes memory, bytes memory) external pure returns (bytes memory) impl
    ) internal pure returns (uint256) {
        return Common.bytesToUint(
            impl(utype, Common.uintToBytes(control), Common.uintToBytes(ifTrue), Common.uintToBytes(ifFalse))
        );
    }

    function cast(uint8 fromType, uint256 value, uint8 toType) internal pure returns (uint256) {
        return Common.bytesToUint(FheOps(Precompiles.Fheos).cast(fromType, Common.uintToBytes(value), toType));
    }

    function trivialEncrypt(uint256 value, uint8 toType) internal pure returns (uint256) {
        return Common.bytesToUint(FheOps(Precompiles.Fheos).trivialEncrypt(Common.uintToBytes(value), toType));
    }

    function verify(bytes memory ciphertext, uint8 toType) internal pure returns (uint256) {
        return Common.bytesToUint(FheOps(Precompiles.Fheos).verify(toType, ciphertext));
    }
}
"#;

/// `Common.EUINT8_TFHE` style constant naming the runtime type of `ty`.
pub fn utype_constant(ty: TypeTag) -> String {
    format!("Common.{}", utype_constant_name(ty))
}

fn utype_constant_name(ty: TypeTag) -> String {
    format!("{}_TFHE", to_constant_case(ty.encrypted().name()))
}

/// Expression turning `ident` of type `ty` into a raw `uint256`.
fn unwrap_expr(ty: TypeTag, ident: &str) -> String {
    match ty {
        TypeTag::Bool => format!("Common.boolToUint({ident})"),
        TypeTag::Bytes => format!("Common.bytesToUint({ident})"),
        ty if ty.is_encrypted() => format!("{ty}.unwrap({ident})"),
        _ => format!("uint256({ident})"),
    }
}

/// Statement returning the raw `uint256` `result` as `ty`.
fn wrap_result(ty: TypeTag) -> String {
    match ty {
        TypeTag::Bool => "return Common.bigIntToBool(result);".to_string(),
        TypeTag::Bytes => "return Common.uintToBytes(result);".to_string(),
        ty if ty.is_encrypted() => format!("return {ty}.wrap(result);"),
        ty => format!("return {ty}(result);"),
    }
}

fn render_function(
    name: &str,
    inputs: &[TypeTag],
    return_type: TypeTag,
    plaintext: PlaintextClass,
    call: impl FnOnce(&str) -> String,
) -> String {
    let params = inputs
        .iter()
        .enumerate()
        .map(|(idx, ty)| format!("{} input{idx}", ty.declared()))
        .collect::<Vec<_>>()
        .join(", ");
    let described = inputs
        .iter()
        .map(|ty| ty.name())
        .collect::<Vec<_>>()
        .join(", ");

    let mut out = String::new();
    out.push_str(&format!(
        "\n    /// @notice This function performs the {name} operation over {described}\n"
    ));
    match plaintext {
        PlaintextClass::None => out.push_str(
            "    /// @dev Uninitialized encrypted inputs are treated as an encryption of zero\n",
        ),
        PlaintextClass::All => {
            out.push_str("    /// @dev Plaintext inputs are passed to the runtime as-is\n")
        }
    }
    out.push_str(&format!(
        "    function {name}({params}) {VISIBILITY} returns ({}) {{\n",
        return_type.declared()
    ));

    if plaintext == PlaintextClass::None {
        for (idx, ty) in inputs.iter().enumerate() {
            if ty.is_encrypted() {
                out.push_str(&format!(
                    "        if (!isInitialized(input{idx})) {{\n            input{idx} = as{}(0);\n        }}\n",
                    ty.capitalized()
                ));
            }
        }
    }

    for (idx, ty) in inputs.iter().enumerate() {
        out.push_str(&format!(
            "        uint256 unwrappedInput{idx} = {};\n",
            unwrap_expr(*ty, &format!("input{idx}"))
        ));
    }

    let utype_source = if return_type.is_encrypted() {
        return_type
    } else {
        inputs.first().copied().unwrap_or(return_type)
    };
    out.push_str(&format!(
        "\n        uint256 result = {};\n",
        call(&utype_constant(utype_source))
    ));
    out.push_str(&format!("        {}\n    }}\n", wrap_result(return_type)));
    out
}

pub fn sol_template_1_arg(
    name: &str,
    input0: TypeTag,
    return_type: TypeTag,
    plaintext: PlaintextClass,
) -> String {
    render_function(name, &[input0], return_type, plaintext, |utype| {
        format!("Impl.unaryOp({utype}, unwrappedInput0, FheOps(Precompiles.Fheos).{name})")
    })
}

pub fn sol_template_2_arg(
    name: &str,
    input0: TypeTag,
    input1: TypeTag,
    return_type: TypeTag,
    plaintext: PlaintextClass,
) -> String {
    render_function(name, &[input0, input1], return_type, plaintext, |utype| {
        format!(
            "Impl.mathOp({utype}, unwrappedInput0, unwrappedInput1, FheOps(Precompiles.Fheos).{name})"
        )
    })
}

pub fn sol_template_3_arg(
    name: &str,
    input0: TypeTag,
    input1: TypeTag,
    input2: TypeTag,
    return_type: TypeTag,
    plaintext: PlaintextClass,
) -> String {
    render_function(name, &[input0, input1, input2], return_type, plaintext, |utype| {
        format!(
            "Impl.ternaryOp({utype}, unwrappedInput0, unwrappedInput1, unwrappedInput2, FheOps(Precompiles.Fheos).{name})"
        )
    })
}

/// `asTo(from value)` conversion function.
pub fn as_type_function(from: TypeTag, to: TypeTag) -> String {
    let to_name = to.capitalized();
    let body = match from {
        TypeTag::Uint256 => format!(
            "return {to}.wrap(Impl.trivialEncrypt(value, {}));",
            utype_constant(to)
        ),
        TypeTag::Bytes => format!(
            "return {to}.wrap(Impl.verify(value, {}));",
            utype_constant(to)
        ),
        TypeTag::Bool => format!(
            "uint256 sVal = 0;\n        if (value) {{\n            sVal = 1;\n        }}\n        return as{to_name}(sVal);"
        ),
        from => format!(
            "return {to}.wrap(Impl.cast({}, {from}.unwrap(value), {}));",
            utype_constant(from),
            utype_constant(to)
        ),
    };
    format!(
        "\n    /// @notice Converts a {from} to an {to}\n    function as{to_name}({} value) {VISIBILITY} returns ({to}) {{\n        {body}\n    }}\n",
        from.declared()
    )
}

/// Free function plus `using ... for ... global` attaching `operator` to `ty`.
pub fn operator_overload_decl(
    name: &str,
    operator: &str,
    ty: TypeTag,
    unary: bool,
    returns_bool: bool,
) -> String {
    let fn_name = format!("operator{}{}", capitalize(name), ty.capitalized());
    let return_type = if returns_bool { TypeTag::Ebool } else { ty };
    let (params, args) = if unary {
        (format!("{ty} value"), "value")
    } else {
        (format!("{ty} lhs, {ty} rhs"), "lhs, rhs")
    };
    format!(
        "\nusing {{{fn_name} as {operator}}} for {ty} global;\n/// @notice Performs the {name} operation\nfunction {fn_name}({params}) pure returns ({return_type}) {{\n    return FHE.{name}({args});\n}}\n"
    )
}

/// Opening of the per-type bindings library.
pub fn binding_library_type(ty: TypeTag) -> String {
    let lib = format!("Bindings{}", ty.capitalized());
    format!("\n\nusing {lib} for {ty} global;\nlibrary {lib} {{\n")
}

/// Method-style wrapper around `FHE.name` inside a bindings library.
pub fn operator_binding(name: &str, ty: TypeTag, unary: bool, bool_result: bool) -> String {
    let return_type = if bool_result { TypeTag::Ebool } else { ty };
    let (params, args) = if unary {
        (format!("{ty} value"), "value")
    } else {
        (format!("{ty} lhs, {ty} rhs"), "lhs, rhs")
    };
    format!(
        "\n    /// @notice Performs the {name} operation\n    function {name}({params}) {VISIBILITY} returns ({return_type}) {{\n        return FHE.{name}({args});\n    }}\n"
    )
}
