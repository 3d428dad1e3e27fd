//! Literal text for every generated artifact.
//!
//! Templates are plain functions from names and types to source text. Which
//! template applies is decided in `synth`.

pub mod contracts;
pub mod library;


pub use contracts::{
    ContractTemplate, as_type_testing_contract, gen_abi_file, test_contract_1_arg,
    test_contract_2_arg, test_contract_2_arg_bool_res, test_contract_3_arg,
    test_contract_reencrypt, test_contract_req,
};
pub use library::{
    as_type_function, binding_library_type, operator_binding, operator_overload_decl, postfix,
    preamble, sol_template_1_arg, sol_template_2_arg, sol_template_3_arg,
};
