//! Test contract dispatch.
//!
//! The decision table, first match wins:
//!
//! | shape                                          | template              |
//! |------------------------------------------------|-----------------------|
//! | name `req`                                     | `Req`                 |
//! | name `reencrypt`                               | `Reencrypt`           |
//! | 2 encrypted inputs, returns `ebool`            | `TwoArgBoolResult`    |
//! | 2 encrypted inputs                             | `TwoArg`              |
//! | 1 encrypted input, encrypted result            | `OneArg`              |
//! | 3 inputs                                       | `ThreeArg`            |
//! | anything else                                  | `Unimplemented`       |

use solgen_core::utils::capitalize;
use solgen_core::{OperationDescriptor, ParameterClass, ReturnRule, TypeTag, operator_for};
use tracing::warn;

use crate::templates::{
    ContractTemplate, test_contract_1_arg, test_contract_2_arg, test_contract_2_arg_bool_res,
    test_contract_3_arg, test_contract_reencrypt, test_contract_req,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TestTemplate {
    Req,
    Reencrypt,
    TwoArgBoolResult,
    TwoArg { operator: Option<&'static str> },
    OneArg,
    ThreeArg,
    Unimplemented,
}

/// A generated test contract keyed by its capitalized name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestContract {
    pub key: String,
    pub source: String,
    pub abi: String,
}

impl TestContract {
    pub fn new(key: impl Into<String>, template: ContractTemplate) -> Self {
        Self {
            key: key.into(),
            source: template.source,
            abi: template.abi,
        }
    }
}

pub fn select_test_template(desc: &OperationDescriptor) -> TestTemplate {
    match desc.name.as_str() {
        "req" => return TestTemplate::Req,
        "reencrypt" => return TestTemplate::Reencrypt,
        _ => {}
    }

    match desc.arity() {
        2 if desc.all_encrypted() => {
            if desc.return_rule == ReturnRule::Fixed(TypeTag::Ebool) {
                TestTemplate::TwoArgBoolResult
            } else {
                TestTemplate::TwoArg {
                    operator: operator_for(&desc.name),
                }
            }
        }
        1 if desc.params[0] == ParameterClass::Encrypted
            && desc.return_rule == ReturnRule::Promoted =>
        {
            TestTemplate::OneArg
        }
        3 => TestTemplate::ThreeArg,
        _ => TestTemplate::Unimplemented,
    }
}

/// Render the test contract for `desc`.
///
/// Shapes without a template are logged and skipped.
pub fn synthesize_test_contract(desc: &OperationDescriptor) -> Option<TestContract> {
    let name = desc.name.as_str();
    let template = match select_test_template(desc) {
        TestTemplate::Req => test_contract_req(),
        TestTemplate::Reencrypt => test_contract_reencrypt(),
        TestTemplate::TwoArgBoolResult => test_contract_2_arg_bool_res(name, desc.is_boolean_math_op),
        TestTemplate::TwoArg { operator } => {
            test_contract_2_arg(name, desc.is_boolean_math_op, operator)
        }
        TestTemplate::OneArg => test_contract_1_arg(name),
        TestTemplate::ThreeArg => test_contract_3_arg(name),
        TestTemplate::Unimplemented => {
            warn!(
                function = name,
                inputs = desc.arity(),
                params = ?desc.params,
                "test contract not implemented for this shape"
            );
            return None;
        }
    };
    Some(TestContract::new(capitalize(name), template))
}
