//! Function bodies for the library, selected by arity.

use crate::signature::ConcreteSignature;
use crate::templates::{sol_template_1_arg, sol_template_2_arg, sol_template_3_arg};
use crate::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyTemplate {
    OneArg,
    TwoArg,
    ThreeArg,
}

pub fn select_body_template(sig: &ConcreteSignature) -> Result<BodyTemplate> {
    match sig.arity() {
        1 => Ok(BodyTemplate::OneArg),
        2 => Ok(BodyTemplate::TwoArg),
        3 => Ok(BodyTemplate::ThreeArg),
        arity => Err(Error::UnsupportedArity {
            function: sig.name.clone(),
            arity,
        }),
    }
}

pub fn synthesize_body(sig: &ConcreteSignature) -> Result<String> {
    let name = sig.name.as_str();
    let ret = sig.return_type;
    let class = sig.plaintext_class();

    match sig.inputs.as_slice() {
        &[a] => Ok(sol_template_1_arg(name, a, ret, class)),
        &[a, b] => Ok(sol_template_2_arg(name, a, b, ret, class)),
        &[a, b, c] => Ok(sol_template_3_arg(name, a, b, c, ret, class)),
        inputs => Err(Error::UnsupportedArity {
            function: sig.name.clone(),
            arity: inputs.len(),
        }),
    }
}
