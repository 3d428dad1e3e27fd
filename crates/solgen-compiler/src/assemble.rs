//! One-pass generation: descriptors in, artifacts out.
//!
//! Every stage returns its fragments and this module concatenates them in
//! output order:
//!
//! 1. preamble
//! 2. one function per expanded signature
//! 3. casting functions, then the closing of `library FHE`
//! 4. operator overloads
//! 5. one bindings library per encrypted type

use indexmap::IndexMap;
use indexmap::map::Entry;
use solgen_core::{ENCRYPTED_TYPES, OperationDescriptor};

use crate::expand::expand;
use crate::signature::ConcreteSignature;
use crate::synth::{
    TestContract, binding_block, cast_test_contracts, casting_functions, operator_overloads,
    synthesize_body, synthesize_test_contract,
};
use crate::templates::{gen_abi_file, postfix, preamble};
use crate::{Error, Result};

/// Decrypt is exercised by every other test contract and gets none of its own.
const UNTESTED_OPERATIONS: &[&str] = &["decrypt"];

/// Everything one run produces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifacts {
    /// The `FHE.sol` library source.
    pub library: String,
    /// Test contract sources keyed by contract name, in generation order.
    pub contracts: IndexMap<String, String>,
    /// The `abis.ts` module.
    pub abi: String,
    /// `import { ... } from './abis';` line naming every test type.
    pub import_helper: String,
    /// Number of library functions generated from descriptors.
    pub signature_count: usize,
}

/// Run the whole generation pass.
pub fn generate(descriptors: &[OperationDescriptor]) -> Result<Artifacts> {
    let mut signatures: Vec<ConcreteSignature> = Vec::new();
    let mut tests: Vec<TestContract> = Vec::new();

    for desc in descriptors {
        if !UNTESTED_OPERATIONS.contains(&desc.name.as_str()) {
            tests.extend(synthesize_test_contract(desc));
        }
        signatures.extend(expand(desc)?);
    }
    tests.extend(cast_test_contracts());

    let library = assemble_library(&signatures)?;
    let (contracts, abi_fragments, import_helper) = collect_tests(tests)?;

    Ok(Artifacts {
        library,
        contracts,
        abi: gen_abi_file(&abi_fragments),
        import_helper,
        signature_count: signatures.len(),
    })
}

pub fn assemble_library(signatures: &[ConcreteSignature]) -> Result<String> {
    let mut sections: Vec<String> = vec![preamble()];

    for sig in signatures {
        sections.push(synthesize_body(sig)?);
    }

    sections.push("\n\n\t// ********** TYPE CASTING ************* //".to_string());
    sections.extend(casting_functions());
    sections.push(postfix());

    sections.push("\n\n// ********** OPERATOR OVERLOADING ************* //\n".to_string());
    sections.extend(operator_overloads(&ENCRYPTED_TYPES)?);

    sections.push("\n// ********** BINDING DEFS ************* //".to_string());
    for ty in ENCRYPTED_TYPES {
        sections.push(binding_block(ty, signatures));
    }

    Ok(sections.concat())
}

fn collect_tests(tests: Vec<TestContract>) -> Result<(IndexMap<String, String>, String, String)> {
    let mut contracts = IndexMap::new();
    let mut abi = String::new();
    let mut type_names = Vec::new();

    for test in tests {
        type_names.push(format!("{}TestType", test.key));
        abi.push_str(&test.abi);
        match contracts.entry(test.key) {
            Entry::Occupied(e) => return Err(Error::DuplicateArtifact(e.key().clone())),
            Entry::Vacant(e) => {
                e.insert(test.source);
            }
        }
    }

    let import_helper = format!("import {{ {} }} from './abis';\n", type_names.join(",\n"));
    Ok((contracts, abi, import_helper))
}
