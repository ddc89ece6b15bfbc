//! Move-call assembly against a package's published signatures.
//!
//! Callers pass loosely typed parameters; each is turned into a pure input or
//! an object input depending on the declared parameter type of the target
//! function.

use anyhow::{anyhow, Context, Result};
use flowx_transport::SuiRpc;
use flowx_types::{encode_pure, pure_serialization_type, PtbArgument, TransactionBlock};
use serde_json::Value;
use tracing::debug;

/// One argument of a move call.
#[derive(Debug, Clone, PartialEq)]
pub enum MoveCallParam {
    /// An argument already bound in the transaction, used as is.
    Argument(PtbArgument),
    /// A plain value: pure if the parameter type allows it, otherwise an object id.
    Value(Value),
}

impl From<PtbArgument> for MoveCallParam {
    fn from(arg: PtbArgument) -> Self {
        MoveCallParam::Argument(arg)
    }
}

impl From<Value> for MoveCallParam {
    fn from(value: Value) -> Self {
        MoveCallParam::Value(value)
    }
}

impl From<&str> for MoveCallParam {
    fn from(value: &str) -> Self {
        MoveCallParam::Value(Value::String(value.to_string()))
    }
}

/// Append `package::module::function` to `tx` and return its result argument.
pub async fn append_move_call(
    rpc: &dyn SuiRpc,
    tx: &mut TransactionBlock,
    package: &str,
    module: &str,
    function: &str,
    params: Vec<MoveCallParam>,
    type_arguments: Vec<String>,
) -> Result<PtbArgument> {
    let normalized = rpc.get_normalized_move_module(package, module).await?;
    let signature = normalized
        .exposed_functions
        .get(function)
        .ok_or_else(|| anyhow!("{}::{} has no function {}", package, module, function))?;

    let mut arguments = Vec::with_capacity(params.len());
    for (i, param) in params.into_iter().enumerate() {
        let value = match param {
            MoveCallParam::Argument(arg) => {
                arguments.push(arg);
                continue;
            }
            MoveCallParam::Value(value) => value,
        };

        let pure_type = match signature.parameters.get(i) {
            Some(declared) => pure_serialization_type(declared, Some(&value))?,
            None => None,
        };
        let arg = match pure_type {
            Some(pure_type) => tx.pure(encode_pure(&pure_type, &value)?),
            None => {
                let object_id = value.as_str().ok_or_else(|| {
                    anyhow!("argument {} of {} is not an object id: {}", i, function, value)
                })?;
                tx.object(object_id).with_context(|| {
                    format!("argument {} of {} is not an object id", i, function)
                })?
            }
        };
        arguments.push(arg);
    }

    debug!(
        call = %format!("{}::{}::{}", package, module, function),
        args = arguments.len(),
        "appending move call"
    );
    Ok(tx.move_call(package, module, function, type_arguments, arguments))
}

/// Build a move call into `tx`, or into a fresh block when none is given.
pub async fn init_tx_block(
    rpc: &dyn SuiRpc,
    package: &str,
    module: &str,
    function: &str,
    params: Vec<MoveCallParam>,
    type_arguments: Vec<String>,
    tx: Option<TransactionBlock>,
) -> Result<TransactionBlock> {
    let mut tx = tx.unwrap_or_default();
    append_move_call(rpc, &mut tx, package, module, function, params, type_arguments).await?;
    Ok(tx)
}
