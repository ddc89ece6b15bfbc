//! Programmable transaction block accumulator.
//!
//! A [`TransactionBlock`] collects inputs and commands before submission.
//! Object inputs are kept as unresolved ids; version and digest are filled in
//! by whatever signs and executes the block.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::address::normalize_address;

/// What a move-call argument points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PtbArgument {
    /// Position in [`TransactionBlock::inputs`].
    Input { index: u16 },
    /// Whole return value of command `index`.
    Result { index: u16 },
    /// One value of a command returning a tuple.
    NestedResult { index: u16, result_index: u16 },
    /// The coin paying for gas.
    GasCoin,
}

impl PtbArgument {
    /// The `position`-th value returned by the command this result refers to.
    ///
    /// Only a whole [`PtbArgument::Result`] can be split; anything else is
    /// returned unchanged.
    ///
    /// ```
    /// use flowx_types::PtbArgument;
    ///
    /// let swap = PtbArgument::Result { index: 2 };
    /// assert_eq!(
    ///     swap.nested(1),
    ///     PtbArgument::NestedResult { index: 2, result_index: 1 }
    /// );
    /// assert_eq!(PtbArgument::GasCoin.nested(1), PtbArgument::GasCoin);
    /// ```
    pub fn nested(self, position: u16) -> Self {
        match self {
            PtbArgument::Result { index } => PtbArgument::NestedResult {
                index,
                result_index: position,
            },
            other => other,
        }
    }
}

/// Transaction input: pure value or object reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TransactionInput {
    /// Pure BCS-encoded value
    Pure {
        #[serde(with = "pure_bytes")]
        bytes: Vec<u8>,
    },

    /// Object passed by id, resolved at build time
    Object { object_id: String },
}

/// PTB command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PtbCommand {
    /// Move function call
    MoveCall {
        package: String,
        module: String,
        function: String,
        type_arguments: Vec<String>,
        arguments: Vec<PtbArgument>,
    },
}

impl PtbCommand {
    /// `package::module::function` of a move call.
    pub fn target(&self) -> String {
        match self {
            PtbCommand::MoveCall {
                package,
                module,
                function,
                ..
            } => format!("{}::{}::{}", package, module, function),
        }
    }
}

/// Inputs and commands of a programmable transaction under construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionBlock {
    pub inputs: Vec<TransactionInput>,
    pub commands: Vec<PtbCommand>,
}

impl TransactionBlock {
    pub fn new() -> Self {
        Self::default()
    }

    fn push_input(&mut self, input: TransactionInput) -> PtbArgument {
        let index = self.inputs.len() as u16;
        self.inputs.push(input);
        PtbArgument::Input { index }
    }

    /// Add a pure input from already BCS-encoded bytes.
    pub fn pure(&mut self, bytes: Vec<u8>) -> PtbArgument {
        self.push_input(TransactionInput::Pure { bytes })
    }

    /// Add an object input. The same object is only added once.
    ///
    /// Fails when `object_id` is not a valid id.
    pub fn object(&mut self, object_id: &str) -> Result<PtbArgument> {
        let object_id = normalize_address(object_id)?;
        let existing = self.inputs.iter().position(|input| {
            matches!(input, TransactionInput::Object { object_id: id } if *id == object_id)
        });
        Ok(match existing {
            Some(index) => PtbArgument::Input {
                index: index as u16,
            },
            None => self.push_input(TransactionInput::Object { object_id }),
        })
    }

    /// The gas coin, usable as a move-call argument.
    pub fn gas(&self) -> PtbArgument {
        PtbArgument::GasCoin
    }

    /// Append a move call and return a reference to its result.
    pub fn move_call(
        &mut self,
        package: &str,
        module: &str,
        function: &str,
        type_arguments: Vec<String>,
        arguments: Vec<PtbArgument>,
    ) -> PtbArgument {
        let index = self.commands.len() as u16;
        self.commands.push(PtbCommand::MoveCall {
            package: package.to_string(),
            module: module.to_string(),
            function: function.to_string(),
            type_arguments,
            arguments,
        });
        PtbArgument::Result { index }
    }
}

/// Pure input bytes travel as standard base64 strings in JSON.
mod pure_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        STANDARD
            .decode(text.as_bytes())
            .map_err(|e| D::Error::custom(format!("pure bytes are not base64: {}", e)))
    }
}
