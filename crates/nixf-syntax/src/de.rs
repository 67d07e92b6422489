//! Deserialization shapes that check the embedded kind tag.
//!
//! Each concrete node deserializes through a mirror struct with the same
//! field names, then converts with `TryFrom` so a tag that disagrees with the
//! node type becomes a `SyntaxError` instead of a malformed node.

use crate::{
    ExprFloat, ExprInt, ExprString, InterpolatedParts, NixFloat, NixInt, NodeBase, NodeKind,
    StringPart, SyntaxError,
};
use serde::Deserialize;
use std::sync::Arc;

fn expect_kind(base: NodeBase, expected: NodeKind) -> Result<NodeBase, SyntaxError> {
    if base.kind() == expected {
        Ok(base)
    } else {
        Err(SyntaxError::KindMismatch {
            expected,
            found: base.kind(),
        })
    }
}

#[derive(Deserialize)]
pub(crate) struct ExprIntRepr {
    base: NodeBase,
    value: NixInt,
}

impl TryFrom<ExprIntRepr> for ExprInt {
    type Error = SyntaxError;

    fn try_from(repr: ExprIntRepr) -> Result<Self, Self::Error> {
        Ok(Self {
            base: expect_kind(repr.base, NodeKind::ExprInt)?,
            value: repr.value,
        })
    }
}

/// Floats travel as their IEEE-754 bit pattern, so NaN payloads, `-0.0`
/// and the infinities survive formats such as JSON that cannot spell them.
pub(crate) mod float_bits {
    use crate::NixFloat;
    use serde::{Deserialize, Deserializer, Serializer};

    pub(crate) fn serialize<S: Serializer>(value: &NixFloat, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(value.to_bits())
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NixFloat, D::Error> {
        u64::deserialize(d).map(NixFloat::from_bits)
    }
}

#[derive(Deserialize)]
pub(crate) struct ExprFloatRepr {
    base: NodeBase,
    #[serde(with = "float_bits")]
    value: NixFloat,
}

impl TryFrom<ExprFloatRepr> for ExprFloat {
    type Error = SyntaxError;

    fn try_from(repr: ExprFloatRepr) -> Result<Self, Self::Error> {
        Ok(Self {
            base: expect_kind(repr.base, NodeKind::ExprFloat)?,
            value: repr.value,
        })
    }
}

#[derive(Deserialize)]
pub(crate) struct ExprStringRepr {
    base: NodeBase,
    parts: Arc<InterpolatedParts>,
}

impl TryFrom<ExprStringRepr> for ExprString {
    type Error = SyntaxError;

    fn try_from(repr: ExprStringRepr) -> Result<Self, Self::Error> {
        Ok(Self {
            base: expect_kind(repr.base, NodeKind::ExprString)?,
            parts: repr.parts,
        })
    }
}

#[derive(Deserialize)]
pub(crate) struct InterpolatedPartsRepr {
    base: NodeBase,
    fragments: Vec<StringPart>,
}

impl TryFrom<InterpolatedPartsRepr> for InterpolatedParts {
    type Error = SyntaxError;

    fn try_from(repr: InterpolatedPartsRepr) -> Result<Self, Self::Error> {
        Ok(Self {
            base: expect_kind(repr.base, NodeKind::InterpolatedParts)?,
            fragments: repr.fragments,
        })
    }
}
