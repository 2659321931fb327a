use crate::token::{Token, TokenIdentity};
use crate::types::{Pad, SlotIndex, Uid};

/// Compact description of a resident token for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenInfo {
    pub slot: Option<SlotIndex>,
    pub identity: TokenIdentity,
    pub pad: Pad,
    pub uid: Uid,
    pub name: String,
}

impl TokenInfo {
    pub fn slot(&self) -> Option<SlotIndex> {
        self.slot
    }

    pub fn identity(&self) -> TokenIdentity {
        self.identity
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl From<&Token> for TokenInfo {
    fn from(token: &Token) -> Self {
        TokenInfo {
            slot: token.slot(),
            identity: token.identity(),
            pad: token.pad(),
            uid: *token.uid(),
            name: token.name().to_string(),
        }
    }
}
