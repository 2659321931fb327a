// toypad/src/persistence/tokens.rs

use crate::constants::TOKEN_RECORD_LEN;
use crate::persistence::record::{decode_token, encode_token};
use crate::persistence::{
    RECORD_EXT, TOKENS_DIR, list_records, read_file, sanitize_name, write_file,
};
use crate::storage::{Storage, join};
use crate::token::Token;
use crate::types::Uid;
use crate::utils::parse_hex;
use crate::{Error, Result};

/// One entry of the saved-token directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedToken {
    /// Path relative to the storage root, usable with [`load_saved_token`].
    pub path: String,
    /// Sanitized name part of the file name.
    pub name: String,
    pub uid: Option<Uid>,
}

impl SavedToken {
    fn from_record_name(stem: &str) -> Self {
        let (name, uid) = match stem.rsplit_once('_') {
            Some((name, hex)) => {
                let uid = parse_hex(hex).and_then(|b| Uid::try_from(&b[..]).ok());
                match uid {
                    Some(uid) => (name.to_string(), Some(uid)),
                    None => (stem.to_string(), None),
                }
            }
            None => (stem.to_string(), None),
        };
        Self {
            path: join(TOKENS_DIR, &format!("{}{}", stem, RECORD_EXT)),
            name,
            uid,
        }
    }
}

/// `tokens/<name>_<uid hex>.bin`
pub fn token_path(token: &Token) -> String {
    join(
        TOKENS_DIR,
        &format!(
            "{}_{}{}",
            sanitize_name(token.name()),
            token.uid().to_hex(),
            RECORD_EXT
        ),
    )
}

/// Write one token record. Returns the path written.
pub fn save_token(storage: &mut dyn Storage, token: &Token) -> Result<String> {
    let path = token_path(token);
    write_file(storage, TOKENS_DIR, &path, &encode_token(token))?;
    log::info!("saved {} to {}", token.name(), path);
    Ok(path)
}

/// Read a token record. The returned token is not placed.
pub fn load_saved_token(storage: &dyn Storage, path: &str) -> Result<Token> {
    let bytes = read_file(storage, path)?;
    let record: &[u8; TOKEN_RECORD_LEN] =
        bytes
            .as_slice()
            .try_into()
            .map_err(|_| Error::CorruptRecord {
                path: path.to_string(),
                reason: format!("expected {} bytes, found {}", TOKEN_RECORD_LEN, bytes.len()),
            })?;
    let mut token = decode_token(record).ok_or_else(|| Error::CorruptRecord {
        path: path.to_string(),
        reason: "record is empty".into(),
    })?;
    token.set_placement(None, token.pad());
    Ok(token)
}

pub fn list_saved_tokens(storage: &dyn Storage) -> Result<Vec<SavedToken>> {
    Ok(list_records(storage, TOKENS_DIR)?
        .iter()
        .map(|stem| SavedToken::from_record_name(stem))
        .collect())
}
