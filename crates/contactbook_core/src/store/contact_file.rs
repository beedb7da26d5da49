//! Contact record file format.
//!
//! One contact per line, encoded as a JSON object with fields in order
//! `id`, `name`, `notes`. Records are joined with `\n` and the last record
//! has no trailing newline. Blank lines are ignored on load.

use super::{FlatFileStore, StoreError, StoreResult};
use crate::model::contact::{Contact, ContactId};
use log::{error, info};
use std::collections::HashSet;

/// Decodes persisted lines into contacts, preserving file order.
///
/// # Errors
/// - `StoreError::Malformed` for an undecodable line or a repeated id.
pub fn decode_contacts(lines: &[String]) -> StoreResult<Vec<Contact>> {
    let mut seen: HashSet<ContactId> = HashSet::new();
    let mut contacts = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let contact =
            Contact::from_storage_line(line).map_err(|err| StoreError::Malformed {
                line: index + 1,
                message: err.to_string(),
            })?;
        if !seen.insert(contact.id) {
            return Err(StoreError::Malformed {
                line: index + 1,
                message: format!("duplicate contact id {}", contact.id),
            });
        }
        contacts.push(contact);
    }

    Ok(contacts)
}

/// Encodes contacts into file content.
pub fn encode_contacts(contacts: &[Contact]) -> StoreResult<String> {
    let lines = contacts
        .iter()
        .map(Contact::to_storage_line)
        .collect::<Result<Vec<_>, _>>()
        .map_err(StoreError::Encode)?;
    Ok(lines.join("\n"))
}

/// Reads every persisted contact from `store`.
pub fn load_contacts(store: &FlatFileStore) -> StoreResult<Vec<Contact>> {
    let lines = store.read_all()?;
    match decode_contacts(&lines) {
        Ok(contacts) => {
            info!(
                "event=contacts_load module=store status=ok count={}",
                contacts.len()
            );
            Ok(contacts)
        }
        Err(err) => {
            error!("event=contacts_load module=store status=error error={err}");
            Err(err)
        }
    }
}

/// Replaces the persisted contacts in `store` with `contacts`.
pub fn save_contacts(store: &FlatFileStore, contacts: &[Contact]) -> StoreResult<()> {
    let content = encode_contacts(contacts)?;
    store.overwrite(&content)?;
    info!(
        "event=contacts_save module=store status=ok count={}",
        contacts.len()
    );
    Ok(())
}
