//! File ownership and permission bits
//!
//! Renders the metadata shown for file entries in directory listings.

use std::fs::Metadata;

/// Name of the user owning the file, or the numeric uid when the user
/// database has no entry for it.
#[cfg(unix)]
pub fn owner_name(meta: &Metadata) -> String {
    use log::debug;
    use nix::unistd::{Uid, User};
    use std::os::unix::fs::MetadataExt;

    let uid = meta.uid();
    match User::from_uid(Uid::from_raw(uid)) {
        Ok(Some(user)) => user.name,
        Ok(None) => uid.to_string(),
        Err(e) => {
            debug!("User lookup for uid {} failed: {}", uid, e);
            uid.to_string()
        }
    }
}

#[cfg(not(unix))]
pub fn owner_name(_meta: &Metadata) -> String {
    String::new()
}

/// Full mode word in octal, file-type bits included (`0o100644`)
#[cfg(unix)]
pub fn mode_string(meta: &Metadata) -> String {
    use std::os::unix::fs::MetadataExt;

    format!("0o{:o}", meta.mode())
}

#[cfg(not(unix))]
pub fn mode_string(meta: &Metadata) -> String {
    if meta.permissions().readonly() {
        "0o100444".to_string()
    } else {
        "0o100666".to_string()
    }
}
