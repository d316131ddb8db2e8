//! Default location of the managed upstream file

use crate::{Error, NormalizedPath, Result};

/// Directory under the home directory holding the managed file.
pub const CONFIG_DIR: &str = "nginx-upstream-editor";

/// File name of the managed upstream include.
pub const CONFIG_FILE: &str = "upstream.conf";

/// Resolve the default config file path:
/// `<home>/nginx-upstream-editor/upstream.conf`.
pub fn default_config_path() -> Result<NormalizedPath> {
    let home = dirs::home_dir().ok_or(Error::HomeNotFound)?;
    Ok(NormalizedPath::new(home).join(CONFIG_DIR).join(CONFIG_FILE))
}
