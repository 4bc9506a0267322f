//=========================================================================
// Resource Paths
//=========================================================================
//
// Locates the resource directory shipped next to the executable.
//
// Layout:
//   <exe dir>/
//     ├─ prism_demo
//     └─ resources/      (name given by the locator)
//
//=========================================================================

//=== External Dependencies ===============================================

use std::path::{Path, PathBuf};

use log::{debug, warn};

//=== Operations ==========================================================

/// Directory named `locator` next to the running executable.
///
/// Returns `None`, with a warning, if the executable's location cannot be
/// determined or the directory does not exist.
pub fn resource_path(locator: &str) -> Option<PathBuf> {
    let exe = match std::env::current_exe() {
        Ok(exe) => exe,
        Err(e) => {
            warn!(target: "engine", "Cannot determine executable path: {}", e);
            return None;
        }
    };

    let Some(exe_dir) = exe.parent() else {
        warn!(target: "engine", "Executable path {} has no parent directory", exe.display());
        return None;
    };

    resource_path_in(exe_dir, locator)
}

/// Directory named `locator` inside `base`, if it exists.
pub fn resource_path_in(base: &Path, locator: &str) -> Option<PathBuf> {
    let path = base.join(locator);

    if path.is_dir() {
        debug!(target: "engine", "Resource directory: {}", path.display());
        Some(path)
    } else {
        warn!(target: "engine", "Resource directory {} does not exist", path.display());
        None
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
