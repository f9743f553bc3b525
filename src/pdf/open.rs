use std::path::Path;
use std::process::Command;

use crate::error::Result;

/// Open a file with a declared handler command, or fall back to the
/// platform default opener.
pub fn open_file(path: &Path, handler: Option<&str>) -> Result<()> {
    if let Some(command) = handler {
        Command::new(command).arg(path).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "macos")]
    {
        Command::new("open").arg(path).spawn()?;
    }

    #[cfg(target_os = "linux")]
    {
        Command::new("xdg-open").arg(path).spawn()?;
    }

    #[cfg(target_os = "windows")]
    {
        Command::new("cmd")
            .args(["/C", "start", "", path.to_str().unwrap_or("")])
            .spawn()?;
    }

    Ok(())
}
