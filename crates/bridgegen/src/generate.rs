use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::{BridgeGenConfig, Error, Result, parse_interface, render};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFiles {
    pub bridge_name: String,
    pub header:      PathBuf,
    pub source:      PathBuf,
}

/// Reads `header_path`, renders its bridge and writes `<Bridge>.h` and
/// `<Bridge>.cpp`, overwriting any previous output.
pub fn generate_files(header_path: &Path, config: &BridgeGenConfig) -> Result<GeneratedFiles> {
    let header_name = header_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or(Error::InvalidHeaderPath)?;
    let out_dir = match &config.output_dir {
        Some(dir) => dir.clone(),
        None => header_path
            .parent()
            .map(Path::to_path_buf)
            .ok_or(Error::InvalidHeaderPath)?,
    };

    let text = fs::read_to_string(header_path)?;
    let iface = parse_interface(&text)?;
    let bridge = render(&iface, &config.render_options(header_name))?;

    if !out_dir.as_os_str().is_empty() {
        fs::create_dir_all(&out_dir)?;
    }
    let header = out_dir.join(format!("{}.h", bridge.name));
    let source = out_dir.join(format!("{}.cpp", bridge.name));
    fs::write(&header, &bridge.header)?;
    fs::write(&source, &bridge.source)?;

    info!(interface = %iface.name, bridge = %bridge.name, dir = %out_dir.display(), "bridge written");

    Ok(GeneratedFiles {
        bridge_name: bridge.name,
        header,
        source,
    })
}
