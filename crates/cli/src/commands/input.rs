use anyhow::Context;
use std::io::Read;
use std::path::PathBuf;

/// Where the datagram comes from and how it is spelled.
#[derive(Debug, Default)]
pub struct Input {
    pub hex: Option<String>,
    pub file: Option<PathBuf>,
    pub binary: bool,
}

impl Input {
    pub fn read(&self) -> anyhow::Result<Vec<u8>> {
        if let Some(hex) = &self.hex {
            return parse_hex(hex);
        }

        let raw = match &self.file {
            Some(path) => std::fs::read(path)
                .with_context(|| format!("Failed to read {}", path.display()))?,
            None => {
                let mut buf = Vec::new();
                std::io::stdin()
                    .read_to_end(&mut buf)
                    .context("Failed to read stdin")?;
                buf
            }
        };

        if self.binary {
            return Ok(raw);
        }
        let text = std::str::from_utf8(&raw).context("Hex input is not valid UTF-8")?;
        parse_hex(text)
    }
}

/// Hex with arbitrary whitespace, as dumped by packet captures.
pub fn parse_hex(text: &str) -> anyhow::Result<Vec<u8>> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let compact = compact
        .strip_prefix("0x")
        .or_else(|| compact.strip_prefix("0X"))
        .unwrap_or(compact.as_str());
    hex::decode(compact).context("Input is not valid hex")
}
