use std::path::Path;
use crate::errors::DashboardResult;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrCode {
    pub content_type: String,
    pub data: Vec<u8>,
}

impl QrCode {
    pub fn new(content_type: Option<&str>, data: Vec<u8>) -> Self {
        Self {
            content_type: content_type.unwrap_or("image/png").to_string(),
            data,
        }
    }

    pub fn is_png(&self) -> bool {
        self.data.starts_with(&PNG_SIGNATURE)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn write_to(&self, path: &Path) -> DashboardResult<()> {
        std::fs::write(path, &self.data)?;
        Ok(())
    }
}
