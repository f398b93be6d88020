use crate::error::{Error, Result};
use bitflags::bitflags;

bitflags! {
    /// Filesystem attribute bits, using the conventional attribute values.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct AttributeFlags: u32 {
        const READ_ONLY           = 0x0001;
        const HIDDEN              = 0x0002;
        const SYSTEM              = 0x0004;
        const DIRECTORY           = 0x0010;
        const ARCHIVE             = 0x0020;
        const DEVICE              = 0x0040;
        const NORMAL              = 0x0080;
        const TEMPORARY           = 0x0100;
        const SPARSE_FILE         = 0x0200;
        const REPARSE_POINT       = 0x0400;
        const COMPRESSED          = 0x0800;
        const OFFLINE             = 0x1000;
        const NOT_CONTENT_INDEXED = 0x2000;
        const ENCRYPTED           = 0x4000;
    }
}

impl AttributeFlags {
    /// Parses a comma-separated list of flag names such as `read-only,hidden`.
    ///
    /// Names are case-insensitive and accept `-` or `_` as word separators.
    /// An empty list yields no flags.
    pub fn parse_list(list: &str) -> Result<Self> {
        list.split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .try_fold(AttributeFlags::empty(), |acc, name| {
                let canonical = name.to_ascii_uppercase().replace('-', "_");
                AttributeFlags::from_name(&canonical)
                    .map(|flag| acc | flag)
                    .ok_or_else(|| {
                        Error::ValidationError(format!("unknown attribute '{name}'"))
                    })
            })
    }
}
