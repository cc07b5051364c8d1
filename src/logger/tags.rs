/// Log tags identify the subsystem a message originates from
///
/// Each tag maps to a `--debug-<key>` command-line flag that enables
/// DEBUG-level output for that subsystem only.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogTag {
    System,
    Api,
    Wallet,
    Token,
    Config,
    Display,
}

impl LogTag {
    /// Key used in `--debug-<key>` flags and the enabled-tags set
    pub fn to_debug_key(&self) -> &'static str {
        match self {
            LogTag::System => "system",
            LogTag::Api => "api",
            LogTag::Wallet => "wallet",
            LogTag::Token => "token",
            LogTag::Config => "config",
            LogTag::Display => "display",
        }
    }

    /// Uncolored tag text for file output
    pub fn to_plain_string(&self) -> &'static str {
        match self {
            LogTag::System => "SYSTEM",
            LogTag::Api => "API",
            LogTag::Wallet => "WALLET",
            LogTag::Token => "TOKEN",
            LogTag::Config => "CONFIG",
            LogTag::Display => "DISPLAY",
        }
    }

    /// All tags, for flag parsing
    pub fn all() -> &'static [LogTag] {
        &[
            LogTag::System,
            LogTag::Api,
            LogTag::Wallet,
            LogTag::Token,
            LogTag::Config,
            LogTag::Display,
        ]
    }
}
