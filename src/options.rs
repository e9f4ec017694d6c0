//! Type-safe names for the options `setup-alpine` recognizes
//!
//! This module replaces stringly-typed option names with a proper Rust enum
//! that provides exhaustive matching and iteration over the closed known set.
//! Values stay opaque strings: their embedded flag syntax (`-n hostname`,
//! `-c openssh`) is meaningful only to the installer, never to this crate.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// The closed set of answer-file keys the target installer acts on.
///
/// A key missing from the document means "let the installer ask
/// interactively for that step"; an option may be legitimately commented out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "UPPERCASE")]
pub enum InstallerOption {
    /// Keyboard layout and variant, e.g. `us us`
    Keymapopts,
    /// Hostname flags, e.g. `-n alpine-install`
    Hostnameopts,
    /// Full /etc/network/interfaces contents (multi-line stanza)
    Interfacesopts,
    /// DNS search domain and nameservers, e.g. `-d example.com 1.1.1.1`
    Dnsopts,
    /// Timezone flags, e.g. `-z UTC`
    Timezoneopts,
    /// HTTP/FTP proxy URL, or `none`
    Proxyopts,
    /// APK mirror selection, e.g. `-1` for the first mirror or `-r` for random
    Apkreposopts,
    /// SSH server choice, e.g. `-c openssh`
    Sshdopts,
    /// NTP client choice, e.g. `-c chrony`
    Ntpopts,
    /// Target disk and install mode, e.g. `-m sys /dev/sda`
    Diskopts,
    /// Root filesystem type for sys installs, e.g. `ext4`
    Rootfs,
}

impl InstallerOption {
    /// One-line description of what the installer does with this option
    pub fn purpose(&self) -> &'static str {
        match self {
            Self::Keymapopts => "keyboard layout and variant",
            Self::Hostnameopts => "system hostname",
            Self::Interfacesopts => "network interface configuration (/etc/network/interfaces)",
            Self::Dnsopts => "DNS search domain and nameservers",
            Self::Timezoneopts => "timezone",
            Self::Proxyopts => "HTTP/FTP proxy, or 'none'",
            Self::Apkreposopts => "APK package mirror selection",
            Self::Sshdopts => "SSH server to install",
            Self::Ntpopts => "NTP client to install",
            Self::Diskopts => "target disk and install mode",
            Self::Rootfs => "root filesystem type",
        }
    }

    /// Example value matching the upstream setup-alpine sample answer file
    pub fn example_value(&self) -> &'static str {
        match self {
            Self::Keymapopts => "us us",
            Self::Hostnameopts => "-n alpine-install",
            Self::Interfacesopts => {
                "auto lo\niface lo inet loopback\n\nauto eth0\niface eth0 inet dhcp\n    hostname alpine-install\n"
            }
            Self::Dnsopts => "-d example.com 1.1.1.1",
            Self::Timezoneopts => "-z UTC",
            Self::Proxyopts => "none",
            Self::Apkreposopts => "-1",
            Self::Sshdopts => "-c openssh",
            Self::Ntpopts => "-c chrony",
            Self::Diskopts => "-m sys /dev/sda",
            Self::Rootfs => "ext4",
        }
    }
}

/// Non-fatal findings from validating a parsed answer file.
///
/// Unknown keys are surfaced as warnings rather than errors so answer files
/// written for a newer installer keep loading; silently dropping them would
/// mask operator typos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Warning {
    /// A key outside the closed set known to the target installer
    UnknownOption { key: String, line: usize },
    /// A key assigned more than once; the last assignment wins
    DuplicateOption { key: String, line: usize },
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownOption { key, line } => {
                write!(f, "line {line}: unknown option {key} (not acted on by the installer)")
            }
            Self::DuplicateOption { key, line } => {
                write!(f, "line {line}: duplicate option {key} (last assignment wins)")
            }
        }
    }
}
