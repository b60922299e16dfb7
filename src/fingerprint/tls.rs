//! TLS fingerprint configuration (JA3).
//!
//! A TLS fragment is the JA3 string of a ClientHello:
//! `record_version,ciphers,extensions,groups,point_formats`, with each list
//! joined by `-`.

use md5::{Digest, Md5};

use super::extensions::is_grease;
use crate::error::{Error, Result};

/// TLS 1.2 record version, as sent by every bundled browser.
pub const TLS_1_2: u16 = 0x0303;

/// TLS 1.3 version code.
pub const TLS_1_3: u16 = 0x0304;

/// IANA cipher suite ids with their BoringSSL names.
const CIPHER_NAMES: &[(u16, &str)] = &[
    (4865, "TLS_AES_128_GCM_SHA256"),
    (4866, "TLS_AES_256_GCM_SHA384"),
    (4867, "TLS_CHACHA20_POLY1305_SHA256"),
    (49195, "TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256"),
    (49199, "TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256"),
    (49196, "TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384"),
    (49200, "TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384"),
    (52393, "TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305_SHA256"),
    (52392, "TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256"),
    (49161, "TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA"),
    (49162, "TLS_ECDHE_ECDSA_WITH_AES_256_CBC_SHA"),
    (49171, "TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA"),
    (49172, "TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA"),
    (49187, "TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA256"),
    (49188, "TLS_ECDHE_ECDSA_WITH_AES_256_CBC_SHA384"),
    (49191, "TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA256"),
    (49192, "TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA384"),
    (49160, "TLS_ECDHE_ECDSA_WITH_3DES_EDE_CBC_SHA"),
    (49170, "TLS_ECDHE_RSA_WITH_3DES_EDE_CBC_SHA"),
    (156, "TLS_RSA_WITH_AES_128_GCM_SHA256"),
    (157, "TLS_RSA_WITH_AES_256_GCM_SHA384"),
    (60, "TLS_RSA_WITH_AES_128_CBC_SHA256"),
    (61, "TLS_RSA_WITH_AES_256_CBC_SHA256"),
    (47, "TLS_RSA_WITH_AES_128_CBC_SHA"),
    (53, "TLS_RSA_WITH_AES_256_CBC_SHA"),
    (51, "TLS_DHE_RSA_WITH_AES_128_CBC_SHA"),
    (57, "TLS_DHE_RSA_WITH_AES_256_CBC_SHA"),
    (10, "TLS_RSA_WITH_3DES_EDE_CBC_SHA"),
];

/// Named groups with their BoringSSL curve names.
const GROUP_NAMES: &[(u16, &str)] = &[
    (4588, "X25519MLKEM768"),
    (29, "x25519"),
    (23, "P-256"),
    (24, "P-384"),
    (25, "P-521"),
    (30, "x448"),
    (256, "ffdhe2048"),
    (257, "ffdhe3072"),
];

/// TLS fingerprint: ClientHello fields in wire order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlsFingerprint {
    /// Record-layer version (771 for TLS 1.2 records).
    pub record_version: u16,
    /// Cipher suites in order.
    pub ciphers: Vec<u16>,
    /// Extension ids in order.
    pub extensions: Vec<u16>,
    /// Supported groups in order.
    pub groups: Vec<u16>,
    /// EC point formats.
    pub point_formats: Vec<u8>,
}

impl Default for TlsFingerprint {
    fn default() -> Self {
        Self {
            record_version: TLS_1_2,
            ciphers: vec![],
            extensions: vec![],
            groups: vec![],
            point_formats: vec![0],
        }
    }
}

impl TlsFingerprint {
    /// Parse a JA3 string.
    pub fn parse(ja3: &str) -> Result<Self> {
        let fields: Vec<&str> = ja3.trim().split(',').collect();
        if fields.len() != 5 {
            return Err(Error::invalid_ja3(format!(
                "expected 5 comma-separated fields, found {} in '{}'",
                fields.len(),
                ja3
            )));
        }

        let record_version = fields[0]
            .trim()
            .parse::<u16>()
            .map_err(|_| Error::invalid_ja3(format!("bad record version '{}'", fields[0])))?;

        Ok(Self {
            record_version,
            ciphers: parse_id_list(fields[1], "cipher")?,
            extensions: parse_id_list(fields[2], "extension")?,
            groups: parse_id_list(fields[3], "group")?,
            point_formats: parse_id_list(fields[4], "point format")?,
        })
    }

    /// Render as a JA3 string. GREASE values are omitted, as JA3 defines.
    pub fn ja3_string(&self) -> String {
        format!(
            "{},{},{},{},{}",
            self.record_version,
            join_ids(&self.ciphers),
            join_ids(&self.extensions),
            join_ids(&self.groups),
            join_ids(&self.point_formats),
        )
    }

    /// Lowercase hex MD5 of [`ja3_string`](Self::ja3_string).
    pub fn ja3_hash(&self) -> String {
        ja3_hash(&self.ja3_string())
    }

    /// Cipher suite names for the TLS layer, in order.
    pub fn cipher_names(&self) -> Vec<&'static str> {
        names_for(&self.ciphers, CIPHER_NAMES, "cipher")
    }

    /// Group/curve names for the TLS layer, in order.
    pub fn group_names(&self) -> Vec<&'static str> {
        names_for(&self.groups, GROUP_NAMES, "group")
    }

    /// Whether the fingerprint carries GREASE values.
    pub fn has_grease(&self) -> bool {
        self.ciphers
            .iter()
            .chain(&self.extensions)
            .chain(&self.groups)
            .any(|&id| is_grease(id))
    }
}

/// Lowercase hex MD5 of a JA3 string.
pub fn ja3_hash(ja3: &str) -> String {
    hex::encode(Md5::digest(ja3.as_bytes()))
}

fn parse_id_list<T: std::str::FromStr>(field: &str, what: &str) -> Result<Vec<T>> {
    let field = field.trim();
    if field.is_empty() {
        return Ok(Vec::new());
    }
    field
        .split('-')
        .map(|id| {
            id.trim()
                .parse::<T>()
                .map_err(|_| Error::invalid_ja3(format!("bad {} id '{}'", what, id)))
        })
        .collect()
}

fn join_ids<T: Copy + Into<u16> + ToString>(ids: &[T]) -> String {
    ids.iter()
        .filter(|&&id| !is_grease(id.into()))
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("-")
}

fn names_for(ids: &[u16], table: &[(u16, &'static str)], what: &str) -> Vec<&'static str> {
    ids.iter()
        .filter_map(|&id| {
            let name = table.iter().find(|(i, _)| *i == id).map(|&(_, n)| n);
            if name.is_none() && !is_grease(id) {
                tracing::debug!(id, kind = what, "no TLS library name for id, skipping");
            }
            name
        })
        .collect()
}
