use crate::hex_conv;

/// Remote-ID type value of the Cisco Ethernet Remote-ID.
pub const CISCO_ETHERNET_REMOTE_ID: u16 = 2;

/// Longest DUID accepted from user input.
pub const MAX_DUID_LEN: usize = 256;

/// Opaque DHCP Unique Identifier payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Duid(Vec<u8>);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DuidError {
    #[error("Value is not a valid hex-string: {0}")]
    Hex(#[from] hex_conv::NormaliseError),
    #[error("DUID too long ({0} bytes, max {MAX_DUID_LEN})")]
    TooLong(usize),
}

impl Duid {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Parse user-entered hex; colons and whitespace are tolerated.
    pub fn from_hex(s: &str) -> Result<Self, DuidError> {
        let bytes = hex_conv::parse_relaxed(s)?;
        if bytes.len() > MAX_DUID_LEN {
            return Err(DuidError::TooLong(bytes.len()));
        }
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Duid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&hex_conv::encode_colons(&self.0))
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RemoteIdError {
    #[error("Cisco Remote-ID too short")]
    Truncated,
    #[error("Cisco Remote-ID length incorrect")]
    LengthMismatch,
    #[error("buffer does not contain Cisco Ethernet Remote-ID data (type {0})")]
    WrongType(u16),
}

/// A decoded Remote-ID option payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteId {
    Ethernet(EthernetRemoteId),
    /// Types we don't know how to decode round-trip as raw payload.
    Unknown { remote_id_type: u16, data: Vec<u8> },
}

impl RemoteId {
    /// Decode a Remote-ID payload, dispatching on the type field.
    ///
    /// The type field is little-endian (a quirk of the format); everything
    /// after it is big-endian.
    pub fn decode(buf: &[u8]) -> Result<Self, RemoteIdError> {
        let remote_id_type = read_u16_le(buf, 0)?;
        match remote_id_type {
            CISCO_ETHERNET_REMOTE_ID => Ok(Self::Ethernet(EthernetRemoteId::decode(buf)?)),
            _ => Ok(Self::Unknown {
                remote_id_type,
                data: buf[2..].to_vec(),
            }),
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::Ethernet(eth) => eth.encode(),
            Self::Unknown {
                remote_id_type,
                data,
            } => {
                let mut out = remote_id_type.to_le_bytes().to_vec();
                out.extend_from_slice(data);
                out
            }
        }
    }
}

/// The Cisco Ethernet Remote-ID (type 2).
///
/// The two bytes after the type field interleave the interface numbering:
/// the first carries the low slot nibble, the low module bit and the low
/// three port bits, the second the high slot nibble, the second module bit
/// and the high three port bits. A big-endian VLAN, a big-endian DUID
/// length and the DUID bytes follow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EthernetRemoteId {
    pub slot: u8,
    pub module: u8,
    pub port: u8,
    pub vlan: u16,
    pub duid: Duid,
}

impl EthernetRemoteId {
    pub fn decode(buf: &[u8]) -> Result<Self, RemoteIdError> {
        let remote_id_type = read_u16_le(buf, 0)?;
        if remote_id_type != CISCO_ETHERNET_REMOTE_ID {
            return Err(RemoteIdError::WrongType(remote_id_type));
        }
        let lower = *buf.get(2).ok_or(RemoteIdError::Truncated)?;
        let higher = *buf.get(3).ok_or(RemoteIdError::Truncated)?;
        let slot = (higher & 0b1111_0000) | ((lower & 0b1111_0000) >> 4);
        let module = ((higher & 0b0000_1000) >> 2) | ((lower & 0b0000_1000) >> 3);
        let port = ((higher & 0b0000_0111) << 3) | (lower & 0b0000_0111);
        let vlan = read_u16_be(buf, 4)?;
        let duid_len = usize::from(read_u16_be(buf, 6)?);
        if buf.len() != 8 + duid_len {
            return Err(RemoteIdError::LengthMismatch);
        }
        Ok(Self {
            slot,
            module,
            port,
            vlan,
            duid: Duid::new(buf[8..].to_vec()),
        })
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut lower = 0u8;
        let mut higher = 0u8;
        lower |= (self.slot & 0b0000_1111) << 4;
        higher |= self.slot & 0b1111_0000;
        lower |= (self.module & 0b0000_0001) << 3;
        higher |= (self.module & 0b0000_0010) << 2;
        lower |= self.port & 0b0000_0111;
        higher |= (self.port & 0b0011_1000) >> 3;
        let mut out = Vec::with_capacity(8 + self.duid.len());
        out.extend_from_slice(&CISCO_ETHERNET_REMOTE_ID.to_le_bytes());
        out.push(lower);
        out.push(higher);
        out.extend_from_slice(&self.vlan.to_be_bytes());
        // The wire length field is 16 bits
        let duid_len = u16::try_from(self.duid.len()).unwrap_or(u16::MAX);
        out.extend_from_slice(&duid_len.to_be_bytes());
        out.extend_from_slice(self.duid.as_bytes());
        out
    }

    /// Cisco-style interface label: `FaX/Y` where Y folds module and port
    /// together.
    pub fn interface_label(&self) -> String {
        format!("Fa{}/{}", self.slot, self.module * 8 + self.port)
    }
}

fn read_u16_le(buf: &[u8], offset: usize) -> Result<u16, RemoteIdError> {
    match buf.get(offset..offset + 2) {
        Some(&[a, b]) => Ok(u16::from_le_bytes([a, b])),
        _ => Err(RemoteIdError::Truncated),
    }
}

fn read_u16_be(buf: &[u8], offset: usize) -> Result<u16, RemoteIdError> {
    match buf.get(offset..offset + 2) {
        Some(&[a, b]) => Ok(u16::from_be_bytes([a, b])),
        _ => Err(RemoteIdError::Truncated),
    }
}

#[cfg(test)]
fn hx(s: &str) -> Vec<u8> {
    hex_conv::parse_relaxed(s).expect("valid hex")
}

#[test]
fn test_decode_reference_vector() {
    // A real remote-id captured on FastEthernet2/3
    let bytes = hx("020023000200000a00030001c47d4f73a0bf");
    let decoded = RemoteId::decode(&bytes);
    assert_eq!(
        decoded,
        Ok(RemoteId::Ethernet(EthernetRemoteId {
            slot: 2,
            module: 0,
            port: 3,
            vlan: 0x0200,
            duid: Duid::new(hx("00030001c47d4f73a0bf")),
        }))
    );
    let Ok(RemoteId::Ethernet(eth)) = decoded else {
        return;
    };
    assert_eq!(eth.interface_label(), "Fa2/3");
    assert_eq!(eth.encode(), bytes);
}

#[test]
fn test_interface_word_table() {
    // Interface words and the ports they were captured on
    let table = [
        ("2300", "Fa2/3"),
        ("2a00", "Fa2/10"),
        ("2b00", "Fa2/11"),
        ("2f00", "Fa2/15"),
        ("2008", "Fa2/16"),
        ("2108", "Fa2/17"),
        ("2208", "Fa2/18"),
        ("2f08", "Fa2/31"),
        ("2809", "Fa2/32"),
        ("2d09", "Fa2/37"),
        ("2f09", "Fa2/39"),
        ("280a", "Fa2/40"),
    ];
    for (word, label) in table {
        let bytes = hx(&format!("0200{word}00000000"));
        let eth = EthernetRemoteId::decode(&bytes).expect("valid remote-id");
        assert_eq!(eth.interface_label(), label, "word {word}");
        assert_eq!(eth.encode(), bytes, "word {word}");
    }
}

#[test]
fn test_length_mismatch() {
    // Claims a 5 byte DUID but carries 2
    let bytes = hx("020023000200 0005 4142");
    assert_eq!(
        EthernetRemoteId::decode(&bytes),
        Err(RemoteIdError::LengthMismatch)
    );
}

#[test]
fn test_truncated() {
    assert_eq!(RemoteId::decode(&[0x02]), Err(RemoteIdError::Truncated));
    assert_eq!(
        EthernetRemoteId::decode(&hx("020023")),
        Err(RemoteIdError::Truncated)
    );
}

#[test]
fn test_unknown_type_roundtrip() {
    let bytes = hx("0600deadbeef");
    let decoded = RemoteId::decode(&bytes);
    assert_eq!(
        decoded,
        Ok(RemoteId::Unknown {
            remote_id_type: 6,
            data: hx("deadbeef"),
        })
    );
    assert_eq!(
        decoded.expect("decoded above").encode(),
        bytes
    );
}

#[test]
fn test_wrong_type_for_ethernet() {
    assert_eq!(
        EthernetRemoteId::decode(&hx("060000000000")),
        Err(RemoteIdError::WrongType(6))
    );
}

#[test]
fn test_duid_from_hex() {
    assert_eq!(
        Duid::from_hex("00:03:00:01"),
        Ok(Duid::new(vec![0, 3, 0, 1]))
    );
    assert_eq!(
        Duid::from_hex("0003 0001").map(|d| d.to_string()),
        Ok("00:03:00:01".into())
    );
    assert!(matches!(
        Duid::from_hex("xyz"),
        Err(DuidError::Hex(_))
    ));
    assert_eq!(
        Duid::from_hex(&"00".repeat(MAX_DUID_LEN + 1)),
        Err(DuidError::TooLong(MAX_DUID_LEN + 1))
    );
}
