use crate::hex_conv;

/// A checkbox/text-input control pair for editing byte-valued data.
///
/// The checkbox selects how the adjacent text is interpreted: colon
/// separated hex byte pairs, or printable ASCII. Flipping the checkbox
/// converts the text in place. A conversion that fails leaves the text
/// alone and snaps the checkbox back to the state matching it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexAsciiField {
    /// Checkbox state. `true` shows the value as ASCII text.
    pub as_ascii: bool,
    /// Contents of the paired text input.
    pub text: String,
}

impl Default for HexAsciiField {
    /// An empty value starts out in ASCII mode.
    fn default() -> Self {
        Self {
            as_ascii: true,
            text: String::new(),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConvertError {
    #[error("Remote-ID does not contain a valid hexadecimal string, cannot convert to ASCII")]
    NotHex,
    #[error("Remote-ID contains non-ASCII codes, cannot convert to ASCII")]
    NonAsciiCodes,
    #[error("Remote-ID contains non-ASCII characters, cannot convert to hexadecimal")]
    NonAsciiChars,
}

impl HexAsciiField {
    /// Initial widget state for existing data: text when every byte is
    /// printable, colon hex otherwise.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let (as_ascii, text) = hex_conv::hex_as_ascii(bytes);
        Self { as_ascii, text }
    }

    /// Apply a checkbox flip that already happened: convert the text to
    /// the newly selected format.
    ///
    /// On failure the text is untouched and the checkbox is snapped back
    /// to match it; the error is the alert to show the user.
    pub fn format_toggled(&mut self) -> Result<(), ConvertError> {
        let result = if self.as_ascii {
            hex_to_ascii(self.text.trim())
        } else {
            ascii_to_hex(self.text.trim())
        };
        match result {
            Ok(converted) => {
                self.text = converted;
                Ok(())
            }
            Err(e) => {
                self.as_ascii = !self.as_ascii;
                Err(e)
            }
        }
    }

    /// The raw bytes the field currently represents.
    pub fn bytes(&self) -> Result<Vec<u8>, ConvertError> {
        let text = self.text.trim();
        if self.as_ascii {
            if !hex_conv::all_printable(text.as_bytes()) {
                return Err(ConvertError::NonAsciiChars);
            }
            Ok(text.as_bytes().to_vec())
        } else {
            hex_conv::decode_pairs(text).ok_or(ConvertError::NotHex)
        }
    }
}

fn hex_to_ascii(hex: &str) -> Result<String, ConvertError> {
    let bytes = hex_conv::decode_pairs(hex).ok_or(ConvertError::NotHex)?;
    if !hex_conv::all_printable(&bytes) {
        return Err(ConvertError::NonAsciiCodes);
    }
    Ok(bytes.iter().map(|&b| b as char).collect())
}

fn ascii_to_hex(text: &str) -> Result<String, ConvertError> {
    // Non-ASCII characters encode to bytes outside the printable range,
    // so a bytewise check covers them too.
    if !hex_conv::all_printable(text.as_bytes()) {
        return Err(ConvertError::NonAsciiChars);
    }
    Ok(hex_conv::encode_colons(text.as_bytes()))
}

#[cfg(test)]
fn toggled(field: &HexAsciiField) -> (HexAsciiField, Result<(), ConvertError>) {
    // What the widget does: flip the checkbox, then convert
    let mut field = field.clone();
    field.as_ascii = !field.as_ascii;
    let result = field.format_toggled();
    (field, result)
}

#[test]
fn test_hex_to_ascii_and_back() {
    let hex = HexAsciiField {
        as_ascii: false,
        text: "41:42:43".into(),
    };
    let (ascii, result) = toggled(&hex);
    assert_eq!(result, Ok(()));
    assert_eq!(
        ascii,
        HexAsciiField {
            as_ascii: true,
            text: "ABC".into(),
        }
    );
    let (back, result) = toggled(&ascii);
    assert_eq!(result, Ok(()));
    assert_eq!(back, hex);
}

#[test]
fn test_ascii_to_hex_and_back() {
    let ascii = HexAsciiField {
        as_ascii: true,
        text: "switch-12 (lab)".into(),
    };
    let (hex, result) = toggled(&ascii);
    assert_eq!(result, Ok(()));
    let (back, result) = toggled(&hex);
    assert_eq!(result, Ok(()));
    assert_eq!(back, ascii);
}

#[test]
fn test_malformed_hex_reverts() {
    let field = HexAsciiField {
        as_ascii: false,
        text: "ZZ".into(),
    };
    let (after, result) = toggled(&field);
    assert_eq!(result, Err(ConvertError::NotHex));
    // Value untouched, checkbox snapped back
    assert_eq!(after, field);
}

#[test]
fn test_unprintable_code_reverts() {
    let field = HexAsciiField {
        as_ascii: false,
        text: "80".into(),
    };
    let (after, result) = toggled(&field);
    assert_eq!(result, Err(ConvertError::NonAsciiCodes));
    assert_eq!(after, field);
}

#[test]
fn test_unprintable_char_reverts() {
    let field = HexAsciiField {
        as_ascii: true,
        text: "a\tb".into(),
    };
    let (after, result) = toggled(&field);
    assert_eq!(result, Err(ConvertError::NonAsciiChars));
    assert_eq!(after, field);
}

#[test]
fn test_empty_both_directions() {
    let empty_ascii = HexAsciiField::default();
    let (hex, result) = toggled(&empty_ascii);
    assert_eq!(result, Ok(()));
    assert_eq!(
        hex,
        HexAsciiField {
            as_ascii: false,
            text: String::new(),
        }
    );
    let (back, result) = toggled(&hex);
    assert_eq!(result, Ok(()));
    assert_eq!(back, empty_ascii);
}

#[test]
fn test_whitespace_only_becomes_empty() {
    let field = HexAsciiField {
        as_ascii: false,
        text: "   ".into(),
    };
    let (after, result) = toggled(&field);
    assert_eq!(result, Ok(()));
    assert!(after.as_ascii);
    assert_eq!(after.text, "");
}

#[test]
fn test_surrounding_whitespace_trimmed() {
    let field = HexAsciiField {
        as_ascii: false,
        text: " 41:42:43 ".into(),
    };
    let (after, result) = toggled(&field);
    assert_eq!(result, Ok(()));
    assert_eq!(after.text, "ABC");
}

#[test]
fn test_from_bytes() {
    assert_eq!(
        HexAsciiField::from_bytes(b"port-7"),
        HexAsciiField {
            as_ascii: true,
            text: "port-7".into(),
        }
    );
    assert_eq!(
        HexAsciiField::from_bytes(&[0x80, 0x41]),
        HexAsciiField {
            as_ascii: false,
            text: "80:41".into(),
        }
    );
    assert_eq!(HexAsciiField::from_bytes(&[]), HexAsciiField::default());
}

#[test]
fn test_bytes() {
    let ascii = HexAsciiField {
        as_ascii: true,
        text: "AB".into(),
    };
    assert_eq!(ascii.bytes(), Ok(vec![0x41, 0x42]));
    let hex = HexAsciiField {
        as_ascii: false,
        text: "41:42".into(),
    };
    assert_eq!(hex.bytes(), Ok(vec![0x41, 0x42]));
    let bad = HexAsciiField {
        as_ascii: false,
        text: "nope".into(),
    };
    assert_eq!(bad.bytes(), Err(ConvertError::NotHex));
}
