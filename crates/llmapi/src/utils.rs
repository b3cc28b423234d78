use base64::Engine as _;

pub fn encode_bytes_to_base64(bytes: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_standard_alphabet_with_padding() {
        assert_eq!(encode_bytes_to_base64(b""), "");
        assert_eq!(encode_bytes_to_base64(b"\xff\xfe"), "//4=");
    }
}
