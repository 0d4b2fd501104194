/// Builds a saved-program image: header byte, one record per line with a
/// nonzero dummy next-line address, the zero end pair, and the 0x1A
/// padding byte SAVE writes after it.
pub fn program(lines: &[(u16, &[u8])]) -> Vec<u8> {
    let mut bytes = vec![0xFF];
    for &(number, content) in lines {
        bytes.push(0x30);
        bytes.push(0x08);
        bytes.push((number & 0xFF) as u8);
        bytes.push((number >> 8) as u8);
        bytes.extend_from_slice(content);
        bytes.push(0x00);
    }
    bytes.extend_from_slice(&[0x00, 0x00, 0x1A]);
    bytes
}
