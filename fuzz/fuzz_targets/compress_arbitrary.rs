#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let stream = match gbalz77::compress_to_vec(data) {
        Ok(s) => s,
        // Only inputs above the 24-bit size field are rejected.
        Err(_) => {
            assert!(data.len() > gbalz77::LZ77_MAX_INPUT_SIZE);
            return;
        }
    };

    assert!(stream.len() <= gbalz77::compress_bound(data.len()));
    assert_eq!(stream.len() % 4, 0);

    let header = u32::from_le_bytes([stream[0], stream[1], stream[2], stream[3]]);
    assert!(gbalz77::block::is_lz77_header(header));
    assert_eq!(gbalz77::block::decoded_len(header), data.len());

    // A destination one byte short of the result must be refused.
    let mut short = vec![0u8; stream.len() - 1];
    assert_eq!(
        gbalz77::compress(data, &mut short),
        Err(gbalz77::Lz77Error::OutputExhausted)
    );
});
