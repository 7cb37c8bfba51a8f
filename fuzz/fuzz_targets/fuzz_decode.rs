#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Must never panic, whatever the input.
    let _ = zenbmp::decode_bmp(data, enough::Unstoppable);
    let _ = zenbmp::decode_bmp_rgba(data, enough::Unstoppable);

    // Parsed headers must agree with any successful decode.
    if let Ok(info) = zenbmp::BmpInfo::from_bytes(data) {
        if let Ok(decoded) = zenbmp::decode_bmp(data, enough::Unstoppable) {
            assert_eq!(decoded.width, info.width);
            assert_eq!(decoded.height, info.height);
            assert_eq!(
                decoded.pixels().len(),
                info.width as usize * info.height as usize * 4
            );
        }
    }
});
